//! repolens - Entry Point

use clap::Parser;
use repolens::config::{
    apply_cli_overrides, apply_env_overrides, load_config_with_precedence, merge_config,
    CliOverrides, ResolvedConfig,
};
use repolens::i18n::Locale;
use repolens::model::{AppError, CountRange, QueryState, SortKey, SortOrder};
use repolens::query::QueryEngine;
use repolens::state::AppState;
use repolens::view::ColorConfig;
use std::path::PathBuf;
use tracing::info;

/// repolens - browse a directory of MIT-licensed GitHub repositories
#[derive(Parser, Debug)]
#[command(name = "repolens")]
#[command(version)]
#[command(about = "Terminal browser for a static directory of MIT-licensed GitHub repositories")]
pub struct Args {
    /// Repository dataset (JSON array); uses the built-in list if omitted
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with this search query committed
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only show repositories in this language (exact match)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Sort field: stars, forks, created_at, updated_at
    #[arg(long)]
    pub sort: Option<SortKey>,

    /// Sort direction: asc or desc
    #[arg(long)]
    pub order: Option<SortOrder>,

    /// Display language: en or zh
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Minimum star count (inclusive)
    #[arg(long)]
    pub min_stars: Option<u64>,

    /// Maximum star count (inclusive)
    #[arg(long)]
    pub max_stars: Option<u64>,

    /// Minimum fork count (inclusive)
    #[arg(long)]
    pub min_forks: Option<u64>,

    /// Maximum fork count (inclusive)
    #[arg(long)]
    pub max_forks: Option<u64>,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Print the resulting list to stdout and exit instead of opening the UI
    #[arg(long)]
    pub list: bool,
}

impl Args {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            locale: self.locale,
            sort_by: self.sort,
            sort_order: self.order,
            language: self.language.clone(),
            data_path: self.data.clone(),
            log_file_path: self.log_file.clone(),
            // Only override when the flag was explicitly set
            no_color: self.no_color.then_some(true),
        }
    }
}

/// Initial query from resolved config plus the flags that have no config key.
fn initial_query(args: &Args, config: &ResolvedConfig) -> QueryState {
    QueryState::default()
        .with_search(args.search.clone().unwrap_or_default())
        .with_language(config.language.clone())
        .sorted_by(config.sort_by, config.sort_order)
        .with_stars(CountRange::new(args.min_stars, args.max_stars))
        .with_forks(CountRange::new(args.min_forks, args.max_forks))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = load_config_with_precedence(args.config.clone())?;
        let merged = merge_config(config_file);
        let with_env = apply_env_overrides(merged)?;
        apply_cli_overrides(with_env, args.cli_overrides())
    };

    repolens::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let records = repolens::dataset::load(config.data_path.as_deref())?;
    let engine = QueryEngine::new(records);
    let query = initial_query(&args, &config);

    if args.list {
        let stdout = std::io::stdout();
        repolens::view::listing::write_listing(&mut stdout.lock(), engine.view(&query))?;
        return Ok(());
    }

    let app_state = AppState::new(engine, query, config.locale);
    repolens::view::run(app_state, ColorConfig::from_env_and_args(config.no_color))?;

    Ok(())
}
