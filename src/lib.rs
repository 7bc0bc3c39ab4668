//! repolens
//!
//! Terminal browser for a static dataset of repository metadata: filter by
//! free-text search and language, sort by stars, forks or dates, and switch
//! every label between English and Chinese.
//!
//! Pure Core / Impure Shell: `model`, `query`, `i18n` and `state` are pure
//! and testable without a terminal; `view` owns the terminal, `dataset`,
//! `config` and `logging` own the remaining I/O.

pub mod config;
pub mod dataset;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod query;
pub mod state;
pub mod view;
