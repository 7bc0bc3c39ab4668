//! Query engine benchmarks over a synthetic 1000-record directory.
//!
//! Every key press that changes the query recomputes the whole view, so a
//! full filter + sort pass has to stay well under a frame.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use repolens::model::{QueryState, Repository, SortKey, SortOrder, Timestamp};
use repolens::query::{highlight, QueryEngine};

const LANGUAGES: [&str; 6] = ["Rust", "Go", "TypeScript", "Python", "C", "Zig"];

/// Generate `count` records with varied languages, counts and dates.
fn generate_records(count: usize) -> Vec<Repository> {
    (0..count)
        .map(|i| Repository {
            name: format!("project-{:04}", i),
            description: (i % 7 != 0).then(|| {
                format!(
                    "A {} library for building fast cache layers and web servers, number {}",
                    LANGUAGES[i % LANGUAGES.len()],
                    i
                )
            }),
            language: (i % 11 != 0).then(|| LANGUAGES[i % LANGUAGES.len()].to_string()),
            stars: ((i * 7919) % 200_000) as u64,
            forks: ((i * 104_729) % 50_000) as u64,
            created_at: Timestamp::parse(format!(
                "{}-{:02}-{:02}T00:00:00Z",
                2008 + i % 17,
                1 + i % 12,
                1 + i % 28
            )),
            updated_at: Timestamp::parse(format!("2025-02-{:02}T12:00:00Z", 1 + i % 28)),
            url: format!("https://github.com/example/project-{:04}", i),
        })
        .collect()
}

fn benchmark_view(c: &mut Criterion) {
    let engine = QueryEngine::new(generate_records(1_000));
    println!(
        "Benchmark dataset: {} records, {} languages",
        engine.len(),
        engine.languages().len()
    );

    c.bench_function("view_default_sort", |b| {
        let query = QueryState::default();
        b.iter(|| black_box(engine.view_indices(black_box(&query))))
    });

    c.bench_function("view_search_common_term", |b| {
        let query = QueryState::default().with_search("cache");
        b.iter(|| black_box(engine.view_indices(black_box(&query))))
    });

    c.bench_function("view_search_no_match", |b| {
        let query = QueryState::default().with_search("XYZNONEXISTENT");
        b.iter(|| black_box(engine.view_indices(black_box(&query))))
    });

    c.bench_function("view_language_and_date_sort", |b| {
        let query = QueryState::default()
            .with_language("Rust")
            .sorted_by(SortKey::UpdatedAt, SortOrder::Ascending);
        b.iter(|| black_box(engine.view_indices(black_box(&query))))
    });
}

fn benchmark_highlight(c: &mut Criterion) {
    let text = "A Rust library for building fast cache layers and web servers, with a CACHE of caches";

    c.bench_function("highlight_description", |b| {
        b.iter(|| black_box(highlight(black_box(text), black_box("cache"))))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(std::time::Duration::from_secs(5));
    targets = benchmark_view, benchmark_highlight
}

criterion_main!(benches);
