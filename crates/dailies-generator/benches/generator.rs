//! Benchmarks for puzzle generation.
//!
//! # Benchmarks
//!
//! - **`number_grid`**: backtracking fill plus cell removal. The only generator
//!   whose cost varies with the seed.
//! - **`crossword`**: three draws and three placements.
//! - **`honeycomb`**: a filter pass over the built-in spelling bee bank.
//!
//! # Test Data
//!
//! Seeds are derived from three fixed dates so runs are comparable.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use dailies_core::PuzzleSeed;
use dailies_generator::{CrosswordGenerator, HoneycombGenerator, NumberGridGenerator};

const DATES: [&str; 3] = ["2024-01-01", "2024-06-15", "2025-12-31"];

fn bench_number_grid(c: &mut Criterion) {
    let generator = NumberGridGenerator::new();

    for date in DATES {
        let seed = PuzzleSeed::from_date(date);
        c.bench_with_input(BenchmarkId::new("number_grid", date), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(seed),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_crossword(c: &mut Criterion) {
    let generator = CrosswordGenerator::new();

    for date in DATES {
        let seed = PuzzleSeed::from_date(date);
        c.bench_with_input(BenchmarkId::new("crossword", date), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(seed),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_honeycomb(c: &mut Criterion) {
    let generator = HoneycombGenerator::new();

    for date in DATES {
        let seed = PuzzleSeed::from_date(date);
        c.bench_with_input(BenchmarkId::new("honeycomb", date), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(seed),
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_number_grid,
        bench_crossword,
        bench_honeycomb
);
criterion_main!(benches);
