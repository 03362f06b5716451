//! Criterion benchmarks for u-packer.
//!
//! Random lines with 5, 10, and 15 items measure the cost of the exhaustive
//! per-line search, and a parsed multi-line input measures a whole run.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Cursor;
use u_packer::model::{Item, ItemCollection};
use u_packer::packager::{Packager, PackerConfig};
use u_packer::search::LineSolver;

fn random_items<R: Rng>(n: usize, rng: &mut R) -> ItemCollection {
    ItemCollection::new(
        (1..=n as u32)
            .map(|id| {
                let weight = rng.random_range(0..=10_000) as f64 / 100.0;
                let price = rng.random_range(0..=10_000) as f64 / 100.0;
                Item::new(id, weight, price)
            })
            .collect(),
    )
}

fn random_input<R: Rng>(lines: usize, n: usize, rng: &mut R) -> String {
    let mut input = String::new();
    for _ in 0..lines {
        let capacity = rng.random_range(1..=100);
        input.push_str(&capacity.to_string());
        input.push_str(" :");
        for item in random_items(n, rng).iter() {
            input.push(' ');
            input.push_str(&item.to_string());
        }
        input.push('\n');
    }
    input
}

fn bench_line_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_solver");
    group.sample_size(20);

    let mut rng = StdRng::seed_from_u64(42);
    let solver = LineSolver::default();

    for &n in &[5usize, 10, 15] {
        let items = random_items(n, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let report = solver.solve(1, black_box(75.0), black_box(items));
                black_box(report)
            })
        });
    }
    group.finish();
}

fn bench_packager_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("packager_run");
    group.sample_size(10);

    let mut rng = StdRng::seed_from_u64(7);
    let packager = Packager::new(&PackerConfig::default()).expect("default config is valid");

    for &lines in &[10usize, 50] {
        let input = random_input(lines, 12, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(lines), &input, |b, input| {
            b.iter(|| {
                let mut out = Vec::new();
                let summary = packager.run(Cursor::new(input.as_bytes()), &mut out);
                black_box(summary)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_line_solver, bench_packager_run);
criterion_main!(benches);
