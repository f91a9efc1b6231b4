//! Benchmark suite for dyscalc-algo
//!
//! Run with: cargo bench

use criterion::{criterion_group, criterion_main, Criterion};
use dyscalc_algo::{Category, Cell, Difficulty, Observation, ThetaEngine};

fn full_pool() -> Vec<Cell> {
    let mut pool = Vec::new();
    for category in [
        Category::Lexical,
        Category::Practical,
        Category::Arithmetic,
    ] {
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            for _ in 0..10 {
                pool.push(Cell::new(category, difficulty));
            }
        }
    }
    pool
}

fn bench_pick(c: &mut Criterion) {
    let engine = ThetaEngine::new();
    let pool = full_pool();
    c.bench_function("ThetaEngine::pick/90", |b| {
        b.iter(|| engine.pick("bench", &pool).unwrap())
    });
}

fn bench_update(c: &mut Criterion) {
    let engine = ThetaEngine::new();
    let cell = Cell::new(Category::Practical, Difficulty::Medium);
    let observation = Observation::new(true, 2.0).unwrap();
    c.bench_function("ThetaEngine::update", |b| {
        b.iter(|| engine.update("bench", cell, observation).unwrap())
    });
}

criterion_group!(benches, bench_pick, bench_update);
criterion_main!(benches);
