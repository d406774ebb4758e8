//! Benchmarks for full puzzle solves.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use kudoku_core::DigitGrid;
use kudoku_solver::solve;

const EASY: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const HARD: &str = "
    1__ __7 _9_
    _3_ _2_ __8
    __9 6__ 5__
    __5 3__ 9__
    _1_ _8_ __2
    6__ __4 ___
    3__ ___ _1_
    _4_ ___ __7
    __7 ___ 3__
";

const EMPTY: &str = "
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
    ___ ___ ___
";

fn bench_solve(c: &mut Criterion) {
    let puzzles = [("easy", EASY), ("hard", HARD), ("empty", EMPTY)]
        .map(|(param, text)| (param, text.parse::<DigitGrid>().unwrap()));

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(*grid),
                |grid| {
                    let outcome = solve(grid);
                    hint::black_box(outcome)
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
