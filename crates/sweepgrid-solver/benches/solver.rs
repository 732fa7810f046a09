//! Benchmarks for route search.
//!
//! # Benchmarks
//!
//! - **`solve_clean_all`** / **`solve_return_to_start`**: solve fixed grids
//!   under each goal policy. `open` has no walls, `maze` forces detours the
//!   Manhattan estimate cannot see, and `scattered` spreads dirt across a
//!   larger grid.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use sweepgrid_core::Grid;
use sweepgrid_solver::{CleaningSolver, GoalPolicy};

const GRIDS: [(&str, &str); 3] = [
    (
        "open",
        "
        . . . D
        . D . .
        . . . .
        D . . D
        ",
    ),
    (
        "maze",
        "
        . # D . . .
        . # # # # .
        . . . . # .
        # # # . # .
        D . # . . .
        . . # # # D
        ",
    ),
    (
        "scattered",
        "
        . . . . . . . D
        . # # . . # . .
        . D # . . # . .
        . . . . D . . .
        # # . # # . # .
        . . . . . . D .
        D . # . . # . .
        . . . . D . . D
        ",
    ),
];

fn bench_solve(c: &mut Criterion, name: &str, goal: GoalPolicy) {
    let solver = CleaningSolver::new(goal);

    for (param, text) in GRIDS {
        let grid = text.parse::<Grid>().unwrap();
        c.bench_with_input(BenchmarkId::new(name, param), &grid, |b, grid| {
            b.iter_batched(
                || hint::black_box(grid),
                |grid| solver.solve_grid(grid),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_solve_clean_all(c: &mut Criterion) {
    bench_solve(c, "solve_clean_all", GoalPolicy::CleanAll);
}

fn bench_solve_return_to_start(c: &mut Criterion) {
    bench_solve(c, "solve_return_to_start", GoalPolicy::ReturnToStart);
}

criterion_group!(benches, bench_solve_clean_all, bench_solve_return_to_start);
criterion_main!(benches);
