//! Example demonstrating grid generation.
//!
//! This example shows how to:
//! - Create a `GridGenerator` from a `GeneratorConfig`
//! - Generate a random grid and print it with its seed
//! - Sample many grids in parallel and keep the one with the longest
//!   optimal cleaning route
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_grid
//! ```
//!
//! Pick the hardest of 1000 sampled 6x6 grids:
//!
//! ```sh
//! cargo run --example generate_grid -- --rows 6 --cols 6 --max-tries 1000
//! ```

use std::process;

use clap::Parser;
use rayon::prelude::*;
use sweepgrid_core::Grid;
use sweepgrid_generator::{GeneratedGrid, GeneratorConfig, GridGenerator};
use sweepgrid_solver::{CleaningSolver, GoalPolicy};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, default_value_t = 4)]
    rows: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 4)]
    cols: usize,

    /// Maximum number of dirty cells.
    #[arg(long, default_value_t = 6)]
    max_dirt: usize,

    /// Score routes that must end back at the start.
    #[arg(long)]
    return_to_start: bool,

    /// Grids to sample. With 1, the first generated grid is printed.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    if args.max_tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let generator = GridGenerator::new(GeneratorConfig {
        rows: args.rows,
        cols: args.cols,
        max_dirt: args.max_dirt,
        ..GeneratorConfig::default()
    });
    let goal = if args.return_to_start {
        GoalPolicy::ReturnToStart
    } else {
        GoalPolicy::CleanAll
    };
    let solver = CleaningSolver::new(goal);

    let best = (0..args.max_tries)
        .into_par_iter()
        .map(|_| {
            let generated = generator.generate().unwrap_or_else(|err| {
                eprintln!("{err}");
                process::exit(1);
            });
            let cost = route_cost(&solver, &generated.grid);
            (generated, cost)
        })
        .max_by_key(|(_, cost)| *cost);

    if let Some((generated, cost)) = best {
        print_grid(&generated, cost, args.max_tries);
    }
}

fn route_cost(solver: &CleaningSolver, grid: &Grid) -> usize {
    let outcome = solver.solve_grid(grid).unwrap();
    // Generated grids are connected, so a route always exists.
    outcome.cost().unwrap()
}

fn print_grid(generated: &GeneratedGrid, cost: usize, max_tries: usize) {
    let grid = &generated.grid;

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();

    if max_tries > 1 {
        println!("Selection:");
        println!("  Max tries: {max_tries}");
        println!();
    }

    println!("Grid:");
    let symbols = grid.cells().map(|(_, cell)| cell.symbol()).collect::<Vec<_>>();
    for row in symbols.chunks(grid.cols()) {
        let line = row.iter().map(char::to_string).collect::<Vec<_>>().join(" ");
        println!("  {line}");
    }
    println!();

    println!("Stats:");
    println!("  walls: {}", grid.wall_count());
    println!("  dirt: {}", grid.dirt_count());
    println!("  attempts: {}", generated.attempts);
    println!("  route cost: {cost}");
}
