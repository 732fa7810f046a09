//! Command-line front end for sweepgrid.
//!
//! Generates a connected grid, solves it on a background thread while a
//! spinner runs, prints the route, and replays it frame by frame.

use std::{process, thread, time::Duration};

use clap::Parser;
use log::info;
use sweepgrid_core::Grid;
use sweepgrid_generator::{
    GenerateError, GeneratorConfig, GridGenerator, GridSeed, GridSeedParseError,
};
use sweepgrid_solver::{
    CleaningSolver, GoalPolicy, Playback, PlaybackError, SearchOutcome, SolverError,
};

use self::{
    render::render,
    spinner::Spinner,
    worker::{SolveHandle, WorkerError},
};

mod render;
mod spinner;
mod worker;

const POLL_INTERVAL: Duration = Duration::from_millis(80);

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of rows.
    #[arg(long, default_value_t = GeneratorConfig::default().rows)]
    rows: usize,

    /// Number of columns.
    #[arg(long, default_value_t = GeneratorConfig::default().cols)]
    cols: usize,

    /// Probability that a non-start cell is a wall.
    #[arg(long, value_name = "P", default_value_t = GeneratorConfig::default().wall_density)]
    wall_density: f64,

    /// Probability that an open non-start cell is dirty.
    #[arg(long, value_name = "P", default_value_t = GeneratorConfig::default().dirt_density)]
    dirt_density: f64,

    /// Maximum number of dirty cells.
    #[arg(long, value_name = "COUNT", default_value_t = GeneratorConfig::default().max_dirt)]
    max_dirt: usize,

    /// Candidates to build before giving up.
    #[arg(long, value_name = "COUNT", default_value_t = GeneratorConfig::default().max_attempts)]
    max_attempts: usize,

    /// Reproduce a grid from its 64-digit hex seed.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<String>,

    /// Derive the seed from a phrase.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Require the robot to end back at the start.
    #[arg(long)]
    return_to_start: bool,

    /// Skip the step-by-step replay.
    #[arg(long)]
    no_playback: bool,

    /// Delay between replay frames.
    #[arg(long, value_name = "MS", default_value_t = 300)]
    delay_ms: u64,
}

impl Args {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            rows: self.rows,
            cols: self.cols,
            wall_density: self.wall_density,
            dirt_density: self.dirt_density,
            max_dirt: self.max_dirt,
            max_attempts: self.max_attempts,
        }
    }

    fn seed(&self) -> Result<GridSeed, GridSeedParseError> {
        match (&self.seed, &self.phrase) {
            (Some(hex), _) => hex.parse(),
            (None, Some(phrase)) => Ok(GridSeed::from_phrase(phrase)),
            (None, None) => Ok(GridSeed::random()),
        }
    }

    fn goal(&self) -> GoalPolicy {
        if self.return_to_start {
            GoalPolicy::ReturnToStart
        } else {
            GoalPolicy::CleanAll
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("invalid seed: {_0}")]
    #[from]
    Seed(GridSeedParseError),
    #[display("{_0}")]
    #[from]
    Generate(GenerateError),
    #[display("{_0}")]
    #[from]
    Solver(SolverError),
    #[display("{_0}")]
    #[from]
    Worker(WorkerError),
    #[display("invalid route: {_0}")]
    #[from]
    Playback(PlaybackError),
    #[display("terminal error: {_0}")]
    #[from]
    Io(std::io::Error),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let seed = args.seed()?;
    let generated = GridGenerator::new(args.config()).generate_with_seed(seed)?;
    let grid = generated.grid;
    info!("generated grid after {} attempt(s)", generated.attempts);

    println!("Seed: {}", generated.seed);
    println!();
    print!("{}", render(&grid, Some(Grid::START)));
    println!();

    let goal = args.goal();
    let outcome = solve_with_spinner(CleaningSolver::new(goal), grid.clone())?;
    let stats = outcome.stats();
    let Some(solution) = outcome.solution() else {
        println!("No solution ({goal:?}): some dirt is unreachable.");
        println!("Expanded {} states.", stats.expanded);
        return Ok(());
    };

    println!("Route ({goal:?}):");
    for (i, action) in solution.actions().iter().enumerate() {
        println!("  {:>3}. {action}", i + 1);
    }
    println!(
        "Cost: {} ({} moves, {} cleans)",
        solution.cost(),
        solution.move_count(),
        solution.clean_count(),
    );
    println!(
        "Search: expanded={} pruned={} pushed={} max_frontier={}",
        stats.expanded, stats.pruned, stats.pushed, stats.max_frontier,
    );

    if !args.no_playback {
        let delay = Duration::from_millis(args.delay_ms);
        let mut playback = Playback::new(&grid, solution.start())?;
        for &action in solution.actions() {
            thread::sleep(delay);
            playback.apply(action)?;
            println!();
            println!(
                "Step {}/{}: {action} ({} dirt left)",
                playback.steps(),
                solution.cost(),
                playback.remaining_dirt(),
            );
            print!("{}", render(playback.grid(), Some(playback.position())));
        }
    }
    Ok(())
}

fn solve_with_spinner(solver: CleaningSolver, grid: Grid) -> Result<SearchOutcome, CliError> {
    let handle = SolveHandle::spawn(solver, grid);
    let mut spinner = Spinner::new("solving");
    let result = loop {
        if let Some(result) = handle.poll()? {
            break result;
        }
        spinner.draw()?;
        thread::sleep(POLL_INTERVAL);
    };
    spinner.clear()?;
    info!("solver finished in {:.3}s", spinner.elapsed().as_secs_f64());
    Ok(result?)
}

#[cfg(test)]
mod tests {
    use sweepgrid_core::Position;

    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CliError::from("xyz".parse::<GridSeed>().unwrap_err());
        assert!(err.to_string().starts_with("invalid seed: "));

        let err = CliError::from(PlaybackError::Blocked {
            to: Position::new(0, 1),
        });
        assert_eq!(err.to_string(), "invalid route: cannot move into blocked cell (0, 1)");
    }

    #[test]
    fn test_seed_sources() {
        let args = Args::parse_from(["sweepgrid", "--phrase", "hall"]);
        assert_eq!(args.seed().unwrap(), GridSeed::from_phrase("hall"));

        let hex = GridSeed::from_phrase("hall").to_string();
        let args = Args::parse_from(["sweepgrid", "--seed", &hex]);
        assert_eq!(args.seed().unwrap(), GridSeed::from_phrase("hall"));

        let both = ["sweepgrid", "--seed", &hex, "--phrase", "hall"];
        assert!(Args::try_parse_from(both).is_err());
    }
}
