//! Command-line sliding 15-puzzle solver.
//!
//! Reads an initial state from a file, searches for the goal, and reports the
//! number of moves found together with timing and search statistics.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release -- initialState
//! ```
//!
//! Choose the strategy and heuristic:
//!
//! ```sh
//! cargo run --release -- --strategy astar --heuristic hamming path/to/state
//! cargo run --release -- --strategy bfs path/to/state
//! ```
//!
//! Log search progress with `-v` (lifecycle) or `-vv` (every expanded state).
//! `RUST_LOG` overrides the level selected by `-v`.

use std::{
    fs,
    io::{self, Write as _},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use clap::{ArgAction, Parser, ValueEnum};
use fifteen_core::{ParseStateError, PuzzleState};
use fifteen_solver::{
    SearchError, SearchLimits, Strategy,
    heuristic::{self, BoxedHeuristic},
    search_with_limits,
};
use log::LevelFilter;

mod report;

use self::report::Report;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// A* search guided by the selected heuristic.
    Astar,
    /// Breadth-first search; the heuristic is ignored.
    Bfs,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Astar => Strategy::AStar,
            StrategyArg::Bfs => Strategy::BreadthFirst,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// File holding the initial state: four rows of four labels.
    #[arg(value_name = "FILE", default_value = "initialState")]
    input: PathBuf,

    /// Search strategy.
    #[arg(long, value_name = "STRATEGY", default_value = "astar")]
    strategy: StrategyArg,

    /// Heuristic used by A* search: manhattan, hamming or zero.
    #[arg(
        long,
        value_name = "HEURISTIC",
        default_value = "manhattan",
        value_parser = parse_heuristic
    )]
    heuristic: BoxedHeuristic,

    /// Give up after expanding this many states.
    #[arg(long, value_name = "COUNT")]
    max_expanded: Option<usize>,

    /// Log search progress. Repeat to log every expanded state.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum RunError {
    #[display("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("invalid representation of the initial state: {_0}")]
    Parse(ParseStateError),
    #[display("{_0}")]
    Search(SearchError),
}

impl RunError {
    fn exit_code(&self) -> ExitCode {
        match self {
            RunError::Parse(_) => ExitCode::from(2),
            RunError::Read { .. } | RunError::Search(_) => ExitCode::FAILURE,
        }
    }
}

fn main() -> ExitCode {
    better_panic::install();
    let args = Args::parse();
    init_logger(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Keep the partial progress line separate from the error.
            println!();
            eprintln!("Error: {err}");
            if matches!(err, RunError::Parse(_)) {
                eprintln!("{}", ParseStateError::ACCEPTED_FORMS);
            }
            err.exit_code()
        }
    }
}

fn parse_heuristic(name: &str) -> Result<BoxedHeuristic, String> {
    heuristic::by_name(name).ok_or_else(|| {
        let names = heuristic::all_heuristics()
            .iter()
            .map(|heuristic| heuristic.name())
            .collect::<Vec<_>>();
        format!("unknown heuristic `{name}` (expected one of: {})", names.join(", "))
    })
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &Args) -> Result<(), RunError> {
    let start = Instant::now();

    print!("Parsing input file... ");
    // A failed flush only delays the progress message.
    let _ = io::stdout().flush();
    let text = fs::read_to_string(&args.input).map_err(|source| RunError::Read {
        path: args.input.clone(),
        source,
    })?;
    let initial = PuzzleState::parse(&text).map_err(RunError::Parse)?;
    println!("done.");
    log::debug!("initial configuration {}", initial.configuration());

    println!("Performing search...");
    let limits = SearchLimits {
        max_expanded: args.max_expanded,
    };
    let solution = search_with_limits(
        &initial,
        args.strategy.into(),
        args.heuristic.as_ref(),
        limits,
    )
    .map_err(RunError::Search)?;

    print!("{}", Report::new(&solution, start.elapsed()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_heuristic() {
        assert_eq!(parse_heuristic("Hamming").unwrap().name(), "hamming");
        assert_eq!(
            parse_heuristic("euclid").unwrap_err(),
            "unknown heuristic `euclid` (expected one of: manhattan, hamming, zero)"
        );
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["fifteen"]).unwrap();
        assert_eq!(args.input, PathBuf::from("initialState"));
        assert_eq!(args.heuristic.name(), "manhattan");
        assert!(matches!(args.strategy, StrategyArg::Astar));
        assert_eq!(args.max_expanded, None);
    }

    #[test]
    fn test_args_heuristic_and_strategy() {
        let args = Args::try_parse_from([
            "fifteen",
            "--strategy",
            "bfs",
            "--heuristic",
            "zero",
            "--max-expanded",
            "10",
            "state.txt",
        ])
        .unwrap();
        assert_eq!(args.heuristic.name(), "zero");
        assert_eq!(Strategy::from(args.strategy), Strategy::BreadthFirst);
        assert_eq!(args.max_expanded, Some(10));
        assert!(Args::try_parse_from(["fifteen", "--heuristic", "euclid"]).is_err());
    }
}
