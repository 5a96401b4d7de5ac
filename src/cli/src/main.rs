#![warn(clippy::pedantic)]

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use cube_core::{CubeState, DEFAULT_SCRAMBLE_LENGTH, parse_scramble, random_scramble};
use env_logger::TimestampPrecision;
use log::LevelFilter;
use solver::{SolverConfig, solve_cube_with_config};

/// Solves scrambled 3x3x3 cubes with pattern-database IDA* search
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    log_level: u8,

    /// Abort the search after visiting this many nodes
    #[arg(long, default_value_t = SolverConfig::default().node_limit)]
    node_limit: u64,

    /// Give up once the iterative-deepening threshold exceeds this bound
    #[arg(long, default_value_t = SolverConfig::default().max_threshold)]
    max_threshold: u8,

    /// Depth bound for pattern-database generation
    #[arg(long, default_value_t = SolverConfig::default().pdb_max_depth)]
    pdb_depth: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a scramble, e.g. `solve "R U' F2"`
    Solve {
        /// The scramble sequence to solve
        scramble: String,
    },
    /// Generate a random scramble
    Scramble {
        /// Number of moves in the scramble
        #[arg(short = 'n', long, default_value_t = DEFAULT_SCRAMBLE_LENGTH)]
        length: usize,

        /// Also solve the generated scramble
        #[arg(long)]
        solve: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = SolverConfig {
        pdb_max_depth: cli.pdb_depth,
        node_limit: cli.node_limit,
        max_threshold: cli.max_threshold,
    };

    match cli.command {
        Commands::Solve { scramble } => {
            solve_and_print(&scramble, &config)?;
        }
        Commands::Scramble { length, solve } => {
            let scramble = random_scramble(length);
            println!("{scramble}");
            if solve {
                solve_and_print(&scramble.to_string(), &config)?;
            }
        }
    }

    Ok(())
}

fn solve_and_print(scramble: &str, config: &SolverConfig) -> color_eyre::Result<()> {
    let solution = solve_cube_with_config(scramble, config)?;
    if solution.is_empty() {
        let start = CubeState::default().apply_moves(&parse_scramble(scramble)?.into());
        if start.is_solved() {
            println!("already solved");
            return Ok(());
        }
        return Err(eyre!("no solution found within the search budget"));
    }
    println!("{}", solution.trim_end());
    Ok(())
}
