//! Pattern-database IDA* solver for the 3x3x3 cube.
//!
//! A solve request floods three pattern databases outward from the solved
//! state, then runs iterative-deepening A* with the maximum of the three
//! table lookups as a permissible heuristic.

#![warn(clippy::pedantic)]

pub mod driver;
pub mod pruning;
pub mod solver;

pub use driver::{SolveError, solve_cube, solve_cube_with_config};
pub use pruning::PruningTables;
pub use solver::{IDASolver, Solver};

#[macro_export]
macro_rules! start {
    ($msg:expr) => {
        concat!("⏳ ", $msg)
    };
}

#[macro_export]
macro_rules! working {
    ($msg:expr) => {
        concat!("🛠  ", $msg)
    };
}

#[macro_export]
macro_rules! success {
    ($msg:expr) => {
        concat!("✅ ", $msg)
    };
}

/// Tunable limits for a single solve request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Depth bound for the breadth-first pattern-database flood. The default
    /// of 14 covers every reachable key of all three abstractions.
    pub pdb_max_depth: u8,
    /// Abort the whole search once this many nodes have been visited.
    pub node_limit: u64,
    /// Give up once the iterative-deepening threshold exceeds this bound.
    pub max_threshold: u8,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pdb_max_depth: 14,
            node_limit: 50_000_000,
            max_threshold: 30,
        }
    }
}
