//! Solve-request driver: parse the scramble, build the pruning tables, run
//! the search, format the result.

use std::time::Instant;

use cube_core::{CubeState, ParseMoveError, StateError, parse_scramble};
use log::info;
use thiserror::Error;

use crate::pruning::PruningTables;
use crate::solver::{IDASolver, Solver};
use crate::{SolverConfig, start, success};

/// Reasons a solve request is rejected before the search starts. An
/// exhausted search budget is not an error; it surfaces as an empty
/// solution string.
#[derive(Error, Debug)]
pub enum SolveError {
    #[error("invalid scramble: {0}")]
    Parse(#[from] ParseMoveError),
    #[error("unsolvable cube state: {0}")]
    State(#[from] StateError),
}

/// Solve `scramble` with the default configuration.
///
/// The scramble is whitespace-separated face-turn tokens; the returned
/// solution uses the same notation, every token followed by a single space.
/// An empty string means no solution was found within the search budget.
///
/// # Errors
///
/// If the scramble does not parse, or the resulting state violates the
/// reachable-state invariants.
pub fn solve_cube(scramble: &str) -> Result<String, SolveError> {
    solve_cube_with_config(scramble, &SolverConfig::default())
}

/// Solve `scramble` under the limits in `config`. See [`solve_cube`].
///
/// Pruning tables are rebuilt on every request; they are owned by the
/// request's solver and dropped with it.
///
/// # Errors
///
/// As for [`solve_cube`].
pub fn solve_cube_with_config(
    scramble: &str,
    config: &SolverConfig,
) -> Result<String, SolveError> {
    let moves = parse_scramble(scramble)?;
    let start_state = CubeState::default().apply_moves(&moves.into());
    start_state.validate()?;

    let tables = PruningTables::generate(config.pdb_max_depth);
    let solver = IDASolver::new(start_state, &tables, *config);

    info!(start!("Searching for a solution"));
    let search_start = Instant::now();
    let Some(solution) = solver.solve() else {
        info!("No solution found within budget");
        return Ok(String::new());
    };
    info!(
        success!("Solved in {} moves in {:.3}s"),
        solution.len(),
        search_start.elapsed().as_secs_f64()
    );

    let mut formatted = String::new();
    for m in solution.iter() {
        formatted.push_str(&m.to_string());
        formatted.push(' ');
    }
    Ok(formatted)
}
