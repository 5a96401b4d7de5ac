//! Iterative-deepening A* search over the face-turn move set.

use std::time::Instant;

use cube_core::{ALL_MOVES, CubeState, Move, MoveSequence};
use log::debug;

use crate::pruning::PruningTables;
use crate::{SolverConfig, working};

/// Anything that can produce a solving sequence for a scrambled state.
pub trait Solver {
    /// Search for a sequence that restores the solved state. `None` means
    /// the search budget was exhausted before a solution was found.
    fn solve(&self) -> Option<MoveSequence>;
}

/// Depth-first iterative deepening on f = g + h, with the pruning tables
/// supplying h. Deterministic: candidate moves are tried in the fixed
/// [`ALL_MOVES`] order, so a given start state always yields the same
/// solution.
pub struct IDASolver<'a> {
    start: CubeState,
    pruning_tables: &'a PruningTables,
    config: SolverConfig,
}

/// Search state threaded through the recursion.
struct SearchMutable {
    path: Vec<Move>,
    nodes_visited: u64,
    budget_exhausted: bool,
}

impl<'a> IDASolver<'a> {
    #[must_use]
    pub fn new(start: CubeState, pruning_tables: &'a PruningTables, config: SolverConfig) -> Self {
        Self {
            start,
            pruning_tables,
            config,
        }
    }

    fn search(
        &self,
        state: &CubeState,
        cost: u8,
        threshold: u8,
        mutable: &mut SearchMutable,
    ) -> bool {
        mutable.nodes_visited += 1;
        if mutable.nodes_visited > self.config.node_limit {
            mutable.budget_exhausted = true;
            return false;
        }

        let est_total_cost = cost + self.pruning_tables.permissible_heuristic(state);
        if est_total_cost > threshold {
            return false;
        }
        if state.is_solved() {
            return true;
        }

        for m in &ALL_MOVES {
            if let Some(&last) = mutable.path.last() {
                // a second turn of the same face always reduces to one move
                if last.face == m.face {
                    continue;
                }
                // X Y X'-style sandwiches undo the sandwiched face turn
                if mutable.path.len() >= 2 {
                    let sandwiched = mutable.path[mutable.path.len() - 2];
                    if sandwiched.face == m.face
                        && (last.quarter_turns() + m.quarter_turns()) % 4 == 0
                    {
                        continue;
                    }
                }
            }

            let next = state.apply_move(m);
            mutable.path.push(*m);
            if self.search(&next, cost + 1, threshold, mutable) {
                return true;
            }
            mutable.path.pop();
            if mutable.budget_exhausted {
                return false;
            }
        }
        false
    }
}

impl Solver for IDASolver<'_> {
    fn solve(&self) -> Option<MoveSequence> {
        let mut mutable = SearchMutable {
            path: vec![],
            nodes_visited: 0,
            budget_exhausted: false,
        };
        let mut threshold = self.pruning_tables.permissible_heuristic(&self.start);

        while threshold <= self.config.max_threshold {
            debug!(working!("Searching threshold {}..."), threshold);
            let threshold_start = Instant::now();
            let found = self.search(&self.start, 0, threshold, &mut mutable);
            debug!(
                working!("Traversed {} nodes in {:.3}s"),
                mutable.nodes_visited,
                threshold_start.elapsed().as_secs_f64()
            );
            if found {
                return Some(MoveSequence(mutable.path));
            }
            if mutable.budget_exhausted {
                return None;
            }
            threshold += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cube_core::parse_scramble;

    fn solve_scramble(scramble: &str, config: SolverConfig) -> Option<MoveSequence> {
        let tables = PruningTables::generate(config.pdb_max_depth);
        let start = CubeState::default().apply_moves(&parse_scramble(scramble).unwrap().into());
        IDASolver::new(start, &tables, config).solve()
    }

    #[test]
    fn test_solved_start_yields_empty_sequence() {
        let solution = solve_scramble("", SolverConfig::default()).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn test_single_move_scrambles_are_inverted() {
        let tables = PruningTables::generate(14);
        for m in ALL_MOVES {
            let start = CubeState::default().apply_move(&m);
            let solution = IDASolver::new(start, &tables, SolverConfig::default())
                .solve()
                .unwrap();
            assert_eq!(&*solution, &[m.invert()]);
        }
    }

    #[test]
    fn test_solutions_are_deterministic() {
        let first = solve_scramble("R U R' U'", SolverConfig::default()).unwrap();
        let second = solve_scramble("R U R' U'", SolverConfig::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_node_limit_exhausts_immediately() {
        let config = SolverConfig {
            node_limit: 0,
            ..SolverConfig::default()
        };
        // even a solved start is never reached with no nodes to spend
        assert_eq!(solve_scramble("", config), None);
        assert_eq!(solve_scramble("R U", config), None);
    }

    #[test]
    fn test_move_pruning_never_revisits_a_face() {
        let solution = solve_scramble("R U R' U'", SolverConfig::default()).unwrap();
        let applied = CubeState::default()
            .apply_moves(&parse_scramble("R U R' U'").unwrap().into())
            .apply_moves(&solution);
        assert!(applied.is_solved());
        assert!(
            solution
                .windows(2)
                .all(|pair| pair[0].face != pair[1].face)
        );
    }
}
