//! Pattern databases for the search heuristic.
//!
//! Each table maps an abstraction of the cube state to the minimum number of
//! moves needed to produce that abstraction from the solved state. Any
//! sequence that solves the full cube also solves each abstraction, so a
//! table entry never exceeds the true remaining distance and the maximum of
//! the three lookups is a permissible heuristic for IDA*.

use std::collections::VecDeque;
use std::collections::hash_map::Entry;
use std::hash::Hash;
use std::time::Instant;

use cube_core::{ALL_MOVES, CORNERS, CubeState, EDGES};
use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::{start, success};

/// The edge orientation abstraction: the flip flag of every cubicle.
#[must_use]
pub fn edge_orientation_key(state: &CubeState) -> [u8; EDGES] {
    state.edge_orientations()
}

/// The corner orientation abstraction: the twist of every cubicle.
#[must_use]
pub fn corner_orientation_key(state: &CubeState) -> [u8; CORNERS] {
    state.corner_orientations()
}

/// The E-slice abstraction: which cubicles currently hold a middle-layer
/// edge (home indices 4 through 7).
#[must_use]
pub fn e_slice_key(state: &CubeState) -> [bool; EDGES] {
    let mut key = [false; EDGES];
    for (slot, &edge) in state.edge_permutation().iter().enumerate() {
        key[slot] = (4..=7).contains(&edge);
    }
    key
}

/// The three pattern databases backing the heuristic. Immutable once
/// generated; owned by the solver for the duration of a request.
pub struct PruningTables {
    edge_orientation: FxHashMap<[u8; EDGES], u8>,
    corner_orientation: FxHashMap<[u8; CORNERS], u8>,
    e_slice: FxHashMap<[bool; EDGES], u8>,
}

impl PruningTables {
    /// Build all three tables by flooding outward from the solved state,
    /// stopping at `max_depth` moves.
    #[must_use]
    pub fn generate(max_depth: u8) -> Self {
        info!(start!("Generating pruning tables to depth {}"), max_depth);
        let generate_start = Instant::now();
        let edge_orientation = generate_table(edge_orientation_key, max_depth);
        debug!("{} edge orientation keys", edge_orientation.len());
        let corner_orientation = generate_table(corner_orientation_key, max_depth);
        debug!("{} corner orientation keys", corner_orientation.len());
        let e_slice = generate_table(e_slice_key, max_depth);
        debug!("{} E-slice keys", e_slice.len());
        info!(
            success!("Pruning tables ready in {:.3}s"),
            generate_start.elapsed().as_secs_f64()
        );
        Self {
            edge_orientation,
            corner_orientation,
            e_slice,
        }
    }

    /// Lower bound on the number of moves needed to solve `state`. Keys
    /// missing from a table (possible only below the default generation
    /// depth) contribute zero.
    #[must_use]
    pub fn permissible_heuristic(&self, state: &CubeState) -> u8 {
        let edge = lookup(&self.edge_orientation, &edge_orientation_key(state));
        let corner = lookup(&self.corner_orientation, &corner_orientation_key(state));
        let slice = lookup(&self.e_slice, &e_slice_key(state));
        edge.max(corner).max(slice)
    }
}

fn lookup<K: Eq + Hash>(table: &FxHashMap<K, u8>, key: &K) -> u8 {
    table.get(key).copied().unwrap_or(0)
}

/// Breadth-first flood from the solved state, deduplicated by the
/// abstraction key: a successor is enqueued only when its key is new, so the
/// queue holds at most one representative per key and every key is recorded
/// with its minimum depth.
fn generate_table<K, F>(extractor: F, max_depth: u8) -> FxHashMap<K, u8>
where
    K: Eq + Hash,
    F: Fn(&CubeState) -> K,
{
    let mut table = FxHashMap::default();
    let mut queue = VecDeque::new();
    let solved = CubeState::default();
    table.insert(extractor(&solved), 0);
    queue.push_back((solved, 0));

    while let Some((state, depth)) = queue.pop_front() {
        if depth == max_depth {
            continue;
        }
        for m in &ALL_MOVES {
            let next = state.apply_move(m);
            if let Entry::Vacant(entry) = table.entry(extractor(&next)) {
                entry.insert(depth + 1);
                queue.push_back((next, depth + 1));
            }
        }
    }
    table
}
