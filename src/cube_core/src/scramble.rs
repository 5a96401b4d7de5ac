//! Random scramble generation.

use crate::cube::{ALL_MOVES, Move, MoveSequence};

/// Default number of moves in a generated scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 14;

/// Generate a random scramble of `length` moves. The same face is never
/// turned twice in a row; a turn of the opposite face may follow, so the
/// result is a training scramble rather than a WCA-legal one.
#[must_use]
pub fn random_scramble(length: usize) -> MoveSequence {
    let mut moves: Vec<Move> = Vec::with_capacity(length);
    while moves.len() < length {
        let candidate = *fastrand::choice(ALL_MOVES.iter()).unwrap();
        if moves.last().is_some_and(|last| last.face == candidate.face) {
            continue;
        }
        moves.push(candidate);
    }
    MoveSequence(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube::CubeState;
    use itertools::Itertools;

    #[test]
    fn test_scramble_has_requested_length() {
        for length in [0, 1, 2, DEFAULT_SCRAMBLE_LENGTH, 50] {
            assert_eq!(random_scramble(length).len(), length);
        }
    }

    #[test]
    fn test_scramble_never_repeats_a_face() {
        for _ in 0..20 {
            let scramble = random_scramble(DEFAULT_SCRAMBLE_LENGTH);
            assert!(
                scramble
                    .iter()
                    .tuple_windows()
                    .all(|(a, b)| a.face != b.face)
            );
        }
    }

    #[test]
    fn test_scramble_produces_valid_states() {
        for _ in 0..20 {
            let scrambled = CubeState::default().apply_moves(&random_scramble(20));
            scrambled.validate().unwrap();
        }
    }
}
