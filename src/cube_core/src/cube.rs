//! Structure and state of the 3x3x3 cube.
//!
//! A configuration is represented by four properties: edge permutation, edge
//! orientation, corner permutation, and corner orientation. A tuple of these
//! four properties (with correct parity relations) uniquely determines the
//! state of the cube.

use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};

use strum_macros::EnumString;
use thiserror::Error;

pub const EDGES: usize = 12;
pub const CORNERS: usize = 8;

/// The faces of the cube.
///
/// - U: top face
/// - D: bottom face
/// - F: front face
/// - B: back face
/// - L: left face
/// - R: right face
///
/// The declaration order doubles as the move enumeration order of the
/// solver, so it must not be rearranged.
#[derive(PartialEq, Eq, EnumString, Debug, Clone, Copy, Hash)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Represents the direction which to turn a face. `Double` represents a 180
/// degree rotation of a face, and `Prime` represents a counter-clockwise
/// rotation of a face.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum Direction {
    Normal,
    Double,
    Prime,
}

impl Direction {
    /// The number of clockwise quarter turns this direction stands for.
    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Direction::Normal => 1,
            Direction::Double => 2,
            Direction::Prime => 3,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Normal => write!(f, ""),
            Direction::Double => write!(f, "2"),
            Direction::Prime => write!(f, "'"),
        }
    }
}

/// An instantiation of a certain face equipped with a direction.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Move {
    pub face: Face,
    pub dir: Direction,
}

impl Move {
    #[must_use]
    pub const fn new(face: Face, dir: Direction) -> Self {
        Self { face, dir }
    }

    #[must_use]
    pub const fn invert(self) -> Self {
        Self {
            face: self.face,
            dir: match self.dir {
                Direction::Normal => Direction::Prime,
                Direction::Prime => Direction::Normal,
                Direction::Double => Direction::Double,
            },
        }
    }

    #[must_use]
    pub const fn quarter_turns(self) -> u8 {
        self.dir.quarter_turns()
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.dir)
    }
}

/// A shorthand macro that can be used to construct [`Move`]s.
///
/// ```
/// use cube_core::{cube::Move, cube_move};
///
/// let r_prime: Move = cube_move!(R, Prime);
/// let u2: Move = cube_move!(U, Double);
/// ```
#[macro_export]
macro_rules! cube_move {
    ($face:ident, $dir:ident) => {{
        $crate::cube::Move {
            face: $crate::cube::Face::$face,
            dir: $crate::cube::Direction::$dir,
        }
    }};
}

/// All 18 allowed moves, in the move enumeration order of the solver: faces
/// in declaration order, and quarter, half, counter-clockwise turns within
/// each face. Solutions are reproducible only because this order is fixed.
pub const ALL_MOVES: [Move; 18] = [
    cube_move!(U, Normal),
    cube_move!(U, Double),
    cube_move!(U, Prime),
    cube_move!(D, Normal),
    cube_move!(D, Double),
    cube_move!(D, Prime),
    cube_move!(F, Normal),
    cube_move!(F, Double),
    cube_move!(F, Prime),
    cube_move!(B, Normal),
    cube_move!(B, Double),
    cube_move!(B, Prime),
    cube_move!(L, Normal),
    cube_move!(L, Double),
    cube_move!(L, Prime),
    cube_move!(R, Normal),
    cube_move!(R, Double),
    cube_move!(R, Prime),
];

/// A sequence of moves, used for representing scramble sequences and
/// solution sequences.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    /// The sequence that undoes this one: every move inverted, in reverse
    /// order.
    #[must_use]
    pub fn invert(&self) -> Self {
        let mut moves = vec![];
        for m in self.iter().rev() {
            moves.push(m.invert());
        }
        MoveSequence(moves)
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strs: Vec<String> = self.iter().map(ToString::to_string).collect();
        write!(f, "{}", strs.join(" "))
    }
}

impl Deref for MoveSequence {
    type Target = Vec<Move>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for MoveSequence {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// What one clockwise quarter turn of a face does: the four edge slots and
/// four corner slots it rotates (in rotation order), and the orientation
/// deltas picked up by the piece entering each slot of the cycle.
struct FaceTurn {
    edge_cycle: [usize; 4],
    corner_cycle: [usize; 4],
    edge_flip: [u8; 4],
    corner_twist: [u8; 4],
}

const TURN_U: FaceTurn = FaceTurn {
    edge_cycle: [0, 1, 2, 3],
    corner_cycle: [0, 1, 2, 3],
    edge_flip: [0, 0, 0, 0],
    corner_twist: [0, 0, 0, 0],
};

const TURN_D: FaceTurn = FaceTurn {
    edge_cycle: [4, 5, 6, 7],
    corner_cycle: [4, 5, 6, 7],
    edge_flip: [0, 0, 0, 0],
    corner_twist: [0, 0, 0, 0],
};

const TURN_F: FaceTurn = FaceTurn {
    edge_cycle: [2, 6, 10, 7],
    corner_cycle: [1, 5, 6, 2],
    edge_flip: [1, 0, 1, 0],
    corner_twist: [1, 2, 1, 2],
};

const TURN_B: FaceTurn = FaceTurn {
    edge_cycle: [0, 5, 8, 4],
    corner_cycle: [0, 3, 7, 4],
    edge_flip: [1, 0, 1, 0],
    corner_twist: [2, 1, 2, 1],
};

const TURN_L: FaceTurn = FaceTurn {
    edge_cycle: [3, 7, 11, 4],
    corner_cycle: [0, 4, 5, 1],
    edge_flip: [0, 0, 0, 0],
    corner_twist: [1, 2, 1, 2],
};

const TURN_R: FaceTurn = FaceTurn {
    edge_cycle: [1, 6, 9, 5],
    corner_cycle: [2, 6, 7, 3],
    edge_flip: [0, 0, 0, 0],
    corner_twist: [2, 1, 2, 1],
};

const fn face_turn(face: Face) -> &'static FaceTurn {
    match face {
        Face::U => &TURN_U,
        Face::D => &TURN_D,
        Face::F => &TURN_F,
        Face::B => &TURN_B,
        Face::L => &TURN_L,
        Face::R => &TURN_R,
    }
}

/// A configuration of the cube. `ep[i]` is the edge whose home is cubicle
/// `i`, and `eo[i]` its flip; `cp` and `co` are the corner analogues, with
/// twists counted mod 3.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct CubeState {
    ep: [u8; EDGES],
    eo: [u8; EDGES],
    cp: [u8; CORNERS],
    co: [u8; CORNERS],
}

/// Violations of the reachable-state invariants.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum StateError {
    #[error("edge permutation is not a permutation of 0..12")]
    EdgePermutation,
    #[error("corner permutation is not a permutation of 0..8")]
    CornerPermutation,
    #[error("edge flips do not cancel out mod 2")]
    EdgeFlipParity,
    #[error("corner twists do not cancel out mod 3")]
    CornerTwistParity,
    #[error("edge and corner permutation parities disagree")]
    PermutationParityMismatch,
}

impl CubeState {
    /// The solved state: identity permutations, no flips, no twists.
    pub const SOLVED: CubeState = CubeState {
        ep: const {
            let mut arr = [0; EDGES];
            let mut i = 0;
            while i < EDGES {
                arr[i] = i as u8;
                i += 1;
            }
            arr
        },
        eo: [0; EDGES],
        cp: const {
            let mut arr = [0; CORNERS];
            let mut i = 0;
            while i < CORNERS {
                arr[i] = i as u8;
                i += 1;
            }
            arr
        },
        co: [0; CORNERS],
    };

    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    fn apply_quarter_turn(&mut self, face: Face) {
        let turn = face_turn(face);

        let e = &turn.edge_cycle;
        let last_edge = self.ep[e[3]];
        let last_flip = self.eo[e[3]];
        for i in (1..4).rev() {
            self.ep[e[i]] = self.ep[e[i - 1]];
            self.eo[e[i]] = (self.eo[e[i - 1]] + turn.edge_flip[i]) % 2;
        }
        self.ep[e[0]] = last_edge;
        self.eo[e[0]] = (last_flip + turn.edge_flip[0]) % 2;

        let c = &turn.corner_cycle;
        let last_corner = self.cp[c[3]];
        let last_twist = self.co[c[3]];
        for i in (1..4).rev() {
            self.cp[c[i]] = self.cp[c[i - 1]];
            self.co[c[i]] = (self.co[c[i - 1]] + turn.corner_twist[i]) % 3;
        }
        self.cp[c[0]] = last_corner;
        self.co[c[0]] = (last_twist + turn.corner_twist[0]) % 3;
    }

    /// Applies a move to a cube configuration, returning the new
    /// configuration.
    #[must_use]
    pub fn apply_move(&self, m: &Move) -> Self {
        let mut next = self.clone();
        for _ in 0..m.quarter_turns() {
            next.apply_quarter_turn(m.face);
        }
        next
    }

    /// Applies a sequence of moves, in order, to a cube configuration.
    #[must_use]
    pub fn apply_moves(&self, moves: &MoveSequence) -> Self {
        moves
            .iter()
            .fold(self.clone(), |acc, m| acc.apply_move(m))
    }

    #[must_use]
    pub fn edge_permutation(&self) -> [u8; EDGES] {
        self.ep
    }

    #[must_use]
    pub fn edge_orientations(&self) -> [u8; EDGES] {
        self.eo
    }

    #[must_use]
    pub fn corner_orientations(&self) -> [u8; CORNERS] {
        self.co
    }

    /// Checks the reachable-state invariants: both permutations are
    /// permutations, flips cancel mod 2, twists cancel mod 3, and the two
    /// permutation parities agree.
    ///
    /// # Errors
    ///
    /// The first violated invariant, in the order above.
    pub fn validate(&self) -> Result<(), StateError> {
        if !is_permutation(&self.ep) {
            return Err(StateError::EdgePermutation);
        }
        if !is_permutation(&self.cp) {
            return Err(StateError::CornerPermutation);
        }
        if self.eo.iter().map(|&flip| u32::from(flip)).sum::<u32>() % 2 != 0 {
            return Err(StateError::EdgeFlipParity);
        }
        if self.co.iter().map(|&twist| u32::from(twist)).sum::<u32>() % 3 != 0 {
            return Err(StateError::CornerTwistParity);
        }
        if permutation_is_odd(&self.ep) != permutation_is_odd(&self.cp) {
            return Err(StateError::PermutationParityMismatch);
        }
        Ok(())
    }
}

impl Default for CubeState {
    fn default() -> CubeState {
        CubeState::SOLVED
    }
}

fn is_permutation(perm: &[u8]) -> bool {
    let mut seen = [false; EDGES];
    let seen = &mut seen[..perm.len()];
    for &piece in perm {
        match seen.get_mut(piece as usize) {
            Some(slot) if !*slot => *slot = true,
            _ => return false,
        }
    }
    true
}

fn permutation_is_odd(perm: &[u8]) -> bool {
    let mut inversions = 0;
    for (i, &a) in perm.iter().enumerate() {
        for &b in &perm[i + 1..] {
            if b < a {
                inversions += 1;
            }
        }
    }
    inversions % 2 == 1
}
