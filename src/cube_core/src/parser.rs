//! Parsing of scramble strings in face-turn notation.
//!
//! A token is a face letter in `UDFBLR`, optionally followed by `2` for a
//! half turn or `'` for a counter-clockwise turn. Tokens are separated by
//! whitespace. Anything else is rejected.

use std::str::FromStr;

use thiserror::Error;

use crate::cube::{Direction, Face, Move};

#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum ParseMoveError {
    #[error("unrecognized face letter in token `{0}`")]
    UnknownFace(String),
    #[error("unrecognized turn suffix in token `{0}`")]
    UnknownSuffix(String),
}

/// Parse a single move token such as `R`, `U2`, or `F'`.
///
/// # Errors
///
/// If the leading character is not a face letter or the remainder is not
/// one of ``, `2`, `'`.
pub fn parse_move(token: &str) -> Result<Move, ParseMoveError> {
    let mut chars = token.chars();
    let mut buf = [0; 4];
    let face = chars
        .next()
        .and_then(|c| Face::from_str(c.encode_utf8(&mut buf)).ok())
        .ok_or_else(|| ParseMoveError::UnknownFace(token.to_owned()))?;
    let dir = match chars.as_str() {
        "" => Direction::Normal,
        "2" => Direction::Double,
        "'" => Direction::Prime,
        _ => return Err(ParseMoveError::UnknownSuffix(token.to_owned())),
    };
    Ok(Move::new(face, dir))
}

/// Parse a whitespace-separated scramble string. Empty input parses to an
/// empty sequence.
///
/// # Errors
///
/// The first token that is not a valid move.
pub fn parse_scramble(input: &str) -> Result<Vec<Move>, ParseMoveError> {
    input.split_whitespace().map(parse_move).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cube_move;

    #[test]
    fn test_parse_single_moves() {
        assert_eq!(parse_move("R"), Ok(cube_move!(R, Normal)));
        assert_eq!(parse_move("U2"), Ok(cube_move!(U, Double)));
        assert_eq!(parse_move("F'"), Ok(cube_move!(F, Prime)));
        assert_eq!(parse_move("B"), Ok(cube_move!(B, Normal)));
        assert_eq!(parse_move("L'"), Ok(cube_move!(L, Prime)));
        assert_eq!(parse_move("D2"), Ok(cube_move!(D, Double)));
    }

    #[test]
    fn test_parse_rejects_unknown_faces() {
        assert_eq!(
            parse_move("X"),
            Err(ParseMoveError::UnknownFace("X".to_owned()))
        );
        assert_eq!(
            parse_move("u"),
            Err(ParseMoveError::UnknownFace("u".to_owned()))
        );
        assert!(parse_scramble("R U X' F").is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_suffixes() {
        assert_eq!(
            parse_move("R3"),
            Err(ParseMoveError::UnknownSuffix("R3".to_owned()))
        );
        assert_eq!(
            parse_move("R2'"),
            Err(ParseMoveError::UnknownSuffix("R2'".to_owned()))
        );
    }

    #[test]
    fn test_parse_scramble_splits_on_whitespace() {
        let moves = parse_scramble("  R   U'\tF2\n").unwrap();
        assert_eq!(
            moves,
            vec![
                cube_move!(R, Normal),
                cube_move!(U, Prime),
                cube_move!(F, Double)
            ]
        );
        assert_eq!(parse_scramble(""), Ok(vec![]));
        assert_eq!(parse_scramble("   "), Ok(vec![]));
    }

    #[test]
    fn test_tokens_round_trip_through_display() {
        for token in ["U", "U2", "U'", "D", "F2", "B'", "L", "R2", "R'"] {
            assert_eq!(parse_move(token).unwrap().to_string(), token);
        }
    }
}
