//! Algebraic square parsing.
//!
//! Turns human-readable coordinates (e.g., `e4`) into `Square`; the reverse
//! direction is `Square`'s `Display`. Used by the notation decoder and the
//! coordinate move parser.

use crate::errors::NotationError;
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> Result<Square, NotationError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(NotationError::InvalidSquare(square.to_owned()));
    }

    Square::new(rank - b'1', file - b'a').ok_or_else(|| NotationError::InvalidSquare(square.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::algebraic_to_square;
    use crate::errors::NotationError;
    use crate::game_state::chess_types::Square;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(algebraic_to_square("a1").expect("a1 should parse"), Square::new(0, 0).expect("a1"));
        assert_eq!(algebraic_to_square("h8").expect("h8 should parse"), Square::new(7, 7).expect("h8"));
        assert_eq!(Square::new(3, 4).expect("e4").to_string(), "e4");
    }

    #[test]
    fn rejects_off_board_names() {
        assert_eq!(
            algebraic_to_square("i1"),
            Err(NotationError::InvalidSquare("i1".to_owned()))
        );
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("a10").is_err());
    }
}
