use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;

/// Whether moving the piece on `from` to `to` leaves its own king unattacked.
///
/// Runs on a scratch copy of the board; `captured` names an extra square to
/// clear (the en-passant victim). A destination held by a friendly piece is
/// never safe.
pub fn is_safe_after_move(board: &Board, from: Square, to: Square, captured: Option<Square>) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if board.piece_at(to).is_some_and(|target| target.color == piece.color) {
        return false;
    }

    let mut scratch = *board;
    scratch.set(from, None);
    if let Some(victim) = captured {
        scratch.set(victim, None);
    }
    scratch.set(to, Some(piece));

    !is_king_in_check(&scratch, piece.color)
}

#[inline]
pub fn is_enemy_of(board: &Board, square: Square, color: Color) -> bool {
    board
        .piece_at(square)
        .is_some_and(|piece| piece.color != color)
}

#[cfg(test)]
mod tests {
    use super::is_safe_after_move;
    use crate::game_state::chess_types::Square;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn pinned_piece_cannot_leave_the_pin_line() {
        // White bishop on e2 is pinned by the rook on e8.
        let board = parse_placement("4r2k/8/8/8/8/8/4B3/4K3").expect("placement should parse");
        let e2 = Square::new(1, 4).expect("e2");
        let d3 = Square::new(2, 3).expect("d3");
        assert!(!is_safe_after_move(&board, e2, d3, None));
    }

    #[test]
    fn simulation_leaves_board_untouched() {
        let board = parse_placement("4r2k/8/8/8/8/8/4B3/4K3").expect("placement should parse");
        let before = board;
        let e1 = Square::new(0, 4).expect("e1");
        let d1 = Square::new(0, 3).expect("d1");
        assert!(is_safe_after_move(&board, e1, d1, None));
        assert_eq!(board, before);
    }

    #[test]
    fn own_piece_destination_is_rejected() {
        let board = parse_placement("7k/8/8/8/8/8/4B3/4K3").expect("placement should parse");
        let e1 = Square::new(0, 4).expect("e1");
        let e2 = Square::new(1, 4).expect("e2");
        assert!(!is_safe_after_move(&board, e1, e2, None));
    }
}
