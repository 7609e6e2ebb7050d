//! Legal pawn destinations.
//!
//! Pushes need empty squares, diagonals need an enemy piece, and en passant
//! depends on the previous ply being an adjacent double step.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::{is_enemy_of, is_safe_after_move};
use crate::moves::move_descriptions::LastMove;

pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    pawn: Piece,
    last_move: Option<&LastMove>,
    out: &mut Vec<Square>,
) {
    for &(d_rank, d_file) in PieceKind::Pawn.directions(pawn.color) {
        let Some(to) = from.offset(d_rank, d_file) else {
            continue;
        };

        let allowed = if d_file != 0 {
            is_enemy_of(board, to, pawn.color)
        } else if d_rank.abs() == 2 {
            let skipped = from.offset(pawn.color.forward(), 0);
            !pawn.has_moved
                && board.is_empty_at(to)
                && skipped.is_some_and(|sq| board.is_empty_at(sq))
        } else {
            board.is_empty_at(to)
        };

        if allowed && is_safe_after_move(board, from, to, None) {
            out.push(to);
        }
    }

    if let Some(to) = en_passant_destination(board, from, pawn, last_move) {
        out.push(to);
    }
}

/// Destination of a legal en-passant capture by the pawn on `from`, if any.
pub fn en_passant_destination(
    board: &Board,
    from: Square,
    pawn: Piece,
    last_move: Option<&LastMove>,
) -> Option<Square> {
    let last = last_move?;
    if !last.is_double_pawn_step()
        || last.piece.color == pawn.color
        || last.to.rank() != from.rank()
        || last.to.file().abs_diff(from.file()) != 1
    {
        return None;
    }

    let to = Square::new(
        (from.rank() as i8 + pawn.color.forward()) as u8,
        last.to.file(),
    )?;
    is_safe_after_move(board, from, to, Some(last.to)).then_some(to)
}

#[cfg(test)]
mod tests {
    use super::{en_passant_destination, generate_pawn_moves};
    use crate::game_state::chess_types::*;
    use crate::moves::move_descriptions::LastMove;
    use crate::utils::fen_parser::parse_placement;

    fn sq(rank: u8, file: u8) -> Square {
        Square::new(rank, file).expect("test square is on the board")
    }

    #[test]
    fn unmoved_pawn_has_single_and_double_push() {
        let board = Board::standard();
        let e2 = sq(1, 4);
        let pawn = board.piece_at(e2).expect("pawn on e2");
        let mut out = Vec::new();
        generate_pawn_moves(&board, e2, pawn, None, &mut out);
        assert_eq!(out, vec![sq(2, 4), sq(3, 4)]);
    }

    #[test]
    fn double_push_is_blocked_by_piece_on_skipped_square() {
        let mut board = Board::standard();
        board.set(sq(2, 4), Some(Piece::moved(Color::Black, PieceKind::Knight)));
        let e2 = sq(1, 4);
        let pawn = board.piece_at(e2).expect("pawn on e2");
        let mut out = Vec::new();
        generate_pawn_moves(&board, e2, pawn, None, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn diagonal_requires_enemy_piece() {
        let mut board = parse_placement("4k3/8/8/8/8/3p1N2/4P3/4K3").expect("placement should parse");
        let e2 = sq(1, 4);
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        board.set(e2, Some(pawn));
        let mut out = Vec::new();
        generate_pawn_moves(&board, e2, pawn, None, &mut out);
        assert!(out.contains(&sq(2, 3)));
        assert!(!out.contains(&sq(2, 5)));
    }

    #[test]
    fn en_passant_needs_an_adjacent_double_step() {
        let board = parse_placement("4k3/8/8/3pP3/8/8/8/4K3").expect("placement should parse");
        let e5 = sq(4, 4);
        let pawn = Piece::moved(Color::White, PieceKind::Pawn);
        let double_step = LastMove {
            from: sq(6, 3),
            to: sq(4, 3),
            piece: Piece::moved(Color::Black, PieceKind::Pawn),
        };
        assert_eq!(
            en_passant_destination(&board, e5, pawn, Some(&double_step)),
            Some(sq(5, 3))
        );

        let single_step = LastMove {
            from: sq(5, 3),
            ..double_step
        };
        assert_eq!(en_passant_destination(&board, e5, pawn, Some(&single_step)), None);
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_rejected() {
        // Removing both pawns from rank 5 opens the rook's line to the king.
        let board = parse_placement("7k/8/8/K2pP2r/8/8/8/8").expect("placement should parse");
        let e5 = sq(4, 4);
        let pawn = Piece::moved(Color::White, PieceKind::Pawn);
        let last = LastMove {
            from: sq(6, 3),
            to: sq(4, 3),
            piece: Piece::moved(Color::Black, PieceKind::Pawn),
        };
        assert_eq!(en_passant_destination(&board, e5, pawn, Some(&last)), None);
    }
}
