//! Board-level move application.
//!
//! Assumes the move was already validated against the safe squares; performs
//! the move plus its castling, en-passant, and promotion side effects.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_moves_king::CastleSide;

/// What a move did besides relocating the mover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveEffects {
    pub moved: Option<Piece>,
    pub captured: Option<Piece>,
    pub castle: Option<CastleSide>,
    pub en_passant: bool,
    pub promotion: Option<PieceKind>,
}

impl MoveEffects {
    /// Pawn moves and captures reset the fifty-move count.
    #[inline]
    pub fn resets_halfmove_clock(&self) -> bool {
        self.captured.is_some() || self.moved.is_some_and(|piece| piece.kind == PieceKind::Pawn)
    }
}

/// Whether moving `piece` to `to` requires a promotion choice.
#[inline]
pub fn is_promotion_move(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank()
}

/// Applies a validated move. A promoting pawn without an explicit kind becomes a queen.
pub fn apply_move_to_board(
    board: &mut Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> MoveEffects {
    let Some(mut piece) = board.take(from) else {
        return MoveEffects::default();
    };
    let mut effects = MoveEffects {
        moved: Some(piece),
        captured: board.piece_at(to),
        ..MoveEffects::default()
    };

    if matches!(piece.kind, PieceKind::King | PieceKind::Rook | PieceKind::Pawn) {
        piece.has_moved = true;
    }

    match piece.kind {
        PieceKind::King => {
            if let Some(side) = CastleSide::from_king_move(from, to) {
                relocate_castling_rook(board, from.rank(), side);
                effects.castle = Some(side);
            }
        }
        PieceKind::Pawn => {
            if from.file() != to.file() && board.is_empty_at(to) {
                if let Some(victim) = Square::new(from.rank(), to.file()) {
                    effects.captured = board.take(victim);
                    effects.en_passant = true;
                }
            }
            if is_promotion_move(piece, to) {
                let kind = promotion.unwrap_or(PieceKind::Queen);
                piece = Piece::moved(piece.color, kind);
                effects.promotion = Some(kind);
            }
        }
        PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {}
    }

    board.set(to, Some(piece));
    effects
}

fn relocate_castling_rook(board: &mut Board, rank: u8, side: CastleSide) {
    let (Some(rook_from), Some(rook_to)) = (
        Square::new(rank, side.rook_file()),
        Square::new(rank, side.rook_target_file()),
    ) else {
        return;
    };
    if let Some(mut rook) = board.take(rook_from) {
        rook.has_moved = true;
        board.set(rook_to, Some(rook));
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_move_to_board, is_promotion_move};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_moves_king::CastleSide;
    use crate::utils::fen_parser::parse_placement;

    fn sq(rank: u8, file: u8) -> Square {
        Square::new(rank, file).expect("test square is on the board")
    }

    #[test]
    fn queenside_castle_moves_the_rook_and_marks_it() {
        let mut board = parse_placement("4k3/8/8/8/8/8/8/R3K3").expect("placement should parse");
        let effects = apply_move_to_board(&mut board, sq(0, 4), sq(0, 2), None);
        assert_eq!(effects.castle, Some(CastleSide::Queenside));
        assert!(board.is_empty_at(sq(0, 0)));
        let rook = board.piece_at(sq(0, 3)).expect("rook on d1");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
        assert!(board.piece_at(sq(0, 2)).is_some_and(|king| king.has_moved));
    }

    #[test]
    fn en_passant_removes_the_pawn_beside_the_mover() {
        let mut board = parse_placement("4k3/8/8/3pP3/8/8/8/4K3").expect("placement should parse");
        let effects = apply_move_to_board(&mut board, sq(4, 4), sq(5, 3), None);
        assert!(effects.en_passant);
        assert_eq!(effects.captured.map(|p| p.kind), Some(PieceKind::Pawn));
        assert!(board.is_empty_at(sq(4, 3)));
        assert!(board.is_empty_at(sq(4, 4)));
        assert_eq!(board.piece_at(sq(5, 3)).map(|p| p.color), Some(Color::White));
        assert!(effects.resets_halfmove_clock());
    }

    #[test]
    fn promotion_substitutes_a_moved_piece() {
        let mut board = parse_placement("7k/1P6/8/8/8/8/8/K7").expect("placement should parse");
        let b7 = sq(6, 1);
        let b8 = sq(7, 1);
        let pawn = board.piece_at(b7).expect("pawn on b7");
        assert!(is_promotion_move(pawn, b8));

        let effects = apply_move_to_board(&mut board, b7, b8, Some(PieceKind::Knight));
        assert_eq!(effects.promotion, Some(PieceKind::Knight));
        assert_eq!(board.piece_at(b8), Some(Piece::moved(Color::White, PieceKind::Knight)));

        let mut board = parse_placement("7k/1P6/8/8/8/8/8/K7").expect("placement should parse");
        apply_move_to_board(&mut board, b7, b8, None);
        assert_eq!(board.piece_at(b8).map(|p| p.kind), Some(PieceKind::Queen));
    }
}
