use crate::game_state::chess_rules::{
    KINGSIDE_CASTLE_FILES, KINGSIDE_ROOK_FILE, QUEENSIDE_CASTLE_FILES, QUEENSIDE_ROOK_FILE,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_shared::is_safe_after_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    #[inline]
    pub const fn rook_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_ROOK_FILE,
            CastleSide::Queenside => QUEENSIDE_ROOK_FILE,
        }
    }

    /// File the king lands on.
    #[inline]
    pub const fn king_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_CASTLE_FILES.0,
            CastleSide::Queenside => QUEENSIDE_CASTLE_FILES.0,
        }
    }

    /// File the rook lands on.
    #[inline]
    pub const fn rook_target_file(self) -> u8 {
        match self {
            CastleSide::Kingside => KINGSIDE_CASTLE_FILES.1,
            CastleSide::Queenside => QUEENSIDE_CASTLE_FILES.1,
        }
    }

    #[inline]
    const fn step(self) -> i8 {
        match self {
            CastleSide::Kingside => 1,
            CastleSide::Queenside => -1,
        }
    }

    /// Side a two-file king move castles toward, if it is one.
    pub fn from_king_move(from: Square, to: Square) -> Option<Self> {
        if from.rank() != to.rank() || from.file().abs_diff(to.file()) != 2 {
            return None;
        }
        if to.file() > from.file() {
            Some(CastleSide::Kingside)
        } else {
            Some(CastleSide::Queenside)
        }
    }
}

pub fn generate_king_moves(board: &Board, from: Square, king: Piece, out: &mut Vec<Square>) {
    for &(d_rank, d_file) in PieceKind::King.directions(king.color) {
        if let Some(to) = from.offset(d_rank, d_file) {
            if is_safe_after_move(board, from, to, None) {
                out.push(to);
            }
        }
    }

    for side in [CastleSide::Kingside, CastleSide::Queenside] {
        if can_castle(board, from, king, side) {
            if let Some(to) = Square::new(from.rank(), side.king_target_file()) {
                out.push(to);
            }
        }
    }
}

/// Castling law for the king on `from`.
///
/// Only the two squares the king crosses are tested for attack; the rest of
/// the rook's path only has to be empty.
pub fn can_castle(board: &Board, from: Square, king: Piece, side: CastleSide) -> bool {
    if king.has_moved {
        return false;
    }

    let Some(rook_square) = Square::new(from.rank(), side.rook_file()) else {
        return false;
    };
    match board.piece_at(rook_square) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == king.color && !rook.has_moved => {}
        _ => return false,
    }

    if is_king_in_check(board, king.color) {
        return false;
    }

    let (low, high) = if from.file() < rook_square.file() {
        (from.file(), rook_square.file())
    } else {
        (rook_square.file(), from.file())
    };
    let path_clear = (low + 1..high)
        .filter_map(|file| Square::new(from.rank(), file))
        .all(|sq| board.is_empty_at(sq));
    if !path_clear {
        return false;
    }

    [1, 2].into_iter().all(|distance| {
        from.offset(0, side.step() * distance)
            .is_some_and(|transit| is_safe_after_move(board, from, transit, None))
    })
}
