//! Attack detection against a king.
//!
//! Walks every enemy piece's attack vectors outward from its square. Stepping
//! pieces test one square; sliders walk until the first occupied square, which
//! blocks the ray whatever its color.

use crate::game_state::chess_types::*;

/// Returns the square of `defending`'s king if any enemy piece attacks it.
pub fn find_king_attack(board: &Board, defending: Color) -> Option<Square> {
    for (origin, attacker) in board.pieces_of(defending.opposite()) {
        for &(d_rank, d_file) in attacker.kind.attack_directions(attacker.color) {
            let mut next = origin.offset(d_rank, d_file);
            while let Some(target) = next {
                if let Some(hit) = board.piece_at(target) {
                    if hit.kind == PieceKind::King && hit.color == defending {
                        return Some(target);
                    }
                    break;
                }
                if !attacker.kind.slides() {
                    break;
                }
                next = target.offset(d_rank, d_file);
            }
        }
    }
    None
}

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    find_king_attack(board, color).is_some()
}

/// Check state of `color` on `board`.
#[inline]
pub fn check_state(board: &Board, color: Color) -> CheckState {
    match find_king_attack(board, color) {
        Some(king_square) => CheckState::attacked_at(king_square),
        None => CheckState::clear(),
    }
}
