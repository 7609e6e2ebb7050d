//! Full legal move generation.
//!
//! Walks every piece of the side to move, enumerates its pseudo-legal
//! destinations per kind, and keeps only those that leave the mover's king
//! unattacked. Castling and en passant are folded in by the king and pawn
//! generators.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::is_safe_after_move;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::moves::move_descriptions::{LastMove, SafeSquares};

pub fn generate_safe_squares(board: &Board, side: Color, last_move: Option<&LastMove>) -> SafeSquares {
    let mut safe = SafeSquares::new();
    let mut destinations = Vec::with_capacity(28);

    for (from, piece) in board.pieces_of(side) {
        destinations.clear();
        generate_piece_moves(board, from, piece, last_move, &mut destinations);
        if !destinations.is_empty() {
            safe.insert(from, destinations.clone());
        }
    }

    safe
}

/// Legal destinations of the piece on `from`, in direction order.
pub fn generate_piece_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    last_move: Option<&LastMove>,
    out: &mut Vec<Square>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, last_move, out),
        PieceKind::King => generate_king_moves(board, from, piece, out),
        PieceKind::Knight => generate_step_moves(board, from, piece, out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slide_moves(board, from, piece, out)
        }
    }
}

fn generate_step_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    for &(d_rank, d_file) in piece.kind.directions(piece.color) {
        if let Some(to) = from.offset(d_rank, d_file) {
            if is_safe_after_move(board, from, to, None) {
                out.push(to);
            }
        }
    }
}

fn generate_slide_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<Square>) {
    for &(d_rank, d_file) in piece.kind.directions(piece.color) {
        let mut next = from.offset(d_rank, d_file);
        while let Some(to) = next {
            let occupant = board.piece_at(to);
            if occupant.is_some_and(|other| other.color == piece.color) {
                break;
            }
            if is_safe_after_move(board, from, to, None) {
                out.push(to);
            }
            if occupant.is_some() {
                break;
            }
            next = to.offset(d_rank, d_file);
        }
    }
}
