//! Perft node counting over the legal move generator.
//!
//! Walks the move tree on scratch boards, so draw rules never cut a branch
//! short. Promotions count once per promotion piece.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move_to_board, is_promotion_move};
use crate::move_generation::legal_move_generator::generate_safe_squares;
use crate::moves::move_descriptions::{LastMove, MoveRequest};

const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

pub fn perft(game_state: &GameState, depth: u8) -> u64 {
    perft_position(
        game_state.board(),
        game_state.side_to_move(),
        game_state.last_move().as_ref(),
        depth,
    )
}

/// Per-root-move node counts, sorted by move text.
pub fn perft_divide(game_state: &GameState, depth: u8) -> Vec<(MoveRequest, u64)> {
    let mut out = Vec::new();
    if depth == 0 {
        return out;
    }

    let side = game_state.side_to_move();
    for_each_child(game_state.board(), side, game_state.last_move().as_ref(), |request, board, last| {
        let nodes = perft_position(&board, side.opposite(), Some(&last), depth - 1);
        out.push((request, nodes));
    });
    out.sort_by_key(|(request, _)| request.to_string());
    out
}

fn perft_position(board: &Board, side: Color, last_move: Option<&LastMove>, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let mut nodes = 0u64;
    for_each_child(board, side, last_move, |_, child, last| {
        nodes += if depth == 1 {
            1
        } else {
            perft_position(&child, side.opposite(), Some(&last), depth - 1)
        };
    });
    nodes
}

fn for_each_child<F>(board: &Board, side: Color, last_move: Option<&LastMove>, mut visit: F)
where
    F: FnMut(MoveRequest, Board, LastMove),
{
    let safe = generate_safe_squares(board, side, last_move);
    for (from, destinations) in &safe {
        let Some(piece) = board.piece_at(*from) else {
            continue;
        };
        for to in destinations {
            let last = LastMove {
                from: *from,
                to: *to,
                piece,
            };
            if is_promotion_move(piece, *to) {
                for kind in PROMOTION_CHOICES {
                    let mut child = *board;
                    apply_move_to_board(&mut child, *from, *to, Some(kind));
                    visit(MoveRequest::with_promotion(*from, *to, kind), child, last);
                }
            } else {
                let mut child = *board;
                apply_move_to_board(&mut child, *from, *to, None);
                visit(MoveRequest::new(*from, *to), child, last);
            }
        }
    }
}
