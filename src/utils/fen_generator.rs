//! Position notation (FEN) encoder and the repetition signature derived from it.

use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, KING_HOME_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::LastMove;

/// Number of leading notation fields that identify a position for repetition.
const SIGNATURE_FIELDS: usize = 4;

pub fn generate_fen(
    board: &Board,
    side_to_move: Color,
    last_move: Option<&LastMove>,
    halfmove_clock: u16,
    fullmove_number: u16,
) -> String {
    let side = match side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };

    format!(
        "{} {} {} {} {} {}",
        generate_board_field(board),
        side,
        generate_castling_field(board),
        generate_en_passant_field(last_move),
        halfmove_clock,
        fullmove_number
    )
}

/// Placement, side, castling, and en-passant fields; the counters are dropped.
pub fn position_signature(fen: &str) -> String {
    fen.split_whitespace()
        .take(SIGNATURE_FIELDS)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn generate_board_field(board: &Board) -> String {
    let mut out = String::with_capacity(72);

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            match Square::new(rank, file).and_then(|sq| board.piece_at(sq)) {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(board: &Board) -> String {
    let mut out = String::new();

    for color in [Color::White, Color::Black] {
        let home = color.home_rank();
        let king_ready = Square::new(home, KING_HOME_FILE)
            .and_then(|sq| board.piece_at(sq))
            .is_some_and(|piece| piece.kind == PieceKind::King && piece.color == color && !piece.has_moved);
        if !king_ready {
            continue;
        }

        for (file, letter) in [(KINGSIDE_ROOK_FILE, 'k'), (QUEENSIDE_ROOK_FILE, 'q')] {
            let rook_ready = Square::new(home, file)
                .and_then(|sq| board.piece_at(sq))
                .is_some_and(|piece| {
                    piece.kind == PieceKind::Rook && piece.color == color && !piece.has_moved
                });
            if rook_ready {
                out.push(match color {
                    Color::White => letter.to_ascii_uppercase(),
                    Color::Black => letter,
                });
            }
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

/// The square a double-stepping pawn skipped over, or `-`.
fn generate_en_passant_field(last_move: Option<&LastMove>) -> String {
    last_move
        .filter(|last| last.is_double_pawn_step())
        .and_then(|last| Square::new((last.from.rank() + last.to.rank()) / 2, last.from.file()))
        .map(|sq| sq.to_string())
        .unwrap_or_else(|| "-".to_owned())
}
