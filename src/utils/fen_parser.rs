//! Position notation (FEN) decoder.
//!
//! Checks syntax only; a decoded position is not validated for legality.
//! Move flags are inferred: pawns off their start rank count as moved, and a
//! king or rook counts as unmoved only when a castling right depends on it.

use crate::errors::NotationError;
use crate::game_state::chess_rules::{KINGSIDE_ROOK_FILE, KING_HOME_FILE, QUEENSIDE_ROOK_FILE};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::LastMove;
use crate::utils::algebraic::algebraic_to_square;

/// Every field of a decoded position string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPosition {
    pub board: Board,
    pub side_to_move: Color,
    /// Double pawn step implied by the en-passant field.
    pub last_move: Option<LastMove>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct CastlingFlags {
    // [color][kingside, queenside]
    rights: [[bool; 2]; 2],
}

pub fn parse_fen(fen: &str) -> Result<ParsedPosition, NotationError> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or(NotationError::MissingField("piece placement"))?;
    let side_part = parts.next().ok_or(NotationError::MissingField("side to move"))?;
    let castling_part = parts.next().ok_or(NotationError::MissingField("castling rights"))?;
    let en_passant_part = parts.next().ok_or(NotationError::MissingField("en passant"))?;
    let halfmove_part = parts.next().ok_or(NotationError::MissingField("halfmove clock"))?;
    let fullmove_part = parts.next().ok_or(NotationError::MissingField("fullmove number"))?;

    if parts.next().is_some() {
        return Err(NotationError::ExtraFields);
    }

    let mut board = parse_placement(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling = parse_castling_rights(castling_part)?;
    apply_castling_flags(&mut board, castling);
    let last_move = parse_en_passant(en_passant_part, side_to_move)?;

    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| NotationError::InvalidCounter(halfmove_part.to_owned()))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| NotationError::InvalidCounter(fullmove_part.to_owned()))?;

    Ok(ParsedPosition {
        board,
        side_to_move,
        last_move,
        halfmove_clock,
        fullmove_number,
    })
}

/// Decodes the piece-placement field alone.
pub fn parse_placement(board_part: &str) -> Result<Board, NotationError> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(NotationError::InvalidPlacement(
            "placement must contain 8 ranks".to_owned(),
        ));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(NotationError::InvalidPlacement(format!(
                        "invalid empty-square count '{ch}'"
                    )));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(NotationError::InvalidPlacement(format!(
                        "rank {} has too many files",
                        rank + 1
                    )));
                }
                continue;
            }

            let mut piece = Piece::from_fen_char(ch).ok_or_else(|| {
                NotationError::InvalidPlacement(format!("invalid piece character '{ch}'"))
            })?;
            let square = Square::new(rank, file).ok_or_else(|| {
                NotationError::InvalidPlacement(format!("rank {} has too many files", rank + 1))
            })?;

            if piece.kind == PieceKind::Pawn && rank != piece.color.pawn_start_rank() {
                piece.has_moved = true;
            }
            board.set(square, Some(piece));
            file += 1;
        }

        if file != 8 {
            return Err(NotationError::InvalidPlacement(format!(
                "rank {} does not sum to 8 files",
                rank + 1
            )));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> Result<Color, NotationError> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(NotationError::InvalidSideToMove(side_part.to_owned())),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingFlags, NotationError> {
    let mut flags = CastlingFlags::default();
    if castling_part == "-" {
        return Ok(flags);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => flags.rights[Color::White.index()][0] = true,
            'Q' => flags.rights[Color::White.index()][1] = true,
            'k' => flags.rights[Color::Black.index()][0] = true,
            'q' => flags.rights[Color::Black.index()][1] = true,
            _ => return Err(NotationError::InvalidCastling(ch)),
        }
    }

    Ok(flags)
}

/// Marks every king and rook as moved except those a castling right needs.
fn apply_castling_flags(board: &mut Board, castling: CastlingFlags) {
    let placed: Vec<(Square, Piece)> = board
        .pieces()
        .filter(|(_, piece)| matches!(piece.kind, PieceKind::King | PieceKind::Rook))
        .collect();

    for (square, mut piece) in placed {
        let rights = castling.rights[piece.color.index()];
        let on_home_rank = square.rank() == piece.color.home_rank();
        let unmoved = on_home_rank
            && match (piece.kind, square.file()) {
                (PieceKind::King, KING_HOME_FILE) => rights[0] || rights[1],
                (PieceKind::Rook, KINGSIDE_ROOK_FILE) => rights[0],
                (PieceKind::Rook, QUEENSIDE_ROOK_FILE) => rights[1],
                _ => false,
            };
        piece.has_moved = !unmoved;
        board.set(square, Some(piece));
    }
}

/// Rebuilds the double pawn step that produced an en-passant target.
fn parse_en_passant(
    en_passant_part: &str,
    side_to_move: Color,
) -> Result<Option<LastMove>, NotationError> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let target = algebraic_to_square(en_passant_part)?;
    let pawn_color = side_to_move.opposite();
    let start_rank = pawn_color.pawn_start_rank();
    let skipped_rank = (start_rank as i8 + pawn_color.forward()) as u8;
    if target.rank() != skipped_rank {
        return Err(NotationError::InvalidSquare(en_passant_part.to_owned()));
    }

    let landed_rank = (start_rank as i8 + 2 * pawn_color.forward()) as u8;
    let (Some(from), Some(to)) = (
        Square::new(start_rank, target.file()),
        Square::new(landed_rank, target.file()),
    ) else {
        return Err(NotationError::InvalidSquare(en_passant_part.to_owned()));
    };

    Ok(Some(LastMove {
        from,
        to,
        piece: Piece::moved(pawn_color, PieceKind::Pawn),
    }))
}

#[cfg(test)]
mod tests {
    use super::{parse_fen, parse_placement};
    use crate::errors::NotationError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_generator::generate_fen;

    #[test]
    fn round_trip_starting_position_fen() {
        let parsed = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(parsed.board, Board::standard());
        assert_eq!(parsed.side_to_move, Color::White);
        assert_eq!(parsed.halfmove_clock, 0);
        assert_eq!(parsed.fullmove_number, 1);
        assert_eq!(parsed.last_move, None);
    }

    #[test]
    fn round_trip_custom_position_fen() {
        let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQ1RK1 b kq - 4 6";
        let parsed = parse_fen(fen).expect("custom FEN should parse");
        let generated = generate_fen(
            &parsed.board,
            parsed.side_to_move,
            parsed.last_move.as_ref(),
            parsed.halfmove_clock,
            parsed.fullmove_number,
        );
        assert_eq!(generated, fen);

        let g1 = Square::new(0, 6).expect("g1");
        assert!(parsed.board.piece_at(g1).is_some_and(|king| king.has_moved));
    }

    #[test]
    fn en_passant_field_rebuilds_the_double_step() {
        let fen = "rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 3";
        let parsed = parse_fen(fen).expect("FEN should parse");
        let last = parsed.last_move.expect("double step should be rebuilt");
        assert_eq!(last.from, Square::new(1, 4).expect("e2"));
        assert_eq!(last.to, Square::new(3, 4).expect("e4"));
        assert_eq!(last.piece.color, Color::White);

        let bad = "8/8/8/8/8/8/8/K6k b - e4 0 1";
        assert_eq!(parse_fen(bad), Err(NotationError::InvalidSquare("e4".to_owned())));
    }

    #[test]
    fn malformed_fields_are_reported() {
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w - -"),
            Err(NotationError::MissingField("halfmove clock"))
        );
        assert!(matches!(
            parse_placement("8/8/8/8/8/8/8/K6k1"),
            Err(NotationError::InvalidPlacement(_))
        ));
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k x - - 0 1"),
            Err(NotationError::InvalidSideToMove("x".to_owned()))
        );
        assert_eq!(
            parse_fen("8/8/8/8/8/8/8/K6k w X - 0 1"),
            Err(NotationError::InvalidCastling('X'))
        );
    }
}
