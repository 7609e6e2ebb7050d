//! Game-ending conditions.
//!
//! Draw and win detection evaluated after every executed move, in priority
//! order: insufficient material, no legal moves, threefold repetition, then
//! the fifty-move rule.

use std::fmt;

use crate::game_state::chess_types::*;

/// How a finished game ended. `Display` gives the termination message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    Checkmate { winner: Color },
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl Termination {
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            Termination::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_draw(self) -> bool {
        self.winner().is_none()
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Termination::Checkmate { winner } => write!(f, "{winner} won by checkmate"),
            Termination::Stalemate => f.write_str("Stalemate"),
            Termination::InsufficientMaterial => f.write_str("Draw due to insufficient material"),
            Termination::ThreefoldRepetition => f.write_str("Draw due to threefold repetition"),
            Termination::FiftyMoveRule => f.write_str("Draw due to fifty move rule"),
        }
    }
}

/// True when neither side can possibly deliver mate.
pub fn is_insufficient_material(board: &Board) -> bool {
    let white: Vec<(Square, PieceKind)> = non_king_pieces(board, Color::White);
    let black: Vec<(Square, PieceKind)> = non_king_pieces(board, Color::Black);

    match (white.as_slice(), black.as_slice()) {
        ([], []) => true,
        ([(_, kind)], []) | ([], [(_, kind)]) => {
            matches!(kind, PieceKind::Knight | PieceKind::Bishop)
        }
        ([(white_sq, PieceKind::Bishop)], [(black_sq, PieceKind::Bishop)]) => {
            white_sq.is_dark() == black_sq.is_dark()
        }
        (pieces, []) | ([], pieces) => only_two_knights(pieces) || only_same_color_bishops(pieces),
        _ => false,
    }
}

fn non_king_pieces(board: &Board, color: Color) -> Vec<(Square, PieceKind)> {
    board
        .pieces_of(color)
        .filter(|(_, piece)| piece.kind != PieceKind::King)
        .map(|(sq, piece)| (sq, piece.kind))
        .collect()
}

fn only_two_knights(pieces: &[(Square, PieceKind)]) -> bool {
    pieces.len() == 2 && pieces.iter().all(|(_, kind)| *kind == PieceKind::Knight)
}

fn only_same_color_bishops(pieces: &[(Square, PieceKind)]) -> bool {
    let Some((first, _)) = pieces.first() else {
        return false;
    };
    pieces
        .iter()
        .all(|(sq, kind)| *kind == PieceKind::Bishop && sq.is_dark() == first.is_dark())
}
