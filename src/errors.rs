//! Error types returned by the move executor, notation codecs, and the
//! opponent-suggestion boundary.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

/// Why `GameState::apply_move` refused a move. A refused move never changes
/// any observable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the game is already over")]
    GameAlreadyOver,

    /// Destination not among the safe squares of the origin, or coordinates
    /// off the board. Payload describes the attempted move.
    #[error("invalid move: {0}")]
    InvalidMove(String),

    #[error("no piece of the side to move on {0}")]
    NoPieceOrWrongSide(Square),

    /// Promotion to a pawn or king, or a promotion kind on a non-promoting move.
    #[error("invalid promotion to {0:?}")]
    InvalidPromotion(PieceKind),
}

/// Failures while reading position notation or coordinate move text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("missing {0} field in position notation")]
    MissingField(&'static str),

    #[error("position notation has extra trailing fields")]
    ExtraFields,

    #[error("invalid piece placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid side-to-move field: {0}")]
    InvalidSideToMove(String),

    #[error("invalid castling rights character: {0}")]
    InvalidCastling(char),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid counter: {0}")]
    InvalidCounter(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),
}

/// Failures of a move-suggestion collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SuggestError {
    #[error("no legal move available to suggest")]
    NoMoveAvailable,

    #[error("suggester could not read the position: {0}")]
    Notation(#[from] NotationError),
}

/// Failures while letting the computer side play a move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OpponentError {
    #[error(transparent)]
    Suggest(#[from] SuggestError),

    #[error("suggested move was rejected: {0}")]
    Rejected(#[from] MoveError),

    #[error("computer level {0} is outside 1..=5")]
    InvalidLevel(u8),
}
