//! Crate root module declarations for the chess rules core.
//!
//! This file exposes the rules subsystems (game state, legal move generation,
//! the opponent-suggestion boundary, and notation helpers) so binaries,
//! tests, and presentation layers can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    #[allow(clippy::module_inception)]
    pub mod game_state;
    pub mod termination;
}

pub mod moves {
    pub mod move_descriptions;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_king;
    pub mod legal_moves_pawn;
    pub mod perft;
}

pub mod opponent {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}

pub use errors::{MoveError, NotationError, OpponentError, SuggestError};
pub use game_state::chess_types::{Board, CheckState, Color, GameState, Piece, PieceKind, Square};
pub use game_state::termination::Termination;
pub use moves::move_descriptions::{LastMove, MoveRequest, SafeSquares};
