//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals such as the standard
//! starting position and the thresholds used by the draw rules.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Plies without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_RULE_PLIES: u16 = 100;

/// Occurrences of the same reduced position that end the game.
pub const REPETITION_LIMIT: u8 = 3;

/// File the king starts on for both colors.
pub const KING_HOME_FILE: u8 = 4;
pub const KINGSIDE_ROOK_FILE: u8 = 7;
pub const QUEENSIDE_ROOK_FILE: u8 = 0;
/// Files the king and rook land on after castling (kingside, queenside).
pub const KINGSIDE_CASTLE_FILES: (u8, u8) = (6, 5);
pub const QUEENSIDE_CASTLE_FILES: (u8, u8) = (2, 3);

/// Computer strength level to remote engine search depth.
pub const LEVEL_DEPTHS: [(u8, u8); 5] = [(1, 1), (2, 4), (3, 7), (4, 10), (5, 13)];
