//! Boundary to the opponent-move-suggestion collaborator.
//!
//! The core never searches for a best move. A suggester receives the position
//! string and a strength level, answers with a move, and that move is played
//! through `GameState::apply_move` exactly like a human move.

use tracing::debug;

use crate::errors::{OpponentError, SuggestError};
use crate::game_state::chess_rules::LEVEL_DEPTHS;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::MoveRequest;

pub trait MoveSuggester {
    fn name(&self) -> &str;

    /// Suggests a move for the side to move in `position_notation`.
    /// `strength` is the remote engine depth derived from the computer level.
    fn suggest_move(&mut self, position_notation: &str, strength: u8) -> Result<MoveRequest, SuggestError>;
}

/// Which side the computer plays and how strongly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerConfig {
    pub color: Color,
    level: u8,
}

impl Default for ComputerConfig {
    fn default() -> Self {
        Self {
            color: Color::Black,
            level: 1,
        }
    }
}

impl ComputerConfig {
    pub fn new(color: Color, level: u8) -> Result<Self, OpponentError> {
        if depth_for_level(level).is_none() {
            return Err(OpponentError::InvalidLevel(level));
        }
        Ok(Self { color, level })
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Search depth requested from the suggestion service.
    pub fn depth(&self) -> u8 {
        depth_for_level(self.level).unwrap_or(1)
    }
}

pub fn depth_for_level(level: u8) -> Option<u8> {
    LEVEL_DEPTHS
        .iter()
        .find(|(candidate, _)| *candidate == level)
        .map(|(_, depth)| *depth)
}

/// Lets the computer move when it is its turn. Returns the move played, or
/// `None` when it is the human's turn or the game is over.
pub fn play_computer_turn(
    game_state: &mut GameState,
    suggester: &mut dyn MoveSuggester,
    config: &ComputerConfig,
) -> Result<Option<MoveRequest>, OpponentError> {
    if game_state.is_game_over() || game_state.side_to_move() != config.color {
        return Ok(None);
    }

    let request = suggester.suggest_move(game_state.position_notation(), config.depth())?;
    debug!(suggester = suggester.name(), mv = %request, depth = config.depth(), "suggestion received");
    game_state.apply_request(&request)?;
    Ok(Some(request))
}
