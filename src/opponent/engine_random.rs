//! Random-move suggester.
//!
//! Selects uniformly from legal moves. Used for self-play, integration tests,
//! and as an offline stand-in for the remote suggestion service.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::SuggestError;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveRequest;
use crate::opponent::engine_trait::MoveSuggester;

pub struct RandomSuggester {
    rng: StdRng,
}

impl RandomSuggester {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic sequence of suggestions for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSuggester {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSuggester for RandomSuggester {
    fn name(&self) -> &str {
        "random"
    }

    fn suggest_move(&mut self, position_notation: &str, _strength: u8) -> Result<MoveRequest, SuggestError> {
        let game_state = GameState::from_fen(position_notation)?;
        let legal_moves: Vec<MoveRequest> = game_state.legal_moves().collect();
        legal_moves
            .as_slice()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SuggestError::NoMoveAvailable)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomSuggester;
    use crate::errors::SuggestError;
    use crate::game_state::game_state::GameState;
    use crate::opponent::engine_trait::MoveSuggester;

    #[test]
    fn suggestions_are_legal() {
        let mut suggester = RandomSuggester::seeded(7);
        let mut game = GameState::new();
        for _ in 0..40 {
            if game.is_game_over() {
                break;
            }
            let request = suggester
                .suggest_move(game.position_notation(), 1)
                .expect("a live game always has a move");
            assert!(game.legal_destinations(request.from).contains(&request.to));
            game.apply_request(&request).expect("suggested move should be legal");
        }
    }

    #[test]
    fn same_seed_same_suggestion() {
        let game = GameState::new();
        let a = RandomSuggester::seeded(42).suggest_move(game.position_notation(), 1);
        let b = RandomSuggester::seeded(42).suggest_move(game.position_notation(), 1);
        assert_eq!(a, b);
    }

    #[test]
    fn mated_side_gets_no_suggestion() {
        let mut suggester = RandomSuggester::seeded(1);
        let result = suggester.suggest_move(
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            1,
        );
        assert_eq!(result, Err(SuggestError::NoMoveAvailable));
    }

    #[test]
    fn unreadable_position_is_reported() {
        let mut suggester = RandomSuggester::seeded(1);
        assert!(matches!(
            suggester.suggest_move("not a position", 1),
            Err(SuggestError::Notation(_))
        ));
    }
}
