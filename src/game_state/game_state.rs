//! The game aggregate and its move executor.
//!
//! `GameState` owns the board, turn, clocks, repetition table, and the cached
//! legal-move map. `apply_move` is the only mutator: it validates against the
//! cached safe squares before touching anything, so a rejected move leaves
//! every observable field unchanged.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::errors::{MoveError, NotationError};
use crate::game_state::board::BoardView;
use crate::game_state::chess_rules::{FIFTY_MOVE_RULE_PLIES, REPETITION_LIMIT};
use crate::game_state::chess_types::*;
use crate::game_state::termination::{is_insufficient_material, Termination};
use crate::move_generation::legal_move_apply::{apply_move_to_board, is_promotion_move};
use crate::move_generation::legal_move_checks::check_state;
use crate::move_generation::legal_move_generator::generate_safe_squares;
use crate::moves::move_descriptions::{LastMove, MoveRequest, SafeSquares};
use crate::utils::fen_generator::{generate_fen, position_signature};
use crate::utils::fen_parser::parse_fen;
use crate::utils::long_algebraic::long_algebraic_to_move_request;

#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    safe_squares: SafeSquares,
    last_move: Option<LastMove>,
    check_state: CheckState,

    // Plies since the last pawn move or capture.
    halfmove_clock: u16,
    fullmove_number: u16,

    // Reduced position signature -> occurrences.
    repetitions: HashMap<String, u8>,
    position_notation: String,
    termination: Option<Termination>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// A new game from the standard initial array.
    pub fn new() -> Self {
        Self::from_parts(Board::standard(), Color::White, None, 0, 1)
    }

    /// Imports a position string. The position is not checked for legality.
    pub fn from_fen(fen: &str) -> Result<Self, NotationError> {
        let parsed = parse_fen(fen)?;
        Ok(Self::from_parts(
            parsed.board,
            parsed.side_to_move,
            parsed.last_move,
            parsed.halfmove_clock,
            parsed.fullmove_number,
        ))
    }

    fn from_parts(
        board: Board,
        side_to_move: Color,
        last_move: Option<LastMove>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut game = Self {
            board,
            side_to_move,
            safe_squares: SafeSquares::new(),
            last_move,
            check_state: CheckState::clear(),
            halfmove_clock,
            fullmove_number,
            repetitions: HashMap::new(),
            position_notation: String::new(),
            termination: None,
        };
        game.settle();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_view(&self) -> BoardView {
        self.board.view()
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn safe_squares(&self) -> &SafeSquares {
        &self.safe_squares
    }

    /// Legal destinations from `from`; empty when the square has none.
    pub fn legal_destinations(&self, from: Square) -> &[Square] {
        self.safe_squares.get(&from).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every legal move of the side to move, promotions left at their default.
    pub fn legal_moves(&self) -> impl Iterator<Item = MoveRequest> + '_ {
        self.safe_squares
            .iter()
            .flat_map(|(from, destinations)| destinations.iter().map(|to| MoveRequest::new(*from, *to)))
    }

    pub fn check_state(&self) -> CheckState {
        self.check_state
    }

    pub fn last_move(&self) -> Option<LastMove> {
        self.last_move
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub fn is_game_over(&self) -> bool {
        self.termination.is_some()
    }

    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    pub fn termination_message(&self) -> Option<String> {
        self.termination.map(|outcome| outcome.to_string())
    }

    /// Six-field position string of the current position.
    pub fn position_notation(&self) -> &str {
        &self.position_notation
    }

    /// Times the current reduced position has occurred, this one included.
    pub fn repetition_count(&self) -> u8 {
        self.repetitions
            .get(&position_signature(&self.position_notation))
            .copied()
            .unwrap_or(0)
    }

    /// Plays `from -> to`. A promoting pawn without `promotion` becomes a queen.
    pub fn apply_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<(), MoveError> {
        let result = self
            .validate_move(from, to, promotion)
            .map(|mover| self.execute_move(from, to, promotion, mover));
        if let Err(err) = &result {
            debug!(%from, %to, error = %err, "move rejected");
        }
        result
    }

    /// Plays a move given as raw `(rank, file)` pairs; off-board pairs are invalid moves.
    pub fn apply_move_coords(
        &mut self,
        from: (i32, i32),
        to: (i32, i32),
        promotion: Option<PieceKind>,
    ) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        match (
            Square::from_coords(from.0, from.1),
            Square::from_coords(to.0, to.1),
        ) {
            (Some(from), Some(to)) => self.apply_move(from, to, promotion),
            _ => {
                let err = MoveError::InvalidMove(format!("{from:?} -> {to:?} is off the board"));
                debug!(error = %err, "move rejected");
                Err(err)
            }
        }
    }

    pub fn apply_request(&mut self, request: &MoveRequest) -> Result<(), MoveError> {
        self.apply_move(request.from, request.to, request.promotion)
    }

    /// Plays a move in coordinate text such as `e2e4` or `e7e8q`.
    pub fn apply_long_algebraic(&mut self, text: &str) -> Result<(), MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }
        let request = long_algebraic_to_move_request(text)
            .map_err(|err| MoveError::InvalidMove(err.to_string()))?;
        self.apply_request(&request)
    }

    /// Checks every precondition without mutating; returns the moving piece.
    fn validate_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Piece, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameAlreadyOver);
        }

        let mover = self
            .board
            .piece_at(from)
            .filter(|piece| piece.color == self.side_to_move)
            .ok_or(MoveError::NoPieceOrWrongSide(from))?;

        if !self.legal_destinations(from).contains(&to) {
            return Err(MoveError::InvalidMove(format!("{from}{to}")));
        }

        if let Some(kind) = promotion {
            if !kind.is_promotion_target() || !is_promotion_move(mover, to) {
                return Err(MoveError::InvalidPromotion(kind));
            }
        }

        Ok(mover)
    }

    fn execute_move(&mut self, from: Square, to: Square, promotion: Option<PieceKind>, mover: Piece) {
        let effects = apply_move_to_board(&mut self.board, from, to, promotion);

        if effects.resets_halfmove_clock() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        self.last_move = Some(LastMove {
            from,
            to,
            piece: mover,
        });
        if self.side_to_move == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opposite();

        self.settle();

        let played = MoveRequest {
            from,
            to,
            promotion: effects.promotion,
        };
        debug!(
            mv = %played,
            captured = ?effects.captured.map(|piece| piece.kind),
            en_passant = effects.en_passant,
            castle = ?effects.castle,
            fen = %self.position_notation,
            "move applied"
        );
    }

    /// Recomputes every derived field for the side to move and records the
    /// position for repetition.
    fn settle(&mut self) {
        self.check_state = check_state(&self.board, self.side_to_move);
        self.safe_squares = generate_safe_squares(&self.board, self.side_to_move, self.last_move.as_ref());
        self.position_notation = generate_fen(
            &self.board,
            self.side_to_move,
            self.last_move.as_ref(),
            self.halfmove_clock,
            self.fullmove_number,
        );

        let occurrences = self
            .repetitions
            .entry(position_signature(&self.position_notation))
            .or_insert(0);
        *occurrences = occurrences.saturating_add(1);
        let occurrences = *occurrences;

        self.termination = self.detect_termination(occurrences);
        if let Some(outcome) = self.termination {
            info!(%outcome, fen = %self.position_notation, "game over");
        }
    }

    fn detect_termination(&self, occurrences: u8) -> Option<Termination> {
        if is_insufficient_material(&self.board) {
            return Some(Termination::InsufficientMaterial);
        }
        if self.safe_squares.is_empty() {
            return Some(if self.check_state.in_check {
                Termination::Checkmate {
                    winner: self.side_to_move.opposite(),
                }
            } else {
                Termination::Stalemate
            });
        }
        if occurrences >= REPETITION_LIMIT {
            return Some(Termination::ThreefoldRepetition);
        }
        if self.halfmove_clock >= FIFTY_MOVE_RULE_PLIES {
            return Some(Termination::FiftyMoveRule);
        }
        None
    }
}
