//! Coordinate move text (`e2e4`, `e7e8q`), the format remote engines answer with.

use crate::errors::NotationError;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::MoveRequest;
use crate::utils::algebraic::algebraic_to_square;

pub fn long_algebraic_to_move_request(long_algebraic: &str) -> Result<MoveRequest, NotationError> {
    let text = long_algebraic.trim();
    if !text.is_ascii() || (text.len() != 4 && text.len() != 5) {
        return Err(NotationError::InvalidMoveText(long_algebraic.to_owned()));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(char_to_promotion(ch)?),
        None => None,
    };

    Ok(MoveRequest { from, to, promotion })
}

#[inline]
pub fn move_request_to_long_algebraic(request: &MoveRequest) -> String {
    request.to_string()
}

fn char_to_promotion(ch: char) -> Result<PieceKind, NotationError> {
    PieceKind::from_fen_char(ch)
        .filter(|kind| kind.is_promotion_target())
        .ok_or_else(|| NotationError::InvalidMoveText(format!("invalid promotion piece '{ch}'")))
}

impl MoveRequest {
    pub fn from_long_algebraic(text: &str) -> Result<Self, NotationError> {
        long_algebraic_to_move_request(text)
    }

    pub fn to_long_algebraic(&self) -> String {
        move_request_to_long_algebraic(self)
    }
}
