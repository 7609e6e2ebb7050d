//! Core value types shared by the board, generator, and executor.
//!
//! Piece kinds are a closed enum; every movement-law branch elsewhere in the
//! crate matches on `PieceKind` exhaustively and reads its direction table
//! from here.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank delta of a forward pawn step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Back rank of this color (where its king and rooks start).
    #[inline]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => f.write_str("White"),
            Color::Black => f.write_str("Black"),
        }
    }
}

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ROOK_RAYS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const ROYAL_STEPS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
// Forward-1, forward-2, then the two capture diagonals.
const WHITE_PAWN_STEPS: [(i8, i8); 4] = [(1, 0), (2, 0), (1, 1), (1, -1)];
const BLACK_PAWN_STEPS: [(i8, i8); 4] = [(-1, 0), (-2, 0), (-1, 1), (-1, -1)];
const WHITE_PAWN_CAPTURES: [(i8, i8); 2] = [(1, 1), (1, -1)];
const BLACK_PAWN_CAPTURES: [(i8, i8); 2] = [(-1, 1), (-1, -1)];

/// Piece kind (color is stored separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Movement vectors as `(rank delta, file delta)`.
    ///
    /// Pawn vectors depend on color and are filtered by the generator; every
    /// other kind ignores `color`.
    #[inline]
    pub fn directions(self, color: Color) -> &'static [(i8, i8)] {
        match (self, color) {
            (PieceKind::Pawn, Color::White) => &WHITE_PAWN_STEPS,
            (PieceKind::Pawn, Color::Black) => &BLACK_PAWN_STEPS,
            (PieceKind::Knight, _) => &KNIGHT_STEPS,
            (PieceKind::Bishop, _) => &BISHOP_RAYS,
            (PieceKind::Rook, _) => &ROOK_RAYS,
            (PieceKind::Queen, _) | (PieceKind::King, _) => &ROYAL_STEPS,
        }
    }

    /// Vectors along which this kind attacks. Pawns attack diagonally only.
    #[inline]
    pub fn attack_directions(self, color: Color) -> &'static [(i8, i8)] {
        match (self, color) {
            (PieceKind::Pawn, Color::White) => &WHITE_PAWN_CAPTURES,
            (PieceKind::Pawn, Color::Black) => &BLACK_PAWN_CAPTURES,
            _ => self.directions(color),
        }
    }

    /// Whether a direction is walked until blocked rather than stepped once.
    #[inline]
    pub const fn slides(self) -> bool {
        match self {
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => true,
            PieceKind::Pawn | PieceKind::Knight | PieceKind::King => false,
        }
    }

    #[inline]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
        )
    }

    /// Lowercase notation letter.
    #[inline]
    pub const fn fen_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece on the board.
///
/// `has_moved` flips from false to true on the piece's first move and never
/// resets. Only pawns (double step), rooks and kings (castling) consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(color: Color, kind: PieceKind) -> Self {
        Self {
            color,
            kind,
            has_moved: true,
        }
    }

    /// Notation letter: uppercase for White, lowercase for Black.
    #[inline]
    pub const fn fen_char(self) -> char {
        let ch = self.kind.fen_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_fen_char(ch).map(|kind| Piece::new(color, kind))
    }
}

/// Board coordinate. Rank 0 is White's first rank, file 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    #[inline]
    pub const fn new(rank: u8, file: u8) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Self { rank, file })
        } else {
            None
        }
    }

    /// Builds a square from signed coordinates, rejecting anything off the board.
    #[inline]
    pub fn from_coords(rank: i32, file: i32) -> Option<Self> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.file
    }

    #[inline]
    pub fn offset(self, d_rank: i8, d_file: i8) -> Option<Self> {
        Self::from_coords(
            self.rank as i32 + d_rank as i32,
            self.file as i32 + d_file as i32,
        )
    }

    /// Dark squares have an even coordinate sum (a1 is dark).
    #[inline]
    pub const fn is_dark(self) -> bool {
        (self.rank + self.file) % 2 == 0
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            char::from(b'a' + self.file),
            char::from(b'1' + self.rank)
        )
    }
}

/// Whether the side to move is in check, and where its king stands if so.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckState {
    pub in_check: bool,
    pub king_square: Option<Square>,
}

impl CheckState {
    #[inline]
    pub const fn clear() -> Self {
        Self {
            in_check: false,
            king_square: None,
        }
    }

    #[inline]
    pub const fn attacked_at(king_square: Square) -> Self {
        Self {
            in_check: true,
            king_square: Some(king_square),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_tables_match_piece_geometry() {
        assert_eq!(PieceKind::Knight.directions(Color::White).len(), 8);
        assert_eq!(PieceKind::Bishop.directions(Color::Black).len(), 4);
        assert_eq!(PieceKind::Rook.directions(Color::White).len(), 4);
        assert_eq!(PieceKind::Queen.directions(Color::White).len(), 8);
        assert_eq!(PieceKind::King.directions(Color::Black).len(), 8);
        assert!(PieceKind::Queen.slides());
        assert!(!PieceKind::King.slides());
        assert_eq!(PieceKind::Pawn.attack_directions(Color::Black), &[(-1, 1), (-1, -1)]);
    }

    #[test]
    fn square_color_and_bounds() {
        let a1 = Square::new(0, 0).expect("a1 is on the board");
        let h1 = Square::new(0, 7).expect("h1 is on the board");
        assert!(a1.is_dark());
        assert!(!h1.is_dark());
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::all().count(), 64);
        assert_eq!(h1.to_string(), "h1");
    }

    #[test]
    fn piece_letters_carry_color() {
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).fen_char(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).fen_char(), 'q');
        assert_eq!(
            Piece::from_fen_char('K'),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }
}
