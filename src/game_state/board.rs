//! 8x8 mailbox board.
//!
//! `Board` is a small `Copy` array, so legality simulation works on a scratch
//! copy and the live board is never mutated mid-test.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Piece placement as seen by a renderer: `[rank][file]`, rank 0 = White's first rank.
pub type BoardView = [[Option<(Color, PieceKind)>; 8]; 8];

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard initial array with every piece unmoved.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        for (file, kind) in BACK_RANK.iter().copied().enumerate() {
            let file = file as u8;
            for color in [Color::White, Color::Black] {
                if let Some(sq) = Square::new(color.home_rank(), file) {
                    board.set(sq, Some(Piece::new(color, kind)));
                }
                if let Some(sq) = Square::new(color.pawn_start_rank(), file) {
                    board.set(sq, Some(Piece::new(color, PieceKind::Pawn)));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.rank() as usize][square.file() as usize] = piece;
    }

    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.rank() as usize][square.file() as usize].take()
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Occupied squares in rank-major order, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }

    pub fn view(&self) -> BoardView {
        let mut view: BoardView = [[None; 8]; 8];
        for (sq, piece) in self.pieces() {
            view[sq.rank() as usize][sq.file() as usize] = Some((piece.color, piece.kind));
        }
        view
    }
}
