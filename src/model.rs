use crate::coord::{Move, Square};
use std::ops::Index;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Piece {
    WhitePawn,
    WhiteKnight,
    WhiteBishop,
    WhiteRook,
    WhiteQueen,
    WhiteKing,
    BlackPawn,
    BlackKnight,
    BlackBishop,
    BlackRook,
    BlackQueen,
    BlackKing,
    Empty
}

impl Piece {
    pub fn is_white(self) -> bool {
        matches!(self,
            Self::WhitePawn | Self::WhiteKnight | Self::WhiteBishop
            | Self::WhiteRook | Self::WhiteQueen | Self::WhiteKing
        )
    }
    pub fn is_black(self) -> bool {
        matches!(self,
            Self::BlackPawn | Self::BlackKnight | Self::BlackBishop
            | Self::BlackRook | Self::BlackQueen | Self::BlackKing
        )
    }
    /// Display character: uppercase for white, lowercase for black, `-` for empty.
    /// Bishops share the pawn glyph.
    pub fn glyph(self) -> char {
        match self {
            Self::WhitePawn => 'P',
            Self::WhiteKnight => 'N',
            Self::WhiteBishop => 'P',
            Self::WhiteRook => 'R',
            Self::WhiteQueen => 'Q',
            Self::WhiteKing => 'K',
            Self::BlackPawn => 'p',
            Self::BlackKnight => 'n',
            Self::BlackBishop => 'p',
            Self::BlackRook => 'r',
            Self::BlackQueen => 'q',
            Self::BlackKing => 'k',
            Self::Empty => '-'
        }
    }
    /// Numeric code used in JSON snapshots, 0..=12 in declaration order.
    pub fn code(self) -> u8 {
        self as u8
    }
}

const BACK_RANK: [(Piece, Piece); 8] = [
    (Piece::WhiteRook, Piece::BlackRook),
    (Piece::WhiteKnight, Piece::BlackKnight),
    (Piece::WhiteBishop, Piece::BlackBishop),
    (Piece::WhiteQueen, Piece::BlackQueen),
    (Piece::WhiteKing, Piece::BlackKing),
    (Piece::WhiteBishop, Piece::BlackBishop),
    (Piece::WhiteKnight, Piece::BlackKnight),
    (Piece::WhiteRook, Piece::BlackRook)
];

/// 8x8 grid indexed as `rank * 8 + file`, rank 0 being white's back rank.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; 64]
}

impl Board {
    pub fn empty() -> Board {
        Board {
            cells: [Piece::Empty; 64]
        }
    }
    pub fn standard() -> Board {
        let mut board = Board::empty();
        for (file, &(white, black)) in BACK_RANK.iter().enumerate() {
            //Pawns
            board.cells[8 + file] = Piece::WhitePawn;
            board.cells[8 * 6 + file] = Piece::BlackPawn;
            //Pieces
            board.cells[file] = white;
            board.cells[8 * 7 + file] = black;
        }
        board
    }
    pub fn cells(&self) -> &[Piece; 64] {
        &self.cells
    }
    pub fn get(&self, square: Square) -> Piece {
        self.cells[square.index()]
    }
    pub fn set(&mut self, square: Square, piece: Piece) {
        self.cells[square.index()] = piece;
    }
    /// Relocates whatever stands on `from` to `to`, destroying anything on `to`.
    /// No legality checks of any kind.
    pub fn move_piece(&mut self, from: Square, to: Square) {
        let piece = self.get(from);
        self.set(from, Piece::Empty);
        self.set(to, piece);
    }
    pub fn apply(&mut self, mv: Move) {
        self.move_piece(mv.from, mv.to);
    }
}

impl Index<Square> for Board {
    type Output = Piece;
    fn index(&self, square: Square) -> &Piece {
        &self.cells[square.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::parse_square;

    fn sq(token: &str) -> Square {
        parse_square(token).unwrap()
    }

    fn count(board: &Board, pieces: &[Piece]) -> usize {
        board.cells().iter().filter(|p| pieces.contains(p)).count()
    }

    #[test]
    fn test_standard_counts() {
        let board = Board::standard();
        assert_eq!(board.cells().len(), 64);
        assert_eq!(count(&board, &[Piece::WhitePawn, Piece::BlackPawn]), 16);
        assert_eq!(count(&board, &[Piece::WhiteRook, Piece::BlackRook]), 4);
        assert_eq!(count(&board, &[Piece::WhiteKnight, Piece::BlackKnight]), 4);
        assert_eq!(count(&board, &[Piece::WhiteBishop, Piece::BlackBishop]), 4);
        assert_eq!(count(&board, &[Piece::WhiteQueen, Piece::BlackQueen]), 2);
        assert_eq!(count(&board, &[Piece::WhiteKing, Piece::BlackKing]), 2);
        assert_eq!(count(&board, &[Piece::Empty]), 32);
    }
    #[test]
    fn test_standard_sides() {
        let board = Board::standard();
        for (index, piece) in board.cells().iter().enumerate() {
            let rank = index / 8;
            if piece.is_white() {
                assert!(rank <= 1, "white piece on rank {}", rank + 1);
            }
            if piece.is_black() {
                assert!(rank >= 6, "black piece on rank {}", rank + 1);
            }
        }
        assert_eq!(board[sq("d1")], Piece::WhiteQueen);
        assert_eq!(board[sq("e1")], Piece::WhiteKing);
        assert_eq!(board[sq("d8")], Piece::BlackQueen);
        assert_eq!(board[sq("e8")], Piece::BlackKing);
        assert_eq!(board[sq("a8")], Piece::BlackRook);
        assert_eq!(board[sq("g1")], Piece::WhiteKnight);
        assert_eq!(board[sq("f8")], Piece::BlackBishop);
    }
    #[test]
    fn test_classification() {
        assert!(Piece::WhiteKing.is_white());
        assert!(!Piece::WhiteKing.is_black());
        assert!(Piece::BlackPawn.is_black());
        assert!(!Piece::BlackPawn.is_white());
        assert!(!Piece::Empty.is_white());
        assert!(!Piece::Empty.is_black());
    }
    #[test]
    fn test_glyphs() {
        assert_eq!(Piece::WhiteKnight.glyph(), 'N');
        assert_eq!(Piece::BlackQueen.glyph(), 'q');
        assert_eq!(Piece::Empty.glyph(), '-');
        //Bishops render as pawns
        assert_eq!(Piece::WhiteBishop.glyph(), Piece::WhitePawn.glyph());
        assert_eq!(Piece::BlackBishop.glyph(), Piece::BlackPawn.glyph());
    }
    #[test]
    fn test_move_piece() {
        let mut board = Board::standard();
        board.move_piece(sq("e2"), sq("e4"));
        assert_eq!(board[sq("e2")], Piece::Empty);
        assert_eq!(board[sq("e4")], Piece::WhitePawn);
        assert_eq!(board.cells().len(), 64);
    }
    #[test]
    fn test_move_round_trip() {
        let mut board = Board::standard();
        board.move_piece(sq("g1"), sq("f3"));
        board.move_piece(sq("f3"), sq("g1"));
        assert_eq!(board, Board::standard());
    }
    #[test]
    fn test_capture_is_destructive() {
        let mut board = Board::standard();
        //Queen takes the e7 pawn, then retreats
        board.move_piece(sq("d1"), sq("e7"));
        board.move_piece(sq("e7"), sq("d1"));
        assert_eq!(board[sq("d1")], Piece::WhiteQueen);
        assert_eq!(board[sq("e7")], Piece::Empty);
        assert_eq!(board.cells().iter().filter(|&&p| p == Piece::BlackPawn).count(), 7);
    }
    #[test]
    fn test_self_capture_allowed() {
        let mut board = Board::standard();
        board.move_piece(sq("a1"), sq("a2"));
        assert_eq!(board[sq("a1")], Piece::Empty);
        assert_eq!(board[sq("a2")], Piece::WhiteRook);
    }
    #[test]
    fn test_move_to_same_square() {
        let mut board = Board::standard();
        board.move_piece(sq("b1"), sq("b1"));
        assert_eq!(board, Board::standard());
    }
}
