use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::ChessError;

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: i8 = 8;

/// Number of squares on the board.
pub const NUM_SQUARES: usize = 64;

/// Represents a single square on the chess board.
///
/// Internally stores index 0-63 where:
/// - 0 = a1 (row 0, col 0), 7 = h1
/// - 56 = a8, 63 = h8
///
/// Row 0 is White's back rank, so White pawns advance toward increasing rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates the square at `(row, col)`.
    ///
    /// Fails with [`ChessError::OutOfBounds`] unless both coordinates are in `0..8`.
    pub fn at(row: i8, col: i8) -> Result<Self, ChessError> {
        if (0..BOARD_SIZE).contains(&row) && (0..BOARD_SIZE).contains(&col) {
            Ok(Square((row * BOARD_SIZE + col) as u8))
        } else {
            Err(ChessError::OutOfBounds { row, col })
        }
    }

    /// Square for coordinates already known to be on the board.
    #[inline]
    pub(crate) const fn from_row_col(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Square(row * 8 + col)
    }

    /// Returns the internal index value (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// The square `dr` rows and `dc` columns away, or `None` past the edge.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        Square::at(self.row() as i8 + dr, self.col() as i8 + dc).ok()
    }

    /// Returns the file ('a'-'h') of this square.
    pub fn file(self) -> char {
        (b'a' + self.col()) as char
    }

    /// Returns the rank (1-8) of this square.
    pub fn rank(self) -> u8 {
        self.row() + 1
    }

    /// Iterates over all 64 squares from a1 to h8.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES as u8).map(Square)
    }
}

/// Parse algebraic notation like "e4" into a Square.
///
/// # Examples
/// ```
/// # use chessington::game_state::Square;
/// let square: Square = "e4".parse().unwrap();
/// assert_eq!((square.row(), square.col()), (3, 4));
/// ```
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareParseError::WrongLength);
        };

        let file = file.to_ascii_lowercase();
        if !('a'..='h').contains(&file) {
            return Err(SquareParseError::BadFile);
        }
        let rank = rank.to_digit(10).ok_or(SquareParseError::BadRank)?;
        if !(1..=8).contains(&rank) {
            return Err(SquareParseError::BadRank);
        }

        Ok(Square::from_row_col(rank as u8 - 1, file as u8 - b'a'))
    }
}

/// Display square in algebraic notation (e.g., "e4").
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

/// Error type for parsing square notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SquareParseError {
    /// Square notation must be exactly 2 characters
    #[error("square must be 2 characters (e.g., 'e4')")]
    WrongLength,
    /// File must be a letter from a-h
    #[error("file must be a-h")]
    BadFile,
    /// Rank must be a digit from 1-8
    #[error("rank must be 1-8")]
    BadRank,
}

/// A set of squares packed into 64 bits.
///
/// Each bit represents one square: bit 0 = a1, bit 63 = h8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    pub fn insert(&mut self, square: Square) {
        self.0 |= 1u64 << square.index();
    }

    pub const fn contains(self, square: Square) -> bool {
        self.0 & (1u64 << square.index()) != 0
    }

    /// Iterates over the set squares in index order.
    pub fn squares(self) -> impl Iterator<Item = Square> {
        Square::all().filter(move |sq| self.contains(*sq))
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut bb = Bitboard::EMPTY;
        for square in iter {
            bb.insert(square);
        }
        bb
    }
}
