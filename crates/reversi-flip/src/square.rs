use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;

/// Represents a square on a reversi board, ranging from A1 to H8.
///
/// Files (columns) are labeled A-H and ranks (rows) 1-8, numbered
/// row-major:
///
/// ```text
///   A B C D E F G H
/// 1 00 01 02 03 04 05 06 07
/// 2 08 09 10 11 12 13 14 15
/// 3 16 17 18 19 20 21 22 23
/// 4 24 25 26 27 28 29 30 31
/// 5 32 33 34 35 36 37 38 39
/// 6 40 41 42 43 44 45 46 47
/// 7 48 49 50 51 52 53 54 55
/// 8 56 57 58 59 60 61 62 63
/// ```
///
/// `None` (index 64) is the pass move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[rustfmt::skip]
pub enum Square {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
    None,
}

/// Number of squares along one board edge.
pub const BOARD_SIZE: usize = 8;
/// Number of playable squares.
pub const TOTAL_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

impl Square {
    /// Returns a bitboard with only this square's bit set.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the square is not [`Square::None`].
    #[inline]
    pub fn bitboard(self) -> Bitboard {
        debug_assert!(
            (self as usize) < TOTAL_SQUARES,
            "bitboard() called on {self:?}"
        );
        Bitboard::new(1 << self as u8)
    }

    /// Returns the square's index (0-63, or 64 for `None`).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// File of the square (0 = A .. 7 = H).
    #[inline]
    pub fn file(self) -> usize {
        debug_assert!((self as usize) < TOTAL_SQUARES);
        self as usize % BOARD_SIZE
    }

    /// Rank of the square (0 = rank 1 .. 7 = rank 8).
    #[inline]
    pub fn rank(self) -> usize {
        debug_assert!((self as usize) < TOTAL_SQUARES);
        self as usize / BOARD_SIZE
    }

    /// Converts a `u8` into a `Square` without bounds checking.
    ///
    /// # Arguments
    ///
    /// * `index` - 0-63 for playable squares, 64 for `None`.
    #[inline]
    pub fn from_u8_unchecked(index: u8) -> Square {
        debug_assert!(index <= 64, "index out of range for Square: {index}");
        unsafe { std::mem::transmute(index) }
    }

    /// Safely converts a `u8` into a `Square`.
    #[inline]
    pub fn from_u8(index: u8) -> Option<Square> {
        if index <= 64 {
            Some(Square::from_u8_unchecked(index))
        } else {
            None
        }
    }

    /// Converts a `u32` into a `Square` without bounds checking.
    #[inline]
    pub fn from_u32_unchecked(index: u32) -> Square {
        debug_assert!(index <= 64, "index out of range for Square: {index}");
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts a `u32` into a `Square`.
    #[inline]
    pub fn from_u32(index: u32) -> Option<Square> {
        if index <= 64 {
            Some(Square::from_u32_unchecked(index))
        } else {
            None
        }
    }

    /// Converts a `usize` into a `Square` without bounds checking.
    #[inline]
    pub fn from_usize_unchecked(index: usize) -> Square {
        debug_assert!(index <= 64, "index out of range for Square: {index}");
        unsafe { std::mem::transmute(index as u8) }
    }

    /// Safely converts a `usize` into a `Square`.
    #[inline]
    pub fn from_usize(index: usize) -> Option<Square> {
        if index <= 64 {
            Some(Square::from_usize_unchecked(index))
        } else {
            None
        }
    }

    /// Iterates over all 64 playable squares in index order.
    pub fn iter_squares() -> impl Iterator<Item = Square> {
        (0..TOTAL_SQUARES).map(Square::from_usize_unchecked)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Square::None {
            return write!(f, "--");
        }
        let file = (b'A' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

/// Error type for square parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid square string format (must be 2 characters)
    InvalidFormat,
    /// Invalid file character (must be a-h or A-H)
    InvalidFile(char),
    /// Invalid rank character (must be 1-8)
    InvalidRank(char),
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidFormat => write!(
                f,
                "Invalid square format: must be 2 characters (e.g., 'a1')"
            ),
            SquareError::InvalidFile(c) => write!(f, "Invalid file '{c}': must be a-h or A-H"),
            SquareError::InvalidRank(c) => write!(f, "Invalid rank '{c}': must be 1-8"),
        }
    }
}

impl std::error::Error for SquareError {}

impl FromStr for Square {
    type Err = SquareError;

    /// Parses algebraic notation (e.g. "a1", "H8", case-insensitive)
    /// into a `Square`; `"--"` parses as the pass move.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "--" {
            return Ok(Square::None);
        }
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(SquareError::InvalidFormat);
        };
        let f = file.to_ascii_uppercase();
        if !('A'..='H').contains(&f) {
            return Err(SquareError::InvalidFile(file));
        }
        if !('1'..='8').contains(&rank) {
            return Err(SquareError::InvalidRank(rank));
        }
        Ok(Square::from_u8_unchecked(
            (rank as u8 - b'1') * BOARD_SIZE as u8 + (f as u8 - b'A'),
        ))
    }
}
