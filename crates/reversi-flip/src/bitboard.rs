//! Bitboard operations and bit primitives.
//!
//! A [`Bitboard`] represents the 64-square board as a single `u64`
//! (bit 0 = A1, bit 63 = H8). The free functions at the bottom are the
//! raw-word primitives the flip engine is built on: population count,
//! bit scans, byte/board mirroring and the delta-swap transposes.

use crate::square::Square;

/// Newtype wrapper for a 64-bit bitboard (bit 0 = A1, bit 63 = H8).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Bitboard(u64);

impl Bitboard {
    /// Creates a new bitboard from raw bits.
    #[inline(always)]
    pub const fn new(bits: u64) -> Self {
        Bitboard(bits)
    }

    /// Returns the raw 64-bit value.
    #[inline(always)]
    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Creates a bitboard with a single bit set at the given square.
    #[inline(always)]
    pub fn from_square(sq: Square) -> Self {
        sq.bitboard()
    }

    /// Returns a new bitboard with the bit at the given square set.
    #[inline(always)]
    pub fn set(self, sq: Square) -> Self {
        Bitboard(self.0 | sq.bitboard().0)
    }

    /// Returns a new bitboard with the bit at the given square cleared.
    #[inline(always)]
    pub fn remove(self, sq: Square) -> Self {
        Bitboard(self.0 & !sq.bitboard().0)
    }

    /// Checks whether the bit at the given square is set.
    #[inline(always)]
    pub fn contains(self, sq: Square) -> bool {
        self.0 & sq.bitboard().0 != 0
    }

    /// Checks whether no bits are set.
    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the number of set bits (0-64).
    #[inline(always)]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Returns a new bitboard with the least significant bit cleared.
    #[inline(always)]
    pub const fn clear_lsb(self) -> Self {
        Bitboard(self.0 & self.0.wrapping_sub(1))
    }

    /// Returns the square of the least significant set bit, or `None`
    /// for an empty bitboard.
    #[inline(always)]
    pub fn lsb_square(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_u32_unchecked(self.0.trailing_zeros()))
        }
    }

    /// Returns the square of the least significant set bit.
    ///
    /// # Panics
    ///
    /// Debug-asserts that the bitboard is not empty.
    #[inline(always)]
    pub fn lsb_square_unchecked(self) -> Square {
        debug_assert!(
            !self.is_empty(),
            "lsb_square_unchecked called on empty bitboard"
        );
        Square::from_u32_unchecked(self.0.trailing_zeros())
    }

    /// Removes and returns the least significant set bit as a square,
    /// along with the updated bitboard.
    #[inline(always)]
    pub fn pop_lsb(self) -> (Square, Self) {
        debug_assert!(!self.is_empty(), "pop_lsb called on empty bitboard");
        (self.lsb_square_unchecked(), self.clear_lsb())
    }

    /// Flips the bitboard vertically (rank 1 ↔ rank 8, etc.).
    #[inline(always)]
    pub const fn flip_vertical(self) -> Self {
        Bitboard(vertical_mirror(self.0))
    }

    /// Flips the bitboard horizontally (file A ↔ file H, etc.).
    #[inline(always)]
    pub const fn flip_horizontal(self) -> Self {
        Bitboard(horizontal_mirror(self.0))
    }

    /// Flips the bitboard along the A1-H8 diagonal.
    #[inline(always)]
    pub const fn flip_diag_a1h8(self) -> Self {
        Bitboard(transpose(self.0))
    }

    /// Flips the bitboard along the A8-H1 diagonal.
    #[inline(always)]
    pub const fn flip_diag_a8h1(self) -> Self {
        const MASK1: u64 = 0xaa00aa00aa00aa00;
        const MASK2: u64 = 0xcccc0000cccc0000;
        const MASK3: u64 = 0xf0f0f0f000000000;

        let mut bits = self.0;
        bits = delta_swap(bits, MASK3, 36);
        bits = delta_swap(bits, MASK2, 18);
        bits = delta_swap(bits, MASK1, 9);
        Bitboard(bits)
    }

    /// Rotates the bitboard 90 degrees clockwise.
    #[inline(always)]
    pub const fn rotate_90_clockwise(self) -> Self {
        self.flip_diag_a8h1().flip_vertical()
    }

    /// Rotates the bitboard 180 degrees.
    #[inline(always)]
    pub const fn rotate_180(self) -> Self {
        Bitboard(self.0.reverse_bits())
    }

    /// Rotates the bitboard 270 degrees clockwise.
    #[inline(always)]
    pub const fn rotate_270_clockwise(self) -> Self {
        self.flip_diag_a1h8().flip_vertical()
    }

    /// Returns a new bitboard after applying a player's move: the
    /// flipped discs plus the placed disc are toggled in.
    #[inline(always)]
    pub fn apply_move(self, flipped: Bitboard, sq: Square) -> Bitboard {
        self ^ flipped ^ sq.bitboard()
    }

    /// Returns a new bitboard with the flipped discs toggled.
    #[inline(always)]
    pub fn apply_flip(self, flipped: Bitboard) -> Bitboard {
        self ^ flipped
    }

    /// Gets the legal moves against the given opponent bitboard.
    #[inline(always)]
    pub fn get_moves(self, opponent: Bitboard) -> Bitboard {
        Bitboard(get_moves(self.0, opponent.0))
    }

    /// Returns an iterator over all set squares, LSB first.
    #[inline(always)]
    pub fn iter(self) -> BitboardIterator {
        BitboardIterator::new(self)
    }
}

impl std::ops::BitAnd for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 & rhs.0)
    }
}

impl std::ops::BitOr for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 | rhs.0)
    }
}

impl std::ops::BitXor for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self::Output {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl std::ops::Not for Bitboard {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self::Output {
        Bitboard(!self.0)
    }
}

impl std::ops::BitAndAssign for Bitboard {
    #[inline(always)]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl std::ops::BitOrAssign for Bitboard {
    #[inline(always)]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitXorAssign for Bitboard {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl From<u64> for Bitboard {
    #[inline(always)]
    fn from(bits: u64) -> Self {
        Bitboard(bits)
    }
}

impl From<Bitboard> for u64 {
    #[inline(always)]
    fn from(bb: Bitboard) -> Self {
        bb.0
    }
}

impl From<Square> for Bitboard {
    #[inline(always)]
    fn from(sq: Square) -> Self {
        sq.bitboard()
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIterator;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        BitboardIterator::new(self)
    }
}

impl std::fmt::Display for Bitboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in 0..8 {
            for file in 0..8 {
                let sq = rank * 8 + file;
                if (self.0 >> sq) & 1 != 0 {
                    write!(f, "1")?;
                } else {
                    write!(f, ".")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Returns the number of set bits in a word.
#[inline(always)]
pub const fn popcount(x: u64) -> u32 {
    x.count_ones()
}

/// Index of the lowest set bit (0-63).
///
/// # Panics
///
/// Debug-asserts `x != 0`; the result is undefined for zero input,
/// mirroring the hardware bit-scan contract.
#[inline(always)]
pub fn first_set_bit(x: u64) -> u32 {
    debug_assert!(x != 0, "first_set_bit called on zero");
    x.trailing_zeros()
}

/// Index of the highest set bit (0-63).
///
/// # Panics
///
/// Debug-asserts `x != 0`; the result is undefined for zero input.
#[inline(always)]
pub fn last_set_bit(x: u64) -> u32 {
    debug_assert!(x != 0, "last_set_bit called on zero");
    63 - x.leading_zeros()
}

/// Reverses the bit order of a single byte.
#[inline(always)]
pub const fn mirror_byte(b: u8) -> u8 {
    b.reverse_bits()
}

/// Reverses the eight rows of a board.
#[inline(always)]
pub const fn vertical_mirror(x: u64) -> u64 {
    x.swap_bytes()
}

/// Reverses the bit order within each of the eight rows.
#[inline(always)]
pub const fn horizontal_mirror(x: u64) -> u64 {
    const MASK1: u64 = 0x5555555555555555;
    const MASK2: u64 = 0x3333333333333333;
    const MASK3: u64 = 0x0f0f0f0f0f0f0f0f;

    let mut b = x;
    b = ((b >> 1) & MASK1) | ((b & MASK1) << 1);
    b = ((b >> 2) & MASK2) | ((b & MASK2) << 2);
    b = ((b >> 4) & MASK3) | ((b & MASK3) << 4);
    b
}

/// Reflects a board across the A1-H8 diagonal.
#[inline(always)]
pub const fn transpose(x: u64) -> u64 {
    const MASK1: u64 = 0x5500550055005500;
    const MASK2: u64 = 0x3333000033330000;
    const MASK3: u64 = 0x0f0f0f0f00000000;

    let mut bits = x;
    bits = delta_swap(bits, MASK3, 28);
    bits = delta_swap(bits, MASK2, 14);
    bits = delta_swap(bits, MASK1, 7);
    bits
}

/// Delta swap: exchanges the bit pairs selected by `mask` with the bits
/// `delta` positions below them.
#[inline(always)]
const fn delta_swap(bits: u64, mask: u64, delta: u32) -> u64 {
    let tmp = mask & (bits ^ (bits << delta));
    bits ^ tmp ^ (tmp >> delta)
}

/// Gets the legal moves for the player.
///
/// Directional parallel-prefix ray fill over the opponent's discs;
/// a move is legal where a filled ray steps onto an empty square.
#[inline(always)]
pub fn get_moves(player: u64, opponent: u64) -> u64 {
    let empty = !(player | opponent);
    (get_some_moves(player, opponent & 0x007E7E7E7E7E7E00, 7) & empty)
        | (get_some_moves(player, opponent & 0x007E7E7E7E7E7E00, 9) & empty)
        | (get_some_moves(player, opponent & 0x7E7E7E7E7E7E7E7E, 1) & empty)
        | (get_some_moves(player, opponent & 0x00FFFFFFFFFFFF00, 8) & empty)
}

/// Propagates discs along one direction pair (±`dir`) through `mask`.
#[inline(always)]
fn get_some_moves(b: u64, mask: u64, dir: u32) -> u64 {
    let mut flip = ((b << dir) | (b >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    flip |= ((flip << dir) | (flip >> dir)) & mask;
    (flip << dir) | (flip >> dir)
}

/// An iterator that yields each set bit position as a `Square`.
pub struct BitboardIterator {
    bitboard: Bitboard,
}

impl BitboardIterator {
    #[inline(always)]
    pub fn new(bitboard: Bitboard) -> BitboardIterator {
        BitboardIterator { bitboard }
    }
}

impl Iterator for BitboardIterator {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bitboard.is_empty() {
            return None;
        }

        let (square, rest) = self.bitboard.pop_lsb();
        self.bitboard = rest;
        Some(square)
    }
}
