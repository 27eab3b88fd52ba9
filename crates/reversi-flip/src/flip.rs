//! Disc flip calculation for move execution.
//!
//! The fast path is selected at compile time: an AVX2 vector routine on
//! x86_64 targets that enable it, the portable kindergarten routine
//! everywhere else. Both must agree bit-for-bit with [`flip_slow`], the
//! ray-casting reference that defines the semantics.

use cfg_if::cfg_if;

use crate::square::Square;

mod flip_kindergarten;
mod flip_reference;

#[cfg(target_arch = "x86_64")]
mod flip_avx2;

/// Calculates which opponent discs would be flipped by placing a disc
/// at the given square.
///
/// # Arguments
///
/// * `sq` - The square where the disc is being placed ([`Square::None`]
///   for a pass)
/// * `p` - Bitboard of the current player's discs
/// * `o` - Bitboard of the opponent's discs
///
/// # Returns
///
/// A bitboard of all opponent discs flipped by this move; always 0 for
/// a pass.
///
/// The caller must guarantee `p & o == 0` and that `sq` is empty; both
/// are debug-asserted, and the release-mode result is unspecified when
/// they are violated. Use [`flip_slow`] when a safe answer for
/// arbitrary squares is needed.
#[inline(always)]
pub fn flip(sq: Square, p: u64, o: u64) -> u64 {
    if sq == Square::None {
        return 0;
    }
    cfg_if! {
        if #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))] {
            unsafe { flip_avx2::flip(sq, p, o) }
        } else {
            flip_kindergarten::flip(sq, p, o)
        }
    }
}

/// Ray-casting reference flip.
///
/// Walks each of the eight compass directions from `sq`, accumulating
/// opponent discs, and commits a ray only when it ends on a player
/// disc. Returns 0 for any move that captures nothing. Slower than
/// [`flip`] but total over its domain; the conformance oracle for the
/// fast paths.
#[inline]
pub fn flip_slow(sq: Square, p: u64, o: u64) -> u64 {
    flip_reference::flip(sq, p, o)
}

/// Returns twice the number of discs flipped by the move.
///
/// Doubled because a flip swings the disc differential by two; the
/// same convention as [`count_last_flip`](crate::count_last_flip).
#[inline(always)]
pub fn flip_count(sq: Square, p: u64, o: u64) -> u32 {
    flip(sq, p, o).count_ones() * 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::disc::Disc;
    use rand::{Rng, RngExt};

    /// Random pair of disjoint disc sets, roughly half-full.
    fn random_position(rng: &mut impl Rng) -> (u64, u64) {
        let occupied: u64 = rng.random::<u64>() & rng.random::<u64>();
        let side: u64 = rng.random();
        (occupied & side, occupied & !side)
    }

    #[test]
    fn test_flip_initial_position() {
        let p = (Square::D5.bitboard() | Square::E4.bitboard()).bits();
        let o = (Square::D4.bitboard() | Square::E5.bitboard()).bits();
        assert_eq!(flip(Square::C4, p, o), Square::D4.bitboard().bits());
        assert_eq!(flip(Square::D3, p, o), Square::D4.bitboard().bits());
        assert_eq!(flip(Square::E6, p, o), Square::E5.bitboard().bits());
        assert_eq!(flip(Square::F5, p, o), Square::E5.bitboard().bits());
    }

    #[test]
    fn test_flip_opening_d3_single_disc() {
        // Standard opening, dark to move; D3 flips exactly the one
        // disc on D4.
        let p = 0x0000000810000000u64;
        let o = 0x0000001008000000u64;
        let flipped = flip(Square::D3, p, o);
        assert_eq!(flipped, 0x0000000008000000);
        assert_eq!(flipped.count_ones(), 1);
        assert_eq!(flipped, flip_slow(Square::D3, p, o));
    }

    #[test]
    fn test_flip_long_diagonal() {
        let board = Board::from_string(
            "XXXXXXXOXOOXXXXOXOXXXOXOXOOXOXXOXOXOOOXOXOOOOOXOXOOOXXXO-X-OXOOO",
            Disc::Black,
        );
        let flipped = flip(Square::A8, board.player.bits(), board.opponent.bits());
        let expected = (Square::B7.bitboard()
            | Square::C6.bitboard()
            | Square::D5.bitboard()
            | Square::E4.bitboard()
            | Square::F3.bitboard())
        .bits();
        assert_eq!(flipped, expected);
        assert_eq!(flipped, flip_slow(Square::A8, board.player.bits(), board.opponent.bits()));
    }

    #[test]
    fn test_flip_pass_is_zero() {
        let mut rng = rand::rng();
        for _ in 0..1_000 {
            let (p, o) = random_position(&mut rng);
            assert_eq!(flip(Square::None, p, o), 0);
            assert_eq!(flip_slow(Square::None, p, o), 0);
        }
    }

    #[test]
    fn test_flip_matches_reference() {
        let mut rng = rand::rng();
        for _ in 0..20_000 {
            let (p, o) = random_position(&mut rng);
            let empty = !(p | o);
            for sq in Square::iter_squares() {
                if empty & sq.bitboard().bits() == 0 {
                    continue;
                }
                let fast = flip(sq, p, o);
                let slow = flip_slow(sq, p, o);
                assert_eq!(
                    fast, slow,
                    "flip mismatch at {sq} for p={p:016x} o={o:016x}"
                );
                // Mask containment: only opponent discs flip, never
                // the player's own.
                assert_eq!(fast & o, fast);
                assert_eq!(fast & p, 0);
            }
        }
    }

    #[test]
    fn test_flip_count_agreement() {
        let mut rng = rand::rng();
        for _ in 0..5_000 {
            let (p, o) = random_position(&mut rng);
            let empty = !(p | o);
            for sq in Square::iter_squares() {
                if empty & sq.bitboard().bits() == 0 {
                    continue;
                }
                assert_eq!(flip_count(sq, p, o), flip(sq, p, o).count_ones() * 2);
                assert_eq!(flip_count(sq, p, o), flip_slow(sq, p, o).count_ones() * 2);
            }
        }
    }

    #[test]
    fn test_flip_slow_illegal_moves_are_zero() {
        let p = (Square::D5.bitboard() | Square::E4.bitboard()).bits();
        let o = (Square::D4.bitboard() | Square::E5.bitboard()).bits();
        // Empty squares that capture nothing.
        assert_eq!(flip_slow(Square::A1, p, o), 0);
        assert_eq!(flip_slow(Square::H8, p, o), 0);
        assert_eq!(flip_slow(Square::C3, p, o), 0);
    }

    #[test]
    #[cfg(target_arch = "x86_64")]
    fn test_flip_avx2_consistency() {
        if !is_x86_feature_detected!("avx2") {
            // Host CPU does not expose AVX2; nothing to validate.
            return;
        }

        let mut rng = rand::rng();
        for _ in 0..20_000 {
            let (p, o) = random_position(&mut rng);
            let empty = !(p | o);
            for sq in Square::iter_squares() {
                if empty & sq.bitboard().bits() == 0 {
                    continue;
                }
                let vector = unsafe { flip_avx2::flip(sq, p, o) };
                let scalar = flip_kindergarten::flip(sq, p, o);
                assert_eq!(
                    vector, scalar,
                    "AVX2 and kindergarten differ at {sq} for p={p:016x} o={o:016x}"
                );
            }
        }
    }
}
