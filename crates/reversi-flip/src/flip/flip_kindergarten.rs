//! Portable kindergarten flip computation.
//!
//! For each of the four lines through the played square: gather the
//! player and opponent bytes, look up the candidate outflank squares
//! from the opponent pattern, AND with the player byte to keep real
//! outflanks, look up the flipped bits, and scatter them back onto the
//! board. Constant work per call, no data-dependent branching.
//!
//! Table layout follows flip_kindergarten.c from edax-reversi, with the
//! 64 per-square specializations collapsed into one routine over the
//! generated line constants.

use crate::lines::{self, LINES};
use crate::square::Square;
use crate::uget;

/// `OUTFLANK[pos][inner]`: candidate outflank squares when playing at
/// bit `pos` of a line whose inner opponent bits 1-6 are `inner`.
///
/// A candidate is the first square past a non-empty opponent run in
/// either direction. Edge bits are excluded from the index: a candidate
/// computed from the inner bits alone is still correct, because ANDing
/// with the player byte zeroes it whenever the square actually holds an
/// opponent disc or nothing (`player & opponent == 0`).
static OUTFLANK: [[u8; 64]; 8] = build_outflank();

/// `FLIPPED[pos][outflank]`: discs flipped between the played bit `pos`
/// and each outflank bit.
static FLIPPED: [[u8; 256]; 8] = build_flipped();

const fn build_outflank() -> [[u8; 64]; 8] {
    let mut t = [[0u8; 64]; 8];
    let mut pos = 0usize;
    while pos < 8 {
        let mut inner = 0usize;
        while inner < 64 {
            let o = (inner << 1) as u8;
            let mut candidates = 0u8;

            // Toward higher bits.
            let mut i = pos + 1;
            while i < 8 && (o >> i) & 1 == 1 {
                i += 1;
            }
            if i < 8 && i > pos + 1 {
                candidates |= 1 << i;
            }

            // Toward lower bits.
            if pos >= 2 {
                let mut j = pos as i32 - 1;
                while j >= 0 && (o >> j) & 1 == 1 {
                    j -= 1;
                }
                if j >= 0 && j < pos as i32 - 1 {
                    candidates |= 1 << j;
                }
            }

            t[pos][inner] = candidates;
            inner += 1;
        }
        pos += 1;
    }
    t
}

const fn build_flipped() -> [[u8; 256]; 8] {
    let mut t = [[0u8; 256]; 8];
    let mut pos = 0usize;
    while pos < 8 {
        let mut outflank = 0usize;
        while outflank < 256 {
            let mut flipped = 0u8;
            let mut b = 0usize;
            while b < 8 {
                if (outflank >> b) & 1 == 1 {
                    if b > pos {
                        // Bits strictly between pos and b.
                        flipped |= (((1u16 << b) - 1) as u8) & !(((1u16 << (pos + 1)) - 1) as u8);
                    } else if b < pos {
                        flipped |= (((1u16 << pos) - 1) as u8) & !(((1u16 << (b + 1)) - 1) as u8);
                    }
                }
                b += 1;
            }
            t[pos][outflank] = flipped;
            outflank += 1;
        }
        pos += 1;
    }
    t
}

/// Computes the flipped discs for a move at `sq`.
///
/// Preconditions (debug-asserted): `sq` is a playable square, the disc
/// sets are disjoint and `sq` is empty.
#[allow(dead_code)]
#[inline(always)]
pub fn flip(sq: Square, p: u64, o: u64) -> u64 {
    debug_assert!(sq != Square::None);
    debug_assert!(p & o == 0, "disc sets overlap");
    debug_assert!(
        (p | o) & sq.bitboard().bits() == 0,
        "flip called on occupied square {sq}"
    );

    let mut flipped = 0u64;
    for line in uget!(LINES; sq.index()) {
        let pb = lines::extract(p, line);
        let ob = lines::extract(o, line);
        let pos = line.pos as usize;
        let outflank = uget!(OUTFLANK; pos, ((ob >> 1) & 0x3F) as usize) & pb;
        let fl = *uget!(FLIPPED; pos, outflank as usize);
        flipped |= lines::project(fl, line);
    }
    flipped
}
