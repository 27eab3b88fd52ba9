//! Flip count for the last empty square.
//!
//! When a single empty square remains, every non-player square on a
//! line is an opponent disc, so the flip count is a function of the
//! player discs alone. One 256-entry table lookup per line gives the
//! count without materializing the flipped set, which is what endgame
//! scoring wants.
//!
//! Table layout follows count_last_flip_kindergarten.c from
//! edax-reversi, with the 64 per-square specializations collapsed into
//! one routine over the generated line constants.

use crate::lines::{self, LINES};
use crate::square::Square;
use crate::uget;

/// `COUNT_FLIP[pos][player]`: twice the number of discs flipped when
/// playing at bit `pos` of a line holding the player pattern `player`,
/// every other square being an opponent disc.
///
/// Doubled because a flip swings the disc differential by two.
static COUNT_FLIP: [[u8; 256]; 8] = build_count_flip();

const fn build_count_flip() -> [[u8; 256]; 8] {
    let mut t = [[0u8; 256]; 8];
    let mut pos = 0usize;
    while pos < 8 {
        let mut player = 0usize;
        while player < 256 {
            let mut flipped = 0u32;

            // Toward higher bits: opponent run up to the first player
            // disc. No player disc on the line means no bracket.
            let mut i = pos + 1;
            while i < 8 && (player >> i) & 1 == 0 {
                i += 1;
            }
            if i < 8 {
                flipped += (i - pos - 1) as u32;
            }

            // Toward lower bits.
            let mut j = pos as i32 - 1;
            while j >= 0 && (player >> j) & 1 == 0 {
                j -= 1;
            }
            if j >= 0 {
                flipped += (pos as i32 - 1 - j) as u32;
            }

            t[pos][player] = (flipped * 2) as u8;
            player += 1;
        }
        pos += 1;
    }
    t
}

/// Returns twice the number of discs flipped by playing at `sq`, under
/// the assumption that `sq` is the only empty square.
///
/// Off-line bits of `player` are ignored. Returns 0 when the move
/// captures nothing.
#[inline(always)]
pub fn count_last_flip(sq: Square, player: u64) -> i32 {
    debug_assert!(sq != Square::None);
    debug_assert!(player & sq.bitboard().bits() == 0);

    let mut count = 0i32;
    for line in uget!(LINES; sq.index()) {
        let pb = lines::extract(player, line);
        count += *uget!(COUNT_FLIP; line.pos as usize, pb as usize) as i32;
    }
    count
}
