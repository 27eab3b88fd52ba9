//! AVX2 flip computation.
//!
//! Processes the four flip directions in the four 64-bit lanes of one
//! ymm register, one lane per direction pair {1, 8, 9, 7}. Each lane
//! runs a parallel-prefix fill of the opponent run next to the played
//! square, then gates the run on the presence of an outflanking player
//! disc. Layout follows flip_avx_ppfill.c from edax-reversi.

use core::arch::x86_64::*;

use crate::square::Square;

/// Computes the flipped discs for a move at `sq`.
///
/// # Safety
///
/// The caller must ensure the host CPU supports AVX2. Preconditions as
/// for the portable routine: `sq` is a playable square, the disc sets
/// are disjoint and `sq` is empty (debug-asserted).
#[allow(dead_code)]
#[target_feature(enable = "avx2")]
pub unsafe fn flip(sq: Square, p: u64, o: u64) -> u64 {
    debug_assert!(sq != Square::None);
    debug_assert!(p & o == 0, "disc sets overlap");
    debug_assert!(
        (p | o) & sq.bitboard().bits() == 0,
        "flip called on occupied square {sq}"
    );

    unsafe {
        // Lane k shifts by {1, 8, 9, 7}. Horizontal and diagonal lanes
        // mask the opponent to files B-G so a fill can never wrap
        // across a board edge; the vertical lane cannot wrap.
        let shift = _mm256_set_epi64x(7, 9, 8, 1);
        let shift2 = _mm256_add_epi64(shift, shift);
        let edge_mask = _mm256_set_epi64x(
            0x7E7E7E7E7E7E7E7Eu64 as i64,
            0x7E7E7E7E7E7E7E7Eu64 as i64,
            -1,
            0x7E7E7E7E7E7E7E7Eu64 as i64,
        );
        let zero = _mm256_setzero_si256();

        let pp = _mm256_set1_epi64x(p as i64);
        let moo = _mm256_and_si256(_mm256_set1_epi64x(o as i64), edge_mask);
        let xx = _mm256_set1_epi64x(sq.bitboard().bits() as i64);

        // Toward higher bits: seed with the opponent disc next to the
        // move, extend by 1, then prefix-double twice through runs of
        // adjacent opponent pairs. Covers runs up to the full line.
        let mut fl = _mm256_and_si256(moo, _mm256_sllv_epi64(xx, shift));
        fl = _mm256_or_si256(fl, _mm256_and_si256(moo, _mm256_sllv_epi64(fl, shift)));
        let pre_l = _mm256_and_si256(moo, _mm256_sllv_epi64(moo, shift));
        fl = _mm256_or_si256(fl, _mm256_and_si256(pre_l, _mm256_sllv_epi64(fl, shift2)));
        fl = _mm256_or_si256(fl, _mm256_and_si256(pre_l, _mm256_sllv_epi64(fl, shift2)));
        // Keep the run only when a player disc sits just past it.
        let out_l = _mm256_and_si256(pp, _mm256_sllv_epi64(fl, shift));
        let fl = _mm256_andnot_si256(_mm256_cmpeq_epi64(out_l, zero), fl);

        // Toward lower bits, same fill mirrored.
        let mut fr = _mm256_and_si256(moo, _mm256_srlv_epi64(xx, shift));
        fr = _mm256_or_si256(fr, _mm256_and_si256(moo, _mm256_srlv_epi64(fr, shift)));
        let pre_r = _mm256_and_si256(moo, _mm256_srlv_epi64(moo, shift));
        fr = _mm256_or_si256(fr, _mm256_and_si256(pre_r, _mm256_srlv_epi64(fr, shift2)));
        fr = _mm256_or_si256(fr, _mm256_and_si256(pre_r, _mm256_srlv_epi64(fr, shift2)));
        let out_r = _mm256_and_si256(pp, _mm256_srlv_epi64(fr, shift));
        let fr = _mm256_andnot_si256(_mm256_cmpeq_epi64(out_r, zero), fr);

        // OR the four lanes down to one word.
        let f4 = _mm256_or_si256(fl, fr);
        let f2 = _mm_or_si128(
            _mm256_castsi256_si128(f4),
            _mm256_extracti128_si256(f4, 1),
        );
        let f1 = _mm_or_si128(f2, _mm_unpackhi_epi64(f2, f2));
        _mm_cvtsi128_si64(f1) as u64
    }
}
