//! Bitboard move execution for Reversi.
//!
//! The core operation is [`flip::flip`]: given the two disc sets and a
//! square, compute the set of discs the move turns over. A table-driven
//! kindergarten routine serves portable builds, an AVX2 routine serves
//! x86_64 builds that enable it, and a ray-casting reference defines
//! the semantics both must match. Around it sit the square and
//! bitboard primitives, last-flip counting for endgame scoring, and
//! CRC-32C checksums for position fingerprints.

pub mod bitboard;
pub mod board;
pub mod count_last_flip;
pub mod crc32;
pub mod disc;
pub mod flip;
pub mod lines;
pub mod square;
pub mod util;

/// Builds the runtime lookup tables. Call once at startup, before any
/// checksum update. Flip tables are compile-time constants and need no
/// initialization.
pub fn init() {
    crc32::init();
}
