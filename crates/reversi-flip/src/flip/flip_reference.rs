//! Ray-casting reference flip.
//!
//! Walks outward from the played square one step at a time, which makes
//! it the simplest possible statement of the flip rule. Used as the
//! ground truth for the table-driven and vector paths; never on a hot
//! path.

use crate::square::Square;

/// (shift, source mask) per compass direction. The mask removes squares
/// whose step in that direction would wrap across a board edge.
const DIRECTIONS: [(i32, u64); 8] = [
    (1, 0x7F7F7F7F7F7F7F7F),
    (-1, 0xFEFEFEFEFEFEFEFE),
    (8, 0x00FFFFFFFFFFFFFF),
    (-8, 0xFFFFFFFFFFFFFF00),
    (9, 0x007F7F7F7F7F7F7F),
    (-9, 0xFEFEFEFEFEFEFE00),
    (7, 0x00FEFEFEFEFEFEFE),
    (-7, 0x7F7F7F7F7F7F7F00),
];

#[inline(always)]
fn step(b: u64, dir: i32) -> u64 {
    if dir >= 0 { b << dir } else { b >> -dir }
}

/// Computes the flipped discs for a move at `sq`.
///
/// Total over its domain: returns 0 for a pass and for any move that
/// captures nothing.
pub fn flip(sq: Square, p: u64, o: u64) -> u64 {
    if sq == Square::None {
        return 0;
    }
    let x = sq.bitboard().bits();
    let mut flipped = 0u64;
    for &(dir, mask) in &DIRECTIONS {
        let mut run = 0u64;
        let mut cur = step(x & mask, dir);
        while cur & o != 0 {
            run |= cur;
            cur = step(cur & mask, dir);
        }
        // Commit only when the ray stopped on a player disc; running
        // off the board or onto an empty square captures nothing.
        if cur & p != 0 {
            flipped |= run;
        }
    }
    flipped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_initial_moves() {
        let p = (Square::D5.bitboard() | Square::E4.bitboard()).bits();
        let o = (Square::D4.bitboard() | Square::E5.bitboard()).bits();
        assert_eq!(flip(Square::C4, p, o), Square::D4.bitboard().bits());
        assert_eq!(flip(Square::F5, p, o), Square::E5.bitboard().bits());
        assert_eq!(flip(Square::A1, p, o), 0);
    }

    #[test]
    fn test_reference_no_wrap_across_edges() {
        // Player on H1, opponent on A2: bit-adjacent but not a line.
        let p = Square::H1.bitboard().bits();
        let o = Square::A2.bitboard().bits();
        assert_eq!(flip(Square::B2, p, o), 0);

        // A full wrap bait along row edges.
        let p = Square::A1.bitboard().bits();
        let o = (Square::H1.bitboard() | Square::G1.bitboard()).bits();
        assert_eq!(flip(Square::F1, p, o), 0);
    }

    #[test]
    fn test_reference_run_to_edge_without_bracket() {
        // Opponent run reaches the edge with no player disc beyond.
        let o = 0x7Eu64; // B1..G1
        assert_eq!(flip(Square::A1, 0, o), 0);
        // With the bracket on H1 the whole run flips.
        let p = Square::H1.bitboard().bits();
        assert_eq!(flip(Square::A1, p, o), 0x7E);
    }
}
