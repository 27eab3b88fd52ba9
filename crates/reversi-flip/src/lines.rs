//! Line extraction for the kindergarten flip computation.
//!
//! Four lines pass through every square: its row, its column and the
//! two diagonals. Each line's discs are gathered into a single byte by
//! a masked magic multiplication (the kindergarten bitboard technique),
//! looked up in 256-entry tables, and the looked-up byte is projected
//! back onto the board. All constants are generated at compile time.

use crate::square::Square;
use crate::uget;

/// One directional line through a square.
///
/// `mask` and `magic` pack the line's board bits into the top byte of
/// the product (extraction always shifts by 56). `pos` is the played
/// square's bit index within the extracted byte: the file for rows and
/// diagonals, the rank for columns. The `proj_*` constants invert the
/// packing for a byte of flipped discs.
#[derive(Debug, Clone, Copy)]
pub struct Line {
    pub(crate) mask: u64,
    pub(crate) magic: u64,
    pub(crate) pos: u8,
    proj_magic: u64,
    proj_mask: u64,
    proj_shift: u8,
}

/// The four line directions through a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Direction {
    Row = 0,
    Column = 1,
    /// Parallel to the A1-H8 diagonal.
    Diagonal = 2,
    /// Parallel to the A8-H1 diagonal.
    AntiDiagonal = 3,
}

/// Replicates a byte into all eight byte lanes when multiplied.
const REPLICATE: u64 = 0x0101010101010101;
/// Gathers the A-file into the top byte, rank k landing on bit k.
const COLUMN_MAGIC: u64 = 0x0102040810204080;
/// File A bits.
const COLUMN_A: u64 = 0x0101010101010101;
/// Top bit of every byte lane.
const LANE_TOPS: u64 = 0x8080808080808080;

/// Per-square, per-direction line constants, indexed `[square][direction]`.
pub(crate) static LINES: [[Line; 4]; 64] = build_lines();

/// Bits of the line through `sq` in direction (`file_step`, `rank_step`),
/// excluding `sq` itself, stopping at the board edge.
const fn ray_mask(sq: usize, file_step: i32, rank_step: i32) -> u64 {
    let mut m = 0u64;
    let mut f = (sq % 8) as i32 + file_step;
    let mut r = (sq / 8) as i32 + rank_step;
    while f >= 0 && f < 8 && r >= 0 && r < 8 {
        m |= 1u64 << (r * 8 + f);
        f += file_step;
        r += rank_step;
    }
    m
}

const fn build_lines() -> [[Line; 4]; 64] {
    const EMPTY: Line = Line {
        mask: 0,
        magic: 0,
        pos: 0,
        proj_magic: 0,
        proj_mask: 0,
        proj_shift: 0,
    };
    let mut t = [[EMPTY; 4]; 64];

    let mut sq = 0;
    while sq < 64 {
        let rank = sq / 8;
        let file = sq % 8;

        let row_mask = 0xFFu64 << (rank * 8);
        t[sq][Direction::Row as usize] = Line {
            mask: row_mask,
            magic: 1u64 << (56 - rank * 8),
            pos: file as u8,
            proj_magic: REPLICATE,
            proj_mask: row_mask,
            proj_shift: 0,
        };

        t[sq][Direction::Column as usize] = Line {
            mask: COLUMN_A << file,
            magic: COLUMN_MAGIC >> file,
            pos: rank as u8,
            proj_magic: COLUMN_MAGIC,
            proj_mask: LANE_TOPS,
            proj_shift: (7 - file) as u8,
        };

        let diag = ray_mask(sq, 1, 1) | ray_mask(sq, -1, -1) | (1u64 << sq);
        t[sq][Direction::Diagonal as usize] = Line {
            mask: diag,
            magic: REPLICATE,
            pos: file as u8,
            proj_magic: REPLICATE,
            proj_mask: diag,
            proj_shift: 0,
        };

        let anti = ray_mask(sq, 1, -1) | ray_mask(sq, -1, 1) | (1u64 << sq);
        t[sq][Direction::AntiDiagonal as usize] = Line {
            mask: anti,
            magic: REPLICATE,
            pos: file as u8,
            proj_magic: REPLICATE,
            proj_mask: anti,
            proj_shift: 0,
        };

        sq += 1;
    }
    t
}

/// Gathers a line's board bits into a byte.
///
/// The multiplications are carry-free by construction: within one line
/// no two (bit, magic-lane) products collide, so the top byte of the
/// product is an exact gather.
#[inline(always)]
pub(crate) fn extract(board: u64, line: &Line) -> u8 {
    (((board & line.mask).wrapping_mul(line.magic)) >> 56) as u8
}

/// Scatters a line byte back onto its board bits.
///
/// Rows and diagonals replicate the byte into every lane and mask the
/// line back out; columns gather through the lane tops. A flipped disc
/// is never on bit 0 or 7 of its line (an edge disc has no square
/// beyond it to outflank from), which keeps the column multiply
/// carry-free.
#[inline(always)]
pub(crate) fn project(byte: u8, line: &Line) -> u64 {
    ((byte as u64).wrapping_mul(line.proj_magic) & line.proj_mask) >> line.proj_shift
}

/// Extracts the 8-bit pattern of the line through `sq` in `dir` from a
/// 64-bit disc pattern.
///
/// The returned byte is indexed by file for [`Direction::Row`],
/// [`Direction::Diagonal`] and [`Direction::AntiDiagonal`], and by rank
/// for [`Direction::Column`]. Lines shorter than eight squares leave
/// their off-board bits zero.
#[inline(always)]
pub fn extract_line_byte(board: u64, sq: Square, dir: Direction) -> u8 {
    debug_assert!(sq != Square::None);
    extract(board, uget!(LINES; sq.index(), dir as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_row() {
        let board = 0x00000000_00FF0000u64; // rank 3 full
        assert_eq!(extract_line_byte(board, Square::D3, Direction::Row), 0xFF);
        assert_eq!(extract_line_byte(board, Square::D4, Direction::Row), 0x00);
        let board = Square::C5.bitboard().bits();
        assert_eq!(
            extract_line_byte(board, Square::A5, Direction::Row),
            1 << 2
        );
    }

    #[test]
    fn test_extract_column() {
        // D4 and D7 on the D file: ranks 3 and 6.
        let board = Square::D4.bitboard().bits() | Square::D7.bitboard().bits();
        let byte = extract_line_byte(board, Square::D1, Direction::Column);
        assert_eq!(byte, (1 << 3) | (1 << 6));
        // Other files do not leak in.
        let board = board | Square::E4.bitboard().bits();
        assert_eq!(
            extract_line_byte(board, Square::D1, Direction::Column),
            (1 << 3) | (1 << 6)
        );
    }

    #[test]
    fn test_extract_diagonals() {
        // Main diagonal A1-H8: byte bit index is the file.
        let board = Square::C3.bitboard().bits() | Square::F6.bitboard().bits();
        let byte = extract_line_byte(board, Square::A1, Direction::Diagonal);
        assert_eq!(byte, (1 << 2) | (1 << 5));

        // Anti-diagonal through D3 (F1..A6): B5 sits on it at file 1.
        let board = Square::B5.bitboard().bits();
        let byte = extract_line_byte(board, Square::D3, Direction::AntiDiagonal);
        assert_eq!(byte, 1 << 1);

        // Short diagonal: the A8 corner's main-direction line is just A8.
        let board = u64::MAX;
        let byte = extract_line_byte(board, Square::A8, Direction::Diagonal);
        assert_eq!(byte, 1 << 0);
    }

    #[test]
    fn test_project_inverts_extract() {
        // For every line, projecting a single-bit byte must land on the
        // line square with that in-line position.
        for sq in Square::iter_squares() {
            for line in &LINES[sq.index()] {
                let mut m = line.mask;
                while m != 0 {
                    let bit = m & m.wrapping_neg();
                    let byte = extract(bit, line);
                    assert_eq!(byte.count_ones(), 1, "gather not exact for {sq}");
                    assert_eq!(project(byte, line), bit, "scatter mismatch for {sq}");
                    m ^= bit;
                }
            }
        }
    }
}
