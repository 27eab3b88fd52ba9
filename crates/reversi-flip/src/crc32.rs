//! CRC-32C checksums.
//!
//! Castagnoli polynomial, reflected form, slicing-by-four. Used to
//! fingerprint disc patterns and verify serialized positions. The
//! lookup tables are built once at startup; call [`crate::init`] before
//! any update.

use std::sync::OnceLock;

/// Reflected Castagnoli polynomial.
const POLY: u32 = 0x82F63B78;

/// `TABLES[k][b]`: CRC of byte `b` followed by `k` zero bytes.
static TABLES: OnceLock<[[u32; 256]; 4]> = OnceLock::new();

pub fn init() {
    TABLES.get_or_init(build_tables);
}

fn build_tables() -> [[u32; 256]; 4] {
    let mut t = [[0u32; 256]; 4];
    for b in 0..256u32 {
        let mut crc = b;
        for _ in 0..8 {
            crc = if crc & 1 != 0 { (crc >> 1) ^ POLY } else { crc >> 1 };
        }
        t[0][b as usize] = crc;
    }
    for b in 0..256 {
        for k in 1..4 {
            t[k][b] = (t[k - 1][b] >> 8) ^ t[0][(t[k - 1][b] & 0xFF) as usize];
        }
    }
    t
}

#[inline(always)]
fn tables() -> &'static [[u32; 256]; 4] {
    TABLES.get().unwrap()
}

/// Folds one byte into the running CRC.
#[inline]
pub fn update_u8(crc: u32, byte: u8) -> u32 {
    let t = tables();
    (crc >> 8) ^ t[0][((crc ^ byte as u32) & 0xFF) as usize]
}

/// Folds four little-endian bytes into the running CRC in one step.
#[inline]
pub fn update_u32(crc: u32, word: u32) -> u32 {
    let t = tables();
    let x = crc ^ word;
    t[3][(x & 0xFF) as usize]
        ^ t[2][((x >> 8) & 0xFF) as usize]
        ^ t[1][((x >> 16) & 0xFF) as usize]
        ^ t[0][(x >> 24) as usize]
}

/// Folds a 64-bit word, little-endian, into the running CRC.
#[inline]
pub fn update_u64(crc: u32, word: u64) -> u32 {
    let crc = update_u32(crc, word as u32);
    update_u32(crc, (word >> 32) as u32)
}

/// CRC-32C of a byte slice, with the conventional initial value and
/// final inversion.
pub fn checksum(data: &[u8]) -> u32 {
    let mut crc = 0xFFFFFFFFu32;
    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        crc = update_u32(crc, u32::from_le_bytes(chunk.try_into().unwrap()));
    }
    for &b in chunks.remainder() {
        crc = update_u8(crc, b);
    }
    !crc
}
