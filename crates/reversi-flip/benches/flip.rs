use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use rand::Rng;
use reversi_flip::bitboard::get_moves;
use reversi_flip::count_last_flip::count_last_flip;
use reversi_flip::flip::{flip, flip_slow};
use reversi_flip::square::Square;

/// Random disjoint disc sets, roughly half-full, paired with an empty
/// square on the board.
fn random_positions(n: usize) -> Vec<(Square, u64, u64)> {
    let mut rng = rand::rng();
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        let occupied: u64 = rng.random::<u64>() & rng.random::<u64>();
        let side: u64 = rng.random();
        let (p, o) = (occupied & side, occupied & !side);
        let sq = Square::from_usize_unchecked(rng.random_range(0..64));
        if occupied & sq.bitboard().bits() == 0 {
            out.push((sq, p, o));
        }
    }
    out
}

fn bench_flip(c: &mut Criterion) {
    let positions = random_positions(1024);

    c.bench_function("flip", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &(sq, p, o) in &positions {
                acc ^= flip(black_box(sq), black_box(p), black_box(o));
            }
            acc
        })
    });

    c.bench_function("flip_slow", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &(sq, p, o) in &positions {
                acc ^= flip_slow(black_box(sq), black_box(p), black_box(o));
            }
            acc
        })
    });
}

fn bench_count_last_flip(c: &mut Criterion) {
    let positions = random_positions(1024);

    c.bench_function("count_last_flip", |b| {
        b.iter(|| {
            let mut acc = 0i32;
            for &(sq, p, _) in &positions {
                acc += count_last_flip(black_box(sq), black_box(p));
            }
            acc
        })
    });
}

fn bench_get_moves(c: &mut Criterion) {
    let positions = random_positions(1024);

    c.bench_function("get_moves", |b| {
        b.iter(|| {
            let mut acc = 0u64;
            for &(_, p, o) in &positions {
                acc ^= get_moves(black_box(p), black_box(o));
            }
            acc
        })
    });
}

criterion_group!(benches, bench_flip, bench_count_last_flip, bench_get_moves);
criterion_main!(benches);
