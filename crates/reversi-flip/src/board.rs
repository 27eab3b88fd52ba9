//! Game position as a pair of disc sets.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::disc::Disc;
use crate::flip;
use crate::square::{BOARD_SIZE, Square};

/// A position from the side to move's point of view.
///
/// `player` holds the discs of the side to move, `opponent` the other
/// side's. The two sets are disjoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub player: Bitboard,
    pub opponent: Bitboard,
}

impl Default for Board {
    /// The standard starting position, dark to move.
    fn default() -> Self {
        Board {
            player: Bitboard::new(0x0000000810000000),
            opponent: Bitboard::new(0x0000001008000000),
        }
    }
}

impl Board {
    pub fn new() -> Board {
        Board::default()
    }

    pub fn from_bitboards(player: Bitboard, opponent: Bitboard) -> Board {
        debug_assert!((player.bits() & opponent.bits()) == 0, "disc sets overlap");
        Board { player, opponent }
    }

    /// Parses a 64-character position string, A1 first, rank by rank.
    /// `X` is a dark disc, `O` a light one, anything else empty.
    /// `side_to_move` selects which color becomes `player`.
    pub fn from_string(s: &str, side_to_move: Disc) -> Board {
        let mut dark = 0u64;
        let mut light = 0u64;
        for (i, c) in s.chars().take(64).enumerate() {
            match c {
                'X' | 'x' | 'B' | 'b' => dark |= 1u64 << i,
                'O' | 'o' | 'W' | 'w' => light |= 1u64 << i,
                _ => {}
            }
        }
        let (player, opponent) = match side_to_move {
            Disc::White => (light, dark),
            _ => (dark, light),
        };
        Board::from_bitboards(Bitboard::new(player), Bitboard::new(opponent))
    }

    /// Bitboard of empty squares.
    #[inline]
    pub fn get_empty(&self) -> Bitboard {
        !(self.player | self.opponent)
    }

    /// Bitboard of the side to move's legal moves.
    #[inline]
    pub fn get_moves(&self) -> Bitboard {
        self.player.get_moves(self.opponent)
    }

    #[inline]
    pub fn has_legal_moves(&self) -> bool {
        !self.get_moves().is_empty()
    }

    /// The position after playing `sq`. The move must capture at least
    /// one disc; this is debug-asserted.
    #[inline]
    pub fn make_move(&self, sq: Square) -> Board {
        let flipped = Bitboard::new(flip::flip(sq, self.player.bits(), self.opponent.bits()));
        debug_assert!(!flipped.is_empty(), "move {sq} captures nothing");
        Board {
            player: self.opponent.apply_flip(flipped),
            opponent: self.player.apply_move(flipped, sq),
        }
    }

    /// The position after a pass.
    #[inline]
    pub fn make_pass(&self) -> Board {
        self.switch_players()
    }

    #[inline]
    pub fn switch_players(&self) -> Board {
        Board {
            player: self.opponent,
            opponent: self.player,
        }
    }

    pub fn get_disc(&self, sq: Square) -> Disc {
        if self.player.contains(sq) {
            Disc::Black
        } else if self.opponent.contains(sq) {
            Disc::White
        } else {
            Disc::Empty
        }
    }
}

impl fmt::Display for Board {
    /// Renders the side to move as `X`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for rank in 0..BOARD_SIZE {
            write!(f, "{} ", rank + 1)?;
            for file in 0..BOARD_SIZE {
                let sq = Square::from_usize_unchecked(rank * 8 + file);
                write!(f, "{} ", self.get_disc(sq).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
