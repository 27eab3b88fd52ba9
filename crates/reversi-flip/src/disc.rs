/// Represents a disc in the game.
///
/// * `Empty` - an empty square.
/// * `Black` - a black disc (`'X'`).
/// * `White` - a white disc (`'O'`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disc {
    Empty,
    Black,
    White,
}

impl Disc {
    /// Converts the disc to its character representation.
    pub fn to_char(self) -> char {
        match self {
            Disc::Empty => '-',
            Disc::Black => 'X',
            Disc::White => 'O',
        }
    }

    /// Returns the opposite color; `Empty` stays `Empty`.
    pub fn opposite(self) -> Disc {
        match self {
            Disc::Black => Disc::White,
            Disc::White => Disc::Black,
            Disc::Empty => Disc::Empty,
        }
    }
}
