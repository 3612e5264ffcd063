//! Move representation
//!
//! A move is a plain from/to square pair. The mover is implied by the board
//! cell under `from`; castling is recognized at application time by the king
//! stepping two files.

use super::board::Square;
use std::fmt;

/// A from/to square pair
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Convert to coordinate notation (e.g., "e2e4")
    pub fn to_coords(self) -> String {
        format!("{}{}", self.from.to_algebraic(), self.to.to_algebraic())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coords())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_coords())
    }
}
