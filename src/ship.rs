//! A ship is nothing more than a length and a hit counter. Where it sits is
//! the board's business.

/// A ship's damage state. Boards create these in [`crate::Gameboard::place_ship`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: usize,
    hits: usize,
}

impl Ship {
    pub fn new(length: usize) -> Self {
        Self { length, hits: 0 }
    }

    /// Register one hit. Returns `false` without counting it if the ship is
    /// already sunk, so `hits` never exceeds `length`.
    pub fn hit(&mut self) -> bool {
        if self.is_sunk() {
            return false;
        }
        self.hits += 1;
        true
    }

    pub fn is_sunk(&self) -> bool {
        self.hits == self.length
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}

/// Axis a ship (or a run of hits) lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// `(row, column)` step from one cell of a run to the next.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}
