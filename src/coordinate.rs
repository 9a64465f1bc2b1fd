//! Board coordinates and a compact set of board cells.
//!
//! Coordinates are signed so that off-grid input like `(-1, 4)` can be
//! expressed and rejected by the board instead of wrapping around.

use core::fmt;

use crate::config::{BOARD_CELLS, BOARD_COLS, BOARD_ROWS};

/// A `(row, column)` position, 0-indexed from the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub column: i32,
}

impl Coordinate {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// `true` if the coordinate lies inside the `BOARD_ROWS` x `BOARD_COLS` grid.
    pub fn is_on_board(&self) -> bool {
        (0..BOARD_ROWS).contains(&self.row) && (0..BOARD_COLS).contains(&self.column)
    }

    /// Row-major cell index, or `None` when off the board.
    pub fn index(&self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.row * BOARD_COLS + self.column) as usize)
        } else {
            None
        }
    }

    /// The coordinate shifted by `dr` rows and `dc` columns. May leave the board.
    pub const fn offset(&self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.column + dc)
    }

    /// Like [`Coordinate::offset`], but `None` instead of overflowing.
    pub fn checked_offset(&self, dr: i32, dc: i32) -> Option<Self> {
        Some(Self::new(self.row.checked_add(dr)?, self.column.checked_add(dc)?))
    }

    /// Saturates at `u32::MAX` for coordinates at opposite ends of `i32`.
    pub fn manhattan_distance(&self, other: &Coordinate) -> u32 {
        self.row
            .abs_diff(other.row)
            .saturating_add(self.column.abs_diff(other.column))
    }

    /// Every on-board coordinate in row-major order.
    pub fn all_on_board() -> impl Iterator<Item = Coordinate> {
        (0..BOARD_ROWS).flat_map(|row| (0..BOARD_COLS).map(move |column| Coordinate::new(row, column)))
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Set of on-board cells packed into a `u128`, one bit per cell.
///
/// Off-board coordinates are never members; inserting one is a no-op that
/// reports `false`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct CellSet {
    bits: u128,
}

const _: () = assert!(BOARD_CELLS <= u128::BITS as usize);

impl CellSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        match coordinate.index() {
            Some(idx) => self.bits & (1u128 << idx) != 0,
            None => false,
        }
    }

    /// Adds `coordinate`. Returns `true` if it was not already present.
    pub fn insert(&mut self, coordinate: Coordinate) -> bool {
        let Some(idx) = coordinate.index() else {
            return false;
        };
        let bit = 1u128 << idx;
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    /// Members in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all_on_board().filter(move |c| self.contains(*c))
    }
}

impl fmt::Debug for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
