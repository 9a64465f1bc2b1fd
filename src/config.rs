/// Number of rows on every gameboard.
pub const BOARD_ROWS: i32 = 10;
/// Number of columns on every gameboard.
pub const BOARD_COLS: i32 = 10;
/// Total number of cells on a board.
pub const BOARD_CELLS: usize = (BOARD_ROWS * BOARD_COLS) as usize;

pub const MIN_SHIP_LENGTH: usize = 1;
/// Longest ship the targeting heuristic models. A found list of this length
/// is treated as a fully discovered ship.
pub const MAX_SHIP_LENGTH: usize = 5;

/// Ship lengths dealt to each side in a standard game.
pub const STANDARD_FLEET: [usize; 5] = [2, 3, 3, 4, 5];

/// Resampling cap per ship for random fleet layouts. The standard fleet never
/// gets close; it only stops inputs that cannot fit on the board at all.
pub const PLACEMENT_ATTEMPT_LIMIT: usize = 10_000;
