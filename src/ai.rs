// Hunt/target attack selection for the AI player.
//
// The AI remembers two things: the coordinates it has not yet attacked (the
// pool) and the hits belonging to the one ship it is currently chasing (the
// found list). Everything else is derived from those on each call.

use alloc::vec::Vec;

use crate::config::{BOARD_CELLS, MAX_SHIP_LENGTH};
use crate::coordinate::Coordinate;
use crate::ship::Orientation;

/// Targeting state implied by the length of the found list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetMode {
    /// No unsunk hit known; shoot anywhere.
    Hunt,
    /// One hit known; probe its neighbours.
    TargetUnknownOrientation,
    /// Two or more hits in a line; extend the line.
    TargetKnownOrientation,
}

impl TargetMode {
    pub fn from_found(found: &[Coordinate]) -> Self {
        match found.len() {
            0 => TargetMode::Hunt,
            1 => TargetMode::TargetUnknownOrientation,
            _ => TargetMode::TargetKnownOrientation,
        }
    }
}

/// Choose the next coordinate to attack.
///
/// `pool` holds every coordinate not yet attacked and is only read. `found`
/// holds the hits of a single unsunk ship; it is cleared when the ship must
/// be sunk (no unattacked extension remains, or it already spans
/// `MAX_SHIP_LENGTH` cells), after which the choice falls back to the whole
/// pool. Whenever more than one coordinate qualifies, the choice goes through
/// `pick`; a single candidate is returned without calling it.
///
/// Returns `None` only when `pick` does, i.e. for an empty pool.
pub fn optimal_attack_coordinate<F>(
    pool: &[Coordinate],
    found: &mut Vec<Coordinate>,
    mut pick: F,
) -> Option<Coordinate>
where
    F: FnMut(&[Coordinate]) -> Option<Coordinate>,
{
    let candidates = match found.len() {
        0 => return pick(pool),
        MAX_SHIP_LENGTH => {
            log::debug!("found ship reached maximum length, back to hunting");
            found.clear();
            return pick(pool);
        }
        1 => neighbours_in_pool(pool, found[0]),
        _ => line_extensions_in_pool(pool, found),
    };

    match candidates.as_slice() {
        [] => {
            log::debug!("no open cells around {:?}, assuming sunk", found);
            found.clear();
            pick(pool)
        }
        [only] => Some(*only),
        _ => pick(&candidates),
    }
}

/// Pool cells orthogonally adjacent to `hit`.
fn neighbours_in_pool(pool: &[Coordinate], hit: Coordinate) -> Vec<Coordinate> {
    pool.iter()
        .copied()
        .filter(|c| c.manhattan_distance(&hit) == 1)
        .collect()
}

/// The cells just past each end of the found line, if still in the pool.
/// The first two hits decide the axis.
fn line_extensions_in_pool(pool: &[Coordinate], found: &[Coordinate]) -> Vec<Coordinate> {
    let orientation = if found[0].column == found[1].column {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let along = |c: &&Coordinate| match orientation {
        Orientation::Vertical => c.row,
        Orientation::Horizontal => c.column,
    };
    let (Some(&low), Some(&high)) = (found.iter().min_by_key(along), found.iter().max_by_key(along))
    else {
        return Vec::new();
    };

    let (dr, dc) = orientation.step();
    [high.checked_offset(dr, dc), low.checked_offset(-dr, -dc)]
        .into_iter()
        .flatten()
        .filter(|c| pool.contains(c))
        .collect()
}

/// An AI's attack memory: the attackable pool and the hits of the ship it is
/// currently chasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targeting {
    pool: Vec<Coordinate>,
    found: Vec<Coordinate>,
}

impl Targeting {
    /// Fresh memory: every board coordinate attackable, in row-major order.
    pub fn new() -> Self {
        let mut pool = Vec::with_capacity(BOARD_CELLS);
        pool.extend(Coordinate::all_on_board());
        Self {
            pool,
            found: Vec::new(),
        }
    }

    pub fn attackable_coordinates(&self) -> &[Coordinate] {
        &self.pool
    }

    pub fn found_ship_coordinates(&self) -> &[Coordinate] {
        &self.found
    }

    pub fn mode(&self) -> TargetMode {
        TargetMode::from_found(&self.found)
    }

    /// Record the outcome of an attack at `coordinate`. Call exactly once per
    /// resolved attack, after its result is known.
    pub fn update_attack_history(&mut self, coordinate: Coordinate, is_hit: bool) {
        if let Some(idx) = self.pool.iter().position(|c| *c == coordinate) {
            self.pool.remove(idx);
        }
        if is_hit {
            self.found.push(coordinate);
        }
    }

    /// Next coordinate to attack; see [`optimal_attack_coordinate`]. Does not
    /// remove it from the pool.
    pub fn next_target<F>(&mut self, pick: F) -> Option<Coordinate>
    where
        F: FnMut(&[Coordinate]) -> Option<Coordinate>,
    {
        optimal_attack_coordinate(&self.pool, &mut self.found, pick)
    }
}

impl Default for Targeting {
    fn default() -> Self {
        Self::new()
    }
}
