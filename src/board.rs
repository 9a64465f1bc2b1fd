//! Gameboard state: ship placement, attack resolution, sunk detection and
//! random fleet layouts.

use alloc::vec::Vec;
use core::fmt;

use rand::Rng;

use crate::common::{Attack, GameError};
use crate::config::{
    BOARD_CELLS, BOARD_COLS, BOARD_ROWS, MAX_SHIP_LENGTH, MIN_SHIP_LENGTH, PLACEMENT_ATTEMPT_LIMIT,
};
use crate::coordinate::{CellSet, Coordinate};
use crate::random::random_index;
use crate::ship::{Orientation, Ship};

/// Index into `Gameboard::ships`.
type ShipId = usize;

/// One side's board: which cells hold which ship, and every attack received.
#[derive(Clone)]
pub struct Gameboard {
    cells: [Option<ShipId>; BOARD_CELLS],
    ships: Vec<Ship>,
    attacked: CellSet,
    attacks: Vec<Attack>,
}

impl Gameboard {
    /// Create an empty board (no ships placed, nothing attacked).
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_CELLS],
            ships: Vec::new(),
            attacked: CellSet::new(),
            attacks: Vec::new(),
        }
    }

    /// Build a board holding one ship per entry of `positions`.
    pub fn from_positions(positions: &[Vec<Coordinate>]) -> Result<Self, GameError> {
        let mut board = Self::new();
        for ship in positions {
            board.place_ship(ship)?;
        }
        Ok(board)
    }

    /// Build a board with a random legal layout of the given ship lengths.
    pub fn with_random_fleet<R: Rng + ?Sized>(
        lengths: &[usize],
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let positions = Self::random_ship_positions(lengths, rng)?;
        Self::from_positions(&positions)
    }

    fn check_placement(&self, coordinates: &[Coordinate]) -> Result<(), GameError> {
        let length = coordinates.len();
        if !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(&length) {
            return Err(GameError::InvalidShipLength { length });
        }
        let mut claimed = CellSet::new();
        for &coordinate in coordinates {
            let Some(idx) = coordinate.index() else {
                return Err(GameError::OutOfBounds { coordinate });
            };
            if self.cells[idx].is_some() || !claimed.insert(coordinate) {
                return Err(GameError::Overlap { coordinate });
            }
        }
        Ok(())
    }

    /// `true` iff [`Gameboard::place_ship`] would accept `coordinates`.
    pub fn can_place_ship(&self, coordinates: &[Coordinate]) -> bool {
        self.check_placement(coordinates).is_ok()
    }

    /// Place a ship of length `coordinates.len()` covering `coordinates`.
    ///
    /// The whole list is validated before anything is written, so a failed
    /// placement leaves the board untouched.
    pub fn place_ship(&mut self, coordinates: &[Coordinate]) -> Result<(), GameError> {
        self.check_placement(coordinates)?;
        let id = self.ships.len();
        self.ships.push(Ship::new(coordinates.len()));
        for coordinate in coordinates {
            if let Some(idx) = coordinate.index() {
                self.cells[idx] = Some(id);
            }
        }
        log::trace!("placed ship #{} of length {}", id, coordinates.len());
        Ok(())
    }

    /// Resolve an attack at `coordinate`, returning `true` on a hit.
    pub fn receive_attack(&mut self, coordinate: Coordinate) -> Result<bool, GameError> {
        let Some(idx) = coordinate.index() else {
            return Err(GameError::OutOfBounds { coordinate });
        };
        if self.attacked.contains(coordinate) {
            return Err(GameError::DuplicateAttack { coordinate });
        }
        let hit = match self.cells[idx] {
            Some(id) => {
                self.ships[id].hit();
                true
            }
            None => false,
        };
        self.attacked.insert(coordinate);
        self.attacks.push(Attack { coordinate, hit });
        log::debug!("attack at {}: {}", coordinate, if hit { "hit" } else { "miss" });
        Ok(hit)
    }

    /// `true` when every placed ship is sunk. A board without ships counts as
    /// all sunk.
    pub fn are_all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// The ship covering `coordinate`, if any.
    pub fn ship_at(&self, coordinate: Coordinate) -> Option<&Ship> {
        let id = self.cells[coordinate.index()?]?;
        self.ships.get(id)
    }

    pub fn ships_remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Attacks received so far, oldest first.
    pub fn attack_log(&self) -> &[Attack] {
        &self.attacks
    }

    pub fn is_attacked(&self, coordinate: Coordinate) -> bool {
        self.attacked.contains(coordinate)
    }

    /// Random, mutually legal positions for ships of the given lengths, in
    /// input order.
    ///
    /// Each ship is sampled as an anchor cell plus an orientation; the ship
    /// occupies the `length` cells that follow the anchor along that axis
    /// (the anchor itself is not part of it). Samples are redrawn until one
    /// fits on a private scratch board, up to [`PLACEMENT_ATTEMPT_LIMIT`]
    /// draws per ship.
    pub fn random_ship_positions<R: Rng + ?Sized>(
        lengths: &[usize],
        rng: &mut R,
    ) -> Result<Vec<Vec<Coordinate>>, GameError> {
        if let Some(&length) = lengths
            .iter()
            .find(|l| !(MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH).contains(*l))
        {
            return Err(GameError::InvalidShipLength { length });
        }

        let mut scratch = Self::new();
        let mut positions = Vec::with_capacity(lengths.len());
        for &length in lengths {
            let ship = scratch.sample_legal_run(length, rng)?;
            scratch.place_ship(&ship)?;
            positions.push(ship);
        }
        Ok(positions)
    }

    fn sample_legal_run<R: Rng + ?Sized>(
        &self,
        length: usize,
        rng: &mut R,
    ) -> Result<Vec<Coordinate>, GameError> {
        for attempt in 1..=PLACEMENT_ATTEMPT_LIMIT {
            let anchor = Coordinate::new(
                random_index(rng, BOARD_ROWS as usize) as i32,
                random_index(rng, BOARD_COLS as usize) as i32,
            );
            let orientation = if random_index(rng, 2) == 0 {
                Orientation::Vertical
            } else {
                Orientation::Horizontal
            };
            let run = run_after(anchor, length, orientation);
            if self.can_place_ship(&run) {
                log::trace!(
                    "length {} ship placed after {} draw(s) ({:?} from {})",
                    length,
                    attempt,
                    orientation,
                    anchor
                );
                return Ok(run);
            }
        }
        log::warn!(
            "gave up placing ship of length {} after {} draws",
            length,
            PLACEMENT_ATTEMPT_LIMIT
        );
        Err(GameError::UnableToPlaceShip {
            length,
            attempts: PLACEMENT_ATTEMPT_LIMIT,
        })
    }
}

/// The `length` cells following `anchor` along `orientation`.
fn run_after(anchor: Coordinate, length: usize, orientation: Orientation) -> Vec<Coordinate> {
    let (dr, dc) = orientation.step();
    (1..=length as i32)
        .map(|k| anchor.offset(dr * k, dc * k))
        .collect()
}

impl Default for Gameboard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Gameboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gameboard")
            .field("ships", &self.ships)
            .field("attacked", &self.attacked)
            .field("attacks", &self.attacks.len())
            .finish()
    }
}
