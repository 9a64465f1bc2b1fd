//! Common types: game errors and attack records.

use crate::coordinate::Coordinate;

/// A resolved attack as kept in a board's attack log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub coordinate: Coordinate,
    pub hit: bool,
}

/// Errors returned by board, player and AI operations.
///
/// Every failing operation returns before touching any state, so an `Err`
/// never leaves a board, ship or attack pool half-updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Placement or attack coordinate lies outside the board.
    OutOfBounds { coordinate: Coordinate },
    /// Placement collides with a ship already on the board, or lists the
    /// same cell twice.
    Overlap { coordinate: Coordinate },
    /// The coordinate has already been attacked on this board.
    DuplicateAttack { coordinate: Coordinate },
    /// Attack attempted while the player's turn flag is off.
    NotYourTurn,
    /// A required constructor argument was not supplied.
    InvalidConstruction(&'static str),
    /// Ship length outside `MIN_SHIP_LENGTH..=MAX_SHIP_LENGTH`.
    InvalidShipLength { length: usize },
    /// Random placement gave up after the configured number of attempts.
    UnableToPlaceShip { length: usize, attempts: usize },
    /// The AI has no attackable coordinates left.
    NoTargetsLeft,
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::OutOfBounds { coordinate } => {
                write!(f, "coordinate {} is outside the gameboard", coordinate)
            }
            GameError::Overlap { coordinate } => {
                write!(f, "a ship already occupies {}", coordinate)
            }
            GameError::DuplicateAttack { coordinate } => {
                write!(f, "{} has already been attacked", coordinate)
            }
            GameError::NotYourTurn => write!(f, "not this player's turn to attack"),
            GameError::InvalidConstruction(missing) => {
                write!(f, "missing required constructor argument: {}", missing)
            }
            GameError::InvalidShipLength { length } => {
                write!(f, "ship length {} is not supported", length)
            }
            GameError::UnableToPlaceShip { length, attempts } => write!(
                f,
                "no legal position found for ship of length {} after {} attempts",
                length, attempts
            ),
            GameError::NoTargetsLeft => write!(f, "no attackable coordinates left"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
