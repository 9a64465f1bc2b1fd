//! Commonly used types and utilities for ease of import.

pub use crate::random::{random_index, random_item, random_picker};
pub use crate::{
    optimal_attack_coordinate, AiMatch, AiPlayer, Attack, Combatant, Coordinate, GameError,
    Gameboard, MatchReport, Player, Side, TargetMode, STANDARD_FLEET,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
