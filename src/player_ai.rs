use crate::ai::{TargetMode, Targeting};
use crate::board::Gameboard;
use crate::common::{Attack, GameError};
use crate::coordinate::Coordinate;
use crate::player::{Combatant, Player};

/// Computer player: a regular [`Player`] plus hunt/target attack memory.
#[derive(Debug, Clone)]
pub struct AiPlayer {
    player: Player,
    targeting: Targeting,
}

impl AiPlayer {
    pub fn new(turn: bool, board: Gameboard) -> Self {
        Self::from_player(Player::new(turn, board))
    }

    pub fn from_player(player: Player) -> Self {
        Self {
            player,
            targeting: Targeting::new(),
        }
    }

    /// Coordinates of the enemy board this AI has not attacked yet.
    pub fn attackable_coordinates(&self) -> &[Coordinate] {
        self.targeting.attackable_coordinates()
    }

    /// Hits on the ship currently being chased.
    pub fn found_ship_coordinates(&self) -> &[Coordinate] {
        self.targeting.found_ship_coordinates()
    }

    pub fn mode(&self) -> TargetMode {
        self.targeting.mode()
    }

    /// Record an attack outcome; see [`Targeting::update_attack_history`].
    pub fn update_attack_history(&mut self, coordinate: Coordinate, is_hit: bool) {
        self.targeting.update_attack_history(coordinate, is_hit);
    }

    /// Choose the next coordinate without attacking it.
    pub fn select_target<F>(&mut self, pick: F) -> Option<Coordinate>
    where
        F: FnMut(&[Coordinate]) -> Option<Coordinate>,
    {
        self.targeting.next_target(pick)
    }

    /// Select a target, attack it and record the result, in that order.
    pub fn play_turn<F>(&mut self, enemy_board: &mut Gameboard, pick: F) -> Result<Attack, GameError>
    where
        F: FnMut(&[Coordinate]) -> Option<Coordinate>,
    {
        // Selection may clear the found list, so the turn is checked first.
        if !self.player.is_turn() {
            return Err(GameError::NotYourTurn);
        }
        let coordinate = self.select_target(pick).ok_or(GameError::NoTargetsLeft)?;
        let hit = self.player.attack(coordinate, enemy_board)?;
        self.targeting.update_attack_history(coordinate, hit);
        Ok(Attack { coordinate, hit })
    }
}

impl Combatant for AiPlayer {
    fn player(&self) -> &Player {
        &self.player
    }

    fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}
