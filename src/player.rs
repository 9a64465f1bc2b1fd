use crate::board::Gameboard;
use crate::common::GameError;
use crate::coordinate::Coordinate;

/// A side in the game: a turn flag and the board it defends.
#[derive(Debug, Clone)]
pub struct Player {
    turn: bool,
    board: Gameboard,
}

impl Player {
    pub fn new(turn: bool, board: Gameboard) -> Self {
        Self { turn, board }
    }

    /// Builder for callers that assemble a player from optional parts.
    pub fn builder() -> PlayerBuilder {
        PlayerBuilder::default()
    }

    /// Attack `enemy_board` at `coordinate`, returning `true` on a hit.
    ///
    /// The turn flag flips only after the board accepted the attack; a
    /// rejected attack leaves it as it was.
    pub fn attack(
        &mut self,
        coordinate: Coordinate,
        enemy_board: &mut Gameboard,
    ) -> Result<bool, GameError> {
        if !self.turn {
            return Err(GameError::NotYourTurn);
        }
        let hit = enemy_board.receive_attack(coordinate)?;
        self.toggle_turn();
        Ok(hit)
    }

    /// `true` once every ship on `enemy_board` is sunk. `false` does not mean
    /// this player has lost.
    pub fn has_won(&self, enemy_board: &Gameboard) -> bool {
        enemy_board.are_all_ships_sunk()
    }

    /// Flip the turn flag and return its new value.
    pub fn toggle_turn(&mut self) -> bool {
        self.turn = !self.turn;
        self.turn
    }

    pub fn is_turn(&self) -> bool {
        self.turn
    }

    pub fn board(&self) -> &Gameboard {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Gameboard {
        &mut self.board
    }
}

/// Collects a player's turn flag and board; both are required.
#[derive(Debug, Default)]
pub struct PlayerBuilder {
    turn: Option<bool>,
    board: Option<Gameboard>,
}

impl PlayerBuilder {
    pub fn turn(mut self, turn: bool) -> Self {
        self.turn = Some(turn);
        self
    }

    pub fn board(mut self, board: Gameboard) -> Self {
        self.board = Some(board);
        self
    }

    pub fn build(self) -> Result<Player, GameError> {
        let turn = self.turn.ok_or(GameError::InvalidConstruction("turn"))?;
        let board = self.board.ok_or(GameError::InvalidConstruction("board"))?;
        Ok(Player::new(turn, board))
    }
}

/// Anything that takes part in a game as a [`Player`], with or without
/// extra behaviour layered on top.
pub trait Combatant {
    fn player(&self) -> &Player;

    fn player_mut(&mut self) -> &mut Player;

    fn attack(
        &mut self,
        coordinate: Coordinate,
        enemy_board: &mut Gameboard,
    ) -> Result<bool, GameError> {
        self.player_mut().attack(coordinate, enemy_board)
    }

    fn has_won(&self, enemy_board: &Gameboard) -> bool {
        self.player().has_won(enemy_board)
    }

    fn toggle_turn(&mut self) -> bool {
        self.player_mut().toggle_turn()
    }

    fn is_turn(&self) -> bool {
        self.player().is_turn()
    }

    fn board(&self) -> &Gameboard {
        self.player().board()
    }
}

impl Combatant for Player {
    fn player(&self) -> &Player {
        self
    }

    fn player_mut(&mut self) -> &mut Player {
        self
    }
}
