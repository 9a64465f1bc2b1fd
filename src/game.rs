//! AI-versus-AI match driver.

use rand::Rng;

use crate::board::Gameboard;
use crate::common::GameError;
use crate::config::BOARD_CELLS;
use crate::player::Combatant;
use crate::player_ai::AiPlayer;
use crate::random::random_picker;

/// Which of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "lowercase"))]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

/// Outcome of a finished (or abandoned) match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchReport {
    /// `None` only if the shot limit ran out, which a legal game cannot reach.
    pub winner: Option<Side>,
    pub turns: usize,
    pub first_shots: usize,
    pub second_shots: usize,
    pub first_hits: usize,
    pub second_hits: usize,
}

/// Two AI players taking alternate shots at each other's boards.
/// The first player opens.
#[derive(Debug, Clone)]
pub struct AiMatch {
    first: AiPlayer,
    second: AiPlayer,
}

impl AiMatch {
    pub fn new(first_board: Gameboard, second_board: Gameboard) -> Self {
        Self {
            first: AiPlayer::new(true, first_board),
            second: AiPlayer::new(false, second_board),
        }
    }

    /// Both sides get an independent random layout of `lengths`.
    pub fn with_random_fleets<R: Rng + ?Sized>(
        lengths: &[usize],
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let first_board = Gameboard::with_random_fleet(lengths, rng)?;
        let second_board = Gameboard::with_random_fleet(lengths, rng)?;
        Ok(Self::new(first_board, second_board))
    }

    pub fn first(&self) -> &AiPlayer {
        &self.first
    }

    pub fn second(&self) -> &AiPlayer {
        &self.second
    }

    /// Play until one side has sunk every enemy ship.
    pub fn run<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<MatchReport, GameError> {
        let mut report = MatchReport {
            winner: None,
            turns: 0,
            first_shots: 0,
            second_shots: 0,
            first_hits: 0,
            second_hits: 0,
        };
        let mut side = Side::First;

        while report.turns < 2 * BOARD_CELLS {
            let (attacker, defender) = match side {
                Side::First => (&mut self.first, &mut self.second),
                Side::Second => (&mut self.second, &mut self.first),
            };
            let shot = attacker.play_turn(defender.player_mut().board_mut(), random_picker(&mut *rng))?;
            report.turns += 1;
            let (shots, hits) = match side {
                Side::First => (&mut report.first_shots, &mut report.first_hits),
                Side::Second => (&mut report.second_shots, &mut report.second_hits),
            };
            *shots += 1;
            if shot.hit {
                *hits += 1;
            }

            if attacker.has_won(defender.board()) {
                log::info!("{:?} player wins after {} turns", side, report.turns);
                report.winner = Some(side);
                return Ok(report);
            }
            defender.toggle_turn();
            side = side.other();
        }

        log::warn!("match stopped after {} turns without a winner", report.turns);
        Ok(report)
    }
}
