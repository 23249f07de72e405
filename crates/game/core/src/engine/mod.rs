//! Turn pipeline.
//!
//! The [`GameEngine`] is the only writer of [`GameState`] during play. One
//! call to [`GameEngine::execute`] runs a whole turn in order: the player's
//! action, the visibility refresh, then every living enemy.

mod transition;
mod turns;

use crate::action::{ActionError, ActionTransition, PlayerAction};
use crate::env::Env;
use crate::events::TurnReport;
use crate::state::{EntityId, GameState, LevelError, LevelSpec};

pub struct GameEngine<'a> {
    state: &'a mut GameState,
    env: Env<'a>,
}

impl<'a> GameEngine<'a> {
    pub fn new(state: &'a mut GameState, env: Env<'a>) -> Self {
        Self { state, env }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    pub fn env(&self) -> Env<'a> {
        self.env
    }

    /// Executes one player action and, if it costs a turn, the enemy phase.
    ///
    /// Rejected actions return the reason and leave the state untouched; the
    /// turn counter does not advance.
    pub fn execute(&mut self, action: PlayerAction) -> Result<TurnReport, ActionError> {
        if self.state.is_game_over() {
            return Err(ActionError::GameOver);
        }

        let mut report = TurnReport::new();
        let mut dice = self
            .env
            .dice(self.state.game_seed, self.state.turn, EntityId::PLAYER);
        transition::drive_transition(&action, self.state, self.env, &mut dice, &mut report)?;

        if !action.consumes_turn() {
            return Ok(report);
        }

        self.state.refresh_visibility(self.env.config().fov_radius);
        self.run_enemy_phase(&mut report);
        self.state.turn += 1;

        tracing::debug!(
            turn = self.state.turn,
            events = report.events.len(),
            status = %self.state.status,
            "turn complete"
        );
        Ok(report)
    }

    /// Loads the next level, keeping the player's kit.
    pub fn descend(&mut self, level: LevelSpec) -> Result<(), LevelError> {
        self.state.enter_level(level, self.env.config())?;
        self.state.depth += 1;
        tracing::info!(depth = self.state.depth, "descended to next level");
        Ok(())
    }

    /// Starts a fresh run on `level` with the same game seed.
    pub fn restart(&mut self, level: LevelSpec) -> Result<(), LevelError> {
        *self.state = GameState::new(level, self.env.config(), self.state.game_seed)?;
        tracing::info!(seed = self.state.game_seed, "run restarted");
        Ok(())
    }
}
