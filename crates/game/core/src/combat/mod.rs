//! Combat resolution: traces, explosions and damage application.
//!
//! [`Combat`] borrows the state for the duration of one actor's attack and
//! writes every consequence (damage, kills, destroyed tiles, loot) into the
//! turn report. Validation (ammo, reach) happens in the action layer before
//! a resolver is built.

mod damage;
mod fire;

pub use damage::mitigated_damage;
pub use fire::scatter;

use crate::env::{Dice, Env};
use crate::events::{GameEvent, TurnReport};
use crate::state::GameState;

pub struct Combat<'s, 'e> {
    state: &'s mut GameState,
    env: Env<'e>,
    dice: &'s mut Dice<'e>,
    report: &'s mut TurnReport,
}

impl<'s, 'e> Combat<'s, 'e> {
    pub fn new(
        state: &'s mut GameState,
        env: Env<'e>,
        dice: &'s mut Dice<'e>,
        report: &'s mut TurnReport,
    ) -> Self {
        Self {
            state,
            env,
            dice,
            report,
        }
    }

    pub fn state(&self) -> &GameState {
        self.state
    }

    fn emit(&mut self, event: GameEvent) {
        self.report.push(event);
    }
}
