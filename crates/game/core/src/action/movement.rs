use super::{ActionError, ActionTransition};
use crate::env::{Dice, Env};
use crate::events::{GameEvent, TurnReport};
use crate::grid::TileKind;
use crate::state::{CardinalDirection, GameState};

/// One orthogonal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveAction {
    pub direction: CardinalDirection,
}

impl MoveAction {
    pub fn new(direction: CardinalDirection) -> Self {
        Self { direction }
    }
}

impl ActionTransition for MoveAction {
    fn pre_validate(&self, state: &GameState, _env: &Env<'_>) -> Result<(), ActionError> {
        let destination = state.player.position.step(self.direction);
        if !state.grid.contains(destination) {
            return Err(ActionError::OutOfBounds { destination });
        }
        if !state.grid.is_walkable(destination) {
            return Err(ActionError::Blocked { destination });
        }
        if state.is_enemy_at(destination) {
            return Err(ActionError::Occupied { destination });
        }
        Ok(())
    }

    fn apply<'e>(
        &self,
        state: &mut GameState,
        _env: Env<'e>,
        _dice: &mut Dice<'e>,
        report: &mut TurnReport,
    ) -> Result<(), ActionError> {
        let from = state.player.position;
        let to = from.step(self.direction);
        state.player.position = to;
        report.push(GameEvent::PlayerMoved { from, to });

        if state.grid.tile_at(to) == Some(TileKind::Elevator) {
            tracing::info!(position = %to, depth = state.depth, "elevator reached");
            report.push(GameEvent::ElevatorReached { position: to });
        }
        Ok(())
    }
}

/// Pass the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WaitAction;

impl ActionTransition for WaitAction {
    fn apply<'e>(
        &self,
        _state: &mut GameState,
        _env: Env<'e>,
        _dice: &mut Dice<'e>,
        _report: &mut TurnReport,
    ) -> Result<(), ActionError> {
        Ok(())
    }
}
