//! Player actions.
//!
//! Each action is a small struct implementing [`ActionTransition`]:
//! `pre_validate` inspects the untouched state and rejects illegal input,
//! `apply` mutates the state and records events. [`PlayerAction`] is the
//! closed set the engine accepts.

mod combat;
mod error;
mod inventory;
mod movement;

pub use combat::FireAction;
pub use error::ActionError;
pub use inventory::{
    AttachModAction, DetachModAction, PickUpAction, ReloadAction, SwitchWeaponAction,
};
pub use movement::{MoveAction, WaitAction};

use crate::env::{Dice, Env};
use crate::events::TurnReport;
use crate::state::{CardinalDirection, GameState, Position};

/// Defines how an action variant validates and mutates game state.
pub trait ActionTransition {
    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &GameState, _env: &Env<'_>) -> Result<(), ActionError> {
        Ok(())
    }

    /// Applies the action. Only called after `pre_validate` succeeded.
    fn apply<'e>(
        &self,
        state: &mut GameState,
        env: Env<'e>,
        dice: &mut Dice<'e>,
        report: &mut TurnReport,
    ) -> Result<(), ActionError>;

    /// Whether the enemy phase runs afterwards.
    fn consumes_turn(&self) -> bool {
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PlayerAction {
    Move(MoveAction),
    Fire(FireAction),
    Reload(ReloadAction),
    PickUp(PickUpAction),
    Wait(WaitAction),
    SwitchWeapon(SwitchWeaponAction),
    AttachMod(AttachModAction),
    DetachMod(DetachModAction),
}

impl PlayerAction {
    pub fn step(direction: CardinalDirection) -> Self {
        Self::Move(MoveAction::new(direction))
    }

    pub fn fire(target: Position) -> Self {
        Self::Fire(FireAction::new(target))
    }

    pub fn reload() -> Self {
        Self::Reload(ReloadAction)
    }

    pub fn pick_up() -> Self {
        Self::PickUp(PickUpAction)
    }

    pub fn wait() -> Self {
        Self::Wait(WaitAction)
    }

    pub fn switch_weapon(index: usize) -> Self {
        Self::SwitchWeapon(SwitchWeaponAction { index })
    }

    pub fn attach_mod(stash_index: usize) -> Self {
        Self::AttachMod(AttachModAction { stash_index })
    }

    pub fn detach_mod(slot: usize) -> Self {
        Self::DetachMod(DetachModAction { slot })
    }
}

impl ActionTransition for PlayerAction {
    fn pre_validate(&self, state: &GameState, env: &Env<'_>) -> Result<(), ActionError> {
        match self {
            PlayerAction::Move(action) => action.pre_validate(state, env),
            PlayerAction::Fire(action) => action.pre_validate(state, env),
            PlayerAction::Reload(action) => action.pre_validate(state, env),
            PlayerAction::PickUp(action) => action.pre_validate(state, env),
            PlayerAction::Wait(action) => action.pre_validate(state, env),
            PlayerAction::SwitchWeapon(action) => action.pre_validate(state, env),
            PlayerAction::AttachMod(action) => action.pre_validate(state, env),
            PlayerAction::DetachMod(action) => action.pre_validate(state, env),
        }
    }

    fn apply<'e>(
        &self,
        state: &mut GameState,
        env: Env<'e>,
        dice: &mut Dice<'e>,
        report: &mut TurnReport,
    ) -> Result<(), ActionError> {
        match self {
            PlayerAction::Move(action) => action.apply(state, env, dice, report),
            PlayerAction::Fire(action) => action.apply(state, env, dice, report),
            PlayerAction::Reload(action) => action.apply(state, env, dice, report),
            PlayerAction::PickUp(action) => action.apply(state, env, dice, report),
            PlayerAction::Wait(action) => action.apply(state, env, dice, report),
            PlayerAction::SwitchWeapon(action) => action.apply(state, env, dice, report),
            PlayerAction::AttachMod(action) => action.apply(state, env, dice, report),
            PlayerAction::DetachMod(action) => action.apply(state, env, dice, report),
        }
    }

    fn consumes_turn(&self) -> bool {
        !matches!(
            self,
            PlayerAction::SwitchWeapon(_) | PlayerAction::AttachMod(_) | PlayerAction::DetachMod(_)
        )
    }
}
