//! Reload, pickup and loadout management.

use super::{ActionError, ActionTransition};
use crate::env::{Dice, Env};
use crate::events::{GameEvent, TurnReport};
use crate::state::{GameState, Pickup};
use crate::weapon::{EquippedWeapon, WeaponError};

/// Refill the active weapon's magazine from the ammo reserve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReloadAction;

impl ActionTransition for ReloadAction {
    fn pre_validate(&self, state: &GameState, _env: &Env<'_>) -> Result<(), ActionError> {
        let player = &state.player;
        let weapon = player.active().ok_or(ActionError::NoSuchWeapon {
            index: player.active_weapon,
        })?;
        let ammo = weapon.definition().ammo.ok_or(ActionError::NoMagazine)?;
        if weapon.missing_rounds() == 0 {
            return Err(ActionError::MagazineFull);
        }
        if player.reserve(ammo) == 0 {
            return Err(ActionError::NoAmmo { ammo });
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
        let player = &mut state.player;
        let index = player.active_weapon;
        let weapon = player
            .arsenal
            .get(index)
            .ok_or(ActionError::NoSuchWeapon { index })?;
        let ammo = weapon.definition().ammo.ok_or(ActionError::NoMagazine)?;
        let wanted = weapon.missing_rounds();

        let taken = player.take_ammo(ammo, wanted);
        let weapon = player
            .active_mut()
            .ok_or(ActionError::NoSuchWeapon { index })?;
        let rounds = weapon.load(taken);
        report.push(GameEvent::Reloaded {
            weapon: weapon.name().to_owned(),
            rounds,
        });
        Ok(())
    }
}

/// Take whatever lies on the player's cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickUpAction;

impl ActionTransition for PickUpAction {
    fn pre_validate(&self, state: &GameState, _env: &Env<'_>) -> Result<(), ActionError> {
        state
            .pickup_at(state.player.position)
            .map(|_| ())
            .ok_or(ActionError::NothingToPickUp)
    }

    fn apply<'e>(
        &self,
        state: &mut GameState,
        _env: Env<'e>,
        _dice: &mut Dice<'e>,
        report: &mut TurnReport,
    ) -> Result<(), ActionError> {
        let position = state.player.position;
        let pickup = state
            .take_pickup(position)
            .ok_or(ActionError::NothingToPickUp)?;
        let player = &mut state.player;

        match pickup {
            Pickup::Ammo { kind, amount } => player.add_ammo(kind, amount),
            Pickup::HealthKit { amount } => {
                player.health.restore(amount);
            }
            Pickup::Weapon(kind) => {
                let definition = kind.definition();
                let owned = player
                    .arsenal
                    .iter()
                    .any(|weapon| weapon.definition().name == definition.name);
                match (owned, definition.ammo) {
                    // duplicates are stripped for rounds
                    (true, Some(ammo)) => player.add_ammo(ammo, definition.magazine_size),
                    (true, None) => {}
                    (false, _) => player.arsenal.push(EquippedWeapon::new(definition)),
                }
            }
            Pickup::Mod(kind) => player.stash.push(kind.definition()),
        }
        report.push(GameEvent::ItemPickedUp { position, pickup });
        Ok(())
    }
}

/// Make another arsenal slot the active weapon. Does not cost a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwitchWeaponAction {
    pub index: usize,
}

impl ActionTransition for SwitchWeaponAction {
    fn pre_validate(&self, state: &GameState, _env: &Env<'_>) -> Result<(), ActionError> {
        if self.index >= state.player.arsenal.len() {
            return Err(ActionError::NoSuchWeapon { index: self.index });
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
        let weapon = state
            .player
            .arsenal
            .get(self.index)
            .ok_or(ActionError::NoSuchWeapon { index: self.index })?;
        report.push(GameEvent::WeaponSwitched {
            index: self.index,
            weapon: weapon.name().to_owned(),
        });
        state.player.active_weapon = self.index;
        Ok(())
    }
}

/// Move a stashed mod onto the active weapon. Does not cost a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttachModAction {
    pub stash_index: usize,
}

impl ActionTransition for AttachModAction {
    fn pre_validate(&self, state: &GameState, env: &Env<'_>) -> Result<(), ActionError> {
        let player = &state.player;
        if self.stash_index >= player.stash.len() {
            return Err(ActionError::NoSuchStashMod {
                index: self.stash_index,
            });
        }
        let weapon = player.active().ok_or(ActionError::NoSuchWeapon {
            index: player.active_weapon,
        })?;
        let capacity = env.config().mod_slots();
        if weapon.mods().len() >= capacity {
            return Err(WeaponError::ModSlotsFull { capacity }.into());
        }
        Ok(())
    }

    fn apply<'e>(
        &self,
        state: &mut GameState,
        env: Env<'e>,
        _dice: &mut Dice<'e>,
        report: &mut TurnReport,
    ) -> Result<(), ActionError> {
        let player = &mut state.player;
        let index = player.active_weapon;
        let capacity = env.config().mod_slots();
        let weapon = player
            .arsenal
            .get_mut(index)
            .ok_or(ActionError::NoSuchWeapon { index })?;
        if weapon.mods().len() >= capacity {
            return Err(WeaponError::ModSlotsFull { capacity }.into());
        }
        if self.stash_index >= player.stash.len() {
            return Err(ActionError::NoSuchStashMod {
                index: self.stash_index,
            });
        }
        let weapon_mod = player.stash.remove(self.stash_index);
        let name = weapon_mod.name.clone();
        weapon.attach(weapon_mod, capacity)?;
        report.push(GameEvent::ModAttached {
            weapon: weapon.name().to_owned(),
            name,
        });
        Ok(())
    }
}

/// Move a mod from the active weapon back into the stash. Rounds that no
/// longer fit the magazine return to the reserve. Does not cost a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetachModAction {
    pub slot: usize,
}

impl ActionTransition for DetachModAction {
    fn pre_validate(&self, state: &GameState, _env: &Env<'_>) -> Result<(), ActionError> {
        let player = &state.player;
        let weapon = player.active().ok_or(ActionError::NoSuchWeapon {
            index: player.active_weapon,
        })?;
        if self.slot >= weapon.mods().len() {
            return Err(WeaponError::NoSuchMod { slot: self.slot }.into());
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
        let player = &mut state.player;
        let index = player.active_weapon;
        let weapon = player
            .arsenal
            .get_mut(index)
            .ok_or(ActionError::NoSuchWeapon { index })?;
        let (weapon_mod, spilled) = weapon.detach(self.slot)?;
        let weapon_name = weapon.name().to_owned();
        let ammo = weapon.definition().ammo;
        if let Some(ammo) = ammo {
            player.add_ammo(ammo, spilled);
        }
        report.push(GameEvent::ModDetached {
            weapon: weapon_name,
            name: weapon_mod.name.clone(),
        });
        player.stash.push(weapon_mod);
        Ok(())
    }
}
