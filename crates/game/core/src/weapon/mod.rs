//! Weapon templates, mods and the player's weapon instances.
mod catalog;
mod definition;
mod mods;

pub use catalog::{ModKind, WeaponKind};
pub use definition::{AmmoKind, AreaEffect, FireMode, WeaponDefinition};
pub use mods::{EffectiveStats, ModBonuses, ModEffect, ModSlots, WeaponMod};

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WeaponError {
    #[error("all {capacity} mod slots are occupied")]
    ModSlotsFull { capacity: usize },

    #[error("no mod attached in slot {slot}")]
    NoSuchMod { slot: usize },
}

impl GameError for WeaponError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            WeaponError::ModSlotsFull { .. } => ErrorSeverity::Recoverable,
            WeaponError::NoSuchMod { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            WeaponError::ModSlotsFull { .. } => "ACTION_MOD_SLOTS_FULL",
            WeaponError::NoSuchMod { .. } => "ACTION_NO_SUCH_MOD",
        }
    }
}

/// A weapon carried by the player: template, attached mods and loaded rounds.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedWeapon {
    definition: WeaponDefinition,
    mods: ModSlots,
    magazine: u32,
}

impl EquippedWeapon {
    /// Creates an instance with a full magazine.
    pub fn new(definition: WeaponDefinition) -> Self {
        let magazine = definition.magazine_size;
        Self {
            definition,
            mods: ModSlots::new(),
            magazine,
        }
    }

    pub fn from_kind(kind: WeaponKind) -> Self {
        Self::new(kind.definition())
    }

    /// Creates an instance with an empty magazine.
    pub fn unloaded(definition: WeaponDefinition) -> Self {
        Self {
            magazine: 0,
            ..Self::new(definition)
        }
    }

    pub fn definition(&self) -> &WeaponDefinition {
        &self.definition
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn mods(&self) -> &[WeaponMod] {
        &self.mods
    }

    pub fn magazine(&self) -> u32 {
        self.magazine
    }

    pub fn effective(&self) -> EffectiveStats {
        EffectiveStats::compute(&self.definition, &ModBonuses::collect(&self.mods))
    }

    /// Rounds needed to fill the magazine.
    pub fn missing_rounds(&self) -> u32 {
        self.effective().magazine_size.saturating_sub(self.magazine)
    }

    /// Loads up to `rounds`, returning how many were accepted.
    pub fn load(&mut self, rounds: u32) -> u32 {
        let accepted = rounds.min(self.missing_rounds());
        self.magazine += accepted;
        accepted
    }

    /// Removes up to `rounds` from the magazine, returning how many were spent.
    pub fn consume(&mut self, rounds: u32) -> u32 {
        let spent = rounds.min(self.magazine);
        self.magazine -= spent;
        spent
    }

    /// Attaches a mod into the first free slot, bounded by `capacity`.
    pub fn attach(&mut self, weapon_mod: WeaponMod, capacity: usize) -> Result<(), WeaponError> {
        let capacity = capacity.min(self.mods.capacity());
        if self.mods.len() >= capacity {
            return Err(WeaponError::ModSlotsFull { capacity });
        }
        self.mods.push(weapon_mod);
        Ok(())
    }

    /// Removes the mod in `slot`.
    ///
    /// Returns the mod and any rounds that no longer fit the magazine; the
    /// caller returns those to the ammo reserve.
    pub fn detach(&mut self, slot: usize) -> Result<(WeaponMod, u32), WeaponError> {
        if slot >= self.mods.len() {
            return Err(WeaponError::NoSuchMod { slot });
        }
        let removed = self.mods.remove(slot);
        let capacity = self.effective().magazine_size;
        let spilled = self.magazine.saturating_sub(capacity);
        self.magazine -= spilled;
        Ok((removed, spilled))
    }
}
