//! Player and enemy actors.

use std::collections::BTreeMap;

use super::{EntityId, Position, ResourceMeter};
use crate::config::GameConfig;
use crate::progression::Experience;
use crate::weapon::{AmmoKind, EquippedWeapon, WeaponKind, WeaponMod};

/// Closed set of enemy archetypes; each maps to one AI strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EnemyKind {
    Melee,
    Ranged,
}

impl EnemyKind {
    pub fn max_health(self, config: &GameConfig) -> u32 {
        match self {
            EnemyKind::Melee => config.melee_enemy_hp,
            EnemyKind::Ranged => config.ranged_enemy_hp,
        }
    }

    pub fn attack_damage(self, config: &GameConfig) -> u32 {
        match self {
            EnemyKind::Melee => config.melee_enemy_damage,
            EnemyKind::Ranged => config.ranged_enemy_damage,
        }
    }

    pub fn kill_experience(self, config: &GameConfig) -> u32 {
        match self {
            EnemyKind::Melee => config.xp_melee_kill,
            EnemyKind::Ranged => config.xp_ranged_kill,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EntityId,
    pub kind: EnemyKind,
    pub position: Position,
    pub health: ResourceMeter,
    pub alerted: bool,
}

impl Enemy {
    pub fn new(id: EntityId, kind: EnemyKind, position: Position, config: &GameConfig) -> Self {
        Self {
            id,
            kind,
            position,
            health: ResourceMeter::full(kind.max_health(config)),
            alerted: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }
}

/// The player's body and kit.
///
/// The arsenal owns every weapon instance and each instance owns its mods,
/// so swapping or detaching never leaves dangling references.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerState {
    pub position: Position,
    pub health: ResourceMeter,
    pub arsenal: Vec<EquippedWeapon>,
    pub active_weapon: usize,
    pub ammo: BTreeMap<AmmoKind, u32>,
    /// Mods carried but not attached.
    pub stash: Vec<WeaponMod>,
    pub experience: Experience,
}

impl PlayerState {
    pub const STARTING_RESERVE: u32 = 24;

    /// Fresh player with the default loadout: a loaded pistol, a knife and
    /// one spare pistol magazine's worth of rounds in reserve.
    pub fn new(position: Position, config: &GameConfig) -> Self {
        let mut ammo = BTreeMap::new();
        ammo.insert(AmmoKind::NineMil, Self::STARTING_RESERVE);
        Self {
            position,
            health: ResourceMeter::full(config.player_max_hp),
            arsenal: vec![
                EquippedWeapon::from_kind(WeaponKind::Pistol),
                EquippedWeapon::from_kind(WeaponKind::CombatKnife),
            ],
            active_weapon: 0,
            ammo,
            stash: Vec::new(),
            experience: Experience::new(config.xp_first_level),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.health.is_depleted()
    }

    pub fn active(&self) -> Option<&EquippedWeapon> {
        self.arsenal.get(self.active_weapon)
    }

    pub fn active_mut(&mut self) -> Option<&mut EquippedWeapon> {
        self.arsenal.get_mut(self.active_weapon)
    }

    pub fn reserve(&self, kind: AmmoKind) -> u32 {
        self.ammo.get(&kind).copied().unwrap_or(0)
    }

    pub fn add_ammo(&mut self, kind: AmmoKind, amount: u32) {
        *self.ammo.entry(kind).or_insert(0) += amount;
    }

    /// Removes up to `amount` rounds from the reserve, returning how many were taken.
    pub fn take_ammo(&mut self, kind: AmmoKind, amount: u32) -> u32 {
        let entry = self.ammo.entry(kind).or_insert(0);
        let taken = amount.min(*entry);
        *entry -= taken;
        taken
    }
}
