use arrayvec::ArrayVec;

use super::{AmmoKind, AreaEffect, FireMode, WeaponDefinition};
use crate::config::GameConfig;

/// Stat change granted by an attached mod.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModEffect {
    DamageBonus(u32),
    RangeBonus(u32),
    /// Multiplies pellet spread.
    SpreadFactor(f32),
    /// Multiplies magazine capacity (rounded up).
    MagazineFactor(f32),
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponMod {
    pub name: String,
    pub effect: ModEffect,
}

impl WeaponMod {
    pub fn new(name: impl Into<String>, effect: ModEffect) -> Self {
        Self {
            name: name.into(),
            effect,
        }
    }
}

pub type ModSlots = ArrayVec<WeaponMod, { GameConfig::MAX_MOD_SLOTS }>;

/// Accumulated modifiers from every attached mod.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModBonuses {
    pub damage: u32,
    pub range: u32,
    pub spread_factor: f32,
    pub magazine_factor: f32,
}

impl Default for ModBonuses {
    fn default() -> Self {
        Self {
            damage: 0,
            range: 0,
            spread_factor: 1.0,
            magazine_factor: 1.0,
        }
    }
}

impl ModBonuses {
    pub fn collect<'m>(mods: impl IntoIterator<Item = &'m WeaponMod>) -> Self {
        mods.into_iter()
            .fold(Self::default(), |mut acc, weapon_mod| {
                match weapon_mod.effect {
                    ModEffect::DamageBonus(bonus) => acc.damage += bonus,
                    ModEffect::RangeBonus(bonus) => acc.range += bonus,
                    ModEffect::SpreadFactor(factor) => acc.spread_factor *= factor,
                    ModEffect::MagazineFactor(factor) => acc.magazine_factor *= factor,
                }
                acc
            })
    }
}

/// Weapon stats after applying mods.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectiveStats {
    pub damage: u32,
    pub range: u32,
    pub magazine_size: u32,
    pub spread: f32,
    /// At least one.
    pub pellets: u32,
    /// At least one.
    pub burst: u32,
    pub area: Option<AreaEffect>,
    pub ammo: Option<AmmoKind>,
    pub mode: FireMode,
}

impl EffectiveStats {
    pub fn compute(definition: &WeaponDefinition, bonuses: &ModBonuses) -> Self {
        let magazine_size =
            (definition.magazine_size as f64 * bonuses.magazine_factor as f64).ceil() as u32;
        Self {
            damage: definition.damage + bonuses.damage,
            range: definition.range + bonuses.range,
            magazine_size,
            spread: definition.spread.unwrap_or(0.0) * bonuses.spread_factor,
            pellets: definition.pellets.unwrap_or(1).max(1),
            burst: definition.burst.unwrap_or(1).max(1),
            area: definition.area,
            ammo: definition.ammo,
            mode: definition.mode,
        }
    }
}
