//! Built-in weapon and mod tables.

use super::{AmmoKind, FireMode, ModEffect, WeaponDefinition, WeaponMod};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponKind {
    Pistol,
    Shotgun,
    Rifle,
    Sniper,
    RocketLauncher,
    Minigun,
    FragGrenade,
    CombatKnife,
}

impl WeaponKind {
    /// Weapons that can appear as loot.
    pub const DROPPABLE: [WeaponKind; 7] = [
        WeaponKind::Pistol,
        WeaponKind::Shotgun,
        WeaponKind::Rifle,
        WeaponKind::Sniper,
        WeaponKind::RocketLauncher,
        WeaponKind::Minigun,
        WeaponKind::FragGrenade,
    ];

    pub fn definition(self) -> WeaponDefinition {
        match self {
            WeaponKind::Pistol => WeaponDefinition::new("Pistol", FireMode::Hitscan, 1, 8)
                .with_magazine(12, AmmoKind::NineMil),
            WeaponKind::Shotgun => WeaponDefinition::new("Shotgun", FireMode::Hitscan, 1, 4)
                .with_magazine(6, AmmoKind::Shells)
                .with_pellets(5, 0.3),
            WeaponKind::Rifle => WeaponDefinition::new("Assault Rifle", FireMode::Hitscan, 2, 10)
                .with_magazine(30, AmmoKind::Rifle),
            WeaponKind::Sniper => WeaponDefinition::new("Sniper Rifle", FireMode::Hitscan, 10, 20)
                .with_magazine(4, AmmoKind::Rifle),
            WeaponKind::RocketLauncher => {
                WeaponDefinition::new("Rocket Launcher", FireMode::Projectile, 10, 12)
                    .with_magazine(1, AmmoKind::Rocket)
                    .with_area(2, 5)
            }
            WeaponKind::Minigun => WeaponDefinition::new("Minigun", FireMode::Hitscan, 1, 8)
                .with_magazine(100, AmmoKind::Rifle)
                .with_burst(5),
            WeaponKind::FragGrenade => {
                WeaponDefinition::new("Frag Grenade", FireMode::Projectile, 20, 8)
                    .with_magazine(1, AmmoKind::Grenade)
                    .with_area(3, 15)
            }
            WeaponKind::CombatKnife => {
                WeaponDefinition::new("Combat Knife", FireMode::Melee, 5, 1)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModKind {
    LaserSight,
    ExtendedMag,
    HeavyBarrel,
    Acog,
}

impl ModKind {
    pub const ALL: [ModKind; 4] = [
        ModKind::LaserSight,
        ModKind::ExtendedMag,
        ModKind::HeavyBarrel,
        ModKind::Acog,
    ];

    pub fn definition(self) -> WeaponMod {
        match self {
            ModKind::LaserSight => WeaponMod::new("Laser Sight", ModEffect::SpreadFactor(0.5)),
            ModKind::ExtendedMag => WeaponMod::new("Extended Mag", ModEffect::MagazineFactor(1.5)),
            ModKind::HeavyBarrel => WeaponMod::new("Heavy Barrel", ModEffect::DamageBonus(2)),
            ModKind::Acog => WeaponMod::new("ACOG Scope", ModEffect::RangeBonus(5)),
        }
    }
}
