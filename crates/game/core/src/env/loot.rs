use super::Dice;
use crate::config::GameConfig;
use crate::state::{EnemyKind, Pickup};
use crate::weapon::{AmmoKind, ModKind, WeaponKind};

/// What produced a loot roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LootSource {
    Enemy(EnemyKind),
    /// A destroyed destructible tile.
    Crate,
}

/// Decides what, if anything, drops when an enemy dies or a crate breaks.
pub trait LootOracle: Send + Sync {
    fn roll(&self, source: LootSource, config: &GameConfig, dice: &mut Dice<'_>) -> Option<Pickup>;
}

/// Drop table used by default.
///
/// After the `loot_chance` gate: ammo 45%, health kit 25%, mod 18% and a
/// weapon 12% of the time. Crates never hold weapons; that share becomes ammo.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardLoot;

impl StandardLoot {
    pub const HEALTH_KIT: u32 = 25;

    const AMMO: [(AmmoKind, u32, u32); 5] = [
        (AmmoKind::NineMil, 3, 8),
        (AmmoKind::Shells, 2, 6),
        (AmmoKind::Rifle, 5, 15),
        (AmmoKind::Rocket, 1, 1),
        (AmmoKind::Grenade, 1, 2),
    ];

    fn ammo(dice: &mut Dice<'_>) -> Pickup {
        let (kind, min, max) = Self::AMMO[dice.below(Self::AMMO.len() as u32) as usize];
        Pickup::Ammo {
            kind,
            amount: dice.range(min, max),
        }
    }
}

impl LootOracle for StandardLoot {
    fn roll(&self, source: LootSource, config: &GameConfig, dice: &mut Dice<'_>) -> Option<Pickup> {
        if !dice.chance(config.loot_chance) {
            return None;
        }
        let pickup = match dice.below(100) {
            0..45 => Self::ammo(dice),
            45..70 => Pickup::HealthKit {
                amount: Self::HEALTH_KIT,
            },
            70..88 => Pickup::Mod(ModKind::ALL[dice.below(ModKind::ALL.len() as u32) as usize]),
            _ if source == LootSource::Crate => Self::ammo(dice),
            _ => Pickup::Weapon(
                WeaponKind::DROPPABLE[dice.below(WeaponKind::DROPPABLE.len() as u32) as usize],
            ),
        };
        Some(pickup)
    }
}

/// Oracle that never drops anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLoot;

impl LootOracle for NoLoot {
    fn roll(&self, _: LootSource, _: &GameConfig, _: &mut Dice<'_>) -> Option<Pickup> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{FixedRng, PcgRng};
    use crate::state::EntityId;

    #[test]
    fn failed_gate_drops_nothing() {
        let rng = FixedRng::NEVER;
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));
        let config = GameConfig::default();
        assert_eq!(StandardLoot.roll(LootSource::Crate, &config, &mut dice), None);
    }

    #[test]
    fn lowest_draws_drop_small_pistol_ammo() {
        let rng = FixedRng::ALWAYS;
        let mut dice = Dice::new(&rng, 0, 0, EntityId(1));
        let config = GameConfig::default();
        assert_eq!(
            StandardLoot.roll(LootSource::Enemy(EnemyKind::Melee), &config, &mut dice),
            Some(Pickup::Ammo {
                kind: AmmoKind::NineMil,
                amount: 3
            })
        );
    }

    #[test]
    fn crates_never_drop_weapons() {
        let rng = PcgRng;
        let config = GameConfig {
            loot_chance: 1.0,
            ..GameConfig::default()
        };
        for nonce in 0..200 {
            let mut dice = Dice::new(&rng, 99, nonce, EntityId(4));
            let drop = StandardLoot.roll(LootSource::Crate, &config, &mut dice);
            assert!(!matches!(drop, Some(Pickup::Weapon(_))));
            assert!(drop.is_some());
        }
    }
}
