//! Items lying on the map.

use std::fmt;

use crate::weapon::{AmmoKind, ModKind, WeaponKind};

/// Something the player can pick up from a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pickup {
    Ammo { kind: AmmoKind, amount: u32 },
    HealthKit { amount: u32 },
    Weapon(WeaponKind),
    Mod(ModKind),
}

impl fmt::Display for Pickup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pickup::Ammo { kind, amount } => write!(f, "{amount} x {kind}"),
            Pickup::HealthKit { amount } => write!(f, "health kit (+{amount})"),
            Pickup::Weapon(kind) => write!(f, "{kind}"),
            Pickup::Mod(kind) => write!(f, "{kind} mod"),
        }
    }
}
