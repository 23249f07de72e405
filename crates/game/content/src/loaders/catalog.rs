//! Weapon and mod catalog loader.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tactics_core::weapon::{ModKind, WeaponKind};
use tactics_core::{WeaponDefinition, WeaponMod};

use crate::loaders::{LoadResult, read_file};

/// Weapon and mod templates available to a run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeaponCatalog {
    #[serde(default)]
    pub weapons: Vec<WeaponDefinition>,
    #[serde(default)]
    pub mods: Vec<WeaponMod>,
}

impl WeaponCatalog {
    /// The compiled-in tables.
    pub fn builtin() -> Self {
        Self {
            weapons: WeaponKind::DROPPABLE
                .into_iter()
                .chain([WeaponKind::CombatKnife])
                .map(WeaponKind::definition)
                .collect(),
            mods: ModKind::ALL.into_iter().map(ModKind::definition).collect(),
        }
    }

    pub fn weapon(&self, name: &str) -> Option<&WeaponDefinition> {
        self.weapons.iter().find(|weapon| weapon.name == name)
    }

    pub fn weapon_mod(&self, name: &str) -> Option<&WeaponMod> {
        self.mods.iter().find(|weapon_mod| weapon_mod.name == name)
    }
}

/// Loader for weapon catalogs from RON files.
pub struct WeaponCatalogLoader;

impl WeaponCatalogLoader {
    pub fn load(path: &Path) -> LoadResult<WeaponCatalog> {
        let content = read_file(path)?;
        let catalog: WeaponCatalog = ron::from_str(&content)
            .with_context(|| format!("Failed to parse weapon catalog RON at {}", path.display()))?;

        for weapon in &catalog.weapons {
            anyhow::ensure!(
                weapon.ammo.is_none() || weapon.magazine_size > 0,
                "weapon {} uses ammunition but has no magazine",
                weapon.name
            );
        }
        tracing::debug!(
            weapons = catalog.weapons.len(),
            mods = catalog.mods.len(),
            "loaded weapon catalog"
        );
        Ok(catalog)
    }
}
