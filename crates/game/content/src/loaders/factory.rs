//! Content factory for loading everything a run needs from one directory.

use std::path::{Path, PathBuf};

use tactics_core::{GameConfig, LevelSpec};

use crate::loaders::{ConfigLoader, LevelLoader, LoadResult, WeaponCatalog, WeaponCatalogLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── weapons.ron
/// └── levels/
///     ├── depth_0.ron
///     └── depth_1.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the weapon catalog from `weapons.ron`, falling back to the
    /// built-in tables when the file is absent.
    pub fn load_catalog(&self) -> LoadResult<WeaponCatalog> {
        let path = self.data_dir.join("weapons.ron");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no weapon catalog, using built-in tables");
            return Ok(WeaponCatalog::builtin());
        }
        WeaponCatalogLoader::load(&path)
    }

    /// Load a level from `levels/{level_name}.ron`.
    pub fn load_level(&self, level_name: &str) -> LoadResult<LevelSpec> {
        let path = self
            .data_dir
            .join("levels")
            .join(format!("{level_name}.ron"));
        LevelLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
