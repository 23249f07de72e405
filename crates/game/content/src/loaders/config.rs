//! Game configuration loader.

use std::path::Path;

use anyhow::Context;
use tactics_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
///
/// Keys missing from the file keep their [`GameConfig::default`] values.
pub struct ConfigLoader;

impl ConfigLoader {
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config TOML at {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)?;
        anyhow::ensure!(config.fov_radius > 0, "fov_radius must be positive");
        anyhow::ensure!(
            (0.0..=1.0).contains(&config.cover_damage_factor),
            "cover_damage_factor must lie in [0, 1]"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "fov_radius = 9\nloot_chance = 0.0").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.fov_radius, 9);
        assert_eq!(config.loot_chance, 0.0);
        assert_eq!(config.player_max_hp, GameConfig::default().player_max_hp);
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(ConfigLoader::parse("cover_damage_factor = 2.5").is_err());
        assert!(ConfigLoader::parse("fov_radius = 0").is_err());
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = ConfigLoader::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
