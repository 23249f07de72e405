//! Level layout loader.
//!
//! A level file carries the generator's output: glyph rows plus enemy and
//! item placements.
//!
//! ```ron
//! (
//!     rows: [
//!         "#######",
//!         "#..X.E#",
//!         "#######",
//!     ],
//!     player_start: (1, 1),
//!     enemies: [(at: (3, 1), kind: Ranged)],
//!     items: [(at: (2, 1), pickup: HealthKit(amount: 25))],
//! )
//! ```

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tactics_core::{EnemyKind, Grid, LevelSpec, Pickup, Position};

use crate::loaders::{LoadResult, read_file};

#[derive(Debug, Deserialize)]
struct LevelRon {
    rows: Vec<String>,
    player_start: (i32, i32),
    #[serde(default)]
    enemies: Vec<EnemyRon>,
    #[serde(default)]
    items: Vec<ItemRon>,
}

#[derive(Debug, Deserialize)]
struct EnemyRon {
    at: (i32, i32),
    kind: EnemyKind,
}

#[derive(Debug, Deserialize)]
struct ItemRon {
    at: (i32, i32),
    pickup: Pickup,
}

fn position((x, y): (i32, i32)) -> Position {
    Position::new(x, y)
}

/// Loader for level layouts from RON files.
pub struct LevelLoader;

impl LevelLoader {
    pub fn load(path: &Path) -> LoadResult<LevelSpec> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("Failed to load level {}", path.display()))
    }

    /// Parses and validates a level description.
    pub fn parse(content: &str) -> LoadResult<LevelSpec> {
        let data: LevelRon = ron::from_str(content).context("Failed to parse level RON")?;
        let grid = Grid::from_rows(&data.rows)?;

        let mut level = LevelSpec::new(grid, position(data.player_start));
        for enemy in data.enemies {
            level = level.with_enemy(position(enemy.at), enemy.kind);
        }
        for item in data.items {
            level = level.with_item(position(item.at), item.pickup);
        }
        level.validate()?;
        Ok(level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tactics_core::{AmmoKind, TileKind, WeaponKind};

    const LEVEL: &str = r########"(
        rows: [
            "#######",
            "#..X.E#",
            "#.....#",
            "#######",
        ],
        player_start: (1, 1),
        enemies: [
            (at: (4, 2), kind: Ranged),
            (at: (2, 2), kind: Melee),
        ],
        items: [
            (at: (2, 1), pickup: Ammo(kind: Shells, amount: 4)),
            (at: (4, 1), pickup: Weapon(Shotgun)),
        ],
    )"########;

    #[test]
    fn parses_grid_and_placements() {
        let level = LevelLoader::parse(LEVEL).unwrap();

        assert_eq!(level.grid.tile_at(Position::new(3, 1)), Some(TileKind::Box));
        assert_eq!(level.grid.tile_at(Position::new(5, 1)), Some(TileKind::Elevator));
        assert_eq!(level.player_start, Position::new(1, 1));
        assert_eq!(level.enemies.len(), 2);
        assert_eq!(level.enemies[0].kind, EnemyKind::Ranged);
        assert_eq!(
            level.items[0].pickup,
            Pickup::Ammo {
                kind: AmmoKind::Shells,
                amount: 4
            }
        );
        assert_eq!(level.items[1].pickup, Pickup::Weapon(WeaponKind::Shotgun));
    }

    #[test]
    fn rejects_enemy_inside_a_wall() {
        let content = r########"(
            rows: ["#####", "#...#", "#####"],
            player_start: (1, 1),
            enemies: [(at: (0, 0), kind: Melee)],
        )"########;
        assert!(LevelLoader::parse(content).is_err());
    }

    #[test]
    fn rejects_unknown_glyphs() {
        let content = r########"(rows: ["###", "#?#", "###"], player_start: (1, 1))"########;
        assert!(LevelLoader::parse(content).is_err());
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("level.ron");
        std::fs::write(&path, LEVEL).unwrap();

        let level = LevelLoader::load(&path).unwrap();
        assert_eq!(level.grid.width(), 7);
    }
}
