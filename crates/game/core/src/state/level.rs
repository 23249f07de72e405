//! Level-generator output contract.

use std::collections::BTreeSet;

use crate::error::{ErrorSeverity, GameError};
use crate::grid::Grid;
use crate::state::{EnemyKind, Pickup, Position};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpawn {
    pub position: Position,
    pub kind: EnemyKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSpawn {
    pub position: Position,
    pub pickup: Pickup,
}

/// Finished level handed over by the generator: grid, player start and the
/// initial enemy and item placements.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelSpec {
    pub grid: Grid,
    pub player_start: Position,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemies: Vec<EnemySpawn>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemSpawn>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LevelError {
    #[error("player start {position} is not walkable")]
    PlayerStartBlocked { position: Position },

    #[error("enemy spawn {position} is not walkable")]
    SpawnBlocked { position: Position },

    #[error("two actors spawn on {position}")]
    SpawnOverlap { position: Position },

    #[error("item at {position} lies outside the grid")]
    ItemOutOfBounds { position: Position },
}

impl GameError for LevelError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            LevelError::PlayerStartBlocked { .. } => "LEVEL_PLAYER_START_BLOCKED",
            LevelError::SpawnBlocked { .. } => "LEVEL_SPAWN_BLOCKED",
            LevelError::SpawnOverlap { .. } => "LEVEL_SPAWN_OVERLAP",
            LevelError::ItemOutOfBounds { .. } => "LEVEL_ITEM_OUT_OF_BOUNDS",
        }
    }
}

impl LevelSpec {
    pub fn new(grid: Grid, player_start: Position) -> Self {
        Self {
            grid,
            player_start,
            enemies: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn with_enemy(mut self, position: Position, kind: EnemyKind) -> Self {
        self.enemies.push(EnemySpawn { position, kind });
        self
    }

    pub fn with_item(mut self, position: Position, pickup: Pickup) -> Self {
        self.items.push(ItemSpawn { position, pickup });
        self
    }

    /// Checks that every actor stands on its own walkable cell and every
    /// item lies on the grid.
    pub fn validate(&self) -> Result<(), LevelError> {
        if !self.grid.is_walkable(self.player_start) {
            return Err(LevelError::PlayerStartBlocked {
                position: self.player_start,
            });
        }

        let mut occupied = BTreeSet::from([self.player_start]);
        for spawn in &self.enemies {
            if !self.grid.is_walkable(spawn.position) {
                return Err(LevelError::SpawnBlocked {
                    position: spawn.position,
                });
            }
            if !occupied.insert(spawn.position) {
                return Err(LevelError::SpawnOverlap {
                    position: spawn.position,
                });
            }
        }

        if let Some(item) = self
            .items
            .iter()
            .find(|item| !self.grid.contains(item.position))
        {
            return Err(LevelError::ItemOutOfBounds {
                position: item.position,
            });
        }
        Ok(())
    }
}
