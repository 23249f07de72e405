//! Authoritative simulation state.
//!
//! The engine owns one [`GameState`] and is the only code that mutates it
//! during a turn. Presentation layers read it between turns: visibility
//! sets, the live enemy roster, the player's kit and the pickup table.
mod level;
pub mod types;
mod visibility;

use std::collections::BTreeMap;

pub use level::{EnemySpawn, ItemSpawn, LevelError, LevelSpec};
pub use types::{
    CardinalDirection, Enemy, EnemyKind, EntityId, Pickup, PlayerState, Position, ResourceMeter,
};
pub use visibility::VisibilityState;

use crate::config::GameConfig;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    #[default]
    Playing,
    /// Player died; every action is rejected until restart.
    GameOver,
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Fixed for the whole run; combined with `turn` for every random draw.
    pub game_seed: u64,
    /// Never reused. 0 is reserved for the player.
    next_entity_id: u32,
    /// Completed turns, also the RNG nonce.
    pub turn: u64,
    /// Zero-based index of the current level.
    pub depth: u32,
    pub status: GameStatus,
    pub grid: Grid,
    pub player: PlayerState,
    pub enemies: Vec<Enemy>,
    /// Items on the floor, keyed by grid cell index.
    pub pickups: BTreeMap<usize, Pickup>,
    pub visibility: VisibilityState,
}

impl GameState {
    /// Builds the state for the first level of a run.
    pub fn new(level: LevelSpec, config: &GameConfig, game_seed: u64) -> Result<Self, LevelError> {
        level.validate()?;
        let mut state = Self {
            game_seed,
            next_entity_id: 1,
            turn: 0,
            depth: 0,
            status: GameStatus::Playing,
            grid: level.grid.clone(),
            player: PlayerState::new(level.player_start, config),
            enemies: Vec::new(),
            pickups: BTreeMap::new(),
            visibility: VisibilityState::new(),
        };
        state.populate(level, config);
        Ok(state)
    }

    /// Replaces the map and rosters with `level`, keeping the player's kit.
    pub fn enter_level(&mut self, level: LevelSpec, config: &GameConfig) -> Result<(), LevelError> {
        level.validate()?;
        self.player.position = level.player_start;
        self.visibility = VisibilityState::new();
        self.populate(level, config);
        Ok(())
    }

    fn populate(&mut self, level: LevelSpec, config: &GameConfig) {
        let LevelSpec {
            grid,
            enemies,
            items,
            ..
        } = level;
        self.grid = grid;
        self.enemies.clear();
        for spawn in enemies {
            let id = self.allocate_entity_id();
            self.enemies
                .push(Enemy::new(id, spawn.kind, spawn.position, config));
        }
        self.pickups.clear();
        for item in items {
            if let Some(index) = self.grid.index(item.position) {
                self.pickups.insert(index, item.pickup);
            }
        }
        self.refresh_visibility(config.fov_radius);
    }

    pub fn allocate_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id = self.next_entity_id.wrapping_add(1).max(1);
        id
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn refresh_visibility(&mut self, radius: i32) {
        self.visibility =
            std::mem::take(&mut self.visibility).recompute(&self.grid, self.player.position, radius);
    }

    pub fn enemy(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.id == id)
    }

    pub fn enemy_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|enemy| enemy.id == id)
    }

    pub fn enemy_at(&self, position: Position) -> Option<&Enemy> {
        self.enemies.iter().find(|enemy| enemy.position == position)
    }

    pub fn is_enemy_at(&self, position: Position) -> bool {
        self.enemy_at(position).is_some()
    }

    /// True when the player or any enemy stands on `position`.
    pub fn is_occupied(&self, position: Position) -> bool {
        self.player.position == position || self.is_enemy_at(position)
    }

    pub fn pickup_at(&self, position: Position) -> Option<&Pickup> {
        self.grid
            .index(position)
            .and_then(|index| self.pickups.get(&index))
    }

    /// Drops `pickup` on an empty, in-bounds cell. Returns false otherwise.
    pub fn place_pickup(&mut self, position: Position, pickup: Pickup) -> bool {
        let Some(index) = self.grid.index(position) else {
            return false;
        };
        if self.pickups.contains_key(&index) {
            return false;
        }
        self.pickups.insert(index, pickup);
        true
    }

    pub fn take_pickup(&mut self, position: Position) -> Option<Pickup> {
        let index = self.grid.index(position)?;
        self.pickups.remove(&index)
    }
}
