//! Deterministic tactical simulation for a turn-based grid shooter.
//!
//! `tactics-core` owns the rules: what the player can see, how enemies pick
//! their moves, and how every weapon resolves into damage, kills and loot.
//! Level generation, rendering and input live elsewhere; they hand over a
//! [`state::LevelSpec`] and read back [`GameState`] plus the per-turn
//! [`events::TurnReport`]. All state mutation flows through
//! [`engine::GameEngine`].
pub mod action;
pub mod ai;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod events;
pub mod fov;
pub mod grid;
pub mod los;
pub mod path;
pub mod progression;
pub mod state;
pub mod weapon;

pub use action::{ActionError, ActionTransition, PlayerAction};
pub use ai::{EnemyIntent, Strategy};
pub use config::GameConfig;
pub use engine::GameEngine;
pub use env::{
    Dice, Env, FixedRng, LootOracle, LootSource, NoLoot, PcgRng, RngOracle, ScriptedRng,
    StandardLoot,
};
pub use error::{ErrorSeverity, GameError};
pub use events::{GameEvent, TurnReport};
pub use fov::field_of_view;
pub use grid::{Grid, GridError, MapDimensions, TileKind};
pub use los::{firing_origin, has_line_of_sight, in_cover, peek_spots};
pub use path::{find_path, next_step};
pub use progression::Experience;
pub use state::{
    CardinalDirection, Enemy, EnemyKind, EnemySpawn, EntityId, GameState, GameStatus, ItemSpawn,
    LevelError, LevelSpec, Pickup, PlayerState, Position, ResourceMeter, VisibilityState,
};
pub use weapon::{
    AmmoKind, EffectiveStats, EquippedWeapon, FireMode, ModEffect, ModKind, WeaponDefinition,
    WeaponError, WeaponKind, WeaponMod,
};
