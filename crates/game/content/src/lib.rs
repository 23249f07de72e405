//! Data-driven content for the tactics simulation.
//!
//! Loaders read RON/TOML data files into `tactics-core` types:
//! - Game configuration (TOML)
//! - Level layouts with enemy and item placements (RON)
//! - Weapon and mod catalogs (RON)
//!
//! Content is handed to the engine once; none of it is read again mid-turn.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LevelLoader, LoadResult, WeaponCatalog, WeaponCatalogLoader,
};
