//! Injectable collaborators: configuration, randomness and loot.
//!
//! The [`Env`] aggregate bundles them so the engine reaches every outside
//! decision through one handle, and tests can swap any of them.
mod loot;
mod rng;

pub use loot::{LootOracle, LootSource, NoLoot, StandardLoot};
pub use rng::{Dice, FixedRng, PcgRng, RngOracle, ScriptedRng, compute_seed};

use crate::config::GameConfig;
use crate::state::EntityId;

#[derive(Clone, Copy)]
pub struct Env<'a> {
    config: &'a GameConfig,
    rng: &'a dyn RngOracle,
    loot: &'a dyn LootOracle,
}

impl<'a> Env<'a> {
    pub fn new(config: &'a GameConfig, rng: &'a dyn RngOracle, loot: &'a dyn LootOracle) -> Self {
        Self { config, rng, loot }
    }

    /// Default collaborators: [`PcgRng`] and [`StandardLoot`].
    pub fn standard(config: &'a GameConfig) -> Self {
        Self::new(config, &PcgRng, &StandardLoot)
    }

    pub fn config(&self) -> &'a GameConfig {
        self.config
    }

    pub fn rng(&self) -> &'a dyn RngOracle {
        self.rng
    }

    pub fn loot(&self) -> &'a dyn LootOracle {
        self.loot
    }

    /// Fresh draw sequence for `actor` in the given turn.
    pub fn dice(&self, game_seed: u64, nonce: u64, actor: EntityId) -> Dice<'a> {
        Dice::new(self.rng, game_seed, nonce, actor)
    }
}

impl core::fmt::Debug for Env<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Env").field("config", self.config).finish_non_exhaustive()
    }
}
