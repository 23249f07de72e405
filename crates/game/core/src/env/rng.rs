//! RNG oracle for deterministic random draws.
//!
//! Every random decision in the simulation (dormant wander, AI shot
//! probabilities, pellet spread, loot) goes through one injectable
//! [`RngOracle`]. Draws are keyed by `(game_seed, turn nonce, actor, draw
//! index)` so a replayed turn reproduces the same outcomes, and tests can
//! pin outcomes by injecting a fixed oracle.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::state::EntityId;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG is a family of simple, fast, space-efficient RNGs with excellent
/// statistical quality. This implementation uses PCG-XSH-RR, which produces
/// 32-bit output from 64-bit state.
///
/// # Properties
///
/// - **Deterministic**: Same seed always produces same output
/// - **Fast**: Single multiply + xorshift + rotate
/// - **Small state**: Only 64 bits
/// - **Good quality**: Passes statistical tests (PractRand, TestU01)
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
/// - Implementation based on PCG-XSH-RR variant
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    ///
    /// Uses LCG (Linear Congruential Generator) formula:
    /// `state' = (state * multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    ///
    /// This is where the "permutation" happens - transforms the LCG state
    /// into high-quality random output.
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        // XOR upper bits with lower bits, shift right
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;

        // Use upper bits to determine rotation amount
        let rot = (state >> 59) as u32;

        // Random rotation provides the final permutation
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed for one draw.
///
/// * `game_seed` - base seed fixed when the run starts
/// * `nonce` - turn counter
/// * `actor_id` - entity the draw is made for
/// * `context` - draw index within the actor's turn
pub fn compute_seed(game_seed: u64, nonce: u64, actor_id: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style combiners
    let mut hash = game_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (actor_id as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}

/// Sequential draws for one actor within one turn.
///
/// Each call advances a draw counter that feeds [`compute_seed`], so two
/// draws in the same turn are independent while the whole sequence stays
/// reproducible.
#[derive(Clone, Copy)]
pub struct Dice<'a> {
    rng: &'a dyn RngOracle,
    game_seed: u64,
    nonce: u64,
    actor: u32,
    draws: u32,
}

impl<'a> Dice<'a> {
    pub fn new(rng: &'a dyn RngOracle, game_seed: u64, nonce: u64, actor: EntityId) -> Self {
        Self {
            rng,
            game_seed,
            nonce,
            actor: actor.0,
            draws: 0,
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        let seed = compute_seed(self.game_seed, self.nonce, self.actor, self.draws);
        self.draws = self.draws.wrapping_add(1);
        self.rng.next_u32(seed)
    }

    /// Uniform value in `[0, 1)`.
    pub fn unit(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform value in `[-0.5, 0.5)`.
    pub fn signed_unit(&mut self) -> f32 {
        self.unit() - 0.5
    }

    /// `true` with the given probability. Always consumes one draw.
    pub fn chance(&mut self, probability: f32) -> bool {
        self.unit() < probability.clamp(0.0, 1.0)
    }

    /// Uniform integer in `[0, bound)`; zero when `bound` is zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        let value = self.next_u32();
        if bound == 0 { 0 } else { value % bound }
    }

    /// Uniform integer in `[min, max]`.
    pub fn range(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        min + self.below(max - min + 1)
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }
}

impl core::fmt::Debug for Dice<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dice")
            .field("game_seed", &self.game_seed)
            .field("nonce", &self.nonce)
            .field("actor", &self.actor)
            .field("draws", &self.draws)
            .finish()
    }
}

/// Oracle that returns the same value for every seed.
///
/// `FixedRng(0)` makes every [`Dice::chance`] succeed, `FixedRng(u32::MAX)`
/// makes every chance below 1.0 fail and `FixedRng::CENTERED` yields zero
/// from [`Dice::signed_unit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedRng(pub u32);

impl FixedRng {
    pub const ALWAYS: Self = Self(0);
    pub const NEVER: Self = Self(u32::MAX);
    pub const CENTERED: Self = Self(1 << 31);
}

impl RngOracle for FixedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        self.0
    }
}

/// Oracle that replays `values` in order, one per draw, ignoring the seed.
///
/// Wraps around once the script is exhausted; an empty script yields zero.
/// Lets a test steer consecutive draws of one decision independently.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    values: Vec<u32>,
    cursor: AtomicUsize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            cursor: AtomicUsize::new(0),
        }
    }

    /// Number of draws served so far.
    pub fn consumed(&self) -> usize {
        self.cursor.load(Ordering::Relaxed)
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&self, _seed: u64) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.values[index % self.values.len()]
    }
}
