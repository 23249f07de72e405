//! Per-kind decision trees.
//!
//! Trees are rebuilt for each decision because chance thresholds come from
//! the runtime [`GameConfig`].

use behavior_tree::Node;
use behavior_tree::builder::{chance, condition, selector, sequence, unless};

use super::AiContext;
use super::nodes::{
    Advance, FireAtPlayer, Hold, MeleeAttack, SeekCover, StepOut, Wander, adjacent_to_player,
    has_shot, in_cover_now, sees_player,
};
use crate::config::GameConfig;
use crate::state::EnemyKind;

/// How one kind of enemy behaves once it has noticed the player.
pub trait Strategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn tree<'a>(&self, config: &GameConfig) -> Node<'a, AiContext<'a>>;
}

/// Closes in and strikes when adjacent.
pub struct MeleeStrategy;

impl Strategy for MeleeStrategy {
    fn name(&self) -> &'static str {
        "melee"
    }

    fn tree<'a>(&self, _config: &GameConfig) -> Node<'a, AiContext<'a>> {
        selector(vec![
            sequence(vec![condition(adjacent_to_player), Box::new(MeleeAttack)]),
            Box::new(Advance),
        ])
    }
}

/// Cover-seeking shooter.
///
/// Priority list, first success wins:
/// 1. in cover with a shot: fire, else maybe step out, else hold
/// 2. exposed with a shot: maybe fire
/// 3. exposed: move toward the nearest cover that still sees the player
/// 4. in cover but blind: maybe wait in ambush, else advance
pub struct RangedStrategy;

impl Strategy for RangedStrategy {
    fn name(&self) -> &'static str {
        "ranged"
    }

    fn tree<'a>(&self, config: &GameConfig) -> Node<'a, AiContext<'a>> {
        selector(vec![
            sequence(vec![
                condition(in_cover_now),
                condition(has_shot),
                selector(vec![
                    chance(config.cover_fire_chance, Box::new(FireAtPlayer)),
                    chance(config.step_out_chance, Box::new(StepOut)),
                    Box::new(Hold),
                ]),
            ]),
            sequence(vec![
                unless(in_cover_now),
                condition(has_shot),
                chance(config.exposed_fire_chance, Box::new(FireAtPlayer)),
            ]),
            sequence(vec![unless(in_cover_now), Box::new(SeekCover)]),
            selector(vec![
                sequence(vec![
                    condition(in_cover_now),
                    unless(sees_player),
                    chance(config.ambush_chance, Box::new(Hold)),
                ]),
                Box::new(Advance),
            ]),
        ])
    }
}

/// Behavior before the enemy is alerted: idle or wander one cell.
pub fn dormant<'a>(config: &GameConfig) -> Node<'a, AiContext<'a>> {
    selector(vec![
        chance(config.dormant_idle_chance, Box::new(Hold)),
        Box::new(Wander),
    ])
}

impl EnemyKind {
    pub fn strategy(self) -> &'static dyn Strategy {
        match self {
            EnemyKind::Melee => &MeleeStrategy,
            EnemyKind::Ranged => &RangedStrategy,
        }
    }
}
