//! Blackboard shared by every node of one enemy's decision.

use behavior_tree::Roll;

use super::EnemyIntent;
use crate::config::GameConfig;
use crate::env::Dice;
use crate::los::{has_line_of_sight, in_cover};
use crate::state::{Enemy, GameState, Position};

/// Read-only view of the world for one enemy, plus the chosen intent.
///
/// Cover and line-of-sight against the player are computed once up front
/// since several branches of the tree test them.
pub struct AiContext<'a> {
    pub state: &'a GameState,
    pub enemy: &'a Enemy,
    pub config: &'a GameConfig,
    pub dice: Dice<'a>,
    pub in_cover: bool,
    /// Line of sight to the player, peeking allowed.
    pub line_of_sight: bool,
    /// Player within ranged attack range (Euclidean).
    pub in_range: bool,
    intent: Option<EnemyIntent>,
}

impl<'a> AiContext<'a> {
    pub fn new(state: &'a GameState, enemy: &'a Enemy, config: &'a GameConfig, dice: Dice<'a>) -> Self {
        let player = state.player.position;
        let range = config.ranged_attack_range;
        Self {
            state,
            enemy,
            config,
            dice,
            in_cover: in_cover(&state.grid, enemy.position, player),
            line_of_sight: has_line_of_sight(&state.grid, enemy.position, player, true),
            in_range: enemy.position.distance_sq(player) <= range * range,
            intent: None,
        }
    }

    pub fn player_position(&self) -> Position {
        self.state.player.position
    }

    pub fn is_adjacent_to_player(&self) -> bool {
        self.enemy.position.is_adjacent(self.player_position())
    }

    pub fn has_shot(&self) -> bool {
        self.line_of_sight && self.in_range
    }

    /// Cells this enemy may not path through: the player and other enemies.
    pub fn is_blocked(&self, cell: Position) -> bool {
        cell != self.enemy.position && self.state.is_occupied(cell)
    }

    /// Walkable and free of every actor.
    pub fn is_free(&self, cell: Position) -> bool {
        self.state.grid.is_walkable(cell) && !self.is_blocked(cell)
    }

    pub fn set_intent(&mut self, intent: EnemyIntent) {
        self.intent = Some(intent);
    }

    pub fn intent(&self) -> Option<EnemyIntent> {
        self.intent
    }

    pub fn take_intent(&mut self) -> Option<EnemyIntent> {
        self.intent.take()
    }
}

impl Roll for AiContext<'_> {
    fn roll(&mut self, probability: f32) -> bool {
        self.dice.chance(probability)
    }
}
