//! Enemy phase.

use super::GameEngine;
use crate::ai::{AiContext, EnemyIntent, decide};
use crate::combat::Combat;
use crate::events::{GameEvent, TurnReport};
use crate::state::{Enemy, EntityId};

impl GameEngine<'_> {
    /// Lets every living enemy act once, in roster order.
    ///
    /// Enemies killed earlier in the phase are gone from the roster; the phase
    /// stops as soon as the player dies.
    pub(super) fn run_enemy_phase(&mut self, report: &mut TurnReport) {
        let roster: Vec<EntityId> = self.state.enemies.iter().map(|enemy| enemy.id).collect();
        for id in roster {
            if self.state.is_game_over() {
                break;
            }
            let Some(enemy) = self.state.enemy(id).filter(|enemy| enemy.is_alive()).cloned() else {
                continue;
            };
            let enemy = self.alert_if_near(enemy, report);
            if let Some(intent) = self.plan(&enemy) {
                self.apply_intent(&enemy, intent, report);
            }
        }
    }

    /// Dormant enemies wake when the player comes strictly inside the alert
    /// radius, and act on it the same turn.
    fn alert_if_near(&mut self, mut enemy: Enemy, report: &mut TurnReport) -> Enemy {
        let radius = self.env.config().alert_radius;
        if enemy.alerted || enemy.position.manhattan(self.state.player.position) >= radius {
            return enemy;
        }
        if let Some(stored) = self.state.enemy_mut(enemy.id) {
            stored.alerted = true;
        }
        enemy.alerted = true;
        tracing::debug!(id = %enemy.id, position = %enemy.position, "enemy alerted");
        report.push(GameEvent::EnemyAlerted {
            id: enemy.id,
            position: enemy.position,
        });
        enemy
    }

    fn plan(&self, enemy: &Enemy) -> Option<EnemyIntent> {
        let dice = self
            .env
            .dice(self.state.game_seed, self.state.turn, enemy.id);
        let mut ctx = AiContext::new(self.state, enemy, self.env.config(), dice);
        decide(&mut ctx)
    }

    fn apply_intent(&mut self, enemy: &Enemy, intent: EnemyIntent, report: &mut TurnReport) {
        match intent {
            EnemyIntent::Hold => {}
            EnemyIntent::Step(to) if to == self.state.player.position => {
                self.strike_player(enemy, report);
            }
            EnemyIntent::Step(to) => {
                if self.state.is_enemy_at(to) {
                    tracing::warn!(id = %enemy.id, %to, "enemy move discarded, cell taken");
                    return;
                }
                if !self.state.grid.is_walkable(to) {
                    tracing::warn!(id = %enemy.id, %to, "enemy move discarded, cell blocked");
                    return;
                }
                if let Some(stored) = self.state.enemy_mut(enemy.id) {
                    stored.position = to;
                }
                report.push(GameEvent::EnemyMoved {
                    id: enemy.id,
                    from: enemy.position,
                    to,
                });
            }
            EnemyIntent::Melee => self.strike_player(enemy, report),
            EnemyIntent::Fire => {
                let config = self.env.config();
                let damage = enemy.kind.attack_damage(config);
                let range = config.ranged_attack_range.max(0) as u32;
                let mut dice = self
                    .env
                    .dice(self.state.game_seed, self.state.turn, enemy.id);
                Combat::new(self.state, self.env, &mut dice, report).enemy_shot(
                    enemy.id,
                    enemy.position,
                    damage,
                    range,
                );
            }
        }
    }

    fn strike_player(&mut self, enemy: &Enemy, report: &mut TurnReport) {
        let damage = enemy.kind.attack_damage(self.env.config());
        let mut dice = self
            .env
            .dice(self.state.game_seed, self.state.turn, enemy.id);
        Combat::new(self.state, self.env, &mut dice, report).enemy_strike(
            enemy.id,
            enemy.position,
            damage,
        );
    }
}
