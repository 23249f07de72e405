use super::Combat;
use crate::env::LootSource;
use crate::events::GameEvent;
use crate::los::in_cover;
use crate::state::{EntityId, GameStatus, Position};

/// `floor(base * factor)` when in cover, else `base`.
pub fn mitigated_damage(base: u32, in_cover: bool, factor: f32) -> u32 {
    if in_cover {
        (base as f64 * factor as f64).floor() as u32
    } else {
        base
    }
}

impl Combat<'_, '_> {
    /// Applies `base` damage from `source` to an enemy, honouring cover.
    ///
    /// Any hit alerts the enemy. Returns the damage actually dealt, or `None`
    /// when no such enemy is alive.
    pub fn damage_enemy(&mut self, id: EntityId, base: u32, source: Position) -> Option<u32> {
        let factor = self.env.config().cover_damage_factor;
        let index = self.state.enemies.iter().position(|enemy| enemy.id == id)?;
        let position = self.state.enemies[index].position;
        let covered = in_cover(&self.state.grid, position, source);
        let amount = mitigated_damage(base, covered, factor);

        let enemy = &mut self.state.enemies[index];
        enemy.health.drain(amount);
        let remaining = enemy.health.current;
        let newly_alerted = !enemy.alerted;
        enemy.alerted = true;

        self.emit(GameEvent::EnemyDamaged {
            id,
            position,
            amount,
            remaining,
            in_cover: covered,
        });
        if newly_alerted {
            self.emit(GameEvent::EnemyAlerted { id, position });
        }
        if remaining == 0 {
            self.kill_enemy(index);
        }
        Some(amount)
    }

    fn kill_enemy(&mut self, index: usize) {
        let enemy = self.state.enemies.remove(index);
        let config = self.env.config();
        tracing::info!(id = %enemy.id, kind = %enemy.kind, position = %enemy.position, "enemy killed");
        self.emit(GameEvent::EnemyKilled {
            id: enemy.id,
            kind: enemy.kind,
            position: enemy.position,
        });

        let experience = enemy.kind.kill_experience(config);
        let levels = self
            .state
            .player
            .experience
            .gain(experience, config.xp_growth);
        self.emit(GameEvent::ExperienceGained { amount: experience });
        let level = self.state.player.experience.level;
        for reached in (level + 1 - levels)..=level {
            self.emit(GameEvent::LevelUp { level: reached });
        }

        self.drop_loot(LootSource::Enemy(enemy.kind), enemy.position);
    }

    /// Applies `base` damage from `source` to the player, honouring cover.
    /// Returns the damage actually dealt.
    pub fn damage_player(&mut self, attacker: EntityId, base: u32, source: Position) -> u32 {
        if self.state.status == GameStatus::GameOver {
            return 0;
        }
        let factor = self.env.config().cover_damage_factor;
        let covered = in_cover(&self.state.grid, self.state.player.position, source);
        let amount = mitigated_damage(base, covered, factor);
        self.state.player.health.drain(amount);
        let remaining = self.state.player.health.current;

        self.emit(GameEvent::PlayerDamaged {
            source: attacker,
            amount,
            remaining,
            in_cover: covered,
        });
        if remaining == 0 {
            tracing::info!(by = %attacker, turn = self.state.turn, "player killed");
            self.state.status = GameStatus::GameOver;
            self.emit(GameEvent::PlayerKilled { by: attacker });
        }
        amount
    }

    /// Destroys a destructible tile and rolls crate loot. Returns false for
    /// anything indestructible.
    pub fn destroy_tile(&mut self, position: Position) -> bool {
        let Some(tile) = self.state.grid.destroy(position) else {
            return false;
        };
        self.emit(GameEvent::TileDestroyed { position, tile });
        self.drop_loot(LootSource::Crate, position);
        true
    }

    fn drop_loot(&mut self, source: LootSource, position: Position) {
        let config = self.env.config();
        let Some(pickup) = self.env.loot().roll(source, config, self.dice) else {
            return;
        };
        if self.state.place_pickup(position, pickup) {
            self.emit(GameEvent::ItemDropped { position, pickup });
        } else {
            tracing::debug!(%position, %pickup, "loot lost, cell already holds an item");
        }
    }
}
