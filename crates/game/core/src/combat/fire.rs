use super::Combat;
use crate::events::GameEvent;
use crate::los::{bresenham, firing_origin};
use crate::state::{EntityId, Position};
use crate::weapon::{AreaEffect, EffectiveStats, FireMode};

/// Rotates the `origin -> target` vector by `angle` radians, keeping its
/// length, and rounds the end back onto the grid.
pub fn scatter(origin: Position, target: Position, angle: f32) -> Position {
    if angle == 0.0 {
        return target;
    }
    let (dx, dy) = ((target.x - origin.x) as f32, (target.y - origin.y) as f32);
    let (sin, cos) = angle.sin_cos();
    Position::new(
        origin.x + (dx * cos - dy * sin).round() as i32,
        origin.y + (dx * sin + dy * cos).round() as i32,
    )
}

impl Combat<'_, '_> {
    /// Fires `rounds` hitscan volleys from the player toward `target`.
    ///
    /// Each volley traces one line per pellet; pellets get an independent
    /// angular offset of up to `spread` radians either way.
    pub fn fire_hitscan(&mut self, origin: Position, target: Position, stats: &EffectiveStats, rounds: u32) {
        for _ in 0..rounds {
            for _ in 0..stats.pellets {
                let endpoint = if stats.spread > 0.0 {
                    let angle = self.dice.signed_unit() * 2.0 * stats.spread;
                    scatter(origin, target, angle)
                } else {
                    target
                };
                self.trace_player_shot(origin, endpoint, stats.range, stats.damage);
            }
        }
    }

    /// Player bullet: stops at the first enemy (damaging it) or the first
    /// opaque cell (destroying it when destructible).
    fn trace_player_shot(&mut self, origin: Position, endpoint: Position, range: u32, damage: u32) -> Position {
        let mut end = origin;
        for cell in bresenham(origin, endpoint).into_iter().skip(1).take(range as usize) {
            end = cell;
            if let Some(id) = self.state.enemy_at(cell).map(|enemy| enemy.id) {
                self.damage_enemy(id, damage, origin);
                break;
            }
            if self.state.grid.blocks_light(cell) {
                self.destroy_tile(cell);
                break;
            }
        }
        self.emit(GameEvent::ShotTraced { origin, end });
        end
    }

    /// Fires `rounds` projectiles toward `target`; each detonates at the
    /// first enemy or opaque cell on its line, else at the aimed cell (or
    /// where its range runs out).
    pub fn fire_projectile(&mut self, origin: Position, target: Position, stats: &EffectiveStats, rounds: u32) {
        for _ in 0..rounds {
            let mut impact = origin;
            for cell in bresenham(origin, target).into_iter().skip(1).take(stats.range as usize) {
                impact = cell;
                if self.state.is_enemy_at(cell) || self.state.grid.blocks_light(cell) {
                    break;
                }
            }
            self.emit(GameEvent::ShotTraced { origin, end: impact });

            match stats.area {
                Some(area) => self.explode(EntityId::PLAYER, impact, stats.damage, area),
                None => self.strike(impact, stats.damage, origin),
            }
        }
    }

    /// Area burst around `impact`: center damage to whatever occupies the
    /// impact cell, area damage to everything else within the Manhattan
    /// radius. Targets are gathered before any damage is applied, so kills
    /// during resolution do not shift who gets hit. Line of sight is ignored.
    pub fn explode(&mut self, attacker: EntityId, impact: Position, center_damage: u32, area: AreaEffect) {
        self.emit(GameEvent::Explosion {
            center: impact,
            radius: area.radius,
        });

        let radius = area.radius;
        let mut enemy_hits = Vec::new();
        let mut player_hit = None;
        let mut crates = Vec::new();
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx.abs() + dy.abs() > radius {
                    continue;
                }
                let cell = impact.offset(dx, dy);
                if !self.state.grid.contains(cell) {
                    continue;
                }
                let amount = if cell == impact { center_damage } else { area.damage };
                if let Some(enemy) = self.state.enemy_at(cell) {
                    enemy_hits.push((enemy.id, amount));
                }
                if self.state.player.position == cell {
                    player_hit = Some(amount);
                }
                if self.state.grid.is_destructible(cell) {
                    crates.push(cell);
                }
            }
        }

        for (id, amount) in enemy_hits {
            self.damage_enemy(id, amount, impact);
        }
        if let Some(amount) = player_hit {
            self.damage_player(attacker, amount, impact);
        }
        for cell in crates {
            self.destroy_tile(cell);
        }
    }

    /// Single-cell hit from the player: damages an enemy on `cell` or breaks
    /// a destructible tile there.
    pub fn strike(&mut self, cell: Position, damage: u32, source: Position) {
        if let Some(id) = self.state.enemy_at(cell).map(|enemy| enemy.id) {
            self.damage_enemy(id, damage, source);
        } else {
            self.destroy_tile(cell);
        }
    }

    /// Ranged enemy shot at the player.
    ///
    /// Leans out through a free peek spot when the direct line is blocked.
    /// Other enemies on the line absorb the shot harmlessly; opaque cells
    /// stop it.
    /// Returns true when the player was hit.
    pub fn enemy_shot(&mut self, shooter: EntityId, from: Position, damage: u32, range: u32) -> bool {
        let player = self.state.player.position;
        let origin = firing_origin(&self.state.grid, from, player, |cell| {
            self.state.is_enemy_at(cell)
        });
        self.emit(GameEvent::AttackResolved {
            attacker: shooter,
            weapon: "enemy rifle".into(),
            mode: FireMode::Hitscan,
            origin,
            target: player,
        });

        let mut end = origin;
        let mut hit = false;
        for cell in bresenham(origin, player).into_iter().skip(1).take(range as usize) {
            end = cell;
            if cell == player {
                self.damage_player(shooter, damage, origin);
                hit = true;
                break;
            }
            if self
                .state
                .enemy_at(cell)
                .is_some_and(|enemy| enemy.id != shooter)
                || self.state.grid.blocks_light(cell)
            {
                break;
            }
        }
        self.emit(GameEvent::ShotTraced { origin, end });
        hit
    }

    /// Melee enemy hit on the adjacent player.
    pub fn enemy_strike(&mut self, attacker: EntityId, from: Position, damage: u32) {
        let target = self.state.player.position;
        self.emit(GameEvent::AttackResolved {
            attacker,
            weapon: "claws".into(),
            mode: FireMode::Melee,
            origin: from,
            target,
        });
        self.damage_player(attacker, damage, from);
    }
}
