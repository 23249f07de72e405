use super::{ActionError, ActionTransition};
use crate::combat::Combat;
use crate::env::{Dice, Env};
use crate::events::{GameEvent, TurnReport};
use crate::los::firing_origin;
use crate::state::{EntityId, GameState, Position};
use crate::weapon::FireMode;

/// Use the active weapon on the reticle cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FireAction {
    pub target: Position,
}

impl FireAction {
    pub fn new(target: Position) -> Self {
        Self { target }
    }

    /// Cell a melee swing lands on: one step from `from` toward the reticle,
    /// diagonals included.
    pub fn melee_cell(from: Position, reticle: Position) -> Position {
        from.offset(
            (reticle.x - from.x).signum(),
            (reticle.y - from.y).signum(),
        )
    }
}

impl ActionTransition for FireAction {
    fn pre_validate(&self, state: &GameState, env: &Env<'_>) -> Result<(), ActionError> {
        let player = &state.player;
        let weapon = player.active().ok_or(ActionError::NoSuchWeapon {
            index: player.active_weapon,
        })?;
        if self.target == player.position || !state.grid.contains(self.target) {
            return Err(ActionError::InvalidTarget {
                target: self.target,
            });
        }

        if weapon.definition().is_melee() {
            let reach = env.config().melee_reach;
            if player.position.distance_sq(self.target) as f32 > reach * reach {
                return Err(ActionError::OutOfRange {
                    target: self.target,
                });
            }
        } else if weapon.magazine() == 0 {
            return Err(ActionError::EmptyMagazine);
        }
        Ok(())
    }

    fn apply<'e>(
        &self,
        state: &mut GameState,
        env: Env<'e>,
        dice: &mut Dice<'e>,
        report: &mut TurnReport,
    ) -> Result<(), ActionError> {
        let from = state.player.position;
        let index = state.player.active_weapon;
        let weapon = state
            .player
            .active_mut()
            .ok_or(ActionError::NoSuchWeapon { index })?;
        let stats = weapon.effective();
        let name = weapon.name().to_owned();
        let rounds = match stats.mode {
            FireMode::Melee => 0,
            _ => weapon.consume(stats.burst),
        };

        let origin = match stats.mode {
            FireMode::Melee => from,
            _ => firing_origin(&state.grid, from, self.target, |cell| state.is_enemy_at(cell)),
        };
        tracing::debug!(weapon = %name, %origin, target = %self.target, rounds, "player fires");
        report.push(GameEvent::AttackResolved {
            attacker: EntityId::PLAYER,
            weapon: name,
            mode: stats.mode,
            origin,
            target: self.target,
        });

        let mut combat = Combat::new(state, env, dice, report);
        match stats.mode {
            FireMode::Hitscan => combat.fire_hitscan(origin, self.target, &stats, rounds),
            FireMode::Projectile => combat.fire_projectile(origin, self.target, &stats, rounds),
            FireMode::Melee => {
                let cell = Self::melee_cell(from, self.target);
                combat.strike(cell, stats.damage, from);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn melee_cell_is_clamped_to_one_step() {
        let from = Position::new(5, 5);
        assert_eq!(FireAction::melee_cell(from, Position::new(6, 5)), Position::new(6, 5));
        assert_eq!(FireAction::melee_cell(from, Position::new(4, 4)), Position::new(4, 4));
        assert_eq!(FireAction::melee_cell(from, Position::new(5, 3)), Position::new(5, 4));
    }
}
