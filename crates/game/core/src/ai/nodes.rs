//! Leaf behaviors. Conditions are plain predicates over [`AiContext`];
//! actions record an [`EnemyIntent`] and never touch the state.

use behavior_tree::{Behavior, Status};

use super::{AiContext, EnemyIntent};
use crate::los::{has_line_of_sight, in_cover};
use crate::path::next_step;
use crate::state::{CardinalDirection, Position};

pub fn adjacent_to_player(ctx: &AiContext<'_>) -> bool {
    ctx.is_adjacent_to_player()
}

pub fn in_cover_now(ctx: &AiContext<'_>) -> bool {
    ctx.in_cover
}

pub fn has_shot(ctx: &AiContext<'_>) -> bool {
    ctx.has_shot()
}

pub fn sees_player(ctx: &AiContext<'_>) -> bool {
    ctx.line_of_sight
}

/// Stay put this turn.
pub struct Hold;

impl Behavior<AiContext<'_>> for Hold {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Status {
        ctx.set_intent(EnemyIntent::Hold);
        Status::Success
    }
}

pub struct MeleeAttack;

impl Behavior<AiContext<'_>> for MeleeAttack {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Status {
        ctx.set_intent(EnemyIntent::Melee);
        Status::Success
    }
}

pub struct FireAtPlayer;

impl Behavior<AiContext<'_>> for FireAtPlayer {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Status {
        ctx.set_intent(EnemyIntent::Fire);
        Status::Success
    }
}

/// One pathfinder step toward the player. Fails when there is no route.
pub struct Advance;

impl Behavior<AiContext<'_>> for Advance {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Status {
        let step = next_step(
            &ctx.state.grid,
            ctx.enemy.position,
            ctx.player_position(),
            ctx.config.path_max_expansions,
            |cell| ctx.is_blocked(cell),
        );
        match step {
            Some(cell) => {
                ctx.set_intent(EnemyIntent::Step(cell));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Leave cover for an adjacent free cell that is exposed to the player but
/// still has a line on them.
pub struct StepOut;

impl Behavior<AiContext<'_>> for StepOut {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Status {
        let player = ctx.player_position();
        let grid = &ctx.state.grid;
        let exit = ctx.enemy.position.neighbors().into_iter().find(|cell| {
            ctx.is_free(*cell)
                && !in_cover(grid, *cell, player)
                && has_line_of_sight(grid, *cell, player, true)
        });
        match exit {
            Some(cell) => {
                ctx.set_intent(EnemyIntent::Step(cell));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Head for the nearest free cell within the search radius that is in cover
/// from the player yet keeps a line of sight (peeking) on them.
pub struct SeekCover;

impl SeekCover {
    fn nearest_cover(ctx: &AiContext<'_>) -> Option<Position> {
        let origin = ctx.enemy.position;
        let player = ctx.player_position();
        let grid = &ctx.state.grid;
        let radius = ctx.config.cover_search_radius;

        let mut best: Option<(i32, Position)> = None;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let cell = origin.offset(dx, dy);
                if cell == origin || !ctx.is_free(cell) {
                    continue;
                }
                if !in_cover(grid, cell, player) || !has_line_of_sight(grid, cell, player, true) {
                    continue;
                }
                let candidate = (origin.manhattan(cell), cell);
                if best.is_none_or(|current| candidate < current) {
                    best = Some(candidate);
                }
            }
        }
        best.map(|(_, cell)| cell)
    }
}

impl Behavior<AiContext<'_>> for SeekCover {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Status {
        let Some(cover) = Self::nearest_cover(ctx) else {
            return Status::Failure;
        };
        let step = next_step(
            &ctx.state.grid,
            ctx.enemy.position,
            cover,
            ctx.config.path_max_expansions,
            |cell| ctx.is_blocked(cell),
        );
        match step {
            Some(cell) => {
                tracing::debug!(id = %ctx.enemy.id, %cover, "seeking cover");
                ctx.set_intent(EnemyIntent::Step(cell));
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Random cardinal step, or nothing if that cell is taken.
pub struct Wander;

impl Behavior<AiContext<'_>> for Wander {
    fn tick(&self, ctx: &mut AiContext<'_>) -> Status {
        let direction = CardinalDirection::ALL[ctx.dice.below(4) as usize];
        let cell = ctx.enemy.position.step(direction);
        if ctx.is_free(cell) {
            ctx.set_intent(EnemyIntent::Step(cell));
        } else {
            ctx.set_intent(EnemyIntent::Hold);
        }
        Status::Success
    }
}
