//! Enemy decision making.
//!
//! Each enemy gets a fresh [`AiContext`] per turn. The tree for its kind
//! (or the dormant tree before it is alerted) records an [`EnemyIntent`];
//! the engine applies it afterwards. Nothing here mutates game state.
mod context;
mod nodes;
mod strategy;

pub use context::AiContext;
pub use strategy::{MeleeStrategy, RangedStrategy, Strategy, dormant};

use behavior_tree::Behavior;

use crate::state::Position;

/// What an enemy wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnemyIntent {
    Hold,
    /// Move one orthogonal cell.
    Step(Position),
    /// Strike the adjacent player.
    Melee,
    /// Ranged attack on the player.
    Fire,
}

/// Runs the appropriate tree. `None` means no applicable action (for
/// example no path to the player).
pub fn decide(ctx: &mut AiContext<'_>) -> Option<EnemyIntent> {
    let (strategy, tree) = if ctx.enemy.alerted {
        let strategy = ctx.enemy.kind.strategy();
        (strategy.name(), strategy.tree(ctx.config))
    } else {
        ("dormant", dormant(ctx.config))
    };
    tree.tick(ctx);

    let intent = ctx.take_intent();
    tracing::debug!(
        id = %ctx.enemy.id,
        strategy,
        alerted = ctx.enemy.alerted,
        in_cover = ctx.in_cover,
        line_of_sight = ctx.line_of_sight,
        ?intent,
        "enemy decision"
    );
    intent
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::env::{Dice, FixedRng, RngOracle, ScriptedRng};
    use crate::grid::Grid;
    use crate::state::{EnemyKind, EntityId, GameState, LevelSpec};

    fn state(rows: &[&str], player: Position, enemies: &[(Position, EnemyKind)]) -> GameState {
        let mut level = LevelSpec::new(Grid::from_rows(rows).unwrap(), player);
        for (position, kind) in enemies {
            level = level.with_enemy(*position, *kind);
        }
        let mut state = GameState::new(level, &GameConfig::default(), 1).unwrap();
        for enemy in &mut state.enemies {
            enemy.alerted = true;
        }
        state
    }

    fn decide_with(state: &GameState, rng: &dyn RngOracle) -> Option<EnemyIntent> {
        let config = GameConfig::default();
        let enemy = &state.enemies[0];
        let dice = Dice::new(rng, state.game_seed, state.turn, enemy.id);
        let mut ctx = AiContext::new(state, enemy, &config, dice);
        decide(&mut ctx)
    }

    const ROOM: [&str; 7] = [
        "#########",
        "#.......#",
        "#.......#",
        "#.......#",
        "#.......#",
        "#.......#",
        "#########",
    ];

    #[test]
    fn melee_enemy_strikes_when_adjacent() {
        let state = state(
            &ROOM,
            Position::new(3, 3),
            &[(Position::new(4, 3), EnemyKind::Melee)],
        );
        assert_eq!(decide_with(&state, &FixedRng::ALWAYS), Some(EnemyIntent::Melee));
    }

    #[test]
    fn melee_enemy_advances_toward_player() {
        let state = state(
            &ROOM,
            Position::new(1, 1),
            &[(Position::new(4, 1), EnemyKind::Melee)],
        );
        assert_eq!(
            decide_with(&state, &FixedRng::ALWAYS),
            Some(EnemyIntent::Step(Position::new(3, 1)))
        );
    }

    #[test]
    fn melee_enemy_without_path_does_nothing() {
        let rows = ["#######", "#..#..#", "#######"];
        let state = state(
            &rows,
            Position::new(1, 1),
            &[(Position::new(5, 1), EnemyKind::Melee)],
        );
        assert_eq!(decide_with(&state, &FixedRng::ALWAYS), None);
    }

    #[test]
    fn exposed_ranged_enemy_fires_when_the_draw_succeeds() {
        let state = state(
            &ROOM,
            Position::new(1, 3),
            &[(Position::new(5, 3), EnemyKind::Ranged)],
        );
        assert_eq!(decide_with(&state, &FixedRng::ALWAYS), Some(EnemyIntent::Fire));
    }

    #[test]
    fn exposed_ranged_enemy_heads_for_cover_when_it_holds_fire() {
        // The box shields both (5,3) and (6,4); the smaller position wins the tie.
        let state = state(
            &BOXED,
            Position::new(6, 1),
            &[(Position::new(5, 4), EnemyKind::Ranged)],
        );
        assert_eq!(
            decide_with(&state, &FixedRng::NEVER),
            Some(EnemyIntent::Step(Position::new(5, 3)))
        );
    }

    const BOXED: [&str; 7] = [
        "#########",
        "#.......#",
        "#.......#",
        "#.....X.#",
        "#.......#",
        "#.......#",
        "#########",
    ];

    fn covered_shooter() -> GameState {
        state(
            &BOXED,
            Position::new(6, 1),
            &[(Position::new(6, 4), EnemyKind::Ranged)],
        )
    }

    #[test]
    fn covered_ranged_enemy_steps_out_when_it_holds_fire() {
        let state = covered_shooter();
        let rng = ScriptedRng::new([u32::MAX, 0]);
        // (6,5) is exposed but blind; (5,4) is the first exit with a line.
        assert_eq!(
            decide_with(&state, &rng),
            Some(EnemyIntent::Step(Position::new(5, 4)))
        );
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn covered_ranged_enemy_holds_when_both_draws_fail() {
        let state = covered_shooter();
        let rng = ScriptedRng::new([u32::MAX, u32::MAX]);
        assert_eq!(decide_with(&state, &rng), Some(EnemyIntent::Hold));
        assert_eq!(rng.consumed(), 2);
    }

    #[test]
    fn covered_ranged_enemy_fires_without_a_second_draw() {
        let state = covered_shooter();
        let rng = ScriptedRng::new([0, u32::MAX]);
        assert_eq!(decide_with(&state, &rng), Some(EnemyIntent::Fire));
        assert_eq!(rng.consumed(), 1);
    }

    const SEALED: [&str; 7] = [
        "#########",
        "#.......#",
        "#.......#",
        "#.#####.#",
        "#.......#",
        "#.......#",
        "#########",
    ];

    #[test]
    fn blind_ranged_enemy_in_cover_waits_in_ambush() {
        let state = state(
            &SEALED,
            Position::new(4, 1),
            &[(Position::new(4, 4), EnemyKind::Ranged)],
        );
        let rng = ScriptedRng::new([0]);
        assert_eq!(decide_with(&state, &rng), Some(EnemyIntent::Hold));
        assert_eq!(rng.consumed(), 1);
    }

    #[test]
    fn blind_ranged_enemy_in_cover_advances_otherwise() {
        let state = state(
            &SEALED,
            Position::new(4, 1),
            &[(Position::new(4, 4), EnemyKind::Ranged)],
        );
        let rng = ScriptedRng::new([u32::MAX]);
        assert_eq!(
            decide_with(&state, &rng),
            Some(EnemyIntent::Step(Position::new(3, 4)))
        );
    }

    #[test]
    fn dormant_enemy_idles_on_a_successful_draw() {
        let mut state = state(
            &ROOM,
            Position::new(1, 1),
            &[(Position::new(5, 4), EnemyKind::Melee)],
        );
        state.enemies[0].alerted = false;
        assert_eq!(decide_with(&state, &FixedRng::ALWAYS), Some(EnemyIntent::Hold));
    }

    #[test]
    fn dormant_enemy_wanders_otherwise() {
        let mut state = state(
            &ROOM,
            Position::new(1, 1),
            &[(Position::new(5, 4), EnemyKind::Melee)],
        );
        state.enemies[0].alerted = false;
        // u32::MAX % 4 == 3 picks East.
        assert_eq!(
            decide_with(&state, &FixedRng::NEVER),
            Some(EnemyIntent::Step(Position::new(6, 4)))
        );
        assert_eq!(state.enemies[0].id, EntityId(1));
    }
}
