use tactics_core::{
    ActionError, EnemyKind, EntityId, Env, EquippedWeapon, FixedRng, GameConfig, GameEngine,
    GameEvent, GameState, Grid, LevelSpec, NoLoot, PlayerAction, Position, WeaponKind,
};

fn boxed_room() -> Grid {
    Grid::from_rows(&["#########", "#.......#", "#...X...#", "#.......#", "#########"]).unwrap()
}

fn enemy_health(state: &GameState, id: EntityId) -> Option<u32> {
    state.enemy(id).map(|enemy| enemy.health.current)
}

#[test]
fn pistol_shot_into_cover_deals_no_damage() {
    let config = GameConfig::default();
    let rng = FixedRng::NEVER;
    let env = Env::new(&config, &rng, &NoLoot);
    let level = LevelSpec::new(boxed_room(), Position::new(1, 1))
        .with_enemy(Position::new(4, 3), EnemyKind::Ranged);
    let mut state = GameState::new(level, &config, 1).unwrap();
    let mut engine = GameEngine::new(&mut state, env);

    let report = engine.execute(PlayerAction::fire(Position::new(4, 3))).unwrap();

    assert!(report.events.contains(&GameEvent::EnemyDamaged {
        id: EntityId(1),
        position: Position::new(4, 3),
        amount: 0,
        remaining: 2,
        in_cover: true,
    }));
    assert_eq!(enemy_health(engine.state(), EntityId(1)), Some(2));
    assert!(engine.state().enemy(EntityId(1)).unwrap().alerted);
}

#[test]
fn exposed_enemy_takes_full_damage_and_dies() {
    let config = GameConfig::default();
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let level = LevelSpec::new(boxed_room(), Position::new(1, 1))
        .with_enemy(Position::new(6, 1), EnemyKind::Ranged);
    let mut state = GameState::new(level, &config, 1).unwrap();
    let mut engine = GameEngine::new(&mut state, env);

    engine.execute(PlayerAction::fire(Position::new(6, 1))).unwrap();
    assert_eq!(enemy_health(engine.state(), EntityId(1)), Some(1));
    // it returned fire from the open
    assert_eq!(engine.state().player.health.current, 95);

    let report = engine.execute(PlayerAction::fire(Position::new(6, 1))).unwrap();
    assert_eq!(report.kills().collect::<Vec<_>>(), vec![EntityId(1)]);
    assert!(engine.state().enemies.is_empty());
    assert!(report.events.contains(&GameEvent::ExperienceGained {
        amount: config.xp_ranged_kill
    }));
    assert_eq!(engine.state().player.arsenal[0].magazine(), 10);
}

#[test]
fn shotgun_at_point_blank_lands_every_pellet() {
    let config = GameConfig {
        melee_enemy_hp: 10,
        ..GameConfig::default()
    };
    let rng = FixedRng::CENTERED;
    let env = Env::new(&config, &rng, &NoLoot);
    let grid = Grid::from_rows(&["#######", "#.....#", "#.....#", "#.....#", "#######"]).unwrap();
    let level =
        LevelSpec::new(grid, Position::new(2, 2)).with_enemy(Position::new(3, 2), EnemyKind::Melee);
    let mut state = GameState::new(level, &config, 1).unwrap();
    state
        .player
        .arsenal
        .push(EquippedWeapon::from_kind(WeaponKind::Shotgun));
    let mut engine = GameEngine::new(&mut state, env);

    let switched = engine.execute(PlayerAction::switch_weapon(2)).unwrap();
    assert_eq!(engine.state().turn, 0);
    assert_eq!(switched.events.len(), 1);

    let report = engine.execute(PlayerAction::fire(Position::new(3, 2))).unwrap();
    let pellets = report
        .events
        .iter()
        .filter(|event| matches!(event, GameEvent::ShotTraced { .. }))
        .count();
    assert_eq!(pellets, 5);
    assert_eq!(enemy_health(engine.state(), EntityId(1)), Some(5));
    assert_eq!(engine.state().player.arsenal[2].magazine(), 5);
}

#[test]
fn rocket_splash_hits_center_and_ring_only() {
    let config = GameConfig {
        melee_enemy_hp: 30,
        ..GameConfig::default()
    };
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let grid = Grid::from_rows(&[
        "############",
        "#..........#",
        "#..........#",
        "#..........#",
        "#..........#",
        "#..........#",
        "############",
    ])
    .unwrap();
    let level = LevelSpec::new(grid, Position::new(1, 3))
        .with_enemy(Position::new(6, 3), EnemyKind::Melee)
        .with_enemy(Position::new(7, 3), EnemyKind::Melee)
        .with_enemy(Position::new(9, 3), EnemyKind::Melee);
    let mut state = GameState::new(level, &config, 1).unwrap();
    state
        .player
        .arsenal
        .push(EquippedWeapon::from_kind(WeaponKind::RocketLauncher));
    let mut engine = GameEngine::new(&mut state, env);

    engine.execute(PlayerAction::switch_weapon(2)).unwrap();
    let report = engine.execute(PlayerAction::fire(Position::new(6, 3))).unwrap();

    assert!(report.events.contains(&GameEvent::Explosion {
        center: Position::new(6, 3),
        radius: 2,
    }));
    let state = engine.state();
    assert_eq!(enemy_health(state, EntityId(1)), Some(20));
    assert_eq!(enemy_health(state, EntityId(2)), Some(25));
    assert_eq!(enemy_health(state, EntityId(3)), Some(30));
    assert_eq!(state.player.health.current, config.player_max_hp);
}

#[test]
fn empty_magazine_is_rejected_without_spending_the_turn() {
    let config = GameConfig::default();
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let mut state =
        GameState::new(LevelSpec::new(boxed_room(), Position::new(1, 1)), &config, 1).unwrap();
    state.player.arsenal[0] = EquippedWeapon::unloaded(WeaponKind::Pistol.definition());
    let before = state.clone();
    let mut engine = GameEngine::new(&mut state, env);

    let err = engine
        .execute(PlayerAction::fire(Position::new(5, 1)))
        .unwrap_err();

    assert_eq!(err, ActionError::EmptyMagazine);
    assert_eq!(*engine.state(), before);
}

#[test]
fn shooter_does_not_lean_out_through_an_occupied_corner() {
    let config = GameConfig::default();
    let rng = FixedRng::NEVER;
    let env = Env::new(&config, &rng, &NoLoot);
    let grid = Grid::from_rows(&["######", "#....#", "####.#", "####.#", "######"]).unwrap();
    let level = LevelSpec::new(grid, Position::new(4, 3))
        .with_enemy(Position::new(4, 2), EnemyKind::Melee)
        .with_enemy(Position::new(2, 1), EnemyKind::Ranged);
    let mut state = GameState::new(level, &config, 1).unwrap();
    let mut engine = GameEngine::new(&mut state, env);

    let report = engine.execute(PlayerAction::fire(Position::new(2, 1))).unwrap();

    assert!(report.events.iter().any(|event| matches!(
        event,
        GameEvent::AttackResolved {
            attacker: EntityId::PLAYER,
            origin,
            ..
        } if *origin == Position::new(4, 3)
    )));
    assert!(report.events.contains(&GameEvent::ShotTraced {
        origin: Position::new(4, 3),
        end: Position::new(3, 2),
    }));
    assert!(!report.events.iter().any(|event| matches!(
        event,
        GameEvent::EnemyDamaged { id, .. } if *id == EntityId(2)
    )));
    assert_eq!(enemy_health(engine.state(), EntityId(2)), Some(config.ranged_enemy_hp));
}
