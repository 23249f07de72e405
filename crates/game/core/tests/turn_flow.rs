use tactics_core::{
    ActionError, AmmoKind, CardinalDirection, EnemyKind, Env, FixedRng, GameConfig, GameEngine,
    GameEvent, GameState, GameStatus, Grid, LevelSpec, NoLoot, Pickup, PlayerAction, Position,
    ResourceMeter, WeaponKind,
};

fn open_room() -> Grid {
    Grid::from_rows(&["#######", "#.....#", "#.....#", "#.....#", "#######"]).unwrap()
}

#[test]
fn player_death_ends_the_run_until_restart() {
    let config = GameConfig::default();
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let level =
        LevelSpec::new(open_room(), Position::new(2, 2)).with_enemy(Position::new(3, 2), EnemyKind::Melee);
    let mut state = GameState::new(level.clone(), &config, 9).unwrap();
    state.player.health = ResourceMeter::new(1, config.player_max_hp);
    let mut engine = GameEngine::new(&mut state, env);

    let report = engine.execute(PlayerAction::wait()).unwrap();
    assert!(report.events.iter().any(|event| matches!(event, GameEvent::EnemyAlerted { .. })));
    assert!(report.events.iter().any(|event| matches!(event, GameEvent::PlayerKilled { .. })));
    assert_eq!(engine.state().status, GameStatus::GameOver);
    assert_eq!(engine.state().turn, 1);

    assert_eq!(
        engine.execute(PlayerAction::wait()).unwrap_err(),
        ActionError::GameOver
    );
    assert_eq!(
        engine.execute(PlayerAction::switch_weapon(1)).unwrap_err(),
        ActionError::GameOver
    );
    assert_eq!(engine.state().turn, 1);

    engine.restart(level).unwrap();
    let state = engine.state();
    assert_eq!(state.status, GameStatus::Playing);
    assert_eq!(state.turn, 0);
    assert_eq!(state.depth, 0);
    assert_eq!(state.game_seed, 9);
    assert_eq!(state.player.health.current, config.player_max_hp);
    assert_eq!(state.enemies.len(), 1);
}

#[test]
fn distant_enemy_stays_dormant_until_the_player_closes_in() {
    let config = GameConfig::default().with_alert_radius(3);
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let level =
        LevelSpec::new(open_room(), Position::new(1, 1)).with_enemy(Position::new(5, 2), EnemyKind::Melee);
    let mut state = GameState::new(level, &config, 9).unwrap();
    let mut engine = GameEngine::new(&mut state, env);

    engine.execute(PlayerAction::wait()).unwrap();
    assert!(!engine.state().enemies[0].alerted);
    assert_eq!(engine.state().enemies[0].position, Position::new(5, 2));

    engine.execute(PlayerAction::step(CardinalDirection::East)).unwrap();
    let report = engine.execute(PlayerAction::step(CardinalDirection::East)).unwrap();

    // (3,1) to (5,2) is Manhattan 3, not inside the radius yet
    assert!(!engine.state().enemies[0].alerted);
    assert!(report.events.iter().all(|event| !matches!(event, GameEvent::EnemyAlerted { .. })));

    let report = engine.execute(PlayerAction::step(CardinalDirection::South)).unwrap();
    let enemy = &engine.state().enemies[0];
    assert!(enemy.alerted);
    // woken enemies act in the same turn
    assert!(report.events.contains(&GameEvent::EnemyMoved {
        id: enemy.id,
        from: Position::new(5, 2),
        to: Position::new(4, 2),
    }));
}

#[test]
fn melee_enemy_closes_distance_each_turn() {
    let config = GameConfig::default();
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let level =
        LevelSpec::new(open_room(), Position::new(1, 1)).with_enemy(Position::new(5, 1), EnemyKind::Melee);
    let mut state = GameState::new(level, &config, 9).unwrap();
    let mut engine = GameEngine::new(&mut state, env);

    let report = engine.execute(PlayerAction::wait()).unwrap();
    assert!(report.events.contains(&GameEvent::EnemyMoved {
        id: engine.state().enemies[0].id,
        from: Position::new(5, 1),
        to: Position::new(4, 1),
    }));
    engine.execute(PlayerAction::wait()).unwrap();
    assert_eq!(engine.state().enemies[0].position, Position::new(3, 1));

    engine.execute(PlayerAction::wait()).unwrap();
    assert_eq!(engine.state().enemies[0].position, Position::new(2, 1));
    assert_eq!(engine.state().player.health.current, config.player_max_hp);

    let report = engine.execute(PlayerAction::wait()).unwrap();
    assert_eq!(report.damage_taken(), config.melee_enemy_damage);
}

#[test]
fn reload_and_pickup_manage_ammunition() {
    let config = GameConfig::default();
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let start = Position::new(1, 1);
    let level = LevelSpec::new(open_room(), start).with_item(
        start,
        Pickup::Ammo {
            kind: AmmoKind::Shells,
            amount: 4,
        },
    );
    let mut state = GameState::new(level, &config, 9).unwrap();
    let mut engine = GameEngine::new(&mut state, env);

    assert_eq!(
        engine.execute(PlayerAction::reload()).unwrap_err(),
        ActionError::MagazineFull
    );
    assert_eq!(engine.state().turn, 0);

    engine.execute(PlayerAction::fire(Position::new(5, 1))).unwrap();
    let report = engine.execute(PlayerAction::reload()).unwrap();
    assert!(report.events.contains(&GameEvent::Reloaded {
        weapon: "Pistol".into(),
        rounds: 1,
    }));
    assert_eq!(engine.state().player.arsenal[0].magazine(), 12);
    assert_eq!(engine.state().player.reserve(AmmoKind::NineMil), 23);

    engine.execute(PlayerAction::pick_up()).unwrap();
    assert_eq!(engine.state().player.reserve(AmmoKind::Shells), 4);
    assert_eq!(
        engine.execute(PlayerAction::pick_up()).unwrap_err(),
        ActionError::NothingToPickUp
    );

    engine.execute(PlayerAction::switch_weapon(1)).unwrap();
    assert_eq!(
        engine.execute(PlayerAction::reload()).unwrap_err(),
        ActionError::NoMagazine
    );
    assert_eq!(engine.state().turn, 3);
}

#[test]
fn duplicate_weapon_pickup_becomes_ammunition() {
    let config = GameConfig::default();
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let start = Position::new(1, 1);
    let level = LevelSpec::new(open_room(), start).with_item(start, Pickup::Weapon(WeaponKind::Pistol));
    let mut state = GameState::new(level, &config, 9).unwrap();
    let mut engine = GameEngine::new(&mut state, env);

    engine.execute(PlayerAction::pick_up()).unwrap();

    assert_eq!(engine.state().player.arsenal.len(), 2);
    assert_eq!(engine.state().player.reserve(AmmoKind::NineMil), 24 + 12);
}

#[test]
fn elevator_hands_over_to_the_next_level() {
    let config = GameConfig::default();
    let rng = FixedRng::ALWAYS;
    let env = Env::new(&config, &rng, &NoLoot);
    let first = LevelSpec::new(
        Grid::from_rows(&["######", "#...E#", "######"]).unwrap(),
        Position::new(1, 1),
    );
    let mut state = GameState::new(first, &config, 9).unwrap();
    state
        .player
        .stash
        .push(tactics_core::weapon::ModKind::HeavyBarrel.definition());
    let mut engine = GameEngine::new(&mut state, env);

    engine.execute(PlayerAction::step(CardinalDirection::East)).unwrap();
    engine.execute(PlayerAction::step(CardinalDirection::East)).unwrap();
    let report = engine.execute(PlayerAction::step(CardinalDirection::East)).unwrap();
    assert!(report.events.contains(&GameEvent::ElevatorReached {
        position: Position::new(4, 1)
    }));

    let second = LevelSpec::new(
        Grid::from_rows(&["####", "#..#", "####"]).unwrap(),
        Position::new(1, 1),
    );
    engine.descend(second).unwrap();

    let state = engine.state();
    assert_eq!(state.depth, 1);
    assert_eq!(state.player.position, Position::new(1, 1));
    assert_eq!(state.player.stash.len(), 1);
    assert!(!state.visibility.is_explored(Position::new(4, 1)));
    assert!(state.visibility.is_visible(Position::new(2, 1)));
}
