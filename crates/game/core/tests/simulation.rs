use bomb_core::{
    DecorKind, GameConfig, GameEngine, GameOutcome, GameState, GameStatus, Intent, LevelChange,
    LevelLayout, Position, StepError, Tick,
};

const FRAME: Tick = Tick(16);

fn build(levels: &[&[&str]], config: &GameConfig) -> GameState {
    let layouts: Vec<LevelLayout> = levels
        .iter()
        .map(|rows| LevelLayout::from_rows(*rows).expect("layout should parse"))
        .collect();
    GameState::new(config, &layouts).expect("state should build")
}

/// Steps without intents until the next explosion or `limit` ticks.
fn wait_for_explosion(engine: &mut GameEngine<'_>, limit: usize) -> bomb_core::TickReport {
    for _ in 0..limit {
        let report = engine.step(FRAME, None).expect("tick should run");
        if !report.explosions.is_empty() {
            return report;
        }
    }
    panic!("no explosion within {limit} ticks");
}

/// 5x5 grid, player in the middle with range 2, a box two cells below.
#[test]
fn five_by_five_bomb_scenario() {
    let config = GameConfig::default().with_bomb_range(2);
    let mut state = build(
        &[&["_____", "_____", "__P__", "_____", "__B__"]],
        &config,
    );
    let mut engine = GameEngine::new(&mut state, &config);

    let report = engine.step(FRAME, Some(Intent::PlaceBomb)).unwrap();
    assert!(report.placed_bomb.is_some());

    let report = wait_for_explosion(&mut engine, 1000);
    let explosion = &report.explosions[0];
    assert_eq!(explosion.origin, Position::new(2, 2));
    assert_eq!(
        report.destroyed().map(|destroyed| destroyed.position).collect::<Vec<_>>(),
        vec![Position::new(2, 4)]
    );
    assert!(!explosion.affects(Position::new(2, 5)));
    assert_eq!(report.damage().count(), 1);
    assert!(report.clock >= config.bomb_fuse());

    let state = engine.state();
    assert_eq!(state.player.lives(), 2);
    assert!(state.grid().is_empty_at(Position::new(2, 4)));
    assert_eq!(state.player.bomb_bag(), 1);
}

#[test]
fn explosion_blocking_by_indestructible_obstacle() {
    let config = GameConfig::default().with_bomb_range(3);
    let mut state = build(&[&["P_T_", "____"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    engine.step(FRAME, Some(Intent::PlaceBomb)).unwrap();
    // Leave the blast diagonally.
    engine.step(FRAME, Some(Intent::MoveDown)).unwrap();
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();

    let report = wait_for_explosion(&mut engine, 1000);
    let explosion = &report.explosions[0];
    assert!(explosion.affects(Position::new(2, 0)));
    assert!(!explosion.affects(Position::new(3, 0)));
    assert_eq!(
        engine.state().grid().get(Position::new(2, 0)).map(|decor| decor.kind()),
        Some(DecorKind::Tree)
    );
}

#[test]
fn bag_is_conserved_across_place_and_explode() {
    let config = GameConfig::default().with_bomb_bag(2).with_bomb_fuse_ms(160);
    let mut state = build(&[&["P+___", "_____"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    let invariant = |engine: &GameEngine<'_>| {
        engine.state().player.bomb_bag() + engine.state().player.bombs().len() as i32
    };
    assert_eq!(invariant(&engine), 2);

    engine.step(FRAME, Some(Intent::PlaceBomb)).unwrap();
    assert_eq!(invariant(&engine), 2);

    // Picking up a bag bonus raises the ceiling by one.
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    assert_eq!(invariant(&engine), 3);
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    engine.step(FRAME, Some(Intent::PlaceBomb)).unwrap();
    assert_eq!(engine.state().player.bombs().len(), 2);
    assert_eq!(invariant(&engine), 3);

    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    for _ in 0..20 {
        engine.step(FRAME, None).unwrap();
        assert_eq!(invariant(&engine), 3);
    }
    assert!(engine.state().player.bombs().is_empty());
}

#[test]
fn negative_bag_pickup_lowers_the_ceiling_while_bombs_are_out() {
    let config = GameConfig::default().with_bomb_fuse_ms(160);
    let mut state = build(&[&["P-__"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    let invariant = |engine: &GameEngine<'_>| {
        engine.state().player.bomb_bag() + engine.state().player.bombs().len() as i32
    };

    engine.step(FRAME, Some(Intent::PlaceBomb)).unwrap();
    assert_eq!(engine.state().player.bomb_bag(), 0);
    assert_eq!(invariant(&engine), 1);

    // Every bomb is out when the penalty is picked up.
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    assert_eq!(engine.state().player.bomb_bag(), -1);
    assert_eq!(invariant(&engine), 0);
    assert_eq!(engine.snapshot().player.bomb_bag, 0);

    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    wait_for_explosion(&mut engine, 100);
    assert!(engine.state().player.bombs().is_empty());
    assert_eq!(engine.state().player.bomb_bag(), 0);
    assert_eq!(invariant(&engine), 0);

    let report = engine.step(FRAME, Some(Intent::PlaceBomb)).unwrap();
    assert!(report.placed_bomb.is_none());
}

#[test]
fn zero_range_bomb_only_hits_its_own_cell() {
    let config = GameConfig::default().with_bomb_fuse_ms(160);
    let mut state = build(&[&["P<K", "___"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    assert_eq!(engine.state().player.bomb_range(), 0);
    engine.step(FRAME, Some(Intent::PlaceBomb)).unwrap();
    engine.step(FRAME, Some(Intent::MoveDown)).unwrap();

    let report = wait_for_explosion(&mut engine, 100);
    assert_eq!(report.explosions[0].cells, vec![Position::new(1, 0)]);
    assert!(report.damage().next().is_none());
    assert_eq!(
        engine.state().grid().get(Position::new(2, 0)).map(|decor| decor.kind()),
        Some(DecorKind::Key)
    );
}

#[test]
fn chain_reaction_detonates_all_bombs_once() {
    let config = GameConfig::default()
        .with_bomb_bag(3)
        .with_bomb_range(2)
        .with_bomb_fuse_ms(1000);
    let mut state = build(&[&["P_______", "________"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    for _ in 0..3 {
        engine.step(FRAME, Some(Intent::PlaceBomb)).unwrap();
        engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
        engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    }
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    assert_eq!(engine.state().player.bombs().len(), 3);

    let report = wait_for_explosion(&mut engine, 1000);
    let mut ids: Vec<_> = report.explosions.iter().map(|explosion| explosion.bomb).collect();
    assert_eq!(ids.len(), 3);
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert!(engine.state().player.bombs().is_empty());
    assert_eq!(engine.state().player.bomb_bag(), 3);
    assert_eq!(engine.state().player.lives(), config.player_lives);
}

#[test]
fn door_unlock_then_traverse() {
    let config = GameConfig::default();
    let mut state = build(&[&["PKn"], &["V__"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    assert_eq!(engine.state().player.keys(), 1);

    // Unlock: key spent, door opens, no level change.
    engine.step(FRAME, Some(Intent::Interact)).unwrap();
    assert_eq!(engine.state().player.keys(), 0);
    assert_eq!(
        engine.state().grid().get(Position::new(2, 0)).map(|decor| decor.kind()),
        Some(DecorKind::Door {
            locked: false,
            offset: 1
        })
    );
    assert_eq!(engine.state().pending_level_change(), None);

    // Traverse: no key cost, the switch happens on the following tick.
    engine.step(FRAME, Some(Intent::Interact)).unwrap();
    assert_eq!(engine.state().pending_level_change(), Some(1));
    let report = engine.step(FRAME, None).unwrap();
    assert_eq!(
        report.level_change,
        Some(LevelChange::Changed {
            from: 0,
            to: 1,
            entry: Position::ORIGIN
        })
    );
    assert_eq!(engine.state().player.keys(), 0);
}

#[test]
fn levels_keep_their_state() {
    let config = GameConfig::default();
    let mut state = build(&[&["PN_K"], &["V__", "_H_"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    engine.step(FRAME, None).unwrap();
    assert_eq!(engine.state().current_level(), 1);

    // Take the heart on level 1 and come back.
    engine.step(FRAME, Some(Intent::MoveDown)).unwrap();
    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    assert_eq!(engine.state().player.lives(), config.player_lives + 1);
    engine.step(FRAME, Some(Intent::MoveLeft)).unwrap();
    engine.step(FRAME, Some(Intent::MoveUp)).unwrap();
    let report = engine.step(FRAME, None).unwrap();
    assert_eq!(
        report.level_change,
        Some(LevelChange::Changed {
            from: 1,
            to: 0,
            entry: Position::new(1, 0)
        })
    );

    let level_one = engine.state().level(1).unwrap();
    assert!(level_one.is_empty_at(Position::new(1, 1)));
}

#[test]
fn terminal_state_freezes_the_game() {
    let config = GameConfig::default().with_player_lives(1);
    let mut state = build(&[&["PM_"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    let report = engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    assert_eq!(report.collisions.len(), 2);
    assert_eq!(report.outcome, Some(GameOutcome::Lost));
    assert_eq!(GameOutcome::Lost.message(), "Game over");

    let before = engine.state().clone();
    let error = engine.step(FRAME, Some(Intent::MoveRight)).unwrap_err();
    assert_eq!(
        error,
        StepError::GameOver {
            outcome: GameOutcome::Lost
        }
    );
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.state().status(), GameStatus::Lost);
}

#[test]
fn princess_wins_the_game() {
    let config = GameConfig::default();
    let mut state = build(&[&["P_W"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);

    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    let report = engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    assert_eq!(report.outcome, Some(GameOutcome::Won));
    assert_eq!(GameOutcome::Won.message(), "You win!");
    assert!(engine.step(FRAME, None).is_err());
}

#[test]
fn render_snapshot_tracks_dirty_and_deleted_decor() {
    let config = GameConfig::default();
    let mut state = build(&[&["PK_"]], &config);
    let mut engine = GameEngine::new(&mut state, &config);
    engine.clear_dirty();
    assert_eq!(engine.snapshot().dirty_decors().count(), 0);

    engine.step(FRAME, Some(Intent::MoveRight)).unwrap();
    let snapshot = engine.snapshot();
    let key = snapshot
        .decors
        .iter()
        .find(|view| view.position == Position::new(1, 0))
        .unwrap();
    assert!(key.deleted);
    assert!(key.modified);
    assert_eq!(snapshot.player.keys, 1);

    engine.clear_dirty();
    assert!(engine.snapshot().decors.is_empty());
}
