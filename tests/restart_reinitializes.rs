mod common;

use common::{pull_trigger, run, started};
use maze_shooter::GameConfig;
use maze_shooter::core::events::GameEvent;
use maze_shooter::core::maze::MazeLayout;
use maze_shooter::core::session::Phase;

#[test]
fn restart_rebuilds_everything_from_config() {
    let cfg = GameConfig { seed: Some(17), ..GameConfig::default() };
    let pristine = maze_shooter::Game::with_layout(cfg.clone(), MazeLayout::builtin());
    let mut game = started(cfg, MazeLayout::builtin());

    pull_trigger(&mut game);
    run(&mut game, 120);
    assert!(game.player().ammo < 30);

    game.restart();
    assert_eq!(game.phase(), Phase::NotStarted);
    let events = game.drain_events();
    assert_eq!(events.first(), Some(&GameEvent::Restarted));
    assert!(events.contains(&GameEvent::PhaseChanged(Phase::NotStarted)));

    assert_eq!(game.snapshot(), pristine.snapshot());
    for (a, b) in game.enemies().iter().zip(pristine.enemies()) {
        assert_eq!(a.speed, b.speed);
    }
    assert_eq!(game.pending_timers(), 0);
    assert!(game.bullets().is_empty());
}
