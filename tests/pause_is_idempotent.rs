mod common;

use common::{run, started};
use maze_shooter::GameConfig;
use maze_shooter::core::events::GameEvent;
use maze_shooter::core::maze::MazeLayout;
use maze_shooter::core::session::Phase;

#[test]
fn double_toggle_without_ticks_changes_nothing() {
    let mut game = started(GameConfig { seed: Some(2), ..GameConfig::default() }, MazeLayout::builtin());
    run(&mut game, 90);
    let before = game.snapshot();

    game.toggle_pause();
    assert_eq!(game.phase(), Phase::Paused);
    game.toggle_pause();
    assert_eq!(game.phase(), Phase::Playing);

    assert_eq!(game.snapshot(), before);
    assert_eq!(
        game.drain_events(),
        vec![GameEvent::PhaseChanged(Phase::Paused), GameEvent::PhaseChanged(Phase::Playing)]
    );
}

#[test]
fn paused_session_ignores_ticks_and_frames() {
    let mut game = started(GameConfig { seed: Some(2), ..GameConfig::default() }, MazeLayout::builtin());
    run(&mut game, 10);
    game.focus_lost();
    game.focus_lost();
    let frozen = game.snapshot();
    run(&mut game, 60);
    game.frame(1.0);
    game.frame(2.0);
    assert_eq!(game.snapshot(), frozen);
    game.focus_gained();
    assert_eq!(game.phase(), Phase::Playing);
}
