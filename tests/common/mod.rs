#![allow(dead_code)]

use maze_shooter::core::events::GameEvent;
use maze_shooter::core::input::InputState;
use maze_shooter::core::maze::MazeLayout;
use maze_shooter::{Game, GameConfig};

pub const DT: f32 = 1.0 / 60.0;

/// 15x15 with no walls, so only scripted entities matter.
pub fn open_layout() -> MazeLayout {
    let row = "0".repeat(15);
    MazeLayout::parse(&vec![row; 15].join("\n")).unwrap()
}

/// One harmless enemy parked in a corner: it never moves, shoots or gets
/// stuck-teleported during a test.
pub fn quiet_config(seed: u64) -> GameConfig {
    let mut cfg = GameConfig { seed: Some(seed), ..GameConfig::default() };
    cfg.enemy.spawn_offsets = vec![[12.0, -12.0]];
    cfg.enemy.speed_min = 0.0;
    cfg.enemy.speed_max = 0.0;
    cfg.enemy.ranged_ammo = 0;
    cfg.enemy.stuck_time = 1.0e6;
    cfg
}

pub fn started(cfg: GameConfig, layout: MazeLayout) -> Game {
    let mut game = Game::with_layout(cfg, layout);
    game.start();
    game.drain_events();
    game
}

pub fn run(game: &mut Game, ticks: usize) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for _ in 0..ticks {
        game.tick(DT);
        events.extend(game.drain_events());
    }
    events
}

/// Presses fire for one tick.
pub fn pull_trigger(game: &mut Game) -> Vec<GameEvent> {
    game.set_input(InputState { fire: true, ..Default::default() });
    run(game, 1)
}
