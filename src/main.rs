// main.rs
mod audio_manager;
mod process_events;
mod render;

use audio_manager::AudioManager;
use maze_shooter::core::events::GameEvent;
use maze_shooter::{Game, GameConfig};
use process_events::process_events;
use raylib::prelude::*;
use render::Trails;
use render::hud::draw_hud;
use render::scene::{camera, draw_scene};

const DEFAULT_CONFIG: &str = "data/config/game.toml";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("maze_shooter: {err}");
        std::process::exit(1);
    }
}

fn run() -> maze_shooter::Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_string());
    let cfg = GameConfig::load_with_env(&config_path)?;
    let mut game = Game::new(cfg)?;

    let window_width = 1280;
    let window_height = 720;
    let (mut window, raylib_thread) = raylib::init()
        .size(window_width, window_height)
        .title("Maze Shooter")
        .build();
    window.set_target_fps(60);
    // P pauses; Escape should not close the window mid-game
    window.set_exit_key(None);

    let audio = AudioManager::new().map(|mut a| {
        a.load_sfx_auto();
        a
    });
    if audio.is_none() {
        log::warn!("no audio output device; running silent");
    }
    let mut trails = Trails::default();

    while !window.window_should_close() {
        process_events(&mut window, &mut game);
        game.frame(window.get_time());

        for event in game.drain_events() {
            trails.observe(&event);
            if let (GameEvent::Cue(cue), Some(audio)) = (event, audio.as_ref()) {
                audio.play(cue);
            }
        }
        trails.age(window.get_frame_time());

        let snapshot = game.snapshot();
        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::new(20, 24, 32, 255));
        {
            let mut d3 = d.begin_mode3D(camera(&snapshot));
            draw_scene(&mut d3, game.maze(), &snapshot, &trails);
        }
        draw_hud(&mut d, &snapshot);
    }
    log::info!(
        "session closed: score {}, kills {}",
        game.session().score,
        game.session().kills
    );
    Ok(())
}
