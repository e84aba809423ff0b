//! Headless simulation harness CLI.
//! Usage: cargo run --bin sim_harness -- [--config PATH] [--ticks N] [--seed N]
//!
//! Runs the core at a fixed 60 Hz step with a scripted input pattern (walk,
//! strafe, turn, fire in bursts) and logs a summary. No window, no audio.

use maze_shooter::core::events::{Cue, GameEvent};
use maze_shooter::core::input::InputState;
use maze_shooter::{Error, Game, GameConfig};
use std::env;

const DEFAULT_CONFIG: &str = "data/config/game.toml";
const DT: f32 = 1.0 / 60.0;

struct Args {
    config: String,
    ticks: u64,
    seed: Option<u64>,
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a String> {
    args.iter().skip_while(|a| a.as_str() != name).nth(1)
}

fn parse_args() -> Result<Args, Error> {
    let args: Vec<String> = env::args().collect();
    let number = |name: &'static str| -> Result<Option<u64>, Error> {
        flag_value(&args, name)
            .map(|raw| {
                raw.parse::<u64>().map_err(|_| Error::InvalidValue { name, value: raw.clone() })
            })
            .transpose()
    };
    Ok(Args {
        config: flag_value(&args, "--config").cloned().unwrap_or_else(|| DEFAULT_CONFIG.into()),
        ticks: number("--ticks")?.unwrap_or(60 * 60),
        seed: number("--seed")?,
    })
}

/// Deterministic input for tick `t`: two seconds per pattern step.
fn scripted_input(t: u64) -> (InputState, f32) {
    let phase = (t / 120) % 4;
    let input = InputState {
        forward: phase != 3,
        backward: phase == 3,
        left: phase == 1,
        right: phase == 2,
        jump: t % 240 == 0,
        fire: t % 20 == 0,
    };
    let turn = if phase == 2 { -0.01 } else { 0.01 };
    (input, turn)
}

#[derive(Default)]
struct Tally {
    shots: u32,
    hits: u32,
    damage_taken: i32,
    pickups: u32,
    waves: u32,
}

impl Tally {
    fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Cue(Cue::Shoot) => self.shots += 1,
            GameEvent::EnemyDamaged { .. } => self.hits += 1,
            GameEvent::PlayerDamaged { amount, .. } => self.damage_taken += amount,
            GameEvent::PickupCollected { .. } => self.pickups += 1,
            GameEvent::WaveSpawned { .. } => self.waves += 1,
            _ => {}
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(err) = run() {
        eprintln!("sim_harness: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args = parse_args()?;
    let mut cfg = GameConfig::load_with_env(&args.config)?;
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    let mut game = Game::new(cfg)?;
    log::info!("[sim] seed {}, running {} ticks", game.seed(), args.ticks);

    let mut tally = Tally::default();
    game.start();
    let mut ran = 0;
    for t in 0..args.ticks {
        let (input, turn) = scripted_input(t);
        game.set_input(input);
        game.look(turn, 0.0);
        game.tick(DT);
        for event in game.drain_events() {
            tally.observe(&event);
        }
        ran = t + 1;
        if !game.phase().is_running() {
            break;
        }
    }

    let session = game.session();
    log::info!(
        "[sim] {} ticks ({:.1}s): phase {:?}, score {}, kills {}, health {}, ammo {}",
        ran,
        session.elapsed,
        game.phase(),
        session.score,
        session.kills,
        session.health,
        session.ammo
    );
    log::info!(
        "[sim] shots {}, hits {}, damage taken {}, pickups {}, waves {}",
        tally.shots,
        tally.hits,
        tally.damage_taken,
        tally.pickups,
        tally.waves
    );
    Ok(())
}
