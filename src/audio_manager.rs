use maze_shooter::core::events::Cue;
use rodio::source::SineWave;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::Arc;
use std::{fs::File, time::Duration};

fn load_bytes(path: &str) -> Option<Vec<u8>> {
    let mut f = File::open(path).ok()?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).ok()?;
    Some(buf)
}

fn load_bytes_any(paths: &[&str]) -> Option<Vec<u8>> {
    paths.iter().find_map(|p| load_bytes(p))
}

/// Sample files tried per cue, first match wins.
fn candidates(cue: Cue) -> &'static [&'static str] {
    match cue {
        Cue::Shoot => &["assets/sfx_shoot.wav", "assets/sounds/shoot.wav"],
        Cue::Hit => &["assets/sfx_hit.wav", "assets/sounds/hit.wav"],
        Cue::Damage => &["assets/sfx_damage.wav", "assets/sounds/damage.wav", "assets/sounds/hurt.wav"],
        Cue::Pickup => &["assets/sfx_pickup.wav", "assets/sounds/pickup.wav"],
        Cue::EmptyGun => &["assets/sfx_empty.wav", "assets/sounds/empty.wav", "assets/sounds/click.wav"],
    }
}

/// Synth fallback when no sample is on disk: (frequency Hz, length ms, gain).
fn tone(cue: Cue) -> (f32, u64, f32) {
    match cue {
        Cue::Shoot => (440.0, 100, 0.25),
        Cue::Hit => (880.0, 80, 0.2),
        Cue::Damage => (150.0, 200, 0.3),
        Cue::Pickup => (660.0, 150, 0.2),
        Cue::EmptyGun => (200.0, 100, 0.1),
    }
}

const CUES: [Cue; 5] = [Cue::Shoot, Cue::Hit, Cue::Damage, Cue::Pickup, Cue::EmptyGun];

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    clips: HashMap<Cue, Arc<Vec<u8>>>,
    volume: f32,
}

impl AudioManager {
    /// `None` when no output device is available; the game runs silent.
    pub fn new() -> Option<Self> {
        let (_stream, handle) = OutputStream::try_default().ok()?;
        Some(Self {
            _stream,
            handle,
            clips: HashMap::new(),
            volume: 0.8,
        })
    }

    pub fn load_sfx_auto(&mut self) {
        for cue in CUES {
            if let Some(bytes) = load_bytes_any(candidates(cue)) {
                self.clips.insert(cue, Arc::new(bytes));
            }
        }
        log::debug!("loaded {} of {} sound samples", self.clips.len(), CUES.len());
    }

    pub fn play(&self, cue: Cue) {
        // own sink per cue so overlapping shots all sound
        let Ok(sink) = Sink::try_new(&self.handle) else {
            return;
        };
        let volume = self.volume.clamp(0.0, 2.5);
        match self.clips.get(&cue) {
            Some(bytes) => match Decoder::new(Cursor::new(bytes.as_ref().clone())) {
                Ok(dec) => sink.append(dec.amplify(volume)),
                Err(err) => {
                    log::warn!("bad sample for {:?}: {err}", cue);
                    return;
                }
            },
            None => {
                let (freq, ms, gain) = tone(cue);
                sink.append(
                    SineWave::new(freq)
                        .take_duration(Duration::from_millis(ms))
                        .amplify(gain * volume),
                );
            }
        }
        sink.detach();
    }
}
