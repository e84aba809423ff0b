//! Raylib presentation of a [`FrameSnapshot`].
//!
//! Exposes:
//! - `scene`: 3D pass (floor, walls, enemies, pickups, bullets, trails)
//! - `hud`: 2D overlay (counters, crosshair, flashes, phase banners)
//! - `Trails`: short-lived hitscan tracers fed from game events

pub mod hud;
pub mod scene;

use glam::Vec3;
use maze_shooter::core::events::GameEvent;

/// Seconds a hitscan tracer stays on screen.
const TRAIL_TTL: f32 = 0.08;

#[derive(Default)]
pub struct Trails {
    live: Vec<(Vec3, Vec3, f32)>,
}

impl Trails {
    pub fn observe(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BulletTrail { start, end } => self.live.push((*start, *end, TRAIL_TTL)),
            GameEvent::Restarted => self.live.clear(),
            _ => {}
        }
    }

    pub fn age(&mut self, dt: f32) {
        for trail in &mut self.live {
            trail.2 -= dt;
        }
        self.live.retain(|t| t.2 > 0.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.live.iter().map(|(a, b, _)| (*a, *b))
    }
}
