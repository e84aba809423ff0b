//! Outbound boundary: events for audio/VFX/HUD and the per-frame snapshot
//! a renderer draws from.
use glam::Vec3;

use crate::core::enemy::{EnemyId, HealthBar};
use crate::core::pickup::PickupId;
use crate::core::projectile::BulletSource;
use crate::core::session::Phase;

/// Fire-and-forget sound/effect cues.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Shoot,
    Hit,
    Damage,
    Pickup,
    EmptyGun,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GameEvent {
    Cue(Cue),
    PhaseChanged(Phase),
    Restarted,
    EnemyDamaged { id: EnemyId, health: i32 },
    EnemyKilled { id: EnemyId, score: u32, kills: u32 },
    PlayerDamaged { amount: i32, health: i32 },
    PickupCollected { id: PickupId, added: u32, ammo: u32 },
    PickupSpawned { id: PickupId, pos: Vec3 },
    WaveSpawned { count: usize },
    BulletTrail { start: Vec3, end: Vec3 },
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnemyView {
    pub id: EnemyId,
    pub pos: Vec3,
    pub yaw: f32,
    pub health_bar: HealthBar,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PickupView {
    pub id: PickupId,
    pub pos: Vec3,
    pub rotation: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BulletView {
    pub pos: Vec3,
    pub dir: Vec3,
    pub source: BulletSource,
}

/// Everything dynamic a renderer needs for one frame. Walls are static and
/// read from the maze.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameSnapshot {
    pub phase: Phase,
    pub player_pos: Vec3,
    pub player_yaw: f32,
    pub player_pitch: f32,
    pub look_dir: Vec3,
    pub health: i32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub score: u32,
    pub kills: u32,
    pub elapsed: f32,
    pub muzzle_flash: bool,
    pub damage_flash: bool,
    pub enemies: Vec<EnemyView>,
    pub pickups: Vec<PickupView>,
    pub bullets: Vec<BulletView>,
}
