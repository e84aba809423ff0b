//! Game tuning loaded from `data/config/game.toml` with env overrides.
//!
//! Every section is `#[serde(default)]`, so a TOML file only needs the keys
//! it wants to change.

use serde::Deserialize;
use std::path::Path;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Master RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub world: WorldConfig,
    pub player: PlayerConfig,
    pub weapon: WeaponConfig,
    pub enemy: EnemyConfig,
    pub pickup: PickupConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            world: WorldConfig::default(),
            player: PlayerConfig::default(),
            weapon: WeaponConfig::default(),
            enemy: EnemyConfig::default(),
            pickup: PickupConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Optional maze text file; the built-in layout is used when absent.
    pub layout_path: Option<String>,
    pub cell_size: f32,
    pub wall_height: f32,
    /// Hard clamp on both horizontal axes.
    pub map_half_extent: f32,
    /// Largest dt a single frame may integrate.
    pub max_frame_dt: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            layout_path: None,
            cell_size: 2.0,
            wall_height: 3.0,
            map_half_extent: 14.0,
            max_frame_dt: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub radius: f32,
    pub move_speed: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    pub jump_impulse: f32,
    pub eye_height: f32,
    pub ceiling_height: f32,
    /// Offsets below the eye sampled against walls.
    pub collision_samples: [f32; 3],
    pub max_health: i32,
    pub start_ammo: u32,
    pub max_ammo: u32,
    pub look_sensitivity: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 0.5,
            move_speed: 5.0,
            gravity: 9.8,
            terminal_velocity: 10.0,
            jump_impulse: 150.0,
            eye_height: 1.6,
            ceiling_height: 3.0,
            collision_samples: [-1.2, -0.6, 0.0],
            max_health: 100,
            start_ammo: 30,
            max_ammo: 30,
            look_sensitivity: 0.0025,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FireMode {
    /// Spawn a travelling player bullet.
    Projectile,
    /// Instant ray from the eye, stopped by walls.
    Hitscan,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    pub fire_mode: FireMode,
    pub cooldown: f32,
    pub bullet_speed: f32,
    pub bullet_damage: i32,
    pub hitscan_damage: i32,
    pub hitscan_range: f32,
    pub bullet_radius: f32,
    pub bullet_lifetime: f32,
    /// Distance from a body axis that counts as a bullet hit.
    pub hit_radius: f32,
    pub flash_duration: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            fire_mode: FireMode::Projectile,
            cooldown: 0.25,
            bullet_speed: 30.0,
            bullet_damage: 20,
            hitscan_damage: 20,
            hitscan_range: 100.0,
            bullet_radius: 0.05,
            bullet_lifetime: 3.0,
            hit_radius: 0.5,
            flash_duration: 0.1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    /// Wave offsets on the (x, z) plane.
    pub spawn_offsets: Vec<[f32; 2]>,
    pub body_y: f32,
    pub radius: f32,
    pub half_height: f32,
    pub half_width: f32,
    pub eye_height: f32,
    pub max_health: i32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub melee_range: f32,
    pub melee_damage: i32,
    pub melee_cooldown: f32,
    /// Inside this horizontal distance an enemy stops advancing.
    pub hold_distance: f32,
    pub ranged_ammo: u32,
    pub sight_delay: f32,
    pub fire_cooldown: f32,
    pub bullet_speed: f32,
    pub bullet_damage: i32,
    pub accuracy_base: f32,
    pub accuracy_per_unit: f32,
    pub history_len: usize,
    pub stuck_min_samples: usize,
    pub stuck_threshold: f32,
    pub stuck_time: f32,
    pub teleport_radius: f32,
    pub teleport_attempts: u32,
    pub escape_hold: f32,
    pub wall_influence: f32,
    pub score_per_kill: u32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            spawn_offsets: vec![
                [0.0, 0.0],
                [4.0, -4.0],
                [-4.0, 4.0],
                [8.0, -8.0],
                [-8.0, 8.0],
                [0.0, -8.0],
                [8.0, 0.0],
                [-8.0, 0.0],
                [0.0, 8.0],
            ],
            body_y: 0.9,
            radius: 0.4,
            half_height: 0.9,
            half_width: 0.4,
            eye_height: 1.5,
            max_health: 100,
            // 0.02..0.04 per 60 Hz tick
            speed_min: 1.2,
            speed_max: 2.4,
            melee_range: 1.5,
            melee_damage: 10,
            melee_cooldown: 1.0,
            hold_distance: 0.75,
            ranged_ammo: 5,
            sight_delay: 1.0,
            fire_cooldown: 1.5,
            bullet_speed: 12.0,
            bullet_damage: 5,
            accuracy_base: 0.1,
            accuracy_per_unit: 0.02,
            history_len: 10,
            stuck_min_samples: 5,
            stuck_threshold: 0.02,
            stuck_time: 1.0,
            teleport_radius: 2.0,
            teleport_attempts: 8,
            escape_hold: 1.0,
            wall_influence: 4.0,
            score_per_kill: 100,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PickupConfig {
    pub positions: Vec<[f32; 2]>,
    pub base_y: f32,
    pub ammo_amount: u32,
    pub collect_distance: f32,
    pub respawn_delay: f32,
    pub respawn_half_extent: f32,
    pub rotation_speed_min: f32,
    pub rotation_speed_max: f32,
    pub bounce_height_min: f32,
    pub bounce_height_max: f32,
    /// Angular rate of the bounce, rad/s.
    pub bounce_rate: f32,
}

impl Default for PickupConfig {
    fn default() -> Self {
        Self {
            positions: vec![
                [2.0, 2.0],
                [-2.0, -2.0],
                [6.0, -6.0],
                [-6.0, 6.0],
                [10.0, -10.0],
                [-10.0, 10.0],
            ],
            base_y: 0.5,
            ammo_amount: 10,
            collect_distance: 1.5,
            respawn_delay: 10.0,
            respawn_half_extent: 10.0,
            rotation_speed_min: 1.2,
            rotation_speed_max: 2.4,
            bounce_height_min: 0.2,
            bounce_height_max: 0.4,
            bounce_rate: std::f32::consts::PI,
        }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: GameConfig = toml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = Self::from_toml_str(&text)?;
        log::info!("loaded game config from {}", path.display());
        Ok(cfg)
    }

    /// Loads `path` when it exists (defaults otherwise) and applies
    /// `MAZE_SHOOTER_SEED`.
    pub fn load_with_env(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut cfg = if path.is_file() {
            Self::load(path)?
        } else {
            Self::default()
        };
        if let Ok(raw) = std::env::var("MAZE_SHOOTER_SEED") {
            let seed = raw.trim().parse::<u64>().map_err(|_| Error::InvalidValue {
                name: "MAZE_SHOOTER_SEED",
                value: raw.clone(),
            })?;
            cfg.seed = Some(seed);
        }
        Ok(cfg)
    }

    /// Rejects values the simulation cannot sample from or would divide by.
    pub fn validate(&self) -> Result<()> {
        if self.player.max_ammo == 0 {
            return Err(Error::InvalidValue {
                name: "player.max_ammo",
                value: "0".into(),
            });
        }
        if self.enemy.spawn_offsets.is_empty() {
            return Err(Error::InvalidValue {
                name: "enemy.spawn_offsets",
                value: "[]".into(),
            });
        }
        if !(self.world.cell_size > 0.0) {
            return Err(Error::InvalidValue {
                name: "world.cell_size",
                value: self.world.cell_size.to_string(),
            });
        }
        let (enemy, pickup) = (&self.enemy, &self.pickup);
        range("enemy.speed_min", enemy.speed_min, enemy.speed_max)?;
        non_negative("enemy.speed_min", enemy.speed_min)?;
        non_negative("enemy.radius", enemy.radius)?;
        non_negative("enemy.hold_distance", enemy.hold_distance)?;
        non_negative("enemy.accuracy_base", enemy.accuracy_base)?;
        non_negative("enemy.accuracy_per_unit", enemy.accuracy_per_unit)?;
        non_negative("enemy.teleport_radius", enemy.teleport_radius)?;
        non_negative("enemy.wall_influence", enemy.wall_influence)?;
        range("pickup.rotation_speed_min", pickup.rotation_speed_min, pickup.rotation_speed_max)?;
        range("pickup.bounce_height_min", pickup.bounce_height_min, pickup.bounce_height_max)?;
        non_negative("pickup.respawn_half_extent", pickup.respawn_half_extent)?;
        non_negative("pickup.collect_distance", pickup.collect_distance)?;
        non_negative("player.radius", self.player.radius)?;
        non_negative("weapon.bullet_radius", self.weapon.bullet_radius)?;
        non_negative("weapon.hit_radius", self.weapon.hit_radius)?;
        Ok(())
    }
}

/// `min..=max` must be a finite, non-empty range.
fn range(name: &'static str, min: f32, max: f32) -> Result<()> {
    if min.is_finite() && max.is_finite() && min <= max {
        Ok(())
    } else {
        Err(Error::InvalidValue { name, value: format!("{min}..={max}") })
    }
}

fn non_negative(name: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidValue { name, value: value.to_string() })
    }
}
