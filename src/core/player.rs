//! Player data and kinematic controller.
//!
//! `pos` is the camera (eye) position. Horizontal velocity is instant and
//! never carried between ticks; vertical velocity integrates gravity between
//! the eye-height floor and the ceiling cap.
use glam::{Vec3, vec3};

use crate::config::PlayerConfig;
use crate::core::collision::test_collision;
use crate::core::input::InputState;
use crate::core::maze::Maze;

const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;

#[derive(Clone, Debug)]
pub struct Player {
    pub pos: Vec3,
    pub vel: Vec3,
    pub yaw: f32,
    pub pitch: f32,
    pub health: i32,
    pub ammo: u32,
    pub max_ammo: u32,
    pub grounded: bool,
    /// Simulation time of the last accepted shot.
    pub last_fire: f32,
}

impl Player {
    pub fn new(spawn: Vec3, cfg: &PlayerConfig) -> Self {
        Self {
            pos: spawn,
            vel: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            health: cfg.max_health,
            ammo: cfg.start_ammo.min(cfg.max_ammo),
            max_ammo: cfg.max_ammo,
            grounded: true,
            last_fire: f32::NEG_INFINITY,
        }
    }

    /// Horizontal facing. Yaw 0 looks down -Z.
    pub fn forward(&self) -> Vec3 {
        vec3(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    pub fn right(&self) -> Vec3 {
        vec3(self.yaw.cos(), 0.0, -self.yaw.sin())
    }

    /// Unit view direction including pitch.
    pub fn look_dir(&self) -> Vec3 {
        let (sp, cp) = self.pitch.sin_cos();
        vec3(-self.yaw.sin() * cp, sp, -self.yaw.cos() * cp)
    }

    pub fn look(&mut self, d_yaw: f32, d_pitch: f32) {
        self.yaw = (self.yaw + d_yaw).rem_euclid(std::f32::consts::TAU);
        self.pitch = (self.pitch + d_pitch).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Resting on the floor with no vertical motion.
    pub fn can_jump(&self) -> bool {
        self.grounded
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Returns the remaining health, never below zero.
    pub fn apply_damage(&mut self, amount: i32) -> i32 {
        self.health = (self.health - amount).max(0);
        self.health
    }

    /// Adds ammo up to the cap; returns how much was actually added.
    pub fn add_ammo(&mut self, amount: u32) -> u32 {
        let before = self.ammo;
        self.ammo = (self.ammo + amount).min(self.max_ammo);
        self.ammo - before
    }

    pub fn take_ammo(&mut self) -> bool {
        if self.ammo == 0 {
            return false;
        }
        self.ammo -= 1;
        true
    }

    pub fn update(&mut self, input: &InputState, dt: f32, maze: &Maze, cfg: &PlayerConfig) {
        // horizontal: instant velocity, consumed this tick
        let (ax, az) = input.move_axis();
        let wish = (self.right() * ax + self.forward() * az).normalize_or_zero();
        self.vel.x = wish.x * cfg.move_speed;
        self.vel.z = wish.z * cfg.move_speed;
        self.pos.x += self.vel.x * dt;
        self.pos.z += self.vel.z * dt;
        self.vel.x = 0.0;
        self.vel.z = 0.0;

        // vertical
        self.vel.y = (self.vel.y - cfg.gravity * dt).max(-cfg.terminal_velocity);
        if input.jump && self.grounded {
            self.vel.y = cfg.jump_impulse;
            self.grounded = false;
        }
        self.pos.y += self.vel.y * dt;
        if self.pos.y >= cfg.ceiling_height {
            self.pos.y = cfg.ceiling_height;
            if self.vel.y > 0.0 {
                self.vel.y = 0.0;
            }
        }
        if self.pos.y <= cfg.eye_height {
            self.pos.y = cfg.eye_height;
            if self.vel.y < 0.0 {
                self.vel.y = 0.0;
            }
        }
        self.grounded = self.pos.y == cfg.eye_height && self.vel.y == 0.0;

        // walls: sum every push-out, apply once
        let mut push = Vec3::ZERO;
        for offset in cfg.collision_samples {
            let sample = self.pos + Vec3::Y * offset;
            for wall in maze.walls() {
                if let Some(p) = test_collision(sample, cfg.radius, &wall.aabb).push_out() {
                    push += p;
                }
            }
        }
        if push != Vec3::ZERO {
            log::trace!("player wall push {:?}", push);
        }
        self.pos.x += push.x;
        self.pos.z += push.z;

        self.pos = maze.clamp_to_bounds(self.pos);
    }
}
