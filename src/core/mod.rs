//! Simulation core (data, AI, physics, scheduling).
//!
//! Re-exports:
//! - `collision`: point-vs-box test and ray helpers
//! - `maze`: layout parsing, wall volumes, spawn search
//! - `player`: kinematic controller
//! - `input`: held-key flags and triggers
//! - `enemy`: pursuit, stuck recovery, attacks
//! - `projectile`: bullets and hitscan
//! - `pickup`: ammo pickups
//! - `session`: phase machine and counters
//! - `timers`: deferred one-shot actions
//! - `events`: outbound events and frame snapshot
//! - `game`: frame scheduler

pub mod collision;
pub mod enemy;
pub mod events;
pub mod game;
pub mod input;
pub mod maze;
pub mod pickup;
pub mod player;
pub mod projectile;
pub mod session;
pub mod timers;
