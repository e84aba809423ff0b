//! Maze shooter simulation core.
//!
//! Re-exports:
//! - `core`: collision, maze, player, enemies, bullets, pickups, session, scheduler
//! - `config`: tuning values loaded from TOML
//! - `error`: configuration-time errors

pub mod config;
pub mod core;
pub mod error;

pub use config::GameConfig;
pub use crate::core::game::Game;
pub use error::{Error, Result};
