//! Ammo pickups: spinning, bobbing boxes collected by walking into them.
use glam::{Vec3, vec3};
use rand::Rng;
use rand::rngs::StdRng;
use std::f32::consts::TAU;

use crate::config::PickupConfig;
use crate::core::maze::Maze;

/// Clearance used when placing a respawned pickup.
const PLACEMENT_RADIUS: f32 = 0.5;
const PLACEMENT_ATTEMPTS: u32 = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PickupId(pub u32);

#[derive(Clone, Debug)]
pub struct AmmoPickup {
    pub id: PickupId,
    pub pos: Vec3,
    /// Spin about the vertical axis, radians.
    pub rotation: f32,
    pub rotation_speed: f32,
    pub bounce_height: f32,
    pub bounce_phase: f32,
    pub ammo: u32,
}

impl AmmoPickup {
    pub fn new(id: PickupId, at: [f32; 2], cfg: &PickupConfig, rng: &mut StdRng) -> Self {
        Self {
            id,
            pos: vec3(at[0], cfg.base_y, at[1]),
            rotation: 0.0,
            rotation_speed: rng.gen_range(cfg.rotation_speed_min..=cfg.rotation_speed_max),
            bounce_height: rng.gen_range(cfg.bounce_height_min..=cfg.bounce_height_max),
            bounce_phase: rng.gen_range(0.0..TAU),
            ammo: cfg.ammo_amount,
        }
    }

    /// `t` is session time in seconds.
    pub fn animate(&mut self, t: f32, dt: f32, cfg: &PickupConfig) {
        self.rotation = (self.rotation + self.rotation_speed * dt).rem_euclid(TAU);
        self.pos.y = cfg.base_y + (t * cfg.bounce_rate + self.bounce_phase).sin() * self.bounce_height;
    }

    pub fn in_reach(&self, player_eye: Vec3, cfg: &PickupConfig) -> bool {
        self.pos.distance(player_eye) < cfg.collect_distance
    }
}

/// Builds the initial set at the configured positions.
pub fn spawn_initial(cfg: &PickupConfig, next_id: &mut u32, rng: &mut StdRng) -> Vec<AmmoPickup> {
    cfg.positions
        .iter()
        .map(|at| {
            let id = PickupId(*next_id);
            *next_id += 1;
            AmmoPickup::new(id, *at, cfg, rng)
        })
        .collect()
}

/// Random spot inside the respawn square that does not touch a wall. Falls
/// back to the last sample when every attempt lands in geometry.
pub fn random_position(cfg: &PickupConfig, maze: &Maze, rng: &mut StdRng) -> [f32; 2] {
    let h = cfg.respawn_half_extent;
    let mut at = [0.0, 0.0];
    for _ in 0..PLACEMENT_ATTEMPTS {
        at = [rng.gen_range(-h..=h), rng.gen_range(-h..=h)];
        if !maze.collides(vec3(at[0], cfg.base_y, at[1]), PLACEMENT_RADIUS) {
            return at;
        }
    }
    log::warn!("no wall-free pickup spot after {PLACEMENT_ATTEMPTS} tries; using {at:?}");
    at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::core::maze::MazeLayout;
    use rand::SeedableRng;

    #[test]
    fn initial_set_matches_table_and_seed() {
        let cfg = PickupConfig::default();
        let mut next = 0;
        let a = spawn_initial(&cfg, &mut next, &mut StdRng::seed_from_u64(5));
        let mut next_b = 0;
        let b = spawn_initial(&cfg, &mut next_b, &mut StdRng::seed_from_u64(5));
        assert_eq!(a.len(), 6);
        assert_eq!(next, 6);
        for ((p, q), at) in a.iter().zip(&b).zip(&cfg.positions) {
            assert_eq!(p.pos, vec3(at[0], 0.5, at[1]));
            assert_eq!(p.ammo, 10);
            assert_eq!(p.bounce_phase, q.bounce_phase);
            assert!(p.bounce_height >= 0.2 && p.bounce_height <= 0.4);
        }
    }

    #[test]
    fn bobs_around_base_height() {
        let cfg = PickupConfig::default();
        let mut p = AmmoPickup::new(PickupId(0), [0.0, 0.0], &cfg, &mut StdRng::seed_from_u64(1));
        let mut t = 0.0;
        for _ in 0..120 {
            t += 1.0 / 60.0;
            p.animate(t, 1.0 / 60.0, &cfg);
            assert!((p.pos.y - cfg.base_y).abs() <= p.bounce_height + 1e-5);
            assert!(p.rotation >= 0.0 && p.rotation < TAU);
        }
    }

    #[test]
    fn reach_is_strictly_inside_collect_distance() {
        let cfg = PickupConfig::default();
        let p = AmmoPickup::new(PickupId(0), [0.0, 0.0], &cfg, &mut StdRng::seed_from_u64(1));
        assert!(p.in_reach(vec3(1.4, 0.5, 0.0), &cfg));
        assert!(!p.in_reach(vec3(1.5, 0.5, 0.0), &cfg));
    }

    #[test]
    fn respawn_spot_avoids_walls() {
        let cfg = PickupConfig::default();
        let maze = Maze::build(MazeLayout::builtin(), &WorldConfig::default(), 1.6);
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..20 {
            let at = random_position(&cfg, &maze, &mut rng);
            assert!(at[0].abs() <= 10.0 && at[1].abs() <= 10.0);
            assert!(!maze.collides(vec3(at[0], cfg.base_y, at[1]), PLACEMENT_RADIUS));
        }
    }
}
