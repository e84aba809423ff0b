//! Enemy AI: pursuit with wall avoidance, stuck recovery, ranged and melee
//! attacks.
//!
//! Every enemy owns a seeded random stream, so a single enemy's recovery
//! behavior can be replayed from its seed.
use glam::{Vec3, vec3};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::collections::VecDeque;
use std::f32::consts::{FRAC_1_SQRT_2, TAU};

use crate::config::EnemyConfig;
use crate::core::maze::Maze;

/// Stable handle into the live enemy set. Never reused within a session.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnemyId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveState {
    Pursuing,
    Stuck,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HealthBarColor {
    Green,
    Amber,
    Red,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HealthBar {
    /// Bar scale, never below 0.01 so it stays visible.
    pub width: f32,
    pub color: HealthBarColor,
}

impl HealthBar {
    pub fn from_fraction(fraction: f32) -> Self {
        let color = if fraction > 0.6 {
            HealthBarColor::Green
        } else if fraction > 0.3 {
            HealthBarColor::Amber
        } else {
            HealthBarColor::Red
        };
        Self { width: fraction.max(0.01), color }
    }
}

/// Bullet the scheduler should spawn on behalf of an enemy.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShotRequest {
    pub origin: Vec3,
    pub dir: Vec3,
    pub speed: f32,
    pub damage: i32,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct EnemyOutcome {
    pub melee_damage: Option<i32>,
    pub shot: Option<ShotRequest>,
    pub teleported: bool,
}

/// Read-only view of the world an enemy needs for one update.
pub struct EnemyContext<'a> {
    pub maze: &'a Maze,
    pub player_eye: Vec3,
    pub now: f32,
    pub dt: f32,
    pub cfg: &'a EnemyConfig,
}

/// Movement history is sampled on a fixed sim-time cadence so the stuck
/// threshold does not depend on the frame rate.
const STUCK_SAMPLE_INTERVAL: f32 = 1.0 / 60.0;

/// Extra clearance a spawn spot needs beyond the body radius.
const SPAWN_MARGIN: f32 = 0.1;
/// Compass rings searched around an embedded spawn, `SPAWN_RING_STEP` apart.
const SPAWN_RINGS: u32 = 16;
const SPAWN_RING_STEP: f32 = 0.25;

const COMPASS: [Vec3; 8] = [
    vec3(1.0, 0.0, 0.0),
    vec3(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    vec3(0.0, 0.0, 1.0),
    vec3(-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    vec3(-1.0, 0.0, 0.0),
    vec3(-FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
    vec3(0.0, 0.0, -1.0),
    vec3(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
];

#[inline]
fn flat(v: Vec3) -> Vec3 {
    vec3(v.x, 0.0, v.z)
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Vec3,
    pub yaw: f32,
    pub health: i32,
    pub max_health: i32,
    /// World units per second.
    pub speed: f32,
    pub ranged_ammo: u32,
    state: MoveState,
    last_melee: f32,
    last_shot: f32,
    history: VecDeque<Vec3>,
    sample_clock: f32,
    stuck_timer: f32,
    escape_dir: Vec3,
    escape_timer: f32,
    visible: bool,
    visible_time: f32,
    rng: StdRng,
}

impl Enemy {
    pub fn spawn(id: EnemyId, offset: [f32; 2], cfg: &EnemyConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let speed = rng.gen_range(cfg.speed_min..=cfg.speed_max);
        Self {
            id,
            pos: vec3(offset[0], cfg.body_y, offset[1]),
            yaw: 0.0,
            health: cfg.max_health,
            max_health: cfg.max_health,
            speed,
            ranged_ammo: cfg.ranged_ammo,
            state: MoveState::Pursuing,
            last_melee: f32::NEG_INFINITY,
            last_shot: f32::NEG_INFINITY,
            history: VecDeque::with_capacity(cfg.history_len),
            sample_clock: 0.0,
            stuck_timer: 0.0,
            escape_dir: Vec3::ZERO,
            escape_timer: 0.0,
            visible: false,
            visible_time: 0.0,
            rng,
        }
    }

    pub fn state(&self) -> MoveState {
        self.state
    }

    pub fn is_stuck(&self) -> bool {
        self.state == MoveState::Stuck
    }

    pub fn sees_player(&self) -> bool {
        self.visible
    }

    pub fn visible_time(&self) -> f32 {
        self.visible_time
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    pub fn health_fraction(&self) -> f32 {
        self.health as f32 / self.max_health as f32
    }

    pub fn health_bar(&self) -> HealthBar {
        HealthBar::from_fraction(self.health_fraction())
    }

    /// Returns true when this hit killed the enemy.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        self.health = (self.health - amount).max(0);
        self.is_dead()
    }

    pub fn eye(&self, cfg: &EnemyConfig) -> Vec3 {
        vec3(self.pos.x, cfg.eye_height, self.pos.z)
    }

    /// Feet-to-top segment used for bullet hits.
    pub fn body_axis(&self, cfg: &EnemyConfig) -> (Vec3, Vec3) {
        (
            vec3(self.pos.x, self.pos.y - cfg.half_height, self.pos.z),
            vec3(self.pos.x, self.pos.y + cfg.half_height, self.pos.z),
        )
    }

    pub fn update(&mut self, ctx: &EnemyContext) -> EnemyOutcome {
        let cfg = ctx.cfg;
        let mut outcome = EnemyOutcome::default();

        let to_player = flat(ctx.player_eye - self.pos);
        if to_player.length_squared() > 1e-8 {
            self.yaw = (-to_player.x).atan2(-to_player.z);
        }

        // line of sight
        let eye = self.eye(cfg);
        let visible = ctx.maze.line_of_sight(eye, ctx.player_eye);
        if visible {
            if !self.visible {
                self.visible_time = 0.0;
            }
            self.visible_time += ctx.dt;
        } else {
            self.visible_time = 0.0;
        }
        self.visible = visible;

        // movement
        let engaged = to_player.length() < cfg.hold_distance;
        if !engaged {
            let dir = if self.escape_timer > 0.0 {
                self.escape_timer -= ctx.dt;
                self.escape_dir
            } else {
                self.pursuit_direction(ctx, visible)
            };
            self.try_move(dir * self.speed * ctx.dt, ctx.maze, cfg);
            outcome.teleported = self.track_stuck(ctx);
        } else {
            self.history.clear();
            self.stuck_timer = 0.0;
            self.state = MoveState::Pursuing;
        }

        // melee
        if self.pos.distance(ctx.player_eye) < cfg.melee_range
            && ctx.now - self.last_melee >= cfg.melee_cooldown
        {
            self.last_melee = ctx.now;
            outcome.melee_damage = Some(cfg.melee_damage);
        }

        // ranged
        if visible
            && self.visible_time >= cfg.sight_delay
            && self.ranged_ammo > 0
            && ctx.now - self.last_shot >= cfg.fire_cooldown
        {
            let eye = self.eye(cfg);
            let dist = eye.distance(ctx.player_eye);
            let spread = cfg.accuracy_base + dist * cfg.accuracy_per_unit;
            let jitter = vec3(
                self.rng.gen_range(-spread..=spread),
                self.rng.gen_range(-spread..=spread),
                self.rng.gen_range(-spread..=spread),
            );
            let dir = (ctx.player_eye + jitter - eye).normalize_or_zero();
            if dir != Vec3::ZERO {
                self.ranged_ammo -= 1;
                self.last_shot = ctx.now;
                outcome.shot = Some(ShotRequest {
                    origin: eye,
                    dir,
                    speed: cfg.bullet_speed,
                    damage: cfg.bullet_damage,
                });
            }
        }

        outcome
    }

    /// Straight at the player when visible, otherwise attraction blended
    /// with repulsion from walls inside the influence radius.
    fn pursuit_direction(&self, ctx: &EnemyContext, visible: bool) -> Vec3 {
        let attraction = flat(ctx.player_eye - self.pos).normalize_or_zero();
        if visible {
            return attraction;
        }
        let mut repulsion = Vec3::ZERO;
        for wall in ctx.maze.walls() {
            let away = flat(self.pos - wall.aabb.center());
            let d = away.length();
            if d > 1e-4 && d < ctx.cfg.wall_influence {
                repulsion += away / d * (1.0 / d);
            }
        }
        let blend = (attraction + repulsion).normalize_or_zero();
        if blend == Vec3::ZERO { attraction } else { blend }
    }

    fn is_free(&self, p: Vec3, maze: &Maze, cfg: &EnemyConfig) -> bool {
        maze.in_bounds(p) && !maze.collides(p, cfg.radius)
    }

    /// Moves a freshly spawned enemy out of wall geometry to the nearest
    /// compass point with some clearance. Returns false when nothing within
    /// reach is free; stuck recovery takes over from there.
    pub fn settle(&mut self, maze: &Maze, cfg: &EnemyConfig) -> bool {
        if self.is_free(self.pos, maze, cfg) {
            return true;
        }
        let roomy = |p: Vec3| maze.in_bounds(p) && !maze.collides(p, cfg.radius + SPAWN_MARGIN);
        for ring in 1..=SPAWN_RINGS {
            let r = ring as f32 * SPAWN_RING_STEP;
            if let Some(candidate) = COMPASS.iter().map(|dir| self.pos + *dir * r).find(|p| roomy(*p)) {
                log::debug!("enemy {:?} spawned in a wall; moved {:?} -> {:?}", self.id, self.pos, candidate);
                self.pos = candidate;
                return true;
            }
        }
        log::warn!("enemy {:?} has no free spot near {:?}", self.id, self.pos);
        false
    }

    /// Moves by `step` or the best-aligned free compass slide. Returns false
    /// when every option is blocked; the enemy stays put this tick.
    fn try_move(&mut self, step: Vec3, maze: &Maze, cfg: &EnemyConfig) -> bool {
        let len = step.length();
        if len <= 1e-6 {
            return false;
        }
        let candidate = self.pos + step;
        if self.is_free(candidate, maze, cfg) {
            self.pos = candidate;
            return true;
        }
        let wish = step / len;
        let mut slides = COMPASS;
        slides.sort_by(|a, b| b.dot(wish).total_cmp(&a.dot(wish)));
        for dir in slides {
            let candidate = self.pos + dir * len;
            if self.is_free(candidate, maze, cfg) {
                self.pos = candidate;
                return true;
            }
        }
        false
    }

    /// Rolling movement check. Returns true when recovery teleported us.
    fn track_stuck(&mut self, ctx: &EnemyContext) -> bool {
        let cfg = ctx.cfg;
        self.sample_clock += ctx.dt;
        if self.sample_clock >= STUCK_SAMPLE_INTERVAL {
            self.sample_clock = 0.0;
            if self.history.len() == cfg.history_len.max(1) {
                self.history.pop_front();
            }
            self.history.push_back(self.pos);
        }
        if self.history.len() < cfg.stuck_min_samples.max(2) {
            return false;
        }
        let moved: f32 = self
            .history
            .iter()
            .zip(self.history.iter().skip(1))
            .map(|(a, b)| a.distance(*b))
            .sum();
        let avg = moved / (self.history.len() - 1) as f32;
        if avg >= cfg.stuck_threshold {
            self.stuck_timer = 0.0;
            self.state = MoveState::Pursuing;
            return false;
        }
        self.stuck_timer += ctx.dt;
        if self.stuck_timer <= cfg.stuck_time {
            return false;
        }
        self.state = MoveState::Stuck;
        self.stuck_timer = 0.0;
        self.recover(ctx.maze, cfg)
    }

    fn recover(&mut self, maze: &Maze, cfg: &EnemyConfig) -> bool {
        let min_r = cfg.teleport_radius.min(0.5);
        for _ in 0..cfg.teleport_attempts {
            let angle = self.rng.gen_range(0.0..TAU);
            let r = self.rng.gen_range(min_r..=cfg.teleport_radius);
            let candidate = self.pos + vec3(angle.cos() * r, 0.0, angle.sin() * r);
            if self.is_free(candidate, maze, cfg) {
                log::debug!("enemy {:?} stuck; teleported {:?} -> {:?}", self.id, self.pos, candidate);
                self.pos = candidate;
                self.history.clear();
                self.state = MoveState::Pursuing;
                self.escape_timer = 0.0;
                return true;
            }
        }

        let mut repulsion = Vec3::ZERO;
        for wall in maze.walls() {
            let away = flat(self.pos - wall.aabb.center());
            let d_sq = away.length_squared();
            if d_sq > 1e-8 {
                repulsion += away.normalize() / d_sq;
            }
        }
        self.escape_dir = if repulsion.length_squared() > 1e-12 {
            repulsion.normalize()
        } else {
            let angle = self.rng.gen_range(0.0..TAU);
            vec3(angle.cos(), 0.0, angle.sin())
        };
        self.escape_timer = cfg.escape_hold;
        log::debug!("enemy {:?} stuck; escaping along {:?}", self.id, self.escape_dir);
        false
    }
}

/// Builds one wave at the configured offsets, each settled clear of walls.
/// Each enemy's stream is seeded from `rng`.
pub fn spawn_wave(cfg: &EnemyConfig, maze: &Maze, next_id: &mut u32, rng: &mut StdRng) -> Vec<Enemy> {
    cfg.spawn_offsets
        .iter()
        .map(|offset| {
            let id = EnemyId(*next_id);
            *next_id += 1;
            let mut enemy = Enemy::spawn(id, *offset, cfg, rng.next_u64());
            enemy.settle(maze, cfg);
            enemy
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldConfig;
    use crate::core::maze::MazeLayout;

    const DT: f32 = 1.0 / 60.0;

    fn open_maze() -> Maze {
        let row = "0".repeat(15);
        let text = vec![row; 15].join("\n");
        Maze::build(MazeLayout::parse(&text).unwrap(), &WorldConfig::default(), 1.6)
    }

    fn step(enemy: &mut Enemy, maze: &Maze, player_eye: Vec3, now: f32, cfg: &EnemyConfig) -> EnemyOutcome {
        enemy.update(&EnemyContext { maze, player_eye, now, dt: DT, cfg })
    }

    #[test]
    fn health_bar_thresholds() {
        let cfg = EnemyConfig::default();
        let mut e = Enemy::spawn(EnemyId(0), [0.0, 0.0], &cfg, 1);
        for _ in 0..3 {
            assert!(!e.take_damage(20));
        }
        assert_eq!(e.health, 40);
        assert_eq!(e.health_bar(), HealthBar { width: 0.4, color: HealthBarColor::Amber });
        assert!(!e.take_damage(20));
        assert_eq!(e.health_bar().color, HealthBarColor::Red);
        assert!(e.take_damage(20));
        assert_eq!(e.health, 0);
        assert_eq!(e.health_bar().width, 0.01);
    }

    #[test]
    fn speed_is_seeded_and_in_range() {
        let cfg = EnemyConfig::default();
        let a = Enemy::spawn(EnemyId(0), [0.0, 0.0], &cfg, 42);
        let b = Enemy::spawn(EnemyId(1), [0.0, 0.0], &cfg, 42);
        assert_eq!(a.speed, b.speed);
        assert!(a.speed >= cfg.speed_min && a.speed <= cfg.speed_max);
    }

    #[test]
    fn wave_uses_fixed_offsets() {
        let cfg = EnemyConfig::default();
        let mut next = 5;
        let mut rng = StdRng::seed_from_u64(3);
        let wave = spawn_wave(&cfg, &open_maze(), &mut next, &mut rng);
        assert_eq!(wave.len(), 9);
        assert_eq!(next, 14);
        for (e, offset) in wave.iter().zip(&cfg.spawn_offsets) {
            assert_eq!(e.pos, vec3(offset[0], cfg.body_y, offset[1]));
        }
    }

    #[test]
    fn builtin_wave_settles_clear_of_walls() {
        let cfg = EnemyConfig::default();
        let maze = Maze::build(MazeLayout::builtin(), &WorldConfig::default(), 1.6);
        let mut next = 0;
        let wave = spawn_wave(&cfg, &maze, &mut next, &mut StdRng::seed_from_u64(1));
        assert_eq!(wave.len(), 9);
        for (e, offset) in wave.iter().zip(&cfg.spawn_offsets) {
            assert!(!maze.collides(e.pos, cfg.radius), "{:?} embedded at {:?}", e.id, e.pos);
            let nominal = vec3(offset[0], cfg.body_y, offset[1]);
            assert!(e.pos.distance(nominal) <= SPAWN_RINGS as f32 * SPAWN_RING_STEP);
            assert_eq!(e.pos.y, cfg.body_y);
        }
    }

    #[test]
    fn blocked_step_slides_along_the_wall() {
        let cfg = EnemyConfig::default();
        // single wall spanning x, z in [-2, 0]
        let maze = Maze::build(MazeLayout::parse("000\n010\n000").unwrap(), &WorldConfig::default(), 1.6);
        let mut e = Enemy::spawn(EnemyId(0), [0.6, -1.0], &cfg, 2);
        assert!(!maze.collides(e.pos, cfg.radius));

        assert!(e.try_move(vec3(-0.2, 0.0, 0.0), &maze, &cfg));
        assert!(!maze.collides(e.pos, cfg.radius));
        assert!((e.pos.x - 0.6).abs() < 1e-5, "slid sideways, x = {}", e.pos.x);
        assert!(((e.pos.z + 1.0).abs() - 0.2).abs() < 1e-5);
    }

    #[test]
    fn fully_blocked_step_stays_put() {
        let cfg = EnemyConfig::default();
        let maze = Maze::build(MazeLayout::parse("000\n010\n000").unwrap(), &WorldConfig::default(), 1.6);
        let mut e = Enemy::spawn(EnemyId(0), [-1.0, -1.0], &cfg, 2);
        let before = e.pos;
        assert!(!e.try_move(vec3(0.2, 0.0, 0.0), &maze, &cfg));
        assert_eq!(e.pos, before);
    }

    #[test]
    fn failed_teleports_fall_back_to_wall_repulsion() {
        let mut cfg = EnemyConfig::default();
        cfg.teleport_radius = 0.5;
        // solid 4x4 block; centers at -4, -2, 0, 2 on both axes
        let solid = vec!["1111"; 4].join("\n");
        let maze = Maze::build(MazeLayout::parse(&solid).unwrap(), &WorldConfig::default(), 1.6);
        let mut e = Enemy::spawn(EnemyId(0), [-2.0, -2.0], &cfg, 6);
        let before = e.pos;

        assert!(!e.recover(&maze, &cfg));
        assert_eq!(e.pos, before);
        assert_eq!(e.escape_timer, cfg.escape_hold);
        // the extra wall column/row sits on the + side, so escape heads -x, -z
        assert!(e.escape_dir.x < 0.0 && e.escape_dir.z < 0.0, "{:?}", e.escape_dir);
        assert!((e.escape_dir.length() - 1.0).abs() < 1e-5);
        assert_eq!(e.escape_dir.y, 0.0);
    }

    #[test]
    fn failed_teleports_without_repulsion_pick_a_random_heading() {
        let mut cfg = EnemyConfig::default();
        cfg.teleport_radius = 0.5;
        // lone wall centered under the enemy contributes no push
        let maze = Maze::build(MazeLayout::parse("1").unwrap(), &WorldConfig::default(), 1.6);
        let heading = |seed| {
            let mut e = Enemy::spawn(EnemyId(0), [-1.0, -1.0], &cfg, seed);
            assert!(!e.recover(&maze, &cfg));
            assert_eq!(e.escape_timer, cfg.escape_hold);
            e.escape_dir
        };
        let dir = heading(8);
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert_eq!(dir.y, 0.0);
        assert_eq!(heading(8), dir, "heading comes from the enemy's own stream");
    }

    #[test]
    fn pursues_visible_player_in_open_ground() {
        let cfg = EnemyConfig::default();
        let maze = open_maze();
        let mut e = Enemy::spawn(EnemyId(0), [0.0, 0.0], &cfg, 9);
        let player = vec3(6.0, 1.6, 0.0);
        for i in 0..30 {
            step(&mut e, &maze, player, i as f32 * DT, &cfg);
        }
        assert!(e.sees_player());
        assert!((e.pos.x - e.speed * 30.0 * DT).abs() < 1e-3, "x = {}", e.pos.x);
        assert!(e.pos.z.abs() < 1e-5);
        assert!(!e.is_stuck());
    }

    #[test]
    fn melee_respects_cooldown() {
        let cfg = EnemyConfig::default();
        let maze = open_maze();
        let mut e = Enemy::spawn(EnemyId(0), [0.0, 0.0], &cfg, 9);
        let player = vec3(0.5, 1.6, 0.0);
        let mut hits = 0;
        let mut now = 0.0;
        // 2.5 s inside melee range -> hits at 0, 1, 2
        for _ in 0..150 {
            if step(&mut e, &maze, player, now, &cfg).melee_damage == Some(10) {
                hits += 1;
            }
            now += DT;
        }
        assert_eq!(hits, 3);
    }

    #[test]
    fn holds_position_inside_hold_distance() {
        let mut cfg = EnemyConfig::default();
        let maze = open_maze();
        let player = vec3(0.5, 1.6, 0.0);
        let mut e = Enemy::spawn(EnemyId(0), [0.0, 0.0], &cfg, 9);
        step(&mut e, &maze, player, 0.0, &cfg);
        assert_eq!(e.pos, vec3(0.0, cfg.body_y, 0.0));

        cfg.hold_distance = 0.0;
        let mut e = Enemy::spawn(EnemyId(0), [0.0, 0.0], &cfg, 9);
        step(&mut e, &maze, player, 0.0, &cfg);
        assert!(e.pos.x > 0.0, "closes in without a hold distance");
    }

    #[test]
    fn ranged_fire_waits_for_sight_delay_and_spends_ammo() {
        let mut cfg = EnemyConfig::default();
        cfg.speed_min = 0.0;
        cfg.speed_max = 0.0;
        let maze = open_maze();
        let mut e = Enemy::spawn(EnemyId(0), [0.0, 0.0], &cfg, 9);
        let player = vec3(8.0, 1.6, 0.0);
        let mut shots = Vec::new();
        let mut now = 0.0;
        for tick in 0..900 {
            if let Some(shot) = step(&mut e, &maze, player, now, &cfg).shot {
                shots.push((tick, shot));
            }
            now += DT;
        }
        assert_eq!(shots.len(), 5, "initial ranged ammo is 5");
        assert_eq!(e.ranged_ammo, 0);
        // first shot only after a full second of visibility
        assert!(shots[0].0 >= 59 && shots[0].0 <= 61, "first shot at tick {}", shots[0].0);
        for pair in shots.windows(2) {
            assert!(pair[1].0 - pair[0].0 >= 89);
        }
        let (_, first) = shots[0];
        assert!((first.dir.length() - 1.0).abs() < 1e-4);
        assert!(first.dir.x > 0.9, "aimed roughly at the player");
    }

    #[test]
    fn no_shots_without_line_of_sight() {
        let mut cfg = EnemyConfig::default();
        cfg.speed_min = 0.0;
        cfg.speed_max = 0.0;
        let maze = Maze::build(MazeLayout::builtin(), &WorldConfig::default(), 1.6);
        // (-11, 7) and (-11, 11) are separated by wall row 12
        let mut e = Enemy::spawn(EnemyId(0), [-11.0, 7.0], &cfg, 4);
        let player = vec3(-11.0, 1.6, 11.0);
        let mut now = 0.0;
        // just past the sight delay, before stuck recovery kicks in
        for _ in 0..62 {
            assert!(step(&mut e, &maze, player, now, &cfg).shot.is_none());
            assert!(!e.sees_player());
            now += DT;
        }
    }

    #[test]
    fn embedded_enemy_recovers_by_teleport() {
        let cfg = EnemyConfig::default();
        let maze = Maze::build(MazeLayout::builtin(), &WorldConfig::default(), 1.6);
        // (0, 0) touches the corner of the wall at row 8, col 8
        let mut e = Enemy::spawn(EnemyId(0), [0.0, 0.0], &cfg, 11);
        assert!(maze.collides(e.pos, cfg.radius));
        let player = vec3(-13.0, 1.6, -13.0);
        let mut now = 0.0;
        let mut teleported = false;
        for _ in 0..(60 * 20) {
            teleported |= step(&mut e, &maze, player, now, &cfg).teleported;
            now += DT;
            if teleported {
                break;
            }
        }
        assert!(teleported);
        assert!(!maze.collides(e.pos, cfg.radius));
        assert!(!e.is_stuck());
    }
}
