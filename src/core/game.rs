//! Frame scheduler: owns every entity and runs one tick in a fixed order.
//!
//! Tick order: deferred timers, player, player fire, enemies, bullets,
//! pickups, wave respawn, HUD mirrors. Nothing advances unless the session
//! is `Playing`.
use glam::Vec3;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::VecDeque;

use crate::config::{FireMode, GameConfig};
use crate::core::enemy::{Enemy, EnemyContext, EnemyId, spawn_wave};
use crate::core::events::{BulletView, Cue, EnemyView, FrameSnapshot, GameEvent, PickupView};
use crate::core::input::InputState;
use crate::core::maze::{Maze, MazeLayout};
use crate::core::pickup::{AmmoPickup, PickupId, random_position, spawn_initial};
use crate::core::player::Player;
use crate::core::projectile::{BulletFate, BulletSource, BulletWorld, HitTargets, hitscan};
use crate::core::session::{GameSession, Phase};
use crate::core::timers::{DeferredAction, TimerQueue};
use crate::error::Result;

pub struct Game {
    cfg: GameConfig,
    seed: u64,
    maze: Maze,
    player: Player,
    enemies: Vec<Enemy>,
    pickups: Vec<AmmoPickup>,
    /// Collected pickups waiting for their respawn timer, oldest first.
    respawn_queue: VecDeque<AmmoPickup>,
    bullets: BulletWorld,
    session: GameSession,
    timers: TimerQueue,
    input: InputState,
    rng: StdRng,
    next_enemy_id: u32,
    next_pickup_id: u32,
    muzzle_flash: bool,
    damage_flash: bool,
    last_frame: Option<f64>,
    events: Vec<GameEvent>,
}

impl Game {
    /// Reads the maze from `world.layout_path` when set, else the built-in
    /// layout.
    pub fn new(cfg: GameConfig) -> Result<Self> {
        cfg.validate()?;
        let layout = match &cfg.world.layout_path {
            Some(path) => MazeLayout::from_file(path)?,
            None => MazeLayout::builtin(),
        };
        Ok(Self::with_layout(cfg, layout))
    }

    /// `cfg` is expected to pass [`GameConfig::validate`].
    pub fn with_layout(cfg: GameConfig, layout: MazeLayout) -> Self {
        let seed = cfg.seed.unwrap_or_else(rand::random);
        log::info!("new game, seed {seed}");
        let maze = Maze::build(layout, &cfg.world, cfg.player.eye_height);
        let player = Player::new(maze.spawn_point(), &cfg.player);
        let session = GameSession::new(player.health, player.ammo);
        let mut game = Self {
            bullets: BulletWorld::new(cfg.weapon.bullet_lifetime),
            cfg,
            seed,
            maze,
            player,
            enemies: Vec::new(),
            pickups: Vec::new(),
            respawn_queue: VecDeque::new(),
            session,
            timers: TimerQueue::new(),
            input: InputState::default(),
            rng: StdRng::seed_from_u64(seed),
            next_enemy_id: 0,
            next_pickup_id: 0,
            muzzle_flash: false,
            damage_flash: false,
            last_frame: None,
            events: Vec::new(),
        };
        game.populate();
        game
    }

    fn populate(&mut self) {
        self.pickups = spawn_initial(&self.cfg.pickup, &mut self.next_pickup_id, &mut self.rng);
        self.spawn_wave();
    }

    fn spawn_wave(&mut self) {
        let wave = spawn_wave(&self.cfg.enemy, &self.maze, &mut self.next_enemy_id, &mut self.rng);
        log::info!("wave of {} enemies spawned", wave.len());
        self.events.push(GameEvent::WaveSpawned { count: wave.len() });
        self.enemies = wave;
    }

    /// Discards every entity and the session and rebuilds them from the
    /// initial configuration. The new session waits in `NotStarted`.
    pub fn restart(&mut self) {
        let cfg = self.cfg.clone();
        let seed = self.seed;
        let layout = self.maze.layout().clone();
        log::info!("restarting session");
        let mut fresh = Self::with_layout(GameConfig { seed: Some(seed), ..cfg }, layout);
        fresh.events.insert(0, GameEvent::Restarted);
        fresh.events.push(GameEvent::PhaseChanged(Phase::NotStarted));
        *self = fresh;
    }

    // ---- phase control ----

    pub fn start(&mut self) {
        if let Some(phase) = self.session.start() {
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }

    pub fn pause(&mut self) {
        if let Some(phase) = self.session.pause() {
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }

    pub fn resume(&mut self) {
        if let Some(phase) = self.session.resume() {
            self.events.push(GameEvent::PhaseChanged(phase));
        }
    }

    /// Pointer lock or window focus lost.
    pub fn focus_lost(&mut self) {
        self.pause();
    }

    pub fn focus_gained(&mut self) {
        self.resume();
    }

    /// Flips between `Playing` and `Paused`; other phases ignore it.
    pub fn toggle_pause(&mut self) {
        match self.session.phase() {
            Phase::Playing => self.pause(),
            Phase::Paused => self.resume(),
            _ => {}
        }
    }

    // ---- input ----

    /// Held keys are copied; one-shot triggers are latched until the next
    /// tick consumes them.
    pub fn set_input(&mut self, input: InputState) {
        let jump = self.input.jump || input.jump;
        let fire = self.input.fire || input.fire;
        self.input = InputState { jump, fire, ..input };
    }

    /// Mouse-look deltas in radians.
    pub fn look(&mut self, d_yaw: f32, d_pitch: f32) {
        if self.session.phase().is_running() {
            self.player.look(d_yaw, d_pitch);
        }
    }

    // ---- frame entry ----

    /// Called once per display refresh with a monotonic clock in seconds.
    /// The previous frame time is tracked in every phase so a resume never
    /// integrates the paused interval.
    pub fn frame(&mut self, now: f64) {
        let dt = match self.last_frame {
            Some(prev) => ((now - prev).max(0.0) as f32).min(self.cfg.world.max_frame_dt),
            None => 0.0,
        };
        self.last_frame = Some(now);
        if dt > 0.0 {
            self.tick(dt);
        }
    }

    /// One simulation step. A no-op outside `Playing`.
    pub fn tick(&mut self, dt: f32) {
        if !self.session.phase().is_running() {
            return;
        }
        self.session.elapsed += dt;
        let now = self.session.elapsed;

        for action in self.timers.drain_due(now) {
            self.run_deferred(action);
        }

        let input = self.input;
        self.player.update(&input, dt, &self.maze, &self.cfg.player);
        if input.fire {
            self.fire(now);
        }
        self.input.clear_triggers();

        self.update_enemies(now, dt);
        if self.check_death() {
            return;
        }

        self.update_bullets(dt);
        if self.check_death() {
            return;
        }

        self.update_pickups(now, dt);

        if self.enemies.is_empty() {
            self.spawn_wave();
        }
        self.sync_session();
    }

    fn run_deferred(&mut self, action: DeferredAction) {
        match action {
            DeferredAction::ClearMuzzleFlash => self.muzzle_flash = false,
            DeferredAction::ClearDamageFlash => self.damage_flash = false,
            DeferredAction::RespawnPickup => {
                let Some(mut pickup) = self.respawn_queue.pop_front() else {
                    return;
                };
                let at = random_position(&self.cfg.pickup, &self.maze, &mut self.rng);
                pickup.id = PickupId(self.next_pickup_id);
                self.next_pickup_id += 1;
                pickup.pos = Vec3::new(at[0], self.cfg.pickup.base_y, at[1]);
                log::debug!("pickup {:?} respawned at {:?}", pickup.id, pickup.pos);
                self.events.push(GameEvent::PickupSpawned { id: pickup.id, pos: pickup.pos });
                self.pickups.push(pickup);
            }
        }
    }

    fn fire(&mut self, now: f32) {
        if self.player.ammo == 0 {
            self.events.push(GameEvent::Cue(Cue::EmptyGun));
            return;
        }
        let weapon = &self.cfg.weapon;
        if now - self.player.last_fire < weapon.cooldown {
            return;
        }
        self.player.last_fire = now;
        self.player.take_ammo();
        self.events.push(GameEvent::Cue(Cue::Shoot));
        self.muzzle_flash = true;
        self.timers.schedule(now + weapon.flash_duration, DeferredAction::ClearMuzzleFlash);

        let eye = self.player.pos;
        let dir = self.player.look_dir();
        match weapon.fire_mode {
            FireMode::Projectile => {
                let (speed, damage) = (weapon.bullet_speed, weapon.bullet_damage);
                self.bullets.spawn(eye, dir, speed, damage, BulletSource::Player, None);
            }
            FireMode::Hitscan => {
                let (range, damage) = (weapon.hitscan_range, weapon.hitscan_damage);
                let hit = hitscan(eye, dir, range, &self.maze, &self.enemies, &self.cfg.enemy);
                self.events.push(GameEvent::BulletTrail { start: eye, end: hit.end });
                if let Some(index) = hit.enemy {
                    let enemy = &mut self.enemies[index];
                    let killed = enemy.take_damage(damage);
                    let id = enemy.id;
                    self.on_enemy_hit(id, killed);
                    self.enemies.retain(|e| !e.is_dead());
                }
            }
        }
    }

    fn update_enemies(&mut self, now: f32, dt: f32) {
        let ctx = EnemyContext {
            maze: &self.maze,
            player_eye: self.player.pos,
            now,
            dt,
            cfg: &self.cfg.enemy,
        };
        let mut melee = Vec::new();
        for enemy in self.enemies.iter_mut().filter(|e| !e.is_dead()) {
            let outcome = enemy.update(&ctx);
            if let Some(damage) = outcome.melee_damage {
                melee.push(damage);
            }
            if let Some(shot) = outcome.shot {
                self.bullets.spawn(
                    shot.origin,
                    shot.dir,
                    shot.speed,
                    shot.damage,
                    BulletSource::Enemy,
                    Some(enemy.id),
                );
            }
        }
        for damage in melee {
            self.player.apply_damage(damage);
            self.on_player_damaged(damage, now);
        }
    }

    fn update_bullets(&mut self, dt: f32) {
        let mut targets = HitTargets {
            maze: &self.maze,
            player: &mut self.player,
            enemies: &mut self.enemies,
            player_cfg: &self.cfg.player,
            enemy_cfg: &self.cfg.enemy,
            weapon: &self.cfg.weapon,
        };
        let resolved = self.bullets.advance(dt, &mut targets);
        let now = self.session.elapsed;
        for r in resolved {
            match r.fate {
                BulletFate::Player { damage, .. } => self.on_player_damaged(damage, now),
                BulletFate::Enemy { id, killed, .. } => self.on_enemy_hit(id, killed),
                BulletFate::Wall | BulletFate::Expired => {}
            }
        }
        self.enemies.retain(|e| !e.is_dead());
    }

    fn update_pickups(&mut self, now: f32, dt: f32) {
        let cfg = &self.cfg.pickup;
        for pickup in &mut self.pickups {
            pickup.animate(now, dt, cfg);
        }
        let eye = self.player.pos;
        let (taken, kept): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.pickups).into_iter().partition(|p| p.in_reach(eye, cfg));
        self.pickups = kept;
        for pickup in taken {
            let added = self.player.add_ammo(pickup.ammo);
            log::debug!("pickup {:?} collected (+{added})", pickup.id);
            self.events.push(GameEvent::Cue(Cue::Pickup));
            self.events.push(GameEvent::PickupCollected {
                id: pickup.id,
                added,
                ammo: self.player.ammo,
            });
            self.timers.schedule(now + cfg.respawn_delay, DeferredAction::RespawnPickup);
            self.respawn_queue.push_back(pickup);
        }
    }

    fn on_enemy_hit(&mut self, id: EnemyId, killed: bool) {
        let health = self.enemies.iter().find(|e| e.id == id).map_or(0, |e| e.health);
        self.events.push(GameEvent::Cue(Cue::Hit));
        self.events.push(GameEvent::EnemyDamaged { id, health });
        if killed {
            self.session.record_kill(self.cfg.enemy.score_per_kill);
            log::debug!("enemy {:?} killed, score {}", id, self.session.score);
            self.events.push(GameEvent::EnemyKilled {
                id,
                score: self.session.score,
                kills: self.session.kills,
            });
        }
    }

    fn on_player_damaged(&mut self, amount: i32, now: f32) {
        self.events.push(GameEvent::Cue(Cue::Damage));
        self.events.push(GameEvent::PlayerDamaged { amount, health: self.player.health });
        self.damage_flash = true;
        self.timers.schedule(now + self.cfg.weapon.flash_duration, DeferredAction::ClearDamageFlash);
    }

    /// Moves to `GameOver` once health is gone. Returns true when it did.
    fn check_death(&mut self) -> bool {
        if !self.player.is_dead() {
            return false;
        }
        self.sync_session();
        if let Some(phase) = self.session.game_over() {
            self.events.push(GameEvent::PhaseChanged(phase));
        }
        true
    }

    fn sync_session(&mut self) {
        self.session.health = self.player.health;
        self.session.ammo = self.player.ammo;
    }

    // ---- outbound ----

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            phase: self.session.phase(),
            player_pos: self.player.pos,
            player_yaw: self.player.yaw,
            player_pitch: self.player.pitch,
            look_dir: self.player.look_dir(),
            health: self.session.health,
            ammo: self.session.ammo,
            max_ammo: self.player.max_ammo,
            score: self.session.score,
            kills: self.session.kills,
            elapsed: self.session.elapsed,
            muzzle_flash: self.muzzle_flash,
            damage_flash: self.damage_flash,
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView { id: e.id, pos: e.pos, yaw: e.yaw, health_bar: e.health_bar() })
                .collect(),
            pickups: self
                .pickups
                .iter()
                .map(|p| PickupView { id: p.id, pos: p.pos, rotation: p.rotation })
                .collect(),
            bullets: self
                .bullets
                .bullets()
                .iter()
                .map(|b| BulletView { pos: b.pos, dir: b.dir, source: b.source })
                .collect(),
        }
    }

    // ---- read access ----

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn config(&self) -> &GameConfig {
        &self.cfg
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn pickups(&self) -> &[AmmoPickup] {
        &self.pickups
    }

    pub fn bullets(&self) -> &BulletWorld {
        &self.bullets
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    // Direct entity access for scripted scenarios and the harness.

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn pickups_mut(&mut self) -> &mut Vec<AmmoPickup> {
        &mut self.pickups
    }

    pub fn bullets_mut(&mut self) -> &mut BulletWorld {
        &mut self.bullets
    }
}
