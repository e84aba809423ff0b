//! Bullets shared by the player and enemies, plus the hitscan ray.
//!
//! Bullets fly straight at a fixed speed and resolve against walls, then
//! against their target side. Motion is sub-stepped so fast bullets cannot
//! skip through a 2-unit wall or a body in one tick.
use glam::{Vec3, vec3};

use crate::config::{EnemyConfig, PlayerConfig, WeaponConfig};
use crate::core::collision::{Aabb, distance_to_segment, test_collision};
use crate::core::enemy::{Enemy, EnemyId};
use crate::core::maze::Maze;
use crate::core::player::Player;

/// Longest distance a bullet moves between hit tests.
const MAX_SUBSTEP: f32 = 0.25;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BulletId(pub u32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BulletSource {
    Player,
    Enemy,
}

#[derive(Clone, Debug)]
pub struct Bullet {
    pub id: BulletId,
    pub pos: Vec3,
    /// Unit direction, fixed at spawn.
    pub dir: Vec3,
    pub speed: f32,
    pub damage: i32,
    pub age: f32,
    pub max_lifetime: f32,
    pub source: BulletSource,
    /// Lookup handle only; the enemy may already be gone.
    pub owner: Option<EnemyId>,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum BulletFate {
    Expired,
    Wall,
    Player { damage: i32, health_left: i32 },
    Enemy { id: EnemyId, damage: i32, killed: bool },
}

/// A bullet removed during [`BulletWorld::advance`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Resolved {
    pub bullet: BulletId,
    pub source: BulletSource,
    pub owner: Option<EnemyId>,
    pub pos: Vec3,
    pub fate: BulletFate,
}

/// Everything a bullet can hit this tick.
pub struct HitTargets<'a> {
    pub maze: &'a Maze,
    pub player: &'a mut Player,
    pub enemies: &'a mut [Enemy],
    pub player_cfg: &'a PlayerConfig,
    pub enemy_cfg: &'a EnemyConfig,
    pub weapon: &'a WeaponConfig,
}

pub struct BulletWorld {
    bullets: Vec<Bullet>,
    next_id: u32,
    /// Seconds before any bullet expires.
    lifetime: f32,
}

impl BulletWorld {
    pub fn new(lifetime: f32) -> Self {
        Self { bullets: Vec::new(), next_id: 0, lifetime }
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn len(&self) -> usize {
        self.bullets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bullets.is_empty()
    }

    pub fn clear(&mut self) {
        self.bullets.clear();
    }

    /// `dir` need not be normalized; a zero direction spawns nothing.
    pub fn spawn(
        &mut self,
        origin: Vec3,
        dir: Vec3,
        speed: f32,
        damage: i32,
        source: BulletSource,
        owner: Option<EnemyId>,
    ) -> Option<BulletId> {
        let dir = dir.normalize_or_zero();
        if dir == Vec3::ZERO {
            return None;
        }
        let id = BulletId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.bullets.push(Bullet {
            id,
            pos: origin,
            dir,
            speed,
            damage,
            age: 0.0,
            max_lifetime: self.lifetime,
            source,
            owner,
        });
        Some(id)
    }

    /// Aims at `target` instead of along a direction.
    pub fn spawn_at(
        &mut self,
        origin: Vec3,
        target: Vec3,
        speed: f32,
        damage: i32,
        source: BulletSource,
        owner: Option<EnemyId>,
    ) -> Option<BulletId> {
        self.spawn(origin, target - origin, speed, damage, source, owner)
    }

    /// Moves every live bullet and resolves hits. Damage is applied to the
    /// player and enemies here; dead enemies stay in the slice for the
    /// caller to remove.
    pub fn advance(&mut self, dt: f32, targets: &mut HitTargets) -> Vec<Resolved> {
        let mut resolved = Vec::new();
        let mut spent: Vec<usize> = Vec::new();

        for (index, bullet) in self.bullets.iter_mut().enumerate() {
            bullet.age += dt;
            let fate = if bullet.age >= bullet.max_lifetime {
                Some(BulletFate::Expired)
            } else {
                step_bullet(bullet, dt, targets)
            };
            if let Some(fate) = fate {
                log::trace!("bullet {:?} {:?} at {:?}", bullet.id, fate, bullet.pos);
                resolved.push(Resolved {
                    bullet: bullet.id,
                    source: bullet.source,
                    owner: bullet.owner,
                    pos: bullet.pos,
                    fate,
                });
                spent.push(index);
            }
        }

        // remove back to front so earlier indices stay valid
        for index in spent.into_iter().rev() {
            self.bullets.swap_remove(index);
        }
        resolved
    }
}

fn step_bullet(bullet: &mut Bullet, dt: f32, targets: &mut HitTargets) -> Option<BulletFate> {
    let distance = bullet.speed * dt;
    let steps = (distance / MAX_SUBSTEP).ceil().max(1.0) as u32;
    let step = bullet.dir * (distance / steps as f32);
    let weapon = targets.weapon;
    let enemy_cfg = targets.enemy_cfg;

    for _ in 0..steps {
        bullet.pos += step;

        if targets
            .maze
            .walls()
            .iter()
            .any(|w| test_collision(bullet.pos, weapon.bullet_radius, &w.aabb).collides)
        {
            return Some(BulletFate::Wall);
        }

        match bullet.source {
            BulletSource::Enemy => {
                let eye = targets.player.pos;
                let feet = vec3(eye.x, eye.y - targets.player_cfg.eye_height, eye.z);
                if distance_to_segment(bullet.pos, feet, eye) < weapon.hit_radius {
                    let health_left = targets.player.apply_damage(bullet.damage);
                    return Some(BulletFate::Player { damage: bullet.damage, health_left });
                }
            }
            BulletSource::Player => {
                let hit = targets.enemies.iter_mut().find(|e| {
                    if e.is_dead() {
                        return false;
                    }
                    let (a, b) = e.body_axis(enemy_cfg);
                    distance_to_segment(bullet.pos, a, b) < weapon.hit_radius
                });
                if let Some(enemy) = hit {
                    let killed = enemy.take_damage(bullet.damage);
                    return Some(BulletFate::Enemy { id: enemy.id, damage: bullet.damage, killed });
                }
            }
        }
    }
    None
}

/// Result of an instant shot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HitscanHit {
    /// Where the trail ends: the struck enemy, the wall, or max range.
    pub end: Vec3,
    /// Index into the enemy slice that was passed in.
    pub enemy: Option<usize>,
}

pub fn enemy_body(enemy: &Enemy, cfg: &EnemyConfig) -> Aabb {
    Aabb::from_center(enemy.pos, vec3(cfg.half_width, cfg.half_height, cfg.half_width))
}

/// Casts from `origin` along unit `dir`. The nearest live enemy body box in
/// front of the nearest wall is hit.
pub fn hitscan(
    origin: Vec3,
    dir: Vec3,
    range: f32,
    maze: &Maze,
    enemies: &[Enemy],
    cfg: &EnemyConfig,
) -> HitscanHit {
    let wall_t = maze.first_wall_hit(origin, dir, range).unwrap_or(range);
    let nearest = enemies
        .iter()
        .enumerate()
        .filter(|(_, e)| !e.is_dead())
        .filter_map(|(i, e)| enemy_body(e, cfg).ray_hit(origin, dir, wall_t).map(|t| (i, t)))
        .min_by(|a, b| a.1.total_cmp(&b.1));
    match nearest {
        Some((i, t)) => HitscanHit { end: origin + dir * t, enemy: Some(i) },
        None => HitscanHit { end: origin + dir * wall_t, enemy: None },
    }
}
