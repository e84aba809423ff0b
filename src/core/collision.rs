//! Point-vs-box collision primitive shared by the player, enemies, bullets
//! and spawn checks.
use glam::Vec3;

/// Skin width added to every radius so grazing contacts do not jitter.
pub const COLLISION_SKIN: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    pub fn from_center(center: Vec3, half: Vec3) -> Self {
        Self { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn closest_point(&self, p: Vec3) -> Vec3 {
        p.clamp(self.min, self.max)
    }

    /// Slab test. Returns the entry distance along `dir` when the ray enters
    /// the box within `max_t`; 0 when `origin` is already inside.
    pub fn ray_hit(&self, origin: Vec3, dir: Vec3, max_t: f32) -> Option<f32> {
        let mut t_min = 0.0f32;
        let mut t_max = max_t;
        for i in 0..3 {
            let o = origin[i];
            let d = dir[i];
            if d.abs() < 1e-8 {
                if o < self.min[i] || o > self.max[i] {
                    return None;
                }
            } else {
                let inv = 1.0 / d;
                let mut t0 = (self.min[i] - o) * inv;
                let mut t1 = (self.max[i] - o) * inv;
                if t0 > t1 {
                    std::mem::swap(&mut t0, &mut t1);
                }
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return None;
                }
            }
        }
        Some(t_min)
    }
}

/// Result of [`test_collision`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    pub collides: bool,
    /// `(radius + skin) - distance`; positive when colliding.
    pub penetration: f32,
    /// Unit push-out direction, or zero when the point sits on/inside the box.
    pub normal: Vec3,
}

impl Contact {
    /// Push-out vector, `None` when not colliding or the normal is degenerate.
    pub fn push_out(&self) -> Option<Vec3> {
        if self.collides && self.normal != Vec3::ZERO {
            Some(self.normal * self.penetration)
        } else {
            None
        }
    }
}

/// Sphere of `radius` at `point` against `aabb`, using the closest point on
/// the box.
pub fn test_collision(point: Vec3, radius: f32, aabb: &Aabb) -> Contact {
    let closest = aabb.closest_point(point);
    let delta = point - closest;
    let dist_sq = delta.length_squared();
    let reach = radius + COLLISION_SKIN;
    let distance = dist_sq.sqrt();
    Contact {
        collides: dist_sq < reach * reach,
        penetration: reach - distance,
        normal: delta.normalize_or_zero(),
    }
}

/// Shortest distance from `p` to the segment `a..b`.
pub fn distance_to_segment(p: Vec3, a: Vec3, b: Vec3) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= 1e-12 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec3;

    fn unit_wall() -> Aabb {
        Aabb::from_center(vec3(0.0, 1.5, 0.0), vec3(1.0, 1.5, 1.0))
    }

    #[test]
    fn far_point_does_not_collide() {
        let c = test_collision(vec3(3.0, 1.5, 0.0), 0.5, &unit_wall());
        assert!(!c.collides);
        assert!(c.penetration < 0.0);
    }

    #[test]
    fn point_just_outside_reach_does_not_collide() {
        // box face at x = 1.0, reach = 0.6
        let c = test_collision(vec3(1.61, 1.5, 0.0), 0.5, &unit_wall());
        assert!(!c.collides);
    }

    #[test]
    fn grazing_contact_inside_skin_collides() {
        let c = test_collision(vec3(1.55, 1.5, 0.0), 0.5, &unit_wall());
        assert!(c.collides);
        assert!((c.penetration - 0.05).abs() < 1e-4);
        assert_eq!(c.normal, vec3(1.0, 0.0, 0.0));
        let push = c.push_out().unwrap();
        assert!((push.x - 0.05).abs() < 1e-4);
    }

    #[test]
    fn point_inside_collides_with_degenerate_normal() {
        let c = test_collision(vec3(0.2, 1.0, -0.3), 0.5, &unit_wall());
        assert!(c.collides);
        assert!(c.penetration > 0.0);
        assert_eq!(c.normal, Vec3::ZERO);
        assert!(c.push_out().is_none());
    }

    #[test]
    fn ray_enters_box_at_face() {
        let t = unit_wall().ray_hit(vec3(-5.0, 1.5, 0.0), vec3(1.0, 0.0, 0.0), 10.0);
        assert!((t.unwrap() - 4.0).abs() < 1e-5);
        assert!(unit_wall().ray_hit(vec3(-5.0, 1.5, 0.0), vec3(1.0, 0.0, 0.0), 3.0).is_none());
        assert!(unit_wall().ray_hit(vec3(-5.0, 1.5, 5.0), vec3(1.0, 0.0, 0.0), 10.0).is_none());
    }

    #[test]
    fn segment_distance_clamps_to_ends() {
        let a = vec3(0.0, 0.0, 0.0);
        let b = vec3(0.0, 2.0, 0.0);
        assert!((distance_to_segment(vec3(1.0, 1.0, 0.0), a, b) - 1.0).abs() < 1e-6);
        assert!((distance_to_segment(vec3(0.0, 3.0, 0.0), a, b) - 1.0).abs() < 1e-6);
    }
}
