//! 3D pass: flat floor, box walls, enemy bodies with health bars, bobbing
//! pickups and bullets.
use maze_shooter::core::enemy::HealthBarColor;
use maze_shooter::core::events::FrameSnapshot;
use maze_shooter::core::maze::Maze;
use maze_shooter::core::projectile::BulletSource;
use raylib::prelude::*;

use crate::render::Trails;

const FLOOR: Color = Color::new(56, 58, 62, 255);
const WALL: Color = Color::new(70, 90, 140, 255);
const WALL_EDGE: Color = Color::new(20, 24, 32, 255);
const ENEMY: Color = Color::new(200, 40, 40, 255);
const PICKUP: Color = Color::new(255, 220, 0, 255);

#[inline]
fn v3(v: glam::Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

fn bar_color(c: HealthBarColor) -> Color {
    match c {
        HealthBarColor::Green => Color::GREEN,
        HealthBarColor::Amber => Color::YELLOW,
        HealthBarColor::Red => Color::RED,
    }
}

pub fn camera(snap: &FrameSnapshot) -> Camera3D {
    Camera3D::perspective(
        v3(snap.player_pos),
        v3(snap.player_pos + snap.look_dir),
        Vector3::new(0.0, 1.0, 0.0),
        75.0,
    )
}

pub fn draw_scene<D: RaylibDraw3D>(d: &mut D, maze: &Maze, snap: &FrameSnapshot, trails: &Trails) {
    let extent = maze.half_extent() * 2.0 + 4.0;
    d.draw_plane(Vector3::zero(), Vector2::new(extent, extent), FLOOR);

    for wall in maze.walls() {
        let size = wall.aabb.max - wall.aabb.min;
        let center = v3(wall.aabb.center());
        d.draw_cube(center, size.x, size.y, size.z, WALL);
        d.draw_cube_wires(center, size.x, size.y, size.z, WALL_EDGE);
    }

    for enemy in &snap.enemies {
        d.draw_cube(v3(enemy.pos), 0.8, 1.8, 0.8, ENEMY);
        // facing marker at eye height
        let nose = enemy.pos + glam::Vec3::new(-enemy.yaw.sin(), 0.6, -enemy.yaw.cos()) * 0.45;
        d.draw_sphere(v3(nose), 0.08, Color::BLACK);
        let bar = enemy.health_bar;
        let top = enemy.pos + glam::Vec3::Y * 1.1;
        d.draw_cube(v3(top), 0.8 * bar.width, 0.08, 0.08, bar_color(bar.color));
    }

    for pickup in &snap.pickups {
        d.draw_cube(v3(pickup.pos), 0.3, 0.3, 0.3, PICKUP);
        d.draw_cube_wires(v3(pickup.pos), 0.32, 0.32, 0.32, Color::ORANGE);
    }

    for bullet in &snap.bullets {
        let color = match bullet.source {
            BulletSource::Player => Color::YELLOW,
            BulletSource::Enemy => Color::RED,
        };
        d.draw_sphere(v3(bullet.pos), 0.05, color);
    }

    for (start, end) in trails.iter() {
        // start a little below the eye so the tracer is visible
        d.draw_line_3D(v3(start - glam::Vec3::Y * 0.1), v3(end), Color::YELLOW);
    }
}
