//! 2D overlay drawn after the 3D pass.
use maze_shooter::core::events::FrameSnapshot;
use maze_shooter::core::session::Phase;
use raylib::prelude::*;

fn centered(d: &mut RaylibDrawHandle, text: &str, y: i32, size: i32, color: Color) {
    let x = (d.get_screen_width() - measure_text(text, size)) / 2;
    d.draw_text(text, x, y, size, color);
}

pub fn draw_hud(d: &mut RaylibDrawHandle, snap: &FrameSnapshot) {
    let w = d.get_screen_width();
    let h = d.get_screen_height();
    let (cx, cy) = (w / 2, h / 2);

    if snap.damage_flash {
        d.draw_rectangle(0, 0, w, h, Color::new(255, 0, 0, 70));
    }
    if snap.muzzle_flash {
        d.draw_circle(cx, cy, 50.0, Color::new(255, 255, 0, 128));
    }

    // crosshair
    d.draw_line(cx - 8, cy, cx + 8, cy, Color::WHITE);
    d.draw_line(cx, cy - 8, cx, cy + 8, Color::WHITE);

    d.draw_text(&format!("HEALTH: {}", snap.health), 20, h - 40, 24, Color::WHITE);
    d.draw_text(&format!("AMMO: {}/{}", snap.ammo, snap.max_ammo), w - 200, h - 40, 24, Color::WHITE);
    d.draw_text(&format!("SCORE: {}", snap.score), 20, 20, 24, Color::WHITE);
    d.draw_text(&format!("KILLS: {}", snap.kills), 20, 50, 20, Color::LIGHTGRAY);
    d.draw_text(&format!("TIME: {:.0}s", snap.elapsed), 20, 75, 20, Color::LIGHTGRAY);
    d.draw_fps(w - 100, 10);

    match snap.phase {
        Phase::Playing => {}
        Phase::NotStarted => {
            d.draw_rectangle(0, 0, w, h, Color::new(0, 0, 0, 160));
            centered(d, "MAZE SHOOTER", cy - 60, 48, Color::WHITE);
            centered(d, "Click to start  |  WASD move, mouse look, space jump", cy + 10, 20, Color::LIGHTGRAY);
        }
        Phase::Paused => {
            d.draw_rectangle(0, 0, w, h, Color::new(0, 0, 0, 160));
            centered(d, "PAUSED", cy - 30, 40, Color::WHITE);
            centered(d, "Click to resume", cy + 20, 20, Color::LIGHTGRAY);
        }
        Phase::GameOver => {
            d.draw_rectangle(0, 0, w, h, Color::new(0, 0, 0, 180));
            centered(d, "GAME OVER", cy - 60, 48, Color::RED);
            let summary = format!("Score {}  |  Kills {}  |  {:.0}s", snap.score, snap.kills, snap.elapsed);
            centered(d, &summary, cy, 24, Color::WHITE);
            centered(d, "Press R to restart", cy + 40, 20, Color::LIGHTGRAY);
        }
    }
}
