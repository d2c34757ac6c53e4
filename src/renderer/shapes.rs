//! Primitive layouts for each entity

use glam::Vec2;

use super::{Canvas, Color};
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::{Actor, Barrier, BonusCraft, Hostile, Projectile, Rect, Ship};

pub const SHIP_COLOR: Color = Color::rgb(0, 255, 0);
pub const HOSTILE_COLOR: Color = Color::rgb(255, 0, 0);
pub const EYE_COLOR: Color = Color::rgb(255, 255, 255);
pub const PROJECTILE_COLOR: Color = Color::rgb(255, 255, 0);
pub const BRICK_COLOR: Color = Color::rgb(0, 200, 0);
pub const BONUS_COLOR: Color = Color::rgb(255, 0, 255);
pub const COCKPIT_COLOR: Color = Color::rgb(150, 150, 255);
pub const GAME_OVER_OVERLAY: Color = Color::rgba(50, 0, 0, 180);

/// The whole playfield
pub fn screen_rect() -> Rect {
    Rect::new(0.0, 0.0, WORLD_WIDTH, WORLD_HEIGHT)
}

pub fn projectile(shot: &Projectile, canvas: &mut dyn Canvas) {
    if shot.destroyed {
        return;
    }
    canvas.draw_rect(shot.bounds(), PROJECTILE_COLOR, true);
}

/// Body plus a two-line nose; hidden once destroyed
pub fn ship(ship: &Ship, canvas: &mut dyn Canvas) {
    if ship.is_destroyed() {
        return;
    }
    let body = ship.bounds();
    canvas.draw_rect(body, SHIP_COLOR, true);

    let tip = Vec2::new(ship.pos.x, body.top() - body.h * 0.5);
    canvas.draw_line(tip, Vec2::new(body.left(), body.top()), SHIP_COLOR);
    canvas.draw_line(tip, Vec2::new(body.right(), body.top()), SHIP_COLOR);

    for shot in &ship.projectiles {
        projectile(shot, canvas);
    }
}

/// Body with two eyes; live shots are drawn even for a dying hostile
pub fn hostile(hostile: &Hostile, canvas: &mut dyn Canvas) {
    if !hostile.destroyed {
        let body = hostile.bounds();
        canvas.draw_rect(body, HOSTILE_COLOR, true);

        let eye = body.w * 0.2;
        let eye_y = hostile.pos.y - body.h * 0.25;
        for dx in [-0.25, 0.25] {
            let center = Vec2::new(hostile.pos.x + body.w * dx, eye_y);
            canvas.draw_rect(Rect::centered(center, Vec2::splat(eye)), EYE_COLOR, true);
        }
    }

    for shot in &hostile.projectiles {
        projectile(shot, canvas);
    }
}

pub fn barrier(barrier: &Barrier, canvas: &mut dyn Canvas) {
    for brick in barrier.standing() {
        canvas.draw_rect(brick.rect, BRICK_COLOR, true);
    }
}

/// Only while crossing
pub fn bonus(bonus: &BonusCraft, canvas: &mut dyn Canvas) {
    if !bonus.is_targetable() {
        return;
    }
    let body = bonus.bounds();
    canvas.draw_rect(body, BONUS_COLOR, true);
    let cockpit = Rect::centered(bonus.pos, Vec2::new(body.w * 0.4, body.h * 0.5));
    canvas.draw_rect(cockpit, COCKPIT_COLOR, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::tests::RecordingCanvas;
    use crate::sim::ScriptedRng;

    #[test]
    fn test_ship_nose_lines() {
        let ship = Ship::default();
        let mut canvas = RecordingCanvas::default();
        super::ship(&ship, &mut canvas);
        assert_eq!(canvas.rects.len(), 1);
        assert_eq!(canvas.lines.len(), 2);
        let (tip, left, _) = canvas.lines[0];
        assert_eq!(tip, Vec2::new(400.0, 520.0));
        assert_eq!(left, Vec2::new(380.0, 535.0));
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut b = Barrier::new(Vec2::new(150.0, 450.0));
        b.damage_brick(0);
        b.damage_brick(1);
        let mut canvas = RecordingCanvas::default();
        barrier(&b, &mut canvas);
        assert_eq!(canvas.rects.len(), 44);
    }

    #[test]
    fn test_bonus_hidden_unless_active() {
        let mut rng = ScriptedRng::constant(0.0);
        let mut craft = BonusCraft::new(&mut rng);
        let mut canvas = RecordingCanvas::default();
        bonus(&craft, &mut canvas);
        assert!(canvas.rects.is_empty());

        craft.active = true;
        bonus(&craft, &mut canvas);
        assert_eq!(canvas.rects.len(), 2);

        craft.destroy();
        let mut canvas = RecordingCanvas::default();
        bonus(&craft, &mut canvas);
        assert!(canvas.rects.is_empty());
    }

    #[test]
    fn test_dead_hostile_still_shows_shots() {
        let mut h = Hostile::new(Vec2::new(100.0, 100.0), 0.0);
        h.projectiles
            .push(Projectile::new(Vec2::new(100.0, 200.0), Vec2::ZERO));
        h.destroy();
        let mut canvas = RecordingCanvas::default();
        hostile(&h, &mut canvas);
        assert_eq!(canvas.rects.len(), 1);
        assert_eq!(canvas.rects[0].1, PROJECTILE_COLOR);
    }
}
