//! Sprite list generation
//!
//! Turns a read-only `Session` into glyph draws. Kept free of any browser
//! types so the layout can be tested natively.

use glam::Vec2;

use crate::sim::{Rect, Session};

pub const PLAYER_GLYPH: &str = "🚀";
pub const ENEMY_GLYPH: &str = "👾";
pub const PROJECTILE_GLYPH: &str = "💧";
pub const ENEMY_PROJECTILE_GLYPH: &str = "🔥";

/// The rocket emoji points up-right; rotate it to point straight up
const PLAYER_ROTATION: f32 = -std::f32::consts::FRAC_PI_4;

/// Font sizes (px), roughly filling each entity's box
const PLAYER_FONT_PX: f32 = 36.0;
const ENEMY_FONT_PX: f32 = 32.0;
const PROJECTILE_FONT_PX: f32 = 20.0;

/// A single glyph to draw, centred on `center`
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub glyph: &'static str,
    pub center: Vec2,
    pub font_px: f32,
    /// Radians, clockwise in canvas space
    pub rotation: f32,
}

impl Sprite {
    fn on(rect: &Rect, glyph: &'static str, font_px: f32) -> Self {
        Self {
            glyph,
            center: rect.center(),
            font_px,
            rotation: 0.0,
        }
    }
}

/// Build the draw list for one frame
///
/// Order: player, player projectiles, enemy projectiles, alive enemies.
pub fn scene(session: &Session) -> Vec<Sprite> {
    let mut sprites = Vec::with_capacity(
        1 + session.projectiles.len()
            + session.enemy_projectiles.len()
            + session.alive_enemies(),
    );

    sprites.push(Sprite {
        rotation: PLAYER_ROTATION,
        ..Sprite::on(&session.player.rect, PLAYER_GLYPH, PLAYER_FONT_PX)
    });

    sprites.extend(
        session
            .projectiles
            .iter()
            .map(|p| Sprite::on(&p.rect, PROJECTILE_GLYPH, PROJECTILE_FONT_PX)),
    );

    sprites.extend(
        session
            .enemy_projectiles
            .iter()
            .map(|p| Sprite::on(&p.rect, ENEMY_PROJECTILE_GLYPH, PROJECTILE_FONT_PX)),
    );

    sprites.extend(
        session
            .enemies
            .iter_alive()
            .map(|(_, e)| Sprite::on(&e.rect, ENEMY_GLYPH, ENEMY_FONT_PX)),
    );

    sprites
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Projectile;

    #[test]
    fn test_fresh_scene() {
        let session = Session::default();
        let sprites = scene(&session);
        assert_eq!(sprites.len(), 51);

        let player = &sprites[0];
        assert_eq!(player.glyph, PLAYER_GLYPH);
        assert_eq!(player.center, Vec2::new(400.0, 560.0));
        assert!(player.rotation < 0.0);

        assert!(sprites[1..].iter().all(|s| s.glyph == ENEMY_GLYPH));
    }

    #[test]
    fn test_dead_enemies_not_drawn() {
        let mut session = Session::default();
        session.enemies.get_mut(0, 0).unwrap().alive = false;
        session.enemies.get_mut(3, 7).unwrap().alive = false;
        session.enemies_left -= 2;

        let enemies = scene(&session)
            .into_iter()
            .filter(|s| s.glyph == ENEMY_GLYPH)
            .count();
        assert_eq!(enemies, 48);
    }

    #[test]
    fn test_projectiles_drawn_in_order() {
        let mut session = Session::default();
        let tuning = session.tuning.clone();
        session.projectiles.push(Projectile::at(Vec2::new(100.0, 300.0), &tuning));
        session.enemy_projectiles.push(Projectile::at(Vec2::new(200.0, 300.0), &tuning));

        let sprites = scene(&session);
        assert_eq!(sprites[1].glyph, PROJECTILE_GLYPH);
        assert_eq!(sprites[1].center, Vec2::new(100.0, 310.0));
        assert_eq!(sprites[2].glyph, ENEMY_PROJECTILE_GLYPH);
        assert_eq!(sprites[3].glyph, ENEMY_GLYPH);
    }
}
