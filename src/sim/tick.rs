//! Fixed timestep simulation tick
//!
//! Core game loop that advances the session by one frame. The order of the
//! phases matters: enemy fire and the formation are resolved before player
//! projectiles score, so a loss on the same tick as the last kill wins out.

use glam::Vec2;
use rand::Rng;

use super::collision::{first_overlap, rects_overlap};
use super::state::{GameEvent, Projectile, Session};

/// Input intent for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left arrow held
    pub move_left: bool,
    /// Right arrow held
    pub move_right: bool,
    /// Space held
    pub fire_held: bool,
    /// Space was released since the previous tick (re-arms the fire latch)
    pub fire_released: bool,
}

/// Advance the session by one tick
///
/// All randomness (enemy fire) comes through `rng` so callers control
/// determinism. A terminal session is left untouched.
pub fn tick(session: &mut Session, input: &TickInput, rng: &mut impl Rng) {
    if session.phase.is_terminal() {
        return;
    }

    session.events.clear();

    if input.fire_released {
        session.can_fire = true;
    }

    move_player(session, input);
    fire_player(session, input);
    advance_player_projectiles(session);
    advance_enemy_projectiles(session);
    advance_formation(session, rng);
    resolve_player_hits(session);

    session.time_ticks += 1;
}

/// Independent left/right checks, clamped to the arena
fn move_player(session: &mut Session, input: &TickInput) {
    let speed = session.tuning.player_speed;
    let max_x = session.player.max_x(session.tuning.width);
    let pos = &mut session.player.rect.pos;

    if input.move_left && pos.x > 0.0 {
        pos.x = (pos.x - speed).max(0.0);
    }
    if input.move_right && pos.x < max_x {
        pos.x = (pos.x + speed).min(max_x);
    }
}

/// One shot per key press: firing disarms the latch until the key is released
fn fire_player(session: &mut Session, input: &TickInput) {
    if !(input.fire_held && session.can_fire) {
        return;
    }

    let anchor = session.player.rect.top_center();
    session
        .projectiles
        .push(Projectile::at(anchor, &session.tuning));
    session.can_fire = false;
    session.events.push(GameEvent::PlayerFired);
}

fn advance_player_projectiles(session: &mut Session) {
    let speed = session.tuning.projectile_speed;
    session.projectiles.retain_mut(|p| {
        p.rect.pos.y -= speed;
        p.rect.y() >= 0.0
    });
}

/// Move enemy fire down; anything touching the player ends the game
fn advance_enemy_projectiles(session: &mut Session) {
    let speed = session.tuning.enemy_projectile_speed();
    let height = session.tuning.height;
    let player = session.player.rect;

    let mut player_hit = false;
    session.enemy_projectiles.retain_mut(|p| {
        p.rect.pos.y += speed;
        if p.rect.y() > height {
            return false;
        }
        if rects_overlap(&p.rect, &player) {
            player_hit = true;
            return false;
        }
        true
    });

    if player_hit {
        session.lose();
    }
}

/// Slide the formation, roll enemy fire, and drop a row on an edge hit
fn advance_formation(session: &mut Session, rng: &mut impl Rng) {
    let dx = session.tuning.enemy_speed * session.direction;
    let width = session.tuning.width;
    let fire_chance = session.tuning.enemy_fire_chance;
    let player_top = session.player.rect.y();

    // Edge checks use the direction from the start of the sweep
    let mut flip = false;
    let mut reached_player = false;
    let mut shots: Vec<(usize, Vec2)> = Vec::new();

    for (index, enemy) in session.enemies.iter_alive_mut() {
        enemy.rect.shift(Vec2::new(dx, 0.0));

        let x = enemy.rect.x();
        if x <= 0.0 || x >= width - enemy.rect.width() {
            flip = true;
        }

        if rng.random::<f32>() < fire_chance {
            shots.push((index, enemy.rect.bottom_center()));
        }

        if enemy.rect.bottom() >= player_top {
            reached_player = true;
        }
    }

    for (index, anchor) in shots {
        let (row, col) = session.enemies.cell_of(index);
        session
            .enemy_projectiles
            .push(Projectile::at(anchor, &session.tuning));
        session.events.push(GameEvent::EnemyFired { row, col });
    }

    if reached_player {
        session.lose();
    }

    if flip {
        session.direction = -session.direction;
        let drop = session.tuning.enemy_height;
        for (_, enemy) in session.enemies.iter_alive_mut() {
            enemy.rect.shift(Vec2::new(0.0, drop));
        }
        session.events.push(GameEvent::FormationDropped);
        log::debug!(
            "Formation dropped, now moving {}",
            if session.direction > 0.0 { "right" } else { "left" }
        );
    }
}

/// Each player projectile destroys at most one enemy and is consumed by it
fn resolve_player_hits(session: &mut Session) {
    // Scoring freezes once the game is decided
    if session.phase.is_terminal() {
        return;
    }

    let enemies = &mut session.enemies;
    let mut kills: Vec<usize> = Vec::new();

    session.projectiles.retain(|p| {
        let hit = first_overlap(&p.rect, enemies.iter_alive().map(|(i, e)| (i, &e.rect)));
        match hit {
            Some(index) => {
                enemies.cell_mut(index).alive = false;
                kills.push(index);
                false
            }
            None => true,
        }
    });

    for index in kills {
        let (row, col) = session.enemies.cell_of(index);
        session.score += session.tuning.score_per_kill;
        session.enemies_left = session.enemies_left.saturating_sub(1);
        session.events.push(GameEvent::EnemyDestroyed { row, col });
        log::debug!(
            "Enemy ({}, {}) destroyed, {} left",
            row,
            col,
            session.enemies_left
        );

        if session.enemies_left == 0 {
            session.win();
        }
    }
}
