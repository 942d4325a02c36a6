//! Idle/demo mode - picks inputs so the game plays itself
//!
//! Targets the lowest alive enemy nearest to the ship, leading it by the
//! distance the formation travels while a shot is in flight.

use super::state::Session;
use super::tick::TickInput;

/// Choose the input for the next tick
pub fn autopilot(session: &Session) -> TickInput {
    let tuning = &session.tuning;
    let player = &session.player.rect;
    let ship_x = player.center().x;

    let target = session
        .enemies
        .iter_alive()
        .map(|(_, e)| e.rect)
        .min_by(|a, b| {
            // Lowest row first, then nearest column
            b.bottom()
                .total_cmp(&a.bottom())
                .then((a.center().x - ship_x).abs().total_cmp(&(b.center().x - ship_x).abs()))
        });

    // Alternate press/release so every other tick can fire
    let mut input = TickInput {
        fire_held: session.can_fire,
        fire_released: !session.can_fire,
        ..Default::default()
    };

    if let Some(target) = target {
        let flight_ticks = ((player.y() - target.bottom()) / tuning.projectile_speed).max(0.0);
        let lead = tuning.enemy_speed * session.direction * flight_ticks;
        let aim_x = target.center().x + lead;

        let dx = aim_x - ship_x;
        if dx.abs() > tuning.player_speed / 2.0 {
            input.move_left = dx < 0.0;
            input.move_right = dx > 0.0;
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick;
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_moves_toward_target() {
        let mut session = Session::default();
        session.player.rect.pos.x = 0.0;
        let input = autopilot(&session);
        assert!(input.move_right);
        assert!(!input.move_left);

        session.player.rect.pos.x = 760.0;
        let input = autopilot(&session);
        assert!(input.move_left);
    }

    #[test]
    fn test_alternates_fire() {
        let mut session = Session::default();
        assert!(autopilot(&session).fire_held);
        session.can_fire = false;
        let input = autopilot(&session);
        assert!(!input.fire_held);
        assert!(input.fire_released);
    }

    #[test]
    fn test_scores_when_unopposed() {
        let mut session = Session::new(Tuning {
            enemy_fire_chance: 0.0,
            ..Default::default()
        });
        let mut rng = Pcg32::seed_from_u64(1);

        for _ in 0..600 {
            let input = autopilot(&session);
            tick(&mut session, &input, &mut rng);
        }

        assert!(session.score > 0);
        assert_eq!(session.score as usize, (50 - session.alive_enemies()) * 10);
    }
}
