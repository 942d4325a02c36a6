//! Keyboard sampling
//!
//! Raw key-down/key-up events arrive between frames. `KeyboardState` folds
//! them into held flags plus one-shot edges, and `sample` turns that into the
//! `TickInput` for the next tick.

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Restart,
}

impl Key {
    /// Map a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "Space" => Some(Key::Fire),
            "Enter" | "NumpadEnter" => Some(Key::Restart),
            _ => None,
        }
    }
}

/// Held keys and pending edges between frames
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    left: bool,
    right: bool,
    fire: bool,
    /// Fire was released since the last sample
    fire_released: bool,
    /// Enter pressed while the game was over
    restart_requested: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true if the code is one the game uses.
    ///
    /// `game_over` gates Enter: it only restarts a finished game.
    pub fn key_down(&mut self, code: &str, game_over: bool) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        match key {
            Key::Left => self.left = true,
            Key::Right => self.right = true,
            Key::Fire => self.fire = true,
            Key::Restart => {
                if game_over {
                    self.restart_requested = true;
                }
            }
        }
        true
    }

    /// Record a key release. Returns true if the code is one the game uses.
    pub fn key_up(&mut self, code: &str) -> bool {
        let Some(key) = Key::from_code(code) else {
            return false;
        };
        match key {
            Key::Left => self.left = false,
            Key::Right => self.right = false,
            Key::Fire => {
                self.fire = false;
                self.fire_released = true;
            }
            Key::Restart => {}
        }
        true
    }

    /// Snapshot for the next tick; consumes the release edge
    pub fn sample(&mut self) -> TickInput {
        let input = TickInput {
            move_left: self.left,
            move_right: self.right,
            fire_held: self.fire,
            fire_released: self.fire_released,
        };
        self.fire_released = false;
        input
    }

    /// Consume a pending restart request
    pub fn take_restart(&mut self) -> bool {
        std::mem::take(&mut self.restart_requested)
    }

    /// Drop everything held (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Session, tick};
    use crate::tuning::Tuning;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::from_code("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_code("ArrowRight"), Some(Key::Right));
        assert_eq!(Key::from_code("Space"), Some(Key::Fire));
        assert_eq!(Key::from_code("Enter"), Some(Key::Restart));
        assert_eq!(Key::from_code("KeyA"), None);
    }

    #[test]
    fn test_held_keys() {
        let mut keys = KeyboardState::new();
        assert!(keys.key_down("ArrowLeft", false));
        assert!(keys.key_down("Space", false));
        assert!(!keys.key_down("KeyQ", false));

        let input = keys.sample();
        assert!(input.move_left);
        assert!(!input.move_right);
        assert!(input.fire_held);
        assert!(!input.fire_released);

        // Held keys persist across samples
        assert_eq!(keys.sample(), input);

        keys.key_up("ArrowLeft");
        assert!(!keys.sample().move_left);
    }

    #[test]
    fn test_release_edge_is_one_shot() {
        let mut keys = KeyboardState::new();
        keys.key_down("Space", false);
        keys.key_up("Space");

        let input = keys.sample();
        assert!(!input.fire_held);
        assert!(input.fire_released);
        assert!(!keys.sample().fire_released);
    }

    #[test]
    fn test_unmapped_keys_leave_input_alone() {
        let mut keys = KeyboardState::new();
        for code in ["KeyI", "KeyP", "Escape"] {
            assert!(!keys.key_down(code, false));
            assert!(!keys.key_up(code));
        }
        assert_eq!(keys.sample(), TickInput::default());
    }

    #[test]
    fn test_restart_only_when_over() {
        let mut keys = KeyboardState::new();
        keys.key_down("Enter", false);
        assert!(!keys.take_restart());

        keys.key_down("Enter", true);
        assert!(keys.take_restart());
        assert!(!keys.take_restart());
    }

    #[test]
    fn test_clear() {
        let mut keys = KeyboardState::new();
        keys.key_down("ArrowRight", false);
        keys.key_down("Space", false);
        keys.clear();
        assert_eq!(keys.sample(), TickInput::default());
    }

    #[test]
    fn test_tap_between_frames_fires_once_and_rearms() {
        let mut session = Session::new(Tuning {
            enemy_fire_chance: 0.0,
            ..Default::default()
        });
        let mut rng = Pcg32::seed_from_u64(7);
        let mut keys = KeyboardState::new();

        // Press and hold for three frames
        keys.key_down("Space", false);
        for _ in 0..3 {
            tick(&mut session, &keys.sample(), &mut rng);
        }
        assert_eq!(session.projectiles.len(), 1);

        // Release and press again before the next frame
        keys.key_up("Space");
        keys.key_down("Space", false);
        tick(&mut session, &keys.sample(), &mut rng);
        assert_eq!(session.projectiles.len(), 2);
    }
}
