//! Data-driven game balance
//!
//! Every gameplay constant lives here so a page can override them with a
//! JSON blob. Missing fields fall back to the defaults in `crate::consts`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors from loading or validating tuning data
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("invalid tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be greater than zero")]
    NonPositive { field: &'static str },
    #[error("enemy fire chance {value} is outside [0, 1]")]
    Probability { value: f32 },
    #[error("enemy grid must have at least one row and one column")]
    EmptyGrid,
    #[error("`{field}` must not be negative")]
    Negative { field: &'static str },
    #[error("enemy grid needs {needed}px but the canvas is {available}px wide")]
    GridTooWide { needed: f32, available: f32 },
    #[error("player spawns at y={y}, outside a {height}px tall canvas")]
    PlayerOffCanvas { y: f32, height: f32 },
    #[error("enemy grid reaches y={bottom} but the player's top edge is at y={player_top}")]
    GridTooTall { bottom: f32, player_top: f32 },
}

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub width: f32,
    pub height: f32,

    // === Player ===
    pub player_width: f32,
    pub player_height: f32,
    pub player_speed: f32,
    pub player_bottom_margin: f32,

    // === Projectiles ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Player projectile speed; enemy projectiles travel at half this
    pub projectile_speed: f32,

    // === Enemies ===
    pub enemy_rows: usize,
    pub enemy_cols: usize,
    pub enemy_width: f32,
    pub enemy_height: f32,
    pub enemy_gap: f32,
    pub enemy_top: f32,
    pub enemy_speed: f32,
    /// Chance per alive enemy per tick of firing
    pub enemy_fire_chance: f32,

    pub score_per_kill: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_speed: PLAYER_SPEED,
            player_bottom_margin: PLAYER_BOTTOM_MARGIN,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,

            enemy_rows: ENEMY_ROWS,
            enemy_cols: ENEMY_COLS,
            enemy_width: ENEMY_WIDTH,
            enemy_height: ENEMY_HEIGHT,
            enemy_gap: ENEMY_GAP,
            enemy_top: ENEMY_TOP,
            enemy_speed: ENEMY_SPEED,
            enemy_fire_chance: ENEMY_FIRE_CHANCE,

            score_per_kill: SCORE_PER_KILL,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Parse tuning, falling back to defaults on any error
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(tuning) => {
                log::info!("Loaded custom tuning");
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning override: {}", e);
                Self::default()
            }
        }
    }

    /// Check that the values describe a playable arena
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("player_speed", self.player_speed),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("projectile_speed", self.projectile_speed),
            ("enemy_width", self.enemy_width),
            ("enemy_height", self.enemy_height),
            ("enemy_speed", self.enemy_speed),
        ];
        // `!(v > 0.0)` also rejects NaN
        if let Some((field, _)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(TuningError::NonPositive { field: *field });
        }

        let non_negative = [
            ("player_bottom_margin", self.player_bottom_margin),
            ("enemy_gap", self.enemy_gap),
            ("enemy_top", self.enemy_top),
        ];
        if let Some((field, _)) = non_negative.iter().find(|(_, v)| !(*v >= 0.0)) {
            return Err(TuningError::Negative { field: *field });
        }

        if !(0.0..=1.0).contains(&self.enemy_fire_chance) {
            return Err(TuningError::Probability {
                value: self.enemy_fire_chance,
            });
        }

        if self.enemy_rows == 0 || self.enemy_cols == 0 {
            return Err(TuningError::EmptyGrid);
        }

        let needed = self.formation_width();
        if needed > self.width {
            return Err(TuningError::GridTooWide {
                needed,
                available: self.width,
            });
        }

        let player_top = self.player_spawn_y();
        if player_top < 0.0 {
            return Err(TuningError::PlayerOffCanvas {
                y: player_top,
                height: self.height,
            });
        }

        let bottom = self.formation_bottom();
        if bottom >= player_top {
            return Err(TuningError::GridTooTall { bottom, player_top });
        }

        Ok(())
    }

    /// Total width of the enemy grid, gaps included
    pub fn formation_width(&self) -> f32 {
        let cols = self.enemy_cols as f32;
        cols * (self.enemy_width + self.enemy_gap) - self.enemy_gap
    }

    /// Bottom edge of the last enemy row at spawn
    pub fn formation_bottom(&self) -> f32 {
        let rows = self.enemy_rows as f32;
        self.enemy_top + rows * (self.enemy_height + self.enemy_gap) - self.enemy_gap
    }

    /// Top edge of the player at spawn
    pub fn player_spawn_y(&self) -> f32 {
        self.height - self.player_height - self.player_bottom_margin
    }

    /// Enemy projectiles fall at half the player projectile speed
    #[inline]
    pub fn enemy_projectile_speed(&self) -> f32 {
        self.projectile_speed / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.enemy_rows * tuning.enemy_cols, 50);
        assert_eq!(tuning.enemy_projectile_speed(), 5.0);
    }

    #[test]
    fn test_formation_width() {
        let tuning = Tuning::default();
        // 10 * (40 + 15) - 15
        assert_eq!(tuning.formation_width(), 535.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning = Tuning::from_json(r#"{ "enemy_rows": 2, "player_speed": 5.0 }"#).unwrap();
        assert_eq!(tuning.enemy_rows, 2);
        assert_eq!(tuning.player_speed, 5.0);
        assert_eq!(tuning.enemy_cols, ENEMY_COLS);
        assert_eq!(tuning.width, CANVAS_WIDTH);
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_rejects_non_positive() {
        let err = Tuning::from_json(r#"{ "player_speed": 0.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::NonPositive {
                field: "player_speed"
            }
        ));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let err = Tuning::from_json(r#"{ "enemy_fire_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Probability { .. }));
    }

    #[test]
    fn test_rejects_empty_grid() {
        let err = Tuning::from_json(r#"{ "enemy_cols": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::EmptyGrid));
    }

    #[test]
    fn test_rejects_grid_wider_than_canvas() {
        let err = Tuning::from_json(r#"{ "enemy_cols": 20 }"#).unwrap_err();
        assert!(matches!(err, TuningError::GridTooWide { .. }));
    }

    #[test]
    fn test_formation_bottom_and_player_spawn() {
        let tuning = Tuning::default();
        // 50 + 5 * (40 + 15) - 15
        assert_eq!(tuning.formation_bottom(), 310.0);
        assert_eq!(tuning.player_spawn_y(), 540.0);
    }

    #[test]
    fn test_rejects_negative_layout() {
        for (json, expected) in [
            (r#"{ "player_bottom_margin": -1.0 }"#, "player_bottom_margin"),
            (r#"{ "enemy_gap": -100.0 }"#, "enemy_gap"),
            (r#"{ "enemy_top": -5.0 }"#, "enemy_top"),
        ] {
            let err = Tuning::from_json(json).unwrap_err();
            assert!(
                matches!(err, TuningError::Negative { field } if field == expected),
                "{json}: {err}"
            );
        }
    }

    #[test]
    fn test_rejects_player_off_canvas() {
        let err = Tuning::from_json(r#"{ "player_bottom_margin": 700.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::PlayerOffCanvas { .. }));
    }

    #[test]
    fn test_rejects_grid_below_player() {
        let err = Tuning::from_json(r#"{ "enemy_top": 700.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::GridTooTall { .. }));

        // Bottom row touching the player's top edge is already a loss
        let err = Tuning::from_json(r#"{ "enemy_top": 280.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::GridTooTall {
                bottom: 540.0,
                player_top: 540.0
            }
        ));
    }

    #[test]
    fn test_fallback_to_default() {
        let tuning = Tuning::from_json_or_default(r#"{ "enemy_rows": 0 }"#);
        assert_eq!(tuning, Tuning::default());
    }
}
