//! Emoji Invaders - A Space Invaders style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `platform`: Browser input sampling
//! - `renderer`: Canvas 2D draw list and painter
//! - `tuning`: Data-driven game balance
//! - `ui`: Score label and win/loss banner

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 40.0;
    pub const PLAYER_SPEED: f32 = 7.0;
    /// Gap between the player's bottom edge and the canvas bottom
    pub const PLAYER_BOTTOM_MARGIN: f32 = 20.0;

    /// Projectile defaults (enemy projectiles travel at half speed)
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    pub const PROJECTILE_SPEED: f32 = 10.0;

    /// Enemy formation defaults
    pub const ENEMY_ROWS: usize = 5;
    pub const ENEMY_COLS: usize = 10;
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_GAP: f32 = 15.0;
    pub const ENEMY_TOP: f32 = 50.0;
    pub const ENEMY_SPEED: f32 = 1.0;
    /// Per enemy, per tick
    pub const ENEMY_FIRE_CHANCE: f32 = 0.001;

    pub const SCORE_PER_KILL: u32 = 10;
}
