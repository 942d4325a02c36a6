//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed step sizes
//! - Injected RNG only
//! - Stable iteration order (row-major over the enemy grid)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use autopilot::autopilot;
pub use collision::{first_overlap, rects_overlap};
pub use rect::Rect;
pub use state::{Enemy, EnemyGrid, GameEvent, GamePhase, Player, Projectile, Session};
pub use tick::{TickInput, tick};
