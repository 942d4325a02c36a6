//! Game state and core simulation types
//!
//! A `Session` owns everything the simulation mutates. Restarting a game
//! replaces the whole `Session`; nothing is reset piecemeal.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Every enemy destroyed
    Won,
    /// Player hit by a projectile or reached by the formation
    Lost,
}

impl GamePhase {
    /// Won and Lost are final; nothing transitions out of them
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GamePhase::Running)
    }
}

/// Something that happened during the last tick (for presentation only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerFired,
    EnemyFired { row: usize, col: usize },
    EnemyDestroyed { row: usize, col: usize },
    FormationDropped,
    Won { score: u32 },
    Lost { score: u32 },
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
}

impl Player {
    /// Spawn horizontally centred, just above the bottom margin
    pub fn new(tuning: &Tuning) -> Self {
        let x = (tuning.width - tuning.player_width) / 2.0;
        let y = tuning.height - tuning.player_height - tuning.player_bottom_margin;
        Self {
            rect: Rect::new(x, y, tuning.player_width, tuning.player_height),
        }
    }

    /// Right-most x the player may occupy
    pub fn max_x(&self, arena_width: f32) -> f32 {
        arena_width - self.rect.width()
    }
}

/// A projectile in flight (player or enemy owned, by list membership)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
}

impl Projectile {
    /// Create a projectile whose horizontal centre is `anchor.x` and whose
    /// top edge is `anchor.y`
    pub fn at(anchor: Vec2, tuning: &Tuning) -> Self {
        Self {
            rect: Rect::new(
                anchor.x - tuning.projectile_width / 2.0,
                anchor.y,
                tuning.projectile_width,
                tuning.projectile_height,
            ),
        }
    }
}

/// A single formation cell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub rect: Rect,
    /// Dead enemies stay in the grid and are skipped everywhere
    pub alive: bool,
}

/// Fixed rows x cols arrangement of enemies, stored row-major
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Enemy>,
}

impl EnemyGrid {
    /// Build a full grid, horizontally centred, first row at `enemy_top`
    pub fn new(tuning: &Tuning) -> Self {
        let start_x = (tuning.width - tuning.formation_width()) / 2.0;
        let step_x = tuning.enemy_width + tuning.enemy_gap;
        let step_y = tuning.enemy_height + tuning.enemy_gap;

        let mut cells = Vec::with_capacity(tuning.enemy_rows * tuning.enemy_cols);
        for row in 0..tuning.enemy_rows {
            for col in 0..tuning.enemy_cols {
                cells.push(Enemy {
                    rect: Rect::new(
                        start_x + col as f32 * step_x,
                        tuning.enemy_top + row as f32 * step_y,
                        tuning.enemy_width,
                        tuning.enemy_height,
                    ),
                    alive: true,
                });
            }
        }

        Self {
            rows: tuning.enemy_rows,
            cols: tuning.enemy_cols,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Enemy> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Enemy> {
        if row < self.rows && col < self.cols {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// (row, col) of a row-major cell index
    #[inline]
    pub fn cell_of(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    /// All cells in row-major order, dead ones included
    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.cells.iter()
    }

    /// Alive cells in row-major order, with their row-major index
    pub fn iter_alive(&self) -> impl Iterator<Item = (usize, &Enemy)> {
        self.cells.iter().enumerate().filter(|(_, e)| e.alive)
    }

    pub(crate) fn iter_alive_mut(&mut self) -> impl Iterator<Item = (usize, &mut Enemy)> {
        self.cells.iter_mut().enumerate().filter(|(_, e)| e.alive)
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut Enemy {
        &mut self.cells[index]
    }

    /// Number of alive cells (counted, not cached)
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|e| e.alive).count()
    }
}

/// Complete game state for one play session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Constants this session was built with
    pub tuning: Tuning,
    pub player: Player,
    /// Player projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    /// Enemy projectiles, oldest first
    pub enemy_projectiles: Vec<Projectile>,
    pub enemies: EnemyGrid,
    /// Shared horizontal direction of the formation (+1 right, -1 left)
    pub direction: f32,
    pub score: u32,
    pub phase: GamePhase,
    /// Armed until a shot is fired; re-armed only by releasing the fire key
    pub can_fire: bool,
    /// Alive enemies remaining; reaching zero wins the game
    pub enemies_left: usize,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Create a fresh session
    ///
    /// `tuning` must pass `Tuning::validate`; an empty grid would never
    /// reach a win. Checked in debug builds only.
    pub fn new(tuning: Tuning) -> Self {
        debug_assert!(
            tuning.validate().is_ok(),
            "session built from invalid tuning: {:?}",
            tuning.validate()
        );
        let enemies = EnemyGrid::new(&tuning);
        let enemies_left = enemies.count_alive();
        Self {
            player: Player::new(&tuning),
            projectiles: Vec::new(),
            enemy_projectiles: Vec::new(),
            enemies,
            direction: 1.0,
            score: 0,
            phase: GamePhase::Running,
            can_fire: true,
            enemies_left,
            time_ticks: 0,
            events: Vec::new(),
            tuning,
        }
    }

    pub fn alive_enemies(&self) -> usize {
        self.enemies_left
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// End the session as a loss (no-op once terminal)
    pub fn lose(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = GamePhase::Lost;
        self.events.push(GameEvent::Lost { score: self.score });
        log::info!("Game over - final score {}", self.score);
    }

    /// End the session as a win (no-op once terminal)
    pub fn win(&mut self) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = GamePhase::Won;
        self.events.push(GameEvent::Won { score: self.score });
        log::info!("All invaders destroyed - final score {}", self.score);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
