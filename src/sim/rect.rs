//! Axis-aligned rectangle geometry for every entity
//!
//! Canvas coordinates: origin at the top-left, y grows downward.
//! - pos: top-left corner
//! - size: width, height

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Right edge (x + w)
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Bottom edge (y + h)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    /// Midpoint of the top edge
    pub fn top_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }

    /// Midpoint of the bottom edge
    pub fn bottom_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.bottom())
    }

    /// Translate in place
    #[inline]
    pub fn shift(&mut self, delta: Vec2) {
        self.pos += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 40.0, 30.0);
        assert_eq!(r.right(), 50.0);
        assert_eq!(r.bottom(), 50.0);
        assert_eq!(r.center(), Vec2::new(30.0, 35.0));
    }

    #[test]
    fn test_edge_midpoints() {
        let r = Rect::new(100.0, 540.0, 40.0, 40.0);
        assert_eq!(r.top_center(), Vec2::new(120.0, 540.0));
        assert_eq!(r.bottom_center(), Vec2::new(120.0, 580.0));
    }

    #[test]
    fn test_shift() {
        let mut r = Rect::new(0.0, 0.0, 10.0, 10.0);
        r.shift(Vec2::new(3.0, -2.0));
        assert_eq!(r.pos, Vec2::new(3.0, -2.0));
        assert_eq!(r.size, Vec2::new(10.0, 10.0));
    }
}
