//! Collision detection between rectangles
//!
//! Every collision in the game (projectile vs enemy, projectile vs player)
//! goes through the same half-open overlap test: rectangles that only share
//! an edge do not collide.

use super::rect::Rect;

/// Check whether two rectangles overlap
///
/// Touching edges are not an overlap: `a.right() == b.x()` is a miss.
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.x() < b.right() && a.right() > b.x() && a.y() < b.bottom() && a.bottom() > b.y()
}

/// Index of the first target overlapping `probe`
///
/// Targets carry their own index so callers can pre-filter (e.g. dead enemies).
pub fn first_overlap<'a, I>(probe: &Rect, targets: I) -> Option<usize>
where
    I: IntoIterator<Item = (usize, &'a Rect)>,
{
    targets
        .into_iter()
        .find(|(_, target)| rects_overlap(probe, target))
        .map(|(i, _)| i)
}
