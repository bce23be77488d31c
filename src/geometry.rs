//! Integer geometry for clipping and grid math

use std::ops::{Add, AddAssign, Mul};

/// Axis-aligned half-open rectangle: `[left, right) x [top, bottom)`.
///
/// A rectangle is valid when `left < right` and `top < bottom`; intersection
/// never produces a degenerate zero-area result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Overlap of two rectangles, or `None` when they share no area.
    ///
    /// This is the sole clipping primitive the renderer uses.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);

        if left >= right || top >= bottom {
            return None;
        }

        Some(Rect {
            left,
            top,
            right,
            bottom,
        })
    }

    /// True if `other` lies entirely inside this rectangle.
    pub fn contains(&self, other: &Rect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }
}

/// Integer 2D point, used both for grid coordinates and direction vectors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, right: Position) -> Position {
        Position::new(self.x + right.x, self.y + right.y)
    }
}

impl AddAssign for Position {
    fn add_assign(&mut self, right: Position) {
        self.x += right.x;
        self.y += right.y;
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    fn mul(self, right: i32) -> Position {
        Position::new(self.x * right, self.y * right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersection_commutes() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(5, 5, 20, 20);
        assert_eq!(a.intersection(&b), b.intersection(&a));
        assert_eq!(a.intersection(&b), Some(Rect::new(5, 5, 10, 10)));
    }

    #[test]
    fn test_intersection_contained_in_both() {
        let a = Rect::new(-3, 2, 14, 9);
        let b = Rect::new(1, -5, 8, 30);
        let overlap = a.intersection(&b).unwrap();
        assert!(a.contains(&overlap));
        assert!(b.contains(&overlap));
    }

    #[test]
    fn test_disjoint_rects_have_no_intersection() {
        let a = Rect::new(0, 0, 10, 10);
        assert_eq!(a.intersection(&Rect::new(10, 0, 20, 10)), None);
        assert_eq!(a.intersection(&Rect::new(0, 10, 10, 20)), None);
        assert_eq!(a.intersection(&Rect::new(-20, -20, -10, -10)), None);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        // Half-open ranges: sharing an edge is zero area, never a degenerate rect
        let a = Rect::new(0, 0, 5, 5);
        let b = Rect::new(5, 5, 10, 10);
        assert_eq!(a.intersection(&b), None);
    }

    #[test]
    fn test_position_vector_math() {
        let p = Position::new(2, -3) + Position::new(1, 1) * 4;
        assert_eq!(p, Position::new(6, 1));

        let mut q = Position::new(0, 0);
        q += Position::new(-1, 0) * 80;
        assert_eq!(q, Position::new(-80, 0));
    }
}
