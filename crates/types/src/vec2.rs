//! 2D vector value types.
//!
//! Two concrete instantiations: [`Vec2f`] for continuous map coordinates and
//! directions, [`Vec2i`] for cell and screen coordinates. Both are `Copy` and
//! every operation returns a new value; there are no compound-assignment
//! operators.

use std::ops::{Add, Mul, Neg, Sub};

/// Float 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2f {
    pub x: f32,
    pub y: f32,
}

impl Vec2f {
    pub const ZERO: Vec2f = Vec2f { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s)
    }

    pub fn dot(self, other: Vec2f) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn length(self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Unit vector in the same direction. The zero vector stays zero.
    pub fn normalize(self) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let len = self.length();
        Self::new(self.x / len, self.y / len)
    }

    /// Rotate by `rad`.
    ///
    /// Uses `x' = x·cos + y·sin`, `y' = -x·sin + y·cos`, so positive angles turn
    /// clockwise in the (row, column) map frame. The zero vector stays zero.
    pub fn rotate(self, rad: f32) -> Self {
        if self.is_zero() {
            return Self::ZERO;
        }
        let (sin, cos) = rad.sin_cos();
        Self::new(self.x * cos + self.y * sin, -self.x * sin + self.y * cos)
    }

    /// Cell containing this point, by truncation toward zero (not flooring).
    pub fn trunc(self) -> Vec2i {
        Vec2i::new(self.x as i32, self.y as i32)
    }
}

impl Add for Vec2f {
    type Output = Vec2f;

    fn add(self, rhs: Vec2f) -> Vec2f {
        Vec2f::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2f {
    type Output = Vec2f;

    fn sub(self, rhs: Vec2f) -> Vec2f {
        Vec2f::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2f {
    type Output = Vec2f;

    fn mul(self, rhs: f32) -> Vec2f {
        self.scale(rhs)
    }
}

impl Neg for Vec2f {
    type Output = Vec2f;

    fn neg(self) -> Vec2f {
        Vec2f::new(-self.x, -self.y)
    }
}

/// Integer 2D vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Vec2i {
    pub x: i32,
    pub y: i32,
}

impl Vec2i {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_f32(self) -> Vec2f {
        Vec2f::new(self.x as f32, self.y as f32)
    }

    /// True when `self` lies in the box `[corner, corner + size)`.
    pub fn in_box(self, corner: Vec2i, size: Vec2i) -> bool {
        self.x >= corner.x
            && self.x < corner.x + size.x
            && self.y >= corner.y
            && self.y < corner.y + size.y
    }
}

impl Add for Vec2i {
    type Output = Vec2i;

    fn add(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2i {
    type Output = Vec2i;

    fn sub(self, rhs: Vec2i) -> Vec2i {
        Vec2i::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn approx(a: Vec2f, b: Vec2f) -> bool {
        (a.x - b.x).abs() < 1e-5 && (a.y - b.y).abs() < 1e-5
    }

    #[test]
    fn normalize_unit_and_zero() {
        let n = Vec2f::new(3.0, 4.0).normalize();
        assert!(approx(n, Vec2f::new(0.6, 0.8)));
        assert_eq!(Vec2f::ZERO.normalize(), Vec2f::ZERO);
    }

    #[test]
    fn rotate_quarter_turn() {
        // (1, 0) rotated by +π/2 becomes (0, -1) under this convention.
        let r = Vec2f::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert!(approx(r, Vec2f::new(0.0, -1.0)));
    }

    #[test]
    fn rotate_preserves_length_and_inverts() {
        let v = Vec2f::new(0.3, -1.7);
        let r = v.rotate(1.1);
        assert!((r.length() - v.length()).abs() < 1e-5);
        assert!(approx(r.rotate(-1.1), v));
        assert_eq!(Vec2f::ZERO.rotate(PI), Vec2f::ZERO);
    }

    #[test]
    fn dot_and_ops() {
        let a = Vec2f::new(1.0, 2.0);
        let b = Vec2f::new(3.0, -1.0);
        assert_eq!(a.dot(b), 1.0);
        assert_eq!(a + b, Vec2f::new(4.0, 1.0));
        assert_eq!(a - b, Vec2f::new(-2.0, 3.0));
        assert_eq!(a * 2.0, Vec2f::new(2.0, 4.0));
        assert_eq!(-a, Vec2f::new(-1.0, -2.0));
    }

    #[test]
    fn trunc_rounds_toward_zero() {
        assert_eq!(Vec2f::new(1.9, 2.1).trunc(), Vec2i::new(1, 2));
        assert_eq!(Vec2f::new(-0.5, -1.5).trunc(), Vec2i::new(0, -1));
    }

    #[test]
    fn in_box_is_half_open() {
        let size = Vec2i::new(3, 2);
        assert!(Vec2i::new(0, 0).in_box(Vec2i::new(0, 0), size));
        assert!(Vec2i::new(2, 1).in_box(Vec2i::new(0, 0), size));
        assert!(!Vec2i::new(3, 1).in_box(Vec2i::new(0, 0), size));
        assert!(!Vec2i::new(-1, 0).in_box(Vec2i::new(0, 0), size));
    }
}
