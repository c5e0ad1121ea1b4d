//! Plain 2D geometry for layout and card orientation.
//!
//! The core never renders anything. It only produces the numbers a
//! presentation layer needs: a world position per card and a rotation about
//! the card's vertical axis while it turns over.

use serde::{Deserialize, Serialize};

/// A 2D vector used for world positions and card bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Integer cell coordinate on the board grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub column: u32,
    pub row: u32,
}

impl GridPos {
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Rotation of a card about its vertical axis, in degrees.
///
/// `BACK` (0°) shows the back asset, `FRONT` (180°) shows the face asset.
/// A single-axis rotation makes spherical interpolation between two
/// orientations a constant-speed sweep of the angle, so `slerp` reduces to
/// interpolating the yaw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub yaw_degrees: f32,
}

impl Orientation {
    pub const BACK: Orientation = Orientation { yaw_degrees: 0.0 };
    pub const FRONT: Orientation = Orientation { yaw_degrees: 180.0 };

    #[must_use]
    pub const fn from_degrees(yaw_degrees: f32) -> Self {
        Self { yaw_degrees }
    }

    /// Interpolate from `start` to `target`. `t` is clamped to `[0, 1]`.
    #[must_use]
    pub fn slerp(start: Orientation, target: Orientation, t: f32) -> Orientation {
        let t = t.clamp(0.0, 1.0);
        Orientation {
            yaw_degrees: start.yaw_degrees + (target.yaw_degrees - start.yaw_degrees) * t,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_add() {
        assert_eq!(Vec2::new(1.0, 2.0) + Vec2::new(0.5, -1.0), Vec2::new(1.5, 1.0));
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }

    #[test]
    fn test_grid_pos_display() {
        assert_eq!(GridPos::new(3, 1).to_string(), "(3, 1)");
    }

    #[test]
    fn test_slerp_endpoints() {
        let start = Orientation::BACK;
        let target = Orientation::FRONT;

        assert_eq!(Orientation::slerp(start, target, 0.0), Orientation::BACK);
        assert_eq!(Orientation::slerp(start, target, 1.0), Orientation::FRONT);
        assert_eq!(Orientation::slerp(start, target, 0.5).yaw_degrees, 90.0);
    }

    #[test]
    fn test_slerp_clamps() {
        let start = Orientation::FRONT;
        let target = Orientation::BACK;

        assert_eq!(Orientation::slerp(start, target, 1.7), Orientation::BACK);
        assert_eq!(Orientation::slerp(start, target, -0.2), Orientation::FRONT);
    }
}
