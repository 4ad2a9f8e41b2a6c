use std::cmp::Ordering;

use vek::Vec2;

use crate::error::ShapeError;

/// 2D vector used for all geometry.
pub type Vector2 = Vec2<f64>;

/// Operations on vectors needed for the collision math which aren't part of [`vek`] or behave differently.
pub trait VectorExt: Sized {
    /// Rotate counter-clockwise around the origin by radians.
    fn rotate(self, radians: f64) -> Self;

    /// Rotate counter-clockwise around the origin by degrees.
    fn rotate_degrees(self, degrees: f64) -> Self {
        self.rotate(degrees.to_radians())
    }

    /// Perpendicular vector, rotated 90 degrees counter-clockwise.
    fn perp(self) -> Self;

    /// Normalize the vector.
    ///
    /// Fails when the length of the vector is exactly zero, unlike [`Vec2::try_normalized`] which also rejects almost zero lengths.
    fn normalize_checked(self) -> Result<Self, ShapeError>;

    /// Compare first on the X axis and then on the Y axis.
    fn lexicographic_cmp(&self, other: &Self) -> Ordering;
}

impl VectorExt for Vector2 {
    fn rotate(self, radians: f64) -> Self {
        Rotation::from_radians(radians).rotate(self)
    }

    fn perp(self) -> Self {
        Vector2::new(-self.y, self.x)
    }

    fn normalize_checked(self) -> Result<Self, ShapeError> {
        let magnitude = self.x.hypot(self.y);
        if magnitude == 0.0 {
            return Err(ShapeError::DegenerateVector);
        }

        Ok(self / magnitude)
    }

    fn lexicographic_cmp(&self, other: &Self) -> Ordering {
        self.x
            .total_cmp(&other.x)
            .then_with(|| self.y.total_cmp(&other.y))
    }
}

/// Rotation split into it's sine and cosine parts.
///
/// Rotating many vertices by the same angle only needs a single evaluation of the trigonometric functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    /// Cosine part of the rotation.
    cos: f64,
    /// Sine part of the rotation.
    sin: f64,
}

impl Rotation {
    /// Create from radians.
    pub fn from_radians(rotation: f64) -> Self {
        let (sin, cos) = rotation.sin_cos();

        Self { sin, cos }
    }

    /// Rotate a point around the origin.
    pub fn rotate(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            self.cos * point.x - self.sin * point.y,
            self.sin * point.x + self.cos * point.y,
        )
    }
}
