pub mod bounding_box;
pub mod raw;
pub mod sat;
pub mod shape;

use crate::{error::ShapeError, math::Vector2};

use self::shape::Shape;

/// Response for a collision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Horizontal part of the normalized direction of the minimum translation vector.
    pub axis_x: f64,
    /// Vertical part of the normalized direction of the minimum translation vector.
    pub axis_y: f64,
    /// Distance of penetration between the shapes along the axis.
    pub overlap: f64,
}

impl CollisionResult {
    /// Normalized direction of collision.
    pub fn axis(&self) -> Vector2 {
        Vector2::new(self.axis_x, self.axis_y)
    }

    /// Minimum translation vector, moving the first shape by this separates it from the second.
    pub fn translation(&self) -> Vector2 {
        self.axis() * self.overlap
    }
}

/// Check for a collision between two shapes.
///
/// See [`Shape::collide`].
pub fn collide(a: &Shape, b: &Shape) -> Result<Option<CollisionResult>, ShapeError> {
    a.collide(b)
}

/// Whether a point lies inside a shape.
///
/// See [`Shape::contains_point`].
pub fn contains_point(shape: &Shape, x: f64, y: f64) -> Result<bool, ShapeError> {
    shape.contains_point(x, y)
}

#[cfg(test)]
mod tests {
    use crate::math::Vector2;

    use super::CollisionResult;

    #[test]
    fn test_translation() {
        let result = CollisionResult {
            axis_x: 0.0,
            axis_y: -1.0,
            overlap: 2.5,
        };

        assert_eq!(result.translation(), Vector2::new(0.0, -2.5));
    }
}
