use vek::Aabr;

use crate::math::Vector2;

use super::sat::Projection;

/// Axis aligned rectangle around the world space vertices of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Highest Y coordinate.
    pub top: f64,
    /// Lowest Y coordinate.
    pub bottom: f64,
    /// Lowest X coordinate.
    pub left: f64,
    /// Highest X coordinate.
    pub right: f64,
}

impl BoundingBox {
    /// Construct from the projections on the X and the Y axis.
    pub fn from_projections(x: Projection, y: Projection) -> Self {
        Self {
            top: y.max,
            bottom: y.min,
            left: x.min,
            right: x.max,
        }
    }

    /// Box without a size.
    pub fn from_point(point: Vector2) -> Self {
        Self {
            top: point.y,
            bottom: point.y,
            left: point.x,
            right: point.x,
        }
    }

    /// Horizontal size.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Vertical size.
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Whether a point is inside or on the edge of the box.
    pub fn contains(&self, point: Vector2) -> bool {
        (self.left..=self.right).contains(&point.x) && (self.bottom..=self.top).contains(&point.y)
    }

    /// Corners for drawing an outline, counter-clockwise starting at the bottom left.
    pub fn corners(&self) -> [Vector2; 4] {
        [
            Vector2::new(self.left, self.bottom),
            Vector2::new(self.right, self.bottom),
            Vector2::new(self.right, self.top),
            Vector2::new(self.left, self.top),
        ]
    }
}

impl From<BoundingBox> for Aabr<f64> {
    fn from(value: BoundingBox) -> Self {
        Aabr {
            min: Vector2::new(value.left, value.bottom),
            max: Vector2::new(value.right, value.top),
        }
    }
}

#[cfg(test)]
mod tests {
    use vek::Aabr;

    use crate::{collision::sat::Projection, math::Vector2};

    use super::BoundingBox;

    #[test]
    fn test_from_projections() {
        let bb = BoundingBox::from_projections(
            Projection { min: -1.0, max: 3.0 },
            Projection { min: 2.0, max: 4.0 },
        );

        assert_eq!(bb.width(), 4.0);
        assert_eq!(bb.height(), 2.0);
        assert!(bb.contains(Vector2::new(3.0, 2.0)));
        assert!(!bb.contains(Vector2::new(3.1, 2.0)));

        let aabr: Aabr<f64> = bb.into();
        assert_eq!(aabr.min, Vector2::new(-1.0, 2.0));
        assert_eq!(aabr.max, Vector2::new(3.0, 4.0));
        assert_eq!(bb.corners()[2], aabr.max);
    }
}
