//! Separating axis theorem.

use itertools::Itertools;

use crate::math::{Vector2, VectorExt};

/// Edges with a squared length below this don't produce a separating axis.
const MIN_EDGE_LENGTH_SQUARED: f64 = 1e-7;

/// A simple projection on an axis that can be used to check for overlaps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Minimum projected value.
    pub min: f64,
    /// Maximum projected value.
    pub max: f64,
}

impl Projection {
    /// Project a polygon shape on an axis.
    ///
    /// Returns `None` when there are no vertices.
    pub fn project(vertices: &[Vector2], axis: Vector2) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;

        // Start by projecting the first so we don't have to check for infinite
        let min = axis.dot(*first);
        let init = Self { min, max: min };

        Some(rest.iter().fold(init, |proj, vertex| {
            let dot = axis.dot(*vertex);

            Self {
                min: proj.min.min(dot),
                max: proj.max.max(dot),
            }
        }))
    }

    /// Check if there's a gap between this and another projection.
    pub fn separated(&self, other: Self) -> bool {
        other.max < self.min || self.max < other.min
    }

    /// Signed distance this projection has to move to stop overlapping.
    ///
    /// Positive when moving towards the negative side is shortest, negative otherwise.
    /// Also correct when one projection is contained in the other.
    pub fn penetration(&self, other: Self) -> f64 {
        let forward = self.max - other.min;
        let backward = other.max - self.min;

        if forward < backward {
            forward
        } else {
            -backward
        }
    }

    /// Whether a projected value falls inside the projection, inclusive.
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Unit normals of each edge of a closed outline, skipping edges that are too short.
pub fn separating_axes(vertices: &[Vector2]) -> Vec<Vector2> {
    vertices
        .iter()
        .circular_tuple_windows()
        .map(|(a, b): (&Vector2, &Vector2)| *b - *a)
        .filter(|edge| edge.dot(*edge) >= MIN_EDGE_LENGTH_SQUARED)
        .filter_map(|edge| edge.perp().normalize_checked().ok())
        .collect()
}

/// Find the axis with the smallest overlap between two outlines.
///
/// Both the vertices and the axes must be in world space.
/// Returns the axis with the absolute overlap, or `None` when any axis separates the outlines or there are no axes at all.
/// When multiple axes have the same overlap the first one wins, with `a_axes` being tested before `b_axes`.
pub fn minimum_translation_axis(
    a_vertices: &[Vector2],
    a_axes: &[Vector2],
    b_vertices: &[Vector2],
    b_axes: &[Vector2],
) -> Option<(Vector2, f64)> {
    puffin::profile_function!();

    let mut smallest: Option<(Vector2, f64)> = None;
    for &axis in a_axes.iter().chain(b_axes) {
        let a_proj = Projection::project(a_vertices, axis)?;
        let b_proj = Projection::project(b_vertices, axis)?;

        if a_proj.separated(b_proj) {
            // Found a gap, the shapes can't collide
            return None;
        }

        let overlap = a_proj.penetration(b_proj).abs();
        if smallest.map_or(true, |(_, smallest)| overlap < smallest) {
            smallest = Some((axis, overlap));
        }
    }

    smallest
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{gen::shapes, math::Vector2};

    use super::{minimum_translation_axis, separating_axes, Projection};

    #[test]
    fn test_project() {
        let square = shapes::rectangle(2.0, 2.0);

        let proj = Projection::project(&square, Vector2::unit_x()).unwrap();
        assert_eq!(proj, Projection { min: -1.0, max: 1.0 });

        assert!(Projection::project(&[], Vector2::unit_x()).is_none());
    }

    #[test]
    fn test_penetration() {
        let a = Projection { min: 0.0, max: 10.0 };
        let b = Projection { min: 8.0, max: 20.0 };
        assert_eq!(a.penetration(b), 2.0);
        assert_eq!(b.penetration(a), -2.0);

        // Nested inside, moving forward is shorter
        let inner = Projection { min: 1.0, max: 3.0 };
        assert_eq!(inner.penetration(a), 3.0);
        assert_eq!(a.penetration(inner), -3.0);

        assert!(!a.separated(b));
        assert!(a.separated(Projection {
            min: 10.5,
            max: 11.0
        }));
    }

    #[test]
    fn test_separating_axes() {
        let axes = separating_axes(&shapes::rectangle(4.0, 2.0));
        assert_eq!(axes.len(), 4);
        assert_abs_diff_eq!(axes[0].y, 1.0);

        // Zero sized edges are skipped
        assert!(separating_axes(&shapes::rectangle(0.0, 0.0)).is_empty());
        assert_eq!(separating_axes(&shapes::line(10.0)).len(), 2);
        assert!(separating_axes(&[]).is_empty());
    }

    #[test]
    fn test_minimum_translation_axis() {
        let a = shapes::rectangle(20.0, 10.0);
        let b: Vec<_> = shapes::rectangle(20.0, 10.0)
            .into_iter()
            .map(|v| v + Vector2::new(15.0, 0.0))
            .collect();

        let (axis, overlap) = minimum_translation_axis(
            &a,
            &separating_axes(&a),
            &b,
            &separating_axes(&b),
        )
        .unwrap();
        assert_abs_diff_eq!(axis.x.abs(), 1.0);
        assert_abs_diff_eq!(overlap, 5.0);

        let far: Vec<_> = b.iter().map(|v| *v + Vector2::new(100.0, 0.0)).collect();
        assert!(
            minimum_translation_axis(&a, &separating_axes(&a), &far, &separating_axes(&far))
                .is_none()
        );

        assert!(minimum_translation_axis(&a, &[], &b, &[]).is_none());
    }
}
