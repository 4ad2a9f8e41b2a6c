//! Vertex outlines of parametric shapes.
//!
//! All outlines are centered around the origin, curved shapes are approximated with the passed amount of vertices.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{error::ShapeError, math::Vector2};

/// Rectangle corners, counter-clockwise starting at the bottom left.
pub fn rectangle(width: f64, height: f64) -> Vec<Vector2> {
    let half_width = width / 2.0;
    let half_height = height / 2.0;

    vec![
        Vector2::new(-half_width, -half_height),
        Vector2::new(half_width, -half_height),
        Vector2::new(half_width, half_height),
        Vector2::new(-half_width, half_height),
    ]
}

/// Polygon with `sides` vertices evenly spread over the angle, stretched to fit the width and height.
///
/// Only a regular polygon when the width and the height are equal.
pub fn regular_polygon(width: f64, height: f64, sides: usize) -> Result<Vec<Vector2>, ShapeError> {
    if sides <= 2 {
        return Err(ShapeError::InvalidVertexCount {
            count: sides,
            minimum: 3,
        });
    }

    let step = TAU / sides as f64;
    let half_width = width / 2.0;
    let half_height = height / 2.0;

    Ok((0..sides)
        .map(|i| {
            let (sin, cos) = (step * i as f64).sin_cos();

            Vector2::new(half_width * cos, half_height * sin)
        })
        .collect())
}

/// Ellipse approximation with `a` as the horizontal and `b` as the vertical radius.
pub fn ellipse(a: f64, b: f64, vertex_count: usize) -> Result<Vec<Vector2>, ShapeError> {
    regular_polygon(a * 2.0, b * 2.0, vertex_count)
}

/// Circle approximation.
pub fn circle(radius: f64, vertex_count: usize) -> Result<Vec<Vector2>, ShapeError> {
    ellipse(radius, radius, vertex_count)
}

/// Vertical stadium shape: two half circles connected by straight edges.
///
/// The radius of the half circles is half the width.
/// When the height is smaller than the width the straight edges collapse and the outline becomes a circle.
/// Negative sizes mirror the outline.
pub fn capsule(width: f64, height: f64, vertex_count: usize) -> Vec<Vector2> {
    let radius = width.abs() / 2.0;
    let step = TAU / vertex_count as f64;
    let pole_offset = (height.abs() / 2.0 - radius).max(0.0);
    let half = vertex_count / 2;
    let mirror = Vector2::new(width.signum(), height.signum());

    (0..vertex_count)
        .map(|i| {
            // Top arc for the first half, bottom arc for the second half
            let pole = if i < half {
                Vector2::new(0.0, pole_offset)
            } else {
                Vector2::new(0.0, -pole_offset)
            };
            let (sin, cos) = (step * i as f64).sin_cos();

            (pole + Vector2::new(radius * cos, radius * sin)) * mirror
        })
        .collect()
}

/// Vertical line, a rectangle without a width.
pub fn line(length: f64) -> Vec<Vector2> {
    rectangle(0.0, length)
}

/// Rectangle where each corner is replaced by a quarter ellipse.
///
/// `roundness` is the fraction of the half extents used as the corner radius, `0.0` gives sharp corners and `1.0` an ellipse.
pub fn rounded_rectangle(
    width: f64,
    height: f64,
    roundness: f64,
    vertex_count: usize,
) -> Result<Vec<Vector2>, ShapeError> {
    if !(0.0..=1.0).contains(&roundness) {
        return Err(ShapeError::InvalidRoundness(roundness));
    }

    let corner_vertices = vertex_count / 4;
    if corner_vertices < 2 {
        return Err(ShapeError::InvalidVertexCount {
            count: vertex_count,
            minimum: 8,
        });
    }

    let half_width = width / 2.0;
    let half_height = height / 2.0;
    let radius = Vector2::new(roundness * half_width, roundness * half_height);
    let inner = Vector2::new(half_width, half_height) - radius;

    // Center of each corner arc with the angle the arc starts at, counter-clockwise from the top right
    let corners = [
        (Vector2::new(inner.x, inner.y), 0.0),
        (Vector2::new(-inner.x, inner.y), FRAC_PI_2),
        (Vector2::new(-inner.x, -inner.y), PI),
        (Vector2::new(inner.x, -inner.y), 3.0 * FRAC_PI_2),
    ];

    let step = FRAC_PI_2 / corner_vertices as f64;

    Ok(corners
        .into_iter()
        .flat_map(|(center, start)| {
            (0..corner_vertices).map(move |i| {
                let (sin, cos) = (start + step * i as f64).sin_cos();

                center + Vector2::new(radius.x * cos, radius.y * sin)
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{error::ShapeError, math::Vector2};

    #[test]
    fn test_rectangle() {
        assert_eq!(
            super::rectangle(4.0, 2.0),
            vec![
                Vector2::new(-2.0, -1.0),
                Vector2::new(2.0, -1.0),
                Vector2::new(2.0, 1.0),
                Vector2::new(-2.0, 1.0),
            ]
        );
    }

    #[test]
    fn test_regular_polygon() {
        let hexagon = super::regular_polygon(2.0, 2.0, 6).unwrap();
        assert_eq!(hexagon.len(), 6);
        for vertex in hexagon {
            assert_abs_diff_eq!(vertex.magnitude(), 1.0, epsilon = 1e-12);
        }

        let stretched = super::regular_polygon(4.0, 2.0, 4).unwrap();
        assert_abs_diff_eq!(stretched[0].x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(stretched[1].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_regular_polygon_too_few_sides() {
        for sides in 0..=2 {
            assert_eq!(
                super::regular_polygon(10.0, 10.0, sides),
                Err(ShapeError::InvalidVertexCount {
                    count: sides,
                    minimum: 3
                })
            );
        }
    }

    #[test]
    fn test_circle() {
        let circle = super::circle(5.0, 32).unwrap();
        assert_eq!(circle.len(), 32);
        for vertex in circle {
            assert_abs_diff_eq!(vertex.magnitude(), 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_capsule() {
        let capsule = super::capsule(10.0, 30.0, 16);
        assert_eq!(capsule.len(), 16);

        let top = capsule.iter().map(|v| v.y).fold(f64::MIN, f64::max);
        let bottom = capsule.iter().map(|v| v.y).fold(f64::MAX, f64::min);
        let right = capsule.iter().map(|v| v.x).fold(f64::MIN, f64::max);
        assert_abs_diff_eq!(top, 15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bottom, -15.0, epsilon = 1e-12);
        assert_abs_diff_eq!(right, 5.0, epsilon = 1e-12);

        // Negative sizes mirror on both axes
        let mirrored = super::capsule(-10.0, -30.0, 16);
        for (vertex, mirrored) in capsule.iter().zip(mirrored) {
            assert_abs_diff_eq!(vertex.x, -mirrored.x, epsilon = 1e-12);
            assert_abs_diff_eq!(vertex.y, -mirrored.y, epsilon = 1e-12);
        }

        // Wider than high collapses into a circle
        for vertex in super::capsule(10.0, 4.0, 16) {
            assert_abs_diff_eq!(vertex.magnitude(), 5.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_line() {
        let line = super::line(10.0);
        assert!(line.iter().all(|v| v.x == 0.0));
        assert_eq!(line[2].y, 5.0);
    }

    #[test]
    fn test_rounded_rectangle() {
        let rounded = super::rounded_rectangle(20.0, 10.0, 0.5, 16).unwrap();
        assert_eq!(rounded.len(), 16);

        // First vertex of the top right corner lies on the right edge
        assert_abs_diff_eq!(rounded[0].x, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rounded[0].y, 2.5, epsilon = 1e-12);

        // Sharp corners collapse every arc into a single point
        let sharp = super::rounded_rectangle(20.0, 10.0, 0.0, 8).unwrap();
        assert!(sharp[..2].iter().all(|v| *v == Vector2::new(10.0, 5.0)));
    }

    #[test]
    fn test_rounded_rectangle_roundness() {
        assert_eq!(
            super::rounded_rectangle(10.0, 10.0, -1.0, 16),
            Err(ShapeError::InvalidRoundness(-1.0))
        );
        assert_eq!(
            super::rounded_rectangle(10.0, 10.0, 2.0, 16),
            Err(ShapeError::InvalidRoundness(2.0))
        );
        assert!(super::rounded_rectangle(10.0, 10.0, 0.0, 16).is_ok());
        assert!(super::rounded_rectangle(10.0, 10.0, 1.0, 16).is_ok());
    }
}
