use crate::math::{Vector2, VectorExt};

/// Smallest convex outline around a set of points using Andrew's monotone chain algorithm.
///
/// Sets of three points or less are returned unchanged.
/// The resulting outline is counter-clockwise, collinear points on the edges are dropped.
pub fn convex_hull(points: &[Vector2]) -> Vec<Vector2> {
    puffin::profile_function!();

    if points.len() <= 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.lexicographic_cmp(b));

    let lower = half_hull(sorted.iter().copied());
    let upper = half_hull(sorted.iter().rev().copied());

    // The last point of each chain is the first point of the other one
    let hull: Vec<_> = lower[..lower.len() - 1]
        .iter()
        .chain(&upper[..upper.len() - 1])
        .copied()
        .collect();

    log::trace!(
        "Reduced {} points to a convex hull of {} vertices",
        points.len(),
        hull.len()
    );

    hull
}

/// Build a single chain of the hull, only keeping points that make a left turn.
fn half_hull(points: impl Iterator<Item = Vector2>) -> Vec<Vector2> {
    let mut chain: Vec<Vector2> = Vec::new();

    for point in points {
        while let [.., a, b] = chain[..] {
            if cross(a, b, point) > 0.0 {
                break;
            }

            chain.pop();
        }

        chain.push(point);
    }

    chain
}

/// Z component of the cross product of `OA` and `OB`.
///
/// Positive for a counter-clockwise turn, negative for a clockwise turn and zero when collinear.
fn cross(o: Vector2, a: Vector2, b: Vector2) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}
