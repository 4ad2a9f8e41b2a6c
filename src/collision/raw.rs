//! Flat numeric representation of a shape.
//!
//! Layout: `[position.x, position.y, rotation, v0.x, v0.y, v1.x, v1.y, ..]` with the vertices in local space.

use crate::{error::MalformedReason, math::Vector2};

/// Amount of values before the vertex data starts.
const HEADER_LEN: usize = 3;

/// Decoded raw data.
#[derive(Debug, Clone, PartialEq)]
pub struct RawShape {
    /// World position.
    pub position: Vector2,
    /// Rotation in radians.
    pub rotation: f64,
    /// Vertices in local space.
    pub vertices: Vec<Vector2>,
}

/// Serialize the pose and the local vertices.
pub fn encode(position: Vector2, rotation: f64, vertices: &[Vector2]) -> Vec<f64> {
    let mut raw = Vec::with_capacity(HEADER_LEN + vertices.len() * 2);
    raw.extend([position.x, position.y, rotation]);
    raw.extend(vertices.iter().flat_map(|vertex| [vertex.x, vertex.y]));

    raw
}

/// Deserialize data created with [`encode`].
pub fn decode(data: &[f64]) -> Result<RawShape, MalformedReason> {
    if data.len() < 6 {
        return Err(MalformedReason::TooShort { len: data.len() });
    }

    let (header, vertex_data) = data.split_at(HEADER_LEN);
    if vertex_data.len() % 2 != 0 {
        return Err(MalformedReason::OddVertexData {
            len: vertex_data.len(),
        });
    }

    if let Some(offset) = vertex_data.iter().position(|value| !value.is_finite()) {
        return Err(MalformedReason::NonFinite {
            index: HEADER_LEN + offset,
        });
    }

    let vertices = vertex_data
        .chunks_exact(2)
        .map(|xy| Vector2::new(xy[0], xy[1]))
        .collect();

    Ok(RawShape {
        position: Vector2::new(header[0], header[1]),
        rotation: header[2],
        vertices,
    })
}

#[cfg(test)]
mod tests {
    use crate::{error::MalformedReason, math::Vector2};

    use super::{decode, encode};

    #[test]
    fn test_encode() {
        let raw = encode(
            Vector2::new(1.0, 2.0),
            0.5,
            &[Vector2::new(3.0, 4.0), Vector2::new(5.0, 6.0)],
        );

        assert_eq!(raw, vec![1.0, 2.0, 0.5, 3.0, 4.0, 5.0, 6.0]);

        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded.position, Vector2::new(1.0, 2.0));
        assert_eq!(decoded.rotation, 0.5);
        assert_eq!(decoded.vertices.len(), 2);
    }

    #[test]
    fn test_decode_garbage() {
        assert_eq!(decode(&[]), Err(MalformedReason::TooShort { len: 0 }));
        assert_eq!(
            decode(&[25.0, 32.0, 54.0]),
            Err(MalformedReason::TooShort { len: 3 })
        );
        assert_eq!(
            decode(&[25.0, 32.0, 54.0, 25.0, 32.0, 54.0]),
            Err(MalformedReason::OddVertexData { len: 3 })
        );
        assert_eq!(
            decode(&[25.0, 32.0, 54.0, 25.0, 32.0, f64::INFINITY, 12.0]),
            Err(MalformedReason::NonFinite { index: 5 })
        );
        assert_eq!(
            decode(&[25.0, 32.0, 54.0, f64::NAN, 32.0, 1.0, 12.0]),
            Err(MalformedReason::NonFinite { index: 3 })
        );
    }
}
