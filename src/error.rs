use miette::Diagnostic;
use thiserror::Error;

/// Everything that can go wrong when constructing or querying shapes.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ShapeError {
    /// Shape was created without any vertex data.
    #[error("shape has no vertex data")]
    #[diagnostic(
        code(tiny_colls::uninitialized),
        help("create the shape with one of the generators, `Shape::from_points` or `Shape::from_raw`")
    )]
    Uninitialized,
    /// Too few vertices requested for a polygon or for the ellipse approximation.
    #[error("vertex count {count} is too low, at least {minimum} is required")]
    #[diagnostic(code(tiny_colls::invalid_vertex_count))]
    InvalidVertexCount {
        /// Requested count.
        count: usize,
        /// Lowest accepted count.
        minimum: usize,
    },
    /// Rounded rectangle roundness outside of `[0, 1]`.
    #[error("roundness {0} is outside of the range [0, 1]")]
    #[diagnostic(code(tiny_colls::invalid_roundness))]
    InvalidRoundness(f64),
    /// Raw shape data could not be decoded.
    #[error("malformed raw shape data: {0}")]
    #[diagnostic(
        code(tiny_colls::malformed_data),
        help("raw data is laid out as `[x, y, rotation, v0.x, v0.y, v1.x, v1.y, ..]`")
    )]
    MalformedData(MalformedReason),
    /// Tried to normalize a vector without a length.
    #[error("cannot normalize a zero length vector")]
    #[diagnostic(code(tiny_colls::degenerate_vector))]
    DegenerateVector,
}

/// Why raw shape data got rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// Not enough values for a pose and vertices.
    #[error("expected at least 6 values but got {len}")]
    TooShort {
        /// Amount of values supplied.
        len: usize,
    },
    /// Vertex coordinates can't be split into pairs.
    #[error("vertex data has an odd length of {len}")]
    OddVertexData {
        /// Amount of vertex coordinates supplied.
        len: usize,
    },
    /// NaN or infinity as a vertex coordinate.
    #[error("vertex coordinate at index {index} is not finite")]
    NonFinite {
        /// Index in the raw data.
        index: usize,
    },
}

impl From<MalformedReason> for ShapeError {
    fn from(reason: MalformedReason) -> Self {
        Self::MalformedData(reason)
    }
}
