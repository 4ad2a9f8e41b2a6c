//! 2D convex shape collision detection.
//!
//! Shapes are convex polygons with a position and a rotation, overlaps are found with the separating axis theorem.
//!
//! ```
//! use tiny_colls::{collide, Shape};
//!
//! let a = Shape::rectangle(20.0, 30.0).with_rotation(std::f64::consts::FRAC_PI_2)?;
//! let b = Shape::ellipse(10.0, 15.0)?.with_position(-10.0, -15.0)?;
//!
//! if let Some(collision) = collide(&a, &b)? {
//!     let mtv = collision.translation();
//!     println!("Minimum translation vector: {}, {}", mtv.x, mtv.y);
//! }
//! # Ok::<(), tiny_colls::ShapeError>(())
//! ```

pub mod collision;
pub mod error;
pub mod gen;
pub mod math;
pub mod settings;

pub use collision::{
    bounding_box::BoundingBox, collide, contains_point, sat::Projection, shape::Shape,
    CollisionResult,
};
pub use error::{MalformedReason, ShapeError};
pub use math::{Vector2, VectorExt};
pub use settings::{set_ellipse_vertex_count, GeneratorSettings};
