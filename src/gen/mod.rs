//! Generate vertex outlines for shapes.

pub mod hull;
pub mod shapes;
