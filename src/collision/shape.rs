use std::cell::OnceCell;

use crate::{
    error::ShapeError,
    gen::{hull, shapes},
    math::{Rotation, Vector2},
    settings,
};

use super::{
    bounding_box::BoundingBox,
    raw,
    sat::{self, Projection},
    CollisionResult,
};

/// Convex polygon with a position and a rotation.
///
/// The default value is an empty shape without vertex data, every query on it fails with [`ShapeError::Uninitialized`].
#[derive(Debug, Clone, Default)]
pub struct Shape {
    /// Vertex data with the pose, `None` when not initialized.
    body: Option<Body>,
}

impl Shape {
    /// Create from vertices in local space.
    ///
    /// The vertices must form a convex outline, consecutive vertices are connected and the last connects to the first.
    pub fn from_vertices(vertices: Vec<Vector2>) -> Self {
        let body = Some(Body::new(vertices));

        Self { body }
    }

    /// Create a rectangle.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::from_vertices(shapes::rectangle(width, height))
    }

    /// Create a polygon with `sides` vertices fitting inside the width and the height.
    pub fn regular_polygon(width: f64, height: f64, sides: usize) -> Result<Self, ShapeError> {
        shapes::regular_polygon(width, height, sides).map(Self::from_vertices)
    }

    /// Create an ellipse with horizontal radius `a` and vertical radius `b`.
    ///
    /// The amount of vertices is configured with [`settings::set_ellipse_vertex_count`].
    pub fn ellipse(a: f64, b: f64) -> Result<Self, ShapeError> {
        shapes::ellipse(a, b, settings::ellipse_vertex_count()).map(Self::from_vertices)
    }

    /// Create a circle.
    ///
    /// The amount of vertices is configured with [`settings::set_ellipse_vertex_count`].
    pub fn circle(radius: f64) -> Result<Self, ShapeError> {
        shapes::circle(radius, settings::ellipse_vertex_count()).map(Self::from_vertices)
    }

    /// Create a vertical capsule.
    ///
    /// The amount of vertices is configured with [`settings::set_ellipse_vertex_count`].
    pub fn capsule(width: f64, height: f64) -> Self {
        Self::from_vertices(shapes::capsule(
            width,
            height,
            settings::ellipse_vertex_count(),
        ))
    }

    /// Create a vertical line without any width.
    pub fn line(length: f64) -> Self {
        Self::from_vertices(shapes::line(length))
    }

    /// Create a rectangle with rounded corners.
    ///
    /// The amount of vertices is configured with [`settings::set_ellipse_vertex_count`].
    pub fn rounded_rectangle(width: f64, height: f64, roundness: f64) -> Result<Self, ShapeError> {
        shapes::rounded_rectangle(width, height, roundness, settings::ellipse_vertex_count())
            .map(Self::from_vertices)
    }

    /// Create the smallest convex shape containing all points.
    pub fn from_points(points: &[Vector2]) -> Self {
        Self::from_vertices(hull::convex_hull(points))
    }

    /// Create from the flat representation returned by [`Self::to_raw`].
    pub fn from_raw(data: &[f64]) -> Result<Self, ShapeError> {
        let raw = raw::decode(data)?;

        Self::from_vertices(raw.vertices)
            .with_position(raw.position.x, raw.position.y)?
            .with_rotation(raw.rotation)
    }

    /// Whether the shape has vertex data.
    pub fn is_initialized(&self) -> bool {
        self.body.is_some()
    }

    /// Move the shape.
    pub fn set_position(&mut self, x: f64, y: f64) -> Result<&mut Self, ShapeError> {
        let body = self.body_mut()?;
        body.position = Vector2::new(x, y);
        body.invalidate();

        Ok(self)
    }

    /// Set the rotation in radians.
    pub fn set_rotation(&mut self, rotation: f64) -> Result<&mut Self, ShapeError> {
        let body = self.body_mut()?;
        body.rotation = rotation;
        body.invalidate();

        Ok(self)
    }

    /// Move the shape, builder variant of [`Self::set_position`].
    pub fn with_position(mut self, x: f64, y: f64) -> Result<Self, ShapeError> {
        self.set_position(x, y)?;

        Ok(self)
    }

    /// Set the rotation in radians, builder variant of [`Self::set_rotation`].
    pub fn with_rotation(mut self, rotation: f64) -> Result<Self, ShapeError> {
        self.set_rotation(rotation)?;

        Ok(self)
    }

    /// World position.
    pub fn position(&self) -> Result<Vector2, ShapeError> {
        Ok(self.body()?.position)
    }

    /// Rotation in radians.
    pub fn rotation(&self) -> Result<f64, ShapeError> {
        Ok(self.body()?.rotation)
    }

    /// Vertices in world space, in the same order as they were created.
    pub fn vertices(&self) -> Result<&[Vector2], ShapeError> {
        Ok(&self.body()?.world().vertices)
    }

    /// Vertices in local space, without the position and rotation applied.
    pub fn local_vertices(&self) -> Result<&[Vector2], ShapeError> {
        Ok(&self.body()?.vertices)
    }

    /// Axis aligned bounding box in world space.
    pub fn bounding_box(&self) -> Result<BoundingBox, ShapeError> {
        Ok(self.body()?.world().bounding_box)
    }

    /// Flat representation that can be stored or sent and loaded again with [`Self::from_raw`].
    pub fn to_raw(&self) -> Result<Vec<f64>, ShapeError> {
        let body = self.body()?;

        Ok(raw::encode(body.position, body.rotation, &body.vertices))
    }

    /// Whether a point in world space lies inside or on the edge of the shape.
    ///
    /// Shapes without any area never contain a point.
    pub fn contains_point(&self, x: f64, y: f64) -> Result<bool, ShapeError> {
        puffin::profile_function!();

        let world = self.body()?.world();
        if world.axes.is_empty() {
            return Ok(false);
        }

        let point = Vector2::new(x, y);

        Ok(world.axes.iter().all(|axis| {
            Projection::project(&world.vertices, *axis)
                .is_some_and(|proj| proj.contains(axis.dot(point)))
        }))
    }

    /// Check for a collision with another shape.
    ///
    /// The resulting axis points from the other shape towards this shape, moving this shape along it by the overlap separates both.
    /// A shape never collides with itself, this is also the only query that doesn't fail on an uninitialized shape.
    pub fn collide(&self, other: &Self) -> Result<Option<CollisionResult>, ShapeError> {
        puffin::profile_function!();

        if std::ptr::eq(self, other) {
            return Ok(None);
        }

        let (a, b) = (self.body()?, other.body()?);
        let (a_world, b_world) = (a.world(), b.world());

        let Some((mut axis, overlap)) = sat::minimum_translation_axis(
            &a_world.vertices,
            &a_world.axes,
            &b_world.vertices,
            &b_world.axes,
        ) else {
            return Ok(None);
        };

        // Point away from the other shape
        if (a.position - b.position).dot(axis) < 0.0 {
            axis = -axis;
        }

        Ok(Some(CollisionResult {
            axis_x: axis.x,
            axis_y: axis.y,
            overlap,
        }))
    }

    /// Vertex data or an error when not initialized.
    fn body(&self) -> Result<&Body, ShapeError> {
        self.body.as_ref().ok_or(ShapeError::Uninitialized)
    }

    /// Mutable vertex data or an error when not initialized.
    fn body_mut(&mut self) -> Result<&mut Body, ShapeError> {
        self.body.as_mut().ok_or(ShapeError::Uninitialized)
    }
}

/// Local vertices with the pose.
#[derive(Debug, Clone)]
struct Body {
    /// Outline in local space.
    vertices: Vec<Vector2>,
    /// Position in world space.
    position: Vector2,
    /// Rotation in radians.
    rotation: f64,
    /// Cached world space data.
    ///
    /// Will only be generated when accessed after the pose changed.
    world: OnceCell<World>,
}

impl Body {
    /// Construct at the origin without a rotation.
    fn new(vertices: Vec<Vector2>) -> Self {
        Self {
            vertices,
            position: Vector2::zero(),
            rotation: 0.0,
            world: OnceCell::new(),
        }
    }

    /// Get the world space data, recalculating it when the pose changed.
    fn world(&self) -> &World {
        self.world.get_or_init(|| self.transform())
    }

    /// Mark the world space data as outdated.
    fn invalidate(&mut self) {
        self.world.take();
    }

    /// Apply the rotation and the position to all vertices.
    fn transform(&self) -> World {
        puffin::profile_function!();

        log::trace!(
            "Transforming {} vertices to position {:?} with rotation {}",
            self.vertices.len(),
            self.position,
            self.rotation
        );

        let rotation = Rotation::from_radians(self.rotation);
        let vertices: Vec<_> = self
            .vertices
            .iter()
            .map(|vertex| rotation.rotate(*vertex) + self.position)
            .collect();

        let axes = sat::separating_axes(&vertices);

        let bounding_box = Projection::project(&vertices, Vector2::unit_x())
            .zip(Projection::project(&vertices, Vector2::unit_y()))
            .map_or_else(
                || BoundingBox::from_point(self.position),
                |(x, y)| BoundingBox::from_projections(x, y),
            );

        World {
            vertices,
            axes,
            bounding_box,
        }
    }
}

/// Shape data in world space.
#[derive(Debug, Clone)]
struct World {
    /// Transformed vertices.
    vertices: Vec<Vector2>,
    /// Normalized edge normals for checking separation.
    axes: Vec<Vector2>,
    /// Extents of the transformed vertices.
    bounding_box: BoundingBox,
}
