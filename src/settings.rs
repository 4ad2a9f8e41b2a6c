//! Process-wide configuration of the shape generators.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Deserialize;

use crate::error::ShapeError;

/// Amount of vertices used when no other value is configured.
pub const DEFAULT_ELLIPSE_VERTEX_COUNT: usize = 16;

/// Lowest amount of vertices allowed, rounded rectangles need at least two vertices per corner.
pub const MIN_ELLIPSE_VERTEX_COUNT: usize = 8;

/// Amount of vertices used for approximating ellipses, circles, capsules and rounded rectangles.
static ELLIPSE_VERTEX_COUNT: AtomicUsize = AtomicUsize::new(DEFAULT_ELLIPSE_VERTEX_COUNT);

/// Set the amount of vertices used for all curved shapes generated after this call.
///
/// Shapes that already exist are not affected.
/// When the count is lower than [`MIN_ELLIPSE_VERTEX_COUNT`] the previous value is kept.
pub fn set_ellipse_vertex_count(count: usize) -> Result<(), ShapeError> {
    if count < MIN_ELLIPSE_VERTEX_COUNT {
        log::warn!("Rejected ellipse vertex count {count}");

        return Err(ShapeError::InvalidVertexCount {
            count,
            minimum: MIN_ELLIPSE_VERTEX_COUNT,
        });
    }

    log::debug!("Setting ellipse vertex count to {count}");
    ELLIPSE_VERTEX_COUNT.store(count, Ordering::Relaxed);

    Ok(())
}

/// Amount of vertices currently used for curved shapes.
pub fn ellipse_vertex_count() -> usize {
    ELLIPSE_VERTEX_COUNT.load(Ordering::Relaxed)
}

/// Generator configuration that can be loaded from a settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Amount of vertices used for curved shapes.
    pub ellipse_vertex_count: usize,
}

impl GeneratorSettings {
    /// Install these settings as the process-wide configuration.
    pub fn apply(&self) -> Result<(), ShapeError> {
        set_ellipse_vertex_count(self.ellipse_vertex_count)
    }
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            ellipse_vertex_count: DEFAULT_ELLIPSE_VERTEX_COUNT,
        }
    }
}
