//! Drag a capsule through a scene of shapes and report everything it hits.

use std::f64::consts::TAU;

use assets_manager::{loader::TomlLoader, Asset, AssetCache};
use miette::{IntoDiagnostic, Result};
use serde::Deserialize;
use tiny_colls::{GeneratorSettings, Shape, Vector2};
use tracing_subscriber::EnvFilter;

/// Shape stored in the flat raw format, a capsule rotated around its center.
const RAW_SHAPE: [f64; 51] = [
    1077.0, 225.0, 0.791049, 25.0, 12.5, 24.1481, 18.9705, 21.6506, 25.0, 17.6777, 30.1777, 12.5,
    34.1506, 6.47048, 36.6481, -1.09278e-06, 37.5, -6.47048, 36.6481, -12.5, 34.1506, -17.6777,
    30.1777, -21.6506, 25.0, -24.1481, 18.9705, -25.0, -12.5, -24.1481, -18.9705, -21.6506, -25.0,
    -17.6777, -30.1777, -12.5, -34.1506, -6.47047, -36.6481, 2.98122e-07, -37.5, 6.47048,
    -36.6481, 12.5, -34.1506, 17.6777, -30.1777, 21.6506, -25.0, 24.1481, -18.9705,
];

/// Outline that's not convex, the hull will be used for collisions.
const STAR_POINTS: [(f64, f64); 8] = [
    (-24.0, -21.0),
    (0.0, -9.0),
    (23.0, -26.0),
    (9.0, 0.0),
    (25.0, 14.0),
    (-12.0, 36.0),
    (-19.0, 23.0),
    (-8.0, 0.0),
];

/// Demo configuration.
#[derive(Debug, Clone, Deserialize)]
struct DemoSettings {
    /// Amount of probe movements.
    ticks: u32,
    /// Seed for generating random points.
    seed: u64,
    /// Where the probe starts.
    probe_start: [f64; 2],
    /// Where the probe ends.
    probe_end: [f64; 2],
    /// How many times the probe rotates along the path.
    probe_turns: f64,
    /// Shape generation.
    #[serde(default)]
    generator: GeneratorSettings,
}

impl Asset for DemoSettings {
    const EXTENSION: &'static str = "toml";

    type Loader = TomlLoader;
}

/// Named shape placed in the scene.
struct Entity {
    /// Name for logging.
    name: &'static str,
    /// Collision shape in world space.
    shape: Shape,
    /// How many times the probe touched it.
    hits: u32,
}

impl Entity {
    /// Place a shape in the scene.
    fn new(name: &'static str, shape: Shape, pos: Vector2, rotation: f64) -> Result<Self> {
        let shape = shape.with_position(pos.x, pos.y)?.with_rotation(rotation)?;

        Ok(Self {
            name,
            shape,
            hits: 0,
        })
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load the settings
    let assets = AssetCache::new(concat!(env!("CARGO_MANIFEST_DIR"), "/assets")).into_diagnostic()?;
    let settings: DemoSettings = (*assets
        .load::<DemoSettings>("demo")
        .into_diagnostic()?
        .read())
    .clone();

    settings.generator.apply()?;

    let mut entities = scene(settings.seed)?;
    log::info!("Created a scene with {} shapes", entities.len());

    let mut probe = Shape::capsule(50.0, 100.0);

    let start = Vector2::from(settings.probe_start);
    let end = Vector2::from(settings.probe_end);
    for tick in 0..=settings.ticks {
        puffin::profile_scope!("Tick");

        let t = f64::from(tick) / f64::from(settings.ticks.max(1));
        let pos = start + (end - start) * t;
        probe
            .set_position(pos.x, pos.y)?
            .set_rotation(t * settings.probe_turns * TAU)?;

        for entity in entities.iter_mut() {
            if let Some(collision) = probe.collide(&entity.shape)? {
                entity.hits += 1;

                let mtv = collision.translation();
                log::debug!(
                    "Tick {tick}: probe hits '{}', minimum translation vector {:.2}, {:.2}",
                    entity.name,
                    mtv.x,
                    mtv.y
                );
            }

            if entity.shape.contains_point(pos.x, pos.y)? {
                log::debug!("Tick {tick}: probe center is inside '{}'", entity.name);
            }
        }

        puffin::GlobalProfiler::lock().new_frame();
    }

    for entity in &entities {
        let bb = entity.shape.bounding_box()?;
        log::info!(
            "'{}' at ({:.0}, {:.0})..({:.0}, {:.0}) was hit during {} ticks",
            entity.name,
            bb.left,
            bb.bottom,
            bb.right,
            bb.top,
            entity.hits
        );
    }

    Ok(())
}

/// Every kind of shape at a different location.
fn scene(seed: u64) -> Result<Vec<Entity>> {
    let mut rng = fastrand::Rng::with_seed(seed);

    // Random points in a circle, the hull removes everything inside
    let rock: Vec<_> = (0..64)
        .map(|_| {
            let angle = rng.f64() * TAU;
            let dist = rng.f64().sqrt() * 40.0;

            Vector2::new(angle.cos() * dist, angle.sin() * dist)
        })
        .collect();

    let star: Vec<_> = STAR_POINTS
        .iter()
        .map(|&(x, y)| Vector2::new(x, y))
        .collect();

    let raw = Shape::from_raw(&RAW_SHAPE)?;
    let raw_pos = raw.position()?;
    let raw_rot = raw.rotation()?;

    Ok(vec![
        Entity::new(
            "rectangle",
            Shape::rectangle(70.0, 70.0),
            Vector2::new(450.0, 250.0),
            0.6,
        )?,
        Entity::new(
            "ellipse",
            Shape::ellipse(40.0, 25.0)?,
            Vector2::new(600.0, 600.0),
            2.1,
        )?,
        Entity::new(
            "circle",
            Shape::circle(50.0)?,
            Vector2::new(800.0, 550.0),
            2.1,
        )?,
        Entity::new(
            "hexagon",
            Shape::regular_polygon(60.0, 60.0, 6)?,
            Vector2::new(500.0, 100.0),
            0.0,
        )?,
        Entity::new(
            "line",
            Shape::line(500.0),
            Vector2::new(1000.0, 500.0),
            0.3,
        )?,
        Entity::new(
            "rounded rectangle",
            Shape::rounded_rectangle(120.0, 80.0, 0.4)?,
            Vector2::new(100.0, 550.0),
            0.0,
        )?,
        Entity::new(
            "star hull",
            Shape::from_points(&star),
            Vector2::new(300.0, 400.0),
            0.0,
        )?,
        Entity::new(
            "rock",
            Shape::from_points(&rock),
            Vector2::new(200.0, 330.0),
            0.0,
        )?,
        Entity::new("raw", raw, raw_pos, raw_rot)?,
    ])
}
