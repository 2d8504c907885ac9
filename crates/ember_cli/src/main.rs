//! Ember - renders the two-sphere scene to a PPM file.
//!
//! Usage: ember [output.ppm]

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ember_tracer::{render_to_path, Camera, RenderConfig, Shading, World};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DEFAULT_OUTPUT: &str = "output.ppm";

/// Fixed so repeated runs produce identical images.
const SEED: u64 = 0x5EED;

fn output_path() -> PathBuf {
    env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT))
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Ember");

    let path = output_path();

    let world = World::two_spheres().context("Failed to build scene")?;
    let config = RenderConfig::default()
        .with_resolution(400, 200)
        .with_quality(100, 50)
        .with_shading(Shading::Diffuse)
        .with_gamma(true);
    let camera = Camera::with_fov(90.0, config.aspect_ratio()).context("Failed to set up camera")?;

    log::info!("Scene has {} objects, seed {:#x}", world.len(), SEED);

    let mut rng = StdRng::seed_from_u64(SEED);
    render_to_path(&path, &camera, &world, &config, &mut rng)
        .with_context(|| format!("Failed to render {}", path.display()))?;

    Ok(())
}
