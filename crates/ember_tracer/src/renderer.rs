//! Core render loop.
//!
//! Implements sphere ray tracing with:
//! - Selectable shading (gradient, normals, diffuse bouncing)
//! - Anti-aliasing via jittered multi-sampling
//! - Optional gamma correction on output

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::{
    diffuse_color, normal_color, random::sample_square, write_ppm, Background, Camera, Color,
    Hittable, ImageBuffer, Ray, RenderError, RenderResult, Shading,
};
use rand::RngCore;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum number of surface hits along a diffuse path
    pub max_depth: u32,
    /// Lower bound of every intersection window, keeps scattered rays from
    /// re-hitting the surface they leave
    pub t_min: f32,
    /// Shading model
    pub shading: Shading,
    /// Gradient seen by rays that escape the scene
    pub background: Background,
    /// Square-root gamma on output
    pub gamma: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 100,
            samples_per_pixel: 8,
            max_depth: 50,
            t_min: 1e-4,
            shading: Shading::default(),
            background: Background::default(),
            gamma: true,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples: u32, max_depth: u32) -> Self {
        self.samples_per_pixel = samples;
        self.max_depth = max_depth;
        self
    }

    /// Set the shading model.
    pub fn with_shading(mut self, shading: Shading) -> Self {
        self.shading = shading;
        self
    }

    /// Set background gradient.
    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    /// Enable or disable gamma correction.
    pub fn with_gamma(mut self, gamma: bool) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the intersection epsilon.
    pub fn with_t_min(mut self, t_min: f32) -> Self {
        self.t_min = t_min;
        self
    }

    /// Width over height.
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Check the settings before any work is done.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidConfig(format!(
                "image must be at least 1x1, got {}x{}",
                self.width, self.height
            )));
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidConfig(
                "samples_per_pixel must be at least 1".to_string(),
            ));
        }
        if !(self.t_min.is_finite() && self.t_min > 0.0) {
            return Err(RenderError::InvalidConfig(format!(
                "t_min must be a small positive number, got {}",
                self.t_min
            )));
        }
        Ok(())
    }
}

/// Compute the color seen by a ray under the configured shading model.
pub fn ray_color(
    ray: &Ray,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    match config.shading {
        Shading::Gradient => config.background.color(ray),
        Shading::Normals => normal_color(ray, world, &config.background, config.t_min),
        Shading::Diffuse => diffuse_color(
            ray,
            world,
            &config.background,
            config.t_min,
            config.max_depth,
            rng,
        ),
    }
}

/// Render a single pixel with multi-sampling.
///
/// `y` counts rows from the top of the image. A single sample goes through
/// the pixel center; more samples are jittered across the pixel and averaged.
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    x: u32,
    y: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    debug_assert!(
        x < config.width && y < config.height,
        "pixel ({x}, {y}) out of bounds for {}x{}",
        config.width,
        config.height
    );
    let width = config.width as f32;
    let height = config.height as f32;
    // Image plane v runs bottom to top
    let row = (config.height - 1 - y) as f32;

    if config.samples_per_pixel <= 1 {
        let ray = camera.get_ray((x as f32 + 0.5) / width, (row + 0.5) / height);
        return ray_color(&ray, world, config, rng);
    }

    let mut pixel_color = Color::ZERO;
    for _ in 0..config.samples_per_pixel {
        let (du, dv) = sample_square(rng);
        let ray = camera.get_ray((x as f32 + du) / width, (row + dv) / height);
        pixel_color += ray_color(&ray, world, config, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Render the entire scene to an image buffer, top row first.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RenderResult<ImageBuffer> {
    config.validate()?;

    log::info!(
        "Rendering {}x{} @ {} spp, {:?} shading",
        config.width,
        config.height,
        config.samples_per_pixel,
        config.shading
    );
    let start = Instant::now();

    let mut image = ImageBuffer::new(config.width, config.height);
    for y in 0..config.height {
        log::trace!("Scanlines remaining: {}", config.height - y);
        for x in 0..config.width {
            let color = render_pixel(camera, world, x, y, config, rng);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:?}", start.elapsed());
    Ok(image)
}

/// Render to a PPM file at `path`.
///
/// The file is created before any rendering starts so an unwritable
/// destination fails immediately.
pub fn render_to_path(
    path: impl AsRef<Path>,
    camera: &Camera,
    world: &dyn Hittable,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> RenderResult<()> {
    let path = path.as_ref();
    config.validate()?;

    let file = File::create(path).map_err(|source| RenderError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;

    let image = render(camera, world, config, rng)?;

    let mut writer = BufWriter::new(file);
    write_ppm(&image, &mut writer, config.gamma)?;
    writer.flush()?;

    log::info!("Saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Sphere, Vec3, World};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_render_pixel_hits_sphere() {
        let world = World::two_spheres().unwrap();
        let camera = Camera::new();
        let config = RenderConfig::default()
            .with_resolution(10, 10)
            .with_quality(4, 5)
            .with_shading(Shading::Normals);

        let mut rng = StdRng::seed_from_u64(42);

        // Center pixel sees the front of the small sphere
        let color = render_pixel(&camera, &world, 5, 5, &config, &mut rng);
        assert!(color.z > 0.75);
        assert_ne!(color, config.background.color(&Ray::default()));
    }

    #[test]
    fn test_single_sample_goes_through_pixel_center() {
        let config = RenderConfig::default()
            .with_resolution(2, 2)
            .with_quality(1, 1)
            .with_shading(Shading::Gradient)
            .with_background(Background::new(Color::ZERO, Color::ONE));
        let camera = Camera::new();
        let world = World::new();
        let mut rng = StdRng::seed_from_u64(0);

        // Top row looks up, bottom row looks down
        let top = render_pixel(&camera, &world, 0, 0, &config, &mut rng);
        let bottom = render_pixel(&camera, &world, 0, 1, &config, &mut rng);
        assert!(top.x > 0.5);
        assert!(bottom.x < 0.5);

        let expected = config.background.color(&camera.get_ray(0.25, 0.75));
        assert_eq!(top, expected);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of bounds")]
    fn test_render_pixel_rejects_row_past_bottom() {
        let config = RenderConfig::default().with_resolution(2, 2).with_quality(1, 1);
        let mut rng = StdRng::seed_from_u64(0);
        render_pixel(&Camera::new(), &World::new(), 0, 2, &config, &mut rng);
    }

    #[test]
    fn test_render_dimensions_and_orientation() {
        init_logger();
        let world = World::two_spheres().unwrap();
        let camera = Camera::new();
        let config = RenderConfig::default()
            .with_resolution(20, 10)
            .with_quality(2, 10);

        let mut rng = StdRng::seed_from_u64(7);
        let image = render(&camera, &world, &config, &mut rng).unwrap();

        assert_eq!(image.width, 20);
        assert_eq!(image.height, 10);
        assert_eq!(image.pixels.len(), 200);

        // Top-left corner is sky, which is brighter in blue than red
        let sky = image.get(0, 0);
        assert!(sky.z > sky.x);
    }

    #[test]
    fn test_render_is_reproducible() {
        let world = World::two_spheres().unwrap();
        let camera = Camera::new();
        let config = RenderConfig::default().with_resolution(8, 4);

        let a = render(&camera, &world, &config, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = render(&camera, &world, &config, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_gradient_render_ignores_geometry() {
        let mut world = World::new();
        world.add(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5).unwrap());
        let camera = Camera::new();
        let config = RenderConfig::default()
            .with_resolution(4, 2)
            .with_quality(1, 1)
            .with_shading(Shading::Gradient);

        let image = render(&camera, &World::new(), &config, &mut StdRng::seed_from_u64(1)).unwrap();
        let with_sphere = render(&camera, &world, &config, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(image, with_sphere);
    }

    #[test]
    fn test_validate() {
        assert!(RenderConfig::default().validate().is_ok());

        let zero_samples = RenderConfig::default().with_quality(0, 10);
        assert!(matches!(zero_samples.validate(), Err(RenderError::InvalidConfig(_))));

        let empty = RenderConfig::default().with_resolution(0, 10);
        assert!(matches!(empty.validate(), Err(RenderError::InvalidConfig(_))));

        let zero_t_min = RenderConfig::default().with_t_min(0.0);
        assert!(matches!(zero_t_min.validate(), Err(RenderError::InvalidConfig(_))));
    }

    #[test]
    fn test_render_rejects_invalid_config() {
        let config = RenderConfig::default().with_quality(0, 10);
        let result = render(&Camera::new(), &World::new(), &config, &mut StdRng::seed_from_u64(0));
        assert!(result.is_err());
    }

    #[test]
    fn test_render_to_path_fails_fast() {
        init_logger();
        let path = std::env::temp_dir()
            .join("ember_missing_dir")
            .join("nested")
            .join("out.ppm");
        let config = RenderConfig::default().with_resolution(4, 2);

        let result = render_to_path(
            &path,
            &Camera::new(),
            &World::new(),
            &config,
            &mut StdRng::seed_from_u64(0),
        );
        assert!(matches!(result, Err(RenderError::CreateOutput { .. })));
    }

    #[test]
    fn test_render_to_path_writes_ppm() {
        let path = std::env::temp_dir().join(format!("ember_test_{}.ppm", std::process::id()));
        let config = RenderConfig::default()
            .with_resolution(4, 2)
            .with_quality(1, 1)
            .with_shading(Shading::Gradient);

        render_to_path(
            &path,
            &Camera::new(),
            &World::new(),
            &config,
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("P3"));
        assert_eq!(lines.next(), Some("4 2"));
        assert_eq!(lines.next(), Some("255"));
        let rows: Vec<_> = lines.collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.split(' ').count() == 12));
    }
}
