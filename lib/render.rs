use std::time::Instant;

use rayon::prelude::*;

use crate::camera::Camera;
use crate::config::RenderConfig;
use crate::image::Image;
use crate::scene::Scene;
use crate::world::World;

/// Traces one primary ray through the center of every pixel, rows in parallel.
///
/// Recursion depth comes from the world; its ray counters restart with each render.
pub fn render(world: &World, camera: &Camera, config: &RenderConfig) -> Image {
    let width = config.width as usize;
    let height = config.height as usize;
    let mut image = Image::new(width, height);

    log::info!(
        "Rendering {}x{} with {} surfaces, {} lights, max depth {}",
        width,
        height,
        world.surfaces.len(),
        world.lights.len(),
        world.max_depth
    );
    world.stats.reset();
    let start = Instant::now();

    image.pixels.par_chunks_mut(width).enumerate().for_each(|(row, pixels)| {
        log::trace!("Scanline {}", row);
        let t = 1.0 - (row as f32 + 0.5) / height as f32;

        for (x, pixel) in pixels.iter_mut().enumerate() {
            let s = (x as f32 + 0.5) / width as f32;
            let ray = camera.create_ray(s, t);
            *pixel = world.trace(ray.origin, ray.direction, 0);
        }
    });

    log::info!("Rendered in {:.2?} ({})", start.elapsed(), world.stats.snapshot());

    image
}
