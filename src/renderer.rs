use indicatif::ProgressBar;
use rayon::prelude::*;

use radiometry::color::Color;
use scene::Scene;
use shape::Primitive;

/// Renders the scene into a row-major RGB8 buffer, three bytes per pixel.
///
/// Every pixel is an independent task on the current rayon thread pool; the
/// scene is shared by reference and never mutated. `collect` gathers
/// results in index order, so the buffer is byte-identical no matter how
/// many worker threads run. A panic in any pixel task propagates out of
/// the parallel iterator and aborts the whole render.
pub fn render(scene: &Scene) -> Vec<u8> {
    let pixel_count = scene.width as u64 * scene.height as u64;
    let progress = ProgressBar::new(pixel_count);
    progress.set_draw_delta((pixel_count / 100).max(1));

    let pixels: Vec<[u8; 3]> = (0..scene.width * scene.height)
        .into_par_iter()
        .map(|index| {
            let (w, h) = (index % scene.width, index / scene.width);
            let color = trace_pixel(scene, w, h);
            progress.inc(1);
            color.to_u8()
        })
        .collect();
    progress.finish_and_clear();

    pixels.concat()
}

/// Casts the primary ray for pixel `(w, h)` and shades the nearest hit;
/// rays that miss everything take the background color.
fn trace_pixel(scene: &Scene, w: u32, h: u32) -> Color {
    let half_width = scene.width as f32 / 2.0;
    let half_height = scene.height as f32 / 2.0;
    // Normalized device coordinates in [-1, 1]; the vertical axis flips so
    // that row 0 is the top of the image.
    let i = (half_height - h as f32) / half_height;
    let j = (w as f32 - half_width) / half_width;

    let ray = scene.camera.generate_ray((j, i));
    match scene.root.intersect(&ray, None, scene.camera.t_min()) {
        Some(hit) => {
            let position = ray.position_at(hit.t);
            let mut color = Color::black();
            for light in scene.lights.iter() {
                color += hit.material.shade(&ray, position, hit.normal, light);
            }
            // The ambient term joins once per pixel, after the light loop.
            color + scene.ambient
        }
        None => scene.background,
    }
}
