pub mod error;
pub mod loader;
pub mod token;

use geometry::camera::Camera;
use light::DeltaLight;
use radiometry::color::Color;
use shape::Group;

pub use error::Error;
pub use loader::{load_scene_file, load_scene_str};

/// Everything the renderer needs, assembled once by the loader and
/// read-only from then on. No primitive, material or light changes during
/// a render, so the whole structure can be shared across worker threads
/// by reference.
#[derive(Debug)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<DeltaLight>,
    pub ambient: Color,
    pub root: Group,
    pub width: u32,
    pub height: u32,
    pub output_file: String,
    pub background: Color,
}
