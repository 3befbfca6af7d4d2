//! raycast: renders a scene-description file to a PNG by casting one ray
//! per pixel against a sphere/transform/group hierarchy and evaluating
//! Blinn-Phong shading at the nearest hit.

pub mod cli_options;
pub mod renderer;
