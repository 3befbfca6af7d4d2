/// Scalar helpers and the `Angle` type that keeps degrees and radians from
/// being mixed up.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors, 4D vector, 4x4 matrices.
/// - Function `normalize()` to build a normalized `Vec3`.
pub mod hcm;

pub use float::Angle;

pub fn new_rad(rad: f32) -> float::Angle {
    float::Angle::new_rad(rad)
}
pub fn new_deg(deg: f32) -> float::Angle {
    float::Angle::new_deg(deg)
}
