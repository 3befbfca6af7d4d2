use crate::ray::Ray;
use math::hcm::{Point3, Vec3};
use math::Angle;

/// Perspective camera defined by an eye position, an orthonormal
/// forward/up/horizontal basis and a pair of half-field-of-view angles.
///
/// The horizontal half-FOV starts out equal to the vertical one and is
/// overwritten once the image aspect ratio is known.
#[derive(Debug)]
pub struct Camera {
    eye: Point3,
    forward: Vec3,
    up: Vec3,
    horizontal: Vec3,

    half_fov_y: Angle,
    half_fov_x: Angle,
}

impl Camera {
    /// Builds the view basis from the given (not necessarily orthogonal or
    /// unit) `forward` and `up` hints:
    /// `horizontal = forward x up`, then `up` is re-derived as
    /// `horizontal x forward` so all three are mutually orthogonal units.
    pub fn new(eye: Point3, forward: Vec3, up: Vec3, fov_y: Angle) -> Camera {
        let forward = forward.hat();
        let horizontal = forward.cross(up).hat();
        let up = horizontal.cross(forward).hat();
        let half_fov_y = fov_y * 0.5;

        Camera {
            eye,
            forward,
            up,
            horizontal,
            half_fov_y,
            half_fov_x: half_fov_y,
        }
    }

    /// Widens (or narrows) the horizontal FOV linearly with the aspect
    /// ratio. A linear scale of the angle, not of its tangent; kept
    /// as-is for output compatibility.
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.half_fov_x = self.half_fov_y * aspect_ratio;
    }

    /// Maps a normalized device coordinate `(x, y)`, both in [-1, 1], to a
    /// primary ray. The direction is left un-normalized.
    pub fn generate_ray(&self, (x, y): (f32, f32)) -> Ray {
        let alpha = self.half_fov_x.tan() * x;
        let beta = self.half_fov_y.tan() * y;
        let dir = self.horizontal * alpha + self.up * beta + self.forward;
        Ray::new(self.eye, dir)
    }

    /// Minimum ray parameter accepted by intersection tests; rejects
    /// surface points at the ray origin itself.
    pub fn t_min(&self) -> f32 {
        0.0
    }

    pub fn eye(&self) -> Point3 {
        self.eye
    }
    pub fn forward(&self) -> Vec3 {
        self.forward
    }
    pub fn up(&self) -> Vec3 {
        self.up
    }
    pub fn horizontal(&self) -> Vec3 {
        self.horizontal
    }
}
