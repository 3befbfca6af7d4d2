use std::fmt::{Display, Formatter, Result};

use math::hcm;

/// Represents a ray:
///
///   origin + t * direction
///
/// The direction is stored as given by the caller and is not necessarily
/// unit-length; `position_at` normalizes it, so `t` is always measured in
/// world-length units along the ray.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
}

impl Ray {
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray { origin, dir }
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + t * self.dir.hat()
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}
