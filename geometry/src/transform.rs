use crate::ray::Ray;
use math::hcm::{Mat4, Point3, Vec3};
use math::Angle;
use std::ops::Mul;

/// An invertible affine transform carrying both the forward matrix and its
/// inverse. Every constructor builds the inverse directly from the
/// parameters, and composition composes both directions, so a general 4x4
/// inversion is never needed.
#[derive(Debug, Clone, Copy)]
pub struct AffineTransform {
    forward: Mat4,
    inverse: Mat4,
}

pub trait Transform<T> {
    fn apply(&self, x: T) -> T;
}

impl AffineTransform {
    pub fn identity() -> Self {
        Self {
            forward: Mat4::IDENTITY,
            inverse: Mat4::IDENTITY,
        }
    }
    pub fn translater(t: Vec3) -> Self {
        Self {
            forward: Mat4::translater(t),
            inverse: Mat4::translater(-t),
        }
    }
    pub fn rotater(axis: Vec3, angle: Angle) -> Self {
        let forward = Mat4::rotater(axis, angle);
        Self {
            forward,
            inverse: forward.transpose(),
        }
    }
    /// Non-uniform scale. Every component must be nonzero; a zero
    /// component would make the matrix singular.
    pub fn scaler(scale: Vec3) -> Self {
        let Vec3 { x, y, z } = scale;
        let scale_inv = Vec3::new(1.0 / x, 1.0 / y, 1.0 / z);
        Self {
            forward: Mat4::nonuniform_scale(scale),
            inverse: Mat4::nonuniform_scale(scale_inv),
        }
    }

    pub fn matrix(&self) -> Mat4 {
        self.forward
    }
    pub fn inverse_matrix(&self) -> Mat4 {
        self.inverse
    }
    pub fn inverse(&self) -> Self {
        Self {
            forward: self.inverse,
            inverse: self.forward,
        }
    }
}

impl Mul for AffineTransform {
    type Output = AffineTransform;
    fn mul(self, rhs: Self) -> Self::Output {
        // self * rhs -> self.forward * rhs.forward, rhs.inverse * self.inverse.
        Self {
            forward: self.forward * rhs.forward,
            inverse: rhs.inverse * self.inverse,
        }
    }
}

impl std::fmt::Display for AffineTransform {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let m = &self.forward;
        write!(
            f,
            "\n|{:5.2} {:5.2} {:5.2} {:5.2}|\
             \n|{:5.2} {:5.2} {:5.2} {:5.2}|\
             \n|{:5.2} {:5.2} {:5.2} {:5.2}|\
             \n|{:5.2} {:5.2} {:5.2} {:5.2}|\n",
            m.cols[0][0], m.cols[1][0], m.cols[2][0], m.cols[3][0],
            m.cols[0][1], m.cols[1][1], m.cols[2][1], m.cols[3][1],
            m.cols[0][2], m.cols[1][2], m.cols[2][2], m.cols[3][2],
            m.cols[0][3], m.cols[1][3], m.cols[2][3], m.cols[3][3]
        )
    }
}

// Transforms on Vec3, Point3 and Ray.
// -------------------------------------------------------------------------------------------------

impl Transform<Vec3> for AffineTransform {
    fn apply(&self, x: Vec3) -> Vec3 {
        let x4 = self.forward * x.as_vec4();
        Vec3::from(x4)
    }
}
impl Transform<Point3> for AffineTransform {
    fn apply(&self, p: Point3) -> Point3 {
        let v4 = self.forward * p.as_vec4();
        Point3::new(v4.x / v4.w, v4.y / v4.w, v4.z / v4.w)
    }
}
impl Transform<Ray> for AffineTransform {
    fn apply(&self, r: Ray) -> Ray {
        Ray::new(self.apply(r.origin), self.apply(r.dir))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::hcm::{point3, vec3};

    #[test]
    fn inverse_roundtrip() {
        let trans = AffineTransform::rotater(vec3(0.6, 0.8, 0.0), math::new_rad(0.3))
            * AffineTransform::translater(vec3(0.3, 0.4, 0.6))
            * AffineTransform::scaler(vec3(2.0, 1.0, 0.5));

        let p = point3(1.0, -2.0, 3.5);
        let roundtrip = trans.inverse().apply(trans.apply(p));
        assert!(roundtrip.distance_to(p) < 1e-5, "{} vs {}", roundtrip, p);

        let v = vec3(-0.4, 1.2, 0.9);
        let roundtrip = trans.inverse().apply(trans.apply(v));
        assert!((roundtrip - v).norm_squared() < 1e-8);
    }

    #[test]
    fn composition_order() {
        // Translate-then-scale differs from scale-then-translate.
        let t = AffineTransform::translater(vec3(1.0, 0.0, 0.0));
        let s = AffineTransform::scaler(vec3(2.0, 2.0, 2.0));
        let p = point3(1.0, 0.0, 0.0);
        // (s * t) applies t first in column-vector convention.
        assert_eq!((s * t).apply(p), point3(4.0, 0.0, 0.0));
        assert_eq!((t * s).apply(p), point3(3.0, 0.0, 0.0));
    }
}
