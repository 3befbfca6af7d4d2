use geometry::ray::Ray;
use geometry::transform::AffineTransform;
use math::hcm::{Mat4, Point3, Vec3};

use crate::{Hit, Primitive};

/// Wraps a child primitive in its own coordinate space. Rays are pulled
/// into the child's space through the inverse matrix; hit normals are
/// pushed back to world space through the transpose of the inverse, which
/// stays correct under non-uniform scale.
///
/// The inverse and its transpose are fixed at construction; transforms
/// never change once the scene is built.
#[derive(Debug)]
pub struct Transformed {
    child: Box<dyn Primitive>,
    inverse: Mat4,
    normal_matrix: Mat4,
}

impl Transformed {
    pub fn new(child: Box<dyn Primitive>, transform: AffineTransform) -> Self {
        let inverse = transform.inverse_matrix();
        Transformed {
            child,
            inverse,
            normal_matrix: inverse.transpose(),
        }
    }
}

impl Primitive for Transformed {
    fn intersect(&self, ray: &Ray, best: Option<&Hit>, t_min: f32) -> Option<Hit> {
        // Direction carries w = 0; de-homogenize only if a w shows up.
        let dir4 = self.inverse * ray.dir.as_vec4();
        let mut dir = Vec3::from(dir4);
        if dir4.w != 0.0 {
            dir = dir / dir4.w;
        }
        let origin4 = self.inverse * ray.origin.as_vec4();
        let origin = Point3::new(
            origin4.x / origin4.w,
            origin4.y / origin4.w,
            origin4.z / origin4.w,
        );

        let local_ray = Ray::new(origin, dir);
        let mut hit = self.child.intersect(&local_ray, best, t_min)?;
        hit.normal = self.normal_matrix * hit.normal;
        Some(hit)
    }
}
