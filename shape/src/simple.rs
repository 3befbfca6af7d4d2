use std::sync::Arc;

use geometry::ray::Ray;
use material::Material;
use math::float;
use math::hcm::Point3;

use crate::{Hit, Primitive};

#[derive(Debug, Clone)]
pub struct Sphere {
    center: Point3,
    radius: f32,
    material: Arc<Material>,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32, material: Arc<Material>) -> Sphere {
        assert!(!center.has_nan() && !radius.is_nan());
        Sphere {
            center,
            radius,
            material,
        }
    }
    pub fn center(&self) -> Point3 {
        self.center
    }
    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Primitive for Sphere {
    fn intersect(&self, ray: &Ray, best: Option<&Hit>, t_min: f32) -> Option<Hit> {
        // r = o + td, with d normalized so that d*d = 1.
        // sphere: (p-c)(p-c) = radius^2
        // (td + o - c)^2 = radius^2
        // t^2 + 2t d*(o-c) + (o-c)^2 - radius^2 = 0
        // disc = (d*(o-c))^2 - ((o-c)^2 - radius^2)
        let d = ray.dir.hat();
        let oc = ray.origin - self.center;
        let oc_dot_d = oc.dot(d);
        let disc = oc_dot_d * oc_dot_d - (oc.norm_squared() - self.radius * self.radius);
        if disc < 0.0 {
            return None;
        }
        let disc_root = disc.sqrt();
        let (t_near, _t_far) = float::min_max(-oc_dot_d - disc_root, -oc_dot_d + disc_root);

        // Only the near root is considered; clamping at zero means a ray
        // starting inside the sphere reports no hit.
        let t = t_near.max(0.0);
        if t <= t_min {
            return None;
        }
        match best {
            Some(hit) if t >= hit.t => None,
            _ => {
                let normal = ray.position_at(t) - self.center;
                Some(Hit::new(t, normal, self.material.clone()))
            }
        }
    }
}
