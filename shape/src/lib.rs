mod group;
mod simple;
mod transformed;

use std::fmt::{Display, Formatter, Result};
use std::sync::Arc;

use geometry::ray::Ray;
use material::Material;
use math::hcm::Vec3;

pub use group::Group;
pub use simple::Sphere;
pub use transformed::Transformed;

/// Records a ray-surface intersection:
/// - `t`: ray parameter at the surface, always greater than the `t_min` of
///   the query that produced it.
/// - `normal`: surface normal, un-normalized; consumers normalize.
/// - `material`: the surface description captured by the primitive.
#[derive(Debug, Clone)]
pub struct Hit {
    pub t: f32,
    pub normal: Vec3,
    pub material: Arc<Material>,
}

impl Hit {
    pub fn new(t: f32, normal: Vec3, material: Arc<Material>) -> Hit {
        Hit {
            t,
            normal,
            material,
        }
    }
}

impl Display for Hit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "t = {:.3}, normal = {}", self.t, self.normal)
    }
}

/// The one intersection contract shared by leaf geometry (`Sphere`),
/// coordinate-space wrappers (`Transformed`) and composites (`Group`).
///
/// `best` is the closest hit found so far by the caller; an implementor
/// only returns a hit that beats it. Threading the running best through
/// the calls is how `Group` accumulates a closest-hit result without a
/// comparison at every call site.
pub trait Primitive: Send + Sync + std::fmt::Debug {
    fn intersect(&self, ray: &Ray, best: Option<&Hit>, t_min: f32) -> Option<Hit>;
}
