use geometry::ray::Ray;
use light::DeltaLight;
use math::hcm::{Point3, Vec3};
use radiometry::color::Color;

/// Blinn-Phong surface description. One instance is owned (via `Arc`) by
/// every primitive that captured it at scene-build time; it never changes
/// afterwards.
#[derive(Debug, Clone)]
pub struct Material {
    pub diffuse: Color,
    pub specular: Color,
    pub emission: Color,
    pub shininess: f32,
}

impl Default for Material {
    /// All-black, zero-shininess surface. Spheres declared before any
    /// material directive shade to black instead of failing.
    fn default() -> Self {
        Material {
            diffuse: Color::black(),
            specular: Color::black(),
            emission: Color::black(),
            shininess: 0.0,
        }
    }
}

impl Material {
    pub fn new(diffuse: Color, specular: Color, emission: Color, shininess: f32) -> Self {
        Material {
            diffuse,
            specular,
            emission,
            shininess,
        }
    }

    /// Evaluates the local shading equation at `position` for a single
    /// light. The caller accumulates one `shade` result per light; the
    /// emission term therefore contributes once per light evaluated, which
    /// matters for multi-light scenes.
    ///
    /// `normal` may be un-normalized; it is normalized here. The result is
    /// saturated to [0, 1] per channel.
    pub fn shade(&self, ray: &Ray, position: Point3, normal: Vec3, light: &DeltaLight) -> Color {
        let (light_dir, light_color) = light.illumination_at(position);
        let n = normal.hat();

        let diffuse_weight = n.dot(light_dir).clamp(0.0, 1.0);
        let mut output = self.diffuse * light_color * diffuse_weight;

        let view = (ray.origin - position).hat();
        let half = (view + light_dir).hat();
        // The dot is floored at zero before exponentiation: a negative base
        // with a fractional exponent is NaN.
        let specular_weight = half.dot(n).max(0.0).powf(self.shininess).clamp(0.0, 1.0);
        output += self.specular * light_color * specular_weight;

        output += self.emission;

        output.saturate()
    }
}
