use math::hcm::{Point3, Vec3};
use radiometry::color::Color;

/// Zero-extent light sources. Illumination arrives from exactly one
/// direction at any shaded point, with no distance falloff and no
/// occlusion test.
#[derive(Debug, Clone, Copy)]
pub enum DeltaLight {
    Point {
        position: Point3,
        color: Color,
    },
    /// Models light from very far away (e.g. sun light); `direction` is the
    /// direction the light travels, not the direction towards the source.
    Distant {
        direction: Vec3,
        color: Color,
    },
}

impl DeltaLight {
    /// Creates a point light with the given position and color.
    pub fn point(position: Point3, color: Color) -> Self {
        Self::Point { position, color }
    }

    /// Creates a distant light travelling along `direction`.
    pub fn distant(direction: Vec3, color: Color) -> Self {
        Self::Distant { direction, color }
    }

    /// Maps a scene-description light kind to a variant: `"point"` places a
    /// light at `position`, `"directional"` reads `position` as a travel
    /// direction. Returns `None` for any other kind.
    pub fn from_kind(kind: &str, position: Vec3, color: Color) -> Option<Self> {
        match kind {
            "point" => Some(Self::point(Point3::from(position), color)),
            "directional" => Some(Self::distant(position, color)),
            _ => None,
        }
    }

    /// Computes the unit direction from `target` towards the light and the
    /// light's color. Every shaded point receives the full color; there is
    /// no attenuation or visibility term.
    pub fn illumination_at(&self, target: Point3) -> (Vec3, Color) {
        match *self {
            Self::Point { position, color } => ((position - target).hat(), color),
            Self::Distant { direction, color } => (-direction.hat(), color),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use math::hcm::{point3, vec3};

    #[test]
    fn distant_light_ignores_position() {
        let light = DeltaLight::distant(vec3(0.0, 0.0, -2.0), Color::white());
        let (dir_a, col_a) = light.illumination_at(point3(5.0, 1.0, 0.0));
        let (dir_b, col_b) = light.illumination_at(point3(-3.0, 0.0, 9.0));
        assert_eq!(dir_a, vec3(0.0, 0.0, 1.0));
        assert_eq!(dir_a, dir_b);
        assert_eq!(col_a, col_b);
    }

    #[test]
    fn point_light_direction_depends_on_target() {
        let light = DeltaLight::point(point3(0.0, 2.0, 0.0), Color::gray(0.5));
        let (dir, color) = light.illumination_at(point3(0.0, 0.0, 0.0));
        assert_eq!(dir, vec3(0.0, 1.0, 0.0));
        assert_eq!(color, Color::gray(0.5));
        let (dir, _) = light.illumination_at(point3(2.0, 2.0, 0.0));
        assert_eq!(dir, vec3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn kind_mapping() {
        assert!(DeltaLight::from_kind("point", vec3(0.0, 1.0, 0.0), Color::white()).is_some());
        assert!(
            DeltaLight::from_kind("directional", vec3(0.0, 1.0, 0.0), Color::white()).is_some()
        );
        assert!(DeltaLight::from_kind("spot", vec3(0.0, 1.0, 0.0), Color::white()).is_none());
    }
}
