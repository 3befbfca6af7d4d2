use geometry::ray::Ray;
use light::DeltaLight;
use material::Material;
use math::hcm::{point3, vec3};
use radiometry::color::Color;

fn head_on_setup() -> (Ray, DeltaLight) {
    // Camera looking down -z at a surface facing +z, lit head-on.
    let ray = Ray::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));
    let light = DeltaLight::distant(vec3(0.0, 0.0, -1.0), Color::white());
    (ray, light)
}

#[test]
fn head_on_diffuse_is_full() {
    let (ray, light) = head_on_setup();
    let mtl = Material::new(Color::white(), Color::black(), Color::black(), 1.0);
    let out = mtl.shade(&ray, point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0), &light);
    assert_eq!(out, Color::white());
}

#[test]
fn grazing_light_contributes_nothing() {
    let ray = Ray::new(point3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -1.0));
    // Light travelling along +x grazes a +z-facing surface from the side.
    let light = DeltaLight::distant(vec3(1.0, 0.0, 0.0), Color::white());
    let mtl = Material::new(Color::white(), Color::black(), Color::black(), 1.0);
    let out = mtl.shade(&ray, point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0), &light);
    assert_eq!(out, Color::black());
}

#[test]
fn emission_contributes_on_every_light_pass() {
    let (ray, light) = head_on_setup();
    let mtl = Material::new(
        Color::black(),
        Color::black(),
        Color::new(0.1, 0.2, 0.3),
        1.0,
    );
    let pos = point3(0.0, 0.0, 1.0);
    let normal = vec3(0.0, 0.0, 1.0);
    let mut total = Color::black();
    for _ in 0..2 {
        total += mtl.shade(&ray, pos, normal, &light);
    }
    // Two lights (here: the same one twice) double the emission term.
    assert!((total.r - 0.2).abs() < 1e-6);
    assert!((total.g - 0.4).abs() < 1e-6);
    assert!((total.b - 0.6).abs() < 1e-6);
}

#[test]
fn output_is_saturated() {
    let (ray, _) = head_on_setup();
    let hot = DeltaLight::distant(vec3(0.0, 0.0, -1.0), Color::gray(10.0));
    let mtl = Material::new(Color::white(), Color::white(), Color::black(), 2.0);
    let out = mtl.shade(&ray, point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0), &hot);
    assert_eq!(out, Color::white());
}

#[test]
fn un_normalized_normal_is_accepted() {
    let (ray, light) = head_on_setup();
    let mtl = Material::new(Color::gray(0.5), Color::black(), Color::black(), 1.0);
    let a = mtl.shade(&ray, point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 1.0), &light);
    let b = mtl.shade(&ray, point3(0.0, 0.0, 1.0), vec3(0.0, 0.0, 7.5), &light);
    assert_eq!(a, b);
}

#[test]
fn specular_peaks_at_mirror_configuration() {
    // View and light directions symmetric about the normal; the half
    // vector coincides with the normal so the specular term is maximal.
    let ray = Ray::new(point3(1.0, 1.0, 0.0), vec3(-1.0, -1.0, 0.0));
    let light = DeltaLight::point(point3(-1.0, 1.0, 0.0), Color::white());
    let mtl = Material::new(Color::black(), Color::white(), Color::black(), 30.0);
    let out = mtl.shade(&ray, point3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), &light);
    assert!((out.r - 1.0).abs() < 1e-4, "specular = {:?}", out);

    // Off the mirror direction the lobe falls off sharply.
    let off_light = DeltaLight::point(point3(0.2, 1.0, 0.0), Color::white());
    let off = mtl.shade(&ray, point3(0.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), &off_light);
    assert!(off.r < out.r);
}
