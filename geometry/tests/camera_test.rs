use geometry::Camera;
use math::hcm::{point3, vec3};

#[test]
fn center_ray_is_forward() {
    let camera = Camera::new(
        point3(0.0, 0.0, 5.0),
        vec3(0.0, 0.0, -1.0),
        vec3(0.0, 1.0, 0.0),
        math::new_deg(90.0),
    );
    let ray = camera.generate_ray((0.0, 0.0));
    assert_eq!(ray.origin, camera.eye());
    assert!((ray.dir - camera.forward()).norm_squared() < 1e-10);
}

#[test]
fn basis_is_orthonormal() {
    // Deliberately skewed, non-unit hints.
    let camera = Camera::new(
        point3(1.0, 2.0, 3.0),
        vec3(1.0, 0.5, -2.0),
        vec3(0.3, 2.0, 0.1),
        math::new_deg(60.0),
    );
    let (f, u, h) = (camera.forward(), camera.up(), camera.horizontal());
    for v in [f, u, h].iter() {
        assert!((v.norm() - 1.0).abs() < 1e-5);
    }
    assert!(f.dot(u).abs() < 1e-5);
    assert!(f.dot(h).abs() < 1e-5);
    assert!(u.dot(h).abs() < 1e-5);
}

#[test]
fn aspect_ratio_scales_horizontal_extent() {
    let mut camera = Camera::new(
        point3(0.0, 0.0, 0.0),
        vec3(0.0, 0.0, -1.0),
        vec3(0.0, 1.0, 0.0),
        math::new_deg(90.0),
    );
    let square = camera.generate_ray((1.0, 0.0));
    camera.set_aspect_ratio(1.5);
    let wide = camera.generate_ray((1.0, 0.0));
    // tan(45 deg) = 1; tan(67.5 deg) > 1, so the edge ray leans further out.
    let lean_square = square.dir.dot(camera.horizontal());
    let lean_wide = wide.dir.dot(camera.horizontal());
    assert!((lean_square - 1.0).abs() < 1e-5);
    assert!(lean_wide > lean_square);
}

#[test]
fn vertical_ndc_points_up() {
    let camera = Camera::new(
        point3(0.0, 0.0, 5.0),
        vec3(0.0, 0.0, -1.0),
        vec3(0.0, 1.0, 0.0),
        math::new_deg(90.0),
    );
    let top = camera.generate_ray((0.0, 1.0));
    assert!(top.dir.dot(camera.up()) > 0.0);
}
