use rstest::*;
use trig_tutor::render::render_unit_circle;
use trig_tutor::{evaluate, RenderConfig};

use crate::{centroid, decode, pixels_of, ANGLE, COSINE, SINE};

#[fixture]
fn cfg() -> RenderConfig {
    RenderConfig::default()
}

#[rstest]
#[case(0.0)]
#[case(30.0)]
#[case(90.0)]
#[case(180.0)]
#[case(270.0)]
#[case(360.0)]
#[case(-30.0)]
#[case(720.5)]
#[case(1e6)]
fn unit_circle_renders(cfg: RenderConfig, #[case] angle_deg: f64) {
    let img = render_unit_circle(&evaluate(angle_deg), &cfg).unwrap();
    let decoded = decode(&img);
    assert_eq!(decoded.dimensions(), (600, 600));
    // The radius and the point are always drawn
    assert!(!pixels_of(&decoded, ANGLE).is_empty());
}

#[rstest]
fn point_follows_the_angle(cfg: RenderConfig) {
    let upper_right = decode(&render_unit_circle(&evaluate(45.0), &cfg).unwrap());
    let lower_left = decode(&render_unit_circle(&evaluate(225.0), &cfg).unwrap());
    let upper_left = decode(&render_unit_circle(&evaluate(135.0), &cfg).unwrap());

    let (x45, y45) = centroid(&upper_right, ANGLE).unwrap();
    let (x225, y225) = centroid(&lower_left, ANGLE).unwrap();
    let (x135, y135) = centroid(&upper_left, ANGLE).unwrap();

    // Pixel rows grow downwards
    assert!(x45 > x225);
    assert!(y45 < y225);
    assert!(x45 > x135);
    assert!((y45 - y135).abs() < 10.0);
}

#[rstest]
fn projections_vanish_on_the_axes(cfg: RenderConfig) {
    let on_x_axis = decode(&render_unit_circle(&evaluate(0.0), &cfg).unwrap());
    let on_y_axis = decode(&render_unit_circle(&evaluate(90.0), &cfg).unwrap());
    let inside = decode(&render_unit_circle(&evaluate(45.0), &cfg).unwrap());

    // Only the legend entries remain for the zero length projection
    assert!(pixels_of(&on_x_axis, SINE).len() < pixels_of(&inside, SINE).len());
    assert!(pixels_of(&on_y_axis, COSINE).len() < pixels_of(&inside, COSINE).len());
}

#[rstest]
fn coterminal_angles_draw_the_same_point(cfg: RenderConfig) {
    let first = decode(&render_unit_circle(&evaluate(30.0), &cfg).unwrap());
    let second = decode(&render_unit_circle(&evaluate(390.0), &cfg).unwrap());

    let (x1, y1) = centroid(&first, ANGLE).unwrap();
    let (x2, y2) = centroid(&second, ANGLE).unwrap();
    assert!((x1 - x2).abs() < 2.0, "{x1} != {x2}");
    assert!((y1 - y2).abs() < 2.0, "{y1} != {y2}");
}
