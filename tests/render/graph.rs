use rstest::*;
use trig_tutor::render::render_function_graph;
use trig_tutor::{evaluate, RenderConfig};

use crate::{centroid, decode, pixels_of, ANGLE, COSINE, SINE, TANGENT};

#[fixture]
fn cfg() -> RenderConfig {
    RenderConfig::default()
}

#[rstest]
#[case(30.0, true)]
#[case(30.0, false)]
#[case(90.0, true)]
#[case(270.0, true)]
#[case(-90.0, true)]
#[case(0.0, false)]
#[case(540.0, true)]
fn graph_renders(cfg: RenderConfig, #[case] angle_deg: f64, #[case] show_tangent: bool) {
    let img = render_function_graph(&evaluate(angle_deg), show_tangent, &cfg).unwrap();
    let decoded = decode(&img);
    assert_eq!(decoded.dimensions(), (1000, 600));
    assert!(!pixels_of(&decoded, SINE).is_empty());
    assert!(!pixels_of(&decoded, COSINE).is_empty());
}

#[rstest]
fn tangent_only_when_requested(cfg: RenderConfig) {
    let without = decode(&render_function_graph(&evaluate(30.0), false, &cfg).unwrap());
    let with = decode(&render_function_graph(&evaluate(30.0), true, &cfg).unwrap());

    assert!(pixels_of(&without, TANGENT).is_empty());
    assert!(!pixels_of(&with, TANGENT).is_empty());
}

#[rstest]
fn tangent_curve_is_drawn_at_the_asymptote(cfg: RenderConfig) {
    // The marker is skipped, not the curve
    let img = decode(&render_function_graph(&evaluate(90.0), true, &cfg).unwrap());
    assert!(!pixels_of(&img, TANGENT).is_empty());
}

#[rstest]
fn angle_line_follows_the_angle(cfg: RenderConfig) {
    let early = decode(&render_function_graph(&evaluate(60.0), false, &cfg).unwrap());
    let late = decode(&render_function_graph(&evaluate(300.0), false, &cfg).unwrap());
    let wrapped = decode(&render_function_graph(&evaluate(-60.0), false, &cfg).unwrap());

    let (x_early, _) = centroid(&early, ANGLE).unwrap();
    let (x_late, _) = centroid(&late, ANGLE).unwrap();
    let (x_wrapped, _) = centroid(&wrapped, ANGLE).unwrap();

    assert!(x_early < x_late);
    // -60° is placed at 300°
    assert!((x_late - x_wrapped).abs() < 2.0);
}

#[test]
fn angle_outside_of_a_narrow_domain() {
    let cfg = RenderConfig::builder().domain_deg((0.0, 180.0)).build();

    let outside = decode(&render_function_graph(&evaluate(270.0), true, &cfg).unwrap());
    assert!(pixels_of(&outside, ANGLE).is_empty());

    // 390° wraps to 30°, which is in the domain
    let wrapped = decode(&render_function_graph(&evaluate(390.0), true, &cfg).unwrap());
    assert!(!pixels_of(&wrapped, ANGLE).is_empty());
}

#[test]
fn other_domains() {
    let cfg = RenderConfig::builder()
        .domain_deg((-180.0, 180.0))
        .tan_clip(2.0)
        .build();
    let img = render_function_graph(&evaluate(-45.0), true, &cfg).unwrap();
    assert!(!pixels_of(&decode(&img), TANGENT).is_empty());
}
