mod circle;
mod graph;

use trig_tutor::render::RenderError;
use trig_tutor::{evaluate, render, RenderConfig, RenderRequest};

use crate::decode;

#[test]
fn both_images_are_rendered() {
    let cfg = RenderConfig::default();
    let (circle, graph) = render(&RenderRequest::new(evaluate(30.0), true), &cfg).unwrap();

    assert_eq!(decode(&circle).dimensions(), cfg.circle_size);
    assert_eq!(decode(&graph).dimensions(), cfg.graph_size);
    assert!(circle.data_uri().starts_with("data:image/png;base64,"));
}

#[test]
fn rendering_is_deterministic() {
    let cfg = RenderConfig::default();
    let request = RenderRequest::new(evaluate(123.4), true);

    let (circle1, graph1) = render(&request, &cfg).unwrap();
    let (circle2, graph2) = render(&request, &cfg).unwrap();

    assert_eq!(decode(&circle1), decode(&circle2));
    assert_eq!(decode(&graph1), decode(&graph2));
}

#[test]
fn unusable_sizes_fail() {
    let request = RenderRequest::new(evaluate(30.0), false);

    let cfg = RenderConfig::builder().circle_size((0, 0)).build();
    assert!(matches!(
        render(&request, &cfg),
        Err(RenderError::Buffer {
            width: 0,
            height: 0
        })
    ));

    let cfg = RenderConfig::builder().graph_size((100_000, 600)).build();
    assert!(matches!(
        render(&request, &cfg),
        Err(RenderError::Buffer { .. })
    ));
}

#[test]
fn custom_sizes() {
    let cfg = RenderConfig::builder()
        .circle_size((300, 400))
        .graph_size((640, 360))
        .build();
    let (circle, graph) = render(&RenderRequest::new(evaluate(-45.0), false), &cfg).unwrap();

    assert_eq!(decode(&circle).dimensions(), (300, 400));
    assert_eq!(decode(&graph).dimensions(), (640, 360));
}
