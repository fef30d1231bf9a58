use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use trig_tutor::server::create_router;
use trig_tutor::RenderConfig;

use crate::{decode_base64, pixels_of, TANGENT};

fn app(cfg: RenderConfig) -> Router {
    create_router(Arc::new(cfg))
}

async fn post_calculate(app: Router, body: &'static str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/calculate")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn calculate() {
    let (status, payload) =
        post_calculate(app(RenderConfig::default()), r#"{"angle": 30, "show_tan": true}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert!((payload["sin"].as_f64().unwrap() - 0.5).abs() < 1e-9);
    assert!((payload["cos"].as_f64().unwrap() - 0.866_025_403_784).abs() < 1e-9);
    assert!((payload["tan"].as_f64().unwrap() - 0.577_350_269_19).abs() < 1e-9);
    assert_eq!(payload["quadrant"], "in quadrant I");

    let graph = decode_base64(payload["graph_img"].as_str().unwrap());
    assert_eq!(graph.dimensions(), (1000, 600));
    assert!(!pixels_of(&graph, TANGENT).is_empty());
    let circle = decode_base64(payload["circle_img"].as_str().unwrap());
    assert_eq!(circle.dimensions(), (600, 600));
}

#[tokio::test]
async fn undefined_tangent() {
    let (status, payload) =
        post_calculate(app(RenderConfig::default()), r#"{"angle": 270, "show_tan": false}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert!(payload["tan"].is_null());
    assert_eq!(payload["quadrant"], "on the negative y-axis");

    let graph = decode_base64(payload["graph_img"].as_str().unwrap());
    assert!(pixels_of(&graph, TANGENT).is_empty());
}

#[tokio::test]
async fn malformed_input() {
    let (status, payload) =
        post_calculate(app(RenderConfig::default()), r#"{"angle": "abc"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(payload["error"], "MalformedInput");
    assert!(payload["message"].as_str().unwrap().contains("abc"));
    assert!(payload.get("sin").is_none());
}

#[tokio::test]
async fn render_failure() {
    let cfg = RenderConfig::builder().graph_size((0, 600)).build();
    let (status, payload) = post_calculate(app(cfg), r#"{"angle": 30}"#).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(payload["error"], "RenderFailure");
    assert!(payload.get("circle_img").is_none());
}

#[tokio::test]
async fn health() {
    let response = app(RenderConfig::default())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let payload: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(payload["status"], "ok");
}
