/*
    Trig Tutor, sine, cosine and tangent on the unit circle
    Copyright (C) 2024 Trig Tutor contributors

    This program is free software: you can redistribute it and/or modify
    it under the terms of the GNU Affero General Public License as published
    by the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    This program is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
    GNU Affero General Public License for more details.

    You should have received a copy of the GNU Affero General Public License
    along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/

//! HTTP surface: `POST /api/calculate` and `GET /health`.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_derive::{Deserialize, Serialize};
use std::sync::Arc;
use typed_builder::TypedBuilder;

use crate::errors::HandlerError;
use crate::handler::{handle, CalculateResponse};
use crate::io::ConfigRepr;
use crate::render::{RenderConfig, RenderError};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;

/// Where the HTTP server listens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct ServerConfig {
    #[builder(default = String::from(DEFAULT_HOST))]
    pub host: String,
    #[builder(default = DEFAULT_PORT)]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConfigRepr for ServerConfig {}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Full configuration of the service, as loaded from a yaml file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub render: RenderConfig,
}

impl ConfigRepr for AppConfig {}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorBody {
            error: self.kind(),
            message: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the router. The render configuration is the only state, and it is read only.
pub fn create_router(render_cfg: Arc<RenderConfig>) -> Router {
    Router::new()
        .route("/api/calculate", post(calculate))
        .route("/health", get(health))
        .with_state(render_cfg)
}

async fn calculate(
    State(cfg): State<Arc<RenderConfig>>,
    body: Bytes,
) -> Result<Json<CalculateResponse>, HandlerError> {
    // Rendering is CPU bound
    match tokio::task::spawn_blocking(move || handle(&body, &cfg)).await {
        Ok(outcome) => outcome.map(Json),
        Err(join_error) => {
            error!("calculation task failed: {join_error}");
            Err(HandlerError::RenderFailure {
                source: RenderError::Interrupted {
                    details: join_error.to_string(),
                },
            })
        }
    }
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Serves the API until interrupted with Ctrl+C.
pub async fn serve(cfg: AppConfig) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, create_router(Arc::new(cfg.render)))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("cannot listen for Ctrl+C: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
