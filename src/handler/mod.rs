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

use serde_derive::Serialize;
use serde_json::{Map, Value};
use snafu::prelude::*;

use crate::errors::{HandlerError, MalformedInputSnafu};
use crate::render::{render, RenderConfig, RenderRequest};
use crate::trig::{evaluate, format_degrees, Quadrant};

/// Whether the tangent is plotted when the request does not say.
pub const DEFAULT_SHOW_TAN: bool = true;

/// A decoded request: the angle to explore and whether to plot the tangent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CalculateRequest {
    pub angle_deg: f64,
    pub show_tan: bool,
}

impl CalculateRequest {
    /// Builds a request, rejecting non finite angles.
    pub fn new(angle_deg: f64, show_tan: bool) -> Result<Self, HandlerError> {
        ensure!(
            angle_deg.is_finite(),
            MalformedInputSnafu {
                details: format!("`angle` must be a finite number of degrees, got {angle_deg}")
            }
        );
        Ok(Self {
            angle_deg,
            show_tan,
        })
    }

    /// Decodes a JSON request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, HandlerError> {
        let value: Value = serde_json::from_slice(body).map_err(|e| HandlerError::MalformedInput {
            details: format!("request body is not valid JSON: {e}"),
        })?;
        Self::from_value(&value)
    }

    /// Decodes an already parsed JSON request, e.g. `{"angle": 30, "show_tan": true}`.
    pub fn from_value(value: &Value) -> Result<Self, HandlerError> {
        let fields = value.as_object().context(MalformedInputSnafu {
            details: "request body must be a JSON object",
        })?;

        let angle_deg = parse_angle(fields)?;
        let show_tan = match fields.get("show_tan") {
            None | Some(Value::Null) => DEFAULT_SHOW_TAN,
            Some(flag) => parse_flag(flag)?,
        };

        Self::new(angle_deg, show_tan)
    }
}

fn parse_angle(fields: &Map<String, Value>) -> Result<f64, HandlerError> {
    match fields.get("angle") {
        None | Some(Value::Null) => MalformedInputSnafu {
            details: "missing `angle`",
        }
        .fail(),
        Some(Value::Number(number)) => number.as_f64().context(MalformedInputSnafu {
            details: format!("`angle` {number} is not representable"),
        }),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok().context(MalformedInputSnafu {
            details: format!("`angle` {text:?} is not numeric"),
        }),
        Some(other) => MalformedInputSnafu {
            details: format!("`angle` must be a number, got {other}"),
        }
        .fail(),
    }
}

fn parse_flag(flag: &Value) -> Result<bool, HandlerError> {
    let parsed = match flag {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_f64() {
            Some(n) if n == 0.0 => Some(false),
            Some(n) if n == 1.0 => Some(true),
            _ => None,
        },
        Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Some(true),
            "false" | "0" | "no" | "off" => Some(false),
            _ => None,
        },
        _ => None,
    };

    parsed.context(MalformedInputSnafu {
        details: format!("`show_tan` must be a boolean, got {flag}"),
    })
}

/// The payload returned for a successful request.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculateResponse {
    #[serde(rename = "sin")]
    pub sine: f64,
    #[serde(rename = "cos")]
    pub cosine: f64,
    /// `null` on the asymptotes
    #[serde(rename = "tan")]
    pub tangent: Option<f64>,
    pub quadrant: Quadrant,
    /// Base64 PNG of the unit circle diagram
    pub circle_img: String,
    /// Base64 PNG of the function graph
    pub graph_img: String,
}

/// Decodes the raw body of a request, evaluates the angle and renders both images.
pub fn handle(body: &[u8], cfg: &RenderConfig) -> Result<CalculateResponse, HandlerError> {
    let request = CalculateRequest::from_slice(body).map_err(|e| {
        warn!("rejected request: {e}");
        e
    })?;
    respond(request, cfg)
}

/// Same as [handle] for a body that was already parsed as JSON.
pub fn handle_value(value: &Value, cfg: &RenderConfig) -> Result<CalculateResponse, HandlerError> {
    let request = CalculateRequest::from_value(value).map_err(|e| {
        warn!("rejected request: {e}");
        e
    })?;
    respond(request, cfg)
}

/// Evaluates then renders a decoded request. Either everything is returned, or an error.
pub fn respond(
    request: CalculateRequest,
    cfg: &RenderConfig,
) -> Result<CalculateResponse, HandlerError> {
    let evaluation = evaluate(request.angle_deg);
    debug!(
        "θ = {} is {}: {evaluation}",
        format_degrees(request.angle_deg),
        evaluation.quadrant
    );

    let (circle, graph) = render(&RenderRequest::new(evaluation, request.show_tan), cfg)
        .map_err(|source| {
            error!(
                "rendering θ = {} failed: {source}",
                format_degrees(request.angle_deg)
            );
            HandlerError::RenderFailure { source }
        })?;

    Ok(CalculateResponse {
        sine: evaluation.sine,
        cosine: evaluation.cosine,
        tangent: evaluation.tangent,
        quadrant: evaluation.quadrant,
        circle_img: circle.to_base64(),
        graph_img: graph.to_base64(),
    })
}
