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

use snafu::prelude::*;

use crate::render::RenderError;

/// Failures reported to whoever sent the request.
///
/// An undefined tangent is not an error: it is a regular `null` value of the response.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum HandlerError {
    /// The angle is missing or not numeric, or the tangent flag cannot be read as a boolean
    #[snafu(display("malformed input: {details}"))]
    MalformedInput { details: String },
    /// The visualizations could not be produced
    #[snafu(display("rendering failed: {source}"))]
    RenderFailure { source: RenderError },
}

impl HandlerError {
    /// Name of the error class, as reported in error payloads.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput { .. } => "MalformedInput",
            Self::RenderFailure { .. } => "RenderFailure",
        }
    }

    /// HTTP status: client errors for malformed input, server errors for rendering.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MalformedInput { .. } => 400,
            Self::RenderFailure { .. } => 500,
        }
    }

    /// Message that may be returned to the client. Rendering details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::MalformedInput { .. } => self.to_string(),
            Self::RenderFailure { .. } => "the visualizations could not be rendered".to_string(),
        }
    }
}
