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

/*! # trig-tutor

Explore sine, cosine and tangent from a single angle in degrees: evaluate the three functions,
tell where the angle lies on the unit circle, and render a unit circle diagram and a graph of the
functions as base64 PNG images ready to be embedded in a web page.

```
use trig_tutor::{evaluate, Quadrant};

let eval = evaluate(135.0);
assert_eq!(eval.quadrant, Quadrant::Second);
assert!(evaluate(90.0).tangent.is_none());
```
*/

/// Evaluation of the trigonometric functions and classification of angles.
pub mod trig;

/// Rendering of the unit circle diagram and of the function graph.
pub mod render;

/// Decoding of requests and assembly of responses.
pub mod handler;

/// Configuration files.
pub mod io;

pub mod server;

mod errors;
/// Every failure is reported as a `HandlerError`; an undefined tangent is not a failure.
pub use self::errors::HandlerError;

#[cfg(feature = "python")]
mod python;

#[macro_use]
extern crate log;

pub use self::handler::{handle, CalculateRequest, CalculateResponse};
pub use self::render::{render, RenderConfig, RenderRequest, RenderedImage};
pub use self::trig::{evaluate, Evaluation, Quadrant};
