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

use lazy_static::lazy_static;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};
use rust_embed::RustEmbed;
use snafu::prelude::*;
use std::borrow::Cow;
use std::fmt;

use crate::trig::Evaluation;

mod circle;
mod config;
mod encoding;
mod graph;
pub mod layout;

pub use config::{RenderConfig, MAX_DOMAIN_SPAN_DEG, MAX_SAMPLES};
pub use encoding::{RenderedImage, PNG_MIME};

/// Largest accepted width or height of a rendered image, in pixels.
pub const MAX_IMAGE_SIDE: u32 = 4096;

const FONT_FAMILY: &str = "sans-serif";
const FONT_FILE: &str = "DejaVuSans.ttf";

pub(crate) const TITLE_SIZE: u32 = 22;
pub(crate) const MARGIN: u32 = 15;
pub(crate) const X_LABEL_AREA: u32 = 45;
pub(crate) const Y_LABEL_AREA: u32 = 55;

/// Colors shared by both visualizations so that each function keeps its color.
pub(crate) const SINE_COLOR: RGBColor = RGBColor(44, 160, 44);
pub(crate) const COSINE_COLOR: RGBColor = RGBColor(31, 119, 180);
pub(crate) const TANGENT_COLOR: RGBColor = RGBColor(148, 103, 189);
pub(crate) const ANGLE_COLOR: RGBColor = RGBColor(214, 39, 40);
pub(crate) const CIRCLE_COLOR: RGBColor = RGBColor(64, 64, 64);

#[derive(RustEmbed)]
#[folder = "data/embed/"]
struct EmbeddedAsset;

lazy_static! {
    /// Fonts are registered once per process, this is the only global and it is never mutated.
    static ref FONT_REGISTRATION: Result<(), String> = register_embedded_font();
}

fn register_embedded_font() -> Result<(), String> {
    let file =
        EmbeddedAsset::get(FONT_FILE).ok_or_else(|| format!("{FONT_FILE} is not embedded"))?;
    let bytes: &'static [u8] = match file.data {
        Cow::Borrowed(bytes) => bytes,
        Cow::Owned(bytes) => Box::leak(bytes.into_boxed_slice()),
    };
    register_font(FONT_FAMILY, FontStyle::Normal, bytes)
        .map_err(|_| format!("{FONT_FILE} is not a valid font"))?;
    debug!("registered {FONT_FILE} as `{FONT_FAMILY}`");
    Ok(())
}

fn ensure_font() -> Result<(), RenderError> {
    FONT_REGISTRATION
        .clone()
        .map_err(|details| RenderError::Font { details })
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum RenderError {
    #[snafu(display("drawing failed: {details}"))]
    Drawing { details: String },
    #[snafu(display("PNG encoding failed: {source}"))]
    Encoding { source: image::ImageError },
    #[snafu(display("cannot allocate a {width}x{height} image"))]
    Buffer { width: u32, height: u32 },
    #[snafu(display("font unavailable: {details}"))]
    Font { details: String },
    #[snafu(display("rendering was interrupted: {details}"))]
    Interrupted { details: String },
}

/// Converts any plotting error into a `RenderError`.
pub(crate) fn plot_err<E: fmt::Display>(err: E) -> RenderError {
    RenderError::Drawing {
        details: err.to_string(),
    }
}

/// Everything needed to draw both visualizations.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderRequest {
    pub evaluation: Evaluation,
    pub show_tangent: bool,
}

impl RenderRequest {
    pub fn new(evaluation: Evaluation, show_tangent: bool) -> Self {
        Self {
            evaluation,
            show_tangent,
        }
    }

    /// The angle being visualized, in degrees.
    pub fn angle_deg(&self) -> f64 {
        self.evaluation.angle_deg
    }
}

/// Renders the unit circle diagram and the function graph, in that order.
///
/// Both images are independent and are drawn in parallel.
pub fn render(
    request: &RenderRequest,
    cfg: &RenderConfig,
) -> Result<(RenderedImage, RenderedImage), RenderError> {
    ensure_font()?;

    let (circle, graph) = rayon::join(
        || render_unit_circle(&request.evaluation, cfg),
        || render_function_graph(&request.evaluation, request.show_tangent, cfg),
    );

    Ok((circle?, graph?))
}

/// Renders the unit circle diagram only.
pub fn render_unit_circle(
    evaluation: &Evaluation,
    cfg: &RenderConfig,
) -> Result<RenderedImage, RenderError> {
    ensure_font()?;
    let (width, height) = cfg.circle_size;
    rasterize(width, height, |root| circle::draw(root, evaluation, cfg))
}

/// Renders the graph of the functions over the configured domain only.
pub fn render_function_graph(
    evaluation: &Evaluation,
    show_tangent: bool,
    cfg: &RenderConfig,
) -> Result<RenderedImage, RenderError> {
    ensure_font()?;
    let (width, height) = cfg.graph_size;
    rasterize(width, height, |root| {
        graph::draw(root, evaluation, show_tangent, cfg)
    })
}

/// Draws into an in-memory RGB buffer and encodes the result as PNG.
fn rasterize<F>(width: u32, height: u32, draw: F) -> Result<RenderedImage, RenderError>
where
    F: for<'a, 'b> FnOnce(&'a DrawingArea<BitMapBackend<'b>, Shift>) -> Result<(), RenderError>,
{
    ensure!(
        width > 0 && height > 0 && width <= MAX_IMAGE_SIDE && height <= MAX_IMAGE_SIDE,
        BufferSnafu { width, height }
    );

    let mut buffer = vec![0_u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw(&root)?;
        root.present().map_err(plot_err)?;
    }

    RenderedImage::encode_png(buffer, width, height)
}
