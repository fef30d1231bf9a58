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

use plotters::coord::Shift;
use plotters::prelude::*;

use super::layout::{dashes, equal_aspect_window, unit_circle, ChartLayout};
use super::{
    plot_err, RenderConfig, RenderError, ANGLE_COLOR, CIRCLE_COLOR, COSINE_COLOR, MARGIN,
    SINE_COLOR, TITLE_SIZE, X_LABEL_AREA, Y_LABEL_AREA,
};
use crate::trig::{format_degrees, format_value, Evaluation};

/// Length of the dashes of the projections, in unit circle radii.
const DASH: f64 = 0.04;
const POINT_RADIUS: i32 = 6;

/// Draws the unit circle with the radius to (cos θ, sin θ) and its projections on both axes.
pub(crate) fn draw(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    eval: &Evaluation,
    cfg: &RenderConfig,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(plot_err)?;

    let title = format!("Unit Circle – θ = {}", format_degrees(eval.angle_deg));
    let area = root
        .titled(&title, (super::FONT_FAMILY, TITLE_SIZE))
        .map_err(plot_err)?;

    // Size the window from the plotting area so that the circle stays round
    let (width, height) = area.dim_in_pixel();
    let layout = ChartLayout {
        width,
        height,
        margin: MARGIN,
        x_label_area: X_LABEL_AREA,
        y_label_area: Y_LABEL_AREA,
    };
    let (x_range, y_range) = equal_aspect_window(cfg.circle_extent, layout.plot_area());

    let mut chart = ChartBuilder::on(&area)
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(x_range.clone(), y_range.clone())
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("x (cos θ)")
        .y_desc("y (sin θ)")
        .bold_line_style(BLACK.mix(0.12).stroke_width(1))
        .light_line_style(BLACK.mix(0.04).stroke_width(1))
        .draw()
        .map_err(plot_err)?;

    let axis_style = BLACK.mix(0.6).stroke_width(1);
    chart
        .draw_series([
            PathElement::new(vec![(x_range.start, 0.0), (x_range.end, 0.0)], axis_style),
            PathElement::new(vec![(0.0, y_range.start), (0.0, y_range.end)], axis_style),
        ])
        .map_err(plot_err)?;

    chart
        .draw_series(LineSeries::new(
            unit_circle(cfg.circle_samples),
            CIRCLE_COLOR.stroke_width(2),
        ))
        .map_err(plot_err)?;

    let point = eval.point();

    // The sine is the height of the point above the x-axis
    let sine_style = SINE_COLOR.stroke_width(2);
    chart
        .draw_series(
            dashes((point.0, 0.0), point, DASH)
                .into_iter()
                .map(|[from, to]| PathElement::new(vec![from, to], sine_style)),
        )
        .map_err(plot_err)?
        .label(format!("sin θ = {}", format_value(eval.sine)))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], sine_style));

    // The cosine is the distance of the point to the y-axis
    let cosine_style = COSINE_COLOR.stroke_width(2);
    chart
        .draw_series(
            dashes((0.0, point.1), point, DASH)
                .into_iter()
                .map(|[from, to]| PathElement::new(vec![from, to], cosine_style)),
        )
        .map_err(plot_err)?
        .label(format!("cos θ = {}", format_value(eval.cosine)))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], cosine_style));

    let radius_style = ANGLE_COLOR.stroke_width(2);
    chart
        .draw_series(LineSeries::new(vec![(0.0, 0.0), point], radius_style))
        .map_err(plot_err)?
        .label(format!("θ = {}", format_degrees(eval.angle_deg)))
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], radius_style));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85).filled())
        .border_style(BLACK.mix(0.3).stroke_width(1))
        .label_font((super::FONT_FAMILY, 15))
        .draw()
        .map_err(plot_err)?;

    // Last, so that the legend never hides the point
    chart
        .draw_series(std::iter::once(Circle::new(
            point,
            POINT_RADIUS,
            ANGLE_COLOR.filled(),
        )))
        .map_err(plot_err)?;

    Ok(())
}
