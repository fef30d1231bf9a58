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

use super::layout::{dashes, place_in_domain, sample, tangent_branches};
use super::{
    plot_err, RenderConfig, RenderError, ANGLE_COLOR, COSINE_COLOR, MARGIN, SINE_COLOR,
    TANGENT_COLOR, TITLE_SIZE, X_LABEL_AREA, Y_LABEL_AREA,
};
use crate::trig::{format_degrees, Evaluation};

/// Vertical half window when only sine and cosine are shown.
const TRIG_Y_MAX: f64 = 1.2;
/// Room above and below the clipped tangent.
const TAN_HEADROOM: f64 = 0.5;
const MARKER_RADIUS: i32 = 5;

/// Draws sine, cosine and optionally tangent over the configured domain, marking the current angle.
pub(crate) fn draw(
    root: &DrawingArea<BitMapBackend<'_>, Shift>,
    eval: &Evaluation,
    show_tangent: bool,
    cfg: &RenderConfig,
) -> Result<(), RenderError> {
    root.fill(&WHITE).map_err(plot_err)?;

    let domain = cfg.domain_deg.0..cfg.domain_deg.1;
    let y_max = if show_tangent {
        cfg.tan_clip + TAN_HEADROOM
    } else {
        TRIG_Y_MAX
    };

    let mut chart = ChartBuilder::on(root)
        .caption(
            format!(
                "Trig Functions from {} to {}",
                format_degrees(domain.start),
                format_degrees(domain.end)
            ),
            (super::FONT_FAMILY, TITLE_SIZE),
        )
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(domain.clone(), -y_max..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Angle θ (degrees)")
        .y_desc("Value")
        .x_labels(9)
        .bold_line_style(BLACK.mix(0.12).stroke_width(1))
        .light_line_style(BLACK.mix(0.04).stroke_width(1))
        .draw()
        .map_err(plot_err)?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(domain.start, 0.0), (domain.end, 0.0)],
            BLACK.mix(0.6).stroke_width(1),
        )))
        .map_err(plot_err)?;

    let sine_style = SINE_COLOR.stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            sample(domain.clone(), cfg.curve_samples, |deg| {
                deg.to_radians().sin()
            }),
            sine_style,
        ))
        .map_err(plot_err)?
        .label("sin θ")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], sine_style));

    let cosine_style = COSINE_COLOR.stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            sample(domain.clone(), cfg.curve_samples, |deg| {
                deg.to_radians().cos()
            }),
            cosine_style,
        ))
        .map_err(plot_err)?
        .label("cos θ")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], cosine_style));

    if show_tangent {
        // One polyline per branch: the asymptotes are never bridged
        let tangent_style = TANGENT_COLOR.stroke_width(2);
        chart
            .draw_series(
                tangent_branches(domain.clone(), cfg.tan_clip, cfg.curve_samples)
                    .into_iter()
                    .map(|branch| PathElement::new(branch, tangent_style)),
            )
            .map_err(plot_err)?
            .label("tan θ")
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], tangent_style));
    }

    // Narrow domains may not contain the angle at all
    let placed = place_in_domain(eval.angle_deg, &domain);
    if let Some(x) = placed {
        let angle_style = ANGLE_COLOR.stroke_width(2);
        chart
            .draw_series(
                dashes((x, -y_max), (x, y_max), y_max / 40.0)
                    .into_iter()
                    .map(|[from, to]| PathElement::new(vec![from, to], angle_style)),
            )
            .map_err(plot_err)?
            .label(format!("θ = {}", format_degrees(eval.angle_deg)))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], angle_style));
    } else {
        debug!(
            "θ = {} falls outside of the graph domain",
            format_degrees(eval.angle_deg)
        );
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85).filled())
        .border_style(BLACK.mix(0.3).stroke_width(1))
        .label_font((super::FONT_FAMILY, 15))
        .draw()
        .map_err(plot_err)?;

    let Some(x) = placed else {
        return Ok(());
    };
    let mut markers = vec![
        Circle::new((x, eval.sine), MARKER_RADIUS, SINE_COLOR.filled()),
        Circle::new((x, eval.cosine), MARKER_RADIUS, COSINE_COLOR.filled()),
    ];
    if let Some(tangent) = tangent_marker(eval, show_tangent, cfg.tan_clip) {
        markers.push(Circle::new(
            (x, tangent),
            MARKER_RADIUS,
            TANGENT_COLOR.filled(),
        ));
    }
    chart.draw_series(markers).map_err(plot_err)?;

    Ok(())
}

/// Height of the tangent marker: none on the asymptotes, nor outside of the clipped window.
fn tangent_marker(eval: &Evaluation, show_tangent: bool, clip: f64) -> Option<f64> {
    eval.tangent
        .filter(|tangent| show_tangent && tangent.abs() <= clip)
}

#[test]
fn test_tangent_marker() {
    use crate::trig::evaluate;

    let marker = tangent_marker(&evaluate(45.0), true, 4.0).unwrap();
    assert!((marker - 1.0).abs() < 1e-12);
    assert!(tangent_marker(&evaluate(45.0), false, 4.0).is_none());
    assert!(tangent_marker(&evaluate(90.0), true, 4.0).is_none());
    assert!(tangent_marker(&evaluate(-270.0), true, 4.0).is_none());
    // tan(85°) is about 11.4, beyond the window
    assert!(tangent_marker(&evaluate(85.0), true, 4.0).is_none());
    assert!(tangent_marker(&evaluate(85.0), true, 20.0).is_some());
}
