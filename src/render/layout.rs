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

//! Coordinate mapping and curve sampling, independent of any drawing backend.

use std::ops::Range;

/// A point in data coordinates.
pub type Point = (f64, f64);

/// Segments shorter than this are not drawn.
pub const DEGENERATE_LENGTH: f64 = 1e-9;

/// Pixel layout of a chart: overall size, uniform margin, and the label areas on the bottom (x)
/// and on the left (y).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub x_label_area: u32,
    pub y_label_area: u32,
}

impl ChartLayout {
    /// Size in pixels of the plotting area, i.e. what remains once margins and labels are placed.
    pub fn plot_area(&self) -> (u32, u32) {
        (
            self.width
                .saturating_sub(2 * self.margin + self.y_label_area),
            self.height
                .saturating_sub(2 * self.margin + self.x_label_area),
        )
    }
}

/// Returns the data window centered on the origin with at least `extent` on each side, widened
/// along the longer side of the plotting area so that a unit spans the same number of pixels on
/// both axes (so that the unit circle is drawn as a circle).
pub fn equal_aspect_window(extent: f64, plot_px: (u32, u32)) -> (Range<f64>, Range<f64>) {
    let width = f64::from(plot_px.0.max(1));
    let height = f64::from(plot_px.1.max(1));
    let (half_x, half_y) = if width >= height {
        (extent * width / height, extent)
    } else {
        (extent, extent * height / width)
    };
    (-half_x..half_x, -half_y..half_y)
}

/// Splits the segment into dashes of length `dash` separated by gaps of the same length.
///
/// Degenerate segments (e.g. the drop line of an axis-aligned angle) yield no dash at all.
pub fn dashes(from: Point, to: Point, dash: f64) -> Vec<[Point; 2]> {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let length = dx.hypot(dy);
    if !length.is_finite() || length < DEGENERATE_LENGTH || dash <= 0.0 {
        return Vec::new();
    }

    let count = ((length / (2.0 * dash)).round() as usize).max(1);
    let pieces = (2 * count - 1) as f64;
    let at = |t: f64| (from.0 + dx * t, from.1 + dy * t);

    (0..count)
        .map(|i| [at((2 * i) as f64 / pieces), at((2 * i + 1) as f64 / pieces)])
        .collect()
}

/// Samples `f` over `range` with evenly spaced abscissas, both ends included.
pub fn sample<F>(range: Range<f64>, samples: usize, f: F) -> Vec<Point>
where
    F: Fn(f64) -> f64,
{
    let n = samples.max(2);
    let step = (range.end - range.start) / (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = if i == n - 1 {
                range.end
            } else {
                range.start + step * i as f64
            };
            (x, f(x))
        })
        .collect()
}

/// Points of the unit circle, starting and ending at (1, 0).
pub fn unit_circle(samples: usize) -> Vec<Point> {
    sample(0.0..360.0, samples, |_| 0.0)
        .into_iter()
        .map(|(deg, _)| {
            let (sin, cos) = deg.to_radians().sin_cos();
            (cos, sin)
        })
        .collect()
}

/// Returns the visible branches of the tangent over `domain_deg`, where |tan θ| ≤ `clip`.
///
/// Each branch is centered on a multiple of 180° and spans exactly
/// [c - atan(clip), c + atan(clip)], clamped to the domain. Since atan(clip) < 90°, no branch ever
/// crosses an asymptote, so drawing each branch as its own polyline never connects the two sides.
/// `samples` is the number of points over the whole domain, shared among the branches.
pub fn tangent_branches(domain_deg: Range<f64>, clip: f64, samples: usize) -> Vec<Vec<Point>> {
    let span = domain_deg.end - domain_deg.start;
    if !(span > 0.0) || !(clip > 0.0) {
        return Vec::new();
    }

    let half_width = clip.atan().to_degrees();
    let first = ((domain_deg.start - half_width) / 180.0).ceil() as i64;
    let last = ((domain_deg.end + half_width) / 180.0).floor() as i64;

    (first..=last)
        .filter_map(|k| {
            let center = 180.0 * k as f64;
            let start = (center - half_width).max(domain_deg.start);
            let end = (center + half_width).min(domain_deg.end);
            if end - start < DEGENERATE_LENGTH {
                return None;
            }
            let n = ((samples as f64 * (end - start) / span).ceil() as usize).max(2);
            // Clamping absorbs the rounding of tan(atan(clip))
            Some(sample(start..end, n, |deg| {
                deg.to_radians().tan().clamp(-clip, clip)
            }))
        })
        .collect()
}

/// Places an angle on an axis spanning `domain_deg`: as is when it falls within the domain,
/// otherwise wrapped into it modulo 360°.
///
/// Returns `None` when no coterminal angle lies within the domain, which only happens for domains
/// narrower than a full turn.
pub fn place_in_domain(angle_deg: f64, domain_deg: &Range<f64>) -> Option<f64> {
    let domain = domain_deg.start..=domain_deg.end;
    if domain.contains(&angle_deg) {
        return Some(angle_deg);
    }
    let wrapped = domain_deg.start + (angle_deg - domain_deg.start).rem_euclid(360.0);
    domain.contains(&wrapped).then_some(wrapped)
}

#[cfg(test)]
mod ut_layout {
    use super::*;
    use approx::abs_diff_eq;

    #[test]
    fn plot_area() {
        let layout = ChartLayout {
            width: 600,
            height: 560,
            margin: 15,
            x_label_area: 45,
            y_label_area: 55,
        };
        assert_eq!(layout.plot_area(), (515, 485));

        let tiny = ChartLayout {
            width: 10,
            height: 10,
            ..layout
        };
        assert_eq!(tiny.plot_area(), (0, 0));
    }

    #[test]
    fn equal_aspect() {
        let (x, y) = equal_aspect_window(1.3, (520, 520));
        assert!(abs_diff_eq!(x.start, -1.3) && abs_diff_eq!(x.end, 1.3));
        assert!(abs_diff_eq!(y.start, -1.3) && abs_diff_eq!(y.end, 1.3));

        let (x, y) = equal_aspect_window(1.0, (800, 400));
        assert!(abs_diff_eq!(x.end, 2.0));
        assert!(abs_diff_eq!(y.end, 1.0));
        // Same number of pixels per unit on both axes
        let px_per_unit_x = 800.0 / (x.end - x.start);
        let px_per_unit_y = 400.0 / (y.end - y.start);
        assert!(abs_diff_eq!(px_per_unit_x, px_per_unit_y));

        let (x, y) = equal_aspect_window(1.0, (300, 600));
        assert!(abs_diff_eq!(x.end, 1.0));
        assert!(abs_diff_eq!(y.end, 2.0));

        // Degenerate plotting areas do not produce NaN
        let (x, y) = equal_aspect_window(1.0, (0, 0));
        assert!(x.end.is_finite() && y.end.is_finite());
    }

    #[test]
    fn dashed_segments() {
        let dashes_v = dashes((0.5, 0.0), (0.5, 1.0), 0.05);
        assert_eq!(dashes_v.len(), 10);
        assert_eq!(dashes_v[0][0], (0.5, 0.0));
        assert!(abs_diff_eq!(dashes_v[9][1].1, 1.0, epsilon = 1e-12));
        for [a, b] in &dashes_v {
            assert!(abs_diff_eq!(a.0, 0.5) && abs_diff_eq!(b.0, 0.5));
            assert!(b.1 > a.1);
        }

        // Zero length and NaN lengths are skipped, not drawn
        assert!(dashes((1.0, 0.0), (1.0, 0.0), 0.05).is_empty());
        assert!(dashes((1.0, 0.0), (1.0, 6.1e-17), 0.05).is_empty());
        assert!(dashes((0.0, 0.0), (f64::NAN, 1.0), 0.05).is_empty());

        // Very short segments still get one dash
        assert_eq!(dashes((0.0, 0.0), (0.01, 0.0), 0.05).len(), 1);
    }

    #[test]
    fn sampling() {
        let pts = sample(0.0..360.0, 5, |x| x.to_radians().cos());
        assert_eq!(pts.len(), 5);
        assert_eq!(pts[0], (0.0, 1.0));
        assert_eq!(pts[4].0, 360.0);
        assert!(abs_diff_eq!(pts[2].1, -1.0));

        let circle = unit_circle(400);
        assert_eq!(circle.len(), 400);
        for (x, y) in circle {
            assert!(abs_diff_eq!(x.hypot(y), 1.0, epsilon = 1e-12));
        }
    }

    #[test]
    fn tangent_does_not_cross_asymptotes() {
        let branches = tangent_branches(0.0..360.0, 4.0, 1000);
        assert_eq!(branches.len(), 3);

        let half_width = 4.0_f64.atan().to_degrees();
        assert!(abs_diff_eq!(branches[0][0].0, 0.0));
        assert!(abs_diff_eq!(branches[0].last().unwrap().0, half_width));
        assert!(abs_diff_eq!(branches[1][0].0, 180.0 - half_width, epsilon = 1e-9));
        assert!(abs_diff_eq!(branches[2].last().unwrap().0, 360.0));

        for branch in &branches {
            let first = branch[0].0;
            let last = branch.last().unwrap().0;
            for asymptote in [90.0, 270.0] {
                assert!(
                    !(first..=last).contains(&asymptote),
                    "branch [{first}, {last}] crosses {asymptote}"
                );
            }
            for (x, y) in branch {
                assert!(y.abs() <= 4.0, "tan({x}) = {y} escapes the window");
            }
            // Monotonically increasing on each branch
            for pair in branch.windows(2) {
                assert!(pair[1].1 >= pair[0].1);
            }
        }
    }

    #[test]
    fn tangent_over_other_domains() {
        // Domain starting right after an asymptote
        let branches = tangent_branches(100.0..260.0, 4.0, 500);
        assert_eq!(branches.len(), 1);
        assert!(abs_diff_eq!(branches[0][0].0, 104.03624346792648, epsilon = 1e-9));

        // Two full periods
        assert_eq!(tangent_branches(-360.0..360.0, 2.0, 1000).len(), 5);

        // Degenerate inputs
        assert!(tangent_branches(10.0..10.0, 4.0, 100).is_empty());
        assert!(tangent_branches(0.0..360.0, 0.0, 100).is_empty());
    }

    #[test]
    fn placing_angles() {
        let domain = 0.0..360.0;
        assert_eq!(place_in_domain(30.0, &domain), Some(30.0));
        assert_eq!(place_in_domain(360.0, &domain), Some(360.0));
        assert_eq!(place_in_domain(390.0, &domain), Some(30.0));
        assert_eq!(place_in_domain(-90.0, &domain), Some(270.0));

        let shifted = -180.0..180.0;
        assert_eq!(place_in_domain(270.0, &shifted), Some(-90.0));

        // Half a turn only holds half of the angles
        let half = 0.0..180.0;
        assert_eq!(place_in_domain(270.0, &half), None);
        assert_eq!(place_in_domain(-90.0, &half), None);
        assert_eq!(place_in_domain(390.0, &half), Some(30.0));
        assert_eq!(place_in_domain(-180.0, &half), Some(180.0));
    }
}
