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

use std::fmt;

mod quadrant;
pub use quadrant::Quadrant;

/// Angles closer than this (in degrees) to a multiple of 90° lie on an axis.
pub const ANGLE_TOLERANCE_DEG: f64 = 1e-6;

/// Cosines with a smaller magnitude are treated as zero, i.e. the tangent is undefined.
pub const COS_EPSILON: f64 = 1e-9;

/// The values of the three trigonometric functions at a given angle, and where that angle lies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Angle as provided by the caller, in degrees
    pub angle_deg: f64,
    pub sine: f64,
    pub cosine: f64,
    /// `None` on the asymptotes of the tangent (90° and 270° modulo 360°)
    pub tangent: Option<f64>,
    pub quadrant: Quadrant,
}

impl Evaluation {
    /// Returns the point (cos θ, sin θ) on the unit circle.
    pub fn point(&self) -> (f64, f64) {
        (self.cosine, self.sine)
    }

    /// Returns the angle normalized into [0, 360).
    pub fn normalized_deg(&self) -> f64 {
        normalize_deg(self.angle_deg)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "sin θ = {}, cos θ = {}, tan θ = ",
            format_value(self.sine),
            format_value(self.cosine)
        )?;
        match self.tangent {
            Some(tangent) => write!(f, "{}", format_value(tangent))?,
            None => write!(f, "undefined")?,
        }
        match self.quadrant.sign_hint() {
            Some(hint) => write!(f, " ({hint})"),
            None => Ok(()),
        }
    }
}

/// Evaluates sine, cosine and tangent of the provided angle in degrees and classifies it.
///
/// The trigonometric functions are computed on the angle reduced modulo 360°, which is
/// mathematically the same angle (so sin(-30°) is still -0.5) but guarantees that θ and θ + 360°
/// yield the exact same values for integral degrees.
///
/// This function never fails: the tangent asymptotes are reported as `tangent: None`.
/// Callers are expected to provide a finite angle.
pub fn evaluate(angle_deg: f64) -> Evaluation {
    let normalized = normalize_deg(angle_deg);
    let (sine, cosine) = normalized.to_radians().sin_cos();

    let tangent = if is_tangent_asymptote(normalized, cosine) {
        None
    } else {
        Some(sine / cosine)
    };

    Evaluation {
        angle_deg,
        sine,
        cosine,
        tangent,
        quadrant: Quadrant::classify(normalized, cosine, sine),
    }
}

/// Normalizes an angle in degrees into [0, 360).
pub fn normalize_deg(angle_deg: f64) -> f64 {
    let normalized = angle_deg.rem_euclid(360.0);
    // Tiny negative angles round up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Returns the index of the axis (0 for +x, 1 for +y, 2 for -x, 3 for -y) the normalized angle
/// lies on, if any.
pub(crate) fn axis_index(normalized_deg: f64) -> Option<usize> {
    let nearest = (normalized_deg / 90.0).round();
    if (normalized_deg - nearest * 90.0).abs() < ANGLE_TOLERANCE_DEG {
        Some(nearest as usize % 4)
    } else {
        None
    }
}

/// The cosine alone is not enough here: at 90° it evaluates to about 6e-17, not zero.
fn is_tangent_asymptote(normalized_deg: f64, cosine: f64) -> bool {
    let half_turn = normalized_deg.rem_euclid(180.0);
    (half_turn - 90.0).abs() < ANGLE_TOLERANCE_DEG || cosine.abs() < COS_EPSILON
}

/// Formats a function value with three decimals, without printing "-0.000".
pub fn format_value(value: f64) -> String {
    if value.abs() < 5e-4 {
        format!("{:.3}", 0.0)
    } else {
        format!("{value:.3}")
    }
}

/// Formats an angle in degrees, e.g. `30°` or `12.5°`.
pub fn format_degrees(angle_deg: f64) -> String {
    let rounded = angle_deg.round();
    if (angle_deg - rounded).abs() < ANGLE_TOLERANCE_DEG {
        // Adding zero turns -0 into 0
        format!("{:.0}°", rounded + 0.0)
    } else {
        let repr = format!("{angle_deg:.2}");
        format!("{}°", repr.trim_end_matches('0').trim_end_matches('.'))
    }
}

#[test]
fn test_normalize() {
    assert_eq!(normalize_deg(0.0), 0.0);
    assert_eq!(normalize_deg(360.0), 0.0);
    assert_eq!(normalize_deg(390.0), 30.0);
    assert_eq!(normalize_deg(-30.0), 330.0);
    assert_eq!(normalize_deg(-720.0), 0.0);
    assert_eq!(normalize_deg(-1e-20), 0.0);
}

#[test]
fn test_axis_index() {
    assert_eq!(axis_index(0.0), Some(0));
    assert_eq!(axis_index(90.0), Some(1));
    assert_eq!(axis_index(180.0), Some(2));
    assert_eq!(axis_index(270.0), Some(3));
    assert_eq!(axis_index(359.9999999), Some(0));
    assert_eq!(axis_index(90.0000001), Some(1));
    assert_eq!(axis_index(90.001), None);
    assert_eq!(axis_index(45.0), None);
}

#[test]
fn test_formatting() {
    assert_eq!(format_degrees(30.0), "30°");
    assert_eq!(format_degrees(-0.0), "0°");
    assert_eq!(format_degrees(12.5), "12.5°");
    assert_eq!(format_degrees(12.25), "12.25°");
    assert_eq!(format_degrees(-45.0), "-45°");

    assert_eq!(format_value(0.5), "0.500");
    assert_eq!(format_value(-1.8e-16), "0.000");
    assert_eq!(format_value(-0.8660254), "-0.866");

    let eval = evaluate(90.0);
    assert_eq!(
        format!("{eval}"),
        "sin θ = 1.000, cos θ = 0.000, tan θ = undefined"
    );
    let eval = evaluate(45.0);
    assert_eq!(
        format!("{eval}"),
        "sin θ = 0.707, cos θ = 0.707, tan θ = 1.000 (sin > 0, cos > 0)"
    );
}
