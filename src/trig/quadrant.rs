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

use serde::{Serialize, Serializer};
use std::fmt;

use super::axis_index;

/// Where an angle lies: on one of the four half axes, or inside one of the four open quadrants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    First,
    Second,
    Third,
    Fourth,
    PositiveX,
    PositiveY,
    NegativeX,
    NegativeY,
}

impl Quadrant {
    /// Classifies an angle normalized into [0, 360) given its cosine and sine.
    ///
    /// Axis-aligned angles (within the angle tolerance) are axis labels. Every other angle is
    /// classified by the signs of (cos θ, sin θ).
    pub fn classify(normalized_deg: f64, cosine: f64, sine: f64) -> Self {
        if let Some(axis) = axis_index(normalized_deg) {
            return [
                Self::PositiveX,
                Self::PositiveY,
                Self::NegativeX,
                Self::NegativeY,
            ][axis];
        }

        match (cosine >= 0.0, sine >= 0.0) {
            (true, true) => Self::First,
            (false, true) => Self::Second,
            (false, false) => Self::Third,
            (true, false) => Self::Fourth,
        }
    }

    /// The sentence fragment describing this location, e.g. "in quadrant II".
    pub fn label(&self) -> &'static str {
        match self {
            Self::First => "in quadrant I",
            Self::Second => "in quadrant II",
            Self::Third => "in quadrant III",
            Self::Fourth => "in quadrant IV",
            Self::PositiveX => "on the positive x-axis",
            Self::PositiveY => "on the positive y-axis",
            Self::NegativeX => "on the negative x-axis",
            Self::NegativeY => "on the negative y-axis",
        }
    }

    /// Signs of sine and cosine in this quadrant, `None` on the axes.
    pub fn sign_hint(&self) -> Option<&'static str> {
        match self {
            Self::First => Some("sin > 0, cos > 0"),
            Self::Second => Some("sin > 0, cos < 0"),
            Self::Third => Some("sin < 0, cos < 0"),
            Self::Fourth => Some("sin < 0, cos > 0"),
            _ => None,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Quadrant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

#[test]
fn test_sign_hints() {
    assert_eq!(Quadrant::Second.sign_hint(), Some("sin > 0, cos < 0"));
    assert_eq!(Quadrant::NegativeY.sign_hint(), None);
    assert_eq!(
        serde_json::to_string(&Quadrant::Third).unwrap(),
        "\"in quadrant III\""
    );
}
