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

use serde_derive::{Deserialize, Serialize};
use snafu::prelude::*;
use typed_builder::TypedBuilder;

use super::MAX_IMAGE_SIDE;
use crate::io::{ConfigError, ConfigRepr, InvalidConfigSnafu};

/// Smallest accepted width or height of a rendered image, in pixels.
pub const MIN_IMAGE_SIDE: u32 = 64;
/// Largest number of points per curve.
pub const MAX_SAMPLES: usize = 100_000;
/// Widest graph domain, ten full turns.
pub const MAX_DOMAIN_SPAN_DEG: f64 = 3600.0;

/// Sizes and sampling of both visualizations.
///
/// The defaults reproduce a 6 by 6 inch unit circle and a 10 by 6 inch graph at 100 DPI.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, TypedBuilder)]
#[builder(doc)]
#[serde(default)]
pub struct RenderConfig {
    /// Size in pixels (width, height) of the unit circle diagram
    #[builder(default = (600, 600))]
    pub circle_size: (u32, u32),
    /// Size in pixels (width, height) of the function graph
    #[builder(default = (1000, 600))]
    pub graph_size: (u32, u32),
    /// Number of points used to draw the unit circle
    #[builder(default = 400)]
    pub circle_samples: usize,
    /// Number of points used to draw each curve of the graph
    #[builder(default = 1000)]
    pub curve_samples: usize,
    /// The tangent is only drawn where |tan θ| is at most this value
    #[builder(default = 4.0)]
    pub tan_clip: f64,
    /// Domain of the graph in degrees (start, end)
    #[builder(default = (0.0, 360.0))]
    pub domain_deg: (f64, f64),
    /// Half width of the unit circle window, in unit circle radii
    #[builder(default = 1.3)]
    pub circle_extent: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ConfigRepr for RenderConfig {}

impl RenderConfig {
    /// Checks that this configuration can be rendered.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, (width, height)) in [
            ("circle_size", self.circle_size),
            ("graph_size", self.graph_size),
        ] {
            let side = MIN_IMAGE_SIDE..=MAX_IMAGE_SIDE;
            ensure!(
                side.contains(&width) && side.contains(&height),
                InvalidConfigSnafu {
                    msg: format!(
                        "{name} must be between {MIN_IMAGE_SIDE} and {MAX_IMAGE_SIDE} pixels per side, got {width}x{height}"
                    )
                }
            );
        }

        for (name, samples) in [
            ("circle_samples", self.circle_samples),
            ("curve_samples", self.curve_samples),
        ] {
            ensure!(
                (2..=MAX_SAMPLES).contains(&samples),
                InvalidConfigSnafu {
                    msg: format!("{name} must be between 2 and {MAX_SAMPLES}, got {samples}")
                }
            );
        }

        ensure!(
            self.tan_clip.is_finite() && self.tan_clip > 0.0,
            InvalidConfigSnafu {
                msg: format!("tan_clip must be positive, got {}", self.tan_clip)
            }
        );

        ensure!(
            self.circle_extent.is_finite() && self.circle_extent >= 1.0,
            InvalidConfigSnafu {
                msg: format!(
                    "circle_extent must be at least 1 to show the circle, got {}",
                    self.circle_extent
                )
            }
        );

        let (start, end) = self.domain_deg;
        ensure!(
            start.is_finite() && end.is_finite() && start < end,
            InvalidConfigSnafu {
                msg: format!("domain_deg must be a non empty range, got [{start}, {end}]")
            }
        );
        ensure!(
            end - start <= MAX_DOMAIN_SPAN_DEG,
            InvalidConfigSnafu {
                msg: format!(
                    "domain_deg may span at most {MAX_DOMAIN_SPAN_DEG}°, got [{start}, {end}]"
                )
            }
        );

        Ok(())
    }
}

#[test]
fn test_render_config() {
    let cfg = RenderConfig::default();
    assert_eq!(cfg.circle_size, (600, 600));
    assert_eq!(cfg.graph_size, (1000, 600));
    assert_eq!(cfg.curve_samples, 1000);
    assert!((cfg.tan_clip - 4.0).abs() < f64::EPSILON);
    assert!(cfg.validate().is_ok());

    let cfg = RenderConfig::builder().tan_clip(-1.0).build();
    assert!(cfg.validate().is_err());

    let cfg = RenderConfig::builder().domain_deg((360.0, 0.0)).build();
    assert!(cfg.validate().is_err());

    let cfg = RenderConfig::builder().circle_size((10, 600)).build();
    assert!(cfg.validate().is_err());

    let cfg = RenderConfig::builder().curve_samples(1).build();
    assert!(cfg.validate().is_err());

    let cfg = RenderConfig::builder()
        .curve_samples(MAX_SAMPLES)
        .circle_samples(MAX_SAMPLES)
        .domain_deg((-1800.0, 1800.0))
        .build();
    assert!(cfg.validate().is_ok());
}
