//! Three-stop color gradient split by a threshold.
//!
//! A [`GradientSpec`] holds the `low`, `base`, and `high` stops. A noise
//! value below the threshold interpolates low→base; at or above it,
//! base→high. No ordering or distinctness is required of the stops —
//! any three colors are legal.

use crate::color::Srgb;
use serde::{Deserialize, Serialize};

/// Three gradient stops: the colors mapped to low, mid, and high noise values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub low: Srgb,
    pub base: Srgb,
    pub high: Srgb,
}

impl GradientSpec {
    /// Creates a gradient from its three stops.
    pub fn new(low: Srgb, base: Srgb, high: Srgb) -> Self {
        Self { low, base, high }
    }

    /// Maps a noise value `p` through the gradient around `threshold`.
    ///
    /// - `p < threshold`: low→base with factor `p / threshold`. A threshold
    ///   of 0 would divide by zero; the factor is then taken as 1, so the
    ///   output is `base`.
    /// - otherwise: base→high with factor `(p - threshold) / (1 - threshold)`.
    ///   A threshold of 1 would divide by zero; the factor is then taken as
    ///   0, so the output is again `base`.
    ///
    /// Total for every float input. A threshold outside [0, 1] produces
    /// extrapolated (out-of-gradient) colors, not an error.
    pub fn shade(&self, p: f64, threshold: f64) -> Srgb {
        if p < threshold {
            let t = if threshold == 0.0 { 1.0 } else { p / threshold };
            self.low.lerp(self.base, t)
        } else {
            let t = if threshold == 1.0 {
                0.0
            } else {
                (p - threshold) / (1.0 - threshold)
            };
            self.base.lerp(self.high, t)
        }
    }

    /// The classic editor defaults: blue low, white base, red high.
    pub fn blue_white_red() -> Self {
        Self {
            low: Srgb {
                r: 0.0,
                g: 0.0,
                b: 1.0,
            },
            base: Srgb {
                r: 1.0,
                g: 1.0,
                b: 1.0,
            },
            high: Srgb {
                r: 1.0,
                g: 0.0,
                b: 0.0,
            },
        }
    }
}
