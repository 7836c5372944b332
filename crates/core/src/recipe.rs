//! Reproducible specification for one sprite.
//!
//! A [`Recipe`] captures everything needed to recreate a sprite: name,
//! dimensions, noise configuration, gradient stops, and threshold. Two
//! identical recipes fed to the same synthesizer binary produce
//! bit-identical canvases.

use crate::error::SpriteError;
use crate::gradient::GradientSpec;
use crate::noise_field::NoiseConfig;
use serde::{Deserialize, Serialize};

/// A complete, replayable sprite specification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub width: usize,
    pub height: usize,
    pub noise: NoiseConfig,
    pub gradient: GradientSpec,
    pub threshold: f64,
}

impl Recipe {
    /// Creates a recipe with the editor defaults: 64x64, scale 0.1,
    /// blue/white/red gradient, threshold 0.5.
    pub fn new(name: &str, seed: i64) -> Self {
        Self {
            name: name.to_string(),
            width: 64,
            height: 64,
            noise: NoiseConfig { scale: 0.1, seed },
            gradient: GradientSpec::blue_white_red(),
            threshold: 0.5,
        }
    }

    /// Validates that dimensions are non-zero and `width * height` does
    /// not overflow.
    pub fn validate(&self) -> Result<(), SpriteError> {
        if self.width == 0 || self.height == 0 {
            return Err(SpriteError::InvalidDimension);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(SpriteError::InvalidDimension)?;
        Ok(())
    }
}
