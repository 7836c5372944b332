//! Seeded 2D Perlin noise sampling.
//!
//! A [`NoiseField`] evaluates coherent noise at scaled, seed-offset
//! coordinates. The permutation lattice is fixed; the seed enters as an
//! integer offset added to both coordinates, so a new seed shifts the
//! sampled region of the same field rather than regenerating the lattice.
//! Deterministic: same config and coordinates always give the same value.

use noise::{NoiseFn, Perlin};
use serde::{Deserialize, Serialize};

/// Permutation seed for the shared Perlin lattice. Sprite seeds offset
/// coordinates instead of re-permuting, so this stays constant.
const LATTICE_SEED: u32 = 0;

/// Noise parameters for one sprite: coordinate step size and seed offset.
///
/// `scale` multiplies pixel coordinates before sampling; the editor
/// convention keeps it in (0, 1], but any positive float is accepted.
/// `seed` is added to both coordinates, so repeated synthesis with a new
/// seed produces a different, still deterministic field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseConfig {
    pub scale: f64,
    pub seed: i64,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            scale: 0.1,
            seed: 0,
        }
    }
}

/// A sampled Perlin field configured by a [`NoiseConfig`].
pub struct NoiseField {
    perlin: Perlin,
    scale: f64,
    offset: f64,
}

impl NoiseField {
    /// Creates a field from a noise configuration.
    pub fn new(config: &NoiseConfig) -> Self {
        Self {
            perlin: Perlin::new(LATTICE_SEED),
            scale: config.scale,
            offset: config.seed as f64,
        }
    }

    /// Samples the field at pixel coordinates `(x, y)`.
    ///
    /// Evaluates `perlin(x * scale + seed, y * scale + seed)` and remaps
    /// the generator's [-1, 1] output to the nominal [0, 1] range the
    /// gradient expects. The value is not clamped beyond that remap.
    pub fn sample(&self, x: usize, y: usize) -> f64 {
        let sx = x as f64 * self.scale + self.offset;
        let sy = y as f64 * self.scale + self.offset;
        self.perlin.get([sx, sy]) * 0.5 + 0.5
    }
}
