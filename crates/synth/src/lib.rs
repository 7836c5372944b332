#![deny(unsafe_code)]
//! Bitmap synthesis: the single pure operation mapping (dimensions, noise
//! configuration, gradient, threshold) to a fully populated [`Canvas`].
//!
//! Each cell is independent: its color depends only on its own coordinates
//! and the shared read-only inputs, so identical inputs always produce a
//! bit-identical canvas. The only failure is `InvalidDimension` for a zero
//! dimension; the noise and color math is total.

use spritegen_core::canvas::Canvas;
use spritegen_core::error::SpriteError;
use spritegen_core::gradient::GradientSpec;
use spritegen_core::noise_field::{NoiseConfig, NoiseField};
use spritegen_core::recipe::Recipe;

/// Synthesizes a sprite canvas.
///
/// For each 0-indexed cell `(x, y)` the noise field is sampled at
/// `(x * scale + seed, y * scale + seed)` and the resulting value shaded
/// through the gradient around `threshold` (low→base below it, base→high
/// at or above it, with the divide-by-zero guards at 0 and 1).
///
/// Returns `SpriteError::InvalidDimension` if `width` or `height` is zero;
/// no partial canvas is ever produced.
pub fn synthesize(
    width: usize,
    height: usize,
    noise: &NoiseConfig,
    gradient: &GradientSpec,
    threshold: f64,
) -> Result<Canvas, SpriteError> {
    let field = NoiseField::new(noise);
    Canvas::from_fn(width, height, |x, y| {
        gradient.shade(field.sample(x, y), threshold)
    })
}

/// Synthesizes the canvas described by a [`Recipe`].
pub fn synthesize_recipe(recipe: &Recipe) -> Result<Canvas, SpriteError> {
    recipe.validate()?;
    synthesize(
        recipe.width,
        recipe.height,
        &recipe.noise,
        &recipe.gradient,
        recipe.threshold,
    )
}
