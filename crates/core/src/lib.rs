#![deny(unsafe_code)]
//! Core types for the spritegen procedural sprite toolkit.
//!
//! Provides the `Srgb` color type, `GradientSpec` three-stop gradient,
//! `NoiseConfig`/`NoiseField` Perlin sampling, the `Canvas` pixel grid,
//! the reproducible `Recipe`, and the `Xorshift64` PRNG used for re-seeding.

pub mod canvas;
pub mod color;
pub mod error;
pub mod gradient;
pub mod noise_field;
pub mod prng;
pub mod recipe;

pub use canvas::Canvas;
pub use color::Srgb;
pub use error::SpriteError;
pub use gradient::GradientSpec;
pub use noise_field::{NoiseConfig, NoiseField};
pub use prng::Xorshift64;
pub use recipe::Recipe;
