//! The synthesized pixel grid.
//!
//! A [`Canvas`] is a row-major `width * height` grid of [`Srgb`] colors
//! with the origin at the top-left corner. It is created fully populated
//! by the synthesizer and handed to the caller; nothing mutates it after
//! return.

use crate::color::Srgb;
use crate::error::SpriteError;

/// A row-major 2D grid of colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Srgb>,
}

impl Canvas {
    /// Creates a canvas filled with `fill`.
    ///
    /// Returns `SpriteError::InvalidDimension` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn filled(width: usize, height: usize, fill: Srgb) -> Result<Self, SpriteError> {
        if width == 0 || height == 0 {
            return Err(SpriteError::InvalidDimension);
        }
        let len = width
            .checked_mul(height)
            .ok_or(SpriteError::InvalidDimension)?;
        Ok(Self {
            width,
            height,
            pixels: vec![fill; len],
        })
    }

    /// Builds a canvas by evaluating `f(x, y)` for every cell in row-major
    /// order.
    ///
    /// Returns `SpriteError::InvalidDimension` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, SpriteError>
    where
        F: FnMut(usize, usize) -> Srgb,
    {
        if width == 0 || height == 0 {
            return Err(SpriteError::InvalidDimension);
        }
        let len = width
            .checked_mul(height)
            .ok_or(SpriteError::InvalidDimension)?;
        let mut pixels = Vec::with_capacity(len);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the color at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: usize, y: usize) -> Option<Srgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Read-only access to the row-major pixel data.
    pub fn pixels(&self) -> &[Srgb] {
        &self.pixels
    }

    /// Iterates over all cells yielding `(x, y, color)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Srgb)> + '_ {
        self.pixels.iter().enumerate().map(|(i, &c)| {
            let x = i % self.width;
            let y = i / self.width;
            (x, y, c)
        })
    }
}
