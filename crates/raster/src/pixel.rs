//! Pure-computation pixel buffer conversion from a [`Canvas`].

use spritegen_core::canvas::Canvas;

/// Converts a canvas to an RGBA8 pixel buffer.
///
/// Each color is quantized to 8-bit with rounding (clamped first, since
/// extrapolated gradient colors can leave [0, 1]) and written as four
/// bytes (R, G, B, 255). The buffer length is `width * height * 4`.
pub fn canvas_to_rgba(canvas: &Canvas) -> Vec<u8> {
    canvas
        .pixels()
        .iter()
        .flat_map(|c| {
            let r = (c.r.clamp(0.0, 1.0) * 255.0).round() as u8;
            let g = (c.g.clamp(0.0, 1.0) * 255.0).round() as u8;
            let b = (c.b.clamp(0.0, 1.0) * 255.0).round() as u8;
            [r, g, b, 255u8]
        })
        .collect()
}
