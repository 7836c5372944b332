//! PNG writing with collision-avoiding output paths.
//!
//! `write_png` encodes a canvas at an exact path; `save_unique` implements
//! the naming contract for sprite exports: given an occupied `name.png` it
//! tries `name_1.png`, `name_2.png`, and so on until an unused path is
//! found. Single-user, single-process — plain existence checks suffice.

use std::fs;
use std::path::{Path, PathBuf};

use spritegen_core::canvas::Canvas;
use spritegen_core::error::SpriteError;

use crate::pixel::canvas_to_rgba;

/// Writes a canvas as a PNG image at exactly `path`.
///
/// Returns `SpriteError::InvalidDimension` if the dimensions overflow
/// `u32`, or `SpriteError::Io` on encode/write failure.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<(), SpriteError> {
    let rgba = canvas_to_rgba(canvas);
    let w = u32::try_from(canvas.width()).map_err(|_| SpriteError::InvalidDimension)?;
    let h = u32::try_from(canvas.height()).map_err(|_| SpriteError::InvalidDimension)?;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| SpriteError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| SpriteError::Io(e.to_string()))
}

/// Returns the first unoccupied path of the form `dir/name.png`,
/// `dir/name_1.png`, `dir/name_2.png`, ...
pub fn unique_path(dir: &Path, name: &str) -> PathBuf {
    let mut path = dir.join(format!("{name}.png"));
    let mut count = 1u32;
    while path.exists() {
        path = dir.join(format!("{name}_{count}.png"));
        count += 1;
    }
    path
}

/// Writes a canvas into `dir` under `name`, avoiding overwrites.
///
/// Creates `dir` if it does not exist, picks the first free
/// `name[_N].png` path, writes the PNG there, and returns the path used.
pub fn save_unique(canvas: &Canvas, dir: &Path, name: &str) -> Result<PathBuf, SpriteError> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| SpriteError::Io(e.to_string()))?;
    }
    let path = unique_path(dir, name);
    write_png(canvas, &path)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spritegen_core::color::Srgb;
    use spritegen_core::gradient::GradientSpec;
    use spritegen_core::noise_field::NoiseConfig;

    fn gray_canvas(w: usize, h: usize) -> Canvas {
        Canvas::filled(
            w,
            h,
            Srgb {
                r: 0.3,
                g: 0.3,
                b: 0.3,
            },
        )
        .unwrap()
    }

    #[test]
    fn write_png_round_trip() {
        let canvas = gray_canvas(16, 16);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&canvas, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 16);
        assert_eq!(img.height(), 16);
        // 0.3 * 255 = 76.5 rounds to 77, alpha opaque
        let px = img.get_pixel(0, 0);
        assert_eq!(px[0], 77);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn synthesized_sprite_round_trips_through_png() {
        let canvas = spritegen_synth::synthesize(
            8,
            8,
            &NoiseConfig {
                scale: 0.1,
                seed: 42,
            },
            &GradientSpec::blue_white_red(),
            0.5,
        )
        .unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite.png");
        write_png(&canvas, &path).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 8);
        assert_eq!(img.height(), 8);
    }

    #[test]
    fn unique_path_returns_bare_name_when_free() {
        let dir = tempfile::tempdir().unwrap();
        let path = unique_path(dir.path(), "sprite");
        assert_eq!(path, dir.path().join("sprite.png"));
    }

    #[test]
    fn unique_path_appends_incrementing_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sprite.png"), b"taken").unwrap();
        assert_eq!(
            unique_path(dir.path(), "sprite"),
            dir.path().join("sprite_1.png")
        );

        fs::write(dir.path().join("sprite_1.png"), b"taken").unwrap();
        fs::write(dir.path().join("sprite_2.png"), b"taken").unwrap();
        assert_eq!(
            unique_path(dir.path(), "sprite"),
            dir.path().join("sprite_3.png")
        );
    }

    #[test]
    fn unique_path_skips_holes_in_order() {
        // Only the base name is taken; _1 is free even if _2 exists.
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("sprite.png"), b"taken").unwrap();
        fs::write(dir.path().join("sprite_2.png"), b"taken").unwrap();
        assert_eq!(
            unique_path(dir.path(), "sprite"),
            dir.path().join("sprite_1.png")
        );
    }

    #[test]
    fn save_unique_creates_directory_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = dir.path().join("generated");
        let canvas = gray_canvas(4, 4);

        let path = save_unique(&canvas, &out_dir, "sprite").unwrap();
        assert_eq!(path, out_dir.join("sprite.png"));
        assert!(path.exists());
    }

    #[test]
    fn save_unique_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let canvas = gray_canvas(4, 4);

        let first = save_unique(&canvas, dir.path(), "sprite").unwrap();
        let second = save_unique(&canvas, dir.path(), "sprite").unwrap();
        let third = save_unique(&canvas, dir.path(), "sprite").unwrap();

        assert_eq!(first, dir.path().join("sprite.png"));
        assert_eq!(second, dir.path().join("sprite_1.png"));
        assert_eq!(third, dir.path().join("sprite_2.png"));
        assert!(first.exists() && second.exists() && third.exists());
    }
}
