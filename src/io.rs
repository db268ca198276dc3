//! Raster I/O with forced RGBA coercion.
//!
//! Decoding accepts anything the `image` crate understands and always
//! hands the rest of the crate an `(height, width, 4)` RGBA buffer;
//! encoding writes RGBA PNG.

use std::path::Path;

use ndarray::{Array3, ArrayView3};

use crate::error::{HaloError, HaloResult};

/// Load a raster file and coerce it to RGBA.
///
/// Grayscale, palette, and RGB inputs are converted; the conversion itself
/// cannot fail for any supported format.
///
/// # Errors
/// Returns [`HaloError::Load`] when the file is missing or undecodable.
pub fn load_rgba(path: impl AsRef<Path>) -> HaloResult<Array3<u8>> {
    let path = path.as_ref();
    let decoded = image::open(path)
        .map_err(|e| HaloError::load(format!("{}: {e}", path.display())))?;

    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    Array3::from_shape_vec((height as usize, width as usize, 4), rgba.into_raw())
        .map_err(|e| HaloError::load(format!("{}: {e}", path.display())))
}

/// Encode an RGBA buffer as PNG at `path`.
///
/// # Errors
/// Returns [`HaloError::Io`] when encoding or writing fails.
pub fn save_png(path: impl AsRef<Path>, image: ArrayView3<u8>) -> HaloResult<()> {
    let path = path.as_ref();
    let (height, width, channels) = image.dim();
    if channels != 4 {
        return Err(HaloError::io(format!(
            "{}: expected an RGBA buffer, got {channels} channels",
            path.display()
        )));
    }

    let mut data = Vec::with_capacity(height * width * 4);
    for y in 0..height {
        for x in 0..width {
            for c in 0..4 {
                data.push(image[[y, x, c]]);
            }
        }
    }

    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, data)
        .ok_or_else(|| HaloError::io(format!("{}: buffer size mismatch", path.display())))?;
    buffer
        .save(path)
        .map_err(|e| HaloError::io(format!("{}: {e}", path.display())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("halo-io-tests");
        std::fs::create_dir_all(&dir).unwrap();
        dir.join(name)
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let mut image = Array3::<u8>::zeros((2, 3, 4));
        for y in 0..2 {
            for x in 0..3 {
                image[[y, x, 0]] = (40 * x) as u8;
                image[[y, x, 1]] = (90 * y) as u8;
                image[[y, x, 2]] = 7;
                image[[y, x, 3]] = (50 + 60 * x) as u8;
            }
        }

        let path = scratch_path("round_trip.png");
        save_png(&path, image.view()).unwrap();
        let loaded = load_rgba(&path).unwrap();

        assert_eq!(loaded, image);
    }

    #[test]
    fn rgb_input_gains_an_opaque_alpha() {
        let path = scratch_path("rgb_only.png");
        let rgb = image::RgbImage::from_pixel(4, 2, image::Rgb([10, 20, 30]));
        rgb.save(&path).unwrap();

        let loaded = load_rgba(&path).unwrap();

        assert_eq!(loaded.dim(), (2, 4, 4));
        assert_eq!(loaded[[1, 3, 0]], 10);
        assert_eq!(loaded[[1, 3, 3]], 255);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = load_rgba(scratch_path("does_not_exist.png")).unwrap_err();
        assert!(matches!(err, HaloError::Load(_)));
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let image = Array3::<u8>::zeros((1, 1, 4));
        let path = scratch_path("no_such_dir").join("out.png");
        let err = save_png(&path, image.view()).unwrap_err();
        assert!(matches!(err, HaloError::Io(_)));
    }
}
