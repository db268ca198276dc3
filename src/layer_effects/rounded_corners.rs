//! Rounded outer corners without cutting off content.
//!
//! Grows the canvas by the corner radius on every side before applying the
//! rounded-rectangle mask, so the rounding happens in new margin space
//! rather than eating into the original pixels.

use ndarray::{Array3, ArrayView3};
use tracing::debug;

use crate::filters::canvas::{expand_into, CanvasSpec};
use crate::filters::compose::multiply_alpha;
use crate::filters::mask::rounded_rect_mask;
use crate::filters::Rgba;

/// Round the outer corners of `image` on an enlarged canvas.
///
/// The output is `(w + 2r) x (h + 2r)` with the original pasted at
/// `(radius, radius)` over a `background`-filled canvas, and the canvas
/// alpha shaped by a rounded-rectangle mask of the given radius. The mask
/// coverage scales the existing alpha rather than overwriting it, so
/// transparency already present in the source (or a transparent
/// background) survives.
///
/// `radius == 0` returns an unchanged copy.
///
/// # Arguments
/// * `image` - Source RGBA image
/// * `radius` - Corner rounding radius in pixels
/// * `background` - Color behind the corners and the margin
pub fn round_corners(image: ArrayView3<u8>, radius: u32, background: Rgba) -> Array3<u8> {
    if radius == 0 {
        return image.to_owned();
    }

    let (height, width, _) = image.dim();
    let spec = CanvasSpec::uniform(width, height, radius as usize);
    debug!(width, height, radius, "rounding corners on expanded canvas");

    let expanded = expand_into(image, &spec, background);
    let mask = rounded_rect_mask(spec.width, spec.height, radius);
    multiply_alpha(expanded.view(), &mask)
}
