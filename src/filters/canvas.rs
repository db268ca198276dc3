//! Canvas expansion: sizing and placement so effects never clip.
//!
//! Every effect needs room for its visual extent: a corner radius, a
//! border ring, a blurred and offset shadow. The [`CanvasSpec`] computed
//! here is large enough that no effect pixel can fall outside the new
//! bounds, and records where the original content gets pasted.

use ndarray::{Array3, ArrayView3};

use super::Rgba;

/// Placement of an existing buffer inside a larger canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CanvasSpec {
    /// Expanded canvas width in pixels.
    pub width: usize,
    /// Expanded canvas height in pixels.
    pub height: usize,
    /// Horizontal paste position of the original's top-left corner.
    pub offset_x: usize,
    /// Vertical paste position of the original's top-left corner.
    pub offset_y: usize,
}

impl CanvasSpec {
    /// Equal padding on all four sides.
    pub fn uniform(width: usize, height: usize, pad: usize) -> Self {
        Self {
            width: width + 2 * pad,
            height: height + 2 * pad,
            offset_x: pad,
            offset_y: pad,
        }
    }

    /// Directional padding for a blurred shadow shifted by `(dx, dy)`.
    ///
    /// Each side gets room for the blur spread (`sigma`) plus whatever part
    /// of the shift points toward it, plus `extra` transparent margin:
    ///
    /// - left/top: `max(sigma - d, sigma, 0) + extra`
    /// - right/bottom: `max(d, 0) + sigma + extra`
    ///
    /// Dimensions round up to whole pixels, paste offsets truncate.
    pub fn for_shadow(
        width: usize,
        height: usize,
        offset: (i32, i32),
        sigma: f32,
        extra: u32,
    ) -> Self {
        let (dx, dy) = offset;
        let extra = extra as f32;

        let left = (sigma - dx as f32).max(sigma).max(0.0) + extra;
        let top = (sigma - dy as f32).max(sigma).max(0.0) + extra;
        let right = (dx as f32).max(0.0) + sigma + extra;
        let bottom = (dy as f32).max(0.0) + sigma + extra;

        Self {
            width: width + (left + right).ceil() as usize,
            height: height + (top + bottom).ceil() as usize,
            offset_x: left.floor() as usize,
            offset_y: top.floor() as usize,
        }
    }
}

/// Materialize an expanded canvas: `fill` everywhere, the original pasted
/// at the spec's offset.
///
/// # Arguments
/// * `image` - Original RGBA image
/// * `spec` - Target size and paste position
/// * `fill` - Color behind and around the pasted content
///
/// # Returns
/// New RGBA buffer of the spec's dimensions
pub fn expand_into(image: ArrayView3<u8>, spec: &CanvasSpec, fill: Rgba) -> Array3<u8> {
    let (height, width, channels) = image.dim();
    debug_assert_eq!(channels, 4);

    let mut result = Array3::<u8>::zeros((spec.height, spec.width, 4));

    for y in 0..spec.height {
        for x in 0..spec.width {
            for c in 0..4 {
                result[[y, x, c]] = fill[c];
            }
        }
    }

    for y in 0..height {
        for x in 0..width {
            for c in 0..4 {
                result[[y + spec.offset_y, x + spec.offset_x, c]] = image[[y, x, c]];
            }
        }
    }

    result
}
