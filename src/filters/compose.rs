//! Layering primitives: solid fills, alpha application, Porter-Duff "over".
//!
//! These are the pieces that turn a coverage mask into a colored layer and
//! merge layers into a final image. All buffers are straight (not
//! premultiplied) RGBA; blending happens in f32 and clamps back to 0-255.

use ndarray::{Array2, Array3, ArrayView3};

use super::Rgba;

/// Produce a buffer of the given size uniformly filled with `color`.
pub fn solid_layer(width: usize, height: usize, color: Rgba) -> Array3<u8> {
    let mut result = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..4 {
                result[[y, x, c]] = color[c];
            }
        }
    }

    result
}

/// Copy RGB, set the alpha channel directly from the mask.
///
/// Existing alpha is overwritten, not combined; see [`multiply_alpha`] for
/// the transparency-preserving variant.
pub fn replace_alpha(image: ArrayView3<u8>, mask: &Array2<u8>) -> Array3<u8> {
    let (height, width, _) = image.dim();
    debug_assert_eq!(mask.dim(), (height, width));

    let mut result = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                result[[y, x, c]] = image[[y, x, c]];
            }
            result[[y, x, 3]] = mask[[y, x]];
        }
    }

    result
}

/// Copy RGB, scale the existing alpha by the mask coverage.
///
/// `out_a = a * coverage / 255`, rounded. A fully covered pixel keeps its
/// alpha; an uncovered pixel becomes transparent.
pub fn multiply_alpha(image: ArrayView3<u8>, mask: &Array2<u8>) -> Array3<u8> {
    let (height, width, _) = image.dim();
    debug_assert_eq!(mask.dim(), (height, width));

    let mut result = Array3::<u8>::zeros((height, width, 4));

    for y in 0..height {
        for x in 0..width {
            for c in 0..3 {
                result[[y, x, c]] = image[[y, x, c]];
            }
            let a = image[[y, x, 3]] as u16;
            let m = mask[[y, x]] as u16;
            result[[y, x, 3]] = ((a * m + 127) / 255) as u8;
        }
    }

    result
}

/// Porter-Duff "A over B" for two equally sized straight-alpha buffers.
///
/// # Arguments
/// * `fg` - Foreground RGBA buffer
/// * `bg` - Background RGBA buffer of identical size
///
/// # Returns
/// New RGBA buffer; at each pixel `out_a = sa + da * (1 - sa)` and the
/// color is the alpha-weighted average of the two layers.
pub fn composite_over(fg: ArrayView3<u8>, bg: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = fg.dim();
    debug_assert_eq!(bg.dim(), fg.dim());

    let mut result = bg.to_owned();

    for y in 0..height {
        for x in 0..width {
            let src_a = fg[[y, x, 3]];
            if src_a == 0 {
                continue;
            }
            if src_a == 255 {
                for c in 0..4 {
                    result[[y, x, c]] = fg[[y, x, c]];
                }
                continue;
            }

            let sa = src_a as f32 / 255.0;
            let da = bg[[y, x, 3]] as f32 / 255.0;
            let out_a = sa + da * (1.0 - sa);

            if out_a > 0.0 {
                for c in 0..3 {
                    let blended = (fg[[y, x, c]] as f32 * sa
                        + bg[[y, x, c]] as f32 * da * (1.0 - sa))
                        / out_a;
                    result[[y, x, c]] = blended.clamp(0.0, 255.0).round() as u8;
                }
                result[[y, x, 3]] = (out_a * 255.0).clamp(0.0, 255.0).round() as u8;
            }
        }
    }

    result
}
