//! Coverage-mask builders for the three effects.
//!
//! Each builder produces a single-channel mask sized to a target canvas:
//! - geometric: a rounded rectangle spanning the full canvas
//! - morphological: the ring grown around an alpha silhouette
//! - blur-derived: the silhouette stamped at a shifted position, then
//!   Gaussian blurred

use ndarray::Array2;

use super::canvas::CanvasSpec;
use super::core::{blur_mask, max_filter, subtract_mask};

/// Softening applied to the stair-stepped edge left by the square
/// structuring element.
const EDGE_SOFTEN_SIGMA: f32 = 0.5;

/// Rasterize a full-canvas rectangle with quarter-circle corners.
///
/// Coverage is 255 inside and 0 outside; membership is decided at the
/// pixel center. Away from the four corner squares the rectangle spans the
/// whole canvas, so only corner pixels can be excluded.
///
/// # Arguments
/// * `width` - Canvas width
/// * `height` - Canvas height
/// * `radius` - Corner arc radius in pixels
pub fn rounded_rect_mask(width: usize, height: usize, radius: u32) -> Array2<u8> {
    let mut mask = Array2::<u8>::zeros((height, width));
    let r = radius as f32;
    let max_x = width as f32 - 1.0;
    let max_y = height as f32 - 1.0;

    for y in 0..height {
        for x in 0..width {
            let fx = x as f32;
            let fy = y as f32;

            // Clamp toward the nearest arc center; pixels outside the
            // corner squares clamp to themselves and always pass.
            let cx = if fx < r {
                r
            } else if fx > max_x - r {
                max_x - r
            } else {
                fx
            };
            let cy = if fy < r {
                r
            } else if fy > max_y - r {
                max_y - r
            } else {
                fy
            };

            let dx = fx - cx;
            let dy = fy - cy;
            if dx * dx + dy * dy <= r * r {
                mask[[y, x]] = 255;
            }
        }
    }

    mask
}

/// Border ring: everything within `width` of the silhouette, excluding the
/// silhouette itself.
///
/// The alpha channel is grown with a square maximum filter of side
/// `2 * width + 1`; subtracting the original coverage (saturating) leaves
/// exactly the ring of pixels within `width` of the silhouette edge. A
/// light fixed blur softens the square kernel's stair-stepping.
pub fn edge_mask(alpha: &Array2<u8>, width: u32) -> Array2<u8> {
    let grown = max_filter(alpha, width);
    let ring = subtract_mask(&grown, alpha);
    blur_mask(&ring, EDGE_SOFTEN_SIGMA)
}

/// Shadow coverage: the source alpha stamped at the shifted paste
/// position, then blurred.
///
/// The stamp uses the alpha itself as a stencil - zero-coverage source
/// pixels leave the destination untouched instead of overwriting it with
/// zero. Stamps landing outside the canvas are dropped.
///
/// # Arguments
/// * `alpha` - Alpha channel of the original, unexpanded image
/// * `spec` - Expanded canvas the mask is sized to
/// * `offset` - Shadow shift `(dx, dy)` relative to the pasted original
/// * `sigma` - Blur radius for the shadow softness
pub fn shadow_mask(
    alpha: &Array2<u8>,
    spec: &CanvasSpec,
    offset: (i32, i32),
    sigma: f32,
) -> Array2<u8> {
    let (src_h, src_w) = alpha.dim();
    let mut mask = Array2::<u8>::zeros((spec.height, spec.width));

    let base_x = spec.offset_x as i64 + offset.0 as i64;
    let base_y = spec.offset_y as i64 + offset.1 as i64;

    for y in 0..src_h {
        for x in 0..src_w {
            let a = alpha[[y, x]];
            if a == 0 {
                continue;
            }

            let tx = base_x + x as i64;
            let ty = base_y + y as i64;
            if tx < 0 || ty < 0 || tx >= spec.width as i64 || ty >= spec.height as i64 {
                continue;
            }

            mask[[ty as usize, tx as usize]] = a;
        }
    }

    blur_mask(&mask, sigma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_rect_excludes_corner_pixels() {
        let mask = rounded_rect_mask(140, 90, 20);

        assert_eq!(mask[[0, 0]], 0);
        assert_eq!(mask[[89, 139]], 0);
        // Just outside the top-left arc
        assert_eq!(mask[[0, 19]], 0);
        // On the arc boundary
        assert_eq!(mask[[0, 20]], 255);
        // Straight edges and interior stay covered
        assert_eq!(mask[[0, 70]], 255);
        assert_eq!(mask[[45, 0]], 255);
        assert_eq!(mask[[45, 70]], 255);
    }

    #[test]
    fn rounded_rect_zero_radius_covers_everything() {
        let mask = rounded_rect_mask(4, 3, 0);
        assert!(mask.iter().all(|&v| v == 255));
    }

    #[test]
    fn edge_mask_isolates_the_ring() {
        // 4x4 opaque block centered in a 20x20 transparent field
        let mut alpha = Array2::<u8>::zeros((20, 20));
        for y in 8..12 {
            for x in 8..12 {
                alpha[[y, x]] = 255;
            }
        }

        let ring = edge_mask(&alpha, 2);

        // One pixel outside the block: full ring coverage
        assert!(ring[[7, 9]] > 200);
        assert!(ring[[9, 6]] > 200);
        // Strictly inside the block: no coverage
        assert_eq!(ring[[9, 9]], 0);
        assert_eq!(ring[[10, 10]], 0);
        // Well beyond the growth radius: no coverage
        assert_eq!(ring[[0, 0]], 0);
        assert_eq!(ring[[9, 1]], 0);
    }

    #[test]
    fn shadow_mask_stamps_at_the_shifted_offset() {
        let alpha = Array2::<u8>::from_elem((4, 4), 255);
        let spec = CanvasSpec {
            width: 12,
            height: 12,
            offset_x: 3,
            offset_y: 3,
        };

        let mask = shadow_mask(&alpha, &spec, (2, 2), 0.0);

        assert_eq!(mask[[5, 5]], 255);
        assert_eq!(mask[[8, 8]], 255);
        assert_eq!(mask[[4, 5]], 0);
        assert_eq!(mask[[9, 9]], 0);
    }

    #[test]
    fn shadow_mask_clips_out_of_bounds_stamps() {
        let alpha = Array2::<u8>::from_elem((4, 4), 200);
        let spec = CanvasSpec {
            width: 4,
            height: 4,
            offset_x: 0,
            offset_y: 0,
        };

        let mask = shadow_mask(&alpha, &spec, (-2, -2), 0.0);

        // Source pixel (2,2) lands at (0,0); pixels pushed past the edge vanish
        assert_eq!(mask[[0, 0]], 200);
        assert_eq!(mask[[1, 1]], 200);
        assert_eq!(mask[[3, 3]], 0);
    }

    #[test]
    fn shadow_mask_blur_spreads_past_the_silhouette() {
        let mut alpha = Array2::<u8>::zeros((3, 3));
        alpha[[1, 1]] = 255;
        let spec = CanvasSpec {
            width: 11,
            height: 11,
            offset_x: 4,
            offset_y: 4,
        };

        let mask = shadow_mask(&alpha, &spec, (0, 0), 1.0);

        assert!(mask[[5, 5]] > 0);
        assert!(mask[[5, 7]] > 0);
        assert!(mask[[5, 5]] > mask[[5, 7]]);
    }
}
