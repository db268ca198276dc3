//! Core utilities for mask construction.
//!
//! This module provides the shared single-channel machinery the mask
//! builders are made of:
//! - Gaussian kernel generation
//! - Separable mask blur
//! - Morphological maximum filter
//! - Saturating mask arithmetic
//! - Alpha channel extraction

use ndarray::{Array2, ArrayView3, Axis};
use rayon::iter::{ParallelBridge, ParallelIterator};

/// Generate a 1D Gaussian kernel.
///
/// # Arguments
/// * `sigma` - Standard deviation of the Gaussian
///
/// # Returns
/// Normalized 1D kernel as Vec<f32>
pub fn gaussian_kernel_1d(sigma: f32) -> Vec<f32> {
    if sigma <= 0.0 {
        return vec![1.0];
    }

    // 6 sigma of support covers 99.7% of the distribution; force odd length
    let size = ((sigma * 6.0).ceil() as usize) | 1;
    let half = (size / 2) as f32;

    let mut kernel = Vec::with_capacity(size);
    let mut sum = 0.0f32;
    for i in 0..size {
        let x = i as f32 - half;
        let v = (-x * x / (2.0 * sigma * sigma)).exp();
        kernel.push(v);
        sum += v;
    }
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}

/// Apply separable Gaussian blur to a coverage mask.
///
/// Rows are blurred in parallel; border samples are clamped to the edge.
/// `sigma <= 0` returns an unchanged copy.
///
/// # Arguments
/// * `mask` - Single-channel coverage values
/// * `sigma` - Blur radius (standard deviation)
///
/// # Returns
/// Blurred mask of the same size
pub fn blur_mask(mask: &Array2<u8>, sigma: f32) -> Array2<u8> {
    if sigma <= 0.0 {
        return mask.clone();
    }

    let (height, width) = mask.dim();
    let kernel = gaussian_kernel_1d(sigma);
    let half = kernel.len() / 2;

    // Work in f32 for precision
    let mut temp = Array2::<f32>::zeros((height, width));
    let mut result = Array2::<f32>::zeros((height, width));

    // Horizontal pass
    temp.axis_iter_mut(Axis(0))
        .enumerate()
        .par_bridge()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = (x as isize + ki as isize - half as isize)
                        .clamp(0, width as isize - 1) as usize;
                    sum += mask[[y, sx]] as f32 * kv;
                }
                row[x] = sum;
            }
        });

    // Vertical pass
    result
        .axis_iter_mut(Axis(0))
        .enumerate()
        .par_bridge()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sy = (y as isize + ki as isize - half as isize)
                        .clamp(0, height as isize - 1) as usize;
                    sum += temp[[sy, x]] * kv;
                }
                row[x] = sum;
            }
        });

    result.mapv(|v| v.clamp(0.0, 255.0).round() as u8)
}

/// Morphological maximum filter with a square structuring element.
///
/// Each output pixel takes the maximum coverage found in the square of side
/// `2 * radius + 1` centered on it, growing the silhouette outward by
/// `radius` pixels in Chebyshev distance. Out-of-bounds neighbors do not
/// contribute. `radius == 0` returns an unchanged copy.
///
/// # Arguments
/// * `mask` - Single-channel coverage values
/// * `radius` - Growth radius in pixels
///
/// # Returns
/// Grown mask of the same size
pub fn max_filter(mask: &Array2<u8>, radius: u32) -> Array2<u8> {
    if radius == 0 {
        return mask.clone();
    }

    let (height, width) = mask.dim();
    let r = radius as isize;
    let mut result = Array2::<u8>::zeros((height, width));

    result
        .axis_iter_mut(Axis(0))
        .enumerate()
        .par_bridge()
        .for_each(|(y, mut row)| {
            for x in 0..width {
                let mut max_val = 0u8;

                for dy in -r..=r {
                    let sy = y as isize + dy;
                    if sy < 0 || sy >= height as isize {
                        continue;
                    }

                    for dx in -r..=r {
                        let sx = x as isize + dx;
                        if sx < 0 || sx >= width as isize {
                            continue;
                        }

                        max_val = max_val.max(mask[[sy as usize, sx as usize]]);
                    }
                }

                row[x] = max_val;
            }
        });

    result
}

/// Per-pixel saturating subtraction of two equally sized masks.
///
/// Coverage never goes negative: `a - b` clamps at 0.
pub fn subtract_mask(a: &Array2<u8>, b: &Array2<u8>) -> Array2<u8> {
    debug_assert_eq!(a.dim(), b.dim());
    let (height, width) = a.dim();
    let mut result = Array2::<u8>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            result[[y, x]] = a[[y, x]].saturating_sub(b[[y, x]]);
        }
    }

    result
}

/// Extract the alpha channel from an RGBA image.
pub fn extract_alpha(image: ArrayView3<u8>) -> Array2<u8> {
    let (height, width, _) = image.dim();
    let mut alpha = Array2::<u8>::zeros((height, width));

    for y in 0..height {
        for x in 0..width {
            alpha[[y, x]] = image[[y, x, 3]];
        }
    }

    alpha
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    #[test]
    fn kernel_is_normalized_and_odd() {
        for sigma in [0.5f32, 1.0, 2.5, 10.0] {
            let kernel = gaussian_kernel_1d(sigma);
            assert_eq!(kernel.len() % 2, 1);
            let sum: f32 = kernel.iter().sum();
            assert!((sum - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn kernel_degenerates_for_zero_sigma() {
        assert_eq!(gaussian_kernel_1d(0.0), vec![1.0]);
        assert_eq!(gaussian_kernel_1d(-3.0), vec![1.0]);
    }

    #[test]
    fn blur_keeps_constant_mask_constant() {
        let mask = Array2::<u8>::from_elem((8, 8), 255);
        let blurred = blur_mask(&mask, 2.0);
        assert!(blurred.iter().all(|&v| v == 255));
    }

    #[test]
    fn blur_spreads_a_spike_symmetrically() {
        let mut mask = Array2::<u8>::zeros((5, 5));
        mask[[2, 2]] = 255;

        let blurred = blur_mask(&mask, 1.0);

        assert!(blurred[[2, 2]] > blurred[[2, 1]]);
        assert!(blurred[[2, 1]] > 0);
        assert_eq!(blurred[[2, 1]], blurred[[2, 3]]);
        assert_eq!(blurred[[1, 2]], blurred[[3, 2]]);
        assert_eq!(blurred[[2, 1]], blurred[[1, 2]]);
    }

    #[test]
    fn blur_zero_sigma_is_identity() {
        let mut mask = Array2::<u8>::zeros((4, 4));
        mask[[1, 3]] = 77;
        assert_eq!(blur_mask(&mask, 0.0), mask);
    }

    #[test]
    fn max_filter_grows_a_full_square() {
        let mut mask = Array2::<u8>::zeros((5, 5));
        mask[[2, 2]] = 255;

        let grown = max_filter(&mask, 1);

        // Square structuring element: diagonal neighbors grow too
        for y in 1..4 {
            for x in 1..4 {
                assert_eq!(grown[[y, x]], 255);
            }
        }
        assert_eq!(grown[[0, 2]], 0);
        assert_eq!(grown[[2, 0]], 0);
    }

    #[test]
    fn max_filter_zero_radius_is_identity() {
        let mut mask = Array2::<u8>::zeros((3, 3));
        mask[[0, 1]] = 9;
        assert_eq!(max_filter(&mask, 0), mask);
    }

    #[test]
    fn subtract_saturates_at_zero() {
        let mut a = Array2::<u8>::zeros((1, 2));
        let mut b = Array2::<u8>::zeros((1, 2));
        a[[0, 0]] = 10;
        b[[0, 0]] = 20;
        a[[0, 1]] = 200;
        b[[0, 1]] = 100;

        let diff = subtract_mask(&a, &b);

        assert_eq!(diff[[0, 0]], 0);
        assert_eq!(diff[[0, 1]], 100);
    }

    #[test]
    fn extract_alpha_reads_channel_three() {
        let mut image = Array3::<u8>::zeros((2, 2, 4));
        image[[0, 0, 3]] = 200;
        image[[1, 1, 0]] = 50; // red must not leak into the mask

        let alpha = extract_alpha(image.view());

        assert_eq!(alpha[[0, 0]], 200);
        assert_eq!(alpha[[1, 1]], 0);
    }
}
