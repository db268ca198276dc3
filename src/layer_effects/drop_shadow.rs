//! Soft drop shadow behind the silhouette.
//!
//! Creates the shadow by:
//! 1. Computing directional padding from the blur spread and the offset
//! 2. Stamping the original alpha at the shifted position
//! 3. Blurring the stamp into a soft shadow mask
//! 4. Colorizing the mask and compositing the original on top
//!
//! The canvas expansion covers both the blur's spatial spread and the
//! offset, so no shadow pixel is discarded.

use ndarray::{Array3, ArrayView3};
use tracing::debug;

use crate::error::{HaloError, HaloResult};
use crate::filters::canvas::{expand_into, CanvasSpec};
use crate::filters::compose::{composite_over, replace_alpha, solid_layer};
use crate::filters::core::extract_alpha;
use crate::filters::mask::shadow_mask;
use crate::filters::Rgba;

/// Cast a soft shadow of `shadow_color` behind `image`.
///
/// The shadow is the original silhouette shifted by `offset`, blurred with
/// `sigma`, and layered fully behind the subject. `extra_padding` adds
/// transparent margin beyond what the blur and offset require.
///
/// # Arguments
/// * `image` - Source RGBA image whose alpha defines the silhouette
/// * `shadow_color` - Shadow fill color
/// * `offset` - Shadow shift `(dx, dy)`; positive values move right/down
/// * `sigma` - Gaussian blur radius for the shadow softness
/// * `extra_padding` - Additional transparent margin on every side
///
/// # Errors
/// Returns [`HaloError::InvalidArgument`] when `sigma` is negative or not
/// finite.
pub fn add_shadow(
    image: ArrayView3<u8>,
    shadow_color: Rgba,
    offset: (i32, i32),
    sigma: f32,
    extra_padding: u32,
) -> HaloResult<Array3<u8>> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(HaloError::invalid_argument(format!(
            "shadow sigma must be finite and non-negative, got {sigma}"
        )));
    }

    let (height, width, _) = image.dim();
    let spec = CanvasSpec::for_shadow(width, height, offset, sigma, extra_padding);
    debug!(width, height, ?offset, sigma, "casting shadow on expanded canvas");

    let expanded = expand_into(image, &spec, [0, 0, 0, 0]);
    let alpha = extract_alpha(image);
    let mask = shadow_mask(&alpha, &spec, offset, sigma);

    let shadow_layer =
        replace_alpha(solid_layer(spec.width, spec.height, shadow_color).view(), &mask);
    Ok(composite_over(expanded.view(), shadow_layer.view()))
}
