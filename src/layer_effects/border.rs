//! Sharp outline border around the alpha silhouette.
//!
//! Creates the outline by:
//! 1. Expanding the canvas by the border width (transparent fill)
//! 2. Growing the pasted alpha with a square maximum filter
//! 3. Subtracting the original alpha to isolate the ring
//! 4. Colorizing the ring and compositing the original on top
//!
//! The border therefore appears exactly in the ring outside the original
//! silhouette and stays hidden underneath it wherever the original is
//! opaque.

use ndarray::{Array3, ArrayView3};
use tracing::debug;

use crate::filters::canvas::{expand_into, CanvasSpec};
use crate::filters::compose::{composite_over, replace_alpha, solid_layer};
use crate::filters::core::extract_alpha;
use crate::filters::mask::edge_mask;
use crate::filters::Rgba;

/// Add a sharp border of `color` hugging the silhouette of `image`.
///
/// The canvas expands by `width` on all sides so the ring is never
/// clipped. `width == 0` returns an unchanged copy.
///
/// # Arguments
/// * `image` - Source RGBA image whose alpha defines the shape
/// * `color` - Border color
/// * `width` - How many pixels outward the border extends
pub fn add_sharp_border(image: ArrayView3<u8>, color: Rgba, width: u32) -> Array3<u8> {
    if width == 0 {
        return image.to_owned();
    }

    let (height, img_width, _) = image.dim();
    let spec = CanvasSpec::uniform(img_width, height, width as usize);
    debug!(img_width, height, width, "adding border on expanded canvas");

    let expanded = expand_into(image, &spec, [0, 0, 0, 0]);
    let alpha = extract_alpha(expanded.view());
    let ring = edge_mask(&alpha, width);

    let border_layer = replace_alpha(solid_layer(spec.width, spec.height, color).view(), &ring);
    composite_over(expanded.view(), border_layer.view())
}
