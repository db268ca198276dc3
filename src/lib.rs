//! Canvas-expanding decoration effects for RGBA rasters.
//!
//! `halo` post-processes an image with alpha transparency by adding one of
//! three effects without clipping any pixel of the original content - the
//! canvas grows to fit the effect instead:
//!
//! - [`round_corners`] - rounded outer corners on an enlarged canvas
//! - [`add_sharp_border`] - a sharp outline ring hugging the alpha
//!   silhouette
//! - [`add_shadow`] - a soft, offset drop shadow layered behind the
//!   subject
//!
//! ## Image Format
//!
//! Images are `(height, width, 4)` `ndarray` arrays of `u8`, row-major
//! with the origin at the top-left; [`io::load_rgba`] and [`io::save_png`]
//! move them in and out of raster files, coercing any input mode to RGBA.
//!
//! ## Architecture
//!
//! Every operation is pure: inputs are taken by view, a freshly allocated
//! buffer is returned, and no buffer is mutated after it reaches a caller.
//! Independent invocations can therefore run in parallel with no
//! synchronization. The shared canvas/mask/compositing machinery lives in
//! [`filters`]; the effect orchestrations in [`layer_effects`].
//!
//! The [`segment`] module is an unrelated utility that shares the crate's
//! dependencies but none of its data model: the testable core of a live
//! HSV color-segmentation tool.

pub mod error;
pub mod filters;
pub mod io;
pub mod layer_effects;
pub mod segment;

pub use error::{HaloError, HaloResult};
pub use filters::Rgba;
pub use layer_effects::border::add_sharp_border;
pub use layer_effects::drop_shadow::add_shadow;
pub use layer_effects::rounded_corners::round_corners;
