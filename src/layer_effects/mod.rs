//! The three canvas-expanding decoration effects.
//!
//! - **Rounded corners** (`rounded_corners.rs`) - geometric rounded-rect
//!   mask shapes the canvas alpha
//! - **Sharp border** (`border.rs`) - a dilated-edge ring hugging the
//!   alpha silhouette
//! - **Drop shadow** (`drop_shadow.rs`) - the silhouette blurred, shifted,
//!   and layered behind the subject
//!
//! Every effect follows the same discipline: size a larger canvas from the
//! effect's spatial footprint, paste the original at the computed offset,
//! build a coverage mask, and merge with Porter-Duff "over" - so no pixel
//! of the original content is ever clipped. Effects are pure; the input
//! view is left untouched and a new buffer is returned.

pub mod border;
pub mod drop_shadow;
pub mod rounded_corners;
