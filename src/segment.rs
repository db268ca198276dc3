//! HSV range segmentation for video frames.
//!
//! The pure core of a live color-isolation tool: each RGB frame is
//! converted to HSV, thresholded against the currently configured
//! lower/upper range, and the resulting binary mask is applied back onto
//! the frame. Frame capture and on-screen display stay outside this
//! module - [`run_segmentation`] takes a frame source and a presenter
//! callback, and the threshold configuration is re-read once per frame so
//! live controls can feed it.
//!
//! Frames are `(height, width, 3)` RGB arrays; this module shares no data
//! model with the decoration effects.

use ndarray::{Array2, Array3, ArrayView3};

/// Inclusive lower/upper HSV thresholds, each channel 0-255.
///
/// Hue is scaled to the full byte range (0-255 rather than degrees). The
/// default range passes every pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HsvRange {
    /// Lower H, S, V bounds.
    pub lower: [u8; 3],
    /// Upper H, S, V bounds.
    pub upper: [u8; 3],
}

impl Default for HsvRange {
    fn default() -> Self {
        Self {
            lower: [0, 0, 0],
            upper: [255, 255, 255],
        }
    }
}

impl HsvRange {
    fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|c| self.lower[c] <= hsv[c] && hsv[c] <= self.upper[c])
    }
}

/// Convert one RGB pixel to HSV with every channel in 0-255.
#[inline]
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> [u8; 3] {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let d = max - min;

    let h = if d < 1e-6 {
        0.0
    } else if (max - rf).abs() < 1e-6 {
        let mut h = (gf - bf) / d;
        if gf < bf {
            h += 6.0;
        }
        h * 60.0
    } else if (max - gf).abs() < 1e-6 {
        ((bf - rf) / d + 2.0) * 60.0
    } else {
        ((rf - gf) / d + 4.0) * 60.0
    };

    let s = if max <= 0.0 { 0.0 } else { d / max };

    [
        (h / 360.0 * 255.0).round().clamp(0.0, 255.0) as u8,
        (s * 255.0).round() as u8,
        (max * 255.0).round() as u8,
    ]
}

/// Mask and masked frame produced from one input frame.
#[derive(Clone, Debug)]
pub struct Segmented {
    /// Binary inclusion mask: 255 where the pixel falls inside the range.
    pub mask: Array2<u8>,
    /// The frame with out-of-range pixels zeroed.
    pub masked: Array3<u8>,
}

/// Threshold one RGB frame against `range`.
pub fn segment_frame(frame: ArrayView3<u8>, range: &HsvRange) -> Segmented {
    let (height, width, _) = frame.dim();
    let mut mask = Array2::<u8>::zeros((height, width));
    let mut masked = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let hsv = rgb_to_hsv(frame[[y, x, 0]], frame[[y, x, 1]], frame[[y, x, 2]]);
            if range.contains(hsv) {
                mask[[y, x]] = 255;
                for c in 0..3 {
                    masked[[y, x, c]] = frame[[y, x, c]];
                }
            }
        }
    }

    Segmented { mask, masked }
}

/// Drive segmentation over a frame source until cancelled.
///
/// `controls` is consulted once per frame, mirroring live slider state.
/// `present` receives each original frame with its segmentation output and
/// returns `false` once the cancellation key has been observed.
///
/// # Returns
/// The number of frames processed, including the one being presented when
/// cancellation was signalled.
pub fn run_segmentation<I, C, P>(frames: I, mut controls: C, mut present: P) -> usize
where
    I: IntoIterator<Item = Array3<u8>>,
    C: FnMut() -> HsvRange,
    P: FnMut(&Array3<u8>, &Segmented) -> bool,
{
    let mut processed = 0;

    for frame in frames {
        let range = controls();
        let segmented = segment_frame(frame.view(), &range);
        processed += 1;
        if !present(&frame, &segmented) {
            break;
        }
    }

    processed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame_of(colors: &[[u8; 3]]) -> Array3<u8> {
        let mut frame = Array3::<u8>::zeros((1, colors.len(), 3));
        for (x, color) in colors.iter().enumerate() {
            for c in 0..3 {
                frame[[0, x, c]] = color[c];
            }
        }
        frame
    }

    #[test]
    fn primary_hues_land_on_thirds_of_the_byte_range() {
        assert_eq!(rgb_to_hsv(255, 0, 0)[0], 0);
        assert_eq!(rgb_to_hsv(0, 255, 0)[0], 85);
        assert_eq!(rgb_to_hsv(0, 0, 255)[0], 170);
    }

    #[test]
    fn default_range_passes_every_pixel() {
        let frame = frame_of(&[[255, 0, 0], [0, 0, 0], [12, 200, 99]]);

        let out = segment_frame(frame.view(), &HsvRange::default());

        assert!(out.mask.iter().all(|&v| v == 255));
        assert_eq!(out.masked, frame);
    }

    #[test]
    fn narrow_range_isolates_the_target_color() {
        let frame = frame_of(&[[0, 255, 0], [255, 0, 0], [0, 0, 255]]);
        let range = HsvRange {
            lower: [80, 100, 100],
            upper: [90, 255, 255],
        };

        let out = segment_frame(frame.view(), &range);

        assert_eq!(out.mask[[0, 0]], 255);
        assert_eq!(out.mask[[0, 1]], 0);
        assert_eq!(out.mask[[0, 2]], 0);
        // Excluded pixels are zeroed in the masked frame
        assert_eq!(out.masked[[0, 0, 1]], 255);
        assert_eq!(out.masked[[0, 2, 2]], 0);
    }

    #[test]
    fn loop_stops_when_cancellation_is_observed() {
        let frames = vec![frame_of(&[[1, 2, 3]]); 10];
        let mut shown = 0;

        let processed = run_segmentation(
            frames,
            HsvRange::default,
            |_, _| {
                shown += 1;
                shown < 4 // cancellation key observed on the fourth frame
            },
        );

        assert_eq!(processed, 4);
        assert_eq!(shown, 4);
    }

    #[test]
    fn controls_are_reread_every_frame() {
        let frames = vec![frame_of(&[[9, 9, 9]]); 3];
        let mut reads = 0;

        run_segmentation(
            frames,
            || {
                reads += 1;
                HsvRange::default()
            },
            |_, _| true,
        );

        assert_eq!(reads, 3);
    }

    #[test]
    fn empty_frame_source_processes_nothing() {
        let processed = run_segmentation(Vec::new(), HsvRange::default, |_, _| true);
        assert_eq!(processed, 0);
    }
}
