use harris_core::{Corner, ResponseMap};
use rayon::prelude::*;

use crate::error::{HarrisError, HarrisResult};
use crate::padding::pad_edge;
use crate::response::CornerScorer;

/// Relative threshold applied to the global response maximum
const THRESHOLD_RATIO: f32 = 0.01;

/// Non-maximum suppression over a dense response map
pub struct Suppressor;

impl Suppressor {
    /// Reduce the response map to the coordinates of thresholded local maxima.
    ///
    /// A pixel survives iff its response strictly exceeds
    /// `0.01 * max(response)` and exactly equals the maximum of its
    /// `window_size` x `window_size` edge-padded neighborhood. Ties on a
    /// plateau are all retained. Results come back in row-major scan order.
    pub fn suppress(
        response: &ResponseMap,
        width: usize,
        height: usize,
        window_size: usize,
    ) -> HarrisResult<Vec<Corner>> {
        CornerScorer::validate_window(window_size)?;
        if width == 0 || height == 0 {
            return Err(HarrisError::InvalidImageSize { width, height });
        }
        let expected_len = width * height;
        if response.len() != expected_len {
            return Err(HarrisError::InvalidShape {
                expected_len,
                actual_len: response.len(),
            });
        }

        let max_response = response.iter().fold(f32::NEG_INFINITY, |m, &v| m.max(v));
        let threshold = THRESHOLD_RATIO * max_response;

        let pad = window_size / 2;
        let pw = width + 2 * pad;
        let padded = pad_edge(response, width, height, pad);

        let corners: Vec<Corner> = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| {
                let mut row = Vec::new();
                for x in 0..width {
                    let v = response[y * width + x];
                    if v > threshold && v == Self::window_max(&padded, pw, x, y, window_size) {
                        row.push(Corner { x, y, response: v });
                    }
                }
                row
            })
            .collect();

        Ok(corners)
    }

    /// Maximum over the window whose top-left padded index is (x, y)
    #[inline]
    fn window_max(padded: &[f32], pw: usize, x: usize, y: usize, window_size: usize) -> f32 {
        let mut max = f32::NEG_INFINITY;
        for wy in 0..window_size {
            let base = (y + wy) * pw + x;
            for &v in &padded[base..base + window_size] {
                if v > max {
                    max = v;
                }
            }
        }
        max
    }
}
