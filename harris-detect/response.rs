use harris_core::{GrayImage, ResponseMap};
use rayon::prelude::*;

use crate::error::{HarrisError, HarrisResult};
use crate::gradient::central_gradients;
use crate::padding::pad_edge;

/// Structure-tensor aggregation and Harris response scoring
pub struct CornerScorer;

impl CornerScorer {
    /// Validate the shared window constraint: odd and positive
    pub fn validate_window(window_size: usize) -> HarrisResult<()> {
        if window_size == 0 || window_size % 2 == 0 {
            return Err(HarrisError::InvalidWindowSize(window_size));
        }
        Ok(())
    }

    /// Validate the Harris sensitivity constant
    pub fn validate_sensitivity(k: f32) -> HarrisResult<()> {
        if !(k > 0.0) || !k.is_finite() {
            return Err(HarrisError::InvalidSensitivity(k));
        }
        Ok(())
    }

    /// Compute the Harris response for every pixel of the input.
    ///
    /// The image is padded by `window_size / 2` with edge replication, so
    /// border pixels receive fully-windowed scores like everyone else.
    /// Output extent equals the unpadded input extent.
    pub fn compute(
        gray: &GrayImage,
        width: usize,
        height: usize,
        window_size: usize,
        k: f32,
    ) -> HarrisResult<ResponseMap> {
        let (ixx, ixy, iyy, pw) = Self::tensor_products(gray, width, height, window_size, k)?;

        let response: ResponseMap = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| {
                let mut row = Vec::with_capacity(width);
                for x in 0..width {
                    let mut sxx = 0.0f64;
                    let mut sxy = 0.0f64;
                    let mut syy = 0.0f64;
                    for wy in 0..window_size {
                        let base = (y + wy) * pw + x;
                        for wx in 0..window_size {
                            let i = base + wx;
                            sxx += ixx[i] as f64;
                            sxy += ixy[i] as f64;
                            syy += iyy[i] as f64;
                        }
                    }
                    row.push(Self::score(sxx, sxy, syy, k));
                }
                row
            })
            .collect();

        Ok(response)
    }

    /// Summed-area-table variant of [`CornerScorer::compute`].
    ///
    /// O(H*W) instead of O(H*W*window^2); agrees with the windowed sums
    /// within floating-point tolerance.
    pub fn compute_integral(
        gray: &GrayImage,
        width: usize,
        height: usize,
        window_size: usize,
        k: f32,
    ) -> HarrisResult<ResponseMap> {
        let (ixx, ixy, iyy, pw) = Self::tensor_products(gray, width, height, window_size, k)?;
        let ph = ixx.len() / pw;

        let sat_xx = Self::summed_area_table(&ixx, pw, ph);
        let sat_xy = Self::summed_area_table(&ixy, pw, ph);
        let sat_yy = Self::summed_area_table(&iyy, pw, ph);

        let sw = pw + 1;
        let response: ResponseMap = (0..height)
            .into_par_iter()
            .flat_map_iter(|y| {
                let mut row = Vec::with_capacity(width);
                for x in 0..width {
                    let top = y * sw + x;
                    let bottom = (y + window_size) * sw + x;
                    let sxx = sat_xx[bottom + window_size] - sat_xx[top + window_size]
                        - sat_xx[bottom]
                        + sat_xx[top];
                    let sxy = sat_xy[bottom + window_size] - sat_xy[top + window_size]
                        - sat_xy[bottom]
                        + sat_xy[top];
                    let syy = sat_yy[bottom + window_size] - sat_yy[top + window_size]
                        - sat_yy[bottom]
                        + sat_yy[top];
                    row.push(Self::score(sxx, sxy, syy, k));
                }
                row
            })
            .collect();

        Ok(response)
    }

    /// Shared prologue: validation, padding, gradients, elementwise
    /// squared/cross products over the padded extent.
    fn tensor_products(
        gray: &GrayImage,
        width: usize,
        height: usize,
        window_size: usize,
        k: f32,
    ) -> HarrisResult<(Vec<f32>, Vec<f32>, Vec<f32>, usize)> {
        Self::validate_window(window_size)?;
        Self::validate_sensitivity(k)?;
        if width == 0 || height == 0 {
            return Err(HarrisError::InvalidImageSize { width, height });
        }
        let expected_len = width * height;
        if gray.len() != expected_len {
            return Err(HarrisError::InvalidShape {
                expected_len,
                actual_len: gray.len(),
            });
        }

        let pad = window_size / 2;
        let pw = width + 2 * pad;
        let ph = height + 2 * pad;
        let padded = pad_edge(gray, width, height, pad);
        let (ix, iy) = central_gradients(&padded, pw, ph);

        let n = pw * ph;
        let mut ixx = vec![0.0f32; n];
        let mut ixy = vec![0.0f32; n];
        let mut iyy = vec![0.0f32; n];
        for i in 0..n {
            ixx[i] = ix[i] * ix[i];
            ixy[i] = ix[i] * iy[i];
            iyy[i] = iy[i] * iy[i];
        }

        Ok((ixx, ixy, iyy, pw))
    }

    /// det(M) - k * trace(M)^2 for the 2x2 structure tensor
    #[inline]
    fn score(sxx: f64, sxy: f64, syy: f64, k: f32) -> f32 {
        let det = sxx * syy - sxy * sxy;
        let trace = sxx + syy;
        (det - k as f64 * trace * trace) as f32
    }

    /// Inclusive-prefix table with a zero top row and left column, so any
    /// rectangle sum is four lookups.
    fn summed_area_table(src: &[f32], width: usize, height: usize) -> Vec<f64> {
        let sw = width + 1;
        let mut sat = vec![0.0f64; sw * (height + 1)];
        for y in 0..height {
            let mut row_sum = 0.0f64;
            for x in 0..width {
                row_sum += src[y * width + x] as f64;
                sat[(y + 1) * sw + (x + 1)] = sat[y * sw + (x + 1)] + row_sum;
            }
        }
        sat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_corner_image(width: usize, height: usize) -> GrayImage {
        // Bright quadrant in the upper-left, corner of the step at (7, 7)
        let mut img = vec![0.0f32; width * height];
        for y in 0..=7 {
            for x in 0..=7 {
                img[y * width + x] = 1.0;
            }
        }
        img
    }

    fn create_noise_image(width: usize, height: usize) -> GrayImage {
        // Deterministic pseudo-random samples, no RNG dependency needed
        let mut state = 0x2545f491u32;
        (0..width * height)
            .map(|_| {
                state = state.wrapping_mul(1664525).wrapping_add(1013904223);
                (state >> 8) as f32 / (1u32 << 24) as f32
            })
            .collect()
    }

    #[test]
    fn test_even_window_rejected() {
        let img = vec![0.0; 25];
        let result = CornerScorer::compute(&img, 5, 5, 10, 0.04);
        assert!(matches!(result, Err(HarrisError::InvalidWindowSize(10))));
    }

    #[test]
    fn test_zero_window_rejected() {
        let img = vec![0.0; 25];
        let result = CornerScorer::compute(&img, 5, 5, 0, 0.04);
        assert!(matches!(result, Err(HarrisError::InvalidWindowSize(0))));
    }

    #[test]
    fn test_odd_window_accepted() {
        let img = vec![0.0; 25];
        assert!(CornerScorer::compute(&img, 5, 5, 11, 0.04).is_ok());
    }

    #[test]
    fn test_nonpositive_sensitivity_rejected() {
        let img = vec![0.0; 25];
        let result = CornerScorer::compute(&img, 5, 5, 3, 0.0);
        assert!(matches!(result, Err(HarrisError::InvalidSensitivity(_))));
        let result = CornerScorer::compute(&img, 5, 5, 3, -0.04);
        assert!(matches!(result, Err(HarrisError::InvalidSensitivity(_))));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let img = vec![0.0; 24];
        let result = CornerScorer::compute(&img, 5, 5, 3, 0.04);
        assert!(matches!(result, Err(HarrisError::InvalidShape { .. })));
    }

    #[test]
    fn test_output_extent_matches_input() {
        let img = vec![0.0; 8 * 6];
        let resp = CornerScorer::compute(&img, 8, 6, 5, 0.04).unwrap();
        assert_eq!(resp.len(), 8 * 6);
    }

    #[test]
    fn test_constant_image_scores_zero() {
        for value in [0.0f32, 1.0, 255.0] {
            let img = vec![value; 9 * 9];
            let resp = CornerScorer::compute(&img, 9, 9, 3, 0.04).unwrap();
            assert!(resp.iter().all(|&r| r == 0.0), "value {} gave nonzero response", value);
        }
    }

    #[test]
    fn test_corner_beats_edge_and_flat() {
        let width = 16;
        let height = 16;
        let img = create_corner_image(width, height);
        let resp = CornerScorer::compute(&img, width, height, 3, 0.04).unwrap();

        let at = |x: usize, y: usize| resp[y * width + x];
        let corner = at(7, 7);
        // Flat interior, flat background, horizontal edge, vertical edge
        assert!(corner > at(3, 3));
        assert!(corner > at(12, 12));
        assert!(corner > at(3, 7));
        assert!(corner > at(7, 3));
    }

    #[test]
    fn test_integral_matches_naive() {
        let width = 23;
        let height = 17;
        let img = create_noise_image(width, height);

        for window_size in [3, 5, 11] {
            let naive = CornerScorer::compute(&img, width, height, window_size, 0.04).unwrap();
            let integral =
                CornerScorer::compute_integral(&img, width, height, window_size, 0.04).unwrap();
            for (i, (a, b)) in naive.iter().zip(integral.iter()).enumerate() {
                let scale = a.abs().max(b.abs()).max(1e-3);
                assert!(
                    (a - b).abs() / scale < 1e-4,
                    "mismatch at {} for window {}: {} vs {}",
                    i,
                    window_size,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_window_larger_than_image_is_fine() {
        // Edge-replicated padding absorbs any window overhang
        let img = vec![0.0; 3 * 3];
        let resp = CornerScorer::compute(&img, 3, 3, 7, 0.04).unwrap();
        assert_eq!(resp.len(), 9);
    }
}
