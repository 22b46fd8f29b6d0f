use harris_core::{GrayImage, RgbImage};

use crate::error::{HarrisError, HarrisResult};

/// ITU-R BT.601 luma weights for (R, G, B)
const LUMA_WEIGHTS: [f32; 3] = [0.2989, 0.5870, 0.1140];

/// Convert an interleaved RGB image into a single-channel luminance map.
///
/// The sample scale is the caller's: [0,1] floats and [0,255] values both
/// pass through and produce luminance on the same scale.
pub fn rgb_to_gray(rgb: &RgbImage, width: usize, height: usize) -> HarrisResult<GrayImage> {
    let expected_len = width * height * 3;
    if rgb.len() != expected_len {
        return Err(HarrisError::InvalidShape {
            expected_len,
            actual_len: rgb.len(),
        });
    }

    let gray = rgb
        .chunks_exact(3)
        .map(|px| LUMA_WEIGHTS[0] * px[0] + LUMA_WEIGHTS[1] * px[1] + LUMA_WEIGHTS[2] * px[2])
        .collect();

    Ok(gray)
}

/// Convenience for 8-bit input; luminance comes out on the [0,255] scale.
pub fn rgb8_to_gray(rgb: &[u8], width: usize, height: usize) -> HarrisResult<GrayImage> {
    let expected_len = width * height * 3;
    if rgb.len() != expected_len {
        return Err(HarrisError::InvalidShape {
            expected_len,
            actual_len: rgb.len(),
        });
    }

    let samples: RgbImage = rgb.iter().map(|&v| v as f32).collect();
    rgb_to_gray(&samples, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights_sum_to_one() {
        let sum: f32 = LUMA_WEIGHTS.iter().sum();
        assert!((sum - 0.9999).abs() < 1e-4);
    }

    #[test]
    fn test_pure_channels() {
        // One pixel each of pure red, green, blue at full scale
        let rgb = vec![
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0, //
            0.0, 0.0, 1.0,
        ];
        let gray = rgb_to_gray(&rgb, 3, 1).unwrap();
        assert!((gray[0] - 0.2989).abs() < 1e-6);
        assert!((gray[1] - 0.5870).abs() < 1e-6);
        assert!((gray[2] - 0.1140).abs() < 1e-6);
    }

    #[test]
    fn test_gray_input_maps_to_itself() {
        let rgb = vec![0.5, 0.5, 0.5];
        let gray = rgb_to_gray(&rgb, 1, 1).unwrap();
        assert!((gray[0] - 0.5 * 0.9999).abs() < 1e-4);
    }

    #[test]
    fn test_output_extent_matches_spatial_extent() {
        let rgb = vec![0.0; 4 * 5 * 3];
        let gray = rgb_to_gray(&rgb, 4, 5).unwrap();
        assert_eq!(gray.len(), 4 * 5);
    }

    #[test]
    fn test_wrong_channel_count_fails() {
        // 4 samples per pixel instead of 3
        let rgba = vec![0.0; 2 * 2 * 4];
        let result = rgb_to_gray(&rgba, 2, 2);
        assert!(matches!(result, Err(HarrisError::InvalidShape { .. })));
    }

    #[test]
    fn test_u8_input_keeps_255_scale() {
        let rgb = vec![255u8, 255, 255];
        let gray = rgb8_to_gray(&rgb, 1, 1).unwrap();
        assert!((gray[0] - 255.0 * 0.9999).abs() < 0.1);
    }
}
