use harris_core::{Corner, GrayImage, ResponseMap};

use crate::builder::DetectorBuilder;
use crate::detector::HarrisDetector;
use crate::error::{HarrisError, HarrisResult};
use crate::response::CornerScorer;
use crate::suppression::Suppressor;

/// A Harris detector that has been configured with a specific builder.
///
/// Holds a validated `HarrisDetector` together with the builder's extra
/// settings, and selects the scoring path accordingly.
#[derive(Debug, Clone)]
pub struct ConfiguredDetector {
    pub(crate) detector: HarrisDetector,
    pub(crate) config: DetectorBuilder,
}

impl ConfiguredDetector {
    /// Detect corners in a row-major luminance image.
    pub fn detect(&self, gray: &GrayImage) -> HarrisResult<Vec<Corner>> {
        let response = self.response_map(gray)?;
        let (w, h) = self.detector.dimensions();
        Suppressor::suppress(&response, w, h, self.detector.config().window_size)
    }

    /// Compute the dense response map using the configured scoring path.
    pub fn response_map(&self, gray: &GrayImage) -> HarrisResult<ResponseMap> {
        let (w, h) = self.detector.dimensions();
        let expected_len = w * h;
        if gray.len() != expected_len {
            return Err(HarrisError::InvalidShape {
                expected_len,
                actual_len: gray.len(),
            });
        }

        let cfg = self.detector.config();
        if self.config.uses_integral_image() {
            CornerScorer::compute_integral(gray, w, h, cfg.window_size, cfg.k)
        } else {
            CornerScorer::compute(gray, w, h, cfg.window_size, cfg.k)
        }
    }

    /// Detect corners and keep the response map for inspection.
    pub fn detect_with_response(&self, gray: &GrayImage) -> HarrisResult<(ResponseMap, Vec<Corner>)> {
        let response = self.response_map(gray)?;
        let (w, h) = self.detector.dimensions();
        let corners = Suppressor::suppress(&response, w, h, self.detector.config().window_size)?;
        Ok((response, corners))
    }

    /// Get a reference to the underlying `HarrisDetector`.
    pub fn detector(&self) -> &HarrisDetector {
        &self.detector
    }

    /// Get a summary of the detector's configuration.
    pub fn config_summary(&self) -> String {
        self.config.summary()
    }

    /// Get the image dimensions (width, height) the detector is configured for.
    pub fn dimensions(&self) -> (usize, usize) {
        self.detector.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_block_image(width: usize, height: usize) -> GrayImage {
        let mut img = vec![0.0f32; width * height];
        for y in height / 4..height / 2 {
            for x in width / 4..width / 2 {
                img[y * width + x] = 1.0;
            }
        }
        img
    }

    #[test]
    fn test_scoring_paths_agree_on_corners() {
        let img = create_block_image(24, 24);

        let naive = DetectorBuilder::new(24, 24)
            .window_size(5)
            .integral_image(false)
            .build()
            .unwrap();
        let integral = DetectorBuilder::new(24, 24)
            .window_size(5)
            .integral_image(true)
            .build()
            .unwrap();

        let corners_naive = naive.detect(&img).unwrap();
        let corners_integral = integral.detect(&img).unwrap();

        let coords = |cs: &[Corner]| cs.iter().map(|c| (c.x, c.y)).collect::<Vec<_>>();
        assert_eq!(coords(&corners_naive), coords(&corners_integral));
        assert!(!corners_naive.is_empty());
    }

    #[test]
    fn test_wrong_length_input_rejected() {
        let configured = DetectorBuilder::new(16, 16).build().unwrap();
        let result = configured.detect(&vec![0.0; 10]);
        assert!(matches!(result, Err(HarrisError::InvalidShape { .. })));
    }
}
