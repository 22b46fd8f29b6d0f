use harris_core::{Corner, GrayImage, HarrisConfig, ResponseMap, RgbImage};

use crate::error::{HarrisError, HarrisResult};
use crate::grayscale::rgb_to_gray;
use crate::response::CornerScorer;
use crate::suppression::Suppressor;

/// Harris corner detector for a fixed image extent
#[derive(Debug, Clone)]
pub struct HarrisDetector {
    cfg: HarrisConfig,
    w: usize,
    h: usize,
}

impl HarrisDetector {
    /// Creates a new detector, validating the configuration up front
    pub fn new(cfg: HarrisConfig, width: usize, height: usize) -> HarrisResult<Self> {
        if width == 0 || height == 0 {
            return Err(HarrisError::InvalidImageSize { width, height });
        }
        CornerScorer::validate_window(cfg.window_size)?;
        CornerScorer::validate_sensitivity(cfg.k)?;

        Ok(Self {
            cfg,
            w: width,
            h: height,
        })
    }

    /// Validates luminance data before processing
    fn validate_gray(&self, gray: &GrayImage) -> HarrisResult<()> {
        let expected_len = self.w * self.h;
        if gray.len() != expected_len {
            return Err(HarrisError::InvalidShape {
                expected_len,
                actual_len: gray.len(),
            });
        }
        Ok(())
    }

    /// Compute the dense Harris response map for a luminance image
    pub fn response_map(&self, gray: &GrayImage) -> HarrisResult<ResponseMap> {
        self.validate_gray(gray)?;
        CornerScorer::compute(gray, self.w, self.h, self.cfg.window_size, self.cfg.k)
    }

    /// Detect corners in a luminance image
    pub fn detect(&self, gray: &GrayImage) -> HarrisResult<Vec<Corner>> {
        let response = self.response_map(gray)?;
        Suppressor::suppress(&response, self.w, self.h, self.cfg.window_size)
    }

    /// Detect corners and keep the response map for inspection
    pub fn detect_with_response(&self, gray: &GrayImage) -> HarrisResult<(ResponseMap, Vec<Corner>)> {
        let response = self.response_map(gray)?;
        let corners = Suppressor::suppress(&response, self.w, self.h, self.cfg.window_size)?;
        Ok((response, corners))
    }

    /// Convert a color image to luminance, then detect corners
    pub fn detect_rgb(&self, rgb: &RgbImage) -> HarrisResult<Vec<Corner>> {
        let gray = rgb_to_gray(rgb, self.w, self.h)?;
        self.detect(&gray)
    }

    /// Get detector configuration
    pub fn config(&self) -> &HarrisConfig {
        &self.cfg
    }

    /// Get image dimensions
    pub fn dimensions(&self) -> (usize, usize) {
        (self.w, self.h)
    }
}
