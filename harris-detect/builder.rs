use harris_core::HarrisConfig;

use crate::config::DetectorConfig;
use crate::configured_detector::ConfiguredDetector;
use crate::detector::HarrisDetector;
use crate::error::HarrisResult;

/// Builder for creating a `ConfiguredDetector`
#[derive(Debug, Clone)]
pub struct DetectorBuilder {
    config: HarrisConfig,
    width: usize,
    height: usize,
    use_integral_image: bool,
}

impl DetectorBuilder {
    /// Create a new builder with default settings
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            config: HarrisConfig::default(),
            width,
            height,
            use_integral_image: false,
        }
    }

    /// Set the aggregation and suppression window side length (odd)
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.config.window_size = window_size;
        self
    }

    /// Set the Harris sensitivity constant k
    pub fn k(mut self, k: f32) -> Self {
        self.config.k = k;
        self
    }

    /// Set the number of threads for parallel processing
    pub fn threads(mut self, n_threads: usize) -> Self {
        self.config.n_threads = n_threads;
        self
    }

    /// Enable or disable the summed-area-table scoring path
    pub fn integral_image(mut self, enable: bool) -> Self {
        self.use_integral_image = enable;
        self
    }

    /// Apply the fine preset
    pub fn preset_fine(mut self) -> Self {
        let preset = DetectorConfig::fine_preset(self.width, self.height);
        self.config = preset.core;
        self.use_integral_image = preset.use_integral_image;
        self
    }

    /// Apply the balanced preset
    pub fn preset_balanced(mut self) -> Self {
        let preset = DetectorConfig::balanced_preset(self.width, self.height);
        self.config = preset.core;
        self.use_integral_image = preset.use_integral_image;
        self
    }

    /// Apply the robust preset
    pub fn preset_robust(mut self) -> Self {
        let preset = DetectorConfig::robust_preset(self.width, self.height);
        self.config = preset.core;
        self.use_integral_image = preset.use_integral_image;
        self
    }

    /// Build the `ConfiguredDetector`
    pub fn build(self) -> HarrisResult<ConfiguredDetector> {
        let detector = HarrisDetector::new(self.config.clone(), self.width, self.height)?;
        Ok(ConfiguredDetector {
            detector,
            config: self,
        })
    }

    /// Generate a summary of the builder's configuration
    pub fn summary(&self) -> String {
        self.clone().to_config().summary()
    }

    /// Create a builder from an existing `DetectorConfig`
    pub fn from_config(config: DetectorConfig) -> Self {
        Self {
            config: config.core,
            width: config.width,
            height: config.height,
            use_integral_image: config.use_integral_image,
        }
    }

    /// Convert the builder into a `DetectorConfig`
    pub fn to_config(self) -> DetectorConfig {
        DetectorConfig {
            core: self.config,
            width: self.width,
            height: self.height,
            use_integral_image: self.use_integral_image,
            name: None,
            description: None,
            version: None,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub(crate) fn uses_integral_image(&self) -> bool {
        self.use_integral_image
    }
}
