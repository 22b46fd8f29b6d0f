use harris_core::HarrisConfig;

use crate::error::HarrisResult;
use crate::response::CornerScorer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complete detector configuration with all settings
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DetectorConfig {
    /// Core Harris configuration
    pub core: HarrisConfig,
    /// Image dimensions
    pub width: usize,
    pub height: usize,
    /// Use the summed-area-table scoring path
    pub use_integral_image: bool,
    /// Metadata
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub name: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub description: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub version: Option<String>,
}

impl DetectorConfig {
    /// Create new configuration with default settings
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            core: HarrisConfig {
                window_size: 11,
                k: 0.04,
                n_threads: 1,
            },
            width,
            height,
            use_integral_image: false,
            name: None,
            description: None,
            version: None,
        }
    }

    /// Fine preset: small window, dense detections
    pub fn fine_preset(width: usize, height: usize) -> Self {
        Self {
            core: HarrisConfig {
                window_size: 5,
                k: 0.04,
                n_threads: num_cpus::get(),
            },
            width,
            height,
            use_integral_image: false,
            name: Some("Fine".to_string()),
            description: Some("Small aggregation window for closely spaced corners".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Balanced preset: the reference window and sensitivity
    pub fn balanced_preset(width: usize, height: usize) -> Self {
        Self {
            core: HarrisConfig {
                window_size: 11,
                k: 0.04,
                n_threads: num_cpus::get(),
            },
            width,
            height,
            use_integral_image: true,
            name: Some("Balanced".to_string()),
            description: Some("Default window and sensitivity with fast windowed sums".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Robust preset: wide window and high k to suppress noisy responses
    pub fn robust_preset(width: usize, height: usize) -> Self {
        Self {
            core: HarrisConfig {
                window_size: 15,
                k: 0.06,
                n_threads: num_cpus::get(),
            },
            width,
            height,
            use_integral_image: true,
            name: Some("Robust".to_string()),
            description: Some("Wide aggregation window for noisy or textured images".to_string()),
            version: Some("1.0".to_string()),
        }
    }

    /// Add metadata to configuration
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = Some(name.to_string());
        self.description = Some(description.to_string());
        self.version = Some("1.0".to_string());
        self
    }

    /// Convert to DetectorBuilder for further customization
    pub fn to_builder(self) -> crate::builder::DetectorBuilder {
        crate::builder::DetectorBuilder::from_config(self)
    }

    /// Generate human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "DetectorConfig: {}x{}, window={}, k={}, threads={}, integral={}",
            self.width,
            self.height,
            self.core.window_size,
            self.core.k,
            self.core.n_threads,
            self.use_integral_image
        )
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> HarrisResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(crate::error::HarrisError::InvalidImageSize {
                width: self.width,
                height: self.height,
            });
        }
        CornerScorer::validate_window(self.core.window_size)?;
        CornerScorer::validate_sensitivity(self.core.k)?;
        Ok(())
    }

    /// Save configuration to JSON file
    #[cfg(feature = "serde")]
    pub fn save_json<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load configuration from JSON file
    #[cfg(feature = "serde")]
    pub fn load_json<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to TOML file
    #[cfg(feature = "serde")]
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Load configuration from TOML file
    #[cfg(feature = "serde")]
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to JSON string
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string
    #[cfg(feature = "serde")]
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Deserialize from TOML string
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert!(DetectorConfig::new(64, 64).validate().is_ok());
        assert!(DetectorConfig::fine_preset(64, 64).validate().is_ok());
        assert!(DetectorConfig::balanced_preset(64, 64).validate().is_ok());
        assert!(DetectorConfig::robust_preset(64, 64).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_even_window() {
        let mut config = DetectorConfig::new(64, 64);
        config.core.window_size = 8;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_extent() {
        let config = DetectorConfig::new(0, 64);
        assert!(config.validate().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let original = DetectorConfig::robust_preset(320, 240)
            .with_metadata("Round-trip", "serialization consistency check");
        let json = original.to_json().unwrap();
        let restored = DetectorConfig::from_json(&json).unwrap();
        assert_eq!(original.width, restored.width);
        assert_eq!(original.core.window_size, restored.core.window_size);
        assert_eq!(original.core.k, restored.core.k);
        assert_eq!(original.use_integral_image, restored.use_integral_image);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_toml_round_trip() {
        let original = DetectorConfig::fine_preset(320, 240);
        let toml_str = original.to_toml().unwrap();
        let restored = DetectorConfig::from_toml(&toml_str).unwrap();
        assert_eq!(original.width, restored.width);
        assert_eq!(original.core.window_size, restored.core.window_size);
    }
}
