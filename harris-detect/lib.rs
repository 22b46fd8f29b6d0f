//! Harris corner detection pipeline.
//!
//! The stages compose linearly: grayscale conversion, central-difference
//! gradients, windowed structure-tensor scoring, and non-maximum
//! suppression. All stages share one edge-replication padding primitive so
//! boundary semantics never diverge between them.

pub mod builder;
pub mod config;
pub mod configured_detector;
pub mod detector;
pub mod error;
pub mod gradient;
pub mod grayscale;
pub mod padding;
pub mod response;
pub mod suppression;

pub use builder::DetectorBuilder;
pub use config::DetectorConfig;
pub use configured_detector::ConfiguredDetector;
pub use detector::HarrisDetector;
pub use error::{HarrisError, HarrisResult};
pub use gradient::central_gradients;
pub use grayscale::{rgb8_to_gray, rgb_to_gray};
pub use padding::pad_edge;
pub use response::CornerScorer;
pub use suppression::Suppressor;
