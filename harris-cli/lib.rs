use harris_core::{Corner, GrayImage, HarrisConfig, ResponseMap, RgbImage, init_thread_pool};
use harris_detect::{HarrisDetector, HarrisError, rgb_to_gray};

pub use harris_core::{
    self, Corner as HarrisCorner, HarrisConfig as Config, RgbImage as HarrisImage,
};

#[derive(Debug)]
pub enum PipelineError {
    Harris(HarrisError),
    ThreadPool(rayon::ThreadPoolBuildError),
}

impl std::fmt::Display for PipelineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineError::Harris(e) => write!(f, "Harris error: {}", e),
            PipelineError::ThreadPool(e) => write!(f, "Thread pool error: {}", e),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<HarrisError> for PipelineError {
    fn from(err: HarrisError) -> Self {
        PipelineError::Harris(err)
    }
}

impl From<rayon::ThreadPoolBuildError> for PipelineError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        PipelineError::ThreadPool(err)
    }
}

pub type PipelineResult<T> = Result<T, PipelineError>;

/// Everything the pipeline produces for one image, for display or export
pub struct PipelineOutput {
    pub gray: GrayImage,
    pub response: ResponseMap,
    pub corners: Vec<Corner>,
}

/// High-level Harris pipeline: grayscale conversion, response scoring,
/// and non-maximum suppression in one call
pub struct HarrisPipeline {
    detector: HarrisDetector,
}

impl HarrisPipeline {
    /// Create a new pipeline with the given configuration and image dimensions
    pub fn new(cfg: HarrisConfig, width: usize, height: usize) -> PipelineResult<Self> {
        // Initialize thread pool
        init_thread_pool(cfg.n_threads)?;

        let detector = HarrisDetector::new(cfg, width, height)?;
        Ok(Self { detector })
    }

    /// Run the full pipeline on an interleaved RGB image
    pub fn process(&self, rgb: &RgbImage) -> PipelineResult<PipelineOutput> {
        let (w, h) = self.detector.dimensions();
        let gray = rgb_to_gray(rgb, w, h)?;
        let (response, corners) = self.detector.detect_with_response(&gray)?;
        Ok(PipelineOutput {
            gray,
            response,
            corners,
        })
    }

    /// Run the detection stages on an existing luminance image
    pub fn process_gray(&self, gray: &GrayImage) -> PipelineResult<(ResponseMap, Vec<Corner>)> {
        Ok(self.detector.detect_with_response(gray)?)
    }

    /// Get detector configuration
    pub fn config(&self) -> &HarrisConfig {
        self.detector.config()
    }

    /// Get image dimensions
    pub fn dimensions(&self) -> (usize, usize) {
        self.detector.dimensions()
    }
}
