/// Row-major interleaved RGB image, 3 samples per pixel
pub type RgbImage = Vec<f32>;

/// Row-major single-channel luminance map
pub type GrayImage = Vec<f32>;

/// Row-major per-pixel Harris response map
pub type ResponseMap = Vec<f32>;

/// Detected corner = thresholded local maximum of the response map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub x: usize,
    pub y: usize,
    pub response: f32,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HarrisConfig {
    /// Side length of the aggregation and suppression windows, must be odd
    pub window_size: usize,
    /// Harris sensitivity constant, usually 0.04 - 0.06
    pub k: f32,
    pub n_threads: usize,
}

impl Default for HarrisConfig {
    fn default() -> Self {
        Self {
            window_size: 11,
            k: 0.04,
            n_threads: num_cpus::get().max(1),
        }
    }
}

/// Initialize Rayon thread pool with the specified number of threads
pub fn init_thread_pool(n_threads: usize) -> Result<(), rayon::ThreadPoolBuildError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .build_global()
}
