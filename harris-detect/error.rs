#[derive(Debug, Clone)]
pub enum HarrisError {
    InvalidImageSize { width: usize, height: usize },
    InvalidShape { expected_len: usize, actual_len: usize },
    InvalidWindowSize(usize),
    InvalidSensitivity(f32),
}

impl std::fmt::Display for HarrisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarrisError::InvalidImageSize { width, height } => {
                write!(f, "Invalid image dimensions: {}x{} (must be > 0)", width, height)
            }
            HarrisError::InvalidShape { expected_len, actual_len } => {
                write!(f, "Image buffer length mismatch: expected {}, got {}", expected_len, actual_len)
            }
            HarrisError::InvalidWindowSize(w) => {
                write!(f, "Invalid window size: {} (must be odd and positive)", w)
            }
            HarrisError::InvalidSensitivity(k) => {
                write!(f, "Invalid sensitivity constant k: {} (must be positive)", k)
            }
        }
    }
}

impl std::error::Error for HarrisError {}

pub type HarrisResult<T> = Result<T, HarrisError>;
