//! Error types for the Pixtral bridge.

use thiserror::Error;

use crate::image::MAX_IMAGES;

/// Primary error type for all bridge operations.
#[derive(Error, Debug)]
pub enum PixtralError {
    #[error("Unsupported image shape: {shape:?}")]
    UnsupportedImageShape { shape: Vec<usize> },

    #[error("Incompatible image shapes: expected {expected:?}, got {actual:?}")]
    IncompatibleImageShapes {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("At least 2 images are required. Only {0} provided.")]
    InsufficientImages(usize),

    #[error("Pixtral supports up to {max} images. {0} provided.", max = MAX_IMAGES)]
    TooManyImages(usize),

    #[error("API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Timeout after {0}ms")]
    Timeout(u64),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),

    #[error("Image encoding error: {0}")]
    Encoding(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Broad error category, used for log fields and caller-side routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Image,
    Cardinality,
    Remote,
    Transport,
    Configuration,
    Unknown,
}

impl PixtralError {
    /// Create a remote API error from a status code and raw body.
    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Classify this error into a category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedImageShape { .. }
            | Self::IncompatibleImageShapes { .. }
            | Self::Shape(_)
            | Self::Encoding(_) => ErrorCategory::Image,
            Self::InsufficientImages(_) | Self::TooManyImages(_) => ErrorCategory::Cardinality,
            Self::Api { .. } | Self::InvalidResponse(_) | Self::Serialization(_) => {
                ErrorCategory::Remote
            }
            Self::Transport(_) | Self::Timeout(_) => ErrorCategory::Transport,
            Self::Configuration(_) | Self::InvalidArgument(_) => ErrorCategory::Configuration,
            Self::Io(_) => ErrorCategory::Unknown,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PixtralError>;
