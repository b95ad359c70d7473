//! Error types for the landing page

use thiserror::Error;

/// Main error type for landing page operations
#[derive(Error, Debug)]
pub enum LandingError {
    /// A carousel was constructed without any slides
    #[error("Slide set must contain at least one slide")]
    EmptySlideSet,

    /// Direct selection of a slide outside `[0, len)`
    #[error("Slide {index} is out of range (slide set has {len} slides)")]
    SlideOutOfRange { index: usize, len: usize },

    /// Auto-advance period of zero
    #[error("Slide interval must be greater than zero")]
    ZeroInterval,

    /// Brand color is not a `#rrggbb` hex string
    #[error("Invalid brand color: {0}")]
    InvalidColor(String),

    /// Content config could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using LandingError
pub type LandingResult<T> = Result<T, LandingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LandingError::SlideOutOfRange { index: 7, len: 4 };
        assert_eq!(
            format!("{}", err),
            "Slide 7 is out of range (slide set has 4 slides)"
        );
        assert_eq!(
            LandingError::EmptySlideSet.to_string(),
            "Slide set must contain at least one slide"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LandingError = io_err.into();
        assert!(matches!(err, LandingError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: LandingError = json_err.into();
        assert!(err.to_string().starts_with("Config error:"));
    }
}
