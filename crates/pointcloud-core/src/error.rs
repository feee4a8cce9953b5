use thiserror::Error;

/// Message shown in place of the scene when no graphics context is available.
pub const UNSUPPORTED_MESSAGE: &str = "Sorry, it has not been possible to start a WebGPU context.";

#[derive(Debug, Error)]
pub enum BitmapError {
    #[error("failed to read logo image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to decode logo image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("rgba buffer holds {actual} bytes, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },
    #[error("bitmap has zero width or height")]
    EmptyImage,
}

/// Go/no-go result of the startup capability check.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("no graphics context available: {0}")]
    NoGraphicsContext(String),
}

impl StartupError {
    pub fn no_context(reason: impl Into<String>) -> Self {
        StartupError::NoGraphicsContext(reason.into())
    }

    /// Static text for the fallback presentation.
    pub fn user_message(&self) -> &'static str {
        UNSUPPORTED_MESSAGE
    }
}

/// Turn the outcome of a graphics probe into the startup gate result.
pub fn require_graphics<T, E: std::fmt::Display>(probe: Result<T, E>) -> Result<T, StartupError> {
    probe.map_err(|e| StartupError::no_context(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_probe_maps_to_fallback_message() {
        let probe: Result<(), &str> = Err("no adapter");
        let err = require_graphics(probe).unwrap_err();
        assert_eq!(err.user_message(), UNSUPPORTED_MESSAGE);
        assert!(err.to_string().contains("no adapter"));
    }

    #[test]
    fn successful_probe_passes_through() {
        let probe: Result<u32, &str> = Ok(7);
        assert_eq!(require_graphics(probe).unwrap(), 7);
    }
}
