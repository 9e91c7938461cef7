//! Error types for rendering documents.

use std::{io, string::FromUtf8Error};

use thiserror::Error;

/// The error returned when a document cannot be rendered.
///
/// Building documents never fails; only writing them out does.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The sink rejected a write. Anything written before the failure stays
    /// in the sink.
    #[error("Failed to write SVG output: {0}")]
    Sink(#[from] io::Error),

    #[error("Rendered SVG is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_error_display_includes_cause() {
        let err = RenderError::from(io::Error::other("disk full"));
        assert_eq!(err.to_string(), "Failed to write SVG output: disk full");
    }

    #[test]
    fn test_sink_error_exposes_source() {
        let err = RenderError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        let source = std::error::Error::source(&err).expect("source should be set");
        assert_eq!(source.to_string(), "closed");
    }
}
