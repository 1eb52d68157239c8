// src/core/errors.rs

use std::path::PathBuf;
use thiserror::Error;

/// Message shown for every failure that is not reported by the server itself.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing the image.";

/// Reasons a file cannot become the current selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("Please select an image file ({name} is {mime})")]
    InvalidFileType { name: String, mime: String },

    #[error("Could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Outcome of a failed submission.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The server answered with an `error` field.
    #[error("{0}")]
    Server(String),

    /// The selected file could not be read when the upload started.
    #[error("could not read the selected file: {0}")]
    Read(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Malformed(String),
}

impl SubmitError {
    /// Text for the blocking notification.
    ///
    /// Server-reported errors are shown verbatim; everything else gets the
    /// generic message and is only detailed in the log.
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Server(message) => format!("Error: {message}"),
            _ => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_server_reported(&self) -> bool {
        matches!(self, SubmitError::Server(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_is_verbatim() {
        let err = SubmitError::Server("invalid image".to_string());
        assert_eq!(err.user_message(), "Error: invalid image");
        assert!(err.is_server_reported());
    }

    #[test]
    fn test_other_failures_are_generic() {
        let gone = std::io::Error::from(std::io::ErrorKind::NotFound);
        for err in [SubmitError::Status(502), SubmitError::Malformed("eof".into()), SubmitError::Read(gone)] {
            assert_eq!(err.user_message(), GENERIC_FAILURE_MESSAGE);
            assert!(!err.is_server_reported());
        }
    }
}
