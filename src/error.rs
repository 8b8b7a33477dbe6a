//! Error types.
//!
//! Configuration problems and estimator failures are reported immediately;
//! numerical outcomes such as density underflow are never errors.

use thiserror::Error;

use crate::types::GroupLabel;

/// Errors produced by the sampling, statistics and overlap pipeline.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed configuration: empty component set, non positive-definite
    /// covariance, non-positive point count and similar.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected input.
        message: String,
    },

    /// A group partition is too small for a required estimator.
    #[error("Insufficient data for {label}: need at least {required} points, got {count}")]
    InsufficientData {
        /// Group the estimator was computed for.
        label: GroupLabel,
        /// Points available in the partition.
        count: usize,
        /// Minimum points the estimator needs.
        required: usize,
    },

    /// Failed to write an export file.
    #[error("IO error: {context}")]
    Io {
        /// What was being written.
        context: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize a report.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wrap an IO error with a description of the failed operation.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }

    /// Whether this is an [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument { .. })
    }

    /// Whether this is an [`Error::InsufficientData`].
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Error::InsufficientData { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
