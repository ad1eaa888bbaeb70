//! Assertion error types for the Persona library.
//!
//! Every variant here is a hard failure: the input can never become valid by
//! retrying. Soft outcomes (no assertion stored, assertion expired) are not
//! errors and are reported as `None` by the authorizer instead.

use thiserror::Error as ThisError;

use crate::Error;

/// Errors that can occur while decoding an assertion or its origin.
///
/// # Stability
///
/// - New variants may be added in minor versions (enum is `#[non_exhaustive]`)
/// - Helper methods like `is_*()` provide stable APIs
#[non_exhaustive]
#[derive(Debug, ThisError)]
pub enum AssertionError {
    /// The assertion does not have enough `.`-separated segments.
    #[error("Invalid assertion: found {segments} segments, expected 4+")]
    MalformedAssertion {
        /// Number of segments that were found
        segments: usize,
    },

    /// A payload segment could not be decoded into the expected claims.
    #[error("Invalid assertion encoding in segment {segment}: {reason}")]
    InvalidAssertionEncoding {
        /// Index of the offending segment
        segment: usize,
        /// Description of the decoding failure
        reason: String,
    },

    /// The assertion's origin is not an absolute URL.
    #[error("Invalid origin URL '{origin}'")]
    InvalidOriginUrl {
        /// The origin string that failed to parse
        origin: String,
        /// The underlying parse error
        #[source]
        source: url::ParseError,
    },
}

impl AssertionError {
    /// Check if this error indicates a wrong segment count.
    pub fn is_malformed(&self) -> bool {
        matches!(self, AssertionError::MalformedAssertion { .. })
    }

    /// Check if this error indicates an undecodable payload segment.
    pub fn is_invalid_encoding(&self) -> bool {
        matches!(self, AssertionError::InvalidAssertionEncoding { .. })
    }

    /// Check if this error indicates an unparseable origin.
    pub fn is_invalid_origin(&self) -> bool {
        matches!(self, AssertionError::InvalidOriginUrl { .. })
    }

    /// Get the segment index if this error is about a payload segment.
    pub fn segment(&self) -> Option<usize> {
        match self {
            AssertionError::InvalidAssertionEncoding { segment, .. } => Some(*segment),
            _ => None,
        }
    }
}

impl From<AssertionError> for Error {
    fn from(err: AssertionError) -> Self {
        Error::Assertion(err)
    }
}
