//! Decoding of the compact assertion wire format.
//!
//! A backed BrowserID assertion is a certificate followed by the assertion
//! proper, each serialized as `header.payload.signature`. Joined with `~` that
//! still splits on `.` into at least four segments:
//!
//! ```text
//! <cert header>.<cert payload>.<cert sig>~<assertion header>.<assertion payload>.<assertion sig>
//!       0            1            2 ~ 3 ...
//! ```
//!
//! Only segment 1 (the certificate payload, carrying `principal.email`) and
//! segment 3 (read as the assertion payload, carrying `aud` and `exp`) are
//! consumed. Signatures are never checked.

use base64ct::{Base64Unpadded, Base64UrlUnpadded, Encoding};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use super::errors::AssertionError;
use super::origin::{normalize_origin, normalize_url};
use crate::constants::{
    ASSERTION_PAYLOAD_SEGMENT, CERTIFICATE_PAYLOAD_SEGMENT, MIN_ASSERTION_SEGMENTS,
};

/// The claims carried by an assertion.
///
/// Always derived from the raw assertion string; never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    /// The asserted identity, from `principal.email`.
    pub email: String,
    /// The audience the assertion was issued for, from `aud`. Not normalized.
    pub origin: String,
    /// Absolute expiration time, from `exp`.
    pub expiration: DateTime<Utc>,
}

impl Claims {
    /// Expiration as milliseconds since the Unix epoch, as found on the wire.
    pub fn expiration_millis(&self) -> i64 {
        self.expiration.timestamp_millis()
    }

    /// Whether the audience normalizes to the same origin as `site`.
    ///
    /// An audience that is not a URL never matches.
    pub fn is_for_site(&self, site: &Url) -> bool {
        normalize_origin(&self.origin).is_ok_and(|origin| origin == normalize_url(site))
    }
}

#[derive(Deserialize)]
struct CertificatePayload {
    principal: Principal,
}

#[derive(Deserialize)]
struct Principal {
    email: String,
}

#[derive(Deserialize)]
struct AssertionPayload {
    aud: String,
    exp: i64,
}

/// Decode an assertion string into its [`Claims`].
///
/// # Errors
///
/// - [`AssertionError::MalformedAssertion`] with fewer than four segments.
/// - [`AssertionError::InvalidAssertionEncoding`] when segment 1 or 3 is not
///   base64, not UTF-8 JSON objects, or lacks a required field.
pub fn parse_assertion(assertion: &str) -> Result<Claims, AssertionError> {
    let segments = split_segments(assertion);
    if segments.len() < MIN_ASSERTION_SEGMENTS {
        return Err(AssertionError::MalformedAssertion {
            segments: segments.len(),
        });
    }

    let certificate: CertificatePayload = decode_payload(&segments, CERTIFICATE_PAYLOAD_SEGMENT)?;
    let payload: AssertionPayload = decode_payload(&segments, ASSERTION_PAYLOAD_SEGMENT)?;

    let expiration = DateTime::from_timestamp_millis(payload.exp).ok_or_else(|| {
        invalid_encoding(
            ASSERTION_PAYLOAD_SEGMENT,
            format!("exp {} is out of range", payload.exp),
        )
    })?;

    Ok(Claims {
        email: certificate.principal.email,
        origin: payload.aud,
        expiration,
    })
}

/// Split on `.`, ignoring trailing empty segments.
fn split_segments(assertion: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = assertion.split('.').collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments
}

fn decode_payload<T: DeserializeOwned>(
    segments: &[&str],
    index: usize,
) -> Result<T, AssertionError> {
    let bytes = decode_base64(segments[index])
        .map_err(|e| invalid_encoding(index, format!("invalid base64: {e}")))?;
    let text = String::from_utf8(bytes)
        .map_err(|e| invalid_encoding(index, format!("invalid UTF-8: {e}")))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| invalid_encoding(index, format!("invalid JSON: {e}")))?;
    if !value.is_object() {
        return Err(invalid_encoding(index, "expected a JSON object".to_string()));
    }
    serde_json::from_value(value).map_err(|e| invalid_encoding(index, e.to_string()))
}

/// Decode either base64 alphabet, with or without padding.
fn decode_base64(segment: &str) -> Result<Vec<u8>, base64ct::Error> {
    let unpadded = segment.trim_end_matches('=');
    if unpadded.contains(['-', '_']) {
        Base64UrlUnpadded::decode_vec(unpadded)
    } else {
        Base64Unpadded::decode_vec(unpadded)
    }
}

fn invalid_encoding(segment: usize, reason: String) -> AssertionError {
    AssertionError::InvalidAssertionEncoding { segment, reason }
}
