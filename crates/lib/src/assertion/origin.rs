//! Origin normalization for registry keys.
//!
//! Registration and lookup must both go through these functions or stored
//! entries become unreachable.

use url::Url;

use super::errors::AssertionError;

/// Parse `origin` as an absolute URL and return its canonical lowercase form.
pub fn normalize_origin(origin: &str) -> Result<String, AssertionError> {
    let url = Url::parse(origin).map_err(|source| AssertionError::InvalidOriginUrl {
        origin: origin.to_string(),
        source,
    })?;
    Ok(normalize_url(&url))
}

/// Canonical lowercase form of an already parsed URL.
pub fn normalize_url(url: &Url) -> String {
    url.as_str().to_lowercase()
}
