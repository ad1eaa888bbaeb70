//! Subcommand implementations.

pub mod inspect;
pub mod login_params;

use persona::{assertion_from_url, constants::QUERY_PARAMETER};
use url::Url;

/// Accept either a raw assertion or a URL carrying one in its query string.
pub fn resolve_assertion(arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    if !arg.contains(QUERY_PARAMETER) {
        return Ok(arg.to_string());
    }
    let url = Url::parse(arg)?;
    assertion_from_url(&url)
        .ok_or_else(|| format!("URL has an empty '{QUERY_PARAMETER}' parameter").into())
}
