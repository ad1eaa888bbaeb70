//! Assertion decoding and validation
//!
//! This module turns the compact BrowserID wire format into [`Claims`],
//! canonicalizes audiences into registry origins, and decides whether a set of
//! claims has expired.

pub mod claims;
pub mod errors;
pub mod expiration;
pub mod origin;

// Re-export main types for easier access
pub use claims::{Claims, parse_assertion};
pub use errors::AssertionError;
pub use expiration::ExpirationPolicy;
pub use origin::{normalize_origin, normalize_url};
