//!
//! Persona: a registry and authorizer for BrowserID-style identity assertions.
//!
//! An assertion is a compact, signed token stating that an email address was
//! verified for a given audience (origin) until some expiration time. This
//! crate decodes those tokens, keeps the most recent one per identity and
//! origin, and turns them into the parameters a cookie-based login expects.
//!
//! ## Core Concepts
//!
//! * **Claims (`assertion::Claims`)**: The email, audience and expiration decoded from an assertion.
//! * **Expiration (`assertion::ExpirationPolicy`)**: Decides staleness against an injected [`Clock`].
//! * **Registry (`registry::AssertionRegistry`)**: A shared handle storing the latest raw assertion per `(email, origin)`.
//! * **Authorizers (`authorizer::Authorizer`)**: The capability a login layer talks to; `PersonaAuthorizer` is the implementation backed by the registry.
//!
//! Signature verification is not performed here. Trust is delegated to the
//! service the assertion is eventually posted to.

pub mod assertion;
pub mod authorizer;
pub mod clock;
pub mod constants;
pub mod registry;

pub use assertion::{AssertionError, Claims, ExpirationPolicy, parse_assertion};
pub use authorizer::{Authorizer, PersonaAuthorizer, assertion_from_url};
#[cfg(any(test, feature = "testing"))]
pub use clock::FixedClock;
pub use clock::{Clock, SystemClock};
pub use registry::AssertionRegistry;

/// Result type used throughout the Persona library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Persona library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured assertion errors from the assertion module
    #[error(transparent)]
    Assertion(assertion::AssertionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Assertion(_) => "assertion",
        }
    }

    /// Check if this error was caused by an unusable assertion token.
    pub fn is_invalid_assertion(&self) -> bool {
        match self {
            Error::Assertion(err) => err.is_malformed() || err.is_invalid_encoding(),
        }
    }

    /// Check if this error was caused by an origin that is not a URL.
    pub fn is_invalid_origin(&self) -> bool {
        match self {
            Error::Assertion(err) => err.is_invalid_origin(),
        }
    }
}
