//! Constants shared between the parser, the authorizer and external callers.
//!
//! These are wire-level contracts with Persona-aware servers, not tuning knobs.

/// Key under which the raw assertion is sent in the login parameters.
pub const LOGIN_PARAMETER_ASSERTION: &str = "assertion";

/// Query string parameter an assertion may arrive under.
pub const QUERY_PARAMETER: &str = "personaAssertion";

/// Server endpoint the login parameters are posted to.
pub const LOGIN_PATH: &str = "/_persona";

/// Field of the `principal` object holding the asserted email.
pub const ASSERTION_FIELD_EMAIL: &str = "email";

/// Claim name used for the audience once decoded.
pub const ASSERTION_FIELD_ORIGIN: &str = "origin";

/// Claim holding the expiration in milliseconds since the Unix epoch.
pub const ASSERTION_FIELD_EXPIRATION: &str = "exp";

/// Minimum number of `.`-separated segments in a well-formed assertion.
pub const MIN_ASSERTION_SEGMENTS: usize = 4;

/// Segment carrying the identity certificate payload (`principal.email`).
pub const CERTIFICATE_PAYLOAD_SEGMENT: usize = 1;

/// Segment carrying the assertion payload (`aud`, `exp`).
pub const ASSERTION_PAYLOAD_SEGMENT: usize = 3;
