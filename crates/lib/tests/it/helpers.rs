use std::sync::Arc;

use base64ct::{Base64UrlUnpadded, Encoding};
use persona::{AssertionRegistry, FixedClock, PersonaAuthorizer};
use url::Url;

// Helper functions for Persona testing
//
// Assertions are assembled the way a BrowserID issuer lays them out: a
// certificate and an assertion joined with `~`, each `header.payload.sig`.
// Signatures are dummies since nothing verifies them.

/// Fixed "now" used by clock-driven tests (2024-01-01 00:00:00 UTC)
pub const NOW: u64 = 1_704_067_200_000;

/// Base64url-encode a JSON value without padding.
pub fn encode_json(value: &serde_json::Value) -> String {
    Base64UrlUnpadded::encode_string(value.to_string().as_bytes())
}

/// Build an assertion for `email` scoped to `aud`, expiring at `exp` ms.
pub fn make_assertion(email: &str, aud: &str, exp: i64) -> String {
    make_assertion_with_nonce(email, aud, exp, "0")
}

/// Like [`make_assertion`] but with a distinguishing header so two assertions
/// with the same claims still differ as strings.
pub fn make_assertion_with_nonce(email: &str, aud: &str, exp: i64, nonce: &str) -> String {
    let cert_header = encode_json(&serde_json::json!({"alg": "RS256"}));
    let cert = encode_json(&serde_json::json!({
        "iss": "login.persona.org",
        "exp": exp + 3_600_000,
        "public-key": {"algorithm": "DS", "y": "abc"},
        "principal": {"email": email},
    }));
    let assertion_header = encode_json(&serde_json::json!({"alg": "DS128", "nonce": nonce}));
    let payload = encode_json(&serde_json::json!({"aud": aud, "exp": exp}));
    format!("{cert_header}.{cert}.Y2VydHNpZw~{assertion_header}.{payload}.YXNzZXJ0c2ln")
}

/// Build an assertion that expires `offset` ms from [`NOW`].
pub fn assertion_expiring_in(email: &str, aud: &str, offset: i64) -> String {
    make_assertion(email, aud, NOW as i64 + offset)
}

pub fn url(s: &str) -> Url {
    Url::parse(s).expect("test URL should parse")
}

/// Authorizer for `email` pinned to [`NOW`], plus the clock for adjustments.
pub fn pinned_authorizer(
    email: &str,
    registry: &AssertionRegistry,
) -> (PersonaAuthorizer, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(NOW));
    let authorizer = PersonaAuthorizer::new(email, registry.clone()).with_clock(clock.clone());
    (authorizer, clock)
}
