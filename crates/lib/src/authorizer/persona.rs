//! Persona implementation of [`Authorizer`].

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;
use url::Url;

use super::Authorizer;
use crate::assertion::{ExpirationPolicy, parse_assertion};
use crate::clock::Clock;
use crate::constants::{LOGIN_PARAMETER_ASSERTION, LOGIN_PATH};
use crate::registry::AssertionRegistry;

/// Logs in to sites with the Persona assertion registered for one identity.
///
/// The identity is fixed at construction. Every query re-reads the registry
/// and re-evaluates expiry, so a stale assertion starts producing `None`
/// without anything being removed, and a fresh [`AssertionRegistry::register`]
/// makes it usable again.
///
/// ## Example
///
/// ```
/// # use persona::{AssertionRegistry, Authorizer, PersonaAuthorizer};
/// # use url::Url;
/// let registry = AssertionRegistry::new();
/// let authorizer = PersonaAuthorizer::new("u@x.com", registry.clone());
///
/// let site = Url::parse("http://site.example").unwrap();
/// assert!(authorizer.uses_cookie_based_login());
/// assert_eq!(authorizer.login_path_for_site(&site), "/_persona");
/// assert_eq!(authorizer.login_parameters_for_site(&site), None);
/// ```
#[derive(Debug, Clone)]
pub struct PersonaAuthorizer {
    email: String,
    registry: AssertionRegistry,
    expiration: ExpirationPolicy,
}

impl PersonaAuthorizer {
    /// Create an authorizer for `email`, checking expiry against system time.
    pub fn new(email: impl Into<String>, registry: AssertionRegistry) -> Self {
        Self {
            email: email.into(),
            registry,
            expiration: ExpirationPolicy::default(),
        }
    }

    /// Read "now" from `clock` instead of the system time.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        let skip = self.expiration.skips_check();
        self.expiration = ExpirationPolicy::new(clock).with_skip_check(skip);
        self
    }

    /// Treat every stored assertion as unexpired when `skip` is true.
    pub fn with_skip_expiration_check(mut self, skip: bool) -> Self {
        self.expiration = self.expiration.with_skip_check(skip);
        self
    }

    /// The identity this authorizer logs in as.
    pub fn email_address(&self) -> &str {
        &self.email
    }

    /// Whether expiration checking is disabled.
    pub fn skips_expiration_check(&self) -> bool {
        self.expiration.skips_check()
    }

    /// The registry assertions are read from.
    pub fn registry(&self) -> &AssertionRegistry {
        &self.registry
    }

    /// The usable assertion for `site`, if any.
    ///
    /// Returns `None` when nothing is registered for this identity at `site`,
    /// or when the stored assertion has expired. Both cases are logged.
    pub fn assertion_for_site(&self, site: &Url) -> Option<String> {
        let Some(assertion) = self.registry.lookup(&self.email, site) else {
            warn!(email = %self.email, %site, "No Persona assertion found");
            return None;
        };

        // Only reachable for entries stored without parsing.
        let claims = match parse_assertion(&assertion) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(email = %self.email, %site, error = %e, "Stored Persona assertion is unreadable");
                return None;
            }
        };

        if self.expiration.is_expired(&claims) {
            return None;
        }
        Some(assertion)
    }
}

impl Authorizer for PersonaAuthorizer {
    fn uses_cookie_based_login(&self) -> bool {
        true
    }

    fn login_parameters_for_site(&self, site: &Url) -> Option<HashMap<String, String>> {
        let assertion = self.assertion_for_site(site)?;
        Some(HashMap::from([(
            LOGIN_PARAMETER_ASSERTION.to_string(),
            assertion,
        )]))
    }

    fn login_path_for_site(&self, _site: &Url) -> String {
        LOGIN_PATH.to_string()
    }
}
