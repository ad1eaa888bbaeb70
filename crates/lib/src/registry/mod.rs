//! Shared store of the latest assertion per identity and origin.
//!
//! The registry is an explicit object: whoever builds the authentication layer
//! creates one and hands clones of the handle to every authorizer. Entries
//! live as long as the registry, are overwritten by newer registrations, and
//! are never evicted. Expiry is evaluated by readers, not here.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use handle_trait::Handle;
use tracing::{debug, warn};
use url::Url;

use crate::Result;
use crate::assertion::{normalize_origin, normalize_url, parse_assertion};

/// Registry key: an email together with a normalized origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryKey {
    email: String,
    origin: String,
}

impl RegistryKey {
    fn new(email: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            origin: origin.into(),
        }
    }

    /// The identity part of the key.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The normalized origin part of the key.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

type AssertionMap = HashMap<RegistryKey, String>;

/// Internal state for AssertionRegistry
#[derive(Debug, Default)]
struct RegistryInternal {
    /// Raw assertion strings; claims are re-derived on every read
    assertions: RwLock<AssertionMap>,
}

/// Store mapping `(email, origin)` to the most recently registered assertion.
///
/// AssertionRegistry is a cheap-to-clone handle around shared state. All
/// clones see the same entries.
///
/// Registrations are mutually exclusive: each one holds the write lock for its
/// whole parse, normalize and insert sequence. Lookups share the read lock
/// and never observe a partial write.
///
/// ## Example
///
/// ```
/// # use persona::AssertionRegistry;
/// # use url::Url;
/// let registry = AssertionRegistry::new();
/// assert!(registry.is_empty());
///
/// let site = Url::parse("http://site.example").unwrap();
/// assert_eq!(registry.lookup("u@x.com", &site), None);
/// ```
#[derive(Clone, Debug, Default, Handle)]
pub struct AssertionRegistry {
    inner: Arc<RegistryInternal>,
}

impl AssertionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `assertion` and store it under its own email and audience.
    ///
    /// Replaces any assertion previously stored for the same key. Returns the
    /// asserted email.
    ///
    /// # Errors
    ///
    /// Fails if the assertion cannot be parsed or its audience is not an
    /// absolute URL. Nothing is stored in that case.
    pub fn register(&self, assertion: &str) -> Result<String> {
        let mut assertions = self.write();

        let claims = parse_assertion(assertion).inspect_err(|e| {
            warn!(error = %e, "Rejected Persona assertion");
        })?;
        let origin = normalize_origin(&claims.origin).inspect_err(|e| {
            warn!(email = %claims.email, error = %e, "Rejected Persona assertion origin");
        })?;

        Ok(Self::insert(
            &mut assertions,
            RegistryKey::new(claims.email, origin),
            assertion,
        ))
    }

    /// Store `assertion` under a caller-supplied email and origin.
    ///
    /// The assertion itself is not parsed. The origin is still normalized and
    /// the same write lock is taken as in [`register`](Self::register).
    #[cfg(any(test, feature = "testing"))]
    pub fn register_with_identity(
        &self,
        assertion: &str,
        email: &str,
        origin: &str,
    ) -> Result<String> {
        let mut assertions = self.write();
        let origin = normalize_origin(origin)?;
        Ok(Self::insert(
            &mut assertions,
            RegistryKey::new(email, origin),
            assertion,
        ))
    }

    /// Find the assertion stored for `email` at `site`.
    ///
    /// `site` goes through the same normalization as registered origins.
    pub fn lookup(&self, email: &str, site: &Url) -> Option<String> {
        let key = RegistryKey::new(email, normalize_url(site));
        debug!(email = %key.email, origin = %key.origin, "Looking up Persona assertion");
        self.inner
            .assertions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Number of stored assertions.
    pub fn len(&self) -> usize {
        self.inner
            .assertions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether no assertion has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Poisoning is ignored: entries are independent strings.
    fn write(&self) -> RwLockWriteGuard<'_, AssertionMap> {
        self.inner
            .assertions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn insert(assertions: &mut AssertionMap, key: RegistryKey, assertion: &str) -> String {
        debug!(email = %key.email, origin = %key.origin, "Registering Persona assertion");
        let email = key.email.clone();
        assertions.insert(key, assertion.to_string());
        email
    }
}
