//! Expiration policy for decoded claims.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use super::claims::Claims;
use crate::clock::{Clock, SystemClock};

/// Decides whether [`Claims`] are stale.
///
/// "Now" comes from the injected [`Clock`]. Expiry is a boolean signal, never
/// an error: an expired assertion is logged and reported as such.
#[derive(Debug, Clone)]
pub struct ExpirationPolicy {
    clock: Arc<dyn Clock>,
    skip_check: bool,
}

impl ExpirationPolicy {
    /// Create a policy reading time from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            skip_check: false,
        }
    }

    /// When `skip` is true every assertion is treated as unexpired.
    pub fn with_skip_check(mut self, skip: bool) -> Self {
        self.skip_check = skip;
        self
    }

    /// Whether expiration checking is disabled.
    pub fn skips_check(&self) -> bool {
        self.skip_check
    }

    /// The clock this policy reads.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Check `claims` against the clock's current time.
    pub fn is_expired(&self, claims: &Claims) -> bool {
        if self.skip_check {
            return false;
        }
        self.is_expired_at(claims, self.clock.now())
    }

    /// Check `claims` against an explicit `now`.
    ///
    /// Expired means strictly before `now`; an assertion expiring exactly at
    /// `now` is still valid. Honors the skip flag.
    pub fn is_expired_at(&self, claims: &Claims, now: DateTime<Utc>) -> bool {
        if self.skip_check || claims.expiration >= now {
            return false;
        }
        warn!(
            email = %claims.email,
            expiration = %claims.expiration,
            "Persona assertion expired"
        );
        true
    }
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}
