//! Authorizers for logging in to remote sites
//!
//! An [`Authorizer`] is the capability an HTTP login layer consults before
//! contacting a site: whether the login yields a session cookie, which
//! endpoint to post to, and which parameters to post. [`PersonaAuthorizer`]
//! answers these from an [`AssertionRegistry`](crate::AssertionRegistry).

pub mod persona;
pub mod query;

pub use persona::PersonaAuthorizer;
pub use query::assertion_from_url;

use std::collections::HashMap;
use std::fmt::Debug;

use url::Url;

/// Credentials provider for a login exchange with a remote site.
///
/// Implementations must be cheap to query: no method may perform I/O.
pub trait Authorizer: Send + Sync + Debug {
    /// Whether a successful login establishes a session cookie rather than a
    /// per-request token.
    fn uses_cookie_based_login(&self) -> bool;

    /// Parameters to post to [`login_path_for_site`](Self::login_path_for_site).
    ///
    /// `None` means no usable credential exists for `site` and the login
    /// cannot proceed through this authorizer.
    fn login_parameters_for_site(&self, site: &Url) -> Option<HashMap<String, String>>;

    /// Server path the login parameters are posted to.
    fn login_path_for_site(&self, site: &Url) -> String;
}
