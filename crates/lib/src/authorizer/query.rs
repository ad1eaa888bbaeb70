//! Extraction of assertions delivered through a URL query string.

use url::Url;

use crate::constants::QUERY_PARAMETER;

/// The `personaAssertion` query parameter of `url`, percent-decoded.
///
/// The first occurrence wins; an empty value counts as absent.
///
/// ```
/// # use persona::assertion_from_url;
/// # use url::Url;
/// let url = Url::parse("http://app.example/cb?personaAssertion=a.b.c.d").unwrap();
/// assert_eq!(assertion_from_url(&url).as_deref(), Some("a.b.c.d"));
/// ```
pub fn assertion_from_url(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(key, _)| key == QUERY_PARAMETER)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}
