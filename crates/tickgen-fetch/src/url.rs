//! Kasplex URL construction.

use reqwest::Url;

use crate::FetchError;

/// Base URL of the public Kasplex API.
pub const BASE_URL: &str = "https://api.kasplex.org";

/// Path of the KRC-20 token list, relative to the base URL.
pub const TOKENLIST_PATH: &str = "/v1/krc20/tokenlist";

/// Builds the token list endpoint for a base URL.
///
/// A trailing slash on `base` is ignored.
///
/// # Example
///
/// ```
/// use tickgen_fetch::url::tokenlist_endpoint;
///
/// let url = tokenlist_endpoint("https://api.kasplex.org/");
/// assert_eq!(url, "https://api.kasplex.org/v1/krc20/tokenlist");
/// ```
#[must_use]
pub fn tokenlist_endpoint(base: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), TOKENLIST_PATH)
}

/// Builds the URL for one token list page.
///
/// URL format: `{base}/v1/krc20/tokenlist[?next={cursor}]`
///
/// The cursor is percent-encoded. An empty cursor is treated as absent.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] if `base` is not an absolute URL.
pub fn tokenlist_url(base: &str, cursor: Option<&str>) -> Result<Url, FetchError> {
    let endpoint = tokenlist_endpoint(base);
    let url = match cursor.filter(|c| !c.is_empty()) {
        Some(next) => Url::parse_with_params(&endpoint, &[("next", next)]),
        None => Url::parse(&endpoint),
    };
    url.map_err(|e| FetchError::InvalidUrl(format!("{endpoint}: {e}")))
}
