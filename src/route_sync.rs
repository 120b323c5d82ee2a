/// Parent-URL route synchronization logic for the embedded plugin
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Query parameter on the parent URL that carries the in-app route
pub const DEFAULT_QUERY_PARAM_KEY: &str = "pluginRoute";

/// Route used when the parent URL carries no route information
pub const DEFAULT_ROUTE: &str = "/";

/// Where the in-app route is carried on the parent URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyncMode {
    Hash,
    Query,
}

/// Sync configuration, supplied once at mount
///
/// `query_param_key` is only consulted in query mode. Accepts the host's
/// JS-side options object (`{ mode: "hash" | "query", queryParamKey?: string }`)
/// through serde, with missing fields filled from the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SyncOptions {
    pub mode: SyncMode,
    pub query_param_key: String,
}

impl SyncOptions {
    pub fn hash() -> Self {
        SyncOptions {
            mode: SyncMode::Hash,
            query_param_key: DEFAULT_QUERY_PARAM_KEY.to_string(),
        }
    }

    pub fn query(key: &str) -> Self {
        SyncOptions {
            mode: SyncMode::Query,
            query_param_key: key.to_string(),
        }
    }
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self::hash()
    }
}

/// Failure to read or mutate the parent page's URL
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("parent frame denied access: {0}")]
    ParentAccess(String),
    #[error("malformed parent URL: {0}")]
    MalformedUrl(String),
}

/// Narrow view of the hosting frame, so the sync logic can run against a
/// fake in tests instead of real browser globals
pub trait ParentFrame {
    /// Whether this window is embedded under a distinct parent window
    fn is_embedded(&self) -> bool;

    /// The parent page's current URL. `None` when the plugin is not
    /// embedded or the parent denies access (cross-origin).
    fn read_parent_url(&self) -> Option<String>;

    /// Replace the parent page's URL in its current history entry
    /// (no new entry, no reload).
    fn write_parent_url(&self, url: &str) -> Result<(), SyncError>;
}

/// Compute the plugin's starting route from the parent page's URL
///
/// - Query mode: decoded value of `query_param_key` from the parent URL's
///   query string (`?pluginRoute=%2Fpage1` -> `/page1`)
/// - Hash mode: the parent URL's fragment with the leading `#` stripped
///   (`#/page1?x=1` -> `/page1?x=1`)
///
/// Never fails: an absent parent, denied access, a malformed parent URL,
/// or a missing/empty route all yield [`DEFAULT_ROUTE`]. Call this once,
/// before constructing the router's history.
pub fn derive_initial_route(parent: &dyn ParentFrame, options: &SyncOptions) -> String {
    let Some(href) = parent.read_parent_url() else {
        return DEFAULT_ROUTE.to_string();
    };

    let url = match Url::parse(&href) {
        Ok(url) => url,
        Err(e) => {
            log::debug!("unparseable parent URL {href:?}: {e}");
            return DEFAULT_ROUTE.to_string();
        }
    };

    route_from_url(&url, options).unwrap_or_else(|| DEFAULT_ROUTE.to_string())
}

/// Propagate the current in-app route into the parent page's URL
///
/// No-op when the plugin is not embedded. In hash mode the parent URL's
/// fragment becomes the route string; in query mode the `query_param_key`
/// parameter is set to the URL-encoded route and every other part of the
/// parent URL is left untouched. Idempotent.
///
/// Errors are reported to the caller rather than logged here, so the
/// binding layer decides how failures surface. A failed sync never affects
/// the in-app navigation that triggered it.
pub fn sync_route_to_parent(
    parent: &dyn ParentFrame,
    route: &str,
    options: &SyncOptions,
) -> Result<(), SyncError> {
    if !parent.is_embedded() {
        return Ok(());
    }

    let href = parent
        .read_parent_url()
        .ok_or_else(|| SyncError::ParentAccess("parent location is unreadable".to_string()))?;

    let updated = url_with_route(&href, route, options)?;
    parent.write_parent_url(&updated)
}

/// Extract the route carried by a parent URL, if any
fn route_from_url(url: &Url, options: &SyncOptions) -> Option<String> {
    match options.mode {
        SyncMode::Query => url
            .query_pairs()
            .find(|(key, _)| key == options.query_param_key.as_str())
            .map(|(_, value)| value.into_owned())
            .filter(|route| !route.is_empty()),
        SyncMode::Hash => url
            .fragment()
            .filter(|fragment| !fragment.is_empty())
            .map(str::to_string),
    }
}

/// Compute the parent URL with the route slot replaced
fn url_with_route(href: &str, route: &str, options: &SyncOptions) -> Result<String, SyncError> {
    let mut url = Url::parse(href).map_err(|e| SyncError::MalformedUrl(e.to_string()))?;

    match options.mode {
        SyncMode::Hash => {
            url.set_fragment(Some(route));
        }
        SyncMode::Query => {
            // Keep unrelated parameters, replace only our key
            let kept: Vec<(String, String)> = url
                .query_pairs()
                .filter(|(key, _)| key != options.query_param_key.as_str())
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect();

            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(kept.iter().map(|(k, v)| (k.as_str(), v.as_str())));
            pairs.append_pair(&options.query_param_key, route);
        }
    }

    Ok(url.to_string())
}
