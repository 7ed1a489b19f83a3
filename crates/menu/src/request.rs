//! Current request state consulted for active-item detection.

use std::collections::HashMap;

/// Read-only view of the request being served.
///
/// Menus never mutate the request; they only compare item URLs against
/// these values.
pub trait Request {
    /// Request path without scheme or host (e.g. `/home/sub`).
    fn path_info(&self) -> &str;

    /// Full URL including the query string.
    fn full_url(&self) -> &str;

    /// URL without the query string.
    fn url(&self) -> &str;

    /// Value of a named route parameter, used to fill `{name}` placeholders
    /// in link URLs.
    fn route_param(&self, _name: &str) -> Option<&str> {
        None
    }
}

/// Request assembled from a URL string.
///
/// Accepts absolute URLs (`https://example.com/a?b=c`) as well as bare
/// paths (`/a?b=c`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StaticRequest {
    path_info: String,
    url: String,
    full_url: String,
    route_params: HashMap<String, String>,
}

impl StaticRequest {
    #[must_use]
    pub fn new(full_url: &str) -> Self {
        let without_fragment = full_url.split_once('#').map_or(full_url, |(u, _)| u);
        let url = without_fragment
            .split_once('?')
            .map_or(without_fragment, |(u, _)| u);

        Self {
            path_info: path_of(url),
            url: url.to_owned(),
            full_url: without_fragment.to_owned(),
            route_params: HashMap::new(),
        }
    }

    /// Add a route parameter.
    #[must_use]
    pub fn with_route_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_params.insert(name.into(), value.into());
        self
    }
}

impl Request for StaticRequest {
    fn path_info(&self) -> &str {
        &self.path_info
    }

    fn full_url(&self) -> &str {
        &self.full_url
    }

    fn url(&self) -> &str {
        &self.url
    }

    fn route_param(&self, name: &str) -> Option<&str> {
        self.route_params.get(name).map(String::as_str)
    }
}

/// Extract the path component of a URL without query string.
fn path_of(url: &str) -> String {
    let after_authority = if let Some((_, rest)) = url.split_once("://") {
        rest.find('/').map_or("", |pos| &rest[pos..])
    } else if let Some(rest) = url.strip_prefix("//") {
        rest.find('/').map_or("", |pos| &rest[pos..])
    } else {
        url
    };

    if after_authority.starts_with('/') {
        after_authority.to_owned()
    } else {
        format!("/{after_authority}")
    }
}
