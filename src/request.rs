//! Explicit request context.
//!
//! Matching and dispatch never read ambient process state; everything they
//! need about the inbound request travels in a [`RequestContext`] built by
//! the transport layer.

use std::collections::HashMap;

use http::Method;

/// Inbound request data consumed by the matcher and dispatcher.
#[derive(Debug, Clone)]
pub struct RequestContext {
    path: String,
    method: Method,
    query_params: HashMap<String, String>,
    body_params: HashMap<String, String>,
}

impl RequestContext {
    /// Context for a path and method. Query parameters are parsed out of
    /// the path; the query-string suffix itself is stripped again by the
    /// matcher, so passing `/users/42?page=2` is fine.
    #[must_use]
    pub fn new(path: impl Into<String>, method: Method) -> Self {
        let path = path.into();
        let query_params = parse_query_params(&path);
        Self {
            path,
            method,
            query_params,
            body_params: HashMap::new(),
        }
    }

    /// Context from optional transport inputs, applying the documented
    /// fallbacks: a missing path falls back to the `route` query parameter,
    /// then to `/`; a missing method falls back to `GET`.
    #[must_use]
    pub fn from_parts(
        path: Option<String>,
        method: Option<Method>,
        query_params: HashMap<String, String>,
        body_params: HashMap<String, String>,
    ) -> Self {
        let path = path
            .or_else(|| query_params.get("route").cloned())
            .unwrap_or_else(|| "/".to_string());
        Self {
            path,
            method: method.unwrap_or(Method::GET),
            query_params,
            body_params,
        }
    }

    /// Attach body parameters (form fields, decoded body) after the fact.
    #[must_use]
    pub fn with_body_params(mut self, body_params: HashMap<String, String>) -> Self {
        self.body_params = body_params;
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }

    #[must_use]
    pub fn body_params(&self) -> &HashMap<String, String> {
        &self.body_params
    }
}

/// Parse query string parameters from a path.
///
/// Everything after the first `?` is URL-decoded into a name/value map.
#[must_use]
pub fn parse_query_params(path: &str) -> HashMap<String, String> {
    match path.find('?') {
        Some(pos) => url::form_urlencoded::parse(path[pos + 1..].as_bytes())
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        None => HashMap::new(),
    }
}
