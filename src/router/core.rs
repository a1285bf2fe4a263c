use std::collections::HashMap;
use std::sync::Arc;

use http::Method;
use regex::Regex;
use smallvec::SmallVec;
use tracing::{debug, info, warn};

use crate::error::RouteError;
use crate::generator;
use crate::pattern::{compile, MatchTypes};
use crate::request::RequestContext;
use crate::route::{Hook, Route, RouteDef, RouteTable, Target};

/// Maximum number of extracted parameters before heap allocation.
/// Patterns rarely carry more than a handful of placeholders.
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated parameter storage for the match path.
pub type ParamVec = SmallVec<[(String, String); MAX_INLINE_PARAMS]>;

/// How a route's method spec is tested against the request method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MethodPolicy {
    /// Case-insensitive substring containment: a spec of `"GET|POST"`
    /// matches `"post"`, but a spec of `"GETX"` also matches `"GET"`. This
    /// looseness is deliberate and is the default; switch to [`Exact`]
    /// when it is unwanted.
    ///
    /// [`Exact`]: MethodPolicy::Exact
    #[default]
    Substring,
    /// The spec is split on `|` and each token compared case-insensitively
    /// as a whole.
    Exact,
}

/// Result of successfully matching a request path to a route.
#[derive(Debug, Clone)]
pub struct RouteMatch {
    /// The matched route (shared with the table, cheap to clone).
    pub route: Arc<Route>,
    /// Named captures in capture order. Positional groups are discarded.
    pub params: ParamVec,
}

impl RouteMatch {
    /// Get an extracted parameter by name.
    #[inline]
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn target(&self) -> &Target {
        &self.route.target
    }

    #[must_use]
    pub fn middleware(&self) -> Option<&Hook> {
        self.route.middleware.as_ref()
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.route.name.as_deref()
    }

    /// Convert params to a map. This allocates; prefer [`param`] when
    /// looking up a single value.
    ///
    /// [`param`]: RouteMatch::param
    #[must_use]
    pub fn params_map(&self) -> HashMap<String, String> {
        self.params.iter().cloned().collect()
    }
}

/// Router that matches request paths against registered patterns.
///
/// Built once at application setup, then read per request. All match,
/// generate, and dispatch paths take `&self`, so a router behind an `Arc`
/// is shareable across threads without locking.
#[derive(Debug, Default)]
pub struct Router {
    table: RouteTable,
    match_types: MatchTypes,
    base_path: String,
    method_policy: MethodPolicy,
    errors: Vec<RouteError>,
}

impl Router {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base path prepended to every generated URL. Matching is unaffected.
    pub fn set_base_path(&mut self, base_path: impl Into<String>) {
        self.base_path = base_path.into();
    }

    #[must_use]
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.set_base_path(base_path);
        self
    }

    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Merge custom match types over the defaults.
    pub fn add_match_types(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        self.match_types.extend(entries);
    }

    pub fn set_method_policy(&mut self, policy: MethodPolicy) {
        self.method_policy = policy;
    }

    /// Register a route.
    ///
    /// A duplicate `name` is recorded as an error and the first
    /// name-to-pattern mapping kept; the route itself is still appended and
    /// remains reachable by matching. Registration never aborts.
    pub fn map(
        &mut self,
        methods: impl Into<String>,
        pattern: impl Into<String>,
        target: impl Into<Target>,
        middleware: Option<Hook>,
        name: Option<&str>,
    ) {
        let route = Route {
            methods: methods.into(),
            pattern: pattern.into(),
            target: target.into(),
            middleware,
            name: name.map(str::to_string),
        };
        info!(
            methods = %route.methods,
            pattern = %route.pattern,
            name = ?route.name,
            "route registered"
        );
        if let Err(err) = self.table.insert(route) {
            warn!(error = %err, "route registration recorded an error");
            self.errors.push(err);
        }
    }

    /// Sugar for `map("GET", ...)`.
    pub fn get(
        &mut self,
        pattern: impl Into<String>,
        target: impl Into<Target>,
        middleware: Option<Hook>,
        name: Option<&str>,
    ) {
        self.map("GET", pattern, target, middleware, name);
    }

    /// Sugar for `map("POST", ...)`.
    pub fn post(
        &mut self,
        pattern: impl Into<String>,
        target: impl Into<Target>,
        middleware: Option<Hook>,
        name: Option<&str>,
    ) {
        self.map("POST", pattern, target, middleware, name);
    }

    /// Register a batch of routes under a literal prefix with a shared
    /// pre-dispatch hook. A member's own hook, if set, takes precedence
    /// over the shared one.
    pub fn group(&mut self, prefix: &str, routes: Vec<RouteDef>, middleware: Option<Hook>) {
        for def in routes {
            let hook = def.middleware.or_else(|| middleware.clone());
            self.map(
                def.methods,
                format!("{prefix}{}", def.pattern),
                def.target,
                hook,
                def.name.as_deref(),
            );
        }
    }

    /// Register a batch of route definitions as-is.
    pub fn add_routes(&mut self, routes: impl IntoIterator<Item = RouteDef>) {
        for def in routes {
            self.map(
                def.methods,
                def.pattern,
                def.target,
                def.middleware,
                def.name.as_deref(),
            );
        }
    }

    /// Errors recorded during registration, in occurrence order.
    #[must_use]
    pub fn errors(&self) -> &[RouteError] {
        &self.errors
    }

    /// Drain the recorded errors.
    pub fn take_errors(&mut self) -> Vec<RouteError> {
        std::mem::take(&mut self.errors)
    }

    /// Render the recorded errors as simple text, one per line.
    #[must_use]
    pub fn display_errors(&self) -> String {
        let mut out = String::new();
        for err in &self.errors {
            out.push_str("[error] ");
            out.push_str(&err.to_string());
            out.push('\n');
        }
        out
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Print all registered routes to stdout. Useful for verifying that
    /// routes are loaded correctly.
    pub fn dump_routes(&self) {
        println!(
            "[routes] base_path={} count={}",
            self.base_path,
            self.table.len()
        );
        for route in self.table.iter() {
            println!(
                "[route] {} {} -> {:?} name={:?}",
                route.methods, route.pattern, route.target, route.name
            );
        }
    }

    /// Match a request context against the table.
    ///
    /// Any query-string suffix on the path is stripped before matching.
    #[must_use]
    pub fn match_route(&self, ctx: &RequestContext) -> Option<RouteMatch> {
        self.match_inner(ctx.method().as_str(), ctx.path())
    }

    /// Match a bare method and path without building a context.
    #[must_use]
    pub fn match_path(&self, method: Method, path: &str) -> Option<RouteMatch> {
        self.match_inner(method.as_str(), path)
    }

    fn match_inner(&self, method: &str, path: &str) -> Option<RouteMatch> {
        let path = strip_query(path);
        debug!(method = %method, path = %path, "route match attempt");

        for route in self.table.iter() {
            if !self.method_allows(&route.methods, method) {
                continue;
            }
            let pattern = route.pattern.as_str();
            let params = if pattern == "*" {
                Some(ParamVec::new())
            } else if let Some(body) = pattern.strip_prefix('@') {
                self.match_raw(pattern, body, path)
            } else if let Some(open) = pattern.find('[') {
                self.match_compiled(pattern, open, path)
            } else {
                (pattern == path).then(ParamVec::new)
            };

            if let Some(params) = params {
                info!(
                    method = %method,
                    path = %path,
                    pattern = %route.pattern,
                    params = ?params,
                    "route matched"
                );
                return Some(RouteMatch {
                    route: Arc::clone(route),
                    params,
                });
            }
        }

        warn!(method = %method, path = %path, "no route matched");
        None
    }

    fn method_allows(&self, spec: &str, method: &str) -> bool {
        match self.method_policy {
            MethodPolicy::Substring => spec
                .to_ascii_lowercase()
                .contains(&method.to_ascii_lowercase()),
            MethodPolicy::Exact => spec
                .split('|')
                .any(|token| token.trim().eq_ignore_ascii_case(method)),
        }
    }

    fn match_raw(&self, pattern: &str, body: &str, path: &str) -> Option<ParamVec> {
        let regex = match Regex::new(&format!("^(?:{body})$")) {
            Ok(regex) => regex,
            Err(err) => {
                warn!(pattern = %pattern, error = %err, "invalid raw regex route skipped");
                return None;
            }
        };
        captures(&regex, path)
    }

    fn match_compiled(&self, pattern: &str, open: usize, path: &str) -> Option<ParamVec> {
        // Cheap rejection: the pattern up to the first placeholder is
        // literal, so a prefix mismatch rules the candidate out without
        // touching the regex engine.
        if !path.as_bytes().starts_with(&pattern.as_bytes()[..open]) {
            return None;
        }
        let regex = match compile(pattern, &self.match_types) {
            Ok(regex) => regex,
            Err(err) => {
                warn!(pattern = %pattern, error = %err, "uncompilable route skipped");
                return None;
            }
        };
        captures(&regex, path)
    }

    /// Generate a concrete URL for a named route.
    ///
    /// # Errors
    ///
    /// [`RouteError::RouteNotFound`] when `name` was never registered.
    pub fn generate(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        generator::generate(&self.table, &self.base_path, name, params)
    }
}

fn strip_query(path: &str) -> &str {
    match path.find('?') {
        Some(pos) => &path[..pos],
        None => path,
    }
}

fn captures(regex: &Regex, path: &str) -> Option<ParamVec> {
    let caps = regex.captures(path)?;
    let mut params = ParamVec::new();
    for name in regex.capture_names().flatten() {
        if let Some(m) = caps.name(name) {
            params.push((name.to_string(), m.as_str().to_string()));
        }
    }
    Some(params)
}
