use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::RouteError;

/// Pre-dispatch hook attached to a route. Invoked with no arguments before
/// the target runs; purely a side-effecting gate, it cannot veto dispatch.
pub type Hook = Arc<dyn Fn() + Send + Sync>;

/// Directly invocable target. Receives the extracted parameters as
/// `(name, value)` pairs in capture order.
pub type HandlerFn = Arc<dyn Fn(&[(String, String)]) + Send + Sync>;

/// What a matched route resolves to.
///
/// String targets are classified at registration: anything containing a `:`
/// follows the `Controller:method` convention and goes through the injected
/// resolver at dispatch time; any other string is a literal response body
/// returned verbatim.
#[derive(Clone)]
pub enum Target {
    /// Closure invoked with the extracted parameters.
    Handler(HandlerFn),
    /// `Controller:method` convention, resolved through a
    /// [`ControllerResolver`](crate::dispatcher::ControllerResolver).
    Controller { name: String, method: String },
    /// Literal response body, emitted by the caller.
    Literal(String),
}

impl Target {
    /// Wrap a closure as a directly invocable target.
    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(&[(String, String)]) + Send + Sync + 'static,
    {
        Target::Handler(Arc::new(f))
    }
}

impl From<&str> for Target {
    fn from(s: &str) -> Self {
        match s.split_once(':') {
            Some((name, method)) => Target::Controller {
                name: name.to_string(),
                method: method.to_string(),
            },
            None => Target::Literal(s.to_string()),
        }
    }
}

impl From<String> for Target {
    fn from(s: String) -> Self {
        Target::from(s.as_str())
    }
}

impl fmt::Debug for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Handler(_) => f.write_str("Handler(..)"),
            Target::Controller { name, method } => write!(f, "Controller({name}:{method})"),
            Target::Literal(body) => write!(f, "Literal({body:?})"),
        }
    }
}

/// A registered route. Immutable once inserted into the table.
#[derive(Clone)]
pub struct Route {
    /// Method spec, e.g. `"GET"` or `"GET|POST"`. Tested against the request
    /// method per the router's [`MethodPolicy`](crate::router::MethodPolicy).
    pub methods: String,
    /// Raw pattern as registered, placeholders and all.
    pub pattern: String,
    pub target: Target,
    pub middleware: Option<Hook>,
    pub name: Option<String>,
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("methods", &self.methods)
            .field("pattern", &self.pattern)
            .field("target", &self.target)
            .field("middleware", &self.middleware.as_ref().map(|_| ".."))
            .field("name", &self.name)
            .finish()
    }
}

/// Builder-style route definition for batch registration.
pub struct RouteDef {
    pub methods: String,
    pub pattern: String,
    pub target: Target,
    pub middleware: Option<Hook>,
    pub name: Option<String>,
}

impl RouteDef {
    pub fn new(
        methods: impl Into<String>,
        pattern: impl Into<String>,
        target: impl Into<Target>,
    ) -> Self {
        Self {
            methods: methods.into(),
            pattern: pattern.into(),
            target: target.into(),
            middleware: None,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_middleware(mut self, hook: Hook) -> Self {
        self.middleware = Some(hook);
        self
    }
}

impl fmt::Debug for RouteDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDef")
            .field("methods", &self.methods)
            .field("pattern", &self.pattern)
            .field("target", &self.target)
            .field("name", &self.name)
            .finish()
    }
}

/// Ordered collection of registered routes plus the name index.
///
/// Insertion order is match-priority order. Route names are unique; a
/// duplicate name is reported to the caller while the route itself is still
/// appended, so only the name index is protected.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: Vec<Arc<Route>>,
    named: HashMap<String, String>,
}

impl RouteTable {
    pub(crate) fn insert(&mut self, route: Route) -> Result<(), RouteError> {
        let mut duplicate = None;
        if let Some(name) = &route.name {
            if self.named.contains_key(name) {
                duplicate = Some(RouteError::DuplicateRouteName { name: name.clone() });
            } else {
                self.named.insert(name.clone(), route.pattern.clone());
            }
        }
        self.routes.push(Arc::new(route));
        match duplicate {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Routes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Route>> {
        self.routes.iter()
    }

    /// Raw pattern registered under `name`, if any.
    pub fn pattern_for(&self, name: &str) -> Option<&str> {
        self.named.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Parse route definitions out of a JSON document.
///
/// The expected shape is an array of `[methods, pattern, target, name?]`
/// entries with string targets (the `Controller:method` convention or a
/// literal body). Closures obviously cannot be expressed here; register
/// those through [`Router::map`](crate::Router::map).
///
/// # Errors
///
/// A non-array document or a malformed entry yields
/// [`RouteError::InvalidRouteSource`].
pub fn routes_from_json(source: &Value) -> Result<Vec<RouteDef>, RouteError> {
    let entries = source.as_array().ok_or_else(|| {
        RouteError::InvalidRouteSource("route source must be a JSON array".to_string())
    })?;
    entries.iter().enumerate().map(parse_entry).collect()
}

fn parse_entry((index, entry): (usize, &Value)) -> Result<RouteDef, RouteError> {
    let fields = entry.as_array().ok_or_else(|| {
        RouteError::InvalidRouteSource(format!("entry {index} is not an array"))
    })?;
    let field = |pos: usize, what: &str| {
        fields
            .get(pos)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                RouteError::InvalidRouteSource(format!("entry {index} is missing {what}"))
            })
    };
    let methods = field(0, "a method spec")?;
    let pattern = field(1, "a pattern")?;
    let target = field(2, "a target")?;
    let mut def = RouteDef::new(methods, pattern, target);
    if let Some(name) = fields.get(3).and_then(Value::as_str) {
        def = def.named(name);
    }
    Ok(def)
}
