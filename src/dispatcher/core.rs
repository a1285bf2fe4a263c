use std::sync::Arc;

use http::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error, info};

use crate::error::DispatchError;
use crate::request::RequestContext;
use crate::route::Target;
use crate::router::{RouteMatch, Router};

/// A resolved controller instance.
///
/// `call` invokes the named method with the merged request parameters. A
/// method the controller does not expose must be reported as
/// [`DispatchError::ControllerMethodNotFound`], never a panic or abort.
pub trait Invokable: Send + Sync {
    fn call(&self, method: &str, args: &RequestRecord) -> Result<(), DispatchError>;
}

/// Produces controller instances for `Controller:method` targets.
///
/// Injected into the [`Dispatcher`]; how instances come to exist (a static
/// registry, a factory, dependency injection) is the embedder's business.
pub trait ControllerResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Option<Arc<dyn Invokable>>;
}

/// Read-only record of merged request parameters handed to a controller
/// method as its single argument.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct RequestRecord {
    fields: Map<String, Value>,
}

impl RequestRecord {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

/// What a successful dispatch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A handler closure or controller method ran.
    Handled,
    /// A literal target; the body is returned for the caller to emit.
    Body(String),
}

/// Dispatcher that resolves and invokes matched targets.
#[derive(Clone, Default)]
pub struct Dispatcher {
    resolver: Option<Arc<dyn ControllerResolver>>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatcher with a controller resolver for `Controller:method` targets.
    #[must_use]
    pub fn with_resolver(resolver: Arc<dyn ControllerResolver>) -> Self {
        Self {
            resolver: Some(resolver),
        }
    }

    pub fn set_resolver(&mut self, resolver: Arc<dyn ControllerResolver>) {
        self.resolver = Some(resolver);
    }

    /// Match `ctx` against `router` and invoke the winning target.
    ///
    /// # Errors
    ///
    /// [`DispatchError::RouteNotFound`] when nothing matches; controller
    /// resolution failures per [`dispatch_match`](Dispatcher::dispatch_match).
    pub fn dispatch(
        &self,
        router: &Router,
        ctx: &RequestContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        let matched = router.match_route(ctx).ok_or(DispatchError::RouteNotFound)?;
        self.dispatch_match(&matched, ctx)
    }

    /// Invoke the target of an already-matched route.
    pub fn dispatch_match(
        &self,
        matched: &RouteMatch,
        ctx: &RequestContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        if let Some(hook) = matched.middleware() {
            debug!(pattern = %matched.route.pattern, "pre-dispatch hook");
            hook();
        }

        match matched.target() {
            Target::Handler(handler) => {
                info!(pattern = %matched.route.pattern, "dispatching handler");
                handler(&matched.params);
                Ok(DispatchOutcome::Handled)
            }
            Target::Controller { name, method } => {
                info!(
                    controller = %name,
                    method = %method,
                    pattern = %matched.route.pattern,
                    "dispatching controller"
                );
                self.call_controller(name, method, matched, ctx)
            }
            Target::Literal(body) => Ok(DispatchOutcome::Body(body.clone())),
        }
    }

    fn call_controller(
        &self,
        name: &str,
        method: &str,
        matched: &RouteMatch,
        ctx: &RequestContext,
    ) -> Result<DispatchOutcome, DispatchError> {
        let controller = self
            .resolver
            .as_ref()
            .and_then(|resolver| resolver.resolve(name))
            .ok_or_else(|| {
                error!(controller = %name, "controller could not be resolved");
                DispatchError::ControllerNotFound {
                    name: name.to_string(),
                }
            })?;

        let record = merge_request_params(matched, ctx);
        controller.call(method, &record)?;
        Ok(DispatchOutcome::Handled)
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("resolver", &self.resolver.as_ref().map(|_| ".."))
            .finish()
    }
}

/// Merge extracted path parameters with the request's external source:
/// body parameters for `POST`, query parameters otherwise. External values
/// win on collision; the routing-internal `route` key is dropped.
fn merge_request_params(matched: &RouteMatch, ctx: &RequestContext) -> RequestRecord {
    let external = if *ctx.method() == Method::POST {
        ctx.body_params()
    } else {
        ctx.query_params()
    };

    let mut fields = Map::new();
    for (key, value) in &matched.params {
        fields.insert(key.clone(), Value::String(value.clone()));
    }
    for (key, value) in external {
        fields.insert(key.clone(), Value::String(value.clone()));
    }
    fields.remove("route");
    RequestRecord { fields }
}
