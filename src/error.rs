//! Typed error taxonomy for registration, generation, and dispatch.

use thiserror::Error;

/// Errors raised while registering routes or generating URLs.
///
/// Registration-time errors are recorded on the [`Router`](crate::Router)
/// rather than aborting registration; generation errors are returned to the
/// caller directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// A second route was registered under an already-taken name. The first
    /// name-to-pattern mapping is kept.
    #[error("can not redeclare route '{name}'")]
    DuplicateRouteName { name: String },

    /// URL generation was asked for a name that was never registered.
    #[error("route '{name}' does not exist")]
    RouteNotFound { name: String },

    /// A bulk route source could not be interpreted as route definitions.
    #[error("invalid route source: {0}")]
    InvalidRouteSource(String),
}

/// A route pattern that produced an invalid regular expression.
///
/// Unknown type tokens are spliced into the expression verbatim, so a typo
/// like `[i:id` or a malformed inline class surfaces here. The matcher logs
/// and skips such candidates instead of failing the whole scan.
#[derive(Debug, Error)]
#[error("pattern `{pattern}` compiled to an invalid expression")]
pub struct PatternError {
    pub pattern: String,
    #[source]
    pub source: regex::Error,
}

/// Errors returned from [`Dispatcher::dispatch`](crate::Dispatcher::dispatch).
///
/// Controller resolution failures are surfaced as values so the caller
/// decides whether to terminate, emit a 404/500, or fall back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// No registered route matched the request path and method.
    #[error("route not found")]
    RouteNotFound,

    /// The `Controller:method` target named a controller the resolver could
    /// not produce (or no resolver was configured).
    #[error("controller '{name}' could not be resolved")]
    ControllerNotFound { name: String },

    /// The resolved controller does not expose the named method.
    #[error("controller '{controller}' has no method '{method}'")]
    ControllerMethodNotFound { controller: String, method: String },
}
