//! # Wayfinder
//!
//! **Wayfinder** is a compact URL route matcher and dispatcher: register
//! `(methods, pattern, target)` tuples, match inbound request paths against
//! them in registration order, extract typed named parameters, and invoke
//! the winning target. Named routes are reversible, so the same table that
//! matches `/users/42` also generates `/users/7` back from parameters.
//!
//! ## Architecture
//!
//! The library is organized into several key modules:
//!
//! - **[`pattern`]** - placeholder grammar and compilation of patterns into
//!   anchored regular expressions with named capture groups
//! - **[`route`]** - route data model, the ordered routing table, and the
//!   name index used for reverse generation
//! - **[`router`]** - request matching, method policy, and the registration
//!   surface (`map`, `get`, `post`, `group`, `add_routes`)
//! - **[`generator`]** - reverse URL generation from named routes
//! - **[`dispatcher`]** - target resolution and invocation, including the
//!   `Controller:method` convention behind an injected resolver
//! - **[`request`]** - the explicit [`RequestContext`] handed into matching
//!   and dispatch; no ambient request state anywhere
//!
//! ## Pattern syntax
//!
//! ```text
//! /users/[i:id]            digits, captured as `id`
//! /pages/[a:slug]          alphanumerics
//! /files/[**:path]         greedy catch-all
//! /posts.[:format]?        optional dotted suffix
//! /items[/[i:id]]?         optional group, elides with its separator
//! @^/v[0-9]+/.*$           raw regex body
//! *                        every path
//! ```
//!
//! Type tokens resolve through a user-extensible [`MatchTypes`] table;
//! unknown tokens are used verbatim, so inline fragments like
//! `[create|edit:action]` work without registering anything.
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use wayfinder::{Dispatcher, RequestContext, Router, Target};
//!
//! let mut router = Router::new();
//! router.get("/", "home sweet home", None, Some("home"));
//! router.get(
//!     "/users/[i:id]",
//!     Target::handler(|params| println!("user {}", params[0].1)),
//!     None,
//!     Some("user.show"),
//! );
//!
//! let dispatcher = Dispatcher::new();
//! let ctx = RequestContext::new("/users/42", Method::GET);
//! dispatcher.dispatch(&router, &ctx).unwrap();
//!
//! assert_eq!(router.generate("user.show", &[("id", "7")]).unwrap(), "/users/7");
//! ```
//!
//! ## Matching model
//!
//! Routes are scanned in registration order and the first match wins, so an
//! earlier loose pattern shadows a later specific one. Method specs are
//! tested by case-insensitive substring containment by default, a
//! deliberate and documented looseness; [`MethodPolicy::Exact`] switches
//! to whole-token comparison.
//!
//! ## Concurrency
//!
//! A router is built once at setup and only read afterwards. Matching,
//! generation, and dispatch all take `&self`, so a `Router` behind an
//! `Arc` is shared across threads without locking.

pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod pattern;
pub mod request;
pub mod route;
pub mod router;

pub use dispatcher::{ControllerResolver, DispatchOutcome, Dispatcher, Invokable, RequestRecord};
pub use error::{DispatchError, PatternError, RouteError};
pub use pattern::MatchTypes;
pub use request::RequestContext;
pub use route::{routes_from_json, HandlerFn, Hook, Route, RouteDef, RouteTable, Target};
pub use router::{MethodPolicy, ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
