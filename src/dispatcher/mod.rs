//! # Dispatcher Module
//!
//! Resolution and invocation of matched targets.
//!
//! ## Overview
//!
//! The dispatcher consumes the matcher's result and is polymorphic over the
//! three target shapes:
//!
//! - [`Target::Handler`](crate::route::Target::Handler) closures are invoked
//!   with the extracted parameters in capture order;
//! - [`Target::Controller`](crate::route::Target::Controller) targets go
//!   through an injected [`ControllerResolver`], keeping the core free of
//!   any instantiation convention;
//! - [`Target::Literal`](crate::route::Target::Literal) bodies are returned
//!   as [`DispatchOutcome::Body`] for the caller to emit.
//!
//! A route's pre-dispatch hook, when present, runs before the target with no
//! arguments. It observes, it does not veto.
//!
//! ## Controller parameter binding
//!
//! Controller methods receive a single [`RequestRecord`]: the extracted path
//! parameters merged with the request's method-appropriate external source
//! (body parameters for `POST`, query parameters otherwise). External values
//! override path parameters on key collision, and the routing-internal
//! `route` key is removed before the record is handed over.
//!
//! ## Error Handling
//!
//! Every failure is a typed [`DispatchError`](crate::error::DispatchError)
//! returned to the caller: an unmatched request, an unresolvable controller,
//! or a missing controller method. Nothing here terminates the process.

mod core;

pub use core::{ControllerResolver, DispatchOutcome, Dispatcher, Invokable, RequestRecord};
