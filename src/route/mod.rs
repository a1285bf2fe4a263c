//! # Route Module
//!
//! Route data model and the ordered routing table.
//!
//! A [`Route`] couples a method spec, a raw pattern, a [`Target`], an
//! optional pre-dispatch [`Hook`], and an optional symbolic name. Routes are
//! immutable once registered and live for the lifetime of the table.
//!
//! The [`RouteTable`] keeps routes in registration order (the matcher scans
//! in that order, first match wins) plus a secondary index from route name
//! to raw pattern used by reverse URL generation.
//!
//! [`RouteDef`] is the builder-style definition used by batch registration
//! (`group`, `add_routes`) and by [`routes_from_json`], which loads route
//! definitions from a parsed JSON document.

mod core;

pub use core::{routes_from_json, HandlerFn, Hook, Route, RouteDef, RouteTable, Target};
