//! # Router Module
//!
//! Path matching and route resolution.
//!
//! ## Overview
//!
//! The router owns the [`RouteTable`](crate::route::RouteTable) and exposes
//! the registration surface (`map`, `get`, `post`, `group`, `add_routes`)
//! plus matching and reverse URL generation.
//!
//! ## Matching
//!
//! Candidates are scanned in registration order and the first route whose
//! method spec and pattern both match wins. Per candidate, four tiers are
//! tried:
//!
//! 1. the `*` pattern matches every path,
//! 2. `@`-patterns are tested as anchored raw regexes,
//! 3. patterns without placeholders are compared by byte equality,
//! 4. everything else is prefix-checked up to the first `[` (cheap
//!    rejection) and only then compiled and tested.
//!
//! Because the first match terminates the scan, a looser route registered
//! earlier shadows a more specific route registered later. Registration
//! order is the precedence order; callers registering overlapping patterns
//! must order them deliberately.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::{Router, Target};
//! use http::Method;
//!
//! let mut router = Router::new();
//! router.get("/users/[i:id]", Target::handler(|params| {
//!     println!("user {}", params[0].1);
//! }), None, Some("user.show"));
//!
//! let m = router.match_path(Method::GET, "/users/42").unwrap();
//! assert_eq!(m.param("id"), Some("42"));
//! assert_eq!(router.generate("user.show", &[("id", "7")]).unwrap(), "/users/7");
//! ```

mod core;
#[cfg(test)]
mod tests;

pub use core::{MethodPolicy, ParamVec, RouteMatch, Router, MAX_INLINE_PARAMS};
