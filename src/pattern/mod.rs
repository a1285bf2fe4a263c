//! # Pattern Module
//!
//! Compilation of route patterns into anchored regular expressions.
//!
//! ## Overview
//!
//! Route patterns carry typed placeholders in a compact bracket syntax:
//!
//! ```text
//! /users/[i:id]           integer parameter named `id`
//! /pages/[a:slug]         alphanumeric parameter
//! /files/[**:path]        greedy catch-all
//! /posts/[i:id]?          optional trailing segment
//! /items[/[i:id]]?        optional bracketed group (separator elides with it)
//! @^/v[0-9]+/.*$          raw regex body, used as-is
//! *                       matches every path
//! ```
//!
//! Each placeholder is resolved through a [`MatchTypes`] table mapping short
//! type tokens to regex fragments. Tokens the table does not know are spliced
//! into the expression verbatim, which allows inline classes like
//! `[create|edit:action]`.
//!
//! Compilation replaces each token by byte span, so literal text that happens
//! to repeat a token's spelling elsewhere in the pattern is never touched.

mod core;

pub use core::MatchTypes;
pub(crate) use core::{compile, scan};
