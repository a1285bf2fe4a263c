//! # Generator Module
//!
//! Reverse URL generation: reconstruct a concrete URL from a named route's
//! raw pattern and a set of parameter values.
//!
//! Generation walks the same placeholder tokens the compiler sees, splicing
//! by byte span. Supplied values replace their placeholder block; optional
//! tokens without a value are elided together with their separator, except
//! for the very first token in a pattern, whose separator survives elision.
//! Optional bracketed groups (`[/[i:id]]?`) disappear entirely when elided.
//!
//! Values are substituted as given. No URL escaping or encoding is applied;
//! supplying URL-safe values is the caller's contract.

mod core;

pub use core::generate;
