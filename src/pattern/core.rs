use std::collections::HashMap;
use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::PatternError;

/// Scanner for placeholder tokens.
///
/// Two shapes are recognized: a flat token `sep [ type : name ] ?` and a
/// one-level bracketed group `sep [ sep [ type : name ] ] ?`. Separators are
/// `/` or `.` and every piece except the brackets is optional.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(/|\.|)\[(?:(/|\.|)\[([^:\[\]]*)(?::([^:\[\]]*))?\]\]|([^:\[\]]*)(?::([^:\[\]]*))?\])(\?|)",
    )
    .expect("token grammar regex is valid")
});

/// One placeholder occurrence inside a route pattern.
///
/// `span` covers the whole token including its leading separator, so callers
/// can splice replacements positionally instead of searching for the token
/// text again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'p> {
    pub span: Range<usize>,
    /// Separator in front of the brackets (`""` when none).
    pub separator: &'p str,
    /// Separator inside a bracketed group; `None` for flat tokens.
    pub inner_separator: Option<&'p str>,
    /// Raw type token, resolved through [`MatchTypes`] at compile time.
    pub type_token: &'p str,
    /// Parameter name (`""` for unnamed placeholders like `[i]`).
    pub name: &'p str,
    pub optional: bool,
}

/// Find every placeholder token in `pattern`, left to right.
pub(crate) fn scan(pattern: &str) -> Vec<Token<'_>> {
    TOKEN_RE
        .captures_iter(pattern)
        .map(|caps| {
            let whole = caps.get(0).expect("group 0 always participates");
            let grouped = caps.get(2).is_some() && caps.get(3).is_some();
            let (inner_separator, type_token, name) = if grouped {
                (
                    Some(caps.get(2).map_or("", |m| m.as_str())),
                    caps.get(3).map_or("", |m| m.as_str()),
                    caps.get(4).map_or("", |m| m.as_str()),
                )
            } else {
                (
                    None,
                    caps.get(5).map_or("", |m| m.as_str()),
                    caps.get(6).map_or("", |m| m.as_str()),
                )
            };
            Token {
                span: whole.range(),
                separator: caps.get(1).map_or("", |m| m.as_str()),
                inner_separator,
                type_token,
                name,
                optional: caps.get(7).is_some_and(|m| !m.as_str().is_empty()),
            }
        })
        .collect()
}

/// Table of short type tokens and the regex fragments they stand for.
///
/// The defaults cover the common cases; entries added later override them.
///
/// | token | fragment       |
/// |-------|----------------|
/// | `i`   | `[0-9]+`       |
/// | `a`   | `[0-9A-Za-z]+` |
/// | `h`   | `[0-9A-Fa-f]+` |
/// | `*`   | `.+?`          |
/// | `**`  | `.+`           |
/// | (none)| `[^/\.]+`      |
#[derive(Debug, Clone)]
pub struct MatchTypes {
    table: HashMap<String, String>,
}

impl Default for MatchTypes {
    fn default() -> Self {
        let table = [
            ("i", "[0-9]+"),
            ("a", "[0-9A-Za-z]+"),
            ("h", "[0-9A-Fa-f]+"),
            ("*", ".+?"),
            ("**", ".+"),
            ("", r"[^/\.]+"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        Self { table }
    }
}

impl MatchTypes {
    /// Merge custom entries over the defaults.
    pub fn extend(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
        self.table.extend(entries);
    }

    /// Resolve a type token to its regex fragment. Unknown tokens are
    /// returned unchanged and end up in the expression verbatim.
    pub fn resolve<'a>(&'a self, token: &'a str) -> &'a str {
        self.table.get(token).map_or(token, String::as_str)
    }
}

/// Compile a route pattern into an anchored, case-sensitive regex.
///
/// Literal text between tokens is carried into the expression verbatim; only
/// a literal-dot separator is escaped. Flat optional tokens compile to the
/// double-optional form `(?:sep(...)?)?` so the separator may be present
/// without the value; bracketed groups compile to a single optional group
/// that swallows the inner separator along with the value.
pub(crate) fn compile(pattern: &str, match_types: &MatchTypes) -> Result<Regex, PatternError> {
    let mut expr = String::with_capacity(pattern.len() + 16);
    expr.push('^');
    let mut last = 0;
    for token in scan(pattern) {
        expr.push_str(&pattern[last..token.span.start]);
        push_replacement(&mut expr, &token, match_types);
        last = token.span.end;
    }
    expr.push_str(&pattern[last..]);
    expr.push('$');

    Regex::new(&expr).map_err(|source| PatternError {
        pattern: pattern.to_string(),
        source,
    })
}

fn push_replacement(expr: &mut String, token: &Token<'_>, match_types: &MatchTypes) {
    let fragment = match_types.resolve(token.type_token);
    expr.push_str("(?:");
    push_separator(expr, token.separator);
    match token.inner_separator {
        Some(inner) => {
            push_separator(expr, inner);
            push_group(expr, token.name, fragment);
            expr.push(')');
            if token.optional {
                expr.push('?');
            }
        }
        None => {
            push_group(expr, token.name, fragment);
            if token.optional {
                expr.push('?');
            }
            expr.push(')');
            if token.optional {
                expr.push('?');
            }
        }
    }
}

fn push_separator(expr: &mut String, separator: &str) {
    // Dots are regex metacharacters but always literal in paths.
    if separator == "." {
        expr.push_str(r"\.");
    } else {
        expr.push_str(separator);
    }
}

fn push_group(expr: &mut String, name: &str, fragment: &str) {
    expr.push('(');
    if !name.is_empty() {
        expr.push_str("?P<");
        expr.push_str(name);
        expr.push('>');
    }
    expr.push_str(fragment);
    expr.push(')');
}
