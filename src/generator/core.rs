use tracing::debug;

use crate::error::RouteError;
use crate::pattern::scan;
use crate::route::RouteTable;

/// Build the URL for the route registered under `name`, substituting
/// `params` into its placeholders and prepending `base_path`.
///
/// # Errors
///
/// [`RouteError::RouteNotFound`] when no route carries `name`.
pub fn generate(
    table: &RouteTable,
    base_path: &str,
    name: &str,
    params: &[(&str, &str)],
) -> Result<String, RouteError> {
    let pattern = table.pattern_for(name).ok_or_else(|| RouteError::RouteNotFound {
        name: name.to_string(),
    })?;

    let mut url = String::with_capacity(base_path.len() + pattern.len());
    url.push_str(base_path);

    let mut last = 0;
    for (index, token) in scan(pattern).iter().enumerate() {
        let value = params
            .iter()
            .find(|(key, _)| *key == token.name)
            .map(|(_, value)| *value);
        let keep_separator = token.span.start + token.separator.len();

        match (value, token.inner_separator) {
            // Bracketed group with a value: the group collapses to its
            // inner separator plus the value.
            (Some(value), Some(inner)) => {
                url.push_str(&pattern[last..keep_separator]);
                url.push_str(inner);
                url.push_str(value);
            }
            (Some(value), None) => {
                url.push_str(&pattern[last..keep_separator]);
                url.push_str(value);
            }
            // An elided bracketed group leaves no separator residue.
            (None, Some(_)) if token.optional => {
                url.push_str(&pattern[last..token.span.start]);
            }
            // A flat optional token drops its separator too, unless it is
            // the first token in the pattern.
            (None, None) if token.optional && index != 0 => {
                url.push_str(&pattern[last..token.span.start]);
            }
            // Required (or optional-but-first): the separator stays, only
            // the block disappears.
            (None, _) => {
                url.push_str(&pattern[last..keep_separator]);
            }
        }
        last = token.span.end;
    }
    url.push_str(&pattern[last..]);

    debug!(name = %name, url = %url, "url generated");
    Ok(url)
}
