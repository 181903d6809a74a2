//! Placeholder substitution for URL and description templates.
//!
//! Templates use single-character `%` specifiers: `%n` is the repository
//! identifier captured from a remote URL, `%r` a revision, and description
//! templates use `%N`/`%R`. A literal `%%` yields `%`. Nothing else is
//! escaped, and a specifier without a binding is an error rather than being
//! passed through, so a typo in a configured template never leaks into an
//! exported document.

use crate::core::error::{OrgitError, Result};

/// Substitute every `%c` in `template` with the value bound to `c`.
///
/// # Errors
/// Returns [`OrgitError::MalformedTemplate`] when the template references a
/// specifier that is not in `bindings`, or ends in a lone `%`.
pub fn substitute(template: &str, bindings: &[(char, &str)]) -> Result<String> {
    let estimated_capacity = template.len() + bindings.iter().map(|(_, v)| v.len()).sum::<usize>();
    let mut output = String::with_capacity(estimated_capacity);
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            output.push(ch);
            continue;
        }

        match chars.next() {
            Some('%') => output.push('%'),
            Some(specifier) => {
                let value = bindings
                    .iter()
                    .find(|(key, _)| *key == specifier)
                    .map(|(_, value)| *value)
                    .ok_or_else(|| {
                        OrgitError::malformed_template(template, specifier.to_string())
                    })?;
                output.push_str(value);
            }
            None => return Err(OrgitError::malformed_template(template, "")),
        }
    }

    Ok(output)
}
