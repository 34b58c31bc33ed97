//! Parsing of `;`-separated tool input strings.

use crate::LookupError;

/// Splits `input` on `;` and returns the first two trimmed parts.
///
/// Parts beyond the second are ignored.
pub fn split_pair<'a>(
    input: &'a str,
    first: &str,
    second: &str,
) -> Result<(&'a str, &'a str), LookupError> {
    let mut parts = input.split(';').map(str::trim);
    let left = parts.next().unwrap_or_default();
    let Some(right) = parts.next() else {
        return Err(LookupError::ToolInput {
            input: input.to_string(),
            reason: format!("expected '<{first}>;<{second}>'"),
        });
    };
    Ok((left, right))
}
