//! Region exclusion: strip disabled spans from text before scanning.

use crate::TokenError;

/// Remove every span from a `disable_token` through the next `enable_token`
/// (both tokens inclusive) from `text`, returning the retained content.
///
/// The enable token is searched at or after the disable-token start. A
/// disable token with no following enable token removes everything through
/// the end of the text. Content outside excluded spans is preserved verbatim
/// and in order, and the result contains no occurrence of `disable_token`,
/// so applying the filter to its own output is a no-op.
///
/// # Errors
///
/// Returns [`TokenError::Empty`] if either token is empty.
pub fn exclude_regions(
    text: &str,
    disable_token: &str,
    enable_token: &str,
) -> Result<String, TokenError> {
    if disable_token.is_empty() {
        return Err(TokenError::Empty("disable"));
    }
    if enable_token.is_empty() {
        return Err(TokenError::Empty("enable"));
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    loop {
        let Some(start) = rest.find(disable_token) else {
            out.push_str(rest);
            return Ok(out);
        };
        out.push_str(&rest[..start]);
        match rest[start..].find(enable_token) {
            // Unterminated region: truncate at the disable-token start.
            None => return Ok(out),
            Some(offset) => rest = &rest[start + offset + enable_token.len()..],
        }
    }
}
