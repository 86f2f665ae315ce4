//! Validators.
//!
//! These are cheap checks for handler lookups keyed by scheme: they only look
//! at the scheme and its separator, and never parse the rest of the text.

use alloc::string::String;

use crate::parser::{is_valid_scheme, scheme_prefix};

/// Returns `true` if the text starts with a valid scheme followed by a colon.
///
/// The scheme must be at least two characters long, so that Windows paths
/// such as `C:\file` are not taken for URIs. Nothing after the colon is
/// checked.
///
/// # Examples
///
/// ```
/// use uri_value::is_valid;
///
/// assert!(is_valid("fd://0"));
/// assert!(is_valid("AB:\\foo.txt"));
/// assert!(is_valid("AB:foo.txt"));
///
/// assert!(!is_valid("B:\\foo.txt"));
/// assert!(!is_valid("B://foo.txt"));
/// assert!(!is_valid("/path/only"));
/// ```
#[must_use]
pub fn is_valid(s: &str) -> bool {
    scheme_prefix(s).is_some()
}

/// Returns `true` if the string is a valid scheme (without the colon).
///
/// # Examples
///
/// ```
/// use uri_value::protocol_is_valid;
///
/// assert!(protocol_is_valid("file"));
/// assert!(protocol_is_valid("new+scheme"));
/// assert!(!protocol_is_valid("f"));
/// assert!(!protocol_is_valid("1ab"));
/// ```
#[must_use]
pub fn protocol_is_valid(scheme: &str) -> bool {
    is_valid_scheme(scheme)
}

/// Returns the lowercased scheme of the text, if the text is valid.
///
/// # Examples
///
/// ```
/// use uri_value::get_protocol;
///
/// assert_eq!(get_protocol("FILE:///foo/bar").as_deref(), Some("file"));
/// assert_eq!(get_protocol("B:/foo.txt"), None);
/// ```
#[must_use]
pub fn get_protocol(s: &str) -> Option<String> {
    scheme_prefix(s).map(str::to_ascii_lowercase)
}

/// Returns `true` if the text is valid and has the scheme, compared ASCII case-insensitively.
///
/// # Examples
///
/// ```
/// use uri_value::has_protocol;
///
/// assert!(has_protocol("FILE:///foo/bar", "file"));
/// assert!(has_protocol("file:///foo/bar", "FILE"));
/// assert!(!has_protocol("file:///foo/bar", "fil"));
/// ```
#[must_use]
pub fn has_protocol(s: &str, protocol: &str) -> bool {
    scheme_prefix(s).map_or(false, |scheme| scheme.eq_ignore_ascii_case(protocol))
}

#[cfg(test)]
mod tests;
