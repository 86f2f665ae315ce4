//! Helpers for characters.

/// Checks if the given character matches `sub-delim` rule.
#[inline]
#[must_use]
pub(crate) fn is_sub_delim(c: u8) -> bool {
    matches!(
        c,
        b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'='
    )
}

/// Checks if the given ASCII byte matches `unreserved` rule.
#[inline]
#[must_use]
pub(crate) fn is_ascii_unreserved(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'-' | b'.' | b'_' | b'~')
}

/// Checks if the given ASCII byte can be the second or later character of a scheme.
#[inline]
#[must_use]
pub(crate) fn is_ascii_scheme_continue(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'+' | b'-' | b'.')
}

/// Checks if the given ASCII byte matches `pchar` rule, excluding percent-encoded triplets.
#[inline]
#[must_use]
pub(crate) fn is_ascii_pchar(c: u8) -> bool {
    is_ascii_unreserved(c) || is_sub_delim(c) || c == b':' || c == b'@'
}

/// Checks if the given ASCII byte matches `userinfo` rule, excluding percent-encoded triplets.
#[inline]
#[must_use]
pub(crate) fn is_ascii_userinfo(c: u8) -> bool {
    is_ascii_unreserved(c) || is_sub_delim(c) || c == b':'
}

/// Checks if the given ASCII byte matches `query` or `fragment` rule,
/// excluding percent-encoded triplets.
#[inline]
#[must_use]
pub(crate) fn is_ascii_frag_query(c: u8) -> bool {
    is_ascii_pchar(c) || c == b'/' || c == b'?'
}

/// Checks if the given byte is whitespace skipped before a URI.
#[inline]
#[must_use]
pub(crate) fn is_leading_space(c: u8) -> bool {
    // `u8::is_ascii_whitespace` does not include the vertical tab.
    c.is_ascii_whitespace() || c == b'\x0b'
}
