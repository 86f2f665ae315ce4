//! Percent encoding and decoding.
//!
//! Encoding is triplet-preserving: a well-formed `%XX` in the input is
//! written as is, so encoding an already encoded component is a no-op.
//! A `%` that does not start a triplet is encoded as `%25`.
//!
//! Decoding is lenient: malformed triplets are passed through literally.

use core::fmt::{self, Write as _};

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use crate::parser::char;
use crate::parser::str::{find, find_split_hole, take_xdigits2};

/// Context for percent encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Context {
    /// Encode the string as a userinfo.
    Userinfo,
    /// Encode the string as a path segment.
    ///
    /// A slash (`/`) will be encoded to `%2F`.
    PathSegment,
    /// Encode the string as path segments joined with `/`.
    ///
    /// A slash (`/`) will be used as is.
    Path,
    /// Encode the string as a query key.
    ///
    /// `&` and `=` will be encoded.
    QueryKey,
    /// Encode the string as a query value.
    ///
    /// `&` will be encoded.
    QueryValue,
    /// Encode the string as a fragment string (without the `#` prefix).
    Fragment,
}

impl Context {
    /// Returns `true` if the ASCII byte can be written without encoding.
    #[must_use]
    pub(crate) fn is_allowed(self, b: u8) -> bool {
        match self {
            Self::Userinfo => char::is_ascii_userinfo(b),
            Self::PathSegment => char::is_ascii_pchar(b),
            Self::Path => b == b'/' || char::is_ascii_pchar(b),
            Self::QueryKey => char::is_ascii_frag_query(b) && b != b'&' && b != b'=',
            Self::QueryValue => char::is_ascii_frag_query(b) && b != b'&',
            Self::Fragment => char::is_ascii_frag_query(b),
        }
    }
}

/// A proxy to percent-encode a string.
///
/// Characters allowed in the component are written as is, and well-formed
/// percent-encoded triplets are kept. Every other byte is written as an
/// upper-case `%XX` triplet.
#[derive(Debug, Clone, Copy)]
pub struct PercentEncoded<'a> {
    /// Source string context.
    context: Context,
    /// Raw string before being encoded.
    raw: &'a str,
}

impl<'a> PercentEncoded<'a> {
    /// Creates an encoded string from a raw userinfo.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::percent_encode::PercentEncoded;
    ///
    /// assert_eq!(
    ///     PercentEncoded::from_userinfo("user name:p@ss").to_string(),
    ///     "user%20name:p%40ss"
    /// );
    /// ```
    #[must_use]
    pub fn from_userinfo(raw: &'a str) -> Self {
        Self {
            context: Context::Userinfo,
            raw,
        }
    }

    /// Creates an encoded string from a raw path segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::percent_encode::PercentEncoded;
    ///
    /// let raw = "alpha/\u{03B1}?#";
    /// // Note that `/` is encoded to `%2F`.
    /// let encoded = "alpha%2F%CE%B1%3F%23";
    /// assert_eq!(PercentEncoded::from_path_segment(raw).to_string(), encoded);
    /// ```
    #[must_use]
    pub fn from_path_segment(raw: &'a str) -> Self {
        Self {
            context: Context::PathSegment,
            raw,
        }
    }

    /// Creates an encoded string from a raw path.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::percent_encode::PercentEncoded;
    ///
    /// let raw = "my music/some%20file";
    /// // Note that `/` and the existing triplet are kept.
    /// let encoded = "my%20music/some%20file";
    /// assert_eq!(PercentEncoded::from_path(raw).to_string(), encoded);
    /// ```
    #[must_use]
    pub fn from_path(raw: &'a str) -> Self {
        Self {
            context: Context::Path,
            raw,
        }
    }

    /// Creates an encoded string from a raw query key.
    #[must_use]
    pub fn from_query_key(raw: &'a str) -> Self {
        Self {
            context: Context::QueryKey,
            raw,
        }
    }

    /// Creates an encoded string from a raw query value.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::percent_encode::PercentEncoded;
    ///
    /// assert_eq!(PercentEncoded::from_query_key("a=b&c").to_string(), "a%3Db%26c");
    /// assert_eq!(PercentEncoded::from_query_value("a=b&c").to_string(), "a=b%26c");
    /// ```
    #[must_use]
    pub fn from_query_value(raw: &'a str) -> Self {
        Self {
            context: Context::QueryValue,
            raw,
        }
    }

    /// Creates an encoded string from a raw fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::percent_encode::PercentEncoded;
    ///
    /// let raw = "alpha/\u{03B1}?#";
    /// let encoded = "alpha/%CE%B1?%23";
    /// assert_eq!(PercentEncoded::from_fragment(raw).to_string(), encoded);
    /// ```
    #[must_use]
    pub fn from_fragment(raw: &'a str) -> Self {
        Self {
            context: Context::Fragment,
            raw,
        }
    }

    /// Creates an encoded string for the given context.
    #[inline]
    #[must_use]
    pub(crate) fn with_context(raw: &'a str, context: Context) -> Self {
        Self { context, raw }
    }
}

impl fmt::Display for PercentEncoded<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bytes = self.raw.as_bytes();
        // Start of the pending run of bytes that are written as is.
        let mut run_start = 0;
        let mut i = 0;
        while i < bytes.len() {
            let b = bytes[i];
            if b == b'%' && take_xdigits2(&self.raw[(i + 1)..]).is_some() {
                // Keep the triplet; it is ASCII so the run stays on char boundaries.
                i += 3;
                continue;
            }
            if b.is_ascii() && self.context.is_allowed(b) {
                i += 1;
                continue;
            }
            // Continuation bytes of a multibyte character leave an empty run
            // that does not start on a char boundary.
            if run_start < i {
                f.write_str(&self.raw[run_start..i])?;
            }
            write!(f, "%{:02X}", b)?;
            i += 1;
            run_start = i;
        }
        f.write_str(&self.raw[run_start..])
    }
}

/// Percent-encodes the string for the context, borrowing when nothing changes.
#[must_use]
pub(crate) fn encode(raw: &str, context: Context) -> Cow<'_, str> {
    let needs_encoding = raw.bytes().enumerate().any(|(i, b)| {
        if b == b'%' {
            take_xdigits2(&raw[(i + 1)..]).is_none()
        } else {
            !(b.is_ascii() && context.is_allowed(b))
        }
    });
    if !needs_encoding {
        return Cow::Borrowed(raw);
    }
    let mut buf = String::with_capacity(raw.len() + 8);
    // Writing into a `String` never fails.
    let _ = write!(buf, "{}", PercentEncoded::with_context(raw, context));
    Cow::Owned(buf)
}

/// Decodes every well-formed `%XX` triplet into its byte.
///
/// Malformed sequences (a `%` not followed by two hexadecimal digits) are
/// passed through literally.
///
/// # Examples
///
/// ```
/// use uri_value::percent_encode::decode_to_bytes;
///
/// assert_eq!(&*decode_to_bytes("a%20b"), b"a b");
/// assert_eq!(&*decode_to_bytes("%FF%zz%4"), b"\xff%zz%4");
/// ```
#[must_use]
pub fn decode_to_bytes(s: &str) -> Cow<'_, [u8]> {
    if find(s, b'%').is_none() {
        return Cow::Borrowed(s.as_bytes());
    }

    let mut buf = Vec::with_capacity(s.len());
    let mut rest = s;
    while let Some((prefix, after_percent)) = find_split_hole(rest, b'%') {
        buf.extend_from_slice(prefix.as_bytes());
        match take_xdigits2(after_percent) {
            Some((decoded, after_triplet)) => {
                buf.push(decoded);
                rest = after_triplet;
            }
            None => {
                buf.push(b'%');
                rest = after_percent;
            }
        }
    }
    buf.extend_from_slice(rest.as_bytes());
    Cow::Owned(buf)
}

/// Decodes every well-formed `%XX` triplet, and returns the result as a string.
///
/// Decoded byte sequences which are not valid UTF-8 are replaced with
/// `U+FFFD REPLACEMENT CHARACTER`.
///
/// # Examples
///
/// ```
/// use uri_value::percent_encode::decode;
///
/// assert_eq!(decode("/path/to/some%20file"), "/path/to/some file");
/// assert_eq!(decode("100%"), "100%");
/// ```
#[must_use]
pub fn decode(s: &str) -> Cow<'_, str> {
    match decode_to_bytes(s) {
        Cow::Borrowed(_) => Cow::Borrowed(s),
        Cow::Owned(bytes) => match String::from_utf8(bytes) {
            Ok(s) => Cow::Owned(s),
            Err(e) => Cow::Owned(String::from_utf8_lossy(e.as_bytes()).into_owned()),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;

    #[test]
    fn userinfo() {
        assert_eq!(
            PercentEncoded::from_userinfo("user:pass").to_string(),
            "user:pass"
        );
        assert_eq!(
            PercentEncoded::from_userinfo("a@b/c").to_string(),
            "a%40b%2Fc"
        );
    }

    #[test]
    fn path_segment() {
        assert_eq!(
            PercentEncoded::from_path_segment("\u{03B1}/<alpha>?#").to_string(),
            "%CE%B1%2F%3Calpha%3E%3F%23"
        );
    }

    #[test]
    fn path() {
        assert_eq!(
            PercentEncoded::from_path("\u{03B1}/<alpha>?#").to_string(),
            "%CE%B1/%3Calpha%3E%3F%23"
        );
    }

    #[test]
    fn query() {
        assert_eq!(
            PercentEncoded::from_query_value("\u{03B1}/<alpha>?#").to_string(),
            "%CE%B1/%3Calpha%3E?%23"
        );
        assert_eq!(
            PercentEncoded::from_query_key("k=v").to_string(),
            "k%3Dv"
        );
    }

    #[test]
    fn fragment() {
        assert_eq!(
            PercentEncoded::from_fragment("\u{03B1}/<alpha>?#").to_string(),
            "%CE%B1/%3Calpha%3E?%23"
        );
    }

    #[test]
    fn triplets_are_kept() {
        assert_eq!(PercentEncoded::from_path("a%2fb").to_string(), "a%2fb");
        assert_eq!(PercentEncoded::from_path("100%").to_string(), "100%25");
        assert_eq!(PercentEncoded::from_path("%zz").to_string(), "%25zz");
        assert_eq!(PercentEncoded::from_path("%4").to_string(), "%254");
    }

    #[test]
    fn encode_borrows_when_unchanged() {
        assert!(matches!(
            encode("plain-path/seg", Context::Path),
            Cow::Borrowed("plain-path/seg")
        ));
        assert_eq!(encode("a b", Context::Path), "a%20b");
    }

    #[test]
    fn decode_lenient() {
        assert_eq!(decode("no-escapes"), "no-escapes");
        assert_eq!(decode("%41%42%43"), "ABC");
        assert_eq!(decode("%4"), "%4");
        assert_eq!(decode("%%41"), "%A");
        assert_eq!(decode("%E3%81%82"), "\u{3042}");
        assert_eq!(decode("%FF"), "\u{FFFD}");
    }
}
