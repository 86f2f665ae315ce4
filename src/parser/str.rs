//! Functions for common string operations.

#[cfg(feature = "memchr")]
mod search {
    //! Byte search backed by `memchr`.

    /// Returns the position of the first occurrence of the byte.
    #[inline]
    #[must_use]
    pub(super) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
        memchr::memchr(needle, haystack)
    }

    /// Returns the position of the first occurrence of either of the bytes.
    #[inline]
    #[must_use]
    pub(super) fn find2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
        memchr::memchr2(needle1, needle2, haystack)
    }

    /// Returns the position of the first occurrence of any of the bytes.
    #[inline]
    #[must_use]
    pub(super) fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
        memchr::memchr3(needle1, needle2, needle3, haystack)
    }
}

#[cfg(not(feature = "memchr"))]
mod search {
    //! Byte search without external crates.

    /// Returns the position of the first occurrence of the byte.
    #[inline]
    #[must_use]
    pub(super) fn find(haystack: &[u8], needle: u8) -> Option<usize> {
        haystack.iter().position(|&b| b == needle)
    }

    /// Returns the position of the first occurrence of either of the bytes.
    #[inline]
    #[must_use]
    pub(super) fn find2(haystack: &[u8], needle1: u8, needle2: u8) -> Option<usize> {
        haystack.iter().position(|&b| b == needle1 || b == needle2)
    }

    /// Returns the position of the first occurrence of any of the bytes.
    #[inline]
    #[must_use]
    pub(super) fn find3(haystack: &[u8], needle1: u8, needle2: u8, needle3: u8) -> Option<usize> {
        haystack
            .iter()
            .position(|&b| b == needle1 || b == needle2 || b == needle3)
    }
}

/// Returns the position of the first occurrence of the ASCII byte.
#[inline]
#[must_use]
pub(crate) fn find(s: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii(), "[precondition] the needle must be ASCII");
    search::find(s.as_bytes(), needle)
}

/// Splits the string at the first occurrence of the byte, and drops the byte.
#[inline]
#[must_use]
pub(crate) fn find_split_hole(s: &str, needle: u8) -> Option<(&str, &str)> {
    find(s, needle).map(|pos| (&s[..pos], &s[(pos + 1)..]))
}

/// Splits the string at the first occurrence of either of the bytes.
///
/// The byte at the split position is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split2(s: &str, needle1: u8, needle2: u8) -> Option<(&str, &str)> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii());
    search::find2(s.as_bytes(), needle1, needle2).map(|pos| s.split_at(pos))
}

/// Splits the string at the first occurrence of any of the bytes.
///
/// The byte at the split position is kept at the head of the second string.
#[inline]
#[must_use]
pub(crate) fn find_split3(s: &str, needle1: u8, needle2: u8, needle3: u8) -> Option<(&str, &str)> {
    debug_assert!(needle1.is_ascii() && needle2.is_ascii() && needle3.is_ascii());
    search::find3(s.as_bytes(), needle1, needle2, needle3).map(|pos| s.split_at(pos))
}

/// Returns the decoded byte if the string starts with two hexadecimal digits.
#[must_use]
pub(crate) fn take_xdigits2(s: &str) -> Option<(u8, &str)> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let upper = hexdigit_to_u8(bytes[0])?;
    let lower = hexdigit_to_u8(bytes[1])?;
    Some(((upper << 4) | lower, &s[2..]))
}

/// Converts a hexadecimal digit into its value.
#[inline]
#[must_use]
fn hexdigit_to_u8(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
