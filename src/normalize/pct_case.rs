//! Percent-encoding normalization and case normalization.

use core::fmt::{self, Write as _};

use alloc::borrow::Cow;
use alloc::string::String;

use crate::parser::char::is_ascii_unreserved;
use crate::parser::str::{find_split_hole, take_xdigits2};
use crate::percent_encode::Context;

/// Normalizes the component, borrowing when it is already normalized.
///
/// `None` as the context means the host, which is case-normalized and not
/// newly encoded.
#[must_use]
pub(crate) fn normalize_component(raw: &str, context: Option<Context>) -> Cow<'_, str> {
    let normalized = PctCaseNormalized::new(raw, context);
    let mut buf = String::with_capacity(raw.len());
    // Writing into a `String` never fails.
    let _ = write!(buf, "{}", normalized);
    if buf == raw {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(buf)
    }
}

/// Writable as a normalized component.
///
/// This wrapper does the things below when being formatted:
///
/// * Decode percent-encoded unreserved characters.
/// * Convert alphabetic characters uppercase in percent-encoded triplets.
/// * Encode characters not allowed in the component, including a `%` that
///   does not start a triplet.
/// * For the host, convert ASCII alphabetic characters lowercase instead of
///   encoding anything.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PctCaseNormalized<'a> {
    /// Component to normalize.
    raw: &'a str,
    /// Encoding context, or `None` for the host.
    context: Option<Context>,
}

impl<'a> PctCaseNormalized<'a> {
    /// Creates a new `PctCaseNormalized` value.
    #[inline]
    #[must_use]
    pub(crate) fn new(raw: &'a str, context: Option<Context>) -> Self {
        Self { raw, context }
    }

    /// Writes a string that contains no percent-encoded triplet.
    fn write_plain(&self, f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
        let context = match self.context {
            Some(context) => context,
            None => {
                return s
                    .chars()
                    .try_for_each(|c| f.write_char(c.to_ascii_lowercase()));
            }
        };
        let mut run_start = 0;
        for (i, b) in s.bytes().enumerate() {
            if b.is_ascii() && context.is_allowed(b) {
                continue;
            }
            if run_start < i {
                f.write_str(&s[run_start..i])?;
            }
            write!(f, "%{:02X}", b)?;
            run_start = i + 1;
        }
        f.write_str(&s[run_start..])
    }
}

impl fmt::Display for PctCaseNormalized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rest = self.raw;

        while !rest.is_empty() {
            // Scan the next percent sign.
            let (prefix, after_percent) = match find_split_hole(rest, b'%') {
                Some(v) => v,
                None => return self.write_plain(f, rest),
            };
            // Write the string before the percent sign.
            self.write_plain(f, prefix)?;

            let (decoded, after_triplet) = match take_xdigits2(after_percent) {
                Some(v) => v,
                None => {
                    // Not a triplet: a stray `%`.
                    match self.context {
                        Some(_) => f.write_str("%25")?,
                        None => f.write_char('%')?,
                    }
                    rest = after_percent;
                    continue;
                }
            };
            rest = after_triplet;

            if is_ascii_unreserved(decoded) {
                // Unreserved. Print the decoded.
                let decoded = match self.context {
                    Some(_) => decoded,
                    None => decoded.to_ascii_lowercase(),
                };
                f.write_char(char::from(decoded))?;
            } else {
                write!(f, "%{:02X}", decoded)?;
            }
        }

        Ok(())
    }
}
