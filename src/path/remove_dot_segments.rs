//! `remove_dot_segments` algorithm described in [RFC 3986 5.2.4], over path segments.
//!
//! [RFC 3986 5.2.4]: https://www.rfc-editor.org/rfc/rfc3986.html#section-5.2.4

use alloc::string::String;
use alloc::vec::Vec;

/// Kind of a dot segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DotSegment {
    /// `.`
    Current,
    /// `..`
    Parent,
}

impl DotSegment {
    /// Classifies the segment.
    ///
    /// Percent-encoded dots (`%2E`, in either case) are recognized, so that
    /// resolution gives the same result before and after normalization.
    #[must_use]
    fn classify(segment: &str) -> Option<Self> {
        /// Returns `true` if the string is a single dot, possibly percent-encoded.
        fn is_dot(s: &str) -> bool {
            s == "." || s.eq_ignore_ascii_case("%2e")
        }

        /// Returns `true` if both halves split at `mid` are dots.
        fn is_dot_pair(s: &str, mid: usize) -> bool {
            match (s.get(..mid), s.get(mid..)) {
                (Some(first), Some(second)) => is_dot(first) && is_dot(second),
                _ => false,
            }
        }

        if is_dot(segment) {
            return Some(Self::Current);
        }
        let parent = match segment.len() {
            2 => segment == "..",
            4 => is_dot_pair(segment, 1) || is_dot_pair(segment, 3),
            6 => is_dot_pair(segment, 3),
            _ => false,
        };
        if parent {
            Some(Self::Parent)
        } else {
            None
        }
    }
}

/// Removes dot segments and returns the remaining segments.
///
/// Segments are processed left to right onto an output stack: `.` is
/// dropped, `..` pops the previous output segment if any (never climbing
/// above the root), and other segments are pushed. A dot segment at the
/// end leaves a trailing empty segment, so the result still ends with a
/// slash.
#[must_use]
pub(crate) fn remove_dot_segments(segments: &[String]) -> Vec<String> {
    let mut output: Vec<String> = Vec::with_capacity(segments.len());
    let last_index = segments.len().saturating_sub(1);
    for (i, seg) in segments.iter().enumerate() {
        match DotSegment::classify(seg) {
            Some(kind) => {
                if kind == DotSegment::Parent {
                    output.pop();
                }
                if i == last_index {
                    output.push(String::new());
                }
            }
            None => output.push(seg.clone()),
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::path::Path;

    fn resolved(path: &str) -> Vec<String> {
        remove_dot_segments(Path::parse(path).segments())
    }

    #[test]
    fn classify() {
        for dot in [".", "%2e", "%2E"] {
            assert_eq!(DotSegment::classify(dot), Some(DotSegment::Current), "{dot}");
        }
        for dotdot in ["..", ".%2e", ".%2E", "%2e.", "%2E.", "%2e%2e", "%2E%2e"] {
            assert_eq!(
                DotSegment::classify(dotdot),
                Some(DotSegment::Parent),
                "{dotdot}"
            );
        }
        for other in ["", "...", ".a", "a.", "%2e%2e%2e", "%2f", ".%2f", "%2"] {
            assert_eq!(DotSegment::classify(other), None, "{other}");
        }
    }

    #[test]
    fn rfc3986_examples() {
        assert_eq!(resolved("/a/b/c/./../../g"), ["a", "g"]);
        assert_eq!(resolved("mid/content=5/../6"), ["mid", "6"]);
    }

    #[test]
    fn root_floor() {
        assert_eq!(resolved("/../../../../new_filename.xml"), ["new_filename.xml"]);
        assert_eq!(resolved("/.."), [""]);
    }

    #[test]
    fn trailing_dot_segments() {
        assert_eq!(resolved("/a/b/."), ["a", "b", ""]);
        assert_eq!(resolved("/a/b/.."), ["a", ""]);
        assert_eq!(resolved("./"), [""]);
    }

    #[test]
    fn empty_segments_are_kept() {
        assert_eq!(resolved("/a//b/"), ["a", "", "b", ""]);
        assert_eq!(resolved("/a//../b"), ["a", "b"]);
    }
}
