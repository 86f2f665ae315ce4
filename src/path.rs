//! Path component as a list of segments.

mod remove_dot_segments;

use core::fmt;

use alloc::string::String;
use alloc::vec::Vec;

use crate::percent_encode::PercentEncoded;

pub(crate) use self::remove_dot_segments::remove_dot_segments;

/// [Path] component of a URI, stored as segments.
///
/// The text form of a path is the optional leading slash followed by the
/// segments joined with `/`. Empty segments stand for consecutive slashes
/// and for a trailing slash:
///
/// | text     | absolute | segments         |
/// |----------|----------|------------------|
/// | ``       | no       | `[]`             |
/// | `/`      | yes      | `[]`             |
/// | `a/b`    | no       | `["a", "b"]`     |
/// | `/a/`    | yes      | `["a", ""]`      |
/// | `//a`    | yes      | `["", "a"]`      |
///
/// A lone empty segment is stored as no segments, so each text has exactly
/// one representation.
///
/// [Path]: https://www.rfc-editor.org/rfc/rfc3986.html#section-3.3
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    /// Whether the path starts with a slash.
    absolute: bool,
    /// Segments, in order.
    segments: Vec<String>,
}

impl Path {
    /// Creates an empty path.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits the raw path text into segments.
    ///
    /// Percent-encoded triplets are kept as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Path;
    ///
    /// let path = Path::parse("/path/to/dir/");
    /// assert!(path.is_absolute());
    /// assert_eq!(path.segments(), ["path", "to", "dir", ""]);
    ///
    /// assert!(Path::parse("").segments().is_empty());
    /// assert!(Path::parse("/").segments().is_empty());
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let (absolute, rest) = match s.strip_prefix('/') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let segments = if rest.is_empty() {
            Vec::new()
        } else {
            rest.split('/').map(String::from).collect()
        };
        Self { absolute, segments }
    }

    /// Creates a path from segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Path;
    ///
    /// let path = Path::from_segments(true, ["a", "b", ""]);
    /// assert_eq!(path.to_string(), "/a/b/");
    /// ```
    #[must_use]
    pub fn from_segments<I, S>(absolute: bool, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut path = Self {
            absolute,
            segments: segments.into_iter().map(Into::into).collect(),
        };
        path.canonicalize();
        path
    }

    /// Returns `true` if the path starts with a slash.
    #[inline]
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Returns `true` if the path text is empty.
    ///
    /// Note that `/` is not empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.absolute && self.segments.is_empty()
    }

    /// Returns the segments.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Returns the segments, consuming the path.
    #[inline]
    #[must_use]
    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }

    /// Sets whether the path starts with a slash.
    #[inline]
    pub(crate) fn set_absolute(&mut self, absolute: bool) {
        self.absolute = absolute;
    }

    /// Returns `true` if the first segment exists and is empty.
    ///
    /// Such an absolute path starts with `//`.
    #[inline]
    #[must_use]
    pub(crate) fn starts_with_empty_segment(&self) -> bool {
        self.segments.first().map_or(false, |seg| seg.is_empty())
    }

    /// Removes the trailing empty segment of a directory path, if any.
    fn pop_trailing_empty(&mut self) {
        if self.segments.last().map_or(false, |seg| seg.is_empty()) {
            self.segments.pop();
        }
    }

    /// Makes a non-empty relative path absolute, and returns `true` if it changed.
    ///
    /// Under an authority, a relative path is serialized with a leading slash
    /// anyway. A lone empty segment collapses so that the result matches `/`.
    pub(crate) fn make_absolute(&mut self) -> bool {
        if self.absolute || self.segments.is_empty() {
            return false;
        }
        self.absolute = true;
        self.canonicalize();
        true
    }

    /// Collapses a lone empty segment into no segments.
    fn canonicalize(&mut self) {
        if self.segments.len() == 1 && self.segments[0].is_empty() {
            self.segments.clear();
        }
    }

    /// Appends a segment.
    ///
    /// If the path ends with a slash, the segment takes the place of the
    /// trailing empty segment. Dot segments are not resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Path;
    ///
    /// let mut path = Path::parse("/path/to/file");
    /// path.append_segment("here");
    /// assert_eq!(path.to_string(), "/path/to/file/here");
    ///
    /// let mut dir = Path::parse("/path/to/dir/");
    /// dir.append_segment("file");
    /// assert_eq!(dir.to_string(), "/path/to/dir/file");
    /// ```
    pub fn append_segment(&mut self, segment: &str) {
        self.pop_trailing_empty();
        self.segments.push(segment.into());
        self.canonicalize();
    }

    /// Splits the raw path text and appends its segments.
    ///
    /// A leading slash of the appended text is ignored. If the path ends
    /// with a slash, the trailing empty segment is replaced. Dot segments
    /// are not resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Path;
    ///
    /// let mut path = Path::parse("/path/to/file/here");
    /// path.append_path("../there");
    /// assert_eq!(path.to_string(), "/path/to/file/here/../there");
    /// ```
    pub fn append_path(&mut self, raw: &str) {
        let appended = Self::parse(raw);
        if appended.segments.is_empty() {
            // Appending `/` only turns the path into a directory path.
            if appended.absolute && !self.segments.is_empty() {
                self.pop_trailing_empty();
                self.segments.push(String::new());
            }
            return;
        }
        self.pop_trailing_empty();
        self.segments.extend(appended.segments);
        self.canonicalize();
    }

    /// Applies the `remove_dot_segments` algorithm, and returns `true` if anything changed.
    ///
    /// See [RFC 3986 section 5.2.4].
    ///
    /// [RFC 3986 section 5.2.4]: https://www.rfc-editor.org/rfc/rfc3986.html#section-5.2.4
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Path;
    ///
    /// let mut path = Path::parse("/a/b/c/./../../g");
    /// assert!(path.remove_dot_segments());
    /// assert_eq!(path.to_string(), "/a/g");
    ///
    /// // Never climbs above the root.
    /// let mut path = Path::parse("/../../g");
    /// path.remove_dot_segments();
    /// assert_eq!(path.to_string(), "/g");
    /// ```
    pub fn remove_dot_segments(&mut self) -> bool {
        let resolved = remove_dot_segments(&self.segments);
        if resolved == self.segments {
            return false;
        }
        self.segments = resolved;
        self.canonicalize();
        true
    }

    /// Merges a relative reference path into the base path.
    ///
    /// If the base has an authority and an empty path, the result is `/`
    /// followed by the reference path. Otherwise it is every segment of the
    /// base path except the last one, followed by the reference segments.
    /// Dot segments are not resolved.
    ///
    /// See [RFC 3986 section 5.2.3].
    ///
    /// [RFC 3986 section 5.2.3]: https://www.rfc-editor.org/rfc/rfc3986.html#section-5.2.3
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Path;
    ///
    /// let base = Path::parse("/path/to/dir/filename.html");
    /// let reference = Path::parse("../new_filename.xml");
    /// let merged = Path::merge(&base, &reference, true);
    /// assert_eq!(merged.to_string(), "/path/to/dir/../new_filename.xml");
    ///
    /// let merged = Path::merge(&Path::new(), &Path::parse("g"), true);
    /// assert_eq!(merged.to_string(), "/g");
    /// ```
    #[must_use]
    pub fn merge(base: &Self, reference: &Self, base_has_authority: bool) -> Self {
        if base_has_authority && base.is_empty() {
            return Self::from_segments(true, reference.segments.iter().cloned());
        }
        let kept = base.segments.len().saturating_sub(1);
        let segments = base.segments[..kept]
            .iter()
            .chain(reference.segments.iter())
            .cloned();
        Self::from_segments(base.absolute, segments)
    }

    /// Applies a function to every segment in place, and returns `true` if any segment changed.
    pub(crate) fn map_segments<F>(&mut self, mut f: F) -> bool
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut changed = false;
        for seg in &mut self.segments {
            if let Some(new) = f(seg) {
                if new != *seg {
                    *seg = new;
                    changed = true;
                }
            }
        }
        changed
    }
}

impl fmt::Display for Path {
    /// Writes the path, percent-encoding characters not allowed in segments.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str("/")?;
        }
        let mut iter = self.segments.iter();
        if let Some(first) = iter.next() {
            PercentEncoded::from_path_segment(first).fmt(f)?;
        }
        for seg in iter {
            f.write_str("/")?;
            PercentEncoded::from_path_segment(seg).fmt(f)?;
        }
        Ok(())
    }
}
