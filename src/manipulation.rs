//! URI manipulation.
//!
//! Every mutator either applies the whole change or leaves the URI as it
//! was. Components are stored as given; characters not allowed in a
//! component are percent-encoded on serialization.

mod option;

use alloc::string::String;

use crate::error::{Error, ErrorRepr};
use crate::log::debug;
use crate::parser::is_valid_scheme;
use crate::path::Path;
use crate::query::QueryTable;
use crate::uri::Uri;

pub use self::option::OptionUriExt;

/// Validates the host, and returns it without the brackets of an IP literal.
fn checked_host(host: &str) -> Result<&str, Error> {
    let inner = match host.strip_prefix('[') {
        Some(rest) => rest
            .strip_suffix(']')
            .ok_or(ErrorRepr::UnterminatedIpLiteral)?,
        None => host,
    };
    if inner
        .bytes()
        .any(|b| matches!(b, b'/' | b'?' | b'#' | b'@' | b'[' | b']'))
    {
        return Err(ErrorRepr::InvalidHost.into());
    }
    Ok(inner)
}

impl Uri {
    /// Sets the scheme.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`MalformedUri`][`crate::ErrorKind::MalformedUri`]
    /// if the scheme is shorter than two characters or does not follow
    /// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`. The URI is left as is.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::from_string("scheme://hostname/path/to/file?query#fragment")?;
    /// uri.set_scheme(Some("new+scheme"))?;
    /// assert_eq!(uri.to_string(), "new+scheme://hostname/path/to/file?query#fragment");
    ///
    /// uri.set_scheme(None)?;
    /// assert_eq!(uri.to_string(), "//hostname/path/to/file?query#fragment");
    ///
    /// assert!(uri.set_scheme(Some("x")).is_err());
    /// assert_eq!(uri.scheme(), None);
    /// # Ok::<_, Error>(())
    /// ```
    pub fn set_scheme(&mut self, scheme: Option<&str>) -> Result<(), Error> {
        if let Some(scheme) = scheme {
            if !is_valid_scheme(scheme) {
                debug!("rejected scheme {:?}", scheme);
                return Err(ErrorRepr::InvalidScheme.into());
            }
        }
        self.scheme = scheme.map(String::from);
        Ok(())
    }

    /// Sets the userinfo.
    ///
    /// The userinfo is only serialized when the URI has a host.
    pub fn set_userinfo(&mut self, userinfo: Option<&str>) {
        self.userinfo = userinfo.map(String::from);
    }

    /// Sets the host.
    ///
    /// A host enclosed in brackets is stored without them. Removing the host
    /// removes the whole authority from the serialization, including the
    /// userinfo and the port.
    ///
    /// # Errors
    ///
    /// Returns an error of kind [`MalformedUri`][`crate::ErrorKind::MalformedUri`]
    /// if the host contains `/`, `?`, `#`, `@`, or a bracket other than the
    /// ones enclosing an IP literal. The URI is left as is.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::from_string("//hostname/path/to/file?query#fragment")?;
    /// uri.set_host(None)?;
    /// assert_eq!(uri.to_string(), "/path/to/file?query#fragment");
    ///
    /// uri.set_host(Some("example.com"))?;
    /// assert_eq!(uri.to_string(), "//example.com/path/to/file?query#fragment");
    ///
    /// uri.set_host(Some("[::1]"))?;
    /// assert_eq!(uri.host(), Some("::1"));
    ///
    /// assert!(uri.set_host(Some("evil.com/")).is_err());
    /// assert_eq!(uri.host(), Some("::1"));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn set_host(&mut self, host: Option<&str>) -> Result<(), Error> {
        let host = match host {
            Some(host) => Some(checked_host(host)?),
            None => None,
        };
        self.host = host.map(String::from);
        Ok(())
    }

    /// Sets the port.
    ///
    /// The port is only serialized when the URI has a host.
    pub fn set_port(&mut self, port: Option<u16>) {
        self.port = port;
    }

    /// Replaces the path with the given raw path text.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::from_string("http://example.com/old?q")?;
    /// uri.set_path("/new/path/");
    /// assert_eq!(uri.to_string(), "http://example.com/new/path/?q");
    /// # Ok::<_, Error>(())
    /// ```
    pub fn set_path(&mut self, path: &str) {
        self.path = Path::parse(path);
    }

    /// Replaces the path segments.
    ///
    /// The path stays absolute if it was absolute or if the URI has a host.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::from_string("//example.com/path/to/file/there?query#fragment")?;
    /// let mut segments = uri.path_segments().to_vec();
    /// segments.push("segment".to_owned());
    /// uri.set_path_segments(segments);
    /// assert_eq!(
    ///     uri.to_string(),
    ///     "//example.com/path/to/file/there/segment?query#fragment"
    /// );
    /// # Ok::<_, Error>(())
    /// ```
    pub fn set_path_segments<I, S>(&mut self, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let absolute = self.path.is_absolute() || self.has_authority();
        self.path = Path::from_segments(absolute, segments);
    }

    /// Makes an empty path absolute when the URI has a host.
    fn prepare_path_for_append(&mut self) {
        if self.has_authority() && self.path.is_empty() {
            self.path.set_absolute(true);
        }
    }

    /// Appends a path segment.
    ///
    /// A trailing empty segment (as in `/dir/`) is replaced. Dot segments
    /// are not resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::from_string("//example.com/path/to/file?query#fragment")?;
    /// uri.append_path_segment("here");
    /// assert_eq!(uri.to_string(), "//example.com/path/to/file/here?query#fragment");
    ///
    /// let mut uri = Uri::from_string("http://example.com")?;
    /// uri.append_path_segment("a b");
    /// assert_eq!(uri.to_string(), "http://example.com/a%20b");
    /// # Ok::<_, Error>(())
    /// ```
    pub fn append_path_segment(&mut self, segment: &str) {
        self.prepare_path_for_append();
        self.path.append_segment(segment);
    }

    /// Splits the raw path text and appends its segments.
    ///
    /// A trailing empty segment (as in `/dir/`) is replaced, and a leading
    /// slash of the appended text is ignored. Dot segments are not resolved.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::from_string("//example.com/path/to/file/here?query#fragment")?;
    /// uri.append_path("../there");
    /// assert_eq!(uri.to_string(), "//example.com/path/to/file/here/../there?query#fragment");
    /// # Ok::<_, Error>(())
    /// ```
    pub fn append_path(&mut self, path: &str) {
        self.prepare_path_for_append();
        self.path.append_path(path);
    }

    /// Replaces the query with the given raw query text (without the leading `?`).
    ///
    /// `None` removes the query, and `Some("")` leaves an empty query.
    pub fn set_query_string(&mut self, query: Option<&str>) {
        self.query = query.map(QueryTable::parse);
    }

    /// Replaces the query table.
    pub fn set_query_table(&mut self, query: Option<QueryTable>) {
        self.query = query;
    }

    /// Sets the value of the query key, creating the query if there is none.
    ///
    /// An existing key keeps its position. `None` as the value leaves the
    /// bare key.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::Uri;
    ///
    /// let mut uri = Uri::from_string("//example.com/path?query#fragment")?;
    /// uri.set_query_value("key", Some("value"));
    /// assert_eq!(uri.to_string(), "//example.com/path?query&key=value#fragment");
    ///
    /// uri.set_query_value("key", None);
    /// assert_eq!(uri.to_string(), "//example.com/path?query&key#fragment");
    ///
    /// assert!(uri.remove_query_key("key"));
    /// assert_eq!(uri.to_string(), "//example.com/path?query#fragment");
    /// assert!(!uri.remove_query_key("key"));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn set_query_value(&mut self, key: &str, value: Option<&str>) {
        self.query
            .get_or_insert_with(QueryTable::new)
            .set(key, value);
    }

    /// Removes the query key, and returns `true` if it existed.
    ///
    /// The query stays present even when it becomes empty.
    pub fn remove_query_key(&mut self, key: &str) -> bool {
        self.query
            .as_mut()
            .map_or(false, |query| query.remove(key))
    }

    /// Sets the fragment.
    pub fn set_fragment(&mut self, fragment: Option<&str>) {
        self.fragment = fragment.map(String::from);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloc::string::ToString;

    use crate::error::ErrorKind;

    fn parsed(s: &str) -> Uri {
        Uri::from_string(s).expect("valid URI")
    }

    #[test]
    fn rejected_host_leaves_uri_unchanged() {
        let mut uri = parsed("sc://h/p");
        for host in ["a/b", "a?b", "a#b", "u@h", "[::1", "a]b", "[[::1]]"] {
            let err = uri.set_host(Some(host)).expect_err(host);
            assert_eq!(err.kind(), ErrorKind::MalformedUri);
            assert_eq!(uri.to_string(), "sc://h/p");
        }
    }

    #[test]
    fn host_with_colon_is_bracketed() {
        let mut uri = parsed("sc://h/p");
        uri.set_host(Some("fe80::1")).expect("valid host");
        uri.set_port(Some(8080));
        assert_eq!(uri.to_string(), "sc://[fe80::1]:8080/p");
    }

    #[test]
    fn port_without_host_is_not_serialized() {
        let mut uri = parsed("sc://h:80/p");
        uri.set_host(None).expect("removing the host never fails");
        assert_eq!(uri.to_string(), "sc:/p");
        uri.set_host(Some("h")).expect("valid host");
        assert_eq!(uri.to_string(), "sc://h:80/p");
    }

    #[test]
    fn append_to_directory() {
        let mut uri = parsed("sc://h/dir/");
        uri.append_path_segment("x");
        assert_eq!(uri.to_string(), "sc://h/dir/x");

        let mut uri = parsed("sc://h/dir/");
        uri.append_path("/sub/x");
        assert_eq!(uri.to_string(), "sc://h/dir/sub/x");
    }

    #[test]
    fn append_under_empty_authority_path() {
        let mut uri = parsed("sc://h");
        uri.append_path("a/b");
        assert!(uri.path().is_absolute());
        assert_eq!(uri.to_string(), "sc://h/a/b");
    }

    #[test]
    fn append_to_relative_path() {
        let mut uri = parsed("a");
        uri.append_path_segment("b");
        assert_eq!(uri.to_string(), "a/b");
    }

    #[test]
    fn set_path_segments_keeps_absoluteness() {
        let mut uri = parsed("sc:/a");
        uri.set_path_segments(["x", "y"]);
        assert_eq!(uri.to_string(), "sc:/x/y");

        let mut uri = parsed("sc:a");
        uri.set_path_segments(["x", "y"]);
        assert_eq!(uri.to_string(), "sc:x/y");

        let mut uri = parsed("sc://h");
        uri.set_path_segments(["x"]);
        assert_eq!(uri.to_string(), "sc://h/x");
    }

    #[test]
    fn query_string_and_table() {
        let mut uri = parsed("sc://h/p");
        uri.set_query_string(Some("a=1&b"));
        assert_eq!(uri.query_keys(), ["a", "b"]);
        uri.set_query_string(Some(""));
        assert_eq!(uri.to_string(), "sc://h/p?");
        uri.set_query_table(None);
        assert_eq!(uri.to_string(), "sc://h/p");
        uri.set_query_table(Some([("k", Some("v"))].into_iter().collect()));
        assert_eq!(uri.to_string(), "sc://h/p?k=v");
    }

    #[test]
    fn remove_query_key_without_query() {
        let mut uri = parsed("sc://h/p");
        assert!(!uri.remove_query_key("key"));
        assert!(uri.query().is_none());
    }
}
