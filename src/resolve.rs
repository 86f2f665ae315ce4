//! URI reference resolution.
//!
//! References are resolved by the algorithm of [RFC 3986 section 5.2.2],
//! with two differences:
//!
//! * A reference with a scheme is taken as is. Its dot segments are not
//!   removed.
//! * Dot segments are removed from relative paths with a stack that never
//!   climbs above the start of the path, so `x/../..` against `scheme:a`
//!   gives `scheme:` (not `scheme:/`).
//!
//! A reference without a path leaves the base path untouched, so a
//! fragment-only reference changes only the fragment, and a query-only
//! reference changes only the query (dropping the base fragment).
//!
//! [RFC 3986 section 5.2.2]: https://www.rfc-editor.org/rfc/rfc3986.html#section-5.2.2
//!
//! # Examples
//!
//! ```
//! # use uri_value::Error;
//! use uri_value::Uri;
//!
//! let base = Uri::from_string("http://example.com/path/to/dir/filename.html#fragment")?;
//!
//! let joined = base.join(&Uri::from_string("#new_frag")?);
//! assert_eq!(joined.to_string(), "http://example.com/path/to/dir/filename.html#new_frag");
//!
//! let joined = base.join(&Uri::from_string("../new_filename.xml")?);
//! assert_eq!(joined.to_string(), "http://example.com/path/to/new_filename.xml");
//!
//! // Never climbs above the root.
//! let joined = base.join(&Uri::from_string("../../../../new_filename.xml")?);
//! assert_eq!(joined.to_string(), "http://example.com/new_filename.xml");
//! # Ok::<_, Error>(())
//! ```


use crate::error::Error;
use crate::log::trace;
use crate::path::Path;
use crate::uri::Uri;

/// A resolver against the fixed base.
#[derive(Debug, Clone, Copy)]
pub struct FixedBaseResolver<'a> {
    /// Base URI.
    base: &'a Uri,
}

impl<'a> FixedBaseResolver<'a> {
    /// Creates a new resolver with the given base.
    ///
    /// The base is used as is; it need not have a scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::resolve::FixedBaseResolver;
    /// use uri_value::Uri;
    ///
    /// let base = Uri::from_string("http://example.com/base/")?;
    /// let resolver = FixedBaseResolver::new(&base);
    ///
    /// let resolved = resolver.resolve_str("../there")?;
    /// assert_eq!(resolved.to_string(), "http://example.com/there");
    /// # Ok::<_, Error>(())
    /// ```
    #[inline]
    #[must_use]
    pub fn new(base: &'a Uri) -> Self {
        Self { base }
    }

    /// Returns the base.
    #[inline]
    #[must_use]
    pub fn base(&self) -> &'a Uri {
        self.base
    }

    /// Resolves the given reference against the fixed base.
    ///
    /// `..` and `.` are recognized even when they are percent-encoded.
    /// Nothing else is normalized.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::resolve::FixedBaseResolver;
    /// use uri_value::Uri;
    ///
    /// let base = Uri::from_string("HTTP://example.COM/base/base2/")?;
    /// let resolver = FixedBaseResolver::new(&base);
    ///
    /// let reference = Uri::from_string("%2e%2E/%2e")?;
    /// let resolved = resolver.resolve(&reference);
    ///
    /// assert_eq!(resolved.to_string(), "HTTP://example.COM/base/");
    /// # Ok::<_, Error>(())
    /// ```
    #[must_use]
    pub fn resolve(&self, reference: &Uri) -> Uri {
        let base = self.base;

        if reference.scheme.is_some() {
            trace!("resolving {}: reference has a scheme", reference);
            return reference.clone();
        }

        if reference.host.is_some() {
            trace!("resolving {}: reference has an authority", reference);
            let mut path = reference.path.clone();
            path.remove_dot_segments();
            return Uri {
                scheme: base.scheme.clone(),
                userinfo: reference.userinfo.clone(),
                host: reference.host.clone(),
                port: reference.port,
                path,
                query: reference.query.clone(),
                fragment: reference.fragment.clone(),
            };
        }

        let (path, query) = if reference.path.is_empty() {
            trace!("resolving {}: reference has no path", reference);
            let query = reference.query.as_ref().or(base.query.as_ref()).cloned();
            (base.path.clone(), query)
        } else {
            let mut path = if reference.path.is_absolute() {
                trace!("resolving {}: reference has an absolute path", reference);
                reference.path.clone()
            } else {
                trace!("resolving {}: merging with the base path", reference);
                Path::merge(&base.path, &reference.path, base.has_authority())
            };
            path.remove_dot_segments();
            (path, reference.query.clone())
        };

        Uri {
            scheme: base.scheme.clone(),
            userinfo: base.userinfo.clone(),
            host: base.host.clone(),
            port: base.port,
            path,
            query,
            fragment: reference.fragment.clone(),
        }
    }

    /// Parses the reference and resolves it against the fixed base.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference cannot be parsed.
    pub fn resolve_str(&self, reference: &str) -> Result<Uri, Error> {
        Uri::from_string(reference).map(|reference| self.resolve(&reference))
    }
}

impl Uri {
    /// Resolves the reference against `self` as the base.
    ///
    /// See the [module documentation][`crate::resolve`] for the algorithm.
    #[inline]
    #[must_use]
    pub fn join(&self, reference: &Uri) -> Uri {
        FixedBaseResolver::new(self).resolve(reference)
    }

    /// Parses the reference and resolves it against the base.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference cannot be parsed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use uri_value::Error;
    /// use uri_value::Uri;
    ///
    /// let base = Uri::from_string("scheme://userinfo@hostname:1234/path/to/file?query#fragment")?;
    /// let uri = Uri::from_string_with_base(&base, "/a/new/path/to/file")?;
    /// assert_eq!(uri.to_string(), "scheme://userinfo@hostname:1234/a/new/path/to/file");
    /// # Ok::<_, Error>(())
    /// ```
    pub fn from_string_with_base(base: &Uri, reference: &str) -> Result<Uri, Error> {
        FixedBaseResolver::new(base).resolve_str(reference)
    }

    /// Creates a URI from raw components, resolved against the base.
    ///
    /// The components are stored as by [`Uri::new`] and the result is
    /// joined with the base, so an absent scheme and authority are taken
    /// from the base, and a relative path is merged with the base path.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::Uri;
    ///
    /// let base = Uri::new(
    ///     Some("scheme"),
    ///     Some("userinfo"),
    ///     Some("hostname"),
    ///     Some(1234),
    ///     Some("/path/to/file"),
    ///     Some("query"),
    ///     Some("fragment"),
    /// );
    /// let uri = Uri::new_with_base(&base, None, None, None, None, Some("new_file"), None, None);
    /// assert_eq!(uri.to_string(), "scheme://userinfo@hostname:1234/path/to/new_file");
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new_with_base(
        base: &Uri,
        scheme: Option<&str>,
        userinfo: Option<&str>,
        host: Option<&str>,
        port: Option<u16>,
        path: Option<&str>,
        query: Option<&str>,
        fragment: Option<&str>,
    ) -> Uri {
        let reference = Uri::new(scheme, userinfo, host, port, path, query, fragment);
        base.join(&reference)
    }
}
