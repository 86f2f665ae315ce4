//! Mutators on a possibly absent URI.

use alloc::string::String;

use crate::error::{Error, ErrorRepr};
use crate::query::QueryTable;
use crate::uri::Uri;

/// Mutators callable on a possibly absent URI.
///
/// On a present URI, each method applies the change as the method of the
/// same name on [`Uri`] does. On an absent URI, setting an absent value is a
/// successful no-op, and setting a value is an error of kind
/// [`InvalidMutation`][`crate::ErrorKind::InvalidMutation`].
///
/// # Examples
///
/// ```
/// # use uri_value::Error;
/// use uri_value::{ErrorKind, OptionUriExt, Uri};
///
/// let mut uri = Uri::from_string("scheme://hostname/path")?;
/// Some(&mut uri).set_fragment(Some("tag"))?;
/// assert_eq!(uri.to_string(), "scheme://hostname/path#tag");
///
/// let absent: Option<&mut Uri> = None;
/// let err = absent.set_fragment(Some("can't set if no URI")).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidMutation);
///
/// let absent: Option<&mut Uri> = None;
/// assert!(absent.set_fragment(None).is_ok());
/// # Ok::<_, Error>(())
/// ```
pub trait OptionUriExt: Sized {
    /// Sets the scheme. See [`Uri::set_scheme`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the scheme is not, or if
    /// the scheme is invalid.
    fn set_scheme(self, scheme: Option<&str>) -> Result<(), Error>;

    /// Sets the userinfo. See [`Uri::set_userinfo`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the userinfo is not.
    fn set_userinfo(self, userinfo: Option<&str>) -> Result<(), Error>;

    /// Sets the host. See [`Uri::set_host`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the host is not, or if the
    /// host is invalid.
    fn set_host(self, host: Option<&str>) -> Result<(), Error>;

    /// Sets the port. See [`Uri::set_port`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the port is not.
    fn set_port(self, port: Option<u16>) -> Result<(), Error>;

    /// Replaces the path. See [`Uri::set_path`].
    ///
    /// `None` on a present URI empties the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the path is not.
    fn set_path(self, path: Option<&str>) -> Result<(), Error>;

    /// Replaces the path segments. See [`Uri::set_path_segments`].
    ///
    /// `None` on a present URI removes every segment.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the segments are not.
    fn set_path_segments<I, S>(self, segments: Option<I>) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>;

    /// Appends a path segment. See [`Uri::append_path_segment`].
    ///
    /// `None` on a present URI changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the segment is not.
    fn append_path_segment(self, segment: Option<&str>) -> Result<(), Error>;

    /// Appends a raw path. See [`Uri::append_path`].
    ///
    /// `None` on a present URI changes nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the path is not.
    fn append_path(self, path: Option<&str>) -> Result<(), Error>;

    /// Replaces the query with the raw query text. See [`Uri::set_query_string`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the query is not.
    fn set_query_string(self, query: Option<&str>) -> Result<(), Error>;

    /// Replaces the query table. See [`Uri::set_query_table`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the table is not.
    fn set_query_table(self, query: Option<QueryTable>) -> Result<(), Error>;

    /// Sets the value of the query key. See [`Uri::set_query_value`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent. The key is always a value to
    /// set, so this fails even when `value` is `None`.
    fn set_query_value(self, key: &str, value: Option<&str>) -> Result<(), Error>;

    /// Removes the query key, and returns `true` if it existed. See [`Uri::remove_query_key`].
    ///
    /// An absent URI has no keys to remove.
    fn remove_query_key(self, key: &str) -> bool;

    /// Sets the fragment. See [`Uri::set_fragment`].
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is absent and the fragment is not.
    fn set_fragment(self, fragment: Option<&str>) -> Result<(), Error>;
}

impl OptionUriExt for Option<&mut Uri> {
    fn set_scheme(self, scheme: Option<&str>) -> Result<(), Error> {
        match (self, scheme) {
            (Some(uri), scheme) => uri.set_scheme(scheme),
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }

    fn set_userinfo(self, userinfo: Option<&str>) -> Result<(), Error> {
        match (self, userinfo) {
            (Some(uri), userinfo) => {
                uri.set_userinfo(userinfo);
                Ok(())
            }
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }

    fn set_host(self, host: Option<&str>) -> Result<(), Error> {
        match (self, host) {
            (Some(uri), host) => uri.set_host(host),
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }

    fn set_port(self, port: Option<u16>) -> Result<(), Error> {
        match (self, port) {
            (Some(uri), port) => {
                uri.set_port(port);
                Ok(())
            }
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }

    fn set_path(self, path: Option<&str>) -> Result<(), Error> {
        match (self, path) {
            (Some(uri), path) => {
                uri.set_path(path.unwrap_or_default());
                Ok(())
            }
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }

    fn set_path_segments<I, S>(self, segments: Option<I>) -> Result<(), Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        match (self, segments) {
            (Some(uri), Some(segments)) => {
                uri.set_path_segments(segments);
                Ok(())
            }
            (Some(uri), None) => {
                uri.set_path_segments(core::iter::empty::<String>());
                Ok(())
            }
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }

    fn append_path_segment(self, segment: Option<&str>) -> Result<(), Error> {
        match (self, segment) {
            (Some(uri), Some(segment)) => {
                uri.append_path_segment(segment);
                Ok(())
            }
            (Some(_), None) | (None, None) => Ok(()),
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
        }
    }

    fn append_path(self, path: Option<&str>) -> Result<(), Error> {
        match (self, path) {
            (Some(uri), Some(path)) => {
                uri.append_path(path);
                Ok(())
            }
            (Some(_), None) | (None, None) => Ok(()),
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
        }
    }

    fn set_query_string(self, query: Option<&str>) -> Result<(), Error> {
        match (self, query) {
            (Some(uri), query) => {
                uri.set_query_string(query);
                Ok(())
            }
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }

    fn set_query_table(self, query: Option<QueryTable>) -> Result<(), Error> {
        match (self, query) {
            (Some(uri), query) => {
                uri.set_query_table(query);
                Ok(())
            }
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }

    fn set_query_value(self, key: &str, value: Option<&str>) -> Result<(), Error> {
        match self {
            Some(uri) => {
                uri.set_query_value(key, value);
                Ok(())
            }
            None => Err(ErrorRepr::AbsentReceiver.into()),
        }
    }

    fn remove_query_key(self, key: &str) -> bool {
        match self {
            Some(uri) => uri.remove_query_key(key),
            None => false,
        }
    }

    fn set_fragment(self, fragment: Option<&str>) -> Result<(), Error> {
        match (self, fragment) {
            (Some(uri), fragment) => {
                uri.set_fragment(fragment);
                Ok(())
            }
            (None, Some(_)) => Err(ErrorRepr::AbsentReceiver.into()),
            (None, None) => Ok(()),
        }
    }
}
