//! Serialization of URIs.

use core::fmt;

use crate::percent_encode::PercentEncoded;
use crate::uri::Uri;

/// Prefix keeping a path without authority from being read as one.
///
/// `/.//path` is `//path` after dot removal.
const NO_AUTHORITY_PREFIX: &str = "/.";

/// Prefix keeping a relative path from being read as a scheme or an absolute path.
const RELATIVE_PATH_PREFIX: &str = "./";

/// A debug-printable type to hide the sensitive information.
#[derive(Clone, Copy)]
struct Censored;

impl fmt::Debug for Censored {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{censored}")
    }
}

impl fmt::Debug for Uri {
    /// Prints the components, with the userinfo censored.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Uri")
            .field("scheme", &self.scheme)
            .field("userinfo", &self.userinfo.as_ref().map(|_| Censored))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("path", &self.path)
            .field("query", &self.query)
            .field("fragment", &self.fragment)
            .finish()
    }
}

impl fmt::Display for Uri {
    /// Writes `[scheme ":"] ["//" [userinfo "@"] host [":" port]] path ["?" query] ["#" fragment]`.
    ///
    /// Absent components are omitted entirely. Characters not allowed in a
    /// component are percent-encoded, and a host containing a colon is
    /// written as an IP literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(scheme) = &self.scheme {
            write!(f, "{}:", scheme)?;
        }

        let path = &self.path;
        if let Some(host) = &self.host {
            f.write_str("//")?;
            if let Some(userinfo) = &self.userinfo {
                write!(f, "{}@", PercentEncoded::from_userinfo(userinfo))?;
            }
            if host.contains(':') {
                write!(f, "[{}]", host)?;
            } else {
                f.write_str(host)?;
            }
            if let Some(port) = self.port {
                write!(f, ":{}", port)?;
            }
            if !path.is_absolute() && !path.is_empty() {
                f.write_str("/")?;
            }
        } else if path.is_absolute() {
            if path.starts_with_empty_segment() {
                f.write_str(NO_AUTHORITY_PREFIX)?;
            }
        } else if path.starts_with_empty_segment()
            || (self.scheme.is_none()
                && path.segments().first().map_or(false, |seg| seg.contains(':')))
        {
            f.write_str(RELATIVE_PATH_PREFIX)?;
        }
        write!(f, "{}", path)?;

        if let Some(query) = &self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{}", PercentEncoded::from_fragment(fragment))?;
        }
        Ok(())
    }
}
