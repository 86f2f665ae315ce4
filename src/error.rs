//! URI parsing and manipulation error.

use core::fmt;

/// URI parsing and manipulation error.
///
/// Parse failures, rejected mutations and handler lookup failures share this
/// type; use [`Error::kind`] to tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Inner error representation.
    repr: ErrorRepr,
}

impl Error {
    /// Creates an error reporting that no handler accepts a well-formed scheme.
    ///
    /// This crate never returns this error by itself. It exists so that
    /// scheme-to-handler factories can report the failure with the same type
    /// as parse errors.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_value::{Error, ErrorKind};
    ///
    /// let err = Error::unsupported_scheme();
    /// assert_eq!(err.kind(), ErrorKind::UnsupportedScheme);
    /// ```
    #[inline]
    #[must_use]
    pub fn unsupported_scheme() -> Self {
        ErrorRepr::UnsupportedScheme.into()
    }

    /// Returns the error kind.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self.repr {
            ErrorRepr::InvalidPort
            | ErrorRepr::PortOverflow
            | ErrorRepr::UnterminatedIpLiteral
            | ErrorRepr::InvalidScheme
            | ErrorRepr::InvalidHost => ErrorKind::MalformedUri,
            ErrorRepr::AbsentReceiver => ErrorKind::InvalidMutation,
            ErrorRepr::UnsupportedScheme => ErrorKind::UnsupportedScheme,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self.repr {
            ErrorRepr::InvalidPort => "malformed URI: port contains a non-digit character",
            ErrorRepr::PortOverflow => "malformed URI: port number exceeds 65535",
            ErrorRepr::UnterminatedIpLiteral => {
                "malformed URI: IP literal host is missing the closing bracket"
            }
            ErrorRepr::InvalidScheme => "malformed URI: invalid scheme",
            ErrorRepr::InvalidHost => "malformed URI: host contains a delimiter character",
            ErrorRepr::AbsentReceiver => "invalid mutation: cannot set a value on an absent URI",
            ErrorRepr::UnsupportedScheme => "unsupported URI scheme",
        };
        f.write_str(msg)
    }
}

impl From<ErrorRepr> for Error {
    #[inline]
    fn from(repr: ErrorRepr) -> Self {
        Self { repr }
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
impl std::error::Error for Error {}

/// Internal representation of `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorRepr {
    /// Port has a non-digit character.
    InvalidPort,
    /// Port does not fit in 16 bits.
    PortOverflow,
    /// `[` without the matching `]` inside the authority.
    UnterminatedIpLiteral,
    /// Scheme is too short or has a character outside the scheme grammar.
    InvalidScheme,
    /// Host has a character that would end or split the authority.
    InvalidHost,
    /// A value was given to a mutator on an absent URI.
    AbsentReceiver,
    /// No handler for the scheme.
    UnsupportedScheme,
}

/// Error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The text or component does not follow the URI grammar.
    MalformedUri,
    /// A non-absent value was set on an absent URI.
    InvalidMutation,
    /// A syntactically valid scheme has no handler.
    ///
    /// Reported by handler factories built on top of this crate.
    UnsupportedScheme,
}
