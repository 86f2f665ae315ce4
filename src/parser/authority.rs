//! Parsers for the `authority` string.

use crate::error::{Error, ErrorRepr};
use crate::parser::str::find_split_hole;

/// Components of an authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct AuthorityComponents<'a> {
    /// Userinfo, without the trailing `@`.
    pub(super) userinfo: Option<&'a str>,
    /// Host, without the brackets of an IP literal.
    ///
    /// Note that this can be empty.
    pub(super) host: &'a str,
    /// Port.
    pub(super) port: Option<u16>,
}

/// Decomposes the authority into userinfo, host and port.
///
/// The userinfo ends at the first `@`. A host starting with `[` ends at the
/// matching `]`; any other host ends at the first `:`.
pub(super) fn decompose_authority(authority: &str) -> Result<AuthorityComponents<'_>, Error> {
    let (userinfo, i) = match find_split_hole(authority, b'@') {
        Some((userinfo, rest)) => (Some(userinfo), rest),
        None => (None, authority),
    };

    let (host, port) = match i.strip_prefix('[') {
        Some(literal) => {
            let (host, after) =
                find_split_hole(literal, b']').ok_or(ErrorRepr::UnterminatedIpLiteral)?;
            match after.strip_prefix(':') {
                Some(port) => (host, port),
                None if after.is_empty() => (host, ""),
                None => return Err(ErrorRepr::InvalidPort.into()),
            }
        }
        None => find_split_hole(i, b':').unwrap_or((i, "")),
    };

    Ok(AuthorityComponents {
        userinfo,
        host,
        port: parse_port(port)?,
    })
}

/// Parses the port digits.
///
/// An empty port is the same as no port.
fn parse_port(s: &str) -> Result<Option<u16>, Error> {
    if s.is_empty() {
        return Ok(None);
    }
    let mut port: u16 = 0;
    for b in s.bytes() {
        if !b.is_ascii_digit() {
            return Err(ErrorRepr::InvalidPort.into());
        }
        port = port
            .checked_mul(10)
            .and_then(|p| p.checked_add(u16::from(b - b'0')))
            .ok_or(ErrorRepr::PortOverflow)?;
    }
    Ok(Some(port))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::ErrorKind;

    fn components(authority: &str) -> (Option<&str>, &str, Option<u16>) {
        let c = decompose_authority(authority).expect("valid authority");
        (c.userinfo, c.host, c.port)
    }

    #[test]
    fn full() {
        assert_eq!(
            components("user:pass@host.com:1234"),
            (Some("user:pass"), "host.com", Some(1234))
        );
    }

    #[test]
    fn host_only() {
        assert_eq!(components("host"), (None, "host", None));
        assert_eq!(components(""), (None, "", None));
        assert_eq!(components("user@"), (Some("user"), "", None));
        assert_eq!(components("User:Pass@:1234"), (Some("User:Pass"), "", Some(1234)));
    }

    #[test]
    fn empty_port_is_no_port() {
        assert_eq!(components("host:"), (None, "host", None));
    }

    #[test]
    fn port_zero_is_a_port() {
        assert_eq!(components("host:0"), (None, "host", Some(0)));
    }

    #[test]
    fn ip_literal() {
        assert_eq!(components("[::1]"), (None, "::1", None));
        assert_eq!(components("[::1]:8080"), (None, "::1", Some(8080)));
        assert_eq!(components("u@[fe80::1]:1"), (Some("u"), "fe80::1", Some(1)));
    }

    #[test]
    fn malformed() {
        for authority in ["host:12a", "host:-1", "[::1", "[::1]x", "host:1:2"] {
            let err = decompose_authority(authority).expect_err(authority);
            assert_eq!(err.kind(), ErrorKind::MalformedUri, "{authority}");
        }
    }

    #[test]
    fn port_overflow() {
        assert_eq!(components("host:65535").2, Some(65535));
        assert!(decompose_authority("host:65536").is_err());
        assert!(decompose_authority("host:99999999999").is_err());
    }
}
