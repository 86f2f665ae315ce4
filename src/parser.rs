//! Parser.
//!
//! The input is decomposed in a single left-to-right pass:
//! `[scheme ":"] ["//" authority] path ["?" query] ["#" fragment]`.
//! Only the scheme, the authority and the port are checked strictly;
//! other components accept any character and are percent-encoded on
//! serialization.

mod authority;
pub(crate) mod char;
pub(crate) mod str;

use alloc::string::String;

use crate::error::{Error, ErrorRepr};
use crate::log::debug;
use crate::path::Path;
use crate::query::QueryTable;
use crate::uri::Uri;

use self::authority::{decompose_authority, AuthorityComponents};
use self::str::{find_split2, find_split3, find_split_hole};

/// Minimum length of a scheme.
///
/// Single-letter schemes are rejected, so that `C:\path` and `C:/path` are
/// not taken for URIs.
pub(crate) const MIN_SCHEME_LEN: usize = 2;

/// Returns the length of the `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )` prefix.
#[must_use]
fn scheme_candidate_len(i: &str) -> usize {
    let bytes = i.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => {
            1 + bytes[1..]
                .iter()
                .take_while(|&&b| char::is_ascii_scheme_continue(b))
                .count()
        }
        _ => 0,
    }
}

/// Returns `true` if the whole string is a scheme at least [`MIN_SCHEME_LEN`] long.
#[must_use]
pub(crate) fn is_valid_scheme(s: &str) -> bool {
    s.len() >= MIN_SCHEME_LEN && scheme_candidate_len(s) == s.len()
}

/// Returns the scheme if the string starts with a valid scheme and a colon.
#[must_use]
pub(crate) fn scheme_prefix(i: &str) -> Option<&str> {
    let len = scheme_candidate_len(i);
    if len >= MIN_SCHEME_LEN && i.as_bytes().get(len) == Some(&b':') {
        Some(&i[..len])
    } else {
        None
    }
}

/// Eats a `scheme` and a following colon if available, and returns the rest and the scheme.
fn scheme_colon_opt(i: &str) -> Result<(&str, Option<&str>), Error> {
    if i.starts_with(':') {
        // An empty scheme can be read neither as a URI nor as a relative reference.
        return Err(ErrorRepr::InvalidScheme.into());
    }
    Ok(match scheme_prefix(i) {
        Some(scheme) => (&i[(scheme.len() + 1)..], Some(scheme)),
        None => (i, None),
    })
}

/// Eats double slash and the following authority if available, and returns the authority.
fn slash_slash_authority_opt(i: &str) -> (&str, Option<&str>) {
    let s = match i.strip_prefix("//") {
        Some(rest) => rest,
        None => return (i, None),
    };
    // A slash, question mark, and hash character won't appear in `authority`.
    match find_split3(s, b'/', b'?', b'#') {
        Some((authority, rest)) => (rest, Some(authority)),
        None => ("", Some(s)),
    }
}

/// Eats a string until the query, and returns that part (excluding `?` for the query).
fn until_query(i: &str) -> (&str, &str) {
    match find_split2(i, b'?', b'#') {
        Some((before_query, rest)) => (rest, before_query),
        None => ("", i),
    }
}

/// Decomposes query and fragment, if available.
///
/// The string must start with `?`, or `#`, or be empty.
fn decompose_query_and_fragment(i: &str) -> (Option<&str>, Option<&str>) {
    match i.as_bytes().first().copied() {
        None => (None, None),
        Some(b'?') => {
            let rest = &i[1..];
            match find_split_hole(rest, b'#') {
                Some((query, fragment)) => (Some(query), Some(fragment)),
                None => (Some(rest), None),
            }
        }
        Some(c) => {
            debug_assert_eq!(c, b'#');
            (None, Some(&i[1..]))
        }
    }
}

/// Parses a URI reference.
pub(crate) fn parse_uri_reference(s: &str) -> Result<Uri, Error> {
    let res = decompose(s);
    if let Err(_e) = &res {
        debug!("failed to parse URI reference {:?}: {}", s, _e);
    }
    res
}

/// Decomposes the URI reference into owned components.
fn decompose(s: &str) -> Result<Uri, Error> {
    let start = s
        .bytes()
        .position(|b| !char::is_leading_space(b))
        .unwrap_or(s.len());
    let i = &s[start..];
    let (i, scheme) = scheme_colon_opt(i)?;
    let (i, authority) = slash_slash_authority_opt(i);
    let authority = match authority {
        Some(authority) => Some(decompose_authority(authority)?),
        None => None,
    };
    let (i, path) = until_query(i);
    let (query, fragment) = decompose_query_and_fragment(i);

    let (userinfo, host, port) = match authority {
        Some(AuthorityComponents {
            userinfo,
            host,
            port,
        }) => (userinfo, Some(host), port),
        None => (None, None, None),
    };
    Ok(Uri {
        scheme: scheme.map(String::from),
        userinfo: userinfo.map(String::from),
        host: host.map(String::from),
        port,
        path: Path::parse(path),
        query: query.map(QueryTable::parse),
        fragment: fragment.map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scheme_length_policy() {
        assert_eq!(scheme_prefix("B:foo.txt"), None);
        assert_eq!(scheme_prefix("AB:foo.txt"), Some("AB"));
        assert_eq!(scheme_prefix("new+scheme.v-1://x"), Some("new+scheme.v-1"));
        assert_eq!(scheme_prefix("1ab:x"), None);
        assert_eq!(scheme_prefix("ab"), None);
        assert_eq!(scheme_prefix("a_b:x"), None);
    }

    #[test]
    fn valid_scheme() {
        assert!(is_valid_scheme("fd"));
        assert!(is_valid_scheme("new+scheme"));
        assert!(!is_valid_scheme("f"));
        assert!(!is_valid_scheme(""));
        assert!(!is_valid_scheme("ab:"));
        assert!(!is_valid_scheme("a b"));
    }

    #[test]
    fn authority_boundaries() {
        assert_eq!(slash_slash_authority_opt("//host/p"), ("/p", Some("host")));
        assert_eq!(slash_slash_authority_opt("//host?q"), ("?q", Some("host")));
        assert_eq!(slash_slash_authority_opt("//"), ("", Some("")));
        assert_eq!(slash_slash_authority_opt("/p"), ("/p", None));
    }

    #[test]
    fn query_and_fragment() {
        assert_eq!(decompose_query_and_fragment(""), (None, None));
        assert_eq!(decompose_query_and_fragment("?"), (Some(""), None));
        assert_eq!(decompose_query_and_fragment("?q#f#g"), (Some("q"), Some("f#g")));
        assert_eq!(decompose_query_and_fragment("#f?q"), (None, Some("f?q")));
    }

    #[test]
    fn leading_space_is_skipped() {
        let uri = parse_uri_reference(" \t\x0bscheme:path").expect("valid URI");
        assert_eq!(uri.scheme(), Some("scheme"));
    }

    #[test]
    fn empty_scheme_is_rejected() {
        assert!(parse_uri_reference(":foo").is_err());
    }
}
