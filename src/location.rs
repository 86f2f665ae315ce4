//! Location strings of `scheme://location`-style URIs.
//!
//! These work on the text directly, for handlers that only need the part
//! after `://` (a file path, a device name, a host and path).

use alloc::string::String;

use crate::parser::str::{find_split2, find_split_hole, take_xdigits2};
use crate::percent_encode::{decode, encode, Context};
use crate::validate::{is_valid, protocol_is_valid};

/// Returns `true` if any percent-encoded triplet decodes to a slash or NUL.
fn has_forbidden_escape(s: &str) -> bool {
    let mut rest = s;
    while let Some((_, after_percent)) = find_split_hole(rest, b'%') {
        match take_xdigits2(after_percent) {
            Some((b'/', _)) | Some((0, _)) => return true,
            Some((_, after_triplet)) => rest = after_triplet,
            None => rest = after_percent,
        }
    }
    false
}

/// Strips the slash before a drive letter, as in `/c:/path` or `/c|/path`.
#[cfg(windows)]
fn strip_drive_letter_slash(location: String) -> String {
    let bytes = location.as_bytes();
    let has_drive = bytes.len() >= 3
        && bytes[0] == b'/'
        && bytes[1].is_ascii_alphabetic()
        && matches!(bytes[2], b':' | b'|');
    if !has_drive {
        return location;
    }
    let mut stripped = String::with_capacity(location.len() - 1);
    stripped.push(char::from(bytes[1]));
    stripped.push(':');
    stripped.push_str(&location[3..]);
    stripped
}

/// Returns the decoded location of the URI text: everything after `://`, up
/// to the query or the fragment.
///
/// Returns `None` if the text is not [valid][`crate::is_valid`], has no
/// `://`, or has a percent-encoded slash or NUL in the location. Decoded
/// bytes which are not valid UTF-8 are replaced with
/// `U+FFFD REPLACEMENT CHARACTER`.
///
/// The host is part of the location, so `file://c:/path` gives `c:/path`.
/// On Windows, the slash before a drive letter is stripped as well, so
/// `file:///c:/path` (and `file:///c|/path`) gives `c:/path`.
///
/// # Examples
///
/// ```
/// use uri_value::get_location;
///
/// assert_eq!(get_location("dvd://").as_deref(), Some(""));
/// assert_eq!(
///     get_location("smb://supercomputer/path/to/file").as_deref(),
///     Some("supercomputer/path/to/file")
/// );
/// assert_eq!(
///     get_location("file:///path/to/some%20file").as_deref(),
///     Some("/path/to/some file")
/// );
/// assert_eq!(get_location("urn:name:path"), None);
/// ```
#[must_use]
pub fn get_location(s: &str) -> Option<String> {
    if !is_valid(s) {
        return None;
    }
    let (_, rest) = s.split_once("://")?;
    let location = find_split2(rest, b'?', b'#').map_or(rest, |(location, _)| location);
    if has_forbidden_escape(location) {
        return None;
    }
    let decoded = decode(location).into_owned();
    #[cfg(windows)]
    let decoded = strip_drive_letter_slash(decoded);
    Some(decoded)
}

/// Builds `protocol://location`, percent-encoding the location as a path.
///
/// Every `%` in the location is taken literally. The protocol is
/// lowercased. Returns `None` if the protocol is not a valid scheme.
///
/// # Examples
///
/// ```
/// use uri_value::{construct, get_location};
///
/// let uri = construct("FILE", "/path/to/some file 100%").expect("valid protocol");
/// assert_eq!(uri, "file:///path/to/some%20file%20100%25");
/// assert_eq!(get_location(&uri).as_deref(), Some("/path/to/some file 100%"));
///
/// assert_eq!(construct("f", "/path"), None);
/// ```
#[must_use]
pub fn construct(protocol: &str, location: &str) -> Option<String> {
    if !protocol_is_valid(protocol) {
        return None;
    }
    let literal = location.replace('%', "%25");
    let encoded = encode(&literal, Context::Path);
    let mut uri = String::with_capacity(protocol.len() + 3 + encoded.len());
    uri.push_str(&protocol.to_ascii_lowercase());
    uri.push_str("://");
    uri.push_str(&encoded);
    Some(uri)
}
