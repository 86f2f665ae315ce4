//! Tests for validators.

#[cfg(not(test))]
compile_error!("`tests` module should be enable only when `cfg(tests)`");

use super::*;

use alloc::format;

/// Characters allowed after the first character of a scheme.
const SCHEME_CONTINUE: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789+-.";

#[test]
fn single_letter_schemes_are_invalid() {
    for c in ('a'..='z').chain('A'..='Z') {
        for rest in [":\\foo.txt", ":/foo.txt", "://foo.txt", ":foo.txt", ":"] {
            let s = format!("{c}{rest}");
            assert!(!is_valid(&s), "{s:?}");
        }
    }
}

#[test]
fn two_letter_schemes_are_valid() {
    for first in ('a'..='z').chain('A'..='Z') {
        for second in SCHEME_CONTINUE.chars() {
            let s = format!("{first}{second}:foo.txt");
            assert!(is_valid(&s), "{s:?}");
            assert!(protocol_is_valid(&s[..2]), "{s:?}");
        }
    }
}

#[test]
fn longer_schemes() {
    for s in [
        "ABC:/foo.txt",
        "ABC://foo.txt",
        "ABC:foo.txt",
        "ABCD:/foo.txt",
        "ABCD://foo.txt",
        "ABCD:foo.txt",
    ] {
        assert!(is_valid(s), "{s:?}");
    }
}

#[test]
fn invalid_first_character() {
    for s in ["1ab:x", "+ab:x", ".ab:x", ":ab", "", " ab:x"] {
        assert!(!is_valid(s), "{s:?}");
    }
}

#[test]
fn invalid_scheme_character() {
    assert!(!is_valid("a_b:x"));
    assert!(!is_valid("ab c:x"));
    assert!(!protocol_is_valid("ab:"));
    assert!(!protocol_is_valid(""));
}

#[test]
fn protocol_case() {
    assert_eq!(get_protocol("FILE:///foo/bar").as_deref(), Some("file"));
    assert_eq!(get_protocol("Http://x").as_deref(), Some("http"));
    assert!(has_protocol("FILE:///foo/bar", "file"));
    assert!(!has_protocol("file:///foo/bar", "http"));
    assert!(!has_protocol("f:/foo/bar", "f"));
}
