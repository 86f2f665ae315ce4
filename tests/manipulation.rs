//! Tests for manipulation.

#[macro_use]
mod utils;

use uri_value::{ErrorKind, OptionUriExt, QueryTable, Uri};

fn absent() -> Option<&'static mut Uri> {
    None
}

fn assert_invalid_mutation(res: Result<(), uri_value::Error>) {
    let err = res.expect_err("setting a value on an absent URI should fail");
    assert_eq!(err.kind(), ErrorKind::InvalidMutation);
}

#[test]
fn get_set() {
    let mut uri = Uri::from_string("scheme://hostname/path/to/file?query#fragment")
        .expect("should be valid URI");

    uri.set_scheme(Some("new+scheme")).expect("scheme should be valid");
    assert_eq!(uri.scheme(), Some("new+scheme"));
    assert_eq_display!(uri, "new+scheme://hostname/path/to/file?query#fragment");

    uri.set_scheme(None).expect("removing the scheme should succeed");
    assert_eq!(uri.scheme(), None);
    assert_eq_display!(uri, "//hostname/path/to/file?query#fragment");

    assert_invalid_mutation(absent().set_scheme(Some("fail")));
    assert!(absent().set_scheme(None).is_ok());

    uri.set_userinfo(Some("username:password"));
    assert_eq!(uri.userinfo(), Some("username:password"));
    assert_eq_display!(uri, "//username:password@hostname/path/to/file?query#fragment");

    uri.set_userinfo(None);
    assert_eq!(uri.userinfo(), None);
    assert_eq_display!(uri, "//hostname/path/to/file?query#fragment");

    assert_invalid_mutation(absent().set_userinfo(Some("fail")));
    assert!(absent().set_userinfo(None).is_ok());

    uri.set_host(None).expect("removing the host should succeed");
    assert_eq!(uri.host(), None);
    assert_eq_display!(uri, "/path/to/file?query#fragment");

    uri.set_host(Some("example.com")).expect("host should be valid");
    assert_eq!(uri.host(), Some("example.com"));
    assert_eq_display!(uri, "//example.com/path/to/file?query#fragment");

    assert_invalid_mutation(absent().set_host(Some("fail")));
    assert!(absent().set_host(None).is_ok());

    uri.set_port(Some(12345));
    assert_eq!(uri.port(), Some(12345));
    assert_eq_display!(uri, "//example.com:12345/path/to/file?query#fragment");

    uri.set_port(None);
    assert_eq!(uri.port(), None);
    assert_eq_display!(uri, "//example.com/path/to/file?query#fragment");

    assert_invalid_mutation(absent().set_port(Some(1234)));
    assert!(absent().set_port(None).is_ok());

    uri.append_path_segment("here");
    assert_eq_display!(uri, "//example.com/path/to/file/here?query#fragment");

    assert_invalid_mutation(absent().append_path_segment(Some("fail")));
    assert!(absent().append_path_segment(None).is_ok());

    uri.append_path("../there");
    assert_eq_display!(uri, "//example.com/path/to/file/here/../there?query#fragment");

    assert_invalid_mutation(absent().append_path(Some("fail")));
    assert!(absent().append_path(None).is_ok());

    uri.normalize();

    let mut segments = uri.path_segments().to_vec();
    assert!(!segments.is_empty());
    segments.push("segment".to_owned());
    assert_eq_display!(uri, "//example.com/path/to/file/there?query#fragment");
    uri.set_path_segments(segments);
    assert_eq_display!(uri, "//example.com/path/to/file/there/segment?query#fragment");

    assert_invalid_mutation(absent().set_path_segments(Some(vec!["test"])));
    assert!(absent().set_path_segments(None::<Vec<String>>).is_ok());

    uri.set_query_value("key", Some("value"));
    assert_eq_display!(
        uri,
        "//example.com/path/to/file/there/segment?query&key=value#fragment"
    );

    uri.set_query_value("key", None);
    assert_eq_display!(uri, "//example.com/path/to/file/there/segment?query&key#fragment");

    assert_invalid_mutation(absent().set_query_value("key", Some("value")));

    assert!(uri.remove_query_key("key"));
    assert_eq_display!(uri, "//example.com/path/to/file/there/segment?query#fragment");

    assert!(!uri.remove_query_key("key"));
    assert!(!absent().remove_query_key("key"));

    uri.set_fragment(None);
    assert_eq!(uri.fragment(), None);
    assert_eq_display!(uri, "//example.com/path/to/file/there/segment?query");

    uri.set_fragment(Some("tag"));
    assert_eq!(uri.fragment(), Some("tag"));
    assert_eq_display!(uri, "//example.com/path/to/file/there/segment?query#tag");

    assert_invalid_mutation(absent().set_fragment(Some("can't set if no URI")));
    assert!(absent().set_fragment(None).is_ok());
}

#[test]
fn rejected_mutations_leave_uri_unchanged() {
    let mut uri = Uri::from_string("http://example.com/path").expect("should be valid URI");
    for scheme in ["x", "1ab", "a b", ""] {
        let err = uri.set_scheme(Some(scheme)).expect_err("scheme should be invalid");
        assert_eq!(err.kind(), ErrorKind::MalformedUri, "{scheme:?}");
    }
    for host in ["a/b", "a?b", "a#b", "user@host", "[::1", "a]b"] {
        let err = uri.set_host(Some(host)).expect_err("host should be invalid");
        assert_eq!(err.kind(), ErrorKind::MalformedUri, "{host:?}");
    }
    assert_eq_display!(uri, "http://example.com/path");
}

#[test]
fn ip_literal_host() {
    let mut uri = Uri::from_string("http://example.com/").expect("should be valid URI");
    uri.set_host(Some("[::1]")).expect("IP literal should be valid");
    assert_eq!(uri.host(), Some("::1"));
    assert_eq_display!(uri, "http://[::1]/");
}

#[test]
fn append_to_directory() {
    let mut uri = Uri::from_string("file:///dir/").expect("should be valid URI");
    uri.append_path_segment("x");
    assert_eq_display!(uri, "file:///dir/x");

    let mut uri = Uri::from_string("file:///dir/").expect("should be valid URI");
    uri.append_path("/a/b");
    assert_eq_display!(uri, "file:///dir/a/b");

    let mut uri = Uri::from_string("http://example.com").expect("should be valid URI");
    uri.append_path("a/b");
    assert_eq_display!(uri, "http://example.com/a/b");
}

#[test]
fn query_string_and_table() {
    let mut uri = Uri::from_string("http://example.com/").expect("should be valid URI");
    uri.set_query_string(Some("a=1&b"));
    assert_eq!(uri.query_keys(), ["a", "b"]);
    assert_eq!(uri.query_value("a"), Some("1"));
    assert!(uri.query_has_key("b"));
    assert_eq!(uri.query_value("b"), None);

    let table: QueryTable = [("x", Some("1")), ("y", None)].into_iter().collect();
    uri.set_query_table(Some(table));
    assert_eq_display!(uri, "http://example.com/?x=1&y");

    uri.set_query_string(None);
    assert_eq_display!(uri, "http://example.com/");

    uri.set_query_value("created", Some(""));
    assert_eq_display!(uri, "http://example.com/?created=");
}

#[test]
fn present_option_receiver() {
    let mut uri = Uri::from_string("http://example.com/a/b?q#f").expect("should be valid URI");
    Some(&mut uri)
        .set_path(Some("/c"))
        .expect("URI is present");
    Some(&mut uri)
        .set_query_string(Some("k=v"))
        .expect("URI is present");
    assert_eq_display!(uri, "http://example.com/c?k=v#f");

    Some(&mut uri).set_path(None).expect("URI is present");
    assert_eq_display!(uri, "http://example.com?k=v#f");

    let err = Some(&mut uri)
        .set_host(Some("bad/host"))
        .expect_err("host should be invalid");
    assert_eq!(err.kind(), ErrorKind::MalformedUri);
}
