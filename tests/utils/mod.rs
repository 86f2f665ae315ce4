//! Utilities.
#![allow(dead_code)]

use core::fmt;

/// Returns `true` if the two values are displayed the same.
///
/// Compares the output chunk by chunk, without allocating the whole text.
pub fn eq_display_str<T: ?Sized + fmt::Display>(value: &T, expected: &str) -> bool {
    /// Writer comparing the written text against the rest of the expected text.
    struct CmpWriter<'a>(&'a str);

    impl fmt::Write for CmpWriter<'_> {
        fn write_str(&mut self, s: &str) -> fmt::Result {
            match self.0.strip_prefix(s) {
                Some(rest) => {
                    self.0 = rest;
                    Ok(())
                }
                None => Err(fmt::Error),
            }
        }
    }

    let mut writer = CmpWriter(expected);
    fmt::write(&mut writer, format_args!("{value}")).is_ok() && writer.0.is_empty()
}

/// Asserts that the value is displayed as the expected string.
macro_rules! assert_eq_display {
    ($left:expr, $right:expr $(,)?) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    utils::eq_display_str(left, right),
                    "`{left}` is expected to be displayed as `{right}`",
                );
            }
        }
    }};
    ($left:expr, $right:expr, $($args:tt)*) => {{
        match (&$left, &$right) {
            (left, right) => {
                assert!(
                    utils::eq_display_str(left, right),
                    "`{left}` is expected to be displayed as `{right}`: {}",
                    format_args!($($args)*)
                );
            }
        }
    }};
}
