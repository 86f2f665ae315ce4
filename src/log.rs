//! Logging macros.
//!
//! They forward to the `log` crate when the `log` feature is enabled, and
//! expand to nothing otherwise.
#![allow(unused_macros, unused_imports)]

/// Emits a debug-level record.
macro_rules! debug {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::debug!($($tt)*);
    };
}

/// Emits a trace-level record.
macro_rules! trace {
    ($($tt:tt)*) => {
        #[cfg(feature = "log")]
        ::log::trace!($($tt)*);
    };
}

pub(crate) use {debug, trace};
