//! Owned, mutable URI values for [RFC 3986][RFC 3986] URI references.
//!
//! A [`Uri`] is decomposed into its components on parse, and each component
//! can be read and replaced independently. Values can be [normalized][`Uri::normalize`],
//! compared, [joined][`Uri::join`] against a base, and serialized back to
//! text with [`Display`][`core::fmt::Display`].
//!
//! [RFC 3986]: https://tools.ietf.org/html/rfc3986
//!
//! ```
//! # use uri_value::Error;
//! use uri_value::Uri;
//!
//! let base = Uri::from_string("http://a/b/c/d;p?q")?;
//! let joined = Uri::from_string_with_base(&base, "../g")?;
//! assert_eq!(joined.to_string(), "http://a/b/g");
//! # Ok::<_, Error>(())
//! ```
//!
//! # `std` and `alloc` support
//!
//! This crate supports `no_std` usage, but always requires the `alloc` crate.
//!
//! * `std` feature (**enabled by default**):
//!     + Std library is required.
//!     + The feature let the crate utilize std-specific stuff, such as `std::error::Error` trait.
//! * Without it:
//!     + The crate can be used in `no_std` environment with a global allocator.
//!
//! # Optional features
//!
//! * `log`: emits `debug` and `trace` records through the [`log`](https://docs.rs/log) crate.
//! * `memchr`: uses [`memchr`](https://docs.rs/memchr) for byte searches while parsing.
//! * `serde`: implements `Serialize` and `Deserialize` for [`Uri`] as a string.
//!
//! # Rationale
//!
//! ## Single-letter schemes
//!
//! RFC 3986 allows a scheme of any non-zero length. This crate requires at
//! least two characters, so that `C:\path` and `C:/path` are read as relative
//! references rather than as URIs with the `c` scheme. Consequently `g:h`
//! joined against a base is the relative path `g:h`, not an absolute URI.
//!
//! ## Empty authority
//!
//! `foo://` is decomposed to `<scheme="foo">://<host=""><path="">`, and
//! `foo:` to `<scheme="foo">:<path="">`. An empty host is still a host, so
//! the two serialize differently.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod format;
mod location;
mod log;
mod manipulation;
mod normalize;
pub(crate) mod parser;
mod path;
pub mod percent_encode;
mod query;
pub mod resolve;
mod uri;
mod validate;

pub use self::error::{Error, ErrorKind};
pub use self::location::{construct, get_location};
pub use self::manipulation::OptionUriExt;
pub use self::path::Path;
pub use self::query::QueryTable;
pub use self::resolve::FixedBaseResolver;
pub use self::uri::Uri;
pub use self::validate::{get_protocol, has_protocol, is_valid, protocol_is_valid};
