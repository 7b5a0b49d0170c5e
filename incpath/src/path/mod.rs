//! Path canonicalization and display.
//!
//! Every file and folder the resolver tracks is a [`CanonicalPath`]: absolute,
//! with `.`/`..` removed and symlinks followed. Equality, hashing and ordering
//! all operate on that form, so `src/../include/a.h` and `include/a.h` are the
//! same entry.
//!
//! Display goes through [`pretty_string`], which renders `/` as the only
//! separator regardless of platform. The same rendering is used to compare
//! candidate files against include text such as `"boost/config.hpp"`.
//!
//! # Examples
//!
//! ```no_run
//! use incpath::path::normalize::normalize;
//! use std::path::Path;
//!
//! let include_dir = normalize(Path::new("~/vendor/include")).unwrap();
//! println!("{include_dir}");
//! ```

pub mod canonicalize;
pub mod normalize;
mod types;

pub use normalize::normalize;
pub use types::{pretty_string, CanonicalPath};
