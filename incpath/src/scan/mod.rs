//! Discovery of source files and of the include directives inside them.
//!
//! - [`enumerate`] walks root folders and returns every C/C++ source file.
//! - [`scan`] lazily yields the `#include` directives of a single file.

pub mod directive;
pub mod enumerate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use directive::{parse_directive, scan, Directive, Directives, INCLUDE_PREFIX};
pub use enumerate::{enumerate, is_source_file, Enumeration, SOURCE_EXTENSIONS};
