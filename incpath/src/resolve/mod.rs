//! Include resolution.
//!
//! A run starts from three folder lists (see [`ResolverSettings`]):
//!
//! - **parse folders**: the project's own trees. Every source file under them
//!   seeds the frontier of files to scan.
//! - **include folders**: trusted search folders. They are settled up front
//!   and consulted last, by direct join.
//! - **resolve folders**: the universe searched, by base name and directory
//!   suffix, to discover which folder an include needs.
//!
//! Each directive of each scanned file is classified in order:
//!
//! 1. It names a file next to the including file: that file is queued, and
//!    nothing else is recorded.
//! 2. Its text is already known to be ambiguous: the location joins the
//!    existing conflict.
//! 3. The resolve universe has exactly one folder for it: the folder is
//!    settled and the file queued. Several folders: a conflict is recorded
//!    and every candidate file is queued.
//! 4. An include folder contains it: the file is queued.
//! 5. Otherwise it is unresolved.
//!
//! Queued files are scanned later in the same run, at most once each.

pub mod aggregate;
pub mod engine;
pub mod settings;
pub mod types;

pub use aggregate::ResultAggregator;
pub use engine::{resolve, resolve_with_progress, ResolutionEngine, ScanProgress};
pub use settings::ResolverSettings;
pub use types::{ConflictedInclude, IncludeLocation, ResolutionResult, UnresolvedInclude};
