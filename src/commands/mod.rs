//! Command implementations
//!
//! - `sort`: sort the import block of Python sources, optionally showing diffs,
//!   rewriting the files and committing the result

pub mod sort;
