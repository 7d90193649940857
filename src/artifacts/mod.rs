//! Data structures and algorithms
//!
//! - `core`: shared utilities (pager wrapper)
//! - `diff`: Myers' diff and its line rendering
//! - `imports`: import block sorting

pub mod core;
pub mod diff;
pub mod imports;
