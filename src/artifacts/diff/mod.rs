//! Line diffing
//!
//! - `edit`: edit operations and the edit script type
//! - `myers`: Myers' shortest edit script search
//! - `render`: full and windowed line rendering of an edit script
//!
//! `diff_lines` and `short_diff_lines` run the search and render the result in
//! one call, which is what the sort command needs for `--diffs`.

pub mod edit;
pub mod myers;
pub mod render;

pub use edit::{Edit, EditScript, Tag};
pub use myers::{DiffAlgorithm, DiffError, MyersDiff, compute_edit_script};
pub use render::{DEFAULT_CONTEXT, render, short_render};

use std::fmt::Display;

pub fn diff_lines<T: Eq + Clone + Display>(a: &[T], b: &[T]) -> Result<Vec<String>, DiffError> {
    let script = compute_edit_script(a, b)?;
    Ok(render(&script))
}

pub fn short_diff_lines<T: Eq + Clone + Display>(
    a: &[T],
    b: &[T],
    context: usize,
) -> Result<Vec<String>, DiffError> {
    let script = compute_edit_script(a, b)?;
    Ok(short_render(&script, context))
}
