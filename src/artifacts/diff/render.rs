//! Line rendering for edit scripts
//!
//! `render` shows every operation. `short_render` keeps the changed region plus a
//! few unchanged lines on each side and replaces everything else with a
//! `[...N lines skipped...]` marker.

use crate::artifacts::diff::edit::Edit;
use std::fmt::Display;

pub const DEFAULT_CONTEXT: usize = 3;

pub fn render<T: Display>(script: &[Edit<T>]) -> Vec<String> {
    script.iter().map(Edit::as_string).collect()
}

/// Renders the changed region of `script` with `context` unchanged lines around it.
///
/// Returns an empty vector when the script contains no change at all.
pub fn short_render<T: Display>(script: &[Edit<T>], context: usize) -> Vec<String> {
    let prefix = script.iter().take_while(|edit| edit.is_keep()).count();
    let suffix = script.iter().rev().take_while(|edit| edit.is_keep()).count();

    if prefix + suffix >= script.len() {
        return Vec::new();
    }

    let start = prefix.saturating_sub(context);
    let end = (script.len() - suffix).saturating_add(context).min(script.len());
    let skipped_after = script.len() - end;

    let mut lines = Vec::with_capacity(end - start + 2);
    if start > 0 {
        lines.push(skipped(start));
    }
    lines.extend(render(&script[start..end]));
    if skipped_after > 0 {
        lines.push(skipped(skipped_after));
    }

    lines
}

fn skipped(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("[...{count} line{plural} skipped...]")
}
