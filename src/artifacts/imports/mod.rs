//! Import block sorting
//!
//! The import block is the first run of `import`/`from` lines in a file, together
//! with any blank or comment lines mixed into it. Sorting it moves the comments to
//! the top of the block, deduplicates the imports and orders them by code point.
//! Comments trailing the last import stay below the block. Everything before and
//! after the block is left alone.

use std::collections::BTreeSet;

const IMPORT_PREFIXES: [&str; 2] = ["from ", "import "];

fn is_comment(line: &str) -> bool {
    let line = line.trim();
    line.is_empty() || line.starts_with('#')
}

fn is_import(line: &str) -> bool {
    IMPORT_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Returns `lines` with its import block sorted.
pub fn sort_imports<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    let before = lines
        .iter()
        .take_while(|line| !is_import(line.as_ref()))
        .count();
    let block = lines[before..]
        .iter()
        .take_while(|line| is_import(line.as_ref()) || is_comment(line.as_ref()))
        .count();

    let mut block = &lines[before..before + block];
    // trailing comments belong to whatever follows the block
    while let Some((last, rest)) = block.split_last() {
        if !is_comment(last.as_ref()) {
            break;
        }
        block = rest;
    }
    let after = before + block.len();

    let (comments, imports): (Vec<&str>, Vec<&str>) = block
        .iter()
        .map(AsRef::as_ref)
        .partition(|line| is_comment(line));
    let imports = imports.into_iter().collect::<BTreeSet<_>>();

    lines[..before]
        .iter()
        .map(AsRef::as_ref)
        .chain(comments)
        .chain(imports)
        .chain(lines[after..].iter().map(AsRef::as_ref))
        .map(str::to_string)
        .collect()
}
