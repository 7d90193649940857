//! Components of the project being sorted
//!
//! - `git`: the git executable, used to check for a clean tree and to commit
//! - `project`: output writers plus the workspace and git handles for one run
//! - `workspace`: source discovery and line level file access

pub mod git;
pub mod project;
pub mod workspace;
