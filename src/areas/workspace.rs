use anyhow::Context;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

const SOURCE_EXTENSION: &str = ".py";
const IGNORED_ROOT_DIRS: [&str; 2] = ["build", "dist"];

/// Python files found for a list of targets, plus the targets that were not
/// understood.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub files: Vec<PathBuf>,
    pub rejected: Vec<String>,
}

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    /// Expands targets into source files, in target order.
    ///
    /// Directories are walked in file name order. A target that is not a directory
    /// is taken as a file if it ends in `.py` or has no `.` in it at all.
    pub fn collect_sources<S: AsRef<str>>(&self, targets: &[S]) -> Sources {
        let mut sources = Sources::default();

        for target in targets.iter().map(AsRef::as_ref) {
            if self.path.join(target).is_dir() {
                sources.files.extend(self.list_sources(Path::new(target)));
            } else if target.ends_with(SOURCE_EXTENSION) || !target.contains('.') {
                sources.files.push(PathBuf::from(target));
            } else {
                sources.rejected.push(target.to_string());
            }
        }

        tracing::debug!(
            files = sources.files.len(),
            rejected = sources.rejected.len(),
            "collected sources"
        );

        sources
    }

    fn list_sources(&self, dir: &Path) -> Vec<PathBuf> {
        let root = self.path.join(dir);

        WalkDir::new(&root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !Self::is_ignored(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(error) => {
                    tracing::warn!(%error, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| {
                entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file())
            })
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(SOURCE_EXTENSION))
            .filter_map(|entry| {
                let relative = entry.path().strip_prefix(&root).ok()?;
                Some(dir.join(relative))
            })
            .collect()
    }

    fn is_ignored(entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            return true;
        }

        entry.depth() == 1
            && entry.file_type().is_dir()
            && IGNORED_ROOT_DIRS.contains(&name.as_ref())
    }

    pub fn read_lines(&self, file_path: &Path) -> anyhow::Result<Vec<String>> {
        let content = std::fs::read_to_string(self.path.join(file_path))
            .with_context(|| format!("Unable to read {}", file_path.display()))?;

        Ok(content.lines().map(str::to_string).collect())
    }

    pub fn write_lines<S: AsRef<str>>(&self, file_path: &Path, lines: &[S]) -> anyhow::Result<()> {
        let mut content = String::new();
        for line in lines {
            content.push_str(line.as_ref());
            content.push('\n');
        }
        if lines.is_empty() {
            content.push('\n');
        }

        std::fs::write(self.path.join(file_path), content)
            .with_context(|| format!("Unable to write {}", file_path.display()))?;
        tracing::info!(file = %file_path.display(), "rewrote imports");

        Ok(())
    }
}
