use crate::areas::git::COMMIT_MESSAGE;
use crate::areas::project::Project;
use crate::artifacts::diff::short_diff_lines;
use crate::artifacts::imports::sort_imports;
use colored::Colorize;
use derive_new::new;
use std::io::Write;
use std::path::Path;

const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct SortOptions {
    pub targets: Vec<String>,
    pub commit: bool,
    pub diffs: bool,
    pub execute: bool,
    pub fail: bool,
    pub context: usize,
}

impl Project {
    /// Sorts the imports of every source file named by the targets.
    ///
    /// Returns the process exit code: the number of unsorted files with `--fail`
    /// (saturated at 255), 1 when `--commit` finds a dirty workspace, else 0.
    pub fn sort(&self, options: &SortOptions) -> anyhow::Result<u8> {
        if options.fail && (options.commit || options.execute) {
            anyhow::bail!("--fail is not compatible with either --commit or --execute");
        }

        if options.commit && !self.git().is_clean()? {
            writeln!(
                self.error_writer(),
                "simp --commit: Cannot commit with changes in the workspace"
            )?;
            return Ok(1);
        }

        let sources = self.workspace().collect_sources(&options.targets);
        for target in &sources.rejected {
            writeln!(self.error_writer(), "Do not understand file {target}")?;
        }

        let mut disordered = 0usize;
        for file in &sources.files {
            let lines = self.workspace().read_lines(file)?;
            let sorted = sort_imports(&lines);
            if lines == sorted {
                continue;
            }
            tracing::info!(file = %file.display(), "imports out of order");

            if options.diffs {
                if disordered > 0 {
                    writeln!(self.writer(), "\n{}\n", "-".repeat(SEPARATOR_WIDTH))?;
                }
                self.print_import_diff(file, &lines, &sorted, options.context)?;
            }
            disordered += 1;

            if !options.fail {
                writeln!(self.writer(), "{}", file.display())?;
            }

            if options.execute || options.commit {
                self.workspace().write_lines(file, &sorted)?;
            }
        }

        if options.fail {
            return Ok(u8::try_from(disordered).unwrap_or(u8::MAX));
        }

        if disordered == 0 {
            writeln!(self.writer(), "All sorted")?;
            return Ok(0);
        }

        if options.commit {
            let output = self.git().commit_all(COMMIT_MESSAGE)?;
            writeln!(self.writer())?;
            write!(self.writer(), "{output}")?;
        } else {
            writeln!(self.writer())?;
            writeln!(
                self.writer(),
                "{}",
                unsorted_summary(disordered, sources.files.len())
            )?;
        }

        Ok(0)
    }

    fn print_import_diff(
        &self,
        file: &Path,
        lines: &[String],
        sorted: &[String],
        context: usize,
    ) -> anyhow::Result<()> {
        writeln!(self.writer(), "{}", format!("{}:", file.display()).bold())?;
        writeln!(self.writer())?;

        for line in short_diff_lines(lines, sorted, context)? {
            let line = match line.chars().next() {
                Some('+') => line.green(),
                Some('-') => line.red(),
                Some('[') => line.cyan(),
                _ => line.normal(),
            };
            writeln!(self.writer(), "{line}")?;
        }

        Ok(())
    }
}

fn unsorted_summary(disordered: usize, total: usize) -> String {
    let plural = if total == 1 { "" } else { "s" };
    format!("{disordered} of {total} Python file{plural} had unsorted includes")
}
