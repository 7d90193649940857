use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn project_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn unsorted_module() -> String {
    r#"# something
# something else

from a import b
import foo
# comment goes ABOVE

from d import f
import foo.bar

# comment goes BELOW

END = 'here'
"#
    .to_string()
}

#[fixture]
pub fn sorted_module() -> String {
    r#"# something
# something else

# comment goes ABOVE

from a import b
from d import f
import foo
import foo.bar

# comment goes BELOW

END = 'here'
"#
    .to_string()
}

#[fixture]
pub fn unsorted_module_diff() -> String {
    "[...1 line skipped...]\n # something else\n\n-from a import b\n-import foo\n # comment goes ABOVE\n\n+from a import b\n from d import f\n+import foo\n import foo.bar\n\n[...3 lines skipped...]\n"
        .to_string()
}

/// `a.py` sorted, `b.py` and `pkg/c.py` not
#[fixture]
pub fn mixed_project_dir(
    project_dir: TempDir,
    sorted_module: String,
    unsorted_module: String,
) -> TempDir {
    write_file(FileSpec::new(project_dir.path().join("a.py"), sorted_module));
    write_file(FileSpec::new(
        project_dir.path().join("b.py"),
        unsorted_module.clone(),
    ));
    write_file(FileSpec::new(
        project_dir.path().join("pkg").join("c.py"),
        unsorted_module,
    ));

    project_dir
}

#[fixture]
pub fn committed_project_dir(mixed_project_dir: TempDir) -> TempDir {
    let dir = mixed_project_dir.path();

    run_git_command(dir, &["init", "--quiet"]).assert().success();
    run_git_command(dir, &["add", "."]).assert().success();
    run_git_command(dir, &["commit", "--quiet", "-m", "Initial commit"])
        .assert()
        .success();

    mixed_project_dir
}

pub fn run_simp_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("simp").expect("Failed to find simp binary");
    cmd.envs(vec![("NO_PAGER", "1"), ("NO_COLOR", "1")]);
    cmd.env_remove("SIMP_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn simp_commit(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = run_simp_command(dir, &["--commit"]);
    cmd.args(args);
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
        ("GIT_CONFIG_NOSYSTEM", "1"),
    ]);
    cmd
}

pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::new("git");
    cmd.envs(vec![
        ("GIT_AUTHOR_NAME", "fake_user"),
        ("GIT_AUTHOR_EMAIL", "fake_email@email.com"),
        ("GIT_COMMITTER_NAME", "fake_user"),
        ("GIT_COMMITTER_EMAIL", "fake_email@email.com"),
        ("GIT_CONFIG_NOSYSTEM", "1"),
    ]);
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().expect("Failed to run command");
    String::from_utf8(output.stdout).expect("Output is not valid UTF-8")
}
