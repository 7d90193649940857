use crate::common::command::{mixed_project_dir, project_dir, run_simp_command};
use crate::common::file::write_generated_sorted_modules;
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn fail_exits_with_unsorted_count(mixed_project_dir: TempDir) {
    run_simp_command(mixed_project_dir.path(), &["--fail"])
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[rstest]
fn fail_succeeds_when_everything_is_sorted(project_dir: TempDir) {
    write_generated_sorted_modules(project_dir.path(), 3);

    run_simp_command(project_dir.path(), &["-f"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[rstest]
#[case(&["--fail", "--execute"])]
#[case(&["-f", "-c"])]
fn fail_is_incompatible_with_writing_flags(mixed_project_dir: TempDir, #[case] args: &[&str]) {
    run_simp_command(mixed_project_dir.path(), args)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "--fail is not compatible with either --commit or --execute",
        ));
}
