use crate::common::command::{project_dir, run_simp_command};
use crate::common::file::write_generated_sorted_modules;
use assert_fs::TempDir;
use fake::Fake;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn report_all_sorted(project_dir: TempDir) {
    let file_count = (1..=5).fake::<usize>();
    write_generated_sorted_modules(project_dir.path(), file_count);

    run_simp_command(project_dir.path(), &[])
        .assert()
        .success()
        .stdout(predicate::eq("All sorted\n"));
}

#[rstest]
fn report_all_sorted_for_empty_directory(project_dir: TempDir) {
    run_simp_command(project_dir.path(), &["."])
        .assert()
        .success()
        .stdout(predicate::eq("All sorted\n"));
}
