use crate::common::command::{project_dir, run_simp_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn reject_unknown_targets(project_dir: TempDir) {
    write_file(FileSpec::new(
        project_dir.path().join("notes.txt"),
        "import b\nimport a\n".to_string(),
    ));

    run_simp_command(project_dir.path(), &["notes.txt"])
        .assert()
        .success()
        .stdout(predicate::eq("All sorted\n"))
        .stderr(predicate::str::contains("Do not understand file notes.txt"));
}

#[rstest]
fn extensionless_scripts_are_sorted(project_dir: TempDir) {
    write_file(FileSpec::new(
        project_dir.path().join("script"),
        "#!/usr/bin/env python3\nimport b\nimport a\n".to_string(),
    ));

    run_simp_command(project_dir.path(), &["script", "--execute"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("script\n"));

    pretty_assertions::assert_eq!(
        std::fs::read_to_string(project_dir.path().join("script")).unwrap(),
        "#!/usr/bin/env python3\nimport a\nimport b\n"
    );
}

#[rstest]
fn missing_file_target_fails(project_dir: TempDir) {
    run_simp_command(project_dir.path(), &["missing.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.py"));
}
