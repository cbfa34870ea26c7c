//! End-to-end tests for the typeseq harness binary

use assert_cmd::cargo;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Get the harness binary, isolated from the caller's environment
fn typeseq_cli() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("typeseq"));
    cmd.env_remove("TYPESEQ_CONFIG")
        .env_remove("TYPESEQ_QUIET")
        .env_remove("TYPESEQ_FULL_PATH")
        .env_remove("TYPESEQ_COLOR")
        .env_remove("RUST_LOG")
        .arg("--color=never");
    cmd
}

mod run {
    use super::*;

    #[test]
    fn default_runs_every_suite() {
        let temp = TempDir::new().unwrap();

        typeseq_cli()
            .current_dir(temp.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("suite.rs:"))
            .stdout(predicate::str::contains(" OK    "))
            .stdout(predicate::str::contains("Total   "))
            .stdout(predicate::str::contains("PASSED  "))
            .stdout(predicate::str::contains("FAILED").not())
            .stdout(predicate::str::contains("FAIL").not());
    }

    #[test]
    fn explicit_run_matches_default() {
        let temp = TempDir::new().unwrap();

        let default = typeseq_cli().current_dir(temp.path()).output().unwrap();
        let explicit = typeseq_cli()
            .current_dir(temp.path())
            .arg("run")
            .output()
            .unwrap();

        assert!(default.status.success());
        assert_eq!(default.stdout, explicit.stdout);
    }

    #[test]
    fn selected_suite_only() {
        typeseq_cli()
            .args(["run", "--suite", "reverse"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Total   4 tests"))
            .stdout(predicate::str::contains("ReverseT"))
            .stdout(predicate::str::contains("SortedT").not());
    }

    #[test]
    fn unknown_suite_is_rejected() {
        typeseq_cli()
            .args(["run", "--suite", "shuffle"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("shuffle"));
    }

    #[test]
    fn quiet_prints_only_the_report() {
        typeseq_cli()
            .args(["--quiet", "run", "--suite", "filter"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("------"))
            .stdout(predicate::str::contains("PASSED  2 tests"));
    }

    #[test]
    fn no_expression_hides_expression_text() {
        typeseq_cli()
            .args(["--no-expression", "run", "--suite", "filter"])
            .assert()
            .success()
            .stdout(predicate::str::contains("FilterT").not())
            .stdout(predicate::str::contains(" OK\n"));
    }

    #[test]
    fn full_path_keeps_directories() {
        typeseq_cli()
            .args(["--full-path", "run", "--suite", "filter"])
            .assert()
            .success()
            .stdout(predicate::str::contains("src/suite.rs:"));
    }
}

mod config {
    use super::*;

    #[test]
    fn config_file_in_working_directory_is_used() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("typeseq.toml"), "print_ok = false\n").unwrap();

        typeseq_cli()
            .current_dir(temp.path())
            .args(["run", "--suite", "concat"])
            .assert()
            .success()
            .stdout(predicate::str::contains(" OK ").not())
            .stdout(predicate::str::contains("Total   3 tests"));
    }

    #[test]
    fn explicit_config_path() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("harness.toml");
        std::fs::write(&path, "print_expression = false\n").unwrap();

        typeseq_cli()
            .arg("--config")
            .arg(&path)
            .args(["run", "--suite", "slice"])
            .assert()
            .success()
            .stdout(predicate::str::contains("HeadT").not());
    }

    #[test]
    fn missing_explicit_config_fails() {
        let temp = TempDir::new().unwrap();

        typeseq_cli()
            .current_dir(temp.path())
            .args(["--config", "nope.toml"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("config not found"));
    }

    #[test]
    fn invalid_config_fails() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("typeseq.toml"), "colour = \"never\"\n").unwrap();

        typeseq_cli()
            .current_dir(temp.path())
            .assert()
            .code(2)
            .stderr(predicate::str::contains("failed to parse"));
    }

    #[test]
    fn flags_override_the_file() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("typeseq.toml"), "print_ok = true\n").unwrap();

        typeseq_cli()
            .current_dir(temp.path())
            .args(["--quiet", "run", "--suite", "search"])
            .assert()
            .success()
            .stdout(predicate::str::contains(" OK ").not());
    }

    #[test]
    fn environment_overrides_the_file() {
        let temp = TempDir::new().unwrap();

        typeseq_cli()
            .current_dir(temp.path())
            .env("TYPESEQ_QUIET", "true")
            .args(["run", "--suite", "search"])
            .assert()
            .success()
            .stdout(predicate::str::contains(" OK ").not());
    }
}

mod list {
    use super::*;

    #[test]
    fn lists_every_suite() {
        typeseq_cli()
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("search"))
            .stdout(predicate::str::contains("filter"))
            .stdout(predicate::str::contains("concat"))
            .stdout(predicate::str::contains("reverse"))
            .stdout(predicate::str::contains("slice"))
            .stdout(predicate::str::contains("sort"));
    }
}
