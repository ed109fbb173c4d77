use crate::*;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use selectel_fs::error::Result;
use selectel_fs::storage::SelectelFs;

pub fn tests(adapter: &SelectelFs, tests: &mut Vec<Trial>) {
    tests.extend(async_trials!(
        adapter,
        test_cli_help_lists_commands,
        test_cli_requires_credentials,
        test_cli_rejects_unknown_command
    ));
}

async fn test_cli_help_lists_commands(_adapter: SelectelFs) -> Result<()> {
    selectel_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ls"))
        .stdout(predicate::str::contains("mv"))
        .stdout(predicate::str::contains("url"));
    Ok(())
}

async fn test_cli_requires_credentials(_adapter: SelectelFs) -> Result<()> {
    selectel_cmd()
        .arg("ls")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is required but not found"))
        .stderr(predicate::str::contains("STORAGE_USERNAME"));
    Ok(())
}

async fn test_cli_rejects_unknown_command(_adapter: SelectelFs) -> Result<()> {
    selectel_cmd()
        .arg("chmod")
        .arg("public")
        .assert()
        .failure();
    Ok(())
}
