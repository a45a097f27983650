//! Shared helpers for dialcodes-cli integration tests.

use assert_cmd::Command;

/// Returns a `dialcodes-cli` command isolated from the caller's environment.
pub fn dialcodes_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dialcodes-cli");
    cmd.env_remove("DIALCODES_INPUT")
        .env_remove("DIALCODES_LANG")
        .env_remove("RUST_LOG");
    cmd
}
