//! Tests for `request_timeout_seconds` loading from the environment and CLI.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use rstest::rstest;

use crate::BlockadeConfig;

fn load_with(env_timeout: Option<&str>, cli_args: &[&str]) -> BlockadeConfig {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("BLOCKADE_REQUEST_TIMEOUT_SECONDS", env_timeout),
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let mut args: Vec<OsString> = vec![OsString::from("blockade")];
    args.extend(cli_args.iter().map(OsString::from));

    BlockadeConfig::load_from_iter(args).expect("config should load")
}

#[rstest]
fn timeout_defaults_to_twenty_seconds() {
    assert_eq!(BlockadeConfig::default().request_timeout_seconds, 20);
}

#[rstest]
fn timeout_loads_from_environment_variable() {
    let config = load_with(Some("45"), &[]);
    assert_eq!(
        config.request_timeout_seconds, 45,
        "expected BLOCKADE_REQUEST_TIMEOUT_SECONDS to set the timeout"
    );
}

#[rstest]
fn cli_flag_overrides_environment_timeout() {
    let config = load_with(Some("45"), &["--request-timeout-seconds", "3"]);
    assert_eq!(config.request_timeout_seconds, 3, "CLI should win");
}

#[rstest]
fn action_flags_load_from_cli() {
    let config = load_with(None, &["--block", "12", "-a", "https://daemo.example/api/"]);
    assert_eq!(config.block.as_deref(), Some("12"));
    assert_eq!(config.api_url.as_deref(), Some("https://daemo.example/api/"));
}
