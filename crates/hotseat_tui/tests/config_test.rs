//! Loading settings from TOML files.

use clap::Parser;
use hotseat_tui::{Cli, TuiConfig};
use std::io::Write;
use std::path::PathBuf;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_config() {
    let file = write_config(
        r#"
log_file = "/var/tmp/hotseat-test.log"
log_filter = "hotseat_tictactoe=debug"
mouse = false
"#,
    );

    let config = TuiConfig::from_file(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("/var/tmp/hotseat-test.log"));
    assert_eq!(config.log_filter(), "hotseat_tictactoe=debug");
    assert!(!*config.mouse());
}

#[test]
fn test_invalid_toml_is_rejected() {
    let file = write_config("mouse = \"sometimes\"");
    let err = TuiConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_cli_overrides_file() {
    let file = write_config("log_file = \"from-file.log\"\nmouse = true\n");
    let path = file.path().to_str().unwrap();

    let cli = Cli::parse_from(["hotseat", "--config", path, "--no-mouse"]);
    let config = cli.load_config().unwrap();

    assert_eq!(config.log_file(), &PathBuf::from("from-file.log"));
    assert!(!*config.mouse());
}
