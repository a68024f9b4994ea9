// tests/config_loading.rs

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tempfile::{tempdir, NamedTempFile};

use pagewatch::cli::{CliArgs, Command};
use pagewatch::config::{
    apply_env_overrides, load_and_validate, load_raw, ConfigFile, RawConfigFile,
};
use pagewatch::errors::PagewatchError;
use pagewatch::types::{FingerprintStorageMode, NotifyKind};
use pagewatch_test_utils::builders::ConfigFileBuilder;
use pagewatch_test_utils::init_tracing;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn full_config_is_parsed() -> TestResult {
    init_tracing();
    let file = write_config(
        r#"
[config]
interval_secs = 60
fetch_timeout_secs = 5
watchlist_file = "lists/pages.txt"
state_dir = "/var/lib/pagewatch"
fingerprint_storage = "memory"
user_agent = "custom/1.0"

[notify]
kind = "telegram"
bot_token = "123:abc"
chat_id = "42"
announce_start = false
"#,
    );

    let cfg = load_and_validate(file.path())?;
    assert_eq!(cfg.config.interval(), Duration::from_secs(60));
    assert_eq!(cfg.config.fetch_timeout(), Duration::from_secs(5));
    assert_eq!(cfg.config.watchlist_file, PathBuf::from("lists/pages.txt"));
    assert_eq!(
        cfg.config.fingerprint_dir(),
        PathBuf::from("/var/lib/pagewatch/fingerprints")
    );
    assert_eq!(cfg.config.fingerprint_storage, FingerprintStorageMode::Memory);
    assert_eq!(cfg.config.user_agent, "custom/1.0");
    assert_eq!(cfg.notify.kind, NotifyKind::Telegram);
    assert_eq!(cfg.notify.chat_id.as_deref(), Some("42"));
    assert!(!cfg.notify.announce_start);
    Ok(())
}

#[test]
fn empty_file_uses_defaults() -> TestResult {
    let file = write_config("");
    let cfg = load_and_validate(file.path())?;

    assert_eq!(cfg.config.interval_secs, 600);
    assert_eq!(cfg.config.fetch_timeout_secs, 30);
    assert_eq!(cfg.config.watchlist_file, PathBuf::from("watchlist.txt"));
    assert_eq!(cfg.config.fingerprint_storage, FingerprintStorageMode::File);
    assert!(cfg.config.user_agent.starts_with("pagewatch/"));
    assert_eq!(cfg.notify.kind, NotifyKind::Log);
    assert!(cfg.notify.announce_start);
    Ok(())
}

#[test]
fn zero_interval_is_rejected() {
    let file = write_config("[config]\ninterval_secs = 0\n");
    match load_and_validate(file.path()) {
        Err(PagewatchError::ConfigError(msg)) => assert!(msg.contains("interval_secs")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn zero_fetch_timeout_is_rejected() {
    let file = write_config("[config]\nfetch_timeout_secs = 0\n");
    match load_and_validate(file.path()) {
        Err(PagewatchError::ConfigError(msg)) => assert!(msg.contains("fetch_timeout_secs")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn telegram_without_credentials_is_rejected() {
    let file = write_config("[notify]\nkind = \"telegram\"\nchat_id = \"42\"\n");
    match load_and_validate(file.path()) {
        Err(PagewatchError::ConfigError(msg)) => assert!(msg.contains("bot_token")),
        other => panic!("Expected ConfigError, got: {:?}", other),
    }
}

#[test]
fn unknown_enum_value_is_a_toml_error() {
    let file = write_config("[notify]\nkind = \"carrier-pigeon\"\n");
    match load_and_validate(file.path()) {
        Err(PagewatchError::TomlError(_)) => {}
        other => panic!("Expected TomlError, got: {:?}", other),
    }
}

#[test]
fn missing_default_config_falls_back_but_explicit_path_fails() -> TestResult {
    let dir = tempdir()?;
    let missing = dir.path().join("Pagewatch.toml");

    let raw = load_raw(&missing, false)?;
    assert_eq!(raw.config.interval_secs, 600);

    match load_raw(&missing, true) {
        Err(PagewatchError::IoError(_)) => {}
        other => panic!("Expected IoError, got: {:?}", other),
    }
    Ok(())
}

#[test]
fn env_token_overrides_file_token() -> TestResult {
    let mut raw = ConfigFileBuilder::new().telegram("from-file", "42").raw();

    apply_env_overrides(&mut raw, Some("   ".to_string()));
    assert_eq!(raw.notify.bot_token.as_deref(), Some("from-file"));

    apply_env_overrides(&mut raw, Some("from-env".to_string()));
    assert_eq!(raw.notify.bot_token.as_deref(), Some("from-env"));

    let cfg = ConfigFile::try_from(raw)?;
    assert_eq!(cfg.notify.bot_token.as_deref(), Some("from-env"));
    Ok(())
}

#[test]
fn env_token_satisfies_telegram_validation() -> TestResult {
    let mut raw = RawConfigFile::default();
    raw.notify.kind = NotifyKind::Telegram;
    raw.notify.chat_id = Some("42".to_string());
    assert!(ConfigFile::try_from(raw.clone()).is_err());

    apply_env_overrides(&mut raw, Some("secret".to_string()));
    ConfigFile::try_from(raw)?;
    Ok(())
}

#[test]
fn cli_flags_override_file_values() -> TestResult {
    let args = CliArgs::try_parse_from([
        "pagewatch",
        "--watchlist",
        "other.txt",
        "run",
        "--once",
        "--interval",
        "5",
    ])?;
    assert!(matches!(args.command, Command::Run { once: true, .. }));

    let mut raw = RawConfigFile::default();
    args.apply_overrides(&mut raw);
    let cfg = ConfigFile::try_from(raw)?;

    assert_eq!(cfg.config.watchlist_file, PathBuf::from("other.txt"));
    assert_eq!(cfg.config.interval_secs, 5);
    Ok(())
}

#[test]
fn cli_interval_zero_fails_validation() -> TestResult {
    let args = CliArgs::try_parse_from(["pagewatch", "run", "--interval", "0"])?;
    let mut raw = RawConfigFile::default();
    args.apply_overrides(&mut raw);
    assert!(ConfigFile::try_from(raw).is_err());
    Ok(())
}

#[test]
fn management_subcommands_parse() -> TestResult {
    let add = CliArgs::try_parse_from(["pagewatch", "add", "https://a.example"])?;
    assert!(matches!(add.command, Command::Add { ref url } if url == "https://a.example"));

    let remove = CliArgs::try_parse_from(["pagewatch", "remove", "https://a.example"])?;
    assert!(matches!(remove.command, Command::Remove { .. }));

    let list = CliArgs::try_parse_from(["pagewatch", "list", "--config", "x.toml"])?;
    assert!(matches!(list.command, Command::List));
    assert_eq!(list.config, Some(PathBuf::from("x.toml")));

    assert!(CliArgs::try_parse_from(["pagewatch"]).is_err());
    Ok(())
}
