// src/config/mod.rs

//! Configuration loading and validation for pagewatch.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like non-zero intervals (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{
    apply_env_overrides, default_config_path, load_and_validate, load_from_path, load_raw,
    TELEGRAM_TOKEN_ENV,
};
pub use model::{ConfigFile, ConfigSection, NotifySection, RawConfigFile};
