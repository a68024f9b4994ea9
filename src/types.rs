use std::str::FromStr;
use serde::Deserialize;

/// Where last-known fingerprints are kept between checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintStorageMode {
    /// One file per resource under `<state_dir>/fingerprints/`.
    File,
    /// In memory only (every resource is first-seen again after a restart).
    Memory,
}

impl Default for FingerprintStorageMode {
    fn default() -> Self {
        FingerprintStorageMode::File
    }
}

impl FromStr for FingerprintStorageMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(FingerprintStorageMode::File),
            "memory" => Ok(FingerprintStorageMode::Memory),
            other => Err(format!(
                "invalid fingerprint_storage: {other} (expected \"file\" or \"memory\")"
            )),
        }
    }
}

/// Transport used to deliver change notifications.
///
/// - `Log`: write the message to the log only (default).
/// - `Telegram`: send the message to a chat through the Telegram Bot API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotifyKind {
    Log,
    Telegram,
}

impl Default for NotifyKind {
    fn default() -> Self {
        NotifyKind::Log
    }
}

impl FromStr for NotifyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "log" => Ok(NotifyKind::Log),
            "telegram" => Ok(NotifyKind::Telegram),
            other => Err(format!(
                "invalid notify kind: {other} (expected \"log\" or \"telegram\")"
            )),
        }
    }
}
