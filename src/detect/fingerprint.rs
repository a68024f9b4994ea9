use std::fmt;

use blake3::Hasher;

/// Number of hex characters in a fingerprint (BLAKE3-256).
pub const FINGERPRINT_HEX_LEN: usize = 64;

/// Content digest of a fetched page, stored as lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint(String);

impl Fingerprint {
    /// Fingerprint of the given content bytes.
    pub fn of(content: impl AsRef<[u8]>) -> Self {
        let mut hasher = Hasher::new();
        hasher.update(content.as_ref());
        Self(hasher.finalize().to_hex().to_string())
    }

    /// Parse a stored hex digest. Surrounding whitespace is ignored; anything
    /// that is not exactly 64 hex digits is rejected.
    pub fn from_hex(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.len() != FINGERPRINT_HEX_LEN
            || !trimmed.chars().all(|c| c.is_ascii_hexdigit())
        {
            return None;
        }
        Some(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage key for a resource identifier.
///
/// Hashing the full identifier keeps distinct URLs in distinct slots, which a
/// character-substitution scheme (`/` -> `_`, scheme stripped) cannot.
pub fn resource_key(url: &str) -> String {
    blake3::hash(url.as_bytes()).to_hex().to_string()
}
