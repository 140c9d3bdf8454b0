//! Job fingerprints.
//!
//! Input: `"v2"` followed by `tag ++ sha1 ++ file_mode` for each member, in
//! write order, with no separators. Output: SHA-1 hex of that input.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::digest::sha1_hex;

/// Version marker leading every fingerprint input.
pub const FINGERPRINT_VERSION: &str = "v2";

/// File-type bits of a regular file (`S_IFREG`).
const REGULAR_FILE_TYPE: u32 = 0o100000;

/// Stable identity of a packaged job: 40 lower-case hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_well_formed(s: &str) -> bool {
        s.len() == 40 && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Mode string as it appears in fingerprint input (`0o644` becomes `"100644"`).
pub fn file_mode_string(permissions: u32) -> String {
    format!("{:o}", REGULAR_FILE_TYPE | (permissions & 0o7777))
}

/// One member's contribution to a fingerprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintComponent {
    pub tag: &'static str,
    pub digest: String,
    pub mode: String,
}

/// Accumulates members in write order.
#[derive(Debug, Clone, Default)]
pub struct Fingerprinter {
    components: Vec<FingerprintComponent>,
}

impl Fingerprinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tag: &'static str, digest: &str, permissions: u32) {
        self.components.push(FingerprintComponent {
            tag,
            digest: digest.to_string(),
            mode: file_mode_string(permissions),
        });
    }

    pub fn components(&self) -> &[FingerprintComponent] {
        &self.components
    }

    /// Concatenated hash input.
    pub fn input(&self) -> String {
        let mut input = String::from(FINGERPRINT_VERSION);
        for c in &self.components {
            input.push_str(c.tag);
            input.push_str(&c.digest);
            input.push_str(&c.mode);
        }
        input
    }

    pub fn finish(&self) -> Fingerprint {
        Fingerprint(sha1_hex(self.input().as_bytes()))
    }
}
