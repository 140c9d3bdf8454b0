//! `release.MF`: the release descriptor.

use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::digest::{to_document, write_exact};
use crate::error::Result;
use crate::job::Fingerprint;

/// Release descriptor written as the last member of a release archive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReleaseManifest {
    pub name: String,
    pub version: String,
    pub commit_hash: String,
    pub uncommitted_changes: bool,
    /// Packaged jobs, in declared order.
    #[serde(default)]
    pub jobs: Vec<ReleaseJob>,
    /// Always empty: job archives carry no packages.
    #[serde(default)]
    pub packages: Vec<ReleasePackage>,
}

/// One packaged job. `version` and `fingerprint` carry the same value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleaseJob {
    pub name: String,
    pub version: String,
    pub fingerprint: String,
    /// SHA-1 of the compressed job archive bytes.
    pub sha1: String,
}

impl ReleaseJob {
    pub fn new(name: impl Into<String>, fingerprint: &Fingerprint, sha1: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: fingerprint.to_string(),
            fingerprint: fingerprint.to_string(),
            sha1: sha1.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReleasePackage {
    pub name: String,
    pub version: String,
    pub fingerprint: String,
    pub sha1: String,
    #[serde(default)]
    pub dependencies: Vec<String>,
}

/// Write the `release.MF` document and return the number of bytes written.
pub fn encode_release_manifest<W: Write + ?Sized>(writer: &mut W, manifest: &ReleaseManifest) -> Result<usize> {
    let bytes = to_document(manifest)?;
    write_exact(writer, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest() -> ReleaseManifest {
        ReleaseManifest {
            name: "random-release".into(),
            version: "stub-version".into(),
            commit_hash: "deadbeef".into(),
            uncommitted_changes: false,
            jobs: Vec::new(),
            packages: Vec::new(),
        }
    }

    #[test]
    fn document_carries_identity() {
        let mut buf = Vec::new();
        let written = encode_release_manifest(&mut buf, &manifest()).unwrap();
        assert_eq!(written, buf.len());

        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("---\n"));
        assert!(text.contains("name: random-release"));
        assert!(text.contains("version: stub-version"));
        assert!(text.contains("commit_hash: deadbeef"));
        assert!(text.contains("uncommitted_changes: false"));
    }

    #[test]
    fn jobs_keep_declared_order() {
        let fp = crate::job::Fingerprinter::new().finish();
        let mut m = manifest();
        m.jobs.push(ReleaseJob::new("zeta", &fp, "aa"));
        m.jobs.push(ReleaseJob::new("alpha", &fp, "bb"));

        let mut buf = Vec::new();
        encode_release_manifest(&mut buf, &m).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let zeta = text.find("name: zeta").unwrap();
        let alpha = text.find("name: alpha").unwrap();
        assert!(zeta < alpha);

        let parsed: ReleaseManifest = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed, m);
        assert_eq!(parsed.jobs[0].version, parsed.jobs[0].fingerprint);
    }
}
