//! `job.MF`: the job descriptor.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

use super::EncodedMember;
use crate::digest::{sha1_hex, to_document, write_exact};
use crate::error::Result;

/// Job descriptor. Empty optional fields are left out of the document entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct JobManifest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub templates: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, serde_yaml::Value>,
}

impl JobManifest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Write the `job.MF` document for `name` and return its size and SHA-1.
pub fn encode_job_manifest<W: Write + ?Sized>(writer: &mut W, name: &str) -> Result<EncodedMember> {
    let bytes = to_document(&JobManifest::named(name))?;
    let size = write_exact(writer, &bytes)?;
    Ok(EncodedMember {
        size: size as u64,
        digest: sha1_hex(&bytes),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_vector() {
        let mut buf = Vec::new();
        let member = encode_job_manifest(&mut buf, "random-job-name").unwrap();
        assert_eq!(buf, b"---\nname: random-job-name\n");
        assert_eq!(member.size, 26);
        assert_eq!(member.digest, "3b4346b4c483e8cae92e019acdae42243a8bee11");
    }

    #[test]
    fn optional_fields_are_absent() {
        let mut buf = Vec::new();
        encode_job_manifest(&mut buf, "web").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(!text.contains("packages"));
        assert!(!text.contains("templates"));
        assert!(!text.contains("properties"));
    }

    #[test]
    fn populated_fields_are_emitted() {
        let mut manifest = JobManifest::named("web");
        manifest.packages.push("nginx".into());
        manifest
            .templates
            .insert("ctl.erb".into(), "bin/ctl".into());
        let text = serde_yaml::to_string(&manifest).unwrap();
        assert!(text.contains("packages:\n- nginx"));
        assert!(text.contains("ctl.erb: bin/ctl"));
        assert!(!text.contains("properties"));
    }
}
