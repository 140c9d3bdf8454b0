//! Job archives: `./monit` then `./job.MF`, fingerprinted in that order.

pub mod archive;
pub mod fingerprint;
pub mod manifest;
pub mod monit;

use std::io::Write;

use crate::error::{Error, Result};

pub use archive::build_job_archive;
pub use fingerprint::{Fingerprint, Fingerprinter};
pub use manifest::{encode_job_manifest, JobManifest};
pub use monit::encode_monit;

/// Size and SHA-1 of a member payload as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedMember {
    pub size: u64,
    pub digest: String,
}

/// Members of a job archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobMember {
    Monit,
    Manifest,
}

/// Write order of job archive members. Archive consumers and fingerprints
/// both depend on it.
pub const JOB_MEMBERS: [JobMember; 2] = [JobMember::Monit, JobMember::Manifest];

impl JobMember {
    pub fn path(self) -> &'static str {
        match self {
            JobMember::Monit => "./monit",
            JobMember::Manifest => "./job.MF",
        }
    }

    /// Tag used in fingerprint input. `job.MF` is still tagged `spec`.
    pub fn fingerprint_tag(self) -> &'static str {
        match self {
            JobMember::Monit => "monit",
            JobMember::Manifest => "spec",
        }
    }

    pub(crate) fn encode<W: Write + ?Sized>(self, writer: &mut W, job: &str) -> Result<EncodedMember> {
        match self {
            JobMember::Monit => encode_monit(writer),
            JobMember::Manifest => encode_job_manifest(writer, job),
        }
    }
}

/// A job name must be usable verbatim as a path segment.
pub fn validate_job_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        "job name is empty"
    } else if name.contains('/') {
        "job name contains '/'"
    } else if name.contains('\0') {
        "job name contains NUL"
    } else if name == "." || name == ".." {
        "job name is a relative path component"
    } else {
        return Ok(());
    };
    Err(Error::InvalidJob {
        name: name.to_string(),
        reason,
    })
}
