//! Deterministic stub release archives.
//!
//! A release archive is a gzip-compressed tar stream containing:
//! - `./jobs/`: directory entry
//! - `./jobs/<job>.tgz`: one nested job archive per job
//! - `./release.MF`: YAML release manifest
//!
//! Each job archive contains `./monit` (empty monitor stub) and `./job.MF`
//! (YAML job manifest). A job's [`Fingerprint`] is derived from the digests
//! and modes of those members, never from timestamps or ownership.

pub mod archive;
pub mod deployment;
pub mod digest;
pub mod error;
pub mod job;
pub mod options;
pub mod release;

// Convenience re-exports
pub use archive::{find_member, read_members, ArchiveMember, EntryHeader, EntryKind};
pub use deployment::{Deployment, DeploymentSource, JobReference, Release, SourceFormat};
pub use error::{Error, ErrorClass, Result};
pub use job::{build_job_archive, Fingerprint, Fingerprinter, JobMember, JOB_MEMBERS};
pub use options::{ArchiveOptions, EntryClock, ReleaseOptions};
pub use release::{build_release_archive, ReleaseJob, ReleaseManifest};
