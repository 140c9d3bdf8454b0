use indexmap::IndexSet;
use std::io::Write;

use super::manifest::{encode_release_manifest, ReleaseJob, ReleaseManifest};
use crate::archive::tar_write::{append_member, create_archive, finish_archive};
use crate::archive::EntryHeader;
use crate::digest::sha1_hex;
use crate::error::{Error, Result};
use crate::job::{build_job_archive, validate_job_name};
use crate::options::ReleaseOptions;

/// Directory entry that precedes every job archive.
pub const JOBS_DIR: &str = "./jobs/";
/// Release descriptor, always the last member.
pub const RELEASE_MANIFEST_PATH: &str = "./release.MF";

pub fn job_archive_path(job: &str) -> String {
    format!("{JOBS_DIR}{job}.tgz")
}

/// Write the release archive for `name` to `writer`.
///
/// # Layout
///
/// 1. `./jobs/` directory
/// 2. `./jobs/<job>.tgz` per job, in `jobs` order
/// 3. `./release.MF`
///
/// Jobs are validated before anything is written. Any later failure aborts
/// the build and leaves `writer` holding unusable bytes.
pub fn build_release_archive<W: Write>(
    writer: W,
    name: &str,
    jobs: &[String],
    options: &ReleaseOptions,
) -> Result<ReleaseManifest> {
    let mut seen = IndexSet::with_capacity(jobs.len());
    for job in jobs {
        validate_job_name(job)?;
        if !seen.insert(job.as_str()) {
            return Err(Error::InvalidJob {
                name: job.clone(),
                reason: "job listed more than once",
            });
        }
    }

    let clock = options.archive.clock;
    let mut tar = create_archive(writer, &options.archive);

    append_member(&mut tar, &EntryHeader::directory(JOBS_DIR, clock.mtime()), &[])?;

    let mut manifest = ReleaseManifest {
        name: name.to_string(),
        version: options.version.clone(),
        commit_hash: options.commit_hash.clone(),
        uncommitted_changes: options.uncommitted_changes,
        jobs: Vec::with_capacity(jobs.len()),
        packages: Vec::new(),
    };

    let mut job_bytes = Vec::new();
    for job in jobs {
        job_bytes.clear();
        let fingerprint = build_job_archive(&mut job_bytes, job, &options.archive)?;
        let path = job_archive_path(job);
        let header = EntryHeader::regular(path, job_bytes.len() as u64, clock.mtime());
        append_member(&mut tar, &header, &job_bytes)?;
        manifest
            .jobs
            .push(ReleaseJob::new(job.as_str(), &fingerprint, sha1_hex(&job_bytes)));
    }

    let mut manifest_bytes = Vec::new();
    let size = encode_release_manifest(&mut manifest_bytes, &manifest)?;
    append_member(
        &mut tar,
        &EntryHeader::regular(RELEASE_MANIFEST_PATH, size as u64, clock.mtime()),
        &manifest_bytes,
    )?;

    finish_archive(tar)?;

    tracing::info!(release = name, jobs = manifest.jobs.len(), "built release archive");
    Ok(manifest)
}
