use std::io::Write;

use super::{validate_job_name, Fingerprint, Fingerprinter, JOB_MEMBERS};
use crate::archive::tar_write::{append_member, create_archive, finish_archive};
use crate::archive::EntryHeader;
use crate::error::Result;
use crate::options::ArchiveOptions;

/// Write the job archive for `name` to `writer` and return its fingerprint.
///
/// Both the tar trailer and the gzip trailer are written before this returns
/// `Ok`. On error the sink holds a partial stream and must be discarded.
pub fn build_job_archive<W: Write>(writer: W, name: &str, options: &ArchiveOptions) -> Result<Fingerprint> {
    validate_job_name(name)?;

    let mut tar = create_archive(writer, options);
    let mut fingerprinter = Fingerprinter::new();
    let mut payload = Vec::new();

    for member in JOB_MEMBERS {
        payload.clear();
        let encoded = member.encode(&mut payload, name)?;
        let header = EntryHeader::regular(member.path(), encoded.size, options.clock.mtime());
        append_member(&mut tar, &header, &payload)?;
        fingerprinter.record(member.fingerprint_tag(), &encoded.digest, header.mode);
    }

    finish_archive(tar)?;

    let fingerprint = fingerprinter.finish();
    tracing::debug!(job = name, fingerprint = %fingerprint, "built job archive");
    Ok(fingerprint)
}
