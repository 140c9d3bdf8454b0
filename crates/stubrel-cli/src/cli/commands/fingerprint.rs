use anyhow::Context;

use super::super::args::FingerprintArgs;
use crate::exit_codes;
use stubrel_core::{build_job_archive, ArchiveOptions};

pub fn run(args: FingerprintArgs) -> anyhow::Result<i32> {
    // Fingerprints do not depend on archive bytes, so the archive is discarded.
    let options = ArchiveOptions::default();
    for job in &args.jobs {
        let fingerprint = build_job_archive(std::io::sink(), job, &options)
            .with_context(|| format!("failed to fingerprint job '{}'", job))?;
        println!("{}  {}", fingerprint, job);
    }
    Ok(exit_codes::SUCCESS)
}
