use anyhow::{bail, Context};
use std::fs;

use super::super::args::BuildArgs;
use super::load_source;
use crate::exit_codes;
use stubrel_core::build_release_archive;

pub fn run(args: BuildArgs) -> anyhow::Result<i32> {
    let Some(source) = load_source(&args.manifest_path, args.source_format.into())? else {
        return Ok(exit_codes::CONFIG_ERROR);
    };
    let deployment = source.deployment();
    let options = args.release.to_options();

    if deployment.is_empty() {
        eprintln!(
            "warning: no job references found in {}",
            args.manifest_path.display()
        );
        return Ok(exit_codes::SUCCESS);
    }

    fs::create_dir_all(&args.output_dir).with_context(|| {
        format!(
            "failed to create output directory: {}",
            args.output_dir.display()
        )
    })?;

    for release in &deployment.releases {
        if release.name.is_empty()
            || release.name.contains(|c| c == '/' || c == '\\')
            || release.name == ".."
        {
            bail!("invalid release name: '{}'", release.name);
        }

        // Build fully in memory; a failed build never reaches the output dir.
        let mut buffer = Vec::new();
        build_release_archive(&mut buffer, &release.name, &release.jobs, &options)
            .with_context(|| format!("failed to build release '{}'", release.name))?;

        let path = args.output_dir.join(format!("{}.tgz", release.name));
        fs::write(&path, &buffer)
            .with_context(|| format!("failed to write release archive: {}", path.display()))?;

        tracing::debug!(release = %release.name, path = %path.display(), bytes = buffer.len(), "wrote release archive");
        println!(
            "{} ({} job(s)) -> {}",
            release.name,
            release.jobs.len(),
            path.display()
        );
    }

    Ok(exit_codes::SUCCESS)
}
