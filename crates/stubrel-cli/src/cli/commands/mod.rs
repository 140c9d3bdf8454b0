pub mod build;
pub mod dispatch;
pub mod fingerprint;
pub mod graph;
pub mod inspect;

pub use dispatch::dispatch;

use anyhow::Context;
use std::path::Path;

use stubrel_core::{DeploymentSource, SourceFormat};

/// Read and parse a deployment description.
///
/// `Ok(None)` means the file could not be read; the error is already reported.
pub(crate) fn load_source(path: &Path, format: SourceFormat) -> anyhow::Result<Option<DeploymentSource>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("error: cannot read {}: {}", path.display(), e);
            return Ok(None);
        }
    };
    let source = DeploymentSource::parse(&text, format)
        .with_context(|| format!("failed to parse deployment description: {}", path.display()))?;
    Ok(Some(source))
}
