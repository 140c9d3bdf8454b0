pub mod archive;
pub mod manifest;

pub use archive::{build_release_archive, job_archive_path, JOBS_DIR, RELEASE_MANIFEST_PATH};
pub use manifest::{encode_release_manifest, ReleaseJob, ReleaseManifest, ReleasePackage};
