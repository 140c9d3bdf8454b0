use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use stubrel_core::{ArchiveOptions, EntryClock, ReleaseOptions, SourceFormat};

#[derive(Parser)]
#[command(
    name = "stubrel",
    version,
    about = "Deterministic stub release archives from deployment descriptions"
)]
pub struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build one <release>.tgz per release referenced by a deployment description
    Build(BuildArgs),
    /// Print the release -> jobs graph of a deployment description
    Graph(GraphArgs),
    /// List the members of a release or job archive in stream order
    Inspect(InspectArgs),
    /// Print the fingerprint of stub job archives
    Fingerprint(FingerprintArgs),
}

#[derive(Args, Debug, Clone)]
pub struct BuildArgs {
    /// Deployment manifest or tile metadata (YAML)
    pub manifest_path: PathBuf,

    /// Directory receiving the release archives (created if missing)
    pub output_dir: PathBuf,

    #[arg(long, value_enum, default_value_t = SourceFormatArg::Auto)]
    pub source_format: SourceFormatArg,

    #[command(flatten)]
    pub release: ReleaseArgs,
}

#[derive(Args, Debug, Clone)]
pub struct ReleaseArgs {
    /// Version written to release.MF
    #[arg(long, env = "STUBREL_RELEASE_VERSION", default_value = ReleaseOptions::STUB_VERSION)]
    pub release_version: String,

    /// Commit hash written to release.MF
    #[arg(long, env = "STUBREL_COMMIT_HASH", default_value = ReleaseOptions::STUB_COMMIT_HASH)]
    pub commit_hash: String,

    /// Mark the release as built from uncommitted changes
    #[arg(long)]
    pub uncommitted_changes: bool,

    /// Fixed entry mtime in Unix seconds (wall clock when unset)
    #[arg(long, env = "SOURCE_DATE_EPOCH")]
    pub mtime: Option<u64>,

    /// gzip level, 0-9
    #[arg(
        long,
        env = "STUBREL_COMPRESSION",
        default_value_t = ArchiveOptions::DEFAULT_COMPRESSION,
        value_parser = clap::value_parser!(u32).range(0..=9)
    )]
    pub compression: u32,
}

impl ReleaseArgs {
    pub fn to_options(&self) -> ReleaseOptions {
        let clock = self.mtime.map_or(EntryClock::WallClock, EntryClock::Fixed);
        ReleaseOptions {
            version: self.release_version.clone(),
            commit_hash: self.commit_hash.clone(),
            uncommitted_changes: self.uncommitted_changes,
            archive: ArchiveOptions::default()
                .with_clock(clock)
                .with_compression(self.compression),
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GraphArgs {
    /// Deployment manifest or tile metadata (YAML)
    pub manifest_path: PathBuf,

    #[arg(long, value_enum, default_value_t = SourceFormatArg::Auto)]
    pub source_format: SourceFormatArg,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    /// Release or job archive (.tgz)
    pub archive: PathBuf,

    /// Also list the members of embedded job archives
    #[arg(short, long)]
    pub recursive: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct FingerprintArgs {
    /// Job names
    #[arg(required = true)]
    pub jobs: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceFormatArg {
    Auto,
    Deployment,
    Tile,
}

impl From<SourceFormatArg> for SourceFormat {
    fn from(arg: SourceFormatArg) -> Self {
        match arg {
            SourceFormatArg::Auto => SourceFormat::Auto,
            SourceFormatArg::Deployment => SourceFormat::Deployment,
            SourceFormatArg::Tile => SourceFormat::Tile,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
