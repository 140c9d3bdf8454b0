//! Build options, constructed once by the caller and passed into the builders.

/// Source of the modification time stamped on every tar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryClock {
    /// Current wall-clock time, read once per entry.
    #[default]
    WallClock,
    /// Fixed Unix timestamp (e.g. `SOURCE_DATE_EPOCH`) for byte-identical output.
    Fixed(u64),
}

impl EntryClock {
    pub fn mtime(&self) -> u64 {
        match self {
            EntryClock::WallClock => u64::try_from(chrono::Utc::now().timestamp()).unwrap_or(0),
            EntryClock::Fixed(secs) => *secs,
        }
    }
}

/// Options shared by job and release archive builders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveOptions {
    pub clock: EntryClock,
    /// gzip level, 0 (store) to 9 (best).
    pub compression: u32,
}

impl ArchiveOptions {
    pub const DEFAULT_COMPRESSION: u32 = 6;

    pub fn with_clock(mut self, clock: EntryClock) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_compression(mut self, level: u32) -> Self {
        self.compression = level.min(9);
        self
    }
}

impl Default for ArchiveOptions {
    fn default() -> Self {
        Self {
            clock: EntryClock::default(),
            compression: Self::DEFAULT_COMPRESSION,
        }
    }
}

/// Release-level metadata written to `release.MF`, plus archive options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOptions {
    pub version: String,
    pub commit_hash: String,
    pub uncommitted_changes: bool,
    pub archive: ArchiveOptions,
}

impl ReleaseOptions {
    pub const STUB_VERSION: &'static str = "stub-version";
    pub const STUB_COMMIT_HASH: &'static str = "deadbeef";
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        Self {
            version: Self::STUB_VERSION.into(),
            commit_hash: Self::STUB_COMMIT_HASH.into(),
            uncommitted_changes: false,
            archive: ArchiveOptions::default(),
        }
    }
}
