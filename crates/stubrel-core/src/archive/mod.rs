//! Gzip tar framing.
//!
//! - `entry`: normalized headers (`root:root`, fixed modes, raw `./` paths)
//! - `tar_write`: compressed stream creation, member append, trailer flush
//! - `tar_read`: read a stream back into ordered members

pub mod entry;
pub(crate) mod tar_read;
pub(crate) mod tar_write;

pub use entry::{EntryHeader, EntryKind, DIR_MODE, FILE_MODE, ROOT};
pub use tar_read::read_members;

/// One file or directory inside a tar stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveMember {
    pub header: EntryHeader,
    /// Empty for directories.
    pub payload: Vec<u8>,
}

impl ArchiveMember {
    pub fn path(&self) -> &str {
        &self.header.path
    }
}

pub fn find_member<'a>(members: &'a [ArchiveMember], path: &str) -> Option<&'a ArchiveMember> {
    members.iter().find(|m| m.path() == path)
}
