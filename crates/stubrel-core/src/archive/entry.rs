//! Normalized tar entry headers.

use serde::Serialize;
use std::io;
use tar::{EntryType, Header};

use crate::error::{Error, Result};

/// Permission bits for regular files.
pub const FILE_MODE: u32 = 0o644;
/// Permission bits for directories.
pub const DIR_MODE: u32 = 0o755;
/// Owner and group name stamped on every entry.
pub const ROOT: &str = "root";

/// Width of the ustar/GNU `name` field.
const NAME_FIELD_LEN: usize = 100;
/// Name of the GNU record that carries a path too long for the name field.
const LONG_LINK_NAME: &[u8] = b"././@LongLink";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Regular,
    Directory,
}

/// Header of one archive member: everything but the payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryHeader {
    pub path: String,
    pub size: u64,
    pub mode: u32,
    pub kind: EntryKind,
    pub owner: String,
    pub group: String,
    pub mtime: u64,
}

impl EntryHeader {
    /// Regular file, `0644`, owned by `root:root`.
    pub fn regular(path: impl Into<String>, size: u64, mtime: u64) -> Self {
        Self {
            path: path.into(),
            size,
            mode: FILE_MODE,
            kind: EntryKind::Regular,
            owner: ROOT.into(),
            group: ROOT.into(),
            mtime,
        }
    }

    /// Directory, `0755`, owned by `root:root`. A trailing `/` is added if missing.
    pub fn directory(path: impl Into<String>, mtime: u64) -> Self {
        let mut path = path.into();
        if !path.ends_with('/') {
            path.push('/');
        }
        Self {
            path,
            size: 0,
            mode: DIR_MODE,
            kind: EntryKind::Directory,
            owner: ROOT.into(),
            group: ROOT.into(),
            mtime,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Build the on-disk GNU header.
    ///
    /// The path is copied into the name field byte for byte: `Header::set_path`
    /// strips the leading `./` that consumers of the release format expect.
    /// Paths longer than the field are truncated here; the full path travels in
    /// the preceding [`long_name_record`](Self::long_name_record).
    pub fn to_tar_header(&self) -> Result<Header> {
        let path = self.path.as_bytes();
        if path.is_empty() || path.contains(&0) {
            return Err(Error::archive(
                &self.path,
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "entry path must be non-empty and without NUL",
                ),
            ));
        }
        let name = &path[..path.len().min(NAME_FIELD_LEN)];

        let mut header = Header::new_gnu();
        header.as_old_mut().name[..name.len()].copy_from_slice(name);
        header.set_size(self.size);
        header.set_mode(self.mode);
        header.set_entry_type(match self.kind {
            EntryKind::Regular => EntryType::Regular,
            EntryKind::Directory => EntryType::Directory,
        });
        header.set_uid(0);
        header.set_gid(0);
        header.set_mtime(self.mtime);
        header
            .set_username(&self.owner)
            .map_err(|e| Error::archive(&self.path, e))?;
        header
            .set_groupname(&self.group)
            .map_err(|e| Error::archive(&self.path, e))?;
        header.set_cksum();
        Ok(header)
    }

    /// GNU `L` record to append right before this entry when the path does not
    /// fit the name field. Payload is the full path plus a trailing NUL.
    pub fn long_name_record(&self) -> Result<Option<(Header, Vec<u8>)>> {
        if self.path.len() <= NAME_FIELD_LEN {
            return Ok(None);
        }

        let mut payload = Vec::with_capacity(self.path.len() + 1);
        payload.extend_from_slice(self.path.as_bytes());
        payload.push(0);

        let mut header = Header::new_gnu();
        header.as_old_mut().name[..LONG_LINK_NAME.len()].copy_from_slice(LONG_LINK_NAME);
        header.set_size(payload.len() as u64);
        header.set_mode(FILE_MODE);
        header.set_entry_type(EntryType::GNULongName);
        header.set_uid(0);
        header.set_gid(0);
        header.set_mtime(0);
        header
            .set_username(ROOT)
            .map_err(|e| Error::archive(&self.path, e))?;
        header
            .set_groupname(ROOT)
            .map_err(|e| Error::archive(&self.path, e))?;
        header.set_cksum();
        Ok(Some((header, payload)))
    }
}
