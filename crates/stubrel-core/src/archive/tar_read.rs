use flate2::read::GzDecoder;
use std::io::{self, Read};
use tar::EntryType;

use super::entry::{EntryHeader, EntryKind};
use super::ArchiveMember;
use crate::error::{Error, Result};

/// Upper bound on payload preallocation; the size field is untrusted.
const MAX_PREALLOC: u64 = 64 * 1024;

/// Read every member of a gzip tar stream, in stream order.
///
/// Paths are returned exactly as stored (a leading `./` is kept). GNU
/// long-name records are folded into the entry they describe. A payload
/// shorter than its declared size is a framing error.
pub fn read_members<R: Read>(reader: R) -> Result<Vec<ArchiveMember>> {
    let mut archive = tar::Archive::new(GzDecoder::new(reader));
    let mut members = Vec::new();

    for entry in archive.entries()? {
        let mut entry = entry?;
        let path = String::from_utf8_lossy(&entry.path_bytes()).into_owned();

        let header = {
            let raw = entry.header();
            let kind = match raw.entry_type() {
                EntryType::Regular => EntryKind::Regular,
                EntryType::Directory => EntryKind::Directory,
                other => {
                    return Err(Error::archive(
                        &path,
                        io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("unsupported entry type {:?}", other),
                        ),
                    ))
                }
            };
            EntryHeader {
                size: raw.size().map_err(|e| Error::archive(&path, e))?,
                mode: raw.mode().map_err(|e| Error::archive(&path, e))?,
                kind,
                owner: raw.username().ok().flatten().unwrap_or_default().to_string(),
                group: raw.groupname().ok().flatten().unwrap_or_default().to_string(),
                mtime: raw.mtime().map_err(|e| Error::archive(&path, e))?,
                path: path.clone(),
            }
        };

        let mut payload = Vec::with_capacity(header.size.min(MAX_PREALLOC) as usize);
        entry
            .read_to_end(&mut payload)
            .map_err(|e| Error::archive(&path, e))?;
        if payload.len() as u64 != header.size {
            return Err(Error::archive(
                &path,
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!(
                        "entry declares {} bytes but holds {}",
                        header.size,
                        payload.len()
                    ),
                ),
            ));
        }

        members.push(ArchiveMember { header, payload });
    }

    Ok(members)
}
