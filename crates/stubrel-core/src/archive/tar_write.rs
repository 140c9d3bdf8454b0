use flate2::write::GzEncoder;
use flate2::{Compression, GzBuilder};
use std::io::{self, Write};
use tar::Builder;

use super::entry::EntryHeader;
use crate::error::{Error, Result};
use crate::options::ArchiveOptions;

pub(crate) type ArchiveBuilder<W> = Builder<GzEncoder<W>>;

/// gzip header mtime 0 and OS byte 255 ("unknown") keep the outer stream stable.
/// Tar headers arrive fully built from [`EntryHeader`], with timestamps taken
/// from the caller's `EntryClock`.
pub(crate) fn create_archive<W: Write>(writer: W, options: &ArchiveOptions) -> ArchiveBuilder<W> {
    let encoder = GzBuilder::new()
        .mtime(0)
        .operating_system(255)
        .write(writer, Compression::new(options.compression));

    Builder::new(encoder)
}

pub(crate) fn append_member<T: Write>(
    tar: &mut Builder<T>,
    header: &EntryHeader,
    payload: &[u8],
) -> Result<()> {
    if header.size != payload.len() as u64 {
        return Err(Error::archive(
            &header.path,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "header size {} does not match payload length {}",
                    header.size,
                    payload.len()
                ),
            ),
        ));
    }

    let tar_header = header.to_tar_header()?;
    if let Some((long_name, path_bytes)) = header.long_name_record()? {
        tar.append(&long_name, path_bytes.as_slice())
            .map_err(|e| Error::archive(&header.path, e))?;
    }
    tar.append(&tar_header, payload)
        .map_err(|e| Error::archive(&header.path, e))?;

    tracing::debug!(path = %header.path, size = header.size, mode = %format!("{:o}", header.mode), "appended member");
    Ok(())
}

/// Write the tar trailer and the gzip trailer, handing back the sink.
pub(crate) fn finish_archive<W: Write>(tar: ArchiveBuilder<W>) -> Result<W> {
    let encoder = tar.into_inner()?;
    let writer = encoder.finish()?;
    Ok(writer)
}
