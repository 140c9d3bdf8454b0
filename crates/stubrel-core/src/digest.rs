//! SHA-1 helpers and document encoding shared by the manifest encoders.

use serde::Serialize;
use sha1::{Digest, Sha1};
use std::io::Write;

use crate::error::{Error, Result};

/// SHA-1 of the empty byte sequence.
pub const EMPTY_SHA1: &str = "da39a3ee5e6b4b0d3255bfef95601890afd80709";

/// YAML document-start marker prefixed to every manifest.
pub const DOCUMENT_START: &[u8] = b"---\n";

/// Lower-case hex SHA-1 of `data`.
pub fn sha1_hex(data: &[u8]) -> String {
    hex::encode(Sha1::digest(data))
}

/// Serialize `value` as a YAML document, including the start marker.
pub(crate) fn to_document<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    let body = serde_yaml::to_string(value).map_err(Error::Encode)?;
    let mut bytes = Vec::with_capacity(DOCUMENT_START.len() + body.len());
    bytes.extend_from_slice(DOCUMENT_START);
    bytes.extend_from_slice(body.as_bytes());
    Ok(bytes)
}

/// Hand `bytes` to `writer` in a single call and insist it took all of them.
pub(crate) fn write_exact<W: Write + ?Sized>(writer: &mut W, bytes: &[u8]) -> Result<usize> {
    let written = writer.write(bytes)?;
    if written != bytes.len() {
        return Err(Error::ShortWrite {
            expected: bytes.len(),
            written,
        });
    }
    Ok(written)
}
