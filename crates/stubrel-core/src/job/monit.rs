use std::io::Write;

use super::EncodedMember;
use crate::digest::EMPTY_SHA1;
use crate::error::Result;

/// Monitor configuration is a placeholder: nothing is written.
pub fn encode_monit<W: Write + ?Sized>(_writer: &mut W) -> Result<EncodedMember> {
    Ok(EncodedMember {
        size: 0,
        digest: EMPTY_SHA1.to_string(),
    })
}
