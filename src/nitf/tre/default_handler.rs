//! Raw TRE handler

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::tre::{Tre, TreHandler};

/// Stores the payload bytes unchanged
///
/// Used whenever no handler is registered for a tag and as the fallback
/// when a registered handler rejects a payload.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawTreHandler;

impl TreHandler for RawTreHandler {
    fn name(&self) -> &str {
        "raw"
    }

    fn parse(&self, reader: &mut dyn SeekableReader, tag: &str, length: u64) -> NitfResult<Tre> {
        let width = usize::try_from(length)
            .map_err(|_| NitfError::GenericError(format!("TRE {} length {} too large", tag, length)))?;
        let data = reader.read_raw("TRE data", width)?;
        Ok(Tre::raw(tag, data))
    }
}
