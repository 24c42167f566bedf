//! Extras blocks and TRE record parsing
//!
//! An extras block is a 5-digit total length, a 3-digit overflow index
//! and a run of TRE records filling the rest of the declared length. A
//! record that cannot be read is reported as a warning and the remainder
//! of its block is skipped; it never fails the parse.

use indexmap::IndexMap;
use log::debug;
use std::io::SeekFrom;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::constants::extensions::{EL, ETAG, OVERFLOW_OFFSET};
use crate::nitf::context::ParseContext;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::tre::{RawTreHandler, Tre, TreHandler, TreLookup};

/// TREs keyed by tag, in file order; a repeated tag replaces the earlier entry
pub type Extensions = IndexMap<String, Tre>;

/// One extras block as declared in a header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtrasBlock {
    /// Declared total length, overflow field included
    pub data_length: u64,
    /// Index of the overflow DES, absent when the block is empty
    pub overflow: Option<u64>,
    pub extensions: Extensions,
}

impl ExtrasBlock {
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }
}

/// Field names of one extras block
#[derive(Debug, Clone, Copy)]
pub struct ExtrasFields {
    pub length: &'static str,
    pub overflow: &'static str,
    pub length_width: usize,
    pub overflow_width: usize,
}

/// A TRE record that could not be read
#[derive(Debug)]
pub struct TreFailure {
    /// Tag, if the failure came after it was read
    pub tag: Option<String>,
    pub error: NitfError,
}

/// Reads an extras block at the current position
pub fn read_extras(
    reader: &mut dyn SeekableReader,
    ctx: &mut ParseContext<'_>,
    fields: ExtrasFields,
) -> NitfResult<ExtrasBlock> {
    let data_length = reader.read_numeric(fields.length, fields.length_width)?;
    if data_length == 0 {
        return Ok(ExtrasBlock::default());
    }

    let overflow = reader.read_numeric(fields.overflow, fields.overflow_width)?;
    let section_end = reader
        .tell()?
        .saturating_add(data_length)
        .saturating_sub(OVERFLOW_OFFSET as u64);
    debug!(
        "{} = {}, overflow {}, section ends at {}",
        fields.length, data_length, overflow, section_end
    );

    let mut extensions = Extensions::new();
    read_tre_sequence(reader, ctx, section_end, &mut extensions)?;

    Ok(ExtrasBlock {
        data_length,
        overflow: Some(overflow),
        extensions,
    })
}

/// Reads TRE records until the stream reaches `end`
///
/// A structurally malformed record adds one warning and moves the
/// stream to `end`. I/O failures are returned.
pub fn read_tre_sequence(
    reader: &mut dyn SeekableReader,
    ctx: &mut ParseContext<'_>,
    end: u64,
    extensions: &mut Extensions,
) -> NitfResult<()> {
    while reader.tell()? < end {
        match read_tre_record(reader, ctx.lookup, end) {
            Ok(tre) => {
                debug!("Read TRE {} ({} bytes)", tre.tag, tre.length);
                extensions.insert(tre.tag.clone(), tre);
            }
            Err(failure) => {
                if !failure.error.is_structural() {
                    return Err(failure.error);
                }
                debug!("Malformed TRE: {}", failure.error);
                let offset = reader.tell()?;
                ctx.warn_malformed_tre(offset, failure.tag);
                reader.seek(SeekFrom::Start(end))?;
                break;
            }
        }
    }

    Ok(())
}

/// Reads one tag, length and payload
///
/// The payload must fit before `end`, the end of the enclosing block or
/// segment.
pub fn read_tre_record(
    reader: &mut dyn SeekableReader,
    lookup: &dyn TreLookup,
    end: u64,
) -> Result<Tre, TreFailure> {
    let tag = reader
        .read_text("ETAG", ETAG)
        .map_err(|error| TreFailure { tag: None, error })?;
    let tag = tag.trim().to_string();

    let tagged = |error| TreFailure {
        tag: Some(tag.clone()),
        error,
    };
    let length = reader.read_numeric("EL", EL).map_err(tagged)?;

    let payload_start = reader.tell().map_err(tagged)?;
    let available = end.saturating_sub(payload_start);
    if length > available {
        return Err(tagged(NitfError::LengthMismatch {
            section: format!("TRE {} payload", tag),
            expected: available,
            actual: length,
        }));
    }

    handle_tre(reader, lookup, &tag, length).map_err(tagged)
}

/// Parses a `length`-byte payload with the handler registered for `tag`
///
/// Falls back to raw bytes when no handler is registered, the handler
/// fails, or it leaves the stream anywhere but the end of the payload.
pub fn handle_tre(
    reader: &mut dyn SeekableReader,
    lookup: &dyn TreLookup,
    tag: &str,
    length: u64,
) -> NitfResult<Tre> {
    let start = reader.tell()?;

    if let Some(handler) = lookup.lookup(tag) {
        match handler.parse(reader, tag, length) {
            Ok(tre) => {
                let consumed = reader.tell()?.saturating_sub(start);
                if consumed == length {
                    return Ok(tre);
                }
                debug!(
                    "{} handler consumed {} of {} bytes for TRE {}, storing raw",
                    handler.name(),
                    consumed,
                    length,
                    tag
                );
            }
            Err(e) => {
                debug!("{} handler failed for TRE {} ({}), storing raw", handler.name(), tag, e);
            }
        }
        reader.seek(SeekFrom::Start(start))?;
    }

    RawTreHandler.parse(reader, tag, length)
}
