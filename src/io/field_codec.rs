//! Fixed-width field decoding
//!
//! Nearly every NITF field is a fixed-width run of BCS-A (text) or BCS-N
//! (ASCII digits) bytes; a handful of fields are raw binary integers.
//! `FieldRead` extends any `Read + Seek` source with the primitives the
//! header and subheader parsers are written in. A field is validated at
//! the moment it is decoded, there is no separate validation pass.

use byteorder::{BigEndian, NativeEndian, ReadBytesExt};
use log::trace;
use std::io::{self, Read, Seek};

use crate::nitf::errors::{NitfError, NitfResult};

/// Extension trait providing NITF field primitives over a byte stream
pub trait FieldRead: Read + Seek {
    /// Current stream position
    fn tell(&mut self) -> NitfResult<u64> {
        Ok(self.stream_position()?)
    }

    /// Reads exactly `width` bytes
    fn read_raw(&mut self, field: &'static str, width: usize) -> NitfResult<Vec<u8>> {
        let offset = self.tell()?;
        let mut buffer = vec![0u8; width];
        self.read_exact(&mut buffer).map_err(|e| eof_or_io(e, field, offset))?;
        trace!("Read field {} ({} bytes) at offset {}", field, width, offset);
        Ok(buffer)
    }

    /// Reads a BCS-A / ECS-A field verbatim, without trimming
    fn read_text(&mut self, field: &'static str, width: usize) -> NitfResult<String> {
        let raw = self.read_raw(field, width)?;
        Ok(decode_text(&raw))
    }

    /// Reads a BCS-N field as an unsigned integer
    ///
    /// Blank padding around the digits is accepted, anything else is a
    /// `MalformedField`.
    fn read_numeric(&mut self, field: &'static str, width: usize) -> NitfResult<u64> {
        let offset = self.tell()?;
        let raw = self.read_raw(field, width)?;
        parse_numeric(&raw).ok_or_else(|| NitfError::MalformedField {
            field,
            offset,
            raw: decode_text(&raw),
        })
    }

    /// Reads a BCS-N field that may be left entirely blank
    ///
    /// An all-blank field is NOT_SET and decodes to `None`.
    fn read_numeric_or_unset(&mut self, field: &'static str, width: usize) -> NitfResult<Option<u64>> {
        let offset = self.tell()?;
        let raw = self.read_raw(field, width)?;
        if raw.iter().all(|b| *b == b' ') {
            return Ok(None);
        }
        parse_numeric(&raw).map(Some).ok_or_else(|| NitfError::MalformedField {
            field,
            offset,
            raw: decode_text(&raw),
        })
    }

    /// Reads a binary integer field of 1 to 8 bytes
    ///
    /// 2 and 4 byte fields are converted from network byte order. Other
    /// widths are copied unconverted, in host byte order.
    fn read_binary(&mut self, field: &'static str, width: usize) -> NitfResult<u64> {
        let offset = self.tell()?;
        let value = match width {
            2 => self.read_u16::<BigEndian>().map(u64::from),
            4 => self.read_u32::<BigEndian>().map(u64::from),
            1..=8 => self.read_uint::<NativeEndian>(width),
            _ => {
                return Err(NitfError::MalformedField {
                    field,
                    offset,
                    raw: format!("unsupported binary width {}", width),
                })
            }
        };
        value.map_err(|e| eof_or_io(e, field, offset))
    }
}

impl<R: Read + Seek + ?Sized> FieldRead for R {}

/// Decodes field bytes one character per byte (ISO 8859-1)
///
/// Every byte maps to exactly one `char`, so the stored bytes are
/// recoverable with `encode_text`.
pub fn decode_text(raw: &[u8]) -> String {
    raw.iter().map(|&b| char::from(b)).collect()
}

/// Inverse of `decode_text`; characters above U+00FF have no byte and yield `None`
pub fn encode_text(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(c).ok()).collect()
}

/// Parses blank-padded ASCII digits
pub fn parse_numeric(raw: &[u8]) -> Option<u64> {
    let digits = trim_blanks(raw);
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    digits.iter().try_fold(0u64, |acc, d| {
        acc.checked_mul(10)?.checked_add(u64::from(d - b'0'))
    })
}

fn trim_blanks(raw: &[u8]) -> &[u8] {
    let start = raw.iter().position(|b| *b != b' ').unwrap_or(raw.len());
    let end = raw.iter().rposition(|b| *b != b' ').map_or(start, |p| p + 1);
    &raw[start..end]
}

fn eof_or_io(error: io::Error, field: &'static str, offset: u64) -> NitfError {
    if error.kind() == io::ErrorKind::UnexpectedEof {
        NitfError::UnexpectedEof { field, offset }
    } else {
        NitfError::IoError(error)
    }
}
