//! Bounded access to a segment payload
//!
//! `SegmentReader` presents the bytes between a segment's `offset` and
//! `end` as a stream of their own, positions relative to the payload.

use std::io::{self, Read, Seek, SeekFrom};

use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::types::{Record, SegmentKind};

/// `Read + Seek` view over one byte range of an underlying stream
pub struct SegmentReader<R> {
    inner: R,
    start: u64,
    end: u64,
    position: u64,
}

impl<R: Read + Seek> SegmentReader<R> {
    /// Creates a view over `start..end`, positioned at its first byte
    pub fn new(mut inner: R, start: u64, end: u64) -> NitfResult<Self> {
        if end < start {
            return Err(NitfError::GenericError(format!(
                "Invalid segment range {}..{}",
                start, end
            )));
        }
        inner.seek(SeekFrom::Start(start))?;
        Ok(SegmentReader {
            inner,
            start,
            end,
            position: 0,
        })
    }

    /// Creates a view over the payload of segment `index` of `kind`
    pub fn for_segment(inner: R, record: &Record, kind: SegmentKind, index: usize) -> NitfResult<Self> {
        let (start, end) = record.segment_range(kind, index)?;
        Self::new(inner, start, end)
    }

    /// Payload length in bytes
    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Bytes left before the end of the payload
    pub fn remaining(&self) -> u64 {
        self.len().saturating_sub(self.position)
    }

    /// Returns the underlying stream
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> Read for SegmentReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = self.remaining();
        if remaining == 0 || buf.is_empty() {
            return Ok(0);
        }

        let limit = buf.len().min(usize::try_from(remaining).unwrap_or(usize::MAX));
        let read = self.inner.read(&mut buf[..limit])?;
        self.position += read as u64;
        Ok(read)
    }
}

impl<R: Read + Seek> Seek for SegmentReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(n) => Some(n),
            SeekFrom::End(delta) => self.len().checked_add_signed(delta),
            SeekFrom::Current(delta) => self.position.checked_add_signed(delta),
        };

        let target = target.ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "invalid seek to a negative or overflowing position")
        })?;

        self.inner.seek(SeekFrom::Start(self.start + target))?;
        self.position = target;
        Ok(target)
    }
}
