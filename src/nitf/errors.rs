//! Custom error types for NITF processing

use std::io;
use thiserror::Error;

/// NITF-specific error types
#[derive(Debug, Error)]
pub enum NitfError {
    /// I/O error from the underlying stream
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
    /// FHDR is neither "NITF" nor "NSIF"
    #[error("File is not NITF (FHDR = {magic:?})")]
    NotNitf { magic: String },
    /// FHDR/FVER pair is not a supported version
    #[error("Unknown NITF version: {fhdr}{fver}")]
    UnknownVersion { fhdr: String, fver: String },
    /// Bytes consumed by a section differ from its declared length
    #[error("{section} expected to have length {expected}, but read {actual} bytes")]
    LengthMismatch {
        section: String,
        expected: u64,
        actual: u64,
    },
    /// A field could not be decoded
    #[error("Malformed field {field} at offset {offset}: {raw:?}")]
    MalformedField {
        field: &'static str,
        offset: u64,
        raw: String,
    },
    /// The stream ended inside a mandatory field
    #[error("Unexpected end of stream reading {field} at offset {offset}")]
    UnexpectedEof { field: &'static str, offset: u64 },
    /// File length is all nines
    #[error("Streaming headers are not supported")]
    StreamingHeader,
    /// Requested segment does not exist in the record
    #[error("Index [{index}] is not a valid {kind} segment ({count} present)")]
    SegmentNotFound {
        kind: &'static str,
        index: usize,
        count: usize,
    },
    /// Generic error with message
    #[error("NITF error: {0}")]
    GenericError(String),
}

/// Broad classification of a `NitfError`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bytes do not form a valid NITF structure
    Structural,
    /// The underlying medium failed
    Io,
    /// Caller misuse or configuration problems
    Other,
}

impl NitfError {
    /// Classifies this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            NitfError::IoError(_) => ErrorKind::Io,
            NitfError::NotNitf { .. }
            | NitfError::UnknownVersion { .. }
            | NitfError::LengthMismatch { .. }
            | NitfError::MalformedField { .. }
            | NitfError::UnexpectedEof { .. }
            | NitfError::StreamingHeader => ErrorKind::Structural,
            NitfError::SegmentNotFound { .. } | NitfError::GenericError(_) => ErrorKind::Other,
        }
    }

    /// Whether this error describes bad bytes rather than a bad medium
    pub fn is_structural(&self) -> bool {
        self.kind() == ErrorKind::Structural
    }
}

/// Result type for NITF operations
pub type NitfResult<T> = Result<T, NitfError>;

impl From<String> for NitfError {
    fn from(msg: String) -> Self {
        NitfError::GenericError(msg)
    }
}
