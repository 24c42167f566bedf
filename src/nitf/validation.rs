//! NITF validation utilities
//!
//! Byte accounting checks applied after each header section, and the
//! soft file length check run once the whole file has been walked.

use log::warn;
use std::io::SeekFrom;

use crate::io::seekable::SeekableReader;
use crate::nitf::errors::{NitfError, NitfResult};

/// Requires a section to have consumed exactly its declared length
///
/// # Arguments
/// * `section` - Section name for the error message
/// * `expected` - Declared length
/// * `actual` - Bytes actually consumed
pub fn validate_section_length(section: &str, expected: u64, actual: u64) -> NitfResult<()> {
    if expected != actual {
        return Err(NitfError::LengthMismatch {
            section: section.to_string(),
            expected,
            actual,
        });
    }

    Ok(())
}

/// Gets the stream size for validation purposes
///
/// # Arguments
/// * `reader` - The seekable reader to use
///
/// # Returns
/// The stream size, or `None` if it couldn't be determined. The stream
/// position is left unchanged.
pub fn get_file_size(reader: &mut dyn SeekableReader) -> NitfResult<Option<u64>> {
    let current_position = reader.stream_position()?;
    let file_size = match reader.seek(SeekFrom::End(0)) {
        Ok(size) => Some(size),
        Err(e) => {
            warn!("Could not determine file size: {}", e);
            None
        }
    };
    reader.seek(SeekFrom::Start(current_position))?;

    Ok(file_size)
}

/// Compares the declared file length with the real stream size
///
/// A disagreement is logged, not returned.
///
/// # Returns
/// Whether the lengths agree (or the size could not be determined)
pub fn check_file_length(reader: &mut dyn SeekableReader, declared: u64) -> NitfResult<bool> {
    match get_file_size(reader)? {
        Some(actual) if actual != declared => {
            warn!("FL declares {} bytes but the stream holds {}", declared, actual);
            Ok(false)
        }
        _ => Ok(true),
    }
}
