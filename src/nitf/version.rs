//! NITF version detection

use log::debug;
use std::fmt;
use std::io::SeekFrom;

use crate::io::seekable::SeekableReader;
use crate::nitf::constants::{file_header, magic};

/// NITF format version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NitfVersion {
    /// NITF 2.0
    V20,
    /// NITF 2.1, or its NATO twin NSIF 1.0
    V21,
    /// Anything else
    Unknown,
}

impl NitfVersion {
    /// Maps raw FHDR and FVER bytes to a version
    pub fn from_header(fhdr: &[u8], fver: &[u8]) -> Self {
        if (fhdr == magic::NITF && fver == magic::NITF_21) || (fhdr == magic::NSIF && fver == magic::NSIF_10) {
            NitfVersion::V21
        } else if fhdr == magic::NITF && fver == magic::NITF_20 {
            NitfVersion::V20
        } else {
            NitfVersion::Unknown
        }
    }

    /// Probes the version without committing to a parse
    ///
    /// Reads FHDR and FVER from the current position, then seeks back to
    /// it. Any read failure yields `Unknown`.
    pub fn detect(reader: &mut dyn SeekableReader) -> Self {
        let start = match reader.stream_position() {
            Ok(pos) => pos,
            Err(_) => return NitfVersion::Unknown,
        };

        let mut fhdr = [0u8; file_header::FHDR];
        let mut fver = [0u8; file_header::FVER];
        let version = match reader.read_exact(&mut fhdr).and_then(|_| reader.read_exact(&mut fver)) {
            Ok(()) => NitfVersion::from_header(&fhdr, &fver),
            Err(e) => {
                debug!("Version probe failed: {}", e);
                NitfVersion::Unknown
            }
        };

        if let Err(e) = reader.seek(SeekFrom::Start(start)) {
            debug!("Could not restore stream position after probe: {}", e);
        }

        version
    }

    /// Whether this is a version the reader can parse
    pub fn is_known(&self) -> bool {
        !matches!(self, NitfVersion::Unknown)
    }

    /// Returns a string representation of this version
    pub fn name(&self) -> &'static str {
        match self {
            NitfVersion::V20 => "NITF 2.0",
            NitfVersion::V21 => "NITF 2.1",
            NitfVersion::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for NitfVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
