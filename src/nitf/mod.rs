//! NITF file format parsing module
//!
//! This module provides structures and functions for reading the
//! structure of NITF 2.0 and 2.1 (NSIF 1.0) files: the file header,
//! every segment subheader and the TREs embedded in them.

pub mod errors;
pub mod version;
pub(crate) mod constants;
pub mod security;
pub mod component_info;
pub mod tre;
pub mod context;
pub mod extensions;
pub mod subheaders;
pub mod file_header;
pub mod types;
pub mod reader;
pub mod segment_reader;
pub(crate) mod validation;
#[cfg(test)]
mod tests;

pub use component_info::ComponentInfo;
pub use errors::{ErrorKind, NitfError, NitfResult};
pub use extensions::{ExtrasBlock, Extensions};
pub use file_header::FileHeader;
pub use reader::{detect_version, NitfReader, NitfReaderBuilder, ReaderConfig};
pub use security::{SecurityFields20, SecurityFields21, SecurityGroup};
pub use segment_reader::SegmentReader;
pub use subheaders::{
    BandInfo, DataExtensionSubheader, GraphicSubheader, ImageSubheader, LabelSubheader, LookupTable,
    ReservedExtensionSubheader, TextSubheader,
};
pub use tre::{Tre, TreData, TreDescriptions, TreField, TreHandler, TreLookup, TreRegistry};
pub use types::{FieldWarning, Record, Segment, SegmentKind};
pub use version::NitfVersion;
