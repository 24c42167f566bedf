//! Segment subheader parsers
//!
//! Each segment kind has its own subheader layout. They share a read
//! entry point, and a hook that moves the stream past the data payload
//! once the subheader has been length-checked.

pub mod data_extension;
pub mod graphic;
pub mod image;
pub mod label;
pub mod reserved_extension;
pub mod text;

pub use data_extension::DataExtensionSubheader;
pub use graphic::GraphicSubheader;
pub use image::{BandInfo, ImageSubheader, LookupTable};
pub use label::LabelSubheader;
pub use reserved_extension::ReservedExtensionSubheader;
pub use text::TextSubheader;

use std::io::SeekFrom;

use crate::io::seekable::SeekableReader;
use crate::nitf::context::ParseContext;
use crate::nitf::errors::NitfResult;
use crate::nitf::types::SegmentKind;

/// A subheader that can be read from a stream
pub trait Subheader: Sized {
    /// Segment kind this subheader introduces
    const KIND: SegmentKind;

    /// Reads the subheader at the current position
    fn read(reader: &mut dyn SeekableReader, ctx: &mut ParseContext<'_>) -> NitfResult<Self>;

    /// Moves the stream from the payload start to `end`
    ///
    /// The default skips the payload with a single seek.
    fn consume_payload(
        &mut self,
        reader: &mut dyn SeekableReader,
        _ctx: &mut ParseContext<'_>,
        end: u64,
    ) -> NitfResult<()> {
        reader.seek(SeekFrom::Start(end))?;
        Ok(())
    }
}
