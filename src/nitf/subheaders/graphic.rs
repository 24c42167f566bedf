//! Graphic (symbol) subheader

use std::fmt;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::constants::graphic as sz;
use crate::nitf::context::ParseContext;
use crate::nitf::errors::NitfResult;
use crate::nitf::extensions::{read_extras, ExtrasBlock, ExtrasFields};
use crate::nitf::security::SecurityGroup;
use crate::nitf::subheaders::Subheader;
use crate::nitf::types::SegmentKind;

/// Graphic segment subheader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicSubheader {
    pub file_part_type: String,
    pub graphic_id: String,
    pub name: String,
    pub security_class: String,
    pub security: SecurityGroup,
    pub encrypted: String,
    pub stype: String,
    pub reserved1: String,
    pub display_level: u64,
    pub attachment_level: u64,
    pub location: String,
    pub bound1_location: String,
    pub color: String,
    pub bound2_location: String,
    pub reserved2: String,
    pub extended: ExtrasBlock,
}

impl Subheader for GraphicSubheader {
    const KIND: SegmentKind = SegmentKind::Graphic;

    fn read(reader: &mut dyn SeekableReader, ctx: &mut ParseContext<'_>) -> NitfResult<Self> {
        let file_part_type = reader.read_text("SY", sz::SY)?;
        let graphic_id = reader.read_text("SID", sz::SID)?;
        let name = reader.read_text("SNAME", sz::SNAME)?;
        let security_class = reader.read_text("SSCLAS", sz::SSCLAS)?;
        let security = SecurityGroup::read(reader, ctx.version)?;
        let encrypted = reader.read_text("ENCRYP", sz::ENCRYP)?;
        let stype = reader.read_text("SFMT", sz::SFMT)?;
        let reserved1 = reader.read_text("SSTRUCT", sz::SSTRUCT)?;
        let display_level = reader.read_numeric("SDLVL", sz::SDLVL)?;
        let attachment_level = reader.read_numeric("SALVL", sz::SALVL)?;
        let location = reader.read_text("SLOC", sz::SLOC)?;
        let bound1_location = reader.read_text("SBND1", sz::SBND1)?;
        let color = reader.read_text("SCOLOR", sz::SCOLOR)?;
        let bound2_location = reader.read_text("SBND2", sz::SBND2)?;
        let reserved2 = reader.read_text("SRES2", sz::SRES2)?;
        let extended = read_extras(
            reader,
            ctx,
            ExtrasFields {
                length: "SXSHDL",
                overflow: "SXSOFL",
                length_width: sz::SXSHDL,
                overflow_width: sz::SXSOFL,
            },
        )?;

        Ok(GraphicSubheader {
            file_part_type,
            graphic_id,
            name,
            security_class,
            security,
            encrypted,
            stype,
            reserved1,
            display_level,
            attachment_level,
            location,
            bound1_location,
            color,
            bound2_location,
            reserved2,
            extended,
        })
    }
}

impl fmt::Display for GraphicSubheader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  SID: {}", self.graphic_id.trim_end())?;
        writeln!(f, "  SNAME: {}", self.name.trim_end())?;
        writeln!(f, "  Format: {}, display level {}", self.stype, self.display_level)?;
        for tre in self.extended.extensions.values() {
            write!(f, "{}", tre)?;
        }
        Ok(())
    }
}
