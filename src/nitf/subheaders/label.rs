//! Label subheader (NITF 2.0)

use std::fmt;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::constants::label as sz;
use crate::nitf::context::ParseContext;
use crate::nitf::errors::NitfResult;
use crate::nitf::extensions::{read_extras, ExtrasBlock, ExtrasFields};
use crate::nitf::security::SecurityGroup;
use crate::nitf::subheaders::Subheader;
use crate::nitf::types::SegmentKind;

/// Label segment subheader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSubheader {
    pub file_part_type: String,
    pub label_id: String,
    pub security_class: String,
    pub security: SecurityGroup,
    pub encrypted: String,
    pub font_style: String,
    pub cell_width: u64,
    pub cell_height: u64,
    pub display_level: u64,
    pub attachment_level: u64,
    pub location_row: u64,
    pub location_column: u64,
    /// Binary colour, copied as stored
    pub text_color: u64,
    pub background_color: u64,
    pub extended: ExtrasBlock,
}

impl Subheader for LabelSubheader {
    const KIND: SegmentKind = SegmentKind::Label;

    fn read(reader: &mut dyn SeekableReader, ctx: &mut ParseContext<'_>) -> NitfResult<Self> {
        let file_part_type = reader.read_text("LA", sz::LA)?;
        let label_id = reader.read_text("LID", sz::LID)?;
        let security_class = reader.read_text("LSCLAS", sz::LSCLAS)?;
        let security = SecurityGroup::read(reader, ctx.version)?;
        let encrypted = reader.read_text("ENCRYP", sz::ENCRYP)?;
        let font_style = reader.read_text("LFS", sz::LFS)?;
        let cell_width = reader.read_numeric("LCW", sz::LCW)?;
        let cell_height = reader.read_numeric("LCH", sz::LCH)?;
        let display_level = reader.read_numeric("LDLVL", sz::LDLVL)?;
        let attachment_level = reader.read_numeric("LALVL", sz::LALVL)?;
        let location_row = reader.read_numeric("LLOCR", sz::LLOCR)?;
        let location_column = reader.read_numeric("LLOCC", sz::LLOCC)?;
        let text_color = reader.read_binary("LTC", sz::LTC)?;
        let background_color = reader.read_binary("LBC", sz::LBC)?;
        let extended = read_extras(
            reader,
            ctx,
            ExtrasFields {
                length: "LXSHDL",
                overflow: "LXSOFL",
                length_width: sz::LXSHDL,
                overflow_width: sz::LXSOFL,
            },
        )?;

        Ok(LabelSubheader {
            file_part_type,
            label_id,
            security_class,
            security,
            encrypted,
            font_style,
            cell_width,
            cell_height,
            display_level,
            attachment_level,
            location_row,
            location_column,
            text_color,
            background_color,
            extended,
        })
    }
}

impl fmt::Display for LabelSubheader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  LID: {}", self.label_id.trim_end())?;
        writeln!(f, "  Location: row {}, column {}", self.location_row, self.location_column)?;
        writeln!(f, "  Colors: text {:#08x}, background {:#08x}", self.text_color, self.background_color)?;
        Ok(())
    }
}
