//! Text subheader

use std::fmt;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::constants::text as sz;
use crate::nitf::context::ParseContext;
use crate::nitf::errors::NitfResult;
use crate::nitf::extensions::{read_extras, ExtrasBlock, ExtrasFields};
use crate::nitf::security::SecurityGroup;
use crate::nitf::subheaders::Subheader;
use crate::nitf::types::SegmentKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSubheader {
    pub file_part_type: String,
    pub text_id: String,
    pub attachment_level: u64,
    pub date_time: String,
    pub title: String,
    pub security_class: String,
    pub security: SecurityGroup,
    pub encrypted: String,
    pub format: String,
    pub extended: ExtrasBlock,
}

impl Subheader for TextSubheader {
    const KIND: SegmentKind = SegmentKind::Text;

    fn read(reader: &mut dyn SeekableReader, ctx: &mut ParseContext<'_>) -> NitfResult<Self> {
        let file_part_type = reader.read_text("TE", sz::TE)?;
        let text_id = reader.read_text("TEXTID", sz::TEXTID)?;
        let attachment_level = reader.read_numeric("TXTALVL", sz::TXTALVL)?;
        let date_time = reader.read_text("TXTDT", sz::TXTDT)?;
        let title = reader.read_text("TXTITL", sz::TXTITL)?;
        let security_class = reader.read_text("TSCLAS", sz::TSCLAS)?;
        let security = SecurityGroup::read(reader, ctx.version)?;
        let encrypted = reader.read_text("ENCRYP", sz::ENCRYP)?;
        let format = reader.read_text("TXTFMT", sz::TXTFMT)?;
        let extended = read_extras(
            reader,
            ctx,
            ExtrasFields {
                length: "TXSHDL",
                overflow: "TXSOFL",
                length_width: sz::TXSHDL,
                overflow_width: sz::TXSOFL,
            },
        )?;

        Ok(TextSubheader {
            file_part_type,
            text_id,
            attachment_level,
            date_time,
            title,
            security_class,
            security,
            encrypted,
            format,
            extended,
        })
    }
}

impl fmt::Display for TextSubheader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  TEXTID: {}", self.text_id.trim_end())?;
        writeln!(f, "  Title: {}", self.title.trim_end())?;
        writeln!(f, "  Format: {}", self.format)?;
        for tre in self.extended.extensions.values() {
            write!(f, "{}", tre)?;
        }
        Ok(())
    }
}
