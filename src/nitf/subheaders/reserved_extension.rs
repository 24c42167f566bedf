//! Reserved extension subheader

use std::fmt;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::constants::reserved_extension as sz;
use crate::nitf::context::ParseContext;
use crate::nitf::errors::NitfResult;
use crate::nitf::security::SecurityGroup;
use crate::nitf::subheaders::Subheader;
use crate::nitf::types::SegmentKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservedExtensionSubheader {
    pub file_part_type: String,
    pub type_id: String,
    pub version: u64,
    pub security_class: String,
    pub security: SecurityGroup,
    pub subheader_fields_length: u64,
    /// RESSHF, kept opaque
    pub subheader_fields: Vec<u8>,
}

impl Subheader for ReservedExtensionSubheader {
    const KIND: SegmentKind = SegmentKind::ReservedExtension;

    fn read(reader: &mut dyn SeekableReader, ctx: &mut ParseContext<'_>) -> NitfResult<Self> {
        let file_part_type = reader.read_text("RE", sz::RE)?;
        let type_id = reader.read_text("RESTAG", sz::RESTAG)?;
        let version = reader.read_numeric("RESVER", sz::RESVER)?;
        let security_class = reader.read_text("RESCLAS", sz::RESCLAS)?;
        let security = SecurityGroup::read(reader, ctx.version)?;
        let subheader_fields_length = reader.read_numeric("RESSHL", sz::RESSHL)?;
        let subheader_fields = reader.read_raw("RESSHF", subheader_fields_length as usize)?;

        Ok(ReservedExtensionSubheader {
            file_part_type,
            type_id,
            version,
            security_class,
            security,
            subheader_fields_length,
            subheader_fields,
        })
    }
}

impl fmt::Display for ReservedExtensionSubheader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  RESTAG: {}", self.type_id.trim_end())?;
        writeln!(f, "  RESVER: {}", self.version)?;
        writeln!(f, "  RESSHF: {} bytes", self.subheader_fields.len())?;
        Ok(())
    }
}
