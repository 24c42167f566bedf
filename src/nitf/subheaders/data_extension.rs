//! Data extension subheader
//!
//! A DES whose tag names an overflow segment carries TREs in its payload
//! instead of opaque data. That payload is parsed in place rather than
//! skipped.

use log::debug;
use std::fmt;
use std::io::SeekFrom;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::constants::data_extension as sz;
use crate::nitf::context::ParseContext;
use crate::nitf::errors::NitfResult;
use crate::nitf::extensions::{handle_tre, read_tre_sequence, Extensions};
use crate::nitf::security::SecurityGroup;
use crate::nitf::subheaders::Subheader;
use crate::nitf::tre::Tre;
use crate::nitf::types::SegmentKind;
use crate::nitf::version::NitfVersion;

/// Data extension segment subheader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataExtensionSubheader {
    pub file_part_type: String,
    /// DESTAG as stored, blank padded
    pub type_id: String,
    pub version: u64,
    pub security_class: String,
    pub security: SecurityGroup,
    /// DESOFLW, overflow segments only
    pub overflowed_header_type: Option<String>,
    /// DESITEM, overflow segments only
    pub data_item_overflowed: Option<u64>,
    pub subheader_fields_length: u64,
    /// DESSHF, interpreted as a TRE keyed by the DES tag
    pub subheader_fields: Option<Tre>,
    /// TREs carried in the payload of an overflow segment
    pub payload_extensions: Extensions,
    tre_overflow: bool,
}

impl DataExtensionSubheader {
    /// Trimmed DES tag
    pub fn tag(&self) -> &str {
        self.type_id.trim()
    }

    /// Whether the payload is a TRE sequence
    pub fn is_tre_overflow(&self) -> bool {
        self.tre_overflow
    }

    /// Whether `tag` names a TRE-carrying DES in `version`
    pub fn carries_tres(version: NitfVersion, tag: &str) -> bool {
        match version {
            NitfVersion::V21 => tag == sz::TRE_OVERFLOW,
            NitfVersion::V20 => tag == sz::REGISTERED_EXTENSIONS || tag == sz::CONTROLLED_EXTENSIONS,
            NitfVersion::Unknown => false,
        }
    }
}

impl Subheader for DataExtensionSubheader {
    const KIND: SegmentKind = SegmentKind::DataExtension;

    fn read(reader: &mut dyn SeekableReader, ctx: &mut ParseContext<'_>) -> NitfResult<Self> {
        let file_part_type = reader.read_text("DE", sz::DE)?;
        let type_id = reader.read_text("DESTAG", sz::DESTAG)?;
        let version = reader.read_numeric("DESVER", sz::DESVER)?;
        let security_class = reader.read_text("DESCLAS", sz::DESCLAS)?;
        let security = SecurityGroup::read(reader, ctx.version)?;

        let tag = type_id.trim().to_string();
        let tre_overflow = Self::carries_tres(ctx.version, &tag);
        let (overflowed_header_type, data_item_overflowed) = if tre_overflow {
            let header_type = reader.read_text("DESOFLW", sz::DESOFLW)?;
            let item = reader.read_numeric("DESITEM", sz::DESITEM)?;
            debug!("DES {} overflows {} item {}", tag, header_type.trim_end(), item);
            (Some(header_type), Some(item))
        } else {
            (None, None)
        };

        let subheader_fields_length = reader.read_numeric("DESSHL", sz::DESSHL)?;
        let subheader_fields = if subheader_fields_length > 0 {
            Some(handle_tre(reader, ctx.lookup, &tag, subheader_fields_length)?)
        } else {
            None
        };

        Ok(DataExtensionSubheader {
            file_part_type,
            type_id,
            version,
            security_class,
            security,
            overflowed_header_type,
            data_item_overflowed,
            subheader_fields_length,
            subheader_fields,
            payload_extensions: Extensions::new(),
            tre_overflow,
        })
    }

    fn consume_payload(
        &mut self,
        reader: &mut dyn SeekableReader,
        ctx: &mut ParseContext<'_>,
        end: u64,
    ) -> NitfResult<()> {
        if self.tre_overflow {
            debug!("Reading TRE sequence from DES {} payload", self.tag());
            read_tre_sequence(reader, ctx, end, &mut self.payload_extensions)?;
        }
        reader.seek(SeekFrom::Start(end))?;
        Ok(())
    }
}

impl fmt::Display for DataExtensionSubheader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  DESTAG: {}", self.tag())?;
        writeln!(f, "  DESVER: {}", self.version)?;
        if let (Some(header_type), Some(item)) = (&self.overflowed_header_type, self.data_item_overflowed) {
            writeln!(f, "  Overflow of: {} [{}]", header_type.trim_end(), item)?;
        }
        if let Some(tre) = &self.subheader_fields {
            write!(f, "{}", tre)?;
        }
        for tre in self.payload_extensions.values() {
            write!(f, "{}", tre)?;
        }
        Ok(())
    }
}
