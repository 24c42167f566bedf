//! File header parsing

use log::{debug, info};
use std::fmt;

use crate::io::field_codec::{decode_text, parse_numeric, FieldRead};
use crate::io::seekable::SeekableReader;
use crate::nitf::component_info::{read_component_info, ComponentFields, ComponentInfo};
use crate::nitf::constants::{component_info as ci, file_header as sz, magic};
use crate::nitf::context::ParseContext;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::extensions::{read_extras, ExtrasBlock, ExtrasFields};
use crate::nitf::security::SecurityGroup;
use crate::nitf::validation::validate_section_length;
use crate::nitf::version::NitfVersion;

/// NITF file header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHeader {
    pub version: NitfVersion,
    pub profile_name: String,
    pub file_version: String,
    pub complexity_level: u64,
    pub system_type: String,
    pub origin_station_id: String,
    pub file_date_time: String,
    pub title: String,
    pub security_class: String,
    pub security: SecurityGroup,
    /// FSCOP, `None` when left blank
    pub copy_number: Option<u64>,
    /// FSCPYS, `None` when left blank
    pub num_copies: Option<u64>,
    pub encrypted: String,
    /// FBKGC, 2.1 only
    pub background_color: Option<u64>,
    pub originator_name: String,
    pub originator_phone: String,
    pub file_length: u64,
    pub header_length: u64,
    pub image_info: Vec<ComponentInfo>,
    pub graphic_info: Vec<ComponentInfo>,
    pub label_info: Vec<ComponentInfo>,
    pub text_info: Vec<ComponentInfo>,
    pub data_extension_info: Vec<ComponentInfo>,
    pub reserved_extension_info: Vec<ComponentInfo>,
    pub user_defined: ExtrasBlock,
    pub extended: ExtrasBlock,
}

impl FileHeader {
    /// Reads the file header at the current position
    ///
    /// Sets `ctx.version` from FHDR/FVER before anything version-dependent
    /// is read, and checks HL against the bytes consumed.
    pub fn read(reader: &mut dyn SeekableReader, ctx: &mut ParseContext<'_>) -> NitfResult<Self> {
        let start = reader.tell()?;

        let fhdr = reader.read_raw("FHDR", sz::FHDR)?;
        if fhdr.as_slice() != magic::NITF && fhdr.as_slice() != magic::NSIF {
            return Err(NitfError::NotNitf {
                magic: decode_text(&fhdr),
            });
        }
        let fver = reader.read_raw("FVER", sz::FVER)?;
        let version = NitfVersion::from_header(&fhdr, &fver);
        if !version.is_known() {
            return Err(NitfError::UnknownVersion {
                fhdr: decode_text(&fhdr),
                fver: decode_text(&fver),
            });
        }
        ctx.version = version;
        debug!("Detected {}", version);

        let complexity_level = reader.read_numeric("CLEVEL", sz::CLEVEL)?;
        let system_type = reader.read_text("STYPE", sz::STYPE)?;
        let origin_station_id = reader.read_text("OSTAID", sz::OSTAID)?;
        let file_date_time = reader.read_text("FDT", sz::FDT)?;
        let title = reader.read_text("FTITLE", sz::FTITLE)?;
        let security_class = reader.read_text("FSCLAS", sz::FSCLAS)?;
        let security = SecurityGroup::read(reader, version)?;
        let copy_number = reader.read_numeric_or_unset("FSCOP", sz::FSCOP)?;
        let num_copies = reader.read_numeric_or_unset("FSCPYS", sz::FSCPYS)?;
        let encrypted = reader.read_text("ENCRYP", sz::ENCRYP)?;

        let (background_color, originator_name) = match version {
            NitfVersion::V20 => (None, reader.read_text("ONAME", sz::ONAME_20)?),
            _ => {
                let color = reader.read_binary("FBKGC", sz::FBKGC)?;
                (Some(color), reader.read_text("ONAME", sz::ONAME)?)
            }
        };
        let originator_phone = reader.read_text("OPHONE", sz::OPHONE)?;

        let file_length = Self::read_file_length(reader)?;
        let header_length = reader.read_numeric("HL", sz::HL)?;

        let image_info = read_component_info(
            reader,
            ComponentFields { count: "NUMI", subheader_length: "LISH", data_length: "LI" },
            ci::COUNT,
            ci::IMAGE.0,
            ci::IMAGE.1,
        )?;
        let graphic_info = read_component_info(
            reader,
            ComponentFields { count: "NUMS", subheader_length: "LSSH", data_length: "LS" },
            ci::COUNT,
            ci::GRAPHIC.0,
            ci::GRAPHIC.1,
        )?;
        let label_info = read_component_info(
            reader,
            ComponentFields { count: "NUML", subheader_length: "LLSH", data_length: "LL" },
            ci::COUNT,
            ci::LABEL.0,
            ci::LABEL.1,
        )?;
        let text_info = read_component_info(
            reader,
            ComponentFields { count: "NUMT", subheader_length: "LTSH", data_length: "LT" },
            ci::COUNT,
            ci::TEXT.0,
            ci::TEXT.1,
        )?;
        let data_extension_info = read_component_info(
            reader,
            ComponentFields { count: "NUMDES", subheader_length: "LDSH", data_length: "LD" },
            ci::COUNT,
            ci::DATA_EXTENSION.0,
            ci::DATA_EXTENSION.1,
        )?;
        let reserved_extension_info = read_component_info(
            reader,
            ComponentFields { count: "NUMRES", subheader_length: "LRESH", data_length: "LRE" },
            ci::COUNT,
            ci::RESERVED_EXTENSION.0,
            ci::RESERVED_EXTENSION.1,
        )?;

        let user_defined = read_extras(
            reader,
            ctx,
            ExtrasFields {
                length: "UDHDL",
                overflow: "UDHOFL",
                length_width: sz::UDHDL,
                overflow_width: sz::UDHOFL,
            },
        )?;
        let extended = read_extras(
            reader,
            ctx,
            ExtrasFields {
                length: "XHDL",
                overflow: "XHDLOFL",
                length_width: sz::XHDL,
                overflow_width: sz::XHDLOFL,
            },
        )?;

        let consumed = reader.tell()? - start;
        validate_section_length("File header", header_length, consumed)?;
        info!("Read {} file header ({} bytes)", version, consumed);

        Ok(FileHeader {
            version,
            profile_name: decode_text(&fhdr),
            file_version: decode_text(&fver),
            complexity_level,
            system_type,
            origin_station_id,
            file_date_time,
            title,
            security_class,
            security,
            copy_number,
            num_copies,
            encrypted,
            background_color,
            originator_name,
            originator_phone,
            file_length,
            header_length,
            image_info,
            graphic_info,
            label_info,
            text_info,
            data_extension_info,
            reserved_extension_info,
            user_defined,
            extended,
        })
    }

    /// FL, rejecting the all-nines streaming marker
    fn read_file_length(reader: &mut dyn SeekableReader) -> NitfResult<u64> {
        let offset = reader.tell()?;
        let raw = reader.read_raw("FL", sz::FL)?;
        if raw.iter().all(|b| *b == b'9') {
            return Err(NitfError::StreamingHeader);
        }
        parse_numeric(&raw).ok_or_else(|| NitfError::MalformedField {
            field: "FL",
            offset,
            raw: decode_text(&raw),
        })
    }

    /// Total number of declared segments
    pub fn segment_total(&self) -> usize {
        self.image_info.len()
            + self.graphic_info.len()
            + self.label_info.len()
            + self.text_info.len()
            + self.data_extension_info.len()
            + self.reserved_extension_info.len()
    }
}

impl fmt::Display for FileHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Format: {} ({}{})", self.version, self.profile_name, self.file_version)?;
        writeln!(f, "  Complexity Level: {:02}", self.complexity_level)?;
        writeln!(f, "  Originating Station: {}", self.origin_station_id.trim_end())?;
        writeln!(f, "  Date/Time: {}", self.file_date_time)?;
        writeln!(f, "  Title: {}", self.title.trim_end())?;
        writeln!(f, "  Classification: {}", self.security_class)?;
        writeln!(f, "  Originator: {}", self.originator_name.trim_end())?;
        writeln!(f, "  File Length: {}", self.file_length)?;
        writeln!(f, "  Header Length: {}", self.header_length)?;
        writeln!(
            f,
            "  Segments: {} image, {} graphic, {} label, {} text, {} DES, {} RES",
            self.image_info.len(),
            self.graphic_info.len(),
            self.label_info.len(),
            self.text_info.len(),
            self.data_extension_info.len(),
            self.reserved_extension_info.len()
        )?;
        for tre in self.user_defined.extensions.values().chain(self.extended.extensions.values()) {
            write!(f, "{}", tre)?;
        }
        Ok(())
    }
}
