//! Image subheader

use log::{debug, trace};
use std::fmt;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::constants::image as sz;
use crate::nitf::context::ParseContext;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::extensions::{read_extras, ExtrasBlock, ExtrasFields};
use crate::nitf::security::SecurityGroup;
use crate::nitf::subheaders::Subheader;
use crate::nitf::types::SegmentKind;
use crate::nitf::version::NitfVersion;

/// Image segment subheader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSubheader {
    pub file_part_type: String,
    pub image_id: String,
    pub date_time: String,
    pub target_id: String,
    pub title: String,
    pub security_class: String,
    pub security: SecurityGroup,
    pub encrypted: String,
    pub source: String,
    pub num_rows: u64,
    pub num_cols: u64,
    pub pixel_value_type: String,
    pub representation: String,
    pub category: String,
    pub actual_bits_per_pixel: u64,
    pub pixel_justification: String,
    pub coordinate_system: String,
    /// IGEOLO, present only for coordinate systems that carry corners
    pub corner_coordinates: Option<String>,
    pub comments: Vec<String>,
    pub compression: String,
    /// COMRAT, absent for uncompressed imagery
    pub compression_rate: Option<String>,
    pub num_bands: u64,
    /// XBANDS, read only when NBANDS is zero in 2.1
    pub extended_num_bands: Option<u64>,
    pub bands: Vec<BandInfo>,
    pub sync_code: String,
    pub mode: String,
    pub blocks_per_row: u64,
    pub blocks_per_column: u64,
    pub pixels_per_block_horizontal: u64,
    pub pixels_per_block_vertical: u64,
    pub bits_per_pixel: u64,
    pub display_level: u64,
    pub attachment_level: u64,
    pub location: String,
    pub magnification: String,
    pub user_defined: ExtrasBlock,
    pub extended: ExtrasBlock,
}

/// Per-band descriptor of an image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BandInfo {
    pub representation: String,
    pub subcategory: String,
    pub filter_condition: String,
    pub filter_code: String,
    pub num_luts: u64,
    /// Present only when the band declares lookup tables
    pub lut: Option<LookupTable>,
}

/// Lookup tables of one band, stored table after table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    pub num_tables: u64,
    pub entries_per_table: u64,
    pub data: Vec<u8>,
}

impl LookupTable {
    /// Bytes of table `index`
    pub fn table(&self, index: usize) -> Option<&[u8]> {
        let entries = self.entries_per_table as usize;
        if (index as u64) >= self.num_tables {
            return None;
        }
        self.data.get(index * entries..(index + 1) * entries)
    }
}

impl ImageSubheader {
    /// Number of bands actually described, after XBANDS resolution
    pub fn band_count(&self) -> usize {
        self.bands.len()
    }

    fn has_corner_coordinates(version: NitfVersion, icords: &str) -> bool {
        let codes = match version {
            NitfVersion::V20 => sz::CORNER_CODES_20,
            _ => sz::CORNER_CODES_21,
        };
        icords.len() == 1 && codes.contains(&icords.as_bytes()[0])
    }

    fn read_band(reader: &mut dyn SeekableReader) -> NitfResult<BandInfo> {
        let representation = reader.read_text("IREPBAND", sz::IREPBAND)?;
        let subcategory = reader.read_text("ISUBCAT", sz::ISUBCAT)?;
        let filter_condition = reader.read_text("IFC", sz::IFC)?;
        let filter_code = reader.read_text("IMFLT", sz::IMFLT)?;
        let num_luts = reader.read_numeric("NLUTS", sz::NLUTS)?;

        let lut = if num_luts > 0 {
            let entries_per_table = reader.read_numeric("NELUT", sz::NELUT)?;
            let size = num_luts
                .checked_mul(entries_per_table)
                .and_then(|n| usize::try_from(n).ok())
                .ok_or_else(|| NitfError::GenericError("Lookup table too large".to_string()))?;
            let data = reader.read_raw("LUTD", size)?;
            trace!("Read {} lookup tables of {} entries", num_luts, entries_per_table);
            Some(LookupTable {
                num_tables: num_luts,
                entries_per_table,
                data,
            })
        } else {
            None
        };

        Ok(BandInfo {
            representation,
            subcategory,
            filter_condition,
            filter_code,
            num_luts,
            lut,
        })
    }
}

impl Subheader for ImageSubheader {
    const KIND: SegmentKind = SegmentKind::Image;

    fn read(reader: &mut dyn SeekableReader, ctx: &mut ParseContext<'_>) -> NitfResult<Self> {
        let file_part_type = reader.read_text("IM", sz::IM)?;
        let image_id = reader.read_text("IID1", sz::IID1)?;
        let date_time = reader.read_text("IDATIM", sz::IDATIM)?;
        let target_id = reader.read_text("TGTID", sz::TGTID)?;
        let title = reader.read_text("IID2", sz::IID2)?;
        let security_class = reader.read_text("ISCLAS", sz::ISCLAS)?;
        let security = SecurityGroup::read(reader, ctx.version)?;
        let encrypted = reader.read_text("ENCRYP", sz::ENCRYP)?;
        let source = reader.read_text("ISORCE", sz::ISORCE)?;
        let num_rows = reader.read_numeric("NROWS", sz::NROWS)?;
        let num_cols = reader.read_numeric("NCOLS", sz::NCOLS)?;
        let pixel_value_type = reader.read_text("PVTYPE", sz::PVTYPE)?;
        let representation = reader.read_text("IREP", sz::IREP)?;
        let category = reader.read_text("ICAT", sz::ICAT)?;
        let actual_bits_per_pixel = reader.read_numeric("ABPP", sz::ABPP)?;
        let pixel_justification = reader.read_text("PJUST", sz::PJUST)?;
        let coordinate_system = reader.read_text("ICORDS", sz::ICORDS)?;

        let corner_coordinates = if Self::has_corner_coordinates(ctx.version, &coordinate_system) {
            Some(reader.read_text("IGEOLO", sz::IGEOLO)?)
        } else {
            None
        };

        let num_comments = reader.read_numeric("NICOM", sz::NICOM)?;
        let mut comments = Vec::with_capacity(num_comments as usize);
        for _ in 0..num_comments {
            comments.push(reader.read_text("ICOM", sz::ICOM)?);
        }

        let compression = reader.read_text("IC", sz::IC)?;
        let compression_rate = if sz::UNCOMPRESSED.contains(&compression.as_str()) {
            None
        } else {
            Some(reader.read_text("COMRAT", sz::COMRAT)?)
        };

        let num_bands = reader.read_numeric("NBANDS", sz::NBANDS)?;
        let extended_num_bands = if num_bands == 0 && ctx.version == NitfVersion::V21 {
            Some(reader.read_numeric("XBANDS", sz::XBANDS)?)
        } else {
            None
        };
        let band_count = extended_num_bands.unwrap_or(num_bands);
        debug!("Image {} has {} bands", image_id.trim_end(), band_count);

        let mut bands = Vec::with_capacity(band_count as usize);
        for _ in 0..band_count {
            bands.push(Self::read_band(reader)?);
        }

        let sync_code = reader.read_text("ISYNC", sz::ISYNC)?;
        let mode = reader.read_text("IMODE", sz::IMODE)?;
        let blocks_per_row = reader.read_numeric("NBPR", sz::NBPR)?;
        let blocks_per_column = reader.read_numeric("NBPC", sz::NBPC)?;
        let pixels_per_block_horizontal = reader.read_numeric("NPPBH", sz::NPPBH)?;
        let pixels_per_block_vertical = reader.read_numeric("NPPBV", sz::NPPBV)?;
        let bits_per_pixel = reader.read_numeric("NBPP", sz::NBPP)?;
        let display_level = reader.read_numeric("IDLVL", sz::IDLVL)?;
        let attachment_level = reader.read_numeric("IALVL", sz::IALVL)?;
        let location = reader.read_text("ILOC", sz::ILOC)?;
        let magnification = reader.read_text("IMAG", sz::IMAG)?;

        let user_defined = read_extras(
            reader,
            ctx,
            ExtrasFields {
                length: "UDIDL",
                overflow: "UDOFL",
                length_width: sz::UDIDL,
                overflow_width: sz::UDOFL,
            },
        )?;
        let extended = read_extras(
            reader,
            ctx,
            ExtrasFields {
                length: "IXSHDL",
                overflow: "IXSOFL",
                length_width: sz::IXSHDL,
                overflow_width: sz::IXSOFL,
            },
        )?;

        Ok(ImageSubheader {
            file_part_type,
            image_id,
            date_time,
            target_id,
            title,
            security_class,
            security,
            encrypted,
            source,
            num_rows,
            num_cols,
            pixel_value_type,
            representation,
            category,
            actual_bits_per_pixel,
            pixel_justification,
            coordinate_system,
            corner_coordinates,
            comments,
            compression,
            compression_rate,
            num_bands,
            extended_num_bands,
            bands,
            sync_code,
            mode,
            blocks_per_row,
            blocks_per_column,
            pixels_per_block_horizontal,
            pixels_per_block_vertical,
            bits_per_pixel,
            display_level,
            attachment_level,
            location,
            magnification,
            user_defined,
            extended,
        })
    }
}

impl fmt::Display for ImageSubheader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  IID1: {}", self.image_id.trim_end())?;
        writeln!(f, "  IID2: {}", self.title.trim_end())?;
        writeln!(f, "  Dimensions: {} x {}", self.num_cols, self.num_rows)?;
        writeln!(f, "  Pixel Type: {} ({} bits)", self.pixel_value_type.trim_end(), self.bits_per_pixel)?;
        writeln!(f, "  Representation: {}", self.representation.trim_end())?;
        writeln!(f, "  Compression: {}", self.compression)?;
        if let Some(corners) = &self.corner_coordinates {
            writeln!(f, "  Corners ({}): {}", self.coordinate_system, corners)?;
        }
        writeln!(f, "  Bands: {}", self.bands.len())?;
        for (i, band) in self.bands.iter().enumerate() {
            write!(f, "    [{}] {}", i, band.representation.trim_end())?;
            if let Some(lut) = &band.lut {
                write!(f, " ({} LUTs x {} entries)", lut.num_tables, lut.entries_per_table)?;
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "  Blocks: {} x {} of {} x {} pixels",
            self.blocks_per_row, self.blocks_per_column, self.pixels_per_block_horizontal, self.pixels_per_block_vertical
        )?;
        for tre in self.user_defined.extensions.values().chain(self.extended.extensions.values()) {
            write!(f, "{}", tre)?;
        }
        Ok(())
    }
}
