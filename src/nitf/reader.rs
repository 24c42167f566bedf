//! NITF file reader implementation
//!
//! Walks the file header and then every declared segment in file order:
//! images, graphics, labels, texts, data extensions and reserved
//! extensions. Each subheader is length-checked against its component
//! info entry before its payload is skipped (or, for TRE overflow
//! segments, parsed in place).

use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::io::field_codec::FieldRead;
use crate::io::seekable::SeekableReader;
use crate::nitf::component_info::ComponentInfo;
use crate::nitf::context::ParseContext;
use crate::nitf::errors::NitfResult;
use crate::nitf::file_header::FileHeader;
use crate::nitf::subheaders::Subheader;
use crate::nitf::tre::{NoHandlers, TreLookup};
use crate::nitf::types::{Record, Segment};
use crate::nitf::validation;
use crate::nitf::version::NitfVersion;

static NO_HANDLERS: NoHandlers = NoHandlers;

/// Reader options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Warn when FL disagrees with the stream length
    pub check_file_length: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            check_file_length: true,
        }
    }
}

/// Builder for NitfReader
///
/// Provides a clean way to construct a NitfReader with various configurations.
#[derive(Default)]
pub struct NitfReaderBuilder<'a> {
    lookup: Option<&'a dyn TreLookup>,
    config: ReaderConfig,
}

impl<'a> NitfReaderBuilder<'a> {
    /// Create a new NitfReaderBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the TRE handler lookup; without one every TRE is kept raw
    pub fn lookup(mut self, lookup: &'a dyn TreLookup) -> Self {
        self.lookup = Some(lookup);
        self
    }

    pub fn check_file_length(mut self, enabled: bool) -> Self {
        self.config.check_file_length = enabled;
        self
    }

    /// Build the NitfReader
    pub fn build(self) -> NitfReader<'a> {
        NitfReader {
            lookup: self.lookup.unwrap_or(&NO_HANDLERS),
            config: self.config,
            current_file: None,
        }
    }
}

/// Reader for NITF 2.0 and 2.1 files
pub struct NitfReader<'a> {
    lookup: &'a dyn TreLookup,
    config: ReaderConfig,
    /// Current file path
    current_file: Option<String>,
}

impl<'a> NitfReader<'a> {
    /// Creates a reader that keeps every TRE raw
    pub fn new() -> Self {
        NitfReaderBuilder::new().build()
    }

    /// Path of the file most recently passed to `load`
    pub fn current_file(&self) -> Option<&str> {
        self.current_file.as_deref()
    }

    /// Loads a NITF file from the given path
    ///
    /// # Arguments
    /// * `filepath` - Path to the NITF file to load
    ///
    /// # Returns
    /// The parsed record
    pub fn load(&mut self, filepath: &str) -> NitfResult<Record> {
        info!("Loading NITF file: {}", filepath);
        self.current_file = Some(filepath.to_string());

        let path = Path::new(filepath);
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(1024 * 1024, file); // 1MB buffer

        self.read(&mut reader)
    }

    /// Reads a NITF file from the given reader
    ///
    /// 1. Read and length-check the file header
    /// 2. Read the segments of each kind, in file order
    /// 3. Optionally compare FL with the stream length
    ///
    /// Any structural or I/O error discards everything read so far.
    ///
    /// # Arguments
    /// * `reader` - Any struct implementing the SeekableReader trait
    ///
    /// # Returns
    /// The parsed record, with the warnings collected along the way
    pub fn read(&self, reader: &mut dyn SeekableReader) -> NitfResult<Record> {
        debug!("NitfReader::read starting");
        let mut ctx = ParseContext::new(self.lookup, NitfVersion::Unknown);

        let header = FileHeader::read(reader, &mut ctx)?;
        let images = read_segments(reader, &mut ctx, &header.image_info)?;
        let graphics = read_segments(reader, &mut ctx, &header.graphic_info)?;
        let labels = read_segments(reader, &mut ctx, &header.label_info)?;
        let texts = read_segments(reader, &mut ctx, &header.text_info)?;
        let data_extensions = read_segments(reader, &mut ctx, &header.data_extension_info)?;
        let reserved_extensions = read_segments(reader, &mut ctx, &header.reserved_extension_info)?;

        if self.config.check_file_length {
            validation::check_file_length(reader, header.file_length)?;
        }

        let warnings = ctx.take_warnings();
        info!(
            "Read {} segments with {} warnings",
            header.segment_total(),
            warnings.len()
        );

        Ok(Record {
            header,
            images,
            graphics,
            labels,
            texts,
            data_extensions,
            reserved_extensions,
            warnings,
        })
    }
}

impl Default for NitfReader<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Probes the version of the stream, restoring its position
pub fn detect_version(reader: &mut dyn SeekableReader) -> NitfVersion {
    NitfVersion::detect(reader)
}

/// Reads one segment per component info entry
fn read_segments<S: Subheader>(
    reader: &mut dyn SeekableReader,
    ctx: &mut ParseContext<'_>,
    infos: &[ComponentInfo],
) -> NitfResult<Vec<Segment<S>>> {
    let mut segments = Vec::with_capacity(infos.len());

    for (index, info) in infos.iter().enumerate() {
        let start = reader.tell()?;
        let mut subheader = S::read(reader, ctx)?;
        let consumed = reader.tell()? - start;
        validation::validate_section_length(
            &format!("{} subheader [{}]", S::KIND, index),
            info.subheader_length,
            consumed,
        )?;

        let offset = reader.tell()?;
        let end = offset + info.data_length;
        subheader.consume_payload(reader, ctx, end)?;
        debug!("{} segment [{}]: payload {}..{}", S::KIND, index, offset, end);

        segments.push(Segment {
            subheader,
            offset,
            end,
        });
    }

    Ok(segments)
}
