use std::fs::File;
use std::io::{BufReader, BufWriter};
use log::info;

use crate::commands::extract_command::copy_segment;
use crate::nitf::errors::NitfResult;
use crate::nitf::reader::{detect_version, NitfReaderBuilder};
use crate::nitf::segment_reader::SegmentReader;
use crate::nitf::tre::{TreDescriptions, TreRegistry};
use crate::nitf::types::{Record, SegmentKind};
use crate::nitf::version::NitfVersion;
use crate::utils::format_utils;
use crate::utils::logger::Logger;

/// Main interface to the nitfkit library
pub struct NitfKit {
    logger: Logger,
    registry: TreRegistry,
}

impl NitfKit {
    /// Create a new NitfKit instance
    ///
    /// TREs with a built-in description are interpreted, all others are
    /// kept raw.
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "nitfkit.log"
    ///
    /// # Returns
    /// A NitfKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> NitfResult<Self> {
        let log_path = log_file.unwrap_or("nitfkit.log");
        let logger = Logger::new(log_path)?;
        Ok(NitfKit {
            logger,
            registry: TreRegistry::with_builtin_descriptions(),
        })
    }

    /// Loads additional TRE descriptions from a TOML file
    ///
    /// # Returns
    /// The number of descriptions loaded
    pub fn load_tre_descriptions(&mut self, path: &str) -> NitfResult<usize> {
        let descriptions = TreDescriptions::from_file(path)?;
        self.registry.add_descriptions(&descriptions);
        Ok(descriptions.len())
    }

    /// Parses a NITF file
    pub fn read(&self, input_path: &str) -> NitfResult<Record> {
        let mut reader = NitfReaderBuilder::new().lookup(&self.registry).build();
        let record = reader.load(input_path)?;
        self.logger.log_warnings(&record.warnings)?;
        Ok(record)
    }

    /// Analyze a NITF file and return information about its structure
    ///
    /// # Arguments
    /// * `input_path` - Path to the NITF file to analyze
    ///
    /// # Returns
    /// String containing analysis information or an error
    pub fn analyze(&self, input_path: &str) -> NitfResult<String> {
        let record = self.read(input_path)?;
        Ok(format_utils::format_record_summary(&record))
    }

    /// Reports the version of a file without parsing it
    pub fn probe(&self, input_path: &str) -> NitfResult<NitfVersion> {
        let mut reader = BufReader::new(File::open(input_path)?);
        let version = detect_version(&mut reader);
        self.logger.log(&format!("{}: {}", input_path, version))?;
        Ok(version)
    }

    /// Copies the payload of one segment to a file
    ///
    /// # Arguments
    /// * `input_path` - Path to the NITF file
    /// * `kind` - Segment kind
    /// * `index` - Index of the segment within its kind
    /// * `output_path` - Destination file
    ///
    /// # Returns
    /// Number of bytes written
    pub fn extract_segment(
        &self,
        input_path: &str,
        kind: SegmentKind,
        index: usize,
        output_path: &str,
    ) -> NitfResult<u64> {
        let record = self.read(input_path)?;
        let file = File::open(input_path)?;
        let mut segment = SegmentReader::for_segment(BufReader::new(file), &record, kind, index)?;
        let mut output = BufWriter::new(File::create(output_path)?);

        let copied = copy_segment(&mut segment, &mut output, None)?;
        info!("Extracted {} segment [{}] ({} bytes) to {}", kind, index, copied, output_path);
        self.logger.log(&format!("Extracted {} bytes to {}", copied, output_path))?;
        Ok(copied)
    }
}
