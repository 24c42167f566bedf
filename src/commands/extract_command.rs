//! Segment extraction command
//!
//! This module implements the command for copying the data payload of a
//! single segment out of a NITF file.

use clap::ArgMatches;
use log::info;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};

use crate::commands::command_traits::Command;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::reader::NitfReader;
use crate::nitf::segment_reader::SegmentReader;
use crate::nitf::types::SegmentKind;
use crate::utils::format_utils::format_size;
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Copy buffer size
const CHUNK_SIZE: usize = 64 * 1024;

/// Command for extracting a segment payload from NITF files
pub struct ExtractCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Path to the output file
    output_file: String,
    /// Kind of segment to extract
    kind: SegmentKind,
    /// Index of the segment within its kind
    index: usize,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> ExtractCommand<'a> {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NitfResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| NitfError::GenericError("Missing input file".to_string()))?
            .clone();

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| NitfError::GenericError("Missing output file path for extraction".to_string()))?
            .clone();

        let kind = args.get_one::<String>("segment-type")
            .map(|s| s.parse::<SegmentKind>())
            .transpose()?
            .unwrap_or(SegmentKind::Image);

        let index = match args.get_one::<String>("segment-index") {
            Some(s) => s.parse::<usize>()
                .map_err(|_| NitfError::GenericError(format!("Invalid segment index: {}", s)))?,
            None => 0,
        };

        info!("Extracting {} segment [{}] to {}", kind, index, output_file);

        Ok(ExtractCommand {
            input_file,
            output_file,
            kind,
            index,
            logger,
        })
    }
}

/// Copies a bounded segment to `output`, reporting progress
///
/// # Returns
/// Number of bytes copied
pub(crate) fn copy_segment<R: Read + std::io::Seek, W: Write>(
    segment: &mut SegmentReader<R>,
    output: &mut W,
    progress: Option<&ProgressTracker>,
) -> NitfResult<u64> {
    let mut buffer = vec![0u8; CHUNK_SIZE];
    let mut copied = 0u64;

    loop {
        let read = segment.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        output.write_all(&buffer[..read])?;
        copied += read as u64;
        if let Some(progress) = progress {
            progress.increment(read as u64);
        }
    }

    output.flush()?;
    Ok(copied)
}

impl<'a> Command for ExtractCommand<'a> {
    fn execute(&self) -> NitfResult<()> {
        let record = NitfReader::new().load(&self.input_file)?;

        let file = File::open(&self.input_file)?;
        let mut segment = SegmentReader::for_segment(BufReader::new(file), &record, self.kind, self.index)?;
        let mut output = BufWriter::new(File::create(&self.output_file)?);

        let progress = ProgressTracker::new(segment.len(), &format!("{} [{}]", self.kind, self.index));
        let copied = copy_segment(&mut segment, &mut output, Some(&progress))?;
        progress.finish();

        if copied != segment.len() {
            return Err(NitfError::LengthMismatch {
                section: format!("{} segment [{}] payload", self.kind, self.index),
                expected: segment.len(),
                actual: copied,
            });
        }

        info!("Wrote {} to {}", format_size(copied), self.output_file);
        self.logger.log(&format!(
            "Extracted {} segment [{}] ({} bytes) to {}",
            self.kind, self.index, copied, self.output_file
        ))?;

        Ok(())
    }
}
