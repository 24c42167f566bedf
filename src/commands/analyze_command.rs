//! NITF structure analysis command
//!
//! This module implements the command for analyzing and displaying
//! the structure of NITF files.

use clap::ArgMatches;
use log::{debug, info, warn};

use crate::commands::build_registry;
use crate::commands::command_traits::Command;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::reader::NitfReaderBuilder;
use crate::nitf::types::Record;
use crate::utils::format_utils;
use crate::utils::logger::Logger;

/// Command for analyzing NITF file structure
pub struct AnalyzeCommand<'a> {
    /// Path to the input file
    input_file: String,
    /// Whether to enable verbose output
    verbose: bool,
    /// Extra TRE descriptions to load
    tre_defs: Option<String>,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new AnalyzeCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NitfResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| NitfError::GenericError("Missing input file".to_string()))?
            .clone();

        let verbose = args.get_flag("verbose");
        let tre_defs = args.get_one::<String>("tre-defs").cloned();

        Ok(AnalyzeCommand {
            input_file,
            verbose,
            tre_defs,
            logger,
        })
    }

    /// Display the per-segment subheaders
    ///
    /// # Arguments
    /// * `record` - The parsed file
    fn display_details(&self, record: &Record) {
        for line in record.to_string().lines() {
            info!("{}", line);
        }
    }

    /// Display recoverable problems found while parsing
    fn display_warnings(&self, record: &Record) {
        for warning in &record.warnings {
            warn!("{}", warning);
        }
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> NitfResult<()> {
        info!("Analyzing file: {}", self.input_file);

        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let registry = build_registry(self.tre_defs.as_deref())?;
        let mut reader = NitfReaderBuilder::new().lookup(&registry).build();
        let record = reader.load(&self.input_file)?;

        for line in format_utils::format_record_summary(&record).lines() {
            info!("{}", line);
        }

        if self.verbose {
            self.display_details(&record);
        }
        self.display_warnings(&record);

        self.logger.log_warnings(&record.warnings)?;
        debug!("Analysis completed successfully");
        self.logger.log("Analysis completed successfully")?;

        Ok(())
    }
}
