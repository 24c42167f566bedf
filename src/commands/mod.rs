//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod extract_command;
pub mod probe_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use extract_command::ExtractCommand;
pub use probe_command::ProbeCommand;

use clap::ArgMatches;
use log::info;

use crate::utils::logger::Logger;
use crate::nitf::errors::NitfResult;
use crate::nitf::tre::{TreDescriptions, TreRegistry};

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct NitfkitCommandFactory;

impl NitfkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        NitfkitCommandFactory
    }
}

impl Default for NitfkitCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for NitfkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> NitfResult<Box<dyn Command + 'a>> {
        if args.get_flag("extract") {
            Ok(Box::new(ExtractCommand::new(args, logger)?))
        } else if args.get_flag("probe") {
            Ok(Box::new(ProbeCommand::new(args, logger)?))
        } else {
            // Default to analyze command
            Ok(Box::new(AnalyzeCommand::new(args, logger)?))
        }
    }
}

/// Builds the TRE registry for a command
///
/// Starts from the built-in descriptions and layers the descriptions in
/// `tre_defs` on top, replacing built-ins with the same tag.
pub(crate) fn build_registry(tre_defs: Option<&str>) -> NitfResult<TreRegistry> {
    let mut registry = TreRegistry::with_builtin_descriptions();
    if let Some(path) = tre_defs {
        let descriptions = TreDescriptions::from_file(path)?;
        info!("Loaded {} TRE descriptions from {}", descriptions.len(), path);
        registry.add_descriptions(&descriptions);
    }
    Ok(registry)
}
