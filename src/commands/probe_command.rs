//! Version probe command

use clap::ArgMatches;
use log::info;
use std::fs::File;
use std::io::BufReader;

use crate::commands::command_traits::Command;
use crate::nitf::errors::{NitfError, NitfResult};
use crate::nitf::reader::detect_version;
use crate::utils::logger::Logger;

/// Reports the NITF version of a file without parsing it
pub struct ProbeCommand<'a> {
    input_file: String,
    logger: &'a Logger,
}

impl<'a> ProbeCommand<'a> {
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> NitfResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| NitfError::GenericError("Missing input file".to_string()))?
            .clone();

        Ok(ProbeCommand { input_file, logger })
    }
}

impl<'a> Command for ProbeCommand<'a> {
    fn execute(&self) -> NitfResult<()> {
        let file = File::open(&self.input_file)?;
        let mut reader = BufReader::new(file);
        let version = detect_version(&mut reader);

        info!("{}: {}", self.input_file, version);
        self.logger.log(&format!("{}: {}", self.input_file, version))?;

        if !version.is_known() {
            return Err(NitfError::GenericError(format!("{} is not a supported NITF file", self.input_file)));
        }
        Ok(())
    }
}
