use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, LevelFilter};

use nitfkit::utils::logger::Logger;
use nitfkit::commands::{CommandFactory, NitfkitCommandFactory};

fn main() {
    let matches = ClapCommand::new("nitfkit")
        .version("1.0")
        .about("Analyze NITF 2.0/2.1 file structure")
        .arg(
            Arg::new("input")
                .help("Input NITF file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("probe")
                .short('p')
                .long("probe")
                .help("Only report the NITF version")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("extract")
                .short('e')
                .long("extract")
                .help("Extract a segment payload")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("segment-type")
                .long("segment-type")
                .help("Segment kind to extract (image, graphic, label, text, des, res)")
                .value_name("KIND")
                .default_value("image")
                .required(false),
        )
        .arg(
            Arg::new("segment-index")
                .long("segment-index")
                .help("Index of the segment within its kind")
                .value_name("INDEX")
                .default_value("0")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file for extraction")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("tre-defs")
                .long("tre-defs")
                .help("TOML file with additional TRE descriptions")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let log_file = "nitfkit.log";
    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Error initializing logger: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = Logger::init_global_logger("nitfkit-global.log", level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }

    let factory = NitfkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
