use clap::{Arg, ArgAction, Command as ClapCommand};
use log::{error, LevelFilter};
use std::process;

use tiffval::commands::{CommandFactory, TiffvalCommandFactory};
use tiffval::Config;

const EXIT_VALID: i32 = 0;
const EXIT_FATAL: i32 = 1;
const EXIT_INVALID: i32 = 2;

fn main() {
    let matches = ClapCommand::new("tiffval")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Validate TIFF file headers and image file directories")
        .arg(
            Arg::new("input")
                .help("Input TIFF file(s)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print every entry and enable debug logging")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("xml")
                .long("xml")
                .help("Write an XML report to stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("TOML file with parser limits and tag/type tables")
                .value_name("FILE")
                .required(false),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load configuration: {}", e);
                eprintln!("Error: {}", e);
                process::exit(EXIT_FATAL);
            }
        },
        None => Config::default(),
    };

    let factory = TiffvalCommandFactory::new();

    let code = match factory.create_command(&matches, &config) {
        Ok(command) => match command.execute() {
            Ok(true) => EXIT_VALID,
            Ok(false) => EXIT_INVALID,
            Err(e) => {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                EXIT_FATAL
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            EXIT_FATAL
        }
    };
    process::exit(code);
}
