//! CLI command implementations
//!
//! This module contains implementations of the commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod analyze_command;
pub mod report_command;

pub use command_traits::{Command, CommandFactory};
pub use analyze_command::AnalyzeCommand;
pub use report_command::ReportCommand;

use clap::ArgMatches;
use log::error;

use crate::config::Config;
use crate::tiff::diagnostics::LogSink;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::types::TiffDocument;
use crate::utils::progress::ProgressTracker;

/// Factory for creating command instances based on CLI arguments
pub struct TiffvalCommandFactory;

impl TiffvalCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        TiffvalCommandFactory
    }
}

impl Default for TiffvalCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CommandFactory<'a> for TiffvalCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &'a Config) -> TiffResult<Box<dyn Command + 'a>> {
        if args.get_flag("xml") {
            Ok(Box::new(ReportCommand::new(args, config)?))
        } else {
            Ok(Box::new(AnalyzeCommand::new(args, config)?))
        }
    }
}

/// Collects the input paths from parsed arguments
pub(crate) fn input_files(args: &ArgMatches) -> TiffResult<Vec<String>> {
    let inputs: Vec<String> = args
        .get_many::<String>("input")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    if inputs.is_empty() {
        return Err(TiffError::GenericError("Missing input file".to_string()));
    }
    Ok(inputs)
}

/// Parses every input in turn and hands each document to `visit`
///
/// A fatal error on one input does not stop the others; the first one is
/// returned once all inputs were tried. Shows a progress bar when there is
/// more than one input.
pub(crate) fn parse_inputs<F>(inputs: &[String], config: &Config, mut visit: F) -> TiffResult<bool>
where
    F: FnMut(&ProgressTracker, &str, TiffDocument) -> TiffResult<()>,
{
    let tracker = if inputs.len() > 1 {
        ProgressTracker::new(inputs.len() as u64, "Validating")
    } else {
        ProgressTracker::hidden()
    };

    let reader = config.reader();
    let mut all_valid = true;
    let mut first_error = None;

    for input in inputs {
        tracker.set_message(input);
        match reader.load(input, &mut LogSink) {
            Ok(document) => {
                all_valid &= document.is_valid();
                visit(&tracker, input, document)?;
            }
            Err(e) => {
                error!("{}: {}", input, e);
                tracker.println(&format!("{}: {}", input, e));
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        tracker.increment(1);
    }
    tracker.finish();

    match first_error {
        Some(e) => Err(e),
        None => Ok(all_valid),
    }
}
