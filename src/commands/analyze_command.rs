//! TIFF structure validation command
//!
//! Parses each input and prints its header, directories, entries and
//! diagnostics as text.

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{input_files, parse_inputs};
use crate::config::Config;
use crate::tiff::errors::TiffResult;
use crate::tiff::types::TiffDocument;

/// Command for validating files and printing a text report
pub struct AnalyzeCommand<'a> {
    /// Paths of the input files
    inputs: Vec<String>,
    /// Whether to print every entry or only the summary
    verbose: bool,
    config: &'a Config,
}

impl<'a> AnalyzeCommand<'a> {
    /// Create a new analyze command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Parser configuration
    pub fn new(args: &ArgMatches, config: &'a Config) -> TiffResult<Self> {
        Ok(AnalyzeCommand {
            inputs: input_files(args)?,
            verbose: args.get_flag("verbose"),
            config,
        })
    }

    /// One-paragraph summary: validity, revision and every diagnostic
    fn summary(&self, input: &str, document: &TiffDocument) -> String {
        let mut text = format!(
            "{}: {}, TIFF {}, {} IFD(s)",
            input,
            document.validity().as_str(),
            document.version,
            document.ifd_count()
        );
        for diagnostic in document.all_diagnostics() {
            text.push_str(&format!("\n  {}", diagnostic));
        }
        text
    }
}

impl<'a> Command for AnalyzeCommand<'a> {
    fn execute(&self) -> TiffResult<bool> {
        info!("Validating {} file(s)", self.inputs.len());

        parse_inputs(&self.inputs, self.config, |tracker, input, document| {
            if self.verbose {
                tracker.println(&format!("{}:\n{}", input, document));
            } else {
                tracker.println(&self.summary(input, &document));
            }
            Ok(())
        })
    }
}
