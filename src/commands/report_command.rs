//! XML report command

use std::io;

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::{input_files, parse_inputs};
use crate::config::Config;
use crate::report;
use crate::tiff::errors::TiffResult;
use crate::tiff::types::TiffDocument;

/// Command for validating files and writing an XML report to stdout
pub struct ReportCommand<'a> {
    inputs: Vec<String>,
    config: &'a Config,
}

impl<'a> ReportCommand<'a> {
    pub fn new(args: &ArgMatches, config: &'a Config) -> TiffResult<Self> {
        Ok(ReportCommand {
            inputs: input_files(args)?,
            config,
        })
    }
}

impl<'a> Command for ReportCommand<'a> {
    fn execute(&self) -> TiffResult<bool> {
        info!("Writing XML report for {} file(s)", self.inputs.len());

        let mut documents: Vec<(String, TiffDocument)> = Vec::new();
        let outcome = parse_inputs(&self.inputs, self.config, |_, input, document| {
            documents.push((input.to_string(), document));
            Ok(())
        });

        // Whatever parsed still goes out, even when another input was fatal
        let stdout = io::stdout();
        match documents.as_slice() {
            [(input, document)] => report::write_xml(stdout.lock(), input, document)?,
            _ => {
                let borrowed: Vec<(&str, &TiffDocument)> =
                    documents.iter().map(|(input, doc)| (input.as_str(), doc)).collect();
                report::write_report(stdout.lock(), &borrowed)?;
            }
        }
        println!();

        outcome
    }
}
