//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application, enabling a clean separation of concerns.

use crate::config::Config;
use crate::tiff::errors::TiffResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Execute the command
    ///
    /// # Returns
    /// `true` when every input parsed and came out valid, `false` when
    /// at least one came out invalid, or the first fatal error
    fn execute(&self) -> TiffResult<bool>;
}

/// Factory for creating commands from CLI arguments
pub trait CommandFactory<'a> {
    /// Create a new Command instance based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Parser configuration the command reads with
    fn create_command(
        &self,
        args: &clap::ArgMatches,
        config: &'a Config,
    ) -> TiffResult<Box<dyn Command + 'a>>;
}
