pub mod io;
pub mod tiff;
pub mod utils;
pub mod config;
pub mod report;
pub mod commands;

pub use config::Config;
pub use tiff::{TiffDocument, TiffReader};
