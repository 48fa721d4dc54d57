//! TIFF file format parsing module
//!
//! This module provides structures and functions for reading and
//! validating the header and directory chain of TIFF files.

pub mod errors;
pub mod diagnostics;
pub mod field_type;
pub mod value;
pub mod registry;
pub mod version;
pub mod header;
pub mod entry;
pub mod ifd;
pub mod types;
pub mod reader;
pub(crate) mod constants;
pub(crate) mod validation;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use diagnostics::{Diagnostic, DiagnosticCode, DiagnosticSink, LogSink, Severity, Validity};
pub use entry::{EmbeddedPayload, EntryReader, IFDEntry, PayloadKind};
pub use errors::{TiffError, TiffResult};
pub use field_type::FieldType;
pub use header::Header;
pub use ifd::IFD;
pub use reader::{read_payload, TiffReader, TiffReaderBuilder};
pub use registry::{Registry, TagDefinition, TypeDescriptor};
pub use types::TiffDocument;
pub use value::{Rational, SRational, TiffValue};
pub use version::TiffVersion;
