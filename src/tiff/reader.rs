//! TIFF file reader implementation
//!
//! Drives a parse: header first, then the directory chain from the first
//! IFD offset until a next-IFD offset of 0. Validity and revision are
//! aggregated on the way up. The walk stops early, with a diagnostic, on a
//! cycle, an out-of-range directory offset or too many directories.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufReader, SeekFrom};
use std::path::Path;

use log::{debug, info};

use crate::io::seekable::SeekableReader;
use crate::io::source::TiffSource;
use crate::tiff::constants::ifd as layout;
use crate::tiff::diagnostics::{DiagnosticCode, DiagnosticSink};
use crate::tiff::entry::EmbeddedPayload;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::header::Header;
use crate::tiff::ifd::IFD;
use crate::tiff::registry::Registry;
use crate::tiff::types::TiffDocument;

/// Builder for TiffReader
///
/// Provides a clean way to construct a TiffReader with various configurations.
pub struct TiffReaderBuilder<'a> {
    registry: &'a Registry,
    max_ifds: usize,
}

impl<'a> TiffReaderBuilder<'a> {
    /// Create a new builder using the standard registry
    pub fn new() -> Self {
        TiffReaderBuilder {
            registry: Registry::standard(),
            max_ifds: layout::DEFAULT_MAX_IFDS,
        }
    }

    /// Use a custom tag/type registry
    pub fn registry(mut self, registry: &'a Registry) -> Self {
        self.registry = registry;
        self
    }

    /// Bound the number of directories walked
    pub fn max_ifds(mut self, max_ifds: usize) -> Self {
        self.max_ifds = max_ifds;
        self
    }

    /// Build the TiffReader
    pub fn build(self) -> TiffReader<'a> {
        TiffReader {
            registry: self.registry,
            max_ifds: self.max_ifds,
        }
    }
}

impl<'a> Default for TiffReaderBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reader for TIFF files
pub struct TiffReader<'a> {
    registry: &'a Registry,
    max_ifds: usize,
}

impl TiffReader<'static> {
    /// Creates a reader with the standard registry and default limits
    pub fn new() -> Self {
        TiffReaderBuilder::new().build()
    }
}

impl Default for TiffReader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TiffReader<'a> {
    pub fn builder() -> TiffReaderBuilder<'a> {
        TiffReaderBuilder::new()
    }

    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    /// Loads and parses a TIFF file from the given path
    ///
    /// # Arguments
    /// * `filepath` - Path to the TIFF file to load
    /// * `sink` - Receives every diagnostic as it is produced
    pub fn load(&self, filepath: &str, sink: &mut dyn DiagnosticSink) -> TiffResult<TiffDocument> {
        info!("Loading TIFF file: {}", filepath);

        let file = File::open(Path::new(filepath))?;
        let mut reader = BufReader::with_capacity(64 * 1024, file);

        self.read(&mut reader, sink)
    }

    /// Parses a TIFF file from any seekable reader
    ///
    /// Recoverable problems end up as diagnostics on the returned document.
    /// Only truncated structural fields and I/O failures are errors.
    pub fn read(
        &self,
        reader: &mut dyn SeekableReader,
        sink: &mut dyn DiagnosticSink,
    ) -> TiffResult<TiffDocument> {
        let mut source = TiffSource::new(reader)?;
        debug!("Input length: {} bytes", source.length());

        let header = Header::read(&mut source, sink)?;
        let mut document = TiffDocument::new(header);

        self.read_ifd_chain(&mut source, &mut document, sink)?;
        document.findings.settle();

        info!(
            "Read {} IFDs, minimum TIFF version {}, {}",
            document.ifd_count(),
            document.version,
            document.validity().as_str()
        );
        Ok(document)
    }

    /// Follows next-IFD offsets from the header's first IFD offset
    fn read_ifd_chain(
        &self,
        source: &mut TiffSource,
        document: &mut TiffDocument,
        sink: &mut dyn DiagnosticSink,
    ) -> TiffResult<()> {
        let mut offset = document.header.first_ifd_offset as u64;
        let mut visited = HashSet::new();
        let mut number = 0;

        while offset != 0 {
            if number >= self.max_ifds {
                document.findings.record(
                    sink,
                    DiagnosticCode::TooManyIFDs,
                    vec![self.max_ifds.to_string()],
                );
                break;
            }

            if !visited.insert(offset) {
                document.findings.record(
                    sink,
                    DiagnosticCode::IFDChainCycle,
                    vec![offset.to_string()],
                );
                break;
            }

            if !source.contains(offset, layout::ENTRY_COUNT_SIZE) {
                document.findings.record(
                    sink,
                    DiagnosticCode::IFDOffsetOutOfRange,
                    vec![offset.to_string(), source.length().to_string()],
                );
                break;
            }

            let ifd = IFD::read(source, self.registry, offset, number, sink)?;

            offset = ifd.next_ifd_offset as u64;
            document.push_ifd(ifd);
            number += 1;
        }

        Ok(())
    }
}

/// Reads the bytes of an embedded payload recorded during a parse
pub fn read_payload(
    reader: &mut dyn SeekableReader,
    payload: &EmbeddedPayload,
) -> TiffResult<Vec<u8>> {
    reader.seek(SeekFrom::Start(payload.offset))?;

    let mut buffer = vec![0u8; payload.length as usize];
    reader.read_exact(&mut buffer).map_err(|e| match e.kind() {
        std::io::ErrorKind::UnexpectedEof => TiffError::PrematureEOF {
            offset: payload.offset,
        },
        _ => TiffError::IoError(e),
    })?;

    Ok(buffer)
}
