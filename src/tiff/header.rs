//! Image File Header parsing
//!
//! The header is the first 8 bytes of the file: a byte order marker, the
//! magic number and the offset of the first directory. A damaged marker or
//! magic number is recorded and parsing carries on with a best guess.
//! The first directory offset must be even like every other one.

use std::fmt;

use log::debug;

use crate::io::byte_order::ByteOrder;
use crate::io::source::TiffSource;
use crate::tiff::constants::header;
use crate::tiff::diagnostics::{DiagnosticCode, DiagnosticSink, Findings, Validity};
use crate::tiff::errors::TiffResult;
use crate::tiff::validation;

/// Parsed Image File Header
#[derive(Debug, Clone)]
pub struct Header {
    pub byte_order: ByteOrder,
    /// Marker bytes exactly as found
    pub byte_order_mark: [u8; 2],
    pub magic_number: u16,
    pub first_ifd_offset: u32,
    pub findings: Findings,
}

impl Header {
    /// Parses the header from the start of the source
    ///
    /// Sets the source's byte order as a side effect.
    pub fn read(source: &mut TiffSource, sink: &mut dyn DiagnosticSink) -> TiffResult<Header> {
        let mut findings = Findings::default();

        source.seek(0)?;
        let marker = [source.read_u8()?, source.read_u8()?];
        let byte_order = match ByteOrder::from_marker(marker) {
            Some(byte_order) => byte_order,
            None => {
                findings.record(
                    sink,
                    DiagnosticCode::InvalidByteOrderMark,
                    vec![format!("{:#04x}", marker[0]), format!("{:#04x}", marker[1])],
                );
                ByteOrder::guess_from_marker(marker)
            }
        };
        source.set_byte_order(byte_order);
        debug!("Detected byte order: {}", byte_order.name());

        let magic_number = source.read_u16()?;
        if magic_number != header::TIFF_VERSION && magic_number != header::BIG_TIFF_VERSION {
            findings.record(
                sink,
                DiagnosticCode::InvalidMagicNumber,
                vec![magic_number.to_string()],
            );
        }
        debug!("Magic number: {}", magic_number);

        let first_ifd_offset = source.read_u32()?;
        debug!("First IFD offset: {}", first_ifd_offset);
        if !validation::is_word_aligned(first_ifd_offset as u64) {
            findings.record(
                sink,
                DiagnosticCode::ByteOffsetNotWordAligned,
                vec![first_ifd_offset.to_string()],
            );
        }

        findings.settle();
        Ok(Header {
            byte_order,
            byte_order_mark: marker,
            magic_number,
            first_ifd_offset,
            findings,
        })
    }

    pub fn is_big_tiff(&self) -> bool {
        self.magic_number == header::BIG_TIFF_VERSION
    }

    pub fn validity(&self) -> Validity {
        self.findings.validity
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Header:")?;
        writeln!(f, "  Byte order: {}", self.byte_order.name())?;
        writeln!(
            f,
            "  Magic number: {}{}",
            self.magic_number,
            if self.is_big_tiff() { " (BigTIFF)" } else { "" }
        )?;
        writeln!(f, "  First IFD offset: {}", self.first_ifd_offset)?;
        for diagnostic in &self.findings.diagnostics {
            writeln!(f, "  {}", diagnostic)?;
        }
        Ok(())
    }
}
