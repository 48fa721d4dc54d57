//! Parse result structures

use std::fmt;

use crate::tiff::diagnostics::{Diagnostic, DiagnosticCode, Findings, Validity};
use crate::tiff::entry::EmbeddedPayload;
use crate::tiff::header::Header;
use crate::tiff::ifd::IFD;
use crate::tiff::version::TiffVersion;

/// Represents a parsed TIFF file with its Image File Directories (IFDs)
#[derive(Debug, Clone)]
pub struct TiffDocument {
    pub header: Header,
    /// Directories in chain order
    pub ifds: Vec<IFD>,
    /// Highest revision required by any directory
    pub version: TiffVersion,
    /// Chain-level findings; validity here is the aggregate for the file
    pub findings: Findings,
}

impl TiffDocument {
    /// Creates a document for a freshly parsed header
    pub fn new(header: Header) -> Self {
        let mut findings = Findings::default();
        if header.validity() == Validity::Invalid {
            findings.invalidate();
        }

        TiffDocument {
            header,
            ifds: Vec::new(),
            version: TiffVersion::V4,
            findings,
        }
    }

    /// Appends a directory, folding its validity and revision into the file's
    pub fn push_ifd(&mut self, ifd: IFD) {
        if ifd.validity() == Validity::Invalid {
            self.findings.invalidate();
        }
        self.version = self.version.max(ifd.version);
        self.ifds.push(ifd);
    }

    /// Returns the main (first) IFD if available
    pub fn main_ifd(&self) -> Option<&IFD> {
        self.ifds.first()
    }

    /// Returns the directory assumed to hold a thumbnail
    pub fn thumbnail_ifd(&self) -> Option<&IFD> {
        self.ifds.iter().find(|ifd| ifd.is_thumbnail)
    }

    /// Returns the number of IFDs in the TIFF file
    pub fn ifd_count(&self) -> usize {
        self.ifds.len()
    }

    pub fn validity(&self) -> Validity {
        self.findings.validity
    }

    pub fn is_valid(&self) -> bool {
        self.findings.validity.is_valid()
    }

    /// All diagnostics, header first, then per directory, then chain-level
    pub fn all_diagnostics(&self) -> Vec<&Diagnostic> {
        let mut all: Vec<&Diagnostic> = self.header.findings.diagnostics.iter().collect();
        for ifd in &self.ifds {
            all.extend(ifd.findings.diagnostics.iter());
            for entry in &ifd.entries {
                all.extend(entry.findings.diagnostics.iter());
            }
        }
        all.extend(self.findings.diagnostics.iter());
        all
    }

    pub fn has_diagnostic(&self, code: DiagnosticCode) -> bool {
        self.all_diagnostics().iter().any(|d| d.code == code)
    }

    /// ICC and XMP payload locations across all directories
    pub fn embedded_payloads(&self) -> Vec<EmbeddedPayload> {
        self.ifds
            .iter()
            .flat_map(|ifd| ifd.entries.iter())
            .filter_map(|entry| entry.payload)
            .collect()
    }
}

impl fmt::Display for TiffDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TIFF File:")?;
        write!(f, "{}", self.header)?;
        writeln!(f, "  Number of IFDs: {}", self.ifds.len())?;
        writeln!(f, "  Minimum TIFF version: {}", self.version)?;
        writeln!(f, "  Validity: {}", self.validity().as_str())?;
        for diagnostic in &self.findings.diagnostics {
            writeln!(f, "  {}", diagnostic)?;
        }

        for ifd in &self.ifds {
            write!(f, "{}", ifd)?;
        }

        Ok(())
    }
}
