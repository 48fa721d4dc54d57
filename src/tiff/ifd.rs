//! Image File Directory (IFD) structures and methods
//!
//! A directory is a 2-byte entry count, that many 12-byte entries and a
//! 4-byte offset to the next directory. `IFD::read` parses one directory
//! and rolls the validity and revision of its entries up to directory
//! level.

use std::collections::HashMap;
use std::fmt;

use log::{debug, info, trace};

use crate::io::source::TiffSource;
use crate::tiff::constants::tags;
use crate::tiff::diagnostics::{DiagnosticCode, DiagnosticSink, Findings, Validity};
use crate::tiff::entry::{EntryReader, IFDEntry};
use crate::tiff::errors::TiffResult;
use crate::tiff::registry::Registry;
use crate::tiff::validation;
use crate::tiff::value::TiffValue;
use crate::tiff::version::TiffVersion;

/// Represents an Image File Directory (IFD) in a TIFF file
#[derive(Debug, Clone)]
pub struct IFD {
    /// IFD number (0-based)
    pub number: usize,
    /// Offset to this IFD in the file
    pub offset: u64,
    /// Entry count as declared in the file
    pub entry_count: u16,
    /// Offset of the next IFD, 0 at the end of the chain
    pub next_ifd_offset: u32,
    /// Entries in the order they were declared
    pub entries: Vec<IFDEntry>,
    /// First directory of the file
    pub is_first: bool,
    /// Second directory of the file, assumed to hold a thumbnail
    pub is_thumbnail: bool,
    /// Highest revision required by any entry
    pub version: TiffVersion,
    pub findings: Findings,
    /// Tag to index in `entries`; a repeated tag maps to its last entry
    tag_map: HashMap<u16, usize>,
}

impl IFD {
    /// Creates a new, empty IFD
    pub fn new(number: usize, offset: u64) -> Self {
        IFD {
            number,
            offset,
            entry_count: 0,
            next_ifd_offset: 0,
            entries: Vec::new(),
            is_first: number == 0,
            is_thumbnail: number == 1,
            version: TiffVersion::V4,
            findings: Findings::default(),
            tag_map: HashMap::new(),
        }
    }

    /// Reads the directory at `offset`
    ///
    /// A short read anywhere in the directory's own bytes is fatal and
    /// propagates as `PrematureEOF`.
    pub fn read(
        source: &mut TiffSource,
        registry: &Registry,
        offset: u64,
        number: usize,
        sink: &mut dyn DiagnosticSink,
    ) -> TiffResult<IFD> {
        info!("Reading IFD #{} at offset {}", number, offset);
        let mut ifd = IFD::new(number, offset);

        // The header already checked the first directory's offset
        if number > 0 && !validation::is_word_aligned(offset) {
            ifd.findings.record(
                sink,
                DiagnosticCode::ByteOffsetNotWordAligned,
                vec![offset.to_string()],
            );
        }

        source.seek(offset)?;
        ifd.entry_count = source.read_u16()?;
        debug!("IFD #{} entry count: {}", number, ifd.entry_count);

        if ifd.entry_count < 1 {
            ifd.findings.record(
                sink,
                DiagnosticCode::ZeroIFDEntries,
                vec![offset.to_string()],
            );
        }

        let mut reader = EntryReader::new(registry);
        for _ in 0..ifd.entry_count {
            let entry = reader.read_entry(source, sink)?;
            ifd.add_entry(entry);
        }

        ifd.next_ifd_offset = source.read_u32()?;
        debug!("IFD #{} next IFD offset: {}", number, ifd.next_ifd_offset);

        ifd.findings.settle();
        Ok(ifd)
    }

    /// Adds an entry, folding its validity and revision into the directory's
    pub fn add_entry(&mut self, entry: IFDEntry) {
        trace!("Adding entry to IFD #{}: {}", self.number, entry);

        if entry.validity() == Validity::Invalid {
            self.findings.invalidate();
        }
        self.version = self.version.max(entry.version);

        self.tag_map.insert(entry.tag, self.entries.len());
        self.entries.push(entry);
    }

    /// Gets an IFD entry by tag
    pub fn get_entry(&self, tag: u16) -> Option<&IFDEntry> {
        self.tag_map.get(&tag).map(|&i| &self.entries[i])
    }

    pub fn has_tag(&self, tag: u16) -> bool {
        self.tag_map.contains_key(&tag)
    }

    /// Decoded value of a tag, if present and decoded
    pub fn get_value(&self, tag: u16) -> Option<&TiffValue> {
        self.get_entry(tag).and_then(|e| e.value.as_ref())
    }

    /// Scalar unsigned value of a tag
    pub fn get_unsigned(&self, tag: u16) -> Option<u32> {
        self.get_value(tag).and_then(TiffValue::as_unsigned)
    }

    /// Width and height when both tags are present
    pub fn get_dimensions(&self) -> Option<(u32, u32)> {
        let width = self.get_unsigned(tags::IMAGE_WIDTH)?;
        let height = self.get_unsigned(tags::IMAGE_LENGTH)?;
        Some((width, height))
    }

    pub fn validity(&self) -> Validity {
        self.findings.validity
    }

    pub fn is_valid(&self) -> bool {
        self.findings.validity.is_valid()
    }

    /// True if the directory itself or any of its entries reported `code`
    pub fn has_diagnostic(&self, code: DiagnosticCode) -> bool {
        self.findings.has(code) || self.entries.iter().any(|e| e.has_diagnostic(code))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for IFD {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = if self.is_first {
            " [first]"
        } else if self.is_thumbnail {
            " [thumbnail]"
        } else {
            ""
        };
        writeln!(f, "IFD #{} (offset: {}){}", self.number, self.offset, role)?;
        writeln!(f, "  Number of entries: {}", self.entry_count)?;

        if let Some((width, height)) = self.get_dimensions() {
            writeln!(f, "  Dimensions: {}x{}", width, height)?;
        }

        writeln!(f, "  Validity: {}", self.validity().as_str())?;
        writeln!(f, "  Minimum TIFF version: {}", self.version)?;
        for diagnostic in &self.findings.diagnostics {
            writeln!(f, "  {}", diagnostic)?;
        }

        writeln!(f, "  Tags:")?;
        for entry in &self.entries {
            writeln!(f, "    {}", entry)?;
            for diagnostic in &entry.findings.diagnostics {
                writeln!(f, "      {}", diagnostic)?;
            }
        }

        writeln!(f, "  Next IFD offset: {}", self.next_ifd_offset)
    }
}
