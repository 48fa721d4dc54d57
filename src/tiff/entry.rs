//! Directory entry decoding
//!
//! Each entry is a 12-byte record: tag (u16), type (u16), count (u32) and
//! a 4-byte field holding either the value itself or the offset of the
//! value. `EntryReader` turns one record into an `IFDEntry`, decoding the
//! value and checking it against the tag registry. Problems are recorded
//! on the entry; only a short read of the 12 fixed bytes is fatal.

use std::fmt;

use log::{debug, trace};

use crate::io::source::TiffSource;
use crate::tiff::constants::{ifd, tags};
use crate::tiff::diagnostics::{DiagnosticCode, DiagnosticSink, Findings, Validity};
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::field_type::FieldType;
use crate::tiff::registry::{Registry, TagDefinition};
use crate::tiff::validation::{self, DateTimeCheck};
use crate::tiff::value::TiffValue;
use crate::tiff::version::{self, TiffVersion};
use crate::utils::{string_utils, tiff_code_translators};

/// Kind of embedded payload handed off instead of decoded in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadKind {
    IccProfile,
    Xmp,
}

impl PayloadKind {
    pub fn for_tag(tag: u16) -> Option<Self> {
        match tag {
            tags::ICC_PROFILE => Some(PayloadKind::IccProfile),
            tags::XMP => Some(PayloadKind::Xmp),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PayloadKind::IccProfile => "ICC profile",
            PayloadKind::Xmp => "XMP",
        }
    }
}

/// Byte range of an embedded payload, `[offset, offset + length)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedPayload {
    pub kind: PayloadKind,
    pub offset: u64,
    pub length: u64,
}

/// Represents an entry in an Image File Directory (IFD)
#[derive(Debug, Clone)]
pub struct IFDEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Declared field type code
    pub field_type: u16,
    /// Number of values
    pub count: u32,
    /// Raw value/offset field as read in the file's byte order
    pub value_offset: u32,
    /// Tag name from the registry, when the tag is known
    pub tag_name: Option<String>,
    /// Decoded value, absent when decoding was skipped or failed
    pub value: Option<TiffValue>,
    /// Descriptive label for enumerated values such as Compression
    pub interpretation: Option<String>,
    /// Embedded payload location for ICC and XMP tags
    pub payload: Option<EmbeddedPayload>,
    /// Minimum TIFF revision this entry requires
    pub version: TiffVersion,
    pub findings: Findings,
}

impl IFDEntry {
    /// Creates an entry from its four fixed fields
    pub fn new(tag: u16, field_type: u16, count: u32, value_offset: u32) -> Self {
        IFDEntry {
            tag,
            field_type,
            count,
            value_offset,
            tag_name: None,
            value: None,
            interpretation: None,
            payload: None,
            version: TiffVersion::V4,
            findings: Findings::default(),
        }
    }

    /// Known field type, if the declared code is in the closed set
    pub fn known_type(&self) -> Option<FieldType> {
        FieldType::from_code(self.field_type)
    }

    /// Total value size in bytes: element size times count
    pub fn value_size(&self, registry: &Registry) -> Option<u64> {
        let size = registry
            .byte_size(self.field_type)
            .or_else(|| self.known_type().map(|t| t.size()))?;
        Some(size as u64 * self.count as u64)
    }

    /// Whether the value/offset field holds the value itself
    pub fn is_value_inline(&self, registry: &Registry) -> bool {
        self.value_size(registry)
            .map_or(true, |size| size <= ifd::INLINE_VALUE_SIZE)
    }

    pub fn validity(&self) -> Validity {
        self.findings.validity
    }

    pub fn is_valid(&self) -> bool {
        self.findings.validity.is_valid()
    }

    pub fn has_diagnostic(&self, code: DiagnosticCode) -> bool {
        self.findings.has(code)
    }

    /// Raises the entry's minimum revision; never lowers it
    pub fn raise_version(&mut self, version: TiffVersion) {
        self.version = self.version.max(version);
    }

    /// Name to show for this entry's tag
    pub fn display_name(&self) -> &str {
        self.tag_name.as_deref().unwrap_or("Unknown")
    }

    /// Name to show for this entry's type
    pub fn type_name(&self) -> &'static str {
        self.known_type().map_or("Unknown", |t| t.name())
    }

    fn record(&mut self, sink: &mut dyn DiagnosticSink, code: DiagnosticCode, args: Vec<String>) {
        debug!("Tag {} ({}): {}", self.tag, self.display_name(), code);
        self.findings.record(sink, code, args);
    }
}

impl fmt::Display for IFDEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Tag: {} ({}), Type: {} ({}), Count: {}",
            self.tag,
            self.display_name(),
            self.field_type,
            self.type_name(),
            self.count
        )?;

        match (&self.value, &self.payload) {
            (Some(value), _) => {
                let text = string_utils::printable(&value.to_string());
                write!(f, ", Value: {}", text)?;
            }
            (None, Some(payload)) => write!(
                f,
                ", {}: {} bytes at offset {}",
                payload.kind.name(),
                payload.length,
                payload.offset
            )?,
            (None, None) => write!(f, ", Value/Offset: {}", self.value_offset)?,
        }

        if let Some(label) = &self.interpretation {
            write!(f, " ({})", label)?;
        }

        Ok(())
    }
}

/// Decodes the entries of one directory
///
/// Holds the tag high-water mark used for the ascending-order check, so a
/// fresh reader is needed per directory.
pub struct EntryReader<'a> {
    registry: &'a Registry,
    previous_tag: Option<u16>,
}

impl<'a> EntryReader<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        EntryReader {
            registry,
            previous_tag: None,
        }
    }

    /// Reads one entry starting at the source's cursor
    ///
    /// Leaves the cursor on the next entry boundary however much the value
    /// decode moved it.
    pub fn read_entry(
        &mut self,
        source: &mut TiffSource,
        sink: &mut dyn DiagnosticSink,
    ) -> TiffResult<IFDEntry> {
        let start = source.position();

        let tag = source.read_u16()?;
        let field_type = source.read_u16()?;
        let count = source.read_u32()?;
        let value_offset = source.read_u32()?;

        let mut entry = IFDEntry::new(tag, field_type, count, value_offset);
        trace!(
            "Entry at {}: tag={}, type={}, count={}, value/offset={}",
            start, tag, field_type, count, value_offset
        );

        self.check_sort_order(&mut entry, sink);
        let definition = self.registry.lookup_tag(tag);
        entry.tag_name = definition.map(|d| d.name.clone());

        self.decode(&mut entry, definition, start, source, sink)?;

        entry.findings.settle();
        source.seek(start + ifd::ENTRY_SIZE)?;
        Ok(entry)
    }

    fn check_sort_order(&mut self, entry: &mut IFDEntry, sink: &mut dyn DiagnosticSink) {
        match self.previous_tag {
            Some(previous) if entry.tag <= previous => {
                entry.record(
                    sink,
                    DiagnosticCode::TagSortOrderError,
                    vec![previous.to_string(), entry.tag.to_string()],
                );
            }
            _ => self.previous_tag = Some(entry.tag),
        }
    }

    /// Everything after the fixed fields; returns early once the entry can
    /// go no further
    fn decode(
        &self,
        entry: &mut IFDEntry,
        definition: Option<&TagDefinition>,
        start: u64,
        source: &mut TiffSource,
        sink: &mut dyn DiagnosticSink,
    ) -> TiffResult<()> {
        let field_type = match entry.known_type() {
            Some(field_type) => field_type,
            None => {
                let args = vec![entry.tag.to_string(), entry.field_type.to_string()];
                entry.record(sink, DiagnosticCode::UnknownTypeWarning, args);
                return Ok(());
            }
        };

        if field_type.requires_tiff6() {
            entry.raise_version(TiffVersion::V6);
        }

        let size = entry
            .value_size(self.registry)
            .unwrap_or(field_type.size() as u64 * entry.count as u64);

        let value_position = if size > ifd::INLINE_VALUE_SIZE {
            let offset = entry.value_offset as u64;
            if offset > source.length() {
                let args = vec![entry.tag.to_string(), offset.to_string(), source.length().to_string()];
                entry.record(sink, DiagnosticCode::ValueOffsetOutOfRange, args);
                return Ok(());
            }
            if !validation::is_word_aligned(offset) {
                let args = vec![entry.tag.to_string(), offset.to_string()];
                entry.record(sink, DiagnosticCode::ByteOffsetNotWordAligned, args);
                return Ok(());
            }
            if !source.contains(offset, size) {
                let args = vec![entry.tag.to_string(), offset.to_string(), size.to_string()];
                entry.record(sink, DiagnosticCode::ValueExtendsPastEOF, args);
                return Ok(());
            }
            offset
        } else {
            start + ifd::VALUE_FIELD_OFFSET
        };

        match definition {
            Some(definition) => self.check_definition(entry, field_type, definition, sink),
            None => {
                let args = vec![entry.tag.to_string()];
                entry.record(sink, DiagnosticCode::UnknownTagWarning, args);
            }
        }

        if let Some(kind) = PayloadKind::for_tag(entry.tag) {
            entry.payload = Some(EmbeddedPayload {
                kind,
                offset: value_position,
                length: entry.count as u64,
            });
            return Ok(());
        }

        source.seek(value_position)?;
        match TiffValue::read(source, field_type, entry.count) {
            Ok(value) => entry.value = Some(value),
            Err(TiffError::PrematureEOF { offset }) => {
                let args = vec![entry.tag.to_string(), offset.to_string(), size.to_string()];
                entry.record(sink, DiagnosticCode::ValueExtendsPastEOF, args);
                return Ok(());
            }
            Err(e) => return Err(e),
        }

        if definition.is_some() {
            self.check_semantics(entry, sink);
        }

        Ok(())
    }

    fn check_definition(
        &self,
        entry: &mut IFDEntry,
        field_type: FieldType,
        definition: &TagDefinition,
        sink: &mut dyn DiagnosticSink,
    ) {
        if !definition.allows(field_type) {
            let allowed: Vec<&str> = definition.allowed_types.iter().map(|t| t.as_str()).collect();
            let args = vec![
                entry.tag.to_string(),
                field_type.name().to_string(),
                allowed.join(","),
            ];
            entry.record(sink, DiagnosticCode::TypeMismatchError, args);
        }

        if let Some(expected) = definition.expected_cardinality {
            if entry.count < expected {
                let args = vec![entry.tag.to_string(), entry.count.to_string(), expected.to_string()];
                entry.record(sink, DiagnosticCode::InvalidCountValueWarning, args);
            }
        }
    }

    /// Tag-specific checks and revision bumps once a value is decoded
    fn check_semantics(&self, entry: &mut IFDEntry, sink: &mut dyn DiagnosticSink) {
        let unsigned = entry.value.as_ref().and_then(TiffValue::as_unsigned);

        match entry.tag {
            tags::COMPRESSION => {
                if let Some(scheme) = unsigned {
                    entry.interpretation =
                        Some(tiff_code_translators::compression_code_to_name(scheme).to_string());
                    if let Some(v) = version::minimum_version_for_compression(scheme) {
                        entry.raise_version(v);
                    }
                }
            }
            tags::PHOTOMETRIC_INTERPRETATION => {
                if let Some(code) = unsigned {
                    entry.interpretation =
                        Some(tiff_code_translators::photometric_code_to_name(code).to_string());
                    if let Some(v) = version::minimum_version_for_photometric(code) {
                        entry.raise_version(v);
                    }
                }
            }
            tags::DATE_TIME => {
                let checked = entry
                    .value
                    .as_ref()
                    .and_then(TiffValue::as_ascii)
                    .map(|text| (validation::check_date_time(text), string_utils::printable(text)));

                if let Some((check, shown)) = checked {
                    let code = match check {
                        DateTimeCheck::Valid => None,
                        DateTimeCheck::BadFormat => Some(DiagnosticCode::InvalidDateTimeFormat),
                        DateTimeCheck::BadValue => Some(DiagnosticCode::InvalidDateTime),
                    };
                    if let Some(code) = code {
                        entry.record(sink, code, vec![shown]);
                    }
                }
            }
            tags::TILE_WIDTH | tags::TILE_LENGTH => {
                if let Some(dimension) = unsigned {
                    if !validation::is_tile_dimension_valid(dimension) {
                        let args = vec![entry.tag.to_string(), dimension.to_string()];
                        entry.record(sink, DiagnosticCode::TileDimensionNotMultipleOf16, args);
                    }
                }
            }
            _ => {}
        }

        if let Some(v) = version::minimum_version_for_tag(entry.tag) {
            entry.raise_version(v);
        }
    }
}
