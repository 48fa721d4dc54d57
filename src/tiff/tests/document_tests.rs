//! End-to-end parse scenarios and document-level aggregation

use crate::tiff::constants::{field_types, tags};
use crate::tiff::diagnostics::{DiagnosticCode, Severity, Validity};
use crate::tiff::tests::test_utils::{data_offset, entry, parse, short, single_ifd_le};
use crate::tiff::value::TiffValue;
use crate::tiff::version::TiffVersion;

#[test]
fn test_minimal_valid_file() {
    let (document, diagnostics) = parse(single_ifd_le(&[short(tags::IMAGE_WIDTH, 100)], &[]));

    assert!(diagnostics.is_empty());
    assert_eq!(document.validity(), Validity::Valid);
    assert_eq!(document.version, TiffVersion::V4);
    assert_eq!(document.version.number(), 4);
    assert_eq!(document.header.magic_number, 42);
    assert_eq!(
        document.main_ifd().and_then(|ifd| ifd.get_value(tags::IMAGE_WIDTH)),
        Some(&TiffValue::Short(100))
    );
}

#[test]
fn test_unsorted_tags_invalidate_file() {
    let (document, _) = parse(single_ifd_le(
        &[short(tags::IMAGE_WIDTH, 100), short(tags::SUBFILE_TYPE, 1)],
        &[],
    ));

    assert_eq!(document.ifds[0].validity(), Validity::Invalid);
    assert!(document.has_diagnostic(DiagnosticCode::TagSortOrderError));
    assert!(!document.is_valid());
}

#[test]
fn test_bad_date_time_invalidates_entry() {
    let (document, _) = parse(single_ifd_le(
        &[entry(tags::DATE_TIME, field_types::ASCII, 20, data_offset(1))],
        b"2020:13:40 99:99:99\0",
    ));
    let e = &document.ifds[0].entries[0];

    assert_eq!(e.validity(), Validity::Invalid);
    assert!(e.has_diagnostic(DiagnosticCode::InvalidDateTime));
    assert!(!document.is_valid());
}

#[test]
fn test_odd_tile_width_only_warns() {
    let (document, diagnostics) = parse(single_ifd_le(&[short(tags::TILE_WIDTH, 10)], &[]));

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].code, DiagnosticCode::TileDimensionNotMultipleOf16);
    assert!(document.is_valid());
    assert_eq!(document.version, TiffVersion::V6);
}

#[test]
fn test_value_offset_beyond_file() {
    let (document, _) = parse(single_ifd_le(
        &[entry(tags::STRIP_OFFSETS, field_types::LONG, 4, 1_000_000)],
        &[],
    ));
    let e = &document.ifds[0].entries[0];

    assert_eq!(e.validity(), Validity::Invalid);
    assert!(e.has_diagnostic(DiagnosticCode::ValueOffsetOutOfRange));
    assert!(e.value.is_none());
    assert!(!document.is_valid());
}

#[test]
fn test_damaged_header_still_parses_directories() {
    let mut bytes = single_ifd_le(&[short(tags::IMAGE_WIDTH, 100)], &[]);
    bytes[2] = 41;

    let (document, _) = parse(bytes);

    assert_eq!(document.ifd_count(), 1);
    assert!(document.ifds[0].is_valid());
    assert_eq!(document.header.validity(), Validity::Invalid);
    assert_eq!(document.validity(), Validity::Invalid);
}

#[test]
fn test_sink_receives_every_recorded_diagnostic() {
    let (document, diagnostics) = parse(single_ifd_le(
        &[
            short(tags::IMAGE_WIDTH, 100),
            short(tags::SUBFILE_TYPE, 1),
            short(40000, 1),
            entry(40001, 77, 1, 0),
        ],
        &[],
    ));

    let recorded: Vec<_> = document.all_diagnostics().into_iter().cloned().collect();
    assert_eq!(recorded.len(), diagnostics.len());
    for diagnostic in &diagnostics {
        assert!(recorded.contains(diagnostic));
    }
}

#[test]
fn test_display_escapes_nuls() {
    let (document, _) = parse(single_ifd_le(
        &[entry(tags::SOFTWARE, field_types::ASCII, 4, u32::from_le_bytes(*b"ab\0\0"))],
        &[],
    ));

    let text = document.to_string();
    assert!(text.contains("Software"));
    assert!(text.contains("ab\\u{0}\\u{0}"));
    assert!(text.contains("Validity: valid"));
}
