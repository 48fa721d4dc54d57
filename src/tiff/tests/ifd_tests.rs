//! Tests for directory parsing

use crate::tiff::constants::tags;
use crate::tiff::diagnostics::{DiagnosticCode, Validity};
use crate::tiff::tests::test_utils::{parse, short, single_ifd_le};
use crate::tiff::value::TiffValue;
use crate::tiff::version::TiffVersion;

#[test]
fn test_directory_fields() {
    let (document, _) = parse(single_ifd_le(
        &[short(tags::IMAGE_WIDTH, 640), short(tags::IMAGE_LENGTH, 480)],
        &[],
    ));
    let ifd = &document.ifds[0];

    assert_eq!(ifd.number, 0);
    assert_eq!(ifd.offset, 8);
    assert_eq!(ifd.entry_count, 2);
    assert_eq!(ifd.next_ifd_offset, 0);
    assert!(ifd.is_first);
    assert!(!ifd.is_thumbnail);
    assert_eq!(ifd.get_dimensions(), Some((640, 480)));
    assert_eq!(ifd.get_value(tags::IMAGE_WIDTH), Some(&TiffValue::Short(640)));
    assert!(!ifd.has_tag(tags::COMPRESSION));
}

#[test]
fn test_tags_out_of_order() {
    let (document, diagnostics) = parse(single_ifd_le(
        &[short(tags::IMAGE_WIDTH, 100), short(tags::SUBFILE_TYPE, 1)],
        &[],
    ));
    let ifd = &document.ifds[0];

    assert_eq!(ifd.validity(), Validity::Invalid);
    assert!(ifd.has_diagnostic(DiagnosticCode::TagSortOrderError));
    assert!(ifd.entries[1].has_diagnostic(DiagnosticCode::TagSortOrderError));
    assert!(!ifd.entries[0].has_diagnostic(DiagnosticCode::TagSortOrderError));
    assert_eq!(
        diagnostics[0].args,
        vec![tags::IMAGE_WIDTH.to_string(), tags::SUBFILE_TYPE.to_string()]
    );
}

#[test]
fn test_repeated_tag_is_out_of_order() {
    let (document, _) = parse(single_ifd_le(
        &[short(tags::IMAGE_WIDTH, 100), short(tags::IMAGE_WIDTH, 200)],
        &[],
    ));
    let ifd = &document.ifds[0];

    assert!(ifd.entries[1].has_diagnostic(DiagnosticCode::TagSortOrderError));
    assert_eq!(ifd.get_unsigned(tags::IMAGE_WIDTH), Some(200));
    assert_eq!(ifd.entry_count(), 2);
}

#[test]
fn test_sort_check_compares_with_highest_tag_seen() {
    let (document, _) = parse(single_ifd_le(
        &[
            short(tags::IMAGE_WIDTH, 1),
            short(tags::COMPRESSION, 1),
            short(tags::IMAGE_LENGTH, 1),
            short(tags::PHOTOMETRIC_INTERPRETATION, 1),
        ],
        &[],
    ));
    let entries = &document.ifds[0].entries;

    assert!(!entries[1].has_diagnostic(DiagnosticCode::TagSortOrderError));
    assert!(entries[2].has_diagnostic(DiagnosticCode::TagSortOrderError));
    assert!(!entries[3].has_diagnostic(DiagnosticCode::TagSortOrderError));
}

#[test]
fn test_zero_entries() {
    let (document, _) = parse(single_ifd_le(&[], &[]));
    let ifd = &document.ifds[0];

    assert!(ifd.findings.has(DiagnosticCode::ZeroIFDEntries));
    assert_eq!(ifd.validity(), Validity::Invalid);
    assert_eq!(document.validity(), Validity::Invalid);
}

#[test]
fn test_warning_only_directory_stays_valid() {
    let (document, _) = parse(single_ifd_le(&[short(40000, 1)], &[]));
    let ifd = &document.ifds[0];

    assert!(ifd.has_diagnostic(DiagnosticCode::UnknownTagWarning));
    assert_eq!(ifd.validity(), Validity::Valid);
}

#[test]
fn test_directory_version_is_highest_entry_version() {
    let (document, _) = parse(single_ifd_le(
        &[
            short(tags::IMAGE_WIDTH, 1),
            short(tags::COMPRESSION, 5),
            short(tags::TILE_WIDTH, 16),
        ],
        &[],
    ));
    let ifd = &document.ifds[0];

    assert_eq!(ifd.entries[0].version, TiffVersion::V4);
    assert_eq!(ifd.entries[1].version, TiffVersion::V5);
    assert_eq!(ifd.entries[2].version, TiffVersion::V6);
    assert_eq!(ifd.version, TiffVersion::V6);
}
