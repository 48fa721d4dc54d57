//! Integration tests for the public parsing API

extern crate std;

use std::io::Cursor;
use std::io::Write;

use tiffval::report;
use tiffval::tiff::{
    read_payload, Diagnostic, DiagnosticCode, PayloadKind, TiffReader, TiffVersion, Validity,
};
use tiffval::Config;

/// Little-endian file with ImageWidth, ImageLength, Compression (LZW),
/// an ICC profile and a second directory
fn sample_file() -> Vec<u8> {
    let mut buffer = Vec::new();

    // TIFF header (little-endian)
    buffer.extend_from_slice(&[0x49, 0x49]); // "II" for little-endian
    buffer.extend_from_slice(&[42, 0]);      // TIFF magic number
    buffer.extend_from_slice(&[8, 0, 0, 0]); // Offset to first IFD

    // IFD 0 with four entries, 8 + 2 + 48 + 4 = 62 bytes
    buffer.extend_from_slice(&[4, 0]);

    // ImageWidth (256), LONG, 200
    buffer.extend_from_slice(&[0, 1, 4, 0, 1, 0, 0, 0, 200, 0, 0, 0]);
    // ImageLength (257), LONG, 100
    buffer.extend_from_slice(&[1, 1, 4, 0, 1, 0, 0, 0, 100, 0, 0, 0]);
    // Compression (259), SHORT, 5 (LZW)
    buffer.extend_from_slice(&[3, 1, 3, 0, 1, 0, 0, 0, 5, 0, 0, 0]);
    // ICCProfile (34675), UNDEFINED, 8 bytes at offset 62
    buffer.extend_from_slice(&[0x73, 0x87, 7, 0, 8, 0, 0, 0, 62, 0, 0, 0]);

    // Next IFD at offset 70
    buffer.extend_from_slice(&[70, 0, 0, 0]);

    // ICC profile bytes
    buffer.extend_from_slice(b"ICCPROF!");

    // IFD 1 with one entry: ImageWidth (256), SHORT, 20
    buffer.extend_from_slice(&[1, 0]);
    buffer.extend_from_slice(&[0, 1, 3, 0, 1, 0, 0, 0, 20, 0, 0, 0]);
    buffer.extend_from_slice(&[0, 0, 0, 0]);

    buffer
}

#[test]
fn test_complete_tiff_workflow() {
    let mut cursor = Cursor::new(sample_file());
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let result = TiffReader::new().read(&mut cursor, &mut diagnostics);
    std::assert!(result.is_ok());

    let tiff = result.unwrap();
    std::assert!(diagnostics.is_empty(), "unexpected: {:?}", diagnostics);
    std::assert_eq!(tiff.ifds.len(), 2);
    std::assert_eq!(tiff.validity(), Validity::Valid);
    // UNDEFINED is a 6.0 type
    std::assert_eq!(tiff.version, TiffVersion::V6);

    let ifd = &tiff.ifds[0];
    std::assert_eq!(ifd.entries.len(), 4);
    std::assert_eq!(ifd.get_dimensions(), Some((200, 100)));
    std::assert_eq!(ifd.get_entry(259).and_then(|e| e.interpretation.as_deref()), Some("LZW"));

    let payloads = tiff.embedded_payloads();
    std::assert_eq!(payloads.len(), 1);
    std::assert_eq!(payloads[0].kind, PayloadKind::IccProfile);
    std::assert_eq!(read_payload(&mut cursor, &payloads[0]).unwrap(), b"ICCPROF!".to_vec());

    std::assert!(tiff.ifds[1].is_thumbnail);
}

#[test]
fn test_load_from_disk() {
    let path = std::env::temp_dir().join(format!("tiffval-{}.tif", std::process::id()));
    {
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&sample_file()).unwrap();
    }

    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let tiff = TiffReader::new()
        .load(path.to_str().unwrap(), &mut diagnostics)
        .unwrap();
    std::fs::remove_file(&path).ok();

    std::assert_eq!(tiff.ifd_count(), 2);
    std::assert!(tiff.is_valid());
}

#[test]
fn test_config_limits_walk() {
    let config = Config::from_toml_str("[parser]\nmax_ifds = 1\n").unwrap();
    let mut cursor = Cursor::new(sample_file());
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let tiff = config.reader().read(&mut cursor, &mut diagnostics).unwrap();

    std::assert_eq!(tiff.ifd_count(), 1);
    std::assert!(tiff.has_diagnostic(DiagnosticCode::TooManyIFDs));
}

#[test]
fn test_config_replaces_registry() {
    let config = Config::from_toml_str(
        "[types]\n3 = \"SHORT 2\"\n4 = \"LONG 4\"\n7 = \"UNDEFINED 1\"\n\
         [tags]\n256 = \"ImageWidth\\tSHORT,LONG\\t1\"\n",
    )
    .unwrap();
    std::assert_eq!(config.registry().tag_count(), 1);

    let mut cursor = Cursor::new(sample_file());
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let tiff = config.reader().read(&mut cursor, &mut diagnostics).unwrap();

    // 257, 259 and 34675 are unknown to this registry
    let unknown = diagnostics
        .iter()
        .filter(|d| d.code == DiagnosticCode::UnknownTagWarning)
        .count();
    std::assert_eq!(unknown, 3);
    std::assert!(tiff.is_valid());
}

#[test]
fn test_config_errors() {
    std::assert!(Config::from_toml_str("[parser]\nmax_ifds = 0\n").is_err());
    std::assert!(Config::from_toml_str("[parser]\nmax_ifds = \"many\"\n").is_err());
    std::assert!(Config::from_toml_str("[types]\n3 = \"SHORT 2\"\n").is_err());
    std::assert!(Config::from_toml_str("not toml at all [").is_err());
    std::assert!(Config::load("/nonexistent/tiffval.toml").is_err());

    let default = Config::from_toml_str("").unwrap();
    std::assert_eq!(default.max_ifds, 1024);
    std::assert!(default.registry.is_none());
}

#[test]
fn test_xml_report() {
    let mut bytes = sample_file();
    // Break the sort order: swap ImageLength's tag to 255
    bytes[22] = 0xFF;
    bytes[23] = 0x00;

    let mut cursor = Cursor::new(bytes);
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let tiff = TiffReader::new().read(&mut cursor, &mut diagnostics).unwrap();

    let xml = report::to_xml_string("sample.tif", &tiff).unwrap();

    std::assert!(xml.starts_with("<?xml"));
    std::assert!(xml.contains(r#"<tiff file="sample.tif" version="6.0" validity="invalid">"#));
    std::assert!(xml.contains(r#"code="TagSortOrderError""#));
    std::assert!(xml.contains(r#"kind="ICC profile""#));
    std::assert!(xml.contains(r#"thumbnail="true""#));
}

#[test]
fn test_xml_report_for_several_files() {
    let mut cursor = Cursor::new(sample_file());
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let tiff = TiffReader::new().read(&mut cursor, &mut diagnostics).unwrap();

    let mut out = Vec::new();
    report::write_report(&mut out, &[("a.tif", &tiff), ("b.tif", &tiff)]).unwrap();
    let xml = String::from_utf8(out).unwrap();

    std::assert!(xml.contains(r#"<report files="2">"#));
    std::assert_eq!(xml.matches("<tiff ").count(), 2);
}
