//! XML report output
//!
//! Serializes a parsed document field by field. The layout is:
//!
//! ```text
//! <tiff file=".." version="6.0" validity="valid">
//!   <header byteOrder=".." magic="42" firstIFD="8"/>
//!   <ifd number="0" offset="8" entries="12" validity="valid" version="5.0" first="true">
//!     <entry tag="256" name="ImageWidth" type="SHORT" count="1" validity="valid">
//!       <value>1024</value>
//!     </entry>
//!   </ifd>
//!   <diagnostic severity="ERROR" code="..">arg, arg</diagnostic>
//! </tiff>
//! ```
//!
//! Several documents go under a single `<report>` root.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::tiff::diagnostics::Diagnostic;
use crate::tiff::entry::IFDEntry;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::ifd::IFD;
use crate::tiff::types::TiffDocument;
use crate::utils::string_utils;

/// Writes one document as a standalone XML report
pub fn write_xml<W: Write>(out: W, file_name: &str, document: &TiffDocument) -> TiffResult<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_document(&mut writer, file_name, document)
}

/// Writes several documents under one `<report>` root
pub fn write_report<W: Write>(out: W, documents: &[(&str, &TiffDocument)]) -> TiffResult<()> {
    let mut writer = Writer::new_with_indent(out, b' ', 2);
    emit(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let count = documents.len().to_string();
    let mut root = BytesStart::new("report");
    root.push_attribute(("files", count.as_str()));
    emit(&mut writer, Event::Start(root))?;
    for (file_name, document) in documents {
        write_document(&mut writer, file_name, document)?;
    }
    emit(&mut writer, Event::End(BytesEnd::new("report")))
}

/// Renders one document as an XML string
pub fn to_xml_string(file_name: &str, document: &TiffDocument) -> TiffResult<String> {
    let mut buffer = Vec::new();
    write_xml(&mut buffer, file_name, document)?;
    String::from_utf8(buffer).map_err(|e| TiffError::GenericError(e.to_string()))
}

fn write_document<W: Write>(
    writer: &mut Writer<W>,
    file_name: &str,
    document: &TiffDocument,
) -> TiffResult<()> {
    let version = document.version.to_string();
    let mut root = BytesStart::new("tiff");
    root.push_attribute(("file", file_name));
    root.push_attribute(("version", version.as_str()));
    root.push_attribute(("validity", document.validity().as_str()));
    emit(writer, Event::Start(root))?;

    let header = &document.header;
    let magic = header.magic_number.to_string();
    let first_ifd = header.first_ifd_offset.to_string();
    let mut element = BytesStart::new("header");
    element.push_attribute(("byteOrder", header.byte_order.short_name()));
    element.push_attribute(("magic", magic.as_str()));
    element.push_attribute(("firstIFD", first_ifd.as_str()));
    element.push_attribute(("validity", header.validity().as_str()));
    if header.findings.diagnostics.is_empty() {
        emit(writer, Event::Empty(element))?;
    } else {
        emit(writer, Event::Start(element))?;
        write_diagnostics(writer, &header.findings.diagnostics)?;
        emit(writer, Event::End(BytesEnd::new("header")))?;
    }

    for ifd in &document.ifds {
        write_ifd(writer, ifd)?;
    }

    write_diagnostics(writer, &document.findings.diagnostics)?;
    emit(writer, Event::End(BytesEnd::new("tiff")))
}

fn write_ifd<W: Write>(writer: &mut Writer<W>, ifd: &IFD) -> TiffResult<()> {
    let number = ifd.number.to_string();
    let offset = ifd.offset.to_string();
    let entries = ifd.entry_count.to_string();
    let version = ifd.version.to_string();
    let next = ifd.next_ifd_offset.to_string();

    let mut element = BytesStart::new("ifd");
    element.push_attribute(("number", number.as_str()));
    element.push_attribute(("offset", offset.as_str()));
    element.push_attribute(("entries", entries.as_str()));
    element.push_attribute(("nextIFD", next.as_str()));
    element.push_attribute(("validity", ifd.validity().as_str()));
    element.push_attribute(("version", version.as_str()));
    if ifd.is_first {
        element.push_attribute(("first", "true"));
    }
    if ifd.is_thumbnail {
        element.push_attribute(("thumbnail", "true"));
    }
    emit(writer, Event::Start(element))?;

    for entry in &ifd.entries {
        write_entry(writer, entry)?;
    }
    write_diagnostics(writer, &ifd.findings.diagnostics)?;

    emit(writer, Event::End(BytesEnd::new("ifd")))
}

fn write_entry<W: Write>(writer: &mut Writer<W>, entry: &IFDEntry) -> TiffResult<()> {
    let tag = entry.tag.to_string();
    let count = entry.count.to_string();

    let mut element = BytesStart::new("entry");
    element.push_attribute(("tag", tag.as_str()));
    element.push_attribute(("name", entry.display_name()));
    element.push_attribute(("type", entry.type_name()));
    element.push_attribute(("count", count.as_str()));
    element.push_attribute(("validity", entry.validity().as_str()));
    if let Some(label) = &entry.interpretation {
        element.push_attribute(("interpretation", label.as_str()));
    }
    emit(writer, Event::Start(element))?;

    if let Some(value) = &entry.value {
        let text = string_utils::printable(&value.to_string());
        write_text_element(writer, "value", &text)?;
    }

    if let Some(payload) = &entry.payload {
        let offset = payload.offset.to_string();
        let length = payload.length.to_string();
        let mut element = BytesStart::new("payload");
        element.push_attribute(("kind", payload.kind.name()));
        element.push_attribute(("offset", offset.as_str()));
        element.push_attribute(("length", length.as_str()));
        emit(writer, Event::Empty(element))?;
    }

    write_diagnostics(writer, &entry.findings.diagnostics)?;
    emit(writer, Event::End(BytesEnd::new("entry")))
}

fn write_diagnostics<W: Write>(writer: &mut Writer<W>, diagnostics: &[Diagnostic]) -> TiffResult<()> {
    for diagnostic in diagnostics {
        let severity = diagnostic.severity.to_string();
        let mut element = BytesStart::new("diagnostic");
        element.push_attribute(("severity", severity.as_str()));
        element.push_attribute(("code", diagnostic.code.as_str()));
        emit(writer, Event::Start(element))?;
        emit(writer, Event::Text(BytesText::new(&diagnostic.args.join(", "))))?;
        emit(writer, Event::End(BytesEnd::new("diagnostic")))?;
    }
    Ok(())
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> TiffResult<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> TiffResult<()> {
    writer
        .write_event(event)
        .map_err(|e| TiffError::GenericError(format!("Failed to write XML: {}", e)))
}
