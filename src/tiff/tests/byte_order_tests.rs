//! Tests for the byte order module

extern crate std;

use std::io::Cursor;
use byteorder::{LittleEndian, BigEndian, WriteBytesExt};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler, LittleEndianHandler, BigEndianHandler};
use crate::io::source::TiffSource;
use crate::tiff::errors::TiffError;

#[test]
fn test_byte_order_detection_little_endian() {
    std::assert_eq!(ByteOrder::from_marker(*b"II"), Some(ByteOrder::LittleEndian));
}

#[test]
fn test_byte_order_detection_big_endian() {
    std::assert_eq!(ByteOrder::from_marker(*b"MM"), Some(ByteOrder::BigEndian));
}

#[test]
fn test_byte_order_detection_invalid() {
    std::assert_eq!(ByteOrder::from_marker(*b"IM"), None);
    std::assert_eq!(ByteOrder::from_marker([0x12, 0x34]), None);
}

#[test]
fn test_byte_order_guess() {
    std::assert_eq!(ByteOrder::guess_from_marker(*b"MX"), ByteOrder::BigEndian);
    std::assert_eq!(ByteOrder::guess_from_marker(*b"IX"), ByteOrder::LittleEndian);
    std::assert_eq!(ByteOrder::guess_from_marker([0, 0]), ByteOrder::LittleEndian);
}

#[test]
fn test_little_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
    buffer.write_i32::<LittleEndian>(-7).unwrap();
    buffer.write_u32::<LittleEndian>(3).unwrap();
    buffer.write_u32::<LittleEndian>(4).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = LittleEndianHandler;

    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    std::assert_eq!(handler.read_i32(&mut cursor).unwrap(), -7);
    std::assert_eq!(handler.read_rational(&mut cursor).unwrap(), (3, 4));
}

#[test]
fn test_big_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x1234).unwrap();
    buffer.write_u32::<BigEndian>(0x12345678).unwrap();
    buffer.write_f64::<BigEndian>(1.5).unwrap();
    buffer.write_i32::<BigEndian>(-1).unwrap();
    buffer.write_i32::<BigEndian>(2).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = BigEndianHandler;

    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    std::assert_eq!(handler.read_f64(&mut cursor).unwrap(), 1.5);
    std::assert_eq!(handler.read_srational(&mut cursor).unwrap(), (-1, 2));
}

#[test]
fn test_source_switches_byte_order() {
    let mut cursor = Cursor::new(vec![0x01, 0x02, 0x01, 0x02]);
    let mut source = TiffSource::new(&mut cursor).unwrap();

    std::assert_eq!(source.read_u16().unwrap(), 0x0201);
    source.set_byte_order(ByteOrder::BigEndian);
    std::assert_eq!(source.read_u16().unwrap(), 0x0102);
    std::assert_eq!(source.position(), 4);
}

#[test]
fn test_source_bounds() {
    let mut cursor = Cursor::new(vec![0u8; 10]);
    let source = TiffSource::new(&mut cursor).unwrap();

    std::assert_eq!(source.length(), 10);
    std::assert!(source.contains(6, 4));
    std::assert!(!source.contains(7, 4));
    std::assert!(!source.contains(u64::MAX, 2));
}

#[test]
fn test_source_short_read_is_premature_eof() {
    let mut cursor = Cursor::new(vec![0u8; 3]);
    let mut source = TiffSource::new(&mut cursor).unwrap();

    source.seek(2).unwrap();
    match source.read_u32() {
        Err(TiffError::PrematureEOF { offset }) => std::assert_eq!(offset, 2),
        other => panic!("expected PrematureEOF, got {:?}", other),
    }
}
