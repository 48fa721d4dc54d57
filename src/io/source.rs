//! Cursor-tracking byte source
//!
//! `TiffSource` wraps a seekable reader together with the active byte order
//! and the total input length. The header parser, the directory walker and
//! the entry decoder all share one source, so every read advances a single
//! logical cursor.

use byteorder::ReadBytesExt;
use log::trace;
use std::io::{self, SeekFrom};

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::SeekableReader;
use crate::tiff::errors::{TiffError, TiffResult};
use crate::tiff::validation;

/// Random-access byte source with a settable byte order
pub struct TiffSource<'r> {
    reader: &'r mut dyn SeekableReader,
    byte_order: ByteOrder,
    handler: Box<dyn ByteOrderHandler>,
    length: u64,
    position: u64,
}

impl<'r> TiffSource<'r> {
    /// Wraps a reader, measuring its length and rewinding it to offset 0
    ///
    /// The byte order starts as little-endian until the header parser
    /// sets the real one.
    pub fn new(reader: &'r mut dyn SeekableReader) -> TiffResult<Self> {
        let length = validation::get_file_size(reader)?;
        reader.seek(SeekFrom::Start(0))?;

        Ok(TiffSource {
            reader,
            byte_order: ByteOrder::LittleEndian,
            handler: ByteOrder::LittleEndian.create_handler(),
            length,
            position: 0,
        })
    }

    /// Total length of the input in bytes
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Current cursor position
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Switches the byte order used by all subsequent multi-byte reads
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        trace!("Byte order set to {}", byte_order.name());
        self.byte_order = byte_order;
        self.handler = byte_order.create_handler();
    }

    /// Moves the cursor to an absolute offset
    pub fn seek(&mut self, offset: u64) -> TiffResult<()> {
        self.reader.seek(SeekFrom::Start(offset))?;
        self.position = offset;
        Ok(())
    }

    /// Returns true when `len` bytes starting at `offset` lie inside the input
    pub fn contains(&self, offset: u64, len: u64) -> bool {
        offset
            .checked_add(len)
            .map_or(false, |end| end <= self.length)
    }

    pub fn read_u8(&mut self) -> TiffResult<u8> {
        let result = self.reader.read_u8();
        self.track(result, 1)
    }

    pub fn read_i8(&mut self) -> TiffResult<i8> {
        let result = self.reader.read_i8();
        self.track(result, 1)
    }

    pub fn read_u16(&mut self) -> TiffResult<u16> {
        let result = self.handler.read_u16(&mut *self.reader);
        self.track(result, 2)
    }

    pub fn read_i16(&mut self) -> TiffResult<i16> {
        let result = self.handler.read_i16(&mut *self.reader);
        self.track(result, 2)
    }

    pub fn read_u32(&mut self) -> TiffResult<u32> {
        let result = self.handler.read_u32(&mut *self.reader);
        self.track(result, 4)
    }

    pub fn read_i32(&mut self) -> TiffResult<i32> {
        let result = self.handler.read_i32(&mut *self.reader);
        self.track(result, 4)
    }

    pub fn read_f32(&mut self) -> TiffResult<f32> {
        let result = self.handler.read_f32(&mut *self.reader);
        self.track(result, 4)
    }

    pub fn read_f64(&mut self) -> TiffResult<f64> {
        let result = self.handler.read_f64(&mut *self.reader);
        self.track(result, 8)
    }

    pub fn read_rational(&mut self) -> TiffResult<(u32, u32)> {
        let result = self.handler.read_rational(&mut *self.reader);
        self.track(result, 8)
    }

    pub fn read_srational(&mut self) -> TiffResult<(i32, i32)> {
        let result = self.handler.read_srational(&mut *self.reader);
        self.track(result, 8)
    }

    /// Reads exactly `len` raw bytes
    pub fn read_bytes(&mut self, len: usize) -> TiffResult<Vec<u8>> {
        let mut buffer = vec![0u8; len];
        let result = self.reader.read_exact(&mut buffer);
        self.track(result, len as u64)?;
        Ok(buffer)
    }

    /// Advances the tracked position after a read, mapping a short read to
    /// `PrematureEOF` at the offset where the read started
    fn track<T>(&mut self, result: io::Result<T>, width: u64) -> TiffResult<T> {
        match result {
            Ok(value) => {
                self.position += width;
                Ok(value)
            }
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                Err(TiffError::PrematureEOF { offset: self.position })
            }
            Err(e) => Err(TiffError::IoError(e)),
        }
    }
}
