//! TIFF validation utilities
//!
//! Checks shared by the header parser, the directory walker and the entry
//! decoder: offset alignment, input length, DateTime syntax and tile
//! geometry.

use std::io::SeekFrom;

use chrono::{NaiveDateTime, Timelike};
use lazy_static::lazy_static;
use log::warn;
use regex::Regex;

use crate::io::seekable::SeekableReader;
use crate::tiff::errors::TiffResult;
use crate::utils::string_utils;

lazy_static! {
    // Digits in the right places, any magnitude
    static ref LENIENT_DATE_TIME: Regex =
        Regex::new(r"^(\d+):(\d+):(\d+) (\d+):(\d+):(\d+)$").expect("valid regex");
    // Exact "YYYY:MM:DD HH:MM:SS" shape
    static ref STRICT_DATE_TIME: Regex =
        Regex::new(r"^\d{4}:\d{2}:\d{2} \d{2}:\d{2}:\d{2}$").expect("valid regex");
}

/// DateTime format used by TIFF
pub const DATE_TIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Tile dimensions must be a multiple of this
pub const TILE_DIMENSION_MULTIPLE: u32 = 16;

/// Outcome of checking a DateTime value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateTimeCheck {
    Valid,
    /// Not even shaped like a date and time
    BadFormat,
    /// Shaped correctly but not a real calendar date and time
    BadValue,
}

/// Gets the file size for validation purposes
///
/// # Arguments
/// * `reader` - The seekable reader to use
///
/// # Returns
/// The file size or u64::MAX if it couldn't be determined
pub fn get_file_size(reader: &mut dyn SeekableReader) -> TiffResult<u64> {
    let current_position = reader.stream_position()?;
    let file_size = match reader.seek(SeekFrom::End(0)) {
        Ok(size) => size,
        Err(e) => {
            warn!("Could not determine file size: {}", e);
            u64::MAX
        }
    };
    reader.seek(SeekFrom::Start(current_position))?;

    Ok(file_size)
}

/// TIFF offsets must start on an even byte
pub fn is_word_aligned(offset: u64) -> bool {
    offset & 1 == 0
}

/// Checks a DateTime text under a lenient and then a strict parse
///
/// Trailing NUL padding is ignored.
pub fn check_date_time(text: &str) -> DateTimeCheck {
    let text = string_utils::trim_trailing_nulls(text);

    if !LENIENT_DATE_TIME.is_match(text) {
        return DateTimeCheck::BadFormat;
    }

    if !STRICT_DATE_TIME.is_match(text) {
        return DateTimeCheck::BadValue;
    }

    // chrono accepts a leap second of 60
    match NaiveDateTime::parse_from_str(text, DATE_TIME_FORMAT) {
        Ok(dt) if dt.second() <= 59 && dt.nanosecond() < 1_000_000_000 => DateTimeCheck::Valid,
        _ => DateTimeCheck::BadValue,
    }
}

pub fn is_tile_dimension_valid(value: u32) -> bool {
    value % TILE_DIMENSION_MULTIPLE == 0
}
