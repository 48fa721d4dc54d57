//! TIFF revision inference
//!
//! A file starts out as TIFF 4.0 compliant. Certain tags, types and tag
//! values only exist from revision 5.0 or 6.0 on; seeing one raises the
//! minimum revision the file requires.

use std::fmt;

use crate::tiff::constants::{compression, photometric, tags};

/// Minimum TIFF revision a file, directory or entry requires
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TiffVersion {
    V4 = 4,
    V5 = 5,
    V6 = 6,
}

impl TiffVersion {
    pub fn number(&self) -> u8 {
        *self as u8
    }
}

impl Default for TiffVersion {
    fn default() -> Self {
        TiffVersion::V4
    }
}

impl fmt::Display for TiffVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.0", self.number())
    }
}

/// Revision implied by the mere presence of a tag
pub fn minimum_version_for_tag(tag: u16) -> Option<TiffVersion> {
    match tag {
        tags::ARTIST
        | tags::HOST_COMPUTER
        | tags::DATE_TIME
        | tags::PREDICTOR
        | tags::WHITE_POINT
        | tags::PRIMARY_CHROMATICITIES
        | tags::COLOR_MAP => Some(TiffVersion::V5),

        tags::COPYRIGHT
        | tags::HALFTONE_HINTS
        | tags::TILE_WIDTH
        | tags::TILE_LENGTH
        | tags::TILE_OFFSETS
        | tags::TILE_BYTE_COUNTS
        | tags::INK_SET
        | tags::INK_NAMES
        | tags::NUMBER_OF_INKS
        | tags::DOT_RANGE
        | tags::TARGET_PRINTER
        | tags::EXTRA_SAMPLES
        | tags::SAMPLE_FORMAT
        | tags::S_MIN_SAMPLE_VALUE
        | tags::S_MAX_SAMPLE_VALUE
        | tags::TRANSFER_RANGE
        | tags::JPEG_PROC
        | tags::JPEG_INTERCHANGE_FORMAT
        | tags::JPEG_INTERCHANGE_FORMAT_LENGTH
        | tags::JPEG_RESTART_INTERVAL
        | tags::JPEG_LOSSLESS_PREDICTORS
        | tags::JPEG_POINT_TRANSFORMS
        | tags::JPEG_Q_TABLES
        | tags::JPEG_DC_TABLES
        | tags::JPEG_AC_TABLES
        | tags::YCBCR_COEFFICIENTS
        | tags::YCBCR_SUB_SAMPLING
        | tags::YCBCR_POSITIONING
        | tags::REFERENCE_BLACK_WHITE => Some(TiffVersion::V6),

        _ => None,
    }
}

/// Revision implied by a compression scheme
pub fn minimum_version_for_compression(scheme: u32) -> Option<TiffVersion> {
    match scheme {
        compression::LZW => Some(TiffVersion::V5),
        compression::JPEG_OLD => Some(TiffVersion::V6),
        _ => None,
    }
}

/// Revision implied by a photometric interpretation
pub fn minimum_version_for_photometric(value: u32) -> Option<TiffVersion> {
    match value {
        photometric::PALETTE => Some(TiffVersion::V5),
        photometric::SEPARATED | photometric::YCBCR | photometric::CIELAB => {
            Some(TiffVersion::V6)
        }
        _ => None,
    }
}
