//! TIFF code translators
//!
//! This module provides utilities for translating numeric TIFF tag values
//! into human-readable descriptions. The entry decoder stores these labels
//! on Compression and PhotometricInterpretation entries.

use crate::tiff::constants::{compression, photometric};

/// Converts a TIFF compression code to its human-readable description
pub fn compression_code_to_name(compression_code: u32) -> &'static str {
    match compression_code {
        compression::NONE => "Uncompressed",
        compression::CCITT_RLE => "CCITT Group 3 1-Dimensional Modified Huffman RLE",
        compression::CCITT_FAX3 => "CCITT Group 3 fax",
        compression::CCITT_FAX4 => "CCITT Group 4 fax",
        compression::LZW => "LZW",
        compression::JPEG_OLD => "JPEG (old-style)",
        compression::JPEG => "JPEG",
        compression::DEFLATE => "Adobe Deflate (zlib)",
        compression::JBIG_BW => "JBIG B&W",
        compression::JBIG_COLOR => "JBIG Color",
        compression::NEXT => "NeXT 2-bit RLE",
        compression::CCITT_RLEW => "CCITT RLE (word aligned)",
        compression::PACKBITS => "PackBits",
        compression::THUNDERSCAN => "ThunderScan 4-bit RLE",
        compression::PIXAR_DEFLATE => "Deflate",
        compression::SGILOG => "SGI LogLuv",
        compression::SGILOG24 => "SGI LogLuv 24-bit",
        compression::JPEG2000 => "JPEG 2000",
        compression::ZSTD => "ZSTD",
        _ => "Unknown",
    }
}

/// Converts a TIFF photometric interpretation code to its human-readable description
pub fn photometric_code_to_name(photometric_code: u32) -> &'static str {
    match photometric_code {
        photometric::WHITE_IS_ZERO => "WhiteIsZero",
        photometric::BLACK_IS_ZERO => "BlackIsZero",
        photometric::RGB => "RGB",
        photometric::PALETTE => "Palette Color",
        photometric::TRANSPARENCY_MASK => "Transparency Mask",
        photometric::SEPARATED => "Separated (CMYK)",
        photometric::YCBCR => "YCbCr",
        photometric::CIELAB => "CIE L*a*b*",
        photometric::ICCLAB => "ICC L*a*b*",
        photometric::ITULAB => "ITU L*a*b*",
        photometric::LOGL => "LogL",
        photometric::LOGLUV => "LogLuv",
        _ => "Unknown",
    }
}
