//! TIFF format constants
//!
//! This module defines constants used throughout the TIFF processing code,
//! making the code more readable and maintainable by replacing magic numbers
//! with descriptive names.

/// TIFF header constants
pub mod header {
    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// BigTIFF version number (43)
    pub const BIG_TIFF_VERSION: u16 = 43;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];
}

/// Directory layout constants
pub mod ifd {
    /// Size of the entry count field
    pub const ENTRY_COUNT_SIZE: u64 = 2;

    /// Size of one directory entry
    pub const ENTRY_SIZE: u64 = 12;

    /// Offset of the value/offset field inside an entry
    pub const VALUE_FIELD_OFFSET: u64 = 8;

    /// Largest value that fits in the value/offset field
    pub const INLINE_VALUE_SIZE: u64 = 4;

    /// Default bound on the number of directories walked in one file
    pub const DEFAULT_MAX_IFDS: usize = 1024;
}

/// Field type codes from TIFF 6.0 section 2
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
    pub const IFD: u16 = 13;       // 32-bit offset to a child IFD
}

/// Standard TIFF tags
pub mod tags {
    // Basic image structure tags
    #[cfg(test)]
    pub const SUBFILE_TYPE: u16 = 255;             // Old-style subfile data descriptor
    pub const IMAGE_WIDTH: u16 = 256;              // Width of the image in pixels
    pub const IMAGE_LENGTH: u16 = 257;             // Height of the image in pixels
    #[cfg(test)]
    pub const BITS_PER_SAMPLE: u16 = 258;          // Bits per component
    pub const COMPRESSION: u16 = 259;              // Compression scheme
    pub const PHOTOMETRIC_INTERPRETATION: u16 = 262; // Color space of image data
    #[cfg(test)]
    pub const STRIP_OFFSETS: u16 = 273;            // Offsets to the data strips
    #[cfg(test)]
    pub const X_RESOLUTION: u16 = 282;             // Pixels per resolution unit, horizontally

    // Descriptive tags
    #[cfg(test)]
    pub const SOFTWARE: u16 = 305;                 // Software used to create the image
    pub const DATE_TIME: u16 = 306;                // Date and time of image creation
    pub const ARTIST: u16 = 315;                   // Person who created the image
    pub const HOST_COMPUTER: u16 = 316;            // Computer where the image was created
    pub const COPYRIGHT: u16 = 33432;              // Copyright notice

    // Colorimetry tags
    pub const PREDICTOR: u16 = 317;                // Prediction scheme used on image data
    pub const WHITE_POINT: u16 = 318;
    pub const PRIMARY_CHROMATICITIES: u16 = 319;
    pub const COLOR_MAP: u16 = 320;                // Colormap for palette color images
    pub const HALFTONE_HINTS: u16 = 321;
    pub const TRANSFER_RANGE: u16 = 342;
    pub const REFERENCE_BLACK_WHITE: u16 = 532;

    // Tiling tags
    pub const TILE_WIDTH: u16 = 322;               // Width of a tile
    pub const TILE_LENGTH: u16 = 323;              // Length of a tile
    pub const TILE_OFFSETS: u16 = 324;             // Offsets to the data tiles
    pub const TILE_BYTE_COUNTS: u16 = 325;         // Byte counts for tiles

    // CMYK and sample description tags
    pub const INK_SET: u16 = 332;
    pub const INK_NAMES: u16 = 333;
    pub const NUMBER_OF_INKS: u16 = 334;
    pub const DOT_RANGE: u16 = 336;
    pub const TARGET_PRINTER: u16 = 337;
    pub const EXTRA_SAMPLES: u16 = 338;
    pub const SAMPLE_FORMAT: u16 = 339;            // Interpretation of sample data
    pub const S_MIN_SAMPLE_VALUE: u16 = 340;
    pub const S_MAX_SAMPLE_VALUE: u16 = 341;

    // Old-style JPEG tags
    pub const JPEG_PROC: u16 = 512;
    pub const JPEG_INTERCHANGE_FORMAT: u16 = 513;
    pub const JPEG_INTERCHANGE_FORMAT_LENGTH: u16 = 514;
    pub const JPEG_RESTART_INTERVAL: u16 = 515;
    pub const JPEG_LOSSLESS_PREDICTORS: u16 = 517;
    pub const JPEG_POINT_TRANSFORMS: u16 = 518;
    pub const JPEG_Q_TABLES: u16 = 519;
    pub const JPEG_DC_TABLES: u16 = 520;
    pub const JPEG_AC_TABLES: u16 = 521;

    // YCbCr tags
    pub const YCBCR_COEFFICIENTS: u16 = 529;
    pub const YCBCR_SUB_SAMPLING: u16 = 530;
    pub const YCBCR_POSITIONING: u16 = 531;

    // Embedded metadata payloads
    pub const XMP: u16 = 700;                      // XMP packet
    pub const ICC_PROFILE: u16 = 34675;            // Embedded ICC profile
}

/// Compression types
pub mod compression {
    pub const NONE: u32 = 1;              // No compression
    pub const CCITT_RLE: u32 = 2;         // CCITT modified Huffman RLE
    pub const CCITT_FAX3: u32 = 3;        // CCITT Group 3 fax
    pub const CCITT_FAX4: u32 = 4;        // CCITT Group 4 fax
    pub const LZW: u32 = 5;               // LZW compression
    pub const JPEG_OLD: u32 = 6;          // Old JPEG (deprecated)
    pub const JPEG: u32 = 7;              // JPEG compression
    pub const DEFLATE: u32 = 8;           // Adobe Deflate (zlib)
    pub const JBIG_BW: u32 = 9;           // JBIG for bi-level images
    pub const JBIG_COLOR: u32 = 10;       // JBIG for color images
    pub const NEXT: u32 = 32766;          // NeXT 2-bit RLE
    pub const CCITT_RLEW: u32 = 32771;    // CCITT RLE, word aligned
    pub const PACKBITS: u32 = 32773;      // PackBits compression
    pub const THUNDERSCAN: u32 = 32809;   // ThunderScan 4-bit RLE
    pub const PIXAR_DEFLATE: u32 = 32946; // Deflate, pre-registration code
    pub const SGILOG: u32 = 34676;        // SGI LogLuv
    pub const SGILOG24: u32 = 34677;      // SGI LogLuv 24-bit
    pub const JPEG2000: u32 = 34712;      // JPEG 2000
    pub const ZSTD: u32 = 50000;          // Zstandard compression
}

/// Photometric interpretation values
pub mod photometric {
    pub const WHITE_IS_ZERO: u32 = 0;     // Minimum value is white
    pub const BLACK_IS_ZERO: u32 = 1;     // Minimum value is black
    pub const RGB: u32 = 2;               // RGB color model
    pub const PALETTE: u32 = 3;           // Palette color (color map indexed)
    pub const TRANSPARENCY_MASK: u32 = 4; // Transparency mask
    pub const SEPARATED: u32 = 5;         // Separated, usually CMYK
    pub const YCBCR: u32 = 6;             // YCbCr color model
    pub const CIELAB: u32 = 8;            // CIE L*a*b color model
    pub const ICCLAB: u32 = 9;            // ICC L*a*b
    pub const ITULAB: u32 = 10;           // ITU L*a*b
    pub const LOGL: u32 = 32844;          // SGI LogL
    pub const LOGLUV: u32 = 32845;        // SGI LogLuv
}
