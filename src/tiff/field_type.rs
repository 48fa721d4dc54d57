//! TIFF field types
//!
//! The closed set of type codes 1 through 13 that a classic TIFF entry
//! may declare.

use std::fmt;

use crate::tiff::constants::field_types;

/// Primitive type of a directory entry's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldType {
    Byte,
    Ascii,
    Short,
    Long,
    Rational,
    SByte,
    Undefined,
    SShort,
    SLong,
    SRational,
    Float,
    Double,
    Ifd,
}

impl FieldType {
    /// Maps a numeric type code to a field type, if it is a known one
    pub fn from_code(code: u16) -> Option<Self> {
        let field_type = match code {
            field_types::BYTE => FieldType::Byte,
            field_types::ASCII => FieldType::Ascii,
            field_types::SHORT => FieldType::Short,
            field_types::LONG => FieldType::Long,
            field_types::RATIONAL => FieldType::Rational,
            field_types::SBYTE => FieldType::SByte,
            field_types::UNDEFINED => FieldType::Undefined,
            field_types::SSHORT => FieldType::SShort,
            field_types::SLONG => FieldType::SLong,
            field_types::SRATIONAL => FieldType::SRational,
            field_types::FLOAT => FieldType::Float,
            field_types::DOUBLE => FieldType::Double,
            field_types::IFD => FieldType::Ifd,
            _ => return None,
        };
        Some(field_type)
    }

    /// Numeric type code
    pub fn code(&self) -> u16 {
        match self {
            FieldType::Byte => field_types::BYTE,
            FieldType::Ascii => field_types::ASCII,
            FieldType::Short => field_types::SHORT,
            FieldType::Long => field_types::LONG,
            FieldType::Rational => field_types::RATIONAL,
            FieldType::SByte => field_types::SBYTE,
            FieldType::Undefined => field_types::UNDEFINED,
            FieldType::SShort => field_types::SSHORT,
            FieldType::SLong => field_types::SLONG,
            FieldType::SRational => field_types::SRATIONAL,
            FieldType::Float => field_types::FLOAT,
            FieldType::Double => field_types::DOUBLE,
            FieldType::Ifd => field_types::IFD,
        }
    }

    /// Canonical upper-case name, as used in the type and tag tables
    pub fn name(&self) -> &'static str {
        match self {
            FieldType::Byte => "BYTE",
            FieldType::Ascii => "ASCII",
            FieldType::Short => "SHORT",
            FieldType::Long => "LONG",
            FieldType::Rational => "RATIONAL",
            FieldType::SByte => "SBYTE",
            FieldType::Undefined => "UNDEFINED",
            FieldType::SShort => "SSHORT",
            FieldType::SLong => "SLONG",
            FieldType::SRational => "SRATIONAL",
            FieldType::Float => "FLOAT",
            FieldType::Double => "DOUBLE",
            FieldType::Ifd => "IFD",
        }
    }

    /// Size in bytes of one element of this type
    pub fn size(&self) -> u32 {
        match self {
            FieldType::Byte | FieldType::Ascii | FieldType::SByte | FieldType::Undefined => 1,
            FieldType::Short | FieldType::SShort => 2,
            FieldType::Long | FieldType::SLong | FieldType::Float | FieldType::Ifd => 4,
            FieldType::Rational | FieldType::SRational | FieldType::Double => 8,
        }
    }

    /// BYTE, SHORT, LONG and IFD are interchangeable for unsigned integer tags
    pub fn is_unsigned_integer(&self) -> bool {
        matches!(
            self,
            FieldType::Byte | FieldType::Short | FieldType::Long | FieldType::Ifd
        )
    }

    /// Types introduced by TIFF 6.0 (SBYTE onwards)
    pub fn requires_tiff6(&self) -> bool {
        self.code() >= field_types::SBYTE
    }

    pub fn all() -> [FieldType; 13] {
        [
            FieldType::Byte,
            FieldType::Ascii,
            FieldType::Short,
            FieldType::Long,
            FieldType::Rational,
            FieldType::SByte,
            FieldType::Undefined,
            FieldType::SShort,
            FieldType::SLong,
            FieldType::SRational,
            FieldType::Float,
            FieldType::Double,
            FieldType::Ifd,
        ]
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
