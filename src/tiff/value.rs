//! Decoded entry values
//!
//! One variant per TIFF primitive type, each in a scalar form (count of
//! one) and an array form. Readers consume exactly `count` fixed-width
//! elements from the current cursor position in the active byte order.

use std::fmt;

use crate::io::source::TiffSource;
use crate::tiff::errors::TiffResult;
use crate::tiff::field_type::FieldType;

/// Unsigned numerator/denominator pair, kept unreduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    pub fn new(numerator: u32, denominator: u32) -> Self {
        Rational { numerator, denominator }
    }

    /// Floating point approximation; `None` for a zero denominator
    pub fn to_f64(&self) -> Option<f64> {
        if self.denominator == 0 {
            None
        } else {
            Some(self.numerator as f64 / self.denominator as f64)
        }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Signed numerator/denominator pair, kept unreduced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SRational {
    pub fn new(numerator: i32, denominator: i32) -> Self {
        SRational { numerator, denominator }
    }
}

impl fmt::Display for SRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// A decoded entry value
///
/// ASCII has a single text form: the full byte run, NULs included.
#[derive(Debug, Clone, PartialEq)]
pub enum TiffValue {
    Byte(u8),
    ByteArray(Vec<u8>),
    Ascii(String),
    Short(u16),
    ShortArray(Vec<u16>),
    Long(u32),
    LongArray(Vec<u32>),
    Rational(Rational),
    RationalArray(Vec<Rational>),
    SByte(i8),
    SByteArray(Vec<i8>),
    Undefined(u8),
    UndefinedArray(Vec<u8>),
    SShort(i16),
    SShortArray(Vec<i16>),
    SLong(i32),
    SLongArray(Vec<i32>),
    SRational(SRational),
    SRationalArray(Vec<SRational>),
    Float(f32),
    FloatArray(Vec<f32>),
    Double(f64),
    DoubleArray(Vec<f64>),
    Ifd(u32),
    IfdArray(Vec<u32>),
}

impl TiffValue {
    /// Reads `count` elements of `field_type` from the source's cursor
    ///
    /// A count of exactly one produces the scalar variant; anything else
    /// produces the array variant.
    pub fn read(source: &mut TiffSource, field_type: FieldType, count: u32) -> TiffResult<Self> {
        let n = count as usize;
        let scalar = count == 1;

        let value = match field_type {
            FieldType::Ascii => {
                let bytes = source.read_bytes(n)?;
                TiffValue::Ascii(decode_ascii(&bytes))
            }
            FieldType::Byte => {
                let bytes = source.read_bytes(n)?;
                if scalar { TiffValue::Byte(bytes[0]) } else { TiffValue::ByteArray(bytes) }
            }
            FieldType::Undefined => {
                let bytes = source.read_bytes(n)?;
                if scalar { TiffValue::Undefined(bytes[0]) } else { TiffValue::UndefinedArray(bytes) }
            }
            FieldType::SByte => {
                let values = read_n(source, n, |s| s.read_i8())?;
                if scalar { TiffValue::SByte(values[0]) } else { TiffValue::SByteArray(values) }
            }
            FieldType::Short => {
                let values = read_n(source, n, |s| s.read_u16())?;
                if scalar { TiffValue::Short(values[0]) } else { TiffValue::ShortArray(values) }
            }
            FieldType::SShort => {
                let values = read_n(source, n, |s| s.read_i16())?;
                if scalar { TiffValue::SShort(values[0]) } else { TiffValue::SShortArray(values) }
            }
            FieldType::Long => {
                let values = read_n(source, n, |s| s.read_u32())?;
                if scalar { TiffValue::Long(values[0]) } else { TiffValue::LongArray(values) }
            }
            FieldType::Ifd => {
                let values = read_n(source, n, |s| s.read_u32())?;
                if scalar { TiffValue::Ifd(values[0]) } else { TiffValue::IfdArray(values) }
            }
            FieldType::SLong => {
                let values = read_n(source, n, |s| s.read_i32())?;
                if scalar { TiffValue::SLong(values[0]) } else { TiffValue::SLongArray(values) }
            }
            FieldType::Rational => {
                let values = read_n(source, n, |s| {
                    s.read_rational().map(|(num, den)| Rational::new(num, den))
                })?;
                if scalar { TiffValue::Rational(values[0]) } else { TiffValue::RationalArray(values) }
            }
            FieldType::SRational => {
                let values = read_n(source, n, |s| {
                    s.read_srational().map(|(num, den)| SRational::new(num, den))
                })?;
                if scalar { TiffValue::SRational(values[0]) } else { TiffValue::SRationalArray(values) }
            }
            FieldType::Float => {
                let values = read_n(source, n, |s| s.read_f32())?;
                if scalar { TiffValue::Float(values[0]) } else { TiffValue::FloatArray(values) }
            }
            FieldType::Double => {
                let values = read_n(source, n, |s| s.read_f64())?;
                if scalar { TiffValue::Double(values[0]) } else { TiffValue::DoubleArray(values) }
            }
        };

        Ok(value)
    }

    /// Type the value was decoded as
    pub fn field_type(&self) -> FieldType {
        match self {
            TiffValue::Byte(_) | TiffValue::ByteArray(_) => FieldType::Byte,
            TiffValue::Ascii(_) => FieldType::Ascii,
            TiffValue::Short(_) | TiffValue::ShortArray(_) => FieldType::Short,
            TiffValue::Long(_) | TiffValue::LongArray(_) => FieldType::Long,
            TiffValue::Rational(_) | TiffValue::RationalArray(_) => FieldType::Rational,
            TiffValue::SByte(_) | TiffValue::SByteArray(_) => FieldType::SByte,
            TiffValue::Undefined(_) | TiffValue::UndefinedArray(_) => FieldType::Undefined,
            TiffValue::SShort(_) | TiffValue::SShortArray(_) => FieldType::SShort,
            TiffValue::SLong(_) | TiffValue::SLongArray(_) => FieldType::SLong,
            TiffValue::SRational(_) | TiffValue::SRationalArray(_) => FieldType::SRational,
            TiffValue::Float(_) | TiffValue::FloatArray(_) => FieldType::Float,
            TiffValue::Double(_) | TiffValue::DoubleArray(_) => FieldType::Double,
            TiffValue::Ifd(_) | TiffValue::IfdArray(_) => FieldType::Ifd,
        }
    }

    /// Scalar unsigned integer value, for BYTE, SHORT, LONG and IFD scalars
    pub fn as_unsigned(&self) -> Option<u32> {
        match self {
            TiffValue::Byte(v) => Some(*v as u32),
            TiffValue::Short(v) => Some(*v as u32),
            TiffValue::Long(v) | TiffValue::Ifd(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_ascii(&self) -> Option<&str> {
        match self {
            TiffValue::Ascii(text) => Some(text),
            _ => None,
        }
    }

    /// Whether this is the array representation
    pub fn is_array(&self) -> bool {
        matches!(
            self,
            TiffValue::ByteArray(_)
                | TiffValue::ShortArray(_)
                | TiffValue::LongArray(_)
                | TiffValue::RationalArray(_)
                | TiffValue::SByteArray(_)
                | TiffValue::UndefinedArray(_)
                | TiffValue::SShortArray(_)
                | TiffValue::SLongArray(_)
                | TiffValue::SRationalArray(_)
                | TiffValue::FloatArray(_)
                | TiffValue::DoubleArray(_)
                | TiffValue::IfdArray(_)
        )
    }
}

impl fmt::Display for TiffValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiffValue::Byte(v) | TiffValue::Undefined(v) => write!(f, "{}", v),
            TiffValue::ByteArray(v) | TiffValue::UndefinedArray(v) => write_list(f, v),
            TiffValue::Ascii(text) => f.write_str(text),
            TiffValue::Short(v) => write!(f, "{}", v),
            TiffValue::ShortArray(v) => write_list(f, v),
            TiffValue::Long(v) | TiffValue::Ifd(v) => write!(f, "{}", v),
            TiffValue::LongArray(v) | TiffValue::IfdArray(v) => write_list(f, v),
            TiffValue::Rational(v) => write!(f, "{}", v),
            TiffValue::RationalArray(v) => write_list(f, v),
            TiffValue::SByte(v) => write!(f, "{}", v),
            TiffValue::SByteArray(v) => write_list(f, v),
            TiffValue::SShort(v) => write!(f, "{}", v),
            TiffValue::SShortArray(v) => write_list(f, v),
            TiffValue::SLong(v) => write!(f, "{}", v),
            TiffValue::SLongArray(v) => write_list(f, v),
            TiffValue::SRational(v) => write!(f, "{}", v),
            TiffValue::SRationalArray(v) => write_list(f, v),
            TiffValue::Float(v) => write!(f, "{}", v),
            TiffValue::FloatArray(v) => write_list(f, v),
            TiffValue::Double(v) => write!(f, "{}", v),
            TiffValue::DoubleArray(v) => write_list(f, v),
        }
    }
}

fn read_n<T>(
    source: &mut TiffSource,
    n: usize,
    mut read_one: impl FnMut(&mut TiffSource) -> TiffResult<T>,
) -> TiffResult<Vec<T>> {
    let mut values = Vec::with_capacity(n);
    for _ in 0..n {
        values.push(read_one(source)?);
    }
    Ok(values)
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

/// Byte-for-byte text conversion; embedded and trailing NULs are kept
fn decode_ascii(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
