//! Order-preserving point codecs.
//!
//! Every kind encodes to a fixed-width, big-endian byte string whose unsigned
//! lexicographic order equals the numeric order of the native values. Doc-values
//! storage additionally uses two integer layouts carried in an `i64`:
//!
//! * raw: the IEEE-754 bit pattern (single-valued `Numeric` doc values),
//! * sortable: the bit pattern with the magnitude bits flipped for negative
//!   values, so that signed integer order equals float order
//!   (multi-valued `SortedNumeric` doc values).
//!
//! For the integer kinds both layouts are the value itself.

pub mod double;
pub mod float;
pub mod int;
pub mod long;

use smallvec::SmallVec;

use super::error::{FieldError, Result};
use super::number_kind::NumberKind;

/// Native value of a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum NumericValue {
    Float(f32),
    Double(f64),
    Int(i32),
    Long(i64),
}

impl NumericValue {
    pub fn kind(&self) -> NumberKind {
        match self {
            NumericValue::Float(_) => NumberKind::Float,
            NumericValue::Double(_) => NumberKind::Double,
            NumericValue::Int(_) => NumberKind::Int,
            NumericValue::Long(_) => NumberKind::Long,
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            NumericValue::Float(v) => v.is_nan(),
            NumericValue::Double(v) => v.is_nan(),
            NumericValue::Int(_) | NumericValue::Long(_) => false,
        }
    }

    pub fn as_f32(&self) -> f32 {
        match *self {
            NumericValue::Float(v) => v,
            NumericValue::Double(v) => v as f32,
            NumericValue::Int(v) => v as f32,
            NumericValue::Long(v) => v as f32,
        }
    }

    pub fn as_f64(&self) -> f64 {
        match *self {
            NumericValue::Float(v) => v as f64,
            NumericValue::Double(v) => v,
            NumericValue::Int(v) => v as f64,
            NumericValue::Long(v) => v as f64,
        }
    }

    pub fn as_i32(&self) -> i32 {
        match *self {
            NumericValue::Float(v) => v as i32,
            NumericValue::Double(v) => v as i32,
            NumericValue::Int(v) => v,
            NumericValue::Long(v) => v as i32,
        }
    }

    pub fn as_i64(&self) -> i64 {
        match *self {
            NumericValue::Float(v) => v as i64,
            NumericValue::Double(v) => v as i64,
            NumericValue::Int(v) => v as i64,
            NumericValue::Long(v) => v,
        }
    }
}

impl From<f32> for NumericValue {
    fn from(v: f32) -> Self {
        NumericValue::Float(v)
    }
}

impl From<f64> for NumericValue {
    fn from(v: f64) -> Self {
        NumericValue::Double(v)
    }
}

impl From<i32> for NumericValue {
    fn from(v: i32) -> Self {
        NumericValue::Int(v)
    }
}

impl From<i64> for NumericValue {
    fn from(v: i64) -> Self {
        NumericValue::Long(v)
    }
}

/// Fixed-width encoded point. Derived `Ord` is unsigned byte-wise order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EncodedValue(SmallVec<[u8; 8]>);

impl EncodedValue {
    #[inline]
    pub fn from_slice(bytes: &[u8]) -> Self {
        EncodedValue(SmallVec::from_slice(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for EncodedValue {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Uniform codec interface over all numeric kinds.
///
/// Methods taking a `NumericValue` fail with `TypeMismatch` when the value is
/// of another kind; use `coerce` first to convert foreign numbers.
pub trait FieldCodec: Send + Sync {
    fn kind(&self) -> NumberKind;

    fn width(&self) -> usize {
        self.kind().width()
    }

    /// Locale-independent parse. Empty, malformed and NaN input is rejected.
    fn parse(&self, text: &str) -> Result<NumericValue>;

    /// Text that `parse` reads back to the same value.
    fn format(&self, value: NumericValue) -> Result<String>;

    fn encode(&self, value: NumericValue) -> Result<EncodedValue>;

    /// Decodes the first `width()` bytes of `bytes`.
    fn decode(&self, bytes: &[u8]) -> Result<NumericValue>;

    /// Adjacent value above `value` in encoding order; saturates at `highest()`.
    fn next_up(&self, value: NumericValue) -> Result<NumericValue>;

    /// Adjacent value below `value` in encoding order; saturates at `lowest()`.
    fn next_down(&self, value: NumericValue) -> Result<NumericValue>;

    fn to_raw_bits(&self, value: NumericValue) -> Result<i64>;

    fn from_raw_bits(&self, bits: i64) -> NumericValue;

    fn to_sortable_bits(&self, value: NumericValue) -> Result<i64>;

    fn from_sortable_bits(&self, bits: i64) -> NumericValue;

    fn lowest(&self) -> NumericValue;

    fn highest(&self) -> NumericValue;

    /// Converts any numeric value to this kind.
    fn coerce(&self, value: NumericValue) -> Result<NumericValue>;
}

#[inline]
pub(crate) fn check_width(bytes: &[u8], width: usize) -> Result<()> {
    if bytes.len() < width {
        return Err(FieldError::InvalidLength {
            expected: width,
            got: bytes.len(),
        });
    }
    Ok(())
}

macro_rules! impl_field_codec {
    ($(($codec:ident, $module:ident, $variant:ident, $native:ty, $as_native:ident)),*) => {
        $(
            pub struct $codec;

            impl $codec {
                #[inline(always)]
                fn native(value: NumericValue) -> Result<$native> {
                    match value {
                        NumericValue::$variant(v) => Ok(v),
                        other => Err(FieldError::TypeMismatch {
                            expected: NumberKind::$variant,
                            got: other.kind(),
                        }),
                    }
                }
            }

            impl FieldCodec for $codec {
                #[inline]
                fn kind(&self) -> NumberKind {
                    NumberKind::$variant
                }

                fn parse(&self, text: &str) -> Result<NumericValue> {
                    $module::parse(text).map(NumericValue::$variant)
                }

                fn format(&self, value: NumericValue) -> Result<String> {
                    Ok($module::format(Self::native(value)?))
                }

                #[inline]
                fn encode(&self, value: NumericValue) -> Result<EncodedValue> {
                    Ok(EncodedValue::from_slice(&$module::encode(Self::native(value)?)))
                }

                #[inline]
                fn decode(&self, bytes: &[u8]) -> Result<NumericValue> {
                    $module::decode(bytes).map(NumericValue::$variant)
                }

                fn next_up(&self, value: NumericValue) -> Result<NumericValue> {
                    Ok(NumericValue::$variant($module::next_up(Self::native(value)?)))
                }

                fn next_down(&self, value: NumericValue) -> Result<NumericValue> {
                    Ok(NumericValue::$variant($module::next_down(Self::native(value)?)))
                }

                fn to_raw_bits(&self, value: NumericValue) -> Result<i64> {
                    Ok($module::to_raw_bits(Self::native(value)?))
                }

                fn from_raw_bits(&self, bits: i64) -> NumericValue {
                    NumericValue::$variant($module::from_raw_bits(bits))
                }

                fn to_sortable_bits(&self, value: NumericValue) -> Result<i64> {
                    Ok($module::to_sortable_bits(Self::native(value)?))
                }

                fn from_sortable_bits(&self, bits: i64) -> NumericValue {
                    NumericValue::$variant($module::from_sortable_bits(bits))
                }

                fn lowest(&self) -> NumericValue {
                    NumericValue::$variant($module::LOWEST)
                }

                fn highest(&self) -> NumericValue {
                    NumericValue::$variant($module::HIGHEST)
                }

                fn coerce(&self, value: NumericValue) -> Result<NumericValue> {
                    if value.is_nan() {
                        return Err(FieldError::NotANumber(NumberKind::$variant));
                    }
                    Ok(NumericValue::$variant(value.$as_native()))
                }
            }
        )*
    };
}

impl_field_codec!(
    (FloatCodec, float, Float, f32, as_f32),
    (DoubleCodec, double, Double, f64, as_f64),
    (IntCodec, int, Int, i32, as_i32),
    (LongCodec, long, Long, i64, as_i64)
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch() {
        let err = FloatCodec.encode(NumericValue::Long(1)).unwrap_err();
        assert_eq!(
            err,
            FieldError::TypeMismatch {
                expected: NumberKind::Float,
                got: NumberKind::Long
            }
        );
    }

    #[test]
    fn test_coerce() {
        assert_eq!(FloatCodec.coerce(NumericValue::Int(3)).unwrap(), NumericValue::Float(3.0));
        assert_eq!(IntCodec.coerce(NumericValue::Double(3.9)).unwrap(), NumericValue::Int(3));
        assert_eq!(
            LongCodec.coerce(NumericValue::Float(f32::NAN)).unwrap_err(),
            FieldError::NotANumber(NumberKind::Long)
        );
    }

    #[test]
    fn test_encoded_width_per_kind() {
        assert_eq!(FloatCodec.encode(1.5f32.into()).unwrap().len(), 4);
        assert_eq!(DoubleCodec.encode(1.5f64.into()).unwrap().len(), 8);
        assert_eq!(IntCodec.encode(7i32.into()).unwrap().len(), 4);
        assert_eq!(LongCodec.encode(7i64.into()).unwrap().len(), 8);
    }

    #[test]
    fn test_short_input_is_rejected() {
        assert_eq!(
            DoubleCodec.decode(&[0u8; 4]).unwrap_err(),
            FieldError::InvalidLength { expected: 8, got: 4 }
        );
    }

    #[test]
    fn test_lowest_highest() {
        assert_eq!(FloatCodec.lowest(), NumericValue::Float(f32::NEG_INFINITY));
        assert_eq!(DoubleCodec.highest(), NumericValue::Double(f64::INFINITY));
        assert_eq!(IntCodec.lowest(), NumericValue::Int(i32::MIN));
        assert_eq!(LongCodec.highest(), NumericValue::Long(i64::MAX));
    }
}
