use crate::core::{
    error::{FieldError, Result},
    number_kind::NumberKind,
};

use super::check_width;

pub const WIDTH: usize = 8;
pub const LOWEST: f64 = f64::NEG_INFINITY;
pub const HIGHEST: f64 = f64::INFINITY;

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

pub fn parse(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(FieldError::Parse {
            text: text.to_string(),
            kind: NumberKind::Double,
        }),
    }
}

pub fn format(value: f64) -> String {
    format!("{:?}", value)
}

#[inline(always)]
pub fn to_sortable(bits: i64) -> i64 {
    bits ^ ((bits >> 63) & 0x7fff_ffff_ffff_ffff)
}

#[inline(always)]
pub fn from_sortable(sortable: i64) -> i64 {
    to_sortable(sortable)
}

#[inline(always)]
pub fn double_to_sortable_long(value: f64) -> i64 {
    to_sortable(value.to_bits() as i64)
}

#[inline(always)]
pub fn sortable_long_to_double(sortable: i64) -> f64 {
    f64::from_bits(from_sortable(sortable) as u64)
}

#[inline]
pub fn encode(value: f64) -> [u8; WIDTH] {
    ((double_to_sortable_long(value) as u64) ^ SIGN_BIT).to_be_bytes()
}

#[inline]
pub fn decode(bytes: &[u8]) -> Result<f64> {
    check_width(bytes, WIDTH)?;
    let mut b8 = [0u8; WIDTH];
    b8.copy_from_slice(&bytes[..WIDTH]);
    Ok(sortable_long_to_double((u64::from_be_bytes(b8) ^ SIGN_BIT) as i64))
}

pub fn next_up(value: f64) -> f64 {
    if value == HIGHEST || value.is_nan() {
        return value;
    }
    sortable_long_to_double(double_to_sortable_long(value) + 1)
}

pub fn next_down(value: f64) -> f64 {
    if value == LOWEST || value.is_nan() {
        return value;
    }
    sortable_long_to_double(double_to_sortable_long(value) - 1)
}

#[inline]
pub fn to_raw_bits(value: f64) -> i64 {
    value.to_bits() as i64
}

#[inline]
pub fn from_raw_bits(bits: i64) -> f64 {
    f64::from_bits(bits as u64)
}

#[inline]
pub fn to_sortable_bits(value: f64) -> i64 {
    double_to_sortable_long(value)
}

#[inline]
pub fn from_sortable_bits(bits: i64) -> f64 {
    sortable_long_to_double(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_and_order() {
        let values = [
            f64::NEG_INFINITY,
            f64::MIN,
            -1.0,
            -f64::from_bits(1),
            -0.0,
            0.0,
            f64::from_bits(1),
            f64::MIN_POSITIVE,
            1.0,
            f64::MAX,
            f64::INFINITY,
        ];

        for v in values {
            assert_eq!(decode(&encode(v)).unwrap().to_bits(), v.to_bits());
        }

        let encoded: Vec<[u8; WIDTH]> = values.iter().map(|v| encode(*v)).collect();
        assert!(encoded.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_stepping() {
        assert_eq!(next_up(f64::INFINITY), f64::INFINITY);
        assert_eq!(next_down(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(next_up(f64::MAX), f64::INFINITY);
        assert_eq!(next_down(next_up(0.1)), 0.1);
        assert_eq!(next_up(-0.0).to_bits(), 0.0f64.to_bits());
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("0.1").unwrap(), 0.1);
        assert!(parse("nan").is_err());
        assert!(parse("").is_err());
    }
}
