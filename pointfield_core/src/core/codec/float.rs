use crate::core::{
    error::{FieldError, Result},
    number_kind::NumberKind,
};

use super::check_width;

pub const WIDTH: usize = 4;
pub const LOWEST: f32 = f32::NEG_INFINITY;
pub const HIGHEST: f32 = f32::INFINITY;

const SIGN_BIT: u32 = 0x8000_0000;

pub fn parse(text: &str) -> Result<f32> {
    match text.trim().parse::<f32>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(FieldError::Parse {
            text: text.to_string(),
            kind: NumberKind::Float,
        }),
    }
}

pub fn format(value: f32) -> String {
    format!("{:?}", value)
}

/// Converts between the raw IEEE-754 layout and the sortable layout.
/// The transform is its own inverse.
#[inline(always)]
pub fn to_sortable(bits: i32) -> i32 {
    bits ^ ((bits >> 31) & 0x7fff_ffff)
}

#[inline(always)]
pub fn from_sortable(sortable: i32) -> i32 {
    to_sortable(sortable)
}

#[inline(always)]
pub fn float_to_sortable_int(value: f32) -> i32 {
    to_sortable(value.to_bits() as i32)
}

#[inline(always)]
pub fn sortable_int_to_float(sortable: i32) -> f32 {
    f32::from_bits(from_sortable(sortable) as u32)
}

#[inline]
pub fn encode(value: f32) -> [u8; WIDTH] {
    ((float_to_sortable_int(value) as u32) ^ SIGN_BIT).to_be_bytes()
}

#[inline]
pub fn decode(bytes: &[u8]) -> Result<f32> {
    check_width(bytes, WIDTH)?;
    let mut b4 = [0u8; WIDTH];
    b4.copy_from_slice(&bytes[..WIDTH]);
    Ok(sortable_int_to_float((u32::from_be_bytes(b4) ^ SIGN_BIT) as i32))
}

/// Next value in encoding order. `-0.0` steps to `+0.0`; `+inf` saturates.
pub fn next_up(value: f32) -> f32 {
    if value == HIGHEST || value.is_nan() {
        return value;
    }
    sortable_int_to_float(float_to_sortable_int(value) + 1)
}

/// Previous value in encoding order. `+0.0` steps to `-0.0`; `-inf` saturates.
pub fn next_down(value: f32) -> f32 {
    if value == LOWEST || value.is_nan() {
        return value;
    }
    sortable_int_to_float(float_to_sortable_int(value) - 1)
}

#[inline]
pub fn to_raw_bits(value: f32) -> i64 {
    value.to_bits() as i32 as i64
}

#[inline]
pub fn from_raw_bits(bits: i64) -> f32 {
    f32::from_bits(bits as i32 as u32)
}

#[inline]
pub fn to_sortable_bits(value: f32) -> i64 {
    float_to_sortable_int(value) as i64
}

#[inline]
pub fn from_sortable_bits(bits: i64) -> f32 {
    sortable_int_to_float(bits as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn specials() -> Vec<f32> {
        vec![
            f32::NEG_INFINITY,
            f32::MIN,
            -1.0e10,
            -1.0,
            -f32::MIN_POSITIVE,
            -f32::from_bits(1),
            -0.0,
            0.0,
            f32::from_bits(1),
            f32::from_bits(0x007f_ffff),
            f32::MIN_POSITIVE,
            1.0,
            1.5,
            1.0e10,
            f32::MAX,
            f32::INFINITY,
        ]
    }

    #[test]
    fn test_roundtrip_keeps_bits() {
        for v in specials() {
            let decoded = decode(&encode(v)).unwrap();
            assert_eq!(decoded.to_bits(), v.to_bits(), "roundtrip failed for {:?}", v);
        }
    }

    #[test]
    fn test_encoding_preserves_order() {
        let values = specials();
        let encoded: Vec<[u8; WIDTH]> = values.iter().map(|v| encode(*v)).collect();
        for pair in encoded.windows(2) {
            assert!(pair[0] < pair[1], "{:?} !< {:?}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_random_order_matches_total_order() {
        let mut rng = rand::rng();
        for _ in 0..10_000 {
            let a = f32::from_bits(rng.random::<u32>());
            let b = f32::from_bits(rng.random::<u32>());
            if a.is_nan() || b.is_nan() {
                continue;
            }
            assert_eq!(encode(a).cmp(&encode(b)), a.total_cmp(&b), "{:?} vs {:?}", a, b);
        }
    }

    #[test]
    fn test_sortable_layout() {
        for v in specials() {
            let bits = v.to_bits() as i32;
            assert_eq!(from_sortable(to_sortable(bits)), bits);
        }
        let sorted: Vec<i32> = specials().iter().map(|v| float_to_sortable_int(*v)).collect();
        assert!(sorted.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(from_sortable_bits(to_sortable_bits(-2.5)), -2.5);
        assert_eq!(from_raw_bits(to_raw_bits(-2.5)), -2.5);
    }

    #[test]
    fn test_next_up_next_down() {
        assert_eq!(next_up(1.0), f32::from_bits(1.0f32.to_bits() + 1));
        assert_eq!(next_down(1.0), f32::from_bits(1.0f32.to_bits() - 1));
        assert_eq!(next_up(-0.0).to_bits(), 0.0f32.to_bits());
        assert_eq!(next_down(0.0).to_bits(), (-0.0f32).to_bits());
        assert_eq!(next_up(f32::MAX), f32::INFINITY);
        assert_eq!(next_up(f32::INFINITY), f32::INFINITY);
        assert_eq!(next_down(f32::NEG_INFINITY), f32::NEG_INFINITY);
        assert_eq!(next_up(f32::NEG_INFINITY), f32::MIN);

        for v in specials() {
            if v.is_finite() {
                assert_eq!(next_down(next_up(v)).to_bits(), v.to_bits());
                assert_eq!(next_up(next_down(v)).to_bits(), v.to_bits());
            }
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse("1.5").unwrap(), 1.5);
        assert_eq!(parse(" -2 ").unwrap(), -2.0);
        assert_eq!(parse("1e3").unwrap(), 1000.0);
        assert_eq!(parse("-Infinity").unwrap(), f32::NEG_INFINITY);
        assert_eq!(parse("inf").unwrap(), f32::INFINITY);
        assert!(parse("not-a-number").is_err());
        assert!(parse("").is_err());
        assert!(parse("NaN").is_err());
        assert!(parse("1,5").is_err());
    }

    #[test]
    fn test_format_parses_back() {
        for v in specials() {
            assert_eq!(parse(&format(v)).unwrap().to_bits(), v.to_bits());
        }
        assert_eq!(format(1.0), "1.0");
    }
}
