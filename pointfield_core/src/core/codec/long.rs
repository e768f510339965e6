use crate::core::{
    error::{FieldError, Result},
    number_kind::NumberKind,
};

use super::check_width;

pub const WIDTH: usize = 8;
pub const LOWEST: i64 = i64::MIN;
pub const HIGHEST: i64 = i64::MAX;

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;

pub fn parse(text: &str) -> Result<i64> {
    text.trim().parse::<i64>().map_err(|_| FieldError::Parse {
        text: text.to_string(),
        kind: NumberKind::Long,
    })
}

pub fn format(value: i64) -> String {
    value.to_string()
}

#[inline]
pub fn encode(value: i64) -> [u8; WIDTH] {
    ((value as u64) ^ SIGN_BIT).to_be_bytes()
}

#[inline]
pub fn decode(bytes: &[u8]) -> Result<i64> {
    check_width(bytes, WIDTH)?;
    let mut b8 = [0u8; WIDTH];
    b8.copy_from_slice(&bytes[..WIDTH]);
    Ok((u64::from_be_bytes(b8) ^ SIGN_BIT) as i64)
}

pub fn next_up(value: i64) -> i64 {
    value.saturating_add(1)
}

pub fn next_down(value: i64) -> i64 {
    value.saturating_sub(1)
}

#[inline]
pub fn to_raw_bits(value: i64) -> i64 {
    value
}

#[inline]
pub fn from_raw_bits(bits: i64) -> i64 {
    bits
}

#[inline]
pub fn to_sortable_bits(value: i64) -> i64 {
    value
}

#[inline]
pub fn from_sortable_bits(bits: i64) -> i64 {
    bits
}
