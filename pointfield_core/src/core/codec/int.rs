use crate::core::{
    error::{FieldError, Result},
    number_kind::NumberKind,
};

use super::check_width;

pub const WIDTH: usize = 4;
pub const LOWEST: i32 = i32::MIN;
pub const HIGHEST: i32 = i32::MAX;

pub fn parse(text: &str) -> Result<i32> {
    text.trim().parse::<i32>().map_err(|_| FieldError::Parse {
        text: text.to_string(),
        kind: NumberKind::Int,
    })
}

pub fn format(value: i32) -> String {
    value.to_string()
}

/// Big-endian with the sign bit flipped so lexicographic order == numeric order.
#[inline]
pub fn encode(value: i32) -> [u8; WIDTH] {
    ((value as u32) ^ 0x8000_0000).to_be_bytes()
}

#[inline]
pub fn decode(bytes: &[u8]) -> Result<i32> {
    check_width(bytes, WIDTH)?;
    let mut b4 = [0u8; WIDTH];
    b4.copy_from_slice(&bytes[..WIDTH]);
    Ok((u32::from_be_bytes(b4) ^ 0x8000_0000) as i32)
}

pub fn next_up(value: i32) -> i32 {
    value.saturating_add(1)
}

pub fn next_down(value: i32) -> i32 {
    value.saturating_sub(1)
}

#[inline]
pub fn to_raw_bits(value: i32) -> i64 {
    value as i64
}

#[inline]
pub fn from_raw_bits(bits: i64) -> i32 {
    bits as i32
}

#[inline]
pub fn to_sortable_bits(value: i32) -> i64 {
    value as i64
}

#[inline]
pub fn from_sortable_bits(bits: i64) -> i32 {
    bits as i32
}
