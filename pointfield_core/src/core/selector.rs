use std::fmt::Display;

use itertools::Itertools;

use super::{
    codec::EncodedValue,
    error::{FieldError, Result},
};

/// How a multi-valued document is reduced to one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectorType {
    Min,
    Max,
    First,
    Last,
    /// Lower median of the sorted values.
    MiddleMin,
    /// Upper median of the sorted values.
    MiddleMax,
}

impl SelectorType {
    pub fn name(&self) -> &'static str {
        match self {
            SelectorType::Min => "MIN",
            SelectorType::Max => "MAX",
            SelectorType::First => "FIRST",
            SelectorType::Last => "LAST",
            SelectorType::MiddleMin => "MIDDLE_MIN",
            SelectorType::MiddleMax => "MIDDLE_MAX",
        }
    }
}

impl Display for SelectorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Selects in the encoded domain, so MIN/MAX follow point order
/// (`-0.0` sorts before `+0.0`). First/Last follow input order.
pub fn select(values: &[EncodedValue], selector: SelectorType) -> Result<EncodedValue> {
    let chosen = match selector {
        SelectorType::Min => values.iter().min(),
        SelectorType::Max => values.iter().max(),
        SelectorType::First => values.first(),
        SelectorType::Last => values.last(),
        SelectorType::MiddleMin => values
            .iter()
            .sorted()
            .nth(values.len().saturating_sub(1) / 2),
        SelectorType::MiddleMax => values.iter().sorted().nth(values.len() / 2),
    };

    chosen.cloned().ok_or(FieldError::EmptyMultiValue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::float;

    fn encoded(values: &[f32]) -> Vec<EncodedValue> {
        values
            .iter()
            .map(|v| EncodedValue::from_slice(&float::encode(*v)))
            .collect()
    }

    fn pick(values: &[f32], selector: SelectorType) -> f32 {
        float::decode(select(&encoded(values), selector).unwrap().as_bytes()).unwrap()
    }

    #[test]
    fn test_selectors() {
        let values = [3.0, -1.5, 8.0, 0.25];
        assert_eq!(pick(&values, SelectorType::Min), -1.5);
        assert_eq!(pick(&values, SelectorType::Max), 8.0);
        assert_eq!(pick(&values, SelectorType::First), 3.0);
        assert_eq!(pick(&values, SelectorType::Last), 0.25);
        assert_eq!(pick(&values, SelectorType::MiddleMin), 0.25);
        assert_eq!(pick(&values, SelectorType::MiddleMax), 3.0);
    }

    #[test]
    fn test_middle_of_odd_count() {
        let values = [5.0, 1.0, 3.0];
        assert_eq!(pick(&values, SelectorType::MiddleMin), 3.0);
        assert_eq!(pick(&values, SelectorType::MiddleMax), 3.0);
    }

    #[test]
    fn test_signed_zero_and_infinity() {
        let values = [0.0, f32::NEG_INFINITY, -0.0];
        assert_eq!(pick(&values, SelectorType::Min), f32::NEG_INFINITY);
        assert_eq!(pick(&values, SelectorType::Max).to_bits(), 0.0f32.to_bits());
    }

    #[test]
    fn test_empty_values() {
        for selector in [SelectorType::Min, SelectorType::Last, SelectorType::MiddleMax] {
            assert_eq!(select(&[], selector), Err(FieldError::EmptyMultiValue));
        }
    }
}
