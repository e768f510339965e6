use super::{
    codec::{FieldCodec, NumericValue},
    error::Result,
    number_kind::NumberKind,
    point_field::PointField,
    schema::SchemaField,
};

#[derive(Debug, Clone, PartialEq)]
pub struct SortSpec {
    pub field: String,
    pub kind: NumberKind,
    /// Descending ("top") order.
    pub reverse: bool,
    /// Value substituted for documents without the field. `None` leaves the
    /// engine default in place.
    pub missing_value: Option<NumericValue>,
}

/// Picks the sentinel that puts documents without a value first or last.
/// `sort_missing_last` wins when both flags are set.
pub fn missing_value_sentinel(
    codec: &dyn FieldCodec,
    top: bool,
    sort_missing_first: bool,
    sort_missing_last: bool,
) -> Option<NumericValue> {
    if sort_missing_last {
        Some(if top { codec.lowest() } else { codec.highest() })
    } else if sort_missing_first {
        Some(if top { codec.highest() } else { codec.lowest() })
    } else {
        None
    }
}

impl PointField {
    pub fn sort_field(&self, field: &SchemaField, top: bool) -> Result<SortSpec> {
        field.check_sortability()?;

        Ok(SortSpec {
            field: field.name.clone(),
            kind: self.kind(),
            reverse: top,
            missing_value: missing_value_sentinel(
                self.codec(),
                top,
                field.sort_missing_first,
                field.sort_missing_last,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{diagnostics::FieldLogger, error::FieldError};

    fn sentinel(top: bool, first: bool, last: bool) -> Option<NumericValue> {
        let field = SchemaField {
            sort_missing_first: first,
            sort_missing_last: last,
            ..SchemaField::new("price")
        };
        PointField::float(FieldLogger::disabled())
            .sort_field(&field, top)
            .unwrap()
            .missing_value
    }

    #[test]
    fn test_missing_value_table() {
        let neg = Some(NumericValue::Float(f32::NEG_INFINITY));
        let pos = Some(NumericValue::Float(f32::INFINITY));

        assert_eq!(sentinel(true, false, true), neg);
        assert_eq!(sentinel(false, false, true), pos);
        assert_eq!(sentinel(true, true, false), pos);
        assert_eq!(sentinel(false, true, false), neg);
        assert_eq!(sentinel(true, false, false), None);
        assert_eq!(sentinel(false, false, false), None);
    }

    #[test]
    fn test_missing_last_wins() {
        assert_eq!(sentinel(false, true, true), Some(NumericValue::Float(f32::INFINITY)));
    }

    #[test]
    fn test_sort_spec() {
        let spec = PointField::float(FieldLogger::disabled())
            .sort_field(&SchemaField::new("price"), true)
            .unwrap();
        assert_eq!(spec.field, "price");
        assert_eq!(spec.kind, NumberKind::Float);
        assert!(spec.reverse);
    }

    #[test]
    fn test_integer_sentinels() {
        let codec = NumberKind::Int.codec();
        assert_eq!(missing_value_sentinel(codec, true, false, true), Some(NumericValue::Int(i32::MIN)));
        assert_eq!(missing_value_sentinel(codec, true, true, false), Some(NumericValue::Int(i32::MAX)));
    }

    #[test]
    fn test_unsortable_field() {
        let field = SchemaField { multi_valued: true, ..SchemaField::new("tags") };
        let err = PointField::float(FieldLogger::disabled()).sort_field(&field, false).unwrap_err();
        assert!(matches!(err, FieldError::UnsortableField { .. }));
    }
}
