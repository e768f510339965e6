use smallvec::SmallVec;

use super::{
    codec::{EncodedValue, NumericValue},
    error::{FieldError, Result},
    number_kind::{NumberKind, UninversionType},
    point_field::PointField,
    schema::SchemaField,
    selector::{SelectorType, select},
};

pub type DocId = u32;

/// Doc-values storage mode of a field, as reported by the index engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocValuesType {
    None,
    /// One value per document, raw bit layout.
    Numeric,
    /// Any number of values per document, sortable layout, ascending.
    SortedNumeric,
}

/// Per-document value access implemented by the index engine.
pub trait DocValuesLookup {
    fn doc_values_type(&self, field: &str) -> DocValuesType;

    fn numeric_value(&self, field: &str, doc: DocId) -> Option<i64>;

    fn sorted_numeric_values(&self, field: &str, doc: DocId) -> SmallVec<[i64; 4]>;
}

/// Field values exposed as a function over documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    Single {
        field: String,
        kind: NumberKind,
    },
    MultiValued {
        field: String,
        kind: NumberKind,
        selector: SelectorType,
    },
}

impl ValueSource {
    pub fn field(&self) -> &str {
        match self {
            ValueSource::Single { field, .. } | ValueSource::MultiValued { field, .. } => field,
        }
    }

    pub fn kind(&self) -> NumberKind {
        match self {
            ValueSource::Single { kind, .. } | ValueSource::MultiValued { kind, .. } => *kind,
        }
    }

    pub fn description(&self) -> String {
        match self {
            ValueSource::Single { field, kind } => format!("{}({})", kind, field),
            ValueSource::MultiValued { field, kind, selector } => {
                format!("{}({},{})", kind, field, selector)
            }
        }
    }

    /// Value of `doc`, or `None` when the document has no value.
    pub fn value_at<L: DocValuesLookup + ?Sized>(
        &self,
        lookup: &L,
        doc: DocId,
    ) -> Result<Option<NumericValue>> {
        let field = self.field();
        let codec = self.kind().codec();

        match (self, lookup.doc_values_type(field)) {
            (_, DocValuesType::None) => Err(FieldError::InternalInvariantViolation(field.to_string())),
            (_, DocValuesType::Numeric) => Ok(lookup
                .numeric_value(field, doc)
                .map(|bits| codec.from_raw_bits(bits))),
            (ValueSource::Single { .. }, DocValuesType::SortedNumeric) => Ok(lookup
                .sorted_numeric_values(field, doc)
                .first()
                .map(|&bits| codec.from_sortable_bits(bits))),
            (ValueSource::MultiValued { selector, .. }, DocValuesType::SortedNumeric) => {
                let values = lookup.sorted_numeric_values(field, doc);
                if values.is_empty() {
                    return Ok(None);
                }

                let encoded = values
                    .iter()
                    .map(|&bits| codec.encode(codec.from_sortable_bits(bits)))
                    .collect::<Result<SmallVec<[EncodedValue; 4]>>>()?;

                let chosen = select(&encoded, *selector)?;
                codec.decode(chosen.as_bytes()).map(Some)
            }
        }
    }
}

impl PointField {
    pub fn value_source(&self, field: &SchemaField) -> Result<ValueSource> {
        field.check_field_cache_source()?;

        Ok(ValueSource::Single {
            field: field.name.clone(),
            kind: self.kind(),
        })
    }

    /// Value source reducing a multi-valued field with `selector`. Single-valued
    /// fields fall back to `value_source`.
    pub fn single_value_source(
        &self,
        field: &SchemaField,
        selector: SelectorType,
    ) -> Result<ValueSource> {
        if !field.multi_valued {
            return self.value_source(field);
        }

        if !field.doc_values {
            return Err(FieldError::FieldCacheUnavailable {
                field: field.name.clone(),
                reason: "multi-valued value sources require doc values",
            });
        }

        Ok(ValueSource::MultiValued {
            field: field.name.clone(),
            kind: self.kind(),
            selector,
        })
    }

    pub fn uninversion_type(&self, field: &SchemaField) -> UninversionType {
        self.kind().uninversion_type(field.multi_valued)
    }
}
