pub mod configuration;
pub mod core;

pub use crate::core::{
    codec::{EncodedValue, FieldCodec, NumericValue},
    diagnostics::FieldLogger,
    error::{FieldError, Result},
    fields::{FieldInput, IndexableField},
    number_kind::{NumberKind, UninversionType},
    point_field::PointField,
    query::PointQuery,
    schema::SchemaField,
    selector::SelectorType,
    sort::SortSpec,
    value_source::{DocId, DocValuesLookup, DocValuesType, ValueSource},
};
