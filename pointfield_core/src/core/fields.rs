use smallvec::SmallVec;

use super::{
    codec::{EncodedValue, NumericValue},
    error::{FieldError, Result},
    point_field::PointField,
    schema::SchemaField,
    value_source::DocValuesType,
};

/// A value as it arrives from a document: already numeric, or text.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldInput {
    Number(NumericValue),
    Text(String),
}

impl From<NumericValue> for FieldInput {
    fn from(v: NumericValue) -> Self {
        FieldInput::Number(v)
    }
}

impl From<f32> for FieldInput {
    fn from(v: f32) -> Self {
        FieldInput::Number(v.into())
    }
}

impl From<f64> for FieldInput {
    fn from(v: f64) -> Self {
        FieldInput::Number(v.into())
    }
}

impl From<i32> for FieldInput {
    fn from(v: i32) -> Self {
        FieldInput::Number(v.into())
    }
}

impl From<i64> for FieldInput {
    fn from(v: i64) -> Self {
        FieldInput::Number(v.into())
    }
}

impl From<&str> for FieldInput {
    fn from(v: &str) -> Self {
        FieldInput::Text(v.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(v: String) -> Self {
        FieldInput::Text(v)
    }
}

/// One indexable part of a field value, as handed to or returned by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexableField {
    pub name: String,
    pub stored: bool,
    pub doc_values_type: DocValuesType,
    pub point: Option<EncodedValue>,
    /// Native value for points and stored parts; bit pattern (as `Long`) for doc values.
    pub numeric_value: Option<NumericValue>,
}

pub type FieldParts = SmallVec<[IndexableField; 3]>;

impl PointField {
    pub fn to_native_type(&self, value: &FieldInput) -> Result<NumericValue> {
        let codec = self.codec();
        match value {
            FieldInput::Number(number) => codec.coerce(*number),
            FieldInput::Text(text) => codec.parse(text),
        }
    }

    fn is_field_used(&self, field: &SchemaField) -> bool {
        if !(field.indexed || field.stored || field.doc_values) {
            self.logger().trace(format_args!(
                "Ignoring unindexed/unstored field: {}",
                field.name
            ));
            return false;
        }
        true
    }

    /// Point part of `value`. Boosts are not supported by points and are ignored.
    pub fn create_field(
        &self,
        field: &SchemaField,
        value: &FieldInput,
        boost: f32,
    ) -> Result<Option<IndexableField>> {
        if !self.is_field_used(field) {
            return Ok(None);
        }

        if boost != 1.0 {
            self.logger().trace(format_args!(
                "Can't use document/field boost for PointField. Field: {}, boost: {}",
                field.name, boost
            ));
        }

        let native = self.to_native_type(value)?;
        Ok(Some(IndexableField {
            name: field.name.clone(),
            stored: false,
            doc_values_type: DocValuesType::None,
            point: Some(self.codec().encode(native)?),
            numeric_value: Some(native),
        }))
    }

    /// All parts the schema asks for: point when indexed, doc value when
    /// `doc_values` (raw bits if single-valued, sortable bits if multi-valued)
    /// and a stored copy when stored.
    pub fn create_fields(
        &self,
        field: &SchemaField,
        value: &FieldInput,
        boost: f32,
    ) -> Result<FieldParts> {
        let codec = self.codec();
        let mut parts = FieldParts::new();

        let native = if field.indexed {
            let point = self.create_field(field, value, boost)?;
            let native = point.as_ref().and_then(|p| p.numeric_value);
            parts.extend(point);
            native
        } else {
            None
        };

        if field.doc_values {
            let native = match native {
                Some(native) => native,
                None => self.to_native_type(value)?,
            };

            let (doc_values_type, bits) = if field.multi_valued {
                (DocValuesType::SortedNumeric, codec.to_sortable_bits(native)?)
            } else {
                (DocValuesType::Numeric, codec.to_raw_bits(native)?)
            };

            parts.push(IndexableField {
                name: field.name.clone(),
                stored: false,
                doc_values_type,
                point: None,
                numeric_value: Some(NumericValue::Long(bits)),
            });
        }

        if field.stored {
            parts.push(self.stored_field(field, value)?);
        }

        Ok(parts)
    }

    pub fn stored_field(&self, field: &SchemaField, value: &FieldInput) -> Result<IndexableField> {
        Ok(IndexableField {
            name: field.name.clone(),
            stored: true,
            doc_values_type: DocValuesType::None,
            point: None,
            numeric_value: Some(self.to_native_type(value)?),
        })
    }

    /// Native value of a part retrieved from the engine.
    pub fn to_object(&self, field: &IndexableField) -> Result<NumericValue> {
        let codec = self.codec();
        let Some(value) = field.numeric_value else {
            return Err(FieldError::InternalInvariantViolation(field.name.clone()));
        };

        match (field.stored, field.doc_values_type) {
            (false, DocValuesType::Numeric) => Ok(codec.from_raw_bits(value.as_i64())),
            (false, DocValuesType::SortedNumeric) => Ok(codec.from_sortable_bits(value.as_i64())),
            _ => codec.coerce(value),
        }
    }

    pub fn term_to_object(&self, term: &[u8]) -> Result<NumericValue> {
        self.codec().decode(term)
    }

    pub fn indexed_to_readable(&self, indexed: &[u8]) -> Result<String> {
        let codec = self.codec();
        codec.format(codec.decode(indexed)?)
    }

    pub fn readable_to_indexed(&self, readable: &str) -> Result<EncodedValue> {
        let codec = self.codec();
        codec.encode(codec.parse(readable)?)
    }
}
