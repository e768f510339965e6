use super::error::{FieldError, Result};

/// Schema-level description of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaField {
    pub name: String,
    pub indexed: bool,
    pub stored: bool,
    pub doc_values: bool,
    pub multi_valued: bool,
    pub sort_missing_first: bool,
    pub sort_missing_last: bool,
}

impl SchemaField {
    /// Indexed and stored, single-valued, no doc values, no missing-value policy.
    pub fn new(name: impl Into<String>) -> Self {
        SchemaField {
            name: name.into(),
            indexed: true,
            stored: true,
            doc_values: false,
            multi_valued: false,
            sort_missing_first: false,
            sort_missing_last: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn check_sortability(&self) -> Result<()> {
        if !(self.indexed || self.doc_values) {
            return Err(FieldError::UnsortableField {
                field: self.name.clone(),
                reason: "field is neither indexed nor has doc values",
            });
        }
        if self.multi_valued {
            return Err(FieldError::UnsortableField {
                field: self.name.clone(),
                reason: "field is multi-valued",
            });
        }
        Ok(())
    }

    /// Point fields can always be un-inverted, so an indexed field qualifies
    /// even without doc values.
    pub fn check_field_cache_source(&self) -> Result<()> {
        if self.multi_valued {
            return Err(FieldError::FieldCacheUnavailable {
                field: self.name.clone(),
                reason: "field is multi-valued",
            });
        }
        if !(self.doc_values || self.indexed) {
            return Err(FieldError::FieldCacheUnavailable {
                field: self.name.clone(),
                reason: "field has no doc values and is not indexed",
            });
        }
        Ok(())
    }
}
