use smallvec::SmallVec;

use super::{
    codec::{EncodedValue, NumericValue},
    error::{FieldError, Result},
    point_field::PointField,
    schema::SchemaField,
};

pub type PointVec = SmallVec<[EncodedValue; 8]>;

/// Query over encoded points, handed to the index engine as is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointQuery {
    Exact {
        field: String,
        point: EncodedValue,
    },
    /// Both bounds inclusive.
    Range {
        field: String,
        lower: EncodedValue,
        upper: EncodedValue,
    },
    /// Points are sorted and unique.
    Set {
        field: String,
        points: PointVec,
    },
}

impl PointQuery {
    pub fn field(&self) -> &str {
        match self {
            PointQuery::Exact { field, .. }
            | PointQuery::Range { field, .. }
            | PointQuery::Set { field, .. } => field,
        }
    }

    /// Whether a document whose field encodes to `point` matches.
    pub fn matches(&self, point: &[u8]) -> bool {
        match self {
            PointQuery::Exact { point: exact, .. } => exact.as_bytes() == point,
            PointQuery::Range { lower, upper, .. } => {
                lower.as_bytes() <= point && point <= upper.as_bytes()
            }
            PointQuery::Set { points, .. } => points
                .binary_search_by(|p| p.as_bytes().cmp(point))
                .is_ok(),
        }
    }
}

impl PointField {
    pub fn exact_query(&self, field: &SchemaField, text: &str) -> Result<PointQuery> {
        let codec = self.codec();
        let point = codec.encode(codec.parse(text)?)?;

        Ok(PointQuery::Exact {
            field: field.name.clone(),
            point,
        })
    }

    /// Missing bounds are open. Exclusive bounds are turned into inclusive ones
    /// by stepping to the adjacent representable value.
    pub fn range_query(
        &self,
        field: &SchemaField,
        min: Option<&str>,
        max: Option<&str>,
        min_inclusive: bool,
        max_inclusive: bool,
    ) -> Result<PointQuery> {
        let codec = self.codec();

        let actual_min: NumericValue = match min {
            None => codec.lowest(),
            Some(text) => {
                let value = codec.parse(text)?;
                if min_inclusive { value } else { codec.next_up(value)? }
            }
        };

        let actual_max: NumericValue = match max {
            None => codec.highest(),
            Some(text) => {
                let value = codec.parse(text)?;
                if max_inclusive { value } else { codec.next_down(value)? }
            }
        };

        self.logger().debug(format_args!(
            "Range query on '{}': [{:?}, {:?}]",
            field.name, actual_min, actual_max
        ));

        Ok(PointQuery::Range {
            field: field.name.clone(),
            lower: codec.encode(actual_min)?,
            upper: codec.encode(actual_max)?,
        })
    }

    pub fn set_query<I, S>(&self, field: &SchemaField, values: I) -> Result<PointQuery>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codec = self.codec();

        let mut points = PointVec::new();
        for text in values {
            points.push(codec.encode(codec.parse(text.as_ref())?)?);
        }

        if points.is_empty() {
            return Err(FieldError::EmptySet(field.name.clone()));
        }

        points.sort_unstable();
        points.dedup();

        self.logger().debug(format_args!(
            "Set query on '{}' with {} distinct values",
            field.name,
            points.len()
        ));

        Ok(PointQuery::Set {
            field: field.name.clone(),
            points,
        })
    }
}
