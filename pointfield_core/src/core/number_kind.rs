use std::fmt::Display;

use super::codec::{DoubleCodec, FieldCodec, FloatCodec, IntCodec, LongCodec};

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum NumberKind {
    Float,
    Double,
    Int,
    Long,
}

impl Display for NumberKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Strategy the engine uses to rebuild per-document values from the
/// inverted index when a field carries no doc values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UninversionType {
    FloatPoint,
    SortedFloat,
    DoublePoint,
    SortedDouble,
    IntegerPoint,
    SortedInteger,
    LongPoint,
    SortedLong,
}

impl NumberKind {
    pub fn name(&self) -> &'static str {
        match self {
            NumberKind::Float => "float",
            NumberKind::Double => "double",
            NumberKind::Int => "int",
            NumberKind::Long => "long",
        }
    }

    /// Encoded width in bytes.
    pub fn width(&self) -> usize {
        match self {
            NumberKind::Float | NumberKind::Int => 4,
            NumberKind::Double | NumberKind::Long => 8,
        }
    }

    /// Codec for this kind. Selected once per field.
    pub fn codec(&self) -> &'static dyn FieldCodec {
        match self {
            NumberKind::Float => &FloatCodec,
            NumberKind::Double => &DoubleCodec,
            NumberKind::Int => &IntCodec,
            NumberKind::Long => &LongCodec,
        }
    }

    pub fn uninversion_type(&self, multi_valued: bool) -> UninversionType {
        match (self, multi_valued) {
            (NumberKind::Float, true) => UninversionType::SortedFloat,
            (NumberKind::Float, false) => UninversionType::FloatPoint,
            (NumberKind::Double, true) => UninversionType::SortedDouble,
            (NumberKind::Double, false) => UninversionType::DoublePoint,
            (NumberKind::Int, true) => UninversionType::SortedInteger,
            (NumberKind::Int, false) => UninversionType::IntegerPoint,
            (NumberKind::Long, true) => UninversionType::SortedLong,
            (NumberKind::Long, false) => UninversionType::LongPoint,
        }
    }
}
