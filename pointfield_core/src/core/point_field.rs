use super::{codec::FieldCodec, diagnostics::FieldLogger, number_kind::NumberKind};

/// A point-encoded numeric field type.
///
/// Query construction, sorting, value sources and field creation are
/// implemented in their own modules as further `impl PointField` blocks.
#[derive(Debug, Clone)]
pub struct PointField {
    kind: NumberKind,
    logger: FieldLogger,
}

impl PointField {
    pub fn new(kind: NumberKind, logger: FieldLogger) -> Self {
        PointField { kind, logger }
    }

    pub fn float(logger: FieldLogger) -> Self {
        PointField::new(NumberKind::Float, logger)
    }

    #[inline]
    pub fn kind(&self) -> NumberKind {
        self.kind
    }

    #[inline]
    pub fn codec(&self) -> &'static dyn FieldCodec {
        self.kind.codec()
    }

    #[inline]
    pub(crate) fn logger(&self) -> &FieldLogger {
        &self.logger
    }
}
