use std::sync::Arc;

use log::LevelFilter;

use crate::core::{diagnostics::FieldLogger, number_kind::NumberKind, point_field::PointField};

#[derive(Clone, Debug, Default)]
pub struct Configuration {
    /// Logging level off, error, warn, info, debug, trace (default: error)
    pub log_level: Option<LevelFilter>,
    /// Numeric kind of the field type (default: float)
    pub number_kind: Option<NumberKind>,
}

impl Configuration {
    pub fn build_logger(&self) -> FieldLogger {
        let level = self.log_level.unwrap_or(LevelFilter::Error);
        if level == LevelFilter::Off {
            return FieldLogger::disabled();
        }

        let logger = env_logger::Builder::new().filter_level(level).build();
        FieldLogger::new(Arc::new(logger))
    }

    pub fn point_field(&self) -> PointField {
        PointField::new(self.number_kind.unwrap_or(NumberKind::Float), self.build_logger())
    }
}
