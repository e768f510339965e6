pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod fields;
pub mod number_kind;
pub mod point_field;
pub mod query;
pub mod schema;
pub mod selector;
pub mod sort;
pub mod value_source;
