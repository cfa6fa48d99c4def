//! Rust type mapper implementation.

use typecast_codegen::TypeMapper;
use typecast_core::{SqlType, TargetFormat};

/// Rust type mapper implementation.
pub struct RustTypeMapper;

impl TypeMapper for RustTypeMapper {
    fn format(&self) -> TargetFormat {
        TargetFormat::Rust
    }

    fn map_sql_type(&self, sql_type: SqlType) -> &'static str {
        match sql_type {
            SqlType::Text => "String",
            SqlType::Integer => "isize",
            SqlType::Real => "f64",
        }
    }
}
