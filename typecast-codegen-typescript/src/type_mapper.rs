//! TypeScript type mapper implementation.

use typecast_codegen::TypeMapper;
use typecast_core::{SqlType, TargetFormat};

/// TypeScript type mapper implementation.
///
/// INTEGER and REAL both map to `number`; the distinction is a storage
/// detail with no TypeScript counterpart.
pub struct TypeScriptTypeMapper;

impl TypeMapper for TypeScriptTypeMapper {
    fn format(&self) -> TargetFormat {
        TargetFormat::TypeScript
    }

    fn map_sql_type(&self, sql_type: SqlType) -> &'static str {
        match sql_type {
            SqlType::Text => "string",
            SqlType::Integer => "number",
            SqlType::Real => "number",
        }
    }
}
