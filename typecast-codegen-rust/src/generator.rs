//! Rust definition generator.

use typecast_codegen::{TargetCodegen, TypeMapper};
use typecast_core::{TableSchema, TargetFormat, to_pascal_case};

use crate::type_mapper::RustTypeMapper;

/// Rust code generator producing one serde-ready struct per table.
pub struct Generator;

impl TargetCodegen for Generator {
    fn format(&self) -> TargetFormat {
        TargetFormat::Rust
    }

    fn render(&self, table: &TableSchema) -> String {
        let mapper = RustTypeMapper;
        let mut fields = String::new();
        let mut names: Vec<String> = Vec::new();
        for column in &table.columns {
            let token = mapper.map_sql_type(column.sql_type);
            let ty = if column.required {
                token.to_string()
            } else {
                format!("Option<{token}>")
            };
            fields.push_str(&format!("\t{}: {},\n", column.name, ty));
            names.push(format!("\"{}\"", column.name));
        }

        let type_name = to_pascal_case(&table.table_name);
        let table_name = &table.table_name;
        let field_count = names.len();
        let field_names = names.join(", ");

        format!(
            r#"

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct {type_name} {{
{fields}
}}

pub const RESOURCE_NAME: &str = "{table_name}";
pub const FIELD_NAMES: [&str; {field_count}] = [{field_names}];

pub fn field_name_set() -> std::collections::HashSet<String> {{
    FIELD_NAMES.iter().map(|s| s.to_string()).collect()
}}
"#
        )
    }
}
