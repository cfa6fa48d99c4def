//! TypeScript definition generator.

use typecast_codegen::{TargetCodegen, TypeMapper};
use typecast_core::{TableSchema, TargetFormat, to_pascal_case};

use crate::type_mapper::TypeScriptTypeMapper;

/// TypeScript code generator producing one interface per table.
pub struct Generator;

impl TargetCodegen for Generator {
    fn format(&self) -> TargetFormat {
        TargetFormat::TypeScript
    }

    fn render(&self, table: &TableSchema) -> String {
        let mapper = TypeScriptTypeMapper;
        let mut fields = String::new();
        let mut names: Vec<String> = Vec::new();
        for column in &table.columns {
            let token = mapper.map_sql_type(column.sql_type);
            let marker = if column.required { "" } else { "?" };
            fields.push_str(&format!("\t{}{}: {};\n", column.name, marker, token));
            names.push(format!("'{}'", column.name));
        }

        let type_name = to_pascal_case(&table.table_name);
        let table_name = &table.table_name;
        // The empty union is spelled `never`.
        let field_name_type = if names.is_empty() {
            "never".to_string()
        } else {
            names.join("|")
        };
        let field_names = names.join(", ");

        format!(
            r#"
export interface {type_name} {{
{fields}
}}

export type FieldNameType = {field_name_type};

export const FIELD_NAMES: readonly FieldNameType[] = Object.freeze([{field_names}]);
export const RESOURCE_NAME = '{table_name}';

export const FieldNameSet: ReadonlySet<FieldNameType> = Object.freeze(new Set(FIELD_NAMES));

"#
        )
    }
}
