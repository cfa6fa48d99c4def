//! TypeScript definition generation for the typecast schema generator.
//!
//! Emits one interface per table, together with the literal field-name
//! union, the frozen field-name array, the resource-name constant, and the
//! frozen field-name set.

mod generator;
mod type_mapper;

pub use generator::Generator;
pub use type_mapper::TypeScriptTypeMapper;
// Re-exported so callers can drive the generator without importing
// typecast-codegen themselves.
pub use typecast_codegen::TargetCodegen;
