//! Rust definition generation for the typecast schema generator.
//!
//! Emits one serde-ready struct per table, together with the resource-name
//! constant, the ordered field-name array, and the owned field-name set.

mod generator;
mod type_mapper;

pub use generator::Generator;
pub use type_mapper::RustTypeMapper;
// Re-exported so callers can drive the generator without importing
// typecast-codegen themselves.
pub use typecast_codegen::TargetCodegen;
