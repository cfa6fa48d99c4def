//! Format-agnostic code generation for the typecast schema generator.
//!
//! Each target format implements [`TargetCodegen`]; [`write_all`] drives a
//! catalog through a target into one definition file per table.

mod traits;
mod writer;

pub use traits::{TargetCodegen, TypeMapper};
pub use writer::{WriteReport, render_all, write_all};
