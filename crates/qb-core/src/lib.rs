pub mod assemble;
pub mod collect;
pub mod error;
pub mod id;
pub mod model;
pub mod tables;
pub mod transpile;

pub use assemble::{QmlDocument, TransformOutput, transform_document};
pub use collect::RunContext;
pub use error::{Result, TranspileError};
pub use id::IdAllocator;
pub use model::*;
pub use transpile::{TranspileOptions, transpile_node};
