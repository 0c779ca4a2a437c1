// Public API exports

pub mod ast;
pub mod emitter;
pub mod error;
pub mod keywords;
pub mod options;
pub mod parser;
pub mod render;
pub mod transpiler;

pub use error::{EmitError, ParseError, TranspileError};
pub use transpiler::{to_oracle, SqlTranspiler};
