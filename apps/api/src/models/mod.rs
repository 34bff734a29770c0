pub mod simplified;

pub use simplified::{response_schema, Definition, SimplifiedResult};
