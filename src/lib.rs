pub mod diagnosed;
pub mod error;
pub mod phases;
pub mod pipeline;
pub mod report;
pub mod schema;

// Re-export the main types for convenience
pub use crate::diagnosed::Diagnosed;
pub use crate::error::TokenError;
pub use crate::phases::Token;
pub use crate::pipeline::Pipeline;
pub use crate::schema::Schema;

/// Tokenize command-line arguments against a schema with the default pipeline
pub fn tokenize_args<S: AsRef<str>>(arguments: &[S], schema: &Schema) -> Diagnosed<Vec<Token>> {
  Pipeline::new().run(arguments, schema)
}
