/// Tree construction.
///
/// Validates the token sequence and recursively partitions it into an
/// expression tree at the loosest-binding operator.
pub mod core;

/// Parenthesis helpers and split-point selection shared by the builder.
pub mod utils;
