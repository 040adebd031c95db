/// Core evaluation logic.
///
/// Walks the expression tree and propagates arithmetic errors.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked integer arithmetic for every operator except power.
pub mod binary;

/// Exponentiation through a floating-point intermediate.
pub mod power;
