/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `i64` and `f64`
/// without silent data loss. Power is computed in floating point, so both its
/// operands and its result pass through these checks.
pub mod num;
