//! Numeric limits shared across the crate.

/// Largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as `f64` (2⁵³ − 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Negation of [`MAX_SAFE_INTEGER`].
pub const MIN_SAFE_INTEGER: f64 = -MAX_SAFE_INTEGER;

/// Smallest radix accepted by radix conversion and integer parsing.
pub const MIN_RADIX: u32 = 2;

/// Largest radix accepted by radix conversion and integer parsing (`0-9a-z`).
pub const MAX_RADIX: u32 = 36;

/// Upper bound on fraction digits for fixed and exponential notation.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Lower bound on significant digits for precision notation.
pub const MIN_PRECISION: usize = 1;

/// Upper bound on significant digits for precision notation.
pub const MAX_PRECISION: usize = 100;

/// Decimal places kept by [`crate::arith::sum_of_numbers`].
pub const SUM_PRECISION_DIGITS: i32 = 12;

/// Magnitude at and above which decimal rendering switches to exponent form.
pub const EXPONENTIAL_THRESHOLD: f64 = 1e21;
