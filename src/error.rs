//! Error type for formatting requests with out-of-range arguments.
//!
//! Parsing never fails with an error: an unparseable string yields
//! `f64::NAN`. Only formatting arguments that name an impossible layout
//! (radix 37, 101 fraction digits, ...) are rejected.

use thiserror::Error;

/// Rejected formatting argument.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// Radix outside `2..=36`.
    #[error("radix must be between 2 and 36, got {0}")]
    RadixOutOfRange(u32),

    /// Fraction digit count above 100.
    #[error("fraction digits must be between 0 and 100, got {0}")]
    FractionDigitsOutOfRange(usize),

    /// Significant digit count outside `1..=100`.
    #[error("precision must be between 1 and 100, got {0}")]
    PrecisionOutOfRange(usize),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_bounds() {
        assert_eq!(
            FormatError::RadixOutOfRange(37).to_string(),
            "radix must be between 2 and 36, got 37"
        );
        assert_eq!(
            FormatError::FractionDigitsOutOfRange(101).to_string(),
            "fraction digits must be between 0 and 100, got 101"
        );
        assert_eq!(
            FormatError::PrecisionOutOfRange(0).to_string(),
            "precision must be between 1 and 100, got 0"
        );
    }
}
