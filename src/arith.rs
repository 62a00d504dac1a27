//! Elementary arithmetic on scalars.

use crate::constants::SUM_PRECISION_DIGITS;
use crate::rounding;

/// Average of two values, computed as `a/2 + b/2`.
///
/// Halving before adding keeps the intermediate finite when `a + b` would
/// overflow.
///
/// # Examples
/// ```
/// use u_numkit::arith::average;
/// assert_eq!(average(5.0, 5.0), 5.0);
/// assert_eq!(average(-3.0, 3.0), 0.0);
/// assert_eq!(average(f64::MAX, f64::MAX), f64::MAX);
/// ```
pub fn average(value1: f64, value2: f64) -> f64 {
    value1 / 2.0 + value2 / 2.0
}

/// Larger of two numbers.
///
/// Unlike [`f64::max`], a NaN operand makes the result NaN, and `+0.0`
/// is considered larger than `-0.0`.
///
/// # Examples
/// ```
/// use u_numkit::arith::max_number;
/// assert_eq!(max_number(0.0, 5.0), 5.0);
/// assert_eq!(max_number(-5.0, -1.0), -1.0);
/// assert!(max_number(1.0, f64::NAN).is_nan());
/// ```
pub fn max_number(first: f64, second: f64) -> f64 {
    if first.is_nan() || second.is_nan() {
        return f64::NAN;
    }
    if first == second {
        // Only differs for signed zeros.
        return if first.is_sign_negative() { second } else { first };
    }
    if first > second {
        first
    } else {
        second
    }
}

/// Cube of a number.
///
/// # Examples
/// ```
/// use u_numkit::arith::cube;
/// assert_eq!(cube(3.0), 27.0);
/// assert_eq!(cube(-2.0), -8.0);
/// ```
pub fn cube(num: f64) -> f64 {
    num * num * num
}

/// Sine of an angle in radians.
pub fn sine(num: f64) -> f64 {
    num.sin()
}

/// Sum of three numbers rounded to 12 decimal places.
///
/// Rounding removes binary representation noise such as
/// `0.1 + 0.2 + 0.3 == 0.6000000000000001`.
///
/// # Examples
/// ```
/// use u_numkit::arith::sum_of_numbers;
/// assert_eq!(sum_of_numbers(0.1, 0.2, 0.3), 0.6);
/// assert_eq!(sum_of_numbers(1.0, 2.0, 3.0), 6.0);
/// ```
pub fn sum_of_numbers(x1: f64, x2: f64, x3: f64) -> f64 {
    let scale = 10_f64.powi(SUM_PRECISION_DIGITS);
    rounding::round((x1 + x2 + x3) * scale) / scale
}

/// Last decimal digit of an integer; negative inputs give negative digits.
///
/// # Examples
/// ```
/// use u_numkit::arith::last_digit;
/// assert_eq!(last_digit(100), 0);
/// assert_eq!(last_digit(37), 7);
/// assert_eq!(last_digit(-37), -7);
/// ```
pub fn last_digit(value: i64) -> i64 {
    value % 10
}

/// Root of the linear equation `a·x + b = 0`.
///
/// `a == 0` is not guarded: the result is `±∞` (or NaN when `b == 0`).
///
/// # Examples
/// ```
/// use u_numkit::arith::linear_equation_root;
/// assert_eq!(linear_equation_root(5.0, -10.0), 2.0);
/// assert_eq!(linear_equation_root(1.0, 8.0), -8.0);
/// assert!(linear_equation_root(0.0, 0.0).is_nan());
/// ```
pub fn linear_equation_root(a: f64, b: f64) -> f64 {
    -b / a
}

// ============================================================================
// Tests
// ============================================================================
