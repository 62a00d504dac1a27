//! Classification predicates over dynamically typed values.
//!
//! All three predicates require a primitive [`Value::Number`]: a numeric
//! string or a boxed [`NumberObject`](crate::value::NumberObject) is never
//! classified as a number, integer, or safe integer.

use crate::constants::{MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
use crate::value::Value;

/// `true` iff `x` is finite and has no fractional part.
pub(crate) fn is_integral(x: f64) -> bool {
    x.is_finite() && x.trunc() == x
}

/// Returns `true` iff `value` is a primitive number that is neither NaN nor
/// infinite.
///
/// # Examples
/// ```
/// use u_numkit::classify::is_number;
/// use u_numkit::value::Value;
/// assert!(is_number(&Value::from(0.0)));
/// assert!(!is_number(&Value::from(f64::INFINITY)));
/// assert!(!is_number(&Value::from("5")));
/// ```
pub fn is_number(value: &Value) -> bool {
    value.as_primitive_number().is_some_and(f64::is_finite)
}

/// Returns `true` iff `value` is a primitive number with no fractional part.
///
/// # Examples
/// ```
/// use u_numkit::classify::is_integer;
/// use u_numkit::value::Value;
/// assert!(is_integer(&Value::from(5.0)));
/// assert!(!is_integer(&Value::from(5.1)));
/// assert!(!is_integer(&Value::from(f64::INFINITY)));
/// ```
pub fn is_integer(value: &Value) -> bool {
    value.as_primitive_number().is_some_and(is_integral)
}

/// Returns `true` iff `value` is an integer within
/// `[-(2⁵³ − 1), 2⁵³ − 1]`, the range where every integer is exactly
/// representable as an `f64`.
///
/// # Examples
/// ```
/// use u_numkit::classify::is_safe_integer;
/// use u_numkit::value::Value;
/// assert!(is_safe_integer(&Value::from(10.0)));
/// assert!(is_safe_integer(&Value::from(9007199254740991.0)));
/// assert!(!is_safe_integer(&Value::from(9007199254740992.0)));
/// ```
pub fn is_safe_integer(value: &Value) -> bool {
    value
        .as_primitive_number()
        .is_some_and(|x| is_integral(x) && (MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&x))
}

// ============================================================================
// Tests
// ============================================================================
