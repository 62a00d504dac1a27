//! Rounding to integers and to powers of ten.
//!
//! [`round`] breaks ties toward positive infinity (`round(-2.5) == -2`),
//! which is *not* what [`f64::round`] does (ties away from zero). All
//! functions return non-finite inputs unchanged.

/// Largest integer less than or equal to `number`.
///
/// # Examples
/// ```
/// use u_numkit::rounding::floor;
/// assert_eq!(floor(5.5), 5.0);
/// assert_eq!(floor(-5.5), -6.0);
/// ```
pub fn floor(number: f64) -> f64 {
    number.floor()
}

/// Smallest integer greater than or equal to `number`.
///
/// # Examples
/// ```
/// use u_numkit::rounding::ceil;
/// assert_eq!(ceil(5.1), 6.0);
/// assert_eq!(ceil(-5.9), -5.0);
/// ```
pub fn ceil(number: f64) -> f64 {
    number.ceil()
}

/// Nearest integer, with ties rounded toward positive infinity.
///
/// The sign of zero follows the input: `round(-0.4)` is `-0.0`.
///
/// # Examples
/// ```
/// use u_numkit::rounding::round;
/// assert_eq!(round(2.5), 3.0);
/// assert_eq!(round(-2.5), -2.0);
/// assert_eq!(round(5.4), 5.0);
/// ```
pub fn round(number: f64) -> f64 {
    if !number.is_finite() {
        return number;
    }
    let lower = number.floor();
    // In [0, 1) and never rounded across 0.5; integral inputs give 0.
    let fraction = number - lower;
    let rounded = if fraction >= 0.5 { lower + 1.0 } else { lower };
    if rounded == 0.0 && number.is_sign_negative() {
        -0.0
    } else {
        rounded
    }
}

/// Integer part of `number`, discarding the fraction toward zero.
///
/// # Examples
/// ```
/// use u_numkit::rounding::trunc;
/// assert_eq!(trunc(5.5), 5.0);
/// assert_eq!(trunc(-5.5), -5.0);
/// ```
pub fn trunc(number: f64) -> f64 {
    number.trunc()
}

/// Rounds `num` to the nearest multiple of `10^pow`.
///
/// Ties follow [`round`]. Negative `pow` rounds to decimal places.
///
/// # Examples
/// ```
/// use u_numkit::rounding::round_to_power_of_ten;
/// assert_eq!(round_to_power_of_ten(1234.0, 0), 1234.0);
/// assert_eq!(round_to_power_of_ten(1234.0, 2), 1200.0);
/// assert_eq!(round_to_power_of_ten(1678.0, 3), 2000.0);
/// ```
pub fn round_to_power_of_ten(num: f64, pow: i32) -> f64 {
    let p = 10_f64.powf(f64::from(pow));
    round(num / p) * p
}

// ============================================================================
// Tests
// ============================================================================
