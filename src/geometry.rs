//! Planar and solid geometry formulas.
//!
//! Lengths are computed with [`f64::hypot`] wherever two squared terms are
//! summed, so intermediate squares cannot overflow or underflow even when
//! the final length is representable.

use std::f64::consts::PI;

/// Area of a rectangle with the given `width` and `height`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::rectangle_area;
/// assert_eq!(rectangle_area(5.0, 10.0), 50.0);
/// assert_eq!(rectangle_area(0.0, 7.0), 0.0);
/// ```
pub fn rectangle_area(width: f64, height: f64) -> f64 {
    width * height
}

/// Circumference `2πr` of a circle with the given `radius`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::circle_circumference;
/// assert_eq!(circle_circumference(0.0), 0.0);
/// assert!((circle_circumference(5.0) - 31.41592653589793).abs() < 1e-12);
/// ```
pub fn circle_circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::distance_between_points;
/// assert_eq!(distance_between_points(0.0, 0.0, 3.0, 4.0), 5.0);
/// assert!((distance_between_points(-5.0, 0.0, 10.0, -10.0) - 18.027756377319946).abs() < 1e-12);
/// ```
pub fn distance_between_points(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (x2 - x1).hypot(y2 - y1)
}

/// Length of the hypotenuse of a right triangle with legs `a` and `b`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::hypotenuse;
/// assert_eq!(hypotenuse(3.0, 4.0), 5.0);
/// assert!(hypotenuse(1e200, 1e200).is_finite());
/// ```
pub fn hypotenuse(a: f64, b: f64) -> f64 {
    a.hypot(b)
}

/// Length of the space diagonal of a rectangular parallelepiped `a × b × c`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::parallelepiped_diagonal;
/// assert_eq!(parallelepiped_diagonal(1.0, 1.0, 1.0), 3.0_f64.sqrt());
/// assert_eq!(parallelepiped_diagonal(3.0, 3.0, 3.0), 27.0_f64.sqrt());
/// ```
pub fn parallelepiped_diagonal(a: f64, b: f64, c: f64) -> f64 {
    (a * a + b * b + c * c).sqrt()
}

/// Angle in radians between vectors `(x1, y1)` and `(x2, y2)`.
///
/// The result lies in `[0, π]`. A zero-length vector has no direction, so
/// the angle is defined as `0` rather than propagating the NaN of `0 / 0`.
/// The cosine is clamped to `[-1, 1]` before `acos`, since rounding in
/// the dot product can push it slightly outside the domain.
///
/// # Examples
/// ```
/// use u_numkit::geometry::angle_between_vectors;
/// use std::f64::consts::{FRAC_PI_2, PI};
/// assert!((angle_between_vectors(1.0, 0.0, 0.0, 1.0) - FRAC_PI_2).abs() < 1e-15);
/// assert!((angle_between_vectors(0.0, 1.0, 0.0, -1.0) - PI).abs() < 1e-15);
/// assert_eq!(angle_between_vectors(0.0, 0.0, 1.0, 1.0), 0.0);
/// ```
pub fn angle_between_vectors(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dot = x1 * x2 + y1 * y2;
    let denom = x1.hypot(y1) * x2.hypot(y2);
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom).clamp(-1.0, 1.0).acos()
}

// ============================================================================
// Tests
// ============================================================================
