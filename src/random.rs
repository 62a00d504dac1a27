//! Random integers in an inclusive range.
//!
//! [`random_integer`] draws from the thread-local generator and is the
//! everyday entry point. [`random_integer_with`] takes any [`Rng`], so
//! callers (and tests) can pass a seeded generator from [`create_rng`].
//!
//! # Seeding
//!
//! Draws through [`random_integer_with`] repeat exactly for a fixed seed
//! on a given platform; [`random_integer`] is never reproducible.

use rand::Rng;

// ============================================================================
// Generators
// ============================================================================

/// Seeded `SmallRng` for repeatable draws.
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, random_integer_with};
/// let a = random_integer_with(0.0, 100.0, &mut create_rng(7));
/// let b = random_integer_with(0.0, 100.0, &mut create_rng(7));
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

// ============================================================================
// Integer Draws
// ============================================================================

/// Uniformly random integer in `[ceil(min), floor(max)]`, drawn from `rng`.
///
/// # Algorithm
/// `⌊u · (hi − lo + 1)⌋ + lo` for `u` uniform in `[0, 1)`. Each of the
/// `hi − lo + 1` integers is equally likely up to the 53-bit resolution
/// of `u`. When the span overflows `f64` (bounds near `±f64::MAX`), the
/// offset is built from half the span instead.
///
/// # Returns
/// - `f64::NAN` if either bound is NaN or infinite, or if the range holds
///   no integer (`ceil(min) > floor(max)`).
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, random_integer_with};
/// let mut rng = create_rng(42);
/// let x = random_integer_with(1.0, 6.0, &mut rng);
/// assert!((1.0..=6.0).contains(&x));
/// assert_eq!(x, x.trunc());
/// ```
pub fn random_integer_with<R: Rng>(min: f64, max: f64, rng: &mut R) -> f64 {
    if !min.is_finite() || !max.is_finite() {
        return f64::NAN;
    }
    let lo = min.ceil();
    let hi = max.floor();
    if lo > hi {
        tracing::debug!(min, max, "no integer in range");
        return f64::NAN;
    }
    let u: f64 = rng.random();
    let span = hi - lo + 1.0;
    if span.is_finite() {
        // `u < 1`, but the product can still round up to the span itself.
        return ((u * span).floor() + lo).min(hi);
    }
    let half_offset = u * (hi / 2.0 - lo / 2.0);
    (lo + half_offset + half_offset).floor().clamp(lo, hi)
}

/// Uniformly random integer in `[ceil(min), floor(max)]`, drawn from the
/// thread-local generator.
///
/// # Returns
/// - `f64::NAN` under the same conditions as [`random_integer_with`].
///
/// # Examples
/// ```
/// use u_numkit::random::random_integer;
/// let x = random_integer(-1.5, 1.5);
/// assert!(x == -1.0 || x == 0.0 || x == 1.0);
/// ```
pub fn random_integer(min: f64, max: f64) -> f64 {
    random_integer_with(min, max, &mut rand::rng())
}

// ============================================================================
// Tests
// ============================================================================
