//! Integer sequences and number-theoretic predicates.
//!
//! # Algorithms
//!
//! - **Primality**: trial division, excluding 2 first and then testing odd
//!   candidates up to `⌊√n⌋`. O(√n).
//! - **Fibonacci**: iterative accumulation over two running values.
//!   O(n) time, O(1) space.
//! - **Sum to n**: Gauss's closed form `n(n+1)/2`.

use crate::classify::is_integral;

// ============================================================================
// Primes and Sequences
// ============================================================================

/// Returns `true` if `n` is prime.
///
/// # Complexity
/// Time: O(√n), Space: O(1)
///
/// # Examples
/// ```
/// use u_numkit::integer::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(13));
/// assert!(!is_prime(1));
/// assert!(!is_prime(16));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // `i <= n / i` instead of `i * i <= n` so large `n` cannot overflow.
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Fibonacci number at the 0-based `index`: `F(0) = 0`, `F(1) = 1`.
///
/// Negative indices give `0`. The result is an `f64`; it is exact through
/// `F(78)` and grows toward infinity beyond `F(1476)`.
///
/// # Complexity
/// Time: O(index), Space: O(1)
///
/// # Examples
/// ```
/// use u_numkit::integer::fibonacci;
/// assert_eq!(fibonacci(0), 0.0);
/// assert_eq!(fibonacci(1), 1.0);
/// assert_eq!(fibonacci(10), 55.0);
/// ```
pub fn fibonacci(index: i64) -> f64 {
    if index <= 0 {
        return 0.0;
    }
    if index == 1 {
        return 1.0;
    }
    let mut prev = 0.0_f64;
    let mut curr = 1.0_f64;
    for _ in 2..=index {
        let next = prev + curr;
        prev = curr;
        curr = next;
        if curr.is_infinite() {
            break;
        }
    }
    curr
}

/// Sum of the integers `1..=n`, computed as `n(n+1)/2`.
///
/// Widened to `i128` so every `i64` input is exact. Negative `n` follows the
/// closed form (`sum_to_n(-1) == 0`, `sum_to_n(-2) == 1`).
///
/// # Examples
/// ```
/// use u_numkit::integer::sum_to_n;
/// assert_eq!(sum_to_n(10), 55);
/// assert_eq!(sum_to_n(0), 0);
/// ```
pub fn sum_to_n(n: i64) -> i128 {
    let n = i128::from(n);
    n * (n + 1) / 2
}

// ============================================================================
// Digits and Powers
// ============================================================================

/// Sum of the decimal digits of `|trunc(num)|`.
///
/// The digits are those of the exact integer value of the truncated
/// `f64`, so `1e21` contributes a single `1`.
///
/// # Returns
/// - `None` if `num` is NaN or infinite.
///
/// # Examples
/// ```
/// use u_numkit::integer::sum_of_digits;
/// assert_eq!(sum_of_digits(123.0), Some(6));
/// assert_eq!(sum_of_digits(-202.9), Some(4));
/// assert_eq!(sum_of_digits(f64::NAN), None);
/// ```
pub fn sum_of_digits(num: f64) -> Option<u32> {
    if !num.is_finite() {
        return None;
    }
    let digits = format!("{:.0}", num.trunc().abs());
    Some(digits.chars().filter_map(|c| c.to_digit(10)).sum())
}

/// Returns `true` if `num` is a positive integer whose base-2 logarithm is
/// an integer.
///
/// # Examples
/// ```
/// use u_numkit::integer::is_power_of_two;
/// assert!(is_power_of_two(1.0));
/// assert!(is_power_of_two(1024.0));
/// assert!(!is_power_of_two(3.0));
/// assert!(!is_power_of_two(0.0));
/// ```
pub fn is_power_of_two(num: f64) -> bool {
    is_integral(num) && num > 0.0 && is_integral(num.log2())
}

/// Count of odd integers in `0..=|number|`, i.e. `⌊(|number| + 1) / 2⌋`.
///
/// # Examples
/// ```
/// use u_numkit::integer::count_of_odd_numbers;
/// assert_eq!(count_of_odd_numbers(1.0), 1.0);
/// assert_eq!(count_of_odd_numbers(2.0), 1.0);
/// assert_eq!(count_of_odd_numbers(-3.0), 2.0);
/// ```
pub fn count_of_odd_numbers(number: f64) -> f64 {
    ((number.abs() + 1.0) / 2.0).floor()
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn even_numbers_above_two_are_composite(k in 2_i64..1_000_000) {
            prop_assert!(!is_prime(2 * k));
        }

        #[test]
        fn is_prime_matches_naive(n in -10_i64..5000) {
            let naive = n > 1 && (2..n).all(|d| n % d != 0);
            prop_assert_eq!(is_prime(n), naive);
        }

        #[test]
        fn fibonacci_recurrence(n in 2_i64..70) {
            prop_assert_eq!(fibonacci(n), fibonacci(n - 1) + fibonacci(n - 2));
        }

        #[test]
        fn sum_to_n_matches_loop(n in 0_i64..2000) {
            let expected: i128 = (1..=i128::from(n)).sum();
            prop_assert_eq!(sum_to_n(n), expected);
        }

        #[test]
        fn powers_of_two_detected(k in 0_i32..1000) {
            prop_assert!(is_power_of_two(2_f64.powi(k)));
        }

        #[test]
        fn count_of_odd_numbers_matches_loop(n in -500_i64..500) {
            let expected = (0..=n.abs()).filter(|i| i % 2 == 1).count() as f64;
            prop_assert_eq!(count_of_odd_numbers(n as f64), expected);
        }
    }
}
