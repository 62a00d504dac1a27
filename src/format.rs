//! Number-to-string conversion: radix, fixed, exponential and precision
//! notations.
//!
//! # Algorithms
//!
//! - **Canonical decimal** ([`number_to_string`]): shortest round-trip
//!   digits (Rust's `{:e}` formatter; at 17 digits, the exact value
//!   rounded instead so the nearest candidate wins), laid out in plain notation for
//!   decimal exponents in `-7 < e < 21` and in `d.ddde±x` notation
//!   elsewhere.
//! - **Fixed / exponential / precision**: the exact decimal expansion of
//!   the `f64` (at most 767 significant digits) rounded half away from
//!   zero. Ties are rare in binary: `1.005` is stored below the tie and
//!   rounds down, `2.5` is an exact tie and rounds up.
//! - **Radix** ([`number_to_string_in_base`]): integer digits by repeated
//!   division; fraction digits by repeated multiplication, stopping as soon
//!   as the emitted digits identify the value uniquely (the digit delta is
//!   half the gap to the next representable `f64`).
//!
//! Arguments that cannot be laid out are rejected with [`FormatError`];
//! NaN and infinities always format as `NaN`, `Infinity`, `-Infinity`.

use crate::constants::{
    EXPONENTIAL_THRESHOLD, MAX_FRACTION_DIGITS, MAX_PRECISION, MAX_RADIX, MIN_PRECISION,
    MIN_RADIX,
};
use crate::error::FormatError;

// ============================================================================
// Exact Decimal Digits
// ============================================================================

/// Enough fraction digits in `{:.N$e}` to hold the exact expansion of any
/// `f64`.
const EXACT_DIGITS: usize = 800;

/// Significant digits that always identify an `f64` uniquely.
const MAX_SHORTEST_DIGITS: usize = 17;

/// Decimal digits `d₁d₂…dₖ` and point position `n` such that the value is
/// `0.d₁d₂…dₖ × 10ⁿ`. `digits` holds ASCII digits without leading zeros.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Decimal {
    digits: Vec<u8>,
    point: i32,
}

impl Decimal {
    /// Splits the output of Rust's `{:e}` formatter (`"1.25e-3"`).
    fn from_exp_str(s: &str) -> Self {
        let (mantissa, exp) = s.split_once('e').unwrap_or((s, "0"));
        let exp: i32 = exp.parse().unwrap_or(0);
        let digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
        Self {
            digits,
            point: exp + 1,
        }
    }

    /// Shortest digits that round-trip to `x`, nearest to `x` among
    /// equally short candidates. `x` must be finite and positive.
    fn shortest(x: f64) -> Self {
        let d = Self::from_exp_str(&format!("{x:e}"));
        if d.digits.len() < MAX_SHORTEST_DIGITS {
            return d;
        }
        // At full length every neighbour round-trips; `{:e}` may pick one
        // that is not the closest, so round the exact value instead.
        let (mut digits, exponent) = significant(x, MAX_SHORTEST_DIGITS);
        while digits.len() > 1 && digits.last() == Some(&b'0') {
            digits.pop();
        }
        Self {
            digits,
            point: exponent + 1,
        }
    }

    /// Exact decimal expansion of `x`. `x` must be finite and positive.
    fn exact(x: f64) -> Self {
        let mut d = Self::from_exp_str(&format!("{:.*e}", EXACT_DIGITS, x));
        while d.digits.len() > 1 && d.digits.last() == Some(&b'0') {
            d.digits.pop();
        }
        d
    }
}

/// Keeps the first `keep` digits, rounding half up on the rest.
///
/// Returns exactly `keep` digits (zero-padded), or `"1"` followed by `keep`
/// zeros when rounding carries out of the leading digit. `keep == 0`
/// yields `"1"` or nothing.
fn round_digits(digits: &[u8], keep: usize) -> Vec<u8> {
    if keep >= digits.len() {
        let mut out = digits.to_vec();
        out.resize(keep, b'0');
        return out;
    }
    let mut out = digits[..keep].to_vec();
    if digits[keep] < b'5' {
        return out;
    }
    for d in out.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return out;
        }
    }
    out.insert(0, b'1');
    out
}

/// Rounds `x` (finite, positive) to `sig` significant digits.
///
/// Returns the digits and the decimal exponent of the first digit.
fn significant(x: f64, sig: usize) -> (Vec<u8>, i32) {
    let exact = Decimal::exact(x);
    let mut digits = round_digits(&exact.digits, sig);
    let mut exponent = exact.point - 1;
    if digits.len() > sig {
        digits.truncate(sig);
        exponent += 1;
    }
    (digits, exponent)
}

/// `NaN`, `Infinity` or `-Infinity` for non-finite `x`.
fn non_finite(x: f64) -> Option<String> {
    if x.is_nan() {
        Some("NaN".to_owned())
    } else if x.is_infinite() {
        Some(if x > 0.0 { "Infinity" } else { "-Infinity" }.to_owned())
    } else {
        None
    }
}

fn sign(x: f64) -> &'static str {
    if x < 0.0 {
        "-"
    } else {
        ""
    }
}

/// `d[.ddd]e±x` from significant digits and the exponent of the first.
fn exponential_layout(digits: &[u8], exponent: i32) -> String {
    let mut out = String::with_capacity(digits.len() + 6);
    out.push(char::from(digits[0]));
    if digits.len() > 1 {
        out.push('.');
        out.extend(digits[1..].iter().map(|&d| char::from(d)));
    }
    out.push('e');
    out.push(if exponent < 0 { '-' } else { '+' });
    out.push_str(&exponent.unsigned_abs().to_string());
    out
}

fn ascii(digits: &[u8]) -> String {
    digits.iter().map(|&d| char::from(d)).collect()
}

// ============================================================================
// Decimal and Radix Strings
// ============================================================================

/// Canonical decimal string of `x`.
///
/// Uses the fewest digits that parse back to `x`. Plain notation is used
/// while the decimal exponent lies in `-7 < e < 21`; outside that window
/// the result is `d.ddde±x`. Both zeros render as `"0"`.
///
/// # Examples
/// ```
/// use u_numkit::format::number_to_string;
/// assert_eq!(number_to_string(255.0), "255");
/// assert_eq!(number_to_string(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(1.5e-7), "1.5e-7");
/// assert_eq!(number_to_string(-0.0), "0");
/// ```
pub fn number_to_string(x: f64) -> String {
    if let Some(s) = non_finite(x) {
        return s;
    }
    if x == 0.0 {
        return "0".to_owned();
    }
    let Decimal { digits, point: n } = Decimal::shortest(x.abs());
    let k = digits.len() as i32;
    let body = if k <= n && n <= 21 {
        let mut s = ascii(&digits);
        s.extend(std::iter::repeat('0').take((n - k) as usize));
        s
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", ascii(int), ascii(frac))
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), ascii(&digits))
    } else {
        exponential_layout(&digits, n - 1)
    };
    format!("{}{}", sign(x), body)
}

/// String representation of `number` in the given `radix`.
///
/// Letters are lower-case. Non-integers carry fraction digits, as many as
/// needed to identify the value uniquely. Radix 10 is the canonical
/// decimal string of [`number_to_string`].
///
/// # Errors
/// [`FormatError::RadixOutOfRange`] if `radix` is outside `2..=36`.
///
/// # Examples
/// ```
/// use u_numkit::format::number_to_string_in_base;
/// assert_eq!(number_to_string_in_base(255.0, 16).unwrap(), "ff");
/// assert_eq!(number_to_string_in_base(8.0, 2).unwrap(), "1000");
/// assert_eq!(number_to_string_in_base(-0.5, 2).unwrap(), "-0.1");
/// assert!(number_to_string_in_base(1.0, 37).is_err());
/// ```
pub fn number_to_string_in_base(number: f64, radix: u32) -> Result<String, FormatError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&radix) {
        return Err(FormatError::RadixOutOfRange(radix));
    }
    if radix == 10 {
        return Ok(number_to_string(number));
    }
    if let Some(s) = non_finite(number) {
        return Ok(s);
    }
    if number == 0.0 {
        return Ok("0".to_owned());
    }

    let value = number.abs();
    let base = f64::from(radix);
    let mut integer = value.floor();
    let mut fraction = value - integer;

    // Half the distance to the next f64; digits below it are noise.
    let mut delta = 0.5 * (f64::from_bits(value.to_bits() + 1) - value);
    delta = delta.max(f64::from_bits(1));

    let mut frac_digits: Vec<u32> = Vec::new();
    if fraction >= delta {
        loop {
            fraction *= base;
            delta *= base;
            let digit = fraction as u32;
            frac_digits.push(digit);
            fraction -= f64::from(digit);
            if (fraction > 0.5 || (fraction == 0.5 && digit & 1 == 1)) && fraction + delta > 1.0 {
                // Round up, propagating the carry into the integer part.
                loop {
                    match frac_digits.pop() {
                        None => {
                            integer += 1.0;
                            break;
                        }
                        Some(d) if d + 1 < radix => {
                            frac_digits.push(d + 1);
                            break;
                        }
                        Some(_) => {}
                    }
                }
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    // Digits beyond 2^53 are not represented; emit zeros for them.
    let two_53 = 2_f64.powi(53);
    let mut int_digits: Vec<u32> = Vec::new();
    while integer / base >= two_53 {
        integer /= base;
        int_digits.push(0);
    }
    loop {
        let remainder = integer % base;
        int_digits.push(remainder as u32);
        integer = (integer - remainder) / base;
        if integer <= 0.0 {
            break;
        }
    }

    let to_char = |d: &u32| std::char::from_digit(*d, radix).unwrap_or('0');
    let mut out = String::from(sign(number));
    out.extend(int_digits.iter().rev().map(to_char));
    if !frac_digits.is_empty() {
        out.push('.');
        out.extend(frac_digits.iter().map(to_char));
    }
    Ok(out)
}

// ============================================================================
// Fixed, Exponential and Precision Notation
// ============================================================================

/// Fixed-point notation with `fraction_digits` digits after the point.
///
/// Rounds half away from zero on the exact binary value. Magnitudes of
/// `1e21` and above fall back to [`number_to_string`].
///
/// # Errors
/// [`FormatError::FractionDigitsOutOfRange`] if `fraction_digits > 100`.
///
/// # Examples
/// ```
/// use u_numkit::format::to_fixed;
/// assert_eq!(to_fixed(3.14159, 2).unwrap(), "3.14");
/// assert_eq!(to_fixed(2.5, 0).unwrap(), "3");
/// assert_eq!(to_fixed(-1.5, 3).unwrap(), "-1.500");
/// assert_eq!(to_fixed(1e21, 2).unwrap(), "1e+21");
/// ```
pub fn to_fixed(number: f64, fraction_digits: usize) -> Result<String, FormatError> {
    if fraction_digits > MAX_FRACTION_DIGITS {
        return Err(FormatError::FractionDigitsOutOfRange(fraction_digits));
    }
    if let Some(s) = non_finite(number) {
        return Ok(s);
    }
    if number.abs() >= EXPONENTIAL_THRESHOLD {
        return Ok(number_to_string(number));
    }

    // Integer N = round(|x| · 10^f), as digits.
    let scaled: Vec<u8> = if number == 0.0 {
        Vec::new()
    } else {
        let exact = Decimal::exact(number.abs());
        let keep = exact.point + fraction_digits as i32;
        if keep < 0 {
            Vec::new()
        } else {
            round_digits(&exact.digits, keep as usize)
        }
    };

    let mut m = ascii(&scaled);
    if m.is_empty() {
        m.push('0');
    }
    if fraction_digits > 0 {
        if m.len() <= fraction_digits {
            m = format!("{}{}", "0".repeat(fraction_digits + 1 - m.len()), m);
        }
        m.insert(m.len() - fraction_digits, '.');
    }
    Ok(format!("{}{}", sign(number), m))
}

/// Exponential notation `d.ddde±x`.
///
/// With `Some(f)`, exactly `f` digits follow the point, rounded half away
/// from zero. With `None`, as many digits as needed to represent the value
/// uniquely.
///
/// # Errors
/// [`FormatError::FractionDigitsOutOfRange`] if `f > 100` (checked after
/// NaN and infinities, which format unconditionally).
///
/// # Examples
/// ```
/// use u_numkit::format::to_exponential;
/// assert_eq!(to_exponential(123.0, Some(1)).unwrap(), "1.2e+2");
/// assert_eq!(to_exponential(0.00015, Some(2)).unwrap(), "1.50e-4");
/// assert_eq!(to_exponential(123456.0, None).unwrap(), "1.23456e+5");
/// ```
pub fn to_exponential(number: f64, fraction_digits: Option<usize>) -> Result<String, FormatError> {
    if let Some(s) = non_finite(number) {
        return Ok(s);
    }
    if let Some(f) = fraction_digits {
        if f > MAX_FRACTION_DIGITS {
            return Err(FormatError::FractionDigitsOutOfRange(f));
        }
    }

    let (digits, exponent) = match (number == 0.0, fraction_digits) {
        (true, f) => (vec![b'0'; f.unwrap_or(0) + 1], 0),
        (false, Some(f)) => significant(number.abs(), f + 1),
        (false, None) => {
            let d = Decimal::shortest(number.abs());
            (d.digits, d.point - 1)
        }
    };
    Ok(format!("{}{}", sign(number), exponential_layout(&digits, exponent)))
}

/// Notation with `precision` significant digits.
///
/// Exponential notation is used when the decimal exponent is below `-6` or
/// at least `precision`; fixed notation otherwise.
///
/// # Errors
/// [`FormatError::PrecisionOutOfRange`] if `precision` is outside `1..=100`
/// (checked after NaN and infinities, which format unconditionally).
///
/// # Examples
/// ```
/// use u_numkit::format::to_precision;
/// assert_eq!(to_precision(12345.0, 7).unwrap(), "12345.00");
/// assert_eq!(to_precision(12.3456, 4).unwrap(), "12.35");
/// assert_eq!(to_precision(12345.0, 2).unwrap(), "1.2e+4");
/// assert_eq!(to_precision(0.00001, 1).unwrap(), "0.00001");
/// ```
pub fn to_precision(number: f64, precision: usize) -> Result<String, FormatError> {
    if let Some(s) = non_finite(number) {
        return Ok(s);
    }
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(FormatError::PrecisionOutOfRange(precision));
    }

    let (digits, e) = if number == 0.0 {
        (vec![b'0'; precision], 0)
    } else {
        significant(number.abs(), precision)
    };
    let p = precision as i32;

    let body = if e < -6 || e >= p {
        exponential_layout(&digits, e)
    } else if e == p - 1 {
        ascii(&digits)
    } else if e >= 0 {
        let (int, frac) = digits.split_at(e as usize + 1);
        format!("{}.{}", ascii(int), ascii(frac))
    } else {
        format!("0.{}{}", "0".repeat((-(e + 1)) as usize), ascii(&digits))
    };
    Ok(format!("{}{}", sign(number), body))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- helpers ---

    #[test]
    fn test_round_digits() {
        assert_eq!(round_digits(b"1234", 2), b"12");
        assert_eq!(round_digits(b"1250", 2), b"13");
        assert_eq!(round_digits(b"1999", 2), b"20");
        assert_eq!(round_digits(b"9999", 2), b"100");
        assert_eq!(round_digits(b"12", 4), b"1200");
        assert_eq!(round_digits(b"5", 0), b"1");
        assert_eq!(round_digits(b"4", 0), b"");
    }

    #[test]
    fn test_exact_expansion() {
        let d = Decimal::exact(0.5);
        assert_eq!(d.digits, b"5");
        assert_eq!(d.point, 0);
        // 1.005 is stored as 1.00499999999999989341858963598497211933135986328125
        let d = Decimal::exact(1.005);
        assert_eq!(ascii(&d.digits), "100499999999999989341858963598497211933135986328125");
        assert_eq!(d.point, 1);
    }

    // --- number_to_string ---

    #[test]
    fn test_number_to_string_plain() {
        assert_eq!(number_to_string(0.0), "0");
        assert_eq!(number_to_string(1.0), "1");
        assert_eq!(number_to_string(-42.5), "-42.5");
        assert_eq!(number_to_string(123456789.0), "123456789");
        assert_eq!(number_to_string(0.000001), "0.000001");
        assert_eq!(number_to_string(1e20), "100000000000000000000");
    }

    #[test]
    fn test_number_to_string_exponential() {
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1.2345e25), "1.2345e+25");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(-2.5e-10), "-2.5e-10");
        assert_eq!(number_to_string(5e-324), "5e-324");
        assert_eq!(number_to_string(f64::MAX), "1.7976931348623157e+308");
    }

    #[test]
    fn test_number_to_string_nearest_of_full_length_digits() {
        // ...693.12 and ...693.13 both read back as this value; .12 is nearer.
        assert_eq!(number_to_string(-232642772594693.12), "-232642772594693.12");
        assert_eq!(
            crate::parse::parse_number_from_string("-232642772594693.13"),
            -232642772594693.12
        );
    }

    #[test]
    fn test_number_to_string_non_finite() {
        assert_eq!(number_to_string(f64::NAN), "NaN");
        assert_eq!(number_to_string(f64::INFINITY), "Infinity");
        assert_eq!(number_to_string(f64::NEG_INFINITY), "-Infinity");
    }

    // --- number_to_string_in_base ---

    #[test]
    fn test_radix_integers() {
        assert_eq!(number_to_string_in_base(255.0, 16).unwrap(), "ff");
        assert_eq!(number_to_string_in_base(255.0, 2).unwrap(), "11111111");
        assert_eq!(number_to_string_in_base(8.0, 2).unwrap(), "1000");
        assert_eq!(number_to_string_in_base(35.0, 36).unwrap(), "z");
        assert_eq!(number_to_string_in_base(36.0, 36).unwrap(), "10");
        assert_eq!(number_to_string_in_base(-255.0, 16).unwrap(), "-ff");
        assert_eq!(number_to_string_in_base(0.0, 8).unwrap(), "0");
    }

    #[test]
    fn test_radix_fractions() {
        assert_eq!(number_to_string_in_base(0.5, 2).unwrap(), "0.1");
        assert_eq!(number_to_string_in_base(0.25, 2).unwrap(), "0.01");
        assert_eq!(number_to_string_in_base(0.75, 4).unwrap(), "0.3");
        assert_eq!(number_to_string_in_base(255.5, 16).unwrap(), "ff.8");
        assert_eq!(number_to_string_in_base(-3.5, 8).unwrap(), "-3.4");
    }

    #[test]
    fn test_radix_large_integers() {
        let two_53 = 2_f64.powi(53);
        assert_eq!(
            number_to_string_in_base(two_53, 2).unwrap(),
            format!("1{}", "0".repeat(53))
        );
        assert_eq!(number_to_string_in_base(two_53, 16).unwrap(), "20000000000000");
        assert_eq!(number_to_string_in_base(2_f64.powi(64), 16).unwrap(), "10000000000000000");
    }

    #[test]
    fn test_radix_ten_is_canonical() {
        assert_eq!(number_to_string_in_base(1e21, 10).unwrap(), "1e+21");
        assert_eq!(number_to_string_in_base(0.1, 10).unwrap(), "0.1");
    }

    #[test]
    fn test_radix_non_finite() {
        assert_eq!(number_to_string_in_base(f64::NAN, 2).unwrap(), "NaN");
        assert_eq!(number_to_string_in_base(f64::INFINITY, 16).unwrap(), "Infinity");
        assert_eq!(number_to_string_in_base(f64::NEG_INFINITY, 16).unwrap(), "-Infinity");
    }

    #[test]
    fn test_radix_out_of_range() {
        assert_eq!(
            number_to_string_in_base(1.0, 1),
            Err(FormatError::RadixOutOfRange(1))
        );
        assert_eq!(
            number_to_string_in_base(1.0, 37),
            Err(FormatError::RadixOutOfRange(37))
        );
        // Checked before the NaN shortcut.
        assert!(number_to_string_in_base(f64::NAN, 0).is_err());
    }

    // --- to_fixed ---

    #[test]
    fn test_to_fixed_basic() {
        assert_eq!(to_fixed(3.14159, 2).unwrap(), "3.14");
        assert_eq!(to_fixed(1.23, 4).unwrap(), "1.2300");
        assert_eq!(to_fixed(12345.6789, 1).unwrap(), "12345.7");
        assert_eq!(to_fixed(12345.6789, 0).unwrap(), "12346");
        assert_eq!(to_fixed(0.0, 2).unwrap(), "0.00");
        assert_eq!(to_fixed(-0.0, 2).unwrap(), "0.00");
    }

    #[test]
    fn test_to_fixed_rounding() {
        assert_eq!(to_fixed(2.5, 0).unwrap(), "3");
        assert_eq!(to_fixed(-2.5, 0).unwrap(), "-3");
        assert_eq!(to_fixed(0.5, 0).unwrap(), "1");
        assert_eq!(to_fixed(1.005, 2).unwrap(), "1.00");
        assert_eq!(to_fixed(1.45, 1).unwrap(), "1.4");
        assert_eq!(to_fixed(9.995, 2).unwrap(), "9.99");
        assert_eq!(to_fixed(9.9999, 2).unwrap(), "10.00");
    }

    #[test]
    fn test_to_fixed_small_magnitudes() {
        assert_eq!(to_fixed(0.000001, 2).unwrap(), "0.00");
        assert_eq!(to_fixed(0.006, 2).unwrap(), "0.01");
        assert_eq!(to_fixed(0.004, 2).unwrap(), "0.00");
        assert_eq!(to_fixed(-0.0000001, 2).unwrap(), "-0.00");
        assert_eq!(to_fixed(0.1, 20).unwrap(), "0.10000000000000000555");
    }

    #[test]
    fn test_to_fixed_large_magnitudes() {
        assert_eq!(to_fixed(1e20, 1).unwrap(), "100000000000000000000.0");
        assert_eq!(to_fixed(1e21, 2).unwrap(), "1e+21");
        assert_eq!(to_fixed(-1.5e22, 0).unwrap(), "-1.5e+22");
    }

    #[test]
    fn test_to_fixed_errors_and_non_finite() {
        assert_eq!(to_fixed(1.0, 101), Err(FormatError::FractionDigitsOutOfRange(101)));
        assert_eq!(to_fixed(f64::NAN, 2).unwrap(), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2).unwrap(), "Infinity");
        assert!(to_fixed(1.0, 100).is_ok());
    }

    // --- to_exponential ---

    #[test]
    fn test_to_exponential() {
        assert_eq!(to_exponential(123.0, Some(1)).unwrap(), "1.2e+2");
        assert_eq!(to_exponential(123.0, Some(0)).unwrap(), "1e+2");
        assert_eq!(to_exponential(12345.0, Some(2)).unwrap(), "1.23e+4");
        assert_eq!(to_exponential(0.00015, Some(1)).unwrap(), "1.5e-4");
        assert_eq!(to_exponential(-77.1234, Some(2)).unwrap(), "-7.71e+1");
        assert_eq!(to_exponential(1.0, Some(3)).unwrap(), "1.000e+0");
    }

    #[test]
    fn test_to_exponential_carry() {
        assert_eq!(to_exponential(9.99, Some(1)).unwrap(), "1.0e+1");
        assert_eq!(to_exponential(25.0, Some(0)).unwrap(), "3e+1");
    }

    #[test]
    fn test_to_exponential_shortest() {
        assert_eq!(to_exponential(77.1234, None).unwrap(), "7.71234e+1");
        assert_eq!(to_exponential(0.0, None).unwrap(), "0e+0");
        assert_eq!(to_exponential(1e-7, None).unwrap(), "1e-7");
        assert_eq!(
            to_exponential(-1729185735040308.2, None).unwrap(),
            "-1.7291857350403082e+15"
        );
    }

    #[test]
    fn test_to_exponential_zero_and_errors() {
        assert_eq!(to_exponential(0.0, Some(2)).unwrap(), "0.00e+0");
        assert_eq!(to_exponential(f64::NAN, Some(500)).unwrap(), "NaN");
        assert_eq!(
            to_exponential(1.0, Some(101)),
            Err(FormatError::FractionDigitsOutOfRange(101))
        );
    }

    // --- to_precision ---

    #[test]
    fn test_to_precision() {
        assert_eq!(to_precision(12345.0, 7).unwrap(), "12345.00");
        assert_eq!(to_precision(12.3456, 4).unwrap(), "12.35");
        assert_eq!(to_precision(12345.0, 5).unwrap(), "12345");
        assert_eq!(to_precision(12345.0, 2).unwrap(), "1.2e+4");
        assert_eq!(to_precision(0.000123, 2).unwrap(), "0.00012");
        assert_eq!(to_precision(1.23e-7, 2).unwrap(), "1.2e-7");
        assert_eq!(to_precision(-5.123456, 3).unwrap(), "-5.12");
    }

    #[test]
    fn test_to_precision_carry_and_zero() {
        assert_eq!(to_precision(99.99, 2).unwrap(), "1.0e+2");
        assert_eq!(to_precision(9.96, 2).unwrap(), "10");
        assert_eq!(to_precision(0.0, 3).unwrap(), "0.00");
    }

    #[test]
    fn test_to_precision_errors_and_non_finite() {
        assert_eq!(to_precision(1.0, 0), Err(FormatError::PrecisionOutOfRange(0)));
        assert_eq!(to_precision(1.0, 101), Err(FormatError::PrecisionOutOfRange(101)));
        assert_eq!(to_precision(f64::NEG_INFINITY, 0).unwrap(), "-Infinity");
    }
}
