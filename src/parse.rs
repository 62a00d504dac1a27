//! String-to-number parsing with NaN as the failure sentinel.
//!
//! Three entry points with different strictness:
//!
//! | Function | Accepts | Leftover text |
//! |---|---|---|
//! | [`parse_number_from_string`] | whole string: decimal, `0x`/`0o`/`0b`, `Infinity`, empty | NaN |
//! | [`parse_float`] | longest decimal prefix | ignored |
//! | [`parse_int`] | longest integer prefix in a radix | ignored |
//!
//! Leading and trailing whitespace (including line terminators and the
//! byte-order mark) is skipped. None of the functions return an error;
//! an unparseable input yields `f64::NAN`.
//!
//! # Decimal grammar
//!
//! ```text
//! [+-]? ( "Infinity" | digits [ "." digits? ] | "." digits ) ( [eE] [+-]? digits )?
//! ```

use crate::constants::{MAX_RADIX, MIN_RADIX};

// ============================================================================
// Scanning
// ============================================================================

/// Whitespace and line terminators skipped around numeric text.
fn is_space(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}

/// Scans the longest prefix of `s` matching the decimal grammar.
///
/// Returns the parsed value and the number of bytes consumed, or `None`
/// if no prefix matches.
fn scan_decimal(s: &str) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let len = bytes.len();
    let mut i = 0;

    let negative = match bytes.first() {
        Some(b'+') => {
            i = 1;
            false
        }
        Some(b'-') => {
            i = 1;
            true
        }
        _ => false,
    };

    if s[i..].starts_with("Infinity") {
        let inf = if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        return Some((inf, i + "Infinity".len()));
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = &s[int_start..i];

    let mut frac_digits = "";
    if i < len && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // A lone "." is not a number; "1." is.
        if !int_digits.is_empty() || j > frac_start {
            frac_digits = &s[frac_start..j];
            i = j;
        }
    }

    if int_digits.is_empty() && frac_digits.is_empty() {
        return None;
    }

    let mut exponent = "";
    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let exp_start = i + 1;
        let mut j = exp_start;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let digits_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        // An incomplete exponent ("1e", "1e+") is left unconsumed.
        if j > digits_start {
            exponent = &s[exp_start..j];
            i = j;
        }
    }

    let literal = format!(
        "{}{}.{}e{}",
        if negative { "-" } else { "" },
        if int_digits.is_empty() { "0" } else { int_digits },
        if frac_digits.is_empty() { "0" } else { frac_digits },
        if exponent.is_empty() { "0" } else { exponent },
    );
    literal.parse::<f64>().ok().map(|value| (value, i))
}

/// Value of a non-empty digit string in `radix`, or `None` if any
/// character is not a digit of that radix.
///
/// Exact (correctly rounded) while the value fits in `u128`.
fn digits_to_f64(digits: &str, radix: u32) -> Option<f64> {
    let mut exact: Option<u128> = Some(0);
    let mut approx = 0.0_f64;
    for c in digits.chars() {
        let d = c.to_digit(radix)?;
        exact = exact
            .and_then(|v| v.checked_mul(u128::from(radix)))
            .and_then(|v| v.checked_add(u128::from(d)));
        approx = approx * f64::from(radix) + f64::from(d);
    }
    Some(exact.map_or(approx, |v| v as f64))
}

/// Length in bytes of the longest prefix of `s` made of `radix` digits.
fn digit_prefix_len(s: &str, radix: u32) -> usize {
    s.char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map_or(s.len(), |(idx, _)| idx)
}

/// `0x`, `0o` or `0b` prefixed integer literal. `None` if `s` has no such
/// prefix; `Some(NaN)` if the prefix is followed by invalid digits.
fn parse_prefixed_integer(s: &str) -> Option<f64> {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    Some(digits_to_f64(digits, radix).unwrap_or(f64::NAN))
}

// ============================================================================
// Public Parsers
// ============================================================================

/// Parses the whole string as a number.
///
/// Accepts decimal literals, `0x`/`0o`/`0b` prefixed unsigned integers,
/// and `Infinity` with an optional sign, surrounded by optional
/// whitespace. An empty or all-whitespace string is `0`.
///
/// # Returns
/// - `f64::NAN` if any non-whitespace text is left over.
///
/// # Examples
/// ```
/// use u_numkit::parse::parse_number_from_string;
/// assert_eq!(parse_number_from_string("100"), 100.0);
/// assert_eq!(parse_number_from_string("-5e-3"), -0.005);
/// assert_eq!(parse_number_from_string("0xff"), 255.0);
/// assert_eq!(parse_number_from_string("  "), 0.0);
/// assert!(parse_number_from_string("12abc").is_nan());
/// ```
pub fn parse_number_from_string(value: &str) -> f64 {
    let trimmed = value.trim_matches(is_space);
    if trimmed.is_empty() {
        return 0.0;
    }
    if let Some(v) = parse_prefixed_integer(trimmed) {
        return v;
    }
    match scan_decimal(trimmed) {
        Some((v, consumed)) if consumed == trimmed.len() => v,
        _ => f64::NAN,
    }
}

/// Parses the longest decimal prefix of `s` after leading whitespace.
///
/// # Returns
/// - `f64::NAN` if no prefix is a number.
///
/// # Examples
/// ```
/// use u_numkit::parse::parse_float;
/// assert_eq!(parse_float("3.14abc"), 3.14);
/// assert_eq!(parse_float("  -.5e1x"), -5.0);
/// assert!(parse_float("abc").is_nan());
/// ```
pub fn parse_float(s: &str) -> f64 {
    let trimmed = s.trim_start_matches(is_space);
    scan_decimal(trimmed).map_or(f64::NAN, |(v, _)| v)
}

/// Parses the longest integer prefix of `s` in the given radix.
///
/// `None` (or `Some(0)`) selects radix 10, except that a `0x`/`0X`
/// prefix selects 16. An explicit radix of 16 also skips a `0x` prefix.
/// Letters are case-insensitive.
///
/// # Returns
/// - `f64::NAN` if the radix is outside `2..=36` or no digit is found.
///
/// # Examples
/// ```
/// use u_numkit::parse::parse_int;
/// assert_eq!(parse_int("123", None), 123.0);
/// assert_eq!(parse_int("ff", Some(16)), 255.0);
/// assert_eq!(parse_int("0x1F", None), 31.0);
/// assert_eq!(parse_int("1010", Some(2)), 10.0);
/// assert_eq!(parse_int("42px", Some(10)), 42.0);
/// assert!(parse_int("xyz", Some(10)).is_nan());
/// ```
pub fn parse_int(s: &str, radix: Option<u32>) -> f64 {
    let mut rest = s.trim_start_matches(is_space);

    let negative = if let Some(r) = rest.strip_prefix('-') {
        rest = r;
        true
    } else {
        if let Some(r) = rest.strip_prefix('+') {
            rest = r;
        }
        false
    };

    let mut radix = radix.unwrap_or(0);
    let strip_hex_prefix = match radix {
        0 => {
            radix = 10;
            true
        }
        16 => true,
        r if (MIN_RADIX..=MAX_RADIX).contains(&r) => false,
        _ => return f64::NAN,
    };
    if strip_hex_prefix {
        if let Some(r) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            rest = r;
            radix = 16;
        }
    }

    let digits = &rest[..digit_prefix_len(rest, radix)];
    if digits.is_empty() {
        return f64::NAN;
    }
    let magnitude = if radix == 10 {
        digits.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        digits_to_f64(digits, radix).unwrap_or(f64::NAN)
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

// ============================================================================
// Tests
// ============================================================================
