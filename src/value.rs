//! Dynamically typed inputs and their numeric conversion.
//!
//! A few operations accept "anything": a number, a numeric string, a
//! boolean, nothing at all, or a boxed number object. [`Value`] models
//! those inputs; [`Value::to_number`] is the single conversion rule every
//! such operation applies.
//!
//! # Conversion table
//!
//! | Variant | Number |
//! |---|---|
//! | `Undefined` | NaN |
//! | `Null` | 0 |
//! | `Bool(b)` | 1 if `b`, else 0 |
//! | `Number(x)` | x |
//! | `String(s)` | [`parse_number_from_string`] |
//! | `Object(o)` | `o.value_of()` |

use crate::parse::parse_number_from_string;

/// A boxed number: wraps an `f64` but is not itself a primitive number.
///
/// Classification predicates such as [`crate::classify::is_number`] treat
/// it as an object, while numeric conversion unwraps it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberObject(f64);

impl NumberObject {
    /// Boxes `value`.
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the wrapped primitive value.
    pub fn value_of(&self) -> f64 {
        self.0
    }
}

impl From<f64> for NumberObject {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// A dynamically typed input value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Primitive number.
    Number(f64),
    /// String, converted with the whole-string number grammar.
    String(String),
    /// Boxed number object.
    Object(NumberObject),
}

impl Value {
    /// Converts the value to a number following the conversion table in
    /// the module docs. Never fails: unconvertible values give NaN.
    ///
    /// # Examples
    /// ```
    /// use u_numkit::value::{NumberObject, Value};
    /// assert_eq!(Value::from("42").to_number(), 42.0);
    /// assert_eq!(Value::Null.to_number(), 0.0);
    /// assert_eq!(Value::from(true).to_number(), 1.0);
    /// assert_eq!(Value::from(NumberObject::new(5.0)).to_number(), 5.0);
    /// assert!(Value::Undefined.to_number().is_nan());
    /// ```
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(x) => *x,
            Value::String(s) => parse_number_from_string(s),
            Value::Object(o) => o.value_of(),
        }
    }

    /// Returns the primitive number if this is a `Value::Number`.
    pub fn as_primitive_number(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            _ => None,
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(x)
    }
}

impl From<i32> for Value {
    fn from(x: i32) -> Self {
        Value::Number(f64::from(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<NumberObject> for Value {
    fn from(o: NumberObject) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}

/// Converts `value` to a number, falling back to `default` when the
/// conversion yields NaN.
///
/// # Examples
/// ```
/// use u_numkit::value::{to_number_or, Value};
/// assert_eq!(to_number_or(&Value::from("123"), 0.0), 123.0);
/// assert_eq!(to_number_or(&Value::from("abc"), 0.0), 0.0);
/// assert_eq!(to_number_or(&Value::Undefined, -1.0), -1.0);
/// assert_eq!(to_number_or(&Value::Null, -1.0), 0.0);
/// ```
pub fn to_number_or(value: &Value, default: f64) -> f64 {
    let num = value.to_number();
    if num.is_nan() {
        tracing::debug!(?value, default, "value is not a number, using default");
        default
    } else {
        num
    }
}

/// Primitive value of a boxed number.
///
/// # Examples
/// ```
/// use u_numkit::value::{number_value, NumberObject};
/// assert_eq!(number_value(&NumberObject::new(-5.0)), -5.0);
/// ```
pub fn number_value(number: &NumberObject) -> f64 {
    number.value_of()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number_table() {
        assert!(Value::Undefined.to_number().is_nan());
        assert_eq!(Value::Null.to_number(), 0.0);
        assert_eq!(Value::Bool(false).to_number(), 0.0);
        assert_eq!(Value::Bool(true).to_number(), 1.0);
        assert_eq!(Value::Number(-2.5).to_number(), -2.5);
        assert_eq!(Value::from("  12.5  ").to_number(), 12.5);
        assert_eq!(Value::from("").to_number(), 0.0);
        assert!(Value::from("12px").to_number().is_nan());
        assert_eq!(Value::Object(NumberObject::new(7.0)).to_number(), 7.0);
    }

    #[test]
    fn test_to_number_or() {
        assert_eq!(to_number_or(&Value::from("123"), 0.0), 123.0);
        assert_eq!(to_number_or(&Value::from("0xFF"), 0.0), 255.0);
        assert_eq!(to_number_or(&Value::from("abc"), 0.0), 0.0);
        assert_eq!(to_number_or(&Value::from(-5), 0.0), -5.0);
        assert_eq!(to_number_or(&Value::from(f64::NAN), 9.0), 9.0);
        assert_eq!(to_number_or(&Value::Undefined, 0.0), 0.0);
    }

    #[test]
    fn test_to_number_or_keeps_infinity() {
        assert_eq!(to_number_or(&Value::from("Infinity"), 0.0), f64::INFINITY);
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<f64>), Value::Undefined);
        assert_eq!(Value::from(Some(3.0_f64)), Value::Number(3.0));
    }

    #[test]
    fn test_number_value() {
        assert_eq!(number_value(&NumberObject::new(5.0)), 5.0);
        assert_eq!(number_value(&NumberObject::from(-5.0)), -5.0);
        assert!(number_value(&NumberObject::new(f64::NAN)).is_nan());
    }

    #[test]
    fn test_as_primitive_number() {
        assert_eq!(Value::from(1.5).as_primitive_number(), Some(1.5));
        assert_eq!(Value::from(NumberObject::new(1.5)).as_primitive_number(), None);
        assert_eq!(Value::from("1.5").as_primitive_number(), None);
    }
}
