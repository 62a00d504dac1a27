//! # u-numkit
//!
//! Scalar numeric utilities for the U-Engine ecosystem.
//!
//! This crate collects small, independent numeric operations: geometry
//! formulas, number parsing and formatting, primality, Fibonacci,
//! rounding, and random integers. Every function is a pure mapping from
//! scalar inputs to one scalar or string output; only the random integer
//! generator consumes a random source.
//!
//! ## Modules
//!
//! - [`geometry`] — Areas, lengths, distances and angles
//! - [`arith`] — Average, maximum, cube, sine, precision-corrected sums
//! - [`integer`] — Primality, Fibonacci, digit sums, powers of two
//! - [`rounding`] — Floor, ceil, round (ties toward +∞), truncate, powers of ten
//! - [`classify`] — Finite-number, integer and safe-integer predicates
//! - [`value`] — Dynamically typed inputs and their numeric conversion
//! - [`parse`] — String-to-number parsing with a NaN sentinel
//! - [`format`] — Radix, fixed, exponential and precision notations
//! - [`random`] — Random integers in an inclusive range
//!
//! ## Design Philosophy
//!
//! - **Sentinels over panics**: invalid parses yield `f64::NAN`; only
//!   impossible formatting arguments return a [`FormatError`]
//! - **Overflow-aware formulas**: `hypot` for lengths, halving before
//!   averaging, widened integers for closed-form sums
//! - **Property-based testing**: Mathematical invariants verified via proptest

pub mod arith;
pub mod classify;
pub mod constants;
pub mod error;
pub mod format;
pub mod geometry;
pub mod integer;
pub mod parse;
pub mod random;
pub mod rounding;
pub mod value;

pub use arith::{
    average, cube, last_digit, linear_equation_root, max_number, sine, sum_of_numbers,
};
pub use classify::{is_integer, is_number, is_safe_integer};
pub use error::FormatError;
pub use format::{
    number_to_string, number_to_string_in_base, to_exponential, to_fixed, to_precision,
};
pub use geometry::{
    angle_between_vectors, circle_circumference, distance_between_points, hypotenuse,
    parallelepiped_diagonal, rectangle_area,
};
pub use integer::{
    count_of_odd_numbers, fibonacci, is_power_of_two, is_prime, sum_of_digits, sum_to_n,
};
pub use parse::{parse_float, parse_int, parse_number_from_string};
pub use random::{random_integer, random_integer_with};
pub use rounding::{ceil, floor, round, round_to_power_of_ten, trunc};
pub use value::{number_value, to_number_or, NumberObject, Value};
