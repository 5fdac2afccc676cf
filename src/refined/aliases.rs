//! Type aliases for common predicates and refined types
//!
//! # Example
//!
//! ```rust
//! use proven::refined::{DigitChar, NonNegativeI64, Percentage, PositiveI32};
//!
//! let d = DigitChar::new('3').unwrap();
//! let quantity = PositiveI32::new(3).unwrap();
//! let offset = NonNegativeI64::new(0).unwrap();
//! let pct = Percentage::new(75).unwrap();
//! ```

use super::combinators::Not;
use super::predicates::character::{AlphaNumeric, Digit, Letter, Whitespace};
use super::predicates::collection::{MaxCount, MinCount};
use super::predicates::comparison::{EqualTo, GreaterOrEq, GreaterThan, InRange, LessOrEq, LessThan};
use super::Refined;
use crate::constant::{ConstI32, ConstI64, ConstU16, ConstUsize, Zero};
use crate::order::Natural;

// ============================================================================
// Predicate aliases
// ============================================================================

/// Value must be positive (> 0)
pub type Positive = GreaterThan<Natural, Zero>;

/// Value must be non-negative (>= 0)
pub type NonNegative = GreaterOrEq<Natural, Zero>;

/// Value must be negative (< 0)
pub type Negative = LessThan<Natural, Zero>;

/// Value must be non-positive (<= 0)
pub type NonPositive = LessOrEq<Natural, Zero>;

/// Value must be non-zero (!= 0)
pub type NonZero = Not<EqualTo<Natural, Zero>>;

/// At most `N` items
pub type AtMost<const N: usize> = MaxCount<ConstUsize<N>>;

/// At least `N` items
pub type AtLeast<const N: usize> = MinCount<ConstUsize<N>>;

/// An `i64` in the inclusive range `[MIN, MAX]`
pub type Between<const MIN: i64, const MAX: i64> = InRange<Natural, ConstI64<MIN>, ConstI64<MAX>>;

// ============================================================================
// Character aliases
// ============================================================================

/// A `char` that is an ASCII letter
pub type LetterChar = Refined<char, Letter>;

/// A `char` that is an ASCII digit
pub type DigitChar = Refined<char, Digit>;

/// A `char` that is a space, tab, CR or LF
pub type WhitespaceChar = Refined<char, Whitespace>;

/// A `char` that is an ASCII letter or digit
pub type AlphaNumericChar = Refined<char, AlphaNumeric>;

// ============================================================================
// Numeric aliases
// ============================================================================

/// `i32` greater than zero
pub type PositiveI32 = Refined<i32, Positive>;

/// `i64` greater than zero
pub type PositiveI64 = Refined<i64, Positive>;

/// `f64` greater than zero; NaN is rejected
pub type PositiveF64 = Refined<f64, Positive>;

/// `i32` of zero or more
pub type NonNegativeI32 = Refined<i32, NonNegative>;

/// `i64` of zero or more
pub type NonNegativeI64 = Refined<i64, NonNegative>;

/// `f64` of zero or more; NaN is rejected
pub type NonNegativeF64 = Refined<f64, NonNegative>;

/// `i32` below zero
pub type NegativeI32 = Refined<i32, Negative>;

/// `i32` other than zero
pub type NonZeroI32 = Refined<i32, NonZero>;

/// `u32` other than zero
pub type NonZeroU32 = Refined<u32, NonZero>;

/// `usize` other than zero
pub type NonZeroUsize = Refined<usize, NonZero>;

// ============================================================================
// Collections
// ============================================================================

/// A `Vec<T>` holding at most `MAX` items
pub type BoundedVec<T, const MAX: usize> = Refined<Vec<T>, AtMost<MAX>>;

/// A `String` of at most `MAX` characters
pub type BoundedString<const MAX: usize> = Refined<String, AtMost<MAX>>;

/// A `Vec<T>` holding at least one item
pub type NonEmptyList<T> = Refined<Vec<T>, AtLeast<1>>;

// ============================================================================
// Domain values
// ============================================================================

/// Whole percent, `0..=100`
pub type Percentage = Refined<i32, InRange<Natural, ConstI32<0>, ConstI32<100>>>;

/// TCP/UDP port, `1..=65535`
pub type Port = Refined<u16, InRange<Natural, ConstU16<1>, ConstU16<65535>>>;
