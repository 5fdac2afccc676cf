//! Predefined predicates for common refinement patterns
//!
//! This module provides ready-to-use predicate markers for:
//! - **Characters**: [`CharEq`](character::CharEq), [`CharRange`](character::CharRange)
//!   and the classes built from them ([`Letter`](character::Letter),
//!   [`Digit`](character::Digit), [`Whitespace`](character::Whitespace),
//!   [`AlphaNumeric`](character::AlphaNumeric), ...)
//! - **Comparisons against a constant**: [`GreaterThan`](comparison::GreaterThan),
//!   [`LessThan`](comparison::LessThan), [`GreaterOrEq`](comparison::GreaterOrEq),
//!   [`LessOrEq`](comparison::LessOrEq), [`EqualTo`](comparison::EqualTo),
//!   [`InRange`](comparison::InRange)
//! - **Counts**: [`MaxCount`](collection::MaxCount), [`MinCount`](collection::MinCount)
//!
//! # Example
//!
//! ```rust
//! use proven::constant::{ConstI32, ConstUsize};
//! use proven::order::Natural;
//! use proven::refined::{Digit, InRange, MaxCount, Refined};
//!
//! type DigitChar = Refined<char, Digit>;
//! let d = DigitChar::new('7').unwrap();
//!
//! type Percentage = Refined<i32, InRange<Natural, ConstI32<0>, ConstI32<100>>>;
//! let pct = Percentage::new(75).unwrap();
//!
//! type Short = Refined<Vec<u8>, MaxCount<ConstUsize<8>>>;
//! let bytes = Short::new(vec![1, 2, 3]).unwrap();
//! ```

pub mod character;
pub mod collection;
pub mod comparison;
