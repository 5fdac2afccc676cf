//! Comparison predicates against a constant
//!
//! Each predicate is parameterized by a [`Comparator`] `O` and a [`Const`]
//! marker `C` and compares the checked value against `C::value()` using
//! `O`. The predicates impose no ordering of their own.
//!
//! - [`GreaterThan<O, C>`]: value > C
//! - [`LessThan<O, C>`]: value < C
//! - [`GreaterOrEq<O, C>`]: value >= C
//! - [`LessOrEq<O, C>`]: value <= C
//! - [`EqualTo<O, C>`]: value == C
//! - [`InRange<O, MIN, MAX>`]: MIN <= value <= MAX
//!
//! Incomparable values (the comparator returns `None`) fail every predicate.
//!
//! # Example
//!
//! ```rust
//! use proven::constant::{ConstI32, ConstU16};
//! use proven::order::Natural;
//! use proven::refined::{GreaterThan, InRange, Predicate, Refined};
//!
//! type OverFive = GreaterThan<Natural, ConstI32<5>>;
//! assert!(!OverFive::check(&3));
//! assert!(!OverFive::check(&5));
//! assert!(OverFive::check(&6));
//!
//! type Port = Refined<u16, InRange<Natural, ConstU16<1>, ConstU16<65535>>>;
//! assert!(Port::new(443).is_ok());
//! assert!(Port::new(0).is_err());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use super::super::Predicate;
use crate::constant::Const;
use crate::order::Comparator;

macro_rules! comparison_predicate {
    ($(#[$doc:meta])* $name:ident, $matches:pat, $debug:expr, $desc:expr) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Default)]
        pub struct $name<O, C>(PhantomData<fn() -> (O, C)>);

        impl<O, C> fmt::Debug for $name<O, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    concat!($debug, "<{}, {}>"),
                    std::any::type_name::<O>(),
                    std::any::type_name::<C>()
                )
            }
        }

        impl<T, O, C> Predicate<T> for $name<O, C>
        where
            O: Comparator<T>,
            C: Const<T>,
        {
            #[inline]
            fn check(value: &T) -> bool {
                matches!(O::compare(value, &C::value()), Some($matches))
            }

            fn description() -> &'static str {
                $desc
            }
        }
    };
}

comparison_predicate!(
    /// Value must be greater than `C` under ordering `O`
    GreaterThan,
    Ordering::Greater,
    "GreaterThan",
    "greater than constant"
);

comparison_predicate!(
    /// Value must be less than `C` under ordering `O`
    LessThan,
    Ordering::Less,
    "LessThan",
    "less than constant"
);

comparison_predicate!(
    /// Value must be greater than or equal to `C` under ordering `O`
    GreaterOrEq,
    Ordering::Greater | Ordering::Equal,
    "GreaterOrEq",
    "greater than or equal to constant"
);

comparison_predicate!(
    /// Value must be less than or equal to `C` under ordering `O`
    LessOrEq,
    Ordering::Less | Ordering::Equal,
    "LessOrEq",
    "less than or equal to constant"
);

comparison_predicate!(
    /// Value must compare equal to `C` under ordering `O`
    EqualTo,
    Ordering::Equal,
    "EqualTo",
    "equal to constant"
);

/// Value must be in range [MIN, MAX] (inclusive) under ordering `O`
///
/// A range whose `MIN` is above its `MAX` is empty: every value fails.
///
/// # Example
///
/// ```rust
/// use proven::constant::ConstI32;
/// use proven::order::Natural;
/// use proven::refined::{InRange, Refined};
///
/// type Percentage = Refined<i32, InRange<Natural, ConstI32<0>, ConstI32<100>>>;
///
/// assert!(Percentage::new(0).is_ok());
/// assert!(Percentage::new(100).is_ok());
/// assert!(Percentage::new(101).is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct InRange<O, MIN, MAX>(PhantomData<fn() -> (O, MIN, MAX)>);

impl<O, MIN, MAX> fmt::Debug for InRange<O, MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "InRange<{}, {}, {}>",
            std::any::type_name::<O>(),
            std::any::type_name::<MIN>(),
            std::any::type_name::<MAX>()
        )
    }
}

impl<T, O, MIN, MAX> Predicate<T> for InRange<O, MIN, MAX>
where
    O: Comparator<T>,
    MIN: Const<T>,
    MAX: Const<T>,
{
    #[inline]
    fn check(value: &T) -> bool {
        GreaterOrEq::<O, MIN>::check(value) && LessOrEq::<O, MAX>::check(value)
    }
}
