//! Predicate combinators for composing refinement predicates
//!
//! This module provides combinators for building complex predicates
//! from simpler ones:
//! - [`AllOf<L>`]: every predicate in the list must hold
//! - [`AnyOf<L>`] (alias [`Exists<L>`]): at least one predicate must hold
//! - [`And<A, B>`] / [`Or<A, B>`]: the two-predicate forms
//! - [`Not<A>`]: predicate must NOT hold
//!
//! Lists are tuples of predicate markers, from `()` up to eight elements.
//! The empty list is the identity of its operator: `AllOf<()>` accepts
//! everything and `AnyOf<()>` accepts nothing.
//!
//! # Example
//!
//! ```rust
//! use proven::refined::{AnyOf, CharEq, Digit, Refined};
//! use proven::constant::ConstChar;
//!
//! // A digit or a sign character
//! type NumberChar = Refined<char, AnyOf<(Digit, CharEq<ConstChar<'+'>>, CharEq<ConstChar<'-'>>)>>;
//!
//! assert!(NumberChar::new('7').is_ok());
//! assert!(NumberChar::new('-').is_ok());
//! assert!(NumberChar::new('x').is_err());
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::Predicate;

/// A list of predicates over `T`, evaluated together.
///
/// Implemented for tuples of up to eight predicate markers. Evaluation is
/// left to right and short-circuits.
pub trait Predicates<T>: Send + Sync + 'static {
    /// Whether every predicate in the list holds (`true` for the empty list).
    fn all(value: &T) -> bool;

    /// Whether at least one predicate in the list holds (`false` for the empty list).
    fn any(value: &T) -> bool;
}

impl<T> Predicates<T> for () {
    #[inline]
    fn all(_value: &T) -> bool {
        true
    }

    #[inline]
    fn any(_value: &T) -> bool {
        false
    }
}

macro_rules! impl_predicates_for_tuple {
    ($($p:ident),+) => {
        impl<T, $($p: Predicate<T>),+> Predicates<T> for ($($p,)+) {
            #[inline]
            fn all(value: &T) -> bool {
                $($p::check(value))&&+
            }

            #[inline]
            fn any(value: &T) -> bool {
                $($p::check(value))||+
            }
        }
    };
}

impl_predicates_for_tuple!(A);
impl_predicates_for_tuple!(A, B);
impl_predicates_for_tuple!(A, B, C);
impl_predicates_for_tuple!(A, B, C, D);
impl_predicates_for_tuple!(A, B, C, D, E);
impl_predicates_for_tuple!(A, B, C, D, E, F);
impl_predicates_for_tuple!(A, B, C, D, E, F, G);
impl_predicates_for_tuple!(A, B, C, D, E, F, G, H);

/// Every predicate in the list must hold
///
/// `AllOf<()>` is vacuously true.
///
/// # Example
///
/// ```rust
/// use proven::constant::ConstI32;
/// use proven::order::Natural;
/// use proven::refined::{AllOf, GreaterThan, LessThan, Refined};
///
/// type Teen = Refined<i32, AllOf<(GreaterThan<Natural, ConstI32<12>>, LessThan<Natural, ConstI32<20>>)>>;
///
/// assert!(Teen::new(15).is_ok());
/// assert!(Teen::new(12).is_err());
/// assert!(Teen::new(20).is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct AllOf<L>(PhantomData<fn() -> L>);

impl<L> fmt::Debug for AllOf<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AllOf<{}>", std::any::type_name::<L>())
    }
}

impl<T, L: Predicates<T>> Predicate<T> for AllOf<L> {
    #[inline]
    fn check(value: &T) -> bool {
        L::all(value)
    }

    fn description() -> &'static str {
        "all predicates must hold"
    }
}

/// At least one predicate in the list must hold
///
/// `AnyOf<()>` is vacuously false.
///
/// # Example
///
/// ```rust
/// use proven::refined::{AnyOf, Letter, Predicate};
///
/// assert!(<AnyOf<(Letter,)>>::check(&'a'));
/// assert!(!<AnyOf<()>>::check(&'a'));
/// ```
#[derive(Clone, Copy, Default)]
pub struct AnyOf<L>(PhantomData<fn() -> L>);

/// Existential composition: another name for [`AnyOf`].
pub type Exists<L> = AnyOf<L>;

impl<L> fmt::Debug for AnyOf<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyOf<{}>", std::any::type_name::<L>())
    }
}

impl<T, L: Predicates<T>> Predicate<T> for AnyOf<L> {
    #[inline]
    fn check(value: &T) -> bool {
        L::any(value)
    }

    fn description() -> &'static str {
        "at least one predicate must hold"
    }
}

/// Both predicates must hold
///
/// # Example
///
/// ```rust
/// use proven::refined::{And, Lower, Refined, Letter};
///
/// type LowerLetter = Refined<char, And<Letter, Lower>>;
///
/// assert!(LowerLetter::new('q').is_ok());
/// assert!(LowerLetter::new('Q').is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct And<A, B>(PhantomData<fn() -> (A, B)>);

impl<A, B> fmt::Debug for And<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "And<{}, {}>",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        )
    }
}

impl<T, A, B> Predicate<T> for And<A, B>
where
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn check(value: &T) -> bool {
        A::check(value) && B::check(value)
    }

    fn description() -> &'static str {
        "both predicates must hold"
    }
}

/// At least one of two predicates must hold
///
/// # Example
///
/// ```rust
/// use proven::refined::{Digit, Or, Refined, Whitespace};
///
/// type DigitOrSpace = Refined<char, Or<Digit, Whitespace>>;
///
/// assert!(DigitOrSpace::new('5').is_ok());
/// assert!(DigitOrSpace::new(' ').is_ok());
/// assert!(DigitOrSpace::new('x').is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct Or<A, B>(PhantomData<fn() -> (A, B)>);

impl<A, B> fmt::Debug for Or<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Or<{}, {}>",
            std::any::type_name::<A>(),
            std::any::type_name::<B>()
        )
    }
}

impl<T, A, B> Predicate<T> for Or<A, B>
where
    A: Predicate<T>,
    B: Predicate<T>,
{
    #[inline]
    fn check(value: &T) -> bool {
        A::check(value) || B::check(value)
    }

    fn description() -> &'static str {
        "at least one predicate must hold"
    }
}

/// Predicate must NOT hold
///
/// # Example
///
/// ```rust
/// use proven::refined::{Not, Refined, Whitespace};
///
/// type Visible = Refined<char, Not<Whitespace>>;
///
/// assert!(Visible::new('a').is_ok());
/// assert!(Visible::new('\n').is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct Not<A>(PhantomData<fn() -> A>);

impl<A> fmt::Debug for Not<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Not<{}>", std::any::type_name::<A>())
    }
}

impl<T, A: Predicate<T>> Predicate<T> for Not<A> {
    #[inline]
    fn check(value: &T) -> bool {
        !A::check(value)
    }

    fn description() -> &'static str {
        "predicate must not hold"
    }
}
