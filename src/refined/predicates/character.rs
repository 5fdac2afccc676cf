//! Character predicates for refined types
//!
//! Primitives:
//! - [`CharEq<C>`]: character equals the constant `C`
//! - [`CharRange<MIN, MAX>`]: character in `MIN..=MAX`
//!
//! Character classes, built from the primitives with the combinators:
//! - [`Upper`]: `'A'..='Z'`
//! - [`Lower`]: `'a'..='z'`
//! - [`Letter`]: [`Upper`] or [`Lower`]
//! - [`Digit`]: `'0'..='9'`
//! - [`Whitespace`]: space, tab, carriage return or line feed
//! - [`AlphaNumeric`]: [`Letter`] or [`Digit`]
//!
//! The classes are ASCII-only on purpose: `'é'` is not a [`Letter`] and
//! `'\u{a0}'` is not [`Whitespace`].
//!
//! # Example
//!
//! ```rust
//! use proven::refined::{AlphaNumeric, Letter, Refined, Whitespace};
//!
//! type Initial = Refined<char, Letter>;
//! assert!(Initial::new('a').is_ok());
//! assert!(Initial::new('1').is_err());
//!
//! assert!(Refined::<char, AlphaNumeric>::new('1').is_ok());
//! assert!(Refined::<char, Whitespace>::new('\r').is_ok());
//! ```

use std::fmt;
use std::marker::PhantomData;

use super::super::combinators::AnyOf;
use super::super::Predicate;
use super::comparison::InRange;
use crate::constant::{Ch0, Ch9, ChA, ChCr, ChLf, ChSpace, ChTab, ChZ, Cha, Chz, Const};
use crate::order::Natural;

/// Character must equal the constant `C`
///
/// # Example
///
/// ```rust
/// use proven::constant::ConstChar;
/// use proven::refined::{CharEq, Predicate};
///
/// type Underscore = CharEq<ConstChar<'_'>>;
///
/// assert!(Underscore::check(&'_'));
/// assert!(!Underscore::check(&'-'));
/// ```
#[derive(Clone, Copy, Default)]
pub struct CharEq<C>(PhantomData<fn() -> C>);

impl<C> fmt::Debug for CharEq<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharEq<{}>", std::any::type_name::<C>())
    }
}

impl<C: Const<char>> Predicate<char> for CharEq<C> {
    #[inline]
    fn check(value: &char) -> bool {
        *value == C::value()
    }

    fn description() -> &'static str {
        "character equal to constant"
    }
}

/// Character must be in `MIN..=MAX`
///
/// This is [`InRange`] under the natural order of `char`. An inverted
/// range (`MIN > MAX`) matches nothing.
///
/// # Example
///
/// ```rust
/// use proven::constant::ConstChar;
/// use proven::refined::{CharRange, Predicate};
///
/// type Octal = CharRange<ConstChar<'0'>, ConstChar<'7'>>;
///
/// assert!(Octal::check(&'0'));
/// assert!(Octal::check(&'7'));
/// assert!(!Octal::check(&'8'));
/// ```
#[derive(Clone, Copy, Default)]
pub struct CharRange<MIN, MAX>(PhantomData<fn() -> (MIN, MAX)>);

impl<MIN, MAX> fmt::Debug for CharRange<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CharRange<{}, {}>",
            std::any::type_name::<MIN>(),
            std::any::type_name::<MAX>()
        )
    }
}

impl<MIN: Const<char>, MAX: Const<char>> Predicate<char> for CharRange<MIN, MAX> {
    #[inline]
    fn check(value: &char) -> bool {
        InRange::<Natural, MIN, MAX>::check(value)
    }
}

// Each class is its own marker type that delegates to a composed predicate
macro_rules! char_class {
    ($(#[$doc:meta])* $name:ident = $composed:ty, $desc:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl Predicate<char> for $name {
            #[inline]
            fn check(value: &char) -> bool {
                <$composed as Predicate<char>>::check(value)
            }

            fn description() -> &'static str {
                $desc
            }
        }
    };
}

char_class!(
    /// ASCII uppercase letter (`'A'..='Z'`)
    Upper = CharRange<ChA, ChZ>,
    "ASCII uppercase letter ('A'..='Z')"
);

char_class!(
    /// ASCII lowercase letter (`'a'..='z'`)
    Lower = CharRange<Cha, Chz>,
    "ASCII lowercase letter ('a'..='z')"
);

char_class!(
    /// ASCII letter (`'A'..='Z'` or `'a'..='z'`)
    Letter = AnyOf<(Upper, Lower)>,
    "ASCII letter ('A'..='Z' or 'a'..='z')"
);

char_class!(
    /// ASCII digit (`'0'..='9'`)
    Digit = CharRange<Ch0, Ch9>,
    "ASCII digit ('0'..='9')"
);

char_class!(
    /// Space, tab, carriage return or line feed
    Whitespace = AnyOf<(CharEq<ChSpace>, CharEq<ChTab>, CharEq<ChCr>, CharEq<ChLf>)>,
    "whitespace (space, tab, CR or LF)"
);

char_class!(
    /// ASCII letter or digit
    AlphaNumeric = AnyOf<(Letter, Digit)>,
    "ASCII letter or digit"
);
