//! Testing utilities for refined and present values
//!
//! This module provides assertion macros for tests that build refined
//! types, and, with the `proptest` feature, [`Arbitrary`] support for
//! property-based testing.
//!
//! # Examples
//!
//! ```rust
//! use proven::{assert_present, assert_refines, assert_rejects};
//! use proven::present::Present;
//! use proven::refined::{Digit, Letter};
//!
//! assert_refines!(Letter, 'a');
//! assert_rejects!(Digit, 'a');
//! assert_present!(Present::new(1));
//! ```

/// Assert that a value satisfies a predicate.
///
/// Panics with the violation message if `Refined::<_, P>::new` fails.
///
/// # Example
///
/// ```rust
/// use proven::assert_refines;
/// use proven::refined::Whitespace;
///
/// assert_refines!(Whitespace, '\t');
/// ```
#[macro_export]
macro_rules! assert_refines {
    ($pred:ty, $value:expr) => {
        match $crate::refined::Refined::<_, $pred>::new($value) {
            Ok(_) => {}
            Err(e) => {
                panic!("Expected value to refine, got: {}", e);
            }
        }
    };
}

/// Assert that a value is rejected by a predicate.
///
/// # Example
///
/// ```rust
/// use proven::assert_rejects;
/// use proven::refined::Letter;
///
/// assert_rejects!(Letter, '9');
/// ```
#[macro_export]
macro_rules! assert_rejects {
    ($pred:ty, $value:expr) => {
        match $crate::refined::Refined::<_, $pred>::new($value) {
            Err(_) => {}
            Ok(v) => {
                panic!(
                    "Expected rejection by {}, got: {:?}",
                    stringify!($pred),
                    v
                );
            }
        }
    };
}

/// Assert that a [`Present`](crate::present::Present) holds a value.
///
/// # Example
///
/// ```rust
/// use proven::assert_present;
/// use proven::present::Present;
///
/// assert_present!(Present::new("x"));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($present:expr) => {
        match $present.value() {
            Ok(_) => {}
            Err(e) => {
                panic!("Expected Present value, got: {}", e);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use crate::present::Present;
#[cfg(feature = "proptest")]
use crate::refined::{Predicate, Refined};

#[cfg(feature = "proptest")]
impl<A: Arbitrary + 'static> Arbitrary for Present<A> {
    type Parameters = A::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<A>(args).prop_map(Present::new).boxed()
    }
}

/// Values of `T` that satisfy `P`, found by filtering `T`'s strategy.
///
/// Narrow predicates reject most candidates and may exhaust proptest's
/// rejection budget; write a dedicated strategy for those.
#[cfg(feature = "proptest")]
impl<T, P> Arbitrary for Refined<T, P>
where
    T: Arbitrary + 'static,
    P: Predicate<T>,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        any_with::<T>(args)
            .prop_filter_map(P::description(), |value| Refined::new(value).ok())
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use crate::present::Present;
    use crate::refined::{AlphaNumeric, Digit, Letter, Positive};

    #[test]
    fn assert_refines_macro() {
        assert_refines!(Letter, 'x');
        assert_refines!(Positive, 3);
    }

    #[test]
    fn assert_rejects_macro() {
        assert_rejects!(Digit, 'x');
        assert_rejects!(Positive, -3);
    }

    #[test]
    fn assert_present_macro() {
        assert_present!(Present::new(1));
    }

    #[test]
    #[should_panic(expected = "Expected value to refine")]
    fn assert_refines_panics_on_rejection() {
        assert_refines!(AlphaNumeric, '!');
    }

    #[test]
    #[should_panic(expected = "Expected rejection by Letter")]
    fn assert_rejects_panics_on_success() {
        assert_rejects!(Letter, 'a');
    }

    #[test]
    #[should_panic(expected = "Expected Present value")]
    fn assert_present_panics_on_uninitialized() {
        assert_present!(Present::from_first(Vec::<i32>::new()));
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use crate::present::Present;
        use crate::refined::{AtLeast, Letter, PositiveI32, Predicate, Refined};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn present_arbitrary_is_always_initialized(p in any::<Present<i32>>()) {
                prop_assert!(p.is_some());
            }

            #[test]
            fn refined_arbitrary_satisfies_predicate(n in any::<PositiveI32>()) {
                prop_assert!(*n > 0);
            }

            #[test]
            fn present_arbitrary_of_strings(p in any::<Present<String>>()) {
                prop_assert!(p.value().is_ok());
            }

            #[test]
            fn refined_non_empty_vec_arbitrary(v in any::<Refined<Vec<u8>, AtLeast<1>>>()) {
                prop_assert!(!v.is_empty());
            }

            #[test]
            fn refined_char_arbitrary_satisfies_predicate(c in any::<Refined<char, Letter>>()) {
                prop_assert!(Letter::check(c.get()));
            }
        }
    }
}
