//! Ordering capabilities for comparison predicates
//!
//! A [`Comparator`] is a zero-sized marker that supplies a three-way
//! comparison over some type. Comparison predicates such as
//! [`GreaterThan`](crate::refined::GreaterThan) never compare values
//! themselves; they ask the comparator they were parameterized with.
//!
//! The comparison returns `Option<Ordering>` so that partial orders
//! (floating point, for instance) can be expressed. A `None` answer means
//! the two values are incomparable, and every comparison predicate treats
//! it as a failure.
//!
//! # Example
//!
//! ```rust
//! use std::cmp::Ordering;
//! use proven::order::{Comparator, Natural, Reversed};
//!
//! assert_eq!(Natural::compare(&1, &2), Some(Ordering::Less));
//! assert_eq!(<Reversed<Natural>>::compare(&1, &2), Some(Ordering::Greater));
//! assert_eq!(Natural::compare(&f64::NAN, &0.0), None);
//! ```

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A three-way comparison over values of type `T`.
///
/// Implementations must be consistent: `compare(a, a)` is `Equal` for any
/// comparable `a`, and `compare(a, b)` is the reverse of `compare(b, a)`.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use proven::order::Comparator;
///
/// // Compare strings by length only
/// pub struct ByLength;
///
/// impl Comparator<String> for ByLength {
///     fn compare(a: &String, b: &String) -> Option<Ordering> {
///         Some(a.len().cmp(&b.len()))
///     }
/// }
///
/// assert_eq!(
///     ByLength::compare(&"abc".to_string(), &"xyz".to_string()),
///     Some(Ordering::Equal)
/// );
/// ```
pub trait Comparator<T>: Send + Sync + 'static {
    /// Compare `a` against `b`, or `None` if they are incomparable.
    fn compare(a: &T, b: &T) -> Option<Ordering>;
}

/// The natural ordering of a type, as given by its `PartialOrd` impl.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: PartialOrd> Comparator<T> for Natural {
    #[inline]
    fn compare(a: &T, b: &T) -> Option<Ordering> {
        a.partial_cmp(b)
    }
}

/// The reverse of another comparator.
#[derive(Clone, Copy, Default)]
pub struct Reversed<O>(PhantomData<fn() -> O>);

impl<O> std::fmt::Debug for Reversed<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Reversed<{}>", std::any::type_name::<O>())
    }
}

impl<T, O: Comparator<T>> Comparator<T> for Reversed<O> {
    #[inline]
    fn compare(a: &T, b: &T) -> Option<Ordering> {
        O::compare(a, b).map(Ordering::reverse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_integers() {
        assert_eq!(Natural::compare(&3, &5), Some(Ordering::Less));
        assert_eq!(Natural::compare(&5, &5), Some(Ordering::Equal));
        assert_eq!(Natural::compare(&6, &5), Some(Ordering::Greater));
    }

    #[test]
    fn test_natural_chars() {
        assert_eq!(Natural::compare(&'a', &'z'), Some(Ordering::Less));
        assert_eq!(Natural::compare(&'Z', &'A'), Some(Ordering::Greater));
    }

    #[test]
    fn test_natural_nan_is_incomparable() {
        assert_eq!(Natural::compare(&f64::NAN, &1.0), None);
        assert_eq!(Natural::compare(&1.0, &f64::NAN), None);
    }

    #[test]
    fn test_reversed() {
        assert_eq!(
            <Reversed<Natural>>::compare(&3, &5),
            Some(Ordering::Greater)
        );
        assert_eq!(<Reversed<Natural>>::compare(&5, &5), Some(Ordering::Equal));
        assert_eq!(<Reversed<Natural>>::compare(&f32::NAN, &0.0), None);
    }

    #[test]
    fn test_reversed_twice_is_natural() {
        type Twice = Reversed<Reversed<Natural>>;
        for (a, b) in [(1, 2), (2, 2), (3, 2)] {
            assert_eq!(Twice::compare(&a, &b), Natural::compare(&a, &b));
        }
    }

    #[test]
    fn test_debug() {
        let debug = format!("{:?}", Reversed::<Natural>::default());
        assert!(debug.starts_with("Reversed<"));
        assert!(debug.contains("Natural"));
    }
}
