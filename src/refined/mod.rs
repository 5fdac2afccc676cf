//! Refined types: values that carry a type-level proof of a predicate
//!
//! A [`Refined<T, P>`] is a `T` that is known to satisfy the predicate
//! marker `P`. The check runs once, in [`Refined::new`]; afterwards the
//! type itself is the proof, and code receiving a `Refined<T, P>` never
//! has to check again.
//!
//! Predicates are zero-sized marker types implementing [`Predicate`]. They
//! hold no data, so a `Refined<T, P>` has exactly the layout of `T`.
//!
//! # Getting Started
//!
//! ```rust
//! use proven::refined::{AlphaNumeric, Letter, Refined};
//!
//! type Initial = Refined<char, Letter>;
//!
//! let initial = Initial::new('J').unwrap();
//! assert_eq!(*initial.get(), 'J');
//!
//! assert!(Initial::new('7').is_err());
//! assert!(Refined::<char, AlphaNumeric>::new('7').is_ok());
//! ```
//!
//! # Parameterized Predicates
//!
//! Comparison and count predicates take their bounds as constant markers
//! and their ordering as a comparator marker:
//!
//! ```rust
//! use proven::constant::{ConstI32, ConstUsize};
//! use proven::order::Natural;
//! use proven::refined::{GreaterThan, MaxCount, Refined};
//!
//! type OverFive = Refined<i32, GreaterThan<Natural, ConstI32<5>>>;
//! assert!(OverFive::new(6).is_ok());
//! assert!(OverFive::new(5).is_err());
//!
//! type Triple = Refined<Vec<u8>, MaxCount<ConstUsize<3>>>;
//! assert!(Triple::new(vec![1, 2, 3]).is_ok());
//! assert!(Triple::new(vec![1, 2, 3, 4]).is_err());
//! ```
//!
//! # Custom Predicates
//!
//! ```rust
//! use proven::refined::{Predicate, Refined};
//!
//! pub struct Even;
//!
//! impl Predicate<i32> for Even {
//!     fn check(value: &i32) -> bool {
//!         value % 2 == 0
//!     }
//!
//!     fn description() -> &'static str {
//!         "even number"
//!     }
//! }
//!
//! let n = Refined::<i32, Even>::new(4).unwrap();
//! assert_eq!(n.into_inner(), 4);
//! ```

mod aliases;
mod combinators;
pub mod predicates;
#[cfg(feature = "serde")]
mod serde_impl;
mod violation;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

pub use aliases::*;
pub use combinators::{AllOf, And, AnyOf, Exists, Not, Or, Predicates};
pub use predicates::character::{
    AlphaNumeric, CharEq, CharRange, Digit, Letter, Lower, Upper, Whitespace,
};
pub use predicates::collection::{Counted, MaxCount, MinCount, SeqInfo};
pub use predicates::comparison::{EqualTo, GreaterOrEq, GreaterThan, InRange, LessOrEq, LessThan};
pub use violation::PredicateViolation;

/// A decision procedure over values of type `T`, identified by a type.
///
/// Predicates are stateless: `check` is an associated function, so the
/// marker type is never instantiated and selecting a predicate is purely a
/// compile-time choice. `check` must be total and pure; the same input
/// always gives the same answer.
///
/// # Example
///
/// ```rust
/// use proven::refined::Predicate;
///
/// pub struct Ascii;
///
/// impl Predicate<char> for Ascii {
///     fn check(value: &char) -> bool {
///         value.is_ascii()
///     }
/// }
///
/// assert!(Ascii::check(&'a'));
/// assert!(!Ascii::check(&'é'));
/// ```
pub trait Predicate<T>: Send + Sync + 'static {
    /// Whether `value` satisfies the predicate.
    fn check(value: &T) -> bool;

    /// Short text naming the requirement, used in violation messages.
    ///
    /// Defaults to the marker's type name.
    fn description() -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// A value of type `T` that is guaranteed to satisfy predicate `P`.
///
/// The only ways to obtain one are the validating constructors
/// ([`new`](Refined::new), [`try_map`](Refined::try_map), [`refine`],
/// [`RefineExt::refine`]) and, with the `serde` feature, validated
/// deserialization. No mutable access to the inner value is exposed, so the
/// guarantee holds for the whole lifetime of the instance.
///
/// # Memory Layout
///
/// `Refined<T, P>` is `#[repr(transparent)]` over `T`.
///
/// # Equality
///
/// Equality, ordering and hashing look only at the inner value. Two
/// refined values with different predicates but equal contents compare
/// equal: the predicate is a compile-time distinction with no runtime
/// identity.
///
/// ```rust
/// use proven::refined::{AlphaNumeric, Letter, Refined};
///
/// let a = Refined::<char, Letter>::new('q').unwrap();
/// let b = Refined::<char, AlphaNumeric>::new('q').unwrap();
/// assert_eq!(a, b);
/// ```
#[repr(transparent)]
pub struct Refined<T, P: Predicate<T>> {
    value: T,
    _predicate: PhantomData<P>,
}

impl<T, P: Predicate<T>> Refined<T, P> {
    /// Check `value` against `P` and wrap it on success.
    ///
    /// # Example
    ///
    /// ```rust
    /// use proven::refined::{Refined, Whitespace};
    ///
    /// assert!(Refined::<char, Whitespace>::new('\t').is_ok());
    ///
    /// let err = Refined::<char, Whitespace>::new('x').unwrap_err();
    /// assert_eq!(err.into_value(), 'x');
    /// ```
    pub fn new(value: T) -> Result<Self, PredicateViolation<T>> {
        if P::check(&value) {
            Ok(Self {
                value,
                _predicate: PhantomData,
            })
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                predicate = std::any::type_name::<P>(),
                description = P::description(),
                "refinement rejected value"
            );
            Err(PredicateViolation::new::<P>(value))
        }
    }

    /// Borrow the checked value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Unwrap into the checked value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use proven::refined::{Digit, Refined};
    ///
    /// let d = Refined::<char, Digit>::new('7').unwrap();
    /// let c: char = d.into_inner();
    /// assert_eq!(c, '7');
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Transform the value and check `P` again on the result.
    ///
    /// # Example
    ///
    /// ```rust
    /// use proven::refined::{PositiveI32, Refined};
    ///
    /// let n = PositiveI32::new(42).unwrap();
    /// assert!(n.try_map(|x| x * 2).is_ok());
    ///
    /// let n = PositiveI32::new(5).unwrap();
    /// assert!(n.try_map(|x| -x).is_err());
    /// ```
    pub fn try_map<F>(self, f: F) -> Result<Self, PredicateViolation<T>>
    where
        F: FnOnce(T) -> T,
    {
        Self::new(f(self.value))
    }
}

/// Refine a value with predicate `P`.
///
/// Equivalent to [`Refined::new`], with the predicate named up front.
///
/// # Example
///
/// ```rust
/// use proven::refined::{refine, Letter};
///
/// let c = refine::<Letter, _>('k').unwrap();
/// assert_eq!(*c, 'k');
/// ```
pub fn refine<P, T>(value: T) -> Result<Refined<T, P>, PredicateViolation<T>>
where
    P: Predicate<T>,
{
    Refined::new(value)
}

/// Method-call syntax for refining any value.
///
/// # Example
///
/// ```rust
/// use proven::refined::{Digit, RefineExt};
///
/// let d = '4'.refine::<Digit>().unwrap();
/// assert_eq!(d.into_inner(), '4');
/// assert!('x'.refine::<Digit>().is_err());
/// ```
pub trait RefineExt: Sized {
    /// Check `self` against `P`, wrapping it on success.
    fn refine<P: Predicate<Self>>(self) -> Result<Refined<Self, P>, PredicateViolation<Self>> {
        Refined::new(self)
    }
}

impl<T> RefineExt for T {}

impl<T: fmt::Debug, P: Predicate<T>> fmt::Debug for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Refined")
            .field("value", &self.value)
            .field("predicate", &std::any::type_name::<P>())
            .finish()
    }
}

impl<T: Clone, P: Predicate<T>> Clone for Refined<T, P> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            _predicate: PhantomData,
        }
    }
}

impl<T: Copy, P: Predicate<T>> Copy for Refined<T, P> {}

// Equality ignores the predicate marker
impl<T: PartialEq, P: Predicate<T>, Q: Predicate<T>> PartialEq<Refined<T, Q>> for Refined<T, P> {
    fn eq(&self, other: &Refined<T, Q>) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, P: Predicate<T>> Eq for Refined<T, P> {}

impl<T: PartialOrd, P: Predicate<T>> PartialOrd for Refined<T, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, P: Predicate<T>> Ord for Refined<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, P: Predicate<T>> Hash for Refined<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T, P: Predicate<T>> AsRef<T> for Refined<T, P> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T, P: Predicate<T>> std::ops::Deref for Refined<T, P> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, P: Predicate<T>> fmt::Display for Refined<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Even;

    impl Predicate<i32> for Even {
        fn check(value: &i32) -> bool {
            value % 2 == 0
        }

        fn description() -> &'static str {
            "even number"
        }
    }

    struct Small;

    impl Predicate<i32> for Small {
        fn check(value: &i32) -> bool {
            value.abs() < 100
        }
    }

    type EvenNumber = Refined<i32, Even>;

    #[test]
    fn test_new_accepts_even() {
        let n = EvenNumber::new(12).unwrap();
        assert_eq!(n.get(), &12);
    }

    #[test]
    fn test_new_rejects_odd() {
        let err = EvenNumber::new(11).unwrap_err();
        assert_eq!(*err.value(), 11);
        assert_eq!(err.description(), "even number");
    }

    #[test]
    fn test_new_succeeds_iff_check() {
        for v in -20..20 {
            assert_eq!(EvenNumber::new(v).is_ok(), Even::check(&v));
        }
    }

    #[test]
    fn test_into_inner_returns_original() {
        for v in (-20..20).step_by(2) {
            assert_eq!(EvenNumber::new(v).unwrap().into_inner(), v);
        }
    }

    #[test]
    fn test_get_is_idempotent() {
        let n = EvenNumber::new(12).unwrap();
        assert_eq!(*n.get(), 12);
        assert_eq!(*n.get(), 12);
        assert_eq!(*n, 12);
    }

    #[test]
    fn test_try_map_keeps_valid() {
        let n = EvenNumber::new(12).unwrap();
        let doubled = n.try_map(|x| x * 2).unwrap();
        assert_eq!(*doubled.get(), 24);
    }

    #[test]
    fn test_try_map_failure_returns_mapped_value() {
        let n = EvenNumber::new(12).unwrap();
        let err = n.try_map(|x| x + 1).unwrap_err();
        assert_eq!(err.into_value(), 13);
    }

    #[test]
    fn test_refine_fn_and_ext() {
        assert_eq!(refine::<Even, _>(4).unwrap().into_inner(), 4);
        assert!(refine::<Even, _>(5).is_err());
        assert_eq!(8_i32.refine::<Even>().unwrap().into_inner(), 8);
        assert!(9_i32.refine::<Even>().is_err());
    }

    #[test]
    #[allow(clippy::clone_on_copy)]
    fn test_clone_and_copy() {
        let n = EvenNumber::new(12).unwrap();
        let copied = n;
        let cloned = n.clone();
        assert_eq!(n, copied);
        assert_eq!(n, cloned);
    }

    #[test]
    fn test_equality_same_predicate() {
        let a = EvenNumber::new(12).unwrap();
        let b = EvenNumber::new(12).unwrap();
        let c = EvenNumber::new(18).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_eq_across_predicates() {
        let even = EvenNumber::new(12).unwrap();
        let small = Refined::<i32, Small>::new(12).unwrap();
        let other = Refined::<i32, Small>::new(40).unwrap();
        assert!(even == small);
        assert!(even != other);
    }

    #[test]
    fn test_ordering_follows_value() {
        let low = EvenNumber::new(12).unwrap();
        let high = EvenNumber::new(18).unwrap();
        assert!(low < high);
        assert_eq!(low.max(high), high);
        assert_eq!(low.cmp(&high), Ordering::Less);
    }

    #[test]
    fn test_hash_uses_value() {
        use std::collections::HashSet;

        let mut seen = HashSet::new();
        seen.insert(EvenNumber::new(12).unwrap());
        seen.insert(EvenNumber::new(12).unwrap());
        seen.insert(EvenNumber::new(18).unwrap());

        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_as_ref_and_deref() {
        let n = EvenNumber::new(12).unwrap();
        let inner: &i32 = n.as_ref();
        assert_eq!(*inner, 12);
        assert_eq!(n.abs(), 12);
    }

    #[test]
    fn test_display_is_transparent() {
        let n = EvenNumber::new(12).unwrap();
        assert_eq!(format!("{}", n), "12");
    }

    #[test]
    fn test_debug_names_predicate() {
        let n = EvenNumber::new(12).unwrap();
        let rendered = format!("{:?}", n);
        assert!(rendered.contains("Refined"));
        assert!(rendered.contains("12"));
        assert!(rendered.contains("Even"));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Refined<char, Letter>>();
        assert_send_sync::<Refined<String, AtMost<8>>>();
        assert_send_sync::<Refined<i32, AllOf<(Even, Small)>>>();
        assert_send_sync::<PredicateViolation<String>>();
    }

    #[test]
    fn test_zero_overhead() {
        assert_eq!(std::mem::size_of::<EvenNumber>(), std::mem::size_of::<i32>());
        assert_eq!(
            std::mem::size_of::<Refined<String, AtMost<8>>>(),
            std::mem::size_of::<String>()
        );
    }
}
