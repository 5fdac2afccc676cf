//! The error returned when a value fails its refinement predicate

use std::fmt;

use super::Predicate;

/// A value was rejected by a refinement predicate.
///
/// Carries the rejected value back to the caller along with the identity
/// of the predicate that rejected it. The predicate identity is for
/// diagnostics only.
///
/// # Example
///
/// ```rust
/// use proven::refined::{Digit, Refined};
///
/// let err = Refined::<char, Digit>::new('x').unwrap_err();
/// assert_eq!(*err.value(), 'x');
/// assert_eq!(err.description(), "ASCII digit ('0'..='9')");
/// assert!(err.predicate().ends_with("Digit"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct PredicateViolation<T> {
    value: T,
    predicate: &'static str,
    description: &'static str,
}

impl<T> PredicateViolation<T> {
    /// Record that `value` failed predicate `P`.
    pub fn new<P: Predicate<T>>(value: T) -> Self {
        Self {
            value,
            predicate: std::any::type_name::<P>(),
            description: P::description(),
        }
    }

    /// The rejected value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Take the rejected value back.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Type name of the predicate that failed.
    pub fn predicate(&self) -> &'static str {
        self.predicate
    }

    /// Human-readable description of the predicate that failed.
    pub fn description(&self) -> &'static str {
        self.description
    }
}

impl<T: fmt::Debug> fmt::Debug for PredicateViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateViolation")
            .field("value", &self.value)
            .field("predicate", &self.predicate)
            .finish()
    }
}

impl<T: fmt::Debug> fmt::Display for PredicateViolation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value {:?} must satisfy: {}", self.value, self.description)
    }
}

impl<T: fmt::Debug> std::error::Error for PredicateViolation<T> {}
