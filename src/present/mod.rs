//! A wrapper that always holds a value
//!
//! [`Present<A>`] is the non-null counterpart of `Option<A>`: it converts
//! into an `Option` at any time, but can only be built from a value that is
//! actually there. Construction from an absent source fails with
//! [`NullValueError`].
//!
//! # Examples
//!
//! ```rust
//! use proven::present::Present;
//!
//! let name = Present::new("Ferris");
//! assert!(name.is_some());
//! assert_eq!(name.value(), Ok(&"Ferris"));
//!
//! // Present -> Option is total
//! let opt: Option<&str> = name.into();
//! assert_eq!(opt, Some("Ferris"));
//!
//! // Option -> Present is partial
//! assert!(Present::<i32>::try_from(Some(1)).is_ok());
//! assert!(Present::<i32>::try_from(None).is_err());
//! ```
//!
//! # Uninitialized instances
//!
//! [`Present::from_first`] builds a wrapper from the first element of a
//! sequence. Given an empty sequence it produces an *uninitialized*
//! `Present`: [`is_some`](Present::is_some) is false and every value
//! accessor returns [`UninitializedAccessError`]. This exists for
//! deserializers that reconstruct a `Present` from a zero-or-one element
//! sequence; no other constructor can produce the uninitialized state.

mod error;
#[cfg(feature = "serde")]
mod serde_impl;

use std::fmt;
use std::ptr::NonNull;

pub use error::{NullValueError, UninitializedAccessError};

/// A value that is guaranteed to be present.
///
/// # Examples
///
/// ```rust
/// use proven::present::Present;
///
/// let p = Present::new(42);
/// assert_eq!(p.into_value(), Ok(42));
///
/// let collected: Vec<i32> = Present::new(7).into_iter().collect();
/// assert_eq!(collected, vec![7]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Present<A> {
    value: Option<A>,
}

impl<A> Present<A> {
    /// Wrap a value.
    ///
    /// Always succeeds: a Rust value of type `A` cannot be null. Use
    /// [`from_nullable`](Present::from_nullable) for sources that can be.
    pub fn new(value: A) -> Self {
        Self { value: Some(value) }
    }

    /// Wrap the present side of a nullable value.
    ///
    /// Fails with [`NullValueError`] if `nullable` holds its absent
    /// sentinel (`None`, a null pointer).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use proven::present::Present;
    ///
    /// assert!(Present::from_nullable(Some("x")).is_ok());
    /// assert!(Present::from_nullable(None::<&str>).is_err());
    ///
    /// let null: *const u8 = std::ptr::null();
    /// assert!(Present::from_nullable(null).is_err());
    /// ```
    pub fn from_nullable<N>(nullable: N) -> Result<Self, NullValueError>
    where
        N: Nullable<Value = A>,
    {
        nullable
            .into_non_null()
            .map(Self::new)
            .ok_or_else(NullValueError::new::<A>)
    }

    /// Build from the first element of a sequence, ignoring the rest.
    ///
    /// An empty sequence yields an uninitialized wrapper. This is the only
    /// way to obtain one; it is meant for deserialization, where a
    /// `Present` is rebuilt from a zero-or-one element sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use proven::present::Present;
    ///
    /// let p = Present::from_first(vec![1, 2, 3]);
    /// assert_eq!(p.value(), Ok(&1));
    ///
    /// let empty = Present::from_first(Vec::<i32>::new());
    /// assert!(empty.is_none());
    /// assert!(empty.value().is_err());
    /// ```
    pub fn from_first<I>(values: I) -> Self
    where
        I: IntoIterator<Item = A>,
    {
        let value = values.into_iter().next();
        #[cfg(feature = "tracing")]
        {
            if value.is_none() {
                tracing::warn!(
                    type_name = std::any::type_name::<A>(),
                    "built an uninitialized Present from an empty sequence"
                );
            }
        }
        Self { value }
    }

    /// Whether the wrapper holds a value.
    #[inline]
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the wrapper is uninitialized.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.value.is_none()
    }

    /// Borrow the held value.
    pub fn value(&self) -> Result<&A, UninitializedAccessError> {
        match &self.value {
            Some(value) => Ok(value),
            None => Err(Self::uninitialized()),
        }
    }

    /// Take the held value.
    pub fn into_value(self) -> Result<A, UninitializedAccessError> {
        match self.value {
            Some(value) => Ok(value),
            None => Err(Self::uninitialized()),
        }
    }

    /// View as an `Option`: `Some` if initialized, `None` otherwise.
    #[inline]
    pub fn as_option(&self) -> Option<&A> {
        self.value.as_ref()
    }

    /// Convert into an `Option`: `Some` if initialized, `None` otherwise.
    #[inline]
    pub fn into_option(self) -> Option<A> {
        self.value
    }

    /// Iterate over the held value: one item, or none if uninitialized.
    pub fn iter(&self) -> std::option::Iter<'_, A> {
        self.value.iter()
    }

    fn uninitialized() -> UninitializedAccessError {
        #[cfg(feature = "tracing")]
        tracing::error!(
            type_name = std::any::type_name::<A>(),
            "read from an uninitialized Present"
        );
        UninitializedAccessError::new::<A>()
    }
}

/// A type with an absent sentinel value.
///
/// Implemented for `Option<T>` (`None`) and raw pointers (null). The present
/// side of a raw pointer is a [`NonNull`].
pub trait Nullable {
    /// What a present value looks like.
    type Value;

    /// The present value, or `None` for the absent sentinel.
    fn into_non_null(self) -> Option<Self::Value>;
}

impl<T> Nullable for Option<T> {
    type Value = T;

    fn into_non_null(self) -> Option<T> {
        self
    }
}

impl<T: ?Sized> Nullable for *mut T {
    type Value = NonNull<T>;

    fn into_non_null(self) -> Option<NonNull<T>> {
        NonNull::new(self)
    }
}

impl<T: ?Sized> Nullable for *const T {
    type Value = NonNull<T>;

    fn into_non_null(self) -> Option<NonNull<T>> {
        NonNull::new(self.cast_mut())
    }
}

/// Method-call syntax for wrapping any value in [`Present`].
///
/// # Examples
///
/// ```rust
/// use proven::present::IntoPresent;
///
/// let p = "hello".to_string().into_present();
/// assert!(p.is_some());
/// ```
pub trait IntoPresent: Sized {
    /// Wrap `self` in a `Present`.
    fn into_present(self) -> Present<Self> {
        Present::new(self)
    }
}

impl<T> IntoPresent for T {}

impl<A> From<A> for Present<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

impl<A> From<Present<A>> for Option<A> {
    fn from(present: Present<A>) -> Self {
        present.value
    }
}

impl<'a, A> From<&'a Present<A>> for Option<&'a A> {
    fn from(present: &'a Present<A>) -> Self {
        present.value.as_ref()
    }
}

impl<A> TryFrom<Option<A>> for Present<A> {
    type Error = NullValueError;

    fn try_from(value: Option<A>) -> Result<Self, Self::Error> {
        Self::from_nullable(value)
    }
}

impl<A> FromIterator<A> for Present<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::from_first(iter)
    }
}

impl<A> IntoIterator for Present<A> {
    type Item = A;
    type IntoIter = std::option::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.into_iter()
    }
}

impl<'a, A> IntoIterator for &'a Present<A> {
    type Item = &'a A;
    type IntoIter = std::option::Iter<'a, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.value.iter()
    }
}

impl<A: fmt::Debug> fmt::Debug for Present<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => f.debug_tuple("Present").field(value).finish(),
            None => f.write_str("Present(<uninitialized>)"),
        }
    }
}

impl<A: fmt::Display> fmt::Display for Present<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => value.fmt(f),
            None => f.write_str("<uninitialized>"),
        }
    }
}
