//! Error types for the non-null wrapper.

use std::fmt;

/// An absent value was given where a present one is required.
///
/// Returned by [`Present::from_nullable`](super::Present::from_nullable)
/// and by `Present::try_from(None)`. Recoverable: supply a present value.
///
/// # Examples
///
/// ```rust
/// use proven::present::Present;
///
/// let err = Present::<u32>::try_from(None).unwrap_err();
/// assert_eq!(err.type_name(), "u32");
/// assert_eq!(err.to_string(), "value of type u32 is absent where a present value is required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullValueError {
    type_name: &'static str,
}

impl NullValueError {
    /// Create the error for a missing value of type `A`.
    pub fn new<A: ?Sized>() -> Self {
        Self {
            type_name: std::any::type_name::<A>(),
        }
    }

    /// Name of the type whose value was absent.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for NullValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value of type {} is absent where a present value is required",
            self.type_name
        )
    }
}

impl std::error::Error for NullValueError {}

/// The value of an uninitialized [`Present`](super::Present) was read.
///
/// An uninitialized `Present` can only come out of
/// [`Present::from_first`](super::Present::from_first) on an empty
/// sequence. Reaching this error means a deserializer produced a wrapper
/// that was never populated; treat it as a broken invariant rather than a
/// normal control-flow case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UninitializedAccessError {
    type_name: &'static str,
}

impl UninitializedAccessError {
    /// Create the error for an uninitialized `Present<A>`.
    pub fn new<A: ?Sized>() -> Self {
        Self {
            type_name: std::any::type_name::<A>(),
        }
    }

    /// Name of the wrapped type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}

impl fmt::Display for UninitializedAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Present<{}> has not been initialized",
            self.type_name
        )
    }
}

impl std::error::Error for UninitializedAccessError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_value_error() {
        let err = NullValueError::new::<String>();
        assert!(err.type_name().ends_with("String"));
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn test_uninitialized_access_error() {
        let err = UninitializedAccessError::new::<i32>();
        assert_eq!(err.type_name(), "i32");
        assert_eq!(err.to_string(), "Present<i32> has not been initialized");
    }

    #[test]
    fn test_are_std_errors() {
        fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: E) {}
        assert_error(NullValueError::new::<u8>());
        assert_error(UninitializedAccessError::new::<u8>());
    }
}
