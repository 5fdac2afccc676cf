//! # Proven
//!
//! Values that carry their guarantees in their types.
//!
//! - [`Refined<T, P>`](refined::Refined): a `T` checked once against a
//!   type-level predicate `P`, then trusted everywhere it travels.
//! - [`Present<A>`](present::Present): a value that is known to be there,
//!   the non-null counterpart of `Option<A>`.
//!
//! Predicates are zero-sized marker types. Their parameters (bounds,
//! orderings, characters) are marker types too, so a predicate such as
//! "between 1 and 65535" is a type you can name in a signature:
//!
//! ```rust
//! use proven::constant::ConstU16;
//! use proven::order::Natural;
//! use proven::refined::{InRange, Refined};
//!
//! type Port = Refined<u16, InRange<Natural, ConstU16<1>, ConstU16<65535>>>;
//!
//! fn bind(port: Port) -> u16 {
//!     // no validation needed here
//!     port.into_inner()
//! }
//!
//! let port = Port::new(8080).unwrap();
//! assert_eq!(bind(port), 8080);
//! assert!(Port::new(0).is_err());
//! ```
//!
//! ## Present values
//!
//! ```rust
//! use proven::Present;
//!
//! let user = Present::<&str>::try_from(Some("ada")).unwrap();
//! assert_eq!(user.value(), Ok(&"ada"));
//!
//! assert!(Present::<&str>::try_from(None).is_err());
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for both wrappers, with
//!   deserialization of refined values validated.
//! - `tracing`: events for rejected refinements and uninitialized
//!   `Present` values.
//! - `proptest`: `Arbitrary` for both wrappers.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod constant;
pub mod order;
pub mod present;
pub mod refined;
pub mod testing;

// Re-exports
pub use present::{IntoPresent, NullValueError, Present, UninitializedAccessError};
pub use refined::{Predicate, PredicateViolation, RefineExt, Refined};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::constant::Const;
    pub use crate::order::{Comparator, Natural, Reversed};
    pub use crate::present::{IntoPresent, NullValueError, Present, UninitializedAccessError};
    pub use crate::refined::{
        refine, AllOf, AnyOf, Exists, Not, Predicate, PredicateViolation, RefineExt, Refined,
    };
}
