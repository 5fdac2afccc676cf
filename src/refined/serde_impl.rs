//! Serde support for refined types (feature-gated)
//!
//! `Refined<T, P>` serializes exactly like `T`. Deserialization reads a `T`
//! and then runs the predicate, so invalid input is rejected at the
//! boundary.
//!
//! # Example
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use proven::refined::{LetterChar, Percentage};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Grade {
//!     letter: LetterChar,
//!     score: Percentage,
//! }
//!
//! let grade: Grade = serde_json::from_str(r#"{"letter":"A","score":93}"#).unwrap();
//!
//! let bad: Result<Grade, _> = serde_json::from_str(r#"{"letter":"A","score":130}"#);
//! assert!(bad.is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::{Predicate, Refined};

impl<T, P> Serialize for Refined<T, P>
where
    T: Serialize,
    P: Predicate<T>,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.get().serialize(serializer)
    }
}

impl<'de, T, P> Deserialize<'de> for Refined<T, P>
where
    T: Deserialize<'de> + fmt::Debug,
    P: Predicate<T>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = T::deserialize(deserializer)?;
        Refined::new(value).map_err(serde::de::Error::custom)
    }
}
