//! Serde support for [`Present`] (feature-gated)
//!
//! A `Present<A>` is written as a sequence of one element. Reading accepts
//! any sequence and rebuilds the wrapper with [`Present::from_first`]: the
//! first element is kept, further elements are skipped, and an empty
//! sequence produces an uninitialized wrapper.
//!
//! # Example
//!
//! ```rust,ignore
//! use proven::present::Present;
//!
//! let json = serde_json::to_string(&Present::new(5)).unwrap();
//! assert_eq!(json, "[5]");
//!
//! let back: Present<i32> = serde_json::from_str(&json).unwrap();
//! assert_eq!(back.value(), Ok(&5));
//! ```

use serde::de::{IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

use super::Present;

impl<A: Serialize> Serialize for Present<A> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

struct PresentVisitor<A>(PhantomData<fn() -> A>);

impl<'de, A: Deserialize<'de>> Visitor<'de> for PresentVisitor<A> {
    type Value = Present<A>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a sequence holding the present value")
    }

    fn visit_seq<S: SeqAccess<'de>>(self, mut seq: S) -> Result<Self::Value, S::Error> {
        let first = seq.next_element::<A>()?;
        if first.is_some() {
            while seq.next_element::<IgnoredAny>()?.is_some() {}
        }
        Ok(Present::from_first(first))
    }
}

impl<'de, A: Deserialize<'de>> Deserialize<'de> for Present<A> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(PresentVisitor(PhantomData))
    }
}
