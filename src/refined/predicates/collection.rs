//! Count predicates for sequences and collections
//!
//! This module provides predicates that bound how many items something
//! holds:
//! - [`MaxCount<MAX>`]: count <= MAX
//! - [`MinCount<MIN>`]: count >= MIN
//!
//! Both work on anything implementing [`Counted`]. [`SeqInfo`] is the
//! bare count: when the length of a sequence is already known, wrap it in a
//! `SeqInfo` and check that instead of the sequence itself.
//!
//! # Example
//!
//! ```rust
//! use proven::constant::ConstUsize;
//! use proven::refined::{MaxCount, Predicate, Refined, SeqInfo};
//!
//! type AtMostThree = MaxCount<ConstUsize<3>>;
//!
//! assert!(AtMostThree::check(&SeqInfo::new(3)));
//! assert!(!AtMostThree::check(&SeqInfo::new(4)));
//!
//! type SmallVec = Refined<Vec<i32>, AtMostThree>;
//! assert!(SmallVec::new(vec![1, 2]).is_ok());
//! ```

use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, VecDeque};
use std::fmt;
use std::marker::PhantomData;

use super::super::Predicate;
use crate::constant::Const;

/// Something with a known number of items.
pub trait Counted {
    /// Number of items.
    fn count(&self) -> usize;
}

/// A pre-computed item count for a sequence.
///
/// Checking a `SeqInfo` never touches the sequence it describes.
///
/// # Example
///
/// ```rust
/// use proven::refined::SeqInfo;
///
/// let items = vec!['a', 'b', 'c'];
/// let info = SeqInfo::of(&items);
/// assert_eq!(info.count(), 3);
/// assert_eq!(SeqInfo::from(7).count(), 7);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SeqInfo {
    count: usize,
}

impl SeqInfo {
    /// Describe a sequence of `count` items.
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    /// Describe an existing collection.
    pub fn of<C: Counted + ?Sized>(collection: &C) -> Self {
        Self::new(collection.count())
    }

    /// Number of items in the described sequence.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl From<usize> for SeqInfo {
    fn from(count: usize) -> Self {
        Self::new(count)
    }
}

impl Counted for SeqInfo {
    fn count(&self) -> usize {
        self.count
    }
}

impl<E> Counted for [E] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<E> Counted for &[E] {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<E, const N: usize> Counted for [E; N] {
    fn count(&self) -> usize {
        N
    }
}

impl<E> Counted for Vec<E> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<E> Counted for Box<[E]> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<E> Counted for BinaryHeap<E> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<E> Counted for VecDeque<E> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<E, S> Counted for HashSet<E, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<E> Counted for BTreeSet<E> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Counted for HashMap<K, V, S> {
    fn count(&self) -> usize {
        self.len()
    }
}

impl<K, V> Counted for BTreeMap<K, V> {
    fn count(&self) -> usize {
        self.len()
    }
}

// Strings count characters, not bytes
impl Counted for String {
    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl Counted for str {
    fn count(&self) -> usize {
        self.chars().count()
    }
}

impl Counted for &str {
    fn count(&self) -> usize {
        self.chars().count()
    }
}

/// Item count must be at most `MAX`
///
/// A bound of zero accepts only empty sequences.
///
/// # Example
///
/// ```rust
/// use proven::constant::ConstUsize;
/// use proven::refined::{MaxCount, Refined};
///
/// type Tag = Refined<String, MaxCount<ConstUsize<4>>>;
///
/// assert!(Tag::new("rust".to_string()).is_ok());
/// assert!(Tag::new("crab".to_string()).is_ok());
/// assert!(Tag::new("ferris".to_string()).is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct MaxCount<MAX>(PhantomData<fn() -> MAX>);

impl<MAX> fmt::Debug for MaxCount<MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MaxCount<{}>", std::any::type_name::<MAX>())
    }
}

impl<T: Counted, MAX: Const<usize>> Predicate<T> for MaxCount<MAX> {
    #[inline]
    fn check(value: &T) -> bool {
        value.count() <= MAX::value()
    }

    fn description() -> &'static str {
        "collection with maximum count"
    }
}

/// Item count must be at least `MIN`
///
/// # Example
///
/// ```rust
/// use proven::constant::ConstUsize;
/// use proven::refined::{MinCount, Refined};
///
/// type Pair = Refined<Vec<i32>, MinCount<ConstUsize<2>>>;
///
/// assert!(Pair::new(vec![1, 2]).is_ok());
/// assert!(Pair::new(vec![1]).is_err());
/// ```
#[derive(Clone, Copy, Default)]
pub struct MinCount<MIN>(PhantomData<fn() -> MIN>);

impl<MIN> fmt::Debug for MinCount<MIN> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MinCount<{}>", std::any::type_name::<MIN>())
    }
}

impl<T: Counted, MIN: Const<usize>> Predicate<T> for MinCount<MIN> {
    #[inline]
    fn check(value: &T) -> bool {
        value.count() >= MIN::value()
    }

    fn description() -> &'static str {
        "collection with minimum count"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::ConstUsize;
    use crate::refined::Refined;

    type AtMostThree = MaxCount<ConstUsize<3>>;
    type AtMostZero = MaxCount<ConstUsize<0>>;
    type AtLeastTwo = MinCount<ConstUsize<2>>;

    #[test]
    fn test_max_count_scenario() {
        assert!(AtMostThree::check(&SeqInfo::new(3)));
        assert!(!AtMostThree::check(&SeqInfo::new(4)));
    }

    #[test]
    fn test_max_count_zero_means_empty_only() {
        assert!(AtMostZero::check(&SeqInfo::new(0)));
        assert!(!AtMostZero::check(&SeqInfo::new(1)));
        assert!(AtMostZero::check(&Vec::<u8>::new()));
        assert!(!AtMostZero::check(&vec![0u8]));
    }

    #[test]
    fn test_max_count_collections() {
        assert!(AtMostThree::check(&vec![1, 2, 3]));
        assert!(!AtMostThree::check(&vec![1, 2, 3, 4]));
        assert!(AtMostThree::check(&VecDeque::from(vec![1, 2])));
        assert!(AtMostThree::check(&[1, 2, 3]));
        assert!(!AtMostThree::check(&[1, 2, 3, 4]));
        assert!(AtMostThree::check(&HashSet::from([1, 2, 3])));
        assert!(!AtMostThree::check(&BTreeSet::from([1, 2, 3, 4])));
        assert!(AtMostThree::check(&HashMap::from([(1, 'a')])));
        assert!(!AtMostThree::check(&BTreeMap::from([(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd')])));
    }

    #[test]
    fn test_slices() {
        let items = [1, 2, 3, 4];
        let slice: &[i32] = &items[..3];
        assert!(AtMostThree::check(&slice));
        assert_eq!(SeqInfo::of(&items[..]).count(), 4);
    }

    #[test]
    fn test_strings_count_chars() {
        assert!(AtMostThree::check(&"héé".to_string()));
        assert!(!AtMostThree::check(&"héé!".to_string()));
        assert!(AtMostThree::check(&"abc"));
    }

    #[test]
    fn test_str_and_boxed_slices() {
        assert_eq!(SeqInfo::of("héllo").count(), 5);
        assert_eq!(SeqInfo::of(&String::from("ab")[..]).count(), 2);

        let boxed: Box<[u8]> = vec![1, 2, 3, 4].into_boxed_slice();
        assert!(!AtMostThree::check(&boxed));
        assert_eq!(SeqInfo::of(&boxed).count(), 4);

        let heap = BinaryHeap::from(vec![3, 1, 2]);
        assert!(AtMostThree::check(&heap));
        assert!(AtLeastTwo::check(&heap));
    }

    #[test]
    fn test_min_count() {
        assert!(!AtLeastTwo::check(&SeqInfo::new(1)));
        assert!(AtLeastTwo::check(&SeqInfo::new(2)));
        assert!(AtLeastTwo::check(&vec!['a', 'b', 'c']));
    }

    #[test]
    fn test_seq_info() {
        let v = vec![1, 2, 3];
        assert_eq!(SeqInfo::of(&v), SeqInfo::new(3));
        assert_eq!(SeqInfo::from(5).count(), 5);
        assert_eq!(SeqInfo::default().count(), 0);
    }

    #[test]
    fn test_refined_vec() {
        type SmallVec = Refined<Vec<i32>, AtMostThree>;
        assert!(SmallVec::new(vec![]).is_ok());
        assert!(SmallVec::new(vec![1, 2, 3]).is_ok());

        let err = SmallVec::new(vec![1, 2, 3, 4]).unwrap_err();
        assert_eq!(err.into_value(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_descriptions() {
        assert_eq!(
            <AtMostThree as Predicate<Vec<i32>>>::description(),
            "collection with maximum count"
        );
        assert_eq!(
            <AtLeastTwo as Predicate<SeqInfo>>::description(),
            "collection with minimum count"
        );
    }
}
