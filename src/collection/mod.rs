//! Collection traversal, transformation and set operations.
//!
//! Every operation in this module works on a [`Collection`]: a borrowed view
//! of either an ordered sequence (`&[T]`, `&Vec<T>`, `&[T; N]`) or a
//! string-keyed mapping (`&BTreeMap<String, T>`). The only place that looks
//! at which variant it was handed is [`Collection::iter`]; [`each`] and
//! [`fold`] walk that iterator and everything else is built on top of them.
//!
//! - Iteration: [`each`], [`index_of`]
//! - Transformation: [`filter`], [`reject`], [`map`], [`pluck`], [`uniq`],
//!   [`first`], [`last`]
//! - Aggregation: [`reduce`], [`fold`], [`contains`], [`every`], [`some`]
//! - Advanced: [`shuffle`], [`invoke`], [`sort_by`], [`zip`], [`flatten`],
//!   [`intersection`], [`difference`]
//!
//! # Examples
//!
//! ```rust
//! use fnkit::collection::{each, map, Position};
//! use std::collections::BTreeMap;
//!
//! let mut stock = BTreeMap::new();
//! stock.insert("apples".to_string(), 3);
//! stock.insert("pears".to_string(), 0);
//!
//! let mut seen = Vec::new();
//! each(&stock, |count, position, _| {
//!     if let Position::Key(name) = position {
//!         seen.push(format!("{name}={count}"));
//!     }
//! });
//! assert_eq!(seen, vec!["apples=3", "pears=0"]);
//!
//! assert_eq!(map(&stock, |count: &i32| count * 10), vec![30, 0]);
//! ```

mod advanced;
mod aggregate;
mod iteration;
mod transform;

use std::collections::{BTreeMap, HashMap, btree_map};
use std::hash::BuildHasher;

pub use advanced::{
    Methods, Nested, difference, flatten, intersection, invoke, invoke_method, shuffle,
    shuffle_random, sort_by, sort_by_key_fn, sort_by_property, zip, zip_pair,
};
pub use aggregate::{contains, every, every_truthy, fold, reduce, some, some_truthy};
pub use iteration::{each, index_of};
pub use transform::{
    UniqStrategy, filter, first, first_n, last, last_n, map, pluck, reject, uniq, uniq_values,
};

/// A borrowed, uniformly traversable collection.
///
/// Sequences are visited in index order. Mappings are visited in the
/// enumeration order of the underlying map, which for `BTreeMap` is
/// ascending key order.
#[derive(Debug)]
pub enum Collection<'a, T> {
    /// An index-addressable sequence.
    Sequence(&'a [T]),
    /// A mapping from string keys to values.
    Mapping(&'a BTreeMap<String, T>),
}

impl<T> Clone for Collection<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Collection<'_, T> {}

impl<T> Collection<'_, T> {
    /// Returns the number of elements in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(values) => values.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    /// Returns `true` if the collection has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a, T> Collection<'a, T> {
    /// Returns an iterator over `(position, value)` pairs in traversal order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::collection::{Collection, Position};
    /// use std::collections::BTreeMap;
    ///
    /// let entries = BTreeMap::from([("b".to_string(), 2), ("a".to_string(), 1)]);
    /// let pairs: Vec<_> = Collection::from(&entries).iter().collect();
    /// assert_eq!(pairs, vec![(Position::Key("a"), &1), (Position::Key("b"), &2)]);
    /// ```
    pub fn iter(&self) -> Iter<'a, T> {
        let inner = match *self {
            Self::Sequence(values) => IterInner::Sequence(values.iter().enumerate()),
            Self::Mapping(entries) => IterInner::Mapping(entries.iter()),
        };
        Iter { inner }
    }
}

impl<'a, T> IntoIterator for Collection<'a, T> {
    type Item = (Position<'a>, &'a T);
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Iterator over the elements of a [`Collection`], created by
/// [`Collection::iter`].
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: IterInner<'a, T>,
}

#[derive(Debug)]
enum IterInner<'a, T> {
    Sequence(std::iter::Enumerate<std::slice::Iter<'a, T>>),
    Mapping(btree_map::Iter<'a, String, T>),
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (Position<'a>, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Sequence(values) => values
                .next()
                .map(|(index, value)| (Position::Index(index), value)),
            IterInner::Mapping(entries) => entries
                .next()
                .map(|(key, value)| (Position::Key(key.as_str()), value)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Sequence(values) => values.size_hint(),
            IterInner::Mapping(entries) => entries.size_hint(),
        }
    }
}

impl<'a, T> From<&'a [T]> for Collection<'a, T> {
    fn from(values: &'a [T]) -> Self {
        Self::Sequence(values)
    }
}

impl<'a, T> From<&'a Vec<T>> for Collection<'a, T> {
    fn from(values: &'a Vec<T>) -> Self {
        Self::Sequence(values.as_slice())
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Collection<'a, T> {
    fn from(values: &'a [T; N]) -> Self {
        Self::Sequence(values.as_slice())
    }
}

impl<'a, T> From<&'a BTreeMap<String, T>> for Collection<'a, T> {
    fn from(entries: &'a BTreeMap<String, T>) -> Self {
        Self::Mapping(entries)
    }
}

/// Where an element sits inside its collection.
///
/// Passed as the second argument to the [`each`] callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position<'a> {
    /// Index of an element of a sequence.
    Index(usize),
    /// Key of an entry of a mapping.
    Key(&'a str),
}

/// Named property lookup, used by [`pluck`] and [`sort_by_property`].
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::Property;
/// use std::collections::BTreeMap;
///
/// let mut person = BTreeMap::new();
/// person.insert("age".to_string(), 42);
///
/// assert_eq!(person.property("age"), Some(42));
/// assert_eq!(person.property("height"), None);
/// ```
pub trait Property {
    /// The type of the property values.
    type Value;

    /// Returns the value stored under `name`, or `None` when it is absent.
    fn property(&self, name: &str) -> Option<Self::Value>;
}

impl<V: Clone> Property for BTreeMap<String, V> {
    type Value = V;

    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

impl<V: Clone, S: BuildHasher> Property for HashMap<String, V, S> {
    type Value = V;

    fn property(&self, name: &str) -> Option<V> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_collection_len_for_both_variants() {
        let values = vec![1, 2, 3];
        let mut entries = BTreeMap::new();
        entries.insert("a".to_string(), 1);

        assert_eq!(Collection::from(&values).len(), 3);
        assert_eq!(Collection::from(&entries).len(), 1);
        assert!(Collection::<i32>::Sequence(&[]).is_empty());
    }

    #[rstest]
    fn test_iter_yields_positions_in_order() {
        let values = ["x", "y"];
        let collection = Collection::from(&values);
        let mut iter = collection.iter();
        assert_eq!(iter.size_hint(), (2, Some(2)));
        assert_eq!(iter.next(), Some((Position::Index(0), &"x")));
        assert_eq!(iter.next(), Some((Position::Index(1), &"y")));
        assert_eq!(iter.next(), None);
    }

    #[rstest]
    fn test_hashmap_property() {
        let mut record: HashMap<String, &str> = HashMap::new();
        record.insert("name".to_string(), "moe");
        assert_eq!(record.property("name"), Some("moe"));
        assert_eq!(record.property("missing"), None);
    }
}
