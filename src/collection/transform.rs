//! Filtering and transformation: new collections built from old ones.

use super::{Collection, Property, each};
use crate::compose::complement;

/// Returns the values for which `predicate` holds, in traversal order.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::filter;
///
/// let evens = filter(&[1, 2, 3, 4, 5, 6], |number: &i32| number % 2 == 0);
/// assert_eq!(evens, vec![2, 4, 6]);
/// ```
pub fn filter<'a, T, P>(collection: impl Into<Collection<'a, T>>, mut predicate: P) -> Vec<T>
where
    T: Clone + 'a,
    P: FnMut(&T) -> bool,
{
    let mut output = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value) {
            output.push(value.clone());
        }
    });
    output
}

/// Returns the values for which `predicate` does not hold.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::reject;
///
/// let odds = reject(&[1, 2, 3, 4, 5, 6], |number: &i32| number % 2 == 0);
/// assert_eq!(odds, vec![1, 3, 5]);
/// ```
pub fn reject<'a, T, P>(collection: impl Into<Collection<'a, T>>, predicate: P) -> Vec<T>
where
    T: Clone + 'a,
    P: FnMut(&T) -> bool,
{
    filter(collection, complement(predicate))
}

/// Applies `function` to every value, preserving order and length.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |number: &i32| number * 2), vec![2, 4, 6]);
/// ```
pub fn map<'a, T, U, F>(collection: impl Into<Collection<'a, T>>, mut function: F) -> Vec<U>
where
    T: 'a,
    F: FnMut(&T) -> U,
{
    let collection = collection.into();
    let mut output = Vec::with_capacity(collection.len());
    each(collection, |value, _, _| output.push(function(value)));
    output
}

/// Reads the property `key` of every element.
///
/// Elements without the property contribute `None`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::pluck;
/// use std::collections::BTreeMap;
///
/// let people: Vec<BTreeMap<String, u32>> = vec![
///     BTreeMap::from([("age".to_string(), 30)]),
///     BTreeMap::from([("height".to_string(), 180)]),
/// ];
/// assert_eq!(pluck(&people, "age"), vec![Some(30), None]);
/// ```
pub fn pluck<'a, T>(collection: impl Into<Collection<'a, T>>, key: &str) -> Vec<Option<T::Value>>
where
    T: Property + 'a,
{
    map(collection, |value| value.property(key))
}

/// How [`uniq`] decides that two elements are duplicates.
#[derive(Debug, Clone, Copy)]
pub enum UniqStrategy<F> {
    /// Compare the elements themselves.
    Value,
    /// Compare `key(element)`, with the input already sorted by that key.
    Sorted(F),
    /// Compare `key(element)` without any ordering assumption.
    Unsorted(F),
}

/// Returns a duplicate-free copy of `sequence`, keeping first occurrences.
///
/// With a key strategy the derived keys decide what counts as a duplicate,
/// but the original elements are returned.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{uniq, UniqStrategy};
///
/// let words = ["apple", "avocado", "banana", "blueberry", "cherry"];
/// let by_initial = uniq(&words, UniqStrategy::Sorted(|word: &&str| word.chars().next()));
/// assert_eq!(by_initial, vec!["apple", "banana", "cherry"]);
/// ```
pub fn uniq<T, K, F>(sequence: &[T], strategy: UniqStrategy<F>) -> Vec<T>
where
    T: Clone + PartialEq,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    match strategy {
        UniqStrategy::Value => uniq_values(sequence),
        UniqStrategy::Sorted(key) | UniqStrategy::Unsorted(key) => uniq_by_key(sequence, key),
    }
}

/// Returns a duplicate-free copy of `sequence` using value equality.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::uniq_values;
///
/// assert_eq!(uniq_values(&[1, 2, 1, 3]), vec![1, 2, 3]);
/// ```
pub fn uniq_values<T: Clone + PartialEq>(sequence: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::new();
    each(sequence, |value, _, _| {
        if !unique.contains(value) {
            unique.push(value.clone());
        }
    });
    unique
}

fn uniq_by_key<T, K, F>(sequence: &[T], mut key: F) -> Vec<T>
where
    T: Clone,
    K: PartialEq,
    F: FnMut(&T) -> K,
{
    let mut seen_keys: Vec<K> = Vec::new();
    let mut unique = Vec::new();
    each(sequence, |value, _, _| {
        let derived = key(value);
        if !seen_keys.contains(&derived) {
            seen_keys.push(derived);
            unique.push(value.clone());
        }
    });
    unique
}

/// Returns the first element of `sequence`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::first;
///
/// assert_eq!(first(&[7, 8, 9]), Some(7));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
pub fn first<T: Clone>(sequence: &[T]) -> Option<T> {
    sequence.first().cloned()
}

/// Returns up to `count` leading elements of `sequence`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::first_n;
///
/// assert_eq!(first_n(&[7, 8, 9], 2), vec![7, 8]);
/// assert_eq!(first_n(&[7, 8, 9], 5), vec![7, 8, 9]);
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element of `sequence`.
pub fn last<T: Clone>(sequence: &[T]) -> Option<T> {
    sequence.last().cloned()
}

/// Returns up to `count` trailing elements of `sequence`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::last_n;
///
/// assert_eq!(last_n(&[7, 8, 9], 2), vec![8, 9]);
/// assert_eq!(last_n(&[7, 8, 9], 0), Vec::<i32>::new());
/// assert_eq!(last_n(&[7, 8, 9], 3), vec![7, 8, 9]);
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[sequence.len().saturating_sub(count)..].to_vec()
}
