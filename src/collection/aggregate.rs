//! Aggregation: folding a collection into a single value.
//!
//! # Laws
//!
//! - `every` over an empty collection is `true`; `some` is `false`
//! - `some(c, p) == !every(c, complement(p))`
//! - `reduce(c, f, Some(seed)) == fold(c, seed, f)`

use super::Collection;
use crate::compose::{complement, identity};

/// Folds the collection from left to right into a value of another type.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::fold;
///
/// let lengths = fold(&["a", "bb", "ccc"], 0, |total, word| total + word.len());
/// assert_eq!(lengths, 6);
/// ```
pub fn fold<'a, T, B, F>(collection: impl Into<Collection<'a, T>>, init: B, mut function: F) -> B
where
    T: 'a,
    F: FnMut(B, &T) -> B,
{
    let collection: Collection<'a, T> = collection.into();
    collection
        .iter()
        .fold(init, |accumulator, (_, value)| function(accumulator, value))
}

/// Reduces the collection to a single value of the element type.
///
/// When `seed` is `None`, the first element becomes the accumulator and is
/// never passed to `iterator`. A single-element collection without a seed
/// therefore returns that element untouched, and an empty collection
/// without a seed returns `None`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, number| total + number, Some(0)), Some(6));
///
/// // The iterator never runs: there is nothing to combine the seed with.
/// assert_eq!(reduce(&[5], |total, number| total + number * number, None), Some(5));
///
/// assert_eq!(reduce(&Vec::<i32>::new(), |total, number| total + number, None), None);
/// ```
pub fn reduce<'a, T, F>(
    collection: impl Into<Collection<'a, T>>,
    mut iterator: F,
    seed: Option<T>,
) -> Option<T>
where
    T: Clone + 'a,
    F: FnMut(T, &T) -> T,
{
    fold(collection, seed, |accumulator, value| {
        Some(match accumulator {
            Some(current) => iterator(current, value),
            None => value.clone(),
        })
    })
}

/// Returns `true` if some element equals `target`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&Vec::<i32>::new(), &2));
/// ```
pub fn contains<'a, T>(collection: impl Into<Collection<'a, T>>, target: &T) -> bool
where
    T: PartialEq + 'a,
{
    fold(collection, false, |was_found, value| was_found || value == target)
}

/// Returns `true` if `predicate` holds for every element.
///
/// An empty collection yields `true`. Once an element fails, `predicate` is
/// not called for the remaining ones.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::every;
///
/// assert!(every(&[2, 4, 6], |number: &i32| number % 2 == 0));
/// assert!(!every(&[2, 3, 6], |number: &i32| number % 2 == 0));
/// assert!(every(&Vec::<i32>::new(), |_: &i32| false));
/// ```
pub fn every<'a, T, P>(collection: impl Into<Collection<'a, T>>, mut predicate: P) -> bool
where
    T: 'a,
    P: FnMut(&T) -> bool,
{
    fold(collection, true, |all_passed, value| all_passed && predicate(value))
}

/// Returns `true` if `predicate` holds for at least one element.
///
/// An empty collection yields `false`.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::some;
///
/// assert!(some(&[1, 3, 4], |number: &i32| number % 2 == 0));
/// assert!(!some(&[1, 3, 5], |number: &i32| number % 2 == 0));
/// assert!(!some(&Vec::<i32>::new(), |_: &i32| true));
/// ```
pub fn some<'a, T, P>(collection: impl Into<Collection<'a, T>>, predicate: P) -> bool
where
    T: 'a,
    P: FnMut(&T) -> bool,
{
    !every(collection, complement(predicate))
}

/// [`every`] with the identity predicate over a collection of flags.
pub fn every_truthy<'a>(collection: impl Into<Collection<'a, bool>>) -> bool {
    every(collection, |flag: &bool| identity(*flag))
}

/// [`some`] with the identity predicate over a collection of flags.
pub fn some_truthy<'a>(collection: impl Into<Collection<'a, bool>>) -> bool {
    some(collection, |flag: &bool| identity(*flag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::BTreeMap;

    #[rstest]
    fn test_reduce_single_element_skips_iterator() {
        let calls = Cell::new(0);
        let result = reduce(
            &[5],
            |total, number| {
                calls.set(calls.get() + 1);
                total + number * number
            },
            None,
        );
        assert_eq!(result, Some(5));
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn test_reduce_without_seed_starts_from_first() {
        let result = reduce(&[1, 2, 3], |total, number| total * 10 + number, None);
        assert_eq!(result, Some(123));
    }

    #[rstest]
    fn test_reduce_over_mapping() {
        let entries = BTreeMap::from([("x".to_string(), 4), ("y".to_string(), 5)]);
        assert_eq!(reduce(&entries, |total, number| total + number, Some(1)), Some(10));
    }

    #[rstest]
    fn test_every_stops_calling_after_failure() {
        let calls = Cell::new(0);
        let result = every(&[1, 2, 3, 4], |number: &i32| {
            calls.set(calls.get() + 1);
            *number < 2
        });
        assert!(!result);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    #[case(&[], true, false)]
    #[case(&[true, true], true, true)]
    #[case(&[true, false], false, true)]
    #[case(&[false, false], false, false)]
    fn test_truthy_variants(
        #[case] flags: &[bool],
        #[case] expected_every: bool,
        #[case] expected_some: bool,
    ) {
        assert_eq!(every_truthy(flags), expected_every);
        assert_eq!(some_truthy(flags), expected_some);
    }

    #[rstest]
    fn test_fold_over_mapping_in_key_order() {
        let entries = BTreeMap::from([("b".to_string(), "2"), ("a".to_string(), "1")]);
        let joined = fold(&entries, String::new(), |mut text, digit| {
            text.push_str(digit);
            text
        });
        assert_eq!(joined, "12");
    }

    #[rstest]
    fn test_contains_on_mapping() {
        let entries = BTreeMap::from([("k".to_string(), "v")]);
        assert!(contains(&entries, &"v"));
        assert!(!contains(&entries, &"k"));
    }
}
