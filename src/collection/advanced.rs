//! Composite collection operations built from the transformation and
//! aggregation primitives.

use std::cmp::Ordering;

use rand::Rng;

use super::{Collection, Property, contains, every, fold, map, reject, some, uniq_values};
use crate::error::InvokeError;

// =============================================================================
// Shuffle
// =============================================================================

/// Returns a uniformly random permutation of `sequence`.
///
/// Uses the Fisher-Yates algorithm over a copy; the input is left
/// untouched. The random source is injected so that callers can supply a
/// seeded generator.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::shuffle;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let deck = [1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&deck, &mut StdRng::seed_from_u64(7));
///
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, deck);
/// ```
pub fn shuffle<T: Clone, R: Rng + ?Sized>(sequence: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = sequence.to_vec();
    for upper in (1..shuffled.len()).rev() {
        let index = rng.random_range(0..=upper);
        shuffled.swap(upper, index);
    }
    shuffled
}

/// [`shuffle`] using the thread-local random generator.
pub fn shuffle_random<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle(sequence, &mut rand::rng())
}

// =============================================================================
// Invoke
// =============================================================================

/// Named zero-argument methods, used by [`invoke_method`].
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{invoke_method, Methods};
///
/// struct Word(&'static str);
///
/// impl Methods for Word {
///     type Output = String;
///
///     fn call_method(&self, name: &str) -> Option<String> {
///         match name {
///             "upper" => Some(self.0.to_uppercase()),
///             "reverse" => Some(self.0.chars().rev().collect()),
///             _ => None,
///         }
///     }
/// }
///
/// let words = [Word("ab"), Word("cd")];
/// assert_eq!(invoke_method(&words, "upper").unwrap(), vec!["AB", "CD"]);
/// assert!(invoke_method(&words, "shout").is_err());
/// ```
pub trait Methods {
    /// The result type shared by all methods.
    type Output;

    /// Calls the method `name`, or returns `None` if there is no such method.
    fn call_method(&self, name: &str) -> Option<Self::Output>;
}

/// Calls `function(element, arguments)` for every element and collects the
/// results.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::invoke;
///
/// let padded = invoke(
///     &["a", "bc"],
///     |text: &&str, width: &usize| format!("{text:>padding$}", padding = *width),
///     &3,
/// );
/// assert_eq!(padded, vec!["  a", " bc"]);
/// ```
pub fn invoke<'a, T, A, R, F>(
    collection: impl Into<Collection<'a, T>>,
    mut function: F,
    arguments: &A,
) -> Vec<R>
where
    T: 'a,
    A: ?Sized,
    F: FnMut(&T, &A) -> R,
{
    map(collection, |element| function(element, arguments))
}

/// Calls the method `name` on every element and collects the results.
///
/// # Errors
///
/// Returns [`InvokeError::UnknownMethod`] if any element has no method
/// called `name`.
pub fn invoke_method<'a, T>(
    collection: impl Into<Collection<'a, T>>,
    name: &str,
) -> Result<Vec<T::Output>, InvokeError>
where
    T: Methods + 'a,
{
    map(collection, |element| {
        element
            .call_method(name)
            .ok_or_else(|| InvokeError::UnknownMethod {
                name: name.to_string(),
            })
    })
    .into_iter()
    .collect()
}

// =============================================================================
// Sorting
// =============================================================================

/// Missing keys sort after every present key; incomparable keys tie.
fn compare_keys<K: PartialOrd>(left: Option<&K>, right: Option<&K>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.partial_cmp(right).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns the values sorted ascending by a derived key.
///
/// Elements whose key is `None` go to the end. The sort is stable, and each
/// key is computed exactly once per element.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::sort_by;
///
/// let scores = [Some(3), None, Some(1), Some(2)];
/// let sorted = sort_by(&scores, |score: &Option<i32>| *score);
/// assert_eq!(sorted, vec![Some(1), Some(2), Some(3), None]);
/// ```
pub fn sort_by<'a, T, K, F>(collection: impl Into<Collection<'a, T>>, mut key: F) -> Vec<T>
where
    T: Clone + 'a,
    K: PartialOrd,
    F: FnMut(&T) -> Option<K>,
{
    let mut keyed = map(collection, |value| (key(value), value.clone()));
    keyed.sort_by(|(left, _), (right, _)| compare_keys(left.as_ref(), right.as_ref()));
    keyed.into_iter().map(|(_, value)| value).collect()
}

/// [`sort_by`] with a key that is always present.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::sort_by_key_fn;
///
/// let words = ["pear", "fig", "banana"];
/// assert_eq!(sort_by_key_fn(&words, |word: &&str| word.len()), vec!["fig", "pear", "banana"]);
/// ```
pub fn sort_by_key_fn<'a, T, K, F>(collection: impl Into<Collection<'a, T>>, mut key: F) -> Vec<T>
where
    T: Clone + 'a,
    K: PartialOrd,
    F: FnMut(&T) -> K,
{
    sort_by(collection, |value| Some(key(value)))
}

/// [`sort_by`] keyed by the named property of each element.
///
/// Elements without the property go to the end.
pub fn sort_by_property<'a, T>(collection: impl Into<Collection<'a, T>>, name: &str) -> Vec<T>
where
    T: Property + Clone + 'a,
    T::Value: PartialOrd,
{
    sort_by(collection, |value| value.property(name))
}

// =============================================================================
// Zip
// =============================================================================

/// Groups the elements that share an index.
///
/// The result has one row per index of the **first** sequence; row `i`
/// holds `sequences[j][i]` for every `j`, with `None` where a sequence is
/// too short.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::zip;
///
/// let rows = zip(&[vec!["a", "b", "c"], vec!["1", "2"]]);
/// assert_eq!(
///     rows,
///     vec![
///         vec![Some("a"), Some("1")],
///         vec![Some("b"), Some("2")],
///         vec![Some("c"), None],
///     ]
/// );
/// ```
pub fn zip<T, S>(sequences: &[S]) -> Vec<Vec<Option<T>>>
where
    T: Clone,
    S: AsRef<[T]>,
{
    let Some(leading) = sequences.first() else {
        return Vec::new();
    };
    let indices: Vec<usize> = (0..leading.as_ref().len()).collect();
    map(&indices, |&index| {
        map(sequences, |sequence: &S| sequence.as_ref().get(index).cloned())
    })
}

/// Pairs each element of `first` with the element of `second` at the same
/// index, for two sequences of different element types.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::zip_pair;
///
/// assert_eq!(
///     zip_pair(&['a', 'b', 'c', 'd'], &[1, 2, 3]),
///     vec![('a', Some(1)), ('b', Some(2)), ('c', Some(3)), ('d', None)]
/// );
/// ```
pub fn zip_pair<A: Clone, B: Clone>(first: &[A], second: &[B]) -> Vec<(A, Option<B>)> {
    first
        .iter()
        .enumerate()
        .map(|(index, value)| (value.clone(), second.get(index).cloned()))
        .collect()
}

// =============================================================================
// Flatten
// =============================================================================

/// An arbitrarily nested sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A plain value.
    Leaf(T),
    /// A sequence that may itself contain sequences.
    Sequence(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a plain value.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Builds a nested sequence from its items.
    pub fn sequence(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Sequence(items.into_iter().collect())
    }
}

/// Flattens nested sequences into one flat sequence of leaves.
///
/// Leaves keep their left-to-right order at every depth.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{flatten, Nested};
///
/// let nested = vec![
///     Nested::leaf(1),
///     Nested::sequence([Nested::leaf(2), Nested::sequence([Nested::leaf(3)])]),
///     Nested::sequence([]),
///     Nested::leaf(4),
/// ];
/// assert_eq!(flatten(&nested), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    fold(nested, Vec::new(), |mut flat, item| {
        match item {
            Nested::Leaf(value) => flat.push(value.clone()),
            Nested::Sequence(inner) => flat.extend(flatten(inner)),
        }
        flat
    })
}

// =============================================================================
// Set Operations
// =============================================================================

/// Returns the distinct values of the first sequence that occur in every
/// sequence, in the order they first appear.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::intersection;
///
/// let shared = intersection(&[vec![1, 2, 2, 3, 4], vec![2, 3, 5], vec![3, 2]]);
/// assert_eq!(shared, vec![2, 3]);
/// ```
pub fn intersection<T, S>(sequences: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    let Some((leading, others)) = sequences.split_first() else {
        return Vec::new();
    };
    let unique = uniq_values(leading.as_ref());
    fold(&unique, Vec::new(), |mut shared, value| {
        if every(others, |other: &S| contains(other.as_ref(), value)) {
            shared.push(value.clone());
        }
        shared
    })
}

/// Returns the values of `first`, in order, that occur in none of `others`.
///
/// Duplicates within `first` are kept.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 1], &[vec![2, 30], vec![4]]), vec![1, 3, 1]);
/// ```
pub fn difference<T, S>(first: &[T], others: &[S]) -> Vec<T>
where
    T: Clone + PartialEq,
    S: AsRef<[T]>,
{
    reject(first, |value| some(others, |other: &S| contains(other.as_ref(), value)))
}
