//! The iteration core: [`each`] and [`index_of`].

use super::{Collection, Position};

/// Calls `iterator(value, position, collection)` for every element.
///
/// Sequences are visited at indices `0..len` in increasing order, mappings
/// in the map's key order. The collection is borrowed for the whole
/// traversal, so the visited structure is exactly the one that existed at
/// call time.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::{each, Position};
///
/// let mut visited = Vec::new();
/// each(&["a", "b"], |value, position, collection| {
///     assert_eq!(collection.len(), 2);
///     if let Position::Index(index) = position {
///         visited.push((index, *value));
///     }
/// });
/// assert_eq!(visited, vec![(0, "a"), (1, "b")]);
/// ```
pub fn each<'a, T, F>(collection: impl Into<Collection<'a, T>>, mut iterator: F)
where
    T: 'a,
    F: FnMut(&'a T, Position<'a>, Collection<'a, T>),
{
    let collection = collection.into();
    for (position, value) in collection {
        iterator(value, position, collection);
    }
}

/// Returns the index of the first element equal to `target`.
///
/// `None` is the "not found" sentinel. Later matches never replace the
/// first one.
///
/// # Examples
///
/// ```rust
/// use fnkit::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 30, 20], &20), Some(1));
/// assert_eq!(index_of(&[10, 20, 30], &40), None);
/// ```
pub fn index_of<T: PartialEq>(sequence: &[T], target: &T) -> Option<usize> {
    let mut found = None;
    each(sequence, |value, position, _| {
        if let (None, Position::Index(index)) = (found, position)
            && value == target
        {
            found = Some(index);
        }
    });
    found
}
