//! `extend` and `defaults`.

use std::borrow::Borrow;
use std::collections::BTreeMap;

/// Copies every entry of each source into `target` and returns `target`.
///
/// Sources are applied in order, so a later source overrides both earlier
/// sources and the original contents of `target`.
///
/// # Examples
///
/// ```rust
/// use fnkit::object::extend;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("key1".to_string(), "something")]);
/// let first = BTreeMap::from([("key2".to_string(), "new"), ("key3".to_string(), "else")]);
/// let second = BTreeMap::from([("key3".to_string(), "latest")]);
///
/// let merged = extend(&mut target, [&first, &second]);
/// assert_eq!(merged.len(), 3);
/// assert_eq!(merged["key3"], "latest");
/// ```
pub fn extend<'t, V, I>(
    target: &'t mut BTreeMap<String, V>,
    sources: I,
) -> &'t mut BTreeMap<String, V>
where
    V: Clone,
    I: IntoIterator,
    I::Item: Borrow<BTreeMap<String, V>>,
{
    for source in sources {
        for (key, value) in source.borrow() {
            target.insert(key.clone(), value.clone());
        }
    }
    target
}

/// Fills in the keys `target` is missing and returns `target`.
///
/// Existing entries are never overwritten, and the first source that
/// provides a missing key wins.
///
/// # Examples
///
/// ```rust
/// use fnkit::object::defaults;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("flavor".to_string(), "chocolate")]);
/// defaults(
///     &mut target,
///     [
///         BTreeMap::from([("flavor".to_string(), "vanilla"), ("sprinkles".to_string(), "lots")]),
///         BTreeMap::from([("sprinkles".to_string(), "none")]),
///     ],
/// );
/// assert_eq!(target["flavor"], "chocolate");
/// assert_eq!(target["sprinkles"], "lots");
/// ```
pub fn defaults<'t, V, I>(
    target: &'t mut BTreeMap<String, V>,
    sources: I,
) -> &'t mut BTreeMap<String, V>
where
    V: Clone,
    I: IntoIterator,
    I::Item: Borrow<BTreeMap<String, V>>,
{
    for source in sources {
        for (key, value) in source.borrow() {
            if !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
    target
}
