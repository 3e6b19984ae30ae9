//! Helper functions (combinators) used across the crate.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`complement`]: Logical negation of a predicate

/// Returns the value unchanged.
///
/// This is the default "truthiness" test used by
/// [`every_truthy`](crate::collection::every_truthy) and
/// [`some_truthy`](crate::collection::some_truthy), and a convenient key
/// function for sorting or deduplicating by the value itself.
///
/// # Examples
///
/// ```
/// use fnkit::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns a predicate that answers the opposite of `predicate`.
///
/// # Laws
///
/// - **Double complement identity**: `complement(complement(p))(x) == p(x)`
///
/// # Examples
///
/// ```
/// use fnkit::compose::complement;
///
/// let mut is_empty = complement(|text: &&str| !text.is_empty());
/// assert!(is_empty(&""));
/// assert!(!is_empty(&"word"));
/// ```
#[inline]
pub fn complement<T: ?Sized, P>(mut predicate: P) -> impl FnMut(&T) -> bool
where
    P: FnMut(&T) -> bool,
{
    move |value| !predicate(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    #[case(0, true)]
    #[case(1, false)]
    #[case(-4, true)]
    fn test_complement_negates(#[case] input: i32, #[case] is_even: bool) {
        let mut is_odd = complement(|number: &i32| number % 2 == 0);
        assert_eq!(is_odd(&input), !is_even);
    }

    #[rstest]
    fn test_double_complement_is_original() {
        let mut positive = complement(complement(|number: &i32| *number > 0));
        assert!(positive(&3));
        assert!(!positive(&-3));
    }
}
