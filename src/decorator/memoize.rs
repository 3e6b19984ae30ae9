//! Result caching keyed by the call arguments.
//!
//! [`Memoize`] remembers the result of every distinct argument value it has
//! seen. How arguments become cache keys is a [`KeyStrategy`]:
//!
//! - [`HashedArguments`]: the argument value itself is the key (default)
//! - [`JsonArguments`]: the JSON text of the arguments (feature `serde`)
//! - [`KeyFn`]: any closure from arguments to a key
//!
//! The cache is never evicted; it lives as long as the wrapper.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::error::MemoizeError;

#[cfg(feature = "fxhash")]
type CacheMap<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(not(feature = "fxhash"))]
type CacheMap<K, V> = std::collections::HashMap<K, V>;

/// Derives a cache key from an argument value.
///
/// Implementations must be deterministic: equal arguments must always map
/// to equal keys.
pub trait KeyStrategy<A: ?Sized> {
    /// The key stored in the cache.
    type Key: Hash + Eq;

    /// Derives the key for `arguments`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoizeError`] if `arguments` has no key representation.
    fn derive_key(&self, arguments: &A) -> Result<Self::Key, MemoizeError>;
}

/// Uses a clone of the arguments as the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct HashedArguments;

impl<A: Hash + Eq + Clone> KeyStrategy<A> for HashedArguments {
    type Key = A;

    #[inline]
    fn derive_key(&self, arguments: &A) -> Result<A, MemoizeError> {
        Ok(arguments.clone())
    }
}

/// Uses the `serde_json` serialization of the arguments as the key.
///
/// Arguments that cannot be serialized (for example maps with non-string
/// keys) are rejected before the wrapped function runs.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonArguments;

#[cfg(feature = "serde")]
impl<A: serde::Serialize + ?Sized> KeyStrategy<A> for JsonArguments {
    type Key = String;

    fn derive_key(&self, arguments: &A) -> Result<String, MemoizeError> {
        serde_json::to_string(arguments).map_err(|error| MemoizeError::UnserializableArguments {
            reason: error.to_string(),
        })
    }
}

/// Adapts a closure into a [`KeyStrategy`].
///
/// # Examples
///
/// ```rust
/// use fnkit::decorator::{memoize_with, KeyFn};
///
/// // Case-insensitive cache
/// let greet = memoize_with(
///     |name: String| format!("hello {name}"),
///     KeyFn(|name: &String| Ok(name.to_lowercase())),
/// );
/// assert_eq!(greet.call("Ann".to_string()), Ok("hello Ann".to_string()));
/// assert_eq!(greet.call("ANN".to_string()), Ok("hello Ann".to_string()));
/// ```
#[derive(Clone, Copy)]
pub struct KeyFn<G>(pub G);

impl<A, K, G> KeyStrategy<A> for KeyFn<G>
where
    A: ?Sized,
    K: Hash + Eq,
    G: Fn(&A) -> Result<K, MemoizeError>,
{
    type Key = K;

    #[inline]
    fn derive_key(&self, arguments: &A) -> Result<K, MemoizeError> {
        (self.0)(arguments)
    }
}

/// A function whose results are cached per distinct argument value.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `A` - The argument type (use a tuple for several arguments)
/// * `R` - The result type, cloned out of the cache
/// * `S` - The [`KeyStrategy`]
///
/// # Examples
///
/// ```rust
/// use fnkit::decorator::memoize;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let add = memoize(|(left, right): (i64, i64)| {
///     calls.set(calls.get() + 1);
///     left + right
/// });
///
/// assert_eq!(add.call((1, 2)), Ok(3));
/// assert_eq!(add.call((1, 2)), Ok(3));
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Memoize<F, A, R, S = HashedArguments>
where
    S: KeyStrategy<A>,
{
    function: F,
    strategy: S,
    cache: RefCell<CacheMap<S::Key, R>>,
    arguments: PhantomData<fn(A)>,
}

impl<F, A, R, S> Memoize<F, A, R, S>
where
    F: Fn(A) -> R,
    R: Clone,
    S: KeyStrategy<A>,
{
    /// Wraps `function`, deriving cache keys with `strategy`.
    pub fn with_strategy(function: F, strategy: S) -> Self {
        Self {
            function,
            strategy,
            cache: RefCell::new(CacheMap::default()),
            arguments: PhantomData,
        }
    }

    /// Returns the cached result for `arguments`, computing it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`MemoizeError`] if no key can be derived from `arguments`.
    /// The function is not called and the cache is left untouched.
    pub fn call(&self, arguments: A) -> Result<R, MemoizeError> {
        let key = self.strategy.derive_key(&arguments)?;

        if let Some(cached) = self.cache.borrow().get(&key) {
            tracing::trace!("memoize: cache hit");
            return Ok(cached.clone());
        }

        tracing::trace!("memoize: cache miss");
        let result = (self.function)(arguments);
        self.cache.borrow_mut().insert(key, result.clone());
        Ok(result)
    }

    /// Converts the wrapper into a plain closure.
    pub fn into_fn(self) -> impl Fn(A) -> Result<R, MemoizeError> {
        move |arguments| self.call(arguments)
    }
}

impl<F, A, R, S: KeyStrategy<A>> Memoize<F, A, R, S> {
    /// Returns the number of cached results.
    #[inline]
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl<F, A, R, S: KeyStrategy<A>> fmt::Debug for Memoize<F, A, R, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.cache_len())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` with a cache keyed by the argument value itself.
#[inline]
pub fn memoize<F, A, R>(function: F) -> Memoize<F, A, R>
where
    F: Fn(A) -> R,
    A: Hash + Eq + Clone,
    R: Clone,
{
    Memoize::with_strategy(function, HashedArguments)
}

/// Wraps `function` with a cache keyed through `strategy`.
#[inline]
pub fn memoize_with<F, A, R, S>(function: F, strategy: S) -> Memoize<F, A, R, S>
where
    F: Fn(A) -> R,
    R: Clone,
    S: KeyStrategy<A>,
{
    Memoize::with_strategy(function, strategy)
}
