//! Function decorators.
//!
//! Each decorator takes a function and returns a wrapper with different
//! invocation semantics. The wrapper owns all of its state; nothing is
//! shared between two wrappers of the same function.
//!
//! - [`Once`] / [`once`]: run on the first call only, then return the cached
//!   result
//! - [`Memoize`] / [`memoize`]: cache results per distinct argument value
//! - [`delay`]: run once after a wait (feature `async`)
//! - [`Throttle`] / [`throttle`]: run at most once per window, leading and
//!   trailing edge (feature `async`)
//!
//! Functions of several arguments are wrapped as functions of one tuple.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::decorator::{memoize, once};
//!
//! let setup = once(|()| "ready");
//! assert_eq!(setup.call(()), "ready");
//!
//! let fibonacci = memoize(|n: u64| (1..=n).fold((0_u64, 1_u64), |(a, b), _| (b, a + b)).0);
//! assert_eq!(fibonacci.call(50), Ok(12_586_269_025));
//! ```

mod memoize;
mod once;

#[cfg(feature = "async")]
mod delay;
#[cfg(feature = "async")]
mod throttle;

#[cfg(feature = "serde")]
pub use memoize::JsonArguments;
pub use memoize::{HashedArguments, KeyFn, KeyStrategy, Memoize, memoize, memoize_with};
pub use once::{Once, once};

#[cfg(feature = "async")]
pub use delay::delay;
#[cfg(feature = "async")]
pub use throttle::{Throttle, throttle};
