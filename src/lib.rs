//! # fnkit
//!
//! Collection utilities and function decorators for Rust.
//!
//! ## Overview
//!
//! This library provides a small, generic toolbox of functional primitives:
//!
//! - **Collections**: `each`, `map`, `filter`, `reduce`, `every`, `some`,
//!   `sort_by`, `zip`, `flatten`, `intersection`, `difference`, ... over
//!   sequences and string-keyed mappings alike
//! - **Objects**: `extend` and `defaults` for shallow map merging
//! - **Decorators**: `once`, `memoize`, `delay`, `throttle`
//!
//! ## Feature Flags
//!
//! - `collection`: Collection traversal, transformation and set operations
//! - `object`: Map merging helpers
//! - `decorator`: `once` and `memoize`
//! - `async`: Timer-driven decorators (`delay`, `throttle`) on tokio
//! - `serde`: JSON-based memoize key derivation
//! - `fxhash`: Use `FxHashMap` for memoize caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let numbers = vec![1, 2, 3, 4];
//! let evens = filter(&numbers, |number: &i32| number % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let sum = reduce(&numbers, |total, number| total + number, Some(0));
//! assert_eq!(sum, Some(10));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports every function, type and trait of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::error::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "decorator")]
    pub use crate::decorator::*;
}

pub mod compose;
pub mod error;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "decorator")]
pub mod decorator;
