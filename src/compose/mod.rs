//! Function combinators.
//!
//! Small building blocks shared by the collection operations:
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`complement`]: Negates a predicate
//!
//! # Examples
//!
//! ```
//! use fnkit::compose::{complement, identity};
//!
//! assert_eq!(identity(7), 7);
//!
//! let mut is_odd = complement(|number: &i32| number % 2 == 0);
//! assert!(is_odd(&3));
//! ```

mod utils;

pub use utils::{complement, identity};
