//! Shallow merging of string-keyed maps.
//!
//! - [`extend`]: copy every entry of the sources into the target
//! - [`defaults`]: copy only the entries the target is missing
//!
//! # Examples
//!
//! ```rust
//! use fnkit::object::{defaults, extend};
//! use std::collections::BTreeMap;
//!
//! let mut settings = BTreeMap::from([("volume".to_string(), 3)]);
//! extend(&mut settings, [BTreeMap::from([("volume".to_string(), 7)])]);
//! assert_eq!(settings["volume"], 7);
//!
//! defaults(&mut settings, [BTreeMap::from([("volume".to_string(), 1), ("bass".to_string(), 2)])]);
//! assert_eq!(settings["volume"], 7);
//! assert_eq!(settings["bass"], 2);
//! ```

mod merge;

pub use merge::{defaults, extend};
