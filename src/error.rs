//! Error types.
//!
//! Most operations in this crate report "nothing there" through sentinel
//! values (`None`, `false`, an empty `Vec`). The errors below cover the few
//! situations where continuing would silently produce a wrong answer.

use thiserror::Error;

/// Errors produced while deriving a memoize cache key.
///
/// # Examples
///
/// ```rust
/// use fnkit::error::MemoizeError;
///
/// let error = MemoizeError::UnserializableArguments {
///     reason: "key must be a string".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "arguments cannot be turned into a cache key: key must be a string"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MemoizeError {
    /// The argument value has no stable key representation.
    #[error("arguments cannot be turned into a cache key: {reason}")]
    UnserializableArguments {
        /// Why the key derivation failed.
        reason: String,
    },
}

/// Errors produced by the timer-driven decorators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoratorError {
    /// `delay` or `throttle` was called outside of a tokio runtime.
    #[error("{operation} requires a running tokio runtime")]
    NoRuntime {
        /// The decorator that needed the timer.
        operation: &'static str,
    },
    /// The current tokio runtime was built without `enable_time`.
    #[error("{operation} requires a tokio runtime with timers enabled")]
    TimersDisabled {
        /// The decorator that needed the timer.
        operation: &'static str,
    },
}

/// Errors produced by [`invoke_method`](crate::collection::invoke_method).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvokeError {
    /// An element does not expose a method with the requested name.
    #[error("element has no method named `{name}`")]
    UnknownMethod {
        /// The requested method name.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_no_runtime_display() {
        let error = DecoratorError::NoRuntime {
            operation: "throttle",
        };
        assert_eq!(error.to_string(), "throttle requires a running tokio runtime");
    }

    #[rstest]
    fn test_timers_disabled_display() {
        let error = DecoratorError::TimersDisabled { operation: "delay" };
        assert_eq!(
            error.to_string(),
            "delay requires a tokio runtime with timers enabled"
        );
    }

    #[rstest]
    fn test_unknown_method_display() {
        let error = InvokeError::UnknownMethod {
            name: "shout".to_string(),
        };
        assert_eq!(error.to_string(), "element has no method named `shout`");
    }

    #[rstest]
    fn test_memoize_error_equality() {
        let first = MemoizeError::UnserializableArguments {
            reason: "nan".to_string(),
        };
        let second = first.clone();
        let third = MemoizeError::UnserializableArguments {
            reason: "cycle".to_string(),
        };
        assert_eq!(first, second);
        assert_ne!(first, third);
    }
}
