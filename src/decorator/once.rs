//! Run-once function wrapper.
//!
//! [`Once`] wraps a function so that it runs on the first call only. Every
//! later call returns the result of that first call, whatever arguments it
//! receives.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::decorator::once;
//!
//! let initialize = once(|name: &str| format!("initialized by {name}"));
//!
//! assert_eq!(initialize.call("first"), "initialized by first");
//! assert_eq!(initialize.call("second"), "initialized by first");
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// The internal state of a [`Once`] wrapper.
enum OnceState<F, R> {
    /// The function has not run yet.
    Pending(F),
    /// The function has run; this is its result.
    Done(R),
    /// The function is running or panicked while running.
    Poisoned,
}

/// A function that is invoked at most once.
///
/// # Type Parameters
///
/// * `F` - The wrapped function
/// * `A` - The argument type of the function (use a tuple for several)
/// * `R` - The result type, cloned out of the cache on every call
///
/// Whatever the function needs from its surroundings (the receiver, in
/// method terms) is captured by the closure itself.
///
/// # Thread Safety
///
/// This type is NOT thread-safe, just like the lazily initialized values it
/// is modelled on.
///
/// # Examples
///
/// ```rust
/// use fnkit::decorator::once;
/// use std::cell::Cell;
///
/// let calls = Cell::new(0);
/// let create = once(|seed: u32| {
///     calls.set(calls.get() + 1);
///     seed * 2
/// });
///
/// assert_eq!(create.call(1), 2);
/// assert_eq!(create.call(100), 2);
/// assert_eq!(calls.get(), 1);
/// ```
pub struct Once<F, A, R> {
    state: RefCell<OnceState<F, R>>,
    arguments: PhantomData<fn(A)>,
}

impl<F, A, R> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    /// Wraps `function`. It is not called until the first [`call`](Self::call).
    #[inline]
    pub fn new(function: F) -> Self {
        Self {
            state: RefCell::new(OnceState::Pending(function)),
            arguments: PhantomData,
        }
    }

    /// Invokes the function on the first call; returns the cached result on
    /// every later call.
    ///
    /// # Panics
    ///
    /// - If the function calls back into this same wrapper while running.
    /// - If a previous first call panicked; the wrapper is then poisoned.
    pub fn call(&self, arguments: A) -> R {
        let function = {
            let mut state = self.state.borrow_mut();
            if let OnceState::Done(result) = &*state {
                return result.clone();
            }

            // Poisoned until the function returns
            match std::mem::replace(&mut *state, OnceState::Poisoned) {
                OnceState::Pending(function) => function,
                OnceState::Done(_) | OnceState::Poisoned => {
                    panic!("Once instance has been poisoned")
                }
            }
        };

        tracing::trace!("once: running wrapped function");
        let result = function(arguments);
        *self.state.borrow_mut() = OnceState::Done(result.clone());
        result
    }

    /// Converts the wrapper into a plain closure.
    pub fn into_fn(self) -> impl Fn(A) -> R {
        move |arguments| self.call(arguments)
    }
}

impl<F, A, R> Once<F, A, R> {
    /// Returns `true` once the function has completed.
    #[inline]
    pub fn has_run(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Done(_))
    }

    /// Returns `true` if the function panicked during its only call.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), OnceState::Poisoned)
    }
}

impl<F, A, R: fmt::Debug> fmt::Debug for Once<F, A, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            OnceState::Pending(_) => formatter.write_str("Once(<pending>)"),
            OnceState::Done(result) => formatter.debug_tuple("Once").field(result).finish(),
            OnceState::Poisoned => formatter.write_str("Once(<poisoned>)"),
        }
    }
}

/// Wraps `function` so that it runs at most once.
///
/// See [`Once`].
#[inline]
pub fn once<F, A, R>(function: F) -> Once<F, A, R>
where
    F: FnOnce(A) -> R,
    R: Clone,
{
    Once::new(function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};
    use std::rc::Rc;

    #[rstest]
    fn test_once_state_transitions() {
        let wrapped = once(|value: i32| value + 1);
        assert!(!wrapped.has_run());
        assert_eq!(wrapped.call(1), 2);
        assert!(wrapped.has_run());
        assert!(!wrapped.is_poisoned());
    }

    #[rstest]
    fn test_once_accepts_fn_once() {
        let owned = String::from("moved");
        let wrapped = once(move |()| owned);
        assert_eq!(wrapped.call(()), "moved");
        assert_eq!(wrapped.call(()), "moved");
    }

    #[rstest]
    fn test_once_into_fn() {
        let calls = Cell::new(0);
        let wrapped = once(|value: i32| {
            calls.set(calls.get() + 1);
            value
        })
        .into_fn();
        assert_eq!(wrapped(3), 3);
        assert_eq!(wrapped(4), 3);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_once_poisoned_after_panic() {
        let wrapped = once(|(): ()| -> i32 { panic!("boom") });
        let first = catch_unwind(AssertUnwindSafe(|| wrapped.call(())));
        assert!(first.is_err());
        assert!(wrapped.is_poisoned());

        let second = catch_unwind(AssertUnwindSafe(|| wrapped.call(())));
        assert!(second.is_err());
    }

    #[rstest]
    fn test_once_reentrant_call_panics() {
        type Reentry = Rc<RefCell<Option<Rc<dyn Fn(()) -> i32>>>>;

        let slot: Reentry = Rc::new(RefCell::new(None));
        let inner = Rc::clone(&slot);
        let wrapped = Rc::new(once(move |()| {
            let again = inner.borrow().clone().unwrap();
            again(()) + 1
        }));

        let handle = Rc::clone(&wrapped);
        let reenter: Rc<dyn Fn(()) -> i32> = Rc::new(move |()| handle.call(()));
        *slot.borrow_mut() = Some(reenter);

        let result = catch_unwind(AssertUnwindSafe(|| wrapped.call(())));
        assert!(result.is_err());
        assert!(!wrapped.has_run());
        assert!(wrapped.is_poisoned());
    }

    #[rstest]
    fn test_once_debug() {
        let wrapped = once(|value: i32| value);
        assert_eq!(format!("{wrapped:?}"), "Once(<pending>)");
        wrapped.call(5);
        assert_eq!(format!("{wrapped:?}"), "Once(5)");
    }
}
