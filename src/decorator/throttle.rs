//! Rate limiting with leading and trailing invocation.
//!
//! A [`Throttle`] runs its function at most once per `wait` window:
//!
//! 1. A call while idle runs the function immediately and starts a cooldown
//!    of `wait`.
//! 2. Calls during the cooldown are coalesced: only the most recent
//!    arguments are kept.
//! 3. When the cooldown ends, the kept arguments (if any) are used for one
//!    more call and the cooldown restarts; otherwise the wrapper goes idle.
//!
//! The cooldown is a task on the current tokio runtime.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::Sleep;

use super::delay::start_timer;
use crate::error::DecoratorError;

/// Cooldown flag and the latest coalesced arguments.
struct ThrottleState<A> {
    cooling: bool,
    pending: Option<A>,
}

/// A function that runs at most once per time window.
///
/// Cloning a `Throttle` yields a handle to the same window.
///
/// # Examples
///
/// ```rust
/// use fnkit::decorator::throttle;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let save = throttle(|document: &str| document.len(), Duration::from_millis(100));
///
/// assert_eq!(save.call("draft 1").unwrap(), Some(7));
/// // Coalesced into the trailing call
/// assert_eq!(save.call("draft 2").unwrap(), None);
/// assert!(save.is_cooling());
/// # }
/// ```
pub struct Throttle<F, A> {
    function: Arc<F>,
    wait: Duration,
    state: Arc<Mutex<ThrottleState<A>>>,
}

impl<F, A, R> Throttle<F, A>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: 'static,
{
    /// Wraps `function` with a window of `wait`.
    pub fn new(function: F, wait: Duration) -> Self {
        Self {
            function: Arc::new(function),
            wait,
            state: Arc::new(Mutex::new(ThrottleState {
                cooling: false,
                pending: None,
            })),
        }
    }

    /// Calls the function now, or schedules it for the end of the window.
    ///
    /// Returns `Some(result)` when the function ran immediately and `None`
    /// when the call was coalesced into the trailing invocation.
    ///
    /// # Errors
    ///
    /// Returns [`DecoratorError::NoRuntime`] when called outside of a tokio
    /// runtime and [`DecoratorError::TimersDisabled`] when the runtime has no
    /// time driver; the function is then not called.
    pub fn call(&self, arguments: A) -> Result<Option<R>, DecoratorError> {
        let (handle, timer) = start_timer("throttle", self.wait)?;

        {
            let mut state = self.state.lock();
            if state.cooling {
                tracing::trace!("throttle: coalescing call");
                state.pending = Some(arguments);
                return Ok(None);
            }
            state.cooling = true;
        }

        // The window closes even if the leading call panics
        self.start_cooldown(&handle, timer);

        tracing::debug!(wait = ?self.wait, "throttle: leading call");
        Ok(Some((self.function)(arguments)))
    }

    fn start_cooldown(&self, handle: &Handle, timer: Sleep) {
        let function = Arc::clone(&self.function);
        let state = Arc::clone(&self.state);
        let wait = self.wait;

        handle.spawn(async move {
            timer.await;
            loop {
                let pending = {
                    let mut state = state.lock();
                    let pending = state.pending.take();
                    if pending.is_none() {
                        state.cooling = false;
                    }
                    pending
                };

                match pending {
                    Some(arguments) => {
                        tracing::debug!("throttle: trailing call");
                        drop(function(arguments));
                    }
                    None => break,
                }

                tokio::time::sleep(wait).await;
            }
        });
    }
}

impl<F, A> Throttle<F, A> {
    /// Returns `true` while a window is open.
    pub fn is_cooling(&self) -> bool {
        self.state.lock().cooling
    }

    /// Returns `true` if a coalesced call is waiting for the window to end.
    pub fn has_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// The window length.
    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<F, A> Clone for Throttle<F, A> {
    fn clone(&self) -> Self {
        Self {
            function: Arc::clone(&self.function),
            wait: self.wait,
            state: Arc::clone(&self.state),
        }
    }
}

impl<F, A> fmt::Debug for Throttle<F, A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Throttle")
            .field("wait", &self.wait)
            .field("cooling", &self.is_cooling())
            .field("pending", &self.has_pending())
            .finish_non_exhaustive()
    }
}

/// Wraps `function` so that it runs at most once per `wait`.
///
/// See [`Throttle`].
pub fn throttle<F, A, R>(function: F, wait: Duration) -> Throttle<F, A>
where
    F: Fn(A) -> R + Send + Sync + 'static,
    A: Send + 'static,
    R: 'static,
{
    Throttle::new(function, wait)
}
