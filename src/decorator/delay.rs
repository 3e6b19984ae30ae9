//! Deferred, fire-and-forget invocation on the tokio timer.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::Sleep;

use crate::error::DecoratorError;

/// Calls `function(arguments)` once, after at least `wait` has elapsed.
///
/// The call is scheduled as a task on the current tokio runtime and this
/// function returns immediately. The result of `function` is discarded and
/// there is no way to cancel the call.
///
/// # Errors
///
/// Returns [`DecoratorError::NoRuntime`] when called outside of a tokio
/// runtime and [`DecoratorError::TimersDisabled`] when the runtime has no
/// time driver; `function` is then never called.
///
/// # Examples
///
/// ```rust
/// use fnkit::decorator::delay;
/// use std::sync::{Arc, Mutex};
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let log = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&log);
///
/// delay(
///     move |(first, second): (&str, &str)| sink.lock().unwrap().push(format!("{first}{second}")),
///     Duration::from_millis(10),
///     ("a", "b"),
/// )
/// .unwrap();
/// assert!(log.lock().unwrap().is_empty());
///
/// tokio::time::sleep(Duration::from_millis(50)).await;
/// assert_eq!(*log.lock().unwrap(), vec!["ab"]);
/// # }
/// ```
pub fn delay<F, A, R>(function: F, wait: Duration, arguments: A) -> Result<(), DecoratorError>
where
    F: FnOnce(A) -> R + Send + 'static,
    A: Send + 'static,
    R: 'static,
{
    let (handle, timer) = start_timer("delay", wait)?;

    tracing::debug!(?wait, "delay: scheduling call");
    handle.spawn(async move {
        timer.await;
        tracing::trace!("delay: firing");
        drop(function(arguments));
    });
    Ok(())
}

/// Creates a `wait`-long timer on the current runtime.
///
/// tokio panics when a timer is created, not when it is polled, on a
/// runtime without a time driver.
pub(super) fn start_timer(
    operation: &'static str,
    wait: Duration,
) -> Result<(Handle, Sleep), DecoratorError> {
    let handle = Handle::try_current().map_err(|_| DecoratorError::NoRuntime { operation })?;
    let timer = catch_unwind(AssertUnwindSafe(|| tokio::time::sleep(wait)))
        .map_err(|_| DecoratorError::TimersDisabled { operation })?;
    Ok((handle, timer))
}
