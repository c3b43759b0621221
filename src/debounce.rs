//! Trailing-edge debouncing on the tokio timer.
//!
//! [`schedule`] runs a callback after a delay unless its handle is cancelled
//! first. [`Debouncer`] keeps at most one scheduled call: every new call
//! cancels the pending one, so only the call after the last event in a quiet
//! window actually runs.
//!
//! Both must be used from within a tokio runtime.

use std::time::Duration;
use tokio::task::{AbortHandle, JoinHandle};
use tokio_util::sync::CancellationToken;

/// Handle to one scheduled invocation.
#[derive(Debug)]
pub struct DebounceHandle {
    token: CancellationToken,
    task: JoinHandle<bool>,
}

impl DebounceHandle {
    /// Cancel the invocation if it has not started yet.
    ///
    /// A callback that already started runs to completion.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Whether the invocation has settled, either by running or by being cancelled.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the invocation to settle. Returns `true` if the callback ran.
    pub async fn join(self) -> bool {
        match self.task.await {
            Ok(ran) => ran,
            Err(e) => {
                tracing::warn!("Debounced task did not complete: {}", e);
                false
            }
        }
    }
}

/// Run `callback` once `delay` has elapsed, unless cancelled before then.
pub fn schedule<F>(callback: F, delay: Duration) -> DebounceHandle
where
    F: FnOnce() + Send + 'static,
{
    let token = CancellationToken::new();
    let cancelled = token.clone();

    let task = tokio::spawn(async move {
        tokio::select! {
            biased;
            () = cancelled.cancelled() => false,
            () = tokio::time::sleep(delay) => {
                callback();
                true
            }
        }
    });

    DebounceHandle { token, task }
}

/// Keeps a single pending invocation, replacing it on every call.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    /// Token and task of the most recent call; the task may already have run.
    pending: Option<(CancellationToken, AbortHandle)>,
}

impl Debouncer {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Cancel any pending invocation and schedule `callback` after the delay.
    pub fn call<F>(&mut self, callback: F) -> DebounceHandle
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel();
        let handle = schedule(callback, self.delay);
        self.pending = Some((handle.token.clone(), handle.task.abort_handle()));
        handle
    }

    /// Cancel the pending invocation, if any. Returns whether one was pending,
    /// i.e. scheduled and not yet settled.
    pub fn cancel(&mut self) -> bool {
        let Some((token, task)) = self.pending.take() else {
            return false;
        };
        let was_pending = !token.is_cancelled() && !task.is_finished();
        token.cancel();
        was_pending
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
