//! Single-slot restartable timer.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Observable state of a [`Debouncer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    Idle,
    Pending,
}

/// Owns at most one pending timer.
///
/// `restart` cancels the pending timer (if any) and starts a new one. Each
/// timer is tagged with a generation; when it fires, its task must call
/// [`Debouncer::fire`] with that generation, which moves the debouncer back
/// to `Idle` only if the timer is still the current one. Work done after a
/// successful `fire` is never aborted by a later restart.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
            pending: None,
        }
    }

    pub fn state(&self) -> DebounceState {
        if self.pending.is_some() {
            DebounceState::Pending
        } else {
            DebounceState::Idle
        }
    }

    /// Cancel any pending timer and schedule a new one.
    ///
    /// `make_task` receives the new generation and builds the future that runs
    /// once the delay elapses. Must be called from within a tokio runtime.
    pub fn restart<F, Fut>(&mut self, make_task: F) -> u64
    where
        F: FnOnce(u64) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel();
        self.generation += 1;

        let delay = self.delay;
        let task = make_task(self.generation);
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        }));

        self.generation
    }

    /// Mark the timer of `generation` as fired.
    ///
    /// Returns `false` for a superseded or already-cancelled timer, in which
    /// case the caller must not act.
    pub fn fire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.pending.is_none() {
            return false;
        }
        // Dropping the handle detaches the task; the caller keeps running.
        self.pending = None;
        true
    }

    /// Cancel the pending timer. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                handle.abort();
                true
            }
            None => false,
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
