//! Timers and task spawning.
//!
//! The search pipeline needs exactly two asynchronous primitives: a
//! cancellable one-shot timer and a way to run a local future. Both are
//! abstracted here so the same pipeline runs on the browser event loop and
//! under a Tokio `LocalSet` in tests.

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// A `!Send` unit future.
pub type LocalTask = LocalBoxFuture<'static, ()>;

/// Handle to a scheduled timer.
pub trait TimerHandle {
    /// Prevent the callback from running. Cancelling a timer that already
    /// fired is a no-op.
    fn cancel(self);
}

/// Single-threaded scheduler.
pub trait Runtime: Clone + 'static {
    type Timer: TimerHandle + 'static;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Timer;

    /// Run `task` to completion on the current thread.
    fn spawn(&self, task: LocalTask);
}

/// Runs only the most recent of a burst of calls.
///
/// Each [`call`](Debouncer::call) cancels the pending timer and starts a new
/// one. Dropping the debouncer cancels whatever is pending.
pub struct Debouncer<R: Runtime> {
    runtime: R,
    delay: Duration,
    pending: Option<R::Timer>,
}

impl<R: Runtime> Debouncer<R> {
    pub fn new(runtime: R, delay: Duration) -> Self {
        Self {
            runtime,
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `task`, replacing any pending one.
    pub fn call(&mut self, task: impl FnOnce() + 'static) {
        self.cancel();
        self.pending = Some(self.runtime.schedule(self.delay, Box::new(task)));
    }

    /// Cancel the pending task, if any.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.pending.take() {
            timer.cancel();
        }
    }
}

impl<R: Runtime> Drop for Debouncer<R> {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl<R: Runtime> std::fmt::Debug for Debouncer<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("pending", &self.pending.is_some())
            .finish()
    }
}

#[cfg(any(test, feature = "tokio"))]
pub use self::tokio_runtime::{TokioRuntime, TokioTimer};

#[cfg(any(test, feature = "tokio"))]
mod tokio_runtime {
    use super::*;

    /// Runtime backed by `tokio::task::spawn_local`.
    ///
    /// Must be used from inside a `tokio::task::LocalSet`.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct TokioRuntime;

    /// Timer backed by an abortable local task.
    #[derive(Debug)]
    pub struct TokioTimer(tokio::task::JoinHandle<()>);

    impl TimerHandle for TokioTimer {
        fn cancel(self) {
            self.0.abort();
        }
    }

    impl Runtime for TokioRuntime {
        type Timer = TokioTimer;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TokioTimer {
            TokioTimer(tokio::task::spawn_local(async move {
                tokio::time::sleep(delay).await;
                task();
            }))
        }

        fn spawn(&self, task: LocalTask) {
            tokio::task::spawn_local(task);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tokio::task::LocalSet;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_call_fires() {
        LocalSet::new()
            .run_until(async {
                let fired = Rc::new(RefCell::new(Vec::new()));
                let mut debouncer = Debouncer::new(TokioRuntime, Duration::from_millis(300));

                for value in 1..=3 {
                    let fired = fired.clone();
                    debouncer.call(move || fired.borrow_mut().push(value));
                    sleep(Duration::from_millis(100)).await;
                }
                assert!(fired.borrow().is_empty());

                sleep(Duration::from_millis(400)).await;
                assert_eq!(*fired.borrow(), vec![3]);
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending() {
        LocalSet::new()
            .run_until(async {
                let fired = Rc::new(RefCell::new(false));
                {
                    let mut debouncer = Debouncer::new(TokioRuntime, Duration::from_millis(300));
                    let fired = fired.clone();
                    debouncer.call(move || *fired.borrow_mut() = true);
                }

                sleep(Duration::from_secs(1)).await;
                assert!(!*fired.borrow());
            })
            .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_spaced_calls_each_fire() {
        LocalSet::new()
            .run_until(async {
                let count = Rc::new(RefCell::new(0));
                let mut debouncer = Debouncer::new(TokioRuntime, Duration::from_millis(50));

                for _ in 0..2 {
                    let count = count.clone();
                    debouncer.call(move || *count.borrow_mut() += 1);
                    sleep(Duration::from_millis(80)).await;
                }
                assert_eq!(*count.borrow(), 2);
            })
            .await;
    }
}
