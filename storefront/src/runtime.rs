//! Browser event-loop runtime for the search pipeline.

use std::time::Duration;

use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};
use verdant_client::runtime::{LocalTask, Runtime, TimerHandle};

#[derive(Debug, Clone, Copy, Default)]
pub struct LeptosRuntime;

/// `setTimeout` handle. Empty if scheduling failed.
#[derive(Debug)]
pub struct LeptosTimer(Option<TimeoutHandle>);

impl TimerHandle for LeptosTimer {
    fn cancel(self) {
        if let Some(handle) = self.0 {
            handle.clear();
        }
    }
}

impl Runtime for LeptosRuntime {
    type Timer = LeptosTimer;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> LeptosTimer {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => LeptosTimer(Some(handle)),
            Err(e) => {
                tracing::warn!(error = ?e, "failed to schedule timer");
                LeptosTimer(None)
            }
        }
    }

    fn spawn(&self, task: LocalTask) {
        leptos::task::spawn_local(task);
    }
}
