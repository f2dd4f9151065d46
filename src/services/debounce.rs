// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2026 Aleksandr Ptakhin

use std::future::Future;
use std::sync::Mutex;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

/// Runs only the last of a burst of scheduled calls.
///
/// Each `schedule` aborts whatever is still waiting and starts a new quiet
/// period. Once a call has started running it is no longer cancelled by
/// later schedules; its results land whenever its I/O completes.
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    /// Run `task` after the quiet period unless another call arrives first.
    /// Must be called from within a tokio runtime.
    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let (fire_tx, fire_rx) = tokio::sync::oneshot::channel::<()>();

        let timer = tokio::spawn(async move {
            sleep(delay).await;
            let _ = fire_tx.send(());
        });

        // The work itself runs detached so aborting a later timer cannot cut it short.
        tokio::spawn(async move {
            if fire_rx.await.is_ok() {
                task.await;
            }
        });

        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = pending.replace(timer) {
            previous.abort();
        }
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        let mut pending = match self.pending.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Some(previous) = pending.take() {
            previous.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
