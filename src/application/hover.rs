//! Trailing-edge debounce for hover signals.
//!
//! Pointer enter/leave events arrive far faster than the radar preview
//! should update. The debouncer emits only once the signal stream has
//! been quiet for the configured window, and always emits the most
//! recent value; intermediate values are dropped, never queued.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::domain::foundation::Alias;

/// A settled hover state: the hovered alias, or `None` once the pointer
/// has left all columns.
pub type HoverState = Option<Alias>;

/// Sender half of the debouncer. Cheap to clone; dropping all senders
/// flushes any pending value and stops the worker.
#[derive(Clone)]
pub struct HoverDebouncer {
    tx: mpsc::UnboundedSender<HoverState>,
}

impl HoverDebouncer {
    /// Spawns the debounce worker and returns the sender together with
    /// the receiver of settled hover states.
    pub fn spawn(window: Duration) -> (Self, mpsc::UnboundedReceiver<HoverState>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let (out_tx, out_rx) = mpsc::unbounded_channel();
        tokio::spawn(run(rx, out_tx, window));
        (Self { tx }, out_rx)
    }

    /// Signals that the pointer entered the column of `alias`.
    pub fn pointer_entered(&self, alias: Alias) {
        // Send only fails when the worker is gone, at which point hover
        // updates are moot.
        let _ = self.tx.send(Some(alias));
    }

    /// Signals that the pointer left the grid.
    pub fn pointer_left(&self) {
        let _ = self.tx.send(None);
    }
}

async fn run(
    mut rx: mpsc::UnboundedReceiver<HoverState>,
    out: mpsc::UnboundedSender<HoverState>,
    window: Duration,
) {
    let mut pending: Option<HoverState> = None;
    loop {
        let next = match pending {
            // A value is waiting: emit it once the stream stays quiet
            // for the whole window. A fresh signal resets the timer by
            // replacing the pending value.
            Some(_) => match timeout(window, rx.recv()).await {
                Ok(next) => next,
                Err(_) => {
                    if let Some(settled) = pending.take() {
                        if out.send(settled).is_err() {
                            return;
                        }
                    }
                    continue;
                }
            },
            None => rx.recv().await,
        };

        match next {
            Some(value) => pending = Some(value),
            None => {
                // Senders are gone; flush the trailing value and stop.
                if let Some(settled) = pending.take() {
                    let _ = out.send(settled);
                }
                return;
            }
        }
    }
}
