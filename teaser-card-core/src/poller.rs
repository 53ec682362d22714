//! Terminal event polling

use std::time::Duration;

use crossterm::event;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::event::EventKind;

const POLL_TIMEOUT: Duration = Duration::from_millis(10);
const LOOP_SLEEP: Duration = Duration::from_millis(16);
const MAX_EVENTS_PER_BATCH: usize = 20;

/// Forward terminal events to `tx` until `cancel` fires or the receiver drops.
///
/// On cancellation, whatever is still buffered in the terminal is read and
/// discarded so it does not leak into the shell.
pub(crate) fn spawn_event_poller(
    tx: mpsc::UnboundedSender<EventKind>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Event poller cancelled, draining buffer");
                    while event::poll(Duration::ZERO).unwrap_or(false) {
                        let _ = event::read();
                    }
                    break;
                }
                _ = tokio::time::sleep(LOOP_SLEEP) => {
                    let batch = std::iter::from_fn(|| {
                        event::poll(POLL_TIMEOUT)
                            .unwrap_or(false)
                            .then(event::read)
                    })
                    .take(MAX_EVENTS_PER_BATCH)
                    .filter_map(|read| read.ok().and_then(EventKind::from_terminal));

                    for kind in batch {
                        if tx.send(kind).is_err() {
                            debug!("Event channel closed, stopping poller");
                            return;
                        }
                    }
                }
            }
        }
    })
}
