//! Background workers: the terminal-event polling thread, the frame tick
//! timer, and the form-relay submit worker.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::contact::{FormPayload, RelayTransport};
use crate::state::SubmitOutcome;

/// Frame cadence: roughly 30 ticks per second.
pub const TICK_MS: u64 = 33;

/// What: Spawn the blocking thread that polls terminal input.
///
/// Inputs:
/// - `event_tx`: channel into the event loop
/// - `cancelled`: flag flipped at shutdown so the thread can exit
///
/// Output: none.
///
/// Details:
/// - Polls with a short timeout so cancellation is noticed promptly; a
///   closed channel also ends the thread.
pub fn spawn_event_thread(
    event_tx: mpsc::UnboundedSender<CEvent>,
    cancelled: Arc<AtomicBool>,
) {
    std::thread::spawn(move || {
        loop {
            if cancelled.load(Ordering::Relaxed) {
                break;
            }
            match crossterm::event::poll(Duration::from_millis(50)) {
                Ok(true) => match crossterm::event::read() {
                    Ok(ev) => {
                        if event_tx.send(ev).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal event read failed");
                    }
                },
                Ok(false) => {}
                Err(e) => {
                    tracing::warn!(error = %e, "terminal event poll failed");
                    break;
                }
            }
        }
    });
}

/// Spawn the frame tick timer driving animations.
pub fn spawn_tick_task(tick_tx: mpsc::UnboundedSender<()>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(TICK_MS));
        loop {
            interval.tick().await;
            if tick_tx.send(()).is_err() {
                break;
            }
        }
    });
}

/// What: Spawn the submit worker delivering appointment requests.
///
/// Inputs:
/// - `transport`: relay transport (HTTP in production, a fake in tests)
/// - `dry_run`: when set, requests succeed locally and nothing leaves the
///   machine
/// - `req_rx`: submissions from the contact screen
/// - `res_tx`: outcomes back to the event loop
///
/// Output: none.
///
/// Details:
/// - One POST per request, no retries; a transport error maps onto a
///   failed outcome with no message so the UI falls back to its generic
///   copy.
pub fn spawn_submit_worker<T>(
    transport: T,
    dry_run: bool,
    mut req_rx: mpsc::UnboundedReceiver<FormPayload>,
    res_tx: mpsc::UnboundedSender<SubmitOutcome>,
) where
    T: RelayTransport + Send + Sync + 'static,
{
    tokio::spawn(async move {
        while let Some(payload) = req_rx.recv().await {
            let patient = payload.name.clone();
            let outcome = if dry_run {
                tracing::info!(patient = %patient, "dry-run submission accepted locally");
                SubmitOutcome {
                    ok: true,
                    message: None,
                    patient,
                }
            } else {
                match transport.submit(payload).await {
                    Ok(resp) => SubmitOutcome {
                        ok: resp.success,
                        message: resp.message,
                        patient,
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "form relay unreachable");
                        SubmitOutcome {
                            ok: false,
                            message: None,
                            patient,
                        }
                    }
                }
            };
            if res_tx.send(outcome).is_err() {
                break;
            }
        }
    });
}
