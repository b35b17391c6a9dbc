use std::sync::Arc;
use std::sync::atomic::AtomicBool;

use crossterm::event::Event as CEvent;
use tokio::sync::mpsc;

use crate::contact::FormPayload;
use crate::state::SubmitOutcome;

/// What: Channel definitions for runtime communication.
///
/// Details:
/// - Terminal events arrive from a dedicated polling thread, the frame
///   tick from a timer task, and submit outcomes from the relay worker.
/// - The submit request receiver is taken by the worker at spawn time.
pub struct Channels {
    pub event_tx: mpsc::UnboundedSender<CEvent>,
    pub event_rx: mpsc::UnboundedReceiver<CEvent>,
    pub event_thread_cancelled: Arc<AtomicBool>,
    pub tick_tx: mpsc::UnboundedSender<()>,
    pub tick_rx: mpsc::UnboundedReceiver<()>,
    pub submit_req_tx: mpsc::UnboundedSender<FormPayload>,
    pub submit_req_rx: Option<mpsc::UnboundedReceiver<FormPayload>>,
    pub submit_res_tx: mpsc::UnboundedSender<SubmitOutcome>,
    pub submit_res_rx: mpsc::UnboundedReceiver<SubmitOutcome>,
}

impl Channels {
    /// Create every channel used by the runtime.
    pub fn new() -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel::<CEvent>();
        let (tick_tx, tick_rx) = mpsc::unbounded_channel::<()>();
        let (submit_req_tx, submit_req_rx) = mpsc::unbounded_channel::<FormPayload>();
        let (submit_res_tx, submit_res_rx) = mpsc::unbounded_channel::<SubmitOutcome>();
        Self {
            event_tx,
            event_rx,
            event_thread_cancelled: Arc::new(AtomicBool::new(false)),
            tick_tx,
            tick_rx,
            submit_req_tx,
            submit_req_rx: Some(submit_req_rx),
            submit_res_tx,
            submit_res_rx,
        }
    }
}
