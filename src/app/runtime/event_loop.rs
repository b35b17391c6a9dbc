use ratatui::Terminal;
use tokio::select;

use crate::state::AppState;
use crate::ui::ui;

use super::channels::Channels;
use super::tick::handle_tick;

/// What: Process one message from any channel.
///
/// Inputs:
/// - `app`: application state
/// - `channels`: runtime channels
///
/// Output: `true` if the event loop should exit.
async fn process_messages(app: &mut AppState, channels: &mut Channels) -> bool {
    select! {
        Some(ev) = channels.event_rx.recv() => {
            crate::events::handle_event(ev, app, &channels.submit_req_tx)
        }
        Some(()) = channels.tick_rx.recv() => {
            handle_tick(app);
            false
        }
        Some(outcome) = channels.submit_res_rx.recv() => {
            crate::events::apply_outcome(app, &outcome);
            false
        }
        else => true,
    }
}

/// What: Run the main event loop: render a frame, then wait for the next
/// event, tick, or worker result.
///
/// Inputs:
/// - `terminal`: terminal to draw into (None in headless mode)
/// - `app`: application state
/// - `channels`: runtime channels
///
/// Output: none; returns when the visitor quits or every channel closes.
pub async fn run_event_loop(
    terminal: &mut Option<Terminal<ratatui::backend::CrosstermBackend<std::io::Stdout>>>,
    app: &mut AppState,
    channels: &mut Channels,
) {
    loop {
        if let Some(t) = terminal.as_mut() {
            let _ = t.draw(|f| ui(f, app));
        }
        if process_messages(app, channels).await {
            break;
        }
    }
}
