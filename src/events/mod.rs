//! Input handling.
//!
//! One dispatcher routes every terminal event: modals swallow keys first,
//! the contact screen owns its editing keys, and everything else falls
//! through to the browse-mode bindings (screen switching, page scrolling,
//! carousel navigation). Handlers return `true` to exit the application.

mod browse;
mod contact;
mod modals;

pub use contact::apply_outcome;

use crossterm::event::{Event as CEvent, KeyEventKind, MouseEventKind};
use tokio::sync::mpsc;

use crate::contact::FormPayload;
use crate::state::{AppState, Screen};

/// What: Handle one terminal event.
///
/// Inputs:
/// - `ev`: decoded crossterm event
/// - `app`: application state
/// - `submit_tx`: channel to the submit worker
///
/// Output: `true` when the application should exit.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<FormPayload>,
) -> bool {
    match ev {
        CEvent::Key(ke) if ke.kind != KeyEventKind::Release => {
            if app.modal.is_open() {
                modals::handle_modal_key(ke, app);
                false
            } else if app.screen == Screen::Contact {
                contact::handle_contact_key(ke, app, submit_tx);
                false
            } else {
                browse::handle_browse_key(ke, app)
            }
        }
        CEvent::Mouse(me) => {
            handle_mouse(me.kind, app);
            false
        }
        // A resize invalidates nothing directly: the next render measures
        // the new dimensions and the rails re-anchor their focused card.
        CEvent::Resize(_, _) => false,
        _ => false,
    }
}

/// Wheel scrolling: vertical drives the page, horizontal drives the rail.
fn handle_mouse(kind: MouseEventKind, app: &mut AppState) {
    if app.modal.is_open() {
        return;
    }
    match kind {
        MouseEventKind::ScrollUp => app.scroll_page(-3),
        MouseEventKind::ScrollDown => app.scroll_page(3),
        MouseEventKind::ScrollLeft => {
            if let Some(rail) = app.active_rail() {
                rail.scroll_by(-4.0);
            }
            nudge_autoplay(app);
        }
        MouseEventKind::ScrollRight => {
            if let Some(rail) = app.active_rail() {
                rail.scroll_by(4.0);
            }
            nudge_autoplay(app);
        }
        _ => {}
    }
}

/// Any manual carousel interaction restarts the hero autoplay interval.
pub(crate) fn nudge_autoplay(app: &mut AppState) {
    if app.screen == Screen::Home {
        app.autoplay.interact(std::time::Instant::now());
    }
}
