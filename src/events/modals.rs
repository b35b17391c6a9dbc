//! Key handling for modal overlays: the insurance lookup, the language
//! picker, and dismissible alerts.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::i18n::{self, Lang};
use crate::state::{AppState, Modal};

/// What: Handle a key press while a modal is open.
///
/// Inputs:
/// - `ke`: key event
/// - `app`: application state
///
/// Output: none; modals never exit the application.
pub fn handle_modal_key(ke: KeyEvent, app: &mut AppState) {
    match &mut app.modal {
        Modal::Insurance(look) => match ke.code {
            KeyCode::Esc => close(app),
            KeyCode::Tab => look.cycle_provider(),
            KeyCode::Backspace => {
                look.query.pop();
            }
            KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
                look.query.push(c);
            }
            _ => {}
        },
        Modal::Language { selected } => match ke.code {
            KeyCode::Esc => close(app),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                *selected = selected.toggled();
            }
            KeyCode::Enter => {
                let lang = *selected;
                close(app);
                i18n::set_language(app, lang);
                app.status = Some(i18n::t_fmt(
                    app,
                    "language.switched",
                    &[("lang", &lang.label())],
                ));
            }
            _ => {}
        },
        Modal::Alert { .. } => {
            if matches!(ke.code, KeyCode::Esc | KeyCode::Enter) {
                close(app);
            }
        }
        Modal::None => {}
    }
}

/// Close the overlay and let the hero banner resume rotating.
fn close(app: &mut AppState) {
    app.modal = Modal::None;
    app.autoplay.disengage(std::time::Instant::now());
}
