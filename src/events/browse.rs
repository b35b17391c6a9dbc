//! Browse-mode key bindings shared by every screen except the contact
//! editor.

use crossterm::event::{KeyCode, KeyEvent};

use crate::i18n;
use crate::state::{AppState, Modal, Screen};

use super::nudge_autoplay;

/// What: Handle a key press in browse mode.
///
/// Inputs:
/// - `ke`: key event
/// - `app`: application state
///
/// Output: `true` to exit the application.
///
/// Details:
/// - Digits jump straight to a screen; arrows steer the active rail or
///   scroll the page; `l` opens the language picker, `i` the insurance
///   lookup.
/// - Any hero interaction skips the staged entrance and restarts the
///   autoplay interval, so automation never fights the visitor.
pub fn handle_browse_key(ke: KeyEvent, app: &mut AppState) -> bool {
    match ke.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,
        KeyCode::Char(c @ '1'..='7') => {
            let idx = (c as usize) - ('1' as usize);
            app.go_to_screen(Screen::ALL[idx]);
        }
        KeyCode::Char('l') | KeyCode::Char('L') => {
            app.modal = Modal::Language { selected: app.lang };
            app.autoplay.engage();
        }
        KeyCode::Char('i') | KeyCode::Char('I') => {
            app.modal = Modal::Insurance(crate::state::InsuranceLookup::default());
            app.autoplay.engage();
        }
        KeyCode::Up => app.scroll_page(-2),
        KeyCode::Down => app.scroll_page(2),
        KeyCode::PageUp => app.scroll_page(-i32::from(app.content_rows.max(2)) + 2),
        KeyCode::PageDown => app.scroll_page(i32::from(app.content_rows.max(2)) - 2),
        KeyCode::Left => steer(app, -1),
        KeyCode::Right => steer(app, 1),
        KeyCode::Enter => activate(app),
        KeyCode::Esc => dismiss(app),
        _ => {}
    }
    false
}

/// Arrow navigation on the active rail, or provider-row movement.
fn steer(app: &mut AppState, direction: i32) {
    match app.screen {
        Screen::Providers => {
            let len = crate::insurance::PROVIDERS.len();
            let cur = app.provider_selected;
            app.provider_selected = if direction < 0 {
                (cur + len - 1) % len
            } else {
                (cur + 1) % len
            };
        }
        _ => {
            if app.screen == Screen::Home {
                app.hero_seq.finish();
            }
            if let Some(rail) = app.active_rail() {
                rail.step_one(direction);
            }
            nudge_autoplay(app);
        }
    }
}

/// Enter: the context action for the active screen.
fn activate(app: &mut AppState) {
    match app.screen {
        Screen::Home => {
            app.hero_seq.finish();
            app.go_to_screen(Screen::Contact);
        }
        Screen::Services => {
            let services = i18n::t_services(app, "services.items");
            let idx = app.services_rail.current();
            if let Some(svc) = services.get(idx) {
                app.services_detail = Some(svc.key.to_string());
            }
        }
        Screen::Providers => {
            if let Some(p) = crate::insurance::PROVIDERS.get(app.provider_selected) {
                app.provider_detail = Some(p.id);
            }
        }
        _ => {}
    }
}

/// Esc: close whatever panel the screen has open.
fn dismiss(app: &mut AppState) {
    match app.screen {
        Screen::Services => app.services_detail = None,
        Screen::Providers => app.provider_detail = None,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn measured_app() -> AppState {
        let mut app = AppState::default();
        app.services_rail.layout(24.0, 2.0, 80.0);
        app.hero_rail.layout(60.0, 2.0, 80.0);
        app
    }

    #[test]
    /// What: Arrow keys step the services rail one card
    ///
    /// - Input: Right, Right on the services screen, settling between
    /// - Output: Current index 2
    fn browse_arrows_step_rail() {
        let mut app = measured_app();
        app.go_to_screen(Screen::Services);
        handle_browse_key(key(KeyCode::Right), &mut app);
        while app.services_rail.is_moving() {
            app.services_rail.tick();
        }
        handle_browse_key(key(KeyCode::Right), &mut app);
        while app.services_rail.is_moving() {
            app.services_rail.tick();
        }
        assert_eq!(app.services_rail.current(), 2);
    }

    #[test]
    /// What: Enter opens the focused service's detail panel
    ///
    /// - Input: Services screen at index 0; Enter
    /// - Output: Detail key is the first service's stable key
    fn browse_enter_opens_detail() {
        let mut app = measured_app();
        app.go_to_screen(Screen::Services);
        handle_browse_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.services_detail.as_deref(), Some("primary-care"));
        handle_browse_key(key(KeyCode::Esc), &mut app);
        assert!(app.services_detail.is_none());
    }

    #[test]
    /// What: Provider rows wrap in both directions
    ///
    /// - Input: Left from row 0; Right from the last row
    /// - Output: Wraps to last and back to 0
    fn browse_provider_selection_wraps() {
        let mut app = AppState::default();
        app.go_to_screen(Screen::Providers);
        handle_browse_key(key(KeyCode::Left), &mut app);
        assert_eq!(app.provider_selected, crate::insurance::PROVIDERS.len() - 1);
        handle_browse_key(key(KeyCode::Right), &mut app);
        assert_eq!(app.provider_selected, 0);
        handle_browse_key(key(KeyCode::Enter), &mut app);
        assert_eq!(app.provider_detail, Some("jaime-acosta"));
    }

    #[test]
    /// What: Language key opens the picker preselecting the active language
    ///
    /// - Input: 'l' on Home
    /// - Output: Language modal with current selection
    fn browse_language_key_opens_picker() {
        let mut app = AppState::default();
        handle_browse_key(key(KeyCode::Char('l')), &mut app);
        assert!(matches!(app.modal, Modal::Language { .. }));
    }
}
