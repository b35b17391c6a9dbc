//! Key handling for the appointment request form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::contact::{FormPayload, Rejection, validate};
use crate::state::{AppState, ContactField, Screen, SubmitStatus, VisitReason};

/// What: Handle a key press on the contact screen.
///
/// Inputs:
/// - `ke`: key event
/// - `app`: application state
/// - `submit_tx`: channel to the submit worker
///
/// Output: none (screen-local; quitting goes through browse mode).
///
/// Details:
/// - The success panel swallows keys until dismissed; the error banner
///   clears on Esc while the form stays editable for the retry.
/// - Tab order wraps; Enter advances fields and submits from the button.
/// - Escape leaves for the home screen when nothing needs dismissing.
pub fn handle_contact_key(
    ke: KeyEvent,
    app: &mut AppState,
    submit_tx: &mpsc::UnboundedSender<FormPayload>,
) {
    match &app.submit_status {
        SubmitStatus::Success { .. } => {
            if matches!(ke.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                app.submit_status = SubmitStatus::Idle;
                app.contact_field = ContactField::Name;
            }
            return;
        }
        SubmitStatus::Failed { .. } if ke.code == KeyCode::Esc => {
            app.submit_status = SubmitStatus::Idle;
            return;
        }
        _ => {}
    }

    match ke.code {
        KeyCode::Tab | KeyCode::Down => app.contact_field = app.contact_field.next(),
        KeyCode::BackTab | KeyCode::Up => app.contact_field = app.contact_field.prev(),
        KeyCode::Esc => app.go_to_screen(Screen::Home),
        KeyCode::Enter => {
            if app.contact_field == ContactField::Submit {
                submit(app, submit_tx);
            } else {
                app.contact_field = app.contact_field.next();
            }
        }
        KeyCode::Left => cycle_selector(app, -1),
        KeyCode::Right => cycle_selector(app, 1),
        KeyCode::Char(' ') if selector_focused(app) => cycle_selector(app, 1),
        KeyCode::Backspace => {
            let field = app.contact_field;
            if let Some(buf) = app.form.text_field_mut(field) {
                buf.pop();
            }
        }
        KeyCode::Char(c) if !ke.modifiers.contains(KeyModifiers::CONTROL) => {
            let field = app.contact_field;
            if let Some(buf) = app.form.text_field_mut(field) {
                buf.push(c);
            }
        }
        _ => {}
    }
}

fn selector_focused(app: &AppState) -> bool {
    matches!(
        app.contact_field,
        ContactField::Reason | ContactField::Appointment
    )
}

/// Left/right on the selector fields cycles their options.
fn cycle_selector(app: &mut AppState, direction: i32) {
    match app.contact_field {
        ContactField::Reason => {
            let all = VisitReason::ALL;
            let next = match app.form.reason {
                None => {
                    if direction >= 0 { 0 } else { all.len() - 1 }
                }
                Some(r) => {
                    let i = r.label_index();
                    (i + if direction >= 0 { 1 } else { all.len() - 1 }) % all.len()
                }
            };
            app.form.reason = Some(all[next]);
        }
        ContactField::Appointment => {
            app.form.appointment = app.form.appointment.toggled();
        }
        _ => {}
    }
}

/// What: Validate and dispatch the submission.
///
/// Inputs:
/// - `app`: application state (form, status, credential)
/// - `submit_tx`: channel to the submit worker
///
/// Output: none.
///
/// Details:
/// - The first failing rule's message is surfaced; a populated honeypot
///   blocks silently with no error and no network call.
/// - While a request is in flight the send control is inert; the rest of
///   the form stays interactive.
pub fn submit(app: &mut AppState, submit_tx: &mpsc::UnboundedSender<FormPayload>) {
    if app.submit_status == SubmitStatus::Submitting {
        return;
    }
    match validate(&app.form) {
        Ok(()) => {
            app.form_error = None;
            app.submit_status = SubmitStatus::Submitting;
            let payload = FormPayload::from_form(&app.form, app.relay_access_key.clone());
            if submit_tx.send(payload).is_err() {
                tracing::error!("submit worker unavailable");
                app.submit_status = SubmitStatus::Failed {
                    message: crate::i18n::t(app, "contact.err.network"),
                };
            }
        }
        Err(Rejection::Field(e)) => {
            app.form_error = Some(e);
        }
        Err(Rejection::Bot) => {
            // Indistinguishable from a validation stop, minus the message.
            tracing::debug!("honeypot tripped; submission dropped");
            app.form_error = None;
        }
    }
}

/// Fold a worker outcome back into UI state.
pub fn apply_outcome(app: &mut AppState, outcome: &crate::state::SubmitOutcome) {
    if outcome.ok {
        app.form.reset();
        app.form_error = None;
        app.contact_field = ContactField::Name;
        app.submit_status = SubmitStatus::Success {
            name: outcome.patient.clone(),
        };
    } else {
        let message = outcome
            .message
            .clone()
            .unwrap_or_else(|| crate::i18n::t(app, "contact.err.network"));
        app.submit_status = SubmitStatus::Failed { message };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ApptKind, SubmitOutcome};
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn channel() -> (
        mpsc::UnboundedSender<FormPayload>,
        mpsc::UnboundedReceiver<FormPayload>,
    ) {
        mpsc::unbounded_channel()
    }

    fn filled_app() -> AppState {
        let mut app = AppState::default();
        app.go_to_screen(Screen::Contact);
        app.form.name = "Jane Doe".into();
        app.form.email = "jane@example.com".into();
        app.form.phone = "4075551234".into();
        app.form.reason = Some(VisitReason::WellVisit);
        app.contact_field = ContactField::Submit;
        app
    }

    #[test]
    /// What: Typing lands in the focused text field
    ///
    /// - Input: Characters and a backspace on the name field
    /// - Output: Buffer reflects the edits
    fn contact_typing_edits_focused_field() {
        let (tx, _rx) = channel();
        let mut app = AppState::default();
        app.go_to_screen(Screen::Contact);
        for c in ['J', 'o', 'x'] {
            handle_contact_key(key(KeyCode::Char(c)), &mut app, &tx);
        }
        handle_contact_key(key(KeyCode::Backspace), &mut app, &tx);
        assert_eq!(app.form.name, "Jo");
    }

    #[test]
    /// What: Selector fields cycle with arrows
    ///
    /// - Input: Right twice on reason; Right on appointment
    /// - Output: Sick visit selected; follow-up selected
    fn contact_selectors_cycle() {
        let (tx, _rx) = channel();
        let mut app = AppState::default();
        app.go_to_screen(Screen::Contact);
        app.contact_field = ContactField::Reason;
        handle_contact_key(key(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.form.reason, Some(VisitReason::WellVisit));
        handle_contact_key(key(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.form.reason, Some(VisitReason::SickVisit));
        app.contact_field = ContactField::Appointment;
        handle_contact_key(key(KeyCode::Right), &mut app, &tx);
        assert_eq!(app.form.appointment, ApptKind::FollowUp);
    }

    #[test]
    /// What: A valid submit dispatches exactly one payload
    ///
    /// - Input: Filled form; Enter on the submit button
    /// - Output: One payload on the channel; status Submitting
    fn contact_valid_submit_dispatches() {
        let (tx, mut rx) = channel();
        let mut app = filled_app();
        handle_contact_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.submit_status, SubmitStatus::Submitting);
        let payload = rx.try_recv().expect("one payload");
        assert_eq!(payload.name, "Jane Doe");
        assert!(rx.try_recv().is_err());
        // The in-flight guard ignores a second Enter.
        handle_contact_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Short phone surfaces the phone error and no payload
    ///
    /// - Input: Valid form except phone "123"
    /// - Output: Phone error shown, channel empty
    fn contact_short_phone_blocks() {
        let (tx, mut rx) = channel();
        let mut app = filled_app();
        app.form.phone = "123".into();
        handle_contact_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.form_error, Some(crate::contact::FieldError::Phone));
        assert_eq!(app.submit_status, SubmitStatus::Idle);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Honeypot blocks silently
    ///
    /// - Input: Valid form with the hidden field filled
    /// - Output: No error, no payload, still idle
    fn contact_honeypot_blocks_silently() {
        let (tx, mut rx) = channel();
        let mut app = filled_app();
        app.form.website = "spam".into();
        handle_contact_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(app.form_error.is_none());
        assert_eq!(app.submit_status, SubmitStatus::Idle);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    /// What: Success resets the form; failure keeps it for retry
    ///
    /// - Input: ok and failed outcomes
    /// - Output: Reset + success panel, then populated form + error banner
    fn contact_outcomes() {
        let (tx, _rx) = channel();
        let mut app = filled_app();
        apply_outcome(
            &mut app,
            &SubmitOutcome {
                ok: true,
                message: None,
                patient: "Jane Doe".into(),
            },
        );
        assert!(app.form.name.is_empty());
        assert!(matches!(&app.submit_status, SubmitStatus::Success { name } if name == "Jane Doe"));
        // Dismiss and fail the next one.
        handle_contact_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.submit_status, SubmitStatus::Idle);
        app.form.name = "Jane Doe".into();
        apply_outcome(
            &mut app,
            &SubmitOutcome {
                ok: false,
                message: Some("invalid access key".into()),
                patient: "Jane Doe".into(),
            },
        );
        assert!(
            matches!(&app.submit_status, SubmitStatus::Failed { message } if message == "invalid access key")
        );
        assert_eq!(app.form.name, "Jane Doe");
        handle_contact_key(key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.submit_status, SubmitStatus::Idle);
    }
}
