// End-to-end appointment request flows against a fake relay transport.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use kiosko::contact::{FormPayload, RelayResponse, RelayTransport};
use kiosko::events;
use kiosko::state::{AppState, ContactField, Screen, SubmitStatus, VisitReason};
use tokio::sync::mpsc;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Transport double: counts calls and returns a scripted envelope.
#[derive(Clone)]
struct ScriptedRelay {
    calls: Arc<AtomicUsize>,
    success: bool,
    message: Option<String>,
}

impl ScriptedRelay {
    fn new(success: bool, message: Option<&str>) -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            success,
            message: message.map(ToString::to_string),
        }
    }
}

impl RelayTransport for ScriptedRelay {
    async fn submit(&self, _payload: FormPayload) -> Result<RelayResponse, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(RelayResponse {
            success: self.success,
            message: self.message.clone(),
        })
    }
}

fn key(app: &mut AppState, tx: &mpsc::UnboundedSender<FormPayload>, code: KeyCode) {
    let ev = CEvent::Key(KeyEvent::new(code, KeyModifiers::NONE));
    let _ = events::handle_event(ev, app, tx);
}

fn type_text(app: &mut AppState, tx: &mpsc::UnboundedSender<FormPayload>, text: &str) {
    for c in text.chars() {
        key(app, tx, KeyCode::Char(c));
    }
}

/// Drive the form from a blank screen to a filled one using only key events.
fn fill_form(app: &mut AppState, tx: &mpsc::UnboundedSender<FormPayload>) {
    app.go_to_screen(Screen::Contact);
    type_text(app, tx, "Jane Doe");
    key(app, tx, KeyCode::Tab);
    type_text(app, tx, "jane@example.com");
    key(app, tx, KeyCode::Tab);
    type_text(app, tx, "4075551234");
    key(app, tx, KeyCode::Tab);
    // Reason selector: first Right selects "well visit".
    key(app, tx, KeyCode::Right);
    // Jump to the submit button.
    while app.contact_field != ContactField::Submit {
        key(app, tx, KeyCode::Tab);
    }
}

async fn pump_one(
    relay: ScriptedRelay,
    req_rx: mpsc::UnboundedReceiver<FormPayload>,
) -> kiosko::state::SubmitOutcome {
    let (res_tx, mut res_rx) = mpsc::unbounded_channel();
    kiosko::app::spawn_submit_worker(relay, false, req_rx, res_tx);
    tokio::time::timeout(std::time::Duration::from_secs(2), res_rx.recv())
        .await
        .expect("worker responded")
        .expect("outcome delivered")
}

#[tokio::test(flavor = "multi_thread")]
async fn successful_submission_resets_and_shows_panel() {
    let (tx, req_rx) = mpsc::unbounded_channel();
    let mut app = AppState::default();
    fill_form(&mut app, &tx);
    assert_eq!(app.form.reason, Some(VisitReason::WellVisit));

    key(&mut app, &tx, KeyCode::Enter);
    assert_eq!(app.submit_status, SubmitStatus::Submitting);

    let relay = ScriptedRelay::new(true, None);
    let counter = relay.calls.clone();
    let outcome = pump_one(relay, req_rx).await;
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert!(outcome.ok);
    assert_eq!(outcome.patient, "Jane Doe");

    events::apply_outcome(&mut app, &outcome);
    assert!(matches!(&app.submit_status, SubmitStatus::Success { name } if name == "Jane Doe"));
    assert!(app.form.name.is_empty());
    assert!(app.form.reason.is_none());

    // Dismissing the panel re-opens a blank, editable form.
    key(&mut app, &tx, KeyCode::Enter);
    assert_eq!(app.submit_status, SubmitStatus::Idle);
    assert_eq!(app.contact_field, ContactField::Name);
}

#[tokio::test(flavor = "multi_thread")]
async fn short_phone_blocks_without_any_network_call() {
    let (tx, mut req_rx) = mpsc::unbounded_channel::<FormPayload>();
    let mut app = AppState::default();
    fill_form(&mut app, &tx);
    app.form.phone = "123".into();

    key(&mut app, &tx, KeyCode::Enter);
    assert_eq!(
        app.form_error,
        Some(kiosko::contact::FieldError::Phone)
    );
    assert_eq!(app.submit_status, SubmitStatus::Idle);
    assert!(req_rx.try_recv().is_err(), "no payload may be dispatched");
    // The form keeps its contents for correction.
    assert_eq!(app.form.name, "Jane Doe");
}

#[tokio::test(flavor = "multi_thread")]
async fn relay_failure_surfaces_remote_reason_and_keeps_form() {
    let (tx, req_rx) = mpsc::unbounded_channel();
    let mut app = AppState::default();
    fill_form(&mut app, &tx);
    key(&mut app, &tx, KeyCode::Enter);

    let relay = ScriptedRelay::new(false, Some("invalid access key"));
    let outcome = pump_one(relay, req_rx).await;
    events::apply_outcome(&mut app, &outcome);
    assert!(
        matches!(&app.submit_status, SubmitStatus::Failed { message } if message == "invalid access key")
    );
    // No reset on failure: the visitor corrects and resubmits manually.
    assert_eq!(app.form.name, "Jane Doe");
    assert_eq!(app.form.phone, "4075551234");
}

#[tokio::test(flavor = "multi_thread")]
async fn dry_run_short_circuits_the_transport() {
    let (req_tx, req_rx) = mpsc::unbounded_channel::<FormPayload>();
    let relay = ScriptedRelay::new(false, None);
    let counter = relay.calls.clone();
    let (res_tx, mut res_rx) = mpsc::unbounded_channel();
    kiosko::app::spawn_submit_worker(relay, true, req_rx, res_tx);
    let payload = FormPayload {
        access_key: "k".into(),
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: "4075551234".into(),
        reason: "Well visit".into(),
        appointment: "New patient".into(),
        doctor: String::new(),
        message: String::new(),
        botcheck: String::new(),
    };
    req_tx.send(payload).expect("worker alive");
    let outcome = tokio::time::timeout(std::time::Duration::from_secs(2), res_rx.recv())
        .await
        .expect("worker responded")
        .expect("outcome delivered");
    assert!(outcome.ok);
    assert_eq!(counter.load(Ordering::SeqCst), 0, "dry-run must not touch the transport");
}
