use std::sync::atomic::Ordering;
use std::time::Instant;

use ratatui::{Terminal, backend::CrosstermBackend};

use crate::contact::HttpRelay;
use crate::i18n::Lang;
use crate::state::{AppState, Screen};

use super::terminal::{restore_terminal, setup_terminal};

mod channels;
mod event_loop;
mod tick;
mod workers;

use channels::Channels;
use event_loop::run_event_loop;
use workers::{spawn_event_thread, spawn_tick_task};
pub use workers::spawn_submit_worker;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Run the kiosk end-to-end: initialize the terminal and state,
/// spawn the input thread, tick timer, and submit worker, drive the event
/// loop, and restore the terminal on exit.
///
/// Inputs:
/// - `args`: parsed command line (session overrides for language, screen,
///   motion, and dry-run)
///
/// Output:
/// - `Ok(())` when the UI exits cleanly; `Err` on unrecoverable terminal
///   errors.
///
/// Details:
/// - Settings come from `kiosko.conf` (skeleton written on first run);
///   CLI flags override for the session without being persisted.
/// - `KIOSKO_TEST_HEADLESS=1` bypasses raw-mode setup and input polling
///   so smoke tests can drive the runtime.
pub async fn run(args: &crate::args::Args) -> Result<()> {
    let headless = std::env::var("KIOSKO_TEST_HEADLESS").ok().as_deref() == Some("1");
    if !headless {
        setup_terminal()?;
    }
    let mut terminal = if headless {
        None
    } else {
        Some(Terminal::new(CrosstermBackend::new(std::io::stdout()))?)
    };

    let mut app = AppState::default();
    let mut settings = crate::prefs::settings();
    if let Some(lang) = args.lang.as_deref().and_then(Lang::from_code) {
        settings.language = lang;
    }
    if args.reduced_motion {
        settings.reduced_motion = true;
    }
    app.apply_settings(&settings);
    app.dry_run = args.dry_run;
    if let Some(screen) = args.screen.as_deref().and_then(Screen::from_name) {
        app.screen = screen;
    }
    let now = Instant::now();
    app.hero_seq.start(now, app.reduced_motion);
    app.autoplay.arm(now);
    tracing::info!(
        lang = app.lang.code(),
        dry_run = app.dry_run,
        reduced_motion = app.reduced_motion,
        "kiosk starting"
    );

    let mut channels = Channels::new();
    if !headless {
        spawn_event_thread(
            channels.event_tx.clone(),
            channels.event_thread_cancelled.clone(),
        );
    }
    spawn_tick_task(channels.tick_tx.clone());
    if let Some(req_rx) = channels.submit_req_rx.take() {
        spawn_submit_worker(
            HttpRelay::default(),
            app.dry_run,
            req_rx,
            channels.submit_res_tx.clone(),
        );
    }

    run_event_loop(&mut terminal, &mut app, &mut channels).await;

    channels.event_thread_cancelled.store(true, Ordering::Relaxed);
    if !headless {
        restore_terminal()?;
    }
    Ok(())
}
