//! The per-frame tick: advances every animation exactly once per frame.

use std::time::Instant;

use crate::reveal::visible_fraction;
use crate::state::{AppState, Screen, Section};

/// What: Advance one animation frame.
///
/// Inputs:
/// - `app`: application state
///
/// Output: none.
///
/// Details:
/// - Drives the hero staged entrance, the three rails (including deferred
///   teleport releases), the autoplay timer, and every reveal's visibility
///   check against the section geometry recorded by the last render. Each
///   check runs at most once per frame by construction.
pub fn handle_tick(app: &mut AppState) {
    let now = Instant::now();
    app.hero_seq.tick(now);
    app.hero_rail.tick();
    app.services_rail.tick();
    app.gallery_rail.tick();

    if app.screen == Screen::Home && app.autoplay.due(now) {
        let n = app.hero_rail.rail.n();
        let next = (app.hero_rail.current() + 1) % n;
        app.hero_rail.go_to(next);
    }

    let sections = app.sections.clone();
    for (section, top, height) in sections {
        let reveal = match section {
            Section::Mission => &mut app.reveal_mission,
            Section::ServicesPreview => &mut app.reveal_services_preview,
            Section::AboutBody => &mut app.reveal_about,
            Section::AboutValues => &mut app.reveal_values,
            Section::AboutStats => &mut app.reveal_stats,
        };
        let frac = visible_fraction(
            top,
            height,
            app.scroll_top,
            app.content_rows,
            reveal.margin(),
        );
        reveal.observe(now, frac);
    }

    if app.reveal_stats.is_started() {
        let reduced = app.reduced_motion;
        for stat in &mut app.stats {
            stat.start(now, reduced);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Scrolling a recorded section into view reveals it
    ///
    /// - Input: About sections recorded; ticks before and after scrolling
    /// - Output: Hidden below the fold, started once visible, counters run
    fn tick_reveals_sections_on_scroll() {
        let mut app = AppState::default();
        app.go_to_screen(Screen::About);
        app.content_rows = 20;
        app.page_rows = 32;
        app.record_section(Section::AboutBody, 0, 8);
        app.record_section(Section::AboutStats, 25, 6);
        handle_tick(&mut app);
        assert!(app.reveal_about.is_started());
        assert!(!app.reveal_stats.is_started());
        // Scroll the statistics into the viewport.
        app.scroll_page(12);
        handle_tick(&mut app);
        assert!(app.reveal_stats.is_started());
        let now = Instant::now() + std::time::Duration::from_secs(5);
        assert_eq!(app.stats[0].value(now), 27);
    }

    #[test]
    /// What: Autoplay advances the hero only on the home screen
    ///
    /// - Input: Armed zero-ready timer off-screen and on-screen
    /// - Output: Index advances only while Home is active
    fn tick_autoplay_scoped_to_home() {
        let mut app = AppState::default();
        app.hero_rail.layout(60.0, 2.0, 80.0);
        app.hero_rail.set_reduced_motion(true);
        app.autoplay = crate::carousel::Autoplay::new(1);
        let past = Instant::now()
            .checked_sub(std::time::Duration::from_secs(5))
            .expect("monotonic clock is far from its epoch");
        app.autoplay.arm(past);
        app.go_to_screen(Screen::About);
        handle_tick(&mut app);
        assert_eq!(app.hero_rail.current(), 0);
        app.go_to_screen(Screen::Home);
        handle_tick(&mut app);
        assert_eq!(app.hero_rail.current(), 1);
    }
}
