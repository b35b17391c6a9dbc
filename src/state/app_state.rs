//! The one mutable application state owned by the event loop.

use std::time::Duration;

use crate::carousel::{Autoplay, Carousel};
use crate::contact::{ContactForm, validate::FieldError};
use crate::i18n::{self, Lang};
use crate::reveal::{CountUp, Reveal, RevealConfig, StagedReveal};

use super::modal::Modal;
use super::types::{ContactField, Screen, SubmitStatus};

/// Per-side clone padding used by the services rail.
const SERVICES_CLONES: usize = 4;
/// Per-side clone padding used by the gallery strip.
const GALLERY_CLONES: usize = 7;
/// Per-side clone padding used by the hero banner.
const HERO_CLONES: usize = 1;

/// A section whose entrance animation is tracked across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Home: mission paragraph.
    Mission,
    /// Home: services preview row.
    ServicesPreview,
    /// About: history paragraph.
    AboutBody,
    /// About: values list.
    AboutValues,
    /// About: the animated statistics row.
    AboutStats,
}

/// Full UI state for a session.
pub struct AppState {
    /// Active interface language.
    pub lang: Lang,
    /// Screen currently shown.
    pub screen: Screen,
    /// Open modal overlay, if any.
    pub modal: Modal,
    /// Honor the reduced-motion preference everywhere.
    pub reduced_motion: bool,
    /// Show the keybind footer.
    pub show_footer: bool,
    /// Never call the relay; submissions succeed locally.
    pub dry_run: bool,
    /// Resolved form-relay credential for this session.
    pub relay_access_key: String,

    /// First page row currently visible (vertical scroll).
    pub scroll_top: u16,
    /// Total content rows of the active screen, set during render.
    pub page_rows: u16,
    /// Viewport rows available to content, set during render.
    pub content_rows: u16,
    /// Section geometry recorded during render: (section, top row, height).
    pub sections: Vec<(Section, u16, u16)>,

    /// Staged hero entrance.
    pub hero_seq: StagedReveal,
    /// Rotating hero banner rail.
    pub hero_rail: Carousel,
    /// Hero banner autoplay timer.
    pub autoplay: Autoplay,

    /// Home mission entrance.
    pub reveal_mission: Reveal,
    /// Home services-preview entrance.
    pub reveal_services_preview: Reveal,
    /// About history entrance.
    pub reveal_about: Reveal,
    /// About values entrance (re-triggers when scrolled away).
    pub reveal_values: Reveal,
    /// About statistics entrance; starts the counters.
    pub reveal_stats: Reveal,
    /// Animated statistics: years, patients, providers.
    pub stats: [CountUp; 3],

    /// The services rail.
    pub services_rail: Carousel,
    /// Open service detail panel (stable service key).
    pub services_detail: Option<String>,

    /// The gallery photo strip.
    pub gallery_rail: Carousel,

    /// The appointment request being edited.
    pub form: ContactForm,
    /// Contact field holding the caret.
    pub contact_field: ContactField,
    /// Submission lifecycle.
    pub submit_status: SubmitStatus,
    /// Inline validation message currently shown.
    pub form_error: Option<FieldError>,

    /// Highlighted provider row.
    pub provider_selected: usize,
    /// Open provider profile (stable id).
    pub provider_detail: Option<&'static str>,

    /// Transient status toast shown in the footer.
    pub status: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let banners = list_len(Lang::En, "home.banner.titles");
        let services = services_len(Lang::En);
        let photos = list_len(Lang::En, "gallery.captions");
        Self {
            lang: Lang::En,
            screen: Screen::Home,
            modal: Modal::None,
            reduced_motion: false,
            show_footer: true,
            dry_run: false,
            relay_access_key: String::new(),
            scroll_top: 0,
            page_rows: 0,
            content_rows: 0,
            sections: Vec::new(),
            hero_seq: StagedReveal::new(Duration::from_millis(220)),
            hero_rail: Carousel::new(banners, HERO_CLONES),
            autoplay: Autoplay::new(6),
            reveal_mission: Reveal::defaults(),
            reveal_services_preview: Reveal::new(RevealConfig {
                delay: Duration::from_millis(150),
                ..RevealConfig::default()
            }),
            reveal_about: Reveal::defaults(),
            reveal_values: Reveal::new(RevealConfig {
                once: false,
                ..RevealConfig::default()
            }),
            reveal_stats: Reveal::defaults(),
            stats: [
                CountUp::new(27, Duration::from_millis(1200)),
                CountUp::new(18_500, Duration::from_millis(1200)),
                CountUp::new(2, Duration::from_millis(1200)),
            ],
            services_rail: Carousel::new(services, SERVICES_CLONES),
            services_detail: None,
            gallery_rail: Carousel::new(photos, GALLERY_CLONES),
            form: ContactForm::default(),
            contact_field: ContactField::Name,
            submit_status: SubmitStatus::Idle,
            form_error: None,
            provider_selected: 0,
            provider_detail: None,
            status: None,
        }
    }
}

impl AppState {
    /// Apply loaded settings to a fresh state.
    pub fn apply_settings(&mut self, settings: &crate::prefs::Settings) {
        self.lang = settings.language;
        self.relay_access_key = crate::contact::resolve_access_key(settings);
        self.reduced_motion = settings.reduced_motion;
        self.show_footer = settings.show_footer;
        self.autoplay = Autoplay::new(if settings.reduced_motion {
            0
        } else {
            settings.autoplay_secs
        });
        for rail in [
            &mut self.hero_rail,
            &mut self.services_rail,
            &mut self.gallery_rail,
        ] {
            rail.set_reduced_motion(settings.reduced_motion);
        }
        self.reveal_mission.set_reduced_motion(settings.reduced_motion);
        self.reveal_services_preview
            .set_reduced_motion(settings.reduced_motion);
        self.reveal_about.set_reduced_motion(settings.reduced_motion);
        self.reveal_values.set_reduced_motion(settings.reduced_motion);
        self.reveal_stats.set_reduced_motion(settings.reduced_motion);
    }

    /// Switch screens, resetting scroll and per-screen transients.
    pub fn go_to_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        self.screen = screen;
        self.scroll_top = 0;
        self.sections.clear();
        self.status = None;
        if screen != Screen::Services {
            self.services_detail = None;
        }
        if screen != Screen::Providers {
            self.provider_detail = None;
        }
    }

    /// Scroll the page vertically, clamped to the rendered content.
    pub fn scroll_page(&mut self, delta: i32) {
        let max = self.page_rows.saturating_sub(self.content_rows);
        let next = i32::from(self.scroll_top) + delta;
        self.scroll_top = next.clamp(0, i32::from(max)) as u16;
    }

    /// Record one section's geometry for this frame's reveal checks.
    pub fn record_section(&mut self, section: Section, top: u16, height: u16) {
        if let Some(slot) = self.sections.iter_mut().find(|(s, _, _)| *s == section) {
            slot.1 = top;
            slot.2 = height;
        } else {
            self.sections.push((section, top, height));
        }
    }

    /// The rail the visitor is currently steering, if the active screen has
    /// one.
    pub fn active_rail(&mut self) -> Option<&mut Carousel> {
        match self.screen {
            Screen::Home => Some(&mut self.hero_rail),
            Screen::Services => Some(&mut self.services_rail),
            Screen::Gallery => Some(&mut self.gallery_rail),
            _ => None,
        }
    }
}

fn list_len(lang: Lang, key: &str) -> usize {
    match i18n::lookup(lang, key) {
        Some(i18n::Entry::List(items)) => items.len(),
        _ => 1,
    }
}

fn services_len(lang: Lang) -> usize {
    match i18n::lookup(lang, "services.items") {
        Some(i18n::Entry::Services(items)) => items.len(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Defaults wire the rails to the dictionary lengths
    ///
    /// - Input: AppState::default()
    /// - Output: Hero 3 banners, services 6 cards, gallery 8 photos
    fn app_state_default_rail_sizes() {
        let app = AppState::default();
        assert_eq!(app.hero_rail.rail.n(), 3);
        assert_eq!(app.services_rail.rail.n(), 6);
        assert_eq!(app.gallery_rail.rail.n(), 8);
    }

    #[test]
    /// What: Screen switches reset scroll and close foreign panels
    ///
    /// - Input: Open service detail, switch to About
    /// - Output: Scroll at 0, detail closed
    fn app_state_screen_switch_resets() {
        let mut app = AppState::default();
        app.services_detail = Some("pediatrics".into());
        app.scroll_top = 9;
        app.go_to_screen(Screen::About);
        assert_eq!(app.scroll_top, 0);
        assert!(app.services_detail.is_none());
    }

    #[test]
    /// What: Page scroll clamps to rendered content
    ///
    /// - Input: 40 content rows in a 24-row viewport
    /// - Output: Scroll stays within [0, 16]
    fn app_state_scroll_clamps() {
        let mut app = AppState::default();
        app.page_rows = 40;
        app.content_rows = 24;
        app.scroll_page(100);
        assert_eq!(app.scroll_top, 16);
        app.scroll_page(-100);
        assert_eq!(app.scroll_top, 0);
    }

    #[test]
    /// What: Reduced-motion settings disable autoplay
    ///
    /// - Input: Settings with reduced_motion = true and autoplay 6s
    /// - Output: Autoplay disabled
    fn app_state_reduced_motion_disables_autoplay() {
        let mut app = AppState::default();
        let settings = crate::prefs::Settings {
            reduced_motion: true,
            ..crate::prefs::Settings::default()
        };
        app.apply_settings(&settings);
        assert!(!app.autoplay.enabled());
    }
}
