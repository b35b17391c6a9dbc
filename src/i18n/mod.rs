//! Internationalization (i18n) module for Kiosko.
//!
//! Every visitor-facing string on every screen comes out of a bilingual
//! dictionary (English and Spanish) keyed by dot-notation paths such as
//! `about.mission.title`. The dictionary is built once at startup and never
//! mutates; the *active language* is ordinary session state on
//! [`crate::state::AppState`], initialized from the saved preference and
//! changed only when the visitor asks.
//!
//! # Lookup helpers
//!
//! - [`t`]: plain string lookup. Missing keys (or keys holding a list) come
//!   back as the key itself so a typo never takes a screen down.
//! - [`t_fmt`]: like [`t`] with `{name}`-style placeholder substitution.
//!   Placeholders without a matching parameter stay verbatim.
//! - [`t_list`]: list-typed lookup, empty on miss or type mismatch.
//! - [`t_services`]: structured service records for the services rail.
//!
//! Lookups fall back from the active language to English before degrading
//! to the key, and log misses at debug level only.
//!
//! # Switching languages
//!
//! [`set_language`] flips the session language, persists the choice through
//! [`crate::prefs::save_language`] so the next session starts in the same
//! language, and retitles the terminal window to match.

mod dictionary;

pub use dictionary::{Entry, ServiceEntry, lookup};

use crate::state::AppState;

/// Interface language offered by the kiosk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lang {
    /// English.
    En,
    /// Spanish.
    Es,
}

impl Lang {
    /// Two-letter code used in the config file and logs.
    pub const fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }

    /// Parse a config/CLI language code (case-insensitive).
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Lang::En),
            "es" | "spanish" | "espanol" | "español" => Some(Lang::Es),
            _ => None,
        }
    }

    /// Native-language display name shown in the language picker.
    pub const fn label(self) -> &'static str {
        match self {
            Lang::En => "English",
            Lang::Es => "Español",
        }
    }

    /// The other offered language.
    pub const fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Es,
            Lang::Es => Lang::En,
        }
    }
}

/// What: Get the string translation for a key in the session language.
///
/// Inputs:
/// - `app`: Application state carrying the active language
/// - `key`: Dot-notation key (e.g., "contact.title")
///
/// Output:
/// - Translated string; the key itself when absent or not string-typed.
///
/// Details:
/// - Falls back to English before degrading to the key.
/// - Never panics; misses log at debug level.
pub fn t(app: &AppState, key: &str) -> String {
    resolve_text(app.lang, key)
}

/// What: Get a translation with named `{placeholder}` substitution.
///
/// Inputs:
/// - `app`: Application state carrying the active language
/// - `key`: Dot-notation key
/// - `params`: Placeholder names and display values
///
/// Output:
/// - Formatted string; placeholders without a parameter stay verbatim.
pub fn t_fmt(app: &AppState, key: &str, params: &[(&str, &dyn std::fmt::Display)]) -> String {
    let mut out = t(app, key);
    for (name, value) in params {
        out = out.replace(&format!("{{{name}}}"), &value.to_string());
    }
    out
}

/// What: Get a list-typed translation.
///
/// Inputs:
/// - `app`: Application state carrying the active language
/// - `key`: Dot-notation key
///
/// Output:
/// - The list for the active language (or the English fallback); empty when
///   the key is absent or holds a plain string.
pub fn t_list(app: &AppState, key: &str) -> Vec<String> {
    for lang in [app.lang, Lang::En] {
        if let Some(Entry::List(items)) = lookup(lang, key) {
            return items.iter().map(ToString::to_string).collect();
        }
    }
    tracing::debug!(key, "missing list translation key");
    Vec::new()
}

/// What: Get the structured service records behind a key.
///
/// Inputs:
/// - `app`: Application state carrying the active language
/// - `key`: Dot-notation key (normally "services.items")
///
/// Output:
/// - Service records in display order; empty when absent or mistyped.
pub fn t_services(app: &AppState, key: &str) -> Vec<ServiceEntry> {
    for lang in [app.lang, Lang::En] {
        if let Some(Entry::Services(items)) = lookup(lang, key) {
            return items.to_vec();
        }
    }
    tracing::debug!(key, "missing service translation key");
    Vec::new()
}

/// Resolve a string entry with the English fallback chain.
fn resolve_text(lang: Lang, key: &str) -> String {
    match lookup(lang, key) {
        Some(Entry::Text(s)) => return (*s).to_string(),
        Some(_) => {
            tracing::debug!(key, lang = lang.code(), "translation key is not string-typed");
            return key.to_string();
        }
        None => {}
    }
    if lang != Lang::En
        && let Some(Entry::Text(s)) = lookup(Lang::En, key)
    {
        tracing::debug!(key, "translation missing in active language; using English");
        return (*s).to_string();
    }
    tracing::debug!(key, "missing translation key; returning key as-is");
    key.to_string()
}

/// What: Switch the session language and persist the choice.
///
/// Inputs:
/// - `app`: Application state to update
/// - `lang`: Newly selected language
///
/// Output: none.
///
/// Details:
/// - Saves the preference so later sessions default to it.
/// - Retitles the terminal window (skipped in headless runs) so the window
///   manager reflects the active language, mirroring a document language tag.
pub fn set_language(app: &mut AppState, lang: Lang) {
    if app.lang == lang {
        return;
    }
    app.lang = lang;
    crate::prefs::save_language(lang);
    tracing::info!(lang = lang.code(), "interface language switched");
    if std::env::var("KIOSKO_TEST_HEADLESS").ok().as_deref() != Some("1") {
        let title = format!("{} · {}", t(app, "app.title"), lang.label());
        let _ = crossterm::execute!(std::io::stdout(), crossterm::terminal::SetTitle(title));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in(lang: Lang) -> AppState {
        let mut app = AppState::default();
        app.lang = lang;
        app
    }

    #[test]
    /// What: Missing keys degrade to the key itself and the empty list
    ///
    /// - Input: A key present in neither language
    /// - Output: t returns the key; t_list returns []
    fn i18n_missing_key_fallbacks() {
        let app = app_in(Lang::Es);
        assert_eq!(t(&app, "no.such.key"), "no.such.key");
        assert!(t_list(&app, "no.such.key").is_empty());
        assert!(t_services(&app, "no.such.key").is_empty());
    }

    #[test]
    /// What: Type mismatches never panic
    ///
    /// - Input: A list-typed key read through t; a string key read through t_list
    /// - Output: Key echo and empty list respectively
    fn i18n_type_mismatch_is_safe() {
        let app = app_in(Lang::En);
        assert_eq!(t(&app, "about.values"), "about.values");
        assert!(t_list(&app, "about.title").is_empty());
    }

    #[test]
    /// What: Named placeholder substitution
    ///
    /// - Input: contact.success.body with a name parameter; one unresolved placeholder
    /// - Output: Placeholder replaced; unknown placeholder untouched
    fn i18n_format_named_placeholders() {
        let app = app_in(Lang::En);
        let s = t_fmt(&app, "contact.success.body", &[("name", &"Jane")]);
        assert!(s.contains("Jane"));
        assert!(!s.contains("{name}"));
        let raw = t_fmt(&app, "contact.success.body", &[("other", &"x")]);
        assert!(raw.contains("{name}"));
    }

    #[test]
    /// What: Spanish lookups differ from English and both resolve
    ///
    /// - Input: The same key under each language
    /// - Output: Distinct, non-key strings
    fn i18n_both_languages_resolve() {
        let en = t(&app_in(Lang::En), "nav.services");
        let es = t(&app_in(Lang::Es), "nav.services");
        assert_ne!(en, "nav.services");
        assert_ne!(es, "nav.services");
        assert_ne!(en, es);
    }

    #[test]
    /// What: Language code parsing accepts aliases
    ///
    /// - Input: Mixed-case and native spellings
    /// - Output: Correct variants; None for unknown
    fn i18n_lang_codes() {
        assert_eq!(Lang::from_code("EN"), Some(Lang::En));
        assert_eq!(Lang::from_code("Español"), Some(Lang::Es));
        assert_eq!(Lang::from_code("fr"), None);
        assert_eq!(Lang::Es.toggled(), Lang::En);
    }

    #[test]
    /// What: Service records resolve with full structure
    ///
    /// - Input: services.items in Spanish
    /// - Output: Non-empty records with keys and tags
    fn i18n_service_records() {
        let items = t_services(&app_in(Lang::Es), "services.items");
        assert!(!items.is_empty());
        assert!(items.iter().all(|s| !s.key.is_empty() && !s.title.is_empty()));
        let en_items = t_services(&app_in(Lang::En), "services.items");
        assert_eq!(items.len(), en_items.len());
        // Stable keys are shared across languages (the routing contract).
        for (a, b) in items.iter().zip(en_items.iter()) {
            assert_eq!(a.key, b.key);
        }
    }
}
