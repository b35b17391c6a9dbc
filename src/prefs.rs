//! User preference file for Kiosko.
//!
//! Preferences live in a single `kiosko.conf` under the config directory as
//! plain `key = value` lines with `#`/`//` comments. The visitor-facing
//! choices (interface language, reduced motion) are rewritten in place so
//! user comments survive; everything else is read-only configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Lang;

/// Default contents written when no config file exists yet.
pub(crate) const SKELETON_CONFIG_CONTENT: &str = "# Kiosko configuration\n\
#\n\
# language: interface language, \"en\" or \"es\". Saved automatically when the\n\
# visitor switches languages from the kiosk.\n\
language = en\n\
\n\
# reduced_motion: skip entrance animations and carousel autoplay.\n\
reduced_motion = false\n\
\n\
# autoplay_secs: seconds between automatic hero banner advances (0 disables).\n\
autoplay_secs = 6\n\
\n\
# show_footer: show the keybind hint bar at the bottom of every screen.\n\
show_footer = true\n\
\n\
# relay_access_key: access key for the appointment form relay service.\n\
# Prefer the KIOSKO_RELAY_ACCESS_KEY environment variable in deployments.\n\
# relay_access_key = \n";

/// Parsed user settings with defaults for anything missing.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Interface language restored from the previous session.
    pub language: Lang,
    /// Skip entrance animations and autoplay when set.
    pub reduced_motion: bool,
    /// Seconds between automatic hero advances; `0` disables autoplay.
    pub autoplay_secs: u64,
    /// Show the keybind hint footer.
    pub show_footer: bool,
    /// Access key for the form relay, unless supplied via environment.
    pub relay_access_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Lang::En,
            reduced_motion: false,
            autoplay_secs: 6,
            show_footer: true,
            relay_access_key: None,
        }
    }
}

/// Explicit config-dir override used by tests and packaging.
fn override_dir() -> Option<PathBuf> {
    env::var("KIOSKO_CONFIG_DIR")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from)
}

/// Config directory for Kiosko (ensured to exist).
///
/// Priority: `KIOSKO_CONFIG_DIR` override, then `$HOME/.config/kiosko`,
/// then `$XDG_CONFIG_HOME/kiosko`.
pub fn config_dir() -> PathBuf {
    if let Some(dir) = override_dir() {
        let _ = fs::create_dir_all(&dir);
        return dir;
    }
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("kiosko");
        if fs::create_dir_all(&dir).is_ok() {
            return dir;
        }
    }
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let dir = base.join("kiosko");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config (ensured to exist).
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = fs::create_dir_all(&dir);
    dir
}

/// Path of the settings file, created from the skeleton when missing.
pub fn settings_path() -> PathBuf {
    let p = config_dir().join("kiosko.conf");
    if !p.is_file() {
        let _ = fs::write(&p, SKELETON_CONFIG_CONTENT);
    }
    p
}

/// Drop an inline `#` or `//` comment from a value, keeping quoted text intact.
fn strip_inline_comment(val: &str) -> &str {
    let mut end = val.len();
    for (i, ch) in val.char_indices() {
        if ch == '#' {
            end = i;
            break;
        }
        if ch == '/' && val[i..].starts_with("//") {
            end = i;
            break;
        }
    }
    val[..end].trim()
}

/// Parse a boolean config value the permissive way.
fn parse_bool(val: &str) -> bool {
    let lv = val.to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

/// Load user settings from the config file.
/// Falls back to [`Settings::default`] when missing or invalid.
pub fn settings() -> Settings {
    let mut out = Settings::default();
    let p = settings_path();
    let Ok(content) = fs::read_to_string(&p) else {
        return out;
    };
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_val)) = trimmed.split_once('=') else {
            continue;
        };
        let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
        let val = strip_inline_comment(raw_val.trim());
        match key.as_str() {
            "language" | "lang" => {
                if let Some(lang) = Lang::from_code(val) {
                    out.language = lang;
                } else {
                    tracing::warn!(value = %val, "unrecognized language in kiosko.conf; keeping default");
                }
            }
            "reduced_motion" => out.reduced_motion = parse_bool(val),
            "autoplay_secs" | "autoplay" => {
                if let Ok(v) = val.parse::<u64>() {
                    out.autoplay_secs = v;
                }
            }
            "show_footer" => out.show_footer = parse_bool(val),
            "relay_access_key" => {
                if !val.is_empty() {
                    out.relay_access_key = Some(val.to_string());
                }
            }
            _ => {}
        }
    }
    out
}

/// Rewrite one settings key in place, appending it when absent.
///
/// Inputs:
/// - `aliases`: normalized key spellings that should all be replaced
/// - `rendered`: full `key = value` line to write
///
/// Output: none; failures are logged and otherwise ignored so a read-only
/// config directory never breaks the session.
fn save_key(aliases: &[&str], rendered: &str) {
    let p = settings_path();
    let mut lines: Vec<String> = match fs::read_to_string(&p) {
        Ok(content) => content.lines().map(ToString::to_string).collect(),
        Err(_) => Vec::new(),
    };
    let mut replaced = false;
    for line in &mut lines {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with("//") {
            continue;
        }
        if let Some(eq) = trimmed.find('=') {
            let (kraw, _) = trimmed.split_at(eq);
            let key = kraw.trim().to_lowercase().replace(['.', '-', ' '], "_");
            if aliases.contains(&key.as_str()) {
                *line = rendered.to_string();
                replaced = true;
            }
        }
    }
    if !replaced {
        lines.push(rendered.to_string());
    }
    let body = lines.join("\n") + "\n";
    if let Err(e) = fs::write(&p, body) {
        tracing::warn!(error = %e, path = %p.display(), "failed to persist setting");
    }
}

/// Persist the visitor's language choice so later sessions default to it.
pub fn save_language(lang: Lang) {
    save_key(&["language", "lang"], &format!("language = {}", lang.code()));
}

/// Persist the reduced-motion preference.
pub fn save_reduced_motion(on: bool) {
    save_key(&["reduced_motion"], &format!("reduced_motion = {on}"));
}

#[cfg(test)]
static TEST_MUTEX: std::sync::OnceLock<std::sync::Mutex<()>> = std::sync::OnceLock::new();

#[cfg(test)]
/// What: Provide a process-wide mutex to serialize env-mutating tests in this module.
///
/// Inputs:
/// - None
///
/// Output:
/// - Shared reference to a lazily-initialized `Mutex<()>`.
pub(crate) fn test_mutex() -> &'static std::sync::Mutex<()> {
    TEST_MUTEX.get_or_init(|| std::sync::Mutex::new(()))
}
