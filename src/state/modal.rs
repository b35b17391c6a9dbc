//! Modal overlays that float above whichever screen is active.

use crate::i18n::Lang;

/// State of the insurance lookup modal.
#[derive(Debug, Clone, Default)]
pub struct InsuranceLookup {
    /// Free-text plan query typed so far.
    pub query: String,
    /// Index into the provider dropdown; `None` means "all providers".
    pub provider_idx: Option<usize>,
}

impl InsuranceLookup {
    /// Display name of the scoped provider, when one is selected.
    pub fn provider_name(&self) -> Option<&'static str> {
        self.provider_idx
            .and_then(|i| crate::insurance::PROVIDERS.get(i))
            .map(|p| p.name)
    }

    /// Cycle the provider dropdown: all -> first -> ... -> last -> all.
    pub fn cycle_provider(&mut self) {
        let len = crate::insurance::PROVIDERS.len();
        self.provider_idx = match self.provider_idx {
            None => Some(0),
            Some(i) if i + 1 < len => Some(i + 1),
            Some(_) => None,
        };
    }

    /// Run the plan search for the current dropdown and query.
    pub fn results(&self) -> Vec<String> {
        crate::insurance::search(self.provider_name(), &self.query)
    }
}

/// Which modal overlay is open, if any.
#[derive(Debug, Clone, Default)]
pub enum Modal {
    /// No overlay; keys go to the active screen.
    #[default]
    None,
    /// Insurance plan lookup.
    Insurance(InsuranceLookup),
    /// Language picker.
    Language {
        /// Currently highlighted choice.
        selected: Lang,
    },
    /// A dismissible message (relay errors and the like).
    Alert {
        /// Message text, already translated.
        message: String,
    },
}

impl Modal {
    /// Whether any overlay is open.
    pub const fn is_open(&self) -> bool {
        !matches!(self, Modal::None)
    }
}
