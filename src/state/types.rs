//! Core value types used by Kiosko state.

/// Which screen the kiosk is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen: hero banner, mission, services preview.
    Home,
    /// About the clinic, values, and the animated statistics.
    About,
    /// The services rail with its detail panel.
    Services,
    /// Office photo strip.
    Gallery,
    /// Appointment request form.
    Contact,
    /// Provider directory and profiles.
    Providers,
    /// Placeholder for pages still being written.
    ComingSoon,
}

impl Screen {
    /// Screens in navigation order, as shown in the top bar.
    pub const ALL: [Screen; 7] = [
        Screen::Home,
        Screen::About,
        Screen::Services,
        Screen::Gallery,
        Screen::Contact,
        Screen::Providers,
        Screen::ComingSoon,
    ];

    /// Dictionary key of the navigation label.
    pub const fn nav_key(self) -> &'static str {
        match self {
            Screen::Home => "nav.home",
            Screen::About => "nav.about",
            Screen::Services => "nav.services",
            Screen::Gallery => "nav.gallery",
            Screen::Contact => "nav.contact",
            Screen::Providers => "nav.providers",
            Screen::ComingSoon => "soon.title",
        }
    }

    /// Dictionary key of the footer hint line for this screen.
    pub const fn footer_key(self) -> &'static str {
        match self {
            Screen::Services => "footer.services",
            Screen::Gallery => "footer.gallery",
            Screen::Contact => "footer.contact",
            _ => "footer.global",
        }
    }

    /// Parse a CLI/config screen name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "home" | "inicio" => Some(Screen::Home),
            "about" | "nosotros" => Some(Screen::About),
            "services" | "servicios" => Some(Screen::Services),
            "gallery" | "galeria" | "galería" => Some(Screen::Gallery),
            "contact" | "contacto" => Some(Screen::Contact),
            "providers" | "medicos" | "médicos" => Some(Screen::Providers),
            _ => None,
        }
    }
}

/// Why the patient wants to come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisitReason {
    /// Routine wellness visit.
    WellVisit,
    /// Something hurts today.
    SickVisit,
    /// Immunization only.
    Vaccine,
    /// Anything else.
    Other,
}

impl VisitReason {
    /// Selectable reasons in the order the form cycles through them.
    pub const ALL: [VisitReason; 4] = [
        VisitReason::WellVisit,
        VisitReason::SickVisit,
        VisitReason::Vaccine,
        VisitReason::Other,
    ];

    /// Index into the `contact.reasons` dictionary list.
    pub const fn label_index(self) -> usize {
        match self {
            VisitReason::WellVisit => 0,
            VisitReason::SickVisit => 1,
            VisitReason::Vaccine => 2,
            VisitReason::Other => 3,
        }
    }

    /// Canonical value sent to the form relay, independent of the
    /// interface language.
    pub const fn form_value(self) -> &'static str {
        match self {
            VisitReason::WellVisit => "Well visit",
            VisitReason::SickVisit => "Sick visit",
            VisitReason::Vaccine => "Vaccine",
            VisitReason::Other => "Other",
        }
    }
}

/// New patient or follow-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApptKind {
    /// First visit with us.
    #[default]
    New,
    /// Returning patient.
    FollowUp,
}

impl ApptKind {
    /// Index into the `contact.appointments` dictionary list.
    pub const fn label_index(self) -> usize {
        match self {
            ApptKind::New => 0,
            ApptKind::FollowUp => 1,
        }
    }

    /// Canonical value sent to the form relay.
    pub const fn form_value(self) -> &'static str {
        match self {
            ApptKind::New => "New patient",
            ApptKind::FollowUp => "Follow-up",
        }
    }

    /// The other kind (the form cycles with left/right).
    pub const fn toggled(self) -> Self {
        match self {
            ApptKind::New => ApptKind::FollowUp,
            ApptKind::FollowUp => ApptKind::New,
        }
    }
}

/// Which contact-form field holds the caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    /// Patient name input.
    Name,
    /// Email input.
    Email,
    /// Phone input.
    Phone,
    /// Visit reason selector.
    Reason,
    /// Appointment type selector.
    Appointment,
    /// Preferred doctor input.
    Doctor,
    /// Free-text message input.
    Message,
    /// The send button.
    Submit,
}

impl ContactField {
    /// Fields in tab order.
    pub const ORDER: [ContactField; 8] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Reason,
        ContactField::Appointment,
        ContactField::Doctor,
        ContactField::Message,
        ContactField::Submit,
    ];

    /// Next field in tab order, wrapping.
    pub fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    /// Previous field in tab order, wrapping.
    pub fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Where the appointment request stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    /// Form is editable.
    Idle,
    /// One request is in flight; the send control is disabled, nothing else.
    Submitting,
    /// The relay accepted the request; the success panel replaces the form.
    Success {
        /// Patient name echoed in the thank-you copy.
        name: String,
    },
    /// The relay rejected the request or was unreachable.
    Failed {
        /// Human-readable reason shown in the error banner.
        message: String,
    },
}

/// Outcome message sent back from the submit worker.
#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    /// Whether the relay reported success.
    pub ok: bool,
    /// Remote-supplied detail, when the relay sent one.
    pub message: Option<String>,
    /// Patient name from the submitted form (for the success copy).
    pub patient: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Screen name parsing accepts both languages
    ///
    /// - Input: English and Spanish names, mixed case; unknown name
    /// - Output: Correct variants; None for unknown
    fn state_screen_from_name() {
        assert_eq!(Screen::from_name("Home"), Some(Screen::Home));
        assert_eq!(Screen::from_name("galería"), Some(Screen::Gallery));
        assert_eq!(Screen::from_name("SERVICES"), Some(Screen::Services));
        assert_eq!(Screen::from_name("nope"), None);
    }

    #[test]
    /// What: Contact field tab order wraps both directions
    ///
    /// - Input: next() from Submit, prev() from Name
    /// - Output: Wraps to Name and Submit respectively
    fn state_contact_field_order_wraps() {
        assert_eq!(ContactField::Submit.next(), ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Submit);
        let mut f = ContactField::Name;
        for _ in 0..ContactField::ORDER.len() {
            f = f.next();
        }
        assert_eq!(f, ContactField::Name);
    }

    #[test]
    /// What: Relay form values are language-independent English
    ///
    /// - Input: Every reason and appointment kind
    /// - Output: Stable canonical strings
    fn state_form_values_stable() {
        assert_eq!(VisitReason::WellVisit.form_value(), "Well visit");
        assert_eq!(VisitReason::Vaccine.form_value(), "Vaccine");
        assert_eq!(ApptKind::FollowUp.form_value(), "Follow-up");
        assert_eq!(ApptKind::New.toggled(), ApptKind::FollowUp);
    }
}
