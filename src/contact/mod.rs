//! Appointment request form: the transient record, its validation rules,
//! and the form-relay submission.

pub mod relay;
pub mod validate;

pub use relay::{FormPayload, HttpRelay, RelayResponse, RelayTransport, resolve_access_key};
pub use validate::{FieldError, Rejection, validate};

use crate::state::{ApptKind, ContactField, VisitReason};

/// The appointment request being edited.
///
/// Created when the contact screen opens, validated client-side, sent once
/// per submit, and reset to defaults on success. The `website` field is a
/// honeypot: it is never rendered as an input, so only automation fills it.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    /// Patient name.
    pub name: String,
    /// Reply email address.
    pub email: String,
    /// Callback phone number, free-form.
    pub phone: String,
    /// Reason for the visit; unset until the visitor picks one.
    pub reason: Option<VisitReason>,
    /// New patient or follow-up.
    pub appointment: ApptKind,
    /// Preferred doctor, optional free text.
    pub doctor: String,
    /// Optional message.
    pub message: String,
    /// Honeypot. Must stay empty; a non-empty value marks a bot.
    pub website: String,
}

impl ContactForm {
    /// Clear every field back to its initial default.
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }

    /// Mutable access to the text buffer behind a field, when it has one.
    /// Selector fields (reason, appointment) and the submit button return
    /// `None`.
    pub fn text_field_mut(&mut self, field: ContactField) -> Option<&mut String> {
        match field {
            ContactField::Name => Some(&mut self.name),
            ContactField::Email => Some(&mut self.email),
            ContactField::Phone => Some(&mut self.phone),
            ContactField::Doctor => Some(&mut self.doctor),
            ContactField::Message => Some(&mut self.message),
            ContactField::Reason | ContactField::Appointment | ContactField::Submit => None,
        }
    }

    /// Read access to the text buffer behind a field, when it has one.
    pub fn text_field(&self, field: ContactField) -> Option<&String> {
        match field {
            ContactField::Name => Some(&self.name),
            ContactField::Email => Some(&self.email),
            ContactField::Phone => Some(&self.phone),
            ContactField::Doctor => Some(&self.doctor),
            ContactField::Message => Some(&self.message),
            ContactField::Reason | ContactField::Appointment | ContactField::Submit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Reset returns every field to defaults
    ///
    /// - Input: A fully-populated form
    /// - Output: All fields cleared, appointment back to New
    fn contact_form_reset() {
        let mut form = ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "4075551234".into(),
            reason: Some(VisitReason::WellVisit),
            appointment: ApptKind::FollowUp,
            doctor: "Dr. Acosta".into(),
            message: "hola".into(),
            website: String::new(),
        };
        form.reset();
        assert!(form.name.is_empty());
        assert!(form.reason.is_none());
        assert_eq!(form.appointment, ApptKind::New);
    }

    #[test]
    /// What: Text-field access matches the field map
    ///
    /// - Input: Each field variant
    /// - Output: Buffers for text fields, None for selectors and submit
    fn contact_form_field_access() {
        let mut form = ContactForm::default();
        assert!(form.text_field_mut(ContactField::Name).is_some());
        assert!(form.text_field_mut(ContactField::Message).is_some());
        assert!(form.text_field_mut(ContactField::Reason).is_none());
        assert!(form.text_field_mut(ContactField::Submit).is_none());
        assert!(form.text_field(ContactField::Phone).is_some());
    }
}
