//! Client-side validation for the appointment request form.
//!
//! Rules run in a fixed order and the first failure wins, so the visitor
//! sees exactly one message at a time. The honeypot check runs last and
//! rejects without a distinct error surface: from the outside a bot
//! submission looks like any other blocked submit.

use super::ContactForm;
use crate::util::digits_only;

/// Which rule failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Patient name is empty.
    Name,
    /// Email does not look like `local@domain.tld`.
    Email,
    /// Fewer than ten digits in the phone number.
    Phone,
    /// No visit reason selected.
    Reason,
}

impl FieldError {
    /// Dictionary key of the inline message for this failure.
    pub const fn message_key(self) -> &'static str {
        match self {
            FieldError::Name => "contact.err.name",
            FieldError::Email => "contact.err.email",
            FieldError::Phone => "contact.err.phone",
            FieldError::Reason => "contact.err.reason",
        }
    }
}

/// Why a submission was blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// A visible validation failure.
    Field(FieldError),
    /// The honeypot was filled in; block silently, no network call.
    Bot,
}

/// What: Validate the form in surface order.
///
/// Inputs:
/// - `form`: the appointment request as typed
///
/// Output:
/// - `Ok(())` when submittable; otherwise the first failing rule.
///
/// Details:
/// - Order: name -> email -> phone -> reason -> honeypot.
/// - Phone digits are counted after stripping every non-digit.
pub fn validate(form: &ContactForm) -> Result<(), Rejection> {
    if form.name.trim().is_empty() {
        return Err(Rejection::Field(FieldError::Name));
    }
    if !email_shape_ok(form.email.trim()) {
        return Err(Rejection::Field(FieldError::Email));
    }
    if digits_only(&form.phone).len() < 10 {
        return Err(Rejection::Field(FieldError::Phone));
    }
    if form.reason.is_none() {
        return Err(Rejection::Field(FieldError::Reason));
    }
    if !form.website.trim().is_empty() {
        return Err(Rejection::Bot);
    }
    Ok(())
}

/// Loose `local@domain.tld` shape check: exactly one `@`, a non-empty
/// local part, a dotted domain with a non-empty final label, no spaces.
fn email_shape_ok(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VisitReason;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "(407) 555-1234".into(),
            reason: Some(VisitReason::WellVisit),
            ..ContactForm::default()
        }
    }

    #[test]
    /// What: A complete form passes
    ///
    /// - Input: Name, email, formatted 10-digit phone, reason set
    /// - Output: Ok
    fn validate_accepts_complete_form() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    /// What: First failing rule wins, in order
    ///
    /// - Input: Forms with several fields broken at once
    /// - Output: The earliest rule's error each time
    fn validate_first_failure_wins() {
        let mut f = valid_form();
        f.name.clear();
        f.email = "nope".into();
        f.phone = "123".into();
        assert_eq!(validate(&f), Err(Rejection::Field(FieldError::Name)));

        let mut f = valid_form();
        f.email = "nope".into();
        f.phone = "123".into();
        assert_eq!(validate(&f), Err(Rejection::Field(FieldError::Email)));

        let mut f = valid_form();
        f.phone = "123".into();
        f.reason = None;
        assert_eq!(validate(&f), Err(Rejection::Field(FieldError::Phone)));

        let mut f = valid_form();
        f.reason = None;
        assert_eq!(validate(&f), Err(Rejection::Field(FieldError::Reason)));
    }

    #[test]
    /// What: Phone rule counts digits only
    ///
    /// - Input: Nine digits formatted long; ten digits with punctuation
    /// - Output: Nine fails, ten passes
    fn validate_phone_digit_count() {
        let mut f = valid_form();
        f.phone = "(407) 555-123".into();
        assert_eq!(validate(&f), Err(Rejection::Field(FieldError::Phone)));
        f.phone = "+1 (407) 555-1234".into();
        assert_eq!(validate(&f), Ok(()));
    }

    #[test]
    /// What: Email shapes
    ///
    /// - Input: Assorted malformed and well-formed addresses
    /// - Output: Only local@domain.tld shapes pass
    fn validate_email_shapes() {
        for bad in ["", "plain", "@x.com", "a@b", "a b@c.com", "a@b@c.com", "a@.com", "a@x."] {
            let mut f = valid_form();
            f.email = bad.into();
            assert_eq!(validate(&f), Err(Rejection::Field(FieldError::Email)), "{bad}");
        }
        for good in ["a@b.co", "jane.doe+appt@clinic.example.org"] {
            let mut f = valid_form();
            f.email = good.into();
            assert_eq!(validate(&f), Ok(()), "{good}");
        }
    }

    #[test]
    /// What: Honeypot blocks silently after everything else passes
    ///
    /// - Input: Valid form with the hidden field populated
    /// - Output: Rejection::Bot
    fn validate_honeypot() {
        let mut f = valid_form();
        f.website = "http://spam.example".into();
        assert_eq!(validate(&f), Err(Rejection::Bot));
    }
}
