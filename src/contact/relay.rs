//! The form-relay client.
//!
//! A submission is one multipart POST to an external relay service that
//! forwards the request to the clinic's inbox and answers with a small
//! JSON envelope. The relay is a black box to us; everything we depend on
//! is the `success` flag and the optional human-readable `message`.

use serde::Deserialize;

use super::ContactForm;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Relay endpoint receiving appointment requests.
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Stand-in key shipped in the repo; deployments must inject a real one.
const PLACEHOLDER_ACCESS_KEY: &str = "00000000-0000-0000-0000-000000000000";

/// What: Resolve the relay access key for this session.
///
/// Inputs:
/// - `settings`: parsed user settings (may carry a key)
///
/// Output:
/// - The key from `KIOSKO_RELAY_ACCESS_KEY`, else the config file, else
///   the placeholder (with a warning, since the relay will reject it).
pub fn resolve_access_key(settings: &crate::prefs::Settings) -> String {
    if let Ok(key) = std::env::var("KIOSKO_RELAY_ACCESS_KEY")
        && !key.trim().is_empty()
    {
        return key;
    }
    if let Some(key) = &settings.relay_access_key {
        return key.clone();
    }
    tracing::warn!("no relay access key configured; submissions will be rejected");
    PLACEHOLDER_ACCESS_KEY.to_string()
}

/// The serialized submission, language-independent field values included.
#[derive(Debug, Clone)]
pub struct FormPayload {
    /// Relay credential.
    pub access_key: String,
    /// Patient name.
    pub name: String,
    /// Reply email.
    pub email: String,
    /// Callback phone.
    pub phone: String,
    /// Canonical visit reason ("Well visit", ...).
    pub reason: String,
    /// Canonical appointment type ("New patient" / "Follow-up").
    pub appointment: String,
    /// Preferred doctor, may be empty.
    pub doctor: String,
    /// Free-text message, may be empty.
    pub message: String,
    /// Honeypot passthrough; validation guarantees it is empty by the time
    /// a payload is built.
    pub botcheck: String,
}

impl FormPayload {
    /// Build the wire payload from a validated form.
    pub fn from_form(form: &ContactForm, access_key: String) -> Self {
        Self {
            access_key,
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            phone: form.phone.trim().to_string(),
            reason: form
                .reason
                .map(|r| r.form_value().to_string())
                .unwrap_or_default(),
            appointment: form.appointment.form_value().to_string(),
            doctor: form.doctor.trim().to_string(),
            message: form.message.trim().to_string(),
            botcheck: form.website.clone(),
        }
    }
}

/// The relay's JSON answer.
#[derive(Debug, Clone, Deserialize)]
pub struct RelayResponse {
    /// Whether the relay accepted the submission.
    pub success: bool,
    /// Optional human-readable detail.
    #[serde(default)]
    pub message: Option<String>,
}

/// Transport seam for submissions, so flows are testable without a
/// network. The production implementation is [`HttpRelay`]; tests inject
/// their own.
pub trait RelayTransport {
    /// Deliver one submission and return the relay's verdict.
    fn submit(
        &self,
        payload: FormPayload,
    ) -> impl std::future::Future<Output = Result<RelayResponse>> + Send;
}

/// Real HTTPS transport.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl Default for HttpRelay {
    fn default() -> Self {
        Self::new(RELAY_ENDPOINT)
    }
}

impl HttpRelay {
    /// Transport posting to the given endpoint.
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.to_string(),
        }
    }
}

impl RelayTransport for HttpRelay {
    /// What: POST the payload as multipart/form-data and parse the envelope.
    ///
    /// Inputs:
    /// - `payload`: validated submission fields plus credential
    ///
    /// Output:
    /// - The parsed [`RelayResponse`]; non-2xx answers still yield a
    ///   response when the body carries the relay's failure envelope, so
    ///   the remote-supplied reason reaches the visitor.
    async fn submit(&self, payload: FormPayload) -> Result<RelayResponse> {
        let form = reqwest::multipart::Form::new()
            .text("access_key", payload.access_key)
            .text("name", payload.name)
            .text("email", payload.email)
            .text("phone", payload.phone)
            .text("reason", payload.reason)
            .text("appointment", payload.appointment)
            .text("preferred_doctor", payload.doctor)
            .text("message", payload.message)
            .text("botcheck", payload.botcheck);
        let resp = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;
        let status = resp.status();
        match resp.json::<RelayResponse>().await {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(format!("relay returned {status}").into()),
            Err(e) => Err(Box::new(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ApptKind, VisitReason};

    #[test]
    /// What: Payload carries canonical English field values
    ///
    /// - Input: A Spanish-session form (reason selected via the ES labels)
    /// - Output: Wire values are the stable English forms; fields trimmed
    fn relay_payload_from_form() {
        let form = ContactForm {
            name: "  Jane Doe ".into(),
            email: "jane@example.com".into(),
            phone: "4075551234".into(),
            reason: Some(VisitReason::Vaccine),
            appointment: ApptKind::FollowUp,
            doctor: String::new(),
            message: " hola ".into(),
            website: String::new(),
        };
        let p = FormPayload::from_form(&form, "key-123".into());
        assert_eq!(p.name, "Jane Doe");
        assert_eq!(p.reason, "Vaccine");
        assert_eq!(p.appointment, "Follow-up");
        assert_eq!(p.message, "hola");
        assert_eq!(p.access_key, "key-123");
        assert!(p.botcheck.is_empty());
    }

    #[test]
    /// What: Envelope parsing tolerates a missing message
    ///
    /// - Input: Success and failure JSON bodies
    /// - Output: Flags and optional message decoded
    fn relay_response_envelope() {
        let ok: RelayResponse = serde_json::from_str(r#"{"success":true}"#).expect("parse");
        assert!(ok.success);
        assert!(ok.message.is_none());
        let err: RelayResponse =
            serde_json::from_str(r#"{"success":false,"message":"invalid access key"}"#)
                .expect("parse");
        assert!(!err.success);
        assert_eq!(err.message.as_deref(), Some("invalid access key"));
    }
}
