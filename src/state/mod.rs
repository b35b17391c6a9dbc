//! Application state: the one mutable [`AppState`] struct owned by the
//! event loop, plus the value types and modal definitions it is built
//! from.

mod app_state;
pub mod modal;
mod types;

pub use app_state::{AppState, Section};
pub use modal::{InsuranceLookup, Modal};
pub use types::{
    ApptKind, ContactField, Screen, SubmitOutcome, SubmitStatus, VisitReason,
};
