//! Lead capture shared by every contact form on the site.
//!
//! A [`FormVariant`] describes one page's form (required fields, enumerations, how the
//! free-text message is composed, what happens after success). [`FormController`] is the
//! single engine that runs any variant: it keeps field state, formats the phone number,
//! validates, posts the derived payload through an [`IntakeTransport`] and tracks the
//! `Idle -> Submitting -> Success | Error` status the UI renders.

pub mod booking;
pub mod catalog;
pub mod controller;
pub mod domain;
pub mod payload;
pub mod phone;
pub mod transport;
pub mod validation;
pub mod variant;

#[cfg(test)]
mod tests;

pub use booking::{BookingModal, BookingTab, SchedulerLink};
pub use controller::{FormController, FormError, SubmitOutcome, SubmitStep};
pub use domain::{
    Field, FormStatus, FormValues, IntakePayload, IntakeResponse, UnknownField, UsState,
};
pub use payload::build_payload;
pub use phone::{format_phone, is_valid_phone, phone_digits};
pub use transport::{HttpIntakeTransport, IntakeTransport, TransportError};
pub use validation::{validate, ValidationReport};
pub use variant::{
    FoldedLine, FormVariant, MessageRule, SuccessBehavior, UnknownVariant, VariantKind,
};
