use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use super::domain::{Field, FormStatus, FormValues, IntakePayload, IntakeResponse, UnknownField};
use super::payload::build_payload;
use super::phone::format_phone;
use super::transport::{IntakeTransport, TransportError};
use super::validation::{validate, ValidationReport};
use super::variant::FormVariant;

const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you! A member of our team will contact you shortly.";

/// Generic lead form: one engine, configured per page by a [`FormVariant`].
pub struct FormController<T> {
    variant: FormVariant,
    values: FormValues,
    errors: BTreeMap<Field, String>,
    status: FormStatus,
    transport: Arc<T>,
    fallback_phone: String,
}

/// First half of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStep {
    /// Validation failed; nothing was sent.
    Invalid(BTreeMap<Field, String>),
    /// The form is now `Submitting` and this payload must be posted exactly once.
    Ready(IntakePayload),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Invalid(BTreeMap<Field, String>),
    Submitted { message: String },
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error("form is locked while {0}")]
    Locked(&'static str),
    #[error("submit is disabled while {0}")]
    SubmitDisabled(&'static str),
    #[error("no submission is in flight")]
    NotSubmitting,
}

impl<T> FormController<T>
where
    T: IntakeTransport + 'static,
{
    pub fn new(variant: FormVariant, transport: Arc<T>, fallback_phone: impl Into<String>) -> Self {
        Self {
            variant,
            values: FormValues::new(),
            errors: BTreeMap::new(),
            status: FormStatus::Idle,
            transport,
            fallback_phone: fallback_phone.into(),
        }
    }

    pub fn variant(&self) -> &FormVariant {
        &self.variant
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Inline per-field messages from the last submit attempt.
    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_editable(&self) -> bool {
        matches!(self.status, FormStatus::Idle | FormStatus::Error { .. })
    }

    /// Drives the disabled state of the submit control.
    pub fn can_submit(&self) -> bool {
        self.is_editable()
    }

    pub fn update_field(&mut self, field: Field, value: &str) -> Result<(), FormError> {
        if !self.is_editable() {
            return Err(FormError::Locked(self.status.label()));
        }

        let value = match field {
            Field::Phone => format_phone(value),
            _ => value.to_string(),
        };
        self.values.set(field, value);
        self.errors.remove(&field);
        Ok(())
    }

    pub fn update_field_by_name(&mut self, name: &str, value: &str) -> Result<(), FormError> {
        let field: Field = name.parse()?;
        self.update_field(field, value)
    }

    pub fn validate(&self) -> ValidationReport {
        validate(&self.variant, &self.values)
    }

    /// Validate and, when valid, move to `Submitting` with the payload to post.
    pub fn begin_submit(&mut self, source_page: &str) -> Result<SubmitStep, FormError> {
        if !self.can_submit() {
            return Err(FormError::SubmitDisabled(self.status.label()));
        }

        let report = self.validate();
        if !report.valid {
            self.errors = report.errors.clone();
            return Ok(SubmitStep::Invalid(report.errors));
        }

        self.errors.clear();
        self.status = FormStatus::Submitting;
        Ok(SubmitStep::Ready(build_payload(
            &self.variant,
            &self.values,
            source_page,
        )))
    }

    /// Apply the transport result of the in-flight submission.
    pub fn finish_submit(
        &mut self,
        result: Result<IntakeResponse, TransportError>,
    ) -> Result<SubmitOutcome, FormError> {
        if self.status != FormStatus::Submitting {
            return Err(FormError::NotSubmitting);
        }

        let variant = self.variant.kind;
        let outcome = match result {
            Ok(response) if response.success => {
                info!(%variant, "lead accepted");
                let message = response
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string());
                if self.variant.resets_on_success() {
                    self.values.clear();
                }
                self.status = FormStatus::Success {
                    message: message.clone(),
                };
                SubmitOutcome::Submitted { message }
            }
            Ok(response) => {
                warn!(%variant, error = ?response.error, "lead rejected by intake endpoint");
                let message = response
                    .error
                    .filter(|error| !error.trim().is_empty())
                    .unwrap_or_else(|| self.fallback_message());
                self.fail(message)
            }
            Err(err) => {
                warn!(%variant, error = %err, "lead submission failed");
                let message = self.fallback_message();
                self.fail(message)
            }
        };

        Ok(outcome)
    }

    /// Validate, post once, and settle into `Success` or `Error`.
    pub async fn submit(&mut self, source_page: &str) -> Result<SubmitOutcome, FormError> {
        let payload = match self.begin_submit(source_page)? {
            SubmitStep::Invalid(errors) => return Ok(SubmitOutcome::Invalid(errors)),
            SubmitStep::Ready(payload) => payload,
        };

        let transport = Arc::clone(&self.transport);
        let result = transport.send(&payload).await;
        self.finish_submit(result)
    }

    /// Back to a fresh `Idle` form. Refused while a request is in flight.
    pub fn reset(&mut self) -> Result<(), FormError> {
        if self.status == FormStatus::Submitting {
            return Err(FormError::Locked(self.status.label()));
        }

        self.values.clear();
        self.errors.clear();
        self.status = FormStatus::Idle;
        Ok(())
    }

    fn fail(&mut self, message: String) -> SubmitOutcome {
        self.status = FormStatus::Error {
            message: message.clone(),
        };
        SubmitOutcome::Failed { message }
    }

    fn fallback_message(&self) -> String {
        format!(
            "Sorry, we couldn't send your request. Please call us directly at {}.",
            self.fallback_phone
        )
    }
}
