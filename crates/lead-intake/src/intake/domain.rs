use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Every input a lead form can render. Variants pick the subset they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Street,
    City,
    State,
    Zip,
    ServiceType,
    Urgency,
    ProblemType,
    PreferredDate,
    PreferredTime,
    Message,
}

impl Field {
    pub const ALL: [Field; 14] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Street,
        Field::City,
        Field::State,
        Field::Zip,
        Field::ServiceType,
        Field::Urgency,
        Field::ProblemType,
        Field::PreferredDate,
        Field::PreferredTime,
        Field::Message,
    ];

    /// Key used in form posts and JSON payloads.
    pub const fn wire_name(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Street => "street",
            Field::City => "city",
            Field::State => "state",
            Field::Zip => "zip",
            Field::ServiceType => "serviceType",
            Field::Urgency => "urgency",
            Field::ProblemType => "problemType",
            Field::PreferredDate => "preferredDate",
            Field::PreferredTime => "preferredTime",
            Field::Message => "message",
        }
    }

    /// Human label used in validation messages and folded message lines.
    pub const fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Street => "Street address",
            Field::City => "City",
            Field::State => "State",
            Field::Zip => "ZIP code",
            Field::ServiceType => "Service",
            Field::Urgency => "Urgency",
            Field::ProblemType => "Problem",
            Field::PreferredDate => "Preferred date",
            Field::PreferredTime => "Preferred time",
            Field::Message => "Message",
        }
    }

    pub const fn is_address(self) -> bool {
        matches!(self, Field::Street | Field::City | Field::State | Field::Zip)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for Field {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Field::ALL
            .into_iter()
            .find(|field| field.wire_name() == trimmed)
            .ok_or_else(|| UnknownField(trimmed.to_string()))
    }
}

/// Raw values as the visitor typed them (phone already formatted).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<Field, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty string when the field was never touched.
    pub fn get(&self, field: Field) -> &str {
        self.0.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    pub fn is_filled(&self, field: Field) -> bool {
        !self.get(field).trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

impl<const N: usize> From<[(Field, &str); N]> for FormValues {
    fn from(entries: [(Field, &str); N]) -> Self {
        let mut values = FormValues::new();
        for (field, value) in entries {
            values.set(field, value);
        }
        values
    }
}

/// States served by the company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsState {
    #[serde(rename = "OH")]
    Oh,
    #[serde(rename = "PA")]
    Pa,
}

impl UsState {
    pub const CODES: [&'static str; 2] = ["OH", "PA"];

    pub const fn code(self) -> &'static str {
        match self {
            UsState::Oh => "OH",
            UsState::Pa => "PA",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "oh" | "ohio" => Some(UsState::Oh),
            "pa" | "pennsylvania" => Some(UsState::Pa),
            _ => None,
        }
    }
}

/// Tri-state UI result plus the in-flight state that disables the submit control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FormStatus {
    Idle,
    Submitting,
    Success { message: String },
    Error { message: String },
}

impl FormStatus {
    pub const fn label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "idle",
            FormStatus::Submitting => "submitting",
            FormStatus::Success { .. } => "success",
            FormStatus::Error { .. } => "error",
        }
    }
}

/// JSON body accepted by the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub message: String,
    pub source: String,
    pub source_page: String,
    /// Variant-specific values the backend may ignore.
    #[serde(flatten)]
    pub extra: BTreeMap<String, String>,
}

/// Body returned by the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl IntakeResponse {
    pub fn accepted(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_parses_wire_names() {
        for field in Field::ALL {
            assert_eq!(field.wire_name().parse::<Field>(), Ok(field));
        }
        assert_eq!(
            "nickname".parse::<Field>(),
            Err(UnknownField("nickname".to_string()))
        );
    }

    #[test]
    fn state_accepts_codes_and_names() {
        assert_eq!(UsState::parse("oh"), Some(UsState::Oh));
        assert_eq!(UsState::parse(" Pennsylvania "), Some(UsState::Pa));
        assert_eq!(UsState::parse("WV"), None);
    }

    #[test]
    fn payload_flattens_extra_fields() {
        let mut extra = BTreeMap::new();
        extra.insert("city".to_string(), "Akron".to_string());
        let payload = IntakePayload {
            first_name: "Jane".to_string(),
            last_name: "Smith".to_string(),
            email: "jane@example.com".to_string(),
            phone: "(330) 555-1234".to_string(),
            service_type: "Drain Cleaning".to_string(),
            message: "Kitchen sink backs up".to_string(),
            source: "contact-form".to_string(),
            source_page: "/contact".to_string(),
            extra,
        };

        let json = serde_json::to_value(&payload).expect("serializes");
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["sourcePage"], "/contact");
        assert_eq!(json["city"], "Akron");
    }

    #[test]
    fn response_tolerates_missing_optional_keys() {
        let response: IntakeResponse =
            serde_json::from_str(r#"{"success":false}"#).expect("parses");
        assert!(!response.success);
        assert!(response.error.is_none());
    }
}
