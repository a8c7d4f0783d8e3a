use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::catalog::{
    DRAIN_ISSUES, EMERGENCY_PROBLEMS, EMERGENCY_SERVICE_TYPE, GENERAL_SERVICES, PLUMBING_SERVICES,
    TIME_WINDOWS, URGENCY_LEVELS, WATERPROOFING_SERVICES,
};
use super::domain::{Field, UsState};

pub const MIN_MESSAGE_LEN: usize = 10;

/// The forms rendered across the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VariantKind {
    GeneralContact,
    PlumbingContact,
    SewerDrainContact,
    WaterproofingContact,
    EmergencyContact,
    BookingQuickRequest,
    BookingSelfSchedule,
}

impl VariantKind {
    pub const ALL: [VariantKind; 7] = [
        VariantKind::GeneralContact,
        VariantKind::PlumbingContact,
        VariantKind::SewerDrainContact,
        VariantKind::WaterproofingContact,
        VariantKind::EmergencyContact,
        VariantKind::BookingQuickRequest,
        VariantKind::BookingSelfSchedule,
    ];

    pub const fn slug(self) -> &'static str {
        match self {
            VariantKind::GeneralContact => "contact",
            VariantKind::PlumbingContact => "plumbing",
            VariantKind::SewerDrainContact => "sewer-drain",
            VariantKind::WaterproofingContact => "waterproofing",
            VariantKind::EmergencyContact => "emergency",
            VariantKind::BookingQuickRequest => "booking-quick",
            VariantKind::BookingSelfSchedule => "booking-schedule",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form variant '{0}'")]
pub struct UnknownVariant(pub String);

impl FromStr for VariantKind {
    type Err = UnknownVariant;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        VariantKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == normalized)
            .ok_or(UnknownVariant(normalized))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MessageRule {
    Optional,
    Required { min_len: usize },
}

/// What happens to the entered values once the backend accepts the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessBehavior {
    /// Clear the form so another lead can be entered.
    Reset,
    /// Keep the values behind a permanent thank-you screen.
    Retain,
}

/// Labeled line prepended to the free-text message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoldedLine {
    Field(Field),
    Address,
}

/// Immutable configuration consumed by the generic form controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormVariant {
    pub kind: VariantKind,
    pub source: &'static str,
    pub required: BTreeSet<Field>,
    pub choices: BTreeMap<Field, &'static [&'static str]>,
    pub message_rule: MessageRule,
    pub on_success: SuccessBehavior,
    pub folded: Vec<FoldedLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_service_type: Option<&'static str>,
}

const CONTACT_FIELDS: [Field; 4] = [Field::FirstName, Field::LastName, Field::Email, Field::Phone];

impl FormVariant {
    fn new(kind: VariantKind, source: &'static str) -> Self {
        let mut choices: BTreeMap<Field, &'static [&'static str]> = BTreeMap::new();
        choices.insert(Field::State, &UsState::CODES);

        Self {
            kind,
            source,
            required: CONTACT_FIELDS.into_iter().collect(),
            choices,
            message_rule: MessageRule::Optional,
            on_success: SuccessBehavior::Reset,
            folded: Vec::new(),
            default_service_type: None,
        }
    }

    fn require(mut self, fields: &[Field]) -> Self {
        self.required.extend(fields.iter().copied());
        self
    }

    fn optional(mut self, field: Field) -> Self {
        self.required.remove(&field);
        self
    }

    fn choices(mut self, field: Field, options: &'static [&'static str]) -> Self {
        self.choices.insert(field, options);
        self
    }

    fn fold(mut self, lines: &[FoldedLine]) -> Self {
        self.folded.extend_from_slice(lines);
        self
    }

    fn message(mut self, rule: MessageRule) -> Self {
        self.message_rule = rule;
        self
    }

    fn on_success(mut self, behavior: SuccessBehavior) -> Self {
        self.on_success = behavior;
        self
    }

    pub fn for_kind(kind: VariantKind) -> Self {
        match kind {
            VariantKind::GeneralContact => Self::general_contact(),
            VariantKind::PlumbingContact => Self::plumbing_contact(),
            VariantKind::SewerDrainContact => Self::sewer_drain_contact(),
            VariantKind::WaterproofingContact => Self::waterproofing_contact(),
            VariantKind::EmergencyContact => Self::emergency_contact(),
            VariantKind::BookingQuickRequest => Self::booking_quick_request(),
            VariantKind::BookingSelfSchedule => Self::booking_self_schedule(),
        }
    }

    pub fn all() -> Vec<Self> {
        VariantKind::ALL.into_iter().map(Self::for_kind).collect()
    }

    pub fn general_contact() -> Self {
        Self::new(VariantKind::GeneralContact, "contact-form")
            .require(&[Field::ServiceType, Field::Message])
            .choices(Field::ServiceType, GENERAL_SERVICES)
            .message(MessageRule::Required {
                min_len: MIN_MESSAGE_LEN,
            })
    }

    pub fn plumbing_contact() -> Self {
        Self::new(VariantKind::PlumbingContact, "plumbing-contact-form")
            .require(&[Field::ServiceType, Field::City, Field::State])
            .choices(Field::ServiceType, PLUMBING_SERVICES)
            .choices(Field::Urgency, URGENCY_LEVELS)
            .fold(&[FoldedLine::Field(Field::Urgency), FoldedLine::Address])
            .on_success(SuccessBehavior::Retain)
    }

    pub fn sewer_drain_contact() -> Self {
        Self::new(VariantKind::SewerDrainContact, "sewer-drain-contact-form")
            .require(&[Field::ServiceType, Field::Urgency, Field::City, Field::State])
            .choices(Field::ServiceType, DRAIN_ISSUES)
            .choices(Field::Urgency, URGENCY_LEVELS)
            .fold(&[FoldedLine::Field(Field::Urgency), FoldedLine::Address])
            .on_success(SuccessBehavior::Retain)
    }

    pub fn waterproofing_contact() -> Self {
        Self::new(VariantKind::WaterproofingContact, "waterproofing-contact-form")
            .require(&[Field::ServiceType, Field::City, Field::State])
            .choices(Field::ServiceType, WATERPROOFING_SERVICES)
            .fold(&[FoldedLine::Address])
    }

    /// Emergency callers may not have email handy, so only phone is mandatory for contact.
    pub fn emergency_contact() -> Self {
        let mut variant = Self::new(VariantKind::EmergencyContact, "emergency-contact-form")
            .optional(Field::Email)
            .require(&[Field::ProblemType, Field::Street, Field::City, Field::State])
            .choices(Field::ProblemType, EMERGENCY_PROBLEMS)
            .fold(&[FoldedLine::Field(Field::ProblemType), FoldedLine::Address])
            .on_success(SuccessBehavior::Retain);
        variant.default_service_type = Some(EMERGENCY_SERVICE_TYPE);
        variant
    }

    pub fn booking_quick_request() -> Self {
        Self::new(VariantKind::BookingQuickRequest, "booking-modal-quick")
            .require(&[Field::ServiceType])
            .choices(Field::ServiceType, GENERAL_SERVICES)
    }

    pub fn booking_self_schedule() -> Self {
        Self::new(VariantKind::BookingSelfSchedule, "booking-modal-schedule")
            .require(&[
                Field::ServiceType,
                Field::PreferredDate,
                Field::PreferredTime,
                Field::Street,
                Field::City,
                Field::State,
                Field::Zip,
            ])
            .choices(Field::ServiceType, GENERAL_SERVICES)
            .choices(Field::PreferredTime, TIME_WINDOWS)
            .fold(&[
                FoldedLine::Field(Field::PreferredDate),
                FoldedLine::Field(Field::PreferredTime),
                FoldedLine::Address,
            ])
            .on_success(SuccessBehavior::Retain)
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.required.contains(&field)
    }

    pub fn options(&self, field: Field) -> Option<&'static [&'static str]> {
        self.choices.get(&field).copied()
    }

    /// The listed spelling of `value` for an enumerated field, matched case-insensitively.
    pub fn canonical_option(&self, field: Field, value: &str) -> Option<&'static str> {
        let value = value.trim();
        self.options(field)?
            .iter()
            .copied()
            .find(|option| option.eq_ignore_ascii_case(value))
    }

    /// Fields the form renders: required ones plus any with an enumeration or fold.
    pub fn fields(&self) -> BTreeSet<Field> {
        let mut fields = self.required.clone();
        fields.extend(self.choices.keys().copied().filter(|f| *f != Field::State));
        fields.insert(Field::Email);
        fields.insert(Field::Message);
        for line in &self.folded {
            match line {
                FoldedLine::Field(field) => {
                    fields.insert(*field);
                }
                FoldedLine::Address => {
                    fields.extend([Field::Street, Field::City, Field::State, Field::Zip]);
                }
            }
        }
        fields
    }

    pub fn resets_on_success(&self) -> bool {
        self.on_success == SuccessBehavior::Reset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_round_trips_through_its_slug() {
        for kind in VariantKind::ALL {
            assert_eq!(kind.slug().parse::<VariantKind>(), Ok(kind));
            assert_eq!(FormVariant::for_kind(kind).kind, kind);
        }
        assert!("roofing".parse::<VariantKind>().is_err());
    }

    #[test]
    fn every_variant_requires_name_and_phone() {
        for variant in FormVariant::all() {
            for field in [Field::FirstName, Field::LastName, Field::Phone] {
                assert!(
                    variant.is_required(field),
                    "{} should require {field}",
                    variant.kind
                );
            }
        }
    }

    #[test]
    fn enumerated_required_fields_have_options() {
        for variant in FormVariant::all() {
            for field in [
                Field::ServiceType,
                Field::Urgency,
                Field::ProblemType,
                Field::PreferredTime,
            ] {
                if variant.is_required(field) {
                    assert!(
                        variant.options(field).is_some_and(|opts| !opts.is_empty()),
                        "{} requires {field} without options",
                        variant.kind
                    );
                }
            }
        }
    }

    #[test]
    fn emergency_variant_defaults_service_type() {
        let variant = FormVariant::emergency_contact();
        assert!(!variant.is_required(Field::Email));
        assert!(!variant.is_required(Field::ServiceType));
        assert_eq!(variant.default_service_type, Some(EMERGENCY_SERVICE_TYPE));
    }

    #[test]
    fn options_match_in_listed_spelling() {
        let variant = FormVariant::plumbing_contact();
        assert_eq!(
            variant.canonical_option(Field::ServiceType, " water heater REPAIR "),
            Some("Water Heater Repair")
        );
        assert_eq!(variant.canonical_option(Field::ServiceType, "Roofing"), None);
        assert_eq!(variant.canonical_option(Field::FirstName, "Jane"), None);
    }

    #[test]
    fn fields_include_folded_address_parts() {
        let fields = FormVariant::plumbing_contact().fields();
        assert!(fields.contains(&Field::Street));
        assert!(fields.contains(&Field::Zip));
        assert!(fields.contains(&Field::Urgency));
    }
}
