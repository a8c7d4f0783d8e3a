use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use super::super::domain::{Field, UsState};
use super::super::phone::is_valid_phone;
use super::super::variant::{FormVariant, MessageRule};

pub(crate) const MIN_NAME_LEN: usize = 2;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|_| unreachable!())
    })
}

pub(crate) fn is_valid_email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// First failing rule for `field`, if any.
pub(crate) fn check_field(variant: &FormVariant, field: Field, value: &str) -> Option<String> {
    let trimmed = value.trim();
    let required = variant.is_required(field);

    if field == Field::Message {
        return check_message(variant.message_rule, trimmed);
    }

    if trimmed.is_empty() {
        return required.then(|| missing_message(variant, field));
    }

    match field {
        Field::FirstName | Field::LastName => (trimmed.chars().count() < MIN_NAME_LEN)
            .then(|| format!("{} must be at least {MIN_NAME_LEN} characters", field.label())),
        Field::Email => {
            (!is_valid_email(trimmed)).then(|| "Please enter a valid email address".to_string())
        }
        Field::Phone => (!is_valid_phone(trimmed))
            .then(|| "Please enter a valid 10-digit phone number".to_string()),
        Field::State => UsState::parse(trimmed)
            .is_none()
            .then(|| "We currently serve Ohio and Pennsylvania".to_string()),
        Field::PreferredDate => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .is_err()
            .then(|| "Please choose a valid date".to_string()),
        _ => check_choice(variant, field, trimmed),
    }
}

fn check_choice(variant: &FormVariant, field: Field, value: &str) -> Option<String> {
    variant.options(field)?;
    let known = variant.canonical_option(field, value).is_some();
    (!known).then(|| format!("Please choose a valid {}", field.label().to_ascii_lowercase()))
}

fn check_message(rule: MessageRule, value: &str) -> Option<String> {
    match rule {
        MessageRule::Optional => None,
        MessageRule::Required { .. } if value.is_empty() => {
            Some("Please tell us how we can help".to_string())
        }
        MessageRule::Required { min_len } if value.chars().count() < min_len => {
            Some(format!("Message must be at least {min_len} characters"))
        }
        MessageRule::Required { .. } => None,
    }
}

fn missing_message(variant: &FormVariant, field: Field) -> String {
    if variant.options(field).is_some() {
        format!("Please select a {}", field.label().to_ascii_lowercase())
    } else {
        format!("{} is required", field.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email(" jane.doe+leads@example.co.uk "));
        assert!(!is_valid_email("jane@example"));
        assert!(!is_valid_email("jane doe@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn short_names_are_rejected() {
        let variant = FormVariant::general_contact();
        assert!(check_field(&variant, Field::FirstName, "J").is_some());
        assert!(check_field(&variant, Field::FirstName, "Jo").is_none());
    }

    #[test]
    fn choices_compare_case_insensitively() {
        let variant = FormVariant::plumbing_contact();
        assert!(check_field(&variant, Field::ServiceType, "water heater repair").is_none());
        assert!(check_field(&variant, Field::ServiceType, "Roof Repair").is_some());
    }

    #[test]
    fn optional_message_accepts_anything() {
        let variant = FormVariant::plumbing_contact();
        assert!(check_field(&variant, Field::Message, "").is_none());
        assert!(check_field(&variant, Field::Message, "hi").is_none());
    }

    #[test]
    fn preferred_date_must_parse() {
        let variant = FormVariant::booking_self_schedule();
        assert!(check_field(&variant, Field::PreferredDate, "2026-11-03").is_none());
        assert!(check_field(&variant, Field::PreferredDate, "next tuesday").is_some());
    }
}
