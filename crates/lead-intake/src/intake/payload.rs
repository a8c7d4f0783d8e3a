use std::collections::BTreeMap;

use super::domain::{Field, FormValues, IntakePayload, UsState};
use super::phone::format_phone;
use super::variant::{FoldedLine, FormVariant};

/// Fields with a dedicated slot in the generic intake payload.
const CORE_FIELDS: [Field; 6] = [
    Field::FirstName,
    Field::LastName,
    Field::Email,
    Field::Phone,
    Field::ServiceType,
    Field::Message,
];

/// Shape any variant's values into the generic payload the intake endpoint understands.
///
/// Only fields the variant renders are read; enumerated values go out in their listed spelling.
pub fn build_payload(
    variant: &FormVariant,
    values: &FormValues,
    source_page: &str,
) -> IntakePayload {
    let rendered = variant.fields();
    let value_of = |field: Field| -> String {
        if rendered.contains(&field) {
            normalized(variant, field, values.get(field))
        } else {
            String::new()
        }
    };

    let service_type = match value_of(Field::ServiceType) {
        selected if !selected.is_empty() => selected,
        _ => variant.default_service_type.unwrap_or_default().to_string(),
    };

    let extra: BTreeMap<String, String> = values
        .iter()
        .filter(|(field, value)| {
            rendered.contains(field) && !CORE_FIELDS.contains(field) && !value.trim().is_empty()
        })
        .map(|(field, value)| (field.wire_name().to_string(), normalized(variant, field, value)))
        .collect();

    IntakePayload {
        first_name: value_of(Field::FirstName),
        last_name: value_of(Field::LastName),
        email: value_of(Field::Email),
        phone: format_phone(values.get(Field::Phone)),
        service_type,
        message: compose_message(variant, values),
        source: variant.source.to_string(),
        source_page: source_page.to_string(),
        extra,
    }
}

/// Labeled structured lines, a blank line, then the visitor's own note.
pub fn compose_message(variant: &FormVariant, values: &FormValues) -> String {
    let lines: Vec<String> = variant
        .folded
        .iter()
        .filter_map(|line| match line {
            FoldedLine::Field(field) => values.is_filled(*field).then(|| {
                format!(
                    "{}: {}",
                    field.label(),
                    normalized(variant, *field, values.get(*field))
                )
            }),
            FoldedLine::Address => {
                format_address(values).map(|address| format!("Address: {address}"))
            }
        })
        .collect();

    let note = values.get(Field::Message).trim();

    match (lines.is_empty(), note.is_empty()) {
        (true, _) => note.to_string(),
        (false, true) => lines.join("\n"),
        (false, false) => format!("{}\n\n{note}", lines.join("\n")),
    }
}

/// `123 Main St, Akron, OH 44301`, skipping missing parts.
pub fn format_address(values: &FormValues) -> Option<String> {
    let street = values.get(Field::Street).trim();
    let city = values.get(Field::City).trim();
    let state = state_code(values.get(Field::State));
    let zip = values.get(Field::Zip).trim();

    let region = [state.as_str(), zip]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    let parts: Vec<&str> = [street, city, region.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

fn normalized(variant: &FormVariant, field: Field, value: &str) -> String {
    match field {
        Field::State => state_code(value),
        _ => {
            let value = value.trim();
            variant
                .canonical_option(field, value)
                .unwrap_or(value)
                .to_string()
        }
    }
}

fn state_code(value: &str) -> String {
    UsState::parse(value)
        .map(|state| state.code().to_string())
        .unwrap_or_else(|| value.trim().to_string())
}
