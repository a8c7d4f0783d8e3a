mod rules;

use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{Field, FormValues};
use super::variant::FormVariant;

/// Outcome of checking the current form state against a variant's rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: BTreeMap<Field, String>,
}

impl ValidationReport {
    pub fn error_for(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }
}

/// Pure and synchronous; only the fields the variant renders are checked.
pub fn validate(variant: &FormVariant, values: &FormValues) -> ValidationReport {
    let errors: BTreeMap<Field, String> = variant
        .fields()
        .into_iter()
        .filter_map(|field| {
            rules::check_field(variant, field, values.get(field)).map(|message| (field, message))
        })
        .collect();

    ValidationReport {
        valid: errors.is_empty(),
        errors,
    }
}
