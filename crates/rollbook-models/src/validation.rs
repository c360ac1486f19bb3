//! Field validators shared by the request DTOs.

use validator::{ValidationError, ValidationErrors};

/// Error code produced by [`non_blank`]; rendered as "`<field>` is required".
pub const REQUIRED: &str = "required";

/// Rejects empty and whitespace-only values.
pub fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}

fn describe(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return message.to_string();
    }

    if error.code == REQUIRED {
        format!("{} is required", field)
    } else {
        format!("{} is invalid", field)
    }
}

/// Joins every field error into one message, fields in name order.
pub fn format_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            errors
                .iter()
                .map(move |error| describe(&field, error))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .join(", ")
}
