//! Login identifier synthesis.
//!
//! A login ID is the company code, the uppercase initials of the
//! employee's name, the joining year, and a zero-padded sequence number:
//! `{CODE}{F}{L}{year}{sequence:04}`.

use crate::error::{EngineError, EngineResult};

/// Synthesizes a login identifier from its parts.
///
/// The company code and initials are uppercased; the sequence is
/// zero-padded to four digits. Empty names or an empty company code are
/// validation errors.
///
/// # Examples
///
/// ```
/// use hrflow_engine::calculation::format_login_id;
///
/// let login_id = format_login_id("OI", "John", "Doe", 2024, 1).unwrap();
/// assert_eq!(login_id, "OIJD20240001");
/// ```
pub fn format_login_id(
    company_code: &str,
    first_name: &str,
    last_name: &str,
    joining_year: i32,
    sequence: u32,
) -> EngineResult<String> {
    let code = company_code.trim();
    if code.is_empty() {
        return Err(EngineError::Validation {
            field: "company_code".to_string(),
            message: "must not be empty".to_string(),
        });
    }

    let first_initial = initial_of("first_name", first_name)?;
    let last_initial = initial_of("last_name", last_name)?;

    Ok(format!(
        "{}{}{}{}{:04}",
        code.to_uppercase(),
        first_initial,
        last_initial,
        joining_year,
        sequence
    ))
}

fn initial_of(field: &str, name: &str) -> EngineResult<String> {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .ok_or_else(|| EngineError::Validation {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_login_id() {
        assert_eq!(
            format_login_id("OI", "John", "Doe", 2024, 1).unwrap(),
            "OIJD20240001"
        );
    }

    #[test]
    fn test_lowercase_inputs_are_uppercased() {
        assert_eq!(
            format_login_id("oi", "john", "doe", 2024, 1).unwrap(),
            "OIJD20240001"
        );
    }

    #[test]
    fn test_sequence_is_zero_padded_to_four_digits() {
        assert_eq!(
            format_login_id("OI", "Jane", "Smith", 2025, 42).unwrap(),
            "OIJS20250042"
        );
        assert_eq!(
            format_login_id("OI", "Jane", "Smith", 2025, 1234).unwrap(),
            "OIJS20251234"
        );
    }

    #[test]
    fn test_empty_name_is_rejected() {
        let error = format_login_id("OI", "", "Doe", 2024, 1).unwrap_err();
        assert!(matches!(
            error,
            EngineError::Validation { ref field, .. } if field == "first_name"
        ));
    }

    #[test]
    fn test_empty_company_code_is_rejected() {
        let error = format_login_id("  ", "John", "Doe", 2024, 1).unwrap_err();
        assert!(matches!(
            error,
            EngineError::Validation { ref field, .. } if field == "company_code"
        ));
    }
}
