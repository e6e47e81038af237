//! Local checks run before a form is submitted

use crmdesk_domain::{CrmError, Result};

/// Fail when a required text field is blank.
///
/// # Errors
///
/// Returns [`CrmError::Validation`] naming the field.
pub fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CrmError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Fail when a quantity is zero.
///
/// # Errors
///
/// Returns [`CrmError::Validation`] naming the field.
pub fn require_positive(field: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(CrmError::Validation(format!("{field} must be greater than zero")));
    }
    Ok(())
}

/// Minimal shape check: something on both sides of a single `@`.
///
/// # Errors
///
/// Returns [`CrmError::Validation`] for blank or malformed addresses.
pub fn require_email(value: &str) -> Result<()> {
    require("Email", value)?;
    match value.trim().split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(CrmError::Validation("Email is not valid".into())),
    }
}
