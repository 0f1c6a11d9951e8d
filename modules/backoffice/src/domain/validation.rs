//! Field validation for workflow inputs

use crate::contract::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// French plate format: two letters, three digits, two letters,
/// dash-separated (e.g. "AB-123-CD")
#[allow(clippy::expect_used)]
static PLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{2}-\d{3}-[A-Z]{2}$").expect("plate regex is valid"));

/// Loose email shape check: one '@' with a dotted domain behind it.
/// Deliverability is the mailer's problem, not ours.
#[allow(clippy::expect_used)]
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Build the [`DomainError::MissingFields`] error enumerating every
/// absent entry of `fields` (name, was-provided pairs).
pub fn missing_fields(fields: &[(&str, bool)]) -> DomainError {
    DomainError::MissingFields {
        fields: fields
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| (*name).to_string())
            .collect(),
    }
}

/// Check required fields and enumerate every missing one, instead of
/// failing on the first.
pub fn require_fields(fields: &[(&str, bool)]) -> Result<(), DomainError> {
    if fields.iter().all(|(_, present)| *present) {
        Ok(())
    } else {
        Err(missing_fields(fields))
    }
}

pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "adresse e-mail invalide: {}",
            email
        )))
    }
}

pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation(format!(
            "le mot de passe doit contenir au moins {} caractères",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

pub fn validate_plate(plaque: &str) -> Result<(), DomainError> {
    if PLATE_RE.is_match(plaque) {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "plaque invalide '{}': format attendu AA-123-AA",
            plaque
        )))
    }
}

/// Order lines need at least one unit
pub fn validate_line_quantity(quantity: i32) -> Result<(), DomainError> {
    if quantity < 1 {
        return Err(DomainError::validation(
            "la quantité doit être au moins 1",
        ));
    }
    Ok(())
}

/// Stock levels may be zero, never negative
pub fn validate_stock_quantity(quantity: i32) -> Result<(), DomainError> {
    if quantity < 0 {
        return Err(DomainError::validation(
            "la quantité ne peut pas être négative",
        ));
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> Result<(), DomainError> {
    if price < Decimal::ZERO {
        return Err(DomainError::validation(
            "le prix ne peut pas être négatif",
        ));
    }
    Ok(())
}
