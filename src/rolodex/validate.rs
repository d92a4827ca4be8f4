//! Input validation for contact fields.
//!
//! Phone numbers are accepted in any common notation (spaces, dashes,
//! parentheses); validation strips the separators and checks the digit count.
//! Email is optional, so the empty string passes.

use crate::error::{Result, RolodexError};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

static PHONE_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s\-()]").unwrap());

pub fn validate_phone(phone: &str) -> Result<()> {
    let cleaned = PHONE_SEPARATORS.replace_all(phone, "");
    let digits_only = !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_digit());
    if digits_only && (10..=15).contains(&cleaned.len()) {
        Ok(())
    } else {
        Err(RolodexError::InvalidInput("Invalid phone number".into()))
    }
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() || EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(RolodexError::InvalidInput("Invalid email format".into()))
    }
}
