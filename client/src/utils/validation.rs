//! # Input Validation
//!
//! Business validation for user input, separate from the display masks in
//! [`crate::utils::format`]. Masking decides what the field looks like;
//! validation decides whether a submit is allowed to reach the network.

use chrono::{Datelike, NaiveDate};

/// Required phone-number prefix (country code).
pub const PHONE_PREFIX: &str = "+998";

/// Full phone-number length: prefix plus nine subscriber digits.
pub const PHONE_LENGTH: usize = 13;

/// Soft upper bound on expiry years past the current one. Entries beyond
/// this are treated as typos rather than valid far-future dates.
pub const EXPIRY_MAX_YEARS_AHEAD: i32 = 15;

/// Outcome of a validation check.
pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

/// Validate a phone number: `+998` followed by exactly nine digits.
pub fn validate_phone(phone: &str) -> ValidationResult {
    if !phone.starts_with(PHONE_PREFIX) || phone.len() != PHONE_LENGTH {
        return ValidationResult::err("Phone number must match +998XXXXXXXXX");
    }

    if !phone[PHONE_PREFIX.len()..].chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Phone number must match +998XXXXXXXXX");
    }

    ValidationResult::ok()
}

/// Validate a complete expiry entry (`MMYY` digits) against `today`.
///
/// Two-digit years are compared against the last two digits of the
/// current year; there is no century disambiguation. The
/// [`EXPIRY_MAX_YEARS_AHEAD`] ceiling keeps the accepted window well away
/// from any wrap-around.
pub fn validate_expiry(digits: &str, today: NaiveDate) -> ValidationResult {
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("Expiry date is incomplete (MMYY)");
    }

    let month: u32 = digits[..2].parse().unwrap_or(0);
    let year: i32 = digits[2..].parse().unwrap_or(-1);

    let current_year = today.year() % 100;
    let current_month = today.month();

    if !(1..=12).contains(&month) {
        return ValidationResult::err("Expiry month is out of range (01-12)");
    }

    if year < current_year || (year == current_year && month < current_month) {
        return ValidationResult::err("The card has already expired");
    }

    if year > current_year + EXPIRY_MAX_YEARS_AHEAD {
        return ValidationResult::err("Expiry year is too far in the future");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // Fixed reference date for deterministic tests: June 2024
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_phone_validation() {
        assert!(validate_phone("+998901234567").is_valid);
        assert!(!validate_phone("+99890123456").is_valid); // 12 chars
        assert!(!validate_phone("+9989012345678").is_valid); // 14 chars
        assert!(!validate_phone("998901234567").is_valid); // missing +
        assert!(!validate_phone("+99890123456a").is_valid);
        assert!(!validate_phone("").is_valid);
    }

    #[test]
    fn test_expiry_rejects_incomplete_input() {
        assert!(!validate_expiry("", today()).is_valid);
        assert!(!validate_expiry("122", today()).is_valid);
        assert!(!validate_expiry("12/4", today()).is_valid);
    }

    #[test]
    fn test_expiry_rejects_invalid_month() {
        assert!(!validate_expiry("1325", today()).is_valid);
        assert!(!validate_expiry("0025", today()).is_valid);
    }

    #[test]
    fn test_expiry_rejects_past_dates() {
        // January 2024 is behind June 2024
        assert!(!validate_expiry("0124", today()).is_valid);
        assert!(!validate_expiry("1223", today()).is_valid);
    }

    #[test]
    fn test_expiry_accepts_current_month() {
        assert!(validate_expiry("0624", today()).is_valid);
    }

    #[test]
    fn test_expiry_accepts_future_within_ceiling() {
        assert!(validate_expiry("0724", today()).is_valid);
        assert!(validate_expiry("1239", today()).is_valid); // 2024 + 15
    }

    #[test]
    fn test_expiry_rejects_far_future() {
        assert!(!validate_expiry("1299", today()).is_valid);
        assert!(!validate_expiry("0140", today()).is_valid); // 2024 + 16
    }
}
