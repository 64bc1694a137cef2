//! SSN validation rules.
//!
//! The area, serial and reserved-number checks encode the pre-2011 issuance
//! rules. Numbers issued after randomization may legitimately fail them.

use super::ValidationOutcome;
use crate::error::SsnValidationError;
use regex::Regex;
use std::sync::LazyLock;

static SSN_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{3}-[0-9]{2}-[0-9]{4}|[0-9]{9})$").expect("SSN format pattern is valid")
});

const INVALID_AREA_NUMBERS: [&str; 2] = ["000", "666"];
const RESERVED_SSNS: [&str; 2] = ["219099999", "078051120"];

/// Classify an SSN given with or without dashes.
///
/// Checks run in order and the first failing rule decides the outcome.
pub fn validate_ssn(ssn: &str) -> ValidationOutcome {
    if ssn.trim().is_empty() {
        return ValidationOutcome::MissingRequiredField;
    }

    if !SSN_FORMAT.is_match(ssn) {
        return ValidationOutcome::InvalidFormat;
    }

    let digits = ssn.replace('-', "");
    if !is_nine_digits(&digits) {
        return ValidationOutcome::InvalidFormat;
    }

    let area = &digits[..3];
    if INVALID_AREA_NUMBERS.contains(&area) || area.starts_with('9') {
        return ValidationOutcome::InvalidAreaNumber;
    }

    if &digits[5..] == "0000" {
        return ValidationOutcome::InvalidSerialNumber;
    }

    if RESERVED_SSNS.contains(&digits.as_str()) {
        return ValidationOutcome::SpecialCaseInvalid;
    }

    ValidationOutcome::Valid
}

/// Validate an SSN, raising a typed error for anything but
/// [`ValidationOutcome::Valid`].
///
/// The error keeps the input exactly as given.
pub fn validate_ssn_strict(ssn: &str) -> Result<(), SsnValidationError> {
    match validate_ssn(ssn) {
        ValidationOutcome::Valid => Ok(()),
        outcome => Err(SsnValidationError::new(outcome, ssn)),
    }
}

/// Strip dashes, returning the 9 digits or an empty string when the result
/// is not exactly 9 ASCII digits.
pub fn normalize_ssn(ssn: &str) -> String {
    let digits = ssn.replace('-', "");
    if is_nine_digits(&digits) {
        digits
    } else {
        String::new()
    }
}

/// Format 9 digits as `DDD-DD-DDDD`. Anything else is returned unchanged.
pub fn format_ssn(ssn: &str) -> String {
    if !is_nine_digits(ssn) {
        return ssn.to_string();
    }
    format!("{}-{}-{}", &ssn[..3], &ssn[3..5], &ssn[5..])
}

fn is_nine_digits(value: &str) -> bool {
    value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit())
}
