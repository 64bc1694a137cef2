//! Pure validators for applicant fields.
//!
//! Each validator classifies a candidate value into a [`ValidationOutcome`].
//! Validators perform no I/O, hold no state and never fail: a bad value is
//! reported through the returned outcome, not through an error.
//!
//! ```rust
//! use applicant_core::validation::{ValidationOutcome, validate_ssn, validate_zip_code};
//!
//! assert_eq!(validate_ssn("123-45-6789"), ValidationOutcome::Valid);
//! assert_eq!(validate_ssn("666-45-6789"), ValidationOutcome::InvalidAreaNumber);
//! assert_eq!(validate_zip_code("78701-1234"), ValidationOutcome::Valid);
//! ```

mod name;
mod ssn;
mod zip;

pub use name::validate_name;
pub use ssn::{format_ssn, normalize_ssn, validate_ssn, validate_ssn_strict};
pub use zip::{is_valid_zip_code, normalize_zip_code, validate_zip_code};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of validating a single field.
///
/// Every variant carries the numeric code the older integer-returning
/// validators used, so results can still be exchanged with callers keyed on
/// those codes. Code 5 was never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationOutcome {
    Valid,
    InvalidFormat,
    InvalidAreaNumber,
    InvalidSerialNumber,
    SpecialCaseInvalid,
    MissingRequiredField,
}

impl ValidationOutcome {
    pub const ALL: [ValidationOutcome; 6] = [
        ValidationOutcome::Valid,
        ValidationOutcome::InvalidFormat,
        ValidationOutcome::InvalidAreaNumber,
        ValidationOutcome::InvalidSerialNumber,
        ValidationOutcome::SpecialCaseInvalid,
        ValidationOutcome::MissingRequiredField,
    ];

    /// Numeric code of the legacy integer validators.
    pub fn legacy_code(self) -> u8 {
        match self {
            ValidationOutcome::Valid => 0,
            ValidationOutcome::InvalidFormat => 1,
            ValidationOutcome::InvalidAreaNumber => 2,
            ValidationOutcome::InvalidSerialNumber => 3,
            ValidationOutcome::SpecialCaseInvalid => 4,
            ValidationOutcome::MissingRequiredField => 6,
        }
    }

    /// Human-readable description.
    pub fn message(self) -> &'static str {
        match self {
            ValidationOutcome::Valid => "Valid",
            ValidationOutcome::InvalidFormat => "Invalid format",
            ValidationOutcome::InvalidAreaNumber => {
                "Invalid area number - cannot start with 000, 666, or 9"
            }
            ValidationOutcome::InvalidSerialNumber => "Invalid serial number - cannot be 0000",
            ValidationOutcome::SpecialCaseInvalid => {
                "Special case - this number is reserved and cannot be used"
            }
            ValidationOutcome::MissingRequiredField => "Missing required field",
        }
    }

    pub fn is_valid(self) -> bool {
        self == ValidationOutcome::Valid
    }

    /// Map a legacy integer code back to its outcome.
    ///
    /// Returns `None` for codes that were never assigned.
    pub fn from_legacy_code(code: u8) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|outcome| outcome.legacy_code() == code)
    }

    fn tag(self) -> &'static str {
        match self {
            ValidationOutcome::Valid => "VALID",
            ValidationOutcome::InvalidFormat => "INVALID_FORMAT",
            ValidationOutcome::InvalidAreaNumber => "INVALID_AREA_NUMBER",
            ValidationOutcome::InvalidSerialNumber => "INVALID_SERIAL_NUMBER",
            ValidationOutcome::SpecialCaseInvalid => "SPECIAL_CASE_INVALID",
            ValidationOutcome::MissingRequiredField => "MISSING_REQUIRED_FIELD",
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.tag(), self.legacy_code(), self.message())
    }
}
