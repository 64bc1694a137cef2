//! Social Security Number value object.

use crate::error::SsnValidationError;
use crate::validation::{ValidationOutcome, format_ssn, normalize_ssn, validate_ssn_strict};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated SSN, stored as 9 digits without dashes.
///
/// ## Validation Rules
///
/// The input must pass [`validate_ssn`](crate::validation::validate_ssn):
/// `DDD-DD-DDDD` or 9 raw digits, a permitted area number, a non-zero serial
/// number, and not one of the reserved sample numbers.
///
/// ## Examples
///
/// ```rust
/// use applicant_core::value_objects::Ssn;
/// use applicant_core::validation::ValidationOutcome;
///
/// let ssn = Ssn::parse("123-45-6789").unwrap();
/// assert_eq!(ssn.digits(), "123456789");
/// assert_eq!(ssn.formatted(), "123-45-6789");
///
/// let error = Ssn::parse("666-12-3456").unwrap_err();
/// assert_eq!(error.outcome(), ValidationOutcome::InvalidAreaNumber);
/// assert!(Ssn::of_nullable("666-12-3456").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ssn {
    digits: String,
}

impl Ssn {
    /// Parse and validate an SSN.
    ///
    /// # Returns
    ///
    /// * `Ok(Ssn)` - If the input is valid
    /// * `Err(SsnValidationError)` - Carrying the outcome and the input as given
    pub fn parse(input: &str) -> Result<Self, SsnValidationError> {
        validate_ssn_strict(input)?;
        Ok(Self {
            digits: normalize_ssn(input),
        })
    }

    /// Like [`Ssn::parse`] but yields `None` for invalid input.
    pub fn of_nullable(input: &str) -> Option<Self> {
        Self::parse(input).ok()
    }

    /// The 9 digits without dashes.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// `DDD-DD-DDDD`
    pub fn formatted(&self) -> String {
        format_ssn(&self.digits)
    }

    /// Always [`ValidationOutcome::Valid`] for a constructed value.
    pub fn validate(&self) -> ValidationOutcome {
        crate::validation::validate_ssn(&self.digits)
    }
}

impl TryFrom<String> for Ssn {
    type Error = SsnValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Ssn> for String {
    fn from(ssn: Ssn) -> Self {
        ssn.digits
    }
}

impl fmt::Display for Ssn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}
