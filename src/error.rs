//! Error types for applicant validation and ZIP-code lookup.
//!
//! Expected failures are values: validators return a
//! [`ValidationOutcome`](crate::validation::ValidationOutcome) and the lookup
//! client returns a [`LookupResult`](crate::lookup::LookupResult). The enums in
//! this module cover the remaining boundaries where a typed error is raised:
//! value-object construction, the strict SSN entry point, and the transport.

use crate::validation::ValidationOutcome;

/// Top-level error type for the crate.
///
/// Wraps the narrower error enums so callers assembling a whole applicant
/// record can propagate any of them with `?`.
#[derive(Debug, thiserror::Error)]
pub enum ApplicantError {
    /// A value object rejected its input
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The SSN failed one of its validation rules
    #[error(transparent)]
    Ssn(#[from] SsnValidationError),

    /// The lookup transport could not be set up
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Construction failures of value objects.
///
/// These are raised only when a factory receives data that was never run
/// through the matching validator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// City is empty after trimming
    #[error("City cannot be empty")]
    EmptyCity,

    /// State is empty after trimming
    #[error("State cannot be empty")]
    EmptyState,

    /// ZIP code is empty after trimming
    #[error("Zip code cannot be empty")]
    EmptyZipCode,

    /// Address builder finished without a city/state or a way to resolve one
    #[error("Valid city and state are required")]
    MissingCityState,

    /// A resolved city/state failed its own invariants
    #[error("Resolved city and state for zip code '{zip_code}' are invalid")]
    InvalidCityState { zip_code: String },

    /// The lookup function reported a failure for the ZIP code
    #[error("Could not resolve city and state for zip code '{zip_code}': {reason}")]
    CityStateUnresolved { zip_code: String, reason: String },

    /// Name failed validation
    #[error("Invalid name: {}", outcome.message())]
    InvalidName { outcome: ValidationOutcome },

    /// Applicant builder is missing a required field
    #[error("Required field '{field}' is missing")]
    MissingRequiredField { field: String },
}

/// Raised by the strict SSN entry points when the outcome is not valid.
///
/// Carries the outcome and the input exactly as it was supplied, before any
/// dash stripping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("SSN validation failed: {} (value: {invalid_value})", outcome.message())]
pub struct SsnValidationError {
    outcome: ValidationOutcome,
    invalid_value: String,
}

impl SsnValidationError {
    pub fn new(outcome: ValidationOutcome, invalid_value: impl Into<String>) -> Self {
        Self {
            outcome,
            invalid_value: invalid_value.into(),
        }
    }

    /// The outcome that caused the rejection.
    pub fn outcome(&self) -> ValidationOutcome {
        self.outcome
    }

    /// The rejected input, un-normalized.
    pub fn invalid_value(&self) -> &str {
        &self.invalid_value
    }

    /// Numeric code kept for callers still keyed on integer results.
    pub fn legacy_error_code(&self) -> u8 {
        self.outcome.legacy_code()
    }
}

/// Failures of the outbound HTTP step.
///
/// The lookup client converts every one of these into a
/// [`LookupResult::Failure`](crate::lookup::LookupResult::Failure); they never
/// escape [`LookupClient::lookup`](crate::lookup::LookupClient::lookup).
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Server answered with a non-2xx status
    #[error("lookup failed with HTTP status {status}")]
    Status { status: u16 },

    /// Connection, timeout or body read failure
    #[error("network error during lookup: {message}")]
    Network { message: String },

    /// The HTTP client could not be constructed
    #[error("invalid transport configuration: {message}")]
    Configuration { message: String },
}

impl ValidationError {
    /// Create a missing required field error
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::MissingRequiredField {
            field: field.into(),
        }
    }

    /// Create an unresolved city/state error
    pub fn unresolved(zip_code: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CityStateUnresolved {
            zip_code: zip_code.into(),
            reason: reason.into(),
        }
    }
}

impl TransportError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(error: reqwest::Error) -> Self {
        match error.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
            },
            None => Self::network(error.to_string()),
        }
    }
}

// Result type aliases for convenience
pub type ApplicantResult<T> = Result<T, ApplicantError>;
pub type ValidationResult<T> = Result<T, ValidationError>;
