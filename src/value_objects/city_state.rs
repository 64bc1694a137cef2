//! City/state value object resolved from a ZIP code.

use crate::error::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated city and state pair.
///
/// ## Validation Rules
///
/// - City and state must both be non-empty after trimming
/// - The city is trimmed but otherwise kept as given
/// - The state is trimmed and uppercased
///
/// ## Examples
///
/// ```rust
/// use applicant_core::value_objects::CityState;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let austin = CityState::of("Austin", "tx")?;
///     assert_eq!(austin.state(), "TX");
///     assert_eq!(austin.display_format(), "Austin, TX");
///
///     assert!(CityState::of("", "TX").is_err());
///     assert!(CityState::of_nullable(Some("Austin"), None).is_none());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCityState")]
pub struct CityState {
    city: String,
    state: String,
}

#[derive(Deserialize)]
struct RawCityState {
    city: String,
    state: String,
}

impl TryFrom<RawCityState> for CityState {
    type Error = ValidationError;

    fn try_from(raw: RawCityState) -> Result<Self, Self::Error> {
        Self::of(&raw.city, &raw.state)
    }
}

impl CityState {
    /// Create a new CityState, normalizing both fields.
    ///
    /// # Returns
    ///
    /// * `Ok(CityState)` - If both fields are non-empty after trimming
    /// * `Err(ValidationError)` - `EmptyCity` or `EmptyState` otherwise
    pub fn of(city: &str, state: &str) -> ValidationResult<Self> {
        let city = city.trim();
        let state = state.trim();

        if city.is_empty() {
            return Err(ValidationError::EmptyCity);
        }
        if state.is_empty() {
            return Err(ValidationError::EmptyState);
        }

        Ok(Self {
            city: city.to_string(),
            state: state.to_uppercase(),
        })
    }

    /// Null-safe variant of [`CityState::of`].
    ///
    /// Absent fields are treated as empty; any violation yields `None`
    /// instead of an error.
    pub fn of_nullable(city: Option<&str>, state: Option<&str>) -> Option<Self> {
        Self::of(city.unwrap_or_default(), state.unwrap_or_default()).ok()
    }

    /// Placeholder used when a lookup fails and the caller asked for a value
    /// regardless.
    pub fn unknown() -> Self {
        Self {
            city: "Unknown".to_string(),
            state: "UNKNOWN".to_string(),
        }
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    /// Always true for values built through the factories.
    pub fn is_valid(&self) -> bool {
        !self.city.is_empty() && !self.state.is_empty()
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }

    /// `"{city}, {state}"`
    pub fn display_format(&self) -> String {
        format!("{}, {}", self.city, self.state)
    }
}

impl fmt::Display for CityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.city, self.state)
    }
}
