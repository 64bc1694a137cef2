//! Address value object and its builder.
//!
//! An [`Address`] pairs a ZIP code with the city and state it resolves to.
//! The only way to obtain one is [`AddressBuilder::build`] (the factories on
//! [`Address`] delegate to it), which checks every invariant before the value
//! exists.

use crate::error::{ValidationError, ValidationResult};
use crate::lookup::LookupResult;
use crate::value_objects::CityState;
use serde::Serialize;
use std::fmt;

/// Resolves a ZIP code to a city and state, never failing.
pub type CityStateResolver = Box<dyn Fn(&str) -> CityState + Send + Sync>;

/// Resolves a ZIP code to a city and state, reporting failures as values.
pub type CityStateLookupFn = Box<dyn Fn(&str) -> LookupResult<CityState> + Send + Sync>;

/// A validated address.
///
/// ## Validation Rules
///
/// - The ZIP code is trimmed and must not be empty
/// - A valid [`CityState`] must be present
///
/// ## Examples
///
/// ```rust
/// use applicant_core::lookup::LookupResult;
/// use applicant_core::value_objects::{Address, CityState};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let address = Address::builder()
///         .zip_code("78701")
///         .lookup_with(|zip| match zip {
///             "78701" => LookupResult::success(CityState::of("Austin", "TX").unwrap()),
///             _ => LookupResult::failure("unknown zip code"),
///         })
///         .build()?;
///
///     assert_eq!(address.display_format(), "Austin, TX 78701");
///     assert!(Address::of("Austin", "TX", "  ").is_err());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Address {
    #[serde(rename = "zipCode")]
    zip_code: String,
    #[serde(rename = "cityState")]
    city_state: CityState,
}

impl Address {
    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    /// Build an address from its three parts.
    pub fn of(city: &str, state: &str, zip_code: &str) -> ValidationResult<Self> {
        Self::builder()
            .zip_code(zip_code)
            .city_state(CityState::of(city, state)?)
            .build()
    }

    pub fn from_city_state(city_state: CityState, zip_code: &str) -> ValidationResult<Self> {
        Self::builder()
            .zip_code(zip_code)
            .city_state(city_state)
            .build()
    }

    /// Build an address by resolving its ZIP code.
    ///
    /// A blank ZIP code is rejected before `resolve` is called.
    pub fn from_zip_code<F>(zip_code: &str, resolve: F) -> ValidationResult<Self>
    where
        F: Fn(&str) -> CityState + Send + Sync + 'static,
    {
        Self::builder().zip_code(zip_code).resolve_with(resolve).build()
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }

    pub fn city_state(&self) -> &CityState {
        &self.city_state
    }

    pub fn city(&self) -> &str {
        self.city_state.city()
    }

    pub fn state(&self) -> &str {
        self.city_state.state()
    }

    /// `"{city}, {state} {zip}"`
    pub fn display_format(&self) -> String {
        format!("{} {}", self.city_state.display_format(), self.zip_code)
    }

    pub fn is_valid(&self) -> bool {
        !self.zip_code.is_empty() && self.city_state.is_valid()
    }

    /// Copy of this address with a different ZIP code. The city and state
    /// are kept as they are.
    pub fn with_zip_code(&self, zip_code: &str) -> ValidationResult<Self> {
        Self::from_city_state(self.city_state.clone(), zip_code)
    }

    /// Copy of this address with a different city and state.
    pub fn with_city_state(&self, city: &str, state: &str) -> ValidationResult<Self> {
        Self::of(city, state, &self.zip_code)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.city_state, self.zip_code)
    }
}

enum Resolution {
    Resolved(CityState),
    Rejected(ValidationError),
    Resolver(CityStateResolver),
    Lookup(CityStateLookupFn),
}

/// Accumulates the parts of an [`Address`].
///
/// Set a ZIP code and exactly one source for the city and state. A later
/// source replaces an earlier one.
#[derive(Default)]
pub struct AddressBuilder {
    zip_code: Option<String>,
    resolution: Option<Resolution>,
}

impl AddressBuilder {
    pub fn zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = Some(zip_code.into());
        self
    }

    pub fn city_state(mut self, city_state: CityState) -> Self {
        self.resolution = Some(Resolution::Resolved(city_state));
        self
    }

    /// Set the city and state directly.
    ///
    /// An invalid pair is kept as its [`CityState::of`] error, which
    /// [`build`](Self::build) returns once the ZIP code has passed.
    pub fn city_and_state(mut self, city: &str, state: &str) -> Self {
        self.resolution = Some(match CityState::of(city, state) {
            Ok(city_state) => Resolution::Resolved(city_state),
            Err(error) => Resolution::Rejected(error),
        });
        self
    }

    /// Resolve the city and state from the ZIP code at build time.
    pub fn resolve_with<F>(mut self, resolve: F) -> Self
    where
        F: Fn(&str) -> CityState + Send + Sync + 'static,
    {
        self.resolution = Some(Resolution::Resolver(Box::new(resolve)));
        self
    }

    /// Look up the city and state from the ZIP code at build time; a failed
    /// lookup aborts the build.
    pub fn lookup_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> LookupResult<CityState> + Send + Sync + 'static,
    {
        self.resolution = Some(Resolution::Lookup(Box::new(lookup)));
        self
    }

    /// Validate the ZIP code, resolve the city and state, validate them, and
    /// only then produce the address.
    pub fn build(self) -> ValidationResult<Address> {
        let zip_code = self
            .zip_code
            .as_deref()
            .map(str::trim)
            .filter(|zip| !zip.is_empty())
            .ok_or(ValidationError::EmptyZipCode)?
            .to_string();

        let city_state = match self.resolution {
            None => return Err(ValidationError::MissingCityState),
            Some(Resolution::Resolved(city_state)) => city_state,
            Some(Resolution::Rejected(error)) => return Err(error),
            Some(Resolution::Resolver(resolve)) => resolve(&zip_code),
            Some(Resolution::Lookup(lookup)) => match lookup(&zip_code) {
                LookupResult::Success(city_state) => city_state,
                LookupResult::Failure(reason) => {
                    return Err(ValidationError::unresolved(zip_code, reason));
                }
            },
        };

        if !city_state.is_valid() {
            return Err(ValidationError::InvalidCityState { zip_code });
        }

        Ok(Address {
            zip_code,
            city_state,
        })
    }
}

impl fmt::Debug for AddressBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let resolution = match &self.resolution {
            None => "none",
            Some(Resolution::Resolved(_)) => "resolved",
            Some(Resolution::Rejected(_)) => "rejected",
            Some(Resolution::Resolver(_)) => "resolver",
            Some(Resolution::Lookup(_)) => "lookup",
        };
        f.debug_struct("AddressBuilder")
            .field("zip_code", &self.zip_code)
            .field("resolution", &resolution)
            .finish()
    }
}
