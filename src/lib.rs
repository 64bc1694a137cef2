//! Validation and ZIP-code lookup core for job applicant records.
//!
//! Validates the identity data of an applicant (name, SSN, ZIP code) and
//! resolves ZIP codes to a city and state through an HTTP+JSON service.
//!
//! # Core Components
//!
//! - [`validation`] - Pure validators returning a [`ValidationOutcome`]
//! - [`value_objects`] - Immutable [`CityState`], [`Address`], [`Name`], [`Ssn`]
//!   and the [`Applicant`] aggregate
//! - [`LookupClient`] - City/state resolution with an optional cache, an async
//!   wrapper and batch lookups
//! - [`LookupResult`] - Success/failure value returned by every lookup
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use applicant_core::{Address, LookupClient, LookupConfig};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = LookupClient::new(LookupConfig::default().with_cache(true))?;
//!
//! let address = Address::builder()
//!     .zip_code("78701")
//!     .lookup_with(client.resolver())
//!     .build()?;
//! println!("{}", address.display_format());
//! # Ok(())
//! # }
//! ```
//!
//! The library logs through the [`log`] facade and never installs a logger.

pub mod error;
pub mod lookup;
pub mod validation;
pub mod value_objects;

// Re-export commonly used types for convenience
pub use error::{
    ApplicantError, ApplicantResult, SsnValidationError, TransportError, ValidationError,
    ValidationResult,
};
pub use lookup::{LookupClient, LookupConfig, LookupResult, ZipCodeTransport};
pub use validation::{ValidationOutcome, validate_name, validate_ssn, validate_zip_code};
pub use value_objects::{
    Address, AddressBuilder, Applicant, ApplicantBuilder, CityState, Name, Ssn,
};
