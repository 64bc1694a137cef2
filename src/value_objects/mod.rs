//! Immutable value objects for applicant data.
//!
//! Each type enforces its invariants at construction, so a value that exists
//! is valid. [`Name`] is the exception: it can hold partial input and reports
//! its state through [`Name::validate`].

mod address;
mod applicant;
mod city_state;
mod name;
mod ssn;

pub use address::{Address, AddressBuilder, CityStateLookupFn, CityStateResolver};
pub use applicant::{Applicant, ApplicantBuilder};
pub use city_state::CityState;
pub use name::Name;
pub use ssn::Ssn;
