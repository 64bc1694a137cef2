//! Applicant aggregate.

use crate::error::{ApplicantResult, ValidationError};
use crate::validation::ValidationOutcome;
use crate::value_objects::{Address, AddressBuilder, Name, Ssn};
use serde::Serialize;

/// A job applicant whose name, SSN and address have all been validated.
///
/// ## Examples
///
/// ```rust
/// use applicant_core::value_objects::{Address, Applicant, Name};
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let applicant = Applicant::builder()
///         .name(Name::first_last("Jane", "Doe"))
///         .ssn("123-45-6789")
///         .address(Address::builder().zip_code("78701").city_and_state("Austin", "TX"))
///         .build()?;
///
///     assert_eq!(applicant.ssn().digits(), "123456789");
///     assert_eq!(applicant.address().display_format(), "Austin, TX 78701");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Applicant {
    name: Name,
    ssn: Ssn,
    address: Address,
}

impl Applicant {
    pub fn builder() -> ApplicantBuilder {
        ApplicantBuilder::default()
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn ssn(&self) -> &Ssn {
        &self.ssn
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

/// Collects the raw applicant fields and validates them in order: name, SSN,
/// then address. The first violation is returned.
#[derive(Debug, Default)]
pub struct ApplicantBuilder {
    name: Option<Name>,
    ssn: Option<String>,
    address: Option<AddressBuilder>,
}

impl ApplicantBuilder {
    pub fn name(mut self, name: Name) -> Self {
        self.name = Some(name);
        self
    }

    pub fn ssn(mut self, ssn: impl Into<String>) -> Self {
        self.ssn = Some(ssn.into());
        self
    }

    /// The address is composed at build time, so a lookup configured on the
    /// builder only runs once the name and SSN have passed.
    pub fn address(mut self, address: AddressBuilder) -> Self {
        self.address = Some(address);
        self
    }

    pub fn build(self) -> ApplicantResult<Applicant> {
        let name = self
            .name
            .ok_or_else(|| ValidationError::missing_required("name"))?;
        let outcome = name.validate();
        if outcome != ValidationOutcome::Valid {
            return Err(ValidationError::InvalidName { outcome }.into());
        }

        let ssn = self
            .ssn
            .ok_or_else(|| ValidationError::missing_required("ssn"))?;
        let ssn = Ssn::parse(&ssn)?;

        let address = self
            .address
            .ok_or_else(|| ValidationError::missing_required("address"))?
            .build()?;

        Ok(Applicant { name, ssn, address })
    }
}
