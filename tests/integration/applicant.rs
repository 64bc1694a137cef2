//! Address Composition and Applicant Assembly Tests
//!
//! Builds addresses and applicants whose city/state comes from the lookup
//! client, through the resolver closures it hands out.

use crate::common::{self, austin, failing};
use applicant_core::error::{ApplicantError, ValidationError};
use applicant_core::validation::ValidationOutcome;
use applicant_core::value_objects::{Address, Applicant, CityState, Name};

#[test]
fn test_address_from_lookup() {
    let client = common::stub_client();

    let address = Address::builder()
        .zip_code(" 78701 ")
        .lookup_with(client.resolver())
        .build()
        .expect("Austin resolves");

    assert_eq!(address.zip_code(), "78701");
    assert_eq!(address.city_state(), &austin());
    assert_eq!(address.display_format(), "Austin, TX 78701");
}

#[test]
fn test_address_lookup_failure_aborts() {
    let client = common::stub_client();

    let result = Address::builder()
        .zip_code(failing::NOT_FOUND)
        .lookup_with(client.resolver())
        .build();

    assert_eq!(
        result,
        Err(ValidationError::CityStateUnresolved {
            zip_code: failing::NOT_FOUND.to_string(),
            reason: "lookup failed with HTTP status 404".to_string(),
        })
    );
}

#[test]
fn test_address_with_fallback_resolver() {
    let client = common::cached_stub_client();

    let address = Address::from_zip_code(failing::EMPTY_PLACES, client.fallback_resolver())
        .expect("fallback always yields a city/state");

    assert_eq!(address.city_state(), &CityState::unknown());
    assert_eq!(address.display_format(), "Unknown, UNKNOWN 22222");
    assert_eq!(client.cache_len(), 1);
}

#[test]
fn test_blank_zip_skips_lookup() {
    let client = common::stub_client();

    let result = Address::builder()
        .zip_code("   ")
        .lookup_with(client.resolver())
        .build();

    assert_eq!(result, Err(ValidationError::EmptyZipCode));
    assert_eq!(client.transport().request_count(), 0);
}

#[test]
fn test_applicant_with_looked_up_address() {
    let client = common::stub_client();

    let applicant = Applicant::builder()
        .name(Name::of("Jane", "Ann", "Doe"))
        .ssn("123-45-6789")
        .address(Address::builder().zip_code("90210").lookup_with(client.resolver()))
        .build()
        .expect("all fields are valid");

    assert_eq!(applicant.name().last_name_first(), "Doe, Jane Ann");
    assert_eq!(applicant.address().city(), "Beverly Hills");

    let json = serde_json::to_value(&applicant).expect("applicant serializes");
    assert_eq!(json["ssn"], "123456789");
    assert_eq!(json["address"]["cityState"]["state"], "CA");
}

#[test]
fn test_applicant_aborts_on_each_invalid_field() {
    let client = common::stub_client();
    let valid_address = || Address::builder().zip_code("78701").lookup_with(client.resolver());

    let bad_name = Applicant::builder()
        .name(Name::first_last("", ""))
        .ssn("123-45-6789")
        .address(valid_address())
        .build();
    assert!(matches!(
        bad_name,
        Err(ApplicantError::Validation(ValidationError::InvalidName {
            outcome: ValidationOutcome::MissingRequiredField
        }))
    ));

    let bad_ssn = Applicant::builder()
        .name(Name::first_last("Jane", "Doe"))
        .ssn("923-45-6789")
        .address(valid_address())
        .build();
    assert!(matches!(bad_ssn, Err(ApplicantError::Ssn(ref e)) if e.legacy_error_code() == 2));

    let bad_address = Applicant::builder()
        .name(Name::first_last("Jane", "Doe"))
        .ssn("123-45-6789")
        .address(Address::builder().zip_code(failing::SERVICE_UNAVAILABLE).lookup_with(client.resolver()))
        .build();
    assert!(matches!(
        bad_address,
        Err(ApplicantError::Validation(ValidationError::CityStateUnresolved { .. }))
    ));

    // Name and SSN failures abort before the address lookup runs.
    assert_eq!(client.transport().request_count(), 1);
}
