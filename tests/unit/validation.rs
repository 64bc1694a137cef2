//! Validator Tests
//!
//! Property tests for the SSN and name rules, plus the documented examples
//! for each validator.

use applicant_core::validation::{
    ValidationOutcome, format_ssn, is_valid_zip_code, normalize_ssn, normalize_zip_code,
    validate_name, validate_ssn, validate_ssn_strict, validate_zip_code,
};
use applicant_core::value_objects::Name;
use proptest::prelude::*;

/// Strategy for area numbers the validator must reject
fn forbidden_area_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("000".to_string()),
        Just("666".to_string()),
        (0u32..100).prop_map(|n| format!("9{:02}", n)),
    ]
}

/// Strategy for optional name parts that are empty after trimming
fn blank_part_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        "[ \t]{0,4}".prop_map(Some),
    ]
}

proptest! {
    #[test]
    fn forbidden_area_numbers_are_rejected(
        area in forbidden_area_strategy(),
        group in 0u32..100,
        serial in 0u32..10000,
        dashed in any::<bool>(),
    ) {
        let ssn = if dashed {
            format!("{}-{:02}-{:04}", area, group, serial)
        } else {
            format!("{}{:02}{:04}", area, group, serial)
        };
        prop_assert_eq!(validate_ssn(&ssn), ValidationOutcome::InvalidAreaNumber);
    }

    #[test]
    fn zero_serial_is_rejected_for_permitted_areas(
        area in 1u32..900,
        group in 0u32..100,
    ) {
        prop_assume!(area != 666);
        let ssn = format!("{:03}{:02}0000", area, group);
        prop_assert_eq!(validate_ssn(&ssn), ValidationOutcome::InvalidSerialNumber);
    }

    #[test]
    fn dashes_do_not_change_the_outcome(
        area in 0u32..1000,
        group in 0u32..100,
        serial in 0u32..10000,
    ) {
        let plain = format!("{:03}{:02}{:04}", area, group, serial);
        let dashed = format!("{:03}-{:02}-{:04}", area, group, serial);
        prop_assert_eq!(validate_ssn(&plain), validate_ssn(&dashed));
        prop_assert_eq!(format_ssn(&plain), dashed.clone());
        prop_assert_eq!(normalize_ssn(&dashed), plain);
    }

    #[test]
    fn names_without_first_and_last_are_missing(
        first in blank_part_strategy(),
        middle in proptest::option::of("[A-Za-z ]{0,12}"),
        last in blank_part_strategy(),
    ) {
        prop_assert_eq!(
            validate_name(first.as_deref(), middle.as_deref(), last.as_deref()),
            ValidationOutcome::MissingRequiredField
        );
        let name = Name::new(first.as_deref(), middle.as_deref(), last.as_deref());
        prop_assert_eq!(name.validate(), ValidationOutcome::MissingRequiredField);
    }

    #[test]
    fn five_digit_zip_codes_are_valid(zip in "[0-9]{5}", plus_four in proptest::option::of("[0-9]{4}")) {
        let input = match &plus_four {
            Some(extension) => format!("{}-{}", zip, extension),
            None => zip.clone(),
        };
        prop_assert!(is_valid_zip_code(&input));
        prop_assert_eq!(normalize_zip_code(&input), Some(zip.as_str()));
    }
}

#[test]
fn test_reserved_ssns_with_and_without_dashes() {
    for ssn in ["078051120", "078-05-1120", "219099999", "219-09-9999"] {
        assert_eq!(
            validate_ssn(ssn),
            ValidationOutcome::SpecialCaseInvalid,
            "{ssn} should be reserved"
        );
    }
}

#[test]
fn test_ssn_outcomes() {
    assert_eq!(validate_ssn("123-45-6789"), ValidationOutcome::Valid);
    assert_eq!(validate_ssn("123456789"), ValidationOutcome::Valid);
    assert_eq!(validate_ssn(""), ValidationOutcome::MissingRequiredField);
    assert_eq!(validate_ssn("   "), ValidationOutcome::MissingRequiredField);
    assert_eq!(validate_ssn("12-345-6789"), ValidationOutcome::InvalidFormat);
    assert_eq!(validate_ssn("1234567890"), ValidationOutcome::InvalidFormat);
    assert_eq!(validate_ssn("abc-de-fghi"), ValidationOutcome::InvalidFormat);
}

#[test]
fn test_strict_ssn_reports_original_input() {
    let error = validate_ssn_strict("666-12-3456").unwrap_err();
    assert_eq!(error.outcome(), ValidationOutcome::InvalidAreaNumber);
    assert_eq!(error.invalid_value(), "666-12-3456");
    assert_eq!(error.legacy_error_code(), 2);
    assert!(validate_ssn_strict("123-45-6789").is_ok());
}

#[test]
fn test_name_outcomes() {
    assert_eq!(
        validate_name(Some("John"), None, Some("Doe")),
        ValidationOutcome::Valid
    );
    assert_eq!(
        validate_name(Some("John"), Some("Q"), Some("  ")),
        ValidationOutcome::InvalidFormat
    );
    assert_eq!(
        validate_name(None, None, Some("Doe")),
        ValidationOutcome::InvalidFormat
    );
}

#[test]
fn test_zip_outcomes() {
    assert_eq!(validate_zip_code("78701"), ValidationOutcome::Valid);
    assert_eq!(validate_zip_code(" 78701-1234 "), ValidationOutcome::Valid);
    assert_eq!(validate_zip_code(""), ValidationOutcome::MissingRequiredField);
    assert_eq!(validate_zip_code("787011234"), ValidationOutcome::InvalidFormat);
    assert_eq!(validate_zip_code("７８７０１"), ValidationOutcome::InvalidFormat);
}

#[test]
fn test_outcome_display() {
    assert_eq!(
        ValidationOutcome::SpecialCaseInvalid.to_string(),
        format!(
            "SPECIAL_CASE_INVALID (4): {}",
            ValidationOutcome::SpecialCaseInvalid.message()
        )
    );
    assert_eq!(ValidationOutcome::MissingRequiredField.legacy_code(), 6);
}
