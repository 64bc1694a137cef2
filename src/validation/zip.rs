use super::ValidationOutcome;
use regex::Regex;
use std::sync::LazyLock;

static ZIP_CODE_FORMAT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{5}(?:-[0-9]{4})?$").expect("ZIP code pattern is valid")
});

/// Classify a 5-digit or ZIP+4 code. Surrounding whitespace is ignored.
pub fn validate_zip_code(zip_code: &str) -> ValidationOutcome {
    let trimmed = zip_code.trim();
    if trimmed.is_empty() {
        ValidationOutcome::MissingRequiredField
    } else if ZIP_CODE_FORMAT.is_match(trimmed) {
        ValidationOutcome::Valid
    } else {
        ValidationOutcome::InvalidFormat
    }
}

pub fn is_valid_zip_code(zip_code: &str) -> bool {
    validate_zip_code(zip_code).is_valid()
}

/// Reduce a well-formed ZIP or ZIP+4 code to its first 5 digits.
///
/// Returns `None` when the input does not pass [`validate_zip_code`].
pub fn normalize_zip_code(zip_code: &str) -> Option<&str> {
    let trimmed = zip_code.trim();
    ZIP_CODE_FORMAT.is_match(trimmed).then(|| &trimmed[..5])
}
