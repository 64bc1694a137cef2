use super::ValidationOutcome;

/// Classify a name given as three optional parts.
///
/// First and last name are required; the middle name is never checked.
/// A name missing both required parts is reported as missing, a name missing
/// only one of them as badly formatted.
pub fn validate_name(
    first: Option<&str>,
    _middle: Option<&str>,
    last: Option<&str>,
) -> ValidationOutcome {
    let first_empty = is_blank(first);
    let last_empty = is_blank(last);

    match (first_empty, last_empty) {
        (true, true) => ValidationOutcome::MissingRequiredField,
        (true, false) | (false, true) => ValidationOutcome::InvalidFormat,
        (false, false) => ValidationOutcome::Valid,
    }
}

fn is_blank(part: Option<&str>) -> bool {
    part.is_none_or(|p| p.trim().is_empty())
}
