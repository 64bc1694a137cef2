//! Name value object for an applicant's first, middle and last name.

use crate::error::{ValidationError, ValidationResult};
use crate::validation::{ValidationOutcome, validate_name};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An applicant's name.
///
/// Absent parts are stored as empty strings and every part is trimmed. A
/// `Name` may exist without being valid so that partially entered data can
/// still be formatted; call [`Name::validate`] or construct through
/// [`Name::validated`] when both first and last name are required.
///
/// ## Examples
///
/// ```rust
/// use applicant_core::value_objects::Name;
/// use applicant_core::validation::ValidationOutcome;
///
/// let name = Name::of("John", "Quincy", "Doe");
/// assert_eq!(name.full_name(), "John Quincy Doe");
/// assert_eq!(name.last_name_first(), "Doe, John Quincy");
/// assert_eq!(name.display_name(), "John Q. Doe");
/// assert_eq!(name.validate(), ValidationOutcome::Valid);
///
/// let spanish = Name::spanish(Some("Juan"), Some("Carlos"), Some("García"), Some("López"));
/// assert_eq!(spanish.last(), "García López");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawName")]
pub struct Name {
    first: String,
    middle: String,
    last: String,
}

#[derive(Deserialize)]
struct RawName {
    first: Option<String>,
    middle: Option<String>,
    last: Option<String>,
}

impl From<RawName> for Name {
    fn from(raw: RawName) -> Self {
        Self::new(raw.first.as_deref(), raw.middle.as_deref(), raw.last.as_deref())
    }
}

impl Name {
    /// Create a name from optional parts.
    pub fn new(first: Option<&str>, middle: Option<&str>, last: Option<&str>) -> Self {
        Self {
            first: clean(first),
            middle: clean(middle),
            last: clean(last),
        }
    }

    pub fn of(first: &str, middle: &str, last: &str) -> Self {
        Self::new(Some(first), Some(middle), Some(last))
    }

    /// Create a name without a middle part.
    pub fn first_last(first: &str, last: &str) -> Self {
        Self::new(Some(first), None, Some(last))
    }

    /// Create a name following the Spanish convention of two given names and
    /// two surnames.
    ///
    /// The surnames are joined with a single space into the last-name slot;
    /// the second surname is dropped when empty. Without a first surname the
    /// last name is left empty.
    pub fn spanish(
        primer_nombre: Option<&str>,
        segundo_nombre: Option<&str>,
        primer_apellido: Option<&str>,
        segundo_apellido: Option<&str>,
    ) -> Self {
        let primer = clean(primer_apellido);
        let segundo = clean(segundo_apellido);
        let last = match (primer.is_empty(), segundo.is_empty()) {
            (true, _) => String::new(),
            (false, true) => primer,
            (false, false) => format!("{} {}", primer, segundo),
        };

        Self {
            first: clean(primer_nombre),
            middle: clean(segundo_nombre),
            last,
        }
    }

    /// Create a name, rejecting it unless [`Name::validate`] reports it valid.
    pub fn validated(
        first: Option<&str>,
        middle: Option<&str>,
        last: Option<&str>,
    ) -> ValidationResult<Self> {
        let name = Self::new(first, middle, last);
        match name.validate() {
            ValidationOutcome::Valid => Ok(name),
            outcome => Err(ValidationError::InvalidName { outcome }),
        }
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn middle(&self) -> &str {
        &self.middle
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// Non-empty parts in first, middle, last order joined by single spaces.
    pub fn full_name(&self) -> String {
        [&self.first, &self.middle, &self.last]
            .into_iter()
            .filter(|part| !part.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `"Last, First Middle"`.
    ///
    /// Empty when there is no last name; just the last name when there is no
    /// first name.
    pub fn last_name_first(&self) -> String {
        if self.last.is_empty() {
            return String::new();
        }
        if self.first.is_empty() {
            return self.last.clone();
        }
        if self.middle.is_empty() {
            format!("{}, {}", self.last, self.first)
        } else {
            format!("{}, {} {}", self.last, self.first, self.middle)
        }
    }

    /// `"First M. Last"`, collapsing to whichever single name is present.
    pub fn display_name(&self) -> String {
        if self.last.is_empty() {
            return self.first.clone();
        }
        if self.first.is_empty() {
            return self.last.clone();
        }
        match self.middle.chars().next() {
            Some(initial) => format!("{} {}. {}", self.first, initial, self.last),
            None => format!("{} {}", self.first, self.last),
        }
    }

    /// Uppercased first letter of each present part.
    pub fn initials(&self) -> String {
        [&self.first, &self.middle, &self.last]
            .into_iter()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn validate(&self) -> ValidationOutcome {
        validate_name(Some(&self.first), Some(&self.middle), Some(&self.last))
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_valid()
    }

    pub fn with_first_name(&self, first: &str) -> Self {
        Self::new(Some(first), Some(&self.middle), Some(&self.last))
    }

    pub fn with_middle_name(&self, middle: &str) -> Self {
        Self::new(Some(&self.first), Some(middle), Some(&self.last))
    }

    pub fn with_last_name(&self, last: &str) -> Self {
        Self::new(Some(&self.first), Some(&self.middle), Some(last))
    }
}

fn clean(part: Option<&str>) -> String {
    part.map(str::trim).unwrap_or_default().to_string()
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_name())
    }
}
