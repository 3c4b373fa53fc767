use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::FieldName;
use super::form::FormState;

/// Minimum number of characters accepted for a first name.
pub const FIRST_NAME_MIN_LEN: usize = 5;

/// Broad category of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    RequiredFieldMissing,
    TooShort,
    InvalidFormat,
}

/// A single field violation. Messages are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is a required field")]
    Required { field: FieldName },
    #[error("{field} must have at least {min} characters")]
    TooShort { field: FieldName, min: usize },
    #[error("{field} must be a valid email address")]
    InvalidFormat { field: FieldName },
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> FieldName {
        match self {
            Self::Required { field }
            | Self::TooShort { field, .. }
            | Self::InvalidFormat { field } => *field,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Required { .. } => ErrorKind::RequiredFieldMissing,
            Self::TooShort { .. } => ErrorKind::TooShort,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
        }
    }
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("valid hardcoded regex")
});

/// Validates a first name: required, and at least [`FIRST_NAME_MIN_LEN`] characters.
pub fn validate_first_name(value: &str) -> Result<(), ValidationError> {
    let field = FieldName::FirstName;
    match value.chars().count() {
        0 => Err(ValidationError::Required { field }),
        n if n < FIRST_NAME_MIN_LEN => Err(ValidationError::TooShort {
            field,
            min: FIRST_NAME_MIN_LEN,
        }),
        _ => Ok(()),
    }
}

/// Validates a last name: required, any content accepted.
pub fn validate_last_name(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Required {
            field: FieldName::LastName,
        })
    } else {
        Ok(())
    }
}

/// Validates an email address: required, and shaped like `local@domain.tld`.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    let field = FieldName::Email;
    match value {
        "" => Err(ValidationError::Required { field }),
        s if EMAIL_RE.is_match(s) => Ok(()),
        _ => Err(ValidationError::InvalidFormat { field }),
    }
}

/// Runs the rule for a single field. The message field has no rule.
pub fn validate_field(field: FieldName, value: &str) -> Result<(), ValidationError> {
    match field {
        FieldName::FirstName => validate_first_name(value),
        FieldName::LastName => validate_last_name(value),
        FieldName::Email => validate_email(value),
        FieldName::Message => Ok(()),
    }
}

/// Current violations keyed by field; at most one entry per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<FieldName, ValidationError>,
}

impl ErrorMap {
    pub fn get(&self, field: FieldName) -> Option<&ValidationError> {
        self.entries.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in field display order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &ValidationError)> {
        self.entries.iter().map(|(field, err)| (*field, err))
    }

    /// Returns `true` if any required field is in violation.
    pub fn has_required_violations(&self) -> bool {
        self.entries.keys().any(|f| f.is_required())
    }

    /// Keeps only the entries whose field satisfies `keep`.
    pub fn filtered(&self, mut keep: impl FnMut(FieldName) -> bool) -> ErrorMap {
        ErrorMap {
            entries: self
                .entries
                .iter()
                .filter(|(field, _)| keep(**field))
                .map(|(field, err)| (*field, err.clone()))
                .collect(),
        }
    }
}

impl FromIterator<ValidationError> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        ErrorMap {
            entries: iter.into_iter().map(|e| (e.field(), e)).collect(),
        }
    }
}

/// Computes the full error map for the given form values.
pub fn validate(state: &FormState) -> ErrorMap {
    FieldName::ALL
        .into_iter()
        .filter_map(|field| validate_field(field, state.get(field)).err())
        .collect()
}
