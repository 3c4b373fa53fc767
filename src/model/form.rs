use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::field::FieldName;
use super::validation::{ErrorMap, validate};

/// Live, editable values of the four form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    first_name: String,
    last_name: String,
    email: String,
    message: String,
}

impl FormState {
    /// Returns the current value of `field`.
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
        }
    }

    /// Replaces the value of `field`. Raw text is accepted as-is.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    fn value_mut(&mut self, field: FieldName) -> &mut String {
        match field {
            FieldName::FirstName => &mut self.first_name,
            FieldName::LastName => &mut self.last_name,
            FieldName::Email => &mut self.email,
            FieldName::Message => &mut self.message,
        }
    }
}

/// Values frozen at the moment of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
}

impl Snapshot {
    /// The submitted message, or `None` if it was left blank.
    pub fn message(&self) -> Option<&str> {
        (!self.message.is_empty()).then_some(self.message.as_str())
    }

    /// Rows to display for this submission. The message row is omitted when blank.
    pub fn display_rows(&self) -> Vec<(FieldName, &str)> {
        let mut rows = vec![
            (FieldName::FirstName, self.first_name.as_str()),
            (FieldName::LastName, self.last_name.as_str()),
            (FieldName::Email, self.email.as_str()),
        ];
        if let Some(message) = self.message() {
            rows.push((FieldName::Message, message));
        }
        rows
    }
}

impl From<&FormState> for Snapshot {
    fn from(state: &FormState) -> Self {
        Self {
            first_name: state.first_name.clone(),
            last_name: state.last_name.clone(),
            email: state.email.clone(),
            message: state.message.clone(),
        }
    }
}

/// Whether the form has been successfully submitted at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Editing,
    Submitted,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All rules passed; the snapshot now on display.
    Accepted(Snapshot),
    /// At least one field is invalid; no snapshot was taken.
    Rejected { errors: ErrorMap },
}

/// Field store, validator and submission controller for the contact form.
///
/// The error map is recomputed on every edit, so [`ContactForm::errors`] always
/// reflects the current values. Submitting is never blocked: invalid submits
/// reveal every error and leave any previous snapshot in place.
#[derive(Debug, Clone)]
pub struct ContactForm {
    values: FormState,
    errors: ErrorMap,
    touched: BTreeSet<FieldName>,
    submit_attempted: bool,
    snapshot: Option<Snapshot>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Creates a form with all fields empty and nothing submitted.
    pub fn new() -> Self {
        let values = FormState::default();
        let errors = validate(&values);
        Self {
            values,
            errors,
            touched: BTreeSet::new(),
            submit_attempted: false,
            snapshot: None,
        }
    }

    /// Replaces the value of `field` and revalidates.
    pub fn set_field(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.set(field, value);
        self.after_edit(field);
    }

    /// Appends a character to `field` and revalidates.
    pub fn push_char(&mut self, field: FieldName, ch: char) {
        self.values.value_mut(field).push(ch);
        self.after_edit(field);
    }

    /// Removes the last character of `field` and revalidates.
    pub fn pop_char(&mut self, field: FieldName) {
        self.values.value_mut(field).pop();
        self.after_edit(field);
    }

    fn after_edit(&mut self, field: FieldName) {
        self.touched.insert(field);
        self.errors = validate(&self.values);
        tracing::debug!(
            field = field.key(),
            len = self.values.get(field).chars().count(),
            errors = self.errors.len(),
            "field edited"
        );
    }

    /// Attempts to submit the current values.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_attempted = true;
        self.errors = validate(&self.values);

        // Message has no rule, so the required fields alone decide.
        if self.errors.has_required_violations() {
            tracing::warn!(errors = self.errors.len(), "submit rejected");
            return SubmitOutcome::Rejected {
                errors: self.errors.clone(),
            };
        }

        let snapshot = Snapshot::from(&self.values);
        tracing::info!(
            has_message = snapshot.message().is_some(),
            "submit accepted"
        );
        self.snapshot = Some(snapshot.clone());
        SubmitOutcome::Accepted(snapshot)
    }

    /// Current values of all fields.
    pub fn values(&self) -> &FormState {
        &self.values
    }

    /// Current value of a single field.
    pub fn value(&self, field: FieldName) -> &str {
        self.values.get(field)
    }

    /// Every current violation, whether or not it is shown yet.
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// Violations to present: those on edited fields, or all of them once a
    /// submit has been attempted.
    pub fn visible_errors(&self) -> ErrorMap {
        if self.submit_attempted {
            self.errors.clone()
        } else {
            self.errors.filtered(|f| self.touched.contains(&f))
        }
    }

    /// The visible error for `field`, if any.
    pub fn visible_error(&self, field: FieldName) -> Option<String> {
        if self.submit_attempted || self.touched.contains(&field) {
            self.errors.get(field).map(ToString::to_string)
        } else {
            None
        }
    }

    /// The most recent successful submission.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.snapshot.as_ref()
    }

    pub fn phase(&self) -> Phase {
        if self.snapshot.is_some() {
            Phase::Submitted
        } else {
            Phase::Editing
        }
    }
}
