mod field;
mod form;
mod validation;

pub use field::FieldName;
pub use form::{ContactForm, FormState, Phase, Snapshot, SubmitOutcome};
pub use validation::{
    ErrorKind, ErrorMap, FIRST_NAME_MIN_LEN, ValidationError, validate, validate_email,
    validate_field, validate_first_name, validate_last_name,
};
