use std::fmt;

/// The four inputs of the contact form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FieldName {
    /// All fields in display order.
    pub const ALL: [FieldName; 4] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Message,
    ];

    /// Identifier used in validation messages (e.g. `firstName`).
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Human-readable label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Whether the field must be filled in for a submission to succeed.
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Message)
    }

    /// The next field in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::Email,
            Self::Email => Self::Message,
            Self::Message => Self::FirstName,
        }
    }

    /// The previous field in display order, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            Self::FirstName => Self::Message,
            Self::LastName => Self::FirstName,
            Self::Email => Self::LastName,
            Self::Message => Self::Email,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
