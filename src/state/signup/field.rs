//! Sign-up field identities and their user-facing messages

/// The four fields of the sign-up form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignUpField {
    Username,
    Email,
    Password,
    ConfirmPassword,
}

impl SignUpField {
    /// All fields in display order
    pub const ALL: [SignUpField; 4] = [
        SignUpField::Username,
        SignUpField::Email,
        SignUpField::Password,
        SignUpField::ConfirmPassword,
    ];

    /// Label shown above the input box
    pub fn label(&self) -> &'static str {
        match self {
            SignUpField::Username => "Username",
            SignUpField::Email => "Email",
            SignUpField::Password => "Password",
            SignUpField::ConfirmPassword => "Confirm Password",
        }
    }

    /// Error message shown when the field settles empty
    pub fn missing_message(&self) -> &'static str {
        match self {
            SignUpField::Username => "Username is missing",
            SignUpField::Email => "Email is missing",
            SignUpField::Password => "Password is missing",
            SignUpField::ConfirmPassword => "Confirm Password is missing",
        }
    }

    /// Whether the field's value is masked when rendered
    pub fn is_secured(&self) -> bool {
        matches!(self, SignUpField::Password | SignUpField::ConfirmPassword)
    }

    /// Slot index for per-field storage
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
