//! Passive sign-up form state
//!
//! Holds the field values, per-field error slots, validity flags, and the
//! submit status. All mutation goes through the pipeline on the owning
//! task; this type never touches the network or the clock.

use super::field::SignUpField;

/// Kind of the submit status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Neutral,
    Success,
    Failure,
}

/// User-visible submit status
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Failure,
        }
    }
}

/// Last-write-wins error cell. Two pipelines may write the confirm
/// password slot; a write carrying an older sequence number than the
/// cell's current one is discarded.
#[derive(Debug, Clone, Default)]
struct ErrorSlot {
    text: String,
    seq: u64,
}

impl ErrorSlot {
    fn write(&mut self, seq: u64, text: &str) {
        if seq >= self.seq {
            self.seq = seq;
            self.text.clear();
            self.text.push_str(text);
        }
    }
}

/// The externally observable state of the form at a point in time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormSnapshot {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub username_error: String,
    pub email_error: String,
    pub password_error: String,
    pub confirm_password_error: String,
    pub submit_enabled: bool,
    pub status: StatusMessage,
}

/// Sign-up form state: four values, four error slots, the validity flags
/// feeding the submit gate, and the submit status
#[derive(Debug, Default)]
pub struct SignUpForm {
    values: [String; 4],
    errors: [ErrorSlot; 4],
    username_valid: bool,
    email_confirmed: bool,
    password_valid: bool,
    passwords_equal: bool,
    submitting: bool,
    status: StatusMessage,
    next_seq: u64,
}

impl SignUpForm {
    pub fn value(&self, field: SignUpField) -> &str {
        &self.values[field.index()]
    }

    pub fn set_value(&mut self, field: SignUpField, value: String) {
        self.values[field.index()] = value;
    }

    #[allow(dead_code)]
    pub fn error(&self, field: SignUpField) -> &str {
        &self.errors[field.index()].text
    }

    fn next_seq(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    pub fn set_error(&mut self, field: SignUpField, text: &str) {
        let seq = self.next_seq();
        self.errors[field.index()].write(seq, text);
    }

    pub fn clear_error(&mut self, field: SignUpField) {
        self.set_error(field, "");
    }

    pub fn set_username_valid(&mut self, valid: bool) {
        self.username_valid = valid;
    }

    pub fn set_email_confirmed(&mut self, confirmed: bool) {
        self.email_confirmed = confirmed;
    }

    pub fn set_password_valid(&mut self, valid: bool) {
        self.password_valid = valid;
    }

    pub fn set_passwords_equal(&mut self, equal: bool) {
        self.passwords_equal = equal;
    }

    pub fn set_submitting(&mut self, submitting: bool) {
        self.submitting = submitting;
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn set_status(&mut self, status: StatusMessage) {
        self.status = status;
    }

    /// Gate over the four validity signals. All flags start false, so an
    /// untouched form can never submit.
    pub fn all_valid(&self) -> bool {
        self.username_valid && self.email_confirmed && self.password_valid && self.passwords_equal
    }

    pub fn submit_enabled(&self) -> bool {
        self.all_valid() && !self.submitting
    }

    /// Reset after a successful registration: values, errors, and
    /// validity flags are cleared; the status line is left to the caller.
    pub fn reset_fields(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
        let seq = self.next_seq();
        for error in &mut self.errors {
            error.write(seq, "");
        }
        self.username_valid = false;
        self.email_confirmed = false;
        self.password_valid = false;
        self.passwords_equal = false;
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            username: self.values[SignUpField::Username.index()].clone(),
            email: self.values[SignUpField::Email.index()].clone(),
            password: self.values[SignUpField::Password.index()].clone(),
            confirm_password: self.values[SignUpField::ConfirmPassword.index()].clone(),
            username_error: self.errors[SignUpField::Username.index()].text.clone(),
            email_error: self.errors[SignUpField::Email.index()].text.clone(),
            password_error: self.errors[SignUpField::Password.index()].text.clone(),
            confirm_password_error: self.errors[SignUpField::ConfirmPassword.index()]
                .text
                .clone(),
            submit_enabled: self.submit_enabled(),
            status: self.status.clone(),
        }
    }
}
