//! Sign-up form domain: field identities, validators, form state, and
//! the debounced validation pipeline

mod field;
mod form;
mod pipeline;
mod validators;

pub use field::SignUpField;
pub use form::{FormSnapshot, SignUpForm, StatusKind, StatusMessage};
pub use pipeline::{PipelineEvent, PipelineTiming, SignUpPipeline};
pub use validators::{
    is_non_empty, is_valid_email_shape, is_valid_password_shape, passwords_match, PasswordRule,
};
