//! Debounced validation pipeline driving the sign-up form
//!
//! Field edits enter through [`SignUpPipeline::set_field`]. Everything
//! asynchronous (debounce timers, the availability check, the
//! registration round-trip) re-enters through a single event channel
//! and is applied on the owning task by [`SignUpPipeline::apply`], so no
//! two stages ever mutate the form concurrently. Generation counters
//! make superseded timers and stale network completions inert: a timer
//! whose generation no longer matches is a cancelled debounce window, an
//! availability result tagged with an email that is no longer current is
//! discarded.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::auth::{parse_registration_response, AuthApi, RegistrationOutcome};

use super::field::SignUpField;
use super::form::{FormSnapshot, SignUpForm, StatusMessage};
use super::validators::{self, PasswordRule};

pub const EMAIL_SHAPE_MESSAGE: &str = "Email is not valid";
pub const PASSWORD_SHAPE_MESSAGE: &str =
    "Password must be at least 8 characters, with a letter and a number";
pub const EMAIL_TAKEN_MESSAGE: &str = "Email is already used";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Password confirmed does not match";
pub const SIGNUP_SUCCESS_MESSAGE: &str = "Sign up successful!";
pub const SIGNUP_FAILURE_MESSAGE: &str = "Sign up failed!";

/// Debounce windows for the two timed stages
#[derive(Debug, Clone, Copy)]
pub struct PipelineTiming {
    /// Quiet period after the last edit before a field value settles
    pub settle: Duration,
    /// Additional quiet period before a shape-valid email is checked remotely
    pub remote: Duration,
}

impl Default for PipelineTiming {
    fn default() -> Self {
        Self {
            settle: Duration::from_millis(500),
            remote: Duration::from_millis(500),
        }
    }
}

/// Messages applied to the form on the owning task
#[derive(Debug)]
pub enum PipelineEvent {
    /// A field value survived its debounce window
    FieldSettled {
        field: SignUpField,
        value: String,
        generation: u64,
    },
    /// A shape-valid email survived the remote-check debounce window
    EmailCheckDue { email: String, generation: u64 },
    /// Availability result, tagged with the email it was issued for
    EmailChecked { email: String, available: bool },
    /// Password/confirm pair survived the match debounce window
    MatchSettled {
        password: String,
        confirm: String,
        generation: u64,
    },
    /// Registration round-trip finished
    SubmitFinished { outcome: RegistrationOutcome },
}

/// The reactive machinery around a [`SignUpForm`]
///
/// Owns the form, the auth capability, and the per-stage bookkeeping:
/// edit generations and settled-value memory per field, the email
/// remote-check stage, and the cross-field match stage. Dropping the
/// pipeline drops the channel receiver; pending timer and network tasks
/// then terminate on their failed send.
pub struct SignUpPipeline {
    form: SignUpForm,
    auth: Arc<dyn AuthApi>,
    timing: PipelineTiming,
    password_rule: PasswordRule,
    tx: UnboundedSender<PipelineEvent>,
    rx: UnboundedReceiver<PipelineEvent>,
    edit_generations: [u64; 4],
    settled: [Option<String>; 4],
    email_check_generation: u64,
    last_checked_email: Option<String>,
    match_generation: u64,
}

impl SignUpPipeline {
    pub fn with_timing(
        auth: Arc<dyn AuthApi>,
        timing: PipelineTiming,
        password_rule: PasswordRule,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            form: SignUpForm::default(),
            auth,
            timing,
            password_rule,
            tx,
            rx,
            edit_generations: [0; 4],
            settled: Default::default(),
            email_check_generation: 0,
            last_checked_email: None,
            match_generation: 0,
        }
    }

    /// Current raw value of a field
    pub fn value(&self, field: SignUpField) -> &str {
        self.form.value(field)
    }

    /// Externally observable state of the form
    pub fn snapshot(&self) -> FormSnapshot {
        self.form.snapshot()
    }

    /// Record a user edit and start the field's debounce window.
    ///
    /// An edit arriving before the previous window elapsed supersedes it
    /// (the stale timer's generation no longer matches on arrival).
    pub fn set_field(&mut self, field: SignUpField, value: impl Into<String>) {
        let value = value.into();
        self.form.set_value(field, value.clone());

        self.edit_generations[field.index()] += 1;
        let generation = self.edit_generations[field.index()];
        let tx = self.tx.clone();
        let delay = self.timing.settle;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(PipelineEvent::FieldSettled {
                field,
                value,
                generation,
            });
        });

        if matches!(field, SignUpField::Password | SignUpField::ConfirmPassword) {
            self.schedule_match_check();
        }
    }

    /// Start the cross-field match window when both passwords are present
    fn schedule_match_check(&mut self) {
        let password = self.form.value(SignUpField::Password).to_string();
        let confirm = self.form.value(SignUpField::ConfirmPassword).to_string();
        if password.is_empty() || confirm.is_empty() {
            return;
        }

        self.match_generation += 1;
        let generation = self.match_generation;
        let tx = self.tx.clone();
        let delay = self.timing.settle;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(PipelineEvent::MatchSettled {
                password,
                confirm,
                generation,
            });
        });
    }

    /// Kick off the registration round-trip.
    ///
    /// A second submit while one is in flight is ignored; the button is
    /// disabled during the round-trip as well.
    pub fn submit(&mut self) {
        if self.form.is_submitting() {
            tracing::debug!("submit ignored, registration already in flight");
            return;
        }
        self.form.set_submitting(true);

        let username = self.form.value(SignUpField::Username).to_string();
        let email = self.form.value(SignUpField::Email).to_string();
        let password = self.form.value(SignUpField::Password).to_string();
        let auth = Arc::clone(&self.auth);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = match auth.register(&username, &email, &password).await {
                Ok((status, body)) => parse_registration_response(status, &body),
                Err(err) => {
                    tracing::warn!("registration request failed: {err}");
                    RegistrationOutcome::NetworkError(err.to_string())
                }
            };
            let _ = tx.send(PipelineEvent::SubmitFinished { outcome });
        });
    }

    /// Drain and apply everything the async stages have produced.
    /// Called from the UI loop every tick.
    pub fn pump(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.apply(event);
        }
    }

    /// Apply one pipeline event. Must only be called from the owning task.
    pub fn apply(&mut self, event: PipelineEvent) {
        match event {
            PipelineEvent::FieldSettled {
                field,
                value,
                generation,
            } => {
                if generation != self.edit_generations[field.index()] {
                    return;
                }
                self.field_settled(field, value);
            }
            PipelineEvent::EmailCheckDue { email, generation } => {
                self.email_check_due(email, generation);
            }
            PipelineEvent::EmailChecked { email, available } => {
                self.email_checked(&email, available);
            }
            PipelineEvent::MatchSettled {
                password,
                confirm,
                generation,
            } => {
                if generation != self.match_generation {
                    return;
                }
                self.match_settled(&password, &confirm);
            }
            PipelineEvent::SubmitFinished { outcome } => {
                self.submit_finished(outcome);
            }
        }
    }

    fn field_settled(&mut self, field: SignUpField, value: String) {
        // Unchanged since the last settled value: no downstream work.
        if self.settled[field.index()].as_deref() == Some(value.as_str()) {
            return;
        }
        self.settled[field.index()] = Some(value.clone());

        if !validators::is_non_empty(&value) {
            self.form.set_error(field, field.missing_message());
            match field {
                SignUpField::Username => self.form.set_username_valid(false),
                SignUpField::Email => self.form.set_email_confirmed(false),
                SignUpField::Password => self.form.set_password_valid(false),
                // An empty confirmation can no longer match anything.
                SignUpField::ConfirmPassword => self.form.set_passwords_equal(false),
            }
            return;
        }

        match field {
            SignUpField::Username => {
                self.form.clear_error(field);
                self.form.set_username_valid(true);
            }
            SignUpField::Email => {
                if validators::is_valid_email_shape(&value) {
                    // Shape is fine; validity still awaits the server.
                    self.form.clear_error(field);
                    self.form.set_email_confirmed(false);
                    self.schedule_email_check(value);
                } else {
                    self.form.set_error(field, EMAIL_SHAPE_MESSAGE);
                    self.form.set_email_confirmed(false);
                }
            }
            SignUpField::Password => {
                if self.password_rule.matches(&value) {
                    self.form.clear_error(field);
                    self.form.set_password_valid(true);
                } else {
                    self.form.set_error(field, PASSWORD_SHAPE_MESSAGE);
                    self.form.set_password_valid(false);
                }
            }
            SignUpField::ConfirmPassword => {
                // No syntactic rule of its own; the match stage may
                // rewrite this slot right after.
                self.form.clear_error(field);
            }
        }
    }

    /// Second debounce window between shape-valid email and network call
    fn schedule_email_check(&mut self, email: String) {
        self.email_check_generation += 1;
        let generation = self.email_check_generation;
        let tx = self.tx.clone();
        let delay = self.timing.remote;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(PipelineEvent::EmailCheckDue { email, generation });
        });
    }

    fn email_check_due(&mut self, email: String, generation: u64) {
        if generation != self.email_check_generation {
            return;
        }
        // Same email as last time: the previous result stands.
        if self.last_checked_email.as_deref() == Some(email.as_str()) {
            return;
        }
        self.last_checked_email = Some(email.clone());

        let auth = Arc::clone(&self.auth);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let available = auth.check_email_available(&email).await;
            let _ = tx.send(PipelineEvent::EmailChecked { email, available });
        });
    }

    fn email_checked(&mut self, email: &str, available: bool) {
        // An in-flight check is not cancelled by further edits; its
        // result is dropped here when the email has moved on.
        if self.form.value(SignUpField::Email) != email {
            tracing::debug!("discarding availability result for superseded email");
            return;
        }
        if available {
            self.form.clear_error(SignUpField::Email);
            self.form.set_email_confirmed(true);
        } else {
            self.form.set_error(SignUpField::Email, EMAIL_TAKEN_MESSAGE);
            self.form.set_email_confirmed(false);
        }
    }

    fn match_settled(&mut self, password: &str, confirm: &str) {
        if validators::passwords_match(password, confirm) {
            self.form.clear_error(SignUpField::ConfirmPassword);
            self.form.set_passwords_equal(true);
        } else {
            self.form
                .set_error(SignUpField::ConfirmPassword, PASSWORD_MISMATCH_MESSAGE);
            self.form.set_passwords_equal(false);
        }
    }

    fn submit_finished(&mut self, outcome: RegistrationOutcome) {
        self.form.set_submitting(false);
        match outcome {
            RegistrationOutcome::Success(token) => {
                let expires_at = Utc::now() + chrono::Duration::seconds(token.expires_in);
                tracing::info!(token_type = %token.token_type, %expires_at, "registration succeeded");
                self.form
                    .set_status(StatusMessage::success(SIGNUP_SUCCESS_MESSAGE));
                self.reset();
            }
            outcome => {
                if let RegistrationOutcome::ValidationFailed(errors) = &outcome {
                    // Server-side field errors are not surfaced into the
                    // field slots; the user sees the failure status only.
                    tracing::debug!(?errors, "server rejected registration fields");
                }
                tracing::warn!(?outcome, "registration failed");
                self.form
                    .set_status(StatusMessage::failure(SIGNUP_FAILURE_MESSAGE));
            }
        }
    }

    /// Clear the form and invalidate every pending timer and in-flight
    /// check after a successful registration.
    fn reset(&mut self) {
        self.form.reset_fields();
        self.settled = Default::default();
        self.last_checked_email = None;
        for generation in &mut self.edit_generations {
            *generation += 1;
        }
        self.email_check_generation += 1;
        self.match_generation += 1;
    }
}
