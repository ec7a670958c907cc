//! Application state and core logic

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent};

use crate::auth::AuthHttpClient;
use crate::config::TuiConfig;
use crate::state::{FormSnapshot, PasswordRule, PipelineTiming, SignUpField, SignUpPipeline};

/// Which part of the screen receives input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(SignUpField),
    SubmitButton,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Field(SignUpField::Username),
        Focus::Field(SignUpField::Email),
        Focus::Field(SignUpField::Password),
        Focus::Field(SignUpField::ConfirmPassword),
        Focus::SubmitButton,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let count = Self::ORDER.len();
        Self::ORDER[(self.position() + count - 1) % count]
    }
}

/// Main application struct
pub struct App {
    /// The sign-up form and its validation pipeline
    pipeline: SignUpPipeline,
    /// Currently focused field or button
    focus: Focus,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from user configuration
    pub fn new(config: &TuiConfig) -> Self {
        let timing = match config.debounce_ms {
            Some(ms) => {
                let window = Duration::from_millis(ms);
                PipelineTiming {
                    settle: window,
                    remote: window,
                }
            }
            None => PipelineTiming::default(),
        };

        let password_rule = match &config.password_pattern {
            Some(pattern) => match PasswordRule::from_pattern_str(pattern) {
                Ok(rule) => rule,
                Err(err) => {
                    tracing::warn!("ignoring invalid password_pattern: {err}");
                    PasswordRule::default()
                }
            },
            None => PasswordRule::default(),
        };

        let auth = Arc::new(AuthHttpClient::new(config.api_base_url.clone()));

        Self {
            pipeline: SignUpPipeline::with_timing(auth, timing, password_rule),
            focus: Focus::Field(SignUpField::Username),
            quit: false,
        }
    }

    /// Externally observable state of the form
    pub fn snapshot(&self) -> FormSnapshot {
        self.pipeline.snapshot()
    }

    /// Currently focused element
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Apply everything the pipeline's async stages have produced
    pub fn on_tick(&mut self) {
        self.pipeline.pump();
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.activate(),
            KeyCode::Char(c) => self.push_char(c),
            KeyCode::Backspace => self.pop_char(),
            _ => {}
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Focus::SubmitButton => {
                if self.pipeline.snapshot().submit_enabled {
                    self.pipeline.submit();
                }
            }
            // Enter on a field moves on, like Tab.
            Focus::Field(_) => self.focus = self.focus.next(),
        }
    }

    fn push_char(&mut self, c: char) {
        if let Focus::Field(field) = self.focus {
            let mut value = self.pipeline.value(field).to_string();
            value.push(c);
            self.pipeline.set_field(field, value);
        }
    }

    fn pop_char(&mut self) {
        if let Focus::Field(field) = self.focus {
            let mut value = self.pipeline.value(field).to_string();
            if value.pop().is_some() {
                self.pipeline.set_field(field, value);
            }
        }
    }
}
