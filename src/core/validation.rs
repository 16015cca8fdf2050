use crate::constants::{MESSAGE_MIN_CHARS, NAME_MIN_CHARS, SUBJECT_MIN_CHARS};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors above";
pub const SUBMIT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! I will get back to you soon.";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Oops! Something went wrong. Please try again later.";

/// An input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

/// Why a field value was rejected; `Display` is the message shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Name must be at least {} characters", NAME_MIN_CHARS)]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Subject must be at least {} characters", SUBJECT_MIN_CHARS)]
    SubjectTooShort,
    #[error("Message must be at least {} characters", MESSAGE_MIN_CHARS)]
    MessageTooShort,
}

fn has_min_chars(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

pub fn validate(field: FormField, value: &str) -> Result<(), ValidationError> {
    let ok = match field {
        FormField::Name => has_min_chars(value, NAME_MIN_CHARS),
        FormField::Email => EMAIL_RE.is_match(value),
        FormField::Subject => has_min_chars(value, SUBJECT_MIN_CHARS),
        FormField::Message => has_min_chars(value, MESSAGE_MIN_CHARS),
    };
    if ok {
        return Ok(());
    }
    Err(match field {
        FormField::Name => ValidationError::NameTooShort,
        FormField::Email => ValidationError::InvalidEmail,
        FormField::Subject => ValidationError::SubjectTooShort,
        FormField::Message => ValidationError::MessageTooShort,
    })
}

/// Visual state of an input after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Cleared,
    Invalid(ValidationError),
    Valid,
}

impl FieldState {
    pub fn from_result(result: Result<(), ValidationError>) -> Self {
        match result {
            Ok(()) => FieldState::Valid,
            Err(e) => FieldState::Invalid(e),
        }
    }
}

/// State after the input loses focus: blank values are left unmarked.
pub fn blur_state(field: FormField, value: &str) -> FieldState {
    if value.trim().is_empty() {
        return FieldState::Cleared;
    }
    FieldState::from_result(validate(field, value))
}

/// Validate every field for submission. Blank values are errors here.
pub fn submit_states<'a>(
    values: impl IntoIterator<Item = (FormField, &'a str)>,
) -> Vec<(FormField, FieldState)> {
    values
        .into_iter()
        .map(|(field, value)| (field, FieldState::from_result(validate(field, value))))
        .collect()
}

pub fn all_valid(states: &[(FormField, FieldState)]) -> bool {
    states.iter().all(|(_, s)| *s == FieldState::Valid)
}

/// Style of the message shown under the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    pub fn class_name(self) -> &'static str {
        match self {
            FeedbackKind::Success => "form-feedback success",
            FeedbackKind::Error => "form-feedback error",
        }
    }
}

/// Tracks which feedback message is current so a stale hide timer leaves a
/// newer message alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeedbackSchedule {
    generation: u64,
}

impl FeedbackSchedule {
    /// Register a new message and return the token its hide timer must hold.
    pub fn show(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Whether a hide timer holding `token` may still hide the message.
    pub fn should_hide(&self, token: u64) -> bool {
        token == self.generation
    }
}
