// Host-side tests for contact form validation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod validation {
        include!("../src/core/validation.rs");
    }
}

use crate::core::validation::*;

#[test]
fn name_needs_two_trimmed_characters() {
    assert_eq!(validate(FormField::Name, "Al"), Ok(()));
    assert_eq!(validate(FormField::Name, " A "), Err(ValidationError::NameTooShort));
    assert_eq!(validate(FormField::Name, "Zoë"), Ok(()));
}

#[test]
fn email_shape_is_checked() {
    for ok in ["a@b.co", "first.last@example.org", "x+tag@sub.domain.io"] {
        assert_eq!(validate(FormField::Email, ok), Ok(()), "{ok}");
    }
    for bad in ["", "plain", "a@b", "@b.co", "a b@c.de", "a@@b.co", "a@b.co "] {
        assert_eq!(
            validate(FormField::Email, bad),
            Err(ValidationError::InvalidEmail),
            "{bad:?}"
        );
    }
}

#[test]
fn subject_and_message_lengths() {
    assert_eq!(validate(FormField::Subject, "Hey"), Ok(()));
    assert_eq!(validate(FormField::Subject, "Hi"), Err(ValidationError::SubjectTooShort));
    assert_eq!(validate(FormField::Message, "0123456789"), Ok(()));
    assert_eq!(
        validate(FormField::Message, "  short   "),
        Err(ValidationError::MessageTooShort)
    );
}

#[test]
fn error_messages_are_visitor_facing() {
    assert_eq!(
        ValidationError::NameTooShort.to_string(),
        "Name must be at least 2 characters"
    );
    assert_eq!(
        ValidationError::InvalidEmail.to_string(),
        "Please enter a valid email address"
    );
    assert_eq!(
        ValidationError::SubjectTooShort.to_string(),
        "Subject must be at least 3 characters"
    );
    assert_eq!(
        ValidationError::MessageTooShort.to_string(),
        "Message must be at least 10 characters"
    );
}

#[test]
fn blur_leaves_blank_fields_unmarked() {
    for field in FormField::ALL {
        assert_eq!(blur_state(field, "   "), FieldState::Cleared);
    }
    assert_eq!(blur_state(FormField::Name, "Jo"), FieldState::Valid);
    assert_eq!(
        blur_state(FormField::Email, "nope"),
        FieldState::Invalid(ValidationError::InvalidEmail)
    );
}

#[test]
fn submit_flags_blank_fields() {
    let states = submit_states(FormField::ALL.iter().map(|f| (*f, "")));
    assert_eq!(states.len(), 4);
    assert!(states
        .iter()
        .all(|(_, s)| matches!(s, FieldState::Invalid(_))));
    assert!(!all_valid(&states));
}

#[test]
fn submit_passes_complete_form() {
    let states = submit_states([
        (FormField::Name, "Ada"),
        (FormField::Email, "ada@example.com"),
        (FormField::Subject, "Hello"),
        (FormField::Message, "I would like to talk."),
    ]);
    assert!(all_valid(&states));

    let one_bad = submit_states([
        (FormField::Name, "Ada"),
        (FormField::Email, "ada@example"),
        (FormField::Subject, "Hello"),
        (FormField::Message, "I would like to talk."),
    ]);
    assert!(!all_valid(&one_bad));
    assert_eq!(
        one_bad[1],
        (FormField::Email, FieldState::Invalid(ValidationError::InvalidEmail))
    );
}

#[test]
fn fields_map_to_element_ids() {
    let ids: Vec<&str> = FormField::ALL.iter().map(|f| f.element_id()).collect();
    assert_eq!(ids, vec!["name", "email", "subject", "message"]);
}

#[test]
fn feedback_class_names() {
    assert_eq!(FeedbackKind::Success.class_name(), "form-feedback success");
    assert_eq!(FeedbackKind::Error.class_name(), "form-feedback error");
}

#[test]
fn stale_hide_timer_leaves_newer_feedback_visible() {
    let mut schedule = FeedbackSchedule::default();
    let error_shown = schedule.show();
    let success_shown = schedule.show();

    assert!(!schedule.should_hide(error_shown));
    assert!(schedule.should_hide(success_shown));
}

#[test]
fn single_feedback_hides_on_its_own_timer() {
    let mut schedule = FeedbackSchedule::default();
    let token = schedule.show();
    assert!(schedule.should_hide(token));
    assert!(schedule.should_hide(token), "checking does not consume the token");
}
