use crate::constants::{DELETE_DELAY_MS, NEXT_PHRASE_DELAY_MS, PHRASE_HOLD_MS, TYPE_DELAY_MS};

pub const DEFAULT_PHRASES: &[&str] = &[
    "Professional Web Developer",
    "Full Stack Engineer",
    "UI/UX Designer",
    "Software Architect",
    "Digital Solution Expert",
];

/// Text to display after a step and how long to wait before the next one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeStep {
    pub text: String,
    pub delay_ms: u32,
}

/// Rotating type-then-delete effect over a list of phrases.
///
/// Each `step` adds or removes one character. A finished phrase is held for
/// `PHRASE_HOLD_MS`, an emptied one moves on to the next phrase (wrapping)
/// after `NEXT_PHRASE_DELAY_MS`.
#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    char_index: usize,
    deleting: bool,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_index: 0,
            deleting: false,
        }
    }

    pub fn with_default_phrases() -> Self {
        Self::new(DEFAULT_PHRASES.iter().map(|p| p.to_string()).collect())
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn step(&mut self) -> TypeStep {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return TypeStep {
                text: String::new(),
                delay_ms: PHRASE_HOLD_MS,
            };
        };
        let len = phrase.chars().count();

        let mut delay_ms;
        if self.deleting {
            self.char_index = self.char_index.saturating_sub(1);
            delay_ms = DELETE_DELAY_MS;
        } else {
            self.char_index = (self.char_index + 1).min(len);
            delay_ms = TYPE_DELAY_MS;
        }
        let text: String = phrase.chars().take(self.char_index).collect();

        if !self.deleting && self.char_index == len {
            delay_ms = PHRASE_HOLD_MS;
            self.deleting = true;
        } else if self.deleting && self.char_index == 0 {
            self.deleting = false;
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            delay_ms = NEXT_PHRASE_DELAY_MS;
        }

        TypeStep { text, delay_ms }
    }
}
