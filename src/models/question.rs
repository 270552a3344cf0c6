use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed option label set, in positional order.
pub const OPTION_LABELS: [OptionLabel; 4] = [
    OptionLabel::A,
    OptionLabel::B,
    OptionLabel::C,
    OptionLabel::D,
];

/// Single-letter identifier of an option (`A`..`D`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// Case-insensitive conversion from a letter.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    /// Label at the given position (0 = `A`).
    pub fn from_index(index: usize) -> Option<Self> {
        OPTION_LABELS.get(index).copied()
    }

    pub fn as_char(self) -> char {
        match self {
            Self::A => 'A',
            Self::B => 'B',
            Self::C => 'C',
            Self::D => 'D',
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One answer option extracted from a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub label: OptionLabel,
    pub text: String,
}

/// Structured form of one generated question.
///
/// Built fresh on every parse and never mutated. `raw_text` keeps the
/// unmodified model output for auditing and history tracking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuestion {
    pub question_text: String,
    pub options: Vec<AnswerOption>,
    pub correct_answer: Option<OptionLabel>,
    pub raw_text: String,
}

impl ParsedQuestion {
    /// Index of the option carrying the correct-answer label, when both the
    /// label and a matching option are present.
    pub fn correct_option_index(&self) -> Option<usize> {
        let answer = self.correct_answer?;
        self.options.iter().position(|option| option.label == answer)
    }
}
