mod question;

pub use question::{AnswerOption, OptionLabel, ParsedQuestion, OPTION_LABELS};

/// Screens of the review UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// Question shown, options selectable, answer hidden.
    Question,
    /// Correct answer revealed.
    Revealed,
}
