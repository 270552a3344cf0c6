use crate::models::{AppState, OptionLabel, ParsedQuestion};

pub struct App {
    pub state: AppState,
    question: ParsedQuestion,
    selected_option: usize,
}

impl App {
    pub fn new(question: ParsedQuestion) -> Self {
        Self {
            state: AppState::Question,
            question,
            selected_option: 0,
        }
    }

    pub fn question(&self) -> &ParsedQuestion {
        &self.question
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn selected_label(&self) -> Option<OptionLabel> {
        self.question
            .options
            .get(self.selected_option)
            .map(|option| option.label)
    }

    pub fn select_next_option(&mut self) {
        let count = self.question.options.len();
        if count > 0 {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        let count = self.question.options.len();
        if count > 0 {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    pub fn reveal_answer(&mut self) {
        self.state = AppState::Revealed;
    }

    pub fn back_to_question(&mut self) {
        self.state = AppState::Question;
        self.selected_option = 0;
    }

    /// Whether the highlighted option carries the extracted answer label.
    /// `None` when the response had no recognizable answer.
    pub fn is_selected_correct(&self) -> Option<bool> {
        let answer = self.question.correct_answer?;
        Some(self.selected_label() == Some(answer))
    }
}
