//! # persenaut
//!
//! Parsing and terminal review of model-generated quiz questions.
//!
//! The model is asked (see [`prompt::build_prompt`]) to answer with a
//! "Pregunta / A)..D) / Respuesta correcta" template. [`parse_question`]
//! turns that loosely-followed template into a [`ParsedQuestion`] without
//! ever failing, a [`QuestionHistory`] collects raw responses per topic so
//! later prompts can steer the model away from repeats, and [`Review`]
//! shows one parsed question interactively in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use persenaut::{parse_question, PersenautError, Review};
//!
//! fn main() -> Result<(), PersenautError> {
//!     // Parse raw model output into a structured question
//!     let parsed = parse_question("Pregunta: ¿x?\n\nA) uno\nB) dos\n\nRespuesta correcta: A");
//!
//!     // Review it in the terminal
//!     Review::new(parsed).run()
//! }
//! ```

mod app;
mod history;
mod models;
mod parser;
pub mod prompt;
pub mod terminal;
mod ui;

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use app::App;
pub use history::{QuestionHistory, DEFAULT_HISTORY_CAP, HISTORY_PREFIX_CHARS};
pub use models::{AnswerOption, AppState, OptionLabel, ParsedQuestion, OPTION_LABELS};
pub use parser::{parse_question, EMPTY_RESPONSE_SENTINEL, MISSING_QUESTION_SENTINEL};
pub use prompt::build_prompt;

/// Error type for review operations.
///
/// Parsing itself is infallible by contract; errors only come from terminal
/// interaction.
#[derive(Debug)]
pub enum PersenautError {
    /// IO error during terminal interaction.
    Io(io::Error),
}

impl std::fmt::Display for PersenautError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersenautError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PersenautError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersenautError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PersenautError {
    fn from(err: io::Error) -> Self {
        PersenautError::Io(err)
    }
}

/// Interactive terminal review of a single parsed question.
pub struct Review {
    app: App,
}

impl Review {
    /// Create a review for an already parsed question.
    pub fn new(question: ParsedQuestion) -> Self {
        Self {
            app: App::new(question),
        }
    }

    /// Parse `raw_text` and review the result.
    pub fn from_raw(raw_text: &str) -> Self {
        Self::new(parse_question(raw_text))
    }

    /// Run the review in the terminal.
    ///
    /// This will take over the terminal, display the question, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), PersenautError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), PersenautError> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the review should exit.
fn handle_input(app: &mut App, key: KeyCode) -> bool {
    match app.state {
        AppState::Question => handle_question_input(app, key),
        AppState::Revealed => handle_revealed_input(app, key),
    }
}

fn handle_question_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.reveal_answer();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_revealed_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.back_to_question();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_flow() {
        let mut review = Review::from_raw("¿x?\n\nA) uno\nB) dos\n\nRespuesta correcta: B");

        assert!(!handle_input(review.app_mut(), KeyCode::Char('j')));
        assert_eq!(review.app().selected_option(), 1);

        assert!(!handle_input(review.app_mut(), KeyCode::Enter));
        assert_eq!(review.app().state, AppState::Revealed);
        assert_eq!(review.app().is_selected_correct(), Some(true));

        assert!(!handle_input(review.app_mut(), KeyCode::Char('r')));
        assert_eq!(review.app().state, AppState::Question);

        assert!(handle_input(review.app_mut(), KeyCode::Char('q')));
    }
}
