mod answer;
mod question;

use ratatui::{prelude::*, widgets::Block};

use crate::app::App;
use crate::models::AppState;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.state {
        AppState::Question => question::render(frame, area, app),
        AppState::Revealed => answer::render(frame, area, app),
    }
}
