use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::prompt_state::PromptState;

const PROMPT: &str = "Record Transaction? (y/n)";

/// Pure function of state: the prompt text never changes while the shell
/// is running. Input echoes go to the log sink, never to this screen.
pub fn render(frame: &mut Frame<'_>, state: &PromptState) {
    let [prompt_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .areas(frame.area());

    let prompt =
        Paragraph::new(PROMPT).block(Block::default().title("Wallety").borders(Borders::ALL));
    frame.render_widget(prompt, prompt_area);

    let status = Paragraph::new(status_line(state));
    frame.render_widget(status, status_area);
}

fn status_line(state: &PromptState) -> String {
    let mode = if state.is_running() {
        "running"
    } else {
        "stopping"
    };
    format!("mode: {mode} | q: quit")
}
