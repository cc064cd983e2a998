mod footer;
mod log;
mod plan;
mod step_one;
mod step_two;
mod welcome;

use super::Frame;
use crate::state::{State, View};
use ratatui::layout::{Constraint, Direction, Layout};

/// Height of the log panel when toggled on.
const LOG_PANEL_HEIGHT: u16 = 10;

/// Render the whole frame: the active view, the optional log panel and the
/// footer.
///
pub fn render(frame: &mut Frame, state: &mut State) {
    let size = frame.size();
    let constraints = if state.show_log() {
        vec![
            Constraint::Min(1),
            Constraint::Length(LOG_PANEL_HEIGHT),
            Constraint::Length(1),
        ]
    } else {
        vec![Constraint::Min(1), Constraint::Length(1)]
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(size);

    match state.current_view() {
        View::Welcome => welcome::welcome(frame, rows[0], state),
        View::StepOne => step_one::step_one(frame, rows[0], state),
        View::StepTwo => step_two::step_two(frame, rows[0], state),
        View::Plan => plan::plan(frame, rows[0], state),
    }

    if state.show_log() {
        log::log(frame, rows[1], state);
    }
    footer::footer(frame, rows[rows.len() - 1], state);
}
