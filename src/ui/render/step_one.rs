use super::Frame;
use crate::state::{State, StepOneField};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

/// Render the step-one form: name, age, height and weight inputs with
/// inline validation messages.
///
pub fn step_one(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let form = state.step_one();

    // Title row, then one input (3) plus message line (1) per field.
    let mut constraints = vec![Constraint::Length(3)];
    for _ in StepOneField::ALL {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(size);

    let title = Paragraph::new("Vamos começar")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Passo 1")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::label_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    for (i, field) in StepOneField::ALL.into_iter().enumerate() {
        let input_area = rows[1 + i * 2];
        let message_area = rows[2 + i * 2];
        let focused = form.focus() == field;

        let border_style = if focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(field.label())
            .border_style(border_style);

        let value = form.value(field);
        let input = if value.is_empty() {
            Paragraph::new(field.placeholder()).style(styling::muted_text_style(theme))
        } else {
            Paragraph::new(value.to_string()).style(styling::normal_text_style(theme))
        }
        .block(block);
        frame.render_widget(input, input_area);

        if let Some(message) = form.error(field) {
            let error = Paragraph::new(format!(" {}", message))
                .style(styling::error_text_style(theme));
            frame.render_widget(error, message_area);
        }
    }
}
