use super::Frame;
use crate::state::{State, StepTwoField, StepTwoFocus, StepTwoForm};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

/// Render the step-two form: three closed selectors plus the submit action.
/// An open dropdown is drawn as a popup over the form.
///
pub fn step_two(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let form = state.step_two();

    let mut constraints = vec![Constraint::Length(3)];
    for _ in StepTwoField::ALL {
        constraints.push(Constraint::Length(3));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(3));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(size);

    let title = Paragraph::new("Finalizando a dieta")
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Passo 2")
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::label_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    for (i, field) in StepTwoField::ALL.into_iter().enumerate() {
        let selector_area = rows[1 + i * 2];
        let message_area = rows[2 + i * 2];
        let focused = form.focus() == StepTwoFocus::Field(field);

        let border_style = if focused {
            styling::active_block_border_style(theme)
        } else {
            styling::normal_block_border_style(theme)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(field.label())
            .border_style(border_style);

        let selector = match form.selected_label(field) {
            Some(label) => {
                Paragraph::new(label).style(styling::normal_text_style(theme))
            }
            None => Paragraph::new(field.placeholder())
                .style(styling::muted_text_style(theme)),
        }
        .block(block);
        frame.render_widget(selector, selector_area);

        if let Some(message) = form.error(field) {
            let error = Paragraph::new(format!(" {}", message))
                .style(styling::error_text_style(theme));
            frame.render_widget(error, message_area);
        }
    }

    let submit_focused = form.focus() == StepTwoFocus::Submit;
    let submit_style = if submit_focused {
        styling::highlight_style(theme)
    } else {
        styling::normal_text_style(theme)
    };
    let submit = Paragraph::new("Avançar")
        .style(submit_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if submit_focused {
                    styling::active_block_border_style(theme)
                } else {
                    styling::normal_block_border_style(theme)
                }),
        );
    frame.render_widget(submit, rows[1 + StepTwoField::ALL.len() * 2]);

    if form.is_dropdown_open() {
        if let StepTwoFocus::Field(field) = form.focus() {
            render_dropdown(frame, size, state, field);
        }
    }
}

/// Draw the option list for the focused selector as a centered popup.
///
fn render_dropdown(frame: &mut Frame, size: Rect, state: &State, field: StepTwoField) {
    let theme = state.theme();
    let form = state.step_two();
    let labels = StepTwoForm::option_labels(field);

    let width = labels
        .iter()
        .map(|l| l.chars().count() as u16 + 4)
        .max()
        .unwrap_or(20)
        .min(size.width.saturating_sub(4));
    let height = (labels.len() as u16 + 2).min(size.height.saturating_sub(2));
    let area = Rect {
        x: size.x + (size.width.saturating_sub(width)) / 2,
        y: size.y + (size.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let items: Vec<ListItem> = labels
        .iter()
        .map(|label| ListItem::new(Line::from(*label)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label())
                .border_style(styling::active_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlight_style(theme))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(form.dropdown_index()));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut list_state);
}
