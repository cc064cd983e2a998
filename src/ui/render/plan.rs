use super::Frame;
use crate::state::{PlanStatus, State};
use crate::ui::widgets::{spinner, styling};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Render the plan view in one of its three states: waiting on the
/// service, failed, or displaying the received plan.
///
pub fn plan(frame: &mut Frame, size: Rect, state: &State) {
    match state.plan_status() {
        PlanStatus::Loading => render_loading(frame, size, state),
        PlanStatus::Failed => render_failure(frame, size, state),
        PlanStatus::Loaded => render_plan(frame, size, state),
    }
}

fn render_loading(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Minha dieta")
        .border_style(styling::normal_block_border_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(size);

    let text = vec![
        Line::from(Span::styled(
            format!("{} Estamos gerando sua dieta.", spinner::frame(state.spinner_index())),
            styling::normal_text_style(theme),
        )),
        Line::from(Span::styled(
            "Consultando IA...",
            styling::muted_text_style(theme),
        )),
    ];
    let loading = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(loading, rows[1]);
}

fn render_failure(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Minha dieta")
        .border_style(styling::error_text_style(theme));
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(size);

    let message = state.plan_error().unwrap_or("Falha ao gerar dieta.");
    let text = vec![
        Line::from(Span::styled(message.to_string(), styling::error_text_style(theme))),
        Line::from(Span::styled(
            "Pressione Enter para tentar novamente",
            styling::normal_text_style(theme),
        )),
    ];
    let failure = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(failure, rows[1]);
}

/// Render the received plan: header, meals in service order, supplements.
///
fn render_plan(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let Some(plan) = state.plan() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Minha dieta")
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            format!("Nome: {}", plan.name),
            styling::label_style(theme),
        )),
        Line::from(Span::styled(
            format!("Foco: {}", plan.objective),
            styling::normal_text_style(theme),
        )),
        Line::default(),
    ];

    if !plan.meals.is_empty() {
        lines.push(Line::from(Span::styled(
            "Refeições:",
            styling::label_style(theme),
        )));
        for meal in &plan.meals {
            lines.push(Line::from(Span::styled(
                format!("  {} ({})", meal.name, meal.time),
                styling::normal_text_style(theme),
            )));
            for food in &meal.foods {
                lines.push(Line::from(Span::styled(
                    format!("    - {}", food),
                    styling::muted_text_style(theme),
                )));
            }
        }
        lines.push(Line::default());
    }

    if !plan.supplements.is_empty() {
        lines.push(Line::from(Span::styled(
            "Dica de suplementos:",
            styling::label_style(theme),
        )));
        for supplement in &plan.supplements {
            lines.push(Line::from(Span::styled(
                format!("  - {}", supplement),
                styling::normal_text_style(theme),
            )));
        }
    }

    if let Some(notice) = state.share_notice() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            styling::success_text_style(theme),
        )));
    }

    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(body, inner);
}
