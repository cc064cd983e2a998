use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

/// Render the toggleable log panel.
///
pub fn log(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let widget = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title("Log (Ctrl+L para ocultar)")
                .borders(Borders::ALL)
                .border_style(styling::normal_block_border_style(theme)),
        )
        .style(styling::normal_text_style(theme))
        .style_error(styling::error_text_style(theme))
        .style_warn(styling::muted_text_style(theme))
        .output_separator(' ')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false);
    frame.render_widget(widget, size);
}
