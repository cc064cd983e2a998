use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::Text,
    widgets::{Block, Borders, Paragraph},
};

pub const BANNER: &str = "
  ____   _        _             _     ___
 |  _ \\ (_)  ___ | |_  __ _    / \\   |_ _|
 | | | || | / _ \\| __|/ _` |  / _ \\   | |
 | |_| || ||  __/| |_| (_| |_/ ___ \\ _| |_
 |____/ |_| \\___| \\__|\\__,_(_)_/   \\_(_)___|
";

pub const CONTENT: &str = "

 Sua dieta personalizada com Inteligência Artificial

 Responda duas etapas rápidas sobre você e receba um
 plano de refeições e suplementos gerado sob medida.

 Pressione Enter para gerar sua dieta.

";

/// Render the entry view.
///
pub fn welcome(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(1)].as_ref())
        .margin(2)
        .split(size);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Dieta.AI")
        .border_style(styling::active_block_border_style(theme));
    frame.render_widget(block, size);

    let banner = Paragraph::new(Text::from(BANNER))
        .style(styling::banner_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(banner, rows[0]);

    let content = Paragraph::new(Text::from(CONTENT))
        .style(styling::normal_text_style(theme))
        .alignment(Alignment::Center);
    frame.render_widget(content, rows[1]);
}
