use super::Frame;
use crate::state::{PlanStatus, State, View};
use crate::ui::widgets::styling;
use ratatui::{layout::Rect, widgets::Paragraph};

/// Return the key hints for the current view.
///
fn hints(state: &State) -> &'static str {
    match state.current_view() {
        View::Welcome => " Enter: gerar dieta | q: sair | Ctrl+L: log",
        View::StepOne => " Tab/setas: campos | Enter: avançar | Esc: voltar | Ctrl+C: sair",
        View::StepTwo => {
            if state.step_two().is_dropdown_open() {
                " setas: opções | Enter: selecionar | Esc: fechar"
            } else {
                " setas: campos | Enter: abrir/confirmar | Esc: voltar"
            }
        }
        View::Plan => match state.plan_status() {
            PlanStatus::Loading => " Esc: cancelar",
            PlanStatus::Failed => " Enter: tente novamente | q: sair",
            PlanStatus::Loaded => " s: compartilhar | Enter: gerar nova dieta | q: sair",
        },
    }
}

/// Render the single-line footer with key hints.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.theme();
    let widget = Paragraph::new(hints(state)).style(styling::muted_text_style(theme));
    frame.render_widget(widget, size);
}
