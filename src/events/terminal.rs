use crate::state::{PlanStatus, State, StepTwoFocus, View};
use crate::utils::share;
use anyhow::Result;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(CrosstermEvent::Key(key)) = event::read() {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Tick => {
                state.advance_spinner();
                Ok(true)
            }
            Event::Input(key) => self.handle_key(key, state),
        }
    }

    /// Route a key press according to the visible view.
    ///
    fn handle_key(&self, key: KeyEvent, state: &mut State) -> Result<bool> {
        if key.kind != KeyEventKind::Press {
            return Ok(true);
        }

        // Global bindings first.
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                debug!("Processing exit terminal event '{:?}'...", key);
                return Ok(false);
            }
            (KeyCode::Char('l'), KeyModifiers::CONTROL) => {
                state.toggle_log();
                return Ok(true);
            }
            _ => {}
        }

        match state.current_view() {
            View::Welcome => self.handle_welcome(key, state),
            View::StepOne => self.handle_step_one(key, state),
            View::StepTwo => self.handle_step_two(key, state),
            View::Plan => self.handle_plan(key, state),
        }
    }

    fn handle_welcome(&self, key: KeyEvent, state: &mut State) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => return Ok(false),
            KeyCode::Enter | KeyCode::Char('g') => state.start_wizard(),
            _ => {}
        }
        Ok(true)
    }

    /// Step one is a text form: printable characters go to the focused
    /// field, everything else is navigation.
    ///
    fn handle_step_one(&self, key: KeyEvent, state: &mut State) -> Result<bool> {
        match key.code {
            KeyCode::Esc => state.go_back(),
            KeyCode::Tab | KeyCode::Down => state.step_one_mut().focus_next(),
            KeyCode::BackTab | KeyCode::Up => state.step_one_mut().focus_prev(),
            KeyCode::Backspace => state.step_one_mut().pop_char(),
            KeyCode::Enter => {
                state.submit_step_one();
            }
            KeyCode::Char(c)
                if key.modifiers == KeyModifiers::NONE
                    || key.modifiers == KeyModifiers::SHIFT =>
            {
                state.step_one_mut().push_char(c);
            }
            _ => {}
        }
        Ok(true)
    }

    /// Step two is all closed selectors; keys either navigate selectors or
    /// an open dropdown. Free-text entry is impossible here.
    ///
    fn handle_step_two(&self, key: KeyEvent, state: &mut State) -> Result<bool> {
        let form = state.step_two_mut();
        if form.is_dropdown_open() {
            match key.code {
                KeyCode::Down | KeyCode::Char('j') => form.dropdown_next(),
                KeyCode::Up | KeyCode::Char('k') => form.dropdown_prev(),
                KeyCode::Enter => form.select_highlighted(),
                KeyCode::Esc => form.close_dropdown(),
                _ => {}
            }
            return Ok(true);
        }

        match key.code {
            KeyCode::Esc => state.go_back(),
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => form.focus_prev(),
            KeyCode::Enter => match form.focus() {
                StepTwoFocus::Field(_) => form.open_dropdown(),
                StepTwoFocus::Submit => {
                    if let Err(e) = state.submit_step_two() {
                        // Not reachable through normal navigation; recover
                        // by restarting the wizard from step one.
                        error!("Refusing submission: {}", e);
                        state.restart_after_failure();
                    }
                }
            },
            _ => {}
        }
        Ok(true)
    }

    fn handle_plan(&self, key: KeyEvent, state: &mut State) -> Result<bool> {
        match state.plan_status() {
            PlanStatus::Loading => {
                // The only way out of a pending request is cancelling it.
                if key.code == KeyCode::Esc {
                    state.go_back();
                }
            }
            PlanStatus::Failed => match key.code {
                KeyCode::Char('q') => return Ok(false),
                KeyCode::Enter | KeyCode::Char('r') => state.restart_after_failure(),
                _ => {}
            },
            PlanStatus::Loaded => match key.code {
                KeyCode::Char('q') => return Ok(false),
                KeyCode::Char('s') => self.share_plan(state),
                KeyCode::Enter | KeyCode::Char('n') | KeyCode::Esc => state.restart(),
                _ => {}
            },
        }
        Ok(true)
    }

    /// Export the rendered plan as text. Failures are logged and swallowed;
    /// sharing is best effort and never surfaces to the user.
    ///
    fn share_plan(&self, state: &mut State) {
        let Some(plan) = state.plan().cloned() else {
            return;
        };
        match share::export_plan(&plan) {
            Ok(path) => {
                info!("Plan exported to {}", path.display());
                state.set_share_notice(format!("Dieta exportada para {}", path.display()));
            }
            Err(e) => error!("Failed to export plan: {}", e),
        }
    }
}
