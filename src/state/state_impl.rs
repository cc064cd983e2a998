use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::nutrition::{ApiError, DietPlan, UserProfile};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::layout::Rect;

use super::form::{StepOneForm, StepTwoForm};
use super::navigation::{PlanStatus, View};
use super::StateError;

/// Message shown on the plan view when generation fails, regardless of the
/// underlying cause.
const PLAN_FAILURE_MESSAGE: &str = "Falha ao gerar dieta.";

/// Houses data representative of application state.
///
/// The state owns the aggregate user profile for the session. It has a
/// single writer at any time (the key handler of the visible view), so no
/// locking is needed beyond the `Arc<Mutex<_>>` the app wraps it in.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    terminal_size: Rect,
    spinner_index: usize,
    view_stack: Vec<View>,
    theme: Theme,
    show_log: bool,
    profile: UserProfile,
    step_one: StepOneForm,
    step_two: StepTwoForm,
    plan: Option<DietPlan>,
    plan_error: Option<String>,
    // Monotonic request id; a response is applied only if it carries the
    // current value and the plan view is still active.
    plan_generation: u64,
    plan_in_flight: bool,
    share_notice: Option<String>,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            terminal_size: Rect::default(),
            spinner_index: 0,
            view_stack: vec![View::Welcome],
            theme: Theme::default(),
            show_log: false,
            profile: UserProfile::default(),
            step_one: StepOneForm::default(),
            step_two: StepTwoForm::default(),
            plan: None,
            plan_error: None,
            plan_generation: 0,
            plan_in_flight: false,
            share_notice: None,
        }
    }
}

impl State {
    /// Return new instance wired to the network event channel.
    ///
    pub fn new(net_sender: NetworkEventSender, theme: Theme) -> State {
        State {
            net_sender: Some(net_sender),
            theme,
            ..State::default()
        }
    }

    pub fn set_terminal_size(&mut self, size: Rect) {
        self.terminal_size = size;
    }

    #[allow(dead_code)]
    pub fn terminal_size(&self) -> Rect {
        self.terminal_size
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn advance_spinner(&mut self) {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
    }

    pub fn spinner_index(&self) -> usize {
        self.spinner_index
    }

    pub fn toggle_log(&mut self) {
        self.show_log = !self.show_log;
    }

    pub fn show_log(&self) -> bool {
        self.show_log
    }

    /// Return the currently visible view.
    ///
    pub fn current_view(&self) -> View {
        *self.view_stack.last().unwrap_or(&View::Welcome)
    }

    /// Pop the current view. Leaving the plan view while a request is
    /// pending invalidates that request so a late response is dropped.
    ///
    pub fn go_back(&mut self) {
        if self.view_stack.len() <= 1 {
            return;
        }
        if self.current_view() == View::Plan && self.plan_in_flight {
            debug!("Leaving plan view with request in flight; invalidating.");
            self.plan_generation += 1;
            self.plan_in_flight = false;
        }
        self.view_stack.pop();
    }

    pub fn step_one(&self) -> &StepOneForm {
        &self.step_one
    }

    pub fn step_one_mut(&mut self) -> &mut StepOneForm {
        &mut self.step_one
    }

    pub fn step_two(&self) -> &StepTwoForm {
        &self.step_two
    }

    pub fn step_two_mut(&mut self) -> &mut StepTwoForm {
        &mut self.step_two
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Begin a fresh wizard session from the welcome view. The profile and
    /// both forms are reset to their defaults.
    ///
    pub fn start_wizard(&mut self) {
        info!("Starting a new diet wizard session.");
        self.profile = UserProfile::default();
        self.step_one = StepOneForm::default();
        self.step_two = StepTwoForm::default();
        self.plan = None;
        self.plan_error = None;
        self.share_notice = None;
        self.view_stack = vec![View::Welcome, View::StepOne];
    }

    /// Validate step one and, on success, merge it into the profile and
    /// advance to step two. Returns whether navigation advanced.
    ///
    pub fn submit_step_one(&mut self) -> bool {
        match self.step_one.validate() {
            Ok(data) => {
                self.profile.apply_step_one(data);
                self.step_one.set_errors(Default::default());
                self.view_stack.push(View::StepTwo);
                true
            }
            Err(errors) => {
                debug!("Step one rejected with {} empty fields.", errors.len());
                self.step_one.set_errors(errors);
                false
            }
        }
    }

    /// Validate step two and, on success, merge it into the profile and
    /// kick off plan generation. Validation failures stay inline and return
    /// `Ok`; reaching this point without step one is a flow error.
    ///
    pub fn submit_step_two(&mut self) -> Result<(), StateError> {
        if !self.profile.has_step_one() {
            return Err(StateError::StepOneIncomplete);
        }
        match self.step_two.validate() {
            Ok(data) => {
                self.profile.apply_step_two(data);
                self.step_two.set_errors(Default::default());
                self.begin_plan_request();
                Ok(())
            }
            Err(errors) => {
                debug!("Step two rejected with {} missing selections.", errors.len());
                self.step_two.set_errors(errors);
                Ok(())
            }
        }
    }

    /// Push the plan view and dispatch a generation request for the current
    /// profile snapshot.
    ///
    fn begin_plan_request(&mut self) {
        self.plan = None;
        self.plan_error = None;
        self.share_notice = None;
        self.plan_generation += 1;
        self.plan_in_flight = true;
        self.view_stack.push(View::Plan);
        self.send_network_event(NetworkEvent::GeneratePlan {
            generation: self.plan_generation,
        });
    }

    /// Apply the outcome of a plan request. Stale responses (an older
    /// generation, or the plan view no longer active) are dropped.
    ///
    pub fn apply_plan_result(&mut self, generation: u64, result: Result<DietPlan, ApiError>) {
        if generation != self.plan_generation {
            debug!(
                "Dropping stale plan response (generation {} != {}).",
                generation, self.plan_generation
            );
            return;
        }
        if self.current_view() != View::Plan {
            debug!("Dropping plan response for an inactive view.");
            return;
        }
        self.plan_in_flight = false;
        match result {
            Ok(plan) => {
                info!("Plan '{}' ready for display.", plan.name);
                self.plan = Some(plan);
                self.plan_error = None;
            }
            Err(e) => {
                error!("Plan generation failed: {}", e);
                self.plan = None;
                self.plan_error = Some(PLAN_FAILURE_MESSAGE.to_string());
            }
        }
    }

    pub fn plan(&self) -> Option<&DietPlan> {
        self.plan.as_ref()
    }

    pub fn plan_error(&self) -> Option<&str> {
        self.plan_error.as_deref()
    }

    pub fn plan_status(&self) -> PlanStatus {
        if self.plan_in_flight {
            PlanStatus::Loading
        } else if self.plan_error.is_some() {
            PlanStatus::Failed
        } else {
            PlanStatus::Loaded
        }
    }

    pub fn current_generation(&self) -> u64 {
        self.plan_generation
    }

    /// After a failed generation, route back to step one for a full
    /// restart. The session starts over; there is no resume from step two.
    ///
    pub fn restart_after_failure(&mut self) {
        info!("Restarting wizard after failed plan generation.");
        self.start_wizard();
    }

    /// Return to the entry view, discarding the session.
    ///
    pub fn restart(&mut self) {
        self.profile = UserProfile::default();
        self.step_one = StepOneForm::default();
        self.step_two = StepTwoForm::default();
        self.plan = None;
        self.plan_error = None;
        self.share_notice = None;
        self.view_stack = vec![View::Welcome];
    }

    pub fn set_share_notice(&mut self, notice: String) {
        self.share_notice = Some(notice);
    }

    pub fn share_notice(&self) -> Option<&str> {
        self.share_notice.as_deref()
    }

    /// Send an event to the network thread, logging when no channel is
    /// wired (unit tests).
    ///
    fn send_network_event(&self, event: NetworkEvent) {
        match &self.net_sender {
            Some(sender) => {
                if let Err(e) = sender.send(event) {
                    error!("Failed to dispatch network event: {}", e);
                }
            }
            None => warn!("No network channel wired; dropping event."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{ActivityLevel, Gender, Meal, Objective};

    fn fill_step_one(state: &mut State) {
        let form = state.step_one_mut();
        form.name = "Ana".to_string();
        form.age = "30".to_string();
        form.height = "1.65".to_string();
        form.weight = "60".to_string();
    }

    fn fill_step_two(state: &mut State) {
        let form = state.step_two_mut();
        form.gender = Some(Gender::Feminino);
        form.level = Some(ActivityLevel::Sedentario);
        form.objective = Some(Objective::Emagrecer);
    }

    fn sample_plan() -> DietPlan {
        DietPlan {
            name: "Ana".to_string(),
            gender: String::new(),
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            objective: "emagrecer".to_string(),
            meals: vec![Meal {
                name: "Almoço".to_string(),
                time: "12:00".to_string(),
                foods: vec!["Frango".to_string()],
            }],
            supplements: vec![],
        }
    }

    #[test]
    fn wizard_walkthrough_aggregates_the_profile() {
        let mut state = State::default();
        state.start_wizard();
        assert_eq!(state.current_view(), View::StepOne);

        fill_step_one(&mut state);
        assert!(state.submit_step_one());
        assert_eq!(state.current_view(), View::StepTwo);

        fill_step_two(&mut state);
        state.submit_step_two().unwrap();
        assert_eq!(state.current_view(), View::Plan);
        assert_eq!(state.plan_status(), PlanStatus::Loading);

        let profile = state.profile();
        assert_eq!(profile.name, "Ana");
        assert_eq!(profile.gender, Some(Gender::Feminino));
        assert!(profile.as_request().is_some());
    }

    #[test]
    fn invalid_step_one_does_not_advance() {
        let mut state = State::default();
        state.start_wizard();
        assert!(!state.submit_step_one());
        assert_eq!(state.current_view(), View::StepOne);
        assert!(state
            .step_one()
            .error(crate::state::StepOneField::Name)
            .is_some());
    }

    #[test]
    fn step_two_without_step_one_is_a_flow_error() {
        let mut state = State::default();
        state.start_wizard();
        fill_step_two(&mut state);
        assert!(matches!(
            state.submit_step_two(),
            Err(StateError::StepOneIncomplete)
        ));
    }

    #[test]
    fn incomplete_step_two_stays_with_inline_errors() {
        let mut state = State::default();
        state.start_wizard();
        fill_step_one(&mut state);
        state.submit_step_one();
        state.submit_step_two().unwrap();
        assert_eq!(state.current_view(), View::StepTwo);
        assert!(state
            .step_two()
            .error(crate::state::StepTwoField::Gender)
            .is_some());
    }

    #[test]
    fn plan_result_is_applied_for_the_current_generation() {
        let mut state = State::default();
        state.start_wizard();
        fill_step_one(&mut state);
        state.submit_step_one();
        fill_step_two(&mut state);
        state.submit_step_two().unwrap();

        let generation = state.current_generation();
        state.apply_plan_result(generation, Ok(sample_plan()));
        assert_eq!(state.plan_status(), PlanStatus::Loaded);
        assert_eq!(state.plan().unwrap().meals[0].name, "Almoço");
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut state = State::default();
        state.start_wizard();
        fill_step_one(&mut state);
        state.submit_step_one();
        fill_step_two(&mut state);
        state.submit_step_two().unwrap();

        let stale = state.current_generation();
        // Cancel and resubmit; the first request is now stale.
        state.go_back();
        state.submit_step_two().unwrap();
        state.apply_plan_result(stale, Ok(sample_plan()));
        assert_eq!(state.plan_status(), PlanStatus::Loading);
        assert!(state.plan().is_none());
    }

    #[test]
    fn response_after_navigating_away_is_dropped() {
        let mut state = State::default();
        state.start_wizard();
        fill_step_one(&mut state);
        state.submit_step_one();
        fill_step_two(&mut state);
        state.submit_step_two().unwrap();

        let generation = state.current_generation();
        state.go_back();
        assert_eq!(state.current_view(), View::StepTwo);
        state.apply_plan_result(generation, Ok(sample_plan()));
        assert!(state.plan().is_none());
    }

    #[test]
    fn failed_generation_shows_the_generic_message() {
        let mut state = State::default();
        state.start_wizard();
        fill_step_one(&mut state);
        state.submit_step_one();
        fill_step_two(&mut state);
        state.submit_step_two().unwrap();

        let generation = state.current_generation();
        state.apply_plan_result(generation, Err(ApiError::Status { status: 500 }));
        assert_eq!(state.plan_status(), PlanStatus::Failed);
        assert_eq!(state.plan_error(), Some("Falha ao gerar dieta."));
    }

    #[test]
    fn restart_after_failure_goes_back_to_step_one_with_a_fresh_profile() {
        let mut state = State::default();
        state.start_wizard();
        fill_step_one(&mut state);
        state.submit_step_one();
        fill_step_two(&mut state);
        state.submit_step_two().unwrap();
        state.apply_plan_result(
            state.current_generation(),
            Err(ApiError::MalformedResponse("empty body".to_string())),
        );

        state.restart_after_failure();
        assert_eq!(state.current_view(), View::StepOne);
        assert_eq!(*state.profile(), UserProfile::default());
        assert!(state.plan_error().is_none());
    }

    #[test]
    fn restart_discards_the_session() {
        let mut state = State::default();
        state.start_wizard();
        fill_step_one(&mut state);
        state.submit_step_one();
        state.restart();
        assert_eq!(state.current_view(), View::Welcome);
        assert_eq!(*state.profile(), UserProfile::default());
    }

    #[test]
    fn spinner_wraps_around() {
        let mut state = State::default();
        for _ in 0..SPINNER_FRAME_COUNT {
            state.advance_spinner();
        }
        assert_eq!(state.spinner_index(), 0);
    }
}
