use crate::nutrition::Nutrition;
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    /// Generate a plan for the profile snapshot tagged with the request
    /// generation it belongs to.
    GeneratePlan { generation: u64 },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    nutrition: &'a Nutrition,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, nutrition: &'a Nutrition) -> Self {
        Handler { state, nutrition }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::GeneratePlan { generation } => self.generate_plan(generation).await?,
        }
        Ok(())
    }

    /// Submit the aggregated profile and apply the outcome to state. The
    /// state drops the result if the request generation is no longer
    /// current.
    ///
    async fn generate_plan(&mut self, generation: u64) -> Result<()> {
        info!("Generating diet plan (request {})...", generation);
        let profile = {
            let state = self.state.lock().await;
            state.profile().clone()
        };

        let result = self.nutrition.create_plan(&profile).await;
        match &result {
            Ok(plan) => info!(
                "Received plan '{}' with {} meals.",
                plan.name,
                plan.meals.len()
            ),
            Err(e) => error!("Plan request {} failed: {}", generation, e),
        }

        let mut state = self.state.lock().await;
        state.apply_plan_result(generation, result);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::{ActivityLevel, Gender, Objective};
    use crate::state::PlanStatus;
    use httpmock::MockServer;
    use serde_json::json;

    async fn state_with_submitted_wizard() -> Arc<Mutex<State>> {
        let mut state = State::default();
        state.start_wizard();
        {
            let form = state.step_one_mut();
            form.name = "Ana".to_string();
            form.age = "30".to_string();
            form.height = "1.65".to_string();
            form.weight = "60".to_string();
        }
        state.submit_step_one();
        {
            let form = state.step_two_mut();
            form.gender = Some(Gender::Feminino);
            form.level = Some(ActivityLevel::Sedentario);
            form.objective = Some(Objective::Emagrecer);
        }
        state.submit_step_two().unwrap();
        Arc::new(Mutex::new(state))
    }

    #[tokio::test]
    async fn generate_plan_applies_the_response() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/create");
                then.status(200).json_body(json!({
                    "nome": "Ana",
                    "objetivo": "emagrecer",
                    "refeicoes": [],
                    "suplementos": []
                }));
            })
            .await;

        let state = state_with_submitted_wizard().await;
        let generation = state.lock().await.current_generation();
        let nutrition = Nutrition::new(&server.base_url());
        let mut handler = Handler::new(&state, &nutrition);
        handler.handle(Event::GeneratePlan { generation }).await?;

        let state = state.lock().await;
        assert_eq!(state.plan_status(), PlanStatus::Loaded);
        assert_eq!(state.plan().unwrap().name, "Ana");
        Ok(())
    }

    #[tokio::test]
    async fn generate_plan_failure_is_surfaced_as_a_failed_status() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/create");
                then.status(502);
            })
            .await;

        let state = state_with_submitted_wizard().await;
        let generation = state.lock().await.current_generation();
        let nutrition = Nutrition::new(&server.base_url());
        let mut handler = Handler::new(&state, &nutrition);
        handler.handle(Event::GeneratePlan { generation }).await?;

        let state = state.lock().await;
        assert_eq!(state.plan_status(), PlanStatus::Failed);
        assert!(state.plan_error().is_some());
        Ok(())
    }

    #[tokio::test]
    async fn stale_generation_leaves_state_untouched() -> Result<()> {
        let server = MockServer::start();
        server
            .mock_async(|when, then| {
                when.method("POST").path("/create");
                then.status(200).json_body(json!({
                    "nome": "Ana",
                    "objetivo": "emagrecer",
                    "refeicoes": [],
                    "suplementos": []
                }));
            })
            .await;

        let state = state_with_submitted_wizard().await;
        let stale = state.lock().await.current_generation() - 1;
        let nutrition = Nutrition::new(&server.base_url());
        let mut handler = Handler::new(&state, &nutrition);
        handler.handle(Event::GeneratePlan { generation: stale }).await?;

        let state = state.lock().await;
        assert_eq!(state.plan_status(), PlanStatus::Loading);
        assert!(state.plan().is_none());
        Ok(())
    }
}
