mod client;
mod error;
mod plan;
mod profile;

pub use error::ApiError;
pub use plan::{DietPlan, Meal};
pub use profile::{
    ActivityLevel, Gender, Objective, PlanRequest, StepOneData, StepTwoData, UserProfile,
};

use client::Client;
use log::*;

/// Responsible for asynchronous interaction with the diet-generation
/// service, including transformation of response data into
/// explicitly-defined types.
///
pub struct Nutrition {
    client: Client,
}

impl Nutrition {
    /// Returns a new instance for the given service base URL.
    ///
    pub fn new(base_url: &str) -> Nutrition {
        debug!("Initializing nutrition client for {}...", base_url);
        Nutrition {
            client: Client::new(base_url),
        }
    }

    /// Submit the aggregated profile and await the generated plan.
    ///
    /// Single attempt, no retry. Fails with `MissingProfile` before any
    /// request is made if the profile never completed step one or two.
    ///
    pub async fn create_plan(&self, profile: &UserProfile) -> Result<DietPlan, ApiError> {
        let request = profile.as_request().ok_or(ApiError::MissingProfile)?;
        debug!("Requesting diet plan for '{}'...", request.name);

        let response = self.client.post("create", &request).await?;
        let status = response.status();
        if !status.is_success() {
            error!("Plan request failed with status {}", status);
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let plan: DietPlan = serde_json::from_slice(&bytes).map_err(|e| {
            error!("Failed to deserialize plan response: {}", e);
            ApiError::MalformedResponse(e.to_string())
        })?;

        debug!(
            "Received plan '{}' with {} meals and {} supplements.",
            plan.name,
            plan.meals.len(),
            plan.supplements.len()
        );
        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use serde_json::json;

    fn complete_profile() -> UserProfile {
        let mut profile = UserProfile::default();
        profile.apply_step_one(StepOneData {
            name: "Ana".to_string(),
            age: "30".to_string(),
            height: "1.65".to_string(),
            weight: "60".to_string(),
        });
        profile.apply_step_two(StepTwoData {
            gender: Gender::Feminino,
            level: ActivityLevel::Sedentario,
            objective: Objective::Emagrecer,
        });
        profile
    }

    #[tokio::test]
    async fn create_plan_success() -> Result<(), ApiError> {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/create").json_body(json!({
                    "name": "Ana",
                    "age": "30",
                    "gender": "feminino",
                    "height": "1.65",
                    "weight": "60",
                    "objective": "emagrecer",
                    "level": "Sedentário",
                }));
                then.status(200).json_body(json!({
                    "nome": "Ana",
                    "sexo": "feminino",
                    "idade": "30",
                    "altura": "1.65",
                    "peso": "60",
                    "objetivo": "emagrecer",
                    "refeicoes": [
                        {
                            "horario": "08:00",
                            "nome": "Café da manhã",
                            "alimentos": ["Ovos mexidos", "Pão integral"]
                        }
                    ],
                    "suplementos": ["Whey protein"]
                }));
            })
            .await;

        let nutrition = Nutrition::new(&server.base_url());
        let plan = nutrition.create_plan(&complete_profile()).await?;
        mock.assert_async().await;
        assert_eq!(plan.name, "Ana");
        assert_eq!(plan.objective, "emagrecer");
        assert_eq!(plan.meals[0].time, "08:00");
        assert_eq!(plan.supplements, vec!["Whey protein"]);
        Ok(())
    }

    #[tokio::test]
    async fn create_plan_empty_object_is_malformed() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/create");
                then.status(200).json_body(json!({}));
            })
            .await;

        let nutrition = Nutrition::new(&server.base_url());
        let result = nutrition.create_plan(&complete_profile()).await;
        mock.assert_async().await;
        assert!(matches!(result, Err(ApiError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn create_plan_server_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/create");
                then.status(500);
            })
            .await;

        let nutrition = Nutrition::new(&server.base_url());
        let result = nutrition.create_plan(&complete_profile()).await;
        mock.assert_async().await;
        assert!(matches!(result, Err(ApiError::Status { status: 500 })));
    }

    #[tokio::test]
    async fn create_plan_incomplete_profile_never_hits_network() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/create");
                then.status(200);
            })
            .await;

        let mut profile = complete_profile();
        profile.age = String::new();

        let nutrition = Nutrition::new(&server.base_url());
        let result = nutrition.create_plan(&profile).await;
        assert!(matches!(result, Err(ApiError::MissingProfile)));
        assert_eq!(mock.hits_async().await, 0);
    }

    #[tokio::test]
    async fn create_plan_unreachable_service_is_a_transport_error() {
        // Reserved port with nothing listening.
        let nutrition = Nutrition::new("http://127.0.0.1:9");
        let result = nutrition.create_plan(&complete_profile()).await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
