//! Wire model for the diet plan returned by the service.

use fake::Dummy;
use serde::Deserialize;

/// A single meal of the plan. Meal order is meaningful and preserved as
/// received; the renderer never re-sorts.
///
#[derive(Clone, Debug, Deserialize, Dummy, PartialEq, Eq)]
pub struct Meal {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "horario")]
    pub time: String,
    #[serde(rename = "alimentos")]
    pub foods: Vec<String>,
}

/// The structured plan returned by `POST /create`.
///
/// `sexo`, `idade`, `altura` and `peso` are part of the wire contract but
/// not displayed; they are optional on deserialization. The remaining
/// fields are required, so an empty or unrelated body fails to map.
///
#[derive(Clone, Debug, Deserialize, Dummy, PartialEq, Eq)]
pub struct DietPlan {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "sexo", default)]
    pub gender: String,
    #[serde(rename = "idade", default)]
    pub age: String,
    #[serde(rename = "altura", default)]
    pub height: String,
    #[serde(rename = "peso", default)]
    pub weight: String,
    #[serde(rename = "objetivo")]
    pub objective: String,
    #[serde(rename = "refeicoes")]
    pub meals: Vec<Meal>,
    #[serde(rename = "suplementos")]
    pub supplements: Vec<String>,
}
