//! User profile aggregate and the closed selection sets.
//!
//! The profile accumulates form data across the two wizard steps. Step one
//! contributes free-text fields, step two contributes selections from the
//! closed enumerated sets below. Values outside those sets cannot be
//! constructed.

use fake::Dummy;
use serde::Serialize;

/// Biological sex options offered by step two.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Serialize)]
pub enum Gender {
    #[serde(rename = "masculino")]
    Masculino,
    #[serde(rename = "feminino")]
    Feminino,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Masculino, Gender::Feminino];

    /// Return the label shown in the selector.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Masculino => "Masculino",
            Gender::Feminino => "Feminino",
        }
    }

    /// Return the value sent on the wire.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Masculino => "masculino",
            Gender::Feminino => "feminino",
        }
    }
}

/// Physical activity level options offered by step two. The wire values are
/// the full descriptive strings expected by the service.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Serialize)]
pub enum ActivityLevel {
    #[serde(rename = "Sedentário")]
    Sedentario,
    #[serde(rename = "Levemente ativo (exercícios 1 a 3 vezes na semana)")]
    LevementeAtivo,
    #[serde(rename = "Moderadamente ativo (exercícios 3 a 5 vezes na semana)")]
    ModeradamenteAtivo,
    #[serde(rename = "Altamente ativo (exercícios 5 a 7 dia por semana)")]
    AltamenteAtivo,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 4] = [
        ActivityLevel::Sedentario,
        ActivityLevel::LevementeAtivo,
        ActivityLevel::ModeradamenteAtivo,
        ActivityLevel::AltamenteAtivo,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentario => "Sedentário (pouco ou nenhuma atividade física)",
            ActivityLevel::LevementeAtivo => {
                "Levemente ativo (exercícios 1 a 3 vezes na semana)"
            }
            ActivityLevel::ModeradamenteAtivo => {
                "Moderadamente ativo (exercícios 3 a 5 vezes na semana)"
            }
            ActivityLevel::AltamenteAtivo => {
                "Altamente ativo (exercícios 5 a 7 dia por semana)"
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentario => "Sedentário",
            ActivityLevel::LevementeAtivo => {
                "Levemente ativo (exercícios 1 a 3 vezes na semana)"
            }
            ActivityLevel::ModeradamenteAtivo => {
                "Moderadamente ativo (exercícios 3 a 5 vezes na semana)"
            }
            ActivityLevel::AltamenteAtivo => {
                "Altamente ativo (exercícios 5 a 7 dia por semana)"
            }
        }
    }
}

/// Diet objective options offered by step two.
///
#[derive(Clone, Copy, Debug, Dummy, PartialEq, Eq, Serialize)]
pub enum Objective {
    #[serde(rename = "emagrecer")]
    Emagrecer,
    #[serde(rename = "hipertrofia")]
    Hipertrofia,
    #[serde(rename = "definição")]
    Definicao,
    #[serde(rename = "hipertrofia e definição")]
    HipertrofiaEDefinicao,
}

impl Objective {
    pub const ALL: [Objective; 4] = [
        Objective::Emagrecer,
        Objective::Hipertrofia,
        Objective::Definicao,
        Objective::HipertrofiaEDefinicao,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Objective::Emagrecer => "Emagrecer",
            Objective::Hipertrofia => "Hipertrofia",
            Objective::Definicao => "Definição",
            Objective::HipertrofiaEDefinicao => "Hipertrofia + Definição",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Objective::Emagrecer => "emagrecer",
            Objective::Hipertrofia => "hipertrofia",
            Objective::Definicao => "definição",
            Objective::HipertrofiaEDefinicao => "hipertrofia e definição",
        }
    }
}

/// Validated data produced by step one of the wizard.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepOneData {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
}

/// Validated data produced by step two of the wizard.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepTwoData {
    pub gender: Gender,
    pub level: ActivityLevel,
    pub objective: Objective,
}

/// The aggregate record accumulated across the wizard steps.
///
/// Numeric-intent fields are kept as raw strings; the service receives them
/// exactly as typed. Each `apply_*` call overwrites its own step's fields
/// and leaves the other step untouched.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    pub gender: Option<Gender>,
    pub level: Option<ActivityLevel>,
    pub objective: Option<Objective>,
}

impl UserProfile {
    /// Merge step-one data into the profile.
    ///
    pub fn apply_step_one(&mut self, data: StepOneData) {
        self.name = data.name;
        self.age = data.age;
        self.height = data.height;
        self.weight = data.weight;
    }

    /// Merge step-two data into the profile.
    ///
    pub fn apply_step_two(&mut self, data: StepTwoData) {
        self.gender = Some(data.gender);
        self.level = Some(data.level);
        self.objective = Some(data.objective);
    }

    /// Whether step one has contributed all of its fields.
    ///
    pub fn has_step_one(&self) -> bool {
        !self.name.trim().is_empty()
            && !self.age.trim().is_empty()
            && !self.height.trim().is_empty()
            && !self.weight.trim().is_empty()
    }

    /// Build the request payload, or `None` if any field is still missing.
    ///
    pub fn as_request(&self) -> Option<PlanRequest> {
        if !self.has_step_one() {
            return None;
        }
        Some(PlanRequest {
            name: self.name.clone(),
            age: self.age.clone(),
            gender: self.gender?,
            height: self.height.clone(),
            weight: self.weight.clone(),
            objective: self.objective?,
            level: self.level?,
        })
    }
}

/// Request body for the plan creation endpoint. Every field serializes as a
/// plain string.
///
#[derive(Clone, Debug, Serialize)]
pub struct PlanRequest {
    pub name: String,
    pub age: String,
    pub gender: Gender,
    pub height: String,
    pub weight: String,
    pub objective: Objective,
    pub level: ActivityLevel,
}
