//! Wizard form state and per-step validation.
//!
//! Validation is a pure check over the typed form structs: every field in
//! scope must be non-empty after trimming, and nothing else. Numeric-intent
//! fields are deliberately not parsed; the service receives them as typed.
//! Failures come back as a field-to-message map rendered inline.

use crate::nutrition::{ActivityLevel, Gender, Objective, StepOneData, StepTwoData};
use std::collections::HashMap;

/// Fields collected by step one.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum StepOneField {
    Name,
    Age,
    Height,
    Weight,
}

impl StepOneField {
    pub const ALL: [StepOneField; 4] = [
        StepOneField::Name,
        StepOneField::Age,
        StepOneField::Height,
        StepOneField::Weight,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StepOneField::Name => "Nome",
            StepOneField::Age => "Idade",
            StepOneField::Height => "Altura",
            StepOneField::Weight => "Peso",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            StepOneField::Name => "Digite o seu nome",
            StepOneField::Age => "Exemplo: 20",
            StepOneField::Height => "Exemplo: 1.70",
            StepOneField::Weight => "Exemplo: 75.5",
        }
    }

    /// Localized message shown when the field is left empty.
    ///
    pub fn required_message(&self) -> &'static str {
        match self {
            StepOneField::Name => "O nome é obrigatório",
            StepOneField::Age => "A idade é obrigatória",
            StepOneField::Height => "A altura é obrigatória",
            StepOneField::Weight => "O peso é obrigatório",
        }
    }
}

/// Editable state of the step-one form.
///
#[derive(Clone, Debug)]
pub struct StepOneForm {
    pub name: String,
    pub age: String,
    pub height: String,
    pub weight: String,
    focus: StepOneField,
    errors: HashMap<StepOneField, String>,
}

impl Default for StepOneForm {
    fn default() -> StepOneForm {
        StepOneForm {
            name: String::new(),
            age: String::new(),
            height: String::new(),
            weight: String::new(),
            focus: StepOneField::Name,
            errors: HashMap::new(),
        }
    }
}

impl StepOneForm {
    pub fn focus(&self) -> StepOneField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        let index = StepOneField::ALL.iter().position(|f| *f == self.focus);
        let next = index.map(|i| (i + 1) % StepOneField::ALL.len()).unwrap_or(0);
        self.focus = StepOneField::ALL[next];
    }

    pub fn focus_prev(&mut self) {
        let index = StepOneField::ALL
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0);
        let prev = (index + StepOneField::ALL.len() - 1) % StepOneField::ALL.len();
        self.focus = StepOneField::ALL[prev];
    }

    pub fn value(&self, field: StepOneField) -> &str {
        match field {
            StepOneField::Name => &self.name,
            StepOneField::Age => &self.age,
            StepOneField::Height => &self.height,
            StepOneField::Weight => &self.weight,
        }
    }

    fn value_mut(&mut self, field: StepOneField) -> &mut String {
        match field {
            StepOneField::Name => &mut self.name,
            StepOneField::Age => &mut self.age,
            StepOneField::Height => &mut self.height,
            StepOneField::Weight => &mut self.weight,
        }
    }

    /// Append a character to the focused field. Typing clears that field's
    /// inline error.
    ///
    pub fn push_char(&mut self, c: char) {
        let focus = self.focus;
        self.value_mut(focus).push(c);
        self.errors.remove(&focus);
    }

    /// Remove the last character of the focused field.
    ///
    pub fn pop_char(&mut self) {
        let focus = self.focus;
        self.value_mut(focus).pop();
    }

    pub fn error(&self, field: StepOneField) -> Option<&str> {
        self.errors.get(&field).map(|m| m.as_str())
    }

    /// Check every field for trimmed non-emptiness. Pure: does not touch
    /// the inline error map.
    ///
    pub fn validate(&self) -> Result<StepOneData, HashMap<StepOneField, String>> {
        let mut errors = HashMap::new();
        for field in StepOneField::ALL {
            if self.value(field).trim().is_empty() {
                errors.insert(field, field.required_message().to_string());
            }
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(StepOneData {
            name: self.name.clone(),
            age: self.age.clone(),
            height: self.height.clone(),
            weight: self.weight.clone(),
        })
    }

    pub fn set_errors(&mut self, errors: HashMap<StepOneField, String>) {
        self.errors = errors;
    }
}

/// Fields collected by step two. Each one is a closed selection.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum StepTwoField {
    Gender,
    Level,
    Objective,
}

impl StepTwoField {
    pub const ALL: [StepTwoField; 3] = [
        StepTwoField::Gender,
        StepTwoField::Level,
        StepTwoField::Objective,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StepTwoField::Gender => "Sexo",
            StepTwoField::Level => "Nível de atividade física",
            StepTwoField::Objective => "Objetivo",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            StepTwoField::Gender => "Selecione o seu sexo",
            StepTwoField::Level => "Selecione o seu nível de atividade física",
            StepTwoField::Objective => "Selecione o objetivo",
        }
    }

    pub fn required_message(&self) -> &'static str {
        match self {
            StepTwoField::Gender => "O sexo é obrigatório",
            StepTwoField::Level => "Selecione seu nível de atividade física",
            StepTwoField::Objective => "Selecione seu objetivo",
        }
    }
}

/// What the step-two cursor is on: one of the selectors or the submit
/// action.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StepTwoFocus {
    Field(StepTwoField),
    Submit,
}

/// Editable state of the step-two form. Selections come from the closed
/// enumerated sets, so an out-of-set value is unrepresentable here.
///
#[derive(Clone, Debug)]
pub struct StepTwoForm {
    pub gender: Option<Gender>,
    pub level: Option<ActivityLevel>,
    pub objective: Option<Objective>,
    focus: StepTwoFocus,
    dropdown_open: bool,
    dropdown_index: usize,
    errors: HashMap<StepTwoField, String>,
}

impl Default for StepTwoForm {
    fn default() -> StepTwoForm {
        StepTwoForm {
            gender: None,
            level: None,
            objective: None,
            focus: StepTwoFocus::Field(StepTwoField::Gender),
            dropdown_open: false,
            dropdown_index: 0,
            errors: HashMap::new(),
        }
    }
}

impl StepTwoForm {
    pub fn focus(&self) -> StepTwoFocus {
        self.focus
    }

    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    pub fn dropdown_index(&self) -> usize {
        self.dropdown_index
    }

    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            StepTwoFocus::Field(StepTwoField::Gender) => StepTwoFocus::Field(StepTwoField::Level),
            StepTwoFocus::Field(StepTwoField::Level) => {
                StepTwoFocus::Field(StepTwoField::Objective)
            }
            StepTwoFocus::Field(StepTwoField::Objective) => StepTwoFocus::Submit,
            StepTwoFocus::Submit => StepTwoFocus::Field(StepTwoField::Gender),
        };
    }

    pub fn focus_prev(&mut self) {
        self.focus = match self.focus {
            StepTwoFocus::Field(StepTwoField::Gender) => StepTwoFocus::Submit,
            StepTwoFocus::Field(StepTwoField::Level) => StepTwoFocus::Field(StepTwoField::Gender),
            StepTwoFocus::Field(StepTwoField::Objective) => {
                StepTwoFocus::Field(StepTwoField::Level)
            }
            StepTwoFocus::Submit => StepTwoFocus::Field(StepTwoField::Objective),
        };
    }

    /// Number of options for a selector.
    ///
    pub fn option_count(field: StepTwoField) -> usize {
        match field {
            StepTwoField::Gender => Gender::ALL.len(),
            StepTwoField::Level => ActivityLevel::ALL.len(),
            StepTwoField::Objective => Objective::ALL.len(),
        }
    }

    /// Option labels for a selector, in display order.
    ///
    pub fn option_labels(field: StepTwoField) -> Vec<&'static str> {
        match field {
            StepTwoField::Gender => Gender::ALL.iter().map(|g| g.label()).collect(),
            StepTwoField::Level => ActivityLevel::ALL.iter().map(|l| l.label()).collect(),
            StepTwoField::Objective => Objective::ALL.iter().map(|o| o.label()).collect(),
        }
    }

    /// Label of the current selection, if any.
    ///
    pub fn selected_label(&self, field: StepTwoField) -> Option<&'static str> {
        match field {
            StepTwoField::Gender => self.gender.map(|g| g.label()),
            StepTwoField::Level => self.level.map(|l| l.label()),
            StepTwoField::Objective => self.objective.map(|o| o.label()),
        }
    }

    /// Open the dropdown for the focused selector, starting at the current
    /// selection.
    ///
    pub fn open_dropdown(&mut self) {
        if let StepTwoFocus::Field(field) = self.focus {
            self.dropdown_index = match field {
                StepTwoField::Gender => self
                    .gender
                    .and_then(|g| Gender::ALL.iter().position(|o| *o == g)),
                StepTwoField::Level => self
                    .level
                    .and_then(|l| ActivityLevel::ALL.iter().position(|o| *o == l)),
                StepTwoField::Objective => self
                    .objective
                    .and_then(|s| Objective::ALL.iter().position(|o| *o == s)),
            }
            .unwrap_or(0);
            self.dropdown_open = true;
        }
    }

    pub fn close_dropdown(&mut self) {
        self.dropdown_open = false;
    }

    pub fn dropdown_next(&mut self) {
        if let StepTwoFocus::Field(field) = self.focus {
            let count = Self::option_count(field);
            self.dropdown_index = (self.dropdown_index + 1) % count;
        }
    }

    pub fn dropdown_prev(&mut self) {
        if let StepTwoFocus::Field(field) = self.focus {
            let count = Self::option_count(field);
            self.dropdown_index = (self.dropdown_index + count - 1) % count;
        }
    }

    /// Commit the highlighted option to the focused selector and close the
    /// dropdown.
    ///
    pub fn select_highlighted(&mut self) {
        if let StepTwoFocus::Field(field) = self.focus {
            match field {
                StepTwoField::Gender => {
                    self.gender = Gender::ALL.get(self.dropdown_index).copied();
                }
                StepTwoField::Level => {
                    self.level = ActivityLevel::ALL.get(self.dropdown_index).copied();
                }
                StepTwoField::Objective => {
                    self.objective = Objective::ALL.get(self.dropdown_index).copied();
                }
            }
            self.errors.remove(&field);
            self.dropdown_open = false;
        }
    }

    pub fn error(&self, field: StepTwoField) -> Option<&str> {
        self.errors.get(&field).map(|m| m.as_str())
    }

    /// Check that every selector has a value. Pure: does not touch the
    /// inline error map.
    ///
    pub fn validate(&self) -> Result<StepTwoData, HashMap<StepTwoField, String>> {
        let mut errors = HashMap::new();
        if self.gender.is_none() {
            errors.insert(
                StepTwoField::Gender,
                StepTwoField::Gender.required_message().to_string(),
            );
        }
        if self.level.is_none() {
            errors.insert(
                StepTwoField::Level,
                StepTwoField::Level.required_message().to_string(),
            );
        }
        if self.objective.is_none() {
            errors.insert(
                StepTwoField::Objective,
                StepTwoField::Objective.required_message().to_string(),
            );
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(StepTwoData {
            // Unwraps guarded by the checks above.
            gender: self.gender.unwrap(),
            level: self.level.unwrap(),
            objective: self.objective.unwrap(),
        })
    }

    pub fn set_errors(&mut self, errors: HashMap<StepTwoField, String>) {
        self.errors = errors;
    }
}
