//! Application state management module.
//!
//! This module contains the core state management for the application,
//! including:
//! - Main `State` struct that holds the session data
//! - Navigation types (View, PlanStatus)
//! - Wizard form types and validation
//! - State error handling

mod error;
mod form;
mod navigation;

pub use error::StateError;
pub use form::{StepOneField, StepOneForm, StepTwoField, StepTwoFocus, StepTwoForm};
pub use navigation::{PlanStatus, View};

#[path = "state_impl.rs"]
mod state_impl;

pub use state_impl::State;
